// ============================================================================
// Roots
// Square, cube and n-th roots by integer Newton iteration
// ============================================================================

use crate::engine::Context;
use crate::numeric::kernel::{inth_root, isqrt, pow10, IterationLimits};
use crate::numeric::{Decimal, DecimalError, DecimalResult};
use num_bigint::BigInt;
use num_traits::{Signed, Zero};

/// `sqrt(x)` for a raw `x >= 0` at `scale`, as a raw value at the same scale.
pub(crate) fn sqrt_raw(x: &BigInt, scale: u32, limits: IterationLimits) -> DecimalResult<BigInt> {
    isqrt(&(x * pow10(scale)), limits)
}

/// `x^(1/k)` for raw `x` at `scale`. Odd roots of negative values are negative.
pub(crate) fn nth_root_raw(
    x: &BigInt,
    k: u32,
    scale: u32,
    limits: IterationLimits,
) -> DecimalResult<BigInt> {
    if x.is_negative() && k % 2 == 0 {
        return Err(DecimalError::DomainError("even root of a negative value"));
    }
    let shift = scale
        .checked_mul(k - 1)
        .ok_or(DecimalError::RangeError("root order too large"))?;
    let radicand = x.abs() * pow10(shift);
    let root = inth_root(&radicand, k, limits)?;
    Ok(if x.is_negative() { -root } else { root })
}

impl Decimal {
    /// Square root at this value's precision.
    ///
    /// # Errors
    /// Returns `DomainError` for negative values.
    pub fn sqrt(&self, ctx: &Context) -> DecimalResult<Decimal> {
        if self.is_negative() {
            return Err(DecimalError::DomainError("square root of a negative value"));
        }
        let working = self.precision() + ctx.config().extra_precision;
        let raw = sqrt_raw(&self.raw_at(working), working, ctx.config().root_limits())?;
        Ok(ctx.finish(&raw, working, self.precision()))
    }

    /// Cube root; defined for negative values.
    pub fn cbrt(&self, ctx: &Context) -> DecimalResult<Decimal> {
        self.nth_root(3, ctx)
    }

    /// `n`-th root. A negative `n` yields the reciprocal of the `|n|`-th root.
    ///
    /// # Errors
    /// - `DomainError` for `n = 0` or an even root of a negative value
    /// - `DivisionByZero` for a negative order applied to zero
    pub fn nth_root(&self, n: i64, ctx: &Context) -> DecimalResult<Decimal> {
        if n == 0 {
            return Err(DecimalError::DomainError("zero-order root"));
        }
        let k = u32::try_from(n.unsigned_abs())
            .map_err(|_| DecimalError::RangeError("root order too large"))?;

        let working = self.precision() + ctx.config().extra_precision;
        let x = self.raw_at(working);
        let mut raw = if k == 1 {
            x
        } else if k == 2 {
            if x.is_negative() {
                return Err(DecimalError::DomainError("even root of a negative value"));
            }
            sqrt_raw(&x, working, ctx.config().root_limits())?
        } else {
            nth_root_raw(&x, k, working, ctx.config().root_limits())?
        };

        if n < 0 {
            if raw.is_zero() {
                return Err(DecimalError::DivisionByZero);
            }
            raw = pow10(working * 2) / raw;
        }
        Ok(ctx.finish(&raw, working, self.precision()))
    }
}
