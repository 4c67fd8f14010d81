// ============================================================================
// Combinatorics
// Factorials and binomial coefficients
// ============================================================================

use super::gamma::{factorial_exact, gamma};
use crate::engine::Context;
use crate::numeric::kernel::{fx_mul, pow10};
use crate::numeric::{Decimal, DecimalError, DecimalResult};
use num_bigint::BigInt;
use num_traits::{One, ToPrimitive};

/// `n!` for non-negative integers, `Γ(n + 1)` for everything else.
///
/// # Errors
/// Returns `DomainError` for negative integers.
pub fn factorial(n: &Decimal, ctx: &Context) -> DecimalResult<Decimal> {
    if n.is_integer() {
        if n.is_negative() {
            return Err(DecimalError::DomainError("factorial of a negative integer"));
        }
        let n_int = n
            .integer_part()
            .to_u64()
            .ok_or(DecimalError::RangeError("factorial argument too large"))?;
        return Decimal::from_bigint(factorial_exact(n_int), n.precision());
    }
    let shifted = n.add(&Decimal::one(n.precision()), ctx)?;
    gamma(&shifted, ctx)
}

/// `C(n, k)` at `n`'s precision.
///
/// Non-negative integer `n` uses the exact multiplicative formula over
/// `min(k, n - k)`; any other `n` uses the falling factorial
/// `n·(n-1)···(n-k+1) / k!`.
pub fn binomial(n: &Decimal, k: u64, ctx: &Context) -> DecimalResult<Decimal> {
    let precision = n.precision();

    if n.is_integer() && !n.is_negative() {
        let total = n.integer_part();
        let chosen = BigInt::from(k);
        if chosen > total {
            return Ok(Decimal::zero(precision));
        }
        let smaller = chosen.clone().min(&total - &chosen);
        let steps = smaller
            .to_u64()
            .ok_or(DecimalError::RangeError("binomial argument too large"))?;
        let base = &total - &smaller;
        let mut result = BigInt::one();
        for i in 1..=steps {
            result = result * (&base + i) / i;
        }
        return Decimal::from_bigint(result, precision);
    }

    let scale = ctx.working_scale(precision);
    let one = pow10(scale);
    let x = n.raw_at(scale);
    let mut raw = one.clone();
    for i in 0..k {
        let factor = &x - &one * i;
        raw = fx_mul(&raw, &factor, scale) / (i + 1);
    }
    Ok(ctx.finish(&raw, scale, precision))
}
