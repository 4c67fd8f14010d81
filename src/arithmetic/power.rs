// ============================================================================
// Powers
// Binary exponentiation for integer exponents, exp/ln for the rest
// ============================================================================

use crate::engine::Context;
use crate::numeric::kernel::{digit_count, fx_mul, pow10};
use crate::numeric::{rescale_pair, Decimal, DecimalError, DecimalResult, MAX_PRECISION};
use crate::transcendental::{exp_raw, ln_raw};
use num_bigint::BigInt;
use num_traits::ToPrimitive;

/// `log10(|x|)` in host floats; falls back to the digit count when `|x|`
/// over- or underflows an `f64`.
fn log10_estimate(x: &Decimal) -> f64 {
    let estimate = x.abs().to_f64().log10();
    if estimate.is_finite() {
        estimate
    } else {
        digit_count(x.magnitude()) as f64 - f64::from(x.precision())
    }
}

/// `x^n` by repeated squaring on raw values at `scale`.
fn binary_pow(base: BigInt, exponent: u64, scale: u32) -> BigInt {
    let mut result = pow10(scale);
    let mut base = base;
    let mut remaining = exponent;
    while remaining > 0 {
        if remaining & 1 == 1 {
            result = fx_mul(&result, &base, scale);
        }
        remaining >>= 1;
        if remaining > 0 {
            base = fx_mul(&base, &base, scale);
        }
    }
    result
}

impl Decimal {
    /// Integer power at this value's precision.
    ///
    /// # Errors
    /// Returns `DivisionByZero` for zero raised to a negative power.
    pub fn powi(&self, exponent: i64, ctx: &Context) -> DecimalResult<Decimal> {
        self.powi_at(exponent, self.precision(), ctx)
    }

    fn powi_at(&self, exponent: i64, target: u32, ctx: &Context) -> DecimalResult<Decimal> {
        if self.is_zero() {
            return match exponent {
                0 => Ok(Decimal::one(target)),
                n if n < 0 => Err(DecimalError::DivisionByZero),
                _ => Ok(Decimal::zero(target)),
            };
        }
        let count = exponent.unsigned_abs();

        // Digits the result grows by, so the working scale can absorb them
        let per_step = if exponent >= 0 {
            log10_estimate(self)
        } else {
            -log10_estimate(self)
        }
        .max(0.0);
        let digits = per_step * count as f64;
        if digits > f64::from(MAX_PRECISION) {
            return Err(DecimalError::RangeError("power result too large"));
        }
        let growth = digits.ceil() as u32 + 1;
        let scale = ctx.working_scale(target) + growth + digit_count(&BigInt::from(count));

        let mut base = self.raw_at(scale);
        if exponent < 0 {
            base = pow10(scale * 2) / base;
        }
        let raw = binary_pow(base, count, scale);
        Ok(ctx.finish(&raw, scale, target))
    }

    /// `self^exponent` at the larger of both precisions.
    ///
    /// Exact-integer exponents use binary exponentiation; any other exponent
    /// is evaluated as `exp(ln(self) · exponent)`.
    ///
    /// # Errors
    /// - `DivisionByZero` for zero raised to a negative power
    /// - `DomainError` for a fractional power of a negative value
    /// - `PrecisionMismatch` when the precisions differ in a strict profile
    pub fn pow(&self, exponent: &Decimal, ctx: &Context) -> DecimalResult<Decimal> {
        let target = rescale_pair(self, exponent, false, ctx.config())?.target;

        if exponent.is_integer() {
            let n = exponent
                .integer_part()
                .to_i64()
                .ok_or(DecimalError::RangeError("exponent too large"))?;
            return self.powi_at(n, target, ctx);
        }

        if self.is_zero() {
            return if exponent.is_positive() {
                Ok(Decimal::zero(target))
            } else {
                Err(DecimalError::DivisionByZero)
            };
        }
        if self.is_negative() {
            return Err(DecimalError::DomainError(
                "fractional power of a negative value",
            ));
        }

        // Integer digits of the result, estimated in host floats
        let estimate = exponent.to_f64() * log10_estimate(self);
        if estimate > f64::from(MAX_PRECISION) {
            return Err(DecimalError::RangeError("power result too large"));
        }
        let growth = if estimate > 0.0 {
            estimate.ceil() as u32
        } else {
            0
        };
        let scale = ctx.working_scale(target) + growth;

        let ln = ln_raw(&self.raw_at(scale), scale, ctx)?;
        let product = fx_mul(&ln, &exponent.raw_at(scale), scale);
        let raw = exp_raw(&product, scale, ctx)?;
        Ok(ctx.finish(&raw, scale, target))
    }
}
