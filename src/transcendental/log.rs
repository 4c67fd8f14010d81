// ============================================================================
// Logarithms
// Decimal range reduction into [1, 10) followed by the atanh series
// ============================================================================

use crate::engine::Context;
use crate::numeric::kernel::{digit_count, fx_div, fx_mul, pow10, sum_series, IterationLimits};
use crate::numeric::{rescale_pair, Decimal, DecimalError, DecimalResult};
use num_bigint::BigInt;
use num_traits::{Signed, Zero};

/// `atanh(z) = z + z^3/3 + z^5/5 + ...` for raw `|z| < 1` at `scale`.
fn atanh_series(z: &BigInt, scale: u32, limits: IterationLimits) -> DecimalResult<BigInt> {
    let z_squared = fx_mul(z, z, scale);
    let mut power = z.clone();
    sum_series("atanh", limits, |k| {
        if k > 0 {
            power = fx_mul(&power, &z_squared, scale);
        }
        &power / (2 * k + 1)
    })
}

/// `ln(2) = 2·atanh(1/3)`.
pub(crate) fn ln2_series(scale: u32, limits: IterationLimits) -> DecimalResult<BigInt> {
    Ok(atanh_series(&(pow10(scale) / 3), scale, limits)? * 2)
}

/// `ln(10) = 3·ln(2) + 2·atanh(1/9)`, since `10 = 2^3 · 1.25`.
pub(crate) fn ln10_series(scale: u32, limits: IterationLimits) -> DecimalResult<BigInt> {
    let ln2 = ln2_series(scale, limits)?;
    let ln_five_quarters = atanh_series(&(pow10(scale) / 9), scale, limits)? * 2;
    Ok(ln2 * 3 + ln_five_quarters)
}

/// `ln(x)` for raw `x > 0` at `scale`.
///
/// `x` is shifted by a power of ten `k` into `[1, 10)`, the mantissa goes
/// through the atanh series on `(m - 1)/(m + 1)` and `k·ln(10)` is added back.
pub(crate) fn ln_raw(x: &BigInt, scale: u32, ctx: &Context) -> DecimalResult<BigInt> {
    if !x.is_positive() {
        return Err(DecimalError::DomainError("logarithm of a non-positive value"));
    }

    let shift = digit_count(x) as i64 - scale as i64 - 1;
    // ln(10) is multiplied by the shift, so its error grows with it
    let extra = digit_count(&BigInt::from(shift));
    let working = scale + extra;

    let widened = x * pow10(extra);
    let mantissa = if shift >= 0 {
        widened / pow10(shift as u32)
    } else {
        widened * pow10(shift.unsigned_abs() as u32)
    };

    let one = pow10(working);
    let z = fx_div(&(&mantissa - &one), &(&mantissa + &one), working);
    let mut raw = atanh_series(&z, working, ctx.config().ln_limits())? * 2;
    if shift != 0 {
        raw += ctx.ln10_raw(working)? * shift;
    }
    Ok(raw / pow10(extra))
}

/// `ln(1 + x)` for raw `x > -1` at `scale`.
fn ln1p_raw(x: &BigInt, scale: u32, ctx: &Context) -> DecimalResult<BigInt> {
    let one = pow10(scale);
    if *x <= -&one {
        return Err(DecimalError::DomainError("logarithm of a non-positive value"));
    }
    if x.abs() * 2 < one {
        // ln(1 + x) = 2·atanh(x / (x + 2))
        let z = fx_div(x, &(x + &one * 2), scale);
        Ok(atanh_series(&z, scale, ctx.config().ln_limits())? * 2)
    } else {
        ln_raw(&(x + one), scale, ctx)
    }
}

impl Decimal {
    /// Natural logarithm at this value's precision.
    ///
    /// # Errors
    /// Returns `DomainError` for values `<= 0`.
    pub fn ln(&self, ctx: &Context) -> DecimalResult<Decimal> {
        let scale = ctx.working_scale(self.precision());
        let raw = ln_raw(&self.raw_at(scale), scale, ctx)?;
        Ok(ctx.finish(&raw, scale, self.precision()))
    }

    /// Logarithm in `base`, at the larger of both precisions.
    ///
    /// # Errors
    /// Returns `DomainError` for `self <= 0`, `base <= 0` or `base == 1`.
    pub fn log(&self, base: &Decimal, ctx: &Context) -> DecimalResult<Decimal> {
        let target = rescale_pair(self, base, false, ctx.config())?.target;
        let scale = ctx.working_scale(target);
        let denominator = ln_raw(&base.raw_at(scale), scale, ctx)?;
        if denominator.is_zero() {
            return Err(DecimalError::DomainError("logarithm base of one"));
        }
        let numerator = ln_raw(&self.raw_at(scale), scale, ctx)?;
        Ok(ctx.finish(&fx_div(&numerator, &denominator, scale), scale, target))
    }

    /// Base-2 logarithm.
    pub fn log2(&self, ctx: &Context) -> DecimalResult<Decimal> {
        let scale = ctx.working_scale(self.precision());
        let numerator = ln_raw(&self.raw_at(scale), scale, ctx)?;
        let raw = fx_div(&numerator, &ctx.ln2_raw(scale)?, scale);
        Ok(ctx.finish(&raw, scale, self.precision()))
    }

    /// Base-10 logarithm.
    pub fn log10(&self, ctx: &Context) -> DecimalResult<Decimal> {
        let scale = ctx.working_scale(self.precision());
        let numerator = ln_raw(&self.raw_at(scale), scale, ctx)?;
        let raw = fx_div(&numerator, &ctx.ln10_raw(scale)?, scale);
        Ok(ctx.finish(&raw, scale, self.precision()))
    }

    /// `ln(1 + self)`, accurate for arguments near zero.
    ///
    /// # Errors
    /// Returns `DomainError` for values `<= -1`.
    pub fn log1p(&self, ctx: &Context) -> DecimalResult<Decimal> {
        let scale = ctx.working_scale(self.precision());
        let raw = ln1p_raw(&self.raw_at(scale), scale, ctx)?;
        Ok(ctx.finish(&raw, scale, self.precision()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ln_values() {
        let ctx = Context::default();
        let two = ctx.decimal(2, 20).unwrap();
        assert_eq!(two.ln(&ctx).unwrap().to_string(), "0.69314718055994530941");

        let ten = ctx.decimal(10, 15).unwrap();
        assert_eq!(ten.ln(&ctx).unwrap().to_string(), "2.302585092994045");

        let one = ctx.decimal(1, 8).unwrap();
        assert_eq!(one.ln(&ctx).unwrap().to_string(), "0.00000000");
    }

    #[test]
    fn test_ln_shifted_arguments() {
        let ctx = Context::default();
        // ln(12345.678) = 9.421061...
        let big = ctx.decimal("12345.678", 6).unwrap();
        assert_eq!(big.ln(&ctx).unwrap().to_string(), "9.421061");

        // ln(0.001) = -6.907755278982137...
        let small = ctx.decimal("0.001", 12).unwrap();
        assert_eq!(small.ln(&ctx).unwrap().to_string(), "-6.907755278982");
    }

    #[test]
    fn test_ln_domain() {
        let ctx = Context::default();
        for text in ["0", "-1.5"] {
            let x = ctx.decimal(text, 4).unwrap();
            assert_eq!(
                x.ln(&ctx),
                Err(DecimalError::DomainError("logarithm of a non-positive value"))
            );
        }
    }

    #[test]
    fn test_exp_ln_inverse() {
        let ctx = Context::default();
        let x = ctx.decimal("3.7", 25).unwrap();
        let back = x.ln(&ctx).unwrap().exp(&ctx).unwrap();
        let error = back.sub(&x, &ctx).unwrap().abs();
        assert!(error <= ctx.decimal("0.0000000000000000000001", 25).unwrap());
    }

    #[test]
    fn test_log_bases() {
        let ctx = Context::default();
        let x = ctx.decimal(1000, 10).unwrap();
        let ten = ctx.decimal(10, 10).unwrap();
        let by_base = x.log(&ten, &ctx).unwrap();
        let by_log10 = x.log10(&ctx).unwrap();
        let tolerance = ctx.decimal("0.0000000001", 10).unwrap();
        let three = ctx.decimal(3, 10).unwrap();
        assert!(by_base.sub(&three, &ctx).unwrap().abs() <= tolerance);
        assert!(by_log10.sub(&three, &ctx).unwrap().abs() <= tolerance);

        let eight = ctx.decimal(8, 10).unwrap();
        let log2 = eight.log2(&ctx).unwrap();
        assert!(log2.sub(&three, &ctx).unwrap().abs() <= tolerance);

        let one = ctx.decimal(1, 10).unwrap();
        assert_eq!(
            x.log(&one, &ctx),
            Err(DecimalError::DomainError("logarithm base of one"))
        );
    }

    #[test]
    fn test_log1p() {
        let ctx = Context::default();
        let tiny = ctx.decimal("0.000001", 20).unwrap();
        // ln(1.000001) = 0.000000999999500000333333083...
        assert_eq!(
            tiny.log1p(&ctx).unwrap().to_string(),
            "0.00000099999950000033"
        );

        let one = ctx.decimal(1, 12).unwrap();
        assert_eq!(one.log1p(&ctx).unwrap().to_string(), "0.693147180559");

        let minus_one = ctx.decimal(-1, 4).unwrap();
        assert!(minus_one.log1p(&ctx).is_err());
    }
}
