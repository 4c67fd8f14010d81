// ============================================================================
// Hyperbolic Functions
// ============================================================================

use super::exp::exp_raw;
use super::log::ln_raw;
use crate::arithmetic::sqrt_raw;
use crate::engine::Context;
use crate::numeric::kernel::{fx_div, fx_mul, pow10};
use crate::numeric::{Decimal, DecimalError, DecimalResult};
use num_bigint::BigInt;
use num_traits::Signed;

/// `(e^x, e^-x)` for raw `x` at `scale`.
///
/// Both come from `e^|x| >= 1`, so the reciprocal never divides by zero.
fn exp_pair(x: &BigInt, scale: u32, ctx: &Context) -> DecimalResult<(BigInt, BigInt)> {
    let large = exp_raw(&x.abs(), scale, ctx)?;
    let small = pow10(scale * 2) / &large;
    Ok(if x.is_negative() {
        (small, large)
    } else {
        (large, small)
    })
}

impl Decimal {
    pub fn sinh(&self, ctx: &Context) -> DecimalResult<Decimal> {
        let scale = ctx.working_scale(self.precision());
        let (up, down) = exp_pair(&self.raw_at(scale), scale, ctx)?;
        Ok(ctx.finish(&((up - down) / 2), scale, self.precision()))
    }

    pub fn cosh(&self, ctx: &Context) -> DecimalResult<Decimal> {
        let scale = ctx.working_scale(self.precision());
        let (up, down) = exp_pair(&self.raw_at(scale), scale, ctx)?;
        Ok(ctx.finish(&((up + down) / 2), scale, self.precision()))
    }

    /// `(e^2x - 1) / (e^2x + 1)`.
    pub fn tanh(&self, ctx: &Context) -> DecimalResult<Decimal> {
        let scale = ctx.working_scale(self.precision());
        let one = pow10(scale);
        let doubled = exp_raw(&(self.raw_at(scale) * 2), scale, ctx)?;
        let raw = fx_div(&(&doubled - &one), &(&doubled + &one), scale);
        Ok(ctx.finish(&raw, scale, self.precision()))
    }

    /// `sign(x)·ln(|x| + sqrt(x² + 1))`.
    pub fn asinh(&self, ctx: &Context) -> DecimalResult<Decimal> {
        let scale = ctx.working_scale(self.precision());
        let x = self.raw_at(scale).abs();
        let radicand = fx_mul(&x, &x, scale) + pow10(scale);
        let root = sqrt_raw(&radicand, scale, ctx.config().root_limits())?;
        let mut raw = ln_raw(&(x + root), scale, ctx)?;
        if self.is_negative() {
            raw = -raw;
        }
        Ok(ctx.finish(&raw, scale, self.precision()))
    }

    /// `ln(x + sqrt(x² - 1))`.
    ///
    /// # Errors
    /// Returns `DomainError` for values below one.
    pub fn acosh(&self, ctx: &Context) -> DecimalResult<Decimal> {
        let scale = ctx.working_scale(self.precision());
        let x = self.raw_at(scale);
        let one = pow10(scale);
        if x < one {
            return Err(DecimalError::DomainError("acosh argument below one"));
        }
        let radicand = fx_mul(&x, &x, scale) - one;
        let root = sqrt_raw(&radicand, scale, ctx.config().root_limits())?;
        let raw = ln_raw(&(x + root), scale, ctx)?;
        Ok(ctx.finish(&raw, scale, self.precision()))
    }

    /// `ln((1 + x) / (1 - x)) / 2`.
    ///
    /// # Errors
    /// Returns `DomainError` unless `|x| < 1`.
    pub fn atanh(&self, ctx: &Context) -> DecimalResult<Decimal> {
        let scale = ctx.working_scale(self.precision());
        let x = self.raw_at(scale);
        let one = pow10(scale);
        if x.abs() >= one {
            return Err(DecimalError::DomainError("atanh argument outside (-1, 1)"));
        }
        let ratio = fx_div(&(&one + &x), &(&one - &x), scale);
        let raw = ln_raw(&ratio, scale, ctx)? / 2;
        Ok(ctx.finish(&raw, scale, self.precision()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sinh_cosh_tanh() {
        let ctx = Context::default();
        let one = ctx.decimal(1, 15).unwrap();
        assert_eq!(one.sinh(&ctx).unwrap().to_string(), "1.175201193643801");
        assert_eq!(one.cosh(&ctx).unwrap().to_string(), "1.543080634815243");
        assert_eq!(one.tanh(&ctx).unwrap().to_string(), "0.761594155955764");

        let minus_two = ctx.decimal(-2, 15).unwrap();
        assert_eq!(minus_two.sinh(&ctx).unwrap().to_string(), "-3.626860407847018");
        assert_eq!(minus_two.tanh(&ctx).unwrap().to_string(), "-0.964027580075816");
    }

    #[test]
    fn test_large_negative_arguments() {
        let ctx = Context::default();
        let up = ctx.decimal(200, 10).unwrap();
        let down = ctx.decimal(-200, 10).unwrap();

        let sinh_down = down.sinh(&ctx).unwrap();
        assert!(sinh_down.is_negative());
        assert_eq!(sinh_down, -up.sinh(&ctx).unwrap());
        assert_eq!(down.cosh(&ctx).unwrap(), up.cosh(&ctx).unwrap());
        assert_eq!(down.tanh(&ctx).unwrap().to_string(), "-1.0000000000");
    }

    #[test]
    fn test_inverse_hyperbolic() {
        let ctx = Context::default();
        let one = ctx.decimal(1, 15).unwrap();
        assert_eq!(one.asinh(&ctx).unwrap().to_string(), "0.881373587019543");
        let minus_one = ctx.decimal(-1, 15).unwrap();
        assert_eq!(minus_one.asinh(&ctx).unwrap().to_string(), "-0.881373587019543");

        let two = ctx.decimal(2, 15).unwrap();
        assert_eq!(two.acosh(&ctx).unwrap().to_string(), "1.316957896924816");
        assert_eq!(one.acosh(&ctx).unwrap().to_string(), "0.000000000000000");

        let half = ctx.decimal("0.5", 15).unwrap();
        assert_eq!(half.atanh(&ctx).unwrap().to_string(), "0.549306144334054");
    }

    #[test]
    fn test_hyperbolic_domains() {
        let ctx = Context::default();
        let half = ctx.decimal("0.5", 6).unwrap();
        assert_eq!(
            half.acosh(&ctx),
            Err(DecimalError::DomainError("acosh argument below one"))
        );
        let one = ctx.decimal(1, 6).unwrap();
        assert_eq!(
            one.atanh(&ctx),
            Err(DecimalError::DomainError("atanh argument outside (-1, 1)"))
        );
    }
}
