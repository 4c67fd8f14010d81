// ============================================================================
// Trigonometric Functions
// Maclaurin series after reduction into [-π/2, π/2]
// ============================================================================

use crate::engine::Context;
use crate::numeric::kernel::{fx_div, fx_mul, integer_digits, pow10, sum_series};
use crate::numeric::{Decimal, DecimalError, DecimalResult};
use num_bigint::BigInt;
use num_traits::Signed;

/// Reduce raw `x` at `scale` into `[-π, π]`. Returns the reduced value and
/// pi, both at `scale`.
///
/// Pi is fetched with as many extra digits as `x` has integer digits so the
/// remainder keeps full precision for large arguments.
fn reduce(x: &BigInt, scale: u32, ctx: &Context) -> DecimalResult<(BigInt, BigInt)> {
    let extra = integer_digits(x, scale) + 2;
    let wide = scale + extra;
    let pi = ctx.pi_raw(wide)?;
    let two_pi = &pi * 2;

    let mut r = (x * pow10(extra)) % &two_pi;
    if r > pi {
        r -= &two_pi;
    } else if r < -&pi {
        r += &two_pi;
    }

    let shrink = pow10(extra);
    Ok((r / &shrink, pi / shrink))
}

fn sin_series(r: &BigInt, scale: u32, ctx: &Context) -> DecimalResult<BigInt> {
    let r_squared = fx_mul(r, r, scale);
    let mut term = r.clone();
    sum_series("sin", ctx.config().trig_limits(), |n| {
        if n > 0 {
            term = -fx_mul(&term, &r_squared, scale) / ((2 * n) * (2 * n + 1));
        }
        term.clone()
    })
}

fn cos_series(r: &BigInt, scale: u32, ctx: &Context) -> DecimalResult<BigInt> {
    let r_squared = fx_mul(r, r, scale);
    let mut term = pow10(scale);
    sum_series("cos", ctx.config().trig_limits(), |n| {
        if n > 0 {
            term = -fx_mul(&term, &r_squared, scale) / ((2 * n - 1) * (2 * n));
        }
        term.clone()
    })
}

/// `sin(x)` for raw `x` at `scale`.
pub(crate) fn sin_raw(x: &BigInt, scale: u32, ctx: &Context) -> DecimalResult<BigInt> {
    let (mut r, pi) = reduce(x, scale, ctx)?;
    let half_pi = &pi / 2;
    if r > half_pi {
        r = &pi - r;
    } else if r < -&half_pi {
        r = -&pi - r;
    }
    sin_series(&r, scale, ctx)
}

/// `cos(x)` for raw `x` at `scale`.
pub(crate) fn cos_raw(x: &BigInt, scale: u32, ctx: &Context) -> DecimalResult<BigInt> {
    let (r, pi) = reduce(x, scale, ctx)?;
    let mut r = r.abs();
    if r > &pi / 2 {
        r = &pi - r;
        return Ok(-cos_series(&r, scale, ctx)?);
    }
    cos_series(&r, scale, ctx)
}

/// Divide `numerator` by `denominator` unless the denominator is too close
/// to zero to be trusted at `precision` digits.
fn stable_ratio(
    numerator: &BigInt,
    denominator: &BigInt,
    scale: u32,
    precision: u32,
    what: &'static str,
) -> DecimalResult<BigInt> {
    if denominator.abs() < pow10(scale - precision) {
        return Err(DecimalError::DomainError(what));
    }
    Ok(fx_div(numerator, denominator, scale))
}

impl Decimal {
    /// Sine of an angle in radians.
    pub fn sin(&self, ctx: &Context) -> DecimalResult<Decimal> {
        let scale = ctx.working_scale(self.precision());
        let raw = sin_raw(&self.raw_at(scale), scale, ctx)?;
        Ok(ctx.finish(&raw, scale, self.precision()))
    }

    /// Cosine of an angle in radians.
    pub fn cos(&self, ctx: &Context) -> DecimalResult<Decimal> {
        let scale = ctx.working_scale(self.precision());
        let raw = cos_raw(&self.raw_at(scale), scale, ctx)?;
        Ok(ctx.finish(&raw, scale, self.precision()))
    }

    /// Tangent as `sin / cos`.
    ///
    /// # Errors
    /// Returns `DomainError` when `|cos| < 10^-precision`.
    pub fn tan(&self, ctx: &Context) -> DecimalResult<Decimal> {
        let p = self.precision();
        let scale = ctx.working_scale(p);
        let x = self.raw_at(scale);
        let sin = sin_raw(&x, scale, ctx)?;
        let cos = cos_raw(&x, scale, ctx)?;
        let raw = stable_ratio(
            &sin,
            &cos,
            scale,
            p,
            "tangent undefined or numerically unstable",
        )?;
        Ok(ctx.finish(&raw, scale, p))
    }

    /// Secant, `1 / cos`.
    pub fn sec(&self, ctx: &Context) -> DecimalResult<Decimal> {
        let p = self.precision();
        let scale = ctx.working_scale(p);
        let cos = cos_raw(&self.raw_at(scale), scale, ctx)?;
        let raw = stable_ratio(&pow10(scale), &cos, scale, p, "secant undefined")?;
        Ok(ctx.finish(&raw, scale, p))
    }

    /// Cosecant, `1 / sin`.
    pub fn csc(&self, ctx: &Context) -> DecimalResult<Decimal> {
        let p = self.precision();
        let scale = ctx.working_scale(p);
        let sin = sin_raw(&self.raw_at(scale), scale, ctx)?;
        let raw = stable_ratio(&pow10(scale), &sin, scale, p, "cosecant undefined")?;
        Ok(ctx.finish(&raw, scale, p))
    }

    /// Cotangent, `cos / sin`.
    pub fn cot(&self, ctx: &Context) -> DecimalResult<Decimal> {
        let p = self.precision();
        let scale = ctx.working_scale(p);
        let x = self.raw_at(scale);
        let sin = sin_raw(&x, scale, ctx)?;
        let cos = cos_raw(&x, scale, ctx)?;
        let raw = stable_ratio(&cos, &sin, scale, p, "cotangent undefined")?;
        Ok(ctx.finish(&raw, scale, p))
    }

    /// Radians to degrees.
    pub fn to_degrees(&self, ctx: &Context) -> DecimalResult<Decimal> {
        let scale = ctx.working_scale(self.precision());
        let raw = self.raw_at(scale) * 180;
        let pi = ctx.pi_raw(scale)?;
        Ok(ctx.finish(&fx_div(&raw, &pi, scale), scale, self.precision()))
    }

    /// Degrees to radians.
    pub fn to_radians(&self, ctx: &Context) -> DecimalResult<Decimal> {
        let scale = ctx.working_scale(self.precision());
        let raw = fx_mul(&self.raw_at(scale), &ctx.pi_raw(scale)?, scale) / 180;
        Ok(ctx.finish(&raw, scale, self.precision()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn within(actual: &Decimal, expected: &str, tolerance: &str, ctx: &Context) -> bool {
        let p = actual.precision();
        let expected = ctx.decimal(expected, p).unwrap();
        let tolerance = ctx.decimal(tolerance, p).unwrap();
        actual.sub(&expected, ctx).unwrap().abs() <= tolerance
    }

    #[test]
    fn test_sin_cos_values() {
        let ctx = Context::default();
        let one = ctx.decimal(1, 20).unwrap();
        assert_eq!(one.sin(&ctx).unwrap().to_string(), "0.84147098480789650665");
        assert_eq!(one.cos(&ctx).unwrap().to_string(), "0.54030230586813971740");

        let zero = ctx.decimal(0, 10).unwrap();
        assert_eq!(zero.sin(&ctx).unwrap().to_string(), "0.0000000000");
        assert_eq!(zero.cos(&ctx).unwrap().to_string(), "1.0000000000");
    }

    #[test]
    fn test_reduction_of_large_and_negative_angles() {
        let ctx = Context::default();
        // sin(100) = -0.50636564110975879...
        let hundred = ctx.decimal(100, 15).unwrap();
        assert_eq!(hundred.sin(&ctx).unwrap().to_string(), "-0.506365641109758");

        // cos(-4) = -0.65364362086361191...
        let minus_four = ctx.decimal(-4, 15).unwrap();
        assert_eq!(minus_four.cos(&ctx).unwrap().to_string(), "-0.653643620863611");

        // sin(3) = 0.14112000805986722...
        let three = ctx.decimal(3, 15).unwrap();
        assert_eq!(three.sin(&ctx).unwrap().to_string(), "0.141120008059867");
    }

    #[test]
    fn test_pythagorean_identity() {
        let ctx = Context::default();
        for text in ["0.5", "1.3", "-2.7", "10", "123.456"] {
            let x = ctx.decimal(text, 25).unwrap();
            let sin = x.sin(&ctx).unwrap();
            let cos = x.cos(&ctx).unwrap();
            let sum = sin
                .mul(&sin, &ctx)
                .unwrap()
                .add(&cos.mul(&cos, &ctx).unwrap(), &ctx)
                .unwrap();
            assert!(
                within(&sum, "1", "0.0000000000000000000001", &ctx),
                "{} -> {}",
                text,
                sum
            );
        }
    }

    #[test]
    fn test_tan_and_reciprocals() {
        let ctx = Context::default();
        let one = ctx.decimal(1, 15).unwrap();
        assert_eq!(one.tan(&ctx).unwrap().to_string(), "1.557407724654902");
        assert_eq!(one.sec(&ctx).unwrap().to_string(), "1.850815717680925");
        assert_eq!(one.csc(&ctx).unwrap().to_string(), "1.188395105778121");
        assert_eq!(one.cot(&ctx).unwrap().to_string(), "0.642092615934330");
    }

    #[test]
    fn test_tan_near_pole() {
        let ctx = Context::default();
        let half_pi = ctx.decimal("1.5707963267", 10).unwrap();
        assert_eq!(
            half_pi.tan(&ctx),
            Err(DecimalError::DomainError(
                "tangent undefined or numerically unstable"
            ))
        );
        let zero = ctx.decimal(0, 10).unwrap();
        assert!(zero.cot(&ctx).is_err());
        assert!(zero.csc(&ctx).is_err());
    }

    #[test]
    fn test_angle_conversion() {
        let ctx = Context::default();
        let degrees = ctx.decimal(180, 12).unwrap();
        assert_eq!(degrees.to_radians(&ctx).unwrap().to_string(), "3.141592653589");

        let radians = ctx.pi(12).unwrap();
        let back = radians.to_degrees(&ctx).unwrap();
        assert!(within(&back, "180", "0.000000001", &ctx), "{}", back);
    }
}
