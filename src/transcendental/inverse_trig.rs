// ============================================================================
// Inverse Trigonometric Functions
// Newton iteration on sin / tan, with identities keeping the iteration
// on the well-conditioned part of the domain
// ============================================================================

use super::trig::{cos_raw, sin_raw};
use crate::engine::Context;
use crate::numeric::kernel::{fx_div, fx_mul, isqrt, iterate, pow10, Step};
use crate::numeric::{rescale_pair, Decimal, DecimalError, DecimalResult};
use num_bigint::BigInt;
use num_traits::{Signed, Zero};

/// Digits the Newton loops carry beyond the caller's scale. The series
/// inside each step are only accurate to a few units in the last place, so
/// convergence is judged one unit above that noise.
const NEWTON_GUARD_DIGITS: u32 = 5;

fn with_sign(value: BigInt, negative: bool) -> BigInt {
    if negative {
        -value
    } else {
        value
    }
}

/// Invert `sin` by Newton's method for raw `|x| <= 1/2`.
fn asin_newton(x: &BigInt, scale: u32, ctx: &Context) -> DecimalResult<BigInt> {
    if x.is_zero() {
        return Ok(BigInt::zero());
    }
    let inner = scale + NEWTON_GUARD_DIGITS;
    let widen = pow10(NEWTON_GUARD_DIGITS);
    let x = x * &widen;
    let seed = fx_mul(&x, &ctx.pi_raw(inner)?, inner) / 2;

    let root = iterate("asin", ctx.config().trig_limits(), seed, |y| {
        let sin = sin_raw(y, inner, ctx)?;
        let cos = cos_raw(y, inner, ctx)?;
        if cos.is_zero() {
            return Err(DecimalError::DomainError("asin derivative vanished"));
        }
        let delta = fx_div(&(sin - &x), &cos, inner);
        let next = y - &delta;
        if delta.abs() <= widen {
            Ok(Step::Converged(next))
        } else {
            Ok(Step::Continue(next))
        }
    })?;
    Ok(root / widen)
}

/// Invert `tan` by Newton's method for raw `|x| <= 1`.
///
/// The step `y - (tan y - x)·cos² y` is rewritten as
/// `y - (sin y·cos y - x·cos² y)` so no division is needed.
fn atan_newton(x: &BigInt, scale: u32, ctx: &Context) -> DecimalResult<BigInt> {
    if x.is_zero() {
        return Ok(BigInt::zero());
    }
    let inner = scale + NEWTON_GUARD_DIGITS;
    let widen = pow10(NEWTON_GUARD_DIGITS);
    let x = x * &widen;
    let seed = fx_mul(&x, &ctx.pi_raw(inner)?, inner) / 4;

    let root = iterate("atan", ctx.config().trig_limits(), seed, |y| {
        let sin = sin_raw(y, inner, ctx)?;
        let cos = cos_raw(y, inner, ctx)?;
        let cos_squared = fx_mul(&cos, &cos, inner);
        let delta = fx_mul(&sin, &cos, inner) - fx_mul(&x, &cos_squared, inner);
        let next = y - &delta;
        if delta.abs() <= widen {
            Ok(Step::Converged(next))
        } else {
            Ok(Step::Continue(next))
        }
    })?;
    Ok(root / widen)
}

/// `asin(x)` for raw `x` at `scale`.
///
/// Above `|x| = 1/2` the half-angle identity
/// `asin(x) = π/2 - 2·asin(sqrt((1 - x)/2))` moves the work away from the
/// point where the derivative of `sin` vanishes.
fn asin_raw(x: &BigInt, scale: u32, ctx: &Context) -> DecimalResult<BigInt> {
    let one = pow10(scale);
    let magnitude = x.abs();
    if magnitude > one {
        return Err(DecimalError::DomainError("asin argument outside [-1, 1]"));
    }
    if &magnitude * 2 <= one {
        return asin_newton(x, scale, ctx);
    }

    let half_gap = (&one - &magnitude) * pow10(scale) / 2;
    let root = isqrt(&half_gap, ctx.config().root_limits())?;
    let inner = asin_newton(&root, scale, ctx)?;
    let value = ctx.pi_raw(scale)? / 2 - inner * 2;
    Ok(with_sign(value, x.is_negative()))
}

/// `atan(x)` for raw `x` at `scale`.
fn atan_raw(x: &BigInt, scale: u32, ctx: &Context) -> DecimalResult<BigInt> {
    let one = pow10(scale);
    let magnitude = x.abs();
    if magnitude <= one {
        return atan_newton(x, scale, ctx);
    }
    // atan(x) = sign(x)·(π/2 - atan(1/|x|))
    let inverse = fx_div(&one, &magnitude, scale);
    let value = ctx.pi_raw(scale)? / 2 - atan_newton(&inverse, scale, ctx)?;
    Ok(with_sign(value, x.is_negative()))
}

impl Decimal {
    /// Arcsine in radians.
    ///
    /// # Errors
    /// Returns `DomainError` outside `[-1, 1]`.
    pub fn asin(&self, ctx: &Context) -> DecimalResult<Decimal> {
        let scale = ctx.working_scale(self.precision());
        let raw = asin_raw(&self.raw_at(scale), scale, ctx)?;
        Ok(ctx.finish(&raw, scale, self.precision()))
    }

    /// Arccosine in radians, `π/2 - asin(x)`.
    ///
    /// # Errors
    /// Returns `DomainError` outside `[-1, 1]`.
    pub fn acos(&self, ctx: &Context) -> DecimalResult<Decimal> {
        let scale = ctx.working_scale(self.precision());
        let asin = asin_raw(&self.raw_at(scale), scale, ctx)?;
        let raw = ctx.pi_raw(scale)? / 2 - asin;
        Ok(ctx.finish(&raw, scale, self.precision()))
    }

    /// Arctangent in radians.
    pub fn atan(&self, ctx: &Context) -> DecimalResult<Decimal> {
        let scale = ctx.working_scale(self.precision());
        let raw = atan_raw(&self.raw_at(scale), scale, ctx)?;
        Ok(ctx.finish(&raw, scale, self.precision()))
    }

    /// Angle of the point `(x, self)`, in `(-π, π]`.
    ///
    /// `atan2(0, 0)` is zero.
    pub fn atan2(&self, x: &Decimal, ctx: &Context) -> DecimalResult<Decimal> {
        let target = rescale_pair(self, x, false, ctx.config())?.target;
        let scale = ctx.working_scale(target);
        let y_raw = self.raw_at(scale);
        let x_raw = x.raw_at(scale);

        let raw = if x_raw.is_zero() {
            if y_raw.is_zero() {
                BigInt::zero()
            } else {
                with_sign(ctx.pi_raw(scale)? / 2, y_raw.is_negative())
            }
        } else {
            let base = atan_raw(&fx_div(&y_raw, &x_raw, scale), scale, ctx)?;
            if x_raw.is_positive() {
                base
            } else if y_raw.is_negative() {
                base - ctx.pi_raw(scale)?
            } else {
                base + ctx.pi_raw(scale)?
            }
        };
        Ok(ctx.finish(&raw, scale, target))
    }
}
