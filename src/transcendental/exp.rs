// ============================================================================
// Exponential
// Taylor series for e^x with reciprocal handling of negative arguments
// ============================================================================

use crate::engine::Context;
use crate::numeric::kernel::{fx_mul, pow10, sum_series};
use crate::numeric::{Decimal, DecimalResult};
use num_bigint::BigInt;
use num_traits::{Signed, Zero};

/// `e^x` for raw `x` at `scale`.
///
/// Negative arguments are evaluated as `1 / e^|x|` so the series never
/// alternates.
pub(crate) fn exp_raw(x: &BigInt, scale: u32, ctx: &Context) -> DecimalResult<BigInt> {
    if x.is_negative() {
        let positive = exp_raw(&-x, scale, ctx)?;
        return Ok(pow10(scale * 2) / positive);
    }
    let one = pow10(scale);
    let mut term = one.clone();
    sum_series("exp", ctx.config().exp_limits(), |n| {
        if n > 0 {
            term = fx_mul(&term, x, scale) / n;
        }
        term.clone()
    })
}

/// `e^x - 1` without the leading one, for small `|x|`.
fn expm1_series(x: &BigInt, scale: u32, ctx: &Context) -> DecimalResult<BigInt> {
    let mut term = x.clone();
    sum_series("expm1", ctx.config().exp_limits(), |n| {
        if n > 0 {
            term = fx_mul(&term, x, scale) / (n + 1);
        }
        term.clone()
    })
}

impl Decimal {
    /// `e^self` at this value's precision.
    pub fn exp(&self, ctx: &Context) -> DecimalResult<Decimal> {
        let scale = ctx.working_scale(self.precision());
        let raw = exp_raw(&self.raw_at(scale), scale, ctx)?;
        Ok(ctx.finish(&raw, scale, self.precision()))
    }

    /// `e^self - 1`, accurate for arguments near zero.
    pub fn expm1(&self, ctx: &Context) -> DecimalResult<Decimal> {
        let scale = ctx.working_scale(self.precision());
        let x = self.raw_at(scale);
        let raw = if x.is_zero() {
            x
        } else if x.abs() * 2 < pow10(scale) {
            expm1_series(&x, scale, ctx)?
        } else {
            exp_raw(&x, scale, ctx)? - pow10(scale)
        };
        Ok(ctx.finish(&raw, scale, self.precision()))
    }

    /// `2^self`, evaluated as `e^(ln2 · self)`.
    pub fn exp2(&self, ctx: &Context) -> DecimalResult<Decimal> {
        let scale = ctx.working_scale(self.precision());
        let exponent = fx_mul(&ctx.ln2_raw(scale)?, &self.raw_at(scale), scale);
        let raw = exp_raw(&exponent, scale, ctx)?;
        Ok(ctx.finish(&raw, scale, self.precision()))
    }
}
