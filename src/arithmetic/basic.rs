// ============================================================================
// Basic Arithmetic
// add / sub / mul / div / rem / reciprocal on rescaled magnitudes
// ============================================================================

use crate::engine::Context;
use crate::numeric::kernel::pow10;
use crate::numeric::{rescale_pair, Decimal, DecimalError, DecimalResult};
use num_traits::{Signed, Zero};

impl Decimal {
    /// Sum at the larger of both precisions. Exact.
    pub fn add(&self, rhs: &Decimal, ctx: &Context) -> DecimalResult<Decimal> {
        let r = rescale_pair(self, rhs, false, ctx.config())?;
        Ok(Decimal::from_raw(r.lhs + r.rhs, r.target))
    }

    /// Difference at the larger of both precisions. Exact.
    pub fn sub(&self, rhs: &Decimal, ctx: &Context) -> DecimalResult<Decimal> {
        let r = rescale_pair(self, rhs, false, ctx.config())?;
        Ok(Decimal::from_raw(r.lhs - r.rhs, r.target))
    }

    /// Product, computed with guard digits and rounded once to the target.
    pub fn mul(&self, rhs: &Decimal, ctx: &Context) -> DecimalResult<Decimal> {
        let r = rescale_pair(self, rhs, true, ctx.config())?;
        let product = r.lhs * r.rhs;
        Ok(ctx.finish(&product, r.working * 2, r.target))
    }

    /// Quotient, computed with guard digits and rounded once to the target.
    ///
    /// # Errors
    /// Returns `DivisionByZero` if `rhs` is zero.
    pub fn div(&self, rhs: &Decimal, ctx: &Context) -> DecimalResult<Decimal> {
        let r = rescale_pair(self, rhs, true, ctx.config())?;
        if r.rhs.is_zero() {
            return Err(DecimalError::DivisionByZero);
        }
        let quotient = r.lhs * pow10(r.working) / r.rhs;
        Ok(ctx.finish(&quotient, r.working, r.target))
    }

    /// Remainder of truncating division, shifted to be non-negative when
    /// the modulus is positive.
    ///
    /// # Errors
    /// Returns `DivisionByZero` if `modulus` is zero.
    pub fn rem(&self, modulus: &Decimal, ctx: &Context) -> DecimalResult<Decimal> {
        let r = rescale_pair(self, modulus, false, ctx.config())?;
        if r.rhs.is_zero() {
            return Err(DecimalError::DivisionByZero);
        }
        let mut remainder = &r.lhs % &r.rhs;
        if remainder.is_negative() && r.rhs.is_positive() {
            remainder += &r.rhs;
        }
        Ok(Decimal::from_raw(remainder, r.target))
    }

    /// `1 / self` at this value's precision.
    ///
    /// # Errors
    /// Returns `DivisionByZero` if `self` is zero.
    pub fn reciprocal(&self, ctx: &Context) -> DecimalResult<Decimal> {
        if self.is_zero() {
            return Err(DecimalError::DivisionByZero);
        }
        let working = self.precision() + ctx.config().extra_precision;
        let scale = pow10(working);
        let raw = &scale * &scale / self.raw_at(working);
        Ok(ctx.finish(&raw, working, self.precision()))
    }
}
