// ============================================================================
// Named Constants
// pi, tau, e, ln2 and ln10 through the profile's constant cache
// ============================================================================

use crate::engine::{create_pi_strategy, Context};
use crate::numeric::kernel::pow10;
use crate::numeric::{check_precision, Decimal, DecimalResult};
use crate::transcendental::{exp_raw, ln10_series, ln2_series};
use num_bigint::BigInt;

type RawConstant = fn(&Context, u32) -> DecimalResult<BigInt>;

impl Context {
    /// Pi at `precision` digits, using the configured algorithm.
    ///
    /// # Example
    /// ```
    /// use decimal_engine::prelude::*;
    ///
    /// let ctx = Context::default();
    /// assert_eq!(ctx.pi(10).unwrap().to_string(), "3.1415926535");
    /// ```
    pub fn pi(&self, precision: u32) -> DecimalResult<Decimal> {
        self.constant(precision, Context::pi_raw)
    }

    /// `2·pi`.
    pub fn tau(&self, precision: u32) -> DecimalResult<Decimal> {
        self.constant(precision, |ctx, scale| Ok(ctx.pi_raw(scale)? * 2))
    }

    /// Euler's number.
    pub fn e(&self, precision: u32) -> DecimalResult<Decimal> {
        self.constant(precision, Context::e_raw)
    }

    pub fn ln2(&self, precision: u32) -> DecimalResult<Decimal> {
        self.constant(precision, Context::ln2_raw)
    }

    pub fn ln10(&self, precision: u32) -> DecimalResult<Decimal> {
        self.constant(precision, Context::ln10_raw)
    }

    fn constant(&self, precision: u32, raw: RawConstant) -> DecimalResult<Decimal> {
        check_precision(precision)?;
        let scale = precision + self.config().extra_precision;
        let value = raw(self, scale)?;
        Ok(self.finish(&value, scale, precision))
    }

    // ========================================================================
    // Raw Accessors
    // ========================================================================

    /// Pi as a raw magnitude at `scale`.
    ///
    /// The strategy is chosen for this scale; its rank decides which cached
    /// entries can answer the request.
    pub(crate) fn pi_raw(&self, scale: u32) -> DecimalResult<BigInt> {
        let strategy = create_pi_strategy(self.config().pi_algorithm, scale);
        tracing::trace!(algorithm = strategy.name(), scale, "pi requested");
        self.cached_constant("pi", scale, strategy.priority(), |working| {
            strategy.compute(working, self.config())
        })
    }

    pub(crate) fn e_raw(&self, scale: u32) -> DecimalResult<BigInt> {
        self.cached_constant("e", scale, 0, |working| {
            exp_raw(&pow10(working), working, self)
        })
    }

    pub(crate) fn ln2_raw(&self, scale: u32) -> DecimalResult<BigInt> {
        self.cached_constant("ln2", scale, 0, |working| {
            ln2_series(working, self.config().ln_limits())
        })
    }

    pub(crate) fn ln10_raw(&self, scale: u32) -> DecimalResult<BigInt> {
        self.cached_constant("ln10", scale, 0, |working| {
            ln10_series(working, self.config().ln_limits())
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::domain::{Config, PiAlgorithm};
    use crate::engine::Context;
    use crate::numeric::{DecimalError, MAX_PRECISION};

    #[test]
    fn test_named_values() {
        let ctx = Context::default();
        assert_eq!(ctx.pi(10).unwrap().to_string(), "3.1415926535");
        assert_eq!(ctx.tau(10).unwrap().to_string(), "6.2831853071");
        assert_eq!(ctx.e(20).unwrap().to_string(), "2.71828182845904523536");
        assert_eq!(ctx.ln2(15).unwrap().to_string(), "0.693147180559945");
        assert_eq!(ctx.ln10(15).unwrap().to_string(), "2.302585092994045");
    }

    #[test]
    fn test_pi_all_algorithms_agree() {
        for precision in [5, 20, 50] {
            let chudnovsky = Config::default().with_pi_algorithm(PiAlgorithm::Chudnovsky);
            let reference = Context::new(chudnovsky).pi(precision).unwrap();
            for algorithm in [
                PiAlgorithm::Default,
                PiAlgorithm::Leibniz,
                PiAlgorithm::Newton,
            ] {
                let ctx = Context::new(Config::default().with_pi_algorithm(algorithm));
                assert_eq!(
                    ctx.pi(precision).unwrap(),
                    reference,
                    "{:?} @ {}",
                    algorithm,
                    precision
                );
            }
        }
    }

    #[test]
    fn test_pi_is_cached() {
        let ctx = Context::default();
        ctx.pi(30).unwrap();
        let entry = ctx.cache().get("pi").unwrap();
        assert_eq!(entry.priority, 3);
        assert_eq!(entry.precision, 32);

        // Lower precision and lower rank are answered from the same entry
        let leibniz = ctx.with_config(Config::default().with_pi_algorithm(PiAlgorithm::Leibniz));
        assert_eq!(leibniz.pi(10).unwrap().to_string(), "3.1415926535");
        assert_eq!(ctx.cache().get("pi").unwrap().precision, 32);
    }

    #[test]
    fn test_precision_limit() {
        let ctx = Context::default();
        assert!(matches!(
            ctx.pi(MAX_PRECISION + 1),
            Err(DecimalError::RangeError(_))
        ));
    }
}
