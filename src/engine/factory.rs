// ============================================================================
// Context Factory
// Creates numeric profiles and pi strategies from configuration
// ============================================================================

use crate::constants::{ChudnovskyPi, HostFloatPi, LeibnizPi, MachinPi, HOST_FLOAT_PI_DIGITS};
use crate::domain::{Config, ConvergencePolicy, PiAlgorithm};
use crate::engine::Context;
use crate::interfaces::{CacheEventHandler, NoOpCacheEventHandler, PiStrategy};
use crate::numeric::RoundingMode;
use std::sync::Arc;

// ============================================================================
// Factory Functions
// ============================================================================

/// Creates a numeric profile from configuration
///
/// # Arguments
/// * `config` - Profile configuration
/// * `event_handler` - Observer for constant-cache events
///
/// # Returns
/// * `Result<Context, String>` - Configured context or validation error
///
/// # Example
/// ```
/// use decimal_engine::prelude::*;
/// use decimal_engine::engine::factory::create_from_config;
/// use std::sync::Arc;
///
/// let ctx = create_from_config(Config::financial(), Arc::new(NoOpCacheEventHandler)).unwrap();
/// assert_eq!(ctx.config().rounding_mode, RoundingMode::HalfUp);
/// ```
pub fn create_from_config(
    config: Config,
    event_handler: Arc<dyn CacheEventHandler>,
) -> Result<Context, String> {
    // Validate configuration first
    config.validate()?;

    Ok(Context::with_event_handler(config, event_handler))
}

/// Creates the pi strategy for `algorithm` at a working scale of `scale` digits
///
/// `Default` uses the host float constant while it is exact enough and
/// hands over to Chudnovsky beyond that.
pub fn create_pi_strategy(algorithm: PiAlgorithm, scale: u32) -> Box<dyn PiStrategy> {
    match algorithm {
        PiAlgorithm::Default if scale <= HOST_FLOAT_PI_DIGITS => Box::new(HostFloatPi),
        PiAlgorithm::Default => Box::new(ChudnovskyPi),
        PiAlgorithm::Leibniz => Box::new(LeibnizPi),
        PiAlgorithm::Newton => Box::new(MachinPi),
        PiAlgorithm::Chudnovsky => Box::new(ChudnovskyPi),
    }
}

// ============================================================================
// Builder Pattern for Advanced Configuration
// ============================================================================

/// Builder for creating numeric profiles with a fluent API
///
/// # Example
/// ```
/// use decimal_engine::prelude::*;
/// use decimal_engine::engine::factory::ContextBuilder;
///
/// let ctx = ContextBuilder::new()
///     .rounding_mode(RoundingMode::HalfUp)
///     .extra_precision(4)
///     .pi_algorithm(PiAlgorithm::Newton)
///     .build()
///     .unwrap();
/// assert_eq!(ctx.config().extra_precision, 4);
/// ```
pub struct ContextBuilder {
    config: Config,
    event_handler: Arc<dyn CacheEventHandler>,
}

impl ContextBuilder {
    /// Create a new builder with default settings
    pub fn new() -> Self {
        Self {
            config: Config::default(),
            event_handler: Arc::new(NoOpCacheEventHandler),
        }
    }

    /// Start from an existing configuration
    pub fn from_config(config: Config) -> Self {
        Self {
            config,
            event_handler: Arc::new(NoOpCacheEventHandler),
        }
    }

    // ========================================================================
    // Arithmetic Settings
    // ========================================================================

    /// Set rounding mode
    pub fn rounding_mode(mut self, mode: RoundingMode) -> Self {
        self.config.rounding_mode = mode;
        self
    }

    /// Set guard digits
    pub fn extra_precision(mut self, digits: u32) -> Self {
        self.config.extra_precision = digits;
        self
    }

    /// Allow or forbid operands of different precision
    pub fn allow_precision_mismatch(mut self, allow: bool) -> Self {
        self.config.allow_precision_mismatch = allow;
        self
    }

    /// Let `Decimal::apply` overwrite its receiver
    pub fn mutate_result(mut self, mutate: bool) -> Self {
        self.config.mutate_result = mutate;
        self
    }

    // ========================================================================
    // Algorithm Settings
    // ========================================================================

    /// Select the pi algorithm
    pub fn pi_algorithm(mut self, algorithm: PiAlgorithm) -> Self {
        self.config.pi_algorithm = algorithm;
        self
    }

    /// Set the trigonometric and logarithm step caps
    pub fn series_max_steps(mut self, trig: usize, ln: usize) -> Self {
        self.config.trig_max_steps = trig;
        self.config.ln_max_steps = ln;
        self
    }

    /// Set the exponential and root-finding step caps
    pub fn iteration_max_steps(mut self, exp: usize, root: usize) -> Self {
        self.config.exp_max_steps = exp;
        self.config.root_max_steps = root;
        self
    }

    /// Set what happens when a step cap is reached
    pub fn convergence_policy(mut self, policy: ConvergencePolicy) -> Self {
        self.config.convergence_policy = policy;
        self
    }

    // ========================================================================
    // Observability
    // ========================================================================

    /// Report cache activity to `handler`
    pub fn event_handler(mut self, handler: Arc<dyn CacheEventHandler>) -> Self {
        self.event_handler = handler;
        self
    }

    /// Build the context
    pub fn build(self) -> Result<Context, String> {
        create_from_config(self.config, self.event_handler)
    }
}

impl Default for ContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interfaces::LoggingCacheEventHandler;

    #[test]
    fn test_create_from_config() {
        let ctx = create_from_config(Config::strict(), Arc::new(NoOpCacheEventHandler)).unwrap();
        assert!(!ctx.config().allow_precision_mismatch);
    }

    #[test]
    fn test_create_from_invalid_config() {
        let config = Config::default().with_trig_max_steps(0);
        assert!(create_from_config(config, Arc::new(NoOpCacheEventHandler)).is_err());
    }

    #[test]
    fn test_pi_strategy_dispatch() {
        assert_eq!(create_pi_strategy(PiAlgorithm::Default, 10).name(), "host-float");
        assert_eq!(create_pi_strategy(PiAlgorithm::Default, 40).name(), "chudnovsky");
        assert_eq!(create_pi_strategy(PiAlgorithm::Leibniz, 10).name(), "leibniz");
        assert_eq!(create_pi_strategy(PiAlgorithm::Newton, 10).name(), "machin");
        assert_eq!(create_pi_strategy(PiAlgorithm::Chudnovsky, 10).name(), "chudnovsky");
    }

    #[test]
    fn test_priorities_are_ranked() {
        let ranks: Vec<u8> = [
            create_pi_strategy(PiAlgorithm::Default, 5),
            create_pi_strategy(PiAlgorithm::Leibniz, 5),
            create_pi_strategy(PiAlgorithm::Newton, 5),
            create_pi_strategy(PiAlgorithm::Chudnovsky, 5),
        ]
        .iter()
        .map(|s| s.priority())
        .collect();
        assert_eq!(ranks, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_builder_pattern() {
        let ctx = ContextBuilder::new()
            .rounding_mode(RoundingMode::Floor)
            .allow_precision_mismatch(false)
            .mutate_result(true)
            .series_max_steps(100, 200)
            .iteration_max_steps(300, 400)
            .convergence_policy(ConvergencePolicy::Error)
            .event_handler(Arc::new(LoggingCacheEventHandler))
            .build()
            .unwrap();

        let config = ctx.config();
        assert_eq!(config.rounding_mode, RoundingMode::Floor);
        assert!(config.mutate_result);
        assert_eq!(
            (
                config.trig_max_steps,
                config.ln_max_steps,
                config.exp_max_steps,
                config.root_max_steps
            ),
            (100, 200, 300, 400)
        );
    }

    #[test]
    fn test_builder_rejects_invalid() {
        assert!(ContextBuilder::new().series_max_steps(0, 10).build().is_err());
        assert!(ContextBuilder::from_config(Config::high_precision())
            .build()
            .is_ok());
    }
}
