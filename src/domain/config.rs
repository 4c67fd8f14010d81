// ============================================================================
// Engine Configuration
// Settings shared by every operation of one numeric profile
// ============================================================================

use crate::numeric::kernel::IterationLimits;
use crate::numeric::RoundingMode;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Pi Algorithm
// ============================================================================

/// Selects how pi is computed when it is not already cached
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PiAlgorithm {
    /// Host floating-point constant for up to 15 digits, Chudnovsky beyond
    Default,
    /// Gregory–Leibniz series, Euler-transformed
    /// Simple, linear convergence (about 0.3 digits per term)
    Leibniz,
    /// Machin formula 16·atan(1/5) − 4·atan(1/239)
    /// Fast for moderate precision
    Newton,
    /// Chudnovsky series
    /// About 14 digits per term, the choice for high precision
    #[default]
    Chudnovsky,
}

// ============================================================================
// Convergence Policy
// ============================================================================

/// What an iterative routine does when it exhausts its step cap
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ConvergencePolicy {
    /// Return the last iterate and log a warning
    #[default]
    BestEffort,
    /// Fail with `DecimalError::NonConvergence`
    Error,
}

// ============================================================================
// Complete Configuration
// ============================================================================

/// Configuration for one numeric profile.
///
/// A plain value: copies are independent, and a [`Context`](crate::engine::Context)
/// built from a modified copy never affects contexts built from the original.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Config {
    /// Allow binary operations between values of different precision
    /// (the result takes the larger precision)
    pub allow_precision_mismatch: bool,

    /// Let `Decimal::apply` overwrite its receiver with the result
    pub mutate_result: bool,

    /// Rounding applied whenever precision is reduced
    pub rounding_mode: RoundingMode,

    /// Guard digits carried during multiplication, division and parsing
    pub extra_precision: u32,

    /// Pi computation strategy
    pub pi_algorithm: PiAlgorithm,

    /// Step cap for trigonometric series and Newton inversions
    pub trig_max_steps: usize,

    /// Step cap for logarithm series
    pub ln_max_steps: usize,

    /// Step cap for exponential series
    pub exp_max_steps: usize,

    /// Step cap for Newton root finding
    pub root_max_steps: usize,

    /// Outcome when any step cap is reached
    pub convergence_policy: ConvergencePolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            allow_precision_mismatch: true,
            mutate_result: false,
            rounding_mode: RoundingMode::Truncate,
            extra_precision: 2,
            pi_algorithm: PiAlgorithm::Chudnovsky,
            trig_max_steps: 5_000,
            ln_max_steps: 10_000,
            exp_max_steps: 100_000,
            root_max_steps: 10_000,
            convergence_policy: ConvergencePolicy::BestEffort,
        }
    }
}

impl Config {
    /// Create a configuration with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: Allow or forbid precision mismatches
    pub fn with_allow_precision_mismatch(mut self, allow: bool) -> Self {
        self.allow_precision_mismatch = allow;
        self
    }

    /// Builder method: Enable in-place results for `Decimal::apply`
    pub fn with_mutate_result(mut self, mutate: bool) -> Self {
        self.mutate_result = mutate;
        self
    }

    /// Builder method: Set rounding mode
    pub fn with_rounding_mode(mut self, mode: RoundingMode) -> Self {
        self.rounding_mode = mode;
        self
    }

    /// Builder method: Set guard digits
    pub fn with_extra_precision(mut self, digits: u32) -> Self {
        self.extra_precision = digits;
        self
    }

    /// Builder method: Set pi algorithm
    pub fn with_pi_algorithm(mut self, algorithm: PiAlgorithm) -> Self {
        self.pi_algorithm = algorithm;
        self
    }

    /// Builder method: Set trigonometric step cap
    pub fn with_trig_max_steps(mut self, steps: usize) -> Self {
        self.trig_max_steps = steps;
        self
    }

    /// Builder method: Set logarithm step cap
    pub fn with_ln_max_steps(mut self, steps: usize) -> Self {
        self.ln_max_steps = steps;
        self
    }

    /// Builder method: Set exponential step cap
    pub fn with_exp_max_steps(mut self, steps: usize) -> Self {
        self.exp_max_steps = steps;
        self
    }

    /// Builder method: Set root-finding step cap
    pub fn with_root_max_steps(mut self, steps: usize) -> Self {
        self.root_max_steps = steps;
        self
    }

    /// Builder method: Set convergence policy
    pub fn with_convergence_policy(mut self, policy: ConvergencePolicy) -> Self {
        self.convergence_policy = policy;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.trig_max_steps == 0 {
            return Err("Trigonometric step cap must be positive".to_string());
        }
        if self.ln_max_steps == 0 {
            return Err("Logarithm step cap must be positive".to_string());
        }
        if self.exp_max_steps == 0 {
            return Err("Exponential step cap must be positive".to_string());
        }
        if self.root_max_steps == 0 {
            return Err("Root-finding step cap must be positive".to_string());
        }
        if self.extra_precision > 1_000 {
            return Err("Guard digits cannot exceed 1000".to_string());
        }
        Ok(())
    }

    pub(crate) fn trig_limits(&self) -> IterationLimits {
        self.limits(self.trig_max_steps)
    }

    pub(crate) fn ln_limits(&self) -> IterationLimits {
        self.limits(self.ln_max_steps)
    }

    pub(crate) fn exp_limits(&self) -> IterationLimits {
        self.limits(self.exp_max_steps)
    }

    pub(crate) fn root_limits(&self) -> IterationLimits {
        self.limits(self.root_max_steps)
    }

    fn limits(&self, max_steps: usize) -> IterationLimits {
        IterationLimits {
            max_steps,
            policy: self.convergence_policy,
        }
    }
}

// ============================================================================
// Preset Configurations (Factory Methods)
// ============================================================================

impl Config {
    /// Strict profile
    /// - Operands must share one precision
    /// - Step-cap exhaustion is an error
    pub fn strict() -> Self {
        Self::default()
            .with_allow_precision_mismatch(false)
            .with_convergence_policy(ConvergencePolicy::Error)
    }

    /// High-precision profile
    /// - Ten guard digits
    /// - Larger step caps for long series
    pub fn high_precision() -> Self {
        Self::default()
            .with_extra_precision(10)
            .with_trig_max_steps(50_000)
            .with_ln_max_steps(100_000)
    }

    /// Financial profile
    /// - Half-up rounding
    /// - Mismatched precisions allowed
    pub fn financial() -> Self {
        Self::default().with_rounding_mode(RoundingMode::HalfUp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert!(config.allow_precision_mismatch);
        assert!(!config.mutate_result);
        assert_eq!(config.rounding_mode, RoundingMode::Truncate);
        assert_eq!(config.extra_precision, 2);
        assert_eq!(config.pi_algorithm, PiAlgorithm::Chudnovsky);
        assert_eq!(config.trig_max_steps, 5_000);
        assert_eq!(config.ln_max_steps, 10_000);
        assert_eq!(config.convergence_policy, ConvergencePolicy::BestEffort);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = Config::new()
            .with_rounding_mode(RoundingMode::HalfDown)
            .with_extra_precision(5)
            .with_pi_algorithm(PiAlgorithm::Leibniz);

        assert_eq!(config.rounding_mode, RoundingMode::HalfDown);
        assert_eq!(config.extra_precision, 5);
        assert_eq!(config.pi_algorithm, PiAlgorithm::Leibniz);
    }

    #[test]
    fn test_copies_are_independent() {
        let base = Config::default();
        let changed = base.clone().with_rounding_mode(RoundingMode::Ceil);
        assert_eq!(base.rounding_mode, RoundingMode::Truncate);
        assert_eq!(changed.rounding_mode, RoundingMode::Ceil);
    }

    #[test]
    fn test_validation() {
        assert!(Config::default().with_ln_max_steps(0).validate().is_err());
        assert!(Config::default().with_root_max_steps(0).validate().is_err());
        assert!(Config::default()
            .with_extra_precision(5_000)
            .validate()
            .is_err());
    }

    #[test]
    fn test_preset_configs() {
        let strict = Config::strict();
        assert!(!strict.allow_precision_mismatch);
        assert_eq!(strict.convergence_policy, ConvergencePolicy::Error);

        assert_eq!(Config::high_precision().extra_precision, 10);
        assert_eq!(Config::financial().rounding_mode, RoundingMode::HalfUp);
    }

    #[test]
    fn test_limits_follow_policy() {
        let limits = Config::strict().root_limits();
        assert_eq!(limits.max_steps, 10_000);
        assert_eq!(limits.policy, ConvergencePolicy::Error);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_round_trip() {
        let config = Config::financial().with_pi_algorithm(PiAlgorithm::Leibniz);
        let json = serde_json::to_string(&config).unwrap();
        let back: Config = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
