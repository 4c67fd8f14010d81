// ============================================================================
// Pi Strategy Interface
// Defines the contract for pluggable pi algorithms
// ============================================================================

use crate::domain::Config;
use crate::numeric::DecimalResult;
use num_bigint::BigInt;

/// Strategy pattern interface for pi computation
/// Implementations: host float, Leibniz (Euler-transformed), Machin, Chudnovsky
pub trait PiStrategy: Send + Sync {
    /// Compute pi as a raw magnitude at `scale` fractional digits
    ///
    /// # Arguments
    /// * `scale` - Number of fractional digits of the raw result
    /// * `config` - Step caps and convergence policy for inner iterations
    ///
    /// # Returns
    /// `pi · 10^scale`, accurate to within a few units in the last place
    fn compute(&self, scale: u32, config: &Config) -> DecimalResult<BigInt>;

    /// Get the algorithm name for logging
    fn name(&self) -> &str;

    /// Rank used by the constant cache: an entry produced by a higher-ranked
    /// algorithm satisfies requests for every lower rank
    fn priority(&self) -> u8;
}
