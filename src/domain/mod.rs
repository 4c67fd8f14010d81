// ============================================================================
// Domain Module
// Configuration value objects shared by every numeric profile
// ============================================================================

pub mod config;

pub use config::{Config, ConvergencePolicy, PiAlgorithm};
