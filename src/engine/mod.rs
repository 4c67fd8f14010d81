// ============================================================================
// Engine Module
// Numeric profiles: context, constant cache and factories
// ============================================================================

mod cache;
mod context;

pub mod factory;

pub use cache::{CacheEntry, CacheOutcome, ConstantCache};
pub use context::{Context, KERNEL_GUARD_DIGITS};
pub use factory::{create_from_config, create_pi_strategy, ContextBuilder};
