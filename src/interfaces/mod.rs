// ============================================================================
// Interfaces Module
// Contains all trait definitions and contracts
// ============================================================================

mod event_handler;
mod pi_strategy;

pub use event_handler::{
    CacheEvent, CacheEventHandler, LoggingCacheEventHandler, NoOpCacheEventHandler,
};
pub use pi_strategy::PiStrategy;
