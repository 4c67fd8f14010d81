// ============================================================================
// Constants Module
// Pi strategies and the cached named constants of a profile
// ============================================================================

mod named;
mod pi;

pub use pi::{ChudnovskyPi, HostFloatPi, LeibnizPi, MachinPi, HOST_FLOAT_PI_DIGITS};
