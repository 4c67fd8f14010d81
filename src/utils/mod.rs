// ============================================================================
// Utilities Module
// Logging setup for binaries, tests and benches
// ============================================================================

/// Install a `tracing-subscriber` formatter at `level`.
///
/// Returns `false` when a global subscriber was already installed.
#[cfg(feature = "logging")]
pub fn init_logging(level: tracing::Level) -> bool {
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .try_init()
        .is_ok()
}
