// ============================================================================
// Arithmetic Module
// Basic operations, powers and roots on Decimal
// ============================================================================

mod basic;
mod power;
mod root;

pub(crate) use root::sqrt_raw;
