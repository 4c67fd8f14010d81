// ============================================================================
// Numeric Module
// Arbitrary-precision decimal value type and its rescaling core
// ============================================================================
//
// This module provides:
// - Decimal: signed BigInt magnitude with a per-value fractional precision
// - RoundingMode + round_magnitude: the single rounding authority
// - rescale_pair / batch_rescale: precision alignment for operations
// - DecimalError: error types for every operation in the crate
//
// Design principles:
// - No floating-point operations outside explicit host-float interop
// - All fallible operations return Result (no panics)
// - Precision is exact: trailing zeros are represented, never implied

mod decimal;
mod errors;
mod format;
pub(crate) mod kernel;
mod parse;
mod rescale;
mod rounding;

pub(crate) use decimal::check_precision;
pub use decimal::{Decimal, DEFAULT_PRECISION, MAX_PRECISION};
pub use errors::{DecimalError, DecimalResult};
pub use parse::DecimalSource;
pub(crate) use parse::{build, from_radix};
pub use rescale::{batch_rescale, rescale_pair, BatchRescaled, Rescaled};
pub use rounding::{round_magnitude, RoundingMode};
