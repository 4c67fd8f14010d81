// ============================================================================
// Rescaling
// Aligns operands to a shared working precision before an operation
// ============================================================================

use super::decimal::Decimal;
use super::errors::{DecimalError, DecimalResult};
use super::kernel::pow10;
use crate::domain::Config;
use num_bigint::BigInt;

/// Two magnitudes at a shared working precision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rescaled {
    pub lhs: BigInt,
    pub rhs: BigInt,
    /// Scale both magnitudes are expressed at (target plus any guard digits)
    pub working: u32,
    /// Precision the final result is rounded to
    pub target: u32,
}

/// Any number of magnitudes at a shared working precision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchRescaled {
    pub values: Vec<BigInt>,
    pub working: u32,
    pub target: u32,
}

fn widen(value: &Decimal, working: u32) -> BigInt {
    value.magnitude() * pow10(working - value.precision())
}

/// Align `a` and `b` to `max(pa, pb)`, plus the configured guard digits when
/// `use_guard` is set.
///
/// # Errors
/// Returns `PrecisionMismatch` when the precisions differ and the
/// configuration disallows mismatches.
pub fn rescale_pair(
    a: &Decimal,
    b: &Decimal,
    use_guard: bool,
    config: &Config,
) -> DecimalResult<Rescaled> {
    if a.precision() != b.precision() && !config.allow_precision_mismatch {
        return Err(DecimalError::PrecisionMismatch);
    }

    let target = a.precision().max(b.precision());
    let working = if use_guard {
        target + config.extra_precision
    } else {
        target
    };

    Ok(Rescaled {
        lhs: widen(a, working),
        rhs: widen(b, working),
        working,
        target,
    })
}

/// Align every value to one working precision.
///
/// # Errors
/// - `EmptyInput` for an empty slice
/// - `PrecisionMismatch` when precisions differ and mismatches are disallowed
pub fn batch_rescale(
    values: &[Decimal],
    use_guard: bool,
    config: &Config,
) -> DecimalResult<BatchRescaled> {
    let first = values.first().ok_or(DecimalError::EmptyInput)?;
    if !config.allow_precision_mismatch
        && values.iter().any(|v| v.precision() != first.precision())
    {
        return Err(DecimalError::PrecisionMismatch);
    }

    let target = values
        .iter()
        .map(Decimal::precision)
        .max()
        .unwrap_or_default();
    let working = if use_guard {
        target + config.extra_precision
    } else {
        target
    };

    Ok(BatchRescaled {
        values: values.iter().map(|v| widen(v, working)).collect(),
        working,
        target,
    })
}
