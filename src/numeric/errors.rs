// ============================================================================
// Decimal Errors
// Error types for arbitrary-precision decimal operations
// ============================================================================

use std::fmt;

/// Errors that can occur during decimal arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DecimalError {
    /// Operands have different precisions and mismatches are disallowed
    PrecisionMismatch,
    /// Attempted division (or remainder, or reciprocal) by zero
    DivisionByZero,
    /// Argument outside the mathematical domain of the operation
    DomainError(&'static str),
    /// Precision, base or count outside the supported range
    RangeError(&'static str),
    /// Input string or value is invalid
    InvalidInput,
    /// Aggregate over an empty collection
    EmptyInput,
    /// Iterative method hit its step cap under the `Error` convergence policy
    NonConvergence {
        operation: &'static str,
        steps: usize,
    },
}

impl fmt::Display for DecimalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecimalError::PrecisionMismatch => {
                write!(f, "precision mismatch between operands")
            }
            DecimalError::DivisionByZero => write!(f, "division by zero"),
            DecimalError::DomainError(reason) => write!(f, "domain error: {}", reason),
            DecimalError::RangeError(reason) => write!(f, "range error: {}", reason),
            DecimalError::InvalidInput => write!(f, "invalid input: could not parse value"),
            DecimalError::EmptyInput => write!(f, "empty input: at least one value required"),
            DecimalError::NonConvergence { operation, steps } => write!(
                f,
                "{} did not converge within {} steps",
                operation, steps
            ),
        }
    }
}

impl std::error::Error for DecimalError {}

/// Result type alias for decimal operations
pub type DecimalResult<T> = Result<T, DecimalError>;
