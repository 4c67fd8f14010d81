// ============================================================================
// Rounding
// The single rounding authority for every precision change
// ============================================================================

use super::kernel::pow10;
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{Signed, Zero};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How discarded digits are resolved when precision is reduced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RoundingMode {
    /// Toward zero (drop the digits)
    #[default]
    Truncate,
    /// Away from zero whenever anything is discarded
    Up,
    /// Toward positive infinity
    Ceil,
    /// Toward negative infinity
    Floor,
    /// Away from zero when the discarded part is at least one half
    HalfUp,
    /// Away from zero only when the discarded part is more than one half
    HalfDown,
}

/// Re-express `value` (scaled by `10^from`) at scale `10^to`.
///
/// Widening pads with zeros and is lossless. Narrowing splits the magnitude
/// into quotient and remainder at the scale difference and applies `mode`.
pub fn round_magnitude(value: &BigInt, from: u32, to: u32, mode: RoundingMode) -> BigInt {
    if to >= from {
        return value * pow10(to - from);
    }

    let divisor = pow10(from - to);
    // Truncating division: quotient toward zero, remainder carries the sign of value
    let (quotient, remainder) = value.div_rem(&divisor);
    if remainder.is_zero() {
        return quotient;
    }

    let away = if value.is_negative() {
        &quotient - 1
    } else {
        &quotient + 1
    };

    match mode {
        RoundingMode::Truncate => quotient,
        RoundingMode::Up => away,
        RoundingMode::Ceil => {
            if remainder.is_positive() {
                quotient + 1
            } else {
                quotient
            }
        }
        RoundingMode::Floor => {
            if remainder.is_negative() {
                quotient - 1
            } else {
                quotient
            }
        }
        RoundingMode::HalfUp => {
            if remainder.abs() * 2 >= divisor {
                away
            } else {
                quotient
            }
        }
        RoundingMode::HalfDown => {
            if remainder.abs() * 2 > divisor {
                away
            } else {
                quotient
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn round(value: i64, from: u32, to: u32, mode: RoundingMode) -> i64 {
        use num_traits::ToPrimitive;
        round_magnitude(&BigInt::from(value), from, to, mode)
            .to_i64()
            .unwrap()
    }

    #[test]
    fn test_widening_is_lossless() {
        assert_eq!(round(12345, 2, 5, RoundingMode::Truncate), 12_345_000);
        assert_eq!(round(-7, 0, 3, RoundingMode::HalfUp), -7000);
    }

    #[test]
    fn test_truncate() {
        assert_eq!(round(12349, 3, 1, RoundingMode::Truncate), 123);
        assert_eq!(round(-12349, 3, 1, RoundingMode::Truncate), -123);
    }

    #[test]
    fn test_up_and_down_directions() {
        assert_eq!(round(12341, 3, 1, RoundingMode::Up), 124);
        assert_eq!(round(-12341, 3, 1, RoundingMode::Up), -124);
        assert_eq!(round(12341, 3, 1, RoundingMode::Ceil), 124);
        assert_eq!(round(-12341, 3, 1, RoundingMode::Ceil), -123);
        assert_eq!(round(12341, 3, 1, RoundingMode::Floor), 123);
        assert_eq!(round(-12341, 3, 1, RoundingMode::Floor), -124);
    }

    #[test]
    fn test_half_modes_on_ties() {
        // 1.25 -> one digit
        assert_eq!(round(125, 2, 1, RoundingMode::HalfUp), 13);
        assert_eq!(round(125, 2, 1, RoundingMode::HalfDown), 12);
        assert_eq!(round(-125, 2, 1, RoundingMode::HalfUp), -13);
        assert_eq!(round(-125, 2, 1, RoundingMode::HalfDown), -12);
        // 1.26 rounds away in both
        assert_eq!(round(126, 2, 1, RoundingMode::HalfDown), 13);
        assert_eq!(round(124, 2, 1, RoundingMode::HalfUp), 12);
    }

    #[test]
    fn test_exact_values_unchanged() {
        for mode in [
            RoundingMode::Truncate,
            RoundingMode::Up,
            RoundingMode::Ceil,
            RoundingMode::Floor,
            RoundingMode::HalfUp,
            RoundingMode::HalfDown,
        ] {
            assert_eq!(round(1200, 3, 1, mode), 12);
            assert_eq!(round(-1200, 3, 1, mode), -12);
        }
    }
}
