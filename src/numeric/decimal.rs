// ============================================================================
// Arbitrary-Precision Decimal
// Signed fixed-point decimal with per-value fractional precision
// ============================================================================

use super::errors::{DecimalError, DecimalResult};
use super::kernel::pow10;
use super::rounding::{round_magnitude, RoundingMode};
use crate::engine::Context;
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{Signed, ToPrimitive, Zero};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Neg;

/// Largest supported fractional precision.
pub const MAX_PRECISION: u32 = 100_000;

/// Precision used when a caller does not pick one.
pub const DEFAULT_PRECISION: u32 = 20;

/// Arbitrary-precision decimal number.
///
/// Represents `magnitude / 10^precision`. The precision is exact: `1.50`
/// at precision 2 keeps its trailing zero until [`Decimal::scale`] strips it.
///
/// Equality, ordering and hashing compare numeric values, so `1.5` at
/// precision 1 equals `1.50` at precision 2.
///
/// # Example
/// ```
/// use decimal_engine::prelude::*;
///
/// let ctx = Context::default();
/// let a = ctx.decimal("3.14159", 5).unwrap();
/// let b = ctx.decimal("2.71828", 5).unwrap();
/// assert_eq!(a.add(&b, &ctx).unwrap().to_string(), "5.85987");
/// ```
#[derive(Clone)]
pub struct Decimal {
    magnitude: BigInt,
    precision: u32,
}

impl Decimal {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Create from a raw scaled magnitude.
    #[inline]
    pub fn from_raw(magnitude: BigInt, precision: u32) -> Self {
        Self {
            magnitude,
            precision,
        }
    }

    /// Zero at the given precision.
    #[inline]
    pub fn zero(precision: u32) -> Self {
        Self::from_raw(BigInt::zero(), precision)
    }

    /// One at the given precision.
    #[inline]
    pub fn one(precision: u32) -> Self {
        Self::from_raw(pow10(precision), precision)
    }

    /// Create from an integer value.
    ///
    /// # Errors
    /// Returns `RangeError` if `precision` exceeds [`MAX_PRECISION`].
    pub fn from_i64(value: i64, precision: u32) -> DecimalResult<Self> {
        Self::from_bigint(BigInt::from(value), precision)
    }

    /// Create from an arbitrary-precision integer.
    pub fn from_bigint(value: BigInt, precision: u32) -> DecimalResult<Self> {
        check_precision(precision)?;
        Ok(Self::from_raw(value * pow10(precision), precision))
    }

    /// Build a result computed at `from` digits, rounded to `to` digits.
    pub(crate) fn from_raw_rounded(
        raw: &BigInt,
        from: u32,
        to: u32,
        mode: RoundingMode,
    ) -> Self {
        Self::from_raw(round_magnitude(raw, from, to, mode), to)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// The raw scaled magnitude.
    #[inline]
    pub fn magnitude(&self) -> &BigInt {
        &self.magnitude
    }

    /// Number of fractional digits.
    #[inline]
    pub fn precision(&self) -> u32 {
        self.precision
    }

    /// Raw magnitude re-expressed at `scale`, truncating when narrowing.
    pub(crate) fn raw_at(&self, scale: u32) -> BigInt {
        round_magnitude(&self.magnitude, self.precision, scale, RoundingMode::Truncate)
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.magnitude.is_zero()
    }

    #[inline]
    pub fn is_positive(&self) -> bool {
        self.magnitude.is_positive()
    }

    #[inline]
    pub fn is_negative(&self) -> bool {
        self.magnitude.is_negative()
    }

    /// True when there are no nonzero fractional digits.
    pub fn is_integer(&self) -> bool {
        (&self.magnitude % pow10(self.precision)).is_zero()
    }

    /// -1, 0 or 1 at this value's precision.
    pub fn signum(&self) -> Decimal {
        let sign = if self.is_zero() {
            0
        } else if self.is_negative() {
            -1
        } else {
            1
        };
        Self::from_raw(BigInt::from(sign) * pow10(self.precision), self.precision)
    }

    /// Integer part, truncated toward zero.
    pub fn integer_part(&self) -> BigInt {
        &self.magnitude / pow10(self.precision)
    }

    /// Absolute value.
    pub fn abs(&self) -> Decimal {
        Self::from_raw(self.magnitude.abs(), self.precision)
    }

    // ========================================================================
    // Precision Management
    // ========================================================================

    /// Canonical form: trailing zero digits stripped from the magnitude.
    ///
    /// Idempotent. Zero canonicalizes to precision 0.
    pub fn scale(&self) -> Decimal {
        if self.is_zero() {
            return Self::zero(0);
        }
        let ten = BigInt::from(10u32);
        let mut magnitude = self.magnitude.clone();
        let mut precision = self.precision;
        while precision > 0 {
            let (quotient, remainder) = magnitude.div_rem(&ten);
            if !remainder.is_zero() {
                break;
            }
            magnitude = quotient;
            precision -= 1;
        }
        Self::from_raw(magnitude, precision)
    }

    /// Re-express at `precision` through the configured rounding mode.
    pub fn with_precision(&self, precision: u32, ctx: &Context) -> DecimalResult<Decimal> {
        check_precision(precision)?;
        Ok(Self::from_raw_rounded(
            &self.magnitude,
            self.precision,
            precision,
            ctx.config().rounding_mode,
        ))
    }

    /// Round to an integer with `mode`, keeping this value's precision.
    pub fn round_with(&self, mode: RoundingMode) -> Decimal {
        let whole = round_magnitude(&self.magnitude, self.precision, 0, mode);
        Self::from_raw(whole * pow10(self.precision), self.precision)
    }

    pub fn trunc(&self) -> Decimal {
        self.round_with(RoundingMode::Truncate)
    }

    pub fn floor(&self) -> Decimal {
        self.round_with(RoundingMode::Floor)
    }

    pub fn ceil(&self) -> Decimal {
        self.round_with(RoundingMode::Ceil)
    }

    /// Round half away from zero to an integer.
    pub fn round(&self) -> Decimal {
        self.round_with(RoundingMode::HalfUp)
    }

    /// Run `op` and, when `mutate_result` is enabled, store its result in `self`.
    ///
    /// The result is returned either way. With mutation enabled every other
    /// holder of a clone keeps the old value; only this receiver changes.
    pub fn apply<F>(&mut self, ctx: &Context, op: F) -> DecimalResult<Decimal>
    where
        F: FnOnce(&Decimal, &Context) -> DecimalResult<Decimal>,
    {
        let result = op(self, ctx)?;
        if ctx.config().mutate_result {
            *self = result.clone();
        }
        Ok(result)
    }

    // ========================================================================
    // Comparison
    // ========================================================================

    /// Compare numeric values regardless of precision.
    pub fn cmp_value(&self, other: &Decimal) -> Ordering {
        match self.precision.cmp(&other.precision) {
            Ordering::Equal => self.magnitude.cmp(&other.magnitude),
            Ordering::Less => {
                let widened = &self.magnitude * pow10(other.precision - self.precision);
                widened.cmp(&other.magnitude)
            }
            Ordering::Greater => {
                let widened = &other.magnitude * pow10(self.precision - other.precision);
                self.magnitude.cmp(&widened)
            }
        }
    }

    /// The smaller of two values (the left one on ties).
    pub fn min_of(&self, other: &Decimal) -> Decimal {
        if other.cmp_value(self) == Ordering::Less {
            other.clone()
        } else {
            self.clone()
        }
    }

    /// The larger of two values (the left one on ties).
    pub fn max_of(&self, other: &Decimal) -> Decimal {
        if other.cmp_value(self) == Ordering::Greater {
            other.clone()
        } else {
            self.clone()
        }
    }

    // ========================================================================
    // Conversion
    // ========================================================================

    /// Lossy conversion to a host float, for interop only.
    pub fn to_f64(&self) -> f64 {
        self.to_string().parse().unwrap_or(f64::NAN)
    }

    /// Exact conversion from `rust_decimal::Decimal`.
    pub fn from_rust_decimal(value: rust_decimal::Decimal) -> Decimal {
        Self::from_raw(BigInt::from(value.mantissa()), value.scale())
    }

    /// Convert to `rust_decimal::Decimal`.
    ///
    /// # Errors
    /// Returns `RangeError` if the value needs more than 28 fractional digits
    /// after canonicalization or does not fit the 96-bit mantissa.
    pub fn to_rust_decimal(&self) -> DecimalResult<rust_decimal::Decimal> {
        let canonical = self.scale();
        let mantissa = canonical
            .magnitude
            .to_i128()
            .ok_or(DecimalError::RangeError("value does not fit rust_decimal"))?;
        rust_decimal::Decimal::try_from_i128_with_scale(mantissa, canonical.precision)
            .map_err(|_| DecimalError::RangeError("value does not fit rust_decimal"))
    }
}

/// Validate a requested precision.
pub(crate) fn check_precision(precision: u32) -> DecimalResult<()> {
    if precision > MAX_PRECISION {
        Err(DecimalError::RangeError("precision exceeds the supported maximum"))
    } else {
        Ok(())
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl Default for Decimal {
    #[inline]
    fn default() -> Self {
        Self::zero(DEFAULT_PRECISION)
    }
}

impl PartialEq for Decimal {
    fn eq(&self, other: &Self) -> bool {
        self.cmp_value(other) == Ordering::Equal
    }
}

impl Eq for Decimal {}

impl PartialOrd for Decimal {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp_value(other))
    }
}

impl Ord for Decimal {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.cmp_value(other)
    }
}

impl Hash for Decimal {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let canonical = self.scale();
        canonical.magnitude.hash(state);
        canonical.precision.hash(state);
    }
}

impl Neg for Decimal {
    type Output = Decimal;

    #[inline]
    fn neg(self) -> Self::Output {
        Decimal::from_raw(-self.magnitude, self.precision)
    }
}

impl Neg for &Decimal {
    type Output = Decimal;

    #[inline]
    fn neg(self) -> Self::Output {
        Decimal::from_raw(-&self.magnitude, self.precision)
    }
}

impl From<rust_decimal::Decimal> for Decimal {
    fn from(value: rust_decimal::Decimal) -> Self {
        Decimal::from_rust_decimal(value)
    }
}

// ============================================================================
// Display and Debug
// ============================================================================

impl fmt::Debug for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Decimal({}, precision={})", self, self.precision)
    }
}

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.magnitude.magnitude().to_string();
        let sign = if self.is_negative() { "-" } else { "" };
        let precision = self.precision as usize;

        if precision == 0 {
            return write!(f, "{}{}", sign, digits);
        }

        let padded = format!("{:0>width$}", digits, width = precision + 1);
        let (int_part, frac_part) = padded.split_at(padded.len() - precision);
        write!(f, "{}{}.{}", sign, int_part, frac_part)
    }
}

// ============================================================================
// Serde
// ============================================================================

#[cfg(feature = "serde")]
impl serde::Serialize for Decimal {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Decimal {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

// ============================================================================
// Tests
// ============================================================================
