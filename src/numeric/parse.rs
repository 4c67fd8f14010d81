// ============================================================================
// Decimal Parsing
// Construction from text, native numbers and other radixes
// ============================================================================

use super::decimal::{check_precision, Decimal, MAX_PRECISION};
use super::errors::{DecimalError, DecimalResult};
use super::kernel::pow10;
use super::rounding::round_magnitude;
use crate::domain::Config;
use num_bigint::BigInt;
use num_traits::{Num, Zero};

/// Any value a [`Decimal`] can be constructed from.
#[derive(Debug, Clone)]
pub enum DecimalSource<'a> {
    /// Decimal text, optionally in exponential notation ("1.5e-3")
    Text(&'a str),
    Integer(i64),
    Float(f64),
    BigInteger(BigInt),
    /// Existing value, re-expressed at the requested precision
    Decimal(&'a Decimal),
}

impl<'a> From<&'a str> for DecimalSource<'a> {
    fn from(value: &'a str) -> Self {
        DecimalSource::Text(value)
    }
}

impl<'a> From<&'a String> for DecimalSource<'a> {
    fn from(value: &'a String) -> Self {
        DecimalSource::Text(value.as_str())
    }
}

impl From<i64> for DecimalSource<'_> {
    fn from(value: i64) -> Self {
        DecimalSource::Integer(value)
    }
}

impl From<i32> for DecimalSource<'_> {
    fn from(value: i32) -> Self {
        DecimalSource::Integer(value as i64)
    }
}

impl From<u64> for DecimalSource<'_> {
    fn from(value: u64) -> Self {
        DecimalSource::BigInteger(BigInt::from(value))
    }
}

impl From<f64> for DecimalSource<'_> {
    fn from(value: f64) -> Self {
        DecimalSource::Float(value)
    }
}

impl From<BigInt> for DecimalSource<'_> {
    fn from(value: BigInt) -> Self {
        DecimalSource::BigInteger(value)
    }
}

impl<'a> From<&'a Decimal> for DecimalSource<'a> {
    fn from(value: &'a Decimal) -> Self {
        DecimalSource::Decimal(value)
    }
}

/// Build a decimal at `precision` from any supported source.
pub(crate) fn build(
    source: DecimalSource<'_>,
    precision: u32,
    config: &Config,
) -> DecimalResult<Decimal> {
    check_precision(precision)?;
    match source {
        DecimalSource::Text(text) => from_text(text, precision, config),
        DecimalSource::Integer(value) => Decimal::from_i64(value, precision),
        DecimalSource::BigInteger(value) => Decimal::from_bigint(value, precision),
        DecimalSource::Float(value) => {
            if !value.is_finite() {
                return Err(DecimalError::InvalidInput);
            }
            // Shortest round-trip representation of the float
            from_text(&format!("{:e}", value), precision, config)
        }
        DecimalSource::Decimal(value) => Ok(Decimal::from_raw_rounded(
            value.magnitude(),
            value.precision(),
            precision,
            config.rounding_mode,
        )),
    }
}

// ============================================================================
// Text Splitting
// ============================================================================

/// Sign, integer digits and fractional digits of a base-10 literal.
#[derive(Debug, PartialEq, Eq)]
struct SplitText {
    negative: bool,
    integer: String,
    fraction: String,
}

fn strip_sign(text: &str) -> (bool, &str) {
    if let Some(rest) = text.strip_prefix('-') {
        (true, rest)
    } else if let Some(rest) = text.strip_prefix('+') {
        (false, rest)
    } else {
        (false, text)
    }
}

/// Split a literal into sign, integer and fraction, applying any exponent.
fn split_text(text: &str) -> DecimalResult<SplitText> {
    let text = text.trim();
    let (negative, unsigned) = strip_sign(text);

    let (mantissa, exponent) = match unsigned.find(['e', 'E']) {
        Some(pos) => {
            let exponent: i64 = unsigned[pos + 1..]
                .parse()
                .map_err(|_| DecimalError::InvalidInput)?;
            (&unsigned[..pos], exponent)
        }
        None => (unsigned, 0),
    };

    let (integer, fraction) = match mantissa.find('.') {
        Some(pos) => (&mantissa[..pos], &mantissa[pos + 1..]),
        None => (mantissa, ""),
    };

    let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if (integer.is_empty() && fraction.is_empty()) || !all_digits(integer) || !all_digits(fraction)
    {
        return Err(DecimalError::InvalidInput);
    }
    if exponent.unsigned_abs() > MAX_PRECISION as u64 {
        return Err(DecimalError::RangeError("exponent out of range"));
    }

    if exponent == 0 {
        return Ok(SplitText {
            negative,
            integer: integer.to_string(),
            fraction: fraction.to_string(),
        });
    }

    // Move the decimal point across the concatenated digits
    let digits = format!("{}{}", integer, fraction);
    let point = integer.len() as i64 + exponent;
    let (integer, fraction) = if point <= 0 {
        (
            String::new(),
            format!("{}{}", "0".repeat(point.unsigned_abs() as usize), digits),
        )
    } else if point as usize >= digits.len() {
        (
            format!("{}{}", digits, "0".repeat(point as usize - digits.len())),
            String::new(),
        )
    } else {
        let (int, frac) = digits.split_at(point as usize);
        (int.to_string(), frac.to_string())
    };

    Ok(SplitText {
        negative,
        integer,
        fraction,
    })
}

fn parse_digits(digits: &str, radix: u32) -> DecimalResult<BigInt> {
    if digits.is_empty() {
        Ok(BigInt::zero())
    } else {
        BigInt::from_str_radix(digits, radix).map_err(|_| DecimalError::InvalidInput)
    }
}

/// Parse base-10 text at `precision`.
///
/// The fractional digits are padded or cut to `precision + extra_precision`
/// and the result is rounded down to `precision` with the configured mode.
pub(crate) fn from_text(text: &str, precision: u32, config: &Config) -> DecimalResult<Decimal> {
    let split = split_text(text)?;
    let working = precision + config.extra_precision;

    let mut fraction = split.fraction;
    fraction.truncate(working as usize);
    let fraction = format!("{:0<width$}", fraction, width = working as usize);

    let mut raw = parse_digits(&split.integer, 10)? * pow10(working) + parse_digits(&fraction, 10)?;
    if split.negative {
        raw = -raw;
    }
    Ok(Decimal::from_raw_rounded(
        &raw,
        working,
        precision,
        config.rounding_mode,
    ))
}

/// Parse text in any base from 2 to 36 at `precision`.
///
/// Digits use the alphabet `0-9a-z` (case-insensitive). Base 10 accepts
/// exponential notation; other bases accept only `[-]int[.frac]`.
pub(crate) fn from_radix(
    text: &str,
    precision: u32,
    radix: u32,
    config: &Config,
) -> DecimalResult<Decimal> {
    if !(2..=36).contains(&radix) {
        return Err(DecimalError::RangeError("radix must be between 2 and 36"));
    }
    check_precision(precision)?;
    if radix == 10 {
        return from_text(text, precision, config);
    }

    let (negative, unsigned) = strip_sign(text.trim());
    let (integer, fraction) = match unsigned.find('.') {
        Some(pos) => (&unsigned[..pos], &unsigned[pos + 1..]),
        None => (unsigned, ""),
    };
    let valid = |s: &str| s.chars().all(|c| c.to_digit(radix).is_some());
    if (integer.is_empty() && fraction.is_empty()) || !valid(integer) || !valid(fraction) {
        return Err(DecimalError::InvalidInput);
    }

    let working = precision + config.extra_precision;
    let scale = pow10(working);
    let numerator = parse_digits(fraction, radix)?;
    let denominator = BigInt::from(radix).pow(fraction.len() as u32);

    let mut raw = parse_digits(integer, radix)? * &scale + numerator * &scale / denominator;
    if negative {
        raw = -raw;
    }
    Ok(Decimal::from_raw(
        round_magnitude(&raw, working, precision, config.rounding_mode),
        precision,
    ))
}

impl std::str::FromStr for Decimal {
    type Err = DecimalError;

    /// Parse exactly: the precision is the number of fractional digits.
    ///
    /// # Examples
    /// - "123.456" -> precision 3
    /// - "1.5e-3" -> 0.0015, precision 4
    /// - "-42" -> precision 0
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let split = split_text(s)?;
        let precision = split.fraction.len() as u32;
        check_precision(precision)?;
        let digits = format!("{}{}", split.integer, split.fraction);
        let mut raw = parse_digits(&digits, 10)?;
        if split.negative {
            raw = -raw;
        }
        Ok(Decimal::from_raw(raw, precision))
    }
}
