// ============================================================================
// Decimal Formatting
// Fixed, exponential and radix text output
// ============================================================================

use super::decimal::Decimal;
use super::errors::{DecimalError, DecimalResult};
use super::kernel::{digit_count, pow10};
use super::rounding::round_magnitude;
use crate::engine::Context;
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{Signed, Zero};

impl Decimal {
    /// Text with exactly `digits` fractional digits, rounded with the
    /// configured mode (zero-padded when widening).
    pub fn to_fixed(&self, digits: u32, ctx: &Context) -> String {
        Decimal::from_raw_rounded(
            self.magnitude(),
            self.precision(),
            digits,
            ctx.config().rounding_mode,
        )
        .to_string()
    }

    /// Normalized scientific notation: one leading digit, `digits` fractional
    /// digits, and a signed exponent, e.g. `1.2346e+3`.
    pub fn to_exponential(&self, digits: u32, ctx: &Context) -> String {
        let mode = ctx.config().rounding_mode;
        let significant = digits + 1;

        if self.is_zero() {
            return format_exponential("", &"0".repeat(significant as usize), 0);
        }

        let length = digit_count(self.magnitude());
        let mut exponent = length as i64 - 1 - self.precision() as i64;

        let mut mantissa = if length > significant {
            round_magnitude(self.magnitude(), length - significant, 0, mode)
        } else {
            self.magnitude() * pow10(significant - length)
        };
        // 9.99 -> 10.0 carries into a new leading digit
        if digit_count(&mantissa) > significant {
            mantissa /= 10;
            exponent += 1;
        }

        let sign = if self.is_negative() { "-" } else { "" };
        format_exponential(sign, &mantissa.magnitude().to_string(), exponent)
    }

    /// Text in any base from 2 to 36 using the alphabet `0-9a-z`.
    ///
    /// The fractional part carries enough base digits to resolve every
    /// decimal place, rounded upward in the last digit so that parsing the
    /// text back at the same precision with a truncating mode restores
    /// this value exactly.
    pub fn to_string_radix(&self, radix: u32) -> DecimalResult<String> {
        if !(2..=36).contains(&radix) {
            return Err(DecimalError::RangeError("radix must be between 2 and 36"));
        }
        if radix == 10 {
            return Ok(self.to_string());
        }

        let scale = pow10(self.precision());
        let (mut integer, fraction) = self.magnitude().abs().div_rem(&scale);
        let sign = if self.is_negative() { "-" } else { "" };

        if fraction.is_zero() {
            return Ok(format!("{}{}", sign, integer.to_str_radix(radix)));
        }

        // Smallest digit count whose unit is finer than one decimal place
        let base = BigInt::from(radix);
        let mut unit = BigInt::from(1);
        let mut places = 0usize;
        while unit <= scale {
            unit *= &base;
            places += 1;
        }

        let (mut digits, remainder) = (fraction * &unit).div_rem(&scale);
        if !remainder.is_zero() {
            digits += 1;
        }
        if digits == unit {
            integer += 1;
            digits = BigInt::zero();
        }

        let text = digits.to_str_radix(radix);
        Ok(format!(
            "{}{}.{:0>width$}",
            sign,
            integer.to_str_radix(radix),
            text,
            width = places
        ))
    }
}

fn format_exponential(sign: &str, mantissa: &str, exponent: i64) -> String {
    let (lead, rest) = mantissa.split_at(1);
    let exponent_sign = if exponent < 0 { '-' } else { '+' };
    if rest.is_empty() {
        format!("{}{}e{}{}", sign, lead, exponent_sign, exponent.abs())
    } else {
        format!(
            "{}{}.{}e{}{}",
            sign,
            lead,
            rest,
            exponent_sign,
            exponent.abs()
        )
    }
}
