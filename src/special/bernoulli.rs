// ============================================================================
// Bernoulli Numbers
// Akiyama–Tanigawa recurrence on exact rationals
// ============================================================================

use crate::engine::Context;
use crate::numeric::kernel::pow10;
use crate::numeric::{check_precision, Decimal, DecimalResult};
use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::One;

/// Exact fraction in lowest terms with a positive denominator.
pub type Rational = BigRational;

/// Decimal approximation of `value` at `precision`, rounded with the profile's mode.
pub fn rational_to_decimal(
    value: &Rational,
    precision: u32,
    ctx: &Context,
) -> DecimalResult<Decimal> {
    check_precision(precision)?;
    let scale = precision + ctx.config().extra_precision;
    let raw = value.numer() * pow10(scale) / value.denom();
    Ok(ctx.finish(&raw, scale, precision))
}

/// Bernoulli numbers `B_0 ..= B_n`, with the convention `B_1 = +1/2`.
pub fn bernoulli(n: usize) -> Vec<Rational> {
    let mut row: Vec<Rational> = Vec::with_capacity(n + 1);
    let mut numbers = Vec::with_capacity(n + 1);
    for m in 0..=n {
        row.push(Rational::new(BigInt::one(), BigInt::from(m + 1)));
        for j in (1..=m).rev() {
            row[j - 1] = (&row[j - 1] - &row[j]) * Rational::from_integer(BigInt::from(j));
        }
        numbers.push(row[0].clone());
    }
    numbers
}
