// ============================================================================
// Aggregates
// Sum, product, extrema and population statistics over slices of decimals
// ============================================================================

use crate::arithmetic::sqrt_raw;
use crate::engine::Context;
use crate::numeric::kernel::{fx_mul, pow10};
use crate::numeric::{batch_rescale, Decimal, DecimalError, DecimalResult};
use num_bigint::BigInt;
use num_integer::Integer;

/// Exact sum at the largest precision in `values`.
pub fn sum(values: &[Decimal], ctx: &Context) -> DecimalResult<Decimal> {
    let batch = batch_rescale(values, false, ctx.config())?;
    let total: BigInt = batch.values.iter().sum();
    Ok(Decimal::from_raw(total, batch.target))
}

/// Product with guard digits, rounded once.
pub fn product(values: &[Decimal], ctx: &Context) -> DecimalResult<Decimal> {
    let batch = batch_rescale(values, true, ctx.config())?;
    let raw = batch
        .values
        .iter()
        .fold(pow10(batch.working), |acc, v| fx_mul(&acc, v, batch.working));
    Ok(ctx.finish(&raw, batch.working, batch.target))
}

pub fn max(values: &[Decimal], ctx: &Context) -> DecimalResult<Decimal> {
    let batch = batch_rescale(values, false, ctx.config())?;
    let largest = batch.values.into_iter().max().ok_or(DecimalError::EmptyInput)?;
    Ok(Decimal::from_raw(largest, batch.target))
}

pub fn min(values: &[Decimal], ctx: &Context) -> DecimalResult<Decimal> {
    let batch = batch_rescale(values, false, ctx.config())?;
    let smallest = batch.values.into_iter().min().ok_or(DecimalError::EmptyInput)?;
    Ok(Decimal::from_raw(smallest, batch.target))
}

/// Arithmetic mean as a raw value at the batch's working scale.
fn mean_raw(values: &[BigInt]) -> BigInt {
    values.iter().sum::<BigInt>() / values.len()
}

/// Arithmetic mean.
pub fn average(values: &[Decimal], ctx: &Context) -> DecimalResult<Decimal> {
    let batch = batch_rescale(values, true, ctx.config())?;
    Ok(ctx.finish(&mean_raw(&batch.values), batch.working, batch.target))
}

/// Middle value; the mean of the two middle values for even lengths.
pub fn median(values: &[Decimal], ctx: &Context) -> DecimalResult<Decimal> {
    let batch = batch_rescale(values, true, ctx.config())?;
    let mut sorted = batch.values;
    sorted.sort();
    let middle = sorted.len() / 2;
    let raw = if sorted.len() % 2 == 1 {
        sorted[middle].clone()
    } else {
        (&sorted[middle - 1] + &sorted[middle]) / 2
    };
    Ok(ctx.finish(&raw, batch.working, batch.target))
}

fn variance_raw(values: &[BigInt], scale: u32) -> BigInt {
    // Floored so a constant shift of every value moves the mean exactly.
    let mean = values.iter().sum::<BigInt>().div_floor(&BigInt::from(values.len()));
    let squares: BigInt = values
        .iter()
        .map(|v| {
            let deviation = v - &mean;
            fx_mul(&deviation, &deviation, scale)
        })
        .sum();
    squares / values.len()
}

/// Population variance: the mean of squared deviations from the mean.
pub fn variance(values: &[Decimal], ctx: &Context) -> DecimalResult<Decimal> {
    let batch = batch_rescale(values, true, ctx.config())?;
    let raw = variance_raw(&batch.values, batch.working);
    Ok(ctx.finish(&raw, batch.working, batch.target))
}

/// Population standard deviation.
pub fn std_dev(values: &[Decimal], ctx: &Context) -> DecimalResult<Decimal> {
    let batch = batch_rescale(values, true, ctx.config())?;
    let raw = variance_raw(&batch.values, batch.working);
    let root = sqrt_raw(&raw, batch.working, ctx.config().root_limits())?;
    Ok(ctx.finish(&root, batch.working, batch.target))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Config;
    use proptest::prelude::*;

    fn decimals(texts: &[&str]) -> Vec<Decimal> {
        texts.iter().map(|t| t.parse().unwrap()).collect()
    }

    #[test]
    fn test_sum_and_product() {
        let ctx = Context::default();
        let values = decimals(&["1.5", "2.25", "-0.75"]);
        assert_eq!(sum(&values, &ctx).unwrap().to_string(), "3.00");
        assert_eq!(product(&values, &ctx).unwrap().to_string(), "-2.53");
    }

    #[test]
    fn test_extrema() {
        let ctx = Context::default();
        let values = decimals(&["1.5", "-2.25", "0.125"]);
        assert_eq!(max(&values, &ctx).unwrap().to_string(), "1.500");
        assert_eq!(min(&values, &ctx).unwrap().to_string(), "-2.250");
    }

    #[test]
    fn test_average_and_median() {
        let ctx = Context::default();
        let values = decimals(&["1.0", "2.0", "4.0", "10.0"]);
        assert_eq!(average(&values, &ctx).unwrap().to_string(), "4.2");
        assert_eq!(median(&values, &ctx).unwrap().to_string(), "3.0");
        assert_eq!(median(&values[..3], &ctx).unwrap().to_string(), "2.0");
    }

    #[test]
    fn test_variance_and_std_dev() {
        let ctx = Context::default();
        let values = decimals(&["2", "4", "4", "4", "5", "5", "7", "9"]);
        assert_eq!(variance(&values, &ctx).unwrap().to_string(), "4");
        assert_eq!(std_dev(&values, &ctx).unwrap().to_string(), "2");

        let constant = decimals(&["3.25", "3.25", "3.25"]);
        assert!(variance(&constant, &ctx).unwrap().is_zero());
    }

    #[test]
    fn test_empty_and_mismatched_inputs() {
        let ctx = Context::default();
        assert_eq!(sum(&[], &ctx), Err(DecimalError::EmptyInput));
        assert_eq!(median(&[], &ctx), Err(DecimalError::EmptyInput));
        assert_eq!(variance(&[], &ctx), Err(DecimalError::EmptyInput));

        let strict = Context::new(Config::strict());
        let mixed = decimals(&["1.5", "1.25"]);
        assert_eq!(average(&mixed, &strict), Err(DecimalError::PrecisionMismatch));
    }

    proptest! {
        #[test]
        fn variance_is_shift_invariant(
            raw in prop::collection::vec(-1_000_000i64..1_000_000, 1..20),
            shift in -1_000_000i64..1_000_000,
        ) {
            let ctx = Context::default();
            let values: Vec<Decimal> = raw.iter().map(|&v| Decimal::from_raw(v.into(), 3)).collect();
            let shifted: Vec<Decimal> = raw
                .iter()
                .map(|&v| Decimal::from_raw((v + shift).into(), 3))
                .collect();
            prop_assert_eq!(variance(&values, &ctx).unwrap(), variance(&shifted, &ctx).unwrap());
        }
    }
}
