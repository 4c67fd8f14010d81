// ============================================================================
// Numeric Integration
// Composite trapezoidal rule
// ============================================================================

use crate::engine::Context;
use crate::numeric::kernel::fx_mul;
use crate::numeric::{rescale_pair, Decimal, DecimalError, DecimalResult};
use num_bigint::BigInt;

/// Integrate `f` over `[a, b]` with the trapezoidal rule on `n` equal
/// subintervals.
///
/// `f` is sampled at the working precision of the larger of `a` and `b`;
/// the result is rounded back to that larger precision.
///
/// # Errors
/// Returns `RangeError` for `n = 0` and propagates any error from `f`.
pub fn integrate<F>(
    mut f: F,
    a: &Decimal,
    b: &Decimal,
    n: usize,
    ctx: &Context,
) -> DecimalResult<Decimal>
where
    F: FnMut(&Decimal) -> DecimalResult<Decimal>,
{
    if n == 0 {
        return Err(DecimalError::RangeError(
            "integration needs at least one subinterval",
        ));
    }
    let target = rescale_pair(a, b, false, ctx.config())?.target;
    let scale = ctx.working_scale(target);
    let lo = a.raw_at(scale);
    let hi = b.raw_at(scale);
    let width = (&hi - &lo) / n;

    let mut sample = |raw: BigInt| -> DecimalResult<BigInt> {
        let point = Decimal::from_raw(raw, scale);
        Ok(f(&point)?.raw_at(scale))
    };

    let mut sum = (sample(lo.clone())? + sample(hi)?) / 2;
    for i in 1..n {
        sum += sample(&lo + &width * i)?;
    }
    let raw = fx_mul(&sum, &width, scale);
    Ok(ctx.finish(&raw, scale, target))
}
