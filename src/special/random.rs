// ============================================================================
// Random Decimals
// Uniform values in [0, 1) built from concatenated 30-bit draws
// ============================================================================

use crate::numeric::kernel::pow10;
use crate::numeric::{check_precision, Decimal, DecimalResult};
use num_bigint::BigInt;
use rand::Rng;

const DRAW_BITS: u32 = 30;

/// Uniform random value in `[0, 1)` with `precision` fractional digits,
/// drawn from the thread-local generator.
pub fn random(precision: u32) -> DecimalResult<Decimal> {
    random_with(&mut rand::thread_rng(), precision)
}

/// As [`random`], drawing from `rng`.
///
/// Draws are concatenated until they span at least `10^precision`
/// values, then reduced modulo `10^precision`.
pub fn random_with<R: Rng + ?Sized>(rng: &mut R, precision: u32) -> DecimalResult<Decimal> {
    check_precision(precision)?;
    let bits_needed = (f64::from(precision) * std::f64::consts::LOG2_10).ceil() as u64;

    let mut value = BigInt::from(0u32);
    let mut bits = 0u64;
    while bits < bits_needed {
        let draw: u32 = rng.gen_range(0..1u32 << DRAW_BITS);
        value = (value << DRAW_BITS) + draw;
        bits += u64::from(DRAW_BITS);
    }

    Ok(Decimal::from_raw(value % pow10(precision), precision))
}
