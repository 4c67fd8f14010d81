// ============================================================================
// Gamma Function
// Spouge's approximation with reflection for small arguments
// ============================================================================

use crate::arithmetic::sqrt_raw;
use crate::engine::Context;
use crate::numeric::kernel::{fx_div, fx_mul, pow10};
use crate::numeric::{Decimal, DecimalError, DecimalResult};
use crate::transcendental::{exp_raw, ln_raw, sin_raw};
use num_bigint::BigInt;
use num_traits::{One, ToPrimitive, Zero};
use std::f64::consts::PI;

/// `n!` as an exact integer.
pub(crate) fn factorial_exact(n: u64) -> BigInt {
    (2..=n).fold(BigInt::one(), |acc, k| acc * k)
}

/// Number of Spouge terms for a relative error below `10^-scale`.
fn spouge_terms(scale: u32) -> u64 {
    (scale as f64 / (2.0 * PI).log10()).ceil() as u64
}

/// Spouge's formula for `Γ(x)`, raw `x >= 1/2` at `scale`.
///
/// `Γ(z+1) = (z+a)^(z+1/2)·e^-(z+a)·[c_0 + Σ c_k/(z+k)]` with
/// `c_k = (-1)^(k-1)·(a-k)^(k-1/2)·e^(a-k)/(k-1)!`. The alternating
/// coefficients cancel heavily, so the sum is formed at twice the scale.
fn spouge(x: &BigInt, scale: u32, ctx: &Context) -> DecimalResult<BigInt> {
    let a = spouge_terms(scale);
    let wide = scale * 2;
    let one = pow10(wide);
    let limits = ctx.config().root_limits();
    let z = x * pow10(scale) - &one;

    // e^1 .. e^(a-1)
    let e = ctx.e_raw(wide)?;
    let mut e_powers = vec![one.clone(), e.clone()];
    for j in 2..a as usize {
        let next = fx_mul(&e_powers[j - 1], &e, wide);
        e_powers.push(next);
    }

    let two_pi = ctx.pi_raw(wide)? * 2;
    let mut sum = sqrt_raw(&two_pi, wide, limits)?;
    let mut factorial = BigInt::one();
    for k in 1..a {
        let j = a - k;
        let root = sqrt_raw(&(&one * j), wide, limits)?;
        let power = BigInt::from(j).pow((k - 1) as u32) * root;
        let coefficient = fx_mul(&power, &e_powers[j as usize], wide) / &factorial;
        let term = fx_div(&coefficient, &(&z + &one * k), wide);
        if k % 2 == 1 {
            sum += term;
        } else {
            sum -= term;
        }
        factorial *= k;
    }

    let shifted = &z + &one * a;
    let log = ln_raw(&shifted, wide, ctx)?;
    let exponent = fx_mul(&(&z + &one / 2), &log, wide) - &shifted;
    let factor = exp_raw(&exponent, wide, ctx)?;
    Ok(fx_mul(&factor, &sum, wide) / pow10(scale))
}

/// `Γ(x)` for raw non-integer `x` at `scale`.
fn gamma_raw(x: &BigInt, scale: u32, ctx: &Context) -> DecimalResult<BigInt> {
    let one = pow10(scale);
    if x * 2 >= one {
        return spouge(x, scale, ctx);
    }

    // Γ(x) = π / (sin(πx)·Γ(1-x))
    let pi = ctx.pi_raw(scale)?;
    let sin = sin_raw(&fx_mul(&pi, x, scale), scale, ctx)?;
    let reflected = spouge(&(&one - x), scale, ctx)?;
    let denominator = fx_mul(&sin, &reflected, scale);
    if denominator.is_zero() {
        return Err(DecimalError::DomainError("gamma pole at a non-positive integer"));
    }
    Ok(fx_div(&pi, &denominator, scale))
}

/// The gamma function at `x`'s precision.
///
/// Positive integers return `(n-1)!` exactly.
///
/// # Errors
/// Returns `DomainError` at zero and the negative integers.
pub fn gamma(x: &Decimal, ctx: &Context) -> DecimalResult<Decimal> {
    let precision = x.precision();
    if x.is_integer() {
        if !x.is_positive() {
            return Err(DecimalError::DomainError("gamma pole at a non-positive integer"));
        }
        let n = x
            .integer_part()
            .to_u64()
            .ok_or(DecimalError::RangeError("gamma argument too large"))?;
        return Decimal::from_bigint(factorial_exact(n - 1), precision);
    }

    let scale = ctx.working_scale(precision);
    let raw = gamma_raw(&x.raw_at(scale), scale, ctx)?;
    Ok(ctx.finish(&raw, scale, precision))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gamma_of(text: &str, precision: u32) -> DecimalResult<String> {
        let ctx = Context::default();
        let x = ctx.decimal(text, precision)?;
        gamma(&x, &ctx).map(|v| v.to_string())
    }

    #[test]
    fn test_factorial_exact() {
        assert_eq!(factorial_exact(0), BigInt::one());
        assert_eq!(factorial_exact(5), BigInt::from(120));
        assert_eq!(factorial_exact(20), BigInt::from(2_432_902_008_176_640_000u64));
    }

    #[test]
    fn test_gamma_integers() {
        assert_eq!(gamma_of("5", 2).unwrap(), "24.00");
        assert_eq!(gamma_of("1", 0).unwrap(), "1");
        assert_eq!(
            gamma_of("0", 4),
            Err(DecimalError::DomainError("gamma pole at a non-positive integer"))
        );
        assert!(gamma_of("-3", 4).is_err());
    }

    #[test]
    fn test_gamma_half_integers() {
        assert_eq!(gamma_of("0.5", 15).unwrap(), "1.772453850905516");
        assert_eq!(gamma_of("1.5", 20).unwrap(), "0.88622692545275801364");
        assert_eq!(gamma_of("-0.5", 15).unwrap(), "-3.544907701811032");
        assert_eq!(gamma_of("5.5", 10).unwrap(), "52.3427777845");
    }

    #[test]
    fn test_gamma_general() {
        assert_eq!(gamma_of("0.1", 12).unwrap(), "9.513507698668");
        assert_eq!(gamma_of("-1.5", 12).unwrap(), "2.363271801207");
        assert_eq!(gamma_of("10.3", 6).unwrap(), "716430.689062");
    }
}
