// ============================================================================
// Pi Strategies
// Host float, Euler-accelerated Leibniz, Machin and Chudnovsky
// ============================================================================

use crate::domain::Config;
use crate::interfaces::PiStrategy;
use crate::numeric::kernel::{isqrt, pow10, sum_series, IterationLimits};
use crate::numeric::{DecimalError, DecimalResult};
use num_bigint::BigInt;
use num_traits::Zero;
use std::f64::consts::PI;

/// Digits of pi an `f64` carries correctly.
pub const HOST_FLOAT_PI_DIGITS: u32 = 15;

/// `640320^3 / 24`, the Chudnovsky term ratio denominator.
const CHUDNOVSKY_C3_OVER_24: u64 = 10_939_058_860_032_000;

// ============================================================================
// Host Float
// ============================================================================

/// `std::f64::consts::PI` expanded to text. Digits past the fifteenth are
/// zero-padded, so callers only pick this strategy for small scales.
#[derive(Debug, Clone, Copy, Default)]
pub struct HostFloatPi;

impl PiStrategy for HostFloatPi {
    fn compute(&self, scale: u32, _config: &Config) -> DecimalResult<BigInt> {
        let text = format!("{:.*}", HOST_FLOAT_PI_DIGITS as usize, PI).replace('.', "");
        let raw = BigInt::parse_bytes(text.as_bytes(), 10).ok_or(DecimalError::InvalidInput)?;
        Ok(if scale >= HOST_FLOAT_PI_DIGITS {
            raw * pow10(scale - HOST_FLOAT_PI_DIGITS)
        } else {
            raw / pow10(HOST_FLOAT_PI_DIGITS - scale)
        })
    }

    fn name(&self) -> &str {
        "host-float"
    }

    fn priority(&self) -> u8 {
        0
    }
}

// ============================================================================
// Leibniz
// ============================================================================

/// Gregory–Leibniz series after Euler's transform:
/// `π = 2·Σ k!·2^k·k! / (2k+1)!`, gaining a bit per term.
#[derive(Debug, Clone, Copy, Default)]
pub struct LeibnizPi;

impl PiStrategy for LeibnizPi {
    fn compute(&self, scale: u32, config: &Config) -> DecimalResult<BigInt> {
        let mut term = pow10(scale);
        let sum = sum_series("pi_leibniz", config.trig_limits(), |k| {
            if k > 0 {
                term = &term * k / (2 * k + 1);
            }
            term.clone()
        })?;
        Ok(sum * 2)
    }

    fn name(&self) -> &str {
        "leibniz"
    }

    fn priority(&self) -> u8 {
        1
    }
}

// ============================================================================
// Machin
// ============================================================================

/// `atan(1/n)` at `scale` by its alternating power series.
fn atan_inverse(n: u32, scale: u32, limits: IterationLimits) -> DecimalResult<BigInt> {
    let n_squared = n * n;
    let mut power = pow10(scale) / n;
    sum_series("atan_inverse", limits, |k| {
        if k > 0 {
            power = &power / n_squared;
        }
        let term = &power / (2 * k + 1);
        if k % 2 == 1 {
            -term
        } else {
            term
        }
    })
}

/// Machin's formula `π = 16·atan(1/5) - 4·atan(1/239)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct MachinPi;

impl PiStrategy for MachinPi {
    fn compute(&self, scale: u32, config: &Config) -> DecimalResult<BigInt> {
        let limits = config.trig_limits();
        let fifth = atan_inverse(5, scale, limits)?;
        let small = atan_inverse(239, scale, limits)?;
        Ok(fifth * 16 - small * 4)
    }

    fn name(&self) -> &str {
        "machin"
    }

    fn priority(&self) -> u8 {
        2
    }
}

// ============================================================================
// Chudnovsky
// ============================================================================

/// Chudnovsky series, about fourteen digits per term.
///
/// `π = 426880·sqrt(10005) / Σ (13591409·a_k + 545140134·k·a_k)` with
/// `a_k = a_{k-1}·-(6k-5)(2k-1)(6k-1) / (k^3·640320^3/24)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChudnovskyPi;

impl PiStrategy for ChudnovskyPi {
    fn compute(&self, scale: u32, config: &Config) -> DecimalResult<BigInt> {
        let one = pow10(scale);
        let mut a_term = one.clone();
        let mut b_sum = BigInt::zero();
        let a_sum = sum_series("pi_chudnovsky", config.trig_limits(), |k| {
            if k > 0 {
                let k = k as u64;
                let numerator = BigInt::from((6 * k - 5) * (2 * k - 1) * (6 * k - 1));
                let denominator = BigInt::from(k * k * k) * CHUDNOVSKY_C3_OVER_24;
                a_term = -(&a_term * numerator) / denominator;
                b_sum += &a_term * k;
            }
            a_term.clone()
        })?;

        let total = a_sum * 13_591_409u64 + b_sum * 545_140_134u64;
        if total.is_zero() {
            return Err(DecimalError::DivisionByZero);
        }
        let sqrt_10005 = isqrt(&(BigInt::from(10_005) * &one * &one), config.root_limits())?;
        Ok(sqrt_10005 * 426_880u64 * one / total)
    }

    fn name(&self) -> &str {
        "chudnovsky"
    }

    fn priority(&self) -> u8 {
        3
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PI_60: &str = "3141592653589793238462643383279502884197169399375105820974944";

    fn reference(scale: u32) -> BigInt {
        BigInt::parse_bytes(PI_60[..(scale as usize + 1)].as_bytes(), 10).unwrap()
    }

    fn close(actual: &BigInt, scale: u32, ulps: i64) -> bool {
        let diff = actual - reference(scale);
        diff <= BigInt::from(ulps) && diff >= BigInt::from(-ulps)
    }

    #[test]
    fn test_host_float() {
        let config = Config::default();
        assert_eq!(HostFloatPi.compute(10, &config).unwrap(), reference(10));
        assert_eq!(HostFloatPi.compute(15, &config).unwrap(), reference(15));
    }

    #[test]
    fn test_series_strategies_agree_with_reference() {
        let config = Config::default();
        let strategies: [&dyn PiStrategy; 3] = [&LeibnizPi, &MachinPi, &ChudnovskyPi];
        for strategy in strategies {
            let value = strategy.compute(55, &config).unwrap();
            assert!(close(&value, 55, 10_000), "{} -> {}", strategy.name(), value);
        }
    }

    #[test]
    fn test_chudnovsky_is_fast() {
        let config = Config::default().with_trig_max_steps(10);
        // Ten terms carry well over 100 digits
        assert!(ChudnovskyPi.compute(55, &config).is_ok());
        let strict = config.with_convergence_policy(crate::domain::ConvergencePolicy::Error);
        assert!(ChudnovskyPi.compute(55, &strict).is_ok());
        assert!(LeibnizPi.compute(55, &strict).is_err());
    }
}
