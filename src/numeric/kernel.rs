// ============================================================================
// Fixed-Point Kernel
// Raw BigInt helpers shared by every iterative routine
// ============================================================================
//
// All helpers operate on plain magnitudes that share an implicit scale:
// a raw value `v` at scale `s` stands for `v / 10^s`. Multiplication and
// division truncate toward zero; callers add guard digits so that the
// truncation error stays well below the precision they hand back.

use super::errors::{DecimalError, DecimalResult};
use crate::domain::ConvergencePolicy;
use num_bigint::BigInt;
use num_traits::{One, Signed, Zero};

/// Compute 10^n
#[inline]
pub fn pow10(n: u32) -> BigInt {
    BigInt::from(10u32).pow(n)
}

/// Fixed-point multiplication at `scale`.
#[inline]
pub fn fx_mul(a: &BigInt, b: &BigInt, scale: u32) -> BigInt {
    (a * b) / pow10(scale)
}

/// Fixed-point division at `scale`. The caller guarantees `b != 0`.
#[inline]
pub fn fx_div(a: &BigInt, b: &BigInt, scale: u32) -> BigInt {
    (a * pow10(scale)) / b
}

/// Number of decimal digits in `|n|` (zero has one digit).
pub fn digit_count(n: &BigInt) -> u32 {
    n.magnitude().to_string().len() as u32
}

/// Number of digits in the integer part of `raw / 10^scale` (zero for |x| < 1).
pub fn integer_digits(raw: &BigInt, scale: u32) -> u32 {
    let digits = digit_count(raw);
    digits.saturating_sub(scale)
}

// ============================================================================
// Bounded Iteration
// ============================================================================

/// Step cap and exhaustion policy for one iterative routine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IterationLimits {
    pub max_steps: usize,
    pub policy: ConvergencePolicy,
}

impl IterationLimits {
    /// Resolve what happens when `operation` used up its step cap.
    ///
    /// Under `BestEffort` the caller keeps its current estimate; under `Error`
    /// the exhaustion is surfaced as `NonConvergence`.
    pub fn exhausted(&self, operation: &'static str) -> DecimalResult<()> {
        match self.policy {
            ConvergencePolicy::BestEffort => {
                tracing::warn!(
                    operation,
                    steps = self.max_steps,
                    "step cap reached, returning best estimate"
                );
                Ok(())
            }
            ConvergencePolicy::Error => Err(DecimalError::NonConvergence {
                operation,
                steps: self.max_steps,
            }),
        }
    }
}

/// Outcome of a single fixed-point step.
pub enum Step {
    /// Keep iterating from this value
    Continue(BigInt),
    /// This value is the fixed point
    Converged(BigInt),
}

/// Drive `step` from `seed` until it reports convergence or the cap is hit.
pub fn iterate<F>(
    operation: &'static str,
    limits: IterationLimits,
    seed: BigInt,
    mut step: F,
) -> DecimalResult<BigInt>
where
    F: FnMut(&BigInt) -> DecimalResult<Step>,
{
    let mut current = seed;
    for steps in 0..limits.max_steps {
        match step(&current)? {
            Step::Converged(value) => {
                tracing::trace!(operation, steps, "converged");
                return Ok(value);
            }
            Step::Continue(next) => current = next,
        }
    }
    limits.exhausted(operation)?;
    Ok(current)
}

/// Sum the terms `term(0), term(1), ...` until one truncates to zero.
///
/// The closure owns whatever recurrence state the series needs.
pub fn sum_series<F>(
    operation: &'static str,
    limits: IterationLimits,
    mut term: F,
) -> DecimalResult<BigInt>
where
    F: FnMut(usize) -> BigInt,
{
    let mut sum = BigInt::zero();
    for n in 0..limits.max_steps {
        let next = term(n);
        if next.is_zero() {
            tracing::trace!(operation, steps = n, "series underflowed");
            return Ok(sum);
        }
        sum += next;
    }
    limits.exhausted(operation)?;
    Ok(sum)
}

// ============================================================================
// Integer Roots
// ============================================================================

/// Newton's method for `floor(sqrt(n))`, seeded above the root.
///
/// The iterate decreases monotonically until it reaches the floor root, at
/// which point the next iterate no longer decreases.
pub fn isqrt(n: &BigInt, limits: IterationLimits) -> DecimalResult<BigInt> {
    if n.is_negative() {
        return Err(DecimalError::DomainError("square root of a negative value"));
    }
    if *n < BigInt::from(2) {
        return Ok(n.clone());
    }

    let seed = pow10(digit_count(n).div_ceil(2));
    iterate("sqrt", limits, seed, |x| {
        let next: BigInt = (x + n / x) >> 1;
        if next >= *x {
            Ok(Step::Converged(x.clone()))
        } else {
            Ok(Step::Continue(next))
        }
    })
}

/// Newton's method for `floor(n^(1/k))`, `n >= 0`, `k >= 2`.
pub fn inth_root(n: &BigInt, k: u32, limits: IterationLimits) -> DecimalResult<BigInt> {
    debug_assert!(k >= 2);
    if n.is_negative() {
        return Err(DecimalError::DomainError("root of a negative value"));
    }
    if n.is_zero() || n.is_one() {
        return Ok(n.clone());
    }

    let seed = pow10(digit_count(n).div_ceil(k));
    let k_big = BigInt::from(k);
    let k_minus_one = BigInt::from(k - 1);
    iterate("nth_root", limits, seed, |x| {
        let next = (&k_minus_one * x + n / x.pow(k - 1)) / &k_big;
        if next >= *x {
            Ok(Step::Converged(x.clone()))
        } else {
            Ok(Step::Continue(next))
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn limits() -> IterationLimits {
        IterationLimits {
            max_steps: 10_000,
            policy: ConvergencePolicy::Error,
        }
    }

    #[test]
    fn test_pow10() {
        assert_eq!(pow10(0), BigInt::one());
        assert_eq!(pow10(3), BigInt::from(1000));
    }

    #[test]
    fn test_fixed_point_ops() {
        // 1.5 * 2.5 = 3.75 at scale 2
        let a = BigInt::from(150);
        let b = BigInt::from(250);
        assert_eq!(fx_mul(&a, &b, 2), BigInt::from(375));
        // 1 / 3 at scale 4
        assert_eq!(
            fx_div(&BigInt::from(10_000), &BigInt::from(30_000), 4),
            BigInt::from(3333)
        );
    }

    #[test]
    fn test_digit_count() {
        assert_eq!(digit_count(&BigInt::zero()), 1);
        assert_eq!(digit_count(&BigInt::from(-12345)), 5);
        assert_eq!(integer_digits(&BigInt::from(12345), 2), 3);
        assert_eq!(integer_digits(&BigInt::from(45), 2), 0);
    }

    #[test]
    fn test_isqrt_matches_reference() {
        for n in [0u64, 1, 2, 3, 4, 15, 16, 17, 99, 100, 101, 1_000_000_007] {
            let big = BigInt::from(n);
            assert_eq!(isqrt(&big, limits()).unwrap(), big.sqrt(), "n = {}", n);
        }
        let huge = pow10(81) + 12345;
        assert_eq!(isqrt(&huge, limits()).unwrap(), huge.sqrt());
    }

    #[test]
    fn test_inth_root_matches_reference() {
        for k in 2..7u32 {
            for n in [2u64, 7, 8, 9, 26, 27, 28, 1_000_000, 123_456_789] {
                let big = BigInt::from(n);
                assert_eq!(
                    inth_root(&big, k, limits()).unwrap(),
                    big.nth_root(k),
                    "n = {}, k = {}",
                    n,
                    k
                );
            }
        }
    }

    #[test]
    fn test_iteration_cap_policies() {
        let strict = IterationLimits {
            max_steps: 1,
            policy: ConvergencePolicy::Error,
        };
        let result = isqrt(&pow10(40), strict);
        assert!(matches!(
            result,
            Err(DecimalError::NonConvergence {
                operation: "sqrt",
                ..
            })
        ));

        let lenient = IterationLimits {
            max_steps: 1,
            policy: ConvergencePolicy::BestEffort,
        };
        assert!(isqrt(&pow10(40), lenient).is_ok());
    }

    #[test]
    fn test_sum_series_geometric() {
        // 1 + 1/2 + 1/4 + ... at scale 6, truncating each term
        let mut term = pow10(6);
        let sum = sum_series("geometric", limits(), |n| {
            if n > 0 {
                term = &term / 2;
            }
            term.clone()
        })
        .unwrap();
        assert!(sum <= BigInt::from(2_000_000) && sum > BigInt::from(1_999_970));

        let capped = IterationLimits {
            max_steps: 3,
            policy: ConvergencePolicy::Error,
        };
        assert!(sum_series("ones", capped, |_| BigInt::one()).is_err());
    }
}
