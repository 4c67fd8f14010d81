// ============================================================================
// Decimal Engine Library
// Arbitrary-precision decimal arithmetic with transcendental functions
// ============================================================================

//! # Decimal Engine
//!
//! Arbitrary-precision decimal numbers with an explicit fractional
//! precision per value, plus the functions built on them.
//!
//! ## Features
//!
//! - **Exact precision**: every `Decimal` carries its own digit count; a
//!   profile decides how mixed precisions are aligned and rounded
//! - **Transcendental functions**: exp, ln, trigonometric, inverse and
//!   hyperbolic families evaluated with guard digits
//! - **Pluggable pi strategies** (host float, Leibniz, Machin, Chudnovsky)
//!   behind a monotonic constant cache
//! - **Special functions**: gamma, factorials, binomials, Bernoulli
//!   numbers, trapezoidal integration, aggregates and random values
//! - **Bounded iteration**: every series and Newton loop has a step cap
//!   with a configurable convergence policy
//!
//! ## Example
//!
//! ```rust
//! use decimal_engine::prelude::*;
//!
//! let ctx = Context::default();
//!
//! let a = ctx.decimal("3.14159", 5).unwrap();
//! let b = ctx.decimal("2.71828", 5).unwrap();
//! assert_eq!(a.add(&b, &ctx).unwrap().to_string(), "5.85987");
//!
//! let two = ctx.decimal(2, 20).unwrap();
//! assert_eq!(two.sqrt(&ctx).unwrap().to_string(), "1.41421356237309504880");
//!
//! assert_eq!(ctx.pi(10).unwrap().to_string(), "3.1415926535");
//! ```

pub mod arithmetic;
pub mod constants;
pub mod domain;
pub mod engine;
pub mod interfaces;
pub mod numeric;
pub mod special;
pub mod transcendental;
pub mod utils;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{Config, ConvergencePolicy, PiAlgorithm};
    pub use crate::engine::{create_from_config, Context, ContextBuilder};
    pub use crate::interfaces::{
        CacheEvent, CacheEventHandler, LoggingCacheEventHandler, NoOpCacheEventHandler,
        PiStrategy,
    };
    pub use crate::numeric::{
        Decimal, DecimalError, DecimalResult, DecimalSource, RoundingMode, DEFAULT_PRECISION,
    };
    pub use crate::special::{
        average, bernoulli, binomial, factorial, gamma, integrate, max, median, min, product,
        random, random_with, rational_to_decimal, std_dev, sum, variance, Rational,
    };
}
