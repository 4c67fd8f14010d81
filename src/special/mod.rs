// ============================================================================
// Special Module
// Gamma, combinatorics, integration, Bernoulli numbers, aggregates, random
// ============================================================================

mod aggregate;
mod bernoulli;
mod combinatorics;
mod gamma;
mod integrate;
mod random;

pub use aggregate::{average, max, median, min, product, std_dev, sum, variance};
pub use bernoulli::{bernoulli, rational_to_decimal, Rational};
pub use combinatorics::{binomial, factorial};
pub use gamma::gamma;
pub use integrate::integrate;
pub use random::{random, random_with};
