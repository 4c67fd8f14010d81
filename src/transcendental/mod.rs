// ============================================================================
// Transcendental Module
// Exponential, logarithmic, trigonometric and hyperbolic functions
// ============================================================================
//
// Every public function evaluates on raw magnitudes at
// `Context::working_scale(precision)` and rounds once through
// `Context::finish`. The `*_raw` kernels are shared with the constants and
// special-function modules.

mod exp;
mod hyperbolic;
mod inverse_trig;
mod log;
mod trig;

pub(crate) use exp::exp_raw;
pub(crate) use log::{ln10_series, ln2_series, ln_raw};
pub(crate) use trig::sin_raw;
