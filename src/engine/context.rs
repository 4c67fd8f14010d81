// ============================================================================
// Numeric Context
// One numeric profile: configuration, constant cache and cache observer
// ============================================================================

use super::cache::{CacheEntry, CacheOutcome, ConstantCache};
use crate::domain::Config;
use crate::interfaces::{CacheEvent, CacheEventHandler, NoOpCacheEventHandler};
use crate::numeric::{
    build, from_radix, round_magnitude, Decimal, DecimalResult, DecimalSource, RoundingMode,
};
use num_bigint::BigInt;
use std::fmt;
use std::sync::Arc;

/// Digits iterative kernels carry on top of `extra_precision` so that the
/// truncation error of long series stays below the returned precision.
pub const KERNEL_GUARD_DIGITS: u32 = 10;

/// Explicit numeric profile threaded through every operation.
///
/// Cloning shares the constant cache. [`Context::with_config`] changes the
/// settings but keeps the cache; [`Context::detached`] starts a fresh one.
#[derive(Clone)]
pub struct Context {
    /// Immutable settings of this profile
    config: Config,

    /// Memoized constants shared by every clone
    cache: Arc<ConstantCache>,

    /// Observer for cache hits, misses and updates
    event_handler: Arc<dyn CacheEventHandler>,
}

impl Context {
    /// Create a profile with its own empty cache
    pub fn new(config: Config) -> Self {
        Self::with_event_handler(config, Arc::new(NoOpCacheEventHandler))
    }

    /// Create a profile that reports cache activity to `event_handler`
    pub fn with_event_handler(config: Config, event_handler: Arc<dyn CacheEventHandler>) -> Self {
        Self {
            config,
            cache: Arc::new(ConstantCache::new()),
            event_handler,
        }
    }

    #[inline]
    pub fn config(&self) -> &Config {
        &self.config
    }

    #[inline]
    pub fn cache(&self) -> &ConstantCache {
        &self.cache
    }

    /// Same cache and observer, different settings
    pub fn with_config(&self, config: Config) -> Context {
        Context {
            config,
            cache: Arc::clone(&self.cache),
            event_handler: Arc::clone(&self.event_handler),
        }
    }

    /// Same settings and observer, fresh cache
    pub fn detached(&self) -> Context {
        Context {
            config: self.config.clone(),
            cache: Arc::new(ConstantCache::new()),
            event_handler: Arc::clone(&self.event_handler),
        }
    }

    // ========================================================================
    // Construction
    // ========================================================================

    /// Construct a decimal at `precision` from text, a native number, a
    /// big integer or another decimal.
    ///
    /// # Errors
    /// - `RangeError` if `precision` exceeds the maximum
    /// - `InvalidInput` for malformed text or non-finite floats
    pub fn decimal<'a>(
        &self,
        value: impl Into<DecimalSource<'a>>,
        precision: u32,
    ) -> DecimalResult<Decimal> {
        build(value.into(), precision, &self.config)
    }

    /// Parse text in base 2–36 at `precision`.
    pub fn parse_radix(&self, text: &str, precision: u32, radix: u32) -> DecimalResult<Decimal> {
        from_radix(text, precision, radix, &self.config)
    }

    // ========================================================================
    // Kernel Support
    // ========================================================================

    /// Scale iterative kernels work at for a result of `precision` digits.
    #[inline]
    pub(crate) fn working_scale(&self, precision: u32) -> u32 {
        precision + self.config.extra_precision + KERNEL_GUARD_DIGITS
    }

    /// Round a kernel result down to its final precision.
    #[inline]
    pub(crate) fn finish(&self, raw: &BigInt, scale: u32, precision: u32) -> Decimal {
        Decimal::from_raw_rounded(raw, scale, precision, self.config.rounding_mode)
    }

    /// Raw value of constant `key` at `scale`, from the cache when an entry
    /// of sufficient precision and priority exists.
    ///
    /// On a miss, `compute` is asked for the constant at `scale` plus the
    /// kernel guard digits; the result is cut to `scale` and offered to
    /// the cache.
    pub(crate) fn cached_constant<F>(
        &self,
        key: &'static str,
        scale: u32,
        priority: u8,
        compute: F,
    ) -> DecimalResult<BigInt>
    where
        F: FnOnce(u32) -> DecimalResult<BigInt>,
    {
        if let Some(entry) = self.cache.lookup(key, scale, priority) {
            self.event_handler.on_event(CacheEvent::Hit {
                key: key.to_string(),
                precision: scale,
                priority,
            });
            return Ok(round_magnitude(
                &entry.value,
                entry.precision,
                scale,
                RoundingMode::Truncate,
            ));
        }

        self.event_handler.on_event(CacheEvent::Miss {
            key: key.to_string(),
            precision: scale,
            priority,
        });

        let working = scale + KERNEL_GUARD_DIGITS;
        let value = round_magnitude(&compute(working)?, working, scale, RoundingMode::Truncate);
        let outcome = self.cache.offer(
            key,
            CacheEntry {
                value: value.clone(),
                precision: scale,
                priority,
            },
        );

        let event = match outcome {
            CacheOutcome::Inserted | CacheOutcome::Upgraded => CacheEvent::Stored {
                key: key.to_string(),
                precision: scale,
                priority,
            },
            CacheOutcome::Retained => CacheEvent::Retained {
                key: key.to_string(),
                precision: scale,
                priority,
            },
        };
        self.event_handler.on_event(event);

        Ok(value)
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl fmt::Debug for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Context")
            .field("config", &self.config)
            .field("cached_constants", &self.cache.len())
            .finish()
    }
}
