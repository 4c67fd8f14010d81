// ============================================================================
// Cache Event Handler Interface
// Defines the contract for observing constant-cache activity
// ============================================================================

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Events emitted by the constant cache
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CacheEvent {
    /// Cached entry satisfied the request
    Hit {
        key: String,
        precision: u32,
        priority: u8,
    },

    /// No entry, or the entry was too imprecise or too low in priority
    Miss {
        key: String,
        precision: u32,
        priority: u8,
    },

    /// Freshly computed value replaced (or created) the entry
    Stored {
        key: String,
        precision: u32,
        priority: u8,
    },

    /// Freshly computed value did not dominate the existing entry
    Retained {
        key: String,
        precision: u32,
        priority: u8,
    },
}

/// Event handler trait for processing cache events
/// Implementations can handle logging, metrics, assertions in tests, etc.
pub trait CacheEventHandler: Send + Sync {
    /// Handle a cache event
    fn on_event(&self, event: CacheEvent);
}

/// No-op event handler
pub struct NoOpCacheEventHandler;

impl CacheEventHandler for NoOpCacheEventHandler {
    fn on_event(&self, _event: CacheEvent) {
        // Do nothing
    }
}

/// Logging event handler
pub struct LoggingCacheEventHandler;

impl CacheEventHandler for LoggingCacheEventHandler {
    fn on_event(&self, event: CacheEvent) {
        tracing::debug!("Constant cache event: {:?}", event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;

    #[derive(Default)]
    struct Recorder(Mutex<Vec<CacheEvent>>);

    impl CacheEventHandler for Recorder {
        fn on_event(&self, event: CacheEvent) {
            self.0.lock().push(event);
        }
    }

    #[test]
    fn test_noop_handler() {
        let handler = NoOpCacheEventHandler;
        handler.on_event(CacheEvent::Hit {
            key: "pi".to_string(),
            precision: 10,
            priority: 3,
        });
        // Should not panic
    }

    #[test]
    fn test_events_arrive_in_order() {
        let recorder = Recorder::default();
        let handler: &dyn CacheEventHandler = &recorder;
        let miss = CacheEvent::Miss {
            key: "e".to_string(),
            precision: 5,
            priority: 0,
        };
        let stored = CacheEvent::Stored {
            key: "e".to_string(),
            precision: 5,
            priority: 0,
        };
        handler.on_event(miss.clone());
        handler.on_event(stored.clone());
        assert_eq!(*recorder.0.lock(), vec![miss, stored]);
    }
}
