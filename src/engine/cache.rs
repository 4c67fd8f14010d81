// ============================================================================
// Constant Cache
// Monotonic memoization table for named constants
// ============================================================================

use num_bigint::BigInt;
use parking_lot::RwLock;
use std::collections::HashMap;

/// One memoized constant: `value / 10^precision`, produced by an algorithm
/// of rank `priority`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheEntry {
    pub value: BigInt,
    pub precision: u32,
    pub priority: u8,
}

impl CacheEntry {
    /// Whether this entry can answer a request for `precision` digits from an
    /// algorithm of rank `priority`.
    #[inline]
    pub fn satisfies(&self, precision: u32, priority: u8) -> bool {
        self.precision >= precision && self.priority >= priority
    }

    /// Whether this entry is at least as good as `other` on both axes and
    /// strictly better on one.
    #[inline]
    pub fn dominates(&self, other: &CacheEntry) -> bool {
        self.precision >= other.precision
            && self.priority >= other.priority
            && (self.precision > other.precision || self.priority > other.priority)
    }
}

/// Result of offering a fresh entry to the cache
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheOutcome {
    /// No entry existed
    Inserted,
    /// The offered entry dominated and replaced the old one
    Upgraded,
    /// The old entry was kept
    Retained,
}

/// Keyed store of constants that never accepts a worse entry.
///
/// Readers share the lock. Writers compare and replace under the write
/// lock, so concurrent offers cannot interleave a downgrade.
#[derive(Debug, Default)]
pub struct ConstantCache {
    entries: RwLock<HashMap<String, CacheEntry>>,
}

impl ConstantCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Entry for `key` if it satisfies the request
    pub fn lookup(&self, key: &str, precision: u32, priority: u8) -> Option<CacheEntry> {
        self.entries
            .read()
            .get(key)
            .filter(|entry| entry.satisfies(precision, priority))
            .cloned()
    }

    /// Entry for `key` regardless of quality
    pub fn get(&self, key: &str) -> Option<CacheEntry> {
        self.entries.read().get(key).cloned()
    }

    /// Atomic compare-and-update: store `entry` only if it dominates.
    pub fn offer(&self, key: &str, entry: CacheEntry) -> CacheOutcome {
        let mut entries = self.entries.write();
        if let Some(existing) = entries.get_mut(key) {
            if entry.dominates(existing) {
                *existing = entry;
                return CacheOutcome::Upgraded;
            }
            return CacheOutcome::Retained;
        }
        entries.insert(key.to_string(), entry);
        CacheOutcome::Inserted
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    fn entry(value: i64, precision: u32, priority: u8) -> CacheEntry {
        CacheEntry {
            value: BigInt::from(value),
            precision,
            priority,
        }
    }

    #[test]
    fn test_lookup_requires_precision_and_priority() {
        let cache = ConstantCache::new();
        assert!(cache.lookup("pi", 3, 0).is_none());

        cache.offer("pi", entry(31415, 4, 2));
        assert!(cache.lookup("pi", 4, 2).is_some());
        assert!(cache.lookup("pi", 3, 1).is_some());
        assert!(cache.lookup("pi", 5, 2).is_none());
        assert!(cache.lookup("pi", 4, 3).is_none());
    }

    #[test]
    fn test_monotonic_updates() {
        let cache = ConstantCache::new();
        assert_eq!(cache.offer("pi", entry(314, 2, 1)), CacheOutcome::Inserted);
        assert_eq!(cache.offer("pi", entry(3141, 3, 1)), CacheOutcome::Upgraded);
        // Lower precision never clobbers
        assert_eq!(cache.offer("pi", entry(31, 1, 3)), CacheOutcome::Retained);
        // Equal entry is not an improvement
        assert_eq!(cache.offer("pi", entry(3141, 3, 1)), CacheOutcome::Retained);
        assert_eq!(cache.offer("pi", entry(3141, 3, 3)), CacheOutcome::Upgraded);
        assert_eq!(cache.get("pi").unwrap().priority, 3);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_concurrent_offers_keep_best() {
        let cache = Arc::new(ConstantCache::new());
        let handles: Vec<_> = (0..8u32)
            .map(|i| {
                let cache = Arc::clone(&cache);
                thread::spawn(move || {
                    for p in 0..50u32 {
                        cache.offer("e", entry(p as i64, (p * 7 + i) % 50, 0));
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(cache.get("e").unwrap().precision, 49);
    }
}
