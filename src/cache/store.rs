//! Cache Store Module
//!
//! Main cache engine: a HashMap of entries with lazy TTL expiration.

use std::collections::HashMap;
use std::time::Duration;

use tracing::debug;

use crate::cache::{CacheEntry, CacheStats, Clock, SystemClock, DEFAULT_TTL};

/// Outcome of looking a key up against the clock.
enum Probe {
    Missing,
    Expired,
    Live,
}

// == TTL Cache ==
/// In-memory key/value store where every entry carries an expiry instant.
///
/// Expired entries are never returned. They stay in the map until a `get`
/// or `has` touches them, `cleanup` sweeps them, or they are deleted, so
/// [`len`](TtlCache::len) reports occupancy rather than live keys.
///
/// The cache has no internal locking. Share it across tasks behind an
/// `Arc<RwLock<_>>`; reads need the write half since they can evict.
///
/// # Example
/// ```
/// use std::time::Duration;
/// use ttl_cache::cache::TtlCache;
///
/// let mut cache = TtlCache::new(Duration::from_secs(60));
/// cache.set("a", 1, None);
/// assert_eq!(cache.get("a"), Some(&1));
/// assert!(cache.delete("a"));
/// assert_eq!(cache.get("a"), None);
/// ```
#[derive(Debug)]
pub struct TtlCache<T, C = SystemClock> {
    /// Key-value storage
    entries: HashMap<String, CacheEntry<T>>,
    /// TTL applied when `set` is called without one
    default_ttl: Duration,
    /// Lookup statistics
    stats: CacheStats,
    clock: C,
}

impl<T> TtlCache<T, SystemClock> {
    // == Constructor ==
    /// Creates an empty cache on the system clock.
    pub fn new(default_ttl: Duration) -> Self {
        Self::with_clock(default_ttl, SystemClock)
    }
}

impl<T> Default for TtlCache<T, SystemClock> {
    fn default() -> Self {
        Self::new(DEFAULT_TTL)
    }
}

impl<T, C: Clock> TtlCache<T, C> {
    /// Creates an empty cache reading time from `clock`.
    pub fn with_clock(default_ttl: Duration, clock: C) -> Self {
        Self {
            entries: HashMap::new(),
            default_ttl,
            stats: CacheStats::new(),
            clock,
        }
    }

    // == Set ==
    /// Stores `value` under `key`, replacing any previous entry and its expiry.
    ///
    /// The entry expires `ttl` from now, or `default_ttl` from now when `ttl`
    /// is `None`. A zero TTL stores an entry that is already expired.
    pub fn set(&mut self, key: impl Into<String>, value: T, ttl: Option<Duration>) {
        let ttl = ttl.unwrap_or(self.default_ttl);
        let entry = CacheEntry::new(value, self.clock.now(), ttl);
        self.entries.insert(key.into(), entry);
    }

    // == Get ==
    /// Returns the value for `key` if it exists and has not expired.
    ///
    /// An expired entry found here is removed from the map.
    pub fn get(&mut self, key: &str) -> Option<&T> {
        match self.probe(key) {
            Probe::Live => {
                self.stats.record_hit();
                self.entries.get(key).map(|entry| &entry.value)
            }
            Probe::Missing | Probe::Expired => {
                self.stats.record_miss();
                None
            }
        }
    }

    // == Has ==
    /// Returns true if `get` would return a value for `key`.
    ///
    /// Evicts an expired entry just like `get`, but is not counted as a hit
    /// or miss.
    pub fn has(&mut self, key: &str) -> bool {
        matches!(self.probe(key), Probe::Live)
    }

    // == Delete ==
    /// Removes `key` whether or not it has expired.
    ///
    /// Returns true if the key occupied a slot before the call.
    pub fn delete(&mut self, key: &str) -> bool {
        self.entries.remove(key).is_some()
    }

    // == Clear ==
    /// Removes every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    // == Cleanup Expired ==
    /// Removes all entries expired at the time of the call.
    ///
    /// Returns the number of entries removed.
    pub fn cleanup(&mut self) -> usize {
        let now = self.clock.now();
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_expired_at(now));

        let removed = before - self.entries.len();
        self.stats.record_expirations(removed);
        debug!(removed, remaining = self.entries.len(), "cache cleanup");
        removed
    }

    // == TTL Remaining ==
    /// Remaining lifetime of a live entry. Does not evict.
    pub fn ttl_remaining(&self, key: &str) -> Option<Duration> {
        let now = self.clock.now();
        self.entries
            .get(key)
            .filter(|entry| !entry.is_expired_at(now))
            .map(|entry| entry.ttl_remaining_at(now))
    }

    pub fn default_ttl(&self) -> Duration {
        self.default_ttl
    }

    // == Stats ==
    /// Returns a snapshot of the cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    // == Length ==
    /// Number of slots in the map, including expired entries not yet purged.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Checks `key` against the clock, evicting it if it has expired.
    fn probe(&mut self, key: &str) -> Probe {
        let now = self.clock.now();
        let expired = match self.entries.get(key) {
            Some(entry) => entry.is_expired_at(now),
            None => return Probe::Missing,
        };

        if expired {
            self.entries.remove(key);
            self.stats.record_expirations(1);
            debug!(key, "evicted expired entry on read");
            Probe::Expired
        } else {
            Probe::Live
        }
    }
}
