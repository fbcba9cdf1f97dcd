//! Expiring Cache Module
//!
//! Keyed result cache with a fixed TTL and lazy expiry: expired entries are
//! recognized as misses on read but are only removed by an explicit sweep or
//! by being overwritten. Without sweeping, the map holds one entry per
//! distinct key ever stored.

use std::collections::HashMap;
use std::time::Duration;

use crate::cache::CacheEntry;

// == Expiring Cache ==
/// Maps request keys to previously computed results, each valid for a fixed
/// TTL from the moment it was stored.
///
/// Timestamps are passed in explicitly (Unix milliseconds) rather than read
/// from the wall clock, so callers control the notion of "now" and the TTL
/// window is fully deterministic under test.
#[derive(Debug)]
pub struct ExpiringCache {
    /// Key to cached-result storage
    entries: HashMap<String, CacheEntry>,
    /// Entry lifetime in milliseconds
    ttl_ms: u64,
}

impl ExpiringCache {
    // == Constructor ==
    /// Creates an empty cache whose entries live for `ttl` after insertion.
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            ttl_ms: ttl.as_millis() as u64,
        }
    }

    // == Get ==
    /// Retrieves the cached value for `key` as of the instant `now`.
    ///
    /// Returns `Some` iff an entry exists and its expiration lies strictly
    /// after `now`. An expired entry is a miss but stays in the map; reads
    /// never mutate the cache.
    pub fn get(&self, key: &str, now: u64) -> Option<String> {
        self.entries
            .get(key)
            .filter(|entry| entry.is_live_at(now))
            .map(|entry| entry.value.clone())
    }

    // == Put ==
    /// Stores `value` under `key`, expiring at `now + ttl`.
    ///
    /// Unconditional: any prior entry for the key, live or expired, is
    /// replaced and its expiration reset.
    pub fn put(&mut self, key: String, value: String, now: u64) {
        let entry = CacheEntry::new(value, now, self.ttl_ms);
        self.entries.insert(key, entry);
    }

    // == Sweep ==
    /// Removes every entry expired as of `now` and returns the count.
    ///
    /// Only the opt-in background sweep task calls this; the read path
    /// leaves expired entries in place.
    pub fn sweep(&mut self, now: u64) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, entry| entry.is_live_at(now));
        before - self.entries.len()
    }

    // == Length ==
    /// Returns the number of entries in the map, expired ones included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the cache holds no entries at all.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    // == TTL ==
    /// Returns the configured entry lifetime.
    pub fn ttl(&self) -> Duration {
        Duration::from_millis(self.ttl_ms)
    }
}
