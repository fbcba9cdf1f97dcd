//! Cache Entry Module
//!
//! Defines the structure for individual cache entries with a fixed expiration.

use std::time::{SystemTime, UNIX_EPOCH};

// == Cache Entry ==
/// A single cached result with its expiration timestamp.
///
/// Value and expiration live in one record so the two can never drift
/// out of sync.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The cached result
    pub value: String,
    /// Expiration timestamp (Unix milliseconds)
    pub expires_at: u64,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new cache entry expiring `ttl_ms` milliseconds after `now`.
    ///
    /// # Arguments
    /// * `value` - The result to cache
    /// * `now` - Current timestamp in Unix milliseconds
    /// * `ttl_ms` - Time-to-live in milliseconds
    pub fn new(value: String, now: u64, ttl_ms: u64) -> Self {
        Self {
            value,
            expires_at: now + ttl_ms,
        }
    }

    // == Is Live ==
    /// Checks whether the entry is still valid at the given instant.
    ///
    /// Boundary condition: an entry is live strictly before its expiration
    /// time. At `now == expires_at` the full TTL has elapsed and the entry
    /// counts as a miss.
    pub fn is_live_at(&self, now: u64) -> bool {
        self.expires_at > now
    }

    // == Time To Live ==
    /// Returns remaining lifetime in milliseconds at the given instant.
    ///
    /// Returns 0 once the entry has expired. Useful for debugging and stats.
    pub fn ttl_remaining_ms(&self, now: u64) -> u64 {
        self.expires_at.saturating_sub(now)
    }
}

// == Utility Functions ==
/// Returns current Unix timestamp in milliseconds.
pub fn current_timestamp_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("Time went backwards")
        .as_millis() as u64
}
