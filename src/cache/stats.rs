//! Proxy Statistics Module
//!
//! Tracks proxy performance metrics: cache hits and misses, subject
//! invocations, and gate denials.

use serde::Serialize;

// == Proxy Stats ==
/// Tracks request-handling metrics for the proxy.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ProxyStats {
    /// Number of requests answered from the cache
    pub hits: u64,
    /// Number of requests that missed the cache (absent or expired entry)
    pub misses: u64,
    /// Number of times the subject was invoked to compute a result
    pub computes: u64,
    /// Number of requests rejected by the access gate
    pub denials: u64,
    /// Current number of entries held by the cache, expired ones included
    pub cached_entries: usize,
}

impl ProxyStats {
    // == Constructor ==
    /// Creates a new ProxyStats with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    // == Hit Rate ==
    /// Calculates the cache hit rate.
    ///
    /// Returns hits / (hits + misses), or 0.0 if no permitted requests
    /// have been made. Denied requests never reach the cache and do not
    /// count toward the rate.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    // == Record Hit ==
    /// Increments the hit counter.
    pub fn record_hit(&mut self) {
        self.hits += 1;
    }

    // == Record Miss ==
    /// Increments the miss counter.
    pub fn record_miss(&mut self) {
        self.misses += 1;
    }

    // == Record Compute ==
    /// Increments the subject-invocation counter.
    pub fn record_compute(&mut self) {
        self.computes += 1;
    }

    // == Record Denial ==
    /// Increments the denial counter.
    pub fn record_denial(&mut self) {
        self.denials += 1;
    }

    // == Update Entry Count ==
    /// Updates the cached entry count.
    pub fn set_cached_entries(&mut self, count: usize) {
        self.cached_entries = count;
    }
}
