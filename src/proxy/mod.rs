//! Proxy Module
//!
//! Composes an access gate and an expiring cache in front of a compute
//! subject. The single operation is `request`: gate check, cache lookup,
//! compute on miss, cache fill.
//!
//! There is no single-flight deduplication: two callers missing on the same
//! key at once will each invoke the subject, each overwriting the cache.
//! Callers that need exclusion wrap the proxy in a lock, as the HTTP layer
//! does.

use std::time::Duration;

use tracing::debug;

use crate::cache::{current_timestamp_ms, ExpiringCache, ProxyStats};
use crate::error::{ProxyError, Result};
use crate::gate::AccessGate;
use crate::subject::Compute;

// == Gated Caching Proxy ==
/// Access-checking, caching wrapper around a compute subject.
///
/// Owns its gate, subject, and cache outright; the subject is constructed
/// once at build time and lives as long as the proxy.
#[derive(Debug)]
pub struct GatedCachingProxy<G: AccessGate, S: Compute> {
    /// Permission policy consulted before any other work
    gate: G,
    /// The computation being guarded
    subject: S,
    /// TTL-bounded result cache
    cache: ExpiringCache,
    /// Request-handling metrics
    stats: ProxyStats,
}

impl<G: AccessGate, S: Compute> GatedCachingProxy<G, S> {
    // == Constructor ==
    /// Creates a proxy over `subject`, gated by `gate`, caching results
    /// for `ttl`.
    pub fn new(gate: G, subject: S, ttl: Duration) -> Self {
        Self {
            gate,
            subject,
            cache: ExpiringCache::new(ttl),
            stats: ProxyStats::new(),
        }
    }

    // == Request ==
    /// Serves a request: denied, answered from cache, or computed fresh.
    ///
    /// On denial the cache is neither read nor written and the subject is
    /// never invoked.
    pub fn request(&mut self, input: &str) -> Result<String> {
        self.request_at(input, current_timestamp_ms())
    }

    /// Serves a request as of the explicit instant `now` (Unix milliseconds).
    ///
    /// `request` delegates here with the wall clock; tests drive this
    /// directly to exercise the TTL window without sleeping.
    pub fn request_at(&mut self, input: &str, now: u64) -> Result<String> {
        if !self.gate.allow(input) {
            self.stats.record_denial();
            debug!(input, "request denied by gate");
            return Err(ProxyError::AccessDenied(input.to_string()));
        }

        if let Some(value) = self.cache.get(input, now) {
            self.stats.record_hit();
            debug!(input, "cache hit");
            return Ok(value);
        }
        self.stats.record_miss();

        let result = self.subject.compute(input);
        self.stats.record_compute();
        debug!(input, "computed fresh result");

        self.cache.put(input.to_string(), result.clone(), now);
        Ok(result)
    }

    // == Stats ==
    /// Returns current proxy statistics with an up-to-date entry count.
    pub fn stats(&self) -> ProxyStats {
        let mut stats = self.stats.clone();
        stats.set_cached_entries(self.cache.len());
        stats
    }

    // == Sweep Expired ==
    /// Removes expired cache entries as of the wall clock; returns the count.
    ///
    /// Invoked only by the opt-in background sweep task.
    pub fn sweep_expired(&mut self) -> usize {
        self.cache.sweep(current_timestamp_ms())
    }

    // == Cache Length ==
    /// Returns the number of cached entries, expired ones included.
    pub fn cached_entries(&self) -> usize {
        self.cache.len()
    }
}
