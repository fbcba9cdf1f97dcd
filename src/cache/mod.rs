//! Cache Module
//!
//! Provides the TTL-bounded result cache backing the proxy, with lazy expiry
//! and opt-in sweeping.

mod entry;
mod stats;
mod store;

#[cfg(test)]
mod property_tests;

// Re-export public types
pub use entry::{current_timestamp_ms, CacheEntry};
pub use stats::ProxyStats;
pub use store::ExpiringCache;

// == Public Constants ==
/// Maximum allowed request input length in bytes
pub const MAX_INPUT_LENGTH: usize = 4096;
