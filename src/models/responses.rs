//! Response DTOs for the proxy service API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;

/// Response body for the proxy operation (POST /request)
#[derive(Debug, Clone, Serialize)]
pub struct ProxyResponse {
    /// The request input
    pub input: String,
    /// The computed or cached result
    pub value: String,
}

impl ProxyResponse {
    /// Creates a new ProxyResponse
    pub fn new(input: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            value: value.into(),
        }
    }
}

/// Response body for the stats endpoint (GET /stats)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    /// Number of requests answered from the cache
    pub hits: u64,
    /// Number of requests that missed the cache
    pub misses: u64,
    /// Number of subject invocations
    pub computes: u64,
    /// Number of requests rejected by the gate
    pub denials: u64,
    /// Current number of cached entries, expired ones included
    pub cached_entries: usize,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
}

impl StatsResponse {
    /// Creates a new StatsResponse from proxy statistics
    pub fn new(hits: u64, misses: u64, computes: u64, denials: u64, cached_entries: usize) -> Self {
        let total_requests = hits + misses;
        let hit_rate = if total_requests > 0 {
            hits as f64 / total_requests as f64
        } else {
            0.0
        };
        Self {
            hits,
            misses,
            computes,
            denials,
            cached_entries,
            hit_rate,
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
