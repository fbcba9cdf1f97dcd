//! API Handlers
//!
//! HTTP request handlers for each proxy service endpoint.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;

use axum::{extract::State, Json};

use crate::config::Config;
use crate::error::{ProxyError, Result};
use crate::gate::{AccessGate, AllowAll};
use crate::models::{HealthResponse, ProxyRequest, ProxyResponse, StatsResponse};
use crate::proxy::GatedCachingProxy;
use crate::subject::{Compute, EchoSubject};

/// The proxy composition served over HTTP: gate and subject chosen at
/// startup, held behind trait objects.
pub type ServiceProxy =
    GatedCachingProxy<Box<dyn AccessGate + Send + Sync>, Box<dyn Compute + Send + Sync>>;

/// Application state shared across all handlers.
///
/// The proxy sits behind an Arc<RwLock<>>: concurrent handlers share one
/// cache, and the write lock keeps get/put interleavings from corrupting
/// the map. Requests are not deduplicated beyond that — two concurrent
/// misses for the same input may both compute.
#[derive(Clone)]
pub struct AppState {
    /// Thread-safe gated caching proxy
    pub proxy: Arc<RwLock<ServiceProxy>>,
}

impl AppState {
    /// Creates a new AppState over the given gate and subject, caching
    /// results for `ttl`.
    pub fn new<G, S>(gate: G, subject: S, ttl: Duration) -> Self
    where
        G: AccessGate + Send + Sync + 'static,
        S: Compute + Send + Sync + 'static,
    {
        let proxy = GatedCachingProxy::new(
            Box::new(gate) as Box<dyn AccessGate + Send + Sync>,
            Box::new(subject) as Box<dyn Compute + Send + Sync>,
            ttl,
        );
        Self {
            proxy: Arc::new(RwLock::new(proxy)),
        }
    }

    /// Creates a new AppState from configuration.
    ///
    /// Serves the reference composition: every request permitted, results
    /// produced by the echo subject.
    pub fn from_config(config: &Config) -> Self {
        Self::new(AllowAll, EchoSubject, Duration::from_secs(config.cache_ttl))
    }
}

/// Handler for POST /request
///
/// Runs the proxy operation: gate check, cache lookup, compute on miss.
/// Responds 403 when the gate denies, 400 on invalid input.
pub async fn request_handler(
    State(state): State<AppState>,
    Json(req): Json<ProxyRequest>,
) -> Result<Json<ProxyResponse>> {
    // Validate request
    if let Some(error_msg) = req.validate() {
        return Err(ProxyError::InvalidRequest(error_msg));
    }

    // Acquire write lock (a miss fills the cache)
    let mut proxy = state.proxy.write().await;
    let value = proxy.request(&req.input)?;

    Ok(Json(ProxyResponse::new(req.input, value)))
}

/// Handler for GET /stats
///
/// Returns current proxy statistics.
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    // Acquire read lock for stats
    let proxy = state.proxy.read().await;
    let stats = proxy.stats();

    Json(StatsResponse::new(
        stats.hits,
        stats.misses,
        stats.computes,
        stats.denials,
        stats.cached_entries,
    ))
}

/// Handler for GET /health
///
/// Returns health status of the service.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
