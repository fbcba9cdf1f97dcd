//! Gated Proxy - an access-checking, caching proxy service
//!
//! Wraps an expensive computation behind a pluggable access gate and a
//! TTL-bounded result cache, exposed over HTTP.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod gate;
pub mod models;
pub mod proxy;
pub mod subject;
pub mod tasks;

pub use api::AppState;
pub use config::Config;
pub use proxy::GatedCachingProxy;
pub use tasks::spawn_sweep_task;
