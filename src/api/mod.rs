//! API Module
//!
//! HTTP handlers and routing for the proxy service REST API.
//!
//! # Endpoints
//! - `POST /request` - Run a request through the gated caching proxy
//! - `GET /stats` - Get proxy statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
