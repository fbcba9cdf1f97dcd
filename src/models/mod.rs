//! Data Transfer Objects
//!
//! Request and response body structures for the HTTP API.

pub mod requests;
pub mod responses;

pub use requests::ProxyRequest;
pub use responses::{ErrorResponse, HealthResponse, ProxyResponse, StatsResponse};
