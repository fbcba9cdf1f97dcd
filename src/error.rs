//! Error types for the proxy service
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// == Proxy Error Enum ==
/// Unified error type for the proxy service.
///
/// A gate denial is a typed variant rather than a sentinel value, so a
/// caller can never mistake it for a legitimately computed result.
#[derive(Error, Debug)]
pub enum ProxyError {
    /// Request rejected by the access gate
    #[error("Access denied: {0}")]
    AccessDenied(String),

    /// Invalid request data
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}

// == IntoResponse Implementation ==
impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let status = match &self {
            ProxyError::AccessDenied(_) => StatusCode::FORBIDDEN,
            ProxyError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            ProxyError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        // Full Display rendering: the variant label keeps a denial body
        // distinguishable from a computed value that happens to equal the
        // denied input
        let body = Json(json!({
            "error": self.to_string()
        }));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the proxy service.
pub type Result<T> = std::result::Result<T, ProxyError>;
