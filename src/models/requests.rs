//! Request DTOs for the proxy service API
//!
//! Defines the structure of incoming HTTP request bodies.

use serde::Deserialize;

use crate::cache::MAX_INPUT_LENGTH;

/// Request body for the proxy operation (POST /request)
///
/// # Fields
/// - `input`: The request string handed to the gate, cache, and subject
#[derive(Debug, Clone, Deserialize)]
pub struct ProxyRequest {
    /// The request input
    pub input: String,
}

impl ProxyRequest {
    /// Validates the request data
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if self.input.is_empty() {
            return Some("Input cannot be empty".to_string());
        }
        if self.input.len() > MAX_INPUT_LENGTH {
            return Some(format!(
                "Input exceeds maximum length of {} bytes",
                MAX_INPUT_LENGTH
            ));
        }
        None
    }
}
