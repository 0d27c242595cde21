//! Request DTOs for the cache server API
//!
//! Defines the structure of incoming HTTP request bodies.

use serde::Deserialize;

/// Request body shared by the write operations
/// (`PUT /put`, `PUT /put_if_absent`, `PUT /set`)
#[derive(Debug, Clone, Deserialize)]
pub struct WriteRequest {
    /// The cache key
    pub key: String,
    /// The value to store
    pub value: String,
}

impl WriteRequest {
    /// Validates the request data
    ///
    /// Returns an error message if validation fails, None if valid.
    /// Size limits are enforced by the cache itself.
    pub fn validate(&self) -> Option<String> {
        if self.key.is_empty() {
            return Some("Key cannot be empty".to_string());
        }
        None
    }
}
