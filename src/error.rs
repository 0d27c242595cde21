//! Error types for the cache server
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;

// == Cache Error Enum ==
/// Unified error type for the cache and its server.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CacheError {
    /// Key plus value exceed the whole cache budget
    #[error("Entry of {size} bytes exceeds cache capacity of {max_size} bytes")]
    EntryTooLarge { size: usize, max_size: usize },

    /// Key not present in cache
    #[error("Key not found: {0}")]
    KeyNotFound(String),

    /// Key already present where an absent key was required
    #[error("Key already exists: {0}")]
    KeyAlreadyExists(String),

    /// Eviction could not free enough space
    #[error("Capacity exhausted: {required} bytes required, {available} available")]
    CapacityExhausted { required: usize, available: usize },

    /// Invalid request data
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl CacheError {
    /// Builds a `KeyNotFound` from raw key bytes.
    pub fn not_found(key: &[u8]) -> Self {
        CacheError::KeyNotFound(String::from_utf8_lossy(key).into_owned())
    }

    /// Builds a `KeyAlreadyExists` from raw key bytes.
    pub fn already_exists(key: &[u8]) -> Self {
        CacheError::KeyAlreadyExists(String::from_utf8_lossy(key).into_owned())
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for CacheError {
    fn into_response(self) -> Response {
        let status = match &self {
            CacheError::EntryTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            CacheError::KeyNotFound(_) => StatusCode::NOT_FOUND,
            CacheError::KeyAlreadyExists(_) => StatusCode::CONFLICT,
            CacheError::CapacityExhausted { .. } => StatusCode::INSUFFICIENT_STORAGE,
            CacheError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            CacheError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(ErrorResponse::new(self.to_string()));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the cache server.
pub type Result<T> = std::result::Result<T, CacheError>;
