//! API Handlers
//!
//! HTTP request handlers for each cache server endpoint.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};

use crate::cache::ThreadSafeLru;
use crate::config::Config;
use crate::error::{CacheError, Result};
use crate::models::{
    DeleteResponse, GetResponse, HealthResponse, StatsResponse, WriteRequest, WriteResponse,
};

/// Application state shared across all handlers.
///
/// Holds the cache behind its own mutex; handlers never keep the lock
/// across an `.await`.
#[derive(Clone)]
pub struct AppState {
    /// Thread-safe cache
    pub cache: Arc<ThreadSafeLru>,
}

impl AppState {
    /// Creates a new AppState around the given cache.
    pub fn new(cache: ThreadSafeLru) -> Self {
        Self {
            cache: Arc::new(cache),
        }
    }

    /// Creates a new AppState from configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(ThreadSafeLru::new(config.max_size))
    }
}

fn validated(req: &WriteRequest) -> Result<()> {
    match req.validate() {
        Some(error_msg) => Err(CacheError::InvalidRequest(error_msg)),
        None => Ok(()),
    }
}

/// Handler for PUT /put
///
/// Inserts or overwrites a key-value pair.
pub async fn put_handler(
    State(state): State<AppState>,
    Json(req): Json<WriteRequest>,
) -> Result<Json<WriteResponse>> {
    validated(&req)?;
    state.cache.try_put(req.key.as_bytes(), req.value.as_bytes())?;

    Ok(Json(WriteResponse::new(req.key)))
}

/// Handler for PUT /put_if_absent
///
/// Stores a key-value pair only when the key is not present yet.
pub async fn put_if_absent_handler(
    State(state): State<AppState>,
    Json(req): Json<WriteRequest>,
) -> Result<Json<WriteResponse>> {
    validated(&req)?;
    state
        .cache
        .try_put_if_absent(req.key.as_bytes(), req.value.as_bytes())?;

    Ok(Json(WriteResponse::new(req.key)))
}

/// Handler for PUT /set
///
/// Overwrites the value of an existing key.
pub async fn set_handler(
    State(state): State<AppState>,
    Json(req): Json<WriteRequest>,
) -> Result<Json<WriteResponse>> {
    validated(&req)?;
    state.cache.try_set(req.key.as_bytes(), req.value.as_bytes())?;

    Ok(Json(WriteResponse::new(req.key)))
}

/// Handler for GET /get/:key
///
/// Retrieves a value from the cache by key.
pub async fn get_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<GetResponse>> {
    let value = state.cache.try_get(key.as_bytes())?;

    Ok(Json(GetResponse::new(key, &value)))
}

/// Handler for DELETE /del/:key
pub async fn delete_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<DeleteResponse>> {
    state.cache.try_delete(key.as_bytes())?;

    Ok(Json(DeleteResponse::new(key)))
}

/// Handler for GET /stats
///
/// Returns current cache statistics.
pub async fn stats_handler(State(state): State<AppState>) -> Result<Json<StatsResponse>> {
    let stats = state.cache.stats()?;

    Ok(Json(StatsResponse::from(stats)))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
