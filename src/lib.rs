//! LRU Cache Server - a byte-budgeted in-memory key/value store
//!
//! Provides a least-recently-used cache bounded by the total size of its keys
//! and values, a mutex-guarded wrapper for shared use, and an HTTP front-end.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;

pub use api::AppState;
pub use cache::{SimpleLru, Storage, ThreadSafeLru};
pub use config::Config;
pub use error::CacheError;
