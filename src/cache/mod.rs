//! Cache Module
//!
//! Provides a byte-budgeted in-memory cache with LRU eviction.

mod entry;
mod lru;
mod stats;
mod storage;
mod store;
mod thread_safe;


// Re-export public types
pub use entry::{entry_size, Entry};
pub use lru::RecencyList;
pub use stats::CacheStats;
pub use storage::Storage;
pub use store::SimpleLru;
pub use thread_safe::ThreadSafeLru;
