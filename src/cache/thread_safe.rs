//! Thread-Safe Wrapper Module
//!
//! Serializes access to a [`SimpleLru`] behind one mutex per cache instance.

use std::sync::{Mutex, MutexGuard};

use crate::cache::{CacheStats, SimpleLru, Storage};
use crate::error::{CacheError, Result};

// == Thread-Safe LRU ==
/// A [`SimpleLru`] that can be shared across threads.
///
/// Every call takes the lock, forwards to the inner cache and releases the
/// lock on return, so each operation is atomic with respect to the others.
#[derive(Debug)]
pub struct ThreadSafeLru {
    inner: Mutex<SimpleLru>,
}

impl ThreadSafeLru {
    // == Constructor ==
    pub fn new(max_size: usize) -> Self {
        Self::from_cache(SimpleLru::new(max_size))
    }

    /// Wraps an existing cache.
    pub fn from_cache(cache: SimpleLru) -> Self {
        Self {
            inner: Mutex::new(cache),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, SimpleLru>> {
        self.inner
            .lock()
            .map_err(|_| CacheError::Internal("cache lock poisoned".to_string()))
    }

    // == Operations ==
    pub fn try_put_if_absent(&self, key: &[u8], value: &[u8]) -> Result<()> {
        self.lock()?.put_if_absent(key, value)
    }

    pub fn try_put(&self, key: &[u8], value: &[u8]) -> Result<()> {
        self.lock()?.put(key, value)
    }

    pub fn try_set(&self, key: &[u8], value: &[u8]) -> Result<()> {
        self.lock()?.set(key, value)
    }

    pub fn try_delete(&self, key: &[u8]) -> Result<()> {
        self.lock()?.delete(key)
    }

    pub fn try_get(&self, key: &[u8]) -> Result<Vec<u8>> {
        self.lock()?.get(key)
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> Result<CacheStats> {
        Ok(self.lock()?.stats())
    }

    pub fn len(&self) -> usize {
        self.lock().map(|cache| cache.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// == Storage Implementation ==
impl Storage for ThreadSafeLru {
    fn put_if_absent(&self, key: &[u8], value: &[u8]) -> bool {
        self.try_put_if_absent(key, value).is_ok()
    }

    fn put(&self, key: &[u8], value: &[u8]) -> bool {
        self.try_put(key, value).is_ok()
    }

    fn set(&self, key: &[u8], value: &[u8]) -> bool {
        self.try_set(key, value).is_ok()
    }

    fn delete(&self, key: &[u8]) -> bool {
        self.try_delete(key).is_ok()
    }

    fn get(&self, key: &[u8], value: &mut Vec<u8>) -> bool {
        match self.try_get(key) {
            Ok(found) => {
                *value = found;
                true
            }
            Err(_) => false,
        }
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_storage_interface_round_trip() {
        let cache = ThreadSafeLru::new(100);
        let mut out = Vec::new();

        assert!(cache.put(b"key", b"value"));
        assert!(cache.get(b"key", &mut out));
        assert_eq!(out, b"value");
    }

    #[test]
    fn test_storage_get_miss_leaves_output_untouched() {
        let cache = ThreadSafeLru::new(100);
        let mut out = b"previous".to_vec();

        assert!(!cache.get(b"missing", &mut out));
        assert_eq!(out, b"previous");
    }

    #[test]
    fn test_storage_failures_collapse_to_false() {
        let cache = ThreadSafeLru::new(4);

        assert!(!cache.set(b"k", b"v"));
        assert!(!cache.delete(b"k"));
        assert!(!cache.put(b"key", b"xx"));
        assert!(cache.put_if_absent(b"k", b"v"));
        assert!(!cache.put_if_absent(b"k", b"w"));
        assert!(cache.set(b"k", b"w"));
        assert!(cache.delete(b"k"));
        assert!(cache.is_empty());
    }

    #[test]
    fn test_typed_errors_are_preserved() {
        let cache = ThreadSafeLru::new(4);

        assert_eq!(cache.try_get(b"k"), Err(CacheError::not_found(b"k")));
        assert!(matches!(
            cache.try_put(b"key", b"xx"),
            Err(CacheError::EntryTooLarge { size: 5, max_size: 4 })
        ));
    }

    #[test]
    fn test_concurrent_access_respects_capacity() {
        let cache = Arc::new(ThreadSafeLru::new(64));

        let handles: Vec<_> = (0..8)
            .map(|t| {
                let cache = Arc::clone(&cache);
                thread::spawn(move || {
                    for i in 0..200 {
                        let key = format!("t{t}-k{}", i % 10);
                        cache.put(key.as_bytes(), b"value");
                        let mut out = Vec::new();
                        cache.get(key.as_bytes(), &mut out);
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        let stats = cache.stats().unwrap();
        assert!(stats.current_size <= 64);
        cache.inner.lock().unwrap().check_invariants().unwrap();
    }
}
