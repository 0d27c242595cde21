//! Cache Store Module
//!
//! Byte-budgeted LRU engine: a recency list and a key index kept in lockstep,
//! with tail eviction whenever an insert or growth needs room.

use std::collections::HashMap;

use tracing::debug;

use crate::cache::{entry_size, CacheStats, Entry, RecencyList};
use crate::error::{CacheError, Result};

// == Simple LRU ==
/// Fixed-capacity key/value store with least-recently-used eviction.
///
/// Capacity is counted in bytes: every entry costs `len(key) + len(value)`.
/// Not synchronized; see [`ThreadSafeLru`](crate::cache::ThreadSafeLru)
/// for shared use.
#[derive(Debug)]
pub struct SimpleLru {
    /// Key to recency list handle
    index: HashMap<Vec<u8>, usize>,
    /// Entries ordered by access time
    list: RecencyList,
    /// Performance statistics
    stats: CacheStats,
    /// Capacity budget in bytes
    max_size: usize,
    /// Bytes occupied by resident entries
    current_size: usize,
}

impl SimpleLru {
    // == Constructor ==
    /// Creates an empty cache holding at most `max_size` bytes of keys and values.
    pub fn new(max_size: usize) -> Self {
        Self {
            index: HashMap::new(),
            list: RecencyList::new(),
            stats: CacheStats::new(),
            max_size,
            current_size: 0,
        }
    }

    // == Put If Absent ==
    /// Inserts a new entry at the head, evicting from the tail as needed.
    ///
    /// Fails with `KeyAlreadyExists` if the key is present.
    pub fn put_if_absent(&mut self, key: &[u8], value: &[u8]) -> Result<()> {
        if self.index.contains_key(key) {
            return Err(CacheError::already_exists(key));
        }
        self.insert(key, value)
    }

    // == Put ==
    /// Inserts or overwrites an entry and marks it most recently used.
    pub fn put(&mut self, key: &[u8], value: &[u8]) -> Result<()> {
        match self.index.get(key).copied() {
            Some(handle) => self.update(handle, key, value),
            None => self.insert(key, value),
        }
    }

    // == Set ==
    /// Overwrites the value of an existing entry; never creates one.
    pub fn set(&mut self, key: &[u8], value: &[u8]) -> Result<()> {
        let handle = self
            .index
            .get(key)
            .copied()
            .ok_or_else(|| CacheError::not_found(key))?;
        self.update(handle, key, value)
    }

    // == Delete ==
    /// Removes an entry and releases its bytes.
    pub fn delete(&mut self, key: &[u8]) -> Result<()> {
        let handle = self
            .index
            .remove(key)
            .ok_or_else(|| CacheError::not_found(key))?;
        let entry = self
            .list
            .remove(handle)
            .ok_or_else(|| CacheError::Internal("index points to vacant slot".to_string()))?;
        self.current_size -= entry.size();
        Ok(())
    }

    // == Get ==
    /// Returns a copy of the value and marks the entry most recently used.
    pub fn get(&mut self, key: &[u8]) -> Result<Vec<u8>> {
        let Some(&handle) = self.index.get(key) else {
            self.stats.record_miss();
            return Err(CacheError::not_found(key));
        };

        self.list.move_to_front(handle);
        let value = self
            .list
            .get(handle)
            .map(|entry| entry.value.clone())
            .ok_or_else(|| CacheError::Internal("index points to vacant slot".to_string()))?;
        self.stats.record_hit();
        Ok(value)
    }

    // == Accessors ==
    /// Checks presence without touching the entry.
    pub fn contains(&self, key: &[u8]) -> bool {
        self.index.contains_key(key)
    }

    /// Returns the current number of entries in the cache.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Returns true if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Bytes currently occupied.
    pub fn current_size(&self) -> usize {
        self.current_size
    }

    pub fn max_size(&self) -> usize {
        self.max_size
    }

    /// Keys from most to least recently used.
    pub fn keys(&self) -> Vec<Vec<u8>> {
        self.list.iter().map(|(_, entry)| entry.key.clone()).collect()
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_occupancy(self.index.len(), self.current_size);
        stats.max_size = self.max_size;
        stats
    }

    // == Clear ==
    /// Drops every entry. Counters are kept.
    pub fn clear(&mut self) {
        self.index.clear();
        self.list.clear();
        self.current_size = 0;
    }

    // == Internal Helpers ==
    /// Rejects pairs that could never fit, before anything is evicted.
    fn check_size(&self, key: &[u8], value: &[u8]) -> Result<usize> {
        let size = entry_size(key, value);
        if size > self.max_size {
            return Err(CacheError::EntryTooLarge {
                size,
                max_size: self.max_size,
            });
        }
        Ok(size)
    }

    fn insert(&mut self, key: &[u8], value: &[u8]) -> Result<()> {
        let size = self.check_size(key, value)?;
        self.provide_space(size, None)?;

        let handle = self
            .list
            .push_front(Entry::new(key.to_vec(), value.to_vec()));
        self.index.insert(key.to_vec(), handle);
        self.current_size += size;
        Ok(())
    }

    /// Touches the entry, then grows or shrinks its value in place.
    fn update(&mut self, handle: usize, key: &[u8], value: &[u8]) -> Result<()> {
        self.check_size(key, value)?;
        self.list.move_to_front(handle);

        let old_len = self
            .list
            .get(handle)
            .map(|entry| entry.value.len())
            .ok_or_else(|| CacheError::Internal("index points to vacant slot".to_string()))?;
        if value.len() > old_len {
            self.provide_space(value.len() - old_len, Some(handle))?;
        }

        if let Some(entry) = self.list.get_mut(handle) {
            entry.value.clear();
            entry.value.extend_from_slice(value);
        }
        self.current_size = self.current_size - old_len + value.len();
        Ok(())
    }

    // == Provide Space ==
    /// Evicts from the tail until `required` bytes are free.
    ///
    /// `protected` is never evicted; reaching it, or an empty list, means the
    /// space cannot be reclaimed. Entries evicted before that point stay evicted.
    fn provide_space(&mut self, required: usize, protected: Option<usize>) -> Result<()> {
        while self.max_size - self.current_size < required {
            let tail = match self.list.tail() {
                Some(tail) if Some(tail) != protected => tail,
                _ => {
                    return Err(CacheError::CapacityExhausted {
                        required,
                        available: self.max_size - self.current_size,
                    })
                }
            };
            self.evict(tail)?;
        }
        Ok(())
    }

    fn evict(&mut self, handle: usize) -> Result<()> {
        let entry = self
            .list
            .remove(handle)
            .ok_or_else(|| CacheError::Internal("evicting vacant slot".to_string()))?;
        self.index.remove(entry.key.as_slice());
        self.current_size -= entry.size();
        self.stats.record_eviction();

        debug!(
            "Evicted '{}' ({} bytes), {} of {} bytes in use",
            String::from_utf8_lossy(&entry.key),
            entry.size(),
            self.current_size,
            self.max_size
        );
        Ok(())
    }

    // == Invariant Check ==
    /// Verifies that list, index and byte count agree.
    #[cfg(test)]
    pub(crate) fn check_invariants(&self) -> std::result::Result<(), String> {
        let mut total = 0;
        let mut count = 0;
        let mut prev = None;

        for (handle, entry) in self.list.iter() {
            if entry.prev != prev {
                return Err(format!("broken back link at slot {handle}"));
            }
            if self.index.get(entry.key.as_slice()) != Some(&handle) {
                return Err(format!(
                    "list entry {:?} not indexed at slot {handle}",
                    String::from_utf8_lossy(&entry.key)
                ));
            }
            total += entry.size();
            count += 1;
            prev = Some(handle);
        }

        if prev != self.list.tail() {
            return Err("tail does not match last list entry".to_string());
        }
        if count != self.index.len() || count != self.list.len() {
            return Err(format!(
                "list has {count} entries, index {}, counter {}",
                self.index.len(),
                self.list.len()
            ));
        }
        if total != self.current_size {
            return Err(format!(
                "current_size {} but entries sum to {total}",
                self.current_size
            ));
        }
        if self.current_size > self.max_size {
            return Err(format!(
                "current_size {} exceeds max_size {}",
                self.current_size, self.max_size
            ));
        }
        Ok(())
    }
}
