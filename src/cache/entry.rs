//! Cache Entry Module
//!
//! Defines a single key/value entry and its position links in the recency list.

// == Entry ==
/// A key/value pair resident in the cache.
///
/// `prev` and `next` are slot handles into the recency list arena:
/// `prev` points toward the head (more recent), `next` toward the tail.
#[derive(Debug, Clone)]
pub struct Entry {
    /// The entry key
    pub key: Vec<u8>,
    /// The stored value
    pub value: Vec<u8>,
    pub(crate) prev: Option<usize>,
    pub(crate) next: Option<usize>,
}

impl Entry {
    // == Constructor ==
    /// Creates an unlinked entry.
    pub fn new(key: Vec<u8>, value: Vec<u8>) -> Self {
        Self {
            key,
            value,
            prev: None,
            next: None,
        }
    }

    // == Size ==
    /// Bytes this entry counts against the cache capacity.
    pub fn size(&self) -> usize {
        entry_size(&self.key, &self.value)
    }
}

// == Utility Functions ==
/// Capacity cost of a key/value pair: `len(key) + len(value)`.
pub fn entry_size(key: &[u8], value: &[u8]) -> usize {
    key.len() + value.len()
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_creation_unlinked() {
        let entry = Entry::new(b"key".to_vec(), b"value".to_vec());

        assert_eq!(entry.key, b"key");
        assert_eq!(entry.value, b"value");
        assert!(entry.prev.is_none());
        assert!(entry.next.is_none());
    }

    #[test]
    fn test_entry_size_counts_key_and_value() {
        let entry = Entry::new(b"abc".to_vec(), b"12345".to_vec());
        assert_eq!(entry.size(), 8);
    }

    #[test]
    fn test_entry_size_empty() {
        let entry = Entry::new(Vec::new(), Vec::new());
        assert_eq!(entry.size(), 0);
        assert_eq!(entry_size(b"", b"x"), 1);
    }
}
