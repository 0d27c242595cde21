//! Storage Interface Module
//!
//! The five-operation key/value contract consumed by the server layer.

// == Storage Trait ==
/// Shared key/value storage.
///
/// Every operation reports success as a plain `bool`; the typed reason for a
/// failure stays with the implementation.
pub trait Storage: Send + Sync {
    /// Stores `value` only if `key` is absent.
    fn put_if_absent(&self, key: &[u8], value: &[u8]) -> bool;

    /// Stores `value` under `key`, inserting or overwriting.
    fn put(&self, key: &[u8], value: &[u8]) -> bool;

    /// Overwrites the value of an existing `key`.
    fn set(&self, key: &[u8], value: &[u8]) -> bool;

    /// Removes `key`.
    fn delete(&self, key: &[u8]) -> bool;

    /// Copies the value of `key` into `value`.
    ///
    /// `value` is left unmodified when the key is absent.
    fn get(&self, key: &[u8], value: &mut Vec<u8>) -> bool;
}
