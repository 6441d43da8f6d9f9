//! Core traits for testability and abstraction.

use crate::error::Result;

/// Trait for a persistent key-value blob store.
///
/// The task store keeps each of its collections as one opaque blob under a
/// fixed key. The production implementation uses `SQLite`, while tests use an
/// in-memory store.
pub trait BlobStore {
    /// Read the blob stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying storage cannot be read.
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying storage cannot be written.
    fn set(&self, key: &str, value: &[u8]) -> Result<()>;
}

impl<T: BlobStore + ?Sized> BlobStore for &T {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &[u8]) -> Result<()> {
        (**self).set(key, value)
    }
}
