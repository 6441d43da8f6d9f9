//! Testing utilities and mock implementations.
//!
//! These types are provided for use in tests. They may appear unused in
//! the library itself but are consumed by unit and integration tests.

#![allow(dead_code)]

use crate::error::{Error, Result};
use crate::traits::BlobStore;
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

/// An in-memory blob store.
///
/// Clones share the same underlying map, so a test can hand one clone to a
/// task store and inspect what was persisted through another.
#[derive(Debug, Clone, Default)]
pub struct MemoryBlobStore {
    blobs: Rc<RefCell<HashMap<String, Vec<u8>>>>,
    writes: Rc<Cell<usize>>,
}

impl MemoryBlobStore {
    /// Create an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a raw value without counting it as a write.
    pub fn insert(&self, key: &str, value: impl Into<Vec<u8>>) {
        self.blobs.borrow_mut().insert(key.to_string(), value.into());
    }

    /// The raw value under `key`, decoded as UTF-8.
    #[must_use]
    pub fn get_string(&self, key: &str) -> Option<String> {
        self.blobs.borrow().get(key).map(|v| String::from_utf8_lossy(v).into_owned())
    }

    /// Number of `set` calls made so far.
    #[must_use]
    pub fn write_count(&self) -> usize {
        self.writes.get()
    }
}

impl BlobStore for MemoryBlobStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        Ok(self.blobs.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &[u8]) -> Result<()> {
        self.writes.set(self.writes.get() + 1);
        self.blobs.borrow_mut().insert(key.to_string(), value.to_vec());
        Ok(())
    }
}

/// A blob store whose writes always fail.
///
/// Reads succeed and return whatever was seeded with [`FailingBlobStore::with_value`].
#[derive(Debug, Default)]
pub struct FailingBlobStore {
    seeded: HashMap<String, Vec<u8>>,
    attempts: Cell<usize>,
}

impl FailingBlobStore {
    /// Create a store with no seeded values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a value returned by `get`.
    #[must_use]
    pub fn with_value(mut self, key: &str, value: impl Into<Vec<u8>>) -> Self {
        self.seeded.insert(key.to_string(), value.into());
        self
    }

    /// Number of write attempts made so far.
    #[must_use]
    pub fn write_attempts(&self) -> usize {
        self.attempts.get()
    }
}

impl BlobStore for FailingBlobStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        Ok(self.seeded.get(key).cloned())
    }

    fn set(&self, _key: &str, _value: &[u8]) -> Result<()> {
        self.attempts.set(self.attempts.get() + 1);
        Err(Error::Io(std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only store")))
    }
}
