//! `SQLite`-based blob storage for task state.
//!
//! All state is stored in a single `SQLite` database, by default at
//! `~/.flowstate/flowstate.sqlite3`, as one row per key.

use crate::error::Result;
use crate::traits::BlobStore;
use rusqlite::{params, Connection, OptionalExtension};
use std::path::{Path, PathBuf};

/// Key constants for the persisted collections.
pub mod keys {
    /// Active tasks, in insertion order.
    pub const SAVED_TASKS: &str = "savedTasks";
    /// Completed tasks, most recently completed last.
    pub const COMPLETED_TASKS: &str = "completedTasks";
    /// Mapping from mood name to completion count.
    pub const MOOD_STATS: &str = "moodStats";
}

/// SQLite-based blob store.
///
/// Each operation opens a new connection to the database file.
#[derive(Debug, Clone)]
pub struct SqliteBlobStore {
    /// Path to the database file.
    db_path: PathBuf,
}

impl SqliteBlobStore {
    /// Create a new `SQLite` blob store inside the given data directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be initialized.
    pub fn in_data_dir(data_dir: &Path) -> Result<Self> {
        Self::with_path(crate::paths::db_path(data_dir))
    }

    /// Create a new `SQLite` blob store with a specific database path.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be initialized.
    pub fn with_path(db_path: impl AsRef<Path>) -> Result<Self> {
        let store = Self { db_path: db_path.as_ref().to_path_buf() };
        store.init_schema()?;
        Ok(store)
    }

    /// Get the database path.
    #[must_use]
    pub fn db_path(&self) -> &Path {
        &self.db_path
    }

    /// Open a connection to the database.
    fn open(&self) -> Result<Connection> {
        if let Some(parent) = self.db_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let conn = Connection::open(&self.db_path)?;
        conn.execute_batch("PRAGMA journal_mode = WAL;")?;
        Ok(conn)
    }

    /// Initialize the database schema.
    fn init_schema(&self) -> Result<()> {
        let conn = self.open()?;

        conn.execute_batch(
            r"
            CREATE TABLE IF NOT EXISTS blobs (
                key TEXT PRIMARY KEY,
                value BLOB NOT NULL,
                updated_at TEXT NOT NULL DEFAULT (datetime('now'))
            );
            ",
        )?;

        Ok(())
    }
}

impl BlobStore for SqliteBlobStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let conn = self.open()?;
        let value = conn
            .query_row("SELECT value FROM blobs WHERE key = ?1", params![key], |row| row.get(0))
            .optional()?;
        Ok(value)
    }

    fn set(&self, key: &str, value: &[u8]) -> Result<()> {
        let conn = self.open()?;
        conn.execute(
            "INSERT INTO blobs (key, value, updated_at) VALUES (?1, ?2, datetime('now'))
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
            params![key, value],
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_store() -> (TempDir, SqliteBlobStore) {
        let dir = TempDir::new().unwrap();
        let store = SqliteBlobStore::in_data_dir(dir.path()).unwrap();
        (dir, store)
    }

    #[test]
    fn test_new_store_creates_database() {
        let (_dir, store) = create_test_store();
        assert!(store.db_path().exists());
        assert!(store.db_path().to_string_lossy().ends_with(crate::paths::DATABASE_FILENAME));
    }

    #[test]
    fn test_creates_missing_parent_directories() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("a").join("b").join("store.sqlite3");
        let store = SqliteBlobStore::with_path(&nested).unwrap();
        assert!(store.db_path().exists());
    }

    #[test]
    fn test_get_missing_key() {
        let (_dir, store) = create_test_store();
        assert_eq!(store.get(keys::SAVED_TASKS).unwrap(), None);
    }

    #[test]
    fn test_set_and_get() {
        let (_dir, store) = create_test_store();
        store.set(keys::MOOD_STATS, br#"{"Happy":2}"#).unwrap();
        assert_eq!(store.get(keys::MOOD_STATS).unwrap().as_deref(), Some(&br#"{"Happy":2}"#[..]));
    }

    #[test]
    fn test_set_overwrites() {
        let (_dir, store) = create_test_store();
        store.set(keys::SAVED_TASKS, b"[1]").unwrap();
        store.set(keys::SAVED_TASKS, b"[2]").unwrap();
        assert_eq!(store.get(keys::SAVED_TASKS).unwrap(), Some(b"[2]".to_vec()));
    }

    #[test]
    fn test_keys_are_independent() {
        let (_dir, store) = create_test_store();
        store.set(keys::SAVED_TASKS, b"active").unwrap();
        store.set(keys::COMPLETED_TASKS, b"done").unwrap();
        assert_eq!(store.get(keys::SAVED_TASKS).unwrap(), Some(b"active".to_vec()));
        assert_eq!(store.get(keys::COMPLETED_TASKS).unwrap(), Some(b"done".to_vec()));
    }

    #[test]
    fn test_values_survive_reopen() {
        let dir = TempDir::new().unwrap();
        {
            let store = SqliteBlobStore::in_data_dir(dir.path()).unwrap();
            store.set(keys::SAVED_TASKS, b"persisted").unwrap();
        }
        let reopened = SqliteBlobStore::in_data_dir(dir.path()).unwrap();
        assert_eq!(reopened.get(keys::SAVED_TASKS).unwrap(), Some(b"persisted".to_vec()));
    }

    #[test]
    fn test_corrupted_database_fails_to_open() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("broken.sqlite3");
        std::fs::write(&path, "this is not a valid sqlite database").unwrap();
        assert!(SqliteBlobStore::with_path(&path).is_err());
    }
}
