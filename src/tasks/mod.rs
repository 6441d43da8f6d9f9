//! Mood-aware task tracking.
//!
//! This module provides:
//! - Tasks with a title, priority, optional due date and optional mood tag
//! - A [`TaskStore`] holding active and completed tasks plus per-mood
//!   completion counts, persisted through a [`BlobStore`](crate::traits::BlobStore)
//! - Change notification for subscribers of the store
//! - List filters and completion statistics
//!
//! # Example
//!
//! ```no_run
//! use flowstate::tasks::{open_store, Priority, Task};
//! use std::path::Path;
//!
//! let mut store = open_store(Path::new("/tmp/flowstate")).unwrap();
//!
//! let task = Task::new("Write report", Priority::High).with_mood("Productive");
//! store.add_task(task.clone());
//!
//! // Completing credits the task's mood.
//! store.update_task(task.completed());
//! assert_eq!(store.mood_count("Productive"), 1);
//! ```

pub mod events;
pub mod filter;
pub mod id;
pub mod models;
pub mod stats;
pub mod store;

pub use events::{StoreEvent, SubscriptionId};
pub use filter::{InvalidFilter, TaskFilter};
pub use models::{InvalidPriority, Priority, Task};
pub use stats::Statistics;
pub use store::{MoodStats, TaskEdit, TaskStore, Transition};

use crate::error::Result;
use crate::storage::SqliteBlobStore;
use std::path::Path;

/// Open the task store kept in a data directory.
///
/// # Errors
///
/// Returns an error if the database cannot be created.
pub fn open_store(data_dir: &Path) -> Result<TaskStore<SqliteBlobStore>> {
    let blobs = SqliteBlobStore::in_data_dir(data_dir)?;
    Ok(TaskStore::open(blobs))
}
