//! # `flowstate`
//!
//! Mood-aware task tracking: tasks tagged with the mood they were done in,
//! per-mood completion statistics, and task suggestions for each mood.

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod mood;
pub mod paths;
pub mod storage;
pub mod tasks;
pub mod testing;
pub mod traits;

pub use config::Config;
pub use error::{Error, Result};
pub use mood::{Mood, MoodCatalog, TaskSuggestion};
pub use storage::SqliteBlobStore;
pub use tasks::{Priority, Task, TaskStore};
pub use traits::BlobStore;

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
