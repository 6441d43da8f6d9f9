//! Error types for `flowstate`.

use crate::tasks::InvalidPriority;

/// Errors that can occur while managing tasks and their storage.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A JSON encoding or decoding error occurred.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A YAML parsing error occurred.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// A `SQLite` database error occurred.
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// A priority string did not name a known priority.
    #[error(transparent)]
    Priority(#[from] InvalidPriority),

    /// A mood name is not in the mood catalog.
    #[error("unknown mood: '{0}'")]
    UnknownMood(String),

    /// A date string could not be parsed.
    #[error("invalid date: '{0}' (expected YYYY-MM-DD or RFC 3339)")]
    InvalidDate(String),

    /// No task matched the given identifier.
    #[error("task not found: {0}")]
    TaskNotFound(String),

    /// The data directory could not be determined.
    #[error("could not determine a data directory (set FLOWSTATE_HOME)")]
    NoDataDir,
}

/// A specialized Result type for this crate.
pub type Result<T> = std::result::Result<T, Error>;
