//! Path utilities for determining data storage locations.
//!
//! All flowstate data lives in a single directory: `$FLOWSTATE_HOME` when
//! that variable is set, otherwise `~/.flowstate/`.

use std::path::{Path, PathBuf};

/// Environment variable overriding the data directory.
pub const DATA_DIR_ENV: &str = "FLOWSTATE_HOME";

/// The default data directory name under the home directory.
const DATA_DIR_NAME: &str = ".flowstate";

/// The database filename.
pub const DATABASE_FILENAME: &str = "flowstate.sqlite3";

/// The configuration filename.
pub const CONFIG_FILENAME: &str = "config.yaml";

/// The log filename.
pub const LOG_FILENAME: &str = "flowstate.log";

/// Get the base data directory.
///
/// Returns `None` if `FLOWSTATE_HOME` is unset and the home directory
/// cannot be determined.
#[must_use]
pub fn data_dir() -> Option<PathBuf> {
    match std::env::var_os(DATA_DIR_ENV) {
        Some(dir) if !dir.is_empty() => Some(PathBuf::from(dir)),
        _ => dirs::home_dir().map(|home| home.join(DATA_DIR_NAME)),
    }
}

/// Get the database path inside a data directory.
#[must_use]
pub fn db_path(data_dir: &Path) -> PathBuf {
    data_dir.join(DATABASE_FILENAME)
}

/// Get the config file path inside a data directory.
#[must_use]
pub fn config_path(data_dir: &Path) -> PathBuf {
    data_dir.join(CONFIG_FILENAME)
}

/// Get the log file path inside a data directory.
#[must_use]
pub fn log_path(data_dir: &Path) -> PathBuf {
    data_dir.join(LOG_FILENAME)
}
