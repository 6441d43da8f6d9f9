//! Configuration management for flowstate.
//!
//! This module handles the `config.yaml` file in the data directory, which
//! remembers the current mood between invocations along with a few
//! preferences.

use crate::error::Result;
use crate::logging;
use crate::paths;
use crate::tasks::Priority;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// User configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    /// The mood recorded by the last check-in.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_mood: Option<String>,

    /// Priority for new tasks when none is given.
    #[serde(default)]
    pub default_priority: Priority,

    /// Whether debug lines are written to the log file.
    #[serde(default)]
    pub debug_logging: bool,
}

impl Config {
    /// Load config from a data directory, returning None if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_from(data_dir: &Path) -> Result<Option<Self>> {
        let config_path = Self::config_path(data_dir);
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(&config_path)?;
        if content.trim().is_empty() {
            return Ok(Some(Self::default()));
        }
        let config: Self = serde_yaml::from_str(&content)?;
        Ok(Some(config))
    }

    /// Load config from a data directory, falling back to the default.
    ///
    /// A file that cannot be parsed is reported as a warning.
    #[must_use]
    pub fn load_or_default(data_dir: &Path) -> Self {
        match Self::load_from(data_dir) {
            Ok(config) => config.unwrap_or_default(),
            Err(e) => {
                logging::log_warning(&format!("Could not load config: {e}"));
                Self::default()
            }
        }
    }

    /// Save config to a data directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save_to(&self, data_dir: &Path) -> Result<()> {
        let config_path = Self::config_path(data_dir);

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_yaml::to_string(self)?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }

    /// The current mood, if one has been recorded.
    #[must_use]
    pub fn current_mood(&self) -> Option<&str> {
        self.current_mood.as_deref().filter(|m| !m.is_empty())
    }

    /// Get the config file path for a data directory.
    #[must_use]
    pub fn config_path(data_dir: &Path) -> PathBuf {
        paths::config_path(data_dir)
    }
}
