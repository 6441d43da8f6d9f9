//! Command-line interface for flowstate.
//!
//! Record how you feel, get task suggestions that fit, and track the tasks
//! you finish along with the mood you finished them in.

mod run;


pub use run::{run, run_in, CliOutput};

use crate::paths;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Mood-aware task tracker.
///
/// Check in with your mood, pick from suggested tasks, and see which moods
/// you get the most done in.
///
/// Data lives in $FLOWSTATE_HOME, or ~/.flowstate when that is unset.
#[derive(Parser, Debug)]
#[command(name = "flowstate")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Directory holding the database, config and log
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// The command to execute
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// The data directory: `--data-dir` if given, else the default location.
    #[must_use]
    pub fn resolve_data_dir(&self) -> Option<PathBuf> {
        self.data_dir.clone().or_else(paths::data_dir)
    }
}

/// Top-level commands.
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    // === Mood Commands ===
    /// Record your current mood, or show it when no name is given.
    ///
    /// New tasks are tagged with the current mood, and completing an
    /// untagged task credits it.
    Mood {
        /// Mood name (happy, productive, stressed, tired, bored, sad)
        name: Option<String>,
    },

    /// List every known mood.
    Moods,

    /// Show task suggestions for a mood.
    Suggest {
        /// Mood to suggest for (defaults to the current mood)
        #[arg(short, long)]
        mood: Option<String>,
    },

    /// Add a suggested task to your list.
    Accept {
        /// Suggestion number, as shown by `suggest`
        index: usize,

        /// Mood the suggestion belongs to (defaults to the current mood)
        #[arg(short, long)]
        mood: Option<String>,
    },

    // === Task Commands ===
    /// Add a new task, tagged with the current mood.
    Add {
        /// Task title
        title: String,

        /// Priority: high, medium, low (defaults to the configured priority)
        #[arg(short, long)]
        priority: Option<String>,

        /// Due date: YYYY-MM-DD, RFC 3339, today or tomorrow
        #[arg(short, long)]
        due: Option<String>,
    },

    /// List tasks.
    List {
        /// Which tasks to show: all, today, upcoming, completed
        #[arg(short, long, default_value = "all")]
        filter: String,
    },

    /// Mark a task as completed.
    ///
    /// A task without a mood is credited to the current mood.
    Complete {
        /// Task ID (a unique prefix is enough)
        id: String,
    },

    /// Move a completed task back to the active list.
    Reopen {
        /// Task ID (a unique prefix is enough)
        id: String,
    },

    /// Change a task's fields.
    ///
    /// Only specified fields are updated; others remain unchanged.
    Edit {
        /// Task ID (a unique prefix is enough)
        id: String,

        /// New title
        #[arg(short, long)]
        title: Option<String>,

        /// New priority: high, medium, low
        #[arg(short, long)]
        priority: Option<String>,

        /// New due date: YYYY-MM-DD, RFC 3339, today or tomorrow
        #[arg(short, long)]
        due: Option<String>,

        /// Remove the due date
        #[arg(long, conflicts_with = "due")]
        clear_due: bool,
    },

    /// Delete a task.
    Delete {
        /// Task ID (a unique prefix is enough)
        id: String,
    },

    // === Statistics Commands ===
    /// Show completion statistics.
    Stats,

    /// Remove all completed tasks. Mood statistics are kept.
    #[command(name = "clear-completed")]
    ClearCompleted,

    /// Reset the per-mood completion counts.
    #[command(name = "reset-stats")]
    ResetStats,

    /// Remove all completed tasks and reset the mood statistics.
    Clear,

    // === Utility Commands ===
    /// Show version information.
    Version,
}

impl Command {
    /// Returns true if this command changes stored data.
    #[must_use]
    pub const fn is_mutating(&self) -> bool {
        matches!(
            self,
            Self::Mood { name: Some(_) }
                | Self::Accept { .. }
                | Self::Add { .. }
                | Self::Complete { .. }
                | Self::Reopen { .. }
                | Self::Edit { .. }
                | Self::Delete { .. }
                | Self::ClearCompleted
                | Self::ResetStats
                | Self::Clear
        )
    }

    /// Returns the command name for logging.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Mood { .. } => "mood",
            Self::Moods => "moods",
            Self::Suggest { .. } => "suggest",
            Self::Accept { .. } => "accept",
            Self::Add { .. } => "add",
            Self::List { .. } => "list",
            Self::Complete { .. } => "complete",
            Self::Reopen { .. } => "reopen",
            Self::Edit { .. } => "edit",
            Self::Delete { .. } => "delete",
            Self::Stats => "stats",
            Self::ClearCompleted => "clear-completed",
            Self::ResetStats => "reset-stats",
            Self::Clear => "clear",
            Self::Version => "version",
        }
    }
}
