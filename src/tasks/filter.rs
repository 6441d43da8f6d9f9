//! List filters: all, today, upcoming, completed.

use crate::tasks::models::Task;
use crate::tasks::store::TaskStore;
use crate::traits::BlobStore;
use chrono::{DateTime, NaiveDate, TimeZone};

/// Which tasks a list view shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TaskFilter {
    /// Every active task.
    #[default]
    All,
    /// Active tasks due today.
    Today,
    /// Active tasks due after today.
    Upcoming,
    /// Completed tasks.
    Completed,
}

impl TaskFilter {
    /// All filters in display order.
    pub const ALL: [Self; 4] = [Self::All, Self::Today, Self::Upcoming, Self::Completed];

    /// Parse a filter from a string (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not a valid filter.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Result<Self, InvalidFilter> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(Self::All),
            "today" => Ok(Self::Today),
            "upcoming" => Ok(Self::Upcoming),
            "completed" | "done" => Ok(Self::Completed),
            _ => Err(InvalidFilter(s.to_string())),
        }
    }

    /// Get the string representation of the filter.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Today => "today",
            Self::Upcoming => "upcoming",
            Self::Completed => "completed",
        }
    }

    /// Whether an active task passes this filter.
    ///
    /// Calendar days are taken in the time zone of `now`. The completed
    /// filter never matches an active task.
    #[must_use]
    pub fn matches_active<Tz: TimeZone>(&self, task: &Task, now: &DateTime<Tz>) -> bool {
        let today = now.date_naive();
        match self {
            Self::All => true,
            Self::Today => due_day(task, now).is_some_and(|day| day == today),
            Self::Upcoming => due_day(task, now).is_some_and(|day| day > today),
            Self::Completed => false,
        }
    }

    /// The tasks this filter shows, in collection order.
    pub fn apply<'a, B: BlobStore, Tz: TimeZone>(
        &self,
        store: &'a TaskStore<B>,
        now: &DateTime<Tz>,
    ) -> Vec<&'a Task> {
        match self {
            Self::Completed => store.completed_tasks().iter().collect(),
            _ => store.tasks().iter().filter(|t| self.matches_active(t, now)).collect(),
        }
    }
}

impl std::fmt::Display for TaskFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The calendar day a task is due, in the time zone of `now`.
pub(crate) fn due_day<Tz: TimeZone>(task: &Task, now: &DateTime<Tz>) -> Option<NaiveDate> {
    task.due_date.map(|due| due.with_timezone(&now.timezone()).date_naive())
}

/// Error when an invalid filter string is provided.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidFilter(pub String);

impl std::fmt::Display for InvalidFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<&str> = TaskFilter::ALL.iter().map(TaskFilter::as_str).collect();
        write!(f, "invalid filter: '{}' (must be one of: {})", self.0, names.join(", "))
    }
}

impl std::error::Error for InvalidFilter {}
