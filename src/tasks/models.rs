//! Task model types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::tasks::id::generate_task_id;

/// Task priority levels.
///
/// Serialized as the literal strings `"High"`, `"Medium"` and `"Low"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Priority {
    /// Should be done soon.
    High,
    /// Normal work (default).
    #[default]
    Medium,
    /// Nice to have.
    Low,
}

impl Priority {
    /// All priorities, most important first.
    pub const ALL: [Self; 3] = [Self::High, Self::Medium, Self::Low];

    /// Parse a priority from a string (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not a valid priority.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Result<Self, InvalidPriority> {
        match s.trim().to_lowercase().as_str() {
            "high" | "h" => Ok(Self::High),
            "medium" | "m" => Ok(Self::Medium),
            "low" | "l" => Ok(Self::Low),
            _ => Err(InvalidPriority(s.to_string())),
        }
    }

    /// Get the string representation of the priority.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error when an invalid priority string is provided.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidPriority(pub String);

impl std::fmt::Display for InvalidPriority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<String> = Priority::ALL.iter().map(|p| p.as_str().to_lowercase()).collect();
        write!(f, "invalid priority: '{}' (must be one of: {})", self.0, names.join(", "))
    }
}

impl std::error::Error for InvalidPriority {}

/// A single action item on the to-do list.
///
/// `dueDate` is serialized as an RFC 3339 UTC string, not a numeric timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Unique identifier, fixed at creation.
    pub id: Uuid,
    /// Display title. Never empty once it reaches the store.
    pub title: String,
    /// True iff the task lives in the completed collection.
    pub is_completed: bool,
    /// Priority level.
    pub priority: Priority,
    /// Optional due date.
    pub due_date: Option<DateTime<Utc>>,
    /// Mood active when the task was created or completed.
    pub mood: Option<String>,
}

impl Task {
    /// Create a new, not yet completed task with a fresh identifier.
    #[must_use]
    pub fn new(title: impl Into<String>, priority: Priority) -> Self {
        Self {
            id: generate_task_id(),
            title: title.into(),
            is_completed: false,
            priority,
            due_date: None,
            mood: None,
        }
    }

    /// Set the due date.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: DateTime<Utc>) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Tag the task with a mood.
    #[must_use]
    pub fn with_mood(mut self, mood: impl Into<String>) -> Self {
        self.mood = Some(mood.into());
        self
    }

    /// The mood tag, treating an empty string as no mood.
    #[must_use]
    pub fn mood_tag(&self) -> Option<&str> {
        self.mood.as_deref().filter(|m| !m.is_empty())
    }

    /// A copy of this task marked completed.
    #[must_use]
    pub fn completed(&self) -> Self {
        Self { is_completed: true, ..self.clone() }
    }

    /// A copy of this task marked not completed.
    #[must_use]
    pub fn reopened(&self) -> Self {
        Self { is_completed: false, ..self.clone() }
    }
}
