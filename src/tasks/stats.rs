//! Completion statistics.

use crate::mood::MoodCatalog;
use crate::tasks::filter::due_day;
use crate::tasks::store::{MoodStats, TaskStore};
use crate::traits::BlobStore;
use chrono::{DateTime, TimeZone};
use serde::Serialize;
use std::collections::BTreeMap;

/// Bucket for completed tasks without a mood.
pub const UNKNOWN_MOOD: &str = "Unknown";

/// A summary of completed work.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Statistics {
    /// Number of tasks in the completed collection.
    pub total_completed: usize,
    /// Completed tasks due today. Undated completed tasks count as today.
    pub completed_today: usize,
    /// Completed tasks grouped by mood tag; every catalog mood is present.
    pub tasks_by_mood: BTreeMap<String, usize>,
    /// The persisted per-mood completion counts.
    pub mood_stats: MoodStats,
    /// Mood with the highest completion count, if any count is positive.
    pub most_productive_mood: Option<String>,
}

impl Statistics {
    /// Summarize the store as of `now`.
    pub fn compute<B: BlobStore, Tz: TimeZone>(
        store: &TaskStore<B>,
        catalog: &MoodCatalog,
        now: &DateTime<Tz>,
    ) -> Self {
        let completed = store.completed_tasks();
        let today = now.date_naive();

        let completed_today =
            completed.iter().filter(|t| due_day(t, now).map_or(true, |day| day == today)).count();

        let mut tasks_by_mood: BTreeMap<String, usize> =
            catalog.names().map(|name| (name.to_string(), 0)).collect();
        for task in completed {
            let mood = task.mood_tag().unwrap_or(UNKNOWN_MOOD);
            *tasks_by_mood.entry(mood.to_string()).or_insert(0) += 1;
        }

        Self {
            total_completed: completed.len(),
            completed_today,
            tasks_by_mood,
            mood_stats: store.mood_stats().clone(),
            most_productive_mood: most_productive_mood(store.mood_stats()),
        }
    }
}

/// The mood with the highest positive count. Ties go to the name sorting first.
#[must_use]
pub fn most_productive_mood(stats: &MoodStats) -> Option<String> {
    stats
        .iter()
        .filter(|(_, &count)| count > 0)
        .max_by(|a, b| a.1.cmp(b.1).then_with(|| b.0.cmp(a.0)))
        .map(|(name, _)| name.clone())
}
