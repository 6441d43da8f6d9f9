//! The task store: active and completed collections plus mood statistics.

use crate::logging;
use crate::storage::keys;
use crate::tasks::events::{EventEmitter, StoreEvent, SubscriptionId};
use crate::tasks::models::{Priority, Task};
use crate::traits::BlobStore;
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::BTreeMap;
use uuid::Uuid;

/// Mapping from mood name to the number of tasks completed under it.
pub type MoodStats = BTreeMap<String, u32>;

/// Which branch of [`TaskStore::update_task`] was taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// The task moved from active to completed.
    Completed,
    /// The task moved from completed back to active.
    Reopened,
    /// The task's fields were replaced in place.
    Edited,
    /// No task with that ID exists; nothing changed.
    Ignored,
}

/// Fields that can be changed on a task.
#[derive(Debug, Default, Clone)]
pub struct TaskEdit {
    /// New title (if Some).
    pub title: Option<String>,
    /// New priority (if Some).
    pub priority: Option<Priority>,
    /// New due date (if Some). `Some(None)` clears it.
    pub due_date: Option<Option<DateTime<Utc>>>,
}

impl TaskEdit {
    /// Check if any fields are set for update.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.title.is_none() && self.priority.is_none() && self.due_date.is_none()
    }

    /// Apply the edit to a copy of `task`.
    #[must_use]
    pub fn apply(&self, task: &Task) -> Task {
        let mut edited = task.clone();
        if let Some(title) = &self.title {
            edited.title.clone_from(title);
        }
        if let Some(priority) = self.priority {
            edited.priority = priority;
        }
        if let Some(due_date) = self.due_date {
            edited.due_date = due_date;
        }
        edited
    }
}

/// Owner of all task state.
///
/// Every mutation is persisted to the blob store before subscribers are
/// notified. Persistence failures are logged and otherwise ignored; the
/// in-memory state stays authoritative.
#[derive(Debug)]
pub struct TaskStore<B: BlobStore> {
    blobs: B,
    tasks: Vec<Task>,
    completed: Vec<Task>,
    mood_stats: MoodStats,
    events: EventEmitter,
}

impl<B: BlobStore> TaskStore<B> {
    /// Open a store, restoring any state saved in `blobs`.
    ///
    /// Missing or unreadable collections start out empty.
    pub fn open(blobs: B) -> Self {
        let tasks: Vec<Task> = load_blob(&blobs, keys::SAVED_TASKS);
        let completed: Vec<Task> = load_blob(&blobs, keys::COMPLETED_TASKS);
        let mood_stats: MoodStats = load_blob(&blobs, keys::MOOD_STATS);
        logging::log_debug(&format!(
            "loaded {} active, {} completed, {} mood entries",
            tasks.len(),
            completed.len(),
            mood_stats.len()
        ));
        Self { blobs, tasks, completed, mood_stats, events: EventEmitter::new() }
    }

    /// The underlying blob store.
    pub const fn blobs(&self) -> &B {
        &self.blobs
    }

    /// Active tasks in insertion order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Completed tasks, most recently completed last.
    #[must_use]
    pub fn completed_tasks(&self) -> &[Task] {
        &self.completed
    }

    /// Completion counts per mood.
    #[must_use]
    pub const fn mood_stats(&self) -> &MoodStats {
        &self.mood_stats
    }

    /// Completion count for one mood (0 if never recorded).
    #[must_use]
    pub fn mood_count(&self, mood: &str) -> u32 {
        self.mood_stats.get(mood).copied().unwrap_or(0)
    }

    /// Find a task in either collection.
    #[must_use]
    pub fn get_task(&self, id: Uuid) -> Option<&Task> {
        self.tasks.iter().chain(self.completed.iter()).find(|t| t.id == id)
    }

    /// Whether the task is in the completed collection.
    #[must_use]
    pub fn is_completed(&self, id: Uuid) -> bool {
        self.completed.iter().any(|t| t.id == id)
    }

    /// Append a new task to the active collection.
    ///
    /// The task is stored as not completed. A task whose ID is already
    /// present is ignored.
    pub fn add_task(&mut self, mut task: Task) {
        if self.get_task(task.id).is_some() {
            logging::log_warning(&format!("ignoring duplicate task id {}", task.id));
            return;
        }
        task.is_completed = false;
        let id = task.id;
        self.tasks.push(task);
        logging::log_debug(&format!("added task {id}"));
        self.save_tasks();
        self.events.emit(&StoreEvent::TaskAdded { id });
    }

    /// Apply an updated copy of an existing task.
    ///
    /// `updated.is_completed` selects the transition:
    /// - `true` and the task is active: it moves to the completed collection
    ///   and the count for its mood goes up by one.
    /// - `false` and the task is completed: it moves back to the active
    ///   collection and the count for the mood it was completed under goes
    ///   down by one, never below zero.
    /// - otherwise the record is replaced in place without touching the
    ///   statistics.
    ///
    /// Unknown IDs are ignored.
    pub fn update_task(&mut self, updated: Task) -> Transition {
        let id = updated.id;
        let active = self.tasks.iter().position(|t| t.id == id);
        let done = self.completed.iter().position(|t| t.id == id);

        let (transition, event) = match (updated.is_completed, active, done) {
            (true, Some(index), _) => {
                self.tasks.remove(index);
                let mood = updated.mood_tag().map(str::to_string);
                self.completed.push(updated);
                if let Some(mood) = &mood {
                    *self.mood_stats.entry(mood.clone()).or_insert(0) += 1;
                    self.save_mood_stats();
                }
                (Transition::Completed, StoreEvent::TaskCompleted { id, mood })
            }
            (false, _, Some(index)) => {
                let previous = self.completed.remove(index);
                let mood = previous.mood_tag().map(str::to_string);
                self.tasks.push(updated);
                if let Some(mood) = &mood {
                    let count = self.mood_stats.entry(mood.clone()).or_insert(0);
                    *count = count.saturating_sub(1);
                    self.save_mood_stats();
                }
                (Transition::Reopened, StoreEvent::TaskReopened { id, mood })
            }
            (false, Some(index), None) => {
                self.tasks[index] = updated;
                (Transition::Edited, StoreEvent::TaskEdited { id })
            }
            (true, None, Some(index)) => {
                self.completed[index] = updated;
                (Transition::Edited, StoreEvent::TaskEdited { id })
            }
            (_, None, None) => {
                logging::log_debug(&format!("update for unknown task {id} ignored"));
                return Transition::Ignored;
            }
        };

        logging::log_debug(&format!("task {id}: {transition:?}"));
        self.save_tasks();
        self.events.emit(&event);
        transition
    }

    /// Remove a task from whichever collection holds it.
    ///
    /// Mood statistics are left untouched. Returns whether anything was removed.
    pub fn delete_task(&mut self, id: Uuid) -> bool {
        let before = self.tasks.len() + self.completed.len();
        self.tasks.retain(|t| t.id != id);
        self.completed.retain(|t| t.id != id);
        if self.tasks.len() + self.completed.len() == before {
            return false;
        }
        logging::log_debug(&format!("deleted task {id}"));
        self.save_tasks();
        self.events.emit(&StoreEvent::TaskDeleted { id });
        true
    }

    /// Empty the completed collection. Returns how many tasks were removed.
    pub fn clear_completed_tasks(&mut self) -> usize {
        let count = self.completed.len();
        self.completed.clear();
        logging::log_debug(&format!("cleared {count} completed tasks"));
        self.save_tasks();
        self.events.emit(&StoreEvent::CompletedCleared { count });
        count
    }

    /// Empty the mood statistics.
    pub fn reset_mood_stats(&mut self) {
        self.mood_stats.clear();
        logging::log_debug("reset mood statistics");
        self.save_mood_stats();
        self.events.emit(&StoreEvent::MoodStatsReset);
    }

    /// Register a callback invoked after every applied change.
    pub fn subscribe(&mut self, callback: impl FnMut(&StoreEvent) + 'static) -> SubscriptionId {
        self.events.subscribe(callback)
    }

    /// Remove a callback. Returns whether it was registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.events.unsubscribe(id)
    }

    /// Get the number of active subscribers.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.events.subscriber_count()
    }

    /// Get the total number of change events emitted.
    #[must_use]
    pub const fn emit_count(&self) -> u64 {
        self.events.emit_count()
    }

    fn save_tasks(&self) {
        save_blob(&self.blobs, keys::SAVED_TASKS, &self.tasks);
        save_blob(&self.blobs, keys::COMPLETED_TASKS, &self.completed);
    }

    fn save_mood_stats(&self) {
        save_blob(&self.blobs, keys::MOOD_STATS, &self.mood_stats);
    }
}

/// Decode the JSON blob under `key`, falling back to the empty value.
fn load_blob<T: DeserializeOwned + Default>(blobs: &impl BlobStore, key: &str) -> T {
    match blobs.get(key) {
        Ok(Some(bytes)) => serde_json::from_slice(&bytes).unwrap_or_else(|e| {
            logging::log_error(&format!("Error loading {key}: {e}"));
            T::default()
        }),
        Ok(None) => T::default(),
        Err(e) => {
            logging::log_error(&format!("Error reading {key}: {e}"));
            T::default()
        }
    }
}

/// Encode `value` as JSON and store it under `key`, logging any failure.
fn save_blob<T: Serialize + ?Sized>(blobs: &impl BlobStore, key: &str, value: &T) {
    let result = serde_json::to_vec(value)
        .map_err(crate::error::Error::from)
        .and_then(|bytes| blobs.set(key, &bytes));
    if let Err(e) = result {
        logging::log_error(&format!("Error saving {key}: {e}"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::SqliteBlobStore;
    use crate::testing::{FailingBlobStore, MemoryBlobStore};
    use std::cell::RefCell;
    use std::rc::Rc;
    use tempfile::TempDir;

    fn create_test_store() -> (MemoryBlobStore, TaskStore<MemoryBlobStore>) {
        let blobs = MemoryBlobStore::new();
        let store = TaskStore::open(blobs.clone());
        (blobs, store)
    }

    fn stats(entries: &[(&str, u32)]) -> MoodStats {
        entries.iter().map(|(k, v)| ((*k).to_string(), *v)).collect()
    }

    #[test]
    fn test_open_empty() {
        let (_blobs, store) = create_test_store();
        assert!(store.tasks().is_empty());
        assert!(store.completed_tasks().is_empty());
        assert!(store.mood_stats().is_empty());
    }

    #[test]
    fn test_add_task_appends_in_order() {
        let (_blobs, mut store) = create_test_store();
        let a = Task::new("First", Priority::Low);
        let b = Task::new("Second", Priority::High);
        store.add_task(a.clone());
        store.add_task(b.clone());

        assert_eq!(store.tasks(), &[a, b]);
        assert!(store.completed_tasks().is_empty());
    }

    #[test]
    fn test_add_task_persists() {
        let (blobs, mut store) = create_test_store();
        store.add_task(Task::new("Persist me", Priority::Medium));

        let saved = blobs.get_string(keys::SAVED_TASKS).unwrap();
        assert!(saved.contains("Persist me"));
        assert_eq!(blobs.get_string(keys::COMPLETED_TASKS).as_deref(), Some("[]"));
    }

    #[test]
    fn test_add_task_forces_active_state() {
        let (_blobs, mut store) = create_test_store();
        let task = Task::new("Oops", Priority::Low).completed();
        store.add_task(task.clone());

        assert!(!store.tasks()[0].is_completed);
        assert!(!store.is_completed(task.id));
    }

    #[test]
    fn test_add_duplicate_id_ignored() {
        let (blobs, mut store) = create_test_store();
        let task = Task::new("Once", Priority::Low);
        store.add_task(task.clone());
        let writes = blobs.write_count();
        store.add_task(task);

        assert_eq!(store.tasks().len(), 1);
        assert_eq!(blobs.write_count(), writes);
    }

    #[test]
    fn test_complete_moves_task_and_counts_mood() {
        let (_blobs, mut store) = create_test_store();
        let task = Task::new("Write report", Priority::Medium);
        store.add_task(task.clone());

        let transition = store.update_task(task.completed().with_mood("Productive"));

        assert_eq!(transition, Transition::Completed);
        assert!(store.tasks().is_empty());
        assert_eq!(store.completed_tasks().len(), 1);
        assert_eq!(store.completed_tasks()[0].id, task.id);
        assert!(store.completed_tasks()[0].is_completed);
        assert_eq!(store.mood_stats(), &stats(&[("Productive", 1)]));
    }

    #[test]
    fn test_complete_without_mood_records_no_statistic() {
        let (_blobs, mut store) = create_test_store();
        let task = Task::new("No mood", Priority::Medium);
        store.add_task(task.clone());

        store.update_task(task.completed());

        assert_eq!(store.completed_tasks().len(), 1);
        assert!(store.mood_stats().is_empty());
    }

    #[test]
    fn test_complete_with_empty_mood_records_no_statistic() {
        let (_blobs, mut store) = create_test_store();
        let task = Task::new("Empty mood", Priority::Medium).with_mood("");
        store.add_task(task.clone());

        store.update_task(task.completed());

        assert!(store.mood_stats().is_empty());
    }

    #[test]
    fn test_complete_increments_existing_count() {
        let (_blobs, mut store) = create_test_store();
        for title in ["a", "b", "c"] {
            let task = Task::new(title, Priority::Low).with_mood("Happy");
            store.add_task(task.clone());
            store.update_task(task.completed());
        }
        assert_eq!(store.mood_count("Happy"), 3);
    }

    #[test]
    fn test_reopen_moves_back_and_decrements() {
        let (_blobs, mut store) = create_test_store();
        let task = Task::new("Flip", Priority::High).with_mood("Tired");
        store.add_task(task.clone());
        store.update_task(task.completed());

        let transition = store.update_task(task.clone());

        assert_eq!(transition, Transition::Reopened);
        assert_eq!(store.tasks(), &[task]);
        assert!(store.completed_tasks().is_empty());
        assert_eq!(store.mood_stats(), &stats(&[("Tired", 0)]));
    }

    #[test]
    fn test_reopen_decrements_mood_it_was_completed_under() {
        let (_blobs, mut store) = create_test_store();
        let task = Task::new("Changed mood", Priority::Low);
        store.add_task(task.clone());
        store.update_task(task.completed().with_mood("Happy"));

        store.update_task(task.with_mood("Sad"));

        assert_eq!(store.mood_count("Happy"), 0);
        assert!(!store.mood_stats().contains_key("Sad"));
    }

    #[test]
    fn test_reopen_floors_at_zero() {
        let (_blobs, mut store) = create_test_store();
        let task = Task::new("Reset in between", Priority::Low).with_mood("Bored");
        store.add_task(task.clone());
        store.update_task(task.completed());
        store.reset_mood_stats();

        store.update_task(task);

        assert_eq!(store.mood_stats(), &stats(&[("Bored", 0)]));
    }

    #[test]
    fn test_edit_active_task_in_place() {
        let (_blobs, mut store) = create_test_store();
        let first = Task::new("First", Priority::Low);
        let second = Task::new("Second", Priority::Low);
        store.add_task(first.clone());
        store.add_task(second.clone());

        let edit = TaskEdit {
            title: Some("First, renamed".to_string()),
            priority: Some(Priority::High),
            due_date: Some(Some(Utc::now())),
        };
        let transition = store.update_task(edit.apply(&first));

        assert_eq!(transition, Transition::Edited);
        assert_eq!(store.tasks().len(), 2);
        assert_eq!(store.tasks()[0].id, first.id);
        assert_eq!(store.tasks()[0].title, "First, renamed");
        assert_eq!(store.tasks()[0].priority, Priority::High);
        assert!(store.tasks()[0].due_date.is_some());
        assert_eq!(store.tasks()[1], second);
        assert!(store.mood_stats().is_empty());
    }

    #[test]
    fn test_edit_completed_task_does_not_duplicate() {
        let (_blobs, mut store) = create_test_store();
        let task = Task::new("Done", Priority::Low).with_mood("Happy");
        store.add_task(task.clone());
        store.update_task(task.completed());

        let mut renamed = task.completed();
        renamed.title = "Done, renamed".to_string();
        let transition = store.update_task(renamed);

        assert_eq!(transition, Transition::Edited);
        assert_eq!(store.completed_tasks().len(), 1);
        assert_eq!(store.completed_tasks()[0].title, "Done, renamed");
        assert_eq!(store.mood_count("Happy"), 1);
    }

    #[test]
    fn test_update_unknown_id_is_noop() {
        let (blobs, mut store) = create_test_store();
        store.add_task(Task::new("Existing", Priority::Low));
        let writes = blobs.write_count();
        let before_active = store.tasks().to_vec();

        let stranger = Task::new("Stranger", Priority::High);
        assert_eq!(store.update_task(stranger.clone()), Transition::Ignored);
        assert_eq!(store.update_task(stranger.completed().with_mood("Happy")), Transition::Ignored);

        assert_eq!(store.tasks(), before_active.as_slice());
        assert!(store.completed_tasks().is_empty());
        assert!(store.mood_stats().is_empty());
        assert_eq!(blobs.write_count(), writes);
    }

    #[test]
    fn test_delete_from_active() {
        let (_blobs, mut store) = create_test_store();
        let task = Task::new("Delete me", Priority::Low);
        store.add_task(task.clone());

        assert!(store.delete_task(task.id));
        assert!(store.tasks().is_empty());
        assert!(store.get_task(task.id).is_none());
    }

    #[test]
    fn test_delete_completed_keeps_statistics() {
        let (_blobs, mut store) = create_test_store();
        let task = Task::new("History", Priority::Low).with_mood("Sad");
        store.add_task(task.clone());
        store.update_task(task.completed());

        assert!(store.delete_task(task.id));
        assert!(store.completed_tasks().is_empty());
        assert_eq!(store.mood_count("Sad"), 1);
    }

    #[test]
    fn test_delete_twice_is_idempotent() {
        let (_blobs, mut store) = create_test_store();
        let keep = Task::new("Keep", Priority::Low);
        let gone = Task::new("Gone", Priority::Low);
        store.add_task(keep.clone());
        store.add_task(gone.clone());

        assert!(store.delete_task(gone.id));
        let after_first = store.tasks().to_vec();
        assert!(!store.delete_task(gone.id));

        assert_eq!(store.tasks(), after_first.as_slice());
        assert_eq!(store.tasks(), &[keep]);
    }

    #[test]
    fn test_delete_never_added_is_noop() {
        let (blobs, mut store) = create_test_store();
        let writes = blobs.write_count();

        assert!(!store.delete_task(Uuid::new_v4()));
        assert!(store.tasks().is_empty());
        assert!(store.completed_tasks().is_empty());
        assert!(store.mood_stats().is_empty());
        assert_eq!(blobs.write_count(), writes);
    }

    #[test]
    fn test_clear_completed_leaves_active_and_stats() {
        let (_blobs, mut store) = create_test_store();
        let active = Task::new("Active", Priority::Low);
        let done = Task::new("Done", Priority::Low).with_mood("Happy");
        store.add_task(active.clone());
        store.add_task(done.clone());
        store.update_task(done.completed());

        assert_eq!(store.clear_completed_tasks(), 1);

        assert!(store.completed_tasks().is_empty());
        assert_eq!(store.tasks(), &[active]);
        assert_eq!(store.mood_stats(), &stats(&[("Happy", 1)]));
    }

    #[test]
    fn test_reset_mood_stats_leaves_tasks() {
        let (blobs, mut store) = create_test_store();
        let done = Task::new("Done", Priority::Low).with_mood("Happy");
        store.add_task(done.clone());
        store.update_task(done.completed());

        store.reset_mood_stats();

        assert!(store.mood_stats().is_empty());
        assert_eq!(store.completed_tasks().len(), 1);
        assert_eq!(blobs.get_string(keys::MOOD_STATS).as_deref(), Some("{}"));
    }

    #[test]
    fn test_documented_scenario() {
        let (_blobs, mut store) = create_test_store();
        let task = Task::new("Write report", Priority::Medium);

        store.add_task(task.clone());
        assert_eq!(store.tasks(), &[task.clone()]);
        assert!(store.completed_tasks().is_empty());
        assert!(store.mood_stats().is_empty());

        let done = task.completed().with_mood("Productive");
        store.update_task(done.clone());
        assert!(store.tasks().is_empty());
        assert_eq!(store.completed_tasks(), &[done.clone()]);
        assert_eq!(store.mood_stats(), &stats(&[("Productive", 1)]));

        store.update_task(done.reopened());
        assert_eq!(store.tasks(), &[done.reopened()]);
        assert!(store.completed_tasks().is_empty());
        assert_eq!(store.mood_stats(), &stats(&[("Productive", 0)]));
    }

    #[test]
    fn test_state_survives_reopen() {
        let (blobs, mut store) = create_test_store();
        let active = Task::new("Still active", Priority::High).with_due_date(Utc::now());
        let done = Task::new("Finished", Priority::Low).with_mood("Stressed");
        store.add_task(active.clone());
        store.add_task(done.clone());
        store.update_task(done.completed());

        let reopened = TaskStore::open(blobs);

        assert_eq!(reopened.tasks(), store.tasks());
        assert_eq!(reopened.completed_tasks(), store.completed_tasks());
        assert_eq!(reopened.mood_stats(), store.mood_stats());
    }

    #[test]
    fn test_state_survives_reopen_with_sqlite() {
        let dir = TempDir::new().unwrap();
        let task = Task::new("On disk", Priority::Medium).with_mood("Happy");
        {
            let mut store = TaskStore::open(SqliteBlobStore::in_data_dir(dir.path()).unwrap());
            store.add_task(task.clone());
            store.update_task(task.completed());
        }
        let store = TaskStore::open(SqliteBlobStore::in_data_dir(dir.path()).unwrap());
        assert_eq!(store.completed_tasks(), &[task.completed()]);
        assert_eq!(store.mood_count("Happy"), 1);
    }

    #[test]
    fn test_corrupt_blob_loads_empty() {
        let blobs = MemoryBlobStore::new();
        blobs.insert(keys::SAVED_TASKS, "not json");
        blobs.insert(keys::MOOD_STATS, r#"{"Happy": 4}"#);

        let store = TaskStore::open(blobs);

        assert!(store.tasks().is_empty());
        assert_eq!(store.mood_count("Happy"), 4);
    }

    #[test]
    fn test_write_failures_are_swallowed() {
        let mut store = TaskStore::open(FailingBlobStore::new());
        let task = Task::new("Memory only", Priority::Low).with_mood("Happy");

        store.add_task(task.clone());
        store.update_task(task.completed());

        assert_eq!(store.completed_tasks().len(), 1);
        assert_eq!(store.mood_count("Happy"), 1);
        assert!(store.blobs().write_attempts() > 0);
    }

    #[test]
    fn test_subscribers_see_each_change() {
        let (_blobs, mut store) = create_test_store();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        store.subscribe(move |e| sink.borrow_mut().push(e.clone()));

        let task = Task::new("Observed", Priority::Low);
        let id = task.id;
        store.add_task(task.clone());
        store.update_task(task.completed().with_mood("Happy"));
        store.update_task(task.clone());
        store.update_task(Task { title: "Renamed".to_string(), ..task });
        store.delete_task(id);
        store.clear_completed_tasks();
        store.reset_mood_stats();

        assert_eq!(
            *seen.borrow(),
            vec![
                StoreEvent::TaskAdded { id },
                StoreEvent::TaskCompleted { id, mood: Some("Happy".to_string()) },
                StoreEvent::TaskReopened { id, mood: Some("Happy".to_string()) },
                StoreEvent::TaskEdited { id },
                StoreEvent::TaskDeleted { id },
                StoreEvent::CompletedCleared { count: 0 },
                StoreEvent::MoodStatsReset,
            ]
        );
        assert_eq!(store.emit_count(), 7);
    }

    #[test]
    fn test_noops_do_not_notify() {
        let (_blobs, mut store) = create_test_store();
        let count = Rc::new(RefCell::new(0));
        let counter = Rc::clone(&count);
        let sub = store.subscribe(move |_| *counter.borrow_mut() += 1);

        store.delete_task(Uuid::new_v4());
        store.update_task(Task::new("Unknown", Priority::Low));
        assert_eq!(*count.borrow(), 0);

        assert!(store.unsubscribe(sub));
        store.add_task(Task::new("Unheard", Priority::Low));
        assert_eq!(*count.borrow(), 0);
        assert_eq!(store.subscriber_count(), 0);
    }

    #[test]
    fn test_subscribers_observe_persisted_state() {
        let blobs = MemoryBlobStore::new();
        let mut store = TaskStore::open(blobs.clone());
        let persisted = Rc::new(RefCell::new(String::new()));
        let sink = Rc::clone(&persisted);
        let probe = blobs.clone();
        store.subscribe(move |_| {
            *sink.borrow_mut() = probe.get_string(keys::SAVED_TASKS).unwrap_or_default();
        });

        store.add_task(Task::new("Saved first", Priority::Low));

        assert!(persisted.borrow().contains("Saved first"));
    }

    #[test]
    fn test_task_edit_is_empty() {
        assert!(TaskEdit::default().is_empty());
        assert!(!TaskEdit { due_date: Some(None), ..Default::default() }.is_empty());
    }

    #[test]
    fn test_task_edit_clears_due_date() {
        let task = Task::new("Dated", Priority::Low).with_due_date(Utc::now());
        let edited = TaskEdit { due_date: Some(None), ..Default::default() }.apply(&task);
        assert!(edited.due_date.is_none());
        assert_eq!(edited.title, "Dated");
    }
}
