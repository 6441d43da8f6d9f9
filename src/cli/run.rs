//! Command execution for the CLI.
//!
//! This module handles running CLI commands and producing output. Data goes
//! to stdout as JSON; human-readable messages go to stderr.

use crate::cli::{Cli, Command};
use crate::config::Config;
use crate::error::Error;
use crate::logging;
use crate::mood::{Mood, MoodCatalog, TaskSuggestion};
use crate::tasks::{self, Priority, Statistics, Task, TaskEdit, TaskFilter, TaskStore, Transition};
use crate::traits::BlobStore;
use chrono::{DateTime, Duration, FixedOffset, Local, NaiveDate, TimeZone, Utc};
use serde::Serialize;
use std::path::Path;
use std::process::ExitCode;
use uuid::Uuid;

/// Output from running the CLI, with separate stdout and stderr messages.
#[derive(Debug)]
pub struct CliOutput {
    /// Exit code for the process.
    pub exit_code: ExitCode,
    /// Messages to print to stdout.
    pub stdout: Vec<String>,
    /// Messages to print to stderr.
    pub stderr: Vec<String>,
}

/// Run a parsed command line against its data directory.
pub fn run(cli: Cli) -> CliOutput {
    let Some(data_dir) = cli.resolve_data_dir() else {
        return error_output(Error::NoDataDir.to_string());
    };
    run_in(cli.command, &data_dir, Local::now().fixed_offset())
}

/// Run a command against `data_dir`, treating `now` as the current time.
///
/// Calendar days ("today") are taken in the offset of `now`.
pub fn run_in(command: Command, data_dir: &Path, now: DateTime<FixedOffset>) -> CliOutput {
    if command.is_mutating() {
        logging::log_event(&format!("command: {}", command.name()));
    } else {
        logging::log_debug(&format!("command: {}", command.name()));
    }

    let catalog = MoodCatalog::builtin();
    let config = Config::load_or_default(data_dir);

    match command {
        Command::Version => run_version(),
        Command::Moods => run_moods(&catalog),
        Command::Mood { name } => run_mood(&catalog, config, data_dir, name.as_deref()),
        Command::Suggest { mood } => run_suggest(&catalog, &config, mood.as_deref()),
        command => {
            let mut store = match tasks::open_store(data_dir) {
                Ok(s) => s,
                Err(e) => return error_output(format!("Error opening task store: {e}")),
            };
            run_store_cmd(command, &mut store, &catalog, &config, &now)
        }
    }
}

fn run_store_cmd<B: BlobStore>(
    command: Command,
    store: &mut TaskStore<B>,
    catalog: &MoodCatalog,
    config: &Config,
    now: &DateTime<FixedOffset>,
) -> CliOutput {
    match command {
        Command::Accept { index, mood } => {
            accept_suggestion(store, catalog, config, index, mood.as_deref())
        }
        Command::Add { title, priority, due } => {
            add_task(store, catalog, config, &title, priority.as_deref(), due.as_deref(), now)
        }
        Command::List { filter } => list_tasks(store, catalog, &filter, now),
        Command::Complete { id } => complete_task(store, catalog, config, &id),
        Command::Reopen { id } => reopen_task(store, catalog, &id),
        Command::Edit { id, title, priority, due, clear_due } => {
            let (priority, due) = (priority.as_deref(), due.as_deref());
            edit_task(store, catalog, &id, title, priority, due, clear_due, now)
        }
        Command::Delete { id } => delete_task(store, &id),
        Command::Stats => json_output(&Statistics::compute(store, catalog, now)),
        Command::ClearCompleted => {
            let count = store.clear_completed_tasks();
            success_output(format!("Cleared {count} completed task(s)"))
        }
        Command::ResetStats => {
            store.reset_mood_stats();
            success_output("Mood statistics reset".to_string())
        }
        Command::Clear => {
            let count = store.clear_completed_tasks();
            store.reset_mood_stats();
            success_output(format!(
                "Cleared {count} completed task(s) and reset mood statistics"
            ))
        }
        Command::Version | Command::Moods | Command::Mood { .. } | Command::Suggest { .. } => {
            error_output(format!("'{}' does not use the task store", command.name()))
        }
    }
}

// === Utility Commands ===

fn run_version() -> CliOutput {
    CliOutput {
        exit_code: ExitCode::SUCCESS,
        stdout: vec![],
        stderr: vec![format!("flowstate v{}", crate::VERSION)],
    }
}

// === Mood Commands ===

fn run_moods(catalog: &MoodCatalog) -> CliOutput {
    let moods: Vec<MoodSummary> = catalog.moods().iter().map(MoodSummary::from).collect();
    json_output(&moods)
}

fn run_mood(
    catalog: &MoodCatalog,
    mut config: Config,
    data_dir: &Path,
    name: Option<&str>,
) -> CliOutput {
    let Some(name) = name else {
        return match config.current_mood() {
            Some(current) => mood_details(catalog, current),
            None => success_output("No mood recorded yet. Try: flowstate mood <NAME>".to_string()),
        };
    };

    let Some(mood) = catalog.get(name) else {
        return error_output(Error::UnknownMood(name.to_string()).to_string());
    };

    config.current_mood = Some(mood.name.to_string());
    if let Err(e) = config.save_to(data_dir) {
        return error_output(format!("Error saving config: {e}"));
    }

    let mut output = mood_details(catalog, mood.name);
    output.stderr.insert(0, format!("Feeling {} {}", mood.name, mood.emoji));
    output
}

fn mood_details(catalog: &MoodCatalog, name: &str) -> CliOutput {
    match catalog.get(name) {
        Some(mood) => {
            let mut output = json_output(&MoodDetails::from(mood));
            output.stderr.push(mood.strategy.to_string());
            output
        }
        None => error_output(Error::UnknownMood(name.to_string()).to_string()),
    }
}

fn run_suggest(catalog: &MoodCatalog, config: &Config, mood: Option<&str>) -> CliOutput {
    match pick_mood(catalog, config, mood) {
        Ok(mood) => json_output(&numbered_suggestions(mood.suggestions)),
        Err(e) => error_output(e),
    }
}

/// The mood named on the command line, else the recorded one.
fn pick_mood(
    catalog: &MoodCatalog,
    config: &Config,
    requested: Option<&str>,
) -> Result<&'static Mood, String> {
    let Some(name) = requested.or_else(|| config.current_mood()) else {
        return Err("No mood given and none recorded. Try: flowstate mood <NAME>".to_string());
    };
    catalog.get(name).ok_or_else(|| Error::UnknownMood(name.to_string()).to_string())
}

fn accept_suggestion<B: BlobStore>(
    store: &mut TaskStore<B>,
    catalog: &MoodCatalog,
    config: &Config,
    index: usize,
    mood: Option<&str>,
) -> CliOutput {
    let mood = match pick_mood(catalog, config, mood) {
        Ok(m) => m,
        Err(e) => return error_output(e),
    };

    let Some(suggestion) = index.checked_sub(1).and_then(|i| mood.suggestions.get(i)) else {
        return error_output(format!(
            "No suggestion {index} for {} (choose 1-{})",
            mood.name,
            mood.suggestions.len()
        ));
    };

    let task = suggestion.to_task();
    store.add_task(task.clone());
    let mut output = json_output(&TaskOutput::new(&task, catalog));
    output.stderr.push(format!("Added: {}", task.title));
    output
}

// === Task Commands ===

fn add_task<B: BlobStore>(
    store: &mut TaskStore<B>,
    catalog: &MoodCatalog,
    config: &Config,
    title: &str,
    priority: Option<&str>,
    due: Option<&str>,
    now: &DateTime<FixedOffset>,
) -> CliOutput {
    let title = title.trim();
    if title.is_empty() {
        return error_output("Task title cannot be empty".to_string());
    }

    let priority = match priority.map(Priority::from_str).transpose() {
        Ok(p) => p.unwrap_or(config.default_priority),
        Err(e) => return error_output(e.to_string()),
    };

    let due = match due.map(|d| parse_due(d, now)).transpose() {
        Ok(d) => d,
        Err(e) => return error_output(e.to_string()),
    };

    let mut task = Task::new(title, priority);
    if let Some(due) = due {
        task = task.with_due_date(due);
    }
    if let Some(mood) = config.current_mood() {
        task = task.with_mood(mood);
    }

    store.add_task(task.clone());
    let mut output = json_output(&TaskOutput::new(&task, catalog));
    output.stderr.push(format!("Added: {}", task.title));
    output
}

fn list_tasks<B: BlobStore>(
    store: &TaskStore<B>,
    catalog: &MoodCatalog,
    filter: &str,
    now: &DateTime<FixedOffset>,
) -> CliOutput {
    let filter = match TaskFilter::from_str(filter) {
        Ok(f) => f,
        Err(e) => return error_output(e.to_string()),
    };

    let tasks: Vec<TaskOutput> =
        filter.apply(store, now).into_iter().map(|t| TaskOutput::new(t, catalog)).collect();
    json_output(&tasks)
}

fn complete_task<B: BlobStore>(
    store: &mut TaskStore<B>,
    catalog: &MoodCatalog,
    config: &Config,
    id: &str,
) -> CliOutput {
    let task = match find_task(store, id) {
        Ok(t) => t,
        Err(e) => return error_output(e),
    };
    if task.is_completed {
        return error_output(format!("Task is already completed: {}", task.title));
    }

    let mut done = task.completed();
    if done.mood_tag().is_none() {
        done.mood = config.current_mood().map(str::to_string);
    }

    store.update_task(done.clone());
    let mut output = json_output(&TaskOutput::new(&done, catalog));
    output.stderr.push(format!("Completed: {}", done.title));
    output
}

fn reopen_task<B: BlobStore>(
    store: &mut TaskStore<B>,
    catalog: &MoodCatalog,
    id: &str,
) -> CliOutput {
    let task = match find_task(store, id) {
        Ok(t) => t,
        Err(e) => return error_output(e),
    };
    if !task.is_completed {
        return error_output(format!("Task is not completed: {}", task.title));
    }

    let reopened = task.reopened();
    store.update_task(reopened.clone());
    let mut output = json_output(&TaskOutput::new(&reopened, catalog));
    output.stderr.push(format!("Reopened: {}", reopened.title));
    output
}

#[allow(clippy::too_many_arguments)]
fn edit_task<B: BlobStore>(
    store: &mut TaskStore<B>,
    catalog: &MoodCatalog,
    id: &str,
    title: Option<String>,
    priority: Option<&str>,
    due: Option<&str>,
    clear_due: bool,
    now: &DateTime<FixedOffset>,
) -> CliOutput {
    let task = match find_task(store, id) {
        Ok(t) => t,
        Err(e) => return error_output(e),
    };

    let title = title.map(|t| t.trim().to_string());
    if title.as_deref().is_some_and(str::is_empty) {
        return error_output("Task title cannot be empty".to_string());
    }

    let priority = match priority.map(Priority::from_str).transpose() {
        Ok(p) => p,
        Err(e) => return error_output(e.to_string()),
    };

    let due_date = if clear_due {
        Some(None)
    } else {
        match due.map(|d| parse_due(d, now)).transpose() {
            Ok(d) => d.map(Some),
            Err(e) => return error_output(e.to_string()),
        }
    };

    let edit = TaskEdit { title, priority, due_date };
    if edit.is_empty() {
        return error_output(
            "Nothing to change (use --title, --priority, --due or --clear-due)".to_string(),
        );
    }

    let edited = edit.apply(&task);
    match store.update_task(edited.clone()) {
        Transition::Ignored => error_output(Error::TaskNotFound(id.to_string()).to_string()),
        _ => json_output(&TaskOutput::new(&edited, catalog)),
    }
}

fn delete_task<B: BlobStore>(store: &mut TaskStore<B>, id: &str) -> CliOutput {
    let task = match find_task(store, id) {
        Ok(t) => t,
        Err(e) => return error_output(e),
    };

    if store.delete_task(task.id) {
        success_output(format!("Deleted: {}", task.title))
    } else {
        error_output(Error::TaskNotFound(id.to_string()).to_string())
    }
}

// === Helper Functions ===

/// Find a task in either collection by full ID or unique prefix.
fn find_task<B: BlobStore>(store: &TaskStore<B>, id: &str) -> Result<Task, String> {
    let id = id.trim().to_lowercase();
    if let Ok(uuid) = Uuid::parse_str(&id) {
        return store
            .get_task(uuid)
            .cloned()
            .ok_or_else(|| Error::TaskNotFound(id.clone()).to_string());
    }

    let matches: Vec<&Task> = store
        .tasks()
        .iter()
        .chain(store.completed_tasks())
        .filter(|t| !id.is_empty() && t.id.to_string().starts_with(&id))
        .collect();

    match matches.as_slice() {
        [task] => Ok((*task).clone()),
        [] => Err(Error::TaskNotFound(id).to_string()),
        many => Err(format!("Ambiguous task ID '{id}' matches {} tasks", many.len())),
    }
}

/// Parse a due date given as `today`, `tomorrow`, `YYYY-MM-DD` or RFC 3339.
///
/// Plain dates are placed at noon in the offset of `now`.
fn parse_due(text: &str, now: &DateTime<FixedOffset>) -> crate::error::Result<DateTime<Utc>> {
    let text = text.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Ok(dt.with_timezone(&Utc));
    }

    let today = now.date_naive();
    let day = match text.to_lowercase().as_str() {
        "today" => Some(today),
        "tomorrow" => today.checked_add_signed(Duration::days(1)),
        _ => NaiveDate::parse_from_str(text, "%Y-%m-%d").ok(),
    };

    day.and_then(|d| d.and_hms_opt(12, 0, 0))
        .and_then(|noon| now.timezone().from_local_datetime(&noon).single())
        .map(|dt| dt.with_timezone(&Utc))
        .ok_or_else(|| Error::InvalidDate(text.to_string()))
}

fn json_output<T: Serialize + ?Sized>(value: &T) -> CliOutput {
    match serde_json::to_string_pretty(value) {
        Ok(json) => CliOutput { exit_code: ExitCode::SUCCESS, stdout: vec![json], stderr: vec![] },
        Err(e) => error_output(e.to_string()),
    }
}

fn success_output(message: String) -> CliOutput {
    CliOutput { exit_code: ExitCode::SUCCESS, stdout: vec![], stderr: vec![message] }
}

fn error_output(message: String) -> CliOutput {
    CliOutput { exit_code: ExitCode::from(1), stdout: vec![], stderr: vec![message] }
}

// === Output Types ===

/// A task as shown on the command line.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct TaskOutput<'a> {
    #[serde(flatten)]
    task: &'a Task,
    #[serde(skip_serializing_if = "Option::is_none")]
    mood_emoji: Option<&'static str>,
}

impl<'a> TaskOutput<'a> {
    fn new(task: &'a Task, catalog: &MoodCatalog) -> Self {
        let mood_emoji = task.mood_tag().map(|m| catalog.emoji_for(m));
        Self { task, mood_emoji }
    }
}

/// One line of the mood list.
#[derive(Debug, Serialize)]
struct MoodSummary {
    name: &'static str,
    emoji: &'static str,
    color: String,
    energy_level: u8,
    focus_level: u8,
    strategy: &'static str,
}

impl From<&Mood> for MoodSummary {
    fn from(mood: &Mood) -> Self {
        Self {
            name: mood.name,
            emoji: mood.emoji,
            color: mood.color.hex(),
            energy_level: mood.energy_level,
            focus_level: mood.focus_level,
            strategy: mood.strategy,
        }
    }
}

/// A mood with its activities and suggestions.
#[derive(Debug, Serialize)]
struct MoodDetails {
    #[serde(flatten)]
    summary: MoodSummary,
    suggested_activities: &'static [&'static str],
    suggestions: Vec<NumberedSuggestion>,
}

impl From<&Mood> for MoodDetails {
    fn from(mood: &Mood) -> Self {
        Self {
            summary: MoodSummary::from(mood),
            suggested_activities: mood.suggested_activities,
            suggestions: numbered_suggestions(mood.suggestions),
        }
    }
}

/// A suggestion with the number `accept` takes.
#[derive(Debug, Serialize)]
struct NumberedSuggestion {
    index: usize,
    #[serde(flatten)]
    suggestion: TaskSuggestion,
}

fn numbered_suggestions(suggestions: &[TaskSuggestion]) -> Vec<NumberedSuggestion> {
    suggestions
        .iter()
        .enumerate()
        .map(|(i, s)| NumberedSuggestion { index: i + 1, suggestion: s.clone() })
        .collect()
}
