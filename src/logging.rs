//! Diagnostic logging to a file in the data directory.
//!
//! Writes logs to `flowstate.log`. Until [`init`] has been called, warnings
//! and errors go to stderr and everything else is dropped.

use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::panic;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

/// Maximum log file size before rotation (1MB).
const MAX_LOG_SIZE: u64 = 1_048_576;

/// Global log file handle (lazily initialized).
static LOG_FILE: Mutex<Option<File>> = Mutex::new(None);

/// Whether debug lines are written.
static DEBUG_ENABLED: AtomicBool = AtomicBool::new(false);

/// Initialize the logger, appending to the file at `path`.
///
/// An existing file larger than 1MB is first moved to `<path>.old`.
///
/// # Errors
///
/// Returns an error if the log file cannot be created.
pub fn init(path: &Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    if let Ok(metadata) = fs::metadata(path) {
        if metadata.len() > MAX_LOG_SIZE {
            let backup = path.with_extension("log.old");
            let _ = fs::rename(path, backup);
        }
    }

    let file = OpenOptions::new().create(true).append(true).open(path)?;

    if let Ok(mut guard) = LOG_FILE.lock() {
        *guard = Some(file);
    }

    Ok(())
}

/// Stop writing to the log file.
pub fn close() {
    if let Ok(mut guard) = LOG_FILE.lock() {
        *guard = None;
    }
}

/// Enable or disable debug lines.
pub fn set_debug(enabled: bool) {
    DEBUG_ENABLED.store(enabled, Ordering::Relaxed);
}

/// Whether debug lines are currently written.
#[must_use]
pub fn debug_enabled() -> bool {
    DEBUG_ENABLED.load(Ordering::Relaxed)
}

/// Write a log entry. Returns false if no log file is open.
fn write_log(message: &str) -> bool {
    let Ok(mut guard) = LOG_FILE.lock() else {
        return false;
    };
    let Some(file) = guard.as_mut() else {
        return false;
    };
    let ts = chrono::Utc::now().to_rfc3339();
    let _ = writeln!(file, "[{ts}] {message}");
    let _ = file.flush();
    true
}

/// Log a general event.
pub fn log_event(message: &str) {
    write_log(&format!("EVENT: {message}"));
}

/// Log a debug line, if debug logging is enabled.
pub fn log_debug(message: &str) {
    if debug_enabled() {
        write_log(&format!("DEBUG: {message}"));
    }
}

/// Log a warning.
pub fn log_warning(message: &str) {
    if !write_log(&format!("WARN: {message}")) {
        eprintln!("Warning: {message}");
    }
}

/// Log an error.
pub fn log_error(message: &str) {
    if !write_log(&format!("ERROR: {message}")) {
        eprintln!("Error: {message}");
    }
}

/// Install a panic hook that also records panics in the log file.
pub fn install_panic_hook() {
    let original_hook = panic::take_hook();

    panic::set_hook(Box::new(move |info| {
        let location = info.location().map_or_else(
            || "unknown".to_string(),
            |loc| format!("{}:{}:{}", loc.file(), loc.line(), loc.column()),
        );
        let payload = info
            .payload()
            .downcast_ref::<&str>()
            .map(|s| (*s).to_string())
            .or_else(|| info.payload().downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "unknown panic payload".to_string());
        write_log(&format!("PANIC at {location}: {payload}"));

        original_hook(info);
    }));
}
