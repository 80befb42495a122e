//! Append-only file log.
//!
//! The terminal owns stdout/stderr while the UI runs, so every message goes
//! to `<cache>/devcircle/logs/devcircle-<started>.log` instead. Until
//! [`init_logging`] succeeds the `log_*` calls are silent no-ops.

use std::fmt;
use std::fs::{create_dir_all, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use chrono::{DateTime, Local};

use crate::constants::APP_NAME;
use crate::error::{DevCircleResult, ErrorContext};

lazy_static::lazy_static! {
    static ref LOG_FILE: Mutex<Option<PathBuf>> = Mutex::new(None);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Debug,
    Info,
    Error,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Error => "ERROR",
        };
        write!(f, "{:<5}", tag)
    }
}

/// One log record: `2024-05-01T09:30:00.125 INFO  message`
pub fn format_line(at: DateTime<Local>, level: Level, message: &str) -> String {
    format!("{} {} {}", at.format("%Y-%m-%dT%H:%M:%S%.3f"), level, message)
}

/// Log into the default cache directory
pub fn init_logging() -> DevCircleResult<PathBuf> {
    let cache = dirs::cache_dir().context("Could not locate a cache directory")?;
    init_logging_in(&cache.join(APP_NAME).join("logs"))
}

/// Start a fresh log file inside `dir`, creating the directory if needed
pub fn init_logging_in(dir: &Path) -> DevCircleResult<PathBuf> {
    create_dir_all(dir).with_context(|| format!("creating log directory {}", dir.display()))?;

    let started = Local::now().format("%Y%m%d-%H%M%S");
    let path = dir.join(format!("{}-{}.log", APP_NAME, started));

    if let Ok(mut current) = LOG_FILE.lock() {
        *current = Some(path.clone());
    }
    log_info(&format!("{} {} logging to {}", APP_NAME, env!("CARGO_PKG_VERSION"), path.display()));
    Ok(path)
}

pub fn log_error(message: &str) {
    write_record(Level::Error, message);
}

pub fn log_info(message: &str) {
    write_record(Level::Info, message);
}

pub fn log_debug(message: &str) {
    write_record(Level::Debug, message);
}

/// Record where and why the process panicked, then the backtrace if one was captured
pub fn log_panic_info(info: &std::panic::PanicInfo) {
    let payload = info
        .payload()
        .downcast_ref::<&str>()
        .map(|s| s.to_string())
        .or_else(|| info.payload().downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "non-string payload".to_string());

    let site = info
        .location()
        .map(|l| format!("{}:{}:{}", l.file(), l.line(), l.column()))
        .unwrap_or_else(|| "unknown location".to_string());

    log_error(&format!("panicked at {}: {}", site, payload));
    log_debug(&format!("backtrace:\n{}", std::backtrace::Backtrace::capture()));
}

fn write_record(level: Level, message: &str) {
    let Some(path) = get_log_file_path() else { return };
    let file = OpenOptions::new().create(true).append(true).open(&path);
    if let Ok(mut file) = file {
        let _ = writeln!(file, "{}", format_line(Local::now(), level, message));
    }
}

pub fn get_log_file_path() -> Option<PathBuf> {
    LOG_FILE.lock().ok().and_then(|current| current.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn record_layout() {
        let at = Local.with_ymd_and_hms(2024, 5, 1, 9, 30, 0).unwrap();
        assert_eq!(
            format_line(at, Level::Info, "Loaded team"),
            "2024-05-01T09:30:00.000 INFO  Loaded team"
        );
        assert_eq!(format_line(at, Level::Error, "x"), "2024-05-01T09:30:00.000 ERROR x");
    }

    #[test]
    fn init_creates_directory_and_writes() {
        let dir = tempfile::TempDir::new().unwrap();
        let logs = dir.path().join("nested").join("logs");
        let path = init_logging_in(&logs).unwrap();

        assert!(path.starts_with(&logs));
        log_info("hello from the test");
        // other tests may redirect the global file at any point
        if get_log_file_path().as_deref() == Some(path.as_path()) {
            let contents = std::fs::read_to_string(&path).unwrap();
            assert!(contents.contains("logging to"));
        }
    }
}
