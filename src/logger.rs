//! Append-only file logger
//!
//! Records are written as single lines:
//!
//! ```text
//! [2024-05-01 10:15:42] [info] Initiating e-payment {"params":{"amount":1000}}
//! ```
//!
//! Every record is also emitted as a `tracing` event, whether or not the file
//! logger is enabled, so applications with a subscriber see the same stream.

use crate::types::{Configuration, LogLevel, Params};
use serde_json::Value;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Leveled logger writing to the configured log file
#[derive(Debug)]
pub struct Logger {
    enabled: bool,
    path: PathBuf,
    level: LogLevel,
    write_lock: Mutex<()>,
}

impl Logger {
    /// Create a logger from the client configuration
    pub fn new(config: &Configuration) -> Self {
        Self {
            enabled: config.logging_enabled,
            path: config.log_path.clone(),
            level: config.log_level,
            write_lock: Mutex::new(()),
        }
    }

    /// Create a logger that never touches the filesystem
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            path: PathBuf::new(),
            level: LogLevel::Critical,
            write_lock: Mutex::new(()),
        }
    }

    /// Whether records are written to the log file
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Path of the log file
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn debug(&self, message: &str, context: &Value) {
        self.log(LogLevel::Debug, message, context);
    }

    pub fn info(&self, message: &str, context: &Value) {
        self.log(LogLevel::Info, message, context);
    }

    pub fn warning(&self, message: &str, context: &Value) {
        self.log(LogLevel::Warning, message, context);
    }

    pub fn error(&self, message: &str, context: &Value) {
        self.log(LogLevel::Error, message, context);
    }

    pub fn critical(&self, message: &str, context: &Value) {
        self.log(LogLevel::Critical, message, context);
    }

    /// Log a record at `level`
    ///
    /// `Value::Null` or an empty object means no context.
    pub fn log(&self, level: LogLevel, message: &str, context: &Value) {
        let context = render_context(context);
        emit_tracing(level, message, context.as_deref());

        if !self.enabled || level < self.level {
            return;
        }

        let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
        let line = format_line(&timestamp, level, message, context.as_deref());

        if let Err(e) = self.append(&line) {
            tracing::warn!("Failed to write Khalti log file {}: {}", self.path.display(), e);
        }
    }

    fn append(&self, line: &str) -> std::io::Result<()> {
        let _guard = self
            .write_lock
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        if let Some(dir) = self.path.parent() {
            if !dir.as_os_str().is_empty() {
                fs::create_dir_all(dir)?;
            }
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(line.as_bytes())
    }
}

/// Request fields that are never written to a log record
pub const REDACTED_FIELDS: &[&str] = &["transaction_pin"];

/// Copy of `params` with [`REDACTED_FIELDS`] masked, for use as log context
pub fn redact(params: &Params) -> Params {
    let mut params = params.clone();
    for field in REDACTED_FIELDS {
        if let Some(value) = params.get_mut(*field) {
            *value = Value::String("<redacted>".to_string());
        }
    }
    params
}

fn render_context(context: &Value) -> Option<String> {
    match context {
        Value::Null => None,
        Value::Object(map) if map.is_empty() => None,
        other => Some(other.to_string()),
    }
}

/// Format one log line, including the trailing newline
pub(crate) fn format_line(
    timestamp: &str,
    level: LogLevel,
    message: &str,
    context: Option<&str>,
) -> String {
    match context {
        Some(context) => format!("[{}] [{}] {} {}\n", timestamp, level, message, context),
        None => format!("[{}] [{}] {}\n", timestamp, level, message),
    }
}

fn emit_tracing(level: LogLevel, message: &str, context: Option<&str>) {
    let context = context.unwrap_or_default();
    match level {
        LogLevel::Debug => tracing::debug!(context, "{}", message),
        LogLevel::Info => tracing::info!(context, "{}", message),
        LogLevel::Warning => tracing::warn!(context, "{}", message),
        LogLevel::Error | LogLevel::Critical => tracing::error!(context, "{}", message),
    }
}
