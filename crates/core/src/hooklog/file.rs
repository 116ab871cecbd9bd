use chrono::{DateTime, Local};
use serde::Serialize;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use super::{HookEvent, HookLog};
use crate::config::{LogConfig, LogFormat};

/// Default hook log file name, placed beside the executable.
pub const DEFAULT_LOG_FILE: &str = "plexdrop.log";

/// Timestamp layout of text log lines.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Resolves the default log location: next to the running executable, or the
/// working directory if the executable path is unknown.
pub fn default_log_path() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join(DEFAULT_LOG_FILE)))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE))
}

#[derive(Serialize)]
struct JsonLine<'a> {
    timestamp: DateTime<Local>,
    message: String,
    event: &'a HookEvent,
}

/// Append-only hook log file.
///
/// The file is opened, appended to and closed for every event.
#[derive(Debug, Clone)]
pub struct FileHookLog {
    path: PathBuf,
    format: LogFormat,
}

impl FileHookLog {
    pub fn new(path: impl Into<PathBuf>, format: LogFormat) -> Self {
        Self {
            path: path.into(),
            format,
        }
    }

    /// Builds the log from the `[log]` section, falling back to
    /// [`default_log_path`].
    pub fn from_config(config: &LogConfig) -> Self {
        let path = config.path.clone().unwrap_or_else(default_log_path);
        Self::new(path, config.format)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Renders one log line, newline included.
    pub fn render(&self, event: &HookEvent, now: DateTime<Local>) -> String {
        match self.format {
            LogFormat::Text => format!("[{}] {}\n", now.format(TIMESTAMP_FORMAT), event),
            LogFormat::Json => {
                let line = JsonLine {
                    timestamp: now,
                    message: event.to_string(),
                    event,
                };
                match serde_json::to_string(&line) {
                    Ok(json) => format!("{}\n", json),
                    Err(e) => {
                        tracing::warn!("Failed to serialize hook event: {}", e);
                        format!("[{}] {}\n", now.format(TIMESTAMP_FORMAT), event)
                    }
                }
            }
        }
    }

    fn append(&self, line: &str) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(line.as_bytes())
    }
}

impl HookLog for FileHookLog {
    fn record(&self, event: &HookEvent) {
        let line = self.render(event, Local::now());
        if let Err(e) = self.append(&line) {
            tracing::warn!(
                "Failed to write hook log {}: {}",
                self.path.display(),
                e
            );
        }
    }
}
