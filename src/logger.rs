use anyhow::{Context, Result};
use chrono::Utc;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use crate::config::LoggingConfig;
use crate::constants::{APP_NAME, LOG_FILE_NAME};

/// Shared logger that can be used across the application
///
/// Keeps an in-memory copy of every record so hosts can show recent render
/// and dispatch activity without reading the log file.
#[derive(Clone)]
pub struct Logger {
    logs: Arc<Mutex<Vec<String>>>,
}

impl Logger {
    pub fn new() -> Self {
        Self {
            logs: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Add a log entry
    pub fn log(&self, message: String) {
        let timestamp = Utc::now().format("%H:%M:%S%.3f").to_string();
        let formatted_message = format!("[{}] {}", timestamp, message);
        self.push(formatted_message);
    }

    fn push(&self, line: String) {
        if let Ok(mut logs) = self.logs.lock() {
            logs.push(line);
        }
    }

    /// Get all logs sorted by date (newest first)
    pub fn get_logs(&self) -> Vec<String> {
        if let Ok(logs) = self.logs.lock() {
            let mut sorted_logs = logs.clone();
            // Reverse to show newest logs first (descending order by timestamp)
            sorted_logs.reverse();
            sorted_logs
        } else {
            Vec::new()
        }
    }

    /// Buffered records as one block, newest first
    pub fn debug_report(&self) -> String {
        let logs = self.get_logs();
        if logs.is_empty() {
            "No debug logs available".to_string()
        } else {
            logs.join("\n")
        }
    }

    /// Clear all logs
    pub fn clear(&self) {
        if let Ok(mut logs) = self.logs.lock() {
            logs.clear();
        }
    }

    /// Install this logger as the global `log` backend
    ///
    /// Records always reach the in-memory buffer. `enabled` adds the log
    /// file and `stderr` mirrors records to the terminal.
    pub fn init(&self, config: &LoggingConfig) -> Result<()> {
        let buffer = self.clone();

        let mut dispatch = fern::Dispatch::new()
            .format(|out, message, record| {
                out.finish(format_args!(
                    "[{} {} {}] {}",
                    Utc::now().format("%H:%M:%S%.3f"),
                    record.level(),
                    record.target(),
                    message
                ))
            })
            .level(config.level_filter()?)
            .chain(fern::Output::call(move |record| buffer.push(record.args().to_string())));

        if config.enabled {
            let path = match &config.file {
                Some(path) => path.clone(),
                None => Self::get_log_file_path()?,
            };
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
            }
            let file = fern::log_file(&path).with_context(|| format!("Failed to open log file: {}", path.display()))?;
            dispatch = dispatch.chain(file);
        }

        if config.stderr {
            dispatch = dispatch.chain(std::io::stderr());
        }

        dispatch.apply().context("A global logger is already installed")?;
        Ok(())
    }

    /// Default log file location
    pub fn get_log_file_path() -> Result<PathBuf> {
        dirs::cache_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine cache directory"))
            .map(|dir| dir.join(APP_NAME).join(LOG_FILE_NAME))
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}
