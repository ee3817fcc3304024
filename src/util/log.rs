// src/util/log.rs

//! Logger Utility - Provides file-based logging for TUI applications
use std::fs::{create_dir_all, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, OnceLock};

use chrono::Local;

use crate::config::LoggingConfig;

/// Set once from `logging.debug` by [`init`]
pub static DEBUG_ENABLED: OnceLock<bool> = OnceLock::new();

/// Global logger instance. Until [`init`] runs, the log macros are no-ops.
pub static LOGGER: OnceLock<Logger> = OnceLock::new();

/// Log severity levels
#[derive(Debug, Clone, Copy)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
}

impl LogLevel {
    /// Tag written between brackets in each entry
    fn as_str(&self) -> &str {
        match self {
            LogLevel::Error => "ERROR",
            LogLevel::Warn => "WARN",
            LogLevel::Info => "INFO",
            LogLevel::Debug => "DEBUG",
        }
    }
}

/// Logger that writes to separate files by severity
#[derive(Debug)]
pub struct Logger {
    log_dir: PathBuf,
    error_file: Mutex<File>,
    warn_file: Mutex<File>,
    info_file: Mutex<File>,
    debug_file: Mutex<File>,
}

impl Logger {
    /// Create a new logger with the specified directory
    pub fn new(log_dir: impl AsRef<Path>) -> std::io::Result<Self> {
        let log_dir = log_dir.as_ref().to_path_buf();

        // Create the log directory if it doesn't exist
        create_dir_all(&log_dir)?;

        // Start fresh each run
        let error_file = File::create(log_dir.join("error.log"))?;
        let warn_file = File::create(log_dir.join("warn.log"))?;
        let info_file = File::create(log_dir.join("info.log"))?;
        let debug_file = File::create(log_dir.join("debug.log"))?;

        Ok(Self {
            log_dir,
            error_file: Mutex::new(error_file),
            warn_file: Mutex::new(warn_file),
            info_file: Mutex::new(info_file),
            debug_file: Mutex::new(debug_file),
        })
    }

    /// Directory holding the per-level files, also used for `trace.log`
    pub fn log_dir(&self) -> &Path {
        &self.log_dir
    }

    /// Write a timestamped entry to the file for `level`
    fn write_log(&self, level: LogLevel, message: &str) {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S%.3f");
        let formatted = format!("[{}] [{}] {}\n", timestamp, level.as_str(), message);

        let file = match level {
            LogLevel::Error => &self.error_file,
            LogLevel::Warn => &self.warn_file,
            LogLevel::Info => &self.info_file,
            LogLevel::Debug => &self.debug_file,
        };

        if let Ok(mut file) = file.lock() {
            let _ = file.write_all(formatted.as_bytes());
            let _ = file.flush();
        }
    }

    /// Log an error message
    pub fn error(&self, message: &str) {
        self.write_log(LogLevel::Error, message);
    }

    /// Log a warning message
    pub fn warn(&self, message: &str) {
        self.write_log(LogLevel::Warn, message);
    }

    /// Log an info message
    pub fn info(&self, message: &str) {
        self.write_log(LogLevel::Info, message);
    }

    /// Log a debug message; the `log_debug!` macro gates it on `logging.debug`
    pub fn debug(&self, message: &str) {
        self.write_log(LogLevel::Debug, message);
    }
}

/// Install the global file logger and a `tracing` subscriber writing to
/// `trace.log` in the same directory. Nothing may go to stdout while the
/// terminal UI owns it.
pub fn init(config: &LoggingConfig) -> std::io::Result<()> {
    DEBUG_ENABLED.get_or_init(|| config.debug);

    let logger = Logger::new(&config.dir)?;
    let trace_file = File::create(logger.log_dir().join("trace.log"))?;
    let _ = LOGGER.set(logger);

    let level = if config.debug {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    // Ignore the error if a subscriber is already installed.
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_ansi(false)
        .with_writer(Mutex::new(trace_file))
        .try_init();

    Ok(())
}

/// Convenience macro for error logging with formatting
#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {{
        if let Some(logger) = $crate::util::log::LOGGER.get() {
            logger.error(&format!($($arg)*));
        }
    }};
}

/// Convenience macro for warning logging with formatting
#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {{
        if let Some(logger) = $crate::util::log::LOGGER.get() {
            logger.warn(&format!($($arg)*));
        }
    }};
}

/// Convenience macro for info logging with formatting
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {{
        if let Some(logger) = $crate::util::log::LOGGER.get() {
            logger.info(&format!($($arg)*));
        }
    }};
}

/// Convenience macro for debug logging with formatting
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {{
        if *$crate::util::log::DEBUG_ENABLED.get().unwrap_or(&false) {
            if let Some(logger) = $crate::util::log::LOGGER.get() {
                logger.debug(&format!($($arg)*));
            }
        }
    }};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logger_creation() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let logger = Logger::new(temp_dir.path()).expect("Failed to create logger");

        logger.error("Test error");
        logger.warn("Test warning");
        logger.info("Test info");
        logger.debug("Test debug");

        assert!(temp_dir.path().join("error.log").exists());
        assert!(temp_dir.path().join("warn.log").exists());
        assert!(temp_dir.path().join("info.log").exists());
        assert!(temp_dir.path().join("debug.log").exists());

        let info = std::fs::read_to_string(temp_dir.path().join("info.log")).unwrap();
        assert!(info.contains("[INFO] Test info"));
    }
}
