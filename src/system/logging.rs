//! Logging system initialization
//!
//! Sets up tracing according to the `[logging]` section. The TUI owns the
//! terminal, so in that mode logs always go to a file.

use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling;

use crate::config::LoggingConfig;
use crate::errors::{AffilinkError, Result};

/// Fallback log file when the TUI runs without one configured
pub const DEFAULT_LOG_FILE: &str = "affilink.log";

/// Where log records may go
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    /// Configured file, or stderr when none is set
    FileOrStderr,
    /// Configured file, or [`DEFAULT_LOG_FILE`]
    FileOnly,
}

/// Resolve the file logs should be written to, if any
pub fn resolve_log_file(config: &LoggingConfig, target: LogTarget) -> Option<String> {
    let configured = config
        .file
        .as_deref()
        .map(str::trim)
        .filter(|f| !f.is_empty())
        .map(str::to_string);

    match target {
        LogTarget::FileOrStderr => configured,
        LogTarget::FileOnly => configured.or_else(|| Some(DEFAULT_LOG_FILE.to_string())),
    }
}

/// Initialize logging
///
/// # Returns
/// * `WorkerGuard` - Must be kept alive for the duration of the program
///   to ensure non-blocking log writes are flushed
///
/// Must be called once, after the configuration has been loaded.
pub fn init_logging(config: &LoggingConfig, target: LogTarget) -> Result<WorkerGuard> {
    let log_file = resolve_log_file(config, target);

    let writer: Box<dyn std::io::Write + Send + Sync> = match &log_file {
        Some(log_file) if config.enable_rotation => {
            let path = Path::new(log_file);
            let dir = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or(Path::new("."));
            let prefix = path
                .file_name()
                .and_then(|f| f.to_str())
                .unwrap_or(DEFAULT_LOG_FILE)
                .trim_end_matches(".log")
                .to_string();
            let appender = rolling::Builder::new()
                .rotation(rolling::Rotation::DAILY)
                .filename_prefix(prefix)
                .filename_suffix("log")
                .max_log_files(config.max_backups.max(1) as usize)
                .build(dir)
                .map_err(|e| {
                    AffilinkError::config(format!("Failed to create rolling log appender: {}", e))
                })?;
            Box::new(appender)
        }
        Some(log_file) => {
            // 不轮转，追加写入
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(log_file)
                .map_err(|e| {
                    AffilinkError::config(format!("Failed to open log file {}: {}", log_file, e))
                })?;
            Box::new(file)
        }
        None => Box::new(std::io::stderr()),
    };

    let (non_blocking_writer, guard) = tracing_appender::non_blocking(writer);
    let filter = tracing_subscriber::EnvFilter::try_new(&config.level)
        .map_err(|e| AffilinkError::config(format!("logging.level: {}", e)))?;

    let subscriber_builder = tracing_subscriber::fmt()
        .with_writer(non_blocking_writer)
        .with_env_filter(filter)
        .with_level(true)
        .with_ansi(log_file.is_none());

    let installed = if config.format.eq_ignore_ascii_case("json") {
        subscriber_builder.json().try_init()
    } else {
        subscriber_builder.try_init()
    };
    installed.map_err(|e| AffilinkError::config(format!("Failed to install logger: {}", e)))?;

    Ok(guard)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn logging(file: Option<&str>) -> LoggingConfig {
        LoggingConfig {
            file: file.map(str::to_string),
            ..LoggingConfig::default()
        }
    }

    #[test]
    fn test_tui_always_gets_a_file() {
        assert_eq!(
            resolve_log_file(&logging(None), LogTarget::FileOnly).as_deref(),
            Some(DEFAULT_LOG_FILE)
        );
        assert_eq!(
            resolve_log_file(&logging(Some("  ")), LogTarget::FileOnly).as_deref(),
            Some(DEFAULT_LOG_FILE)
        );
        assert_eq!(
            resolve_log_file(&logging(Some("logs/ui.log")), LogTarget::FileOnly).as_deref(),
            Some("logs/ui.log")
        );
    }

    #[test]
    fn test_cli_falls_back_to_stderr() {
        assert_eq!(resolve_log_file(&logging(None), LogTarget::FileOrStderr), None);
        assert_eq!(resolve_log_file(&logging(Some("")), LogTarget::FileOrStderr), None);
        assert_eq!(
            resolve_log_file(&logging(Some("cli.log")), LogTarget::FileOrStderr).as_deref(),
            Some("cli.log")
        );
    }
}
