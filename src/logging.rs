//! Logging initialization.
//!
//! Logs go to stderr by default, or to `<logging.directory>/registration-{datetime}.log`
//! when `logging.to_file` is set.

use anyhow::Result;
use std::path::PathBuf;
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;

/// Result of logging initialization
pub struct LoggingHandle {
    /// Guard that must be kept alive for the duration of the program.
    /// When dropped, ensures all buffered logs are flushed.
    pub _guard: Option<WorkerGuard>,

    /// Path to the log file (only set with file logging enabled)
    pub log_file_path: Option<PathBuf>,
}

/// Effective filter directive: `--debug` beats the configured level
fn level_directive(config: &Config, debug_override: bool) -> String {
    if debug_override {
        "debug".to_string()
    } else {
        config.logging.level.clone()
    }
}

/// File name for a log file started now
fn log_file_name() -> String {
    let timestamp = chrono::Utc::now().format("%Y%m%dT%H%M%SZ");
    format!("registration-{}.log", timestamp)
}

/// Create the log directory and a non-blocking writer for a new log file
fn open_log_file(config: &Config) -> Result<(NonBlocking, WorkerGuard, PathBuf)> {
    let logs_dir = config.logs_path();
    std::fs::create_dir_all(&logs_dir)?;

    let file_name = log_file_name();
    let path = logs_dir.join(&file_name);
    let (writer, guard) =
        tracing_appender::non_blocking(tracing_appender::rolling::never(&logs_dir, &file_name));
    Ok((writer, guard, path))
}

/// Initialize logging from configuration.
///
/// `RUST_LOG` takes precedence over both the configured level and
/// `debug_override`. The returned handle must be kept alive for the duration
/// of the program.
pub fn init_logging(config: &Config, debug_override: bool) -> Result<LoggingHandle> {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| level_directive(config, debug_override)),
    );

    let (file_layer, guard, log_file_path) = if config.logging.to_file {
        let (writer, guard, path) = open_log_file(config)?;
        let layer = fmt::layer().with_target(false).with_ansi(false).with_writer(writer);
        (Some(layer), Some(guard), Some(path))
    } else {
        (None, None, None)
    };
    let stderr_layer = file_layer
        .is_none()
        .then(|| fmt::layer().with_target(false).with_writer(std::io::stderr));

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .with(stderr_layer)
        .init();

    Ok(LoggingHandle {
        _guard: guard,
        log_file_path,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn test_config(temp_dir: &TempDir) -> Config {
        let mut config = Config::default();
        config.logging.directory = temp_dir.path().to_string_lossy().to_string();
        config
    }

    #[test]
    fn test_logs_path_uses_configured_directory() {
        let temp_dir = TempDir::new().unwrap();
        let config = test_config(&temp_dir);
        assert_eq!(config.logs_path(), temp_dir.path());
    }

    #[test]
    fn test_log_file_name_format() {
        let name = log_file_name();
        assert!(name.starts_with("registration-"));
        assert!(name.ends_with("Z.log"));
    }

    #[test]
    fn test_debug_override_wins_over_config() {
        let temp_dir = TempDir::new().unwrap();
        let mut config = test_config(&temp_dir);
        config.logging.level = "warn".to_string();

        assert_eq!(level_directive(&config, false), "warn");
        assert_eq!(level_directive(&config, true), "debug");
    }

    #[test]
    fn test_open_log_file_creates_directory() {
        let temp_dir = TempDir::new().unwrap();
        let mut config = test_config(&temp_dir);
        config.logging.directory = temp_dir.path().join("nested").to_string_lossy().to_string();

        let (_writer, _guard, path) = open_log_file(&config).unwrap();
        assert!(temp_dir.path().join("nested").is_dir());
        assert_eq!(path.parent(), Some(temp_dir.path().join("nested").as_path()));
    }
}
