//! Logging infrastructure for ironlog
//!
//! Logs are written to `~/.local/state/ironlog/ironlog.YYYY-MM-DD.log` following
//! XDG standards, one file per UTC day.

use crate::config::{Config, LoggingConfig};
use crate::error::Error;
use chrono::{NaiveDate, Utc};
use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

/// Initialize the logging system
///
/// Sets up tracing with:
/// - File output to XDG state directory
/// - Daily rotation, keeping at most `max_files` logs
/// - Configurable log level via config or RUST_LOG env var
pub fn init(config: &LoggingConfig) -> crate::error::Result<LoggingGuard> {
    let log_dir = Config::state_dir();

    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(LOG_PREFIX)
        .filename_suffix(LOG_SUFFIX)
        .max_log_files(config.max_files.max(1))
        .build(&log_dir)
        .map_err(|e| Error::Config(format!("failed to create log appender: {}", e)))?;

    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    let file_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(true)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .init();

    tracing::info!(
        log_dir = %log_dir.display(),
        level = %config.level,
        "Logging initialized"
    );

    Ok(LoggingGuard { _guard: guard })
}

/// Initialize logging for tests (logs to stdout)
pub fn init_test() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .with_span_events(FmtSpan::CLOSE)
        .try_init();
}

/// Guard that keeps the logging system alive
///
/// When dropped, flushes any pending log writes.
pub struct LoggingGuard {
    _guard: tracing_appender::non_blocking::WorkerGuard,
}

const LOG_PREFIX: &str = "ironlog";
const LOG_SUFFIX: &str = "log";

/// Returns today's log file path
///
/// The appender names files by UTC date, so around midnight this can differ
/// from the local calendar day.
pub fn log_file_path() -> PathBuf {
    log_file_path_on(Utc::now().date_naive())
}

/// Log file the appender writes on `day` (UTC).
pub fn log_file_path_on(day: NaiveDate) -> PathBuf {
    Config::state_dir().join(format!(
        "{}.{}.{}",
        LOG_PREFIX,
        day.format("%Y-%m-%d"),
        LOG_SUFFIX
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_file_path_is_dated() {
        let day = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        let path = log_file_path_on(day);
        assert!(path.ends_with("ironlog.2024-03-09.log"));
        assert_eq!(path.parent(), Some(Config::state_dir().as_path()));

        let today = log_file_path();
        let name = today.file_name().unwrap().to_string_lossy().into_owned();
        assert_eq!(name, format!("ironlog.{}.log", Utc::now().format("%Y-%m-%d")));
    }
}
