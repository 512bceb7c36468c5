//! Logging setup
//!
//! Stdout always; a plain-text file alongside it when one is configured.
//! A log file that cannot be opened is reported and skipped.

use std::path::{Path, PathBuf};
use tracing::warn;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{InitError, RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::DEFAULT_LOG_FILE;

const DEFAULT_FILTER: &str = "review_bot=debug,review_client=debug,info";

/// Installs the global subscriber
///
/// The returned guard flushes the file writer on drop and must be held for
/// the lifetime of the process.
pub fn init(log_file: Option<&Path>) -> Option<WorkerGuard> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_FILTER.into());

    let (file_layer, guard, file_error) = match log_file.map(open_appender) {
        Some(Ok(appender)) => {
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer().with_ansi(false).with_writer(writer);
            (Some(layer), Some(guard), None)
        }
        Some(Err(e)) => (None, None, Some(e)),
        None => (None, None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer())
        .with(file_layer)
        .init();

    if let Some(e) = file_error {
        warn!("Log file unavailable, logging to stdout only: {}", e);
    }

    guard
}

fn open_appender(path: &Path) -> Result<RollingFileAppender, InitError> {
    let (dir, file_name) = split_log_path(path);
    RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name)
        .build(dir)
}

/// Splits a log path into the directory and file name the appender wants
fn split_log_path(path: &Path) -> (PathBuf, String) {
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."));
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| DEFAULT_LOG_FILE.to_string());
    (dir, file_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_bare_file_name() {
        let (dir, name) = split_log_path(Path::new("review-bot.log"));
        assert_eq!(dir, PathBuf::from("."));
        assert_eq!(name, "review-bot.log");
    }

    #[test]
    fn test_split_nested_path() {
        let (dir, name) = split_log_path(Path::new("/var/log/review/bot.log"));
        assert_eq!(dir, PathBuf::from("/var/log/review"));
        assert_eq!(name, "bot.log");
    }

    #[test]
    fn test_split_directory_only() {
        let (dir, name) = split_log_path(Path::new("/"));
        assert_eq!(dir, PathBuf::from("."));
        assert_eq!(name, DEFAULT_LOG_FILE);
    }
}
