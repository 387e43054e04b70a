//! Diagnostic logging to a file, keeping stdout clean for record output.

use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// Logging initialization failures.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// The log directory could not be created.
    #[error("Failed to create log directory {}: {source}", path.display())]
    DirectoryCreation {
        /// Directory that could not be created.
        path: PathBuf,
        /// Underlying IO failure.
        source: std::io::Error,
    },
    /// The log path has no file name component.
    #[error("Log path has no file name: {}", .0.display())]
    InvalidPath(PathBuf),
    /// A global subscriber was already installed.
    #[error("Tracing subscriber was already set")]
    SubscriberAlreadySet,
}

/// Install the global tracing subscriber writing to the given file.
///
/// The filter honors `RUST_LOG` and defaults to `info`. Output is plain
/// text without ANSI escapes since the destination is a file.
///
/// # Errors
///
/// Returns `LoggingError` when the log directory cannot be created, the
/// path lacks a file name, or a subscriber is already installed.
pub fn init(log_path: &Path) -> Result<(), LoggingError> {
    let file_name = log_path
        .file_name()
        .ok_or_else(|| LoggingError::InvalidPath(log_path.to_path_buf()))?;

    let directory = match log_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };

    std::fs::create_dir_all(&directory).map_err(|source| LoggingError::DirectoryCreation {
        path: directory.clone(),
        source,
    })?;

    let writer = tracing_appender::rolling::never(&directory, file_name);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .map_err(|_| LoggingError::SubscriberAlreadySet)
}
