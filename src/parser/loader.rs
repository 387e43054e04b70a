//! Log loading: total decoding plus the file facts the record needs.

use crate::model::error::InputError;
use chrono::{DateTime, Local};
use std::fs;
use std::path::Path;

/// A decoded match log together with its file modification time.
#[derive(Debug, Clone)]
pub struct LoadedLog {
    /// Full decoded text. Byte sequences invalid under UTF-8 have already
    /// been replaced with U+FFFD, which the line filter later strips.
    pub text: String,
    /// Modification time of the log file, used verbatim as the match date.
    pub modified: DateTime<Local>,
}

/// Read and decode a match log.
///
/// Decoding is total: it never fails on malformed bytes. The only failure
/// modes are the file being absent or unreadable.
///
/// # Errors
///
/// Returns `InputError::FileNotFound` if the path does not exist, and
/// `InputError::Io` for read or metadata failures.
pub fn load_log(path: impl AsRef<Path>) -> Result<LoadedLog, InputError> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(InputError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let bytes = fs::read(path)?;
    let modified: DateTime<Local> = fs::metadata(path)?.modified()?.into();
    let text = String::from_utf8_lossy(&bytes).into_owned();

    Ok(LoadedLog { text, modified })
}
