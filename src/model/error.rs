//! Error types for the matchrec pipeline.
//!
//! This module defines a small error taxonomy using `thiserror`. Errors compose
//! via `?` and `From` conversions into the top-level [`AppError`].
//!
//! # Recovery strategy
//!
//! Only genuinely fatal conditions are errors here:
//!
//! - [`InputError`] - the log file cannot be opened or read at all.
//! - [`MatchError`] - a segmented game violates the structural guarantees the
//!   extractor relies on (missing on-play marker, missing turn markers, an
//!   unrecognized hand-size word). These indicate corrupted input and abort
//!   processing of that file rather than fabricating a record.
//!
//! Everything else is recovered without an error: undecodable bytes are
//! replaced during loading, matches without exactly two participants or with
//! fewer than two games yield an absent record (`Ok(None)` from the pipeline),
//! and ambiguous winners are settled by the injected resolver.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level application error encompassing all fatal failure modes.
///
/// Domain-specific error types convert to `AppError` via `From`, enabling
/// clean propagation with the `?` operator. Note that "no record for this
/// log" is *not* an error: incomplete or unresolvable matches are reported
/// as an absent value, never as an `AppError`.
#[derive(Debug, Error)]
pub enum AppError {
    /// Failed to read the match log from disk.
    ///
    /// Fatal for this invocation: without the log bytes there is nothing
    /// to parse.
    #[error("Failed to read match log: {0}")]
    Input(#[from] InputError),

    /// A segmented game slice was structurally malformed.
    ///
    /// Segmentation guarantees every game slice starts at a
    /// "chooses to play first" marker and every completed game carries at
    /// least one turn marker. A slice violating those guarantees means the
    /// log is corrupted; the whole file is rejected so that no record is
    /// silently fabricated.
    #[error("Malformed game: {0}")]
    Match(#[from] MatchError),
}

/// Errors encountered when reading the match log file.
///
/// Decoding never appears here: the loader decodes totally, substituting a
/// placeholder character for invalid byte sequences.
#[derive(Debug, Error)]
pub enum InputError {
    /// The log file does not exist at the given path.
    #[error("File not found: {}", path.display())]
    FileNotFound {
        /// The filesystem path that was not found.
        path: PathBuf,
    },

    /// Generic I/O error reading the log file or its metadata.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Structural defects inside one segmented game slice.
///
/// Each variant carries the 1-based game number for error reporting.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MatchError {
    /// The first line of the slice has no "chooses to play first" marker
    /// naming a known participant.
    #[error("game {game_n} has no usable 'chooses to play first' marker")]
    MissingOnPlay {
        /// 1-based number of the defective game within the match.
        game_n: u32,
    },

    /// The slice contains no `Turn <n>` marker at all.
    #[error("game {game_n} contains no 'Turn <n>' marker")]
    MissingTurnMarker {
        /// 1-based number of the defective game within the match.
        game_n: u32,
    },

    /// A starting-hand line used a number word outside one..seven.
    #[error("game {game_n} has unrecognized hand size word '{word}'")]
    UnknownHandSize {
        /// 1-based number of the defective game within the match.
        game_n: u32,
        /// The number word that failed the lookup.
        word: String,
    },
}
