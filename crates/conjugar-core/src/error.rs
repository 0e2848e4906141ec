//! Error types for the fallible edges of the core.
//!
//! Drawing cards, scoring answers, and recording outcomes never fail; these
//! errors cover storage I/O, name parsing, and rejected filter settings.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by a [`KeyValueStore`](crate::storage::KeyValueStore).
#[derive(Debug, Error)]
pub enum StorageError {
    /// Reading or writing the backing file failed.
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The backing file exists but is not a JSON string map.
    #[error("corrupt store file {path}: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Encoding the store contents failed.
    #[error("failed to encode store: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Errors raised when changing drill settings.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DrillError {
    /// The requested target is not one of the card-count presets.
    #[error("unsupported card count {requested}, expected one of {allowed:?}")]
    UnsupportedCardCount {
        requested: u32,
        allowed: &'static [u32],
    },
}

/// Errors raised when parsing tense or conjugation type names.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("unknown tense: {0}")]
    UnknownTense(String),

    #[error("unknown conjugation type: {0}")]
    UnknownConjugationType(String),
}
