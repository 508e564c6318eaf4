//! Error types
//!
//! Empty documents, zero candidates and "no differences" are not errors;
//! they render as a regular report.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while building a multi-diff
#[derive(Error, Debug)]
pub enum MultiDiffError {
    /// A document could not be read
    #[error("Failed to read {}: {source}", .path.display())]
    InputUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Comparator output carried a line marker other than common/removed/added/guide
    #[error("Diff line starts with unexpected character: {0:?}")]
    ProtocolViolation(String),
}

/// Result alias used throughout the crate
pub type Result<T, E = MultiDiffError> = std::result::Result<T, E>;
