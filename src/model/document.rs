//! Documents being compared
//!
//! The base and every candidate share this representation.

use std::fs;
use std::path::Path;

use crate::error::{MultiDiffError, Result};

/// A named, immutable sequence of lines
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    /// Display name (file name for documents read from disk)
    pub name: String,
    /// Lines without line endings
    pub lines: Vec<String>,
}

impl Document {
    /// Create a document from in-memory lines
    pub fn new<I, S>(name: impl Into<String>, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    /// Create a document by splitting text on line endings (`\n` or `\r\n`)
    pub fn from_text(name: impl Into<String>, text: &str) -> Self {
        Self::new(name, text.lines())
    }

    /// Read a document from disk, named after its file name
    ///
    /// Bytes that are not valid UTF-8 are replaced rather than rejected.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|source| MultiDiffError::InputUnavailable {
            path: path.to_path_buf(),
            source,
        })?;
        let text = String::from_utf8_lossy(&bytes);
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Ok(Self::from_text(name, &text))
    }

    /// Number of lines
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Check if the document has no lines
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
