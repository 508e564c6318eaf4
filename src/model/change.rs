//! Change data model
//!
//! Tagged comparator output and the per-position change records built from it.

use crate::constants::markers;
use crate::error::{MultiDiffError, Result};

/// Kind of a recorded change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChangeKind {
    /// Line present in the candidate but not in the base
    Removed,
    /// Line present in the base but not in the candidate
    Added,
}

impl ChangeKind {
    /// Render order at a single position: removals first
    pub const ALL: [ChangeKind; 2] = [ChangeKind::Removed, ChangeKind::Added];

    /// Leading marker character of a diff line of this kind
    pub fn marker(self) -> char {
        match self {
            Self::Removed => markers::MINUS,
            Self::Added => markers::PLUS,
        }
    }

    /// Resolve the kind of a diff line from its marker character
    ///
    /// Anything but `-` or `+` means the comparator integration is broken.
    pub fn from_marker(line: &str) -> Result<Self> {
        match line.chars().next() {
            Some(markers::MINUS) => Ok(Self::Removed),
            Some(markers::PLUS) => Ok(Self::Added),
            _ => {
                tracing::error!("diff line starts with unexpected character: {line:?}");
                Err(MultiDiffError::ProtocolViolation(line.to_string()))
            }
        }
    }
}

/// One line of line-comparator output
///
/// Content is stored without the two-character ndiff prefix; a guide keeps
/// its full text (`"? "` included) so it stays aligned with the diff line
/// it annotates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaggedLine {
    /// Line present on both sides
    Common(String),
    /// Line present in the candidate only
    Removed(String),
    /// Line present in the base only
    Added(String),
    /// Emphasis mask for the preceding changed line
    Guide(String),
}

impl TaggedLine {
    /// Parse one line of textual ndiff output
    ///
    /// Format: a marker character, a space, then the content:
    /// ```text
    ///   common
    /// - only in candidate
    /// + only in base
    /// ?   ^
    /// ```
    pub fn parse(line: &str) -> Result<Self> {
        let mut chars = line.chars();
        let marker = chars.next();
        let rest = chars.as_str();
        let content = rest.strip_prefix(' ').unwrap_or(rest).to_string();

        match marker {
            Some(markers::SPACE) => Ok(Self::Common(content)),
            Some(markers::GUIDE) => Ok(Self::Guide(line.to_string())),
            Some(_) => match ChangeKind::from_marker(line)? {
                ChangeKind::Removed => Ok(Self::Removed(content)),
                ChangeKind::Added => Ok(Self::Added(content)),
            },
            None => Err(MultiDiffError::ProtocolViolation(String::new())),
        }
    }

    /// Render back to ndiff text
    pub fn to_ndiff(&self) -> String {
        match self {
            Self::Common(text) => format!("  {text}"),
            Self::Removed(text) => format!("- {text}"),
            Self::Added(text) => format!("+ {text}"),
            Self::Guide(mask) => mask.clone(),
        }
    }
}

/// A single addition or removal recorded against a base position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeRecord {
    /// Removed or added
    pub kind: ChangeKind,
    /// Diff line including its marker, trailing whitespace trimmed (e.g. `"- baz"`)
    pub line: String,
    /// Display name of the originating candidate
    pub candidate: String,
    /// Emphasis mask aligned with `line`, if the comparator produced one
    pub mask: Option<String>,
}

impl ChangeRecord {
    /// Build a record from a change's content (without marker)
    pub fn new(
        kind: ChangeKind,
        content: &str,
        candidate: impl Into<String>,
        mask: Option<String>,
    ) -> Self {
        Self {
            kind,
            line: diff_line(kind, content),
            candidate: candidate.into(),
            mask: mask
                .map(|m| m.trim_end().to_string())
                .filter(|m| !m.is_empty()),
        }
    }
}

/// Format content as a diff line of the given kind
pub fn diff_line(kind: ChangeKind, content: &str) -> String {
    format!("{} {}", kind.marker(), content)
        .trim_end()
        .to_string()
}
