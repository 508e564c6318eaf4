//! Change groups
//!
//! Records with identical text at one position, merged for display.

use super::ChangeKind;

/// Records sharing one diff line at a single position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeGroup {
    /// Removed or added
    pub kind: ChangeKind,
    /// Diff line including its marker
    pub line: String,
    /// Merged emphasis mask of all contributing records
    pub mask: Option<String>,
    /// Distinct contributing candidates, in discovery order
    pub candidates: Vec<String>,
}

impl ChangeGroup {
    /// Number of distinct contributing candidates
    pub fn count(&self) -> usize {
        self.candidates.len()
    }

    /// Names to list next to the ratio, or None when every candidate agrees
    pub fn partial_candidates(&self, total: usize) -> Option<&[String]> {
        (self.count() < total).then_some(self.candidates.as_slice())
    }
}
