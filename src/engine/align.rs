//! Position aligner
//!
//! Re-expresses each removed/added line of one candidate's comparator
//! output as a position in the base document.
//!
//! The scan keeps a cursor counting the base lines consumed so far. Common
//! and added lines are base lines and advance it; removed lines exist only
//! in the candidate and guide lines only annotate, so neither does. A change
//! is recorded at the cursor value it is seen at, which makes removals land
//! in front of the base line that follows them.

use crate::model::{ChangeKind, TaggedLine};

/// One change resolved to a base position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlignedChange {
    /// Base line number (0-based; equal to the base length for trailing additions)
    pub position: usize,
    pub kind: ChangeKind,
    /// Line content without marker
    pub content: String,
    /// Guide attached to this line
    pub mask: Option<String>,
}

#[derive(Debug, Default)]
struct Scan {
    cursor: usize,
    changes: Vec<AlignedChange>,
}

impl Scan {
    fn step(mut self, line: &TaggedLine) -> Self {
        match line {
            TaggedLine::Common(_) => self.cursor += 1,
            TaggedLine::Added(content) => {
                self.push(ChangeKind::Added, content);
                self.cursor += 1;
            }
            TaggedLine::Removed(content) => self.push(ChangeKind::Removed, content),
            TaggedLine::Guide(mask) => match self.changes.last_mut() {
                Some(last) => last.mask = Some(mask.clone()),
                None => tracing::warn!("discarding guide line with no preceding change: {mask:?}"),
            },
        }
        self
    }

    fn push(&mut self, kind: ChangeKind, content: &str) {
        self.changes.push(AlignedChange {
            position: self.cursor,
            kind,
            content: content.to_string(),
            mask: None,
        });
    }
}

/// Resolve every change in a comparator stream to its base position
///
/// The cursor never moves backwards, so the result is ordered by position
/// and, within one position, by stream order.
pub fn align(stream: &[TaggedLine]) -> Vec<AlignedChange> {
    stream.iter().fold(Scan::default(), Scan::step).changes
}
