//! Alignment and merge engine
//!
//! Every candidate is compared against the base on its own; its changes are
//! aligned to base positions and appended to a shared [`ChangeIndex`]. Once
//! all candidates are in, the index is only read (by [`groups_for`] and the
//! renderer).

mod align;
mod index;
mod merge;

pub use align::{AlignedChange, align};
pub use index::{ChangeIndex, ChangeSet};
pub use merge::{groups_for, merge_masks};

use std::path::Path;

use crate::compare::{LineComparator, NdiffComparator, parse_ndiff};
use crate::error::Result;
use crate::model::{ChangeGroup, ChangeKind, Document, TaggedLine};
use crate::report::{self, RenderConfig};

/// A base document, its candidates and their accumulated changes
#[derive(Debug, Clone)]
pub struct MultiDiff {
    base: Document,
    candidates: Vec<Document>,
    index: ChangeIndex,
}

impl MultiDiff {
    /// Create an empty multi-diff for `base`
    pub fn new(base: Document) -> Self {
        Self {
            base,
            candidates: Vec::new(),
            index: ChangeIndex::new(),
        }
    }

    /// Compare every candidate against the base, in submission order
    pub fn compare<C: LineComparator>(
        base: Document,
        candidates: impl IntoIterator<Item = Document>,
        comparator: &C,
    ) -> Self {
        let mut diff = Self::new(base);
        for candidate in candidates {
            diff.add_candidate_with(comparator, candidate);
        }
        diff
    }

    /// Compare one candidate against the base and record its changes
    pub fn add_candidate_with<C: LineComparator>(&mut self, comparator: &C, candidate: Document) {
        let stream = comparator.compare(&candidate.lines, &self.base.lines);
        self.add_stream(candidate, &stream);
    }

    /// Record a candidate from precomputed ndiff text
    ///
    /// The candidate's own lines are unknown here, so it is registered with
    /// an empty body; only its name counts towards the ratios.
    pub fn add_ndiff(&mut self, name: impl Into<String>, ndiff: &str) -> Result<()> {
        let stream = parse_ndiff(ndiff)?;
        self.add_stream(Document::new(name, Vec::<String>::new()), &stream);
        Ok(())
    }

    fn add_stream(&mut self, candidate: Document, stream: &[TaggedLine]) {
        let changes = align(stream);
        tracing::debug!(
            candidate = %candidate.name,
            changes = changes.len(),
            "aligned candidate against {}",
            self.base.name
        );
        self.index.extend(&candidate.name, changes);
        self.candidates.push(candidate);
    }

    pub fn candidates(&self) -> &[Document] {
        &self.candidates
    }

    pub fn index(&self) -> &ChangeIndex {
        &self.index
    }

    /// Display groups for one position and kind
    pub fn groups_for(&self, position: usize, kind: ChangeKind) -> Vec<ChangeGroup> {
        groups_for(&self.index, position, kind, self.candidates.len())
    }

    /// Render the report as individual display lines
    pub fn render_lines(&self, config: &RenderConfig) -> Vec<String> {
        report::render_lines(&self.base, &self.candidates, &self.index, config)
    }

    /// Render the full report
    pub fn render(&self, config: &RenderConfig) -> String {
        self.render_lines(config).join("\n")
    }
}

/// Read `base` and `files`, compare each file against the base and render
/// the report
///
/// Any unreadable file aborts the run with
/// [`MultiDiffError::InputUnavailable`](crate::error::MultiDiffError::InputUnavailable).
pub fn multidiff<P: AsRef<Path>>(base: P, files: &[P], config: &RenderConfig) -> Result<String> {
    let base = Document::from_path(base)?;
    let candidates = files
        .iter()
        .map(Document::from_path)
        .collect::<Result<Vec<_>>>()?;
    let diff = MultiDiff::compare(base, candidates, &NdiffComparator::new());
    Ok(diff.render(config))
}
