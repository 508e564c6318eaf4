//! Change index
//!
//! Base position → removed/added records, accumulated across candidates.

use std::collections::BTreeMap;

use super::align::AlignedChange;
use crate::model::{ChangeKind, ChangeRecord};

/// Records at one base position, split by kind
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangeSet {
    pub removed: Vec<ChangeRecord>,
    pub added: Vec<ChangeRecord>,
}

impl ChangeSet {
    /// Records of the given kind, in insertion order
    pub fn get(&self, kind: ChangeKind) -> &[ChangeRecord] {
        match kind {
            ChangeKind::Removed => &self.removed,
            ChangeKind::Added => &self.added,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.removed.is_empty() && self.added.is_empty()
    }

    fn get_mut(&mut self, kind: ChangeKind) -> &mut Vec<ChangeRecord> {
        match kind {
            ChangeKind::Removed => &mut self.removed,
            ChangeKind::Added => &mut self.added,
        }
    }
}

static EMPTY: ChangeSet = ChangeSet {
    removed: Vec::new(),
    added: Vec::new(),
};

/// Append-only mapping from base position to change records
#[derive(Debug, Clone, Default)]
pub struct ChangeIndex {
    entries: BTreeMap<usize, ChangeSet>,
}

impl ChangeIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record at `position`
    pub fn record(
        &mut self,
        position: usize,
        kind: ChangeKind,
        content: &str,
        candidate: &str,
        mask: Option<String>,
    ) {
        self.entries
            .entry(position)
            .or_default()
            .get_mut(kind)
            .push(ChangeRecord::new(kind, content, candidate, mask));
    }

    /// Append all aligned changes of one candidate, keeping their order
    pub fn extend(&mut self, candidate: &str, changes: Vec<AlignedChange>) {
        for change in changes {
            self.record(
                change.position,
                change.kind,
                &change.content,
                candidate,
                change.mask,
            );
        }
    }

    /// Records at `position`; empty when nothing was recorded there
    pub fn lookup(&self, position: usize) -> &ChangeSet {
        self.entries.get(&position).unwrap_or(&EMPTY)
    }

    /// Check if any record exists at `position`
    pub fn has_changes(&self, position: usize) -> bool {
        self.entries.get(&position).is_some_and(|set| !set.is_empty())
    }

    /// Positions holding at least one record, ascending
    pub fn positions(&self) -> impl Iterator<Item = usize> + '_ {
        self.entries.keys().copied()
    }

    /// Total number of records
    pub fn len(&self) -> usize {
        self.entries
            .values()
            .map(|set| set.removed.len() + set.added.len())
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
