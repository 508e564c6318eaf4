//! Group merger
//!
//! Collapses the records at one position into display groups: identical
//! diff lines are merged, their masks combined, and only the most widely
//! shared variants are kept.

use std::collections::HashMap;

use super::index::ChangeIndex;
use crate::constants::{MAX_GROUPS, markers};
use crate::model::{ChangeGroup, ChangeKind};

/// Combine two emphasis masks
///
/// The longer mask is the base (`later` on ties). Base characters that are
/// plain emphasis or blank are replaced by the other mask's character
/// wherever the two differ, so kind markers always survive.
pub fn merge_masks(earlier: &str, later: &str) -> String {
    let earlier: Vec<char> = earlier.chars().collect();
    let later: Vec<char> = later.chars().collect();
    let (mut base, other) = if earlier.len() > later.len() {
        (earlier, later)
    } else {
        (later, earlier)
    };

    for (slot, &o) in base.iter_mut().zip(other.iter()) {
        if matches!(*slot, markers::HAT | markers::SPACE) && *slot != o {
            *slot = o;
        }
    }

    base.into_iter().collect()
}

/// Accumulator for one distinct diff line
#[derive(Debug)]
struct Partition {
    line: String,
    mask: Option<String>,
    candidates: Vec<String>,
}

/// Display groups for `kind` at `position`, most shared first, at most
/// [`MAX_GROUPS`]
///
/// `total` is the number of candidates in the run.
pub fn groups_for(
    index: &ChangeIndex,
    position: usize,
    kind: ChangeKind,
    total: usize,
) -> Vec<ChangeGroup> {
    let records = index.lookup(position).get(kind);

    let mut slots: HashMap<&str, usize> = HashMap::new();
    let mut partitions: Vec<Partition> = Vec::new();
    for record in records {
        let slot = *slots.entry(record.line.as_str()).or_insert_with(|| {
            partitions.push(Partition {
                line: record.line.clone(),
                mask: None,
                candidates: Vec::new(),
            });
            partitions.len() - 1
        });
        let partition = &mut partitions[slot];

        if let Some(mask) = &record.mask {
            partition.mask = Some(match partition.mask.take() {
                Some(acc) => merge_masks(&acc, mask),
                None => mask.clone(),
            });
        }
        if !partition.candidates.contains(&record.candidate) {
            partition.candidates.push(record.candidate.clone());
        }
    }

    partitions.sort_by_key(|p| p.candidates.len());
    partitions.reverse();
    partitions.truncate(MAX_GROUPS);

    tracing::trace!(
        position,
        ?kind,
        total,
        shown = partitions.len(),
        "selected change groups"
    );

    partitions
        .into_iter()
        .map(|p| ChangeGroup {
            kind,
            line: p.line,
            mask: p.mask,
            candidates: p.candidates,
        })
        .collect()
}
