//! Data models for multidiff
//!
//! Comparator-independent structures: documents, tagged comparator output,
//! change records and the groups derived from them.

mod change;
mod document;
mod group;

pub use change::{ChangeKind, ChangeRecord, TaggedLine, diff_line};
pub use document::Document;
pub use group::ChangeGroup;
