//! Line comparison layer
//!
//! Classifies a candidate against the base into common, removed, added and
//! guide lines. The engine only depends on the [`LineComparator`] trait;
//! [`NdiffComparator`] is the default implementation.

mod ndiff;

pub use ndiff::NdiffComparator;

use crate::error::Result;
use crate::model::TaggedLine;

/// Produces tagged lines for one candidate compared against the base
///
/// `Removed` lines exist only in the candidate, `Added` lines only in the
/// base. A `Guide` must directly follow the changed line it annotates.
pub trait LineComparator {
    fn compare(&self, candidate: &[String], base: &[String]) -> Vec<TaggedLine>;
}

/// Parse precomputed ndiff text (one tagged line per line)
pub fn parse_ndiff(text: &str) -> Result<Vec<TaggedLine>> {
    text.lines().map(TaggedLine::parse).collect()
}
