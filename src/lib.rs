//! multidiff - compare several files against one base file
//!
//! Every candidate is diffed against the base; changes are collected per
//! base line, identical changes from different candidates are merged, and
//! the result is rendered as one report.
//!
//! This library provides:
//! - [`compare`]: Line comparison (ndiff-style, with intraline guides)
//! - [`engine`]: Position alignment, change index and group merging
//! - [`model`]: Domain models
//! - [`report`]: Text rendering with optional ANSI highlighting
//! - [`constants`]: Markers, widths and limits
//! - [`error`]: Error types

pub mod compare;
pub mod constants;
pub mod engine;
pub mod error;
pub mod model;
pub mod report;

pub use engine::{MultiDiff, multidiff};
pub use error::{MultiDiffError, Result};
pub use report::RenderConfig;
