//! ndiff-style comparator on top of `similar`
//!
//! Line opcodes come from `similar`. Inside each changed run, the most
//! similar pair of lines is reported as a removal/addition pair with guide
//! lines marking the differing characters; the rest of the run is handled
//! recursively on both sides of that pair.

use std::ops::Range;

use similar::{Algorithm, DiffOp, DiffTag};

use super::LineComparator;
use crate::constants::{DEFAULT_CUTOFF, markers};
use crate::model::TaggedLine;

/// Default [`LineComparator`]
#[derive(Debug, Clone, Copy)]
pub struct NdiffComparator {
    algorithm: Algorithm,
    cutoff: f32,
}

impl Default for NdiffComparator {
    fn default() -> Self {
        Self::new()
    }
}

impl NdiffComparator {
    /// Create a comparator using Myers and the default similarity cutoff
    pub fn new() -> Self {
        Self {
            algorithm: Algorithm::Myers,
            cutoff: DEFAULT_CUTOFF,
        }
    }

    /// Use a different line-level diff algorithm
    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Minimum character similarity (0.0..=1.0) for pairing two lines
    pub fn with_cutoff(mut self, cutoff: f32) -> Self {
        self.cutoff = cutoff;
        self
    }

    /// Resolve one changed run (`a` from the candidate, `b` from the base)
    fn fancy_replace(&self, a: &[String], b: &[String], out: &mut Vec<TaggedLine>) {
        let mut best: Option<(usize, usize, f32)> = None;
        let mut identical: Option<(usize, usize)> = None;

        for (j, bj) in b.iter().enumerate() {
            for (i, ai) in a.iter().enumerate() {
                if ai == bj {
                    identical.get_or_insert((i, j));
                    continue;
                }
                let ratio = char_ratio(ai, bj);
                if ratio >= self.cutoff && best.is_none_or(|(_, _, r)| ratio > r) {
                    best = Some((i, j, ratio));
                }
            }
        }

        let (i, j, same) = match (best, identical) {
            (Some((i, j, _)), _) => (i, j, false),
            (None, Some((i, j))) => (i, j, true),
            (None, None) => {
                plain_replace(a, b, out);
                return;
            }
        };

        self.fancy_helper(&a[..i], &b[..j], out);
        if same {
            out.push(TaggedLine::Common(a[i].clone()));
        } else {
            intraline(&a[i], &b[j], out);
        }
        self.fancy_helper(&a[i + 1..], &b[j + 1..], out);
    }

    fn fancy_helper(&self, a: &[String], b: &[String], out: &mut Vec<TaggedLine>) {
        match (a.is_empty(), b.is_empty()) {
            (false, false) => self.fancy_replace(a, b, out),
            (false, true) => out.extend(a.iter().cloned().map(TaggedLine::Removed)),
            (true, false) => out.extend(b.iter().cloned().map(TaggedLine::Added)),
            (true, true) => {}
        }
    }
}

impl LineComparator for NdiffComparator {
    fn compare(&self, candidate: &[String], base: &[String]) -> Vec<TaggedLine> {
        let ops = similar::capture_diff_slices(self.algorithm, candidate, base);
        let mut out = Vec::with_capacity(candidate.len().max(base.len()));

        for run in runs(&ops) {
            if run.equal {
                out.extend(candidate[run.old].iter().cloned().map(TaggedLine::Common));
            } else {
                self.fancy_helper(&candidate[run.old], &base[run.new], &mut out);
            }
        }

        out
    }
}

/// A maximal stretch of equal or non-equal opcodes
#[derive(Debug)]
struct Run {
    equal: bool,
    old: Range<usize>,
    new: Range<usize>,
}

/// Coalesce adjacent delete/insert/replace opcodes into single runs
fn runs(ops: &[DiffOp]) -> Vec<Run> {
    let mut out: Vec<Run> = Vec::new();
    for op in ops {
        let (tag, old, new) = op.as_tag_tuple();
        let equal = tag == DiffTag::Equal;
        match out.last_mut() {
            Some(last) if !equal && !last.equal => {
                last.old.end = old.end;
                last.new.end = new.end;
            }
            _ => out.push(Run { equal, old, new }),
        }
    }
    out
}

/// Character-level similarity in 0.0..=1.0
fn char_ratio(a: &str, b: &str) -> f32 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let ops = similar::capture_diff_slices(Algorithm::Myers, &a, &b);
    similar::get_diff_ratio(&ops, a.len(), b.len())
}

/// Dump a run with no similar pair: removals first, then additions
fn plain_replace(a: &[String], b: &[String], out: &mut Vec<TaggedLine>) {
    out.extend(a.iter().cloned().map(TaggedLine::Removed));
    out.extend(b.iter().cloned().map(TaggedLine::Added));
}

/// Emit a paired removal/addition with their guide lines
fn intraline(aline: &str, bline: &str, out: &mut Vec<TaggedLine>) {
    let a: Vec<char> = aline.chars().collect();
    let b: Vec<char> = bline.chars().collect();
    let ops = similar::capture_diff_slices(Algorithm::Myers, &a, &b);

    let mut atags = String::with_capacity(a.len());
    let mut btags = String::with_capacity(b.len());
    for run in runs(&ops) {
        let (la, lb) = (run.old.len(), run.new.len());
        if run.equal {
            atags.extend(std::iter::repeat_n(markers::SPACE, la));
            btags.extend(std::iter::repeat_n(markers::SPACE, lb));
        } else if la > 0 && lb > 0 {
            atags.extend(std::iter::repeat_n(markers::HAT, la));
            btags.extend(std::iter::repeat_n(markers::HAT, lb));
        } else {
            atags.extend(std::iter::repeat_n(markers::MINUS, la));
            btags.extend(std::iter::repeat_n(markers::PLUS, lb));
        }
    }

    out.push(TaggedLine::Removed(aline.to_string()));
    if let Some(guide) = guide_line(&a, &atags) {
        out.push(TaggedLine::Guide(guide));
    }
    out.push(TaggedLine::Added(bline.to_string()));
    if let Some(guide) = guide_line(&b, &btags) {
        out.push(TaggedLine::Guide(guide));
    }
}

/// Build `"? <tags>"`, keeping tabs and other whitespace under unchanged
/// characters so the mask lines up when printed
fn guide_line(line: &[char], tags: &str) -> Option<String> {
    let tags: String = tags
        .chars()
        .zip(line.iter())
        .map(|(tag, &c)| {
            if tag == markers::SPACE && c.is_whitespace() {
                c
            } else {
                tag
            }
        })
        .collect();
    let tags = tags.trim_end();
    (!tags.is_empty()).then(|| format!("{} {}", markers::GUIDE, tags))
}
