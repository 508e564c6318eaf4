//! End-to-end report tests.
//!
//! Files are written to a temp directory, compared with the default
//! comparator and rendered.

#[path = "common/mod.rs"]
mod common;

use common::TestFiles;
use insta::assert_snapshot;
use multidiff::compare::NdiffComparator;
use multidiff::model::{ChangeKind, Document};
use multidiff::report::theme::{END_COLOR, GREEN_BACK, PURPLE, RED_BACK};
use multidiff::{MultiDiff, MultiDiffError, RenderConfig, multidiff};

#[test]
fn test_shared_change_is_reported_once() {
    let files = TestFiles::new();
    let base = files.write("base.eb", &["foo", "bar"]);
    let a = files.write("a.eb", &["foo", "baz"]);
    let b = files.write("b.eb", &["foo", "baz"]);

    let report = multidiff(base, &[a, b], &RenderConfig::plain()).unwrap();
    assert_snapshot!(report, @r"
    Comparing base.eb with a.eb, b.eb
    =====
    1 - baz (2/2)
    1 + bar (2/2)

    -----

    =====
    ");
}

#[test]
fn test_diverging_candidates_get_own_groups() {
    let files = TestFiles::new();
    let base = files.write("base.eb", &["x"]);
    let a = files.write("a.eb", &["x", "y"]);
    let b = files.write("b.eb", &["x", "z"]);

    let report = multidiff(base, &[a, b], &RenderConfig::plain()).unwrap();
    assert_snapshot!(report, @r"
    Comparing base.eb with a.eb, b.eb
    =====
    1 - z (1/2), b.eb
    1 - y (1/2), a.eb

    -----

    =====
    ");
}

#[test]
fn test_masks_printed_in_plain_mode() {
    let base = Document::new("base.eb", ["name = 'foo'", "version = '1.2'"]);
    let a = Document::new("a.eb", ["name = 'foo'", "version = '1.3'"]);
    let b = Document::new("b.eb", ["name = 'foo'", "version = '1.3'"]);
    let c = Document::new("c.eb", ["name = 'foo'", "version = '1.2'", "extra"]);

    let diff = MultiDiff::compare(base, [a, b, c], &NdiffComparator::new());
    let lines = diff.render_lines(&RenderConfig::plain());

    assert_eq!(
        lines,
        vec![
            "Comparing base.eb with a.eb, b.eb, c.eb",
            "=====",
            "1 - version = '1.3' (2/3), a.eb, b.eb",
            "  ?              ^",
            "1 + version = '1.2' (2/3), a.eb, b.eb",
            "  ?              ^",
            "2 - extra (1/3), c.eb",
            "",
            "-----",
            "",
            "=====",
        ]
    );
}

#[test]
fn test_colored_report_highlights_changed_characters() {
    let base = Document::new("base.eb", ["version = '1.2'"]);
    let a = Document::new("a.eb", ["version = '1.3'"]);

    let diff = MultiDiff::compare(base, [a], &NdiffComparator::new());
    let lines = diff.render_lines(&RenderConfig::default().with_width(200));

    assert_eq!(lines[0], format!("Comparing {PURPLE}base.eb{END_COLOR} with a.eb"));
    assert_eq!(
        lines[2],
        format!("0 {END_COLOR}-{END_COLOR} version = '1.{END_COLOR}{RED_BACK}3{END_COLOR}' (1/1)")
    );
    assert_eq!(
        lines[3],
        format!("0 {END_COLOR}+{END_COLOR} version = '1.{END_COLOR}{GREEN_BACK}2{END_COLOR}' (1/1)")
    );
    // no raw mask lines in color mode
    assert!(lines.iter().all(|l| !l.trim_start().starts_with('?')));
}

#[test]
fn test_identical_candidates_report_no_diff() {
    let files = TestFiles::new();
    let base = files.write("base.eb", &["a", "b", "c"]);
    let same = files.write("same.eb", &["a", "b", "c"]);

    let report = multidiff(base, &[same], &RenderConfig::plain()).unwrap();
    assert_eq!(report, "Comparing base.eb with same.eb\n=====\n(no diff)\n=====");
}

#[test]
fn test_zero_candidates() {
    let diff = MultiDiff::new(Document::new("base.eb", ["a"]));
    let report = diff.render(&RenderConfig::plain());
    assert_eq!(report, "Comparing base.eb with \n=====\n(no diff)\n=====");
}

#[test]
fn test_separate_blocks_get_separators() {
    let base = Document::new("base", ["a", "b", "c", "d", "e"]);
    let cand = Document::new("cand", ["A", "b", "c", "d", "E"]);

    let diff = MultiDiff::compare(base, [cand], &NdiffComparator::new());
    let lines = diff.render_lines(&RenderConfig::plain());
    let separators = lines.iter().filter(|l| l.as_str() == "-----").count();
    assert_eq!(separators, 2);
    assert_eq!(lines.last().map(String::as_str), Some("====="));
}

#[test]
fn test_adjacent_changes_share_one_block() {
    let base = Document::new("base", ["a", "b", "c"]);
    let cand = Document::new("cand", ["A", "B", "c"]);

    let diff = MultiDiff::compare(base, [cand], &NdiffComparator::new());
    let lines = diff.render_lines(&RenderConfig::plain());
    let separators = lines.iter().filter(|l| l.as_str() == "-----").count();
    assert_eq!(separators, 1);
}

#[test]
fn test_long_lines_truncated_to_width() {
    let base = Document::new("base", ["short"]);
    let cand = Document::new("cand", ["a much longer replacement line that will not fit"]);

    let diff = MultiDiff::compare(base, [cand], &NdiffComparator::new());
    let lines = diff.render_lines(&RenderConfig::plain().with_width(20));
    let change = &lines[2];
    assert_eq!(change.chars().count(), 20);
    assert!(change.ends_with("..."));

    let colored = diff.render_lines(&RenderConfig::default().with_width(20));
    assert!(colored[2].ends_with(&format!("{END_COLOR}...")));
}

#[test]
fn test_precomputed_ndiff_candidate() {
    let mut diff = MultiDiff::new(Document::new("base", ["foo", "bar"]));
    diff.add_ndiff("pre", "  foo\n- baz\n?   ^\n+ bar\n?   ^\n")
        .unwrap();
    diff.add_candidate_with(&NdiffComparator::new(), Document::new("live", ["foo", "bar"]));

    let groups = diff.groups_for(1, ChangeKind::Removed);
    assert_eq!(groups[0].mask.as_deref(), Some("?   ^"));
    assert_eq!(groups[0].partial_candidates(2), Some(&["pre".to_string()][..]));
}

#[test]
fn test_missing_file_is_input_unavailable() {
    let files = TestFiles::new();
    let base = files.write("base.eb", &["a"]);
    let missing = files.missing("gone.eb");

    let err = multidiff(base, &[missing.clone()], &RenderConfig::plain()).unwrap_err();
    assert!(matches!(err, MultiDiffError::InputUnavailable { ref path, .. } if *path == missing));
}
