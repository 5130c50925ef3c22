mod common;

use std::fs;

use common::report_json;
use mewt_report::types::{MutantStatus, ReportError, ResultNode, StatusCategory};
use mewt_report::{TotalsTable, build_tree, flatten, load_report};
use pretty_assertions::assert_eq;
use tempfile::tempdir;

fn write_report(content: &str) -> (tempfile::TempDir, std::path::PathBuf) {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let file_path = temp_dir.path().join("mutation.json");
    fs::write(&file_path, content).expect("Failed to write report");
    (temp_dir, file_path)
}

#[test]
fn test_load_and_render_report_from_disk() {
    let (_temp_dir, path) = write_report(&report_json(&[
        ("src/core/a.js", "Killed Survived Pending"),
        ("src/core/b.js", "Timeout"),
    ]));

    let report = tokio_test::block_on(load_report(&path)).expect("report loads");
    assert_eq!(report.schema_version.as_deref(), Some("1.0"));
    assert_eq!(
        report.files[0].1.mutants[2].status,
        MutantStatus::Other("Pending".to_string())
    );

    let root: ResultNode = build_tree(&report).into();
    assert_eq!(root.totals().count(StatusCategory::Other), 1);
    assert_eq!(root.totals().total_mutants(), 4);

    // All files -> src -> core is a single-child chain
    let rows = flatten(&root);
    let labels: Vec<&str> = rows.iter().map(|r| r.display_path.as_str()).collect();
    assert_eq!(labels, vec!["All files/src/core", "a.js", "b.js"]);

    let thresholds = report.thresholds.unwrap_or_default();
    let table = TotalsTable::new(Some(&root), &thresholds).unwrap();
    let names: Vec<String> = table.rows().iter().map(|r| r.name()).collect();
    assert_eq!(names, vec!["All files", "src/core"]);
    assert_eq!(table.row(1).unwrap().mutation_score(), "66.67");
}

#[test]
fn test_missing_file_is_an_io_error() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let path = temp_dir.path().join("missing.json");
    let result = tokio_test::block_on(load_report(&path));
    match result {
        Err(ReportError::Io { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("expected an I/O error, got {other:?}"),
    }
}

#[test]
fn test_malformed_json_is_rejected() {
    let (_temp_dir, path) = write_report("{ \"files\": [ }");
    let result = tokio_test::block_on(load_report(&path));
    assert!(matches!(result, Err(ReportError::Json(_))));
}

#[test]
fn test_out_of_range_thresholds_are_rejected() {
    let (_temp_dir, path) =
        write_report(r#"{ "thresholds": { "high": 120, "low": 60 }, "files": {} }"#);
    let result = tokio_test::block_on(load_report(&path));
    assert!(matches!(
        result,
        Err(ReportError::InvalidThresholds { high, .. }) if high == 120.0
    ));
}
