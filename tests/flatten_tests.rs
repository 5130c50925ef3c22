mod common;

use common::{dir_of, file};
use mewt_report::types::{MutantStatus, NodeKind, ResultNode};
use mewt_report::{Row, collapse, flatten};
use pretty_assertions::assert_eq;

fn labels<'a>(rows: &'a [Row<'_>]) -> Vec<(usize, &'a str)> {
    rows.iter()
        .map(|row| (row.depth, row.display_path.as_str()))
        .collect()
}

#[test]
fn test_single_file_under_single_child_root_is_one_row() {
    let root = dir_of("src", "src", vec![file("foo.js", "src/foo.js", &[MutantStatus::Killed])]);
    let rows = flatten(&root);
    assert_eq!(labels(&rows), vec![(0, "src/foo.js")]);
    assert_eq!(rows[0].node.kind(), NodeKind::File);
    assert_eq!(rows[0].node.path(), "src/foo.js");
}

#[test]
fn test_branching_directory_keeps_its_row() {
    let root = dir_of(
        "src",
        "src",
        vec![
            dir_of("a", "src/a", vec![file("x.js", "src/a/x.js", &[])]),
            dir_of("b", "src/b", vec![file("y.js", "src/b/y.js", &[])]),
        ],
    );
    let rows = flatten(&root);
    assert_eq!(
        labels(&rows),
        vec![(0, "src"), (1, "a/x.js"), (1, "b/y.js")]
    );
    assert_eq!(rows[0].node.path(), "src");
}

#[test]
fn test_long_single_child_chain_collapses_fully() {
    let root = dir_of(
        "root",
        "root",
        vec![
            dir_of(
                "a",
                "root/a",
                vec![dir_of(
                    "b",
                    "root/a/b",
                    vec![dir_of("c", "root/a/b/c", vec![file("d.js", "root/a/b/c/d.js", &[])])],
                )],
            ),
            file("e.js", "root/e.js", &[]),
        ],
    );
    let rows = flatten(&root);
    assert_eq!(labels(&rows), vec![(0, "root"), (1, "a/b/c/d.js"), (1, "e.js")]);
    assert_eq!(rows[1].node.path(), "root/a/b/c/d.js");
}

#[test]
fn test_chain_ending_in_branching_directory_anchors_there() {
    let root = dir_of(
        "app",
        "app",
        vec![dir_of(
            "src",
            "app/src",
            vec![
                file("a.js", "app/src/a.js", &[]),
                dir_of("lib", "app/src/lib", vec![]),
            ],
        )],
    );
    let rows = flatten(&root);
    assert_eq!(
        labels(&rows),
        vec![(0, "app/src"), (1, "a.js"), (1, "lib")]
    );
    assert_eq!(rows[0].node.path(), "app/src");
    assert_eq!(rows[1].ancestors, vec!["app/src"]);
    assert_eq!(rows[2].node.kind(), NodeKind::Directory);
}

#[test]
fn test_empty_directory_is_its_own_row() {
    let root = dir_of("bar", "bar", vec![]);
    let rows = flatten(&root);
    assert_eq!(labels(&rows), vec![(0, "bar")]);
}

#[test]
fn test_flatten_is_idempotent_and_pure() {
    let root = dir_of(
        "src",
        "src",
        vec![
            file("a.js", "src/a.js", &[MutantStatus::Survived]),
            dir_of("lib", "src/lib", vec![file("b.js", "src/lib/b.js", &[])]),
        ],
    );
    let before = root.clone();
    let first = flatten(&root);
    let second = flatten(&root);
    assert_eq!(first, second);
    assert_eq!(root, before);
}

#[test]
fn test_collapse_reports_anchor_and_label() {
    let node: ResultNode = dir_of("a", "a", vec![dir_of("b", "a/b", vec![file("c.js", "a/b/c.js", &[])])]);
    let (label, anchor) = collapse(&node);
    assert_eq!(label, "a/b/c.js");
    assert_eq!(anchor.path(), "a/b/c.js");
    assert!(anchor.is_file());
}
