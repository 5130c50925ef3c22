#![allow(dead_code)]

use mewt_report::types::{
    DirectoryResult, FileReport, FileResult, MutantOutcome, MutantStatus, ResultNode, Totals,
};

pub fn outcomes(statuses: &[MutantStatus]) -> Vec<MutantOutcome> {
    statuses.iter().cloned().map(MutantOutcome::new).collect()
}

pub fn file(name: &str, path: &str, statuses: &[MutantStatus]) -> ResultNode {
    FileResult::new(
        name,
        path,
        FileReport {
            language: "js".to_string(),
            source: "const bar = foo();".to_string(),
            mutants: outcomes(statuses),
        },
    )
    .into()
}

pub fn dir(name: &str, path: &str, totals: Totals, children: Vec<ResultNode>) -> ResultNode {
    DirectoryResult::new(name, path, totals, children).into()
}

/// Directory whose totals are aggregated from its children
pub fn dir_of(name: &str, path: &str, children: Vec<ResultNode>) -> ResultNode {
    DirectoryResult::from_children(name, path, children).into()
}

/// Report JSON with files in the given order; statuses are whitespace separated
pub fn report_json(files: &[(&str, &str)]) -> String {
    let files: Vec<String> = files
        .iter()
        .map(|(path, statuses)| {
            let mutants: Vec<String> = statuses
                .split_whitespace()
                .enumerate()
                .map(|(i, status)| {
                    format!(r#"{{ "id": "{i}", "mutatorName": "M", "status": "{status}" }}"#)
                })
                .collect();
            format!(
                r#"{}: {{ "language": "js", "source": "", "mutants": [{}] }}"#,
                serde_json::to_string(path).unwrap(),
                mutants.join(", ")
            )
        })
        .collect();
    format!(
        r#"{{ "schemaVersion": "1.0", "thresholds": {{ "high": 80, "low": 60 }}, "files": {{ {} }} }}"#,
        files.join(", ")
    )
}
