use log::info;
use serde::Serialize;

use crate::core::cli::RowsArgs;
use crate::core::cmds::build_report_tree;
use crate::core::flatten::{Row, flatten};
use crate::core::loader::load_report;
use crate::types::{AppResult, NodeKind, Totals};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonRow<'a> {
    depth: usize,
    display_path: &'a str,
    path: &'a str,
    kind: NodeKind,
    ancestors: &'a [String],
    totals: &'a Totals,
}

#[derive(Serialize)]
struct JsonRows<'a> {
    rows: Vec<JsonRow<'a>>,
}

pub async fn execute_rows(args: RowsArgs) -> AppResult<()> {
    let report = load_report(&args.report).await?;
    let root = build_report_tree(&report);
    let rows = flatten(&root);

    match args.format.as_str() {
        "json" => {
            let json_rows = JsonRows {
                rows: rows
                    .iter()
                    .map(|row| JsonRow {
                        depth: row.depth,
                        display_path: &row.display_path,
                        path: row.node.path(),
                        kind: row.node.kind(),
                        ancestors: &row.ancestors,
                        totals: row.node.totals(),
                    })
                    .collect(),
            };
            println!("{}", serde_json::to_string_pretty(&json_rows)?);
        }
        _ => {
            for line in render_rows(&rows) {
                info!("{line}");
            }
        }
    }

    Ok(())
}

/// Indented outline of flattened rows with score and mutant count
pub fn render_rows(rows: &[Row<'_>]) -> Vec<String> {
    let width = rows
        .iter()
        .map(|row| row.depth * 2 + row.display_path.chars().count())
        .max()
        .unwrap_or(0);
    rows.iter()
        .map(|row| {
            let label = format!("{}{}", "  ".repeat(row.depth), row.display_path);
            let totals = row.node.totals();
            format!(
                "{label:<width$}  {:>6}  ({} mutants)",
                totals.mutation_score().to_string(),
                totals.total_mutants()
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{DirectoryResult, FileReport, FileResult, ResultNode};

    #[test]
    fn indents_by_depth() {
        let root: ResultNode = DirectoryResult::from_children(
            "src",
            "src",
            vec![
                FileResult::new("a.js", "src/a.js", FileReport::default()).into(),
                DirectoryResult::from_children(
                    "lib",
                    "src/lib",
                    vec![FileResult::new("b.js", "src/lib/b.js", FileReport::default()).into()],
                )
                .into(),
            ],
        )
        .into();
        let lines = render_rows(&flatten(&root));
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("src "));
        assert!(lines[1].starts_with("  a.js "));
        assert!(lines[2].starts_with("  lib/b.js "));
        assert!(lines[2].ends_with("N/A  (0 mutants)"));
    }
}
