use console::style;
use log::info;

use crate::core::cli::TotalsArgs;
use crate::core::cmds::build_report_tree;
use crate::core::loader::load_report;
use crate::core::table::{ProgressBar, ProgressClass, TotalsTable};
use crate::types::config::{colors_enabled, config};
use crate::types::{AppResult, ReportError};

const BAR_WIDTH: usize = 10;
// "[" + bar + "] " + score
const SCORE_WIDTH: usize = BAR_WIDTH + 3 + 6;

pub async fn execute_totals(args: TotalsArgs) -> AppResult<()> {
    let report = load_report(&args.report).await?;
    let thresholds = config().resolve_thresholds(report.thresholds).validate()?;
    let root = build_report_tree(&report);

    let model = match args.path.as_deref() {
        Some(path) => root
            .find(path)
            .ok_or_else(|| ReportError::PathNotFound(path.to_string()))?,
        None => &root,
    };

    let Some(table) = TotalsTable::new(Some(model), &thresholds) else {
        return Ok(());
    };

    match args.format.as_str() {
        "json" => {
            println!("{}", serde_json::to_string_pretty(&table)?);
        }
        _ => {
            for line in render_table(&table, colors_enabled()) {
                info!("{line}");
            }
        }
    }

    Ok(())
}

/// Plain-text rendering of a totals table, one string per line
pub fn render_table(table: &TotalsTable, colors: bool) -> Vec<String> {
    let header = table.header();
    let name_width = table
        .rows()
        .iter()
        .map(|row| row.name().chars().count())
        .chain([header[0].label.len()])
        .max()
        .unwrap_or(0);

    let mut head = format!(
        "{:<name_width$} | {:<score_width$}",
        header[0].label,
        header[1].label,
        score_width = SCORE_WIDTH
    );
    for column in &header[2..] {
        head.push_str(&format!(" | {}", column.label));
    }
    let divider = "-".repeat(head.chars().count());

    let mut lines = vec![head, divider.clone()];
    for (index, row) in table.rows().iter().enumerate() {
        let bar = row
            .progress_bar()
            .map(|bar| render_bar(bar, colors))
            .unwrap_or_default();
        let mut line = format!(
            "{:<name_width$} | {bar} {:>6}",
            row.name(),
            row.mutation_score()
        );
        let values = [
            row.killed(),
            row.survived(),
            row.timeout(),
            row.no_coverage(),
            row.runtime_errors(),
            row.compile_errors(),
            row.total_detected(),
            row.total_undetected(),
            row.total_mutants(),
        ];
        for (column, value) in header[2..].iter().zip(values) {
            line.push_str(&format!(" | {:>width$}", value, width = column.label.len()));
        }
        lines.push(line);
        // summary row first, children below
        if index == 0 && table.rows().len() > 1 {
            lines.push(divider.clone());
        }
    }
    lines
}

fn render_bar(bar: ProgressBar, colors: bool) -> String {
    let filled = (usize::from(bar.percentage) * BAR_WIDTH + 50) / 100;
    let body = format!("{}{}", "#".repeat(filled), " ".repeat(BAR_WIDTH - filled));
    let body = if colors {
        match bar.class {
            ProgressClass::Danger => style(body).red().to_string(),
            ProgressClass::Warning => style(body).yellow().to_string(),
            ProgressClass::Success => style(body).green().to_string(),
            ProgressClass::Secondary => style(body).dim().to_string(),
        }
    } else {
        body
    };
    format!("[{body}]")
}
