use std::path::Path;

use log::debug;

use crate::types::{Report, ReportError, ReportResult};

/// Read and decode a report file
pub async fn load_report(path: &Path) -> ReportResult<Report> {
    let json = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| ReportError::Io {
            path: path.to_path_buf(),
            source,
        })?;
    let report = Report::from_json(&json)?;
    debug!(
        "Loaded report {}: {} files, {} mutants",
        path.display(),
        report.files.len(),
        report.total_mutants()
    );
    Ok(report)
}
