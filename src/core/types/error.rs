use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Failed to read report {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Malformed report: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid thresholds: low ({low}) and high ({high}) must satisfy 0 <= low <= high <= 100")]
    InvalidThresholds { low: f64, high: f64 },
    #[error("No file or directory at path: {0}")]
    PathNotFound(String),
}

pub type ReportResult<T> = Result<T, ReportError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Report(#[from] ReportError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type AppResult<T> = Result<T, AppError>;
