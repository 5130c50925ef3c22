use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::types::{MutantStatus, ReportError, ReportResult};

/// Position inside a source file, 1-based as written by the reporters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub start: Position,
    pub end: Position,
}

/// A single mutant record. Only `status` is interpreted; the rest is carried
/// through for drill-down views.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MutantOutcome {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mutator_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replacement: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    pub status: MutantStatus,
}

impl MutantOutcome {
    pub fn new(status: MutantStatus) -> Self {
        Self {
            id: None,
            mutator_name: None,
            replacement: None,
            description: None,
            location: None,
            status,
        }
    }
}

impl From<MutantStatus> for MutantOutcome {
    fn from(status: MutantStatus) -> Self {
        MutantOutcome::new(status)
    }
}

/// One mutated source file of a report
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FileReport {
    #[serde(default)]
    pub language: String,
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub mutants: Vec<MutantOutcome>,
}

/// Score boundaries used to color the progress indicator
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Thresholds {
    pub high: f64,
    pub low: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            high: 80.0,
            low: 60.0,
        }
    }
}

impl Thresholds {
    pub fn validate(self) -> ReportResult<Self> {
        let in_range = |v: f64| (0.0..=100.0).contains(&v);
        if in_range(self.low) && in_range(self.high) && self.low <= self.high {
            Ok(self)
        } else {
            Err(ReportError::InvalidThresholds {
                low: self.low,
                high: self.high,
            })
        }
    }
}

/// A mutation testing report payload.
///
/// `files` keeps the order the files appear in the document; the result tree
/// lists children in that order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema_version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thresholds: Option<Thresholds>,
    #[serde(with = "ordered_files")]
    pub files: Vec<(String, FileReport)>,
}

impl Report {
    pub fn from_json(json: &str) -> ReportResult<Self> {
        let report: Report = serde_json::from_str(json)?;
        if let Some(thresholds) = report.thresholds {
            thresholds.validate()?;
        }
        Ok(report)
    }

    pub fn total_mutants(&self) -> usize {
        self.files.iter().map(|(_, file)| file.mutants.len()).sum()
    }
}

// JSON objects as ordered (key, value) lists
mod ordered_files {
    use super::*;

    pub fn serialize<S>(files: &[(String, FileReport)], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(files.len()))?;
        for (path, file) in files {
            map.serialize_entry(path, file)?;
        }
        map.end()
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<(String, FileReport)>, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(FilesVisitor)
    }

    struct FilesVisitor;

    impl<'de> Visitor<'de> for FilesVisitor {
        type Value = Vec<(String, FileReport)>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a map of file paths to file results")
        }

        fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut files = Vec::with_capacity(access.size_hint().unwrap_or(0));
            while let Some((path, file)) = access.next_entry::<String, FileReport>()? {
                files.push((path, file));
            }
            Ok(files)
        }
    }
}
