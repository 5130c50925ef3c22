use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

/// Status of a single mutant as written by the mutation testing tool.
///
/// Values the report schema may add later are kept as `Other` rather than
/// rejected, so older builds keep rendering newer reports.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum MutantStatus {
    Killed,
    Survived,
    Timeout,
    NoCoverage,
    RuntimeError,
    CompileError,
    Other(String),
}

/// Column a status is counted under. Every totals value carries a count for
/// each category, present or not, so renderers get a stable column set.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, EnumIter, EnumString, Serialize,
)]
#[strum(ascii_case_insensitive)]
pub enum StatusCategory {
    Killed,
    Survived,
    Timeout,
    NoCoverage,
    RuntimeError,
    CompileError,
    Other,
}

impl StatusCategory {
    /// All categories in column order
    pub fn all() -> impl Iterator<Item = StatusCategory> {
        StatusCategory::iter()
    }

    /// The mutant was caught by the test suite
    pub fn is_detected(self) -> bool {
        matches!(self, StatusCategory::Killed | StatusCategory::Timeout)
    }

    /// The mutant escaped the test suite
    pub fn is_undetected(self) -> bool {
        matches!(self, StatusCategory::Survived | StatusCategory::NoCoverage)
    }

    /// Not eligible for the mutation score
    pub fn is_invalid(self) -> bool {
        !self.is_detected() && !self.is_undetected()
    }
}

impl MutantStatus {
    pub fn category(&self) -> StatusCategory {
        match self {
            MutantStatus::Killed => StatusCategory::Killed,
            MutantStatus::Survived => StatusCategory::Survived,
            MutantStatus::Timeout => StatusCategory::Timeout,
            MutantStatus::NoCoverage => StatusCategory::NoCoverage,
            MutantStatus::RuntimeError => StatusCategory::RuntimeError,
            MutantStatus::CompileError => StatusCategory::CompileError,
            MutantStatus::Other(_) => StatusCategory::Other,
        }
    }
}

impl fmt::Display for MutantStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MutantStatus::Other(raw) => f.write_str(raw),
            known => write!(f, "{}", known.category()),
        }
    }
}

impl FromStr for MutantStatus {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let status = match StatusCategory::from_str(s.trim()) {
            Ok(StatusCategory::Killed) => MutantStatus::Killed,
            Ok(StatusCategory::Survived) => MutantStatus::Survived,
            Ok(StatusCategory::Timeout) => MutantStatus::Timeout,
            Ok(StatusCategory::NoCoverage) => MutantStatus::NoCoverage,
            Ok(StatusCategory::RuntimeError) => MutantStatus::RuntimeError,
            Ok(StatusCategory::CompileError) => MutantStatus::CompileError,
            Ok(StatusCategory::Other) | Err(_) => MutantStatus::Other(s.to_string()),
        };
        Ok(status)
    }
}

impl From<String> for MutantStatus {
    fn from(value: String) -> Self {
        match value.parse() {
            Ok(status) => status,
            Err(never) => match never {},
        }
    }
}

impl From<&str> for MutantStatus {
    fn from(value: &str) -> Self {
        MutantStatus::from(value.to_string())
    }
}

impl From<MutantStatus> for String {
    fn from(value: MutantStatus) -> Self {
        value.to_string()
    }
}
