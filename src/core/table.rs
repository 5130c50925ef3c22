//! Totals table: the fixed column layout shared by renderers and by
//! end-to-end page objects.
//!
//! The header has 11 columns, two of which span two body cells, so every
//! body row has 13 cells:
//!
//! | # | cell             | tag  |
//! |---|------------------|------|
//! | 1 | icon             | `td` |
//! | 2 | name (link)      | `td` |
//! | 3 | progress         | `td` |
//! | 4 | mutation score   | `th` |
//! | 5 | killed           | `td` |
//! | 6 | survived         | `td` |
//! | 7 | timeout          | `td` |
//! | 8 | no coverage      | `td` |
//! | 9 | runtime errors   | `td` |
//! | 10| compile errors   | `td` |
//! | 11| total detected   | `th` |
//! | 12| total undetected | `th` |
//! | 13| total mutants    | `th` |

use serde::Serialize;
use strum::Display;

use crate::core::flatten::collapse;
use crate::types::{MutationScore, NodeKind, ResultNode, Thresholds, Totals};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HeaderColumn {
    pub label: &'static str,
    /// Number of body cells under this header column
    pub span: usize,
}

pub const HEADER: [HeaderColumn; 11] = [
    HeaderColumn {
        label: "File / Directory",
        span: 2,
    },
    HeaderColumn {
        label: "Mutation score",
        span: 2,
    },
    HeaderColumn {
        label: "Killed",
        span: 1,
    },
    HeaderColumn {
        label: "Survived",
        span: 1,
    },
    HeaderColumn {
        label: "Timeout",
        span: 1,
    },
    HeaderColumn {
        label: "No coverage",
        span: 1,
    },
    HeaderColumn {
        label: "Runtime errors",
        span: 1,
    },
    HeaderColumn {
        label: "Compile errors",
        span: 1,
    },
    HeaderColumn {
        label: "Total detected",
        span: 1,
    },
    HeaderColumn {
        label: "Total undetected",
        span: 1,
    },
    HeaderColumn {
        label: "Total mutants",
        span: 1,
    },
];

/// Number of cells in every body row
pub const ROW_CELLS: usize = 13;

const NAME: usize = 1;
const PROGRESS: usize = 2;
const SCORE: usize = 3;
const KILLED: usize = 4;
const SURVIVED: usize = 5;
const TIMEOUT: usize = 6;
const NO_COVERAGE: usize = 7;
const RUNTIME_ERRORS: usize = 8;
const COMPILE_ERRORS: usize = 9;
const TOTAL_DETECTED: usize = 10;
const TOTAL_UNDETECTED: usize = 11;
const TOTAL_MUTANTS: usize = 12;

/// Cell element: data (`td`) or row header (`th`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum CellTag {
    Td,
    Th,
}

/// Color class of a progress indicator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ProgressClass {
    Danger,
    Warning,
    Success,
    Secondary,
}

/// Progress indicator bound to a mutation score
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ProgressBar {
    /// Rounded score, 0 when the score is not applicable
    pub percentage: u8,
    pub class: ProgressClass,
}

impl ProgressBar {
    pub fn new(score: MutationScore, thresholds: &Thresholds) -> Self {
        match score {
            MutationScore::Score(value) => {
                let class = if value < thresholds.low {
                    ProgressClass::Danger
                } else if value < thresholds.high {
                    ProgressClass::Warning
                } else {
                    ProgressClass::Success
                };
                Self {
                    percentage: value.round().clamp(0.0, 100.0) as u8,
                    class,
                }
            }
            MutationScore::NotApplicable => Self {
                percentage: 0,
                class: ProgressClass::Secondary,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "cell", rename_all = "lowercase")]
pub enum Cell {
    Icon { kind: NodeKind },
    Name { text: String, href: String },
    Progress { bar: ProgressBar, score: MutationScore },
    Score { score: MutationScore },
    Count { value: usize },
    Total { value: usize },
}

impl Cell {
    pub fn tag(&self) -> CellTag {
        match self {
            Cell::Score { .. } | Cell::Total { .. } => CellTag::Th,
            _ => CellTag::Td,
        }
    }

    /// Text content of the cell
    pub fn text(&self) -> String {
        match self {
            Cell::Icon { .. } => String::new(),
            Cell::Name { text, .. } => text.clone(),
            Cell::Progress { score, .. } | Cell::Score { score } => score.to_string(),
            Cell::Count { value } | Cell::Total { value } => value.to_string(),
        }
    }
}

/// A body row of the totals table, with read accessors per column
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultTableRow {
    cells: Vec<Cell>,
}

impl ResultTableRow {
    fn new(label: String, node: &ResultNode, thresholds: &Thresholds) -> Self {
        let totals: &Totals = node.totals();
        let score = totals.mutation_score();
        let cells = vec![
            Cell::Icon { kind: node.kind() },
            Cell::Name {
                text: label,
                href: node.path().to_string(),
            },
            Cell::Progress {
                bar: ProgressBar::new(score, thresholds),
                score,
            },
            Cell::Score { score },
            Cell::Count {
                value: totals.killed(),
            },
            Cell::Count {
                value: totals.survived(),
            },
            Cell::Count {
                value: totals.timeout(),
            },
            Cell::Count {
                value: totals.no_coverage(),
            },
            Cell::Count {
                value: totals.runtime_errors(),
            },
            Cell::Count {
                value: totals.compile_errors(),
            },
            Cell::Total {
                value: totals.total_detected(),
            },
            Cell::Total {
                value: totals.total_undetected(),
            },
            Cell::Total {
                value: totals.total_mutants(),
            },
        ];
        debug_assert_eq!(cells.len(), ROW_CELLS);
        Self { cells }
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    fn text(&self, index: usize) -> String {
        self.cells[index].text()
    }

    pub fn name(&self) -> String {
        self.text(NAME)
    }

    /// Path of the node the name cell links to
    pub fn navigate(&self) -> &str {
        match &self.cells[NAME] {
            Cell::Name { href, .. } => href,
            _ => "",
        }
    }

    pub fn progress_bar(&self) -> Option<ProgressBar> {
        match self.cells[PROGRESS] {
            Cell::Progress { bar, .. } => Some(bar),
            _ => None,
        }
    }

    pub fn mutation_score(&self) -> String {
        self.text(SCORE)
    }

    pub fn killed(&self) -> String {
        self.text(KILLED)
    }

    pub fn survived(&self) -> String {
        self.text(SURVIVED)
    }

    pub fn timeout(&self) -> String {
        self.text(TIMEOUT)
    }

    pub fn no_coverage(&self) -> String {
        self.text(NO_COVERAGE)
    }

    pub fn runtime_errors(&self) -> String {
        self.text(RUNTIME_ERRORS)
    }

    pub fn compile_errors(&self) -> String {
        self.text(COMPILE_ERRORS)
    }

    pub fn total_detected(&self) -> String {
        self.text(TOTAL_DETECTED)
    }

    pub fn total_undetected(&self) -> String {
        self.text(TOTAL_UNDETECTED)
    }

    pub fn total_mutants(&self) -> String {
        self.text(TOTAL_MUTANTS)
    }
}

/// The totals view of one node: a summary row for the node itself followed,
/// for directories, by a row per child. Single-child directory chains under
/// a child collapse into that child's row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TotalsTable {
    header: &'static [HeaderColumn],
    rows: Vec<ResultTableRow>,
}

impl TotalsTable {
    /// No table is produced until a model is loaded
    pub fn new(model: Option<&ResultNode>, thresholds: &Thresholds) -> Option<Self> {
        let model = model?;
        let mut rows = vec![ResultTableRow::new(
            model.name().to_string(),
            model,
            thresholds,
        )];
        for child in model.children() {
            let (label, anchor) = collapse(child);
            rows.push(ResultTableRow::new(label, anchor, thresholds));
        }
        Some(Self {
            header: &HEADER,
            rows,
        })
    }

    pub fn header(&self) -> &[HeaderColumn] {
        self.header
    }

    pub fn rows(&self) -> &[ResultTableRow] {
        &self.rows
    }

    pub fn row(&self, index: usize) -> Option<&ResultTableRow> {
        self.rows.get(index)
    }

    /// Cells in the body, over all rows
    pub fn body_cell_count(&self) -> usize {
        self.rows.iter().map(|row| row.cells().len()).sum()
    }
}
