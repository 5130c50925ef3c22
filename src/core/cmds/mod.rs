pub mod print;
pub mod rows;
pub mod totals;

pub use print::execute_print;
pub use rows::execute_rows;
pub use totals::execute_totals;

use crate::core::tree::build_tree_filtered;
use crate::types::config::config;
use crate::types::{Report, ResultNode};

/// Result tree of a report with the configured ignore patterns applied
pub(crate) fn build_report_tree(report: &Report) -> ResultNode {
    let ignored = config().ignore_matcher();
    build_tree_filtered(report, |path| !ignored.is_match(path)).into()
}
