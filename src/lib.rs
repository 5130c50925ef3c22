pub mod core;

// Re-export key items for easy importing in this crate
pub use crate::core::types;

// Re-export key items for easy importing in other crates
pub use crate::core::flatten::{Row, collapse, flatten};
pub use crate::core::loader::load_report;
pub use crate::core::main_shared::run_main;
pub use crate::core::table::{ResultTableRow, TotalsTable};
pub use crate::core::tree::{build_tree, build_tree_filtered};
