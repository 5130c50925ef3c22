pub mod config;
mod error;
mod node;
mod report;
mod status;
mod totals;

pub use error::*;
pub use node::*;
pub use report::*;
pub use status::*;
pub use totals::*;
