pub mod cli;
pub mod cmds;
pub mod flatten;
pub mod loader;
pub mod logging;
pub mod main_shared;
pub mod table;
pub mod tree;
pub mod types;
