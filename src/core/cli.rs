use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// All relative paths will be interpreted relative to this directory.
    #[arg(long, global = true)]
    pub cwd: Option<String>,

    /// Logging level (overrides config). One of: trace, debug, info, warn, error
    #[arg(long = "log.level", global = true)]
    pub log_level: Option<String>,

    /// Logging color control: "on" to force colors, "off" to disable; omit for auto
    #[arg(long = "log.color", global = true)]
    pub log_color: Option<String>,

    /// Comma-separated globs; matching report files are left out of the tree.
    /// Extends config `ignore` if provided.
    #[arg(long, global = true)]
    pub ignore: Option<String>,

    /// Scores at or above this are shown as good.
    /// Replaces config [thresholds].high and the report's own value.
    #[arg(long = "thresholds.high", global = true)]
    pub thresholds_high: Option<f64>,

    /// Scores below this are shown as bad.
    /// Replaces config [thresholds].low and the report's own value.
    #[arg(long = "thresholds.low", global = true)]
    pub thresholds_low: Option<f64>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the totals table of the report root or of one file or directory
    Totals(TotalsArgs),

    /// Show the whole result tree, with single-child directories collapsed
    Rows(RowsArgs),

    /// Print various information
    Print {
        #[command(subcommand)]
        command: PrintArgs,
    },
}

/// Arguments for the totals command
#[derive(Parser, Debug)]
pub struct TotalsArgs {
    /// Mutation testing report (JSON)
    #[arg(value_name = "REPORT")]
    pub report: PathBuf,

    /// Path of the file or directory to show, relative to the report root
    #[arg(long)]
    pub path: Option<String>,

    /// Output format: "table" (default) or "json"
    #[arg(long, default_value = "table")]
    pub format: String,
}

/// Arguments for the rows command
#[derive(Parser, Debug)]
pub struct RowsArgs {
    /// Mutation testing report (JSON)
    #[arg(value_name = "REPORT")]
    pub report: PathBuf,

    /// Output format: "table" (default) or "json"
    #[arg(long, default_value = "table")]
    pub format: String,
}

/// Arguments for the print command
#[derive(Subcommand, Debug)]
pub enum PrintArgs {
    /// Print the effective global configuration
    Config(PrintConfigArgs),
}

/// Arguments for the print config subcommand
#[derive(Parser, Debug)]
pub struct PrintConfigArgs {
    /// Output format: "table" (default) or "json"
    #[arg(long, default_value = "table")]
    pub format: String,
}
