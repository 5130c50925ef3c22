use std::env;
use std::path::PathBuf;

use clap::Parser;
use log::debug;

use crate::core::cli::{Args, Commands, PrintArgs};
use crate::core::cmds;
use crate::core::logging::init_logging;
use crate::types::AppResult;
use crate::types::config::{CliOverrides, init_with_overrides};

pub async fn run_main() -> AppResult<()> {
    let args = Args::parse();

    // Handle global arguments
    if let Some(cwd_arg) = args.cwd.as_ref() {
        let cwd = PathBuf::from(cwd_arg).canonicalize()?;
        env::set_current_dir(&cwd)?;
    }

    // Build CLI overrides for config precedence
    let cli_overrides = CliOverrides {
        log_level: args.log_level.clone(),
        log_color: args.log_color.clone(),
        ignore: args.ignore.clone(),
        thresholds_high: args.thresholds_high,
        thresholds_low: args.thresholds_low,
    };

    // Initialize configuration (files, then CLI overrides)
    init_with_overrides(&cli_overrides);

    // Initialize logging after config so level/color are applied
    init_logging();
    debug!("Current working directory: {}", env::current_dir()?.display());

    // Dispatch to appropriate command
    match args.command {
        Commands::Totals(totals_args) => cmds::execute_totals(totals_args).await?,
        Commands::Rows(rows_args) => cmds::execute_rows(rows_args).await?,
        Commands::Print {
            command: print_args,
        } => match print_args {
            PrintArgs::Config(args) => {
                cmds::execute_print(cmds::print::PrintCommand::Config(args.format)).await?
            }
        },
    }

    Ok(())
}
