use std::str::FromStr;

use console::style;
use log::{Level, LevelFilter};

use crate::types::config::{colors_enabled, config};

/// Route the `log` facade to the terminal. Info lines are user-facing output:
/// they are printed bare on stdout. Other levels get a (colored) level prefix
/// and go to stderr so they never interleave with JSON output.
pub fn init_logging() {
    let level = LevelFilter::from_str(config().log().level()).unwrap_or(LevelFilter::Info);
    let colors = colors_enabled();
    console::set_colors_enabled(colors);

    let result = dispatch(level, colors, std::io::stdout(), std::io::stderr()).apply();

    // A logger may already be installed when running under a test harness
    if result.is_err() {
        log::debug!("Logger already initialized");
    }
}

fn dispatch(
    level: LevelFilter,
    colors: bool,
    output: impl Into<fern::Output>,
    diagnostics: impl Into<fern::Output>,
) -> fern::Dispatch {
    fern::Dispatch::new()
        .format(move |out, message, record| {
            if record.level() == Level::Info {
                return out.finish(format_args!("{message}"));
            }
            let label = record.level().to_string();
            let label = if colors {
                match record.level() {
                    Level::Error => style(label).red().bold().to_string(),
                    Level::Warn => style(label).yellow().bold().to_string(),
                    _ => style(label).dim().to_string(),
                }
            } else {
                label
            };
            out.finish(format_args!("[{label}] {message}"))
        })
        .level(level)
        .chain(
            fern::Dispatch::new()
                .filter(|metadata| metadata.level() == Level::Info)
                .chain(output),
        )
        .chain(
            fern::Dispatch::new()
                .filter(|metadata| metadata.level() != Level::Info)
                .chain(diagnostics),
        )
}
