use log::info;

use crate::types::{AppResult, Thresholds};
use crate::types::config::config;

pub async fn execute(format: String) -> AppResult<()> {
    let effective_config = config().to_effective();

    if format == "json" {
        println!("{}", serde_json::to_string_pretty(&effective_config)?);
    } else {
        // Table format
        info!("Effective Configuration:");
        info!("");
        info!("Global:");
        match &effective_config.ignore {
            Some(ignore) if !ignore.is_empty() => info!("  ignore: [{}]", ignore.join(", ")),
            _ => info!("  ignore: []"),
        }

        info!("");
        info!("Log:");
        if let Some(log) = &effective_config.log {
            info!("  level: {}", log.level());
            match log.color {
                Some(true) => info!("  color: on"),
                Some(false) => info!("  color: off"),
                None => info!("  color: auto"),
            }
        }

        info!("");
        info!("Thresholds:");
        if let Some(thresholds) = &effective_config.thresholds {
            let defaults = Thresholds::default();
            let show = |value: Option<f64>, default: f64| match value {
                Some(v) => v.to_string(),
                None => format!("(from report, else {default})"),
            };
            info!("  high: {}", show(thresholds.high, defaults.high));
            info!("  low: {}", show(thresholds.low, defaults.low));
        }
    }

    Ok(())
}
