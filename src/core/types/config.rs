use std::fs;
use std::path::{Path, PathBuf};

use globset::{Glob, GlobSet, GlobSetBuilder};
use log::warn;
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};

use crate::types::Thresholds;

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct LogConfig {
    pub level: Option<String>,
    pub color: Option<bool>, // None = auto-detect (semantic)
}

impl LogConfig {
    pub fn level(&self) -> &str {
        self.level.as_deref().unwrap_or("info")
    }

    pub fn color(&self) -> Option<bool> {
        self.color // None has semantic meaning (auto-detect)
    }

    pub fn to_effective(&self) -> Self {
        Self {
            level: Some(self.level().to_string()),
            color: self.color,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct ThresholdsConfig {
    pub high: Option<f64>,
    pub low: Option<f64>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    // Top-level fields
    pub ignore: Option<Vec<String>>,

    // Nested sections
    pub log: Option<LogConfig>,
    pub thresholds: Option<ThresholdsConfig>,
}

impl Config {
    pub fn ignore(&self) -> &[String] {
        self.ignore.as_deref().unwrap_or(&[])
    }

    pub fn log(&self) -> LogConfig {
        self.log.clone().unwrap_or_default()
    }

    pub fn thresholds(&self) -> ThresholdsConfig {
        self.thresholds.clone().unwrap_or_default()
    }

    /// Thresholds to color scores with. Configured values win over the ones
    /// stored in the report, which win over the defaults.
    pub fn resolve_thresholds(&self, report: Option<Thresholds>) -> Thresholds {
        let fallback = report.unwrap_or_default();
        let configured = self.thresholds();
        Thresholds {
            high: configured.high.unwrap_or(fallback.high),
            low: configured.low.unwrap_or(fallback.low),
        }
    }

    /// Matcher for report paths left out of the tree. Patterns that fail to
    /// compile are skipped with a warning.
    pub fn ignore_matcher(&self) -> GlobSet {
        let mut builder = GlobSetBuilder::new();
        for pattern in self.ignore().iter().filter(|p| !p.trim().is_empty()) {
            match Glob::new(pattern) {
                Ok(glob) => {
                    builder.add(glob);
                }
                Err(e) => warn!("Ignoring invalid glob '{pattern}': {e}"),
            }
        }
        builder.build().unwrap_or_else(|e| {
            warn!("Failed to compile ignore patterns: {e}");
            GlobSet::empty()
        })
    }

    pub fn to_effective(&self) -> Self {
        Self {
            ignore: Some(self.ignore().to_vec()),
            log: Some(self.log().to_effective()),
            thresholds: Some(self.thresholds()), // None = from report (semantic)
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub log_level: Option<String>,
    pub log_color: Option<String>, // "on" | "off"
    pub ignore: Option<String>,    // csv
    pub thresholds_high: Option<f64>,
    pub thresholds_low: Option<f64>,
}

pub const CONFIG_FILENAME: &str = "mewt-report.toml";

static CONFIG: OnceCell<Config> = OnceCell::new();

pub fn config() -> &'static Config {
    CONFIG.get_or_init(|| {
        let mut cfg = Config::default();
        // Apply nearest config file found by walking up from cwd
        if let Some(path) = find_nearest_config_file()
            && let Some(file_cfg) = read_config_file(&path)
        {
            apply_file_config(&mut cfg, &file_cfg);
        }
        cfg
    })
}

pub fn init_with_overrides(overrides: &CliOverrides) {
    let mut cfg = Config::default();

    // 1) Config file: walk up from cwd and use the first config file found
    if let Some(path) = find_nearest_config_file()
        && let Some(file_cfg) = read_config_file(&path)
    {
        apply_file_config(&mut cfg, &file_cfg);
    }

    // 2) CLI arguments (highest priority). Only override if user specified.
    apply_cli_overrides(&mut cfg, overrides);

    let _ = CONFIG.set(cfg);
}

fn read_config_file(path: &Path) -> Option<Config> {
    match fs::read_to_string(path) {
        Ok(contents) => parse_config(&contents),
        Err(_) => None,
    }
}

fn parse_config(contents: &str) -> Option<Config> {
    toml::from_str::<Config>(contents).ok()
}

fn apply_file_config(cfg: &mut Config, file: &Config) {
    if let Some(patterns) = &file.ignore {
        cfg.ignore = Some(
            cfg.ignore()
                .iter()
                .chain(patterns.iter())
                .cloned()
                .collect(),
        );
    }

    // Merge log section
    if let Some(file_log) = &file.log {
        let mut log = cfg.log.clone().unwrap_or_default();
        if file_log.level.is_some() {
            log.level = file_log.level.clone();
        }
        if file_log.color.is_some() {
            log.color = file_log.color;
        }
        cfg.log = Some(log);
    }

    // Merge thresholds section
    if let Some(file_thresholds) = &file.thresholds {
        let mut thresholds = cfg.thresholds();
        if file_thresholds.high.is_some() {
            thresholds.high = file_thresholds.high;
        }
        if file_thresholds.low.is_some() {
            thresholds.low = file_thresholds.low;
        }
        cfg.thresholds = Some(thresholds);
    }
}

fn apply_cli_overrides(cfg: &mut Config, overrides: &CliOverrides) {
    if let Some(ignore_csv) = &overrides.ignore {
        let existing = cfg.ignore().to_vec();
        let new_patterns = parse_csv(ignore_csv);
        cfg.ignore = Some(existing.into_iter().chain(new_patterns).collect());
    }

    // Log overrides
    let mut log = cfg.log.clone().unwrap_or_default();
    if let Some(level) = &overrides.log_level
        && !level.trim().is_empty()
    {
        log.level = Some(level.trim().to_string());
    }
    if let Some(color_str) = &overrides.log_color {
        match color_str.to_lowercase().as_str() {
            "on" => log.color = Some(true),
            "off" => log.color = Some(false),
            _ => {}
        }
    }
    if overrides.log_level.is_some() || overrides.log_color.is_some() {
        cfg.log = Some(log);
    }

    // Threshold overrides
    if overrides.thresholds_high.is_some() || overrides.thresholds_low.is_some() {
        let mut thresholds = cfg.thresholds();
        if overrides.thresholds_high.is_some() {
            thresholds.high = overrides.thresholds_high;
        }
        if overrides.thresholds_low.is_some() {
            thresholds.low = overrides.thresholds_low;
        }
        cfg.thresholds = Some(thresholds);
    }
}

fn parse_csv(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

fn find_nearest_config_file() -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    for dir in cwd.ancestors() {
        let candidate = dir.join(CONFIG_FILENAME);
        if candidate.exists() {
            return Some(candidate);
        }
    }
    None
}

pub fn colors_enabled() -> bool {
    match config().log().color() {
        Some(force) => force,
        None => console::colors_enabled(),
    }
}
