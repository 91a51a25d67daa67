//! Subcommand implementations

use std::path::Path;

use anyhow::{Context, Result};
use fruitcart::config::ConfigLoadReport;
use fruitcart::Config;

pub mod catalog;
pub mod price;

pub use catalog::cmd_catalog;
pub use price::cmd_price;

/// Load the explicit config file, or fall back to the default search
pub fn load_config(explicit: Option<&Path>, cwd: &Path) -> Result<(Config, ConfigLoadReport)> {
    match explicit {
        Some(path) => {
            let (config, warnings) = Config::load_with_warnings(path)
                .with_context(|| format!("failed to load config {}", path.display()))?;
            let report = ConfigLoadReport {
                source: Some(path.to_path_buf()),
                warnings,
                skipped: Vec::new(),
            };
            Ok((config.with_env_overrides(), report))
        }
        None => Ok(Config::load_or_default(Some(cwd))),
    }
}

/// Log what config loading found; called once the subscriber is installed
pub fn report_config(report: &ConfigLoadReport) {
    for (path, reason) in &report.skipped {
        tracing::warn!("ignoring {}: {}", path.display(), reason);
    }
    match &report.source {
        Some(path) => tracing::info!(path = %path.display(), "loaded config"),
        None => tracing::info!("using built-in config"),
    }

    for w in &report.warnings {
        let location = match w.line {
            Some(line) => format!("{}:{}", w.file.display(), line),
            None => w.file.display().to_string(),
        };
        match &w.suggestion {
            Some(suggestion) => tracing::warn!(
                "unknown config key '{}' in {} (did you mean '{}'?)",
                w.key,
                location,
                suggestion
            ),
            None => tracing::warn!("unknown config key '{}' in {}", w.key, location),
        }
    }
}
