//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{PricingError, PricingResult};

use super::types::{Config, Verbosity};

/// Project-level config file name
pub const PROJECT_CONFIG_FILE: &str = "fruitcart.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> PricingResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| PricingError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// What the default config search found, kept until logging is set up
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigLoadReport {
    /// File the config was read from (`None` means built-in defaults)
    pub source: Option<PathBuf>,
    /// Unknown keys in `source`
    pub warnings: Vec<ConfigWarning>,
    /// Files that exist but could not be loaded, with the reason
    pub skipped: Vec<(PathBuf, String)>,
}

/// Load from project config, user config, or defaults
pub fn load_or_default(project_root: Option<&Path>) -> (Config, ConfigLoadReport) {
    let mut candidates = Vec::new();
    if let Some(root) = project_root {
        candidates.push(root.join(PROJECT_CONFIG_FILE));
    }
    if let Some(config_dir) = dirs::config_dir() {
        candidates.push(config_dir.join("fruitcart/config.toml"));
    }

    let mut report = ConfigLoadReport::default();
    for path in candidates.into_iter().filter(|p| p.exists()) {
        match load_with_warnings(&path) {
            Ok((config, warnings)) => {
                report.source = Some(path);
                report.warnings = warnings;
                return (with_env_overrides(config), report);
            }
            Err(e) => report.skipped.push((path, e.to_string())),
        }
    }

    (with_env_overrides(Config::default()), report)
}

/// Apply environment variable overrides (FRUITCART_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    apply_overrides(config, |name| std::env::var(name).ok())
}

/// Apply overrides read through `lookup`
pub(crate) fn apply_overrides(
    mut config: Config,
    lookup: impl Fn(&str) -> Option<String>,
) -> Config {
    // FRUITCART_PROMOTION
    if let Some(val) = lookup("FRUITCART_PROMOTION") {
        config.promotion.enabled = parse_bool(&val);
    }

    // FRUITCART_VERBOSITY
    if let Some(verbosity) = lookup("FRUITCART_VERBOSITY") {
        config.output.verbosity = match verbosity.to_lowercase().as_str() {
            "quiet" => Verbosity::Quiet,
            "verbose" => Verbosity::Verbose,
            "debug" => Verbosity::Debug,
            _ => Verbosity::Normal,
        };
    }

    config
}

fn parse_bool(val: &str) -> bool {
    !matches!(
        val.trim().to_lowercase().as_str(),
        "" | "0" | "false" | "no" | "off"
    )
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "catalog",
        "discounts",
        "promotion",
        "enabled",
        "threshold",
        "amount",
        "output",
        "verbosity",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
