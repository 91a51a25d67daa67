//! Configuration type definitions

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use crate::domain::entities::{Catalog, STANDARD_PRICES};
use crate::domain::value_objects::{GoodKind, PromotionRule, DEFAULT_AMOUNT, DEFAULT_THRESHOLD};
use crate::error::PricingResult;

use super::loader::{self, ConfigLoadReport, ConfigWarning};

/// Promotion configuration
#[derive(Debug, Clone, Deserialize)]
pub struct PromotionConfig {
    #[serde(default)]
    pub enabled: bool,

    #[serde(default = "default_threshold")]
    pub threshold: f64,

    #[serde(default = "default_amount")]
    pub amount: f64,
}

impl Default for PromotionConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            threshold: DEFAULT_THRESHOLD,
            amount: DEFAULT_AMOUNT,
        }
    }
}

fn default_threshold() -> f64 {
    DEFAULT_THRESHOLD
}

fn default_amount() -> f64 {
    DEFAULT_AMOUNT
}

/// Output configuration
#[derive(Debug, Clone, Deserialize, Default)]
pub struct OutputConfig {
    #[serde(default)]
    pub verbosity: Verbosity,
}

/// Verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Verbose,
    Debug,
}

impl Verbosity {
    /// Raise the level by the number of `-v` flags given on the command line
    pub fn raised_by(self, count: u8) -> Self {
        let rank = match self {
            Verbosity::Quiet => 0,
            Verbosity::Normal => 1,
            Verbosity::Verbose => 2,
            Verbosity::Debug => 3,
        };
        match rank + count as usize {
            0 => Verbosity::Quiet,
            1 => Verbosity::Normal,
            2 => Verbosity::Verbose,
            _ => Verbosity::Debug,
        }
    }

    /// `tracing` filter directive for this level
    pub fn filter_directive(&self) -> &'static str {
        match self {
            Verbosity::Quiet => "error",
            Verbosity::Normal => "warn",
            Verbosity::Verbose => "info",
            Verbosity::Debug => "debug",
        }
    }
}

/// Main configuration structure
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Base price per unit, keyed by good name
    #[serde(default = "default_catalog")]
    pub catalog: BTreeMap<String, f64>,

    /// Discount factor, keyed by good name
    #[serde(default)]
    pub discounts: BTreeMap<String, f64>,

    #[serde(default)]
    pub promotion: PromotionConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog: default_catalog(),
            discounts: BTreeMap::new(),
            promotion: PromotionConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

fn default_catalog() -> BTreeMap<String, f64> {
    STANDARD_PRICES
        .iter()
        .map(|(kind, price)| (kind.name().to_string(), *price))
        .collect()
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> PricingResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> PricingResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load from project config, user config, or defaults.
    ///
    /// Unknown keys and unreadable files are returned in the report rather
    /// than logged, since logging may not be set up yet.
    pub fn load_or_default(project_root: Option<&Path>) -> (Self, ConfigLoadReport) {
        loader::load_or_default(project_root)
    }

    /// Apply environment variable overrides (FRUITCART_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }

    /// Build the catalog described by `[catalog]` and apply `[discounts]`.
    ///
    /// Discounts for goods missing from the catalog are ignored.
    pub fn catalog(&self) -> PricingResult<Catalog> {
        let mut catalog = Catalog::new();
        for (name, price) in &self.catalog {
            let kind: GoodKind = name.parse()?;
            catalog.insert(kind, *price)?;
        }
        for (name, factor) in &self.discounts {
            let kind: GoodKind = name.parse()?;
            if !catalog.set_discount(kind, *factor) {
                tracing::warn!(%kind, "discount configured for a good that is not in the catalog");
            }
        }
        Ok(catalog)
    }

    pub fn promotion_rule(&self) -> PromotionRule {
        PromotionRule::new(self.promotion.threshold, self.promotion.amount)
    }
}
