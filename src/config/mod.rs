//! Configuration module for fruitcart
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (FRUITCART_*)
//! 3. Explicit `--config` file
//! 4. Project config (./fruitcart.toml)
//! 5. User config (<config dir>/fruitcart/config.toml)
//! 6. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{ConfigLoadReport, ConfigWarning, PROJECT_CONFIG_FILE};
pub use types::{Config, OutputConfig, PromotionConfig, Verbosity};
