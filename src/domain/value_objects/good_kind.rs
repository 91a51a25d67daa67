//! GoodKind value object - identifies a kind of weighted good

use std::str::FromStr;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::PricingError;

/// Kind of good sold by weight
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum GoodKind {
    Apple,
    Strawberry,
    Mango,
}

impl GoodKind {
    /// Every kind, in declaration order
    pub const ALL: [GoodKind; 3] = [GoodKind::Apple, GoodKind::Strawberry, GoodKind::Mango];

    /// Lowercase name used in config files and on the command line
    pub fn name(&self) -> &'static str {
        match self {
            GoodKind::Apple => "apple",
            GoodKind::Strawberry => "strawberry",
            GoodKind::Mango => "mango",
        }
    }
}

impl std::fmt::Display for GoodKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for GoodKind {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        <GoodKind as ValueEnum>::from_str(s.trim(), true).map_err(|_| {
            PricingError::UnknownGoodKind {
                name: s.to_string(),
            }
        })
    }
}
