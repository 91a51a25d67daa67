use std::path::PathBuf;

use clap::{Parser, Subcommand};
use fruitcart::GoodKind;

/// fruitcart - price a cart of fruit sold by weight
#[derive(Parser, Debug)]
#[command(name = "fruitcart")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Config file (default: ./fruitcart.toml, then the user config)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Use plain ASCII symbols in text output
    #[arg(long, global = true)]
    pub ascii: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Price a cart and print the breakdown
    Price {
        /// Quantity of a good, repeatable (e.g. --item apple=5)
        #[arg(short, long = "item", value_name = "KIND=QTY", value_parser = parse_item)]
        items: Vec<(GoodKind, f64)>,

        /// Discount factor for a good, repeatable (e.g. --discount strawberry=0.8)
        #[arg(short, long = "discount", value_name = "KIND=FACTOR", value_parser = parse_discount)]
        discounts: Vec<(GoodKind, f64)>,

        /// Apply the threshold promotion
        #[arg(long, overrides_with = "no_promotion")]
        promotion: bool,

        /// Do not apply the threshold promotion, even if configured
        #[arg(long, overrides_with = "promotion")]
        no_promotion: bool,
    },

    /// Show the catalog prices and discounts
    Catalog,
}

/// Resolve a `--flag` / `--no-flag` pair; `None` defers to config
pub fn flag_pair(yes: bool, no: bool) -> Option<bool> {
    match (yes, no) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}

fn parse_pair(s: &str, what: &str) -> Result<(GoodKind, f64), String> {
    let (kind, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected KIND={what}, got '{s}'"))?;
    let kind = kind.parse::<GoodKind>().map_err(|e| e.to_string())?;
    let value = value
        .trim()
        .parse::<f64>()
        .map_err(|_| format!("invalid {} '{}' for {}", what.to_lowercase(), value, kind))?;
    Ok((kind, value))
}

fn parse_item(s: &str) -> Result<(GoodKind, f64), String> {
    parse_pair(s, "QTY")
}

fn parse_discount(s: &str) -> Result<(GoodKind, f64), String> {
    parse_pair(s, "FACTOR")
}
