//! fruitcart CLI - price a cart of fruit sold by weight
//!
//! Usage: fruitcart <COMMAND>
//!
//! Commands:
//!   price    Price a cart and print the breakdown
//!   catalog  Show the catalog prices and discounts

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{flag_pair, Cli, Commands};
use fruitcart::presentation::{create_renderer, OutputFormat};
use fruitcart::Verbosity;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let cwd = std::env::current_dir()?;
    let (config, report) = commands::load_config(cli.config.as_deref(), &cwd)?;

    init_tracing(config.output.verbosity.raised_by(cli.verbose));
    commands::report_config(&report);

    let format = if cli.json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };
    let renderer = create_renderer(format, !cli.ascii);

    match cli.command {
        Commands::Price {
            items,
            discounts,
            promotion,
            no_promotion,
        } => commands::cmd_price(
            &config,
            &items,
            &discounts,
            flag_pair(promotion, no_promotion),
            renderer.as_ref(),
        ),
        Commands::Catalog => commands::cmd_catalog(&config, renderer.as_ref()),
    }
}

/// Log to stderr; `RUST_LOG` wins over the configured verbosity
fn init_tracing(verbosity: Verbosity) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(verbosity.filter_directive()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
