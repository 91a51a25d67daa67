//! Presentation Layer
//!
//! Output formatting (text/JSON) for the CLI. Argument parsing lives in the
//! binary's `cli` module.

pub mod output;

pub use output::{create_renderer, OutputFormat, Renderer};
