//! CLI command implementations.

pub mod demo;
pub mod parse;
pub mod scan;

use clap::ValueEnum;

/// Output format shared by the commands.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// CSV output
    Csv,
    /// Plain text summary
    Text,
}
