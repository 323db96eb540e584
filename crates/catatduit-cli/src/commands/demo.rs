//! Demo command - generate a synthetic receipt without any OCR engine.

use clap::Args;
use console::style;
use tracing::info;

use catatduit_core::FallbackGenerator;

use super::{scan, OutputFormat};

/// Arguments for the demo command.
#[derive(Args)]
pub struct DemoArgs {
    /// RNG seed, for reproducible output
    #[arg(short, long)]
    seed: Option<u64>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,
}

pub async fn run(args: DemoArgs) -> anyhow::Result<()> {
    info!("Generating demo receipt");

    let mut generator = match args.seed {
        Some(seed) => FallbackGenerator::from_seed(seed),
        None => FallbackGenerator::new(),
    };
    let receipt = generator.generate();

    eprintln!(
        "{} Demo data only. Do not record it as a real transaction.",
        style("!").yellow()
    );

    println!("{}", scan::format_receipt(&receipt, args.format)?);
    Ok(())
}
