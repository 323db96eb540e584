//! CLI for CatatDuit - parse Indonesian transaction messages and receipts.

mod commands;

use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use commands::{demo, parse, scan};

/// CatatDuit - Extract structured transactions from Indonesian text and receipts
#[derive(Parser)]
#[command(name = "catatduit")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Path to extraction config file
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a free-text transaction message
    Parse(parse::ParseArgs),

    /// Extract a receipt from an OCR text dump
    Scan(scan::ScanArgs),

    /// Generate a synthetic demo receipt
    Demo(demo::DemoArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    // Execute command
    match cli.command {
        Commands::Parse(args) => parse::run(args).await,
        Commands::Scan(args) => scan::run(args, cli.config.as_deref()).await,
        Commands::Demo(args) => demo::run(args).await,
    }
}
