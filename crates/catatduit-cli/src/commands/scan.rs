//! Scan command - extract structured receipt data from an OCR text dump.

use std::path::Path;

use clap::Args;
use console::style;
use tracing::{debug, info};

use catatduit_core::{
    format_rupiah, ExtractionConfig, FallbackGenerator, ReceiptData, ReceiptTextParser,
};

use super::OutputFormat;

/// Arguments for the scan command.
#[derive(Args)]
pub struct ScanArgs {
    /// Path to a text file with the recognized receipt lines
    input: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Emit a synthetic demo receipt when extraction comes up empty
    #[arg(long)]
    fallback: bool,
}

pub async fn run(args: ScanArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let text = std::fs::read_to_string(&args.input)
        .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", args.input, e))?;

    let config = match config_path {
        Some(path) => {
            debug!("Loading extraction config from {}", path);
            ExtractionConfig::from_file(Path::new(path))?
        }
        None => ExtractionConfig::default(),
    };

    info!("Extracting receipt from {}", args.input);
    let parser = ReceiptTextParser::new().with_config(config);
    let mut receipt = parser.parse(&text);

    if receipt.needs_manual_entry() {
        if args.fallback {
            eprintln!(
                "{} Nothing usable in the input, emitting a demo receipt. Do not record it.",
                style("!").yellow()
            );
            receipt = FallbackGenerator::new().generate();
        } else {
            eprintln!(
                "{} Extraction came up empty, the amounts below need manual review.",
                style("!").yellow()
            );
        }
    }

    println!("{}", format_receipt(&receipt, args.format)?);
    Ok(())
}

pub(crate) fn format_receipt(receipt: &ReceiptData, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string(receipt)?),
        OutputFormat::Csv => {
            let mut wtr = csv::Writer::from_writer(vec![]);
            wtr.write_record(["name", "quantity", "price", "category"])?;
            for item in &receipt.items {
                wtr.write_record([
                    &item.name,
                    &item.quantity.to_string(),
                    &item.price.to_string(),
                    &item.category,
                ])?;
            }
            Ok(String::from_utf8(wtr.into_inner()?)?)
        }
        OutputFormat::Text => {
            let mut output = String::new();
            output.push_str(&format!(
                "Merchant:   {}\n",
                receipt.merchant.as_deref().unwrap_or("(unknown)")
            ));
            output.push_str(&format!("Total:      Rp {}\n", format_rupiah(receipt.total)));
            if let Some(date) = &receipt.date {
                output.push_str(&format!("Date:       {}\n", date));
            }
            output.push_str(&format!("Confidence: {:.0}%\n", receipt.confidence * 100.0));
            if !receipt.items.is_empty() {
                output.push_str("Items:\n");
                for item in &receipt.items {
                    output.push_str(&format!(
                        "  {} x{} @ Rp {} ({})\n",
                        item.name,
                        item.quantity,
                        format_rupiah(item.price),
                        item.category
                    ));
                }
            }
            Ok(output)
        }
    }
}
