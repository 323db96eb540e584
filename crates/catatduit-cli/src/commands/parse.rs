//! Parse command - interpret a free-text transaction message.

use clap::Args;
use console::style;
use tracing::info;

use catatduit_core::{format_rupiah, ParsedTransaction, TransactionParser};

use super::OutputFormat;

/// Arguments for the parse command.
#[derive(Args)]
pub struct ParseArgs {
    /// Message text, e.g. "beli bakso 15rb"
    #[arg(required = true)]
    text: Vec<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,
}

pub async fn run(args: ParseArgs) -> anyhow::Result<()> {
    let text = args.text.join(" ");
    info!("Parsing message: {}", text);

    let parser = TransactionParser::new();
    let parsed = parser.parse(&text);

    if parsed.needs_retry() {
        eprintln!(
            "{} No amount detected - this message should not be recorded as-is.",
            style("!").yellow()
        );
    }

    println!("{}", format_transaction(&parsed, args.format)?);
    Ok(())
}

fn format_transaction(parsed: &ParsedTransaction, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string(parsed)?),
        OutputFormat::Csv => {
            let mut wtr = csv::Writer::from_writer(vec![]);
            wtr.write_record(["intent", "amount", "category", "wallet", "confidence"])?;
            wtr.write_record([
                &serde_json::to_value(parsed.intent)?
                    .as_str()
                    .unwrap_or_default()
                    .to_string(),
                &parsed.amount.to_string(),
                &parsed.category,
                &parsed.wallet.clone().unwrap_or_default(),
                &format!("{:.2}", parsed.confidence),
            ])?;
            Ok(String::from_utf8(wtr.into_inner()?)?)
        }
        OutputFormat::Text => {
            let mut output = String::new();
            output.push_str(&format!("Intent:     {:?}\n", parsed.intent));
            output.push_str(&format!("Amount:     Rp {}\n", format_rupiah(parsed.amount)));
            output.push_str(&format!("Category:   {}\n", parsed.category));
            if let Some(wallet) = &parsed.wallet {
                output.push_str(&format!("Wallet:     {}\n", wallet));
            }
            output.push_str(&format!("Confidence: {:.0}%\n", parsed.confidence * 100.0));
            Ok(output)
        }
    }
}
