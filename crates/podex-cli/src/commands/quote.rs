//! Quote command - extract quote info from a single vendor quote PDF.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use tracing::{debug, info};

use podex_core::extract::{configured_extractor, QuoteExtractor};
use podex_core::models::quote::Vendor;
use podex_core::report;

/// Arguments for the quote command.
#[derive(Args)]
pub struct QuoteArgs {
    /// Input quote PDF
    #[arg(required = true)]
    input: PathBuf,

    /// Quote vendor (accel, ceildeck)
    #[arg(short = 'V', long)]
    vendor: String,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: OutputFormat,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// Plain text per the vendor display template
    Text,
}

pub fn run(args: QuoteArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = super::load_config(config_path)?;

    let vendor: Vendor = args.vendor.parse()?;

    info!("Processing {} quote: {}", vendor, args.input.display());
    let doc = super::load_document(&args.input)?;

    let quote = configured_extractor(vendor, &config.extraction).extract(&doc)?;

    let output = match args.format {
        OutputFormat::Json => serde_json::to_string_pretty(&quote)?,
        OutputFormat::Text => report::render_quote(&quote),
    };

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    if !quote.missing_fields().is_empty() {
        eprintln!("{}", style("Fields not found:").yellow());
        for field in quote.missing_fields() {
            eprintln!("  - {}", field);
        }
    }

    debug!("Total processing time: {:?}", start.elapsed());

    Ok(())
}
