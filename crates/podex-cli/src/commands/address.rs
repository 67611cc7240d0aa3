//! Address command - extract the store address from an architectural PDF.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use tracing::{debug, info};

use podex_core::extract::ArchitecturalExtractor;
use podex_core::report;

use super::quote::OutputFormat;

/// Arguments for the address command.
#[derive(Args)]
pub struct AddressArgs {
    /// Input architectural PDF
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: OutputFormat,
}

pub fn run(args: AddressArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = super::load_config(config_path)?;

    info!("Processing file: {}", args.input.display());
    let doc = super::load_document(&args.input)?;

    let extractor = ArchitecturalExtractor::new().with_window(config.extraction.proximity_window);
    let address = extractor.extract(&doc)?;

    let output = match args.format {
        OutputFormat::Json => serde_json::to_string_pretty(&address)?,
        OutputFormat::Text => {
            report::render_address_with_brand(&address, &config.extraction.brand_label)
        }
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

    if !address.is_complete() {
        eprintln!("{}", style("Fields not found:").yellow());
        for field in address.missing_fields() {
            eprintln!("  - {}", field);
        }
    }

    debug!("Total processing time: {:?}", start.elapsed());

    Ok(())
}
