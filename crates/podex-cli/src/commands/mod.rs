//! CLI subcommands.

pub mod address;
pub mod batch;
pub mod config;
pub mod quote;

use std::path::Path;

use podex_core::models::config::PodexConfig;
use podex_core::pdf::{DocumentText, PdfExtractor, PdfProcessor};

/// Load configuration from an explicit path, or fall back to the default
/// location if a file exists there, or built-in defaults otherwise.
pub(crate) fn load_config(config_path: Option<&str>) -> anyhow::Result<PodexConfig> {
    if let Some(path) = config_path {
        return Ok(PodexConfig::from_file(Path::new(path))?);
    }

    let default_path = config::default_config_path();
    if default_path.exists() {
        return Ok(PodexConfig::from_file(&default_path)?);
    }

    Ok(PodexConfig::default())
}

/// Read a PDF from disk and extract its per-page text.
///
/// Only `.pdf` files are accepted, mirroring the upload filter.
pub(crate) fn load_document(path: &Path) -> anyhow::Result<DocumentText> {
    if !path.exists() {
        anyhow::bail!("Input file not found: {}", path.display());
    }

    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();
    if extension != "pdf" {
        anyhow::bail!("Unsupported file format: {}", extension);
    }

    let data = std::fs::read(path)?;
    let mut extractor = PdfExtractor::new();
    extractor.load(&data)?;
    Ok(extractor.page_texts()?)
}
