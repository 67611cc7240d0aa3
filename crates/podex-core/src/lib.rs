//! Core library for purchase-order PDF processing.
//!
//! This crate provides:
//! - PDF text extraction (per page, via lopdf and pdf-extract)
//! - Regex-driven field extraction for architectural title sheets and
//!   vendor quote documents (Accel, Ceildeck)
//! - A closed vendor dispatch table over a shared extractor capability
//! - Display formatting for the upload-panel output areas

pub mod error;
pub mod extract;
pub mod models;
pub mod pdf;
pub mod report;

pub use error::{ExtractionError, PdfError, PodexError, Result};
pub use extract::{
    configured_extractor, extract_quote, extractor_for, AccelExtractor, ArchitecturalExtractor,
    CeildeckExtractor, QuoteExtractor,
};
pub use models::address::SiteAddress;
pub use models::config::{ExtractionConfig, PodexConfig};
pub use models::quote::{AccelQuote, CeildeckQuote, QuoteInfo, Vendor};
pub use pdf::{DocumentText, PdfExtractor, PdfProcessor};
