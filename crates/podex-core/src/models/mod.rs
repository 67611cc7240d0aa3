//! Data models for extraction results and configuration.

pub mod address;
pub mod config;
pub mod quote;

pub use address::SiteAddress;
pub use config::{ExtractionConfig, PodexConfig};
pub use quote::{AccelQuote, CeildeckQuote, QuoteInfo, Vendor};
