//! WASM bindings for purchase-order PDF extraction.
//!
//! This crate backs the browser upload form: the hosting page owns the file
//! input, vendor selector and output areas, and calls into these bindings
//! with the uploaded bytes. Errors are returned as `JsValue` messages for
//! the page's inline error banner; the other panel is unaffected.

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use wasm_bindgen::prelude::*;

use podex_core::extract::{configured_extractor, ArchitecturalExtractor, QuoteExtractor};
use podex_core::models::config::ExtractionConfig;
use podex_core::models::quote::Vendor;
use podex_core::pdf::{DocumentText, PdfExtractor, PdfProcessor};
use podex_core::report;

/// Initialize panic hook for better error messages in console.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Version information.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Vendor display names for the selector, in display order.
#[wasm_bindgen]
pub fn vendors() -> Vec<String> {
    Vendor::ALL
        .iter()
        .map(|v| v.display_name().to_string())
        .collect()
}

fn load_pdf(data: &[u8]) -> Result<DocumentText, JsValue> {
    let mut extractor = PdfExtractor::new();
    extractor
        .load(data)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    extractor
        .page_texts()
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

fn parse_vendor(vendor: &str) -> Result<Vendor, JsValue> {
    vendor
        .parse::<Vendor>()
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Extract the store address from an uploaded architectural PDF and format
/// it for the read-only output area.
#[wasm_bindgen]
pub fn extract_site_address(data: &[u8]) -> Result<String, JsValue> {
    let doc = load_pdf(data)?;
    let address = ArchitecturalExtractor::new()
        .extract(&doc)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    Ok(report::render_address(&address))
}

/// Extract the store address from already-extracted page text.
#[wasm_bindgen]
pub fn extract_site_address_from_text(text: &str) -> Result<String, JsValue> {
    let doc = DocumentText::from_pages(vec![text.to_string()]);
    let address = ArchitecturalExtractor::new()
        .extract(&doc)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    Ok(report::render_address(&address))
}

/// Extract quote info from an uploaded vendor quote PDF and format it with
/// the vendor display template.
#[wasm_bindgen]
pub fn extract_quote_text(vendor: &str, data: &[u8]) -> Result<String, JsValue> {
    let vendor = parse_vendor(vendor)?;
    let doc = load_pdf(data)?;
    let quote = configured_extractor(vendor, &ExtractionConfig::default())
        .extract(&doc)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    Ok(report::render_quote(&quote))
}

/// Extract quote info from an uploaded vendor quote PDF as a structured
/// object (tagged by vendor).
#[wasm_bindgen]
pub fn extract_quote_info(vendor: &str, data: &[u8]) -> Result<JsValue, JsValue> {
    let vendor = parse_vendor(vendor)?;
    let doc = load_pdf(data)?;
    let quote = configured_extractor(vendor, &ExtractionConfig::default())
        .extract(&doc)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    serde_wasm_bindgen::to_value(&quote).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Extract quote info from already-extracted page text.
#[wasm_bindgen]
pub fn extract_quote_from_text(vendor: &str, text: &str) -> Result<JsValue, JsValue> {
    let vendor = parse_vendor(vendor)?;
    let doc = DocumentText::from_pages(vec![text.to_string()]);
    let quote = configured_extractor(vendor, &ExtractionConfig::default())
        .extract(&doc)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    serde_wasm_bindgen::to_value(&quote).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Extract quote info plus the names of any fields that were not found.
#[wasm_bindgen]
pub fn extract_quote_with_missing(vendor: &str, data: &[u8]) -> Result<JsValue, JsValue> {
    let vendor = parse_vendor(vendor)?;
    let doc = load_pdf(data)?;
    let quote = configured_extractor(vendor, &ExtractionConfig::default())
        .extract(&doc)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    #[derive(serde::Serialize)]
    struct ExtractResult {
        quote: podex_core::models::quote::QuoteInfo,
        missing_fields: Vec<&'static str>,
    }

    let output = ExtractResult {
        missing_fields: quote.missing_fields(),
        quote,
    };

    serde_wasm_bindgen::to_value(&output).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Architectural sheet extractor class for browser use.
#[wasm_bindgen]
pub struct SheetExtractor {
    window: usize,
}

#[wasm_bindgen]
impl SheetExtractor {
    /// Create a new sheet extractor with the default proximity window.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            window: podex_core::extract::rules::DEFAULT_WINDOW,
        }
    }

    /// Set the proximity window width in bytes.
    #[wasm_bindgen]
    pub fn set_window(&mut self, window: usize) {
        self.window = window;
    }

    /// Extract and format the store address from uploaded PDF bytes.
    #[wasm_bindgen]
    pub fn extract(&self, data: &[u8]) -> Result<String, JsValue> {
        let doc = load_pdf(data)?;
        let address = ArchitecturalExtractor::new()
            .with_window(self.window)
            .extract(&doc)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(report::render_address(&address))
    }

    /// Extract the store address as a structured object.
    #[wasm_bindgen]
    pub fn extract_json(&self, data: &[u8]) -> Result<JsValue, JsValue> {
        let doc = load_pdf(data)?;
        let address = ArchitecturalExtractor::new()
            .with_window(self.window)
            .extract(&doc)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        serde_wasm_bindgen::to_value(&address).map_err(|e| JsValue::from_str(&e.to_string()))
    }
}

impl Default for SheetExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Utilities for working with quote values.
#[wasm_bindgen]
pub struct QuoteUtils;

#[wasm_bindgen]
impl QuoteUtils {
    /// Format an amount with US thousands separators (1,234.56).
    #[wasm_bindgen]
    pub fn format_amount(amount: f64) -> String {
        match Decimal::from_f64(amount) {
            Some(d) => podex_core::extract::rules::format_money(d),
            None => format!("{:.2}", amount),
        }
    }

    /// Parse an amount string like "1,234.56" into a float.
    #[wasm_bindgen]
    pub fn parse_amount(amount: &str) -> Option<f64> {
        podex_core::extract::rules::parse_money(amount)
            .map(|d| d.to_string().parse().unwrap_or(0.0))
    }

    /// Parse a slash date like "3/4/25" into ISO format.
    #[wasm_bindgen]
    pub fn parse_date(date: &str) -> Option<String> {
        podex_core::extract::rules::parse_slash_date(date).map(|d| d.to_string())
    }
}
