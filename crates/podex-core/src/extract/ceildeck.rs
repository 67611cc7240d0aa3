//! Quote extraction for Ceildeck quote sheets.
//!
//! Ceildeck quotes are scanned as one block of text: the date, total and
//! delivery figures each come from a single case-insensitive search. The
//! distributor info starts on the line carrying the distributor marker and
//! a restated `TOTAL $` figure; the address lines that follow are captured
//! until a blank line or the configured line cap, whichever comes first.

use tracing::debug;

use super::rules::patterns::{
    CEILDECK_DATE, CEILDECK_DELIVERY, CEILDECK_TOTAL, DISTRIBUTOR_LINE,
};
use super::{QuoteExtractor, Result};
use crate::error::ExtractionError;
use crate::models::quote::{CeildeckQuote, QuoteInfo, Vendor};
use crate::pdf::DocumentText;

/// Default cap on distributor continuation lines.
pub const DEFAULT_DISTRIBUTOR_MAX_LINES: usize = 6;

/// Extractor for Ceildeck quote sheets.
pub struct CeildeckExtractor {
    max_distributor_lines: usize,
}

impl CeildeckExtractor {
    /// Create an extractor with the default distributor line cap.
    pub fn new() -> Self {
        Self {
            max_distributor_lines: DEFAULT_DISTRIBUTOR_MAX_LINES,
        }
    }

    /// Set the maximum number of continuation lines captured after the
    /// distributor marker line.
    pub fn with_max_distributor_lines(mut self, max: usize) -> Self {
        self.max_distributor_lines = max;
        self
    }

    /// Run the quote rules over the full document text.
    pub fn parse(&self, text: &str) -> CeildeckQuote {
        let date = CEILDECK_DATE.captures(text).map(|caps| caps[1].to_string());
        let total_cost = CEILDECK_TOTAL
            .captures(text)
            .map(|caps| caps[1].to_string());
        let delivery_cost = CEILDECK_DELIVERY
            .captures(text)
            .map(|caps| caps[1].to_string());
        let distributor = self.distributor_block(text);

        CeildeckQuote {
            date,
            distributor,
            total_cost,
            delivery_cost,
        }
    }

    fn distributor_block(&self, text: &str) -> Option<String> {
        let mut lines = text.lines();
        let mut block: Vec<&str> = Vec::new();

        for line in &mut lines {
            if let Some(caps) = DISTRIBUTOR_LINE.captures(line) {
                block.push(caps.get(1).map(|m| m.as_str().trim()).unwrap_or(""));
                break;
            }
        }

        if block.is_empty() {
            // marker line not found anywhere
            return None;
        }

        for line in lines.take(self.max_distributor_lines) {
            let line = line.trim();
            if line.is_empty() {
                break;
            }
            block.push(line);
        }

        debug!("captured {} distributor line(s)", block.len());

        let joined = block.join("\n").trim().to_string();
        if joined.is_empty() { None } else { Some(joined) }
    }
}

impl Default for CeildeckExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl QuoteExtractor for CeildeckExtractor {
    fn vendor(&self) -> Vendor {
        Vendor::Ceildeck
    }

    fn extract(&self, doc: &DocumentText) -> Result<QuoteInfo> {
        if !doc.has_text() {
            return Err(ExtractionError::NoText);
        }
        Ok(QuoteInfo::Ceildeck(self.parse(&doc.joined())))
    }
}
