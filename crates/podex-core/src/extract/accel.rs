//! Quote extraction for Accel order acknowledgements.

use tracing::debug;

use super::rules::patterns::{DATE_ORDERED, GRAND_TOTAL, ORDER_ACK_NUMBER};
use super::{QuoteExtractor, Result};
use crate::error::ExtractionError;
use crate::models::quote::{AccelQuote, QuoteInfo, Vendor};
use crate::pdf::DocumentText;

/// Extractor for Accel order acknowledgements.
///
/// Pages are scanned in document order; a later match overwrites an earlier
/// one per field, and scanning stops as soon as all three fields are
/// populated.
pub struct AccelExtractor;

impl AccelExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Scan page texts in order for the three quote fields.
    pub fn parse_pages<'a>(&self, pages: impl IntoIterator<Item = &'a str>) -> AccelQuote {
        let mut quote = AccelQuote::default();

        for (index, page) in pages.into_iter().enumerate() {
            if page.trim().is_empty() {
                continue;
            }

            if let Some(caps) = ORDER_ACK_NUMBER.captures(page) {
                quote.quote_number = Some(caps[1].to_string());
            }
            if let Some(caps) = GRAND_TOTAL.captures(page) {
                quote.quote_amount = Some(caps[1].to_string());
            }
            if let Some(caps) = DATE_ORDERED.captures(page) {
                quote.quote_date = Some(caps[1].to_string());
            }

            if quote.is_complete() {
                debug!("all quote fields found by page {}", index + 1);
                break;
            }
        }

        quote
    }
}

impl Default for AccelExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl QuoteExtractor for AccelExtractor {
    fn vendor(&self) -> Vendor {
        Vendor::Accel
    }

    fn extract(&self, doc: &DocumentText) -> Result<QuoteInfo> {
        if !doc.has_text() {
            return Err(ExtractionError::NoText);
        }
        Ok(QuoteInfo::Accel(self.parse_pages(doc.pages())))
    }
}
