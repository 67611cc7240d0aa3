//! Field extraction module.

mod accel;
mod architectural;
mod ceildeck;
pub mod rules;

pub use accel::AccelExtractor;
pub use architectural::ArchitecturalExtractor;
pub use ceildeck::{CeildeckExtractor, DEFAULT_DISTRIBUTOR_MAX_LINES};

use crate::error::ExtractionError;
use crate::models::config::ExtractionConfig;
use crate::models::quote::{QuoteInfo, Vendor};
use crate::pdf::DocumentText;

/// Result type for extraction operations.
pub type Result<T> = std::result::Result<T, ExtractionError>;

/// Shared capability of the vendor quote extractors.
///
/// Each vendor implements the same extract-quote-info contract and returns
/// its arm of the [`QuoteInfo`] union, so callers format results without
/// knowing which extractor ran.
pub trait QuoteExtractor {
    /// The vendor this extractor handles.
    fn vendor(&self) -> Vendor;

    /// Extract quote fields from a loaded document.
    ///
    /// Fails only when the document has no extractable text; individual
    /// fields degrade to `None`.
    fn extract(&self, doc: &DocumentText) -> Result<QuoteInfo>;
}

/// Dispatch table: map a vendor tag to its extractor.
///
/// Closed set; adding a vendor means a new variant, a new extractor and a
/// new arm here.
pub fn extractor_for(vendor: Vendor) -> Box<dyn QuoteExtractor> {
    match vendor {
        Vendor::Accel => Box::new(AccelExtractor::new()),
        Vendor::Ceildeck => Box::new(CeildeckExtractor::new()),
    }
}

/// Dispatch with extraction settings applied.
pub fn configured_extractor(vendor: Vendor, config: &ExtractionConfig) -> Box<dyn QuoteExtractor> {
    match vendor {
        Vendor::Accel => Box::new(AccelExtractor::new()),
        Vendor::Ceildeck => Box::new(
            CeildeckExtractor::new().with_max_distributor_lines(config.distributor_max_lines),
        ),
    }
}

/// Extract quote info from a document with the extractor for `vendor`.
pub fn extract_quote(vendor: Vendor, doc: &DocumentText) -> Result<QuoteInfo> {
    extractor_for(vendor).extract(doc)
}

#[cfg(test)]
mod tests {
    use super::*;

    // A document carrying both vendors' markers; each extractor must only
    // ever see its own.
    fn mixed_document() -> DocumentText {
        DocumentText::from_pages(vec![
            "Order Acknowledgement # AB-123\n\
             Grand Total (Payable in U.S. Dollars): $1,234.56\n\
             Date Ordered: 3/4/25\n\
             DATE: 9/9/2024\n\
             TOTAL $500.00\n\
             DELIVERY $50.00"
                .to_string(),
        ])
    }

    #[test]
    fn test_dispatch_selects_accel() {
        let result = extract_quote(Vendor::Accel, &mixed_document()).unwrap();

        let QuoteInfo::Accel(quote) = result else {
            panic!("Accel dispatch produced a non-Accel result");
        };
        assert_eq!(quote.quote_number.as_deref(), Some("AB-123"));
    }

    #[test]
    fn test_dispatch_selects_ceildeck() {
        let result = extract_quote(Vendor::Ceildeck, &mixed_document()).unwrap();

        let QuoteInfo::Ceildeck(quote) = result else {
            panic!("Ceildeck dispatch produced a non-Ceildeck result");
        };
        assert_eq!(quote.date.as_deref(), Some("9/9/2024"));
        assert_eq!(quote.total_cost.as_deref(), Some("500.00"));
    }

    #[test]
    fn test_dispatch_covers_every_vendor() {
        for vendor in Vendor::ALL {
            assert_eq!(extractor_for(vendor).vendor(), vendor);
        }
    }
}
