//! Store address extraction from architectural title sheets.
//!
//! The title block on the first page carries the store marker, mall name,
//! space/suite marker and street address in a loosely fixed order. Each
//! search is anchored on the previous match so unrelated sheet text cannot
//! cross-match: the mall name is looked up only within a fixed window after
//! the store marker, and the street/city lines only within a window after
//! the space marker.

use tracing::{debug, info};

use super::rules::normalize::normalize;
use super::rules::patterns::{
    CITY_STATE_ZIP, MALL_PHRASE, SPACE_MARKER, STORE_MARKER, STORE_MARKER_ANY_CASE, STREET_ADDRESS,
};
use super::rules::proximity::{window_after, DEFAULT_WINDOW};
use super::Result;
use crate::error::ExtractionError;
use crate::models::address::SiteAddress;
use crate::pdf::DocumentText;

/// Extractor for architectural title sheets.
pub struct ArchitecturalExtractor {
    window: usize,
}

impl ArchitecturalExtractor {
    /// Create an extractor with the default proximity window.
    pub fn new() -> Self {
        Self {
            window: DEFAULT_WINDOW,
        }
    }

    /// Set the proximity window width in bytes.
    pub fn with_window(mut self, window: usize) -> Self {
        self.window = window;
        self
    }

    /// Extract the store address from a loaded document.
    ///
    /// Only the first page is consulted. Fails only when the document has
    /// no first-page text; individual fields degrade to `None`.
    pub fn extract(&self, doc: &DocumentText) -> Result<SiteAddress> {
        let first_page = doc.first_page().filter(|p| !p.trim().is_empty());
        let Some(text) = first_page else {
            return Err(ExtractionError::NoText);
        };

        info!("parsing architectural sheet ({} chars)", text.len());
        Ok(self.parse(text))
    }

    /// Run the title-block rules over raw first-page text.
    pub fn parse(&self, raw: &str) -> SiteAddress {
        let text = normalize(raw);

        // Discard everything before the first store marker so the later
        // searches stay within the title block.
        let text = match STORE_MARKER_ANY_CASE.find(&text) {
            Some(m) => &text[m.start()..],
            None => text.as_str(),
        };

        let store = STORE_MARKER.find(text);
        let mall_scope = match &store {
            Some(m) => window_after(text, m.end(), self.window),
            None => text,
        };
        let mall = MALL_PHRASE
            .captures(mall_scope)
            .map(|caps| caps[1].to_string());

        let space = SPACE_MARKER.find(text);
        let address_scope = match &space {
            Some(m) => window_after(text, m.end(), self.window),
            None => text,
        };
        let street = STREET_ADDRESS
            .captures(address_scope)
            .map(|caps| caps[1].to_string());
        let city_state_zip = CITY_STATE_ZIP
            .captures(address_scope)
            .map(|caps| caps[1].to_string());

        let address = SiteAddress {
            store: store.map(|m| m.as_str().to_string()),
            mall,
            space: space.map(|m| m.as_str().to_string()),
            street,
            city_state_zip,
        };

        if !address.is_complete() {
            debug!("fields not found: {}", address.missing_fields().join(", "));
        }

        address
    }
}

impl Default for ArchitecturalExtractor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const TITLE_SHEET: &str = "PROJECT DATA  A-101  TENANT IMPROVEMENT FOR\n\
        STORE # 1234  Northbrook Court  E 1.2\n\
        SUITE #A12  500 North Michigan Avenue,\n\
        Chicago, IL 60611  ISSUED FOR PERMIT";

    #[test]
    fn test_full_title_sheet() {
        let address = ArchitecturalExtractor::new().parse(TITLE_SHEET);

        assert_eq!(address.store.as_deref(), Some("STORE # 1234"));
        assert_eq!(address.mall.as_deref(), Some("Northbrook Court"));
        assert_eq!(address.space.as_deref(), Some("SUITE #A12"));
        assert_eq!(address.street.as_deref(), Some("500 North Michigan Avenue"));
        assert_eq!(address.city_state_zip.as_deref(), Some("Chicago, IL 60611"));
        assert!(address.is_complete());
    }

    #[test]
    fn test_missing_store_marker() {
        let address = ArchitecturalExtractor::new().parse("no markers on this sheet at all");
        assert_eq!(address.store, None);
    }

    #[test]
    fn test_mall_outside_window_is_not_matched() {
        // Store marker followed by 300+ bytes of non-matching filler before
        // the mall name: the windowed search must not reach it.
        let filler = "#### ".repeat(70);
        let text = format!("STORE # 77 {}Northbrook Court SUITE #B2", filler);

        let address = ArchitecturalExtractor::new().parse(&text);
        assert_eq!(address.store.as_deref(), Some("STORE # 77"));
        assert_eq!(address.mall, None);
    }

    #[test]
    fn test_narrow_window_configurable() {
        let address = ArchitecturalExtractor::new()
            .with_window(1)
            .parse("STORE # 1234 Northbrook Court SUITE #A12");

        // A 1-byte window after the marker cannot hold the mall name
        assert_eq!(address.mall, None);
    }

    #[test]
    fn test_text_before_store_marker_is_ignored() {
        let text = "Oakbrook Center 100 Main Street STORE # 9 Northbrook Court";
        let address = ArchitecturalExtractor::new().parse(text);

        assert_eq!(address.mall.as_deref(), Some("Northbrook Court"));
    }

    #[test]
    fn test_extract_rejects_empty_first_page() {
        let extractor = ArchitecturalExtractor::new();

        let doc = DocumentText::from_pages(vec![String::new()]);
        assert!(matches!(extractor.extract(&doc), Err(ExtractionError::NoText)));

        let doc = DocumentText::from_pages(vec![]);
        assert!(matches!(extractor.extract(&doc), Err(ExtractionError::NoText)));
    }

    #[test]
    fn test_extract_uses_first_page_only() {
        let doc = DocumentText::from_pages(vec![
            "STORE # 55 Westfield Plaza SUITE #C3 120 Oak Street, Springfield, IL 62704".to_string(),
            "STORE # 99 Wrong Mall".to_string(),
        ]);

        let address = ArchitecturalExtractor::new().extract(&doc).unwrap();
        assert_eq!(address.store.as_deref(), Some("STORE # 55"));
        assert_eq!(address.mall.as_deref(), Some("Westfield Plaza"));
    }
}
