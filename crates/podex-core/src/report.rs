//! Display formatting for extraction results.
//!
//! This is the formatting boundary: every sentinel string and the brand
//! label live here. The result models themselves only ever hold matched
//! text or `None`, so nothing downstream can mistake a sentinel for data.

use crate::models::address::SiteAddress;
use crate::models::quote::QuoteInfo;

/// Sentinel shown for an unmatched Ceildeck field.
pub const NOT_FOUND: &str = "Not Found";

/// Textual null shown for an unmatched Accel field.
pub const NULL_FIELD: &str = "null";

/// Brand label prefixed to the store identifier.
pub const DEFAULT_BRAND_LABEL: &str = "JOURNEYS";

const STORE_SENTINEL: &str = "ERROR_store_not_found";
const MALL_SENTINEL: &str = "ERROR_mall_not_found";
const SPACE_SENTINEL: &str = "ERROR_space_not_found";
const ADDRESS_SENTINEL: &str = "ERROR_address_not_found";
const CITY_STATE_SENTINEL: &str = "ERROR_city_state_not_found";

/// Format a site address as the multi-line display block.
pub fn render_address(address: &SiteAddress) -> String {
    render_address_with_brand(address, DEFAULT_BRAND_LABEL)
}

/// Format a site address with a custom brand label on the store line.
pub fn render_address_with_brand(address: &SiteAddress, brand: &str) -> String {
    let parts = [
        address
            .store
            .as_deref()
            .map(|store| format!("{} {}", brand, store))
            .unwrap_or_else(|| STORE_SENTINEL.to_string()),
        address
            .mall
            .clone()
            .unwrap_or_else(|| MALL_SENTINEL.to_string()),
        address
            .space
            .clone()
            .unwrap_or_else(|| SPACE_SENTINEL.to_string()),
        address
            .street
            .clone()
            .unwrap_or_else(|| ADDRESS_SENTINEL.to_string()),
        address
            .city_state_zip
            .clone()
            .unwrap_or_else(|| CITY_STATE_SENTINEL.to_string()),
    ];

    // Sentinels are never empty, so in practice no line is dropped.
    parts
        .iter()
        .filter(|part| !part.is_empty())
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format quote info with the vendor-specific display template.
pub fn render_quote(info: &QuoteInfo) -> String {
    match info {
        QuoteInfo::Accel(quote) => format!(
            "Quote Number: {}\nQuote Amount: ${}",
            quote.quote_number.as_deref().unwrap_or(NULL_FIELD),
            quote.quote_amount.as_deref().unwrap_or(NULL_FIELD),
        ),
        QuoteInfo::Ceildeck(quote) => format!(
            "Date: {}\nDistributor Info:\n{}\n\nTotal Cost: ${}\nDelivery Cost: ${}",
            quote.date.as_deref().unwrap_or(NOT_FOUND),
            quote.distributor.as_deref().unwrap_or(NOT_FOUND),
            quote.total_cost.as_deref().unwrap_or(NOT_FOUND),
            quote.delivery_cost.as_deref().unwrap_or(NOT_FOUND),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::quote::{AccelQuote, CeildeckQuote};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_render_complete_address() {
        let address = SiteAddress {
            store: Some("STORE # 1234".to_string()),
            mall: Some("Northbrook Court".to_string()),
            space: Some("SUITE #A12".to_string()),
            street: Some("500 North Michigan Avenue".to_string()),
            city_state_zip: Some("Chicago, IL 60611".to_string()),
        };

        assert_eq!(
            render_address(&address),
            "JOURNEYS STORE # 1234\n\
             Northbrook Court\n\
             SUITE #A12\n\
             500 North Michigan Avenue\n\
             Chicago, IL 60611"
        );
    }

    #[test]
    fn test_render_address_sentinels() {
        let rendered = render_address(&SiteAddress::default());

        assert_eq!(
            rendered,
            "ERROR_store_not_found\n\
             ERROR_mall_not_found\n\
             ERROR_space_not_found\n\
             ERROR_address_not_found\n\
             ERROR_city_state_not_found"
        );
    }

    #[test]
    fn test_render_address_custom_brand() {
        let address = SiteAddress {
            store: Some("STORE # 9".to_string()),
            ..Default::default()
        };

        let rendered = render_address_with_brand(&address, "UNDERGROUND");
        assert!(rendered.starts_with("UNDERGROUND STORE # 9\n"));
    }

    #[test]
    fn test_render_accel_quote() {
        let info = QuoteInfo::Accel(AccelQuote {
            quote_number: Some("AB-123".to_string()),
            quote_amount: Some("1,234.56".to_string()),
            quote_date: Some("3/4/25".to_string()),
        });

        assert_eq!(
            render_quote(&info),
            "Quote Number: AB-123\nQuote Amount: $1,234.56"
        );
    }

    #[test]
    fn test_render_accel_quote_nulls() {
        let info = QuoteInfo::Accel(AccelQuote::default());
        assert_eq!(render_quote(&info), "Quote Number: null\nQuote Amount: $null");
    }

    #[test]
    fn test_render_ceildeck_quote() {
        let info = QuoteInfo::Ceildeck(CeildeckQuote {
            date: Some("3/4/2025".to_string()),
            distributor: Some("Acme Co\n123 Main St".to_string()),
            total_cost: Some("500.00".to_string()),
            delivery_cost: None,
        });

        assert_eq!(
            render_quote(&info),
            "Date: 3/4/2025\n\
             Distributor Info:\n\
             Acme Co\n\
             123 Main St\n\
             \n\
             Total Cost: $500.00\n\
             Delivery Cost: $Not Found"
        );
    }
}
