//! Vendor quote models and the vendor dispatch tag.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::ExtractionError;
use crate::extract::rules::{parse_money, parse_slash_date};

/// Closed set of quote vendors the dispatch table knows about.
///
/// Extending to a new vendor means adding a variant, an extractor, and a
/// `QuoteInfo` arm; there is no runtime registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Vendor {
    Accel,
    Ceildeck,
}

impl Vendor {
    /// All vendors, in selector display order.
    pub const ALL: [Vendor; 2] = [Vendor::Accel, Vendor::Ceildeck];

    /// Display name shown in the vendor selector.
    pub fn display_name(&self) -> &'static str {
        match self {
            Vendor::Accel => "Accel",
            Vendor::Ceildeck => "Ceildeck",
        }
    }
}

impl fmt::Display for Vendor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Vendor {
    type Err = ExtractionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "accel" => Ok(Vendor::Accel),
            "ceildeck" => Ok(Vendor::Ceildeck),
            _ => Err(ExtractionError::UnknownVendor(s.to_string())),
        }
    }
}

/// Quote fields from an Accel order acknowledgement.
///
/// Fields hold the matched text verbatim; absent fields stay `None` and are
/// rendered as a textual null only at the formatting boundary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccelQuote {
    /// Order acknowledgement number, e.g. "AB-123".
    pub quote_number: Option<String>,

    /// Grand total as printed, e.g. "1,234.56".
    pub quote_amount: Option<String>,

    /// Date ordered as printed, e.g. "3/4/25".
    pub quote_date: Option<String>,
}

impl AccelQuote {
    /// Whether all three fields have been found.
    pub fn is_complete(&self) -> bool {
        self.quote_number.is_some() && self.quote_amount.is_some() && self.quote_date.is_some()
    }

    /// Grand total as a decimal amount.
    pub fn amount(&self) -> Option<Decimal> {
        self.quote_amount.as_deref().and_then(parse_money)
    }

    /// Date ordered as a calendar date.
    pub fn date(&self) -> Option<NaiveDate> {
        self.quote_date.as_deref().and_then(parse_slash_date)
    }
}

/// Quote fields from a Ceildeck quote sheet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CeildeckQuote {
    /// Quote date as printed, e.g. "3/4/2025".
    pub date: Option<String>,

    /// Distributor info block, newline-joined.
    pub distributor: Option<String>,

    /// Total cost as printed, e.g. "500.00".
    pub total_cost: Option<String>,

    /// Delivery cost as printed, e.g. "50.00".
    pub delivery_cost: Option<String>,
}

impl CeildeckQuote {
    /// Total cost as a decimal amount.
    pub fn total(&self) -> Option<Decimal> {
        self.total_cost.as_deref().and_then(parse_money)
    }

    /// Delivery cost as a decimal amount.
    pub fn delivery(&self) -> Option<Decimal> {
        self.delivery_cost.as_deref().and_then(parse_money)
    }

    /// Quote date as a calendar date.
    pub fn date_parsed(&self) -> Option<NaiveDate> {
        self.date.as_deref().and_then(parse_slash_date)
    }
}

/// Tagged union over vendor-specific quote results.
///
/// Lets the presentation shell format any variant uniformly without knowing
/// which extractor produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "vendor", rename_all = "lowercase")]
pub enum QuoteInfo {
    Accel(AccelQuote),
    Ceildeck(CeildeckQuote),
}

impl QuoteInfo {
    /// Vendor tag of this result.
    pub fn vendor(&self) -> Vendor {
        match self {
            QuoteInfo::Accel(_) => Vendor::Accel,
            QuoteInfo::Ceildeck(_) => Vendor::Ceildeck,
        }
    }

    /// Names of the fields that were not found, in display order.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let slots: Vec<(&'static str, bool)> = match self {
            QuoteInfo::Accel(q) => vec![
                ("quote_number", q.quote_number.is_none()),
                ("quote_amount", q.quote_amount.is_none()),
                ("quote_date", q.quote_date.is_none()),
            ],
            QuoteInfo::Ceildeck(q) => vec![
                ("date", q.date.is_none()),
                ("distributor", q.distributor.is_none()),
                ("total_cost", q.total_cost.is_none()),
                ("delivery_cost", q.delivery_cost.is_none()),
            ],
        };

        slots
            .into_iter()
            .filter_map(|(name, missing)| missing.then_some(name))
            .collect()
    }
}
