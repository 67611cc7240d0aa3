//! Common regex patterns for purchase-order field extraction.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Normalization
    pub static ref WHITESPACE_RUN: Regex = Regex::new(r"\s+").unwrap();

    // Drawing sheet codes (A-101, E 1.2) that bleed into title-block text
    pub static ref NOISE_TOKEN: Regex = Regex::new(
        r"\b(?:[A-Z]-\d{3}[A-Z]?|[A-Z] \d\.\d)\b"
    ).unwrap();

    // Architectural title block
    pub static ref STORE_MARKER_ANY_CASE: Regex = Regex::new(
        r"(?i)STORE\s*#\s*\d+"
    ).unwrap();

    pub static ref STORE_MARKER: Regex = Regex::new(
        r"S(?i:TORE)\s*#\s*\d+"
    ).unwrap();

    pub static ref SPACE_MARKER: Regex = Regex::new(
        r"(?:S(?i:pace)|S(?i:uite)) #?\w+"
    ).unwrap();

    // 1-5 title-cased words, e.g. a mall name
    pub static ref MALL_PHRASE: Regex = Regex::new(
        r"\b([A-Z][a-z]+(?: (?:[a-z]+|[A-Z][a-z]+)){0,4})\b"
    ).unwrap();

    pub static ref STREET_ADDRESS: Regex = Regex::new(
        r"(\d{1,5}(?: [A-Z]\.)?(?: [A-Z][a-z]{1,15}){1,3})"
    ).unwrap();

    pub static ref CITY_STATE_ZIP: Regex = Regex::new(
        r"([A-Z][a-z]+(?: [A-Z][a-z]+)*,?\s*[A-Z]{2},?\s*\d{5}(?:-\d{4})?)"
    ).unwrap();

    // Accel order acknowledgements
    pub static ref ORDER_ACK_NUMBER: Regex = Regex::new(
        r"Order Acknowledgement #\s*([\w-]+)"
    ).unwrap();

    pub static ref GRAND_TOTAL: Regex = Regex::new(
        r"Grand Total \(Payable in U\.S\. Dollars\):\s*\$?([\d,]+\.\d{2})"
    ).unwrap();

    pub static ref DATE_ORDERED: Regex = Regex::new(
        r"Date Ordered:\s*(\d{1,2}/\d{1,2}/\d{2})"
    ).unwrap();

    // Ceildeck quote sheets. The distributor marker is misspelled on the
    // vendor's paper; accept the corrected spelling as well.
    pub static ref CEILDECK_DATE: Regex = Regex::new(
        r"(?i)DATE:\s*(\d{1,2}/\d{1,2}/\d{2,4})"
    ).unwrap();

    pub static ref CEILDECK_TOTAL: Regex = Regex::new(
        r"(?i)TOTAL\s*\$\s*([\d,]+\.\d{2})"
    ).unwrap();

    pub static ref CEILDECK_DELIVERY: Regex = Regex::new(
        r"(?i)DELIVERY\s*\$\s*([\d,]+\.\d{2})"
    ).unwrap();

    pub static ref DISTRIBUTOR_LINE: Regex = Regex::new(
        r"(?i)Distr(?:ubitor|ibutor):\s*(.*?)\s*TOTAL\s*\$\s*[\d,]+\.\d{2}"
    ).unwrap();

    // Shared value shapes
    pub static ref SLASH_DATE: Regex = Regex::new(
        r"\b(\d{1,2})/(\d{1,2})/(\d{2,4})\b"
    ).unwrap();

    pub static ref MONEY_AMOUNT: Regex = Regex::new(
        r"([\d,]+\.\d{2})"
    ).unwrap();
}
