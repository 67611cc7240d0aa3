//! Dollar amount parsing and formatting.

use rust_decimal::Decimal;
use std::str::FromStr;

/// Parse a US-formatted amount (e.g., "1,234.56" or "1234.56").
pub fn parse_money(s: &str) -> Option<Decimal> {
    let cleaned: String = s
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();

    if cleaned.is_empty() {
        return None;
    }

    Decimal::from_str(&cleaned).ok()
}

/// Format an amount in US style with thousands separators (1,234.56).
pub fn format_money(amount: Decimal) -> String {
    let s = format!("{:.2}", amount);
    let parts: Vec<&str> = s.split('.').collect();

    if parts.len() != 2 {
        return s;
    }

    let integer_part = parts[0];
    let decimal_part = parts[1];

    let (sign, digits) = match integer_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", integer_part),
    };

    let chars: Vec<char> = digits.chars().collect();
    let mut formatted = String::new();

    for (i, c) in chars.iter().enumerate() {
        if i > 0 && (chars.len() - i) % 3 == 0 {
            formatted.push(',');
        }
        formatted.push(*c);
    }

    format!("{}{}.{}", sign, formatted, decimal_part)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_money() {
        assert_eq!(
            parse_money("1,234.56"),
            Some(Decimal::from_str("1234.56").unwrap())
        );
        assert_eq!(
            parse_money("1234.56"),
            Some(Decimal::from_str("1234.56").unwrap())
        );
        assert_eq!(
            parse_money("12,345,678.90"),
            Some(Decimal::from_str("12345678.90").unwrap())
        );
        assert_eq!(parse_money(""), None);
        assert_eq!(parse_money("n/a"), None);
    }

    #[test]
    fn test_format_money() {
        let amount = Decimal::from_str("1234.56").unwrap();
        assert_eq!(format_money(amount), "1,234.56");

        let amount = Decimal::from_str("12345678.90").unwrap();
        assert_eq!(format_money(amount), "12,345,678.90");

        let amount = Decimal::from_str("500.00").unwrap();
        assert_eq!(format_money(amount), "500.00");
    }

    #[test]
    fn test_round_trip() {
        let amount = Decimal::from_str("9876543.21").unwrap();
        assert_eq!(parse_money(&format_money(amount)), Some(amount));
    }
}
