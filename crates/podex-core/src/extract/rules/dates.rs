//! Slash-date parsing for quote fields.

use chrono::NaiveDate;

use super::patterns::SLASH_DATE;

/// Parse an `m/d/yy` or `m/d/yyyy` date as printed on quote sheets.
///
/// Two-digit years follow the usual pivot: 00-50 map to the 2000s,
/// 51-99 to the 1900s.
pub fn parse_slash_date(s: &str) -> Option<NaiveDate> {
    let caps = SLASH_DATE.captures(s)?;

    let month: u32 = caps[1].parse().ok()?;
    let day: u32 = caps[2].parse().ok()?;
    let year = expand_year(caps[3].parse().ok()?);

    NaiveDate::from_ymd_opt(year, month, day)
}

fn expand_year(year: i32) -> i32 {
    if year < 100 {
        if year <= 50 { 2000 + year } else { 1900 + year }
    } else {
        year
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_two_digit_year() {
        assert_eq!(
            parse_slash_date("3/4/25"),
            Some(NaiveDate::from_ymd_opt(2025, 3, 4).unwrap())
        );
        assert_eq!(
            parse_slash_date("12/31/99"),
            Some(NaiveDate::from_ymd_opt(1999, 12, 31).unwrap())
        );
    }

    #[test]
    fn test_parse_four_digit_year() {
        assert_eq!(
            parse_slash_date("3/4/2025"),
            Some(NaiveDate::from_ymd_opt(2025, 3, 4).unwrap())
        );
    }

    #[test]
    fn test_rejects_invalid_dates() {
        assert_eq!(parse_slash_date("13/40/25"), None);
        assert_eq!(parse_slash_date("no date here"), None);
    }
}
