//! Text normalization for extracted page text.

use super::patterns::{NOISE_TOKEN, WHITESPACE_RUN};

/// Normalize raw page text for pattern matching.
///
/// Collapses every whitespace run to a single space and removes drawing
/// sheet codes. Removing a code can leave two adjacent spaces, so the
/// collapse runs again afterwards; that makes the function idempotent.
/// Empty input yields empty output.
pub fn normalize(text: &str) -> String {
    let collapsed = WHITESPACE_RUN.replace_all(text, " ");
    let stripped = NOISE_TOKEN.replace_all(&collapsed, "");
    WHITESPACE_RUN.replace_all(&stripped, " ").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_collapses_whitespace() {
        assert_eq!(
            normalize("STORE\n#  1234\t\tNorthbrook   Court"),
            "STORE # 1234 Northbrook Court"
        );
    }

    #[test]
    fn test_strips_sheet_codes() {
        assert_eq!(
            normalize("A-101 Northbrook Court E 1.2 Suite #A12"),
            " Northbrook Court Suite #A12"
        );
    }

    #[test]
    fn test_idempotent() {
        let samples = [
            "",
            "   ",
            "A-101  STORE # 1234\n\nNorthbrook Court E 1.2",
            "plain text with no noise",
        ];
        for raw in samples {
            let once = normalize(raw);
            assert_eq!(normalize(&once), once, "not idempotent for {:?}", raw);
        }
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(normalize(""), "");
    }
}
