//! Shared string and date helpers.

use chrono::NaiveDate;

/// Case-insensitive string equality via explicit lowercase normalization.
///
/// All catalog matching (ISBN, borrower, filter fields) goes through this
/// so there is no hidden comparison mode.
#[must_use]
pub fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

/// Strict `yyyy-MM-dd` check: the value must parse and round-trip to the
/// same lexical form (rejects unpadded dates like `2017-1-1`).
#[must_use]
pub fn is_valid_date(value: &str) -> bool {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .is_ok_and(|d| d.format("%Y-%m-%d").to_string() == value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eq_ignore_case() {
        assert!(eq_ignore_case("Alice", "alice"));
        assert!(eq_ignore_case("ISBN-1", "isbn-1"));
        assert!(!eq_ignore_case("Alice", "Bob"));
    }

    #[test]
    fn test_is_valid_date() {
        assert!(is_valid_date("2017-01-01"));
        assert!(!is_valid_date("2017/01/01"));
        assert!(!is_valid_date("2017-1-1"));
        assert!(!is_valid_date("2017-13-01"));
        assert!(!is_valid_date(""));
    }
}
