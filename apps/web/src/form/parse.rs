//! Parse-and-validate for raw form values.
//!
//! Browsers hand every field over as a string. These helpers turn them into
//! typed values before the resolver or the query builder sees them.

use thiserror::Error;

use crate::form::limits::FieldBounds;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("invalid method '{0}': expected album, artist or track")]
    InvalidMethod(String),

    #[error("invalid period '{0}': expected 7day, 1month, 3month, 6month, 12month or overall")]
    InvalidPeriod(String),

    #[error("invalid text location '{0}'")]
    InvalidTextLocation(String),
}

/// Parses a numeric field, rounding to the nearest integer and clamping into
/// `bounds`. Returns `None` for empty or non-numeric input.
pub fn parse_count(raw: &str, bounds: FieldBounds) -> Option<u32> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    let value: f64 = trimmed.parse().ok()?;
    if !value.is_finite() {
        return None;
    }
    Some(bounds.clamp_rounded(value))
}

/// Parses a checkbox value.
pub fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "on" => Some(true),
        "false" | "0" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GRID: FieldBounds = FieldBounds::new(1, 10);

    #[test]
    fn test_parse_count_plain_integer() {
        assert_eq!(parse_count("7", GRID), Some(7));
        assert_eq!(parse_count("  7 ", GRID), Some(7));
    }

    #[test]
    fn test_parse_count_clamps() {
        assert_eq!(parse_count("25", GRID), Some(10));
        assert_eq!(parse_count("0", GRID), Some(1));
        assert_eq!(parse_count("-4", GRID), Some(1));
    }

    #[test]
    fn test_parse_count_rounds_fractions() {
        assert_eq!(parse_count("3.5", GRID), Some(4));
        assert_eq!(parse_count("3.2", GRID), Some(3));
    }

    #[test]
    fn test_parse_count_ignores_garbage() {
        assert_eq!(parse_count("", GRID), None);
        assert_eq!(parse_count("abc", GRID), None);
        assert_eq!(parse_count("12px", GRID), None);
        assert_eq!(parse_count("inf", GRID), None);
        assert_eq!(parse_count("NaN", GRID), None);
    }

    #[test]
    fn test_parse_flag() {
        assert_eq!(parse_flag("true"), Some(true));
        assert_eq!(parse_flag("on"), Some(true));
        assert_eq!(parse_flag("FALSE"), Some(false));
        assert_eq!(parse_flag("0"), Some(false));
        assert_eq!(parse_flag("yes please"), None);
    }

    #[test]
    fn test_parse_error_messages() {
        assert_eq!(
            ParseError::InvalidTextLocation("middle".to_string()).to_string(),
            "invalid text location 'middle'"
        );
    }
}
