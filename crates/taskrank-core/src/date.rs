//! Due-date parsing.
//!
//! Task records arrive with heterogeneous due-date representations: plain
//! ISO dates, day-first European forms, or full timestamps. This module
//! converts them all into a canonical calendar date, treating anything
//! unrecognized as "no due date". Malformed input is a normal, silently
//! handled case; nothing in here can fail.

use chrono::{DateTime, NaiveDate};
use serde_json::Value;

/// String formats tried in order.
const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%d-%m-%Y", "%d/%m/%Y"];

/// Parse a raw due-date value into a calendar date.
///
/// Accepts a JSON string holding either a date in one of the supported
/// formats or an RFC 3339 timestamp (truncated to its date component).
/// Any other JSON type, or a string matching nothing, yields `None`.
pub fn parse_due_date(value: &Value) -> Option<NaiveDate> {
    match value {
        Value::String(s) => parse_date_str(s),
        _ => None,
    }
}

/// Parse a date string against the supported formats.
pub fn parse_date_str(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    for fmt in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(s, fmt) {
            return Some(date);
        }
    }
    // Timestamps carry a date component; keep just that.
    DateTime::parse_from_rfc3339(s).ok().map(|dt| dt.date_naive())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn parses_iso_date() {
        assert_eq!(parse_due_date(&json!("2024-01-10")), Some(date(2024, 1, 10)));
    }

    #[test]
    fn parses_day_first_dashed() {
        assert_eq!(parse_due_date(&json!("10-01-2024")), Some(date(2024, 1, 10)));
    }

    #[test]
    fn parses_day_first_slashed() {
        assert_eq!(parse_due_date(&json!("10/01/2024")), Some(date(2024, 1, 10)));
    }

    #[test]
    fn iso_wins_over_day_first() {
        // "2024-01-10" could only match the ISO format, but make sure the
        // ordered list is honored for an ambiguous day-first value too.
        assert_eq!(parse_due_date(&json!("05-06-2024")), Some(date(2024, 6, 5)));
    }

    #[test]
    fn truncates_rfc3339_timestamp() {
        assert_eq!(
            parse_due_date(&json!("2024-01-10T15:30:00Z")),
            Some(date(2024, 1, 10))
        );
        assert_eq!(
            parse_due_date(&json!("2024-01-10T23:45:00+09:00")),
            Some(date(2024, 1, 10))
        );
    }

    #[test]
    fn tolerates_surrounding_whitespace() {
        assert_eq!(parse_due_date(&json!(" 2024-01-10 ")), Some(date(2024, 1, 10)));
    }

    #[test]
    fn unparseable_string_is_absent() {
        assert_eq!(parse_due_date(&json!("next tuesday")), None);
        assert_eq!(parse_due_date(&json!("2024-13-45")), None);
        assert_eq!(parse_due_date(&json!("")), None);
    }

    #[test]
    fn non_string_values_are_absent() {
        assert_eq!(parse_due_date(&Value::Null), None);
        assert_eq!(parse_due_date(&json!(20240110)), None);
        assert_eq!(parse_due_date(&json!(true)), None);
        assert_eq!(parse_due_date(&json!(["2024-01-10"])), None);
        assert_eq!(parse_due_date(&json!({"date": "2024-01-10"})), None);
    }
}
