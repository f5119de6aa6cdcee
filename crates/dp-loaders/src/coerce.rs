//! Lenient coercion of loosely typed datastore values.
//!
//! The CKAN datastore returns JSON records whose field types drift between
//! exports. Helpers here coerce what they can and fall back to `NULL`
//! (with a warning) rather than failing the run.

use chrono::NaiveDateTime;
use serde_json::Value;
use tracing::warn;

/// Coerce a JSON value to an i32, accepting numbers and numeric strings.
///
/// Anything else logs a warning and maps to `None`.
pub fn opt_i32(value: Option<&Value>, field: &str) -> Option<i32> {
    let value = value?;
    match value {
        Value::Null => None,
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                i32::try_from(i).ok().or_else(|| {
                    warn!(field, value = %n, "integer out of i32 range, storing NULL");
                    None
                })
            } else {
                // Exports occasionally emit delays as floats.
                n.as_f64().map(|f| f as i32)
            }
        }
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return None;
            }
            match trimmed.parse::<i32>() {
                Ok(i) => Some(i),
                Err(_) => match trimmed.parse::<f64>() {
                    Ok(f) => Some(f as i32),
                    Err(_) => {
                        warn!(field, value = %s, "non-numeric value, storing NULL");
                        None
                    }
                },
            }
        }
        other => {
            warn!(field, value = %other, "unexpected value type, storing NULL");
            None
        }
    }
}

/// Coerce a JSON value to a string, mapping null and non-strings to `None`.
pub fn opt_string(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// Parse the datastore's timestamp formats into a naive timestamp.
///
/// Accepts `YYYY-MM-DDTHH:MM:SS`, RFC 3339 and bare `YYYY-MM-DD` (taken
/// as midnight). Unparseable input becomes `None`.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S") {
        return Some(dt);
    }
    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.naive_utc());
    }
    if let Ok(date) = chrono::NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0);
    }
    warn!(value = %raw, "unparseable timestamp, storing NULL");
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_opt_i32_from_number() {
        assert_eq!(opt_i32(Some(&json!(12)), "min_delay"), Some(12));
        assert_eq!(opt_i32(Some(&json!(12.0)), "min_delay"), Some(12));
    }

    #[test]
    fn test_opt_i32_from_numeric_string() {
        assert_eq!(opt_i32(Some(&json!("7")), "min_gap"), Some(7));
        assert_eq!(opt_i32(Some(&json!(" 7 ")), "min_gap"), Some(7));
        assert_eq!(opt_i32(Some(&json!("7.0")), "min_gap"), Some(7));
    }

    #[test]
    fn test_opt_i32_garbage_is_none() {
        assert_eq!(opt_i32(Some(&json!("n/a")), "min_gap"), None);
        assert_eq!(opt_i32(Some(&json!("")), "min_gap"), None);
        assert_eq!(opt_i32(Some(&Value::Null), "min_gap"), None);
        assert_eq!(opt_i32(None, "min_gap"), None);
    }

    #[test]
    fn test_opt_string_passthrough_and_null() {
        assert_eq!(opt_string(Some(&json!("504 King"))), Some("504 King".to_string()));
        assert_eq!(opt_string(Some(&Value::Null)), None);
        assert_eq!(opt_string(None), None);
    }

    #[test]
    fn test_opt_string_stringifies_numbers() {
        assert_eq!(opt_string(Some(&json!(504))), Some("504".to_string()));
    }

    #[test]
    fn test_parse_timestamp_iso() {
        let dt = parse_timestamp("2024-03-15T08:30:00").unwrap();
        assert_eq!(dt.to_string(), "2024-03-15 08:30:00");
    }

    #[test]
    fn test_parse_timestamp_rfc3339() {
        let dt = parse_timestamp("2024-03-15T08:30:00Z").unwrap();
        assert_eq!(dt.to_string(), "2024-03-15 08:30:00");
    }

    #[test]
    fn test_parse_timestamp_bare_date_is_midnight() {
        let dt = parse_timestamp("2024-03-15").unwrap();
        assert_eq!(dt.to_string(), "2024-03-15 00:00:00");
    }

    #[test]
    fn test_parse_timestamp_garbage_is_none() {
        assert!(parse_timestamp("yesterday").is_none());
        assert!(parse_timestamp("").is_none());
    }
}
