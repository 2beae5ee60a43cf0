//! Row parsing and SQL-building helpers.
//!
//! Records convert `libsql::Row` (column-indexed) into typed entity structs.
//! These helpers isolate the parsing logic and handle the dual datetime
//! format issue (`SQLite`'s `datetime('now')` vs Rust's `to_rfc3339()`).

use chrono::{DateTime, Utc};
use mprs_core::paging::PageSpec;

use crate::error::DatabaseError;

/// Parse a required TEXT column as `DateTime<Utc>`.
///
/// Handles both RFC 3339 (`"2026-02-09T14:30:00+00:00"`) and `SQLite`'s default
/// format (`"2026-02-09 14:30:00"`).
///
/// # Errors
///
/// Returns `DatabaseError::Query` if the string cannot be parsed as either format.
pub fn parse_datetime(s: &str) -> Result<DateTime<Utc>, DatabaseError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    chrono::NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
        .map(|naive| naive.and_utc())
        .map_err(|e| DatabaseError::Query(format!("Failed to parse datetime '{s}': {e}")))
}

/// Parse an optional TEXT column as `Option<DateTime<Utc>>`.
///
/// # Errors
///
/// Returns `DatabaseError::Query` if a non-empty string cannot be parsed.
pub fn parse_optional_datetime(s: Option<&str>) -> Result<Option<DateTime<Utc>>, DatabaseError> {
    match s {
        Some(s) if !s.is_empty() => Ok(Some(parse_datetime(s)?)),
        _ => Ok(None),
    }
}

/// Parse a TEXT column into a serde-deserializable enum.
///
/// Works with the `SCREAMING_SNAKE_CASE` field enums (`"HIGH"`, `"TRANSPRT"`).
///
/// # Errors
///
/// Returns `DatabaseError::Query` if the string does not match any enum variant.
pub fn parse_enum<T: serde::de::DeserializeOwned>(s: &str) -> Result<T, DatabaseError> {
    serde_json::from_value(serde_json::Value::String(s.to_string()))
        .map_err(|e| DatabaseError::Query(format!("Failed to parse enum from '{s}': {e}")))
}

/// Parse a nullable TEXT column into an optional enum.
///
/// # Errors
///
/// Returns `DatabaseError::Query` if a present string does not match any variant.
pub fn parse_optional_enum<T: serde::de::DeserializeOwned>(
    s: Option<&str>,
) -> Result<Option<T>, DatabaseError> {
    s.map(parse_enum).transpose()
}

/// Map a sort property to its column name. Accepts `snake_case` columns and
/// the camelCase JSON names (`bedroomName` -> `bedroom_name`).
#[must_use]
pub fn column_name(property: &str) -> String {
    let mut out = String::with_capacity(property.len() + 4);
    for ch in property.trim().chars() {
        if ch.is_ascii_uppercase() {
            out.push('_');
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}

/// `LIMIT` / `OFFSET` values for a page request.
#[must_use]
pub fn limit_offset(spec: &PageSpec) -> (i64, i64) {
    (
        i64::from(spec.size),
        i64::try_from(spec.offset()).unwrap_or(i64::MAX),
    )
}

/// Read a `count(*)` result from the first column of the first row.
///
/// # Errors
///
/// Returns `DatabaseError::NoResult` if the query produced no row.
pub async fn read_count(mut rows: libsql::Rows) -> Result<u64, DatabaseError> {
    let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
    Ok(row.get::<i64>(0)?.unsigned_abs())
}

#[cfg(test)]
mod tests {
    use super::*;
    use mprs_core::enums::QualityStateType;

    #[test]
    fn parses_both_datetime_formats() {
        let a = parse_datetime("2024-03-02T10:00:00+00:00").unwrap();
        let b = parse_datetime("2024-03-02 10:00:00").unwrap();
        assert_eq!(a, b);
        assert!(parse_datetime("yesterday").is_err());
    }

    #[test]
    fn optional_datetime_treats_empty_as_none() {
        assert_eq!(parse_optional_datetime(None).unwrap(), None);
        assert_eq!(parse_optional_datetime(Some("")).unwrap(), None);
    }

    #[test]
    fn parses_screaming_enums() {
        let state: QualityStateType = parse_enum("MIDDLE").unwrap();
        assert_eq!(state, QualityStateType::Middle);
        assert!(parse_enum::<QualityStateType>("middle").is_err());
        assert_eq!(parse_optional_enum::<QualityStateType>(None).unwrap(), None);
    }

    #[test]
    fn camel_case_sort_keys_map_to_columns() {
        assert_eq!(column_name("bedroomName"), "bedroom_name");
        assert_eq!(column_name("report_id"), "report_id");
        assert_eq!(column_name("id"), "id");
    }

    #[test]
    fn limit_offset_from_page() {
        assert_eq!(limit_offset(&PageSpec::new(2, 10)), (10, 20));
    }
}
