//! Date formats used in the data file and on the command line

use chrono::{NaiveDate, NaiveDateTime};

use crate::error::TrackerError;

/// Format of an expense timestamp, e.g. `2024-01-15 12:30:00`
pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Format of a goal deadline, e.g. `2024-12-31`
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse an expense timestamp; a bare date is accepted as midnight
pub fn parse_datetime(s: &str) -> Result<NaiveDateTime, TrackerError> {
    let s = s.trim();
    NaiveDateTime::parse_from_str(s, DATETIME_FORMAT)
        .or_else(|_| parse_date(s).map(|d| d.and_time(chrono::NaiveTime::MIN)))
        .map_err(|_| {
            TrackerError::Validation(format!(
                "Invalid date '{}': expected YYYY-MM-DD HH:MM:SS",
                s
            ))
        })
}

/// Parse a calendar date in `YYYY-MM-DD` form
pub fn parse_date(s: &str) -> Result<NaiveDate, TrackerError> {
    NaiveDate::parse_from_str(s.trim(), DATE_FORMAT).map_err(|_| {
        TrackerError::Validation(format!("Invalid date '{}': expected YYYY-MM-DD", s.trim()))
    })
}

/// Full month name and year, e.g. `January 2024`
///
/// Returns `None` when the month is outside 1-12.
pub fn month_label(month: u32, year: i32) -> Option<String> {
    NaiveDate::from_ymd_opt(year, month, 1).map(|d| d.format("%B %Y").to_string())
}

/// Serde adapter for `NaiveDateTime` stored as `YYYY-MM-DD HH:MM:SS`
pub mod datetime_format {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    use super::DATETIME_FORMAT;

    pub fn serialize<S: Serializer>(
        date: &NaiveDateTime,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&date.format(DATETIME_FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<NaiveDateTime, D::Error> {
        let s = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&s, DATETIME_FORMAT).map_err(|_| {
            serde::de::Error::custom(format!(
                "invalid date '{}', expected YYYY-MM-DD HH:MM:SS",
                s
            ))
        })
    }
}

/// Serde adapter for an optional `NaiveDate` stored as `YYYY-MM-DD`
pub mod optional_date_format {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    use super::DATE_FORMAT;

    pub fn serialize<S: Serializer>(
        date: &Option<NaiveDate>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match date {
            Some(d) => serializer.collect_str(&d.format(DATE_FORMAT)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<NaiveDate>, D::Error> {
        let value: Option<String> = Option::deserialize(deserializer)?;
        value
            .map(|s| {
                NaiveDate::parse_from_str(&s, DATE_FORMAT).map_err(|_| {
                    serde::de::Error::custom(format!(
                        "invalid deadline '{}', expected YYYY-MM-DD",
                        s
                    ))
                })
            })
            .transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_datetime() {
        let dt = parse_datetime("2024-01-15 12:30:05").unwrap();
        assert_eq!(dt.format(DATETIME_FORMAT).to_string(), "2024-01-15 12:30:05");

        let midnight = parse_datetime("2024-02-01").unwrap();
        assert_eq!(midnight.format(DATETIME_FORMAT).to_string(), "2024-02-01 00:00:00");

        assert!(parse_datetime("15/01/2024").unwrap_err().is_validation());
    }

    #[test]
    fn test_month_label() {
        assert_eq!(month_label(1, 2024).as_deref(), Some("January 2024"));
        assert_eq!(month_label(12, 1999).as_deref(), Some("December 1999"));
        assert_eq!(month_label(13, 2024), None);
        assert_eq!(month_label(0, 2024), None);
    }
}
