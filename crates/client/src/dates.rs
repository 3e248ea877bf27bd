//! Date and time normalization for the yclients wire format.
//!
//! Dates travel as `yyyy-MM-dd` text and timestamps as RFC 3339 with an
//! explicit UTC offset. Parse helpers reject malformed input as a
//! [`Validation`](crate::Error::Validation) error so no request is built
//! from an unparseable value.

use chrono::{DateTime, FixedOffset, NaiveDate};

use crate::error::{Error, Result};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Format a date the way the service expects it in paths and parameters.
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Parse a `yyyy-MM-dd` date.
pub fn parse_date(input: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), DATE_FORMAT)
        .map_err(|e| Error::validation("date", format!("not a yyyy-MM-dd date: {e}")))
}

/// Parse an RFC 3339 timestamp (date, time and UTC offset).
pub fn parse_datetime(input: &str) -> Result<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(input.trim())
        .map_err(|e| Error::validation("datetime", format!("not an RFC 3339 timestamp: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        let date = NaiveDate::from_ymd_opt(2015, 9, 1).unwrap();
        assert_eq!(format_date(date), "2015-09-01");
    }

    #[test]
    fn test_parse_date_round_trip() {
        let date = parse_date("2015-09-01").unwrap();
        assert_eq!(format_date(date), "2015-09-01");
    }

    #[test]
    fn test_parse_date_rejects_garbage() {
        let err = parse_date("05 October 2011").unwrap_err();
        assert!(matches!(err, Error::Validation { field, .. } if field == "date"));
    }

    #[test]
    fn test_parse_datetime_keeps_offset() {
        let dt = parse_datetime("2015-09-29T13:00:00+04:00").unwrap();
        assert_eq!(dt.to_rfc3339(), "2015-09-29T13:00:00+04:00");
    }

    #[test]
    fn test_parse_datetime_rejects_date_only() {
        let err = parse_datetime("2015-09-29").unwrap_err();
        assert!(matches!(err, Error::Validation { field, .. } if field == "datetime"));
    }
}
