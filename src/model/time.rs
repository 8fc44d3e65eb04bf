//! Calendar date conversions
//!
//! Source timestamps use English month abbreviations (`2020-Dec-31 12:00`).
//! Output drops seconds since the source data has minute resolution.

use chrono::NaiveDateTime;

/// Output format for approach times
pub const DATETIME_OUTPUT_FORMAT: &str = "%Y-%m-%d %H:%M";

const CALENDAR_FORMAT: &str = "%Y-%b-%d %H:%M";
const CALENDAR_FORMAT_SECONDS: &str = "%Y-%b-%d %H:%M:%S";

/// Parses a calendar date such as `2020-Dec-31 12:00`.
///
/// A trailing `:ss` is accepted and kept.
pub fn parse_calendar_date(s: &str) -> Result<NaiveDateTime, chrono::ParseError> {
    let s = s.trim();
    NaiveDateTime::parse_from_str(s, CALENDAR_FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(s, CALENDAR_FORMAT_SECONDS))
}

/// Formats a timestamp as `YYYY-MM-DD HH:MM`
pub fn datetime_to_str(dt: &NaiveDateTime) -> String {
    dt.format(DATETIME_OUTPUT_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Timelike};

    #[test]
    fn test_parse_calendar_date() {
        let dt = parse_calendar_date("2020-Dec-31 12:00").unwrap();
        assert_eq!(dt.date(), NaiveDate::from_ymd_opt(2020, 12, 31).unwrap());
        assert_eq!(dt.hour(), 12);
        assert_eq!(dt.minute(), 0);
    }

    #[test]
    fn test_parse_keeps_seconds() {
        let dt = parse_calendar_date("1900-Jan-01 00:11:37").unwrap();
        assert_eq!(dt.second(), 37);
        assert_eq!(datetime_to_str(&dt), "1900-01-01 00:11");
    }

    #[test]
    fn test_parse_rejects_iso_month() {
        assert!(parse_calendar_date("2020-12-31 12:00").is_err());
        assert!(parse_calendar_date("").is_err());
    }
}
