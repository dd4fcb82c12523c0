//! Utilities for date and time normalization
//!
//! Everything sent to the backend is an ISO-8601 string in UTC-0
//! (`2024-03-15T14:02:26.000Z`); the display formats below are for tables.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use thiserror::Error;

/// Display format for timestamps, e.g. `2024-03-15 14:02:26`
pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Display format for calendar dates, e.g. `2024-03-15`
pub const DATE_FORMAT: &str = "%Y-%m-%d";

const ISO_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateFormatError {
    #[error("cannot parse '{0}' as a date")]
    Unparseable(String),
}

/// What a date picker or a loaded record may hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateInput<'a> {
    Text(&'a str),
    Date(NaiveDate),
}

/// Same instant, expressed in UTC.
pub fn convert_to_utc_zero<Tz: TimeZone>(instant: &DateTime<Tz>) -> DateTime<Utc> {
    instant.with_timezone(&Utc)
}

/// Renders an instant as `YYYY-MM-DDTHH:MM:SS.mmmZ`.
pub fn to_iso_string(instant: &DateTime<Utc>) -> String {
    instant.format(ISO_FORMAT).to_string()
}

/// Parses RFC 3339, `YYYY-MM-DD HH:MM:SS` (taken as UTC) or `YYYY-MM-DD`
/// (midnight UTC).
pub fn parse_instant(value: &str) -> Result<DateTime<Utc>, DateFormatError> {
    let value = value.trim();

    if let Ok(instant) = DateTime::parse_from_rfc3339(value) {
        return Ok(convert_to_utc_zero(&instant));
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", DATETIME_FORMAT] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(value, format) {
            return Ok(Utc.from_utc_datetime(&naive));
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(value, DATE_FORMAT) {
        return Ok(start_of_day_utc(date));
    }

    log::debug!("unparseable date input: '{}'", value);
    Err(DateFormatError::Unparseable(value.to_string()))
}

/// Normalizes a date field for submission.
///
/// - text: parsed and re-rendered in UTC-0
/// - calendar date: midnight UTC of that day
/// - absent: empty string
pub fn convert_to_utc0_iso_string(input: Option<DateInput<'_>>) -> Result<String, DateFormatError> {
    match input {
        Some(DateInput::Text(text)) => parse_instant(text).map(|instant| to_iso_string(&instant)),
        Some(DateInput::Date(date)) => Ok(to_iso_string(&start_of_day_utc(date))),
        None => Ok(String::new()),
    }
}

/// Formats an instant with [`DATETIME_FORMAT`].
pub fn format_datetime(instant: &DateTime<Utc>) -> String {
    instant.format(DATETIME_FORMAT).to_string()
}

/// Formats a date with [`DATE_FORMAT`].
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

fn start_of_day_utc(date: NaiveDate) -> DateTime<Utc> {
    Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_convert_to_utc_zero() {
        let offset = FixedOffset::east_opt(7 * 3600).unwrap();
        let local = offset.with_ymd_and_hms(2024, 3, 15, 8, 30, 0).unwrap();
        let utc = convert_to_utc_zero(&local);
        assert_eq!(to_iso_string(&utc), "2024-03-15T01:30:00.000Z");
        assert_eq!(utc, local);
    }

    #[test]
    fn test_iso_string_from_text() {
        assert_eq!(
            convert_to_utc0_iso_string(Some(DateInput::Text("2024-03-15T14:02:26.123Z"))).unwrap(),
            "2024-03-15T14:02:26.123Z"
        );
        assert_eq!(
            convert_to_utc0_iso_string(Some(DateInput::Text("2024-03-15T14:02:26+02:00"))).unwrap(),
            "2024-03-15T12:02:26.000Z"
        );
        assert_eq!(
            convert_to_utc0_iso_string(Some(DateInput::Text("2024-03-15 14:02:26"))).unwrap(),
            "2024-03-15T14:02:26.000Z"
        );
        assert_eq!(
            convert_to_utc0_iso_string(Some(DateInput::Text("2024-03-15"))).unwrap(),
            "2024-03-15T00:00:00.000Z"
        );
    }

    #[test]
    fn test_iso_string_from_date_is_midnight_utc() {
        assert_eq!(
            convert_to_utc0_iso_string(Some(DateInput::Date(date(2001, 2, 3)))).unwrap(),
            "2001-02-03T00:00:00.000Z"
        );
    }

    #[test]
    fn test_iso_string_from_nothing() {
        assert_eq!(convert_to_utc0_iso_string(None).unwrap(), "");
    }

    #[test]
    fn test_invalid_input() {
        assert_eq!(
            convert_to_utc0_iso_string(Some(DateInput::Text("not a date"))),
            Err(DateFormatError::Unparseable("not a date".into()))
        );
    }

    #[test]
    fn test_display_formats() {
        let instant = Utc.with_ymd_and_hms(2024, 12, 31, 23, 59, 59).unwrap();
        assert_eq!(format_datetime(&instant), "2024-12-31 23:59:59");
        assert_eq!(format_date(date(2024, 3, 5)), "2024-03-05");
    }
}
