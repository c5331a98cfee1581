//! Wall-clock timestamps for contacts and change records
//!
//! Timestamps are naive local date-times, the same wall-clock reading a user
//! sees when the record is made. They are truncated to microseconds so the
//! ISO-8601 text written to disk reads back to an identical value.

use chrono::{DateTime, Local, NaiveDateTime, SubsecRound};

/// Point in time attached to contacts and change records
pub type Timestamp = NaiveDateTime;

/// Format used when writing timestamps (`2024-01-15T09:30:00.000000`)
pub const ISO_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

/// Current local time at microsecond precision
pub fn now() -> Timestamp {
    Local::now().naive_local().trunc_subsecs(6)
}

/// Render a timestamp as ISO-8601 text
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use phonebook_domain::timestamp::to_iso;
///
/// let ts = NaiveDate::from_ymd_opt(2024, 1, 15)
///     .unwrap()
///     .and_hms_micro_opt(9, 30, 0, 250)
///     .unwrap();
/// assert_eq!(to_iso(&ts), "2024-01-15T09:30:00.000250");
/// ```
pub fn to_iso(ts: &Timestamp) -> String {
    ts.format(ISO_FORMAT).to_string()
}

/// Parse ISO-8601 text back into a timestamp
///
/// Accepts a `T` or space separator, an optional fractional part, and
/// RFC 3339 strings with an offset (the offset is dropped, keeping the
/// wall-clock reading).
pub fn parse_iso(s: &str) -> Result<Timestamp, String> {
    let s = s.trim();
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S%.f"))
        .or_else(|_| DateTime::parse_from_rfc3339(s).map(|dt| dt.naive_local()))
        .map_err(|e| format!("Invalid timestamp '{}': {}", s, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Timelike};

    #[test]
    fn test_now_is_microsecond_precision() {
        let ts = now();
        assert_eq!(ts.nanosecond() % 1_000, 0);
    }

    #[test]
    fn test_iso_roundtrip() {
        let ts = now();
        let parsed = parse_iso(&to_iso(&ts)).unwrap();
        assert_eq!(ts, parsed);
    }

    #[test]
    fn test_parse_without_fraction() {
        let ts = parse_iso("2024-02-01T08:00:00").unwrap();
        let expected = NaiveDate::from_ymd_opt(2024, 2, 1)
            .unwrap()
            .and_hms_opt(8, 0, 0)
            .unwrap();
        assert_eq!(ts, expected);
    }

    #[test]
    fn test_parse_space_separator_and_offset() {
        assert!(parse_iso("2024-02-01 08:00:00.5").is_ok());
        let ts = parse_iso("2024-02-01T08:00:00+05:00").unwrap();
        assert_eq!(ts.hour(), 8);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_iso("yesterday").is_err());
        assert!(parse_iso("").is_err());
    }
}
