//! Timestamp text encoding.
//!
//! Stored timestamps are fixed-width RFC 3339 UTC strings with microsecond
//! precision and a `Z` suffix, so lexical order matches chronological order.

use chrono::{DateTime, SecondsFormat, SubsecRound, Utc};

/// Encode a timestamp in the fixed-width storage format.
pub fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// Parse an RFC 3339 timestamp with any UTC offset into UTC.
///
/// The remote source emits seven fractional digits
/// (`2025-05-27T10:18:17.8695449Z`); any precision is accepted and
/// truncated to the microseconds the store keeps, so a parsed instant
/// compares the same before and after a storage round trip.
pub fn parse_timestamp(text: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    DateTime::parse_from_rfc3339(text).map(|ts| ts.with_timezone(&Utc).trunc_subsecs(6))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Timelike};

    #[test]
    fn test_parses_api_precision() {
        let ts = parse_timestamp("2025-05-27T10:18:17.8695449Z").unwrap();
        assert_eq!(ts.hour(), 10);
        assert_eq!(ts.second(), 17);
    }

    #[test]
    fn test_parses_offsets_into_utc() {
        let ts = parse_timestamp("2025-05-27T12:00:00+02:00").unwrap();
        assert_eq!(ts, Utc.with_ymd_and_hms(2025, 5, 27, 10, 0, 0).unwrap());
    }

    #[test]
    fn test_sub_microsecond_digits_are_truncated() {
        let ts = parse_timestamp("2025-05-27T10:00:00.0000005Z").unwrap();
        assert_eq!(ts, Utc.with_ymd_and_hms(2025, 5, 27, 10, 0, 0).unwrap());

        let ts = parse_timestamp("2025-05-27T10:18:17.8695449Z").unwrap();
        assert_eq!(format_timestamp(&ts), "2025-05-27T10:18:17.869544Z");
        assert_eq!(parse_timestamp(&format_timestamp(&ts)).unwrap(), ts);
    }

    #[test]
    fn test_rejects_garbage() {
        assert!(parse_timestamp("not-a-date").is_err());
    }

    #[test]
    fn test_storage_format_sorts_chronologically() {
        let early = Utc.with_ymd_and_hms(2025, 5, 27, 9, 59, 59).unwrap();
        let late = early + Duration::milliseconds(1);
        let whole = Utc.with_ymd_and_hms(2025, 5, 27, 10, 0, 0).unwrap();

        assert!(format_timestamp(&early) < format_timestamp(&late));
        assert!(format_timestamp(&late) < format_timestamp(&whole));
        assert_eq!(format_timestamp(&whole), "2025-05-27T10:00:00.000000Z");
    }
}
