/// Timestamps for sar data.
///
/// sar prints wall-clock times without any zone information, and the report's date comes from its
/// first line, so a Timestamp is a naive date-time with one-second resolution.  Nothing here tries
/// to map times to UTC.
use anyhow::{bail, Result};
use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};

pub type Timestamp = NaiveDateTime;

pub fn timestamp_from_ymdhms(
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: u32,
) -> Result<Timestamp> {
    let Some(date) = NaiveDate::from_ymd_opt(year, month, day) else {
        bail!("Invalid date {year:04}-{month:02}-{day:02}")
    };
    let Some(time) = NaiveTime::from_hms_opt(hour, minute, second) else {
        bail!("Invalid time {hour:02}:{minute:02}:{second:02}")
    };
    Ok(date.and_time(time))
}

pub fn timestamp_from_ymd(year: i32, month: u32, day: u32) -> Result<Timestamp> {
    timestamp_from_ymdhms(year, month, day, 0, 0, 0)
}

pub fn add_day(t: Timestamp) -> Timestamp {
    t + Duration::days(1)
}

pub fn end_of_day(t: Timestamp) -> Timestamp {
    t.date().and_time(NaiveTime::MIN) + Duration::seconds(24 * 60 * 60 - 1)
}

/// Signed distance in whole seconds from `earlier` to `later`.

pub fn seconds_between(earlier: Timestamp, later: Timestamp) -> i64 {
    (later - earlier).num_seconds()
}

// Formats accepted by parse_timestamp, tried in order.  A bare date is handled separately.

const DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
];

/// Parse a user-supplied time: YYYY-MM-DD, optionally followed by a space or `T` and HH:MM or
/// HH:MM:SS.  A bare date means the start of that day.

pub fn parse_timestamp(s: &str) -> Result<Timestamp> {
    let s = s.trim();
    for fmt in DATETIME_FORMATS {
        if let Ok(t) = NaiveDateTime::parse_from_str(s, fmt) {
            return Ok(t);
        }
    }
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Ok(d.and_time(NaiveTime::MIN));
    }
    bail!("Invalid time '{s}', expected YYYY-MM-DD[ HH:MM[:SS]]")
}

/// True iff `s` names a whole day rather than an instant, ie, parse_timestamp would have to
/// pick the start of the day.

pub fn is_date_only(s: &str) -> bool {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").is_ok()
}

#[test]
fn test_parse_timestamp() {
    let t = parse_timestamp("2014-01-01 13:45:03").unwrap();
    assert!(t == timestamp_from_ymdhms(2014, 1, 1, 13, 45, 3).unwrap());
    let t = parse_timestamp("2014-01-01T13:45").unwrap();
    assert!(t == timestamp_from_ymdhms(2014, 1, 1, 13, 45, 0).unwrap());
    let t = parse_timestamp(" 2014-02-28 ").unwrap();
    assert!(t == timestamp_from_ymd(2014, 2, 28).unwrap());
    assert!(is_date_only("2014-02-28"));
    assert!(!is_date_only("2014-02-28 10:00"));

    assert!(parse_timestamp("2014-02-30").is_err());
    assert!(parse_timestamp("13:45:03").is_err());
    assert!(parse_timestamp("").is_err());
}

#[test]
fn test_day_arithmetic() {
    let t = timestamp_from_ymdhms(2016, 2, 28, 23, 59, 0).unwrap();
    assert!(add_day(t) == timestamp_from_ymdhms(2016, 2, 29, 23, 59, 0).unwrap());
    assert!(end_of_day(t) == timestamp_from_ymdhms(2016, 2, 28, 23, 59, 59).unwrap());
    let u = timestamp_from_ymdhms(2016, 2, 29, 0, 1, 0).unwrap();
    assert!(seconds_between(t, u) == 120);
    assert!(seconds_between(u, t) == -120);
    assert!(timestamp_from_ymd(2015, 2, 29).is_err());
    assert!(timestamp_from_ymdhms(2015, 2, 28, 24, 0, 0).is_err());
}
