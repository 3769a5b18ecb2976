/// Turning sar's time-of-day column into absolute timestamps.
///
/// sar prints only the time of day on each row; the date comes from the report's first line.  Rows
/// are assumed to be in time order within a table, so the only way for time to go backwards is to
/// pass midnight, which is recognized heuristically as an hour-of-day going from 23 to 0.  This
/// misses rollovers when the sampling interval is longer than about an hour, which is accepted.
use chrono::{Duration, NaiveDate, NaiveTime, Timelike};
use once_cell::sync::Lazy;
use regex::Regex;
use sarutils::{add_day, Timestamp};

static TIME_OF_DAY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d{2}):(\d{2}):(\d{2})(?:\s?(AM|PM))?$").expect("Time-of-day pattern")
});

/// Combine `date` with a time of day "HH:MM:SS", optionally followed by " AM" or " PM".  12 AM is
/// hour 0 and PM adds 12 to hours below 12; a 24-hour time of 24:MM:SS wraps to 00:MM:SS of the
/// same date.  Returns None if the text is not of that shape or out of range.

pub fn canonicalize(date: NaiveDate, text: &str) -> Option<Timestamp> {
    let caps = TIME_OF_DAY.captures(text.trim())?;
    let mut hour = caps[1].parse::<u32>().ok()?;
    let minute = caps[2].parse::<u32>().ok()?;
    let second = caps[3].parse::<u32>().ok()?;
    match caps.get(4).map(|m| m.as_str()) {
        Some("AM") => {
            if hour == 12 {
                hour = 0
            }
        }
        Some(_) => {
            if hour < 12 {
                hour += 12
            }
        }
        None => {
            if hour == 24 {
                hour = 0
            }
        }
    }
    let time = NaiveTime::from_hms_opt(hour, minute, second)?;
    Some(date.and_time(time))
}

/// The outcome of placing a row's time of day on the timeline.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// The row is at this instant.  `rolled_over` is true if the date advanced to get there.
    At { instant: Timestamp, rolled_over: bool },

    /// The row is earlier than the previous row, and not by a midnight crossing.
    Regression { previous: Timestamp, current: Timestamp },

    /// The time of day could not be parsed.
    Malformed,
}

/// Tracks the current date within one report file.  Each table starts over from the file's base
/// date, since every table covers the same period.

#[derive(Debug, Clone)]
pub struct DayTracker {
    base: NaiveDate,
    current: NaiveDate,
    previous: Option<Timestamp>,
}

impl DayTracker {
    pub fn new(base: NaiveDate) -> DayTracker {
        DayTracker {
            base,
            current: base,
            previous: None,
        }
    }

    pub fn base(&self) -> NaiveDate {
        self.base
    }

    pub fn current(&self) -> NaiveDate {
        self.current
    }

    pub fn reset_table(&mut self) {
        self.current = self.base;
        self.previous = None;
    }

    /// Place the next row's time of day.  Equal instants are fine; the caller decides what to do
    /// about duplicate data.

    pub fn advance(&mut self, text: &str) -> Placement {
        let Some(mut instant) = canonicalize(self.current, text) else {
            return Placement::Malformed;
        };
        let mut rolled_over = false;
        if let Some(previous) = self.previous {
            if previous.hour() == 23 && instant.hour() == 0 {
                self.current = self.current + Duration::days(1);
                instant = add_day(instant);
                rolled_over = true;
            } else if instant < previous {
                return Placement::Regression {
                    previous,
                    current: instant,
                };
            }
        }
        self.previous = Some(instant);
        Placement::At {
            instant,
            rolled_over,
        }
    }
}

#[cfg(test)]
fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_canonicalize() {
    let d = day(2014, 3, 9);
    let t = |h, m, s| sarutils::timestamp_from_ymdhms(2014, 3, 9, h, m, s).unwrap();
    assert!(canonicalize(d, "13:45:03") == Some(t(13, 45, 3)));
    assert!(canonicalize(d, "12:10:00 AM") == Some(t(0, 10, 0)));
    assert!(canonicalize(d, "12:10:00 PM") == Some(t(12, 10, 0)));
    assert!(canonicalize(d, "01:10:00 PM") == Some(t(13, 10, 0)));
    assert!(canonicalize(d, "11:59:59 AM") == Some(t(11, 59, 59)));
    assert!(canonicalize(d, "24:00:00") == Some(t(0, 0, 0)));
    assert!(canonicalize(d, "1:00:00").is_none());
    assert!(canonicalize(d, "25:00:00").is_none());
    assert!(canonicalize(d, "Average:").is_none());
}

#[test]
fn test_day_rollover() {
    let mut tr = DayTracker::new(day(2014, 3, 9));
    let first = tr.advance("23:58:00");
    assert!(
        first
            == Placement::At {
                instant: sarutils::timestamp_from_ymdhms(2014, 3, 9, 23, 58, 0).unwrap(),
                rolled_over: false
            }
    );
    let second = tr.advance("00:02:00");
    assert!(
        second
            == Placement::At {
                instant: sarutils::timestamp_from_ymdhms(2014, 3, 10, 0, 2, 0).unwrap(),
                rolled_over: true
            }
    );
    assert!(tr.current() == day(2014, 3, 10));

    // Rows after the rollover stay on the new day.
    assert!(matches!(tr.advance("00:04:00"), Placement::At { rolled_over: false, .. }));
    assert!(tr.current() == day(2014, 3, 10));

    // A new table starts over from the base date.
    tr.reset_table();
    assert!(tr.current() == day(2014, 3, 9));
    assert!(tr.base() == day(2014, 3, 9));
}

#[test]
fn test_regression() {
    let mut tr = DayTracker::new(day(2014, 3, 9));
    assert!(matches!(tr.advance("10:00:00"), Placement::At { .. }));
    assert!(matches!(tr.advance("10:00:00"), Placement::At { .. }));
    assert!(matches!(tr.advance("09:59:00"), Placement::Regression { .. }));
    assert!(tr.advance("xx").eq(&Placement::Malformed));
}
