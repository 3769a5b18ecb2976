// Misc utilities useful to both sarlog and saralyze.

mod dates;
mod natsort;

// Types and utilities for manipulating timestamps.  Timestamps are naive local wall-clock times,
// the way sar prints them.

pub use dates::Timestamp;

// Parse a &str (YYYY-MM-DD with optional time of day) into a Timestamp.

pub use dates::parse_timestamp;

// True if the string is a bare date, with no time of day.

pub use dates::is_date_only;

// Given year, month, day, hour, minute, second, return a Timestamp.

pub use dates::timestamp_from_ymdhms;

// Given year, month, day, return a Timestamp for midnight at the start of the day.

pub use dates::timestamp_from_ymd;

// Add a day to the timestamp.

pub use dates::add_day;

// The last second of the timestamp's day.

pub use dates::end_of_day;

// Signed whole seconds between two timestamps.

pub use dates::seconds_between;

// Compare and sort strings with embedded numbers by numeric value.

pub use natsort::natural_cmp;
pub use natsort::natural_sort;
