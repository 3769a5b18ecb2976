/// Classification of raw report lines.  These are pure predicates; the parser decides what each
/// kind of line means in its current state.
use once_cell::sync::Lazy;
use regex::Regex;

/// Time of day at the start of a table row or header line, as a regex fragment without capture
/// groups.

pub const TIMESTAMP_RE: &str = r"\d{2}:\d{2}:\d{2}(?:\sAM|\sPM)?";

// Header tokens are drawn from a character class without digits so that a data row can never be
// taken for a header.  The few headers that do contain digits are listed explicitly.
static COLUMN_HEADERS: Lazy<Regex> = Lazy::new(|| {
    let tokens = r"(?:[a-zA-Z1360%/_-]+|i\d{3}/s|i2big6/s|ipck2b6/s|opck2b6/s|ldavg-\d+)";
    Regex::new(&format!(r"^({TIMESTAMP_RE})\s+((?:{tokens}\s*)+)\s*$"))
        .expect("Column header pattern")
});

pub fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

/// "Average:" and "Summary" lines close a table.

pub fn is_summary(line: &str) -> bool {
    line.starts_with("Average") || line.starts_with("Summary")
}

/// If `line` is a column header line, return its time of day and the column names.

pub fn column_headers(line: &str) -> Option<(&str, Vec<&str>)> {
    let caps = COLUMN_HEADERS.captures(line)?;
    let time = caps.get(1)?.as_str();
    let headers = caps
        .get(2)?
        .as_str()
        .split_whitespace()
        .collect::<Vec<&str>>();
    Some((time, headers))
}

#[test]
fn test_blank_and_summary() {
    assert!(is_blank(""));
    assert!(is_blank("  \t "));
    assert!(!is_blank(" x "));
    assert!(is_summary("Average:     all      0.25      0.00"));
    assert!(is_summary("Summary:"));
    assert!(!is_summary(" Average:"));
    assert!(!is_summary("12:00:01 AM Average"));
}

#[test]
fn test_column_headers() {
    let (t, h) = column_headers("12:00:01 AM     CPU     %user     %nice   %system").unwrap();
    assert!(t == "12:00:01 AM");
    assert!(h == vec!["CPU", "%user", "%nice", "%system"]);

    let line = "00:00:01      runq-sz  plist-sz   ldavg-1   ldavg-5  ldavg-15";
    let (t, h) = column_headers(line).unwrap();
    assert!(t == "00:00:01");
    assert!(h == vec!["runq-sz", "plist-sz", "ldavg-1", "ldavg-5", "ldavg-15"]);

    let (_, h) = column_headers("00:00:01         INTR    intr/s").unwrap();
    assert!(h == vec!["INTR", "intr/s"]);

    let (_, h) = column_headers("00:00:01      CPU  i000/s  i001/s  i008/s").unwrap();
    assert!(h == vec!["CPU", "i000/s", "i001/s", "i008/s"]);

    let (_, h) = column_headers("00:00:01  irec6/s fwddgm6/s idel6/s orq6/s").unwrap();
    assert!(h == vec!["irec6/s", "fwddgm6/s", "idel6/s", "orq6/s"]);

    let (_, h) = column_headers("00:00:01 LINUX RESTART").unwrap();
    assert!(h == vec!["LINUX", "RESTART"]);
}

#[test]
fn test_data_rows_are_not_headers() {
    assert!(column_headers("12:10:01 AM     all      0.25      0.00      0.10").is_none());
    let row = "00:10:01            0        0        0.02      0.05      0.01";
    assert!(column_headers(row).is_none());
    assert!(column_headers("00:10:01         eth0      5.00      3.00").is_none());
    assert!(column_headers("00:10:01     dev8-0      1.50      0.00     12.00").is_none());
    assert!(column_headers("Average:        CPU     %user").is_none());
    assert!(column_headers("").is_none());
}
