/// Parser for one sar text report (the output of `sar -A` and friends).
///
/// A report looks like this:
///
///   Linux 3.10.0-123.el7.x86_64 (myhost)  03/09/2014  _x86_64_  (4 CPU)
///
///   12:00:01 AM     CPU     %user     %nice   %system   %iowait    %steal     %idle
///   12:10:01 AM     all      0.25      0.00      0.10      0.02      0.00     99.63
///   12:10:01 AM       0      0.30      0.00      0.12      0.01      0.00     99.57
///   Average:        all      0.25      0.00      0.10      0.02      0.00     99.63
///
///   12:00:01 AM  kbmemfree kbmemused  %memused ...
///   ...
///
/// The first line names the kernel, host and date.  Then follow tables separated by blank lines,
/// each introduced by a column header line and possibly closed by "Average:" lines.  Some sar
/// versions repeat the header line within a table; that shows up as a new table after a blank line.
///
/// The parser is a state machine over lines.  Every transition either consumes the line or hands it
/// on to the next state: after blank lines, the first nonblank line is both the end of the gap and
/// the start of a table.
use crate::dataset::{Dataset, Stored};
use crate::error::{CatalogError, Duplicate, SarError};
use crate::lines::{column_headers, is_blank, is_summary};
use crate::pattern::{Row, RowPattern};
use crate::timestamp::{DayTracker, Placement};

use chrono::NaiveDate;
use itertools::Itertools;
use once_cell::sync::Lazy;
use regex::Regex;
use sarutils::Timestamp;
use std::io::BufRead;
use tracing::{debug, info};

/// Data from the first line of a report.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportMetadata {
    pub kernel: String,
    pub version: String,
    pub hostname: String,
    pub date: NaiveDate,
}

/// Caller controls for parsing.  Rows outside [start, end] are dropped silently.  Tables whose
/// first column header is in `skip_tables` are not parsed at all.

#[derive(Debug, Clone)]
pub struct ParseOptions {
    pub start: Option<Timestamp>,
    pub end: Option<Timestamp>,
    pub skip_tables: Vec<String>,
}

impl Default for ParseOptions {
    fn default() -> ParseOptions {
        ParseOptions {
            start: None,
            end: None,
            // The USB device table has free-text columns that defeat the row matcher.
            skip_tables: vec!["BUS".to_string()],
        }
    }
}

static PREAMBLE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\S+)\s+(\S+)\s+\((\S+)\)\s+(\d{4}-\d{2}-\d{2}|\d{2}/\d{2}/\d{2,4}).*$")
        .expect("Preamble pattern")
});

/// Parse the first line of a report: kernel name, kernel release, (hostname), and the date as
/// either YYYY-MM-DD or MM/DD/YY(YY).  Two-digit years are in the 2000s.

pub fn parse_preamble(line: &str) -> Option<ReportMetadata> {
    let caps = PREAMBLE.captures(line)?;
    let date = &caps[4];
    let (y, m, d) = if let Some((mm, rest)) = date.split_once('/') {
        let (dd, yy) = rest.split_once('/')?;
        let mut y = yy.parse::<i32>().ok()?;
        if yy.len() == 2 {
            y += 2000;
        }
        (y, mm.parse::<u32>().ok()?, dd.parse::<u32>().ok()?)
    } else {
        let mut parts = date.split('-');
        (
            parts.next()?.parse::<i32>().ok()?,
            parts.next()?.parse::<u32>().ok()?,
            parts.next()?.parse::<u32>().ok()?,
        )
    };
    Some(ReportMetadata {
        kernel: caps[1].to_string(),
        version: caps[2].to_string(),
        hostname: caps[3].to_string(),
        date: NaiveDate::from_ymd_opt(y, m, d)?,
    })
}

enum State {
    Start,
    AfterFirstLine,
    AfterEmptyLine,
    TableStart,
    TableRow(RowPattern),
    TableEnd,
    SkipUntilEot,
}

enum Transition {
    /// The line is done, continue with the next line in this state.
    Consume(State),
    /// Process the same line again in this state.
    Reprocess(State),
}

struct Parser<'a> {
    file_name: &'a str,
    options: &'a ParseOptions,
    dataset: &'a mut Dataset,
    duplicates: &'a mut Vec<Duplicate>,
    line_no: usize,
    metadata: Option<ReportMetadata>,
    tracker: Option<DayTracker>,
    tables: usize,
    rows: usize,
    // The line number of the last duplicate recorded, so that each line is recorded once.
    last_duplicate: usize,
}

/// Parse one report from `reader` into `dataset`, appending lines with duplicate keys to
/// `duplicates`.  `file_name` is used for diagnostics only.  Returns the report's metadata.

pub fn parse_report<R: BufRead>(
    file_name: &str,
    reader: R,
    options: &ParseOptions,
    dataset: &mut Dataset,
    duplicates: &mut Vec<Duplicate>,
) -> Result<ReportMetadata, SarError> {
    let mut p = Parser {
        file_name,
        options,
        dataset,
        duplicates,
        line_no: 0,
        metadata: None,
        tracker: None,
        tables: 0,
        rows: 0,
        last_duplicate: 0,
    };
    let mut state = State::Start;
    for line in reader.lines() {
        let line = line.map_err(|e| SarError::Io {
            file: file_name.to_string(),
            source: e,
        })?;
        p.line_no += 1;
        loop {
            match p.step(state, &line)? {
                Transition::Consume(next) => {
                    state = next;
                    break;
                }
                Transition::Reprocess(next) => {
                    state = next;
                }
            }
        }
    }
    match p.metadata.take() {
        Some(metadata) => {
            info!(
                "{file_name}: {} lines, {} tables, {} rows",
                p.line_no, p.tables, p.rows
            );
            Ok(metadata)
        }
        None => Err(SarError::MalformedPreamble {
            file: file_name.to_string(),
            line: 1,
            text: "".to_string(),
        }),
    }
}

impl<'a> Parser<'a> {
    fn step(&mut self, state: State, line: &str) -> Result<Transition, SarError> {
        match state {
            State::Start => match parse_preamble(line) {
                Some(metadata) => {
                    self.tracker = Some(DayTracker::new(metadata.date));
                    self.metadata = Some(metadata);
                    Ok(Transition::Consume(State::AfterFirstLine))
                }
                None => Err(SarError::MalformedPreamble {
                    file: self.file_name.to_string(),
                    line: self.line_no,
                    text: line.to_string(),
                }),
            },

            State::AfterFirstLine => {
                if is_blank(line) {
                    Ok(Transition::Consume(State::AfterEmptyLine))
                } else {
                    Err(self.unexpected("a blank line after the report header", line))
                }
            }

            State::AfterEmptyLine => {
                if is_blank(line) {
                    Ok(Transition::Consume(State::AfterEmptyLine))
                } else if is_summary(line) {
                    Ok(Transition::Consume(State::TableEnd))
                } else {
                    Ok(Transition::Reprocess(State::TableStart))
                }
            }

            State::TableStart => self.table_start(line),

            State::TableRow(pattern) => {
                if is_blank(line) {
                    Ok(Transition::Consume(State::AfterEmptyLine))
                } else if is_summary(line) {
                    Ok(Transition::Consume(State::TableEnd))
                } else if let Some(row) = pattern.captures(line) {
                    self.record(&pattern, row)?;
                    Ok(Transition::Consume(State::TableRow(pattern)))
                } else {
                    Err(SarError::RowMismatch {
                        file: self.file_name.to_string(),
                        line: self.line_no,
                        headers: pattern.headers().iter().join(" "),
                        pattern: pattern.as_str().to_string(),
                        text: line.to_string(),
                    })
                }
            }

            State::TableEnd => {
                if is_blank(line) {
                    Ok(Transition::Consume(State::AfterEmptyLine))
                } else if is_summary(line) {
                    Ok(Transition::Consume(State::TableEnd))
                } else {
                    Err(self.unexpected("a blank or summary line after a table", line))
                }
            }

            State::SkipUntilEot => {
                if is_blank(line) {
                    Ok(Transition::Consume(State::AfterEmptyLine))
                } else {
                    Ok(Transition::Consume(State::SkipUntilEot))
                }
            }
        }
    }

    fn table_start(&mut self, line: &str) -> Result<Transition, SarError> {
        // Restarts are not recorded; the row has no counters.
        if line.contains("LINUX RESTART") {
            debug!("{}:{}: Restart marker", self.file_name, self.line_no);
            return Ok(Transition::Consume(State::TableEnd));
        }
        if is_blank(line) {
            return Ok(Transition::Consume(State::AfterEmptyLine));
        }
        let Some((_, headers)) = column_headers(line) else {
            return Err(self.unexpected("a column header line", line));
        };

        // Every table starts over from the report's date.
        if let Some(tracker) = self.tracker.as_mut() {
            if tracker.current() != tracker.base() {
                debug!(
                    "{}:{}: Table starts over on {}",
                    self.file_name,
                    self.line_no,
                    tracker.base()
                );
            }
            tracker.reset_table();
        }

        if self.options.skip_tables.iter().any(|s| s == headers[0]) {
            debug!(
                "{}:{}: Skipping table {}",
                self.file_name,
                self.line_no,
                headers.join(" ")
            );
            return Ok(Transition::Consume(State::SkipUntilEot));
        }

        match RowPattern::build(&headers) {
            Ok(pattern) => {
                self.tables += 1;
                Ok(Transition::Consume(State::TableRow(pattern)))
            }
            Err(CatalogError::UnknownColumn(name)) => Err(SarError::UnknownColumn {
                file: self.file_name.to_string(),
                line: self.line_no,
                name,
            }),
            Err(_) => Err(self.unexpected("a table with fewer columns", line)),
        }
    }

    // Place the row in time, apply the time window, and store it.  Returns the row's instant, or
    // None if it was outside the window.

    fn record(&mut self, pattern: &RowPattern, row: Row) -> Result<Option<Timestamp>, SarError> {
        let placement = match self.tracker.as_mut() {
            Some(tracker) => tracker.advance(row.time()),
            None => Placement::Malformed,
        };
        let instant = match placement {
            Placement::At {
                instant,
                rolled_over,
            } => {
                if rolled_over {
                    debug!(
                        "{}:{}: Day rollover to {}",
                        self.file_name,
                        self.line_no,
                        instant.date()
                    );
                }
                instant
            }
            Placement::Regression { previous, current } => {
                return Err(SarError::TimeRegression {
                    file: self.file_name.to_string(),
                    line: self.line_no,
                    previous: previous.to_string(),
                    current: current.to_string(),
                })
            }
            Placement::Malformed => {
                return Err(SarError::BadTimestamp {
                    file: self.file_name.to_string(),
                    line: self.line_no,
                    text: row.time().to_string(),
                })
            }
        };

        // The window applies after placement.  Rows outside it still advance the day tracker, or
        // the first rows after midnight would land on the report's date and fall outside it.
        if self.options.start.map_or(false, |start| instant < start)
            || self.options.end.map_or(false, |end| instant > end)
        {
            return Ok(None);
        }

        if self.dataset.insert_row(instant, pattern, &row) == Stored::Duplicate
            && self.last_duplicate != self.line_no
        {
            debug!("{}:{}: Duplicate key", self.file_name, self.line_no);
            self.last_duplicate = self.line_no;
            self.duplicates.push(Duplicate {
                file: self.file_name.to_string(),
                line: self.line_no,
            });
        }
        self.rows += 1;
        Ok(Some(instant))
    }

    fn unexpected(&self, expected: &'static str, line: &str) -> SarError {
        SarError::UnexpectedLine {
            file: self.file_name.to_string(),
            line: self.line_no,
            expected,
            text: line.to_string(),
        }
    }
}

#[cfg(test)]
fn parse_text(
    text: &str,
    options: &ParseOptions,
) -> Result<(ReportMetadata, Dataset, Vec<Duplicate>), SarError> {
    let mut ds = Dataset::new();
    let mut dups = vec![];
    let md = parse_report("test.txt", text.as_bytes(), options, &mut ds, &mut dups)?;
    Ok((md, ds, dups))
}

#[cfg(test)]
fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> Timestamp {
    sarutils::timestamp_from_ymdhms(y, mo, d, h, mi, s).unwrap()
}

#[test]
fn test_parse_preamble() {
    let line = "Linux 3.10.0-123.el7.x86_64 (myhost.example.com) \t03/09/2014 \t_x86_64_\t(4 CPU)";
    let md = parse_preamble(line).unwrap();
    assert!(md.kernel == "Linux");
    assert!(md.version == "3.10.0-123.el7.x86_64");
    assert!(md.hostname == "myhost.example.com");
    assert!(md.date == NaiveDate::from_ymd_opt(2014, 3, 9).unwrap());

    let md = parse_preamble("Linux 2.6.32 (h) 12/31/13 _x86_64_").unwrap();
    assert!(md.date == NaiveDate::from_ymd_opt(2013, 12, 31).unwrap());

    let md = parse_preamble("Linux 4.18.0 (h) 2021-07-01 _x86_64_ (8 CPU)").unwrap();
    assert!(md.date == NaiveDate::from_ymd_opt(2021, 7, 1).unwrap());

    assert!(parse_preamble("Linux 4.18.0 h 2021-07-01").is_none());
    assert!(parse_preamble("Linux 4.18.0 (h) 2021-13-01").is_none());
    assert!(parse_preamble("").is_none());
}

#[test]
fn test_parse_simple() {
    let text = "Linux 4.18.0 (h) 2021-07-01 _x86_64_ (2 CPU)

00:00:01     CPU     %user     %idle
00:10:01     all      1.00     99.00
00:10:01       0      2.00     98.00
00:10:01       1      0.00    100.00
00:20:01     all      1.50     98.50
00:20:01       0      3.00     97.00
00:20:01       1      0.00    100.00
Average:     all      1.25     98.75

00:00:01   runq-sz  ldavg-1
00:10:01         1     0.50
00:20:01         0     0.25
Average:         0     0.37
";
    let (md, ds, dups) = parse_text(text, &ParseOptions::default()).unwrap();
    assert!(md.hostname == "h");
    assert!(dups.is_empty());
    assert!(ds.len() == 2);
    let t = at(2021, 7, 1, 0, 10, 1);
    assert!(ds.value(t, "CPU#0#%user").and_then(|v| v.as_f64()) == Some(2.0));
    assert!(ds.value(t, "CPU#1#%idle").and_then(|v| v.as_f64()) == Some(100.0));
    assert!(ds.value(t, "ldavg-1").and_then(|v| v.as_f64()) == Some(0.5));
    // Aggregate rows are not stored.
    assert!(ds.available_keys().iter().all(|k| !k.as_str().starts_with("CPU#all#")));
}

#[test]
fn test_parse_rollover_window_and_restart() {
    let text = "Linux 4.18.0 (h) 2021-07-01 _x86_64_ (2 CPU)

11:50:01 PM  kbmemfree
11:58:00 PM       100
12:02:00 AM       200
12:06:00 AM       300

12:14:37 AM       LINUX RESTART\t(2 CPU)

12:20:01 AM  kbmemfree
12:30:01 AM       400
";
    let (_, ds, _) = parse_text(text, &ParseOptions::default()).unwrap();
    assert!(ds.value(at(2021, 7, 1, 23, 58, 0), "kbmemfree").is_some());
    assert!(ds.value(at(2021, 7, 2, 0, 2, 0), "kbmemfree").is_some());
    assert!(ds.value(at(2021, 7, 2, 0, 6, 0), "kbmemfree").is_some());
    // The next table starts over on the report's date.
    assert!(ds.value(at(2021, 7, 1, 0, 30, 1), "kbmemfree").is_some());

    let options = ParseOptions {
        start: Some(at(2021, 7, 2, 0, 0, 0)),
        end: Some(at(2021, 7, 2, 0, 5, 0)),
        ..Default::default()
    };
    let (_, ds, _) = parse_text(text, &options).unwrap();
    assert!(ds.timestamps() == vec![at(2021, 7, 2, 0, 2, 0)]);
}

#[test]
fn test_parse_window_after_midnight() {
    // None of the rows before midnight are in the window, but they still move the table to the
    // next day.
    let text = "Linux 4.18.0 (h) 2021-07-01 _x86_64_ (2 CPU)

23:50:01  kbmemfree
23:55:01        100
00:00:01        200
00:05:01        300
";
    let options = ParseOptions {
        start: Some(at(2021, 7, 2, 0, 0, 0)),
        ..Default::default()
    };
    let (_, ds, _) = parse_text(text, &options).unwrap();
    assert!(ds.timestamps() == vec![at(2021, 7, 2, 0, 0, 1), at(2021, 7, 2, 0, 5, 1)]);
    let value = ds.value(at(2021, 7, 2, 0, 0, 1), "kbmemfree");
    assert!(value.map(|v| v.to_string()) == Some("200".to_string()));
}

#[test]
fn test_parse_errors() {
    let header = "Linux 4.18.0 (h) 2021-07-01 _x86_64_ (2 CPU)\n\n";

    let e = parse_text("", &ParseOptions::default()).unwrap_err();
    assert!(matches!(e, SarError::MalformedPreamble { .. }));

    let e = parse_text("not a report\n", &ParseOptions::default()).unwrap_err();
    assert!(matches!(e, SarError::MalformedPreamble { line: 1, .. }));

    let e =
        parse_text("Linux 4.18.0 (h) 2021-07-01\nextra\n", &ParseOptions::default()).unwrap_err();
    assert!(matches!(e, SarError::UnexpectedLine { line: 2, .. }));

    let text = format!("{header}00:00:01  kbmemfree  %frobs\n00:10:01 1 2.00\n");
    let e = parse_text(&text, &ParseOptions::default()).unwrap_err();
    match e {
        SarError::UnknownColumn { line, name, .. } => {
            assert!(line == 3);
            assert!(name == "%frobs");
        }
        other => panic!("Unexpected error {other}"),
    }

    let text = format!("{header}00:00:01  kbmemfree\n00:10:01 1.5\n");
    let e = parse_text(&text, &ParseOptions::default()).unwrap_err();
    assert!(matches!(e, SarError::RowMismatch { line: 4, .. }));

    let text = format!("{header}00:00:01  kbmemfree\n00:10:01 1\n00:05:01 2\n");
    let e = parse_text(&text, &ParseOptions::default()).unwrap_err();
    assert!(matches!(e, SarError::TimeRegression { line: 5, .. }));

    let text = format!("{header}12 monkeys\n");
    let e = parse_text(&text, &ParseOptions::default()).unwrap_err();
    assert!(matches!(e, SarError::UnexpectedLine { line: 3, .. }));

    let text = format!("{header}00:00:01  kbmemfree\n00:10:01 1\nAverage: 1\ngarbage\n");
    let e = parse_text(&text, &ParseOptions::default()).unwrap_err();
    assert!(matches!(e, SarError::UnexpectedLine { line: 6, .. }));
}

#[test]
fn test_parse_skip_and_duplicates() {
    let text = "Linux 4.18.0 (h) 2021-07-01 _x86_64_ (2 CPU)

00:00:01  BUS  idvendor    idprod  maxpower     manufact        product
00:10:01    1      1d6b      0002         0     Linux Foundation\tRoot hub

00:00:01  MBfsfree  MBfsused  %fsused  FILESYSTEM
00:10:01       100        20    16.67  /dev/sda1
00:10:01       100        20    16.67  /dev/sda1
Summary:       100        20    16.67  /dev/sda1
";
    let (_, ds, dups) = parse_text(text, &ParseOptions::default()).unwrap();
    assert!(dups == vec![Duplicate { file: "test.txt".to_string(), line: 8 }]);
    assert!(ds.available_keys().iter().all(|k| !k.as_str().starts_with("BUS")));
    assert!(ds.value(at(2021, 7, 1, 0, 10, 1), "FILESYSTEM#/dev/sda1#%fsused").is_some());

    // Without the skip list the USB table is parsed too.
    let options = ParseOptions {
        skip_tables: vec![],
        ..Default::default()
    };
    let (_, ds, _) = parse_text(text, &options).unwrap();
    assert!(ds.value(at(2021, 7, 1, 0, 10, 1), "BUS#1#idvendor").is_some());
}
