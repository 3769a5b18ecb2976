/// Reading a set of sar reports into one data set.
///
/// The reports are read in the order given and all feed the same data set, so that several days
/// of reports for one host can be viewed together.  Day tracking and time ordering are per file.
use crate::dataset::Dataset;
use crate::error::{Duplicate, SarError};
use crate::reportfile::{parse_report, ParseOptions, ReportMetadata};

use sarutils::Timestamp;
use std::fs::File;
use std::io::{BufRead, BufReader};
use tracing::info;

#[derive(Debug)]
pub struct Report {
    /// Metadata of the first file.
    pub metadata: ReportMetadata,

    /// Metadata of each file, parallel to `files`.
    pub file_metadata: Vec<ReportMetadata>,
    pub files: Vec<String>,

    /// The finalized data.
    pub dataset: Dataset,

    /// Lines that wrote a key already present at their timestamp.
    pub duplicates: Vec<Duplicate>,

    /// Mean seconds between samples, None with fewer than two timestamps.
    pub sample_frequency: Option<f64>,
}

impl Report {
    /// Intervals between consecutive samples that are more than 10% longer than the mean.

    pub fn gaps(&self) -> Vec<(Timestamp, Timestamp)> {
        match self.sample_frequency {
            Some(f) => self.dataset.gaps(f),
            None => vec![],
        }
    }

    /// The sampling frequency as eg "10 minutes" or "2 minutes 30 seconds".

    pub fn frequency_text(&self) -> Option<String> {
        let f = self.sample_frequency?;
        let mins = (f / 60.0) as i64;
        let secs = (f % 60.0) as i64;
        if secs > 0 {
            Some(format!("{mins} minutes {secs} seconds"))
        } else {
            Some(format!("{mins} minutes"))
        }
    }

    /// One line about the duplicate keys, naming the first `max` duplicate lines as FILE:LINE, or
    /// None if there were none.

    pub fn duplicates_summary(&self, max: usize) -> Option<String> {
        if self.duplicates.is_empty() {
            return None;
        }
        let shown = self
            .duplicates
            .iter()
            .take(max)
            .map(|d| d.to_string())
            .collect::<Vec<String>>()
            .join(", ");
        let more = if self.duplicates.len() > max { ", ..." } else { "" };
        Some(format!(
            "Lines with duplicate keys ({}), later values replace earlier: {shown}{more}",
            self.duplicates.len()
        ))
    }

    /// Release the data.  A report is never needed after this, so take it by value.

    pub fn close(self) {}
}

/// How many duplicate lines to name in messages.

pub const MAX_DUPLICATES_SHOWN: usize = 10;

/// Read and finalize a set of report files.  Fails at the first file that cannot be parsed.

pub fn read_reports(files: &[String], options: &ParseOptions) -> Result<Report, SarError> {
    let mut sources = vec![];
    for name in files {
        let file = File::open(name).map_err(|e| SarError::Io {
            file: name.clone(),
            source: e,
        })?;
        sources.push((name.clone(), BufReader::new(file)));
    }
    read_sources(sources, options)
}

/// Like read_reports, but from named readers.

pub fn read_sources<R: BufRead>(
    sources: Vec<(String, R)>,
    options: &ParseOptions,
) -> Result<Report, SarError> {
    if sources.is_empty() {
        return Err(SarError::NoInput);
    }
    let mut dataset = Dataset::new();
    let mut duplicates = vec![];
    let mut files = vec![];
    let mut file_metadata = vec![];
    for (name, reader) in sources {
        let md = parse_report(&name, reader, options, &mut dataset, &mut duplicates)?;
        file_metadata.push(md);
        files.push(name);
    }
    dataset.finalize();
    let sample_frequency = dataset.sample_frequency();
    info!(
        "{} files, {} timestamps, {} keys, {} duplicate lines",
        files.len(),
        dataset.len(),
        dataset.available_datasets().len(),
        duplicates.len()
    );
    Ok(Report {
        metadata: file_metadata[0].clone(),
        file_metadata,
        files,
        dataset,
        duplicates,
        sample_frequency,
    })
}

#[cfg(test)]
const RHEL7: &str = "../../tests/sarlog/sar-rhel7.txt";

#[cfg(test)]
const RHEL8: &str = "../../tests/sarlog/sar-rhel8.txt";

#[cfg(test)]
fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> Timestamp {
    sarutils::timestamp_from_ymdhms(y, mo, d, h, mi, s).unwrap()
}

#[cfg(test)]
fn num(r: &Report, t: Timestamp, key: &str) -> Option<f64> {
    r.dataset.value(t, key).and_then(|v| v.as_f64())
}

#[test]
fn test_read_rhel7() {
    let r = read_reports(&[RHEL7.to_string()], &ParseOptions::default()).unwrap();
    assert!(r.metadata.hostname == "testhost.example.com");
    assert!(r.metadata.kernel == "Linux");
    assert!(r.metadata.version == "3.10.0-123.el7.x86_64");
    assert!(r.metadata.date == chrono::NaiveDate::from_ymd_opt(2014, 3, 9).unwrap());

    // 11:50 PM, 11:58 PM, and 12:02 AM the next day.
    let times = r.dataset.timestamps();
    assert!(
        times
            == vec![
                at(2014, 3, 9, 23, 50, 1),
                at(2014, 3, 9, 23, 58, 1),
                at(2014, 3, 10, 0, 2, 1)
            ]
    );

    assert!(num(&r, times[0], "DEV#dev8-0#%util") == Some(4.5));
    assert!(num(&r, times[2], "CPU#1#%idle") == Some(97.25));
    assert!(num(&r, times[0], "retrant/s") == Some(0.3));
    assert!(num(&r, times[0], "retrans/s") == Some(1.0));
    assert!(
        r.dataset.value(times[1], "CPU#0#i001/s").map(|v| v.to_string()) == Some("N/A".to_string())
    );

    let keys = r.dataset.available_keys();
    assert!(keys.iter().all(|k| !k.as_str().starts_with("CPU#all#")));
    assert!(keys.iter().all(|k| !k.as_str().starts_with("BUS#")));
    // dev8-16 is idle throughout.
    assert!(keys.iter().all(|k| !k.as_str().starts_with("DEV#dev8-16#")));
    assert!(!keys.iter().any(|k| k.as_str() == "CPU#0#%steal"));
    assert!(keys.iter().any(|k| k.as_str() == "CPU#0#%iowait"));
    assert!(r.dataset.category("IFACE#eth0#rxkB/s") == Some("Network"));

    // Deltas 480 and 240 seconds.
    assert!(r.sample_frequency == Some(360.0));
    assert!(r.frequency_text() == Some("6 minutes".to_string()));
    assert!(r.gaps() == vec![(times[0], times[1])]);
    assert!(r.duplicates.is_empty());
    assert!(r.duplicates_summary(MAX_DUPLICATES_SHOWN).is_none());
}

#[test]
fn test_read_multiple() {
    let files = vec![RHEL7.to_string(), RHEL8.to_string()];
    let r = read_reports(&files, &ParseOptions::default()).unwrap();
    assert!(r.files == files);
    assert!(r.file_metadata.len() == 2);
    assert!(r.metadata == r.file_metadata[0]);
    assert!(r.file_metadata[1].date == chrono::NaiveDate::from_ymd_opt(2021, 7, 2).unwrap());
    assert!(r.dataset.len() == 8);

    // Every timestamp has every key.
    let keys = r.dataset.available_keys();
    assert!(keys == r.dataset.available_datasets());
    for t in r.dataset.timestamps() {
        for k in &keys {
            assert!(r.dataset.series(k.as_str()).iter().any(|(u, _)| *u == t));
        }
    }
    assert!(r.dataset.value(at(2014, 3, 9, 23, 50, 1), "ldavg-1").is_none());
    assert!(num(&r, at(2021, 7, 2, 0, 10, 1), "ldavg-1") == Some(0.5));

    // The filesystem table repeats a row.
    assert!(r.duplicates.len() == 1);
    assert!(r.duplicates[0].file == RHEL8);
    let line = r.duplicates[0].line;
    assert!(
        r.duplicates_summary(MAX_DUPLICATES_SHOWN)
            == Some(format!(
                "Lines with duplicate keys (1), later values replace earlier: {RHEL8}:{line}"
            ))
    );
    assert!(num(&r, at(2021, 7, 2, 0, 10, 1), "FILESYSTEM#/dev/sda1#MBfsfree") == Some(10240.0));

    // Never zero, but always zero.
    assert!(r.dataset.category("blocked").is_none());
    assert!(r.dataset.category("INTR#sum#intr/s") == Some("Intr"));
}

#[test]
fn test_rhel8_gaps() {
    let r = read_reports(&[RHEL8.to_string()], &ParseOptions::default()).unwrap();
    // Deltas 600, 600, 3000, 600.
    assert!(r.sample_frequency == Some(1200.0));
    assert!(r.frequency_text() == Some("20 minutes".to_string()));
    assert!(r.gaps() == vec![(at(2021, 7, 2, 0, 30, 1), at(2021, 7, 2, 1, 20, 1))]);
}

#[test]
fn test_read_idempotent() {
    let a = read_reports(&[RHEL7.to_string()], &ParseOptions::default()).unwrap();
    let b = read_reports(&[RHEL7.to_string()], &ParseOptions::default()).unwrap();
    assert!(a.dataset == b.dataset);
    a.close();

    // Decimal columns may hold "nan".
    let text = "Linux 4.18.0 (h) 2021-07-01 _x86_64_ (2 CPU)\n\n\
                00:00:01  ldavg-1\n\
                00:10:01  nan\n\
                00:20:01  0.50\n";
    let read = || {
        let sources = vec![("nan.txt".to_string(), text.as_bytes())];
        read_sources(sources, &ParseOptions::default()).unwrap()
    };
    let (a, b) = (read(), read());
    let t = at(2021, 7, 1, 0, 10, 1);
    assert!(num(&a, t, "ldavg-1").map_or(false, |x| x.is_nan()));
    assert!(a.dataset == b.dataset);
}

#[test]
fn test_read_window() {
    let options = ParseOptions {
        start: Some(at(2014, 3, 9, 23, 55, 0)),
        end: None,
        ..Default::default()
    };
    let r = read_reports(&[RHEL7.to_string()], &options).unwrap();
    assert!(r.dataset.timestamps() == vec![at(2014, 3, 9, 23, 58, 1), at(2014, 3, 10, 0, 2, 1)]);
}

#[test]
fn test_read_errors() {
    assert!(matches!(
        read_reports(&[], &ParseOptions::default()),
        Err(SarError::NoInput)
    ));
    assert!(matches!(
        read_reports(
            &["../../tests/sarlog/no-such-file.txt".to_string()],
            &ParseOptions::default()
        ),
        Err(SarError::Io { .. })
    ));

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.txt");
    std::fs::write(
        &path,
        "Linux 4.18.0 (h) 2021-07-01 _x86_64_ (2 CPU)\n\n\
         00:00:01  kbmemfree  %zorks\n00:10:01 1 2.00\n",
    )
    .unwrap();
    let name = path.to_string_lossy().to_string();
    match read_reports(&[name.clone()], &ParseOptions::default()) {
        Err(SarError::UnknownColumn { file, line, name: column }) => {
            assert!(file == name);
            assert!(line == 3);
            assert!(column == "%zorks");
        }
        other => panic!("Unexpected result {other:?}"),
    }

    // Fails at the first bad file even after good ones.
    let bad = "../../tests/sarlog/sar-unknown-column.txt";
    let files = [RHEL7.to_string(), bad.to_string()];
    let e = read_reports(&files, &ParseOptions::default()).unwrap_err();
    assert!(matches!(e, SarError::UnknownColumn { file, line: 3, .. } if file == bad));
}
