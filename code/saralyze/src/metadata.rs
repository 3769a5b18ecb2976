use crate::format;
use crate::list::fmt_time;
use crate::PrintArgs;

use anyhow::Result;
use sarlog::{Report, ReportMetadata};
use sarutils::Timestamp;
use std::collections::HashMap;
use std::io;

struct Item {
    metadata: ReportMetadata,
    files: Vec<String>,
    earliest: Option<Timestamp>,
    latest: Option<Timestamp>,
    timestamps: usize,
    keys: usize,
    frequency: Option<String>,
    duplicates: usize,
    // FILE:LINE for the first few duplicate lines, the count says how many there are.
    duplicate_lines: Vec<String>,
}

pub fn print(output: &mut dyn io::Write, report: &Report, print_args: &PrintArgs) -> Result<()> {
    let data = vec![Item {
        metadata: report.metadata.clone(),
        files: report.files.clone(),
        earliest: report.dataset.first_timestamp(),
        latest: report.dataset.last_timestamp(),
        timestamps: report.dataset.len(),
        keys: report.dataset.available_keys().len(),
        frequency: report.frequency_text(),
        duplicates: report.duplicates.len(),
        duplicate_lines: report
            .duplicates
            .iter()
            .take(sarlog::MAX_DUPLICATES_SHOWN)
            .map(|d| d.to_string())
            .collect::<Vec<String>>(),
    }];
    let (formatters, aliases) = my_formatters();
    format::print_with(
        output,
        &print_args.fmt,
        FMT_DEFAULTS,
        &formatters,
        &aliases,
        data,
        false,
    )
}

pub fn fmt_help() -> format::Help {
    let (formatters, aliases) = my_formatters();
    format::Help::new(&formatters, &aliases, FMT_DEFAULTS)
}

const FMT_DEFAULTS: &str = "all";

fn my_formatters() -> (
    HashMap<String, &'static dyn Fn(MetaDatum, MetaCtx) -> String>,
    HashMap<String, Vec<String>>,
) {
    let mut formatters: HashMap<String, &'static dyn Fn(MetaDatum, MetaCtx) -> String> =
        HashMap::new();
    let mut aliases: HashMap<String, Vec<String>> = HashMap::new();
    formatters.insert("host".to_string(), &format_host);
    formatters.insert("kernel".to_string(), &format_kernel);
    formatters.insert("version".to_string(), &format_version);
    formatters.insert("date".to_string(), &format_date);
    formatters.insert("files".to_string(), &format_files);
    formatters.insert("earliest".to_string(), &format_earliest);
    formatters.insert("latest".to_string(), &format_latest);
    formatters.insert("timestamps".to_string(), &format_timestamps);
    formatters.insert("keys".to_string(), &format_keys);
    formatters.insert("frequency".to_string(), &format_frequency);
    formatters.insert("duplicates".to_string(), &format_duplicates);
    formatters.insert("duplicate-lines".to_string(), &format_duplicate_lines);

    aliases.insert(
        "all".to_string(),
        vec![
            "host".to_string(),
            "kernel".to_string(),
            "version".to_string(),
            "date".to_string(),
            "earliest".to_string(),
            "latest".to_string(),
            "timestamps".to_string(),
            "keys".to_string(),
            "frequency".to_string(),
            "duplicates".to_string(),
            "duplicate-lines".to_string(),
            "files".to_string(),
        ],
    );
    aliases.insert(
        "source".to_string(),
        vec![
            "host".to_string(),
            "kernel".to_string(),
            "version".to_string(),
            "date".to_string(),
        ],
    );
    aliases.insert(
        "span".to_string(),
        vec![
            "earliest".to_string(),
            "latest".to_string(),
            "frequency".to_string(),
        ],
    );

    (formatters, aliases)
}

type MetaDatum<'a> = &'a Item;
type MetaCtx = bool;

fn format_host(d: MetaDatum, _: MetaCtx) -> String {
    d.metadata.hostname.clone()
}

fn format_kernel(d: MetaDatum, _: MetaCtx) -> String {
    d.metadata.kernel.clone()
}

fn format_version(d: MetaDatum, _: MetaCtx) -> String {
    d.metadata.version.clone()
}

fn format_date(d: MetaDatum, _: MetaCtx) -> String {
    d.metadata.date.format("%Y-%m-%d").to_string()
}

fn format_files(d: MetaDatum, _: MetaCtx) -> String {
    d.files.join(",")
}

fn format_earliest(d: MetaDatum, _: MetaCtx) -> String {
    d.earliest.map_or("-".to_string(), fmt_time)
}

fn format_latest(d: MetaDatum, _: MetaCtx) -> String {
    d.latest.map_or("-".to_string(), fmt_time)
}

fn format_timestamps(d: MetaDatum, _: MetaCtx) -> String {
    d.timestamps.to_string()
}

fn format_keys(d: MetaDatum, _: MetaCtx) -> String {
    d.keys.to_string()
}

fn format_frequency(d: MetaDatum, _: MetaCtx) -> String {
    d.frequency.clone().unwrap_or("-".to_string())
}

fn format_duplicates(d: MetaDatum, _: MetaCtx) -> String {
    d.duplicates.to_string()
}

fn format_duplicate_lines(d: MetaDatum, _: MetaCtx) -> String {
    if d.duplicate_lines.is_empty() {
        return "-".to_string();
    }
    d.duplicate_lines.join(",")
}

#[test]
fn test_metadata() {
    let files = vec![
        "../../tests/sarlog/sar-rhel7.txt".to_string(),
        "../../tests/sarlog/sar-rhel8.txt".to_string(),
    ];
    let report = sarlog::read_reports(&files, &sarlog::ParseOptions::default()).unwrap();
    let print_args = PrintArgs {
        fmt: Some("source,timestamps,duplicates,awk".to_string()),
    };
    let mut out = vec![];
    print(&mut out, &report, &print_args).unwrap();
    assert!(
        String::from_utf8(out).unwrap()
            == "testhost.example.com Linux 3.10.0-123.el7.x86_64 2014-03-09 8 1\n"
    );

    let print_args = PrintArgs {
        fmt: Some("span,duplicate-lines,header".to_string()),
    };
    let mut out = vec![];
    print(&mut out, &report, &print_args).unwrap();
    let text = String::from_utf8(out).unwrap();
    let lines = text.lines().collect::<Vec<&str>>();
    assert!(lines.len() == 2);
    assert!(lines[0].starts_with("earliest"));
    assert!(lines[1].starts_with("2014-03-09 23:50:01  2021-07-02 01:30:01"));

    // Duplicate lines name their file.
    let print_args = PrintArgs {
        fmt: Some("duplicate-lines,awk".to_string()),
    };
    let mut out = vec![];
    print(&mut out, &report, &print_args).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert!(text == format!("../../tests/sarlog/sar-rhel8.txt:{}\n", report.duplicates[0].line));
}
