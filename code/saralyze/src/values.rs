/// Dump the values of the selected keys, one row per timestamp and key, in time order and then in
/// natural key order.  After finalization every key has a row at every timestamp; missing values
/// print as "-".
use crate::format;
use crate::list::fmt_time;
use crate::PrintArgs;

use anyhow::{Context, Result};
use sarlog::Report;
use sarutils::{natural_sort, Timestamp};
use std::collections::{HashMap, HashSet};
use std::io;
use tracing::info;
use ustr::Ustr;

struct Item {
    time: Timestamp,
    key: Ustr,
    value: Option<String>,
}

pub fn print(
    output: &mut dyn io::Write,
    report: &Report,
    patterns: &[String],
    print_args: &PrintArgs,
) -> Result<()> {
    let keys = select_keys(report, patterns)?;
    info!("{} keys selected", keys.len());
    let mut data = vec![];
    for time in report.dataset.timestamps() {
        for key in &keys {
            data.push(Item {
                time,
                key: *key,
                value: report.dataset.value(time, key.as_str()).map(|v| v.to_string()),
            });
        }
    }
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

fn select_keys(report: &Report, patterns: &[String]) -> Result<Vec<Ustr>> {
    if patterns.is_empty() {
        return Ok(report.dataset.available_keys());
    }
    let mut keys = HashSet::new();
    for p in patterns {
        let matched = report
            .dataset
            .match_keys(p)
            .with_context(|| format!("Bad --match pattern '{p}'"))?;
        keys.extend(matched);
    }
    let mut keys = keys.into_iter().collect::<Vec<Ustr>>();
    natural_sort(&mut keys);
    Ok(keys)
}

pub fn fmt_help() -> format::Help {
    let (formatters, aliases) = my_formatters();
    format::Help::new(&formatters, &aliases, FMT_DEFAULTS)
}

const FMT_DEFAULTS: &str = "all";

fn my_formatters() -> (
    HashMap<String, &'static dyn Fn(ValueDatum, ValueCtx) -> String>,
    HashMap<String, Vec<String>>,
) {
    let mut formatters: HashMap<String, &'static dyn Fn(ValueDatum, ValueCtx) -> String> =
        HashMap::new();
    let mut aliases: HashMap<String, Vec<String>> = HashMap::new();
    formatters.insert("time".to_string(), &format_time);
    formatters.insert("key".to_string(), &format_key);
    formatters.insert("value".to_string(), &format_value);

    aliases.insert(
        "all".to_string(),
        vec!["time".to_string(), "key".to_string(), "value".to_string()],
    );

    (formatters, aliases)
}

type ValueDatum<'a> = &'a Item;
type ValueCtx = bool;

fn format_time(d: ValueDatum, _: ValueCtx) -> String {
    fmt_time(d.time)
}

fn format_key(d: ValueDatum, _: ValueCtx) -> String {
    d.key.to_string()
}

fn format_value(d: ValueDatum, _: ValueCtx) -> String {
    d.value.clone().unwrap_or("-".to_string())
}

#[cfg(test)]
fn render(files: &[&str], patterns: &[&str], fmt: &str) -> Result<String> {
    let files = files.iter().map(|f| f.to_string()).collect::<Vec<String>>();
    let report = sarlog::read_reports(&files, &sarlog::ParseOptions::default())?;
    let patterns = patterns.iter().map(|p| p.to_string()).collect::<Vec<String>>();
    let print_args = PrintArgs {
        fmt: Some(fmt.to_string()),
    };
    let mut out = vec![];
    print(&mut out, &report, &patterns, &print_args)?;
    Ok(String::from_utf8(out)?)
}

#[test]
fn test_values() {
    const RHEL7: &str = "../../tests/sarlog/sar-rhel7.txt";
    const RHEL8: &str = "../../tests/sarlog/sar-rhel8.txt";

    let text = render(&[RHEL8], &["ldavg-1$"], "awk").unwrap();
    assert!(
        text == "2021-07-02_00:10:01 ldavg-1 0.5\n\
                 2021-07-02_00:20:01 ldavg-1 0.6\n\
                 2021-07-02_00:30:01 ldavg-1 0.7\n\
                 2021-07-02_01:20:01 ldavg-1 0.8\n\
                 2021-07-02_01:30:01 ldavg-1 0.2\n"
    );

    // Keys from one file have no values at the other file's timestamps.
    let text = render(&[RHEL7, RHEL8], &["ldavg-1$", "%commit"], "key,value,awk").unwrap();
    let lines = text.lines().collect::<Vec<&str>>();
    assert!(lines.len() == 16);
    assert!(lines[0] == "%commit 40");
    assert!(lines[1] == "ldavg-1 -");
    assert!(lines[15] == "ldavg-1 0.2");

    let text = render(&[RHEL7], &["CPU#0#i001/s"], "value,noheader").unwrap();
    assert!(text == "0.5\nN/A\n0.25\n");

    assert!(render(&[RHEL8], &["("], "all").is_err());
}
