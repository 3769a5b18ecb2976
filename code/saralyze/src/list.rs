/// Free-text overview of a report: what host, what time span, what is missing, and which keys are
/// available in each category.
use anyhow::Result;
use sarlog::{Environment, Report};
use sarutils::Timestamp;
use std::io;

pub fn print(output: &mut dyn io::Write, report: &Report, env: &dyn Environment) -> Result<()> {
    let md = &report.metadata;
    writeln!(output, "Host: {} ({} {})", md.hostname, md.kernel, md.version)?;
    if let (Some(first), Some(last)) = (
        report.dataset.first_timestamp(),
        report.dataset.last_timestamp(),
    ) {
        writeln!(output, "Timespan: {} - {}", fmt_time(first), fmt_time(last))?;
    }
    if let Some(frequency) = report.frequency_text() {
        writeln!(output, "Sample frequency: {frequency}")?;
    }

    let mut reboots = env.reboots();
    if !reboots.is_empty() {
        reboots.sort();
        let times = reboots.into_iter().map(fmt_time).collect::<Vec<String>>();
        writeln!(output, "Reboots: {}", times.join(" "))?;
    }

    let gaps = report.gaps();
    if !gaps.is_empty() {
        writeln!(output, "Data gaps:")?;
        for (from, to) in gaps {
            writeln!(output, "  {} - {}", fmt_time(from), fmt_time(to))?;
        }
    }

    writeln!(output, "Available keys:")?;
    for (category, keys) in report.dataset.keys_by_category() {
        let names = keys.iter().map(|k| k.as_str()).collect::<Vec<&str>>();
        writeln!(output, "  {category}: {}", names.join(", "))?;
    }
    Ok(())
}

pub fn fmt_time(t: Timestamp) -> String {
    t.format("%Y-%m-%d %H:%M:%S").to_string()
}

#[test]
fn test_list() {
    let report = sarlog::read_reports(
        &["../../tests/sarlog/sar-rhel7.txt".to_string()],
        &sarlog::ParseOptions::default(),
    )
    .unwrap();
    let env = sarlog::read_from_json("../../tests/sarlog/env-testhost.json").unwrap();
    let mut out = vec![];
    print(&mut out, &report, &env).unwrap();
    let text = String::from_utf8(out).unwrap();
    let lines = text.lines().collect::<Vec<&str>>();
    assert!(lines[0] == "Host: testhost.example.com (Linux 3.10.0-123.el7.x86_64)");
    assert!(lines[1] == "Timespan: 2014-03-09 23:50:01 - 2014-03-10 00:02:01");
    assert!(lines[2] == "Sample frequency: 6 minutes");
    assert!(lines[3] == "Reboots: 2014-03-10 00:05:37");
    assert!(lines[4] == "Data gaps:");
    assert!(lines[5] == "  2014-03-09 23:50:01 - 2014-03-09 23:58:01");
    assert!(lines[6] == "Available keys:");
    assert!(lines.iter().any(|l| l.starts_with("  Network: ")
        && l.contains("IFACE#eth0#rxkB/s")
        && l.contains("atmptf/s")));
    assert!(!text.contains("BUS#"));

    // No environment, no reboots.
    let mut out = vec![];
    print(&mut out, &report, &sarlog::NoEnvironment).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert!(!text.contains("Reboots"));
}
