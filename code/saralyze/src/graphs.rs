/// Print the graph plan: one row per graph, in drawing order, with the custom graphs last.
use crate::format;
use crate::{GraphArgs, PrintArgs};

use anyhow::{bail, Result};
use sarlog::{Annotation, Environment, Graph, Report};
use sarutils::Timestamp;
use std::collections::HashMap;
use std::io;

struct Item {
    graph: Graph,
    annotations: Vec<Annotation>,
}

pub fn print(
    output: &mut dyn io::Write,
    report: &Report,
    env: &dyn Environment,
    graph_args: &GraphArgs,
    print_args: &PrintArgs,
) -> Result<()> {
    let all = sarlog::list_all_categories();
    let categories = if graph_args.category.is_empty() {
        all
    } else {
        let mut selected = vec![];
        for c in &graph_args.category {
            match all.iter().find(|x| **x == c.as_str()) {
                Some(x) => selected.push(*x),
                None => bail!("Unknown category '{c}', try one of {}", all.join(", ")),
            }
        }
        selected
    };
    let skip = graph_args
        .skip
        .iter()
        .map(|s| s.as_str())
        .collect::<Vec<&str>>();

    let mut graphs =
        sarlog::graph_plan(report, &categories, &skip, graph_args.max_per_graph, env)?;
    graphs.extend(sarlog::custom_graphs(report, &graph_args.custom)?);

    let mut labels = sarlog::parse_labels(&graph_args.label)?;
    labels.extend(
        reboots_in_timespan(report, env)
            .into_iter()
            .map(|t| (t, "reboot".to_string())),
    );

    let data = graphs
        .into_iter()
        .map(|graph| {
            let annotations = graph.annotate(report, &labels);
            Item { graph, annotations }
        })
        .collect::<Vec<Item>>();

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

// Reboots outside the data would be placed at the edge of every graph.

fn reboots_in_timespan(report: &Report, env: &dyn Environment) -> Vec<Timestamp> {
    let (Some(first), Some(last)) = (
        report.dataset.first_timestamp(),
        report.dataset.last_timestamp(),
    ) else {
        return vec![];
    };
    let mut reboots = env
        .reboots()
        .into_iter()
        .filter(|t| first <= *t && *t <= last)
        .collect::<Vec<Timestamp>>();
    reboots.sort();
    reboots
}

pub fn fmt_help() -> format::Help {
    let (formatters, aliases) = my_formatters();
    format::Help::new(&formatters, &aliases, FMT_DEFAULTS)
}

const FMT_DEFAULTS: &str = "category,title,unit,labels";

fn my_formatters() -> (
    HashMap<String, &'static dyn Fn(GraphDatum, GraphCtx) -> String>,
    HashMap<String, Vec<String>>,
) {
    let mut formatters: HashMap<String, &'static dyn Fn(GraphDatum, GraphCtx) -> String> =
        HashMap::new();
    let mut aliases: HashMap<String, Vec<String>> = HashMap::new();
    formatters.insert("category".to_string(), &format_category);
    formatters.insert("title".to_string(), &format_title);
    formatters.insert("unit".to_string(), &format_unit);
    formatters.insert("labels".to_string(), &format_labels);
    formatters.insert("keys".to_string(), &format_keys);
    formatters.insert("count".to_string(), &format_count);
    formatters.insert("annotations".to_string(), &format_annotations);

    aliases.insert(
        "all".to_string(),
        vec![
            "category".to_string(),
            "title".to_string(),
            "unit".to_string(),
            "count".to_string(),
            "labels".to_string(),
            "keys".to_string(),
            "annotations".to_string(),
        ],
    );

    (formatters, aliases)
}

type GraphDatum<'a> = &'a Item;
type GraphCtx = bool;

fn format_category(d: GraphDatum, _: GraphCtx) -> String {
    d.graph.category.clone()
}

fn format_title(d: GraphDatum, _: GraphCtx) -> String {
    d.graph.info.title.clone()
}

fn format_unit(d: GraphDatum, _: GraphCtx) -> String {
    d.graph.info.unit.unwrap_or("-").to_string()
}

fn format_labels(d: GraphDatum, _: GraphCtx) -> String {
    d.graph.info.labels.join(",")
}

fn format_keys(d: GraphDatum, _: GraphCtx) -> String {
    d.graph.key_names().join(",")
}

fn format_count(d: GraphDatum, _: GraphCtx) -> String {
    d.graph.keys.len().to_string()
}

// LABEL@HEIGHT, or just LABEL when no value is near the label's time.

fn format_annotations(d: GraphDatum, _: GraphCtx) -> String {
    if d.annotations.is_empty() {
        return "-".to_string();
    }
    d.annotations
        .iter()
        .map(|a| match a.height {
            Some(h) => format!("{}@{}", a.label, h),
            None => a.label.clone(),
        })
        .collect::<Vec<String>>()
        .join(",")
}

#[cfg(test)]
fn rhel7() -> Report {
    sarlog::read_reports(
        &["../../tests/sarlog/sar-rhel7.txt".to_string()],
        &sarlog::ParseOptions::default(),
    )
    .unwrap()
}

#[cfg(test)]
fn render(report: &Report, graph_args: &GraphArgs, fmt: &str) -> Result<String> {
    let mut out = vec![];
    let print_args = PrintArgs {
        fmt: Some(fmt.to_string()),
    };
    print(
        &mut out,
        report,
        &sarlog::NoEnvironment,
        graph_args,
        &print_args,
    )?;
    Ok(String::from_utf8(out).unwrap())
}

#[test]
fn test_print_graphs() {
    let r = rhel7();
    let args = GraphArgs {
        category: vec!["NFS".to_string()],
        max_per_graph: sarlog::MAX_PER_GRAPH,
        custom: vec!["mem:kbmem".to_string()],
        label: vec!["upgrade:2014-03-09 23:55:00".to_string()],
        ..Default::default()
    };
    let text = render(&r, &args, "category,title,count,annotations,awk").unwrap();
    let lines = text.lines().collect::<Vec<&str>>();
    assert!(lines.len() == 7);
    assert!(lines.iter().take(6).all(|l| l.starts_with("NFS ")));
    assert!(lines[6] == "Custom mem 2 upgrade@1576960");

    let args = GraphArgs {
        category: vec!["Nonesuch".to_string()],
        max_per_graph: sarlog::MAX_PER_GRAPH,
        ..Default::default()
    };
    assert!(render(&r, &args, "title").is_err());
}

#[test]
fn test_reboots_in_timespan() {
    let r = rhel7();
    let env = sarlog::read_from_json("../../tests/sarlog/env-testhost.json").unwrap();
    // The only reboot is after the last sample.
    assert!(reboots_in_timespan(&r, &env).is_empty());
    assert!(reboots_in_timespan(&r, &sarlog::NoEnvironment).is_empty());
}
