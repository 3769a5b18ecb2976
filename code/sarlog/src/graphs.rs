/// Planning which graphs to draw from a report, and in what order.
///
/// Within each requested category, the plain counters come first, one graph each, in natural
/// order.  Then come the index tables whose keys fall in the category, with one graph per
/// sub-column showing all index values, eg `%util` for every disk.  Very wide graphs are split.
///
/// The plan is everything a renderer needs except the values themselves, which it gets from the
/// data set with `Dataset::series`.
use crate::catalog::{self, labels_title, GraphInfo, INDEX_COLUMNS};
use crate::environment::{Environment, NoEnvironment};
use crate::error::GraphError;
use crate::reports::Report;

use sarutils::{natural_sort, parse_timestamp, Timestamp};
use std::collections::{HashMap, HashSet};
use ustr::Ustr;

/// Groups with more keys than this are split over several graphs unless the caller says otherwise.
pub const MAX_PER_GRAPH: usize = 64;

/// The category of custom graphs.
pub const CUSTOM_CATEGORY: &str = "Custom";

#[derive(Debug, Clone, PartialEq)]
pub struct Graph {
    pub category: String,
    pub info: GraphInfo,
    pub keys: Vec<Ustr>,
}

/// A labelled point in time placed on a graph at the height of the graph's data there.

#[derive(Debug, Clone, PartialEq)]
pub struct Annotation {
    pub time: Timestamp,
    pub label: String,
    pub height: Option<f64>,
}

impl Graph {
    fn new(category: &str, keys: Vec<Ustr>, env: &dyn Environment) -> Result<Graph, GraphError> {
        let names = keys.iter().map(|k| k.as_str()).collect::<Vec<&str>>();
        let info = labels_title(&names, env)?;
        Ok(Graph {
            category: category.to_string(),
            info,
            keys,
        })
    }

    pub fn key_names(&self) -> Vec<&str> {
        self.keys.iter().map(|k| k.as_str()).collect::<Vec<&str>>()
    }

    /// Place `labels` (from parse_labels) on this graph.

    pub fn annotate(&self, report: &Report, labels: &[(Timestamp, String)]) -> Vec<Annotation> {
        let names = self.key_names();
        labels
            .iter()
            .map(|(time, label)| Annotation {
                time: *time,
                label: label.clone(),
                height: report.dataset.find_max(*time, &names),
            })
            .collect::<Vec<Annotation>>()
    }
}

/// The graphs for `categories`, in that order.  A key is left out if it, or for a composite key any
/// of its parts, is in `skip_list`.

pub fn graph_plan(
    report: &Report,
    categories: &[&str],
    skip_list: &[&str],
    max_per_graph: usize,
    env: &dyn Environment,
) -> Result<Vec<Graph>, GraphError> {
    let skip = skip_list.iter().copied().collect::<HashSet<&str>>();
    let chunk_size = max_per_graph.max(1);
    let plain = report
        .dataset
        .available_datasets()
        .into_iter()
        .filter(|k| catalog::split_composite(k.as_str()).is_none())
        .collect::<Vec<Ustr>>();

    // An index table belongs to the category of its first key.
    let mut indexed: HashMap<&'static str, Vec<Vec<Ustr>>> = HashMap::new();
    for column in INDEX_COLUMNS {
        let groups = report.dataset.keys_per_index(column, false);
        let Some(first) = groups.first().and_then(|g| g.first()) else {
            continue;
        };
        indexed
            .entry(catalog::category_for(first.as_str()))
            .or_default()
            .extend(groups);
    }

    let mut graphs = vec![];
    for category in categories {
        for key in &plain {
            let name = key.as_str();
            if name.ends_with("DEVICE") || skip.contains(name) {
                continue;
            }
            if catalog::lookup(name).map(|e| e.category) == Some(*category) {
                graphs.push(Graph::new(category, vec![*key], env)?);
            }
        }
        let Some(groups) = indexed.get(*category) else {
            continue;
        };
        for group in groups {
            let mut keys = group
                .iter()
                .filter(|k| !k.as_str().split('#').any(|part| skip.contains(part)))
                .copied()
                .collect::<Vec<Ustr>>();
            if keys.is_empty() {
                continue;
            }
            natural_sort(&mut keys);
            if keys.len() <= chunk_size {
                graphs.push(Graph::new(category, keys, env)?);
                continue;
            }
            let n = (keys.len() + chunk_size - 1) / chunk_size;
            for (i, chunk) in keys.chunks(chunk_size).enumerate() {
                let mut g = Graph::new(category, chunk.to_vec(), env)?;
                g.info.title = format!("{} {}/{}", g.info.title, i + 1, n);
                graphs.push(g);
            }
        }
    }
    Ok(graphs)
}

/// Graphs from user specifications "NAME:REGEX[,REGEX...]".  A graph has the keys matched by any
/// of its patterns, each anchored at the start of the key.  Graphs matching nothing are dropped.

pub fn custom_graphs(report: &Report, specs: &[String]) -> Result<Vec<Graph>, GraphError> {
    let mut graphs = vec![];
    for spec in specs {
        let Some((name, patterns)) = spec.split_once(':') else {
            return Err(GraphError::BadSpec(spec.clone()));
        };
        if name.is_empty() || patterns.is_empty() {
            return Err(GraphError::BadSpec(spec.clone()));
        }
        let mut keys = HashSet::new();
        for pattern in patterns.split(',') {
            let matched = report
                .dataset
                .match_keys(pattern)
                .map_err(|e| GraphError::BadPattern {
                    pattern: pattern.to_string(),
                    source: e,
                })?;
            keys.extend(matched);
        }
        if keys.is_empty() {
            continue;
        }
        let mut keys = keys.into_iter().collect::<Vec<Ustr>>();
        natural_sort(&mut keys);
        let names = keys.iter().map(|k| k.as_str()).collect::<Vec<&str>>();
        // Custom graphs may mix anything, so only the unit is taken from the catalog.
        let unit = labels_title(&names, &NoEnvironment)
            .ok()
            .and_then(|g| g.unit);
        let labels = names.iter().map(|n| n.to_string()).collect::<Vec<String>>();
        graphs.push(Graph {
            category: CUSTOM_CATEGORY.to_string(),
            info: GraphInfo {
                title: name.to_string(),
                unit,
                labels,
            },
            keys,
        });
    }
    Ok(graphs)
}

/// Parse annotations "LABEL:TIME", where TIME is anything parse_timestamp accepts.

pub fn parse_labels(labels: &[String]) -> Result<Vec<(Timestamp, String)>, GraphError> {
    let mut result = vec![];
    for l in labels {
        let Some((label, time)) = l.split_once(':') else {
            return Err(GraphError::BadLabel(l.clone()));
        };
        let Ok(t) = parse_timestamp(time) else {
            return Err(GraphError::BadLabel(l.clone()));
        };
        result.push((t, label.to_string()));
    }
    Ok(result)
}

#[cfg(test)]
use crate::reportfile::ParseOptions;

#[cfg(test)]
fn rhel7() -> Report {
    crate::reports::read_reports(
        &["../../tests/sarlog/sar-rhel7.txt".to_string()],
        &ParseOptions::default(),
    )
    .unwrap()
}

#[test]
fn test_graph_plan() {
    let r = rhel7();
    let cats = catalog::list_all_categories();
    let plan = graph_plan(&r, &cats, &[], MAX_PER_GRAPH, &NoEnvironment).unwrap();
    assert!(plan.len() == 36);

    // Categories come in the order asked for.
    assert!(plan[0].category == "I/O");
    assert!(plan[0].info.title == "%util");
    assert!(plan[0].info.labels == vec!["dev8-0".to_string()]);
    assert!(plan[0].key_names() == vec!["DEV#dev8-0#%util"]);
    assert!(plan[8].category == "Load");
    assert!(plan[8].info.title == "%idle");
    assert!(plan[8].key_names() == vec!["CPU#0#%idle", "CPU#1#%idle"]);
    assert!(plan[14].category == "Memory");
    assert!(plan[14].key_names() == vec!["%commit"]);

    // Plain network counters before the interface tables.
    let network = plan
        .iter()
        .filter(|g| g.category == "Network")
        .collect::<Vec<&Graph>>();
    assert!(network.len() == 9);
    assert!(network[0].key_names() == vec!["atmptf/s"]);
    assert!(network[3].key_names() == vec!["retrant/s"]);
    assert!(network[4].key_names() == vec!["IFACE#eth0#rxkB/s", "IFACE#lo#rxkB/s"]);

    // Only the categories asked for.
    let plan = graph_plan(&r, &["NFS"], &[], MAX_PER_GRAPH, &NoEnvironment).unwrap();
    assert!(plan.len() == 6);
    assert!(plan.iter().all(|g| g.category == "NFS"));
}

#[test]
fn test_graph_plan_skip_and_split() {
    let r = rhel7();
    let cats = catalog::list_all_categories();
    let skip = ["dev8-0", "%memused"];
    let plan = graph_plan(&r, &cats, &skip, MAX_PER_GRAPH, &NoEnvironment).unwrap();
    assert!(plan.len() == 27);
    assert!(plan.iter().all(|g| g.category != "I/O"));

    let plan = graph_plan(&r, &["Load"], &[], 1, &NoEnvironment).unwrap();
    assert!(plan.len() == 10);
    assert!(plan[0].info.title == "%idle 1/2");
    assert!(plan[1].info.title == "%idle 2/2");
    assert!(plan[1].key_names() == vec!["CPU#1#%idle"]);
    assert!(plan[2].info.title == "%iowait");
}

#[test]
fn test_graph_plan_environment() {
    let r = rhel7();
    let env = crate::configs::read_from_json("../../tests/sarlog/env-testhost.json").unwrap();
    let plan = graph_plan(&r, &["Load"], &[], MAX_PER_GRAPH, &env).unwrap();
    let titles = plan.iter().map(|g| g.info.title.as_str()).collect::<Vec<&str>>();
    assert!(
        titles
            == vec!["%idle", "%iowait", "%system", "%user", "i000/s (timer)", "i001/s (i8042)"]
    );
}

#[test]
fn test_custom_graphs() {
    let r = rhel7();
    let specs = vec![
        "load:ldavg".to_string(),
        "cpu0:CPU#0#%user,CPU#0#%sys".to_string(),
        "mem:kbmem,%memused".to_string(),
    ];
    let graphs = custom_graphs(&r, &specs).unwrap();
    assert!(graphs.len() == 2);
    assert!(graphs[0].category == CUSTOM_CATEGORY);
    assert!(graphs[0].info.title == "cpu0");
    assert!(graphs[0].key_names() == vec!["CPU#0#%system", "CPU#0#%user"]);
    assert!(graphs[1].key_names() == vec!["%memused", "kbmemfree", "kbmemused"]);
    assert!(graphs[1].info.labels.len() == 3);

    assert!(matches!(
        custom_graphs(&r, &["nocolon".to_string()]),
        Err(GraphError::BadSpec(_))
    ));
    assert!(matches!(
        custom_graphs(&r, &["x:".to_string()]),
        Err(GraphError::BadSpec(_))
    ));
    assert!(matches!(
        custom_graphs(&r, &["x:(".to_string()]),
        Err(GraphError::BadPattern { .. })
    ));
}

#[test]
fn test_labels() {
    let labels = parse_labels(&["upgrade:2014-03-09 23:55:00".to_string()]).unwrap();
    let t = sarutils::timestamp_from_ymdhms(2014, 3, 9, 23, 55, 0).unwrap();
    assert!(labels == vec![(t, "upgrade".to_string())]);
    assert!(parse_labels(&["upgrade".to_string()]).is_err());
    assert!(parse_labels(&["upgrade:soon".to_string()]).is_err());
    assert!(parse_labels(&[]).unwrap().is_empty());

    // 23:58:01 is nearer than 23:50:01.
    let r = rhel7();
    let plan = graph_plan(&r, &["Load"], &[], MAX_PER_GRAPH, &NoEnvironment).unwrap();
    let a = plan[0].annotate(&r, &labels);
    assert!(a.len() == 1);
    assert!(a[0].label == "upgrade");
    assert!(a[0].height == Some(98.1));
}
