/// The catalog of known sar columns.
///
/// Every column header that can appear in a sar table must be known here, because the parser builds
/// its row matcher from the value shape of each column.  Three sources are consulted in order:
///
/// - "structural" columns whose shape is fixed regardless of table: the index columns (CPU, DEV,
///   IFACE, ...), hex USB ids, free-text device and filesystem names;
///
/// - the counter table in catalog_data.rs, keyed by exact counter name, which also carries the
///   category, display unit, label and description;
///
/// - numbered interrupt-rate counters `iNNN/s`, which are too many to list.
///
/// Categories are looser than patterns: an unknown name gets the category "Interrupts" rather than
/// an error, since losing the category only affects presentation.
use crate::catalog_data::ENTRIES;
use crate::environment::Environment;
use crate::error::CatalogError;

use std::collections::BTreeSet;

/// The shape of the textual values in a column.  Each kind maps to a regular expression fragment
/// without capture groups, to be embedded in a row pattern.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Integer,
    Decimal,
    Hex,
    /// Decimal, or "N/A" for interrupt lines that do not exist on some CPU.
    Interrupts,
    InterfaceName,
    UsbName,
    FsName,
    /// A CPU number or "all".
    Cpu,
    /// An interrupt number or "sum".
    Intr,
}

impl ValueKind {
    // Whitespace between columns is matched with \s by the caller, so the free-text kinds must not
    // be able to run into the next column on their own.  UsbName and FsName stop only at tabs; the
    // regex engine backtracks to make the rest of the row match.
    pub fn pattern(self) -> &'static str {
        match self {
            ValueKind::Integer => r"[+-]?[0-9]+",
            ValueKind::Decimal => r"(?:[+-]?[0-9]+\.[0-9]+|nan)",
            ValueKind::Hex => r"[a-fA-F0-9]+",
            ValueKind::Interrupts => r"(?:[+-]?[0-9]+\.[0-9]+|nan|N/A)",
            ValueKind::InterfaceName => r"[^ \t]+",
            ValueKind::UsbName | ValueKind::FsName => r"[^\t]+",
            ValueKind::Cpu => r"(?:all|[0-9]+)",
            ValueKind::Intr => r"(?:sum|[0-9]+)",
        }
    }
}

/// One counter known to sar.

#[derive(Debug)]
pub struct Entry {
    pub name: &'static str,
    pub category: &'static str,
    pub kind: ValueKind,
    pub unit: Option<&'static str>,
    pub label: Option<&'static str>,
    pub desc: &'static str,
    pub detail: Option<&'static str>,
}

/// Column headers that introduce an extra level of indexing: a table with one of these has one row
/// per (timestamp, index value), eg per CPU or per network interface.

pub const INDEX_COLUMNS: [&str; 9] = [
    "CPU",
    "IFACE",
    "DEV",
    "INTR",
    "FAN",
    "TEMP",
    "BUS",
    "FILESYSTEM",
    "TTY",
];

pub fn is_index_column(name: &str) -> bool {
    INDEX_COLUMNS.contains(&name)
}

/// Categories of composite keys, by key prefix.  These win over the catalog.

const PREFIX_CATEGORIES: [(&str, &str); 8] = [
    ("CPU#", "Load"),
    ("FILESYSTEM#", "Files"),
    ("DEV#", "I/O"),
    ("TTY", "TTY"),
    ("IFACE", "Network"),
    ("TEMP#", "Power"),
    ("FAN#", "Power"),
    ("INTR#", "Intr"),
];

pub const DEFAULT_CATEGORY: &str = "Interrupts";

// The name and description standing in for all numbered interrupt counters.

const INTERRUPTS_NAME: &str = "int/s";
const INTERRUPTS_DESC: &str = "Interrupts per second";

pub fn lookup(name: &str) -> Option<&'static Entry> {
    ENTRIES
        .binary_search_by(|e| e.name.cmp(name))
        .ok()
        .map(|i| &ENTRIES[i])
}

fn structural_kind(name: &str) -> Option<ValueKind> {
    match name {
        "IFACE" | "DEV" | "DEVICE" => Some(ValueKind::InterfaceName),
        "CPU" => Some(ValueKind::Cpu),
        "INTR" => Some(ValueKind::Intr),
        "iNNN/s" => Some(ValueKind::Interrupts),
        "BUS" | "FAN" | "TEMP" | "TTY" => Some(ValueKind::Integer),
        "idvendor" | "idprod" => Some(ValueKind::Hex),
        "manufact" | "product" => Some(ValueKind::UsbName),
        "MHz" => Some(ValueKind::Decimal),
        "FILESYSTEM" => Some(ValueKind::FsName),
        _ => None,
    }
}

/// True for `i/s`, `i000/s`, `i123/s`, etc: the per-line interrupt rate counters.

pub fn is_interrupt_counter(name: &str) -> bool {
    name.strip_prefix('i')
        .and_then(|s| s.strip_suffix("/s"))
        .map_or(false, |digits| digits.bytes().all(|b| b.is_ascii_digit()))
}

/// The interrupt line of an `iNNN/s` counter.

pub fn interrupt_number(name: &str) -> Option<u32> {
    if !is_interrupt_counter(name) {
        return None;
    }
    name[1..name.len() - 2].parse::<u32>().ok()
}

pub fn value_kind(name: &str) -> Result<ValueKind, CatalogError> {
    if let Some(kind) = structural_kind(name) {
        return Ok(kind);
    }
    if let Some(entry) = lookup(name) {
        return Ok(entry.kind);
    }
    if is_interrupt_counter(name) {
        return Ok(ValueKind::Interrupts);
    }
    Err(CatalogError::UnknownColumn(name.to_string()))
}

/// The regular expression fragment matching values in the column `name`.

pub fn regex_for(name: &str) -> Result<&'static str, CatalogError> {
    Ok(value_kind(name)?.pattern())
}

/// The presentation category of a plain or composite column key.

pub fn category_for(name: &str) -> &'static str {
    for (prefix, category) in PREFIX_CATEGORIES {
        if name.starts_with(prefix) {
            return category;
        }
    }
    if let Some(entry) = lookup(name) {
        return entry.category;
    }
    DEFAULT_CATEGORY
}

/// All categories that `category_for` can return, sorted.

pub fn list_all_categories() -> Vec<&'static str> {
    let mut cats = BTreeSet::new();
    for (_, category) in PREFIX_CATEGORIES {
        cats.insert(category);
    }
    for e in ENTRIES {
        cats.insert(e.category);
    }
    cats.into_iter().collect::<Vec<&'static str>>()
}

/// Split `CPU#0#%idle` into ("CPU", "0", "%idle").  Anything without exactly three parts is not a
/// composite key.

pub fn split_composite(key: &str) -> Option<(&str, &str, &str)> {
    let mut parts = key.split('#');
    let index_column = parts.next()?;
    let index_value = parts.next()?;
    let sub_column = parts.next()?;
    if parts.next().is_some() {
        return None;
    }
    Some((index_column, index_value, sub_column))
}

pub fn composite_key(index_column: &str, index_value: &str, sub_column: &str) -> String {
    format!("{index_column}#{index_value}#{sub_column}")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Description {
    pub name: String,
    pub desc: &'static str,
    pub detail: Option<&'static str>,
}

/// Describe a list of column keys, for a legend.  Composite keys are described by their
/// sub-column, and a run of keys with the same sub-column gets a single description.  All numbered
/// interrupt counters share one synthetic description.

pub fn describe(names: &[&str]) -> Result<Vec<Description>, CatalogError> {
    if names.is_empty() {
        return Err(CatalogError::EmptyRequest);
    }
    let mut result = vec![];
    let mut previous: Option<&str> = None;
    for name in names {
        let (column, grouped) = match split_composite(name) {
            Some((_, _, sub_column)) => (sub_column, true),
            None => (*name, false),
        };
        if let Some(entry) = lookup(column) {
            if !grouped || previous != Some(column) {
                result.push(Description {
                    name: column.to_string(),
                    desc: entry.desc,
                    detail: entry.detail,
                });
            }
            if grouped {
                previous = Some(column);
            }
        } else if is_interrupt_counter(column) {
            if previous != Some(INTERRUPTS_NAME) {
                result.push(Description {
                    name: INTERRUPTS_NAME.to_string(),
                    desc: INTERRUPTS_DESC,
                    detail: None,
                });
                previous = Some(INTERRUPTS_NAME);
            }
        } else {
            return Err(CatalogError::UnknownColumn(name.to_string()));
        }
    }
    Ok(result)
}

/// What a renderer needs to title one graph.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphInfo {
    pub title: String,
    pub unit: Option<&'static str>,
    pub labels: Vec<String>,
}

/// Compute title, unit and line labels for a graph of the given keys.
///
/// - One plain key: the catalog label if there is one, otherwise the key.
/// - Several plain keys (eg ldavg-1, ldavg-5, ldavg-15): the keys, space-separated.
/// - Composite keys with one sub-column: the sub-column, labelled by index value.  For interrupt
///   counters the devices on that line are appended to the title, when the environment knows them.
/// - Composite keys with one index value: "INDEX VALUE", labelled by sub-column.
///
/// Composite keys from different index columns cannot share a graph.

pub fn labels_title(names: &[&str], env: &dyn Environment) -> Result<GraphInfo, CatalogError> {
    if names.is_empty() {
        return Err(CatalogError::EmptyRequest);
    }

    let composites = names
        .iter()
        .map(|n| split_composite(n))
        .collect::<Option<Vec<(&str, &str, &str)>>>();

    let Some(composites) = composites else {
        if names.len() == 1 {
            let name = names[0];
            let entry = lookup(name);
            let title = entry
                .and_then(|e| e.label)
                .unwrap_or(name)
                .to_string();
            return Ok(GraphInfo {
                labels: vec![title.clone()],
                title,
                unit: entry.and_then(|e| e.unit),
            });
        }
        return Ok(GraphInfo {
            title: names.join(" "),
            unit: common_unit(names.iter().copied()),
            labels: names.iter().map(|n| n.to_string()).collect::<Vec<String>>(),
        });
    };

    let index_columns = composites.iter().map(|c| c.0).collect::<BTreeSet<&str>>();
    if index_columns.len() > 1 {
        return Err(CatalogError::MixedIndex(names.join(" ")));
    }
    let index_values = composites.iter().map(|c| c.1).collect::<BTreeSet<&str>>();
    let sub_columns = composites.iter().map(|c| c.2).collect::<BTreeSet<&str>>();

    if sub_columns.len() == 1 {
        let sub_column = composites[0].2;
        let mut title = sub_column.to_string();
        if let Some(irq) = interrupt_number(sub_column) {
            let devices = env.interrupt_devices(irq);
            if !devices.is_empty() {
                title = format!("{title} ({})", devices.join(", "));
            }
        }
        return Ok(GraphInfo {
            title,
            unit: lookup(sub_column).and_then(|e| e.unit),
            labels: composites
                .iter()
                .map(|c| c.1.to_string())
                .collect::<Vec<String>>(),
        });
    }

    if index_values.len() == 1 {
        let (index_column, index_value, _) = composites[0];
        return Ok(GraphInfo {
            title: format!("{index_column} {index_value}"),
            unit: common_unit(composites.iter().map(|c| c.2)),
            labels: composites
                .iter()
                .map(|c| c.2.to_string())
                .collect::<Vec<String>>(),
        });
    }

    Err(CatalogError::MixedIndex(names.join(" ")))
}

// The unit shared by all the columns, if they all have the same one.

fn common_unit<'a>(mut columns: impl Iterator<Item = &'a str>) -> Option<&'static str> {
    let first = lookup(columns.next()?)?.unit?;
    for c in columns {
        if lookup(c).and_then(|e| e.unit) != Some(first) {
            return None;
        }
    }
    Some(first)
}

#[cfg(test)]
use crate::environment::NoEnvironment;

#[test]
fn test_catalog_sorted() {
    for w in ENTRIES.windows(2) {
        assert!(w[0].name < w[1].name, "{} >= {}", w[0].name, w[1].name);
    }
    for e in ENTRIES {
        assert!(lookup(e.name).is_some());
    }
}

#[test]
fn test_regex_for() {
    assert!(regex_for("CPU") == Ok(r"(?:all|[0-9]+)"));
    assert!(regex_for("DEVICE") == Ok(r"[^ \t]+"));
    assert!(regex_for("%idle") == Ok(ValueKind::Decimal.pattern()));
    assert!(regex_for("i017/s") == Ok(ValueKind::Interrupts.pattern()));
    assert!(regex_for("i/s") == Ok(ValueKind::Interrupts.pattern()));
    // Structural wins over the catalog.
    assert!(regex_for("MHz") == Ok(ValueKind::Decimal.pattern()));
    assert!(regex_for("FAN") == Ok(ValueKind::Integer.pattern()));
    assert!(regex_for("%bogus") == Err(CatalogError::UnknownColumn("%bogus".to_string())));
    assert!(regex_for("ix/s").is_err());
}

#[test]
fn test_category_for() {
    assert!(category_for("CPU#0#%idle") == "Load");
    assert!(category_for("DEV#dev8-0#%util") == "I/O");
    assert!(category_for("IFACE#eth0#rxkB/s") == "Network");
    assert!(category_for("FAN#1#rpm") == "Power");
    assert!(category_for("INTR#5#intr/s") == "Intr");
    assert!(category_for("FILESYSTEM#/dev/sda1#%fsused") == "Files");
    assert!(category_for("kbmemfree") == "Memory");
    assert!(category_for("i005/s") == "Interrupts");
    assert!(category_for("no-such-thing") == DEFAULT_CATEGORY);

    let cats = list_all_categories();
    for c in ["Load", "Files", "I/O", "TTY", "Network", "Power", "Intr", "Memory", "Interrupts"] {
        assert!(cats.contains(&c));
    }
}

#[test]
fn test_interrupt_number() {
    assert!(interrupt_number("i017/s") == Some(17));
    assert!(interrupt_number("i/s").is_none());
    assert!(is_interrupt_counter("i/s"));
    assert!(interrupt_number("intr/s").is_none());
    assert!(interrupt_number("i2big6/s").is_none());
}

#[test]
fn test_split_composite() {
    assert!(split_composite("CPU#0#%idle") == Some(("CPU", "0", "%idle")));
    assert!(split_composite("%idle").is_none());
    assert!(split_composite("a#b").is_none());
    assert!(split_composite("a#b#c#d").is_none());
    assert!(composite_key("DEV", "dev8-0", "%util") == "DEV#dev8-0#%util");
}

#[test]
fn test_describe() {
    let d = describe(&["CPU#0#%idle", "CPU#1#%idle", "CPU#0#%usr"]).unwrap();
    assert!(d.len() == 2);
    assert!(d[0].name == "%idle");
    assert!(d[1].name == "%usr");

    let d = describe(&["ldavg-1", "ldavg-5", "ldavg-15"]).unwrap();
    let names = d.iter().map(|x| x.name.as_str()).collect::<Vec<&str>>();
    assert!(names == vec!["ldavg-1", "ldavg-5", "ldavg-15"]);

    let d = describe(&["INTR#0#i000/s", "INTR#1#i001/s"]).unwrap();
    assert!(d.len() == 1);
    assert!(d[0].name == "int/s");
    assert!(d[0].desc == "Interrupts per second");

    assert!(describe(&[]) == Err(CatalogError::EmptyRequest));
    assert!(
        describe(&["CPU#0#%bogus"])
            == Err(CatalogError::UnknownColumn("CPU#0#%bogus".to_string()))
    );
}

#[cfg(test)]
struct IrqEnv;

#[cfg(test)]
impl Environment for IrqEnv {
    fn reboots(&self) -> Vec<sarutils::Timestamp> {
        vec![]
    }

    fn interrupt_devices(&self, irq: u32) -> Vec<String> {
        if irq == 19 {
            vec!["eth0".to_string(), "ata_piix".to_string()]
        } else {
            vec![]
        }
    }
}

#[test]
fn test_labels_title() {
    let g = labels_title(&["%usr"], &NoEnvironment).unwrap();
    assert!(g.title == "User Utilization (novirt %)");
    assert!(g.unit == Some("percentage"));
    assert!(g.labels == vec!["User Utilization (novirt %)".to_string()]);

    let g = labels_title(&["ldavg-1", "ldavg-5"], &NoEnvironment).unwrap();
    assert!(g.title == "ldavg-1 ldavg-5");
    assert!(g.labels == vec!["ldavg-1".to_string(), "ldavg-5".to_string()]);

    let g = labels_title(&["CPU#0#%idle", "CPU#1#%idle"], &NoEnvironment).unwrap();
    assert!(g.title == "%idle");
    assert!(g.labels == vec!["0".to_string(), "1".to_string()]);

    let g = labels_title(&["DEV#dev8-0#tps", "DEV#dev8-0#%util"], &NoEnvironment).unwrap();
    assert!(g.title == "DEV dev8-0");
    assert!(g.labels == vec!["tps".to_string(), "%util".to_string()]);

    let g = labels_title(&["INTR#0#i019/s", "INTR#1#i019/s"], &IrqEnv).unwrap();
    assert!(g.title == "i019/s (eth0, ata_piix)");
    let g = labels_title(&["INTR#0#i019/s"], &NoEnvironment).unwrap();
    assert!(g.title == "i019/s");

    assert!(labels_title(&[], &NoEnvironment) == Err(CatalogError::EmptyRequest));
    assert!(matches!(
        labels_title(&["CPU#0#%idle", "DEV#dev8-0#%util"], &NoEnvironment),
        Err(CatalogError::MixedIndex(_))
    ));
    assert!(matches!(
        labels_title(&["CPU#0#%idle", "CPU#1#%usr"], &NoEnvironment),
        Err(CatalogError::MixedIndex(_))
    ));
}
