/// Table output for the commands.  Each command has a set of named formatters that turn one datum
/// into a string, plus aliases for groups of them.  `--fmt` picks formatters and control words;
/// the result is printed as fixed-width columns, as json objects, or as space-separated fields
/// for awk.
use anyhow::{bail, Result};
use std::collections::{HashMap, HashSet};
use std::io;

/// What `--fmt=help` prints for a command.

pub struct Help {
    pub fields: Vec<String>,
    pub aliases: Vec<(String, Vec<String>)>,
    pub defaults: String,
}

impl Help {
    pub fn new<FmtT>(
        formatters: &HashMap<String, FmtT>,
        aliases: &HashMap<String, Vec<String>>,
        defaults: &str,
    ) -> Help {
        let mut fields = formatters.keys().cloned().collect::<Vec<String>>();
        fields.sort();
        let mut aliases = aliases
            .iter()
            .map(|(name, fields)| {
                let mut fields = fields.clone();
                fields.sort();
                (name.clone(), fields)
            })
            .collect::<Vec<(String, Vec<String>)>>();
        aliases.sort();
        Help {
            fields,
            aliases,
            defaults: defaults.to_string(),
        }
    }
}

/// If `fmt` asks for help then print the help from `f` and return true, otherwise return false.

pub fn maybe_help<F>(output: &mut dyn io::Write, fmt: &Option<String>, f: F) -> bool
where
    F: Fn() -> Help,
{
    match fmt {
        Some(s) if s.starts_with("help") => {
            let _ = output.write_all(help_text(&f()).as_bytes());
            true
        }
        _ => false,
    }
}

fn help_text(help: &Help) -> String {
    let mut s = "Syntax:\n  --fmt=(field|alias|control),...\n\nFields:\n".to_string();
    for f in &help.fields {
        s += &format!("  {f}\n");
    }
    if !help.aliases.is_empty() {
        s += "\nAliases:\n";
        for (name, fields) in &help.aliases {
            s += &format!("  {name} --> {}\n", fields.join(","));
        }
    }
    s += &format!("\nDefaults:\n  {}\n", help.defaults);
    s += "\nControl:\n";
    for c in CONTROLS {
        s += &format!("  {c}\n");
    }
    s
}

const CONTROLS: [&str; 5] = ["awk", "fixed", "json", "header", "noheader"];

/// Split `spec` into the output fields, with aliases expanded, and the control words.  The field
/// list is empty if `spec` has only control words.  Words that are neither are an error.

pub fn parse_fields<'a, DataT, FmtT, CtxT>(
    spec: &'a str,
    formatters: &HashMap<String, FmtT>,
    aliases: &'a HashMap<String, Vec<String>>,
) -> Result<(Vec<&'a str>, HashSet<&'a str>)>
where
    FmtT: Fn(&DataT, CtxT) -> String,
    CtxT: Copy,
{
    let mut controls = HashSet::new();
    let mut fields = vec![];
    for word in spec.split(',') {
        let expanded = match aliases.get(word) {
            Some(names) if !formatters.contains_key(word) => {
                names.iter().map(|n| n.as_str()).collect::<Vec<&str>>()
            }
            _ => vec![word],
        };
        for name in expanded {
            if formatters.contains_key(name) {
                fields.push(name);
            } else if CONTROLS.contains(&name) {
                controls.insert(name);
            } else {
                bail!("Unknown field or control '{name}' in '{spec}'")
            }
        }
    }
    Ok((fields, controls))
}

/// The output style selected by the control words.  Fixed-width columns with a header line is the
/// default; json and awk never get a header.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    Fixed { header: bool },
    Json,
    Awk,
}

pub fn output_style(controls: &HashSet<&str>) -> Style {
    if controls.contains("json") {
        Style::Json
    } else if controls.contains("awk") {
        Style::Awk
    } else {
        Style::Fixed {
            header: !controls.contains("noheader"),
        }
    }
}

/// Pick the fields out of `fmt` and print `data` with them.  The fields come from `defaults` if
/// there is no `fmt` or if it names only control words, as in `--fmt=awk`.

pub fn print_with<DataT, FmtT, CtxT>(
    output: &mut dyn io::Write,
    fmt: &Option<String>,
    defaults: &str,
    formatters: &HashMap<String, FmtT>,
    aliases: &HashMap<String, Vec<String>>,
    data: Vec<DataT>,
    ctx: CtxT,
) -> Result<()>
where
    FmtT: Fn(&DataT, CtxT) -> String,
    CtxT: Copy,
{
    let spec = fmt.as_deref().unwrap_or(defaults);
    let (mut fields, controls) = parse_fields(spec, formatters, aliases)?;
    if fields.is_empty() {
        fields = parse_fields(defaults, formatters, aliases)?.0;
    }
    if fields.is_empty() {
        bail!("No output fields were selected in '{spec}'")
    }
    format_data(
        output,
        &fields,
        formatters,
        output_style(&controls),
        data,
        ctx,
    );
    Ok(())
}

/// Apply the formatters named by `fields` to every element of `data` and print the resulting table
/// in the given style.  Write errors are ignored, they are common for broken pipelines.

pub fn format_data<DataT, FmtT, CtxT>(
    output: &mut dyn io::Write,
    fields: &[&str],
    formatters: &HashMap<String, FmtT>,
    style: Style,
    data: Vec<DataT>,
    ctx: CtxT,
) where
    FmtT: Fn(&DataT, CtxT) -> String,
    CtxT: Copy,
{
    // parse_fields only returns names that have formatters.
    let fns = fields
        .iter()
        .filter_map(|name| formatters.get(*name))
        .collect::<Vec<&FmtT>>();
    let rows = data
        .iter()
        .map(|x| fns.iter().map(|f| f(x, ctx)).collect::<Vec<String>>())
        .collect::<Vec<Vec<String>>>();

    let text = match style {
        Style::Fixed { header } => fixed_width_text(fields, header, rows),
        Style::Json => json_text(fields, rows),
        Style::Awk => awk_text(rows),
    };
    let _ = output.write_all(text.as_bytes());
}

fn fixed_width_text(fields: &[&str], header: bool, mut rows: Vec<Vec<String>>) -> String {
    if header {
        rows.insert(0, fields.iter().map(|f| f.to_string()).collect());
    }
    let mut widths = vec![0; fields.len()];
    for row in &rows {
        for (w, val) in widths.iter_mut().zip(row) {
            *w = usize::max(*w, val.len());
        }
    }
    let mut s = String::new();
    for row in rows {
        let line = row
            .iter()
            .zip(&widths)
            .map(|(val, w)| format!("{val:w$}", w = *w))
            .collect::<Vec<String>>()
            .join("  ");
        s += line.trim_end();
        s += "\n";
    }
    s
}

fn json_text(fields: &[&str], rows: Vec<Vec<String>>) -> String {
    let objects = rows
        .into_iter()
        .map(|row| {
            let mut obj = json::JsonValue::new_object();
            for (name, val) in fields.iter().zip(row) {
                obj[*name] = val.into();
            }
            obj
        })
        .collect::<Vec<json::JsonValue>>();
    json::stringify(objects) + "\n"
}

// Fields are separated by single spaces, so spaces within a field become `_`.

fn awk_text(rows: Vec<Vec<String>>) -> String {
    let mut s = String::new();
    for row in rows {
        s += &row
            .iter()
            .map(|val| val.replace(' ', "_"))
            .collect::<Vec<String>>()
            .join(" ");
        s += "\n";
    }
    s
}

#[cfg(test)]
type TestDatum<'a> = &'a (&'static str, i32);

#[cfg(test)]
fn test_formatters() -> (
    HashMap<String, &'static dyn Fn(TestDatum, bool) -> String>,
    HashMap<String, Vec<String>>,
) {
    fn name(d: TestDatum, _: bool) -> String {
        d.0.to_string()
    }
    fn count(d: TestDatum, _: bool) -> String {
        d.1.to_string()
    }
    let mut formatters: HashMap<String, &'static dyn Fn(TestDatum, bool) -> String> =
        HashMap::new();
    formatters.insert("name".to_string(), &name);
    formatters.insert("count".to_string(), &count);
    let mut aliases = HashMap::new();
    aliases.insert(
        "all".to_string(),
        vec!["name".to_string(), "count".to_string()],
    );
    (formatters, aliases)
}

#[cfg(test)]
fn render(spec: &str) -> String {
    let (formatters, aliases) = test_formatters();
    let mut out = vec![];
    let data = vec![("a b", 1), ("ccc", 22)];
    print_with(&mut out, &Some(spec.to_string()), "all", &formatters, &aliases, data, false)
        .unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn test_parse_fields() {
    let (formatters, aliases) = test_formatters();
    let (fields, controls) = parse_fields("all,json", &formatters, &aliases).unwrap();
    assert!(fields == vec!["name", "count"]);
    assert!(controls.contains("json"));
    assert!(output_style(&controls) == Style::Json);
    let (fields, controls) = parse_fields("json", &formatters, &aliases).unwrap();
    assert!(fields.is_empty());
    assert!(output_style(&controls) == Style::Json);
    assert!(parse_fields("name,zappa", &formatters, &aliases).is_err());
}

#[test]
fn test_formats() {
    assert!(render("all") == "name  count\na b   1\nccc   22\n");
    assert!(render("count,noheader") == "1\n22\n");
    assert!(render("all,awk") == "a_b 1\nccc 22\n");
    assert!(render("name,json") == "[{\"name\":\"a b\"},{\"name\":\"ccc\"}]\n");
    // Only control words: the default fields in the selected style.
    assert!(render("awk") == "a_b 1\nccc 22\n");
    assert!(render("noheader") == "a b  1\nccc  22\n");
}

#[test]
fn test_help() {
    let (formatters, aliases) = test_formatters();
    let help = || Help::new(&formatters, &aliases, "all");
    let mut out = vec![];
    assert!(maybe_help(&mut out, &Some("help".to_string()), help));
    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("Fields:\n  count\n  name\n"));
    assert!(text.contains("Aliases:\n  all --> count,name\n"));
    assert!(text.contains("Defaults:\n  all\n"));

    let mut out = vec![];
    assert!(!maybe_help(&mut out, &Some("all".to_string()), help));
    assert!(!maybe_help(&mut out, &None, help));
    assert!(out.is_empty());
}
