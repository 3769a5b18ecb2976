/// Print the catalog descriptions of the given keys, one row per counter.  The keys need not be in
/// any report, and composite keys are described by their counter.
use crate::format;
use crate::PrintArgs;

use anyhow::Result;
use sarlog::Description;
use std::collections::HashMap;
use std::io;

pub fn print(output: &mut dyn io::Write, keys: &[String], print_args: &PrintArgs) -> Result<()> {
    let names = keys.iter().map(|k| k.as_str()).collect::<Vec<&str>>();
    let data = sarlog::describe(&names)?;
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

const FMT_DEFAULTS: &str = "name,desc";

fn my_formatters() -> (
    HashMap<String, &'static dyn Fn(DescDatum, DescCtx) -> String>,
    HashMap<String, Vec<String>>,
) {
    let mut formatters: HashMap<String, &'static dyn Fn(DescDatum, DescCtx) -> String> =
        HashMap::new();
    let mut aliases: HashMap<String, Vec<String>> = HashMap::new();
    formatters.insert("name".to_string(), &format_name);
    formatters.insert("desc".to_string(), &format_desc);
    formatters.insert("detail".to_string(), &format_detail);

    aliases.insert(
        "all".to_string(),
        vec![
            "name".to_string(),
            "desc".to_string(),
            "detail".to_string(),
        ],
    );

    (formatters, aliases)
}

type DescDatum<'a> = &'a Description;
type DescCtx = bool;

fn format_name(d: DescDatum, _: DescCtx) -> String {
    d.name.clone()
}

fn format_desc(d: DescDatum, _: DescCtx) -> String {
    d.desc.to_string()
}

fn format_detail(d: DescDatum, _: DescCtx) -> String {
    d.detail.unwrap_or("-").to_string()
}

#[test]
fn test_describe() {
    let describe = |keys: &[&str], fmt: &str| {
        let keys = keys.iter().map(|k| k.to_string()).collect::<Vec<String>>();
        let print_args = PrintArgs {
            fmt: Some(fmt.to_string()),
        };
        let mut out = vec![];
        print(&mut out, &keys, &print_args).map(|_| String::from_utf8(out).unwrap())
    };
    assert!(describe(&["%util"], "name,noheader").unwrap() == "%util\n");
    // One description for a run of keys with the same counter.
    assert!(
        describe(&["DEV#sda#%util", "DEV#sdb#%util", "ldavg-1"], "name,noheader").unwrap()
            == "%util\nldavg-1\n"
    );
    let text = describe(&["ldavg-1"], "desc,awk").unwrap();
    assert!(text.starts_with("System_load_average_for_the_last_minute."));
    assert!(describe(&["%zorks"], "name").is_err());
    assert!(describe(&[], "name").is_err());
}
