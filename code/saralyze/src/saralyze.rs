/// `saralyze` -- Analyze `sar` activity reports
///
/// Run with --help for brief help.
///
/// Every command that reads reports takes the same source arguments: the report files (text output
/// of `sar -A`), an optional time window, an optional list of tables to skip, and an optional
/// environment file describing the host.  The reports are read into one data set, and the command
/// then prints something derived from it.
///
/// Quirks
///
/// The --from and --to values filter individual sample rows, but day rollover is detected on all
/// rows of a table, so a window that starts after midnight still places the rows correctly.
///
/// The `list` command prints free text.  The other commands print tables controlled by --fmt, see
/// `--fmt=help` for each.
mod describe;
mod format;
mod graphs;
mod list;
mod metadata;
mod values;

use anyhow::{bail, Result};
use clap::{Args, Parser, Subcommand};
use sarlog::{Environment, NoEnvironment, ParseOptions, Report};
use sarutils::Timestamp;
use std::io;
use std::process;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print information about the program
    Version,

    /// Print the host, timespan, data gaps and the available keys of each category
    List(ListCmdArgs),

    /// Print the graphs that would be drawn from the reports
    Graphs(GraphsCmdArgs),

    /// Print the catalog descriptions of some counters
    Describe(DescribeCmdArgs),

    /// Parse the reports and print metadata
    Metadata(MetadataCmdArgs),

    /// Parse the reports and print the values of selected keys at every timestamp
    Values(ValuesCmdArgs),
}

#[derive(Args, Debug)]
pub struct ListCmdArgs {
    #[command(flatten)]
    source_args: SourceArgs,

    #[command(flatten)]
    meta_args: MetaArgs,
}

#[derive(Args, Debug)]
pub struct GraphsCmdArgs {
    #[command(flatten)]
    source_args: SourceArgs,

    #[command(flatten)]
    graph_args: GraphArgs,

    #[command(flatten)]
    print_args: PrintArgs,

    #[command(flatten)]
    meta_args: MetaArgs,
}

#[derive(Args, Debug)]
pub struct DescribeCmdArgs {
    /// Counter names or column keys, eg `%util` or `DEV#sda#%util`
    #[arg(required = true)]
    keys: Vec<String>,

    #[command(flatten)]
    print_args: PrintArgs,

    #[command(flatten)]
    meta_args: MetaArgs,
}

#[derive(Args, Debug)]
pub struct MetadataCmdArgs {
    #[command(flatten)]
    source_args: SourceArgs,

    #[command(flatten)]
    print_args: PrintArgs,

    #[command(flatten)]
    meta_args: MetaArgs,
}

#[derive(Args, Debug)]
pub struct ValuesCmdArgs {
    #[command(flatten)]
    source_args: SourceArgs,

    /// Select keys matching this regular expression at their start (repeatable) [default: all]
    #[arg(long = "match")]
    patterns: Vec<String>,

    #[command(flatten)]
    print_args: PrintArgs,

    #[command(flatten)]
    meta_args: MetaArgs,
}

#[derive(Args, Debug)]
pub struct SourceArgs {
    /// Select samples at this time and later.  Format is YYYY-MM-DD with optional HH:MM[:SS],
    /// separated by space or T [default: no limit]
    #[arg(long, short, value_parser = parse_time_start_of_day)]
    from: Option<Timestamp>,

    /// Select samples at this time and earlier.  A bare date means the end of that day
    /// [default: no limit]
    #[arg(long, short, value_parser = parse_time_end_of_day)]
    to: Option<Timestamp>,

    /// Do not parse tables whose first column header is this (repeatable) [default: BUS]
    #[arg(long)]
    skip_table: Vec<String>,

    /// Read reboot times and interrupt devices for the host from this json file
    #[arg(long)]
    env_file: Option<String>,

    /// Report file names, read in order
    #[arg(required = true)]
    files: Vec<String>,
}

#[derive(Args, Debug, Default)]
pub struct GraphArgs {
    /// Graph only this category (repeatable) [default: all]
    #[arg(long)]
    category: Vec<String>,

    /// Leave out keys with this name, index value or counter (repeatable)
    #[arg(long)]
    skip: Vec<String>,

    /// Split graphs with more keys than this
    #[arg(long, default_value_t = sarlog::MAX_PER_GRAPH)]
    max_per_graph: usize,

    /// Add a graph NAME:REGEX[,REGEX...] of the keys matching any of the expressions (repeatable)
    #[arg(long)]
    custom: Vec<String>,

    /// Annotate the graphs with LABEL:TIME (repeatable)
    #[arg(long)]
    label: Vec<String>,
}

#[derive(Args, Debug, Default)]
pub struct PrintArgs {
    /// Select fields and format for the output, "--fmt=help" to list them
    #[arg(long)]
    fmt: Option<String>,
}

#[derive(Args, Debug, Default)]
pub struct MetaArgs {
    /// Log progress to stderr, repeat for more detail
    #[arg(long, short, action = clap::ArgAction::Count)]
    verbose: u8,
}

// The command arg parsers don't need to include the string being parsed because the error generated
// by clap includes that.

fn parse_time(s: &str, end_of_day: bool) -> Result<Timestamp> {
    let t = sarutils::parse_timestamp(s)?;
    if end_of_day && sarutils::is_date_only(s) {
        Ok(sarutils::end_of_day(t))
    } else {
        Ok(t)
    }
}

fn parse_time_start_of_day(s: &str) -> Result<Timestamp> {
    parse_time(s, false)
}

fn parse_time_end_of_day(s: &str) -> Result<Timestamp> {
    parse_time(s, true)
}

fn main() {
    match saralyze() {
        Ok(()) => {}
        Err(msg) => {
            eprintln!("ERROR: {}", msg);
            process::exit(1);
        }
    }
}

fn saralyze() -> Result<()> {
    let cli = Cli::parse();

    let meta_args = match cli.command {
        Commands::Version => {
            // Syntax:
            //  - components of the version string are space-separated, with no other spaces
            //  - the keyword "saralyze" is always the first component
            //  - every component is keyword(value)
            println!("saralyze version({})", env!("CARGO_PKG_VERSION"));
            return Ok(());
        }
        Commands::List(ref list_args) => &list_args.meta_args,
        Commands::Graphs(ref graphs_args) => &graphs_args.meta_args,
        Commands::Describe(ref describe_args) => &describe_args.meta_args,
        Commands::Metadata(ref metadata_args) => &metadata_args.meta_args,
        Commands::Values(ref values_args) => &values_args.meta_args,
    };

    let mut stdout = io::stdout();
    if match cli.command {
        Commands::Graphs(ref graphs_args) => {
            format::maybe_help(&mut stdout, &graphs_args.print_args.fmt, &graphs::fmt_help)
        }
        Commands::Describe(ref describe_args) => {
            format::maybe_help(&mut stdout, &describe_args.print_args.fmt, &describe::fmt_help)
        }
        Commands::Metadata(ref metadata_args) => {
            format::maybe_help(&mut stdout, &metadata_args.print_args.fmt, &metadata::fmt_help)
        }
        Commands::Values(ref values_args) => {
            format::maybe_help(&mut stdout, &values_args.print_args.fmt, &values::fmt_help)
        }
        Commands::Version | Commands::List(_) => false,
    } {
        return Ok(());
    }

    init_logging(meta_args.verbose);

    let output = &mut stdout;
    match cli.command {
        Commands::Version => Ok(()),
        Commands::Describe(ref describe_args) => {
            describe::print(output, &describe_args.keys, &describe_args.print_args)
        }
        Commands::List(ref list_args) => {
            let (report, env) = read_input(&list_args.source_args)?;
            list::print(output, &report, env.as_ref())?;
            report.close();
            Ok(())
        }
        Commands::Graphs(ref graphs_args) => {
            let (report, env) = read_input(&graphs_args.source_args)?;
            graphs::print(
                output,
                &report,
                env.as_ref(),
                &graphs_args.graph_args,
                &graphs_args.print_args,
            )?;
            report.close();
            Ok(())
        }
        Commands::Metadata(ref metadata_args) => {
            let (report, _) = read_input(&metadata_args.source_args)?;
            metadata::print(output, &report, &metadata_args.print_args)?;
            report.close();
            Ok(())
        }
        Commands::Values(ref values_args) => {
            let (report, _) = read_input(&values_args.source_args)?;
            values::print(
                output,
                &report,
                &values_args.patterns,
                &values_args.print_args,
            )?;
            report.close();
            Ok(())
        }
    }
}

/// Read the environment file, if any, and then the reports.  The environment comes first so that a
/// broken environment file is reported before the slow part.

fn read_input(source_args: &SourceArgs) -> Result<(Report, Box<dyn Environment>)> {
    if let (Some(from), Some(to)) = (source_args.from, source_args.to) {
        if from > to {
            bail!("The --from time is after the --to time")
        }
    }

    let env: Box<dyn Environment> = match source_args.env_file {
        Some(ref filename) => {
            let env = sarlog::read_from_json(filename)?;
            info!("Environment for host {:?}", env.hostname);
            Box::new(env)
        }
        None => Box::new(NoEnvironment),
    };

    let mut options = ParseOptions {
        start: source_args.from,
        end: source_args.to,
        ..Default::default()
    };
    if !source_args.skip_table.is_empty() {
        options.skip_tables = source_args.skip_table.clone();
    }
    let report = sarlog::read_reports(&source_args.files, &options)?;
    if let Some(msg) = report.duplicates_summary(sarlog::MAX_DUPLICATES_SHOWN) {
        warn!("{msg}");
    }
    Ok((report, env))
}

// Verbosity selects the default level, RUST_LOG overrides it.

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

#[test]
fn test_parse_time() {
    let t = |y, mo, d, h, mi, s| sarutils::timestamp_from_ymdhms(y, mo, d, h, mi, s).unwrap();
    assert!(parse_time_start_of_day("2021-07-02").unwrap() == t(2021, 7, 2, 0, 0, 0));
    assert!(parse_time_end_of_day("2021-07-02").unwrap() == t(2021, 7, 2, 23, 59, 59));
    assert!(parse_time_end_of_day("2021-07-02 00:30").unwrap() == t(2021, 7, 2, 0, 30, 0));
    assert!(parse_time_start_of_day("2021-07-02T00:30:15").unwrap() == t(2021, 7, 2, 0, 30, 15));
    assert!(parse_time_start_of_day("yesterday").is_err());
    assert!(parse_time_end_of_day("2021-13-02").is_err());
}

#[test]
fn test_read_input() {
    let source_args = |from: Option<&str>, to: Option<&str>| SourceArgs {
        from: from.map(|s| parse_time_start_of_day(s).unwrap()),
        to: to.map(|s| parse_time_end_of_day(s).unwrap()),
        skip_table: vec![],
        env_file: None,
        files: vec!["../../tests/sarlog/sar-rhel8.txt".to_string()],
    };
    let window = source_args(Some("2021-07-02 00:15"), Some("2021-07-02"));
    let (report, _) = read_input(&window).unwrap();
    assert!(report.dataset.len() == 4);
    assert!(read_input(&source_args(Some("2021-07-03"), Some("2021-07-02"))).is_err());

    let mut args = source_args(None, None);
    args.env_file = Some("../../tests/sarlog/no-such-env.json".to_string());
    assert!(read_input(&args).is_err());
}

#[cfg(test)]
#[derive(Clone, Default)]
struct LogBuffer(std::sync::Arc<std::sync::Mutex<Vec<u8>>>);

#[cfg(test)]
impl io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn test_read_input_warns_duplicates() {
    let buffer = LogBuffer::default();
    let writer = buffer.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::WARN)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();
    let source_args = SourceArgs {
        from: None,
        to: None,
        skip_table: vec![],
        env_file: None,
        files: vec![
            "../../tests/sarlog/sar-rhel7.txt".to_string(),
            "../../tests/sarlog/sar-rhel8.txt".to_string(),
        ],
    };
    let (report, _) =
        tracing::subscriber::with_default(subscriber, || read_input(&source_args)).unwrap();
    assert!(report.duplicates.len() == 1);
    let logged = String::from_utf8(buffer.0.lock().unwrap().clone()).unwrap();
    assert!(logged.contains("Lines with duplicate keys (1)"));
    assert!(logged.contains(&report.duplicates[0].to_string()));
}
