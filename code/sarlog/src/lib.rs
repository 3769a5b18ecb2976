/// A sar report is the text output of `sar -A` (or `sar -f` on a binary sa file) from the sysstat
/// package: a preamble line naming the kernel, host and date, followed by many tables of counters
/// sampled at regular intervals.  Each table starts with a column header line and is closed by a
/// blank line or by "Average:" / "Summary" lines.  Tables either have one row per sample time ("2D"
/// tables, eg memory usage) or one row per sample time and index value ("3D" tables, eg per-CPU
/// utilization, where the index column is CPU).
///
/// This library reads a set of such reports into one time-indexed data set and answers the queries
/// a graphing tool needs.  The task breaks down like this:
///
/// - Know every counter sar can print: its value shape, category, unit and description (the
///   catalog).  Tables are parsed with a row pattern built from their headers, so an unknown header
///   is an error rather than a silently dropped column.
///
/// - Parse the reports line by line with an explicit state machine, placing each row in time.  sar
///   prints only the time of day, so day rollovers are inferred.
///
/// - Record the values under plain or composite (`CPU#0#%idle`) keys, then finalize the data set:
///   drop all-zero keys and make every timestamp have every key.
///
/// - Plan graphs by category, with titles and labels from the catalog.
mod catalog;
mod catalog_data;
mod configs;
mod dataset;
mod environment;
mod error;
mod graphs;
mod lines;
mod pattern;
mod reportfile;
mod reports;
mod timestamp;

// The shape of values in a column, and a catalog record for one known counter.

pub use catalog::Entry;
pub use catalog::ValueKind;

// Find the catalog record for a counter name.

pub use catalog::lookup;

// The regular expression fragment matching values in a column, or an error for an unknown column.

pub use catalog::regex_for;

// The presentation category of a plain or composite key, and the list of all categories.

pub use catalog::category_for;
pub use catalog::list_all_categories;

// Index columns introduce a "3D" table.

pub use catalog::is_index_column;
pub use catalog::INDEX_COLUMNS;

// Composite keys INDEX#VALUE#COUNTER.

pub use catalog::composite_key;
pub use catalog::split_composite;

// Legend text for a set of keys.

pub use catalog::describe;
pub use catalog::Description;

// Title, unit and line labels for a graph of a set of keys.

pub use catalog::labels_title;
pub use catalog::GraphInfo;

// Place a time of day on the timeline, tracking day rollover.

pub use timestamp::canonicalize;
pub use timestamp::DayTracker;
pub use timestamp::Placement;

// Line predicates.

pub use lines::column_headers;
pub use lines::is_blank;
pub use lines::is_summary;

// The row matcher for one table.

pub use pattern::Row;
pub use pattern::RowPattern;

// The time-indexed data.

pub use dataset::Dataset;
pub use dataset::Stored;
pub use dataset::Value;

// Parse one report into a data set.

pub use reportfile::parse_preamble;
pub use reportfile::parse_report;
pub use reportfile::ParseOptions;
pub use reportfile::ReportMetadata;

// Read a set of reports into one finalized data set with some simple metadata.

pub use reports::read_reports;
pub use reports::read_sources;
pub use reports::Report;
pub use reports::MAX_DUPLICATES_SHOWN;

// What graphs to draw, custom graphs, and annotations.

pub use graphs::custom_graphs;
pub use graphs::graph_plan;
pub use graphs::parse_labels;
pub use graphs::Annotation;
pub use graphs::Graph;
pub use graphs::CUSTOM_CATEGORY;
pub use graphs::MAX_PER_GRAPH;

// Optional knowledge about the host: reboots and interrupt line devices.

pub use environment::Environment;
pub use environment::NoEnvironment;

// The environment read from a json file.

pub use configs::read_from_json;
pub use configs::HostEnvironment;

// Errors.

pub use error::CatalogError;
pub use error::Duplicate;
pub use error::GraphError;
pub use error::SarError;
