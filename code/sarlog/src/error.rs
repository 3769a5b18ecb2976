/// Errors from reading sar reports and from catalog queries.
///
/// Parse errors identify the file and the 1-based line number.  They are fatal for the whole read:
/// `read_reports` stops at the first one.  Duplicate keys are not errors, see `Duplicate`.
use std::fmt;
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SarError {
    #[error("{file}:{line}: Malformed report preamble: '{text}'")]
    MalformedPreamble {
        file: String,
        line: usize,
        text: String,
    },

    #[error("{file}:{line}: Expected {expected}, got '{text}'")]
    UnexpectedLine {
        file: String,
        line: usize,
        expected: &'static str,
        text: String,
    },

    /// A data row did not match the pattern built from its table's headers.
    #[error(
        "{file}:{line}: Row does not match table\n  headers: {headers}\n  \
         pattern: {pattern}\n  line: '{text}'"
    )]
    RowMismatch {
        file: String,
        line: usize,
        headers: String,
        pattern: String,
        text: String,
    },

    #[error("{file}:{line}: Unknown column '{name}'")]
    UnknownColumn {
        file: String,
        line: usize,
        name: String,
    },

    #[error("{file}:{line}: Time went backwards from {previous} to {current}")]
    TimeRegression {
        file: String,
        line: usize,
        previous: String,
        current: String,
    },

    #[error("{file}:{line}: Bad time of day '{text}'")]
    BadTimestamp {
        file: String,
        line: usize,
        text: String,
    },

    #[error("{file}: {source}")]
    Io {
        file: String,
        #[source]
        source: io::Error,
    },

    #[error("No input files")]
    NoInput,
}

/// Errors from catalog lookups made outside of parsing.

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Unknown column '{0}'")]
    UnknownColumn(String),

    #[error("Empty list of columns")]
    EmptyRequest,

    #[error("Cannot combine columns from different indices: {0}")]
    MixedIndex(String),

    #[error("Row pattern for {0} columns is too large")]
    PatternTooLarge(usize),
}

/// Errors from planning graphs and reading user-supplied graph and label specifications.

#[derive(Debug, Error)]
pub enum GraphError {
    #[error("Bad custom graph '{0}', expected NAME:REGEX[,REGEX...]")]
    BadSpec(String),

    #[error("Bad pattern '{pattern}' in custom graph: {source}")]
    BadPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("Bad label '{0}', expected LABEL:YYYY-MM-DD HH:MM:SS")]
    BadLabel(String),

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// A line that wrote a key already present at its timestamp.  Recorded once per line, never fatal.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Duplicate {
    pub file: String,
    pub line: usize,
}

impl fmt::Display for Duplicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}
