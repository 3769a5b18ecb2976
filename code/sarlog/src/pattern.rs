/// Row matchers built from a table's column headers.
///
/// sar tables are self-describing only through their header line, so each table gets its own
/// regular expression: the time of day, then one capture group per column with that column's value
/// shape from the catalog.  The matcher lives as long as the table.
use crate::catalog;
use crate::error::CatalogError;
use crate::lines::TIMESTAMP_RE;

use regex::{Captures, Regex, RegexBuilder};
use ustr::Ustr;

// Wide tables (per-CPU interrupt tables can have hundreds of columns) blow the default limit.
const REGEX_SIZE_LIMIT: usize = 64 * 1024 * 1024;

#[derive(Debug)]
pub struct RowPattern {
    regex: Regex,
    headers: Vec<Ustr>,
    index_column: Option<usize>,
}

impl RowPattern {
    /// Fails with the first header that is not in the catalog.

    pub fn build(headers: &[&str]) -> Result<RowPattern, CatalogError> {
        let mut re = format!("^({TIMESTAMP_RE})");
        for h in headers {
            re += r"\s+(";
            re += catalog::regex_for(h)?;
            re += ")";
        }
        re += r"\s*$";
        let regex = RegexBuilder::new(&re)
            .size_limit(REGEX_SIZE_LIMIT)
            .build()
            // Every fragment is a valid regex, so this can only be the size limit.
            .map_err(|_| CatalogError::PatternTooLarge(headers.len()))?;
        Ok(RowPattern {
            regex,
            headers: headers.iter().map(|h| Ustr::from(*h)).collect::<Vec<Ustr>>(),
            index_column: headers.iter().position(|h| catalog::is_index_column(h)),
        })
    }

    pub fn headers(&self) -> &[Ustr] {
        &self.headers
    }

    /// The position of the index column among the headers, for a "3D" table.

    pub fn index_column(&self) -> Option<usize> {
        self.index_column
    }

    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    pub fn captures<'t>(&self, line: &'t str) -> Option<Row<'t>> {
        self.regex.captures(line).map(|caps| Row { caps })
    }
}

/// A matched data row.  Column `i` is the value under header `i`.

pub struct Row<'t> {
    caps: Captures<'t>,
}

impl<'t> Row<'t> {
    pub fn time(&self) -> &'t str {
        self.caps.get(1).map_or("", |m| m.as_str())
    }

    pub fn column(&self, i: usize) -> &'t str {
        self.caps.get(i + 2).map_or("", |m| m.as_str())
    }
}

#[test]
fn test_build_2d() {
    let p = RowPattern::build(&["runq-sz", "plist-sz", "ldavg-1", "ldavg-5", "ldavg-15"]).unwrap();
    assert!(p.index_column().is_none());
    assert!(p.headers().len() == 5);
    let row = p.captures("00:10:01            0       312      0.02      0.05      0.01").unwrap();
    assert!(row.time() == "00:10:01");
    assert!(row.column(0) == "0");
    assert!(row.column(1) == "312");
    assert!(row.column(4) == "0.01");
    assert!(p.captures("00:10:01  0  312  0.02  0.05").is_none());
    assert!(p.captures("00:10:01  0  312  0.02  0.05  0.01  7").is_none());
}

#[test]
fn test_build_3d() {
    let p = RowPattern::build(&["CPU", "%user", "%nice", "%system"]).unwrap();
    assert!(p.index_column() == Some(0));
    let row = p.captures("12:10:01 AM     all      0.25      0.00      0.10").unwrap();
    assert!(row.time() == "12:10:01 AM");
    assert!(row.column(0) == "all");
    assert!(row.column(3) == "0.10");

    // The filesystem table has its index column last and names with spaces.
    let p = RowPattern::build(&["MBfsfree", "MBfsused", "%fsused", "FILESYSTEM"]).unwrap();
    assert!(p.index_column() == Some(3));
    let row = p.captures("00:10:01     10240      2048     16.67 /dev/mapper/root vol").unwrap();
    assert!(row.column(3) == "/dev/mapper/root vol");
}

#[test]
fn test_unknown_header() {
    let e = RowPattern::build(&["CPU", "%user", "%frobs"]).unwrap_err();
    assert!(e == CatalogError::UnknownColumn("%frobs".to_string()));
}

#[test]
fn test_interrupts_na() {
    let p = RowPattern::build(&["CPU", "i000/s", "i001/s"]).unwrap();
    let row = p.captures("00:10:01        0      12.00      N/A").unwrap();
    assert!(row.column(2) == "N/A");
}
