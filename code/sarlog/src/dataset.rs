/// The time-indexed data set built from sar reports.
///
/// The data are a map from timestamp to a map from column key to value.  A column key is either a
/// plain counter name such as `%memused`, or for tables with an index column a composite key
/// `INDEX#VALUE#COUNTER` such as `CPU#0#%idle`.  Every key also has a presentation category.
///
/// Rows are inserted while parsing.  After all input has been read, `finalize` establishes the
/// invariants the queries rely on:
///
/// - a key whose value is numeric zero at every timestamp is removed,
/// - every timestamp has the same key set, with None standing in for missing values,
/// - the category map has exactly the keys of the data.
///
/// After finalization the data set is not mutated and can be shared freely for reading.
use crate::catalog;
use crate::pattern::{Row, RowPattern};

use regex::Regex;
use sarutils::{natural_cmp, natural_sort, seconds_between, Timestamp};
use std::collections::{BTreeMap, HashMap, HashSet};
use std::fmt;
use ustr::Ustr;

#[derive(Debug, Clone)]
pub enum Value {
    Number(f64),
    /// Anything that did not parse as a number, eg "N/A", or a device name.
    Text(Ustr),
}

impl Value {
    pub fn parse(s: &str) -> Value {
        match s.parse::<f64>() {
            Ok(x) => Value::Number(x),
            Err(_) => Value::Text(Ustr::from(s)),
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(x) => Some(*x),
            Value::Text(_) => None,
        }
    }

    fn is_zero(&self) -> bool {
        matches!(self, Value::Number(x) if *x == 0.0)
    }
}

// sar prints "nan" for some decimal columns, and a re-read of the same report must compare equal.

impl PartialEq for Value {
    fn eq(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Number(x), Value::Number(y)) => x == y || (x.is_nan() && y.is_nan()),
            (Value::Text(a), Value::Text(b)) => a == b,
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(x) => write!(f, "{x}"),
            Value::Text(s) => write!(f, "{s}"),
        }
    }
}

/// What became of a data row.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stored {
    /// All values were written under keys that were new for the timestamp.
    Fresh,
    /// Some key already had a value at the timestamp; it was overwritten.
    Duplicate,
    /// The row was an aggregate ("all", "Summary") of an index table and was not stored.
    Aggregate,
}

type Samples = HashMap<Ustr, Option<Value>>;

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Dataset {
    data: BTreeMap<Timestamp, Samples>,
    categories: HashMap<Ustr, &'static str>,
}

impl Dataset {
    pub fn new() -> Dataset {
        Default::default()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Store the values of one matched row at `instant`.
    ///
    /// In a table without an index column every column is its own key, except that `retrans/s`
    /// directly after `estres/s` is stored as `retrant/s`: sar uses the name `retrans/s` both for
    /// TCP error retransmissions (after `estres/s`) and for NFS client retransmissions.
    ///
    /// In a table with an index column, every other column becomes a composite key over the row's
    /// index value.  Rows for the aggregate index values "all" and "Summary" are not stored.

    pub fn insert_row(&mut self, instant: Timestamp, pattern: &RowPattern, row: &Row) -> Stored {
        let headers = pattern.headers();
        let mut cells = Vec::with_capacity(headers.len());
        match pattern.index_column() {
            None => {
                let mut previous = Ustr::from("");
                for (i, h) in headers.iter().enumerate() {
                    let name = if h.as_str() == "retrans/s" && previous.as_str() == "estres/s" {
                        Ustr::from("retrant/s")
                    } else {
                        *h
                    };
                    cells.push((name, Value::parse(row.column(i))));
                    previous = name;
                }
            }
            Some(ix) => {
                let index_value = row.column(ix);
                if index_value == "all" || index_value == "Summary" {
                    return Stored::Aggregate;
                }
                for (i, h) in headers.iter().enumerate() {
                    if i == ix {
                        continue;
                    }
                    let key = catalog::composite_key(headers[ix].as_str(), index_value, h.as_str());
                    cells.push((Ustr::from(key.as_str()), Value::parse(row.column(i))));
                }
            }
        }
        self.store(instant, cells)
    }

    fn store(&mut self, instant: Timestamp, cells: Vec<(Ustr, Value)>) -> Stored {
        if cells.is_empty() {
            return Stored::Fresh;
        }
        let samples = self.data.entry(instant).or_default();
        let mut result = Stored::Fresh;
        for (key, value) in cells {
            if samples.insert(key, Some(value)).is_some() {
                result = Stored::Duplicate;
            }
            self.categories
                .entry(key)
                .or_insert_with(|| catalog::category_for(key.as_str()));
        }
        result
    }

    /// Drop all-zero keys, make every timestamp have the same keys, and prune the categories.
    /// Running it again changes nothing.

    pub fn finalize(&mut self) {
        let mut informative = HashSet::new();
        for samples in self.data.values() {
            for (k, v) in samples {
                if let Some(v) = v {
                    if !v.is_zero() {
                        informative.insert(*k);
                    }
                }
            }
        }
        for samples in self.data.values_mut() {
            samples.retain(|k, _| informative.contains(k));
            for k in &informative {
                samples.entry(*k).or_insert(None);
            }
        }
        self.categories.retain(|k, _| informative.contains(k));
    }

    /// Mean distance in seconds between consecutive timestamps, None if there are fewer than two.

    pub fn sample_frequency(&self) -> Option<f64> {
        if self.data.len() < 2 {
            return None;
        }
        let times = self.data.keys().copied().collect::<Vec<Timestamp>>();
        let total = times
            .windows(2)
            .map(|w| seconds_between(w[0], w[1]))
            .sum::<i64>();
        Some(total as f64 / (times.len() - 1) as f64)
    }

    /// Pairs of consecutive timestamps further apart than 1.1 times `frequency` seconds, the limit
    /// rounded down to whole seconds.

    pub fn gaps(&self, frequency: f64) -> Vec<(Timestamp, Timestamp)> {
        let limit = (frequency * 1.1) as i64;
        let times = self.data.keys().copied().collect::<Vec<Timestamp>>();
        times
            .windows(2)
            .filter(|w| seconds_between(w[0], w[1]) > limit)
            .map(|w| (w[0], w[1]))
            .collect::<Vec<(Timestamp, Timestamp)>>()
    }

    pub fn timestamps(&self) -> Vec<Timestamp> {
        self.data.keys().copied().collect::<Vec<Timestamp>>()
    }

    pub fn first_timestamp(&self) -> Option<Timestamp> {
        self.data.keys().next().copied()
    }

    pub fn last_timestamp(&self) -> Option<Timestamp> {
        self.data.keys().next_back().copied()
    }

    pub fn value(&self, t: Timestamp, key: &str) -> Option<&Value> {
        self.data.get(&t)?.get(&Ustr::from(key))?.as_ref()
    }

    /// The keys present at the first timestamp, in natural order.  After finalization these are all
    /// the keys.

    pub fn available_datasets(&self) -> Vec<Ustr> {
        match self.data.values().next() {
            Some(samples) => sorted_keys(samples.keys().copied()),
            None => vec![],
        }
    }

    /// The union of keys across all timestamps, in natural order.

    pub fn available_keys(&self) -> Vec<Ustr> {
        let mut keys = HashSet::new();
        for samples in self.data.values() {
            keys.extend(samples.keys().copied());
        }
        sorted_keys(keys.into_iter())
    }

    /// The keys that `pattern` matches at their start.

    pub fn match_keys(&self, pattern: &str) -> Result<Vec<Ustr>, regex::Error> {
        let re = Regex::new(&format!("^(?:{pattern})"))?;
        Ok(self
            .available_datasets()
            .into_iter()
            .filter(|k| re.is_match(k.as_str()))
            .collect::<Vec<Ustr>>())
    }

    pub fn keys_with_prefix(&self, prefix: &str) -> Vec<Ustr> {
        self.available_datasets()
            .into_iter()
            .filter(|k| k.as_str().starts_with(prefix))
            .collect::<Vec<Ustr>>()
    }

    /// Group the composite keys of index column `index_column`.  With `per_key` there is one group
    /// per index value (all counters of device X), otherwise one group per counter (`%util` of all
    /// devices).  Groups are in natural order of the grouping value.  Counters ending in `DEVICE`
    /// hold names, not numbers, and are left out.

    pub fn keys_per_index(&self, index_column: &str, per_key: bool) -> Vec<Vec<Ustr>> {
        let mut groups: HashMap<&str, Vec<Ustr>> = HashMap::new();
        let keys = self.keys_with_prefix(&format!("{index_column}#"));
        for k in &keys {
            let Some((_, index_value, sub_column)) = catalog::split_composite(k.as_str()) else {
                continue;
            };
            if sub_column.ends_with("DEVICE") {
                continue;
            }
            let group = if per_key { index_value } else { sub_column };
            groups.entry(group).or_default().push(*k);
        }
        let mut names = groups.keys().copied().collect::<Vec<&str>>();
        natural_sort(&mut names);
        names
            .into_iter()
            .filter_map(|n| groups.remove(n))
            .collect::<Vec<Vec<Ustr>>>()
    }

    /// The largest numeric value among `keys` at the timestamp nearest `t`, preferring the earlier
    /// one on a tie.

    pub fn find_max(&self, t: Timestamp, keys: &[&str]) -> Option<f64> {
        let before = self.data.range(..=t).next_back();
        let after = self.data.range(t..).next();
        let (_, samples) = match (before, after) {
            (Some(b), Some(a)) => {
                if seconds_between(*b.0, t) <= seconds_between(t, *a.0) {
                    b
                } else {
                    a
                }
            }
            (Some(b), None) => b,
            (None, Some(a)) => a,
            (None, None) => return None,
        };
        keys.iter()
            .filter_map(|k| samples.get(&Ustr::from(*k))?.as_ref()?.as_f64())
            .reduce(f64::max)
    }

    /// The values of `key` in timestamp order, None where it has no value.

    pub fn series(&self, key: &str) -> Vec<(Timestamp, Option<&Value>)> {
        let key = Ustr::from(key);
        self.data
            .iter()
            .map(|(t, samples)| (*t, samples.get(&key).and_then(|v| v.as_ref())))
            .collect::<Vec<(Timestamp, Option<&Value>)>>()
    }

    pub fn category(&self, key: &str) -> Option<&'static str> {
        self.categories.get(&Ustr::from(key)).copied()
    }

    /// Keys grouped by category, both in natural order.

    pub fn keys_by_category(&self) -> Vec<(&'static str, Vec<Ustr>)> {
        let mut cats: HashMap<&'static str, Vec<Ustr>> = HashMap::new();
        for (k, c) in &self.categories {
            cats.entry(*c).or_default().push(*k);
        }
        let mut result = cats
            .into_iter()
            .map(|(c, ks)| (c, sorted_keys(ks.into_iter())))
            .collect::<Vec<(&'static str, Vec<Ustr>)>>();
        result.sort_by(|a, b| natural_cmp(a.0, b.0));
        result
    }
}

fn sorted_keys(keys: impl Iterator<Item = Ustr>) -> Vec<Ustr> {
    let mut keys = keys.collect::<Vec<Ustr>>();
    natural_sort(&mut keys);
    keys
}

#[cfg(test)]
fn ts(h: u32, m: u32, s: u32) -> Timestamp {
    sarutils::timestamp_from_ymdhms(2014, 3, 9, h, m, s).unwrap()
}

#[cfg(test)]
fn put(ds: &mut Dataset, p: &RowPattern, t: Timestamp, line: &str) -> Stored {
    let row = p.captures(line).unwrap();
    ds.insert_row(t, p, &row)
}

#[test]
fn test_composite_keys() {
    let p = RowPattern::build(&["DEV", "tps", "%util"]).unwrap();
    let mut ds = Dataset::new();
    assert!(put(&mut ds, &p, ts(0, 10, 1), "00:10:01  dev8-0  12.00  45.50") == Stored::Fresh);
    assert!(put(&mut ds, &p, ts(0, 10, 1), "00:10:01  dev8-16  1.00  0.00") == Stored::Fresh);
    ds.finalize();
    assert!(ds.value(ts(0, 10, 1), "DEV#dev8-0#%util") == Some(&Value::Number(45.5)));
    assert!(ds.category("DEV#dev8-0#%util") == Some("I/O"));
    // All-zero key is pruned.
    assert!(ds.value(ts(0, 10, 1), "DEV#dev8-16#%util").is_none());
    assert!(ds.category("DEV#dev8-16#%util").is_none());
    assert!(!ds.available_keys().contains(&Ustr::from("DEV#dev8-16#%util")));
}

#[test]
fn test_aggregate_rows() {
    let p = RowPattern::build(&["CPU", "%user", "%idle"]).unwrap();
    let mut ds = Dataset::new();
    assert!(put(&mut ds, &p, ts(0, 10, 1), "00:10:01  all  3.00  97.00") == Stored::Aggregate);
    assert!(ds.is_empty());
    let q = RowPattern::build(&["INTR", "intr/s"]).unwrap();
    assert!(put(&mut ds, &q, ts(0, 10, 1), "00:10:01  sum  100.00") == Stored::Fresh);
    assert!(ds.value(ts(0, 10, 1), "INTR#sum#intr/s") == Some(&Value::Number(100.0)));
}

#[test]
fn test_rename_retrans() {
    let headers = ["atmptf/s", "estres/s", "retrans/s", "isegerr/s", "orsts/s"];
    let p = RowPattern::build(&headers).unwrap();
    let mut ds = Dataset::new();
    put(&mut ds, &p, ts(0, 10, 1), "00:10:01  0.10  0.20  0.30  0.40  0.50");
    assert!(ds.value(ts(0, 10, 1), "retrant/s") == Some(&Value::Number(0.3)));
    assert!(ds.value(ts(0, 10, 1), "retrans/s").is_none());

    let q = RowPattern::build(&["call/s", "retrans/s", "read/s"]).unwrap();
    put(&mut ds, &q, ts(0, 10, 1), "00:10:01  5.00  1.00  2.00");
    assert!(ds.value(ts(0, 10, 1), "retrans/s") == Some(&Value::Number(1.0)));
    assert!(ds.value(ts(0, 10, 1), "retrant/s") == Some(&Value::Number(0.3)));
}

#[test]
fn test_duplicates_and_text() {
    let p = RowPattern::build(&["MBfsfree", "%fsused", "FILESYSTEM"]).unwrap();
    let mut ds = Dataset::new();
    assert!(put(&mut ds, &p, ts(0, 10, 1), "00:10:01  100  50.00 /dev/sda1") == Stored::Fresh);
    assert!(put(&mut ds, &p, ts(0, 10, 1), "00:10:01  120  40.00 /dev/sda1") == Stored::Duplicate);
    assert!(ds.value(ts(0, 10, 1), "FILESYSTEM#/dev/sda1#MBfsfree") == Some(&Value::Number(120.0)));

    let q = RowPattern::build(&["CPU", "i000/s"]).unwrap();
    put(&mut ds, &q, ts(0, 10, 1), "00:10:01  0  N/A");
    assert!(ds.value(ts(0, 10, 1), "CPU#0#i000/s") == Some(&Value::Text(Ustr::from("N/A"))));
}

#[test]
fn test_densify_and_prune() {
    let p = RowPattern::build(&["kbmemfree", "kbmemused"]).unwrap();
    let q = RowPattern::build(&["ldavg-1"]).unwrap();
    let mut ds = Dataset::new();
    put(&mut ds, &p, ts(0, 10, 0), "00:10:00  100  0");
    put(&mut ds, &p, ts(0, 20, 0), "00:20:00  100  0");
    put(&mut ds, &q, ts(0, 20, 0), "00:20:00  0.50");
    ds.finalize();
    assert!(ds.available_datasets() == vec![Ustr::from("kbmemfree"), Ustr::from("ldavg-1")]);
    for t in ds.timestamps() {
        assert!(ds.series("kbmemfree").len() == 2);
        assert!(ds.data[&t].len() == 2);
    }
    assert!(ds.value(ts(0, 10, 0), "ldavg-1").is_none());
    assert!(ds.series("ldavg-1")[0] == (ts(0, 10, 0), None));
    assert!(ds.category("kbmemused").is_none());

    let before = ds.clone();
    ds.finalize();
    assert!(ds == before);
}

#[test]
fn test_frequency_and_gaps() {
    let p = RowPattern::build(&["kbmemfree"]).unwrap();
    let mut ds = Dataset::new();
    assert!(ds.sample_frequency().is_none());
    for (i, m) in [0, 1, 2, 12, 13].iter().enumerate() {
        put(&mut ds, &p, ts(1, *m, 0), &format!("01:{m:02}:00  {}", i + 1));
    }
    // Deltas are 60, 60, 600, 60.
    assert!(ds.sample_frequency() == Some(195.0));
    let gaps = ds.gaps(60.0);
    assert!(gaps == vec![(ts(1, 2, 0), ts(1, 12, 0))]);
    assert!(ds.gaps(195.0) == vec![(ts(1, 2, 0), ts(1, 12, 0))]);
    assert!(ds.gaps(600.0).is_empty());
}

#[test]
fn test_queries() {
    let p = RowPattern::build(&["DEV", "tps", "%util", "DEVICE"]).unwrap();
    let mut ds = Dataset::new();
    put(&mut ds, &p, ts(0, 10, 0), "00:10:00  dev8-16  1.00  2.00  sdb");
    put(&mut ds, &p, ts(0, 10, 0), "00:10:00  dev8-2  3.00  4.00  sda");
    put(&mut ds, &p, ts(0, 20, 0), "00:20:00  dev8-16  5.00  6.00  sdb");
    put(&mut ds, &p, ts(0, 20, 0), "00:20:00  dev8-2  7.00  8.00  sda");
    ds.finalize();

    let per_device = ds.keys_per_index("DEV", true);
    assert!(per_device.len() == 2);
    assert!(per_device[0] == vec![Ustr::from("DEV#dev8-2#%util"), Ustr::from("DEV#dev8-2#tps")]);

    let per_counter = ds.keys_per_index("DEV", false);
    assert!(per_counter.len() == 2);
    assert!(
        per_counter[0] == vec![Ustr::from("DEV#dev8-2#%util"), Ustr::from("DEV#dev8-16#%util")]
    );

    let m = ds.match_keys("DEV#dev8-2").unwrap();
    assert!(m.len() == 3);
    assert!(ds.match_keys("tps").unwrap().is_empty());
    assert!(ds.match_keys("(").is_err());
    assert!(ds.keys_with_prefix("DEV#dev8-16#").len() == 3);

    assert!(ds.find_max(ts(0, 12, 0), &["DEV#dev8-2#tps", "DEV#dev8-16#tps"]) == Some(3.0));
    assert!(ds.find_max(ts(0, 18, 0), &["DEV#dev8-2#tps", "DEV#dev8-16#tps"]) == Some(7.0));
    assert!(ds.find_max(ts(0, 15, 0), &["DEV#dev8-2#DEVICE"]).is_none());
    assert!(ds.find_max(ts(0, 15, 0), &["nope"]).is_none());

    let cats = ds.keys_by_category();
    assert!(cats.len() == 1);
    assert!(cats[0].0 == "I/O");
    assert!(cats[0].1.len() == 6);
}
