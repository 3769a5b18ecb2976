/// "Natural" ordering of strings, so that `cpu2` sorts before `cpu10` and `dev8-0` before
/// `dev8-16`.  Runs of ASCII digits compare by numeric value, everything else compares
/// case-insensitively, and exact ties are broken by plain byte order so that the ordering is total.
use std::cmp::Ordering;

pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let mut xs = Chunks::new(a);
    let mut ys = Chunks::new(b);
    loop {
        match (xs.next(), ys.next()) {
            (None, None) => return a.cmp(b),
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) => {
                let c = compare_chunks(x, y);
                if c != Ordering::Equal {
                    return c;
                }
            }
        }
    }
}

pub fn natural_sort<S: AsRef<str>>(xs: &mut [S]) {
    xs.sort_by(|a, b| natural_cmp(a.as_ref(), b.as_ref()));
}

fn compare_chunks(x: &str, y: &str) -> Ordering {
    let xd = x.as_bytes()[0].is_ascii_digit();
    let yd = y.as_bytes()[0].is_ascii_digit();
    match (xd, yd) {
        (true, true) => {
            // Compare magnitudes without parsing, the runs can be arbitrarily long.
            let xt = x.trim_start_matches('0');
            let yt = y.trim_start_matches('0');
            xt.len().cmp(&yt.len()).then_with(|| xt.cmp(yt))
        }
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => {
            let xl = x.chars().flat_map(char::to_lowercase);
            let yl = y.chars().flat_map(char::to_lowercase);
            xl.cmp(yl)
        }
    }
}

// Splits a string into maximal runs of digits and non-digits.  Every chunk is nonempty.

struct Chunks<'a> {
    s: &'a str,
}

impl<'a> Chunks<'a> {
    fn new(s: &'a str) -> Chunks<'a> {
        Chunks { s }
    }
}

impl<'a> Iterator for Chunks<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let first = *self.s.as_bytes().first()?;
        let digits = first.is_ascii_digit();
        let end = self
            .s
            .bytes()
            .position(|b| b.is_ascii_digit() != digits)
            .unwrap_or(self.s.len());
        // Digits are ASCII so `end` is always on a char boundary.
        let (chunk, rest) = self.s.split_at(end);
        self.s = rest;
        Some(chunk)
    }
}

#[test]
fn test_natural_cmp() {
    assert!(natural_cmp("cpu2", "cpu10") == Ordering::Less);
    assert!(natural_cmp("cpu10", "cpu2") == Ordering::Greater);
    assert!(natural_cmp("dev8-0", "dev8-16") == Ordering::Less);
    assert!(natural_cmp("dev8-16", "dev253-0") == Ordering::Less);
    assert!(natural_cmp("eth0", "ETH1") == Ordering::Less);
    assert!(natural_cmp("x007", "x7") != Ordering::Equal);
    assert!(natural_cmp("same", "same") == Ordering::Equal);
    assert!(natural_cmp("a", "ab") == Ordering::Less);
    assert!(natural_cmp("", "a") == Ordering::Less);
    assert!(natural_cmp("9", "a") == Ordering::Less);
}

#[test]
fn test_natural_sort() {
    let mut xs = vec!["CPU#10#%usr", "CPU#2#%usr", "CPU#all#%usr", "CPU#1#%usr", "CPU#0#%usr"];
    natural_sort(&mut xs);
    assert!(xs == vec!["CPU#0#%usr", "CPU#1#%usr", "CPU#2#%usr", "CPU#10#%usr", "CPU#all#%usr"]);

    let mut ys = vec!["i010/s".to_string(), "i002/s".to_string(), "i100/s".to_string()];
    natural_sort(&mut ys);
    assert!(ys == vec!["i002/s", "i010/s", "i100/s"]);
}
