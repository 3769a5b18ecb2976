/// Read what is known about a host's environment from a json file.
///
/// The file format is an object { ... } with the following named fields and value types, all
/// optional:
///
///   hostname - string, the host the environment describes
///   reboots - array of strings, each a time "YYYY-MM-DD HH:MM:SS" at which the host booted
///   interrupts - object, mapping interrupt line numbers (as strings) to arrays of strings, the
///                names of the devices sharing the line
///
/// Any field name starting with '#' is reserved for arbitrary comments, also within `interrupts`.
/// Any other field name is an error.
///
/// See ../../tests/sarlog/env-testhost.json for an example.
use crate::environment::Environment;

use anyhow::{bail, Context, Result};
use sarutils::{parse_timestamp, Timestamp};
use serde_json::Value;
use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path;

#[derive(Debug, Default, Clone)]
pub struct HostEnvironment {
    pub hostname: Option<String>,
    reboots: Vec<Timestamp>,
    interrupts: HashMap<u32, Vec<String>>,
}

impl Environment for HostEnvironment {
    fn reboots(&self) -> Vec<Timestamp> {
        self.reboots.clone()
    }

    fn interrupt_devices(&self, irq: u32) -> Vec<String> {
        self.interrupts.get(&irq).cloned().unwrap_or_default()
    }
}

/// Returns the environment described in the file, or an error message.
///
/// The files are written by hand or by ad-hoc scripts, so like the other config readers this uses
/// the generic JSON parser followed by explicit decoding of the fields.

pub fn read_from_json(filename: &str) -> Result<HostEnvironment> {
    let file = File::open(path::Path::new(filename))
        .with_context(|| format!("Opening environment file {filename}"))?;
    let reader = BufReader::new(file);
    let v = serde_json::from_reader(reader)
        .with_context(|| format!("Parsing environment file {filename}"))?;
    decode(v).with_context(|| format!("In environment file {filename}"))
}

pub fn decode(v: Value) -> Result<HostEnvironment> {
    let Value::Object(fields) = v else {
        bail!("Expected an object value")
    };
    let mut env: HostEnvironment = Default::default();
    for (name, value) in &fields {
        if name.starts_with('#') {
            continue;
        }
        match name.as_str() {
            "hostname" => {
                if let Value::String(hn) = value {
                    env.hostname = Some(hn.clone());
                } else {
                    bail!("Field 'hostname' must have a string value")
                }
            }
            "reboots" => {
                for s in grab_strings(value, "reboots")? {
                    match parse_timestamp(&s) {
                        Ok(t) => env.reboots.push(t),
                        Err(_) => bail!("Bad reboot time '{s}'"),
                    }
                }
            }
            "interrupts" => {
                let Value::Object(lines) = value else {
                    bail!("Field 'interrupts' must have an object value")
                };
                for (irq, devices) in lines {
                    if irq.starts_with('#') {
                        continue;
                    }
                    let Ok(n) = irq.parse::<u32>() else {
                        bail!("Interrupt line '{irq}' is not a number")
                    };
                    env.interrupts.insert(n, grab_strings(devices, irq)?);
                }
            }
            _ => bail!("Unknown field '{name}'"),
        }
    }
    env.reboots.sort();
    Ok(env)
}

fn grab_strings(value: &Value, name: &str) -> Result<Vec<String>> {
    let Value::Array(xs) = value else {
        bail!("Field '{name}' must have an array value")
    };
    let mut result = vec![];
    for x in xs {
        if let Value::String(s) = x {
            result.push(s.clone());
        } else {
            bail!("Field '{name}' must hold only strings")
        }
    }
    Ok(result)
}

#[test]
fn test_read_env() {
    let env = read_from_json("../../tests/sarlog/env-testhost.json").unwrap();
    assert!(env.hostname == Some("testhost.example.com".to_string()));
    assert!(env.reboots() == vec![sarutils::timestamp_from_ymdhms(2014, 3, 10, 0, 5, 37).unwrap()]);
    assert!(env.interrupt_devices(8) == vec!["rtc0".to_string()]);
    assert!(env.interrupt_devices(0) == vec!["timer".to_string()]);
    assert!(env.interrupt_devices(5).is_empty());
}

#[test]
fn test_decode_errors() {
    let d = |s: &str| decode(serde_json::from_str(s).unwrap());
    assert!(d("{}").is_ok());
    assert!(d(r##"{"#": "just a comment"}"##).is_ok());
    assert!(d("[]").is_err());
    assert!(d(r#"{"hostname": 7}"#).is_err());
    assert!(d(r#"{"reboots": "2014-03-10"}"#).is_err());
    assert!(d(r#"{"reboots": ["yesterday"]}"#).is_err());
    assert!(d(r#"{"interrupts": {"x": ["eth0"]}}"#).is_err());
    assert!(d(r#"{"interrupts": {"3": "eth0"}}"#).is_err());
    assert!(d(r#"{"interrupts": {"3": [3]}}"#).is_err());
    assert!(d(r#"{"cpu_cores": 8}"#).is_err());
    assert!(read_from_json("../../tests/sarlog/no-such-env.json").is_err());

    let env = d(r#"{"reboots": ["2021-07-02 01:00:00", "2021-07-01"]}"#).unwrap();
    assert!(env.reboots()[0] == sarutils::timestamp_from_ymd(2021, 7, 1).unwrap());
}
