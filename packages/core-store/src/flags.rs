//! Command-line flag formatting for stored values.
//!
//! | value | flag |
//! |---|---|
//! | `true` | `--name` |
//! | `false` | `--no-name` |
//! | string / number | `--name=value` |
//! | array | `--name=a,b,c` |
//! | map | one flag per leaf, `--name.child=value` |
//! | bytes | `--name=<base64>` |
//! | null / missing / non-finite float | nothing |
//!
//! Names are dashed: `fooBar` and `foo_bar` both become `foo-bar`.

use std::fmt::Write as _;

use lazy_static::lazy_static;
use regex::Regex;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use crate::{Map, Target, Value};

/// Build flags for `keys` from the values in `data`.
///
/// Keys resolve the way the store resolves them; a key that finds nothing
/// produces no flag.
pub fn to_flags<K: AsRef<str>>(data: &Map, keys: &[K]) -> Vec<String> {
    let mut flags = Vec::new();
    for key in keys {
        let key = key.as_ref();
        let value = Target::resolve(key)
            .and_then(|target| Some((target.name(), target.get(data)?)));
        match value {
            Some((name, value)) => push_flags(&mut flags, &dashify(&name), value),
            None => log::trace!("to_flags: no value for '{}'", key),
        }
    }
    flags
}

/// Turn a key into a flag name: camelCase humps and underscores become dashes.
pub fn dashify(key: &str) -> String {
    lazy_static! {
        static ref HUMP: Regex = Regex::new(r"([a-z0-9])([A-Z])").unwrap();
    }
    HUMP.replace_all(key, "$1-$2")
        .replace('_', "-")
        .to_lowercase()
}

fn push_flags(flags: &mut Vec<String>, name: &str, value: &Value) {
    match value {
        Value::Null => {}
        Value::Float(f) if !f.is_finite() => {
            log::trace!("to_flags: skipping '{}' = {}", name, f);
        }
        Value::Bool(true) => flags.push(format!("--{}", name)),
        Value::Bool(false) => flags.push(format!("--no-{}", name)),
        Value::Array(items) => {
            let joined = items.iter().map(render).collect::<Vec<_>>().join(",");
            flags.push(format!("--{}={}", name, joined));
        }
        Value::Map(map) => {
            for (key, child) in map {
                push_flags(flags, &format!("{}.{}", name, dashify(key)), child);
            }
        }
        scalar => flags.push(format!("--{}={}", name, render(scalar))),
    }
}

/// Render a value as flag text. Containers nested inside arrays are written
/// in a compact JSON-like form.
fn render(value: &Value) -> String {
    let mut out = String::new();
    render_into(&mut out, value, false);
    out
}

fn render_into(out: &mut String, value: &Value, quoted: bool) {
    match value {
        Value::Null if quoted => out.push_str("null"),
        Value::Null => {}
        Value::Float(f) if !f.is_finite() => render_into(out, &Value::Null, quoted),
        Value::Bool(b) => {
            let _ = write!(out, "{}", b);
        }
        Value::Integer(i) => {
            let _ = write!(out, "{}", i);
        }
        Value::Float(f) => {
            let _ = write!(out, "{}", f);
        }
        Value::String(s) if quoted => {
            let _ = write!(out, "{:?}", s);
        }
        Value::String(s) => out.push_str(s),
        Value::Bytes(bytes) if quoted => {
            let _ = write!(out, "{:?}", STANDARD.encode(bytes));
        }
        Value::Bytes(bytes) => out.push_str(&STANDARD.encode(bytes)),
        Value::Array(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                render_into(out, item, true);
            }
            out.push(']');
        }
        Value::Map(map) => {
            out.push('{');
            for (i, (key, item)) in map.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                let _ = write!(out, "{:?}:", key);
                render_into(out, item, true);
            }
            out.push('}');
        }
    }
}
