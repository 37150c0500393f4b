//! Conversions between Value and serde types.

use base64::Engine;
use serde::de::DeserializeOwned;
use serde::Serialize;

use pathstore_core::{Error, Format, Map, Value};

/// Convert a Value to a Rust type via serde.
pub fn from_value<T: DeserializeOwned>(value: Value) -> Result<T, Error> {
    serde_json::from_value(value_to_json(&value))
        .map_err(|e| Error::decode(Format::SERDE, e.to_string()))
}

/// Convert a Rust type to a Value via serde.
pub fn to_value<T: Serialize + ?Sized>(data: &T) -> Result<Value, Error> {
    let json =
        serde_json::to_value(data).map_err(|e| Error::encode(Format::SERDE, e.to_string()))?;
    Ok(json_to_value(json))
}

/// Convert a Value to `serde_json::Value`.
///
/// Bytes become base64 strings and non-finite floats become null, since JSON
/// has neither.
pub fn value_to_json(value: &Value) -> serde_json::Value {
    match value {
        Value::Null => serde_json::Value::Null,
        Value::Bool(b) => serde_json::Value::Bool(*b),
        Value::Integer(i) => serde_json::Value::Number((*i).into()),
        Value::Float(f) => serde_json::Number::from_f64(*f)
            .map(serde_json::Value::Number)
            .unwrap_or(serde_json::Value::Null),
        Value::String(s) => serde_json::Value::String(s.clone()),
        Value::Bytes(b) => {
            serde_json::Value::String(base64::engine::general_purpose::STANDARD.encode(b))
        }
        Value::Array(arr) => serde_json::Value::Array(arr.iter().map(value_to_json).collect()),
        Value::Map(map) => serde_json::Value::Object(map_to_json(map)),
    }
}

/// Convert a whole store mapping to a JSON object.
pub fn map_to_json(map: &Map) -> serde_json::Map<String, serde_json::Value> {
    map.iter()
        .map(|(k, v)| (k.clone(), value_to_json(v)))
        .collect()
}

/// Convert `serde_json::Value` to a Value.
pub fn json_to_value(json: serde_json::Value) -> Value {
    match json {
        serde_json::Value::Null => Value::Null,
        serde_json::Value::Bool(b) => Value::Bool(b),
        serde_json::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Value::Integer(i)
            } else if n.is_u64() {
                // Beyond i64::MAX; a float would lose digits.
                Value::String(n.to_string())
            } else {
                Value::Float(n.as_f64().unwrap_or(f64::NAN))
            }
        }
        serde_json::Value::String(s) => Value::String(s),
        serde_json::Value::Array(arr) => Value::Array(arr.into_iter().map(json_to_value).collect()),
        serde_json::Value::Object(map) => Value::Map(json_to_map(map)),
    }
}

/// Convert a JSON object to a store mapping.
pub fn json_to_map(map: serde_json::Map<String, serde_json::Value>) -> Map {
    map.into_iter()
        .map(|(k, v)| (k, json_to_value(v)))
        .collect()
}
