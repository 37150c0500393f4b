//! The key argument accepted by every store operation.

use pathstore_core::{Kind, KeyPath, Map, Value};

/// What an operation is addressed at.
///
/// Each operation matches on the variant and ignores the shapes it has no
/// meaning for, so a caller holding dynamically-typed input can hand it over
/// as a `Value` and get a no-op instead of an error.
#[derive(Clone, Debug, PartialEq)]
pub enum Key {
    /// No key: the whole store.
    Whole,
    /// A plain (`name`) or dotted (`a.b.c`) key.
    Name(String),
    /// A mapping to merge in.
    Map(Map),
    /// Several keys at once.
    Many(Vec<String>),
    /// Any other input shape. Always ignored.
    Other(Kind),
}

impl Key {
    /// Sort a dynamically-typed value into a key.
    ///
    /// Strings are names, maps are maps, arrays of strings are batches;
    /// everything else is `Other`.
    pub fn classify(value: Value) -> Key {
        match value {
            Value::String(name) => Key::Name(name),
            Value::Map(map) => Key::Map(map),
            Value::Array(items) => items
                .into_iter()
                .map(|item| match item {
                    Value::String(name) => Some(name),
                    _ => None,
                })
                .collect::<Option<Vec<_>>>()
                .map(Key::Many)
                .unwrap_or(Key::Other(Kind::Array)),
            other => Key::Other(other.kind()),
        }
    }
}

impl From<&str> for Key {
    fn from(name: &str) -> Self {
        Key::Name(name.to_string())
    }
}

impl From<String> for Key {
    fn from(name: String) -> Self {
        Key::Name(name)
    }
}

impl From<&String> for Key {
    fn from(name: &String) -> Self {
        Key::Name(name.clone())
    }
}

impl From<&KeyPath> for Key {
    fn from(path: &KeyPath) -> Self {
        Key::Name(path.to_string())
    }
}

impl From<Map> for Key {
    fn from(map: Map) -> Self {
        Key::Map(map)
    }
}

impl From<Vec<String>> for Key {
    fn from(names: Vec<String>) -> Self {
        Key::Many(names)
    }
}

impl From<Vec<&str>> for Key {
    fn from(names: Vec<&str>) -> Self {
        Key::Many(names.into_iter().map(str::to_string).collect())
    }
}

impl From<&[&str]> for Key {
    fn from(names: &[&str]) -> Self {
        Key::Many(names.iter().map(|name| name.to_string()).collect())
    }
}

impl From<Value> for Key {
    fn from(value: Value) -> Self {
        Key::classify(value)
    }
}

impl<K: Into<Key>> From<Option<K>> for Key {
    fn from(key: Option<K>) -> Self {
        key.map(Into::into).unwrap_or(Key::Whole)
    }
}
