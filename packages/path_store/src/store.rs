//! The path-addressed store.

use std::collections::btree_map;

use pathstore_core::{merge_assign, merge_defaults, to_flags, tree, Map, Target, Value};

use crate::key::Key;

/// A mutable nested mapping addressed by plain keys or dotted paths.
///
/// The store always holds a mapping at its root; it starts empty unless
/// seeded. Mutating calls return `&mut Self` so they chain, and never fail:
/// input they cannot act on is ignored.
///
/// A name without a `.` is a plain top-level key and is used verbatim,
/// backslashes included. A name with a `.` is a dotted path; inside it
/// `\.` is a literal dot and `\\` a literal backslash.
///
/// # Example
///
/// ```rust
/// use pathstore::{PathStore, Value};
///
/// let mut store = PathStore::new();
/// store.set("a.b.c", 1);
///
/// assert!(store.has("a.b"));
/// assert_eq!(store.get("a.b.c"), Some(Value::from(1)));
///
/// store.delete("a.b.c");
/// assert!(!store.has("a.b.c"));
/// assert!(store.has("a.b"));
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PathStore {
    data: Map,
}

impl PathStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self { data: Map::new() }
    }

    /// Create a store seeded with `data`.
    pub fn with_data(data: Map) -> Self {
        Self { data }
    }

    /// Borrow the whole mapping.
    pub fn data(&self) -> &Map {
        &self.data
    }

    pub fn into_inner(self) -> Map {
        self.data
    }

    /// A deep copy of the whole mapping. Changes to it never reach the store.
    pub fn snapshot(&self) -> Map {
        self.data.clone()
    }

    /// Read a value.
    ///
    /// - `Key::Whole`: a deep copy of the whole store, as a map
    /// - a plain name: the top-level entry
    /// - a dotted name: the nested entry, or `None` if any segment is missing
    ///
    /// Other key shapes read as `None`.
    pub fn get(&self, key: impl Into<Key>) -> Option<Value> {
        match key.into() {
            Key::Whole => Some(Value::Map(self.snapshot())),
            Key::Name(name) => self.lookup(&name).cloned(),
            other => {
                log::trace!("get: ignoring key {:?}", other);
                None
            }
        }
    }

    /// Borrow the value at a plain or dotted name without copying it.
    pub fn get_ref(&self, name: &str) -> Option<&Value> {
        self.lookup(name)
    }

    fn lookup(&self, name: &str) -> Option<&Value> {
        Target::resolve(name)?.get(&self.data)
    }

    /// Write without overwriting.
    ///
    /// - `Key::Map`: merged in defaults-style; existing entries, at any
    ///   depth, are kept. `value` is ignored.
    /// - a plain name: written only if the key is absent.
    /// - a dotted name: written unconditionally, creating intermediate maps.
    ///
    /// The dotted case overwrites even though the top-level case does not.
    /// That asymmetry is long-standing behaviour callers rely on, so it is
    /// kept; use `has` first for create-only nested writes.
    pub fn set(&mut self, key: impl Into<Key>, value: impl Into<Value>) -> &mut Self {
        match key.into() {
            Key::Map(defaults) => {
                self.extend(defaults);
            }
            Key::Name(name) => match Target::resolve(&name) {
                Some(Target::Top(key)) => {
                    if self.data.contains_key(key) {
                        log::trace!("set: '{}' already present, keeping it", key);
                    } else {
                        self.data.insert(key.to_string(), value.into());
                    }
                }
                Some(Target::Nested(path)) => {
                    tree::path_set(&mut self.data, &path, value.into());
                }
                None => {}
            },
            other => log::trace!("set: ignoring key {:?}", other),
        }
        self
    }

    /// Merge `defaults` in without overwriting anything already stored.
    pub fn extend(&mut self, defaults: Map) -> &mut Self {
        log::debug!("merging {} default entries", defaults.len());
        merge_defaults(&mut self.data, &defaults);
        self
    }

    /// Whether something is stored at `key`.
    ///
    /// - `Key::Whole`: whether the store has any entry at all
    /// - a plain name: whether the top-level key exists, whatever its value
    ///   (`Null`, `false`, `0` and `""` all count)
    /// - a dotted name: whether every segment of the path exists
    ///
    /// Other key shapes are never present.
    pub fn has(&self, key: impl Into<Key>) -> bool {
        match key.into() {
            Key::Whole => !self.data.is_empty(),
            Key::Name(name) => match Target::resolve(&name) {
                Some(Target::Top(key)) => self.data.contains_key(key),
                Some(Target::Nested(path)) => tree::path_has(&self.data, &path),
                None => false,
            },
            _ => false,
        }
    }

    /// Write only over what already exists.
    ///
    /// - `Key::Map`: merged in assign-style; incoming entries win at every
    ///   depth. `value` is ignored.
    /// - a plain name: written only if the key is present.
    /// - a dotted name: written only if the full path is present.
    pub fn put(&mut self, key: impl Into<Key>, value: impl Into<Value>) -> &mut Self {
        match key.into() {
            Key::Map(incoming) => {
                self.assign(incoming);
            }
            Key::Name(name) => match Target::resolve(&name) {
                Some(Target::Top(key)) => match self.data.get_mut(key) {
                    Some(slot) => *slot = value.into(),
                    None => log::trace!("put: '{}' is absent, nothing to update", key),
                },
                Some(Target::Nested(path)) => match tree::path_get_mut(&mut self.data, &path) {
                    Some(slot) => *slot = value.into(),
                    None => log::trace!("put: '{}' is absent, nothing to update", path),
                },
                None => {}
            },
            other => log::trace!("put: ignoring key {:?}", other),
        }
        self
    }

    /// Merge `incoming` in, overwriting what is already stored.
    pub fn assign(&mut self, incoming: Map) -> &mut Self {
        log::debug!("assigning {} entries", incoming.len());
        merge_assign(&mut self.data, &incoming);
        self
    }

    /// Remove entries.
    ///
    /// - `Key::Whole`: empties the store
    /// - a name: removes that entry if present; parents of a dotted name
    ///   stay in place
    /// - `Key::Many`: removes each name in turn
    pub fn delete(&mut self, key: impl Into<Key>) -> &mut Self {
        match key.into() {
            Key::Whole => self.clear(),
            Key::Name(name) => self.remove(&name),
            Key::Many(names) => {
                for name in &names {
                    self.remove(name);
                }
                self
            }
            other => {
                log::trace!("delete: ignoring key {:?}", other);
                self
            }
        }
    }

    /// Empty the store.
    pub fn clear(&mut self) -> &mut Self {
        log::debug!("clearing {} entries", self.data.len());
        self.data.clear();
        self
    }

    fn remove(&mut self, name: &str) -> &mut Self {
        let removed = match Target::resolve(name) {
            Some(Target::Top(key)) => self.data.remove(key),
            Some(Target::Nested(path)) => tree::path_delete(&mut self.data, &path),
            None => None,
        };
        if removed.is_none() {
            log::trace!("delete: '{}' is absent", name);
        }
        self
    }

    /// Store `true` at `key`, updating an existing entry or creating it.
    pub fn enable(&mut self, key: impl Into<Key>) -> &mut Self {
        self.toggle(key.into(), true)
    }

    /// Store `false` at `key`, updating an existing entry or creating it.
    pub fn disable(&mut self, key: impl Into<Key>) -> &mut Self {
        self.toggle(key.into(), false)
    }

    fn toggle(&mut self, key: Key, on: bool) -> &mut Self {
        if self.has(key.clone()) {
            self.put(key, on)
        } else {
            self.set(key, on)
        }
    }

    /// Boolean coercion of the value at `key`; missing values are falsey.
    pub fn truthy(&self, key: impl Into<Key>) -> bool {
        self.get(key).is_some_and(|value| value.is_truthy())
    }

    pub fn falsey(&self, key: impl Into<Key>) -> bool {
        !self.truthy(key)
    }

    /// Number of top-level entries.
    pub fn size(&self) -> usize {
        self.data.len()
    }

    pub fn len(&self) -> usize {
        self.size()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Top-level keys in order.
    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.data.keys()
    }

    /// Top-level entries in key order.
    pub fn iter(&self) -> btree_map::Iter<'_, String, Value> {
        self.data.iter()
    }

    /// Command-line flags for every top-level entry.
    pub fn flags(&self) -> Vec<String> {
        let keys: Vec<&String> = self.data.keys().collect();
        to_flags(&self.data, &keys)
    }

    /// Command-line flags for `keys`, in the order given. Keys may be dotted.
    pub fn flags_for<K: AsRef<str>>(&self, keys: &[K]) -> Vec<String> {
        to_flags(&self.data, keys)
    }
}

impl From<Map> for PathStore {
    fn from(data: Map) -> Self {
        Self::with_data(data)
    }
}

/// Seeds from a map; any other value gives an empty store.
impl From<Value> for PathStore {
    fn from(value: Value) -> Self {
        match value {
            Value::Map(data) => Self::with_data(data),
            other => {
                log::trace!("ignoring non-map seed of kind {}", other.kind());
                Self::new()
            }
        }
    }
}

impl<'a> IntoIterator for &'a PathStore {
    type Item = (&'a String, &'a Value);
    type IntoIter = btree_map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
