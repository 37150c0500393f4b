//! Name resolution shared by the store and flag formatting.

use crate::{tree, KeyPath, Map, Value};

/// Where a name points inside a tree.
#[derive(Debug, PartialEq)]
pub enum Target<'k> {
    /// A top-level entry, by its literal key.
    Top(&'k str),
    /// An entry reached through a parsed path.
    Nested(KeyPath),
}

impl<'k> Target<'k> {
    /// Resolve a name.
    ///
    /// A name without a `.` is a literal top-level key, backslashes and all.
    /// A name with one is parsed as a path, so `app\.toml` reaches the
    /// literal `app.toml` entry. Returns `None` when the path has no
    /// segments or ends in a dangling escape.
    pub fn resolve(name: &'k str) -> Option<Self> {
        if !name.contains('.') {
            return Some(Target::Top(name));
        }
        match KeyPath::parse(name) {
            Ok(path) => Some(Target::Nested(path)),
            Err(err) => {
                log::trace!("ignoring key '{}': {}", name, err);
                None
            }
        }
    }

    pub fn get<'a>(&self, data: &'a Map) -> Option<&'a Value> {
        match self {
            Target::Top(key) => data.get(*key),
            Target::Nested(path) => tree::path_get(data, path),
        }
    }

    /// The unescaped name, segments joined by `.`.
    pub fn name(&self) -> String {
        match self {
            Target::Top(key) => key.to_string(),
            Target::Nested(path) => path.segments().join("."),
        }
    }
}
