//! Path primitives over a `Map` tree.
//!
//! These are the get/set/has/delete building blocks a store composes. None
//! of them fail: a path that cannot be followed reads as missing, and a
//! write that cannot be placed leaves the tree unchanged.

use crate::{KeyPath, Map, Value};

/// Step from `node` into its child named `segment`.
fn child<'a>(node: &'a Value, segment: &str) -> Option<&'a Value> {
    match node {
        Value::Map(map) => map.get(segment),
        Value::Array(arr) => arr.get(segment.parse::<usize>().ok()?),
        _ => None,
    }
}

fn child_mut<'a>(node: &'a mut Value, segment: &str) -> Option<&'a mut Value> {
    match node {
        Value::Map(map) => map.get_mut(segment),
        Value::Array(arr) => arr.get_mut(segment.parse::<usize>().ok()?),
        _ => None,
    }
}

/// Get a reference to the value at `path`.
///
/// Returns `None` if any segment is missing or the path runs into a scalar.
pub fn path_get<'a>(tree: &'a Map, path: &KeyPath) -> Option<&'a Value> {
    let mut segments = path.iter();
    let first = segments.next()?;
    let mut cursor = tree.get(first.as_str())?;
    for segment in segments {
        cursor = child(cursor, segment)?;
    }
    Some(cursor)
}

/// Get a mutable reference to the value at `path`.
pub fn path_get_mut<'a>(tree: &'a mut Map, path: &KeyPath) -> Option<&'a mut Value> {
    let mut segments = path.iter();
    let first = segments.next()?;
    let mut cursor = tree.get_mut(first.as_str())?;
    for segment in segments {
        cursor = child_mut(cursor, segment)?;
    }
    Some(cursor)
}

/// Whether every segment of `path` is present. The final value may be
/// anything, including `Null`.
pub fn path_has(tree: &Map, path: &KeyPath) -> bool {
    path_get(tree, path).is_some()
}

/// Set `value` at `path`, overwriting whatever is there.
///
/// Missing intermediate entries are created as maps, and scalar
/// intermediates are replaced by maps. Arrays are indexed by numeric
/// segments; an index equal to the length appends.
///
/// Returns `false` (leaving the tree untouched) when the path goes through
/// an existing array with a non-numeric or out-of-range segment.
pub fn path_set(tree: &mut Map, path: &KeyPath, value: Value) -> bool {
    let (first, rest) = match path.segments().split_first() {
        Some(split) => split,
        None => return false,
    };
    if rest.is_empty() {
        tree.insert(first.clone(), value);
        return true;
    }

    let written = match tree.get_mut(first.as_str()) {
        Some(node) => set_below(node, rest, value),
        None => {
            let mut node = Value::Null;
            set_below(&mut node, rest, value);
            tree.insert(first.clone(), node);
            true
        }
    };
    if !written {
        log::trace!("path_set: cannot place value at '{}'", path);
    }
    written
}

/// Write `value` at `segments` below `node`.
///
/// Only existing arrays can refuse a segment, and everything above an
/// existing array is itself existing, so a refusal never leaves a partial
/// write behind.
fn set_below(node: &mut Value, segments: &[String], value: Value) -> bool {
    let Some((head, rest)) = segments.split_first() else {
        *node = value;
        return true;
    };

    if let Value::Array(arr) = node {
        let index = match head.parse::<usize>() {
            Ok(index) if index <= arr.len() => index,
            _ => return false,
        };
        if index == arr.len() {
            arr.push(Value::Null);
        }
        return set_below(&mut arr[index], rest, value);
    }

    if !node.is_map() {
        *node = Value::map();
    }
    match node {
        Value::Map(map) => set_below(
            map.entry(head.clone()).or_insert(Value::Null),
            rest,
            value,
        ),
        _ => false,
    }
}

/// Remove the value at `path`, returning it if it existed.
///
/// Only the final segment is removed; parents stay in place even if they
/// become empty.
pub fn path_delete(tree: &mut Map, path: &KeyPath) -> Option<Value> {
    let (parents, last) = path.split_last();
    if parents.is_empty() {
        return tree.remove(last.as_str());
    }

    let parent_path = KeyPath::from_segments(parents.iter().cloned()).ok()?;
    match path_get_mut(tree, &parent_path)? {
        Value::Map(map) => map.remove(last.as_str()),
        Value::Array(arr) => {
            let index = last.parse::<usize>().ok()?;
            if index < arr.len() {
                Some(arr.remove(index))
            } else {
                None
            }
        }
        _ => None,
    }
}
