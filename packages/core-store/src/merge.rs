//! Deep merges between maps.
//!
//! `merge_defaults` fills gaps without touching existing entries;
//! `merge_assign` lets the source win. Both recurse where both sides hold a
//! map at the same key.

use crate::{Map, Value};

/// Merge `source` into `target`, keeping every entry `target` already has.
pub fn merge_defaults(target: &mut Map, source: &Map) {
    for (key, incoming) in source {
        match target.get_mut(key) {
            None => {
                target.insert(key.clone(), incoming.clone());
            }
            Some(Value::Map(existing)) => {
                if let Value::Map(incoming) = incoming {
                    merge_defaults(existing, incoming);
                }
            }
            Some(_) => {}
        }
    }
}

/// Merge `source` into `target`, overwriting entries `target` already has.
pub fn merge_assign(target: &mut Map, source: &Map) {
    for (key, incoming) in source {
        if let (Some(Value::Map(existing)), Value::Map(incoming)) =
            (target.get_mut(key), incoming)
        {
            merge_assign(existing, incoming);
            continue;
        }
        target.insert(key.clone(), incoming.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use collection_literals::btree;

    fn base() -> Map {
        btree! {
            "a".to_string() => Value::from("b"),
            "nested".to_string() => Value::Map(btree! {
                "keep".to_string() => Value::from(1),
                "flag".to_string() => Value::from(false),
            }),
            "scalar".to_string() => Value::from(3),
        }
    }

    fn incoming() -> Map {
        btree! {
            "a".to_string() => Value::from("changed"),
            "fresh".to_string() => Value::from(true),
            "nested".to_string() => Value::Map(btree! {
                "keep".to_string() => Value::from(2),
                "added".to_string() => Value::from("x"),
            }),
            "scalar".to_string() => Value::Map(btree! {
                "inner".to_string() => Value::from(1),
            }),
        }
    }

    #[test]
    fn defaults_keep_existing_values() {
        let mut target = base();
        merge_defaults(&mut target, &incoming());

        assert_eq!(target["a"], Value::from("b"));
        assert_eq!(target["fresh"], Value::from(true));
        assert_eq!(target["scalar"], Value::from(3));

        let nested = target["nested"].as_map().unwrap();
        assert_eq!(nested["keep"], Value::from(1));
        assert_eq!(nested["flag"], Value::from(false));
        assert_eq!(nested["added"], Value::from("x"));
    }

    #[test]
    fn defaults_do_not_replace_a_map_with_a_scalar() {
        let mut target = base();
        merge_defaults(
            &mut target,
            &btree! { "nested".to_string() => Value::from("flat") },
        );
        assert!(target["nested"].is_map());
    }

    #[test]
    fn assign_overwrites_existing_values() {
        let mut target = base();
        merge_assign(&mut target, &incoming());

        assert_eq!(target["a"], Value::from("changed"));
        assert_eq!(target["fresh"], Value::from(true));
        assert_eq!(
            target["scalar"],
            Value::Map(btree! { "inner".to_string() => Value::from(1) })
        );

        let nested = target["nested"].as_map().unwrap();
        assert_eq!(nested["keep"], Value::from(2));
        assert_eq!(nested["flag"], Value::from(false));
        assert_eq!(nested["added"], Value::from("x"));
    }

    #[test]
    fn assign_replaces_map_with_scalar() {
        let mut target = base();
        merge_assign(
            &mut target,
            &btree! { "nested".to_string() => Value::Null },
        );
        assert_eq!(target["nested"], Value::Null);
    }

    #[test]
    fn merging_into_empty_copies_source() {
        let mut defaults_target = Map::new();
        merge_defaults(&mut defaults_target, &incoming());
        assert_eq!(defaults_target, incoming());

        let mut assign_target = Map::new();
        merge_assign(&mut assign_target, &incoming());
        assert_eq!(assign_target, incoming());
    }
}
