use serde_json::json;

use pathstore::{Key, Map, PathStore, Value};
use pathstore_serde::{json_to_map, json_to_value};

fn store(json: serde_json::Value) -> PathStore {
    PathStore::from_json(json).unwrap()
}

fn object(json: serde_json::Value) -> Map {
    match json {
        serde_json::Value::Object(object) => json_to_map(object),
        other => panic!("expected an object, got {}", other),
    }
}

#[test]
fn set_map_is_a_defaults_merge() {
    let mut s = store(json!({
        "name": "app",
        "server": {"port": 8080, "tls": {"enabled": false}}
    }));

    s.set(
        object(json!({
            "name": "ignored",
            "debug": true,
            "server": {"port": 1, "host": "0.0.0.0", "tls": {"cert": "a.pem"}}
        })),
        Value::Null,
    );

    assert_eq!(
        s.to_json(),
        json!({
            "name": "app",
            "debug": true,
            "server": {
                "port": 8080,
                "host": "0.0.0.0",
                "tls": {"enabled": false, "cert": "a.pem"}
            }
        })
    );
}

#[test]
fn put_map_is_an_assign_merge() {
    let mut s = store(json!({"server": {"port": 8080, "host": "localhost"}}));
    s.put(object(json!({"server": {"port": 9090}, "extra": 1})), Value::Null);

    assert_eq!(
        s.to_json(),
        json!({"server": {"port": 9090, "host": "localhost"}, "extra": 1})
    );
}

#[test]
fn top_level_set_never_overwrites() {
    let mut s = PathStore::new();
    s.set("a", 1);
    s.set("a", 2);
    assert_eq!(s.get("a"), Some(Value::from(1)));
}

#[test]
fn put_requires_existing_key() {
    let mut s = PathStore::new();
    s.put("missing", 2);
    assert_eq!(s.get(Key::Whole), Some(Value::map()));

    s.set("a", 1).put("a", 2);
    assert_eq!(s.get("a"), Some(Value::from(2)));
}

#[test]
fn has_agrees_with_get_on_intermediate_segments() {
    let s = store(json!({"a": {"b": {"c": null}}, "x": 5}));

    for key in ["a", "a.b", "a.b.c", "x"] {
        assert!(s.has(key), "{} should be present", key);
    }
    for key in ["a.c", "a.b.c.d", "x.y", "missing.deep"] {
        assert!(!s.has(key), "{} should be absent", key);
        assert_eq!(s.get(key), None);
    }
}

#[test]
fn enable_and_disable_round_trip_through_truthiness() {
    let mut s = PathStore::new();

    s.enable("flag");
    assert!(s.truthy("flag"));

    s.disable("flag");
    assert!(s.falsey("flag"));

    s.set("features.beta", false);
    s.enable("features.beta");
    assert!(s.truthy("features.beta"));
}

#[test]
fn delete_without_key_empties_everything() {
    let mut s = store(json!({"a": 1, "b": {"c": 2}}));
    s.delete(None::<&str>);
    assert_eq!(s.get(None::<&str>), Some(Value::map()));
    assert_eq!(s.size(), 0);
}

#[test]
fn dotted_set_then_get() {
    let mut s = PathStore::new();
    s.set("x.y", 5);
    assert_eq!(s.get("x.y"), Some(Value::from(5)));
    assert_eq!(s.to_json(), json!({"x": {"y": 5}}));
}

#[test]
fn whole_get_is_a_deep_copy() {
    let s = store(json!({"a": "b", "nested": {"k": [1, 2]}}));

    let mut copy = s.get(Key::Whole).unwrap();
    if let Value::Map(map) = &mut copy {
        map.insert("a".to_string(), Value::from("mutated"));
        if let Some(Value::Map(nested)) = map.get_mut("nested") {
            nested.clear();
        }
    }

    assert_eq!(s.to_json(), json!({"a": "b", "nested": {"k": [1, 2]}}));
}

#[test]
fn dynamically_typed_keys_are_ignored() {
    let mut s = store(json!({"a": 1}));
    let before = s.clone();

    for key in [json!(123), json!(true), json!(null), json!([1, "a"])] {
        let key = Key::classify(json_to_value(key));
        assert_eq!(s.get(key.clone()), None);
        assert!(!s.has(key.clone()));
        s.set(key.clone(), 1).put(key.clone(), 2).delete(key);
    }

    assert_eq!(s, before);
}

#[test]
fn batch_delete_from_json_array() {
    let mut s = store(json!({"a": 1, "b": {"c": 2, "d": 3}}));
    s.delete(json_to_value(json!(["a", "b.c"])));
    assert_eq!(s.to_json(), json!({"b": {"d": 3}}));
}

#[test]
fn flags_from_a_configuration() {
    let s = store(json!({
        "dryRun": true,
        "color": false,
        "output": "out.txt",
        "include": ["src", "tests"],
        "server": {"port": 80},
        "unset": null
    }));

    assert_eq!(
        s.flags(),
        vec![
            "--no-color",
            "--dry-run",
            "--include=src,tests",
            "--output=out.txt",
            "--server.port=80",
        ]
    );
    assert_eq!(s.flags_for(&["output", "dryRun"]), vec!["--output=out.txt", "--dry-run"]);
}

#[test]
fn escaped_dots_address_literal_keys() {
    let mut s = PathStore::new();
    s.set(r"app\.toml", "config");

    assert_eq!(s.to_json(), json!({"app.toml": "config"}));
    assert!(s.has(r"app\.toml"));
    assert!(!s.has("app.toml"));
    assert_eq!(s.flags_for(&[r"app\.toml"]), vec!["--app.toml=config"]);
}

#[test]
fn plain_keys_are_stored_verbatim() {
    let mut s = PathStore::new();
    s.set(r"C:\", "drive").set(r"a\\b", 1i64);

    assert_eq!(s.size(), 2);
    assert!(s.has(r"C:\"));
    assert_eq!(s.get(r"C:\"), Some(Value::from("drive")));
    assert_eq!(
        s.keys().map(String::as_str).collect::<Vec<_>>(),
        vec![r"C:\", r"a\\b"]
    );
    assert_eq!(s.to_json(), json!({r"C:\": "drive", r"a\\b": 1}));

    s.put(r"a\\b", 2i64).delete(r"C:\");
    assert_eq!(s.to_json(), json!({r"a\\b": 2}));
}
