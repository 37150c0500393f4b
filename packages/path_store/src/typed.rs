//! Typed access through serde.

use serde::de::DeserializeOwned;
use serde::Serialize;

use pathstore_core::{Error, Format};
use pathstore_serde::{from_value, json_to_map, map_to_json, to_value};

use crate::{Key, PathStore};

impl PathStore {
    /// Read the value at `key` as `T`.
    ///
    /// Returns `Ok(None)` when nothing is stored there, and a decode error
    /// when the stored value does not fit `T`.
    ///
    /// ```rust
    /// use pathstore::PathStore;
    ///
    /// let mut store = PathStore::new();
    /// store.set("server.port", 8080);
    ///
    /// let port: Option<u16> = store.get_as("server.port").unwrap();
    /// assert_eq!(port, Some(8080));
    /// ```
    pub fn get_as<T: DeserializeOwned>(&self, key: impl Into<Key>) -> Result<Option<T>, Error> {
        self.get(key).map(from_value).transpose()
    }

    /// `set` with a serializable value.
    pub fn set_from<T: Serialize + ?Sized>(
        &mut self,
        key: impl Into<Key>,
        data: &T,
    ) -> Result<&mut Self, Error> {
        let value = to_value(data)?;
        Ok(self.set(key, value))
    }

    /// `put` with a serializable value.
    pub fn put_from<T: Serialize + ?Sized>(
        &mut self,
        key: impl Into<Key>,
        data: &T,
    ) -> Result<&mut Self, Error> {
        let value = to_value(data)?;
        Ok(self.put(key, value))
    }

    /// The whole store as a JSON object.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::Value::Object(map_to_json(self.data()))
    }

    /// Build a store from a JSON object. Anything else is a decode error.
    pub fn from_json(json: serde_json::Value) -> Result<Self, Error> {
        match json {
            serde_json::Value::Object(object) => Ok(Self::with_data(json_to_map(object))),
            other => Err(Error::decode(
                Format::JSON,
                format!("expected an object at the root, found {}", json_kind(&other)),
            )),
        }
    }
}

fn json_kind(json: &serde_json::Value) -> &'static str {
    match json {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pathstore_core::Value;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Server {
        host: String,
        port: u16,
    }

    #[test]
    fn get_as_reads_structs() {
        let store = PathStore::from_json(json!({
            "server": {"host": "localhost", "port": 8080}
        }))
        .unwrap();

        let server: Option<Server> = store.get_as("server").unwrap();
        assert_eq!(
            server,
            Some(Server {
                host: "localhost".to_string(),
                port: 8080
            })
        );
    }

    #[test]
    fn get_as_missing_is_none() {
        let store = PathStore::new();
        assert_eq!(store.get_as::<u16>("missing").unwrap(), None);
    }

    #[test]
    fn get_as_wrong_shape_errors() {
        let mut store = PathStore::new();
        store.set("port", "not a number");
        let err = store.get_as::<u16>("port").unwrap_err();
        assert!(matches!(err, Error::Decode { .. }));
    }

    #[test]
    fn set_from_and_put_from() {
        let mut store = PathStore::new();
        let server = Server {
            host: "a".to_string(),
            port: 1,
        };
        store.set_from("server", &server).unwrap();
        assert_eq!(store.get("server.host"), Some(Value::from("a")));

        store.set_from("server", &Server { host: "b".to_string(), port: 2 }).unwrap();
        assert_eq!(store.get("server.host"), Some(Value::from("a")));

        store.put_from("server.port", &9u16).unwrap();
        assert_eq!(store.get("server.port"), Some(Value::from(9)));
    }

    #[test]
    fn json_round_trip() {
        let json = json!({"a": {"b": [1, true, null]}, "c": "d"});
        let store = PathStore::from_json(json.clone()).unwrap();
        assert_eq!(store.to_json(), json);
    }

    #[test]
    fn from_json_rejects_non_objects() {
        for json in [json!(null), json!([1]), json!("s"), json!(3)] {
            let err = PathStore::from_json(json).unwrap_err();
            assert!(matches!(err, Error::Decode { .. }));
        }
    }
}
