//! Text codecs for Value trees.

use pathstore_core::{Error, Format, Value};

use crate::convert::{json_to_value, value_to_json};

/// Turns text into `Value`s and back.
pub trait Codec {
    /// The format this codec reads and writes.
    fn format(&self) -> Format;

    fn decode(&self, text: &str) -> Result<Value, Error>;

    fn encode(&self, value: &Value) -> Result<String, Error>;
}

/// A codec that handles JSON text.
///
/// # Example
///
/// ```rust
/// use pathstore_serde::{Codec, JsonCodec, Value};
///
/// let codec = JsonCodec::compact();
/// let value = codec.decode(r#"{"a": [1, true]}"#).unwrap();
/// assert_eq!(codec.encode(&value).unwrap(), r#"{"a":[1,true]}"#);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonCodec {
    pretty: bool,
}

impl JsonCodec {
    /// Single-line output.
    pub fn compact() -> Self {
        Self { pretty: false }
    }

    /// Indented, multi-line output.
    pub fn pretty() -> Self {
        Self { pretty: true }
    }
}

impl Codec for JsonCodec {
    fn format(&self) -> Format {
        Format::JSON
    }

    fn decode(&self, text: &str) -> Result<Value, Error> {
        let json: serde_json::Value =
            serde_json::from_str(text).map_err(|e| Error::decode(Format::JSON, e.to_string()))?;
        Ok(json_to_value(json))
    }

    fn encode(&self, value: &Value) -> Result<String, Error> {
        let json = value_to_json(value);
        let text = if self.pretty {
            serde_json::to_string_pretty(&json)
        } else {
            serde_json::to_string(&json)
        };
        text.map_err(|e| Error::encode(Format::JSON, e.to_string()))
    }
}
