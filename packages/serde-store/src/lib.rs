//! Serde Integration for pathstore
//!
//! This layer connects `Value` trees to the serde ecosystem:
//! - `from_value` / `to_value`: typed conversion of any serde type
//! - `value_to_json` / `json_to_value`: bridge to `serde_json::Value`
//! - `JsonCodec`: JSON text in and out
//!
//! # Example
//!
//! ```rust
//! use pathstore_serde::{from_value, to_value};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Debug, PartialEq, Serialize, Deserialize)]
//! struct Server {
//!     host: String,
//!     port: u16,
//! }
//!
//! let server = Server { host: "localhost".into(), port: 8080 };
//! let value = to_value(&server).unwrap();
//! assert_eq!(from_value::<Server>(value).unwrap(), server);
//! ```

mod codec;
mod convert;

pub use codec::{Codec, JsonCodec};
pub use convert::{
    from_value, json_to_map, json_to_value, map_to_json, to_value, value_to_json,
};

// Re-export core types for convenience
pub use pathstore_core::{Error, Format, Map, Value};
