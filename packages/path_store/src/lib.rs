//! # pathstore
//!
//! An in-memory store over a nested mapping, addressed by plain keys or
//! dotted paths (`"server.http.port"`).
//!
//! Writes come in two flavours:
//! - `set`: create-only at the top level, defaults-style when merging a map
//! - `put`: update-only, assign-style when merging a map
//!
//! Every operation is fail-soft: a key of the wrong shape, or a path that
//! cannot be followed, is a no-op rather than an error.
//!
//! ## Usage
//!
//! ```rust
//! use pathstore::PathStore;
//!
//! let mut store = PathStore::new();
//! store.set("name", "app").set("server.port", 8080);
//!
//! // Top-level set never overwrites
//! store.set("name", "other");
//! assert_eq!(store.get("name"), Some("app".into()));
//!
//! // put only updates what exists
//! store.put("server.port", 9090).put("missing", 1);
//! assert_eq!(store.get("server.port"), Some(9090.into()));
//! assert!(!store.has("missing"));
//!
//! store.enable("verbose");
//! assert_eq!(store.flags(), vec!["--name=app", "--server.port=9090", "--verbose"]);
//! ```

mod key;
mod store;
mod typed;

pub use key::Key;
pub use store::PathStore;

// Re-export core types for convenience
pub use pathstore_core::{Error, Kind, KeyPath, Map, PathError, Value};
