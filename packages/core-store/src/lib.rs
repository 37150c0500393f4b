//! Core pathstore: the value tree and the primitives that operate on it
//!
//! This layer owns everything the store composes:
//! - `Value`: Parsed tree structure with a `Kind` for basic type detection
//! - `KeyPath`: Dotted path (`"a.b.c"`) addressing nested map entries
//! - `Target`: how a store key resolves to a top-level or nested entry
//! - `tree`: path-get / path-set / path-has / path-delete over a `Map`
//! - `merge`: defaults-style and assign-style deep merges
//! - `flags`: command-line flag formatting of stored values
//!
//! # Example
//!
//! ```rust
//! use pathstore_core::{key_path, tree, Map, Value};
//!
//! let mut data = Map::new();
//! tree::path_set(&mut data, &key_path!("server.port"), Value::from(8080));
//! assert_eq!(tree::path_get(&data, &key_path!("server.port")), Some(&Value::from(8080)));
//! ```

mod error;
pub mod flags;
mod format;
pub mod merge;
mod path;
mod target;
pub mod tree;
mod value;

pub use error::Error;
pub use format::Format;
pub use flags::to_flags;
pub use merge::{merge_assign, merge_defaults};
pub use path::{KeyPath, PathError};
pub use target::Target;
pub use value::{Kind, Map, Value};
