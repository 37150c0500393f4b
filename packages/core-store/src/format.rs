//! Format tags carried by codec errors.

use std::borrow::Cow;
use std::fmt;

/// Names the representation a conversion was reading or writing.
///
/// Uses MIME-type-like strings for familiarity.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Format(pub Cow<'static, str>);

impl Format {
    /// JSON text or `serde_json::Value` trees (`application/json`)
    pub const JSON: Format = Format(Cow::Borrowed("application/json"));

    /// A native Rust type going through serde.
    pub const SERDE: Format = Format(Cow::Borrowed("application/x-rust-serde"));

    /// Get the format string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
