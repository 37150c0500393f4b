//! Error types for the fallible edges of pathstore.
//!
//! Store operations themselves are fail-soft and never produce these; they
//! surface from conversions between `Value` and other representations.

use crate::format::Format;

/// Errors from conversion.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Failed to turn a foreign representation into a `Value`.
    #[error("decode error ({format}): {message}")]
    Decode { format: Format, message: String },

    /// Failed to turn a `Value` into a foreign representation.
    #[error("encode error ({format}): {message}")]
    Encode { format: Format, message: String },
}

impl Error {
    pub fn decode(format: Format, message: impl Into<String>) -> Self {
        Error::Decode {
            format,
            message: message.into(),
        }
    }

    pub fn encode(format: Format, message: impl Into<String>) -> Self {
        Error::Encode {
            format,
            message: message.into(),
        }
    }
}
