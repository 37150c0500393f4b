//! Dotted key paths.

use std::fmt;

/// Errors related to key path parsing.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    /// The key contained no segments at all (`""`, `"."`, `".."`).
    #[error("key path has no segments")]
    Empty,

    /// A segment could not be parsed.
    #[error("invalid key path segment '{segment}' at position {position}: {message}")]
    InvalidSegment {
        segment: String,
        position: usize,
        message: String,
    },
}

/// A parsed dotted key such as `server.http.port`.
///
/// Segments address successive map lookups (or array indices when the
/// segment is numeric and the node is an array).
///
/// # Path Syntax
///
/// - Segments are separated by `.`
/// - `\.` is a literal dot inside a segment, `\\` a literal backslash
/// - Empty segments are ignored (normalizes `a..b` and a trailing `.`)
///
/// A parsed path always has at least one segment.
#[derive(Clone, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct KeyPath {
    segments: Vec<String>,
}

impl KeyPath {
    /// Parse a dotted key.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pathstore_core::KeyPath;
    ///
    /// let path = KeyPath::parse("users.123.name").unwrap();
    /// assert_eq!(path.len(), 3);
    ///
    /// // Doubled and trailing dots are normalized
    /// assert_eq!(KeyPath::parse("a..b.").unwrap(), KeyPath::parse("a.b").unwrap());
    ///
    /// // Escaped dots stay inside the segment
    /// assert_eq!(KeyPath::parse(r"files.app\.toml").unwrap().len(), 2);
    /// ```
    pub fn parse(s: &str) -> Result<Self, PathError> {
        let mut segments = Vec::new();
        let mut current = String::new();
        let mut chars = s.chars();

        while let Some(c) = chars.next() {
            match c {
                '\\' => match chars.next() {
                    Some(escaped @ ('.' | '\\')) => current.push(escaped),
                    Some(other) => {
                        current.push('\\');
                        current.push(other);
                    }
                    None => {
                        return Err(PathError::InvalidSegment {
                            segment: current,
                            position: segments.len(),
                            message: "dangling escape at end of key".to_string(),
                        });
                    }
                },
                '.' => {
                    if !current.is_empty() {
                        segments.push(std::mem::take(&mut current));
                    }
                }
                _ => current.push(c),
            }
        }
        if !current.is_empty() {
            segments.push(current);
        }

        if segments.is_empty() {
            return Err(PathError::Empty);
        }
        Ok(KeyPath { segments })
    }

    /// Build a path from raw segments. Segments are taken literally, so a
    /// segment may contain dots.
    pub fn from_segments<I, S>(segments: I) -> Result<Self, PathError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let segments: Vec<String> = segments.into_iter().map(Into::into).collect();
        if segments.is_empty() {
            return Err(PathError::Empty);
        }
        if let Some(position) = segments.iter().position(String::is_empty) {
            return Err(PathError::InvalidSegment {
                segment: String::new(),
                position,
                message: "empty segment".to_string(),
            });
        }
        Ok(KeyPath { segments })
    }

    /// Get the number of segments.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Always false for a parsed path; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Iterate over segments.
    pub fn iter(&self) -> impl Iterator<Item = &String> {
        self.segments.iter()
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// The parent segments and the final segment.
    pub fn split_last(&self) -> (&[String], &String) {
        let (last, parent) = self
            .segments
            .split_last()
            .expect("KeyPath always has at least one segment");
        (parent, last)
    }

}

impl fmt::Display for KeyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            f.write_str(&segment.replace('\\', "\\\\").replace('.', "\\."))?;
        }
        Ok(())
    }
}

impl std::ops::Index<usize> for KeyPath {
    type Output = String;

    fn index(&self, i: usize) -> &Self::Output {
        &self.segments[i]
    }
}

impl std::str::FromStr for KeyPath {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        KeyPath::parse(s)
    }
}

/// Macro for creating key paths from literals.
///
/// # Example
///
/// ```rust
/// use pathstore_core::key_path;
///
/// let p = key_path!("users.123.name");
/// assert_eq!(p.len(), 3);
/// ```
#[macro_export]
macro_rules! key_path {
    ($s:expr) => {
        $crate::KeyPath::parse($s).expect("invalid key path literal")
    };
}
