//! Key tokens: the smallest unit of a path
//!
//! A key is either a non-negative integer index or a textual name. Segment
//! normalization lives here so the tokenizer, the explicit-sequence
//! conversions, and the resolver all agree on what counts as numeric.

use std::borrow::Cow;
use std::fmt;

use serde::Serialize;

/// A single property/index selector.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum Key {
    /// Non-negative positional index
    Index(usize),
    /// Textual property name
    Name(String),
}

impl Key {
    /// Normalize one raw segment: purely numeric text becomes an index,
    /// everything else a name. `"007"` normalizes to `Index(7)`; a minus
    /// sign or any non-digit keeps the segment textual.
    #[must_use]
    pub fn from_segment(segment: &str) -> Key {
        if !segment.is_empty() && segment.bytes().all(|b| b.is_ascii_digit()) {
            if let Ok(index) = segment.parse::<usize>() {
                return Key::Index(index);
            }
        }
        Key::Name(segment.to_string())
    }

    /// Positional reading of this key. Names made of digits coerce, so an
    /// explicitly constructed `Name("0")` still indexes a sequence.
    #[must_use]
    pub fn as_index(&self) -> Option<usize> {
        match self {
            Key::Index(index) => Some(*index),
            Key::Name(name) => {
                if !name.is_empty() && name.bytes().all(|b| b.is_ascii_digit()) {
                    name.parse().ok()
                } else {
                    None
                }
            }
        }
    }

    /// Textual reading of this key; indices coerce to their decimal form
    /// (the map-lookup coercion rule).
    #[must_use]
    pub fn as_name(&self) -> Cow<'_, str> {
        match self {
            Key::Index(index) => Cow::Owned(index.to_string()),
            Key::Name(name) => Cow::Borrowed(name),
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Index(index) => write!(f, "{index}"),
            Key::Name(name) => f.write_str(name),
        }
    }
}

impl From<usize> for Key {
    fn from(index: usize) -> Self {
        Key::Index(index)
    }
}

impl From<&str> for Key {
    fn from(segment: &str) -> Self {
        Key::from_segment(segment)
    }
}

impl From<String> for Key {
    fn from(segment: String) -> Self {
        Key::from_segment(&segment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_segments_normalize_to_indices() {
        assert_eq!(Key::from_segment("0"), Key::Index(0));
        assert_eq!(Key::from_segment("007"), Key::Index(7));
        assert_eq!(Key::from_segment("name"), Key::Name("name".into()));
        assert_eq!(Key::from_segment("-1"), Key::Name("-1".into()));
        assert_eq!(Key::from_segment("1x"), Key::Name("1x".into()));
        assert_eq!(Key::from_segment(""), Key::Name(String::new()));
    }

    #[test]
    fn digit_names_coerce_to_indices() {
        assert_eq!(Key::Name("3".into()).as_index(), Some(3));
        assert_eq!(Key::Name("three".into()).as_index(), None);
        assert_eq!(Key::Index(3).as_index(), Some(3));
    }

    #[test]
    fn indices_coerce_to_names() {
        assert_eq!(Key::Index(12).as_name(), "12");
        assert_eq!(Key::Name("a".into()).as_name(), "a");
    }
}
