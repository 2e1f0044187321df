//! Paths into nested values
//!
//! A `Path` is an immutable, ordered sequence of [`Key`] tokens. Paths are
//! created per call and never cached; they own no reference to the value
//! they will traverse.

mod error;
mod key;
mod resolve;
mod tokenizer;

use std::fmt;

pub use error::{PathError, PathErrorKind, PathResult};
pub use key::Key;
pub use resolve::{get, get_or, has};

/// Ordered sequence of key tokens describing a route into nested data.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Path(Vec<Key>);

impl Path {
    /// The empty path. Resolves to the root itself.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Permissive tokenization of dotted/bracketed notation
    /// (`a.b[0].c`, `a['k.k']`). Total: malformed input degrades to a
    /// best-effort split, empty input yields the empty path.
    #[must_use]
    pub fn parse(input: &str) -> Path {
        Path(tokenizer::tokenize(input))
    }

    /// Strict tokenization over the same grammar.
    ///
    /// # Errors
    ///
    /// Returns a [`PathError`] for an unterminated bracket or quote, or an
    /// empty `[]` selector.
    pub fn parse_strict(input: &str) -> PathResult<Path> {
        tokenizer::tokenize_strict(input).map(Path)
    }

    /// The tokens in order.
    #[must_use]
    pub fn keys(&self) -> &[Key] {
        &self.0
    }

    /// Number of tokens.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True for the empty path.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Append a token, returning the extended path.
    #[must_use]
    pub fn join(mut self, key: impl Into<Key>) -> Path {
        self.0.push(key.into());
        self
    }

    /// Iterate the tokens in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Key> {
        self.0.iter()
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (position, key) in self.0.iter().enumerate() {
            match key {
                Key::Index(index) => write!(f, "[{index}]")?,
                Key::Name(name) => {
                    if position > 0 {
                        f.write_str(".")?;
                    }
                    f.write_str(name)?;
                }
            }
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Key;
    type IntoIter = std::slice::Iter<'a, Key>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl From<Vec<Key>> for Path {
    fn from(keys: Vec<Key>) -> Self {
        Path(keys)
    }
}

impl From<Key> for Path {
    fn from(key: Key) -> Self {
        Path(vec![key])
    }
}

/// Conversion into a normalized [`Path`].
///
/// Implemented for raw strings (tokenized), explicit key sequences (each
/// element normalized exactly as a single segment would be), single keys,
/// and paths themselves (identity, making tokenization idempotent).
pub trait IntoPath {
    /// Produce the normalized path.
    fn into_path(self) -> Path;
}

impl IntoPath for Path {
    fn into_path(self) -> Path {
        self
    }
}

impl IntoPath for &Path {
    fn into_path(self) -> Path {
        self.clone()
    }
}

impl IntoPath for &str {
    fn into_path(self) -> Path {
        Path::parse(self)
    }
}

impl IntoPath for String {
    fn into_path(self) -> Path {
        Path::parse(&self)
    }
}

impl IntoPath for Key {
    fn into_path(self) -> Path {
        Path(vec![self])
    }
}

impl IntoPath for usize {
    fn into_path(self) -> Path {
        Path(vec![Key::Index(self)])
    }
}

impl IntoPath for Vec<Key> {
    fn into_path(self) -> Path {
        Path(self)
    }
}

impl IntoPath for &[Key] {
    fn into_path(self) -> Path {
        Path(self.to_vec())
    }
}

impl IntoPath for &[&str] {
    fn into_path(self) -> Path {
        Path(self.iter().map(|segment| Key::from_segment(segment)).collect())
    }
}

impl IntoPath for Vec<&str> {
    fn into_path(self) -> Path {
        self.as_slice().into_path()
    }
}

impl<const N: usize> IntoPath for [&str; N] {
    fn into_path(self) -> Path {
        self.as_slice().into_path()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_and_explicit_forms_normalize_identically() {
        assert_eq!("a[0].b".into_path(), ["a", "0", "b"].into_path());
        assert_eq!("a.b.c".into_path(), vec!["a", "b", "c"].into_path());
    }

    #[test]
    fn into_path_is_idempotent_on_paths() {
        let path = Path::parse("a[1].b");
        assert_eq!(path.clone().into_path(), path);
        assert_eq!((&path).into_path(), path);
    }

    #[test]
    fn display_round_trips_through_parse() {
        for input in ["a[0].b", "x.y.z", "[3]"] {
            let path = Path::parse(input);
            assert_eq!(Path::parse(&path.to_string()), path);
        }
    }

    #[test]
    fn join_extends_in_order() {
        let path = Path::new().join("a").join(0usize).join("b");
        assert_eq!(path, Path::parse("a[0].b"));
        assert_eq!(path.len(), 3);
    }
}
