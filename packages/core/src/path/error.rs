//! Path syntax errors
//!
//! Only the strict tokenizer produces these. The permissive tokenizer and
//! everything downstream of it degrade to documented defaults instead of
//! failing.

/// Path syntax error categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathErrorKind {
    /// `[` with no matching `]`
    UnterminatedBracket,
    /// Opening quote inside a bracket with no closing quote
    UnterminatedString,
    /// Bracket with an empty body
    EmptySelector,
}

/// Syntax error reported by [`Path::parse_strict`](crate::path::Path::parse_strict).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct PathError {
    /// Error category
    pub kind: PathErrorKind,
    /// Human-readable description, position included
    pub message: String,
    /// Offset into the raw path where the problem starts
    pub position: Option<usize>,
}

/// Result type for strict path parsing.
pub type PathResult<T> = Result<T, PathError>;

impl PathError {
    #[must_use]
    pub fn new(kind: PathErrorKind, message: String, position: Option<usize>) -> Self {
        Self {
            kind,
            message,
            position,
        }
    }

    #[must_use]
    pub fn unterminated_bracket(position: usize) -> Self {
        Self::new(
            PathErrorKind::UnterminatedBracket,
            format!("path syntax error at position {position}: '[' is never closed"),
            Some(position),
        )
    }

    #[must_use]
    pub fn unterminated_string(position: usize) -> Self {
        Self::new(
            PathErrorKind::UnterminatedString,
            format!("path syntax error at position {position}: quoted key is never closed"),
            Some(position),
        )
    }

    #[must_use]
    pub fn empty_selector(position: usize) -> Self {
        Self::new(
            PathErrorKind::EmptySelector,
            format!("path syntax error at position {position}: empty '[]' selector"),
            Some(position),
        )
    }
}
