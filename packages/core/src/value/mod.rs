//! Dynamic value model
//!
//! `Value` is the closed carrier type for every container shape the kernel
//! understands: scalars, text, ordered sequences, insertion-ordered maps and
//! sets, record structures with an optional base tier, sparse array-likes,
//! and boxed primitives.

mod array_like;
mod convert;
mod hash;
mod record;

use indexmap::{IndexMap, IndexSet};

pub use array_like::ArrayLike;
pub use record::Record;

use crate::shape::Shape;

/// Shared nullish sentinel for borrowed miss results.
pub(crate) static NULL: Value = Value::Null;

/// A dynamically shaped value.
///
/// Exactly one [`Shape`](crate::shape::Shape) tag applies to every variant;
/// classification is a pure function of the variant, never of any declared
/// type. Equality and hashing are total (floats compare by bit pattern) so
/// any value can live inside a [`Value::Set`].
#[derive(Debug, Clone, Default)]
pub enum Value {
    /// Absence of a value (the nullish sentinel)
    #[default]
    Null,
    /// Raw boolean scalar
    Bool(bool),
    /// Signed integer scalar
    Int(i64),
    /// Floating-point scalar
    Float(f64),
    /// Text sequence (enumerates per character position)
    Text(String),
    /// Ordered, index-addressable sequence
    Seq(Vec<Value>),
    /// Hash-based key-to-value structure, insertion-ordered
    Map(IndexMap<String, Value>),
    /// Hash-based membership structure, insertion-ordered
    Set(IndexSet<Value>),
    /// Generic key-enumerable mapping with an optional base tier
    Record(Record),
    /// Array-like: declared length plus sparse positional slots
    Slots(ArrayLike),
    /// Boxed/wrapped primitive
    Boxed(Box<Value>),
}

impl Value {
    /// Build a set from members, keeping first-insertion order and
    /// dropping duplicates.
    #[must_use]
    pub fn set_from<I: IntoIterator<Item = Value>>(members: I) -> Value {
        Value::Set(members.into_iter().collect())
    }

    /// Build a map from entries, keeping first-insertion order; a repeated
    /// key keeps its first position with the latest value.
    #[must_use]
    pub fn map_from<K, I>(entries: I) -> Value
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Value)>,
    {
        Value::Map(entries.into_iter().map(|(key, value)| (key.into(), value)).collect())
    }

    /// Classify this value into its container shape.
    #[inline]
    #[must_use]
    pub fn shape(&self) -> Shape {
        Shape::of(self)
    }

    /// Shape tag as a display string (e.g. `"sequence"`, `"hash_map"`).
    #[inline]
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        self.shape().as_str()
    }

    /// Check whether this value is the nullish sentinel.
    #[inline]
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Borrow the boolean payload, if any.
    #[inline]
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Borrow the integer payload, if any.
    #[inline]
    #[must_use]
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Borrow the float payload, if any.
    #[inline]
    #[must_use]
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Borrow the text payload, if any.
    #[inline]
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Borrow the sequence payload, if any.
    #[inline]
    #[must_use]
    pub fn as_seq(&self) -> Option<&[Value]> {
        match self {
            Value::Seq(items) => Some(items),
            _ => None,
        }
    }

    /// Borrow the map payload, if any.
    #[inline]
    #[must_use]
    pub fn as_map(&self) -> Option<&IndexMap<String, Value>> {
        match self {
            Value::Map(entries) => Some(entries),
            _ => None,
        }
    }

    /// Borrow the set payload, if any.
    #[inline]
    #[must_use]
    pub fn as_set(&self) -> Option<&IndexSet<Value>> {
        match self {
            Value::Set(members) => Some(members),
            _ => None,
        }
    }

    /// Borrow the record payload, if any.
    #[inline]
    #[must_use]
    pub fn as_record(&self) -> Option<&Record> {
        match self {
            Value::Record(record) => Some(record),
            _ => None,
        }
    }

    /// Borrow the array-like payload, if any.
    #[inline]
    #[must_use]
    pub fn as_slots(&self) -> Option<&ArrayLike> {
        match self {
            Value::Slots(slots) => Some(slots),
            _ => None,
        }
    }

    /// Unwrap one level of boxed primitive, if any.
    #[inline]
    #[must_use]
    pub fn as_boxed(&self) -> Option<&Value> {
        match self {
            Value::Boxed(inner) => Some(inner),
            _ => None,
        }
    }
}
