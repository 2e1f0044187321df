//! Container shape classification
//!
//! Every value classifies to exactly one `Shape` tag. The closed enum turns
//! the priority rules into a compile-time property: consumers (the path
//! resolver, the enumeration protocol) match exhaustively instead of probing
//! a value at runtime.

use std::fmt;

use serde::Serialize;

use crate::value::Value;

/// Shape tag describing which enumeration and indexing rules apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Shape {
    /// Absence of a value
    Nullish,
    /// Ordered, index-addressable sequence with a native length
    Sequence,
    /// Text sequence of characters
    Text,
    /// Hash-based membership structure
    HashSet,
    /// Hash-based key-to-value structure
    HashMap,
    /// Boxed/wrapped primitive
    BoxedPrimitive,
    /// Positional store with a declared length, not a native sequence
    ArrayLike,
    /// Generic key-enumerable mapping (own fields plus base tier)
    PlainMapping,
    /// Raw scalar: booleans, numbers
    Scalar,
}

impl Shape {
    /// Classify a value. Total; never fails.
    ///
    /// The arms encode the priority rules: nullish first, native containers
    /// before the hash structures, hash structures before the generic
    /// mapping rule, scalars last.
    #[must_use]
    pub fn of(value: &Value) -> Shape {
        match value {
            Value::Null => Shape::Nullish,
            Value::Seq(_) => Shape::Sequence,
            Value::Text(_) => Shape::Text,
            Value::Set(_) => Shape::HashSet,
            Value::Map(_) => Shape::HashMap,
            Value::Boxed(_) => Shape::BoxedPrimitive,
            Value::Slots(_) => Shape::ArrayLike,
            Value::Record(_) => Shape::PlainMapping,
            Value::Bool(_) | Value::Int(_) | Value::Float(_) => Shape::Scalar,
        }
    }

    /// Whether the shape enumerates any keys at all.
    #[inline]
    #[must_use]
    pub fn is_enumerable(self) -> bool {
        !matches!(self, Shape::BoxedPrimitive | Shape::Scalar | Shape::Nullish)
    }

    /// Whether a path token can descend into this shape.
    #[inline]
    #[must_use]
    pub fn is_indexable(self) -> bool {
        matches!(
            self,
            Shape::Sequence | Shape::ArrayLike | Shape::Text | Shape::HashMap | Shape::PlainMapping
        )
    }

    /// Whether keys are consecutive integer positions.
    #[inline]
    #[must_use]
    pub fn is_positional(self) -> bool {
        matches!(self, Shape::Sequence | Shape::ArrayLike | Shape::Text)
    }

    /// Display string for the tag.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Shape::Nullish => "nullish",
            Shape::Sequence => "sequence",
            Shape::Text => "text",
            Shape::HashSet => "hash_set",
            Shape::HashMap => "hash_map",
            Shape::BoxedPrimitive => "boxed_primitive",
            Shape::ArrayLike => "array_like",
            Shape::PlainMapping => "plain_mapping",
            Shape::Scalar => "scalar",
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
