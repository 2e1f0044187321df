//! # pluck
//!
//! Uniform property access, filtering, mapping, reduction, and emptiness
//! testing across heterogeneous container values: sequences, maps, sets,
//! records, text, and array-likes, all behind one dynamic [`Value`] model.
//!
//! Every operation classifies its input by shape and degrades to a
//! documented default instead of failing: a miss resolves to the nullish
//! sentinel (or your fallback), an un-enumerable input behaves as an empty
//! container.
//!
//! ```
//! use pluck::prelude::*;
//! use serde_json::json;
//!
//! let root = pluck::from_json(json!({"a": [{"b": {"c": 3}}]}));
//! assert_eq!(*get(&root, "a[0].b.c"), Value::Int(3));
//!
//! let fallback = Value::from("default");
//! assert_eq!(*get_or(&root, "a.b.c", &fallback), fallback);
//!
//! let nums = pluck::from_json(json!([1, 2, 3, 4]));
//! let even = filter(&nums, |v, _, _| v.as_int().is_some_and(|n| n % 2 == 0));
//! assert_eq!(pluck::to_json(&even), json!([2, 4]));
//! ```

#![deny(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]

// Re-export the kernel surface
pub use pluck_core::{
    filter, get, get_or, has, is_empty, keys, map, pluck, reduce, values, ArrayLike, IntoPath,
    Key, Path, PathError, PathErrorKind, PathResult, Record, Shape, Value, View,
};

// Fixture ergonomics: callers already hold `serde_json::json!` data
pub use serde_json::json;

/// Convert a JSON document into the dynamic value model.
#[must_use]
pub fn from_json(json: serde_json::Value) -> Value {
    Value::from(json)
}

/// Render a dynamic value back to JSON (sets and array-likes as arrays,
/// records flattened own-over-base).
#[must_use]
pub fn to_json(value: &Value) -> serde_json::Value {
    value.to_json()
}

/// One-stop import for the common surface.
pub mod prelude {
    pub use pluck_core::{
        filter, get, get_or, has, is_empty, keys, map, pluck, reduce, values, IntoPath, Key,
        Path, Shape, Value, View,
    };
}
