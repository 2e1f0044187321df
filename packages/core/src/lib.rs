//! # pluck_core
//!
//! Shared kernel for uniform inspection of heterogeneous container values:
//! a closed dynamic [`Value`] model, a [`Shape`] classifier, a path engine
//! (tokenization plus resolution), and the enumeration protocol the
//! iteration-style operations are built on.
//!
//! The kernel is a pure, synchronous, in-memory library. Invalid input
//! never surfaces as an error; every miss degrades to a documented default
//! (nullish sentinel, fallback value, empty sequence, `false` emptiness).
//! The one exception is [`Path::parse_strict`], the opt-in strict
//! tokenizer, which reports syntax problems as [`PathError`].
//!
//! ```
//! use pluck_core::{get, is_empty, keys, Value};
//! use serde_json::json;
//!
//! let root = Value::from(json!({"a": [{"b": {"c": 3}}]}));
//! assert_eq!(*get(&root, "a[0].b.c"), Value::Int(3));
//! assert!(get(&root, "a.b.c").is_null());
//!
//! assert_eq!(keys(&Value::Text("hi".into())).len(), 2);
//! assert!(is_empty(&Value::Null));
//! ```

#![deny(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]

pub mod ops;
pub mod path;
pub mod shape;
pub mod value;
pub mod view;

pub use ops::{filter, is_empty, keys, map, pluck, reduce, values};
pub use path::{get, get_or, has, IntoPath, Key, Path, PathError, PathErrorKind, PathResult};
pub use shape::Shape;
pub use value::{ArrayLike, Record, Value};
pub use view::View;
