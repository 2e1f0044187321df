//! Path resolution: walking a root value along a key sequence
//!
//! Every step classifies the current value before indexing into it.
//! Nullish and scalar values stop the walk; hash sets and boxed primitives
//! are never indexable mid-path. Misses degrade to the nullish sentinel or
//! the caller's fallback, never to an error.

use std::borrow::Cow;

use log::{debug, trace};

use super::key::Key;
use super::IntoPath;
use crate::shape::Shape;
use crate::value::{Value, NULL};

/// Resolve `path` against `root`, returning the nullish sentinel on any
/// miss.
///
/// The empty path resolves to `root` itself. The result is borrowed except
/// where a value has to be synthesized (indexing into text yields a
/// one-character text cell).
pub fn get<'a, P: IntoPath>(root: &'a Value, path: P) -> Cow<'a, Value> {
    resolve(root, &path.into_path()).unwrap_or(Cow::Borrowed(&NULL))
}

/// Resolve `path` against `root`, returning `fallback` whenever resolution
/// bottoms out on nullish or unreachable, including when the location
/// exists but holds an explicit null.
pub fn get_or<'a, P: IntoPath>(root: &'a Value, path: P, fallback: &'a Value) -> Cow<'a, Value> {
    match resolve(root, &path.into_path()) {
        Some(value) if !value.is_null() => value,
        _ => Cow::Borrowed(fallback),
    }
}

/// Presence test: true iff `path` reaches a present location. A present
/// explicit null counts; a missing key does not.
pub fn has<P: IntoPath>(root: &Value, path: P) -> bool {
    resolve(root, &path.into_path()).is_some()
}

/// Walk the token sequence. `None` means the walk bottomed out: a missing
/// key, an index out of bounds, or a non-indexable value with tokens left.
pub(crate) fn resolve<'a>(root: &'a Value, path: &super::Path) -> Option<Cow<'a, Value>> {
    resolve_from(root, path.keys())
}

fn resolve_from<'a>(mut current: &'a Value, keys: &[Key]) -> Option<Cow<'a, Value>> {
    for (position, key) in keys.iter().enumerate() {
        let shape = Shape::of(current);
        if matches!(shape, Shape::Nullish | Shape::Scalar) {
            debug!("path stopped at token {position}: cannot descend into {shape}");
            return None;
        }
        trace!("resolving token {position} ({key}) against {shape}");
        match step(current, key)? {
            Cow::Borrowed(next) => current = next,
            Cow::Owned(owned) => {
                // Synthesized intermediate (a text cell): resolve the
                // remainder against it and detach the result.
                let rest = &keys[position + 1..];
                if rest.is_empty() {
                    return Some(Cow::Owned(owned));
                }
                return resolve_from(&owned, rest).map(|value| Cow::Owned(value.into_owned()));
            }
        }
    }
    Some(Cow::Borrowed(current))
}

/// One indexing step. Integer tokens index positional shapes or coerce to
/// textual keys for the mapping shapes; textual tokens made of digits
/// coerce back to positions.
fn step<'a>(current: &'a Value, key: &Key) -> Option<Cow<'a, Value>> {
    match current {
        Value::Seq(items) => key.as_index().and_then(|index| items.get(index)).map(Cow::Borrowed),
        Value::Slots(slots) => key.as_index().and_then(|index| slots.get(index)).map(Cow::Borrowed),
        Value::Text(text) => key
            .as_index()
            .and_then(|index| text.chars().nth(index))
            .map(|c| Cow::Owned(Value::Text(c.to_string()))),
        Value::Map(entries) => entries.get(key.as_name().as_ref()).map(Cow::Borrowed),
        Value::Record(record) => record.get(key.as_name().as_ref()).map(Cow::Borrowed),
        Value::Set(_) | Value::Boxed(_) => {
            debug!("{} is not indexable mid-path", current.type_name());
            None
        }
        // Nullish/scalar are rejected before stepping
        Value::Null | Value::Bool(_) | Value::Int(_) | Value::Float(_) => None,
    }
}
