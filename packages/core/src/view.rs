//! Uniform enumeration protocol
//!
//! A `View` is a transient, read-only projection of a classified value:
//! its ordered keys, a total count, and a per-key accessor. Views are
//! recomputed on every call and never outlive it; the underlying value may
//! be mutated by the caller between calls, so nothing here caches.
//!
//! Keys are themselves values: integer positions for the positional shapes,
//! text for the mapping shapes, the members themselves for sets.

use std::borrow::Cow;

use crate::shape::Shape;
use crate::value::{Value, NULL};

/// Read-only key/size/accessor projection of a value.
pub struct View<'a> {
    value: &'a Value,
    shape: Shape,
}

impl<'a> View<'a> {
    /// Project `value` under its classified shape.
    #[must_use]
    pub fn of(value: &'a Value) -> View<'a> {
        View {
            value,
            shape: Shape::of(value),
        }
    }

    /// The shape this view dispatches on.
    #[inline]
    #[must_use]
    pub fn shape(&self) -> Shape {
        self.shape
    }

    /// The underlying value.
    #[inline]
    #[must_use]
    pub fn value(&self) -> &'a Value {
        self.value
    }

    /// Total count under the enumeration rules: reported length for the
    /// positional shapes (declared length for array-likes, never a recount),
    /// entry/member count for the mapping shapes, zero for everything else.
    #[must_use]
    pub fn len(&self) -> usize {
        match self.value {
            Value::Seq(items) => items.len(),
            Value::Text(text) => text.chars().count(),
            Value::Slots(slots) => slots.len(),
            Value::Map(entries) => entries.len(),
            Value::Set(members) => members.len(),
            Value::Record(record) => record.len(),
            Value::Null | Value::Bool(_) | Value::Int(_) | Value::Float(_) | Value::Boxed(_) => 0,
        }
    }

    /// True iff the count is zero.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Ordered key sequence.
    #[must_use]
    pub fn keys(&self) -> Vec<Value> {
        match self.value {
            Value::Seq(_) | Value::Text(_) | Value::Slots(_) => {
                (0..self.len()).map(|index| Value::from(index)).collect()
            }
            Value::Map(entries) => entries.keys().map(|key| Value::Text(key.clone())).collect(),
            Value::Set(members) => members.iter().cloned().collect(),
            Value::Record(record) => record
                .names()
                .into_iter()
                .map(|name| Value::Text(name.to_string()))
                .collect(),
            Value::Null | Value::Bool(_) | Value::Int(_) | Value::Float(_) | Value::Boxed(_) => {
                Vec::new()
            }
        }
    }

    /// Per-key accessor following the same dispatch as the key sequence.
    /// Borrowed where possible; text cells are synthesized.
    #[must_use]
    pub fn get(&self, key: &Value) -> Option<Cow<'a, Value>> {
        match self.value {
            Value::Seq(items) => key_index(key).and_then(|index| items.get(index)).map(Cow::Borrowed),
            Value::Slots(slots) => key_index(key).and_then(|index| slots.get(index)).map(Cow::Borrowed),
            Value::Text(text) => key_index(key)
                .and_then(|index| text.chars().nth(index))
                .map(|c| Cow::Owned(Value::Text(c.to_string()))),
            Value::Map(entries) => key_name(key).and_then(|name| entries.get(name.as_ref())).map(Cow::Borrowed),
            Value::Record(record) => key_name(key).and_then(|name| record.get(name.as_ref())).map(Cow::Borrowed),
            Value::Set(members) => members.get(key).map(Cow::Borrowed),
            Value::Null | Value::Bool(_) | Value::Int(_) | Value::Float(_) | Value::Boxed(_) => None,
        }
    }

    /// `(key, value)` pairs in key order.
    #[must_use]
    pub fn entries(&self) -> Vec<(Value, Cow<'a, Value>)> {
        match self.value {
            Value::Seq(items) => items
                .iter()
                .enumerate()
                .map(|(index, item)| (Value::from(index), Cow::Borrowed(item)))
                .collect(),
            Value::Text(text) => text
                .chars()
                .enumerate()
                .map(|(index, c)| (Value::from(index), Cow::Owned(Value::Text(c.to_string()))))
                .collect(),
            Value::Slots(slots) => (0..slots.len())
                .map(|index| {
                    let value = slots.get(index).unwrap_or(&NULL);
                    (Value::from(index), Cow::Borrowed(value))
                })
                .collect(),
            Value::Map(entries) => entries
                .iter()
                .map(|(key, value)| (Value::Text(key.clone()), Cow::Borrowed(value)))
                .collect(),
            Value::Set(members) => members
                .iter()
                .map(|member| (member.clone(), Cow::Borrowed(member)))
                .collect(),
            Value::Record(record) => record
                .entries()
                .into_iter()
                .map(|(name, value)| (Value::Text(name.to_string()), Cow::Borrowed(value)))
                .collect(),
            Value::Null | Value::Bool(_) | Value::Int(_) | Value::Float(_) | Value::Boxed(_) => {
                Vec::new()
            }
        }
    }
}

/// Positional reading of an enumeration key: integer values, or text made
/// of digits.
fn key_index(key: &Value) -> Option<usize> {
    match key {
        Value::Int(n) => usize::try_from(*n).ok(),
        Value::Text(s) if !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()) => s.parse().ok(),
        _ => None,
    }
}

/// Textual reading of an enumeration key: text values, or integers coerced
/// to decimal form.
fn key_name(key: &Value) -> Option<Cow<'_, str>> {
    match key {
        Value::Text(s) => Some(Cow::Borrowed(s.as_str())),
        Value::Int(n) => Some(Cow::Owned(n.to_string())),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use indexmap::{IndexMap, IndexSet};
    use serde_json::json;

    use super::*;
    use crate::value::{ArrayLike, Record};

    #[test]
    fn text_enumerates_character_positions() {
        let text = Value::Text("hi".into());
        let view = View::of(&text);

        assert_eq!(view.len(), 2);
        assert_eq!(view.keys(), vec![Value::Int(0), Value::Int(1)]);
        assert_eq!(
            view.get(&Value::Int(1)).map(Cow::into_owned),
            Some(Value::Text("i".into()))
        );
    }

    #[test]
    fn map_enumerates_in_insertion_order() {
        let value = Value::from(json!({"z": 1, "a": 2}));
        let view = View::of(&value);

        assert_eq!(
            view.keys(),
            vec![Value::Text("z".into()), Value::Text("a".into())]
        );
        assert_eq!(
            view.get(&Value::Text("a".into())).map(Cow::into_owned),
            Some(Value::Int(2))
        );
    }

    #[test]
    fn set_keys_are_the_members() {
        let mut members = IndexSet::new();
        members.insert(Value::Int(10));
        members.insert(Value::Text("x".into()));
        let value = Value::Set(members);
        let view = View::of(&value);

        assert_eq!(view.len(), 2);
        assert_eq!(view.keys(), vec![Value::Int(10), Value::Text("x".into())]);
        assert_eq!(
            view.get(&Value::Int(10)).map(Cow::into_owned),
            Some(Value::Int(10))
        );
        assert_eq!(view.get(&Value::Int(11)), None);
    }

    #[test]
    fn record_enumerates_own_then_unshadowed_base() {
        let base = Record::new().field("kind", "base").field("extra", 1i64);
        let record = Record::with_base(base).field("kind", "derived");
        let value = Value::Record(record);
        let view = View::of(&value);

        assert_eq!(
            view.keys(),
            vec![Value::Text("kind".into()), Value::Text("extra".into())]
        );
        assert_eq!(
            view.get(&Value::Text("kind".into())).map(Cow::into_owned),
            Some(Value::Text("derived".into()))
        );
    }

    #[test]
    fn array_like_sizes_by_declared_length() {
        let mut slots = ArrayLike::new(3);
        slots.set(1, "mid");
        let value = Value::Slots(slots);
        let view = View::of(&value);

        assert_eq!(view.len(), 3);
        let entries = view.entries();
        assert_eq!(entries[0].1.as_ref(), &Value::Null);
        assert_eq!(entries[1].1.as_ref(), &Value::Text("mid".into()));
        assert_eq!(entries[2].1.as_ref(), &Value::Null);
    }

    #[test]
    fn empty_shapes_enumerate_nothing() {
        for value in [
            Value::Null,
            Value::Int(5),
            Value::Bool(true),
            Value::Boxed(Box::new(Value::Bool(true))),
        ] {
            let view = View::of(&value);
            assert_eq!(view.len(), 0, "value: {value:?}");
            assert!(view.keys().is_empty());
            assert!(view.entries().is_empty());
            assert_eq!(view.get(&Value::Int(0)), None);
        }
    }

    #[test]
    fn integer_and_text_keys_coerce_both_ways() {
        let seq = Value::from(json!(["a", "b"]));
        let view = View::of(&seq);
        assert_eq!(
            view.get(&Value::Text("1".into())).map(Cow::into_owned),
            Some(Value::Text("b".into()))
        );

        let mut entries = IndexMap::new();
        entries.insert("0".to_string(), Value::Bool(true));
        let map = Value::Map(entries);
        let view = View::of(&map);
        assert_eq!(
            view.get(&Value::Int(0)).map(Cow::into_owned),
            Some(Value::Bool(true))
        );
    }

    #[test]
    fn size_matches_is_empty_for_every_shape() {
        let values = [
            Value::Null,
            Value::Int(1),
            Value::Text(String::new()),
            Value::Text("x".into()),
            Value::Seq(vec![]),
            Value::from(json!([1])),
            Value::Map(IndexMap::new()),
            Value::Set(IndexSet::new()),
            Value::Record(Record::new()),
            Value::Slots(ArrayLike::new(0)),
            Value::Boxed(Box::new(Value::Int(1))),
        ];
        for value in values {
            let view = View::of(&value);
            assert_eq!(view.is_empty(), view.len() == 0, "value: {value:?}");
        }
    }
}
