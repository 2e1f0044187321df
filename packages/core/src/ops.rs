//! Iteration-style operations over the enumeration protocol
//!
//! Each operation classifies its input once, drives the [`View`] for keys
//! and per-key values, and folds them through the caller's function.
//! Callbacks receive `(value, key, container)` in that order. Inputs that
//! enumerate nothing degrade to empty/default results, never to errors.

use crate::path::IntoPath;
use crate::value::Value;
use crate::view::View;

/// Ordered key sequence of `value` under the enumeration protocol.
#[must_use]
pub fn keys(value: &Value) -> Vec<Value> {
    View::of(value).keys()
}

/// Per-key values of `value` in key order.
#[must_use]
pub fn values(value: &Value) -> Vec<Value> {
    View::of(value)
        .entries()
        .into_iter()
        .map(|(_, value)| value.into_owned())
        .collect()
}

/// Transform every enumerated entry, collecting results positionally into a
/// sequence of the same length and order as the input's key sequence.
pub fn map<F>(collection: &Value, mut f: F) -> Value
where
    F: FnMut(&Value, &Value, &Value) -> Value,
{
    Value::Seq(
        View::of(collection)
            .entries()
            .into_iter()
            .map(|(key, value)| f(value.as_ref(), &key, collection))
            .collect(),
    )
}

/// Keep the entries the predicate accepts, in key order.
///
/// An empty input yields a plain empty sequence. (The reference behavior
/// wrapped the empty result in one extra sequence level; that was an
/// artifact, not a contract, and is deliberately not preserved.)
pub fn filter<F>(collection: &Value, mut predicate: F) -> Value
where
    F: FnMut(&Value, &Value, &Value) -> bool,
{
    Value::Seq(
        View::of(collection)
            .entries()
            .into_iter()
            .filter(|(key, value)| predicate(value.as_ref(), key, collection))
            .map(|(_, value)| value.into_owned())
            .collect(),
    )
}

/// Left fold over the enumerated entries. The callback receives
/// `(accumulator, value, key)`.
///
/// Without a seed, the first enumerated value seeds the accumulator and
/// folding starts from the second entry; a seedless fold over an empty
/// input returns the nullish sentinel.
pub fn reduce<F>(collection: &Value, seed: Option<Value>, mut f: F) -> Value
where
    F: FnMut(Value, &Value, &Value) -> Value,
{
    let mut entries = View::of(collection).entries().into_iter();
    let mut accumulator = match seed {
        Some(seed) => seed,
        None => match entries.next() {
            Some((_, first)) => first.into_owned(),
            None => return Value::Null,
        },
    };
    for (key, value) in entries {
        accumulator = f(accumulator, value.as_ref(), &key);
    }
    accumulator
}

/// True iff `value` enumerates zero entries: nullish, scalars, boxed
/// primitives, and any container with no enumerable entries or members.
#[must_use]
pub fn is_empty(value: &Value) -> bool {
    View::of(value).is_empty()
}

/// Resolve a shared path against every enumerated value of `collection`,
/// in key order. Misses come back as the nullish sentinel.
pub fn pluck<P: IntoPath>(collection: &Value, path: P) -> Value {
    let path = path.into_path();
    Value::Seq(
        View::of(collection)
            .entries()
            .into_iter()
            .map(|(_, value)| crate::path::get(value.as_ref(), &path).into_owned())
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use indexmap::IndexSet;
    use serde_json::json;

    use super::*;
    use crate::value::Record;

    #[test]
    fn keys_of_text_are_positions() {
        assert_eq!(
            keys(&Value::Text("hi".into())),
            vec![Value::Int(0), Value::Int(1)]
        );
    }

    #[test]
    fn map_preserves_cardinality_and_order() {
        let input = Value::from(json!([10, 20, 30]));
        let doubled = map(&input, |value, _, _| {
            Value::Int(value.as_int().unwrap_or(0) * 2)
        });
        assert_eq!(doubled, Value::from(json!([20, 40, 60])));
        assert_eq!(keys(&doubled).len(), keys(&input).len());
    }

    #[test]
    fn map_passes_key_and_container() {
        let input = Value::from(json!({"a": 1, "b": 2}));
        let described = map(&input, |value, key, container| {
            assert_eq!(container, &input);
            Value::Text(format!("{}={}", key.as_text().unwrap_or("?"), value.as_int().unwrap_or(0)))
        });
        assert_eq!(described, Value::from(json!(["a=1", "b=2"])));
    }

    #[test]
    fn filter_keeps_accepted_entries_in_order() {
        let input = Value::from(json!([1, 2, 3, 4]));
        let even = filter(&input, |value, _, _| {
            value.as_int().is_some_and(|n| n % 2 == 0)
        });
        assert_eq!(even, Value::from(json!([2, 4])));
    }

    #[test]
    fn filter_on_empty_input_is_a_plain_empty_sequence() {
        let result = filter(&Value::Seq(vec![]), |_, _, _| true);
        assert_eq!(result, Value::Seq(vec![]));

        let result = filter(&Value::Null, |_, _, _| true);
        assert_eq!(result, Value::Seq(vec![]));
    }

    #[test]
    fn reduce_with_seed_folds_left_to_right() {
        let input = Value::from(json!([1, 2, 3]));
        let sum = reduce(&input, Some(Value::Int(10)), |acc, value, _| {
            Value::Int(acc.as_int().unwrap_or(0) + value.as_int().unwrap_or(0))
        });
        assert_eq!(sum, Value::Int(16));
    }

    #[test]
    fn seedless_reduce_starts_from_the_first_value() {
        let input = Value::from(json!([5, 2, 1]));
        let sum = reduce(&input, None, |acc, value, _| {
            Value::Int(acc.as_int().unwrap_or(0) + value.as_int().unwrap_or(0))
        });
        assert_eq!(sum, Value::Int(8));
    }

    #[test]
    fn reduce_on_empty_input_returns_the_seed_unchanged() {
        let seed = Value::Text("seed".into());
        let result = reduce(&Value::Seq(vec![]), Some(seed.clone()), |acc, _, _| acc);
        assert_eq!(result, seed);

        assert_eq!(reduce(&Value::Null, None, |acc, _, _| acc), Value::Null);
    }

    #[test]
    fn is_empty_across_shapes() {
        assert!(is_empty(&Value::Null));
        assert!(is_empty(&Value::Int(42)));
        assert!(is_empty(&Value::Boxed(Box::new(Value::Bool(true)))));
        assert!(is_empty(&Value::Seq(vec![])));
        assert!(is_empty(&Value::from(json!({}))));
        assert!(is_empty(&Value::Set(IndexSet::new())));
        assert!(is_empty(&Value::Record(Record::new())));

        assert!(!is_empty(&Value::from(json!({"k": 1}))));
        assert!(!is_empty(&Value::Text("x".into())));
        let mut members = IndexSet::new();
        members.insert(Value::Int(1));
        assert!(!is_empty(&Value::Set(members)));
    }

    #[test]
    fn operations_cover_sets_and_records() {
        let mut members = IndexSet::new();
        members.insert(Value::Int(1));
        members.insert(Value::Int(2));
        let set = Value::Set(members);
        let doubled = map(&set, |value, _, _| {
            Value::Int(value.as_int().unwrap_or(0) * 2)
        });
        assert_eq!(doubled, Value::from(json!([2, 4])));

        let record = Record::new().field("a", 1i64).field("b", 2i64);
        let record = Value::Record(record);
        assert_eq!(
            keys(&record),
            vec![Value::Text("a".into()), Value::Text("b".into())]
        );
        assert_eq!(values(&record), vec![Value::Int(1), Value::Int(2)]);
    }

    #[test]
    fn pluck_maps_a_shared_path() {
        let input = Value::from(json!([
            {"user": {"name": "ada"}},
            {"user": {"name": "gus"}},
            {"user": {}}
        ]));
        assert_eq!(
            pluck(&input, "user.name"),
            Value::from(json!(["ada", "gus", null]))
        );
    }
}
