//! Total equality and hashing for the value model
//!
//! Set membership needs `Eq + Hash` over every variant, floats included.
//! Floats compare and hash by bit pattern, and the unordered containers
//! (maps, sets, record tiers) hash commutatively so that insertion order
//! never splits values their `PartialEq` considers equal.

use std::hash::{Hash, Hasher};

use super::{ArrayLike, Record, Value};

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a.to_bits() == b.to_bits(),
            (Value::Text(a), Value::Text(b)) => a == b,
            (Value::Seq(a), Value::Seq(b)) => a == b,
            (Value::Map(a), Value::Map(b)) => a == b,
            (Value::Set(a), Value::Set(b)) => a == b,
            (Value::Record(a), Value::Record(b)) => a == b,
            (Value::Slots(a), Value::Slots(b)) => a == b,
            (Value::Boxed(a), Value::Boxed(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Value {}
impl Eq for Record {}
impl Eq for ArrayLike {}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            Value::Null => {}
            Value::Bool(b) => b.hash(state),
            Value::Int(n) => n.hash(state),
            Value::Float(f) => f.to_bits().hash(state),
            Value::Text(s) => s.hash(state),
            Value::Seq(items) => items.hash(state),
            Value::Map(entries) => {
                state.write_usize(entries.len());
                state.write_u64(unordered(entries.iter()));
            }
            Value::Set(members) => {
                state.write_usize(members.len());
                state.write_u64(unordered(members.iter()));
            }
            Value::Record(record) => record.hash(state),
            Value::Slots(slots) => slots.hash(state),
            Value::Boxed(inner) => inner.hash(state),
        }
    }
}

impl Hash for Record {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.own_len());
        state.write_u64(unordered(self.own_fields()));
        match self.base() {
            Some(base) => base.hash(state),
            None => state.write_u8(0),
        }
    }
}

impl Hash for ArrayLike {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.len());
        for index in 0..self.len() {
            if let Some(value) = self.get(index) {
                value.hash(state);
            }
        }
    }
}

/// Order-insensitive combination: per-entry hashes folded with wrapping
/// addition, matching the order-insensitive `PartialEq` of the indexed
/// containers.
fn unordered<I, T>(entries: I) -> u64
where
    I: Iterator<Item = T>,
    T: Hash,
{
    entries
        .map(|entry| {
            let mut hasher = std::collections::hash_map::DefaultHasher::new();
            entry.hash(&mut hasher);
            hasher.finish()
        })
        .fold(0u64, u64::wrapping_add)
}
