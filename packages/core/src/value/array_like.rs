//! Array-like carrier: a declared length plus sparse positional slots
//!
//! Array-likes are positional without being native sequences (the shape of a
//! call-argument bundle). The declared length is authoritative for
//! enumeration and sizing; vacant slots inside the length read as nullish,
//! slots at or past the length are invisible.

use hashbrown::HashMap;

use super::{Value, NULL};

/// Sparse positional store with a declared element count.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArrayLike {
    len: usize,
    slots: HashMap<usize, Value>,
}

impl ArrayLike {
    /// Create an array-like with `len` vacant slots.
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self {
            len,
            slots: HashMap::new(),
        }
    }

    /// Build a dense array-like from a sequence of values.
    #[must_use]
    pub fn from_values(values: Vec<Value>) -> Self {
        let len = values.len();
        Self {
            len,
            slots: values.into_iter().enumerate().collect(),
        }
    }

    /// Declared element count. Never recounts occupied slots.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// True when the declared length is zero.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Occupy slot `index`. Slots past the declared length are stored but
    /// stay invisible until the length covers them.
    pub fn set(&mut self, index: usize, value: impl Into<Value>) -> Option<Value> {
        self.slots.insert(index, value.into())
    }

    /// Change the declared length without touching the slots.
    pub fn set_len(&mut self, len: usize) {
        self.len = len;
    }

    /// Positional read: `None` past the declared length, nullish for a
    /// vacant slot inside it.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Value> {
        if index >= self.len {
            return None;
        }
        Some(self.slots.get(&index).unwrap_or(&NULL))
    }
}

impl From<Vec<Value>> for ArrayLike {
    fn from(values: Vec<Value>) -> Self {
        Self::from_values(values)
    }
}
