//! Record structures: insertion-ordered own fields plus an optional base tier
//!
//! The two-tier lookup replaces runtime prototype-chain walking: a record
//! resolves a name against its own fields first, then delegates to its base
//! chain. Enumeration lists own fields in insertion order followed by base
//! fields not shadowed by a nearer tier.

use indexmap::IndexMap;

use super::Value;

/// A generic key-enumerable mapping with explicit base delegation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    fields: IndexMap<String, Value>,
    base: Option<Box<Record>>,
}

impl Record {
    /// Create an empty record with no base.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty record delegating to `base`.
    #[must_use]
    pub fn with_base(base: Record) -> Self {
        Self {
            fields: IndexMap::new(),
            base: Some(Box::new(base)),
        }
    }

    /// Insert or replace an own field, preserving first-insertion order.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.fields.insert(name.into(), value.into())
    }

    /// Builder-style [`insert`](Self::insert).
    #[must_use]
    pub fn field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    /// Attach or replace the base tier.
    pub fn set_base(&mut self, base: Record) {
        self.base = Some(Box::new(base));
    }

    /// Borrow the base tier, if any.
    #[must_use]
    pub fn base(&self) -> Option<&Record> {
        self.base.as_deref()
    }

    /// Two-tier lookup: own fields first, then the base chain. First hit wins.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        match self.fields.get(name) {
            Some(value) => Some(value),
            None => self.base.as_deref().and_then(|base| base.get(name)),
        }
    }

    /// Whether `name` resolves through own fields or the base chain.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Own fields only, in insertion order.
    pub fn own_fields(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Number of own fields.
    #[must_use]
    pub fn own_len(&self) -> usize {
        self.fields.len()
    }

    /// Effective field names: own in insertion order, then base-chain names
    /// not shadowed by a nearer tier.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::with_capacity(self.fields.len());
        self.collect_names(&mut names);
        names
    }

    /// Effective entries in the same order as [`names`](Self::names).
    #[must_use]
    pub fn entries(&self) -> Vec<(&str, &Value)> {
        self.names()
            .into_iter()
            .filter_map(|name| self.get(name).map(|value| (name, value)))
            .collect()
    }

    /// Count of effective fields (own plus unshadowed base).
    #[must_use]
    pub fn len(&self) -> usize {
        self.names().len()
    }

    /// True when no tier contributes any field.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty() && self.base.as_deref().is_none_or(Record::is_empty)
    }

    fn collect_names<'a>(&'a self, names: &mut Vec<&'a str>) {
        for name in self.fields.keys() {
            if !names.contains(&name.as_str()) {
                names.push(name);
            }
        }
        if let Some(base) = self.base.as_deref() {
            base.collect_names(names);
        }
    }
}

impl FromIterator<(String, Value)> for Record {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
            base: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_record() -> Record {
        Record::new().field("kind", "base").field("inherited", 1i64)
    }

    #[test]
    fn own_field_shadows_base() {
        let mut record = Record::with_base(base_record());
        record.insert("kind", "derived");

        assert_eq!(record.get("kind"), Some(&Value::Text("derived".into())));
        assert_eq!(record.get("inherited"), Some(&Value::Int(1)));
        assert_eq!(record.get("missing"), None);
    }

    #[test]
    fn names_list_own_then_unshadowed_base() {
        let mut record = Record::with_base(base_record());
        record.insert("kind", "derived");
        record.insert("own", true);

        assert_eq!(record.names(), vec!["kind", "own", "inherited"]);
        assert_eq!(record.len(), 3);
    }

    #[test]
    fn empty_considers_whole_chain() {
        let record = Record::with_base(Record::new());
        assert!(record.is_empty());

        let record = Record::with_base(base_record());
        assert!(!record.is_empty());
        assert_eq!(record.own_len(), 0);
        assert_eq!(record.len(), 2);
    }
}
