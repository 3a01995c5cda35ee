use std::{fmt, rc::Rc};

use rustc_hash::FxHashMap;

use crate::interpreter::value::core::Value;

/// The structural identity of a value used as a map key.
///
/// Only integers, booleans and strings can be keys. Two keys are equal when
/// their kind and content are equal, regardless of which value instance they
/// were taken from; two separately built `"a"` strings address the same slot.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum HashKey {
    /// Keyed by value.
    Integer(i64),
    /// Keyed as 0 or 1.
    Boolean(bool),
    /// Keyed by content.
    String(Rc<str>),
}

/// A key together with the value stored under it.
///
/// The original key value is kept so that the map can render its keys.
#[derive(Debug, Clone)]
pub struct HashPair {
    /// The key as it was written.
    pub key:   Value,
    /// The stored value.
    pub value: Value,
}

/// The contents of a map value.
#[derive(Debug, Clone, Default)]
pub struct HashValue {
    pairs: FxHashMap<HashKey, HashPair>,
}

impl HashValue {
    /// Creates an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `value` under `key`, replacing any previous entry.
    pub fn insert(&mut self, hash_key: HashKey, key: Value, value: Value) {
        self.pairs.insert(hash_key, HashPair { key, value });
    }

    /// The value stored under `key`, if any.
    #[must_use]
    pub fn get(&self, key: &HashKey) -> Option<&Value> {
        self.pairs.get(key).map(|pair| &pair.value)
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Returns `true` if the map has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Iterates over the entries in unspecified order.
    pub fn pairs(&self) -> impl Iterator<Item = &HashPair> {
        self.pairs.values()
    }
}

impl fmt::Display for HashKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Boolean(b) => write!(f, "{}", u8::from(*b)),
            Self::String(s) => write!(f, "{s}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_keys_compare_by_content() {
        let mut map = HashValue::new();
        let first: Rc<str> = Rc::from("a");
        let second: Rc<str> = Rc::from("a");

        map.insert(HashKey::String(first.clone()), Value::String(first), Value::Integer(1));
        map.insert(HashKey::String(second.clone()), Value::String(second), Value::Integer(2));

        assert_eq!(map.len(), 1);
        assert!(matches!(map.get(&HashKey::String(Rc::from("a"))), Some(Value::Integer(2))));
    }

    #[test]
    fn kinds_do_not_collide() {
        let mut map = HashValue::new();
        map.insert(HashKey::Integer(1), Value::Integer(1), Value::Integer(10));
        map.insert(HashKey::Boolean(true), Value::Boolean(true), Value::Integer(20));

        assert_eq!(map.len(), 2);
        assert!(map.get(&HashKey::String(Rc::from("1"))).is_none());
    }
}
