//! Ordered map type for key-value objects.
//!
//! [`KeyValueMap`] wraps an [`IndexMap`] so that flatten, unflatten and literal
//! reconstruction keep properties in the order they were inserted. The map has no
//! inherited members: keys such as `constructor` or `toString` are plain entries.
//!
//! ## Examples
//!
//! ```rust
//! use serde_keyvalue::{KeyValueMap, Value};
//!
//! let mut map = KeyValueMap::new();
//! map.insert("name".to_string(), Value::from("Alice"));
//! map.insert("age".to_string(), Value::from(30));
//!
//! assert_eq!(map.len(), 2);
//! assert_eq!(map.get("name").and_then(|v| v.as_str()), Some("Alice"));
//! ```

use crate::Value;
use indexmap::IndexMap;
use std::collections::HashMap;

/// An ordered map of string keys to values.
///
/// # Examples
///
/// ```rust
/// use serde_keyvalue::{KeyValueMap, Value};
///
/// let mut map = KeyValueMap::new();
/// map.insert("first".to_string(), Value::from(1));
/// map.insert("second".to_string(), Value::from(2));
///
/// let keys: Vec<_> = map.keys().cloned().collect();
/// assert_eq!(keys, vec!["first", "second"]);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct KeyValueMap(IndexMap<String, Value>);

impl KeyValueMap {
    #[must_use]
    pub fn new() -> Self {
        KeyValueMap(IndexMap::new())
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        KeyValueMap(IndexMap::with_capacity(capacity))
    }

    /// Inserts a key-value pair into the map.
    ///
    /// An existing key keeps its position; the old value is returned.
    pub fn insert(&mut self, key: String, value: Value) -> Option<Value> {
        self.0.insert(key, value)
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the keys of the map, in insertion order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, String, Value> {
        self.0.keys()
    }

    /// Returns an iterator over the values of the map, in insertion order.
    pub fn values(&self) -> indexmap::map::Values<'_, String, Value> {
        self.0.values()
    }

    /// Returns an iterator over the key-value pairs of the map, in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Value> {
        self.0.iter()
    }
}

impl From<HashMap<String, Value>> for KeyValueMap {
    fn from(map: HashMap<String, Value>) -> Self {
        KeyValueMap(map.into_iter().collect())
    }
}

impl IntoIterator for KeyValueMap {
    type Item = (String, Value);
    type IntoIter = indexmap::map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a KeyValueMap {
    type Item = (&'a String, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<(String, Value)> for KeyValueMap {
    fn from_iter<T: IntoIterator<Item = (String, Value)>>(iter: T) -> Self {
        KeyValueMap(IndexMap::from_iter(iter))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reinsert_keeps_position() {
        let mut map = KeyValueMap::new();
        map.insert("a".to_string(), Value::from(1));
        map.insert("b".to_string(), Value::from(2));
        let old = map.insert("a".to_string(), Value::from(3));

        assert_eq!(old, Some(Value::from(1)));
        let pairs: Vec<_> = map.iter().map(|(k, v)| (k.as_str(), v.clone())).collect();
        assert_eq!(pairs, vec![("a", Value::from(3)), ("b", Value::from(2))]);
    }

    #[test]
    fn test_reserved_names_are_plain_keys() {
        let map = KeyValueMap::new();
        assert!(!map.contains_key("constructor"));
        assert!(map.get("toString").is_none());
    }
}
