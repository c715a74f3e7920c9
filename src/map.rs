//! Ordered map type for document objects.
//!
//! [`PropsMap`] wraps an [`IndexMap`] so that keys come back out in the order
//! their first entry appeared in the properties input. Re-assigning a key
//! replaces its value but keeps its original position.
//!
//! ## Examples
//!
//! ```rust
//! use serde_props::{PropsMap, Value};
//!
//! let mut map = PropsMap::new();
//! map.insert("name".to_string(), Value::from("server"));
//! map.insert("port".to_string(), Value::from(8080));
//!
//! assert_eq!(map.len(), 2);
//! assert_eq!(map.get("name").and_then(|v| v.as_str()), Some("server"));
//! ```

use crate::Value;
use indexmap::IndexMap;
use serde::{Serialize, Serializer};

/// An insertion-ordered map of string keys to document values.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PropsMap(IndexMap<String, Value>);

impl PropsMap {
    /// Creates an empty `PropsMap`.
    #[must_use]
    pub fn new() -> Self {
        PropsMap(IndexMap::new())
    }

    /// Creates an empty `PropsMap` with the specified capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        PropsMap(IndexMap::with_capacity(capacity))
    }

    /// Creates a map holding exactly one entry.
    #[must_use]
    pub fn singleton(key: impl Into<String>, value: Value) -> Self {
        let mut map = PropsMap::with_capacity(1);
        map.insert(key.into(), value);
        map
    }

    /// Inserts a key-value pair into the map.
    ///
    /// If the map already contained this key, the old value is returned and
    /// the key keeps its position.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_props::{PropsMap, Value};
    ///
    /// let mut map = PropsMap::new();
    /// assert!(map.insert("key".to_string(), Value::from(42)).is_none());
    /// assert!(map.insert("key".to_string(), Value::from(43)).is_some());
    /// ```
    pub fn insert(&mut self, key: String, value: Value) -> Option<Value> {
        self.0.insert(key, value)
    }

    /// Returns a reference to the value corresponding to the key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Returns `true` if the map holds a value for `key`.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Returns the number of elements in the map.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the map contains no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the keys of the map, in insertion order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, String, Value> {
        self.0.keys()
    }

    /// Returns an iterator over the key-value pairs of the map, in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Value> {
        self.0.iter()
    }

    /// Deep-merges `other` into `self`.
    ///
    /// When both sides hold an object under the same key the two objects are
    /// merged recursively. Any other collision is won by `other`. Arrays are
    /// replaced, never concatenated.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_props::{props, PropsMap, Value};
    ///
    /// let Value::Object(mut left) = props!({"a": {"b": 1}, "x": 1}) else { unreachable!() };
    /// let Value::Object(right) = props!({"a": {"c": 2}, "x": 2}) else { unreachable!() };
    ///
    /// left.merge_in(right);
    /// assert_eq!(Value::Object(left), props!({"a": {"b": 1, "c": 2}, "x": 2}));
    /// ```
    pub fn merge_in(&mut self, other: PropsMap) {
        for (key, incoming) in other {
            let replacement = match (self.0.get_mut(&key), incoming) {
                (Some(Value::Object(existing)), Value::Object(nested)) => {
                    existing.merge_in(nested);
                    None
                }
                (_, incoming) => Some(incoming),
            };
            if let Some(value) = replacement {
                self.0.insert(key, value);
            }
        }
    }
}

impl Serialize for PropsMap {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_map(self.iter())
    }
}

impl IntoIterator for PropsMap {
    type Item = (String, Value);
    type IntoIter = indexmap::map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a PropsMap {
    type Item = (&'a String, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<(String, Value)> for PropsMap {
    fn from_iter<T: IntoIterator<Item = (String, Value)>>(iter: T) -> Self {
        PropsMap(IndexMap::from_iter(iter))
    }
}
