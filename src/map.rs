//! Ordered map type shared by both representations.
//!
//! This module provides [`SparseMap`], a wrapper around [`IndexMap`] that
//! maintains insertion order. Both forms handled by the codec are
//! `SparseMap`s: the nested form uses it for every mapping node, and the
//! sparse form is one `SparseMap` keyed by delimited paths.
//!
//! ## Why IndexMap?
//!
//! The codec's contracts are stated in terms of iteration order: flattening
//! visits mapping entries in their natural order, and re-nesting replays flat
//! entries in theirs. `IndexMap` preserves insertion order, which makes both
//! deterministic.
//!
//! ## Examples
//!
//! ```rust
//! use sparsekey::{SparseMap, SparseValue};
//!
//! let mut map = SparseMap::new();
//! map.insert("name".to_string(), SparseValue::from("Alice"));
//! map.insert("age".to_string(), SparseValue::from(30));
//!
//! assert_eq!(map.len(), 2);
//! assert_eq!(map.get("name").and_then(|v| v.as_str()), Some("Alice"));
//! ```

use indexmap::IndexMap;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use crate::SparseValue;

/// An insertion-ordered map of string keys to sparse values.
///
/// # Examples
///
/// ```rust
/// use sparsekey::{SparseMap, SparseValue};
///
/// let mut map = SparseMap::new();
/// map.insert("first".to_string(), SparseValue::from(1));
/// map.insert("second".to_string(), SparseValue::from(2));
///
/// // Iteration maintains insertion order
/// let keys: Vec<_> = map.keys().cloned().collect();
/// assert_eq!(keys, vec!["first", "second"]);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SparseMap(IndexMap<String, SparseValue>);

impl SparseMap {
    /// Creates an empty `SparseMap`.
    #[must_use]
    pub fn new() -> Self {
        SparseMap(IndexMap::new())
    }

    /// Creates an empty `SparseMap` with the specified capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        SparseMap(IndexMap::with_capacity(capacity))
    }

    /// Inserts a key-value pair into the map.
    ///
    /// If the map already contained this key, the old value is returned and
    /// the key keeps its original position.
    pub fn insert(&mut self, key: String, value: SparseValue) -> Option<SparseValue> {
        self.0.insert(key, value)
    }

    /// Returns a reference to the value corresponding to the key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&SparseValue> {
        self.0.get(key)
    }

    /// Returns a mutable reference to the value corresponding to the key.
    #[must_use]
    pub fn get_mut(&mut self, key: &str) -> Option<&mut SparseValue> {
        self.0.get_mut(key)
    }

    /// Returns `true` if the map contains the given key.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Gets the entry for a key, for in-place insertion or mutation.
    pub fn entry(&mut self, key: String) -> indexmap::map::Entry<'_, String, SparseValue> {
        self.0.entry(key)
    }

    /// Removes a key from the map, preserving the order of the remaining
    /// entries. Returns the removed value, if any.
    pub fn shift_remove(&mut self, key: &str) -> Option<SparseValue> {
        self.0.shift_remove(key)
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
    pub fn keys(&self) -> indexmap::map::Keys<'_, String, SparseValue> {
        self.0.keys()
    }

    /// Returns an iterator over the values of the map, in insertion order.
    pub fn values(&self) -> indexmap::map::Values<'_, String, SparseValue> {
        self.0.values()
    }

    /// Returns an iterator over the key-value pairs of the map, in insertion
    /// order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, SparseValue> {
        self.0.iter()
    }
}

impl From<IndexMap<String, SparseValue>> for SparseMap {
    fn from(map: IndexMap<String, SparseValue>) -> Self {
        SparseMap(map)
    }
}

impl From<SparseMap> for IndexMap<String, SparseValue> {
    fn from(map: SparseMap) -> Self {
        map.0
    }
}

impl IntoIterator for SparseMap {
    type Item = (String, SparseValue);
    type IntoIter = indexmap::map::IntoIter<String, SparseValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a SparseMap {
    type Item = (&'a String, &'a SparseValue);
    type IntoIter = indexmap::map::Iter<'a, String, SparseValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<(String, SparseValue)> for SparseMap {
    fn from_iter<T: IntoIterator<Item = (String, SparseValue)>>(iter: T) -> Self {
        SparseMap(IndexMap::from_iter(iter))
    }
}

impl Extend<(String, SparseValue)> for SparseMap {
    fn extend<T: IntoIterator<Item = (String, SparseValue)>>(&mut self, iter: T) {
        self.0.extend(iter)
    }
}

impl Serialize for SparseMap {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (k, v) in self.iter() {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for SparseMap {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct SparseMapVisitor;

        impl<'de> Visitor<'de> for SparseMapVisitor {
            type Value = SparseMap;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a map with string keys")
            }

            fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut map = SparseMap::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((key, value)) = access.next_entry()? {
                    map.insert(key, value);
                }
                Ok(map)
            }
        }

        deserializer.deserialize_map(SparseMapVisitor)
    }
}
