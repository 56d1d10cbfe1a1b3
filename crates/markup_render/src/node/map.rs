use std::fmt::Debug;

use indexmap::IndexMap;
use rustc_hash::FxBuildHasher;

/// A mapping that iterates in insertion order.
///
/// Attribute and style output order must mirror the order the caller wrote
/// the entries in. Inserting a key that is already present replaces its value
/// without moving the entry, the same way assigning to an existing property of
/// an object keeps its position.
#[derive(Clone)]
pub struct OrderedMap<V> {
    entries: IndexMap<String, V, FxBuildHasher>,
}

impl<V> OrderedMap<V> {
    pub fn new() -> Self {
        Self {
            entries: IndexMap::default(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: IndexMap::with_capacity_and_hasher(capacity, FxBuildHasher),
        }
    }

    /// Insert `value` under `key`, returning the previous value if the key was
    /// already present. Existing keys keep their original position.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<V>) -> Option<V> {
        self.entries.insert(key.into(), value.into())
    }

    /// Builder form of [`OrderedMap::insert`].
    pub fn with(mut self, key: impl Into<String>, value: impl Into<V>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&V> {
        self.entries.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn iter(&self) -> Iter<'_, V> {
        Iter {
            inner: self.entries.iter(),
        }
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<V> Default for OrderedMap<V> {
    fn default() -> Self {
        Self::new()
    }
}

/// Two maps are equal only when they hold the same entries in the same order,
/// since order is part of what gets rendered.
impl<V: PartialEq> PartialEq for OrderedMap<V> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<V: Debug> Debug for OrderedMap<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K: Into<String>, T: Into<V>, V> FromIterator<(K, T)> for OrderedMap<V> {
    fn from_iter<I: IntoIterator<Item = (K, T)>>(iter: I) -> Self {
        let mut map = OrderedMap::new();
        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }
}

impl<'a, V> IntoIterator for &'a OrderedMap<V> {
    type Item = (&'a str, &'a V);
    type IntoIter = Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Borrowing iterator over the entries of an [`OrderedMap`], in insertion order.
pub struct Iter<'a, V> {
    inner: indexmap::map::Iter<'a, String, V>,
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (&'a str, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(key, value)| (key.as_str(), value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<V> ExactSizeIterator for Iter<'_, V> {}
