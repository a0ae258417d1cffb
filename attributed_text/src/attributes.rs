// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt::{self, Debug};
use core::hash::Hash;

use hashbrown::DefaultHashBuilder;
use indexmap::IndexMap;

/// An insertion-ordered map of attribute keys to values.
///
/// Writing a key that is already present replaces its value in place (last write wins) without
/// moving it. Equality ignores ordering: two maps are equal when they hold the same keys with
/// equal values.
#[derive(Clone)]
pub struct Attributes<K, V> {
    map: IndexMap<K, V, DefaultHashBuilder>,
}

impl<K, V> Default for Attributes<K, V> {
    fn default() -> Self {
        Self {
            map: IndexMap::with_hasher(DefaultHashBuilder::default()),
        }
    }
}

impl<K: Hash + Eq, V> Attributes<K, V> {
    /// Creates an empty attribute map.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `value` for `key`, returning the previous value if there was one.
    #[inline]
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        self.map.insert(key, value)
    }

    /// Builder form of [`insert`](Self::insert).
    #[inline]
    pub fn with(mut self, key: K, value: V) -> Self {
        self.map.insert(key, value);
        self
    }

    /// Returns the value stored for `key`.
    #[inline]
    pub fn get(&self, key: &K) -> Option<&V> {
        self.map.get(key)
    }

    /// Removes `key`, preserving the order of the remaining entries.
    #[inline]
    pub fn remove(&mut self, key: &K) -> Option<V> {
        self.map.shift_remove(key)
    }

    /// Returns `true` if `key` is present.
    #[inline]
    pub fn contains_key(&self, key: &K) -> bool {
        self.map.contains_key(key)
    }

    /// The number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns `true` if there are no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Iterates over the entries in insertion order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&K, &V)> {
        self.map.iter()
    }

    /// Iterates over the keys in insertion order.
    pub fn keys(&self) -> impl ExactSizeIterator<Item = &K> {
        self.map.keys()
    }

    /// Removes all entries, retaining the allocated storage.
    #[inline]
    pub fn clear(&mut self) {
        self.map.clear();
    }
}

impl<K: Hash + Eq + Clone, V: Clone> Attributes<K, V> {
    /// Unions `other` into `self`; values from `other` win on conflicting keys.
    pub fn extend_from(&mut self, other: &Self) {
        for (key, value) in other.iter() {
            self.map.insert(key.clone(), value.clone());
        }
    }

    /// Returns a copy of `self` with `other` layered on top.
    #[must_use]
    pub fn merged(&self, other: &Self) -> Self {
        let mut merged = self.clone();
        merged.extend_from(other);
        merged
    }
}

impl<K: Hash + Eq, V: PartialEq> PartialEq for Attributes<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.map == other.map
    }
}

impl<K: Hash + Eq, V: Eq> Eq for Attributes<K, V> {}

impl<K: Debug, V: Debug> Debug for Attributes<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.map.iter()).finish()
    }
}

impl<K: Hash + Eq, V> FromIterator<(K, V)> for Attributes<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attributes = Self::new();
        attributes.extend(iter);
        attributes
    }
}

impl<K: Hash + Eq, V> Extend<(K, V)> for Attributes<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.map.insert(key, value);
        }
    }
}
