//! A string-keyed map that ignores case.
//!
//! Every key is folded on the way in and on the way out, so `"GPU"`, `"gpu"`
//! and `"Gpu"` all land in the same slot. The folded form is what the map
//! stores and what `keys()` yields.

use std::collections::hash_map::{self, HashMap};

/// Fold a key for case-insensitive comparison.
#[inline]
pub fn fold_key(key: &str) -> String {
    key.to_lowercase()
}

/// `HashMap<String, V>` with case-folded keys. No ordering over keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseInsensitiveMap<V> {
    inner: HashMap<String, V>,
}

impl<V> Default for CaseInsensitiveMap<V> {
    fn default() -> Self {
        Self {
            inner: HashMap::new(),
        }
    }
}

impl<V> CaseInsensitiveMap<V> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: HashMap::with_capacity(capacity),
        }
    }

    /// Insert a value, returning the one previously stored under the folded key.
    pub fn insert(&mut self, key: &str, value: V) -> Option<V> {
        self.inner.insert(fold_key(key), value)
    }

    pub fn get(&self, key: &str) -> Option<&V> {
        self.inner.get(&fold_key(key))
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.inner.contains_key(&fold_key(key))
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Folded keys.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.inner.keys().map(String::as_str)
    }

    pub fn values(&self) -> hash_map::Values<'_, String, V> {
        self.inner.values()
    }

    /// `(folded key, value)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.inner.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<V: Default> CaseInsensitiveMap<V> {
    pub fn get_or_default(&mut self, key: &str) -> &mut V {
        self.inner.entry(fold_key(key)).or_default()
    }
}

impl<K: AsRef<str>, V> FromIterator<(K, V)> for CaseInsensitiveMap<V> {
    /// Later pairs overwrite earlier ones whose keys fold to the same string.
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

impl<K: AsRef<str>, V> Extend<(K, V)> for CaseInsensitiveMap<V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key.as_ref(), value);
        }
    }
}
