//! Memoization of resolution results
//!
//! Entries live as long as the owning [`Resolver`](crate::Resolver) and are
//! never evicted.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;

use parking_lot::RwLock;

/// Unbounded insert-if-absent cache.
///
/// Reads hand out clones, so a caller mutating its result never changes
/// what the next caller sees.
pub struct ResultCache<K, V> {
    entries: RwLock<HashMap<K, V>>,
}

impl<K: Hash + Eq, V: Clone> ResultCache<K, V> {
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Get a copy of a cached value.
    pub fn get<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries.read().get(key).cloned()
    }

    /// Get a copy of the cached value, computing it on a miss.
    ///
    /// `compute` runs without holding the lock. If two callers race on the
    /// same key the first insert wins.
    pub fn get_or_insert_with<Q, F>(&self, key: &Q, compute: F) -> V
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ToOwned<Owned = K> + ?Sized,
        F: FnOnce() -> V,
    {
        if let Some(value) = self.get(key) {
            return value;
        }

        let value = compute();
        self.entries
            .write()
            .entry(key.to_owned())
            .or_insert(value)
            .clone()
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    pub fn clear(&self) {
        self.entries.write().clear();
    }
}

impl<K: Hash + Eq, V: Clone> Default for ResultCache<K, V> {
    fn default() -> Self {
        Self::new()
    }
}
