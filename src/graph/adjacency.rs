//! Key to value-set index used for outgoing and incoming edge bookkeeping
//!
//! Buckets are created lazily on first insert and dropped as soon as they
//! become empty, so a long-running graph with heavy churn never accumulates
//! empty entries.

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

#[derive(Debug, Clone)]
pub struct AdjacencyIndex<K, V> {
    /// Key -> Set of values (never empty)
    buckets: HashMap<K, HashSet<V>>,

    /// Returned for unknown keys
    empty: HashSet<V>,
}

impl<K, V> AdjacencyIndex<K, V>
where
    K: Hash + Eq,
    V: Hash + Eq,
{
    pub fn new() -> Self {
        Self {
            buckets: HashMap::new(),
            empty: HashSet::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buckets: HashMap::with_capacity(capacity),
            empty: HashSet::new(),
        }
    }

    /// Values stored under `key`; an empty set for unknown keys
    pub fn get(&self, key: &K) -> &HashSet<V> {
        self.buckets.get(key).unwrap_or(&self.empty)
    }

    /// Insert a pair. Returns false if it was already present.
    pub fn add(&mut self, key: K, value: V) -> bool {
        self.buckets.entry(key).or_default().insert(value)
    }

    /// Remove `value` from `key`'s bucket, dropping the bucket if it empties
    pub fn remove_from(&mut self, key: &K, value: &V) -> bool {
        let Some(values) = self.buckets.get_mut(key) else {
            return false;
        };
        let removed = values.remove(value);
        if values.is_empty() {
            self.buckets.remove(key);
        }
        removed
    }

    /// Remove every value of `key` matching `predicate`. Returns the count removed.
    pub fn remove_where_in<F>(&mut self, key: &K, mut predicate: F) -> usize
    where
        F: FnMut(&V) -> bool,
    {
        let Some(values) = self.buckets.get_mut(key) else {
            return 0;
        };
        let before = values.len();
        values.retain(|value| !predicate(value));
        let removed = before - values.len();
        if values.is_empty() {
            self.buckets.remove(key);
        }
        removed
    }

    /// Remove every pair matching `predicate` across all keys
    pub fn remove_where<F>(&mut self, mut predicate: F) -> usize
    where
        F: FnMut(&K, &V) -> bool,
    {
        let mut removed = 0;
        self.buckets.retain(|key, values| {
            let before = values.len();
            values.retain(|value| !predicate(key, value));
            removed += before - values.len();
            !values.is_empty()
        });
        removed
    }

    /// Whether a (non-empty) bucket exists for `key`
    pub fn contains_key(&self, key: &K) -> bool {
        self.buckets.contains_key(key)
    }

    pub fn contains(&self, key: &K, value: &V) -> bool {
        self.get(key).contains(value)
    }

    /// Number of tracked keys
    pub fn key_count(&self) -> usize {
        self.buckets.len()
    }

    /// Number of stored pairs
    pub fn len(&self) -> usize {
        self.buckets.values().map(HashSet::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.buckets.keys()
    }

    pub fn clear(&mut self) {
        self.buckets.clear();
    }
}

impl<K, V> Default for AdjacencyIndex<K, V>
where
    K: Hash + Eq,
    V: Hash + Eq,
{
    fn default() -> Self {
        Self::new()
    }
}
