//! Pluggable node index equality
//!
//! A graph decides whether two node indices are "the same" through an
//! [`IndexComparer`]. The default is plain value equality; custom comparers may
//! collapse distinct values into one equivalence class (case-insensitive names,
//! bucketed integers, ...).

use rustc_hash::FxHasher;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::rc::Rc;

/// Equality and hashing of node indices
///
/// Implementations must keep the two consistent: indices that compare equal
/// must produce the same hash.
pub trait IndexComparer<I> {
    fn equals(&self, a: &I, b: &I) -> bool;

    fn hash_index(&self, index: &I) -> u64;
}

/// Comparer shared between a graph and the keys of its maps
pub type SharedComparer<I> = Rc<dyn IndexComparer<I>>;

/// Value equality with an Fx hash
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultComparer;

impl<I: Hash + Eq> IndexComparer<I> for DefaultComparer {
    fn equals(&self, a: &I, b: &I) -> bool {
        a == b
    }

    fn hash_index(&self, index: &I) -> u64 {
        let mut hasher = FxHasher::default();
        index.hash(&mut hasher);
        hasher.finish()
    }
}

/// Compares indices by a projected key
///
/// ```rust
/// use indexed_graph::graph::{IndexComparer, KeyComparer};
///
/// let case_insensitive = KeyComparer::new(|name: &String| name.to_lowercase());
/// assert!(case_insensitive.equals(&"Alice".to_string(), &"ALICE".to_string()));
/// ```
#[derive(Clone, Copy)]
pub struct KeyComparer<F> {
    key: F,
}

impl<F> KeyComparer<F> {
    pub fn new(key: F) -> Self {
        Self { key }
    }
}

impl<F> fmt::Debug for KeyComparer<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyComparer").finish_non_exhaustive()
    }
}

impl<I, K, F> IndexComparer<I> for KeyComparer<F>
where
    F: Fn(&I) -> K,
    K: Hash + Eq,
{
    fn equals(&self, a: &I, b: &I) -> bool {
        (self.key)(a) == (self.key)(b)
    }

    fn hash_index(&self, index: &I) -> u64 {
        let mut hasher = FxHasher::default();
        (self.key)(index).hash(&mut hasher);
        hasher.finish()
    }
}

/// A node index bound to the comparer of the graph that owns it
///
/// Used as the key type of the node map and of both adjacency maps, so every
/// lookup honours the graph's notion of index equality.
pub(crate) struct IndexKey<I> {
    index: I,
    comparer: SharedComparer<I>,
}

impl<I> IndexKey<I> {
    pub(crate) fn new(index: I, comparer: SharedComparer<I>) -> Self {
        Self { index, comparer }
    }

    pub(crate) fn index(&self) -> &I {
        &self.index
    }
}

impl<I: Clone> Clone for IndexKey<I> {
    fn clone(&self) -> Self {
        Self {
            index: self.index.clone(),
            comparer: Rc::clone(&self.comparer),
        }
    }
}

impl<I> PartialEq for IndexKey<I> {
    fn eq(&self, other: &Self) -> bool {
        self.comparer.equals(&self.index, &other.index)
    }
}

impl<I> Eq for IndexKey<I> {}

impl<I> Hash for IndexKey<I> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.comparer.hash_index(&self.index));
    }
}

impl<I: fmt::Debug> fmt::Debug for IndexKey<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.index.fmt(f)
    }
}
