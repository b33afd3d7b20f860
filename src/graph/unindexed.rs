//! Graph facade that hides node indices
//!
//! Nodes are addressed purely through their handles. Internally the engine
//! still keys them by a `u64` drawn from an incremental provider.

use super::edge::Edge;
use super::error::GraphResult;
use super::indexed::{AutoIndexedGraph, IndexedGraph};
use super::node::Node;
use super::provider::{Incremental, IndexProvider, Sequential};
use super::store::{GraphStore, StoreConfig};
use super::traits::{GraphRead, GraphWrite};
use super::comparer::DefaultComparer;
use std::fmt;
use std::hash::Hash;
use std::rc::Rc;

/// Graph addressed through node handles only
///
/// ```rust
/// use indexed_graph::graph::{GraphRead, GraphWrite, UnindexedGraph};
///
/// let mut graph = UnindexedGraph::new();
/// let a = graph.add_node("a");
/// let b = graph.add_node("b");
/// graph.add_edge(&a, &b, 1.0).unwrap();
///
/// assert!(graph.remove_node_handle(&a));
/// assert_eq!(graph.size(), 0);
/// assert!(!a.is_valid());
/// assert_eq!(*a.data(), "a");
/// ```
pub struct UnindexedGraph<N, E> {
    store: GraphStore<u64, N, E>,
    indices: Sequential,
}

impl<N, E> UnindexedGraph<N, E> {
    pub fn new() -> Self {
        Self::with_config(StoreConfig::default())
    }

    pub fn with_config(config: StoreConfig) -> Self {
        UnindexedGraph {
            store: GraphStore::with_config(config),
            indices: Incremental::sequential(0),
        }
    }

    /// Wrap a store whose nodes occupy indices `0..order`
    pub(crate) fn from_store(store: GraphStore<u64, N, E>) -> Self {
        let start = store.order() as u64;
        UnindexedGraph {
            store,
            indices: Incremental::sequential(start),
        }
    }

    pub fn add_node(&mut self, data: N) -> Node<u64, N> {
        let mut index = self.indices.advance();
        while self.store.contains_node(&index) {
            index = self.indices.advance();
        }
        self.store.insert_node(index, data)
    }

    /// Add an edge between two live nodes of this graph
    ///
    /// Fails with [`GraphError::NodeNotFound`](super::GraphError::NodeNotFound)
    /// for a removed or foreign handle.
    pub fn add_edge(
        &mut self,
        origin: &Node<u64, N>,
        destination: &Node<u64, N>,
        data: E,
    ) -> GraphResult<Edge<u64, N, E>> {
        self.store.connect(origin, destination, data)
    }

    pub fn try_add_edge(
        &mut self,
        origin: &Node<u64, N>,
        destination: &Node<u64, N>,
        data: E,
    ) -> Option<Edge<u64, N, E>> {
        self.store.try_connect(origin, destination, data)
    }

    pub fn clone_with<FN, FE>(&self, node_fn: FN, edge_fn: FE) -> Self
    where
        FN: FnMut(&N) -> N,
        FE: FnMut(&E) -> E,
    {
        UnindexedGraph {
            store: self.store.clone_with(node_fn, edge_fn),
            indices: self.indices,
        }
    }

    /// Copy into an auto-indexed graph, asking `provider` for every node's index
    ///
    /// Fails with [`GraphError::DuplicateIndex`](super::GraphError::DuplicateIndex)
    /// if the provider assigns equal indices to two nodes.
    pub fn to_indexed<I, P>(&self, mut provider: P) -> GraphResult<AutoIndexedGraph<I, N, E, P>>
    where
        I: Hash + Eq + Clone + fmt::Debug + 'static,
        P: IndexProvider<I, N>,
        N: Clone,
        E: Clone,
    {
        let store = self.store.rebuild(
            Rc::new(DefaultComparer),
            |_, data| provider.next_index(data),
            N::clone,
            E::clone,
        )?;
        Ok(AutoIndexedGraph::from_parts(store, provider))
    }

    /// Copy into a graph with caller-chosen indices derived from each payload
    pub fn to_manual<I, F>(&self, mut index_fn: F) -> GraphResult<IndexedGraph<I, N, E>>
    where
        I: Hash + Eq + Clone + fmt::Debug + 'static,
        F: FnMut(&N) -> I,
        N: Clone,
        E: Clone,
    {
        let store = self.store.rebuild(
            Rc::new(DefaultComparer),
            |_, data| index_fn(data),
            N::clone,
            E::clone,
        )?;
        Ok(IndexedGraph::from_store(store))
    }
}

impl<N, E> Default for UnindexedGraph<N, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: Clone, E: Clone> Clone for UnindexedGraph<N, E> {
    fn clone(&self) -> Self {
        self.clone_with(N::clone, E::clone)
    }
}

impl<N, E> fmt::Debug for UnindexedGraph<N, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UnindexedGraph")
            .field("store", &self.store)
            .finish_non_exhaustive()
    }
}

impl<N, E> GraphRead for UnindexedGraph<N, E> {
    type Index = u64;
    type NodeData = N;
    type EdgeData = E;

    fn store(&self) -> &GraphStore<u64, N, E> {
        &self.store
    }
}

impl<N, E> GraphWrite for UnindexedGraph<N, E> {
    fn store_mut(&mut self) -> &mut GraphStore<u64, N, E> {
        &mut self.store
    }
}
