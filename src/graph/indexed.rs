//! Index-visible graph facades
//!
//! [`IndexedGraph`] takes node indices from the caller. [`AutoIndexedGraph`]
//! derives them from an [`IndexProvider`] right before handing the node to the
//! engine. Both delegate all storage to a [`GraphStore`].

use super::comparer::IndexComparer;
use super::edge::Edge;
use super::error::GraphResult;
use super::node::Node;
use super::provider::IndexProvider;
use super::store::{GraphStore, StoreConfig};
use super::traits::{GraphRead, GraphWrite, IndexLookup};
use super::types::EdgeIndex;
use super::unindexed::UnindexedGraph;
use std::fmt;
use std::hash::Hash;

/// Graph whose node indices are chosen by the caller
///
/// ```rust
/// use indexed_graph::graph::{GraphRead, IndexedGraph};
///
/// let mut graph: IndexedGraph<&str, u32, f64> = IndexedGraph::new();
/// graph.add_node("a", 1).unwrap();
/// graph.add_node("b", 2).unwrap();
/// graph.add_edge(&"a", &"b", 0.5).unwrap();
///
/// graph.remove_node(&"a");
/// assert_eq!(graph.order(), 1);
/// assert_eq!(graph.size(), 0);
/// ```
pub struct IndexedGraph<I, N, E> {
    store: GraphStore<I, N, E>,
}

impl<I, N, E> IndexedGraph<I, N, E>
where
    I: Hash + Eq + Clone + fmt::Debug + 'static,
{
    pub fn new() -> Self {
        Self::from_store(GraphStore::new())
    }

    pub fn with_config(config: StoreConfig) -> Self {
        Self::from_store(GraphStore::with_config(config))
    }
}

impl<I, N, E> IndexedGraph<I, N, E>
where
    I: Clone + fmt::Debug + 'static,
{
    pub fn with_comparer<C>(comparer: C) -> Self
    where
        C: IndexComparer<I> + 'static,
    {
        Self::from_store(GraphStore::with_comparer(comparer))
    }

    pub fn from_store(store: GraphStore<I, N, E>) -> Self {
        IndexedGraph { store }
    }

    pub fn into_store(self) -> GraphStore<I, N, E> {
        self.store
    }

    pub fn add_node(&mut self, index: I, data: N) -> GraphResult<Node<I, N>> {
        self.store.add_node(index, data)
    }

    pub fn try_add_node(&mut self, index: I, data: N) -> Option<Node<I, N>> {
        self.store.try_add_node(index, data)
    }

    pub fn add_edge(&mut self, origin: &I, destination: &I, data: E) -> GraphResult<Edge<I, N, E>> {
        self.store.add_edge(origin, destination, data)
    }

    pub fn try_add_edge(&mut self, origin: &I, destination: &I, data: E) -> Option<Edge<I, N, E>> {
        self.store.try_add_edge(origin, destination, data)
    }

    pub fn add_edge_with_index(
        &mut self,
        index: EdgeIndex,
        origin: &I,
        destination: &I,
        data: E,
    ) -> GraphResult<Edge<I, N, E>> {
        self.store.add_edge_with_index(index, origin, destination, data)
    }

    pub fn try_add_edge_with_index(
        &mut self,
        index: EdgeIndex,
        origin: &I,
        destination: &I,
        data: E,
    ) -> Option<Edge<I, N, E>> {
        self.store.try_add_edge_with_index(index, origin, destination, data)
    }

    pub fn remove_node(&mut self, index: &I) -> Option<Node<I, N>> {
        self.store.remove_node(index)
    }

    pub fn remove_edge(&mut self, index: EdgeIndex) -> Option<Edge<I, N, E>> {
        self.store.remove_edge(index)
    }

    pub fn get_edge(&self, index: EdgeIndex) -> GraphResult<Edge<I, N, E>> {
        self.store.get_edge(index)
    }

    pub fn try_get_edge(&self, index: EdgeIndex) -> Option<Edge<I, N, E>> {
        self.store.try_get_edge(index)
    }

    pub fn contains_edge(&self, index: EdgeIndex) -> bool {
        self.store.contains_edge(index)
    }

    pub fn outgoing_edges(&self, index: &I) -> Vec<Edge<I, N, E>> {
        self.store.outgoing_edges(index)
    }

    pub fn incoming_edges(&self, index: &I) -> Vec<Edge<I, N, E>> {
        self.store.incoming_edges(index)
    }

    pub fn clone_with<FN, FE>(&self, node_fn: FN, edge_fn: FE) -> Self
    where
        FN: FnMut(&N) -> N,
        FE: FnMut(&E) -> E,
    {
        Self::from_store(self.store.clone_with(node_fn, edge_fn))
    }

    /// See [`GraphStore::transform`]
    pub fn transform<I2, N2, E2, FN, FE, FI>(
        &self,
        node_fn: FN,
        edge_fn: FE,
        index_fn: FI,
    ) -> GraphResult<IndexedGraph<I2, N2, E2>>
    where
        I2: Hash + Eq + Clone + fmt::Debug + 'static,
        FN: FnMut(&N) -> N2,
        FE: FnMut(&E) -> E2,
        FI: FnMut(&I) -> I2,
    {
        let store = self.store.transform(node_fn, edge_fn, index_fn)?;
        Ok(IndexedGraph::from_store(store))
    }

    /// See [`GraphStore::transform_with_comparer`]
    pub fn transform_with_comparer<I2, N2, E2, C, FN, FE, FI>(
        &self,
        node_fn: FN,
        edge_fn: FE,
        index_fn: FI,
        comparer: C,
    ) -> GraphResult<IndexedGraph<I2, N2, E2>>
    where
        I2: Clone + fmt::Debug + 'static,
        C: IndexComparer<I2> + 'static,
        FN: FnMut(&N) -> N2,
        FE: FnMut(&E) -> E2,
        FI: FnMut(&I) -> I2,
    {
        let store = self
            .store
            .transform_with_comparer(node_fn, edge_fn, index_fn, comparer)?;
        Ok(IndexedGraph::from_store(store))
    }

    /// Copy into a graph that hides node indices
    pub fn to_unindexed(&self) -> UnindexedGraph<N, E>
    where
        N: Clone,
        E: Clone,
    {
        UnindexedGraph::from_store(self.store.reindex_sequential(N::clone, E::clone))
    }
}

impl<I, N, E> Default for IndexedGraph<I, N, E>
where
    I: Hash + Eq + Clone + fmt::Debug + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<I, N, E> Clone for IndexedGraph<I, N, E>
where
    I: Clone + fmt::Debug + 'static,
    N: Clone,
    E: Clone,
{
    fn clone(&self) -> Self {
        Self::from_store(self.store.clone())
    }
}

impl<I: fmt::Debug, N, E> fmt::Debug for IndexedGraph<I, N, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IndexedGraph").field("store", &self.store).finish()
    }
}

impl<I, N, E> GraphRead for IndexedGraph<I, N, E>
where
    I: Clone + fmt::Debug + 'static,
{
    type Index = I;
    type NodeData = N;
    type EdgeData = E;

    fn store(&self) -> &GraphStore<I, N, E> {
        &self.store
    }
}

impl<I, N, E> GraphWrite for IndexedGraph<I, N, E>
where
    I: Clone + fmt::Debug + 'static,
{
    fn store_mut(&mut self) -> &mut GraphStore<I, N, E> {
        &mut self.store
    }
}

impl<I, N, E> IndexLookup for IndexedGraph<I, N, E> where I: Clone + fmt::Debug + 'static {}

/// Graph whose node indices come from an [`IndexProvider`]
///
/// ```rust
/// use indexed_graph::graph::{AutoIndexedGraph, GraphRead, IndexLookup, Stateless};
///
/// let mut graph = AutoIndexedGraph::new(Stateless::new(|name: &String| name.to_lowercase()));
/// graph.add_node("Alice".to_string()).unwrap();
/// graph.add_node("Bob".to_string()).unwrap();
/// graph.add_edge(&"alice".to_string(), &"bob".to_string(), ()).unwrap();
///
/// assert!(graph.add_node("alice".to_string()).is_err());
/// assert!(graph.contains_index(&"bob".to_string()));
/// assert_eq!(graph.size(), 1);
/// ```
pub struct AutoIndexedGraph<I, N, E, P> {
    store: GraphStore<I, N, E>,
    provider: P,
}

impl<I, N, E, P> AutoIndexedGraph<I, N, E, P>
where
    I: Hash + Eq + Clone + fmt::Debug + 'static,
    P: IndexProvider<I, N>,
{
    pub fn new(provider: P) -> Self {
        Self::from_parts(GraphStore::new(), provider)
    }

    pub fn with_config(provider: P, config: StoreConfig) -> Self {
        Self::from_parts(GraphStore::with_config(config), provider)
    }
}

impl<I, N, E, P> AutoIndexedGraph<I, N, E, P>
where
    I: Clone + fmt::Debug + 'static,
    P: IndexProvider<I, N>,
{
    pub fn with_comparer<C>(provider: P, comparer: C) -> Self
    where
        C: IndexComparer<I> + 'static,
    {
        Self::from_parts(GraphStore::with_comparer(comparer), provider)
    }

    pub(crate) fn from_parts(store: GraphStore<I, N, E>, provider: P) -> Self {
        AutoIndexedGraph { store, provider }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Add a node under the index the provider assigns to `data`
    ///
    /// Fails with [`GraphError::DuplicateIndex`](super::GraphError::DuplicateIndex)
    /// if that index is already present.
    pub fn add_node(&mut self, data: N) -> GraphResult<Node<I, N>> {
        let index = self.provider.next_index(&data);
        self.store.add_node(index, data)
    }

    pub fn try_add_node(&mut self, data: N) -> Option<Node<I, N>> {
        let index = self.provider.next_index(&data);
        self.store.try_add_node(index, data)
    }

    pub fn add_edge(&mut self, origin: &I, destination: &I, data: E) -> GraphResult<Edge<I, N, E>> {
        self.store.add_edge(origin, destination, data)
    }

    pub fn try_add_edge(&mut self, origin: &I, destination: &I, data: E) -> Option<Edge<I, N, E>> {
        self.store.try_add_edge(origin, destination, data)
    }

    pub fn remove_node(&mut self, index: &I) -> Option<Node<I, N>> {
        self.store.remove_node(index)
    }

    pub fn remove_edge(&mut self, index: EdgeIndex) -> Option<Edge<I, N, E>> {
        self.store.remove_edge(index)
    }

    pub fn get_edge(&self, index: EdgeIndex) -> GraphResult<Edge<I, N, E>> {
        self.store.get_edge(index)
    }

    pub fn try_get_edge(&self, index: EdgeIndex) -> Option<Edge<I, N, E>> {
        self.store.try_get_edge(index)
    }

    pub fn clone_with<FN, FE>(&self, node_fn: FN, edge_fn: FE) -> Self
    where
        FN: FnMut(&N) -> N,
        FE: FnMut(&E) -> E,
        P: Clone,
    {
        Self::from_parts(self.store.clone_with(node_fn, edge_fn), self.provider.clone())
    }

    /// Copy into a graph that takes indices from the caller
    pub fn to_manual(&self) -> IndexedGraph<I, N, E>
    where
        N: Clone,
        E: Clone,
    {
        IndexedGraph::from_store(self.store.clone())
    }

    /// Copy into a graph that hides node indices
    pub fn to_unindexed(&self) -> UnindexedGraph<N, E>
    where
        N: Clone,
        E: Clone,
    {
        UnindexedGraph::from_store(self.store.reindex_sequential(N::clone, E::clone))
    }
}

impl<I, N, E, P> Clone for AutoIndexedGraph<I, N, E, P>
where
    I: Clone + fmt::Debug + 'static,
    N: Clone,
    E: Clone,
    P: Clone,
{
    fn clone(&self) -> Self {
        AutoIndexedGraph {
            store: self.store.clone(),
            provider: self.provider.clone(),
        }
    }
}

impl<I: fmt::Debug, N, E, P: fmt::Debug> fmt::Debug for AutoIndexedGraph<I, N, E, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AutoIndexedGraph")
            .field("store", &self.store)
            .field("provider", &self.provider)
            .finish()
    }
}

impl<I, N, E, P> GraphRead for AutoIndexedGraph<I, N, E, P>
where
    I: Clone + fmt::Debug + 'static,
{
    type Index = I;
    type NodeData = N;
    type EdgeData = E;

    fn store(&self) -> &GraphStore<I, N, E> {
        &self.store
    }
}

impl<I, N, E, P> GraphWrite for AutoIndexedGraph<I, N, E, P>
where
    I: Clone + fmt::Debug + 'static,
{
    fn store_mut(&mut self) -> &mut GraphStore<I, N, E> {
        &mut self.store
    }
}

impl<I, N, E, P> IndexLookup for AutoIndexedGraph<I, N, E, P> where I: Clone + fmt::Debug + 'static {}
