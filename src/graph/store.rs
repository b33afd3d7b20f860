//! In-memory graph storage engine
//!
//! The engine is the only owner of node and edge records. It keeps:
//! - nodes: node index -> node handle (keyed under the graph's comparer)
//! - edges: EdgeIndex -> edge handle
//! - outgoing: node index -> set of EdgeIndex whose origin is that node
//! - incoming: node index -> set of EdgeIndex whose destination is that node
//!
//! Removing a node removes every incident edge first, so a live edge always
//! connects live nodes. Removed records are invalidated in place; handles held
//! by callers keep the frozen payload.

use super::adjacency::AdjacencyIndex;
use super::comparer::{DefaultComparer, IndexComparer, IndexKey, SharedComparer};
use super::edge::Edge;
use super::error::{GraphError, GraphResult};
use super::node::Node;
use super::types::EdgeIndex;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::hash::Hash;
use std::rc::Rc;
use tracing::{debug, trace};

/// Storage configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Nodes to pre-allocate room for
    pub node_capacity: usize,
    /// Edges to pre-allocate room for
    pub edge_capacity: usize,
    /// First value handed out by the internal edge index counter
    pub first_edge_index: u64,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            node_capacity: 256,
            edge_capacity: 1024,
            first_edge_index: 0,
        }
    }
}

/// In-memory directed graph storage
///
/// `I` is the node index type, `N` the node payload and `E` the edge payload.
/// The store is single-threaded; callers that share it must serialize access.
pub struct GraphStore<I, N, E> {
    /// Node storage
    pub(crate) nodes: IndexMap<IndexKey<I>, Node<I, N>>,

    /// Edge storage
    pub(crate) edges: IndexMap<EdgeIndex, Edge<I, N, E>>,

    /// Outgoing edges for each node
    outgoing: AdjacencyIndex<IndexKey<I>, EdgeIndex>,

    /// Incoming edges for each node
    incoming: AdjacencyIndex<IndexKey<I>, EdgeIndex>,

    /// Node index equality
    comparer: SharedComparer<I>,

    /// Next candidate for an engine-assigned edge index
    pub(crate) next_edge_index: EdgeIndex,

    config: StoreConfig,
}

impl<I, N, E> GraphStore<I, N, E>
where
    I: Hash + Eq + Clone + fmt::Debug + 'static,
{
    /// Create a new empty graph store using value equality for node indices
    pub fn new() -> Self {
        Self::with_config(StoreConfig::default())
    }

    pub fn with_config(config: StoreConfig) -> Self {
        Self::from_parts(Rc::new(DefaultComparer), config)
    }
}

impl<I, N, E> GraphStore<I, N, E>
where
    I: Clone + fmt::Debug + 'static,
{
    /// Create a new empty graph store with a custom node index comparer
    pub fn with_comparer<C>(comparer: C) -> Self
    where
        C: IndexComparer<I> + 'static,
    {
        Self::from_parts(Rc::new(comparer), StoreConfig::default())
    }

    pub fn with_config_and_comparer<C>(config: StoreConfig, comparer: C) -> Self
    where
        C: IndexComparer<I> + 'static,
    {
        Self::from_parts(Rc::new(comparer), config)
    }

    pub(crate) fn from_parts(comparer: SharedComparer<I>, config: StoreConfig) -> Self {
        GraphStore {
            nodes: IndexMap::with_capacity(config.node_capacity),
            edges: IndexMap::with_capacity(config.edge_capacity),
            outgoing: AdjacencyIndex::with_capacity(config.node_capacity),
            incoming: AdjacencyIndex::with_capacity(config.node_capacity),
            comparer,
            next_edge_index: EdgeIndex::new(config.first_edge_index),
            config,
        }
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// The comparer deciding node index equality
    pub fn comparer(&self) -> SharedComparer<I> {
        Rc::clone(&self.comparer)
    }

    pub(crate) fn key(&self, index: I) -> IndexKey<I> {
        IndexKey::new(index, Rc::clone(&self.comparer))
    }

    /// Number of nodes
    pub fn order(&self) -> usize {
        self.nodes.len()
    }

    /// Number of edges
    pub fn size(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    // ------------------------------------------------------------------
    // Nodes
    // ------------------------------------------------------------------

    /// Add a node under `index`
    ///
    /// Fails with [`GraphError::DuplicateIndex`] if an equal index (under the
    /// comparer) is already present; the graph is left unchanged.
    pub fn add_node(&mut self, index: I, data: N) -> GraphResult<Node<I, N>> {
        let key = self.key(index);
        if self.nodes.contains_key(&key) {
            return Err(GraphError::duplicate(key.index()));
        }
        Ok(self.insert_node_key(key, data))
    }

    /// Like [`add_node`](Self::add_node) but returns `None` on a duplicate index
    pub fn try_add_node(&mut self, index: I, data: N) -> Option<Node<I, N>> {
        let key = self.key(index);
        if self.nodes.contains_key(&key) {
            return None;
        }
        Some(self.insert_node_key(key, data))
    }

    /// Insert without the duplicate check. Callers guarantee freshness.
    pub(crate) fn insert_node(&mut self, index: I, data: N) -> Node<I, N> {
        let key = self.key(index);
        self.insert_node_key(key, data)
    }

    fn insert_node_key(&mut self, key: IndexKey<I>, data: N) -> Node<I, N> {
        let node = Node::create(key.index().clone(), data);
        self.nodes.insert(key, node.clone());
        node
    }

    pub fn contains_node(&self, index: &I) -> bool {
        self.nodes.contains_key(&self.key(index.clone()))
    }

    /// Whether `node` is a live node of this graph instance
    pub fn contains_node_handle(&self, node: &Node<I, N>) -> bool {
        self.nodes
            .get(&self.key(node.raw_index()))
            .is_some_and(|stored| stored.same_record(node))
    }

    /// Get a node by index, failing with [`GraphError::NotFound`] on a miss
    pub fn get_node(&self, index: &I) -> GraphResult<Node<I, N>> {
        self.try_get_node(index)
            .ok_or_else(|| GraphError::not_found(index))
    }

    pub fn try_get_node(&self, index: &I) -> Option<Node<I, N>> {
        self.nodes.get(&self.key(index.clone())).cloned()
    }

    /// All node handles
    pub fn nodes(&self) -> impl Iterator<Item = &Node<I, N>> {
        self.nodes.values()
    }

    /// All node indices
    pub fn indices(&self) -> impl Iterator<Item = &I> {
        self.nodes.keys().map(IndexKey::index)
    }

    /// Remove a node and every edge incident to it
    ///
    /// Returns the invalidated handle, or `None` if the index is absent.
    pub fn remove_node(&mut self, index: &I) -> Option<Node<I, N>> {
        let key = self.key(index.clone());
        self.remove_node_key(&key)
    }

    /// Remove the node behind `node` if it is a live node of this graph
    pub fn remove_node_handle(&mut self, node: &Node<I, N>) -> bool {
        if !self.contains_node_handle(node) {
            return false;
        }
        let key = self.key(node.raw_index());
        self.remove_node_key(&key).is_some()
    }

    fn remove_node_key(&mut self, key: &IndexKey<I>) -> Option<Node<I, N>> {
        if !self.nodes.contains_key(key) {
            return None;
        }

        // A self loop sits in both sets; the union removes it once
        let incident: HashSet<EdgeIndex> = self
            .outgoing
            .get(key)
            .union(self.incoming.get(key))
            .copied()
            .collect();
        for edge_index in &incident {
            self.remove_edge(*edge_index);
        }

        let node = self.nodes.swap_remove(key)?;
        node.invalidate();
        debug!(index = ?key, cascaded_edges = incident.len(), "removed node");
        Some(node)
    }

    /// Remove every node whose payload matches `predicate`
    ///
    /// The predicate is evaluated over a snapshot of the current nodes before
    /// anything is removed. Returns the number of nodes removed.
    ///
    /// The payload handed to `predicate` stays borrowed while it runs: writing
    /// that same payload through a handle from inside the predicate fails with
    /// [`GraphError::DataBorrowed`]. Other payloads can be written freely.
    pub fn remove_nodes_where<F>(&mut self, mut predicate: F) -> usize
    where
        F: FnMut(&N) -> bool,
    {
        let matching: Vec<IndexKey<I>> = self
            .nodes
            .iter()
            .filter(|(_, node)| predicate(&node.data()))
            .map(|(key, _)| key.clone())
            .collect();

        let removed = matching
            .iter()
            .filter(|key| self.remove_node_key(key).is_some())
            .count();
        debug!(removed, remaining = self.order(), "removed nodes by predicate");
        removed
    }

    // ------------------------------------------------------------------
    // Edges
    // ------------------------------------------------------------------

    /// Add an edge between two existing nodes with an engine-assigned index
    ///
    /// Fails with [`GraphError::NodeNotFound`] if either endpoint is absent.
    pub fn add_edge(&mut self, origin: &I, destination: &I, data: E) -> GraphResult<Edge<I, N, E>> {
        let (origin, destination) = self.endpoints(origin, destination)?;
        let index = self.allocate_edge_index();
        Ok(self.insert_edge(index, origin, destination, data))
    }

    /// Add an edge under a caller-chosen index
    ///
    /// Fails with [`GraphError::NodeNotFound`] for a missing endpoint and with
    /// [`GraphError::DuplicateIndex`] if `index` is taken.
    pub fn add_edge_with_index(
        &mut self,
        index: EdgeIndex,
        origin: &I,
        destination: &I,
        data: E,
    ) -> GraphResult<Edge<I, N, E>> {
        let (origin, destination) = self.endpoints(origin, destination)?;
        if self.edges.contains_key(&index) {
            return Err(GraphError::duplicate(&index));
        }
        Ok(self.insert_edge(index, origin, destination, data))
    }

    /// Like [`add_edge`](Self::add_edge) but returns `None` on a missing endpoint
    pub fn try_add_edge(&mut self, origin: &I, destination: &I, data: E) -> Option<Edge<I, N, E>> {
        let origin = self.try_get_node(origin)?;
        let destination = self.try_get_node(destination)?;
        let index = self.allocate_edge_index();
        Some(self.insert_edge(index, origin, destination, data))
    }

    /// Returns `None` on a missing endpoint or a taken index
    pub fn try_add_edge_with_index(
        &mut self,
        index: EdgeIndex,
        origin: &I,
        destination: &I,
        data: E,
    ) -> Option<Edge<I, N, E>> {
        if self.edges.contains_key(&index) {
            return None;
        }
        let origin = self.try_get_node(origin)?;
        let destination = self.try_get_node(destination)?;
        Some(self.insert_edge(index, origin, destination, data))
    }

    /// Add an edge between two node handles of this graph
    pub fn connect(
        &mut self,
        origin: &Node<I, N>,
        destination: &Node<I, N>,
        data: E,
    ) -> GraphResult<Edge<I, N, E>> {
        for endpoint in [origin, destination] {
            if !self.contains_node_handle(endpoint) {
                return Err(GraphError::NodeNotFound(endpoint.debug_index()));
            }
        }
        let index = self.allocate_edge_index();
        Ok(self.insert_edge(index, origin.clone(), destination.clone(), data))
    }

    /// Like [`connect`](Self::connect) but returns `None` for a handle that is
    /// not a live node of this graph
    pub fn try_connect(
        &mut self,
        origin: &Node<I, N>,
        destination: &Node<I, N>,
        data: E,
    ) -> Option<Edge<I, N, E>> {
        if !self.contains_node_handle(origin) || !self.contains_node_handle(destination) {
            return None;
        }
        let index = self.allocate_edge_index();
        Some(self.insert_edge(index, origin.clone(), destination.clone(), data))
    }

    fn endpoints(&self, origin: &I, destination: &I) -> GraphResult<(Node<I, N>, Node<I, N>)> {
        let origin = self
            .try_get_node(origin)
            .ok_or_else(|| GraphError::node_not_found(origin))?;
        let destination = self
            .try_get_node(destination)
            .ok_or_else(|| GraphError::node_not_found(destination))?;
        Ok((origin, destination))
    }

    fn allocate_edge_index(&mut self) -> EdgeIndex {
        while self.edges.contains_key(&self.next_edge_index) {
            self.next_edge_index = self.next_edge_index.next();
        }
        self.next_edge_index
    }

    /// Insert an edge whose endpoints are live nodes of this graph
    pub(crate) fn insert_edge(
        &mut self,
        index: EdgeIndex,
        origin: Node<I, N>,
        destination: Node<I, N>,
        data: E,
    ) -> Edge<I, N, E> {
        let origin_key = self.key(origin.raw_index());
        let destination_key = self.key(destination.raw_index());
        trace!(?index, origin = ?origin_key, destination = ?destination_key, "adding edge");

        // Update adjacency lists
        self.outgoing.add(origin_key, index);
        self.incoming.add(destination_key, index);

        let edge = Edge::create(index, origin, destination, data);
        self.edges.insert(index, edge.clone());
        if index >= self.next_edge_index {
            self.next_edge_index = index.next();
        }
        edge
    }

    pub fn contains_edge(&self, index: EdgeIndex) -> bool {
        self.edges.contains_key(&index)
    }

    /// Whether `edge` is a live edge of this graph instance
    pub fn contains_edge_handle(&self, edge: &Edge<I, N, E>) -> bool {
        self.edges
            .get(&edge.raw_index())
            .is_some_and(|stored| stored.same_record(edge))
    }

    /// Get an edge by index, failing with [`GraphError::NotFound`] on a miss
    pub fn get_edge(&self, index: EdgeIndex) -> GraphResult<Edge<I, N, E>> {
        self.try_get_edge(index)
            .ok_or_else(|| GraphError::not_found(&index))
    }

    pub fn try_get_edge(&self, index: EdgeIndex) -> Option<Edge<I, N, E>> {
        self.edges.get(&index).cloned()
    }

    /// All edge handles
    pub fn edges(&self) -> impl Iterator<Item = &Edge<I, N, E>> {
        self.edges.values()
    }

    pub fn edge_indices(&self) -> impl Iterator<Item = EdgeIndex> + '_ {
        self.edges.keys().copied()
    }

    /// Remove an edge, returning its invalidated handle, or `None` if absent
    pub fn remove_edge(&mut self, index: EdgeIndex) -> Option<Edge<I, N, E>> {
        let edge = self.edges.swap_remove(&index)?;
        let (origin, destination) = edge.endpoints();
        let origin_key = self.key(origin.raw_index());
        let destination_key = self.key(destination.raw_index());

        // Remove from adjacency lists
        self.outgoing.remove_from(&origin_key, &index);
        self.incoming.remove_from(&destination_key, &index);

        edge.invalidate();
        trace!(?index, "removed edge");
        Some(edge)
    }

    /// Remove the edge behind `edge` if it is a live edge of this graph
    pub fn remove_edge_handle(&mut self, edge: &Edge<I, N, E>) -> bool {
        if !self.contains_edge_handle(edge) {
            return false;
        }
        self.remove_edge(edge.raw_index()).is_some()
    }

    /// Remove every edge whose payload matches `predicate`. Returns the count removed.
    ///
    /// Same borrowing rule as [`remove_nodes_where`](Self::remove_nodes_where).
    pub fn remove_edges_where<F>(&mut self, mut predicate: F) -> usize
    where
        F: FnMut(&E) -> bool,
    {
        let matching: Vec<EdgeIndex> = self
            .edges
            .iter()
            .filter(|(_, edge)| predicate(&edge.data()))
            .map(|(index, _)| *index)
            .collect();

        let removed = matching
            .into_iter()
            .filter(|index| self.remove_edge(*index).is_some())
            .count();
        debug!(removed, remaining = self.size(), "removed edges by predicate");
        removed
    }

    // ------------------------------------------------------------------
    // Adjacency
    // ------------------------------------------------------------------

    /// Edges leaving the node at `index`
    pub fn outgoing_edges(&self, index: &I) -> Vec<Edge<I, N, E>> {
        self.collect_edges(self.outgoing.get(&self.key(index.clone())))
    }

    /// Edges arriving at the node at `index`
    pub fn incoming_edges(&self, index: &I) -> Vec<Edge<I, N, E>> {
        self.collect_edges(self.incoming.get(&self.key(index.clone())))
    }

    pub fn out_degree(&self, index: &I) -> usize {
        self.outgoing.get(&self.key(index.clone())).len()
    }

    pub fn in_degree(&self, index: &I) -> usize {
        self.incoming.get(&self.key(index.clone())).len()
    }

    fn collect_edges(&self, indices: &HashSet<EdgeIndex>) -> Vec<Edge<I, N, E>> {
        indices
            .iter()
            .filter_map(|index| self.edges.get(index).cloned())
            .collect()
    }

    /// Number of nodes tracked by the outgoing and incoming adjacency maps
    pub fn adjacency_key_counts(&self) -> (usize, usize) {
        (self.outgoing.key_count(), self.incoming.key_count())
    }

    /// Invalidate every node and edge and empty the graph
    pub fn clear(&mut self) {
        for edge in self.edges.values() {
            edge.invalidate();
        }
        for node in self.nodes.values() {
            node.invalidate();
        }
        debug!(nodes = self.nodes.len(), edges = self.edges.len(), "cleared graph");

        self.nodes.clear();
        self.edges.clear();
        self.outgoing.clear();
        self.incoming.clear();
    }
}

impl<I, N, E> Default for GraphStore<I, N, E>
where
    I: Hash + Eq + Clone + fmt::Debug + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<I: fmt::Debug, N, E> fmt::Debug for GraphStore<I, N, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GraphStore")
            .field("order", &self.nodes.len())
            .field("size", &self.edges.len())
            .field("next_edge_index", &self.next_edge_index)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::comparer::KeyComparer;

    fn two_nodes() -> GraphStore<u32, i32, i32> {
        let mut store = GraphStore::new();
        store.add_node(0, 10).unwrap();
        store.add_node(1, 20).unwrap();
        store
    }

    #[test]
    fn test_config_missing_fields_use_defaults() {
        let config: StoreConfig = serde_json::from_str(r#"{"first_edge_index": 7}"#).unwrap();
        assert_eq!(config.node_capacity, 256);
        assert_eq!(config.edge_capacity, 1024);
        assert_eq!(config.first_edge_index, 7);

        let empty: StoreConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, StoreConfig::default());

        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(serde_json::from_str::<StoreConfig>(&json).unwrap(), config);
    }

    #[test]
    fn test_add_and_get_node() {
        let mut store: GraphStore<u32, &str, ()> = GraphStore::new();
        let node = store.add_node(7, "seven").unwrap();

        assert_eq!(store.order(), 1);
        assert!(store.contains_node(&7));
        assert!(store.contains_node_handle(&node));
        assert_eq!(*store.get_node(&7).unwrap().data(), "seven");
        assert_eq!(store.get_node(&7).unwrap(), node);
    }

    #[test]
    fn test_duplicate_node_index() {
        let mut store = two_nodes();
        let result = store.add_node(0, 99);
        assert_eq!(result.unwrap_err(), GraphError::DuplicateIndex("0".to_string()));
        assert_eq!(store.order(), 2);
        assert_eq!(*store.get_node(&0).unwrap().data(), 10);
        assert!(store.try_add_node(1, 99).is_none());
        assert!(store.try_add_node(2, 30).is_some());
    }

    #[test]
    fn test_get_missing_node() {
        let store = two_nodes();
        assert_eq!(store.get_node(&5).unwrap_err(), GraphError::NotFound("5".to_string()));
        assert!(store.try_get_node(&5).is_none());
    }

    #[test]
    fn test_edge_validation() {
        let mut store = two_nodes();

        let result = store.add_edge(&9, &1, 0);
        assert_eq!(result.unwrap_err(), GraphError::NodeNotFound("9".to_string()));

        let result = store.add_edge(&0, &9, 0);
        assert_eq!(result.unwrap_err(), GraphError::NodeNotFound("9".to_string()));

        assert!(store.try_add_edge(&0, &9, 0).is_none());
        assert_eq!(store.size(), 0);
        assert_eq!(store.adjacency_key_counts(), (0, 0));
    }

    #[test]
    fn test_adjacency_lists() {
        let mut store = two_nodes();
        store.add_node(2, 30).unwrap();

        store.add_edge(&0, &1, 1).unwrap();
        store.add_edge(&0, &2, 2).unwrap();
        store.add_edge(&1, &2, 3).unwrap();

        assert_eq!(store.outgoing_edges(&0).len(), 2);
        assert_eq!(store.out_degree(&1), 1);
        assert_eq!(store.in_degree(&1), 1);
        assert_eq!(store.out_degree(&2), 0);
        assert_eq!(store.incoming_edges(&2).len(), 2);
        assert!(store.outgoing_edges(&42).is_empty());
    }

    #[test]
    fn test_edge_index_allocation() {
        let mut store = two_nodes();
        let explicit = store.add_edge_with_index(EdgeIndex::new(0), &0, &1, 5).unwrap();
        assert_eq!(explicit.index(), Ok(EdgeIndex::new(0)));

        let auto = store.add_edge(&1, &0, 6).unwrap();
        assert_eq!(auto.index(), Ok(EdgeIndex::new(1)));

        let result = store.add_edge_with_index(EdgeIndex::new(1), &0, &1, 7);
        assert_eq!(result.unwrap_err(), GraphError::DuplicateIndex("EdgeIndex(1)".to_string()));
        assert!(store.try_add_edge_with_index(EdgeIndex::new(1), &0, &1, 7).is_none());

        store.add_edge_with_index(EdgeIndex::new(10), &0, &0, 8).unwrap();
        let next = store.add_edge(&0, &1, 9).unwrap();
        assert_eq!(next.index(), Ok(EdgeIndex::new(11)));
    }

    #[test]
    fn test_remove_node_cascades() {
        let mut store = two_nodes();
        store.add_node(2, 30).unwrap();
        let a_to_b = store.add_edge(&0, &1, 1).unwrap();
        let c_to_a = store.add_edge(&2, &0, 2).unwrap();
        let b_to_c = store.add_edge(&1, &2, 3).unwrap();

        let removed = store.remove_node(&0).unwrap();
        assert!(!removed.is_valid());
        assert!(!a_to_b.is_valid());
        assert!(!c_to_a.is_valid());
        assert!(b_to_c.is_valid());
        assert_eq!(store.size(), 1);
        assert_eq!(store.out_degree(&0), 0);
        assert_eq!(store.in_degree(&0), 0);
        assert_eq!(store.out_degree(&2), 0);
        assert_eq!(store.in_degree(&1), 0);
    }

    #[test]
    fn test_remove_node_with_self_loop() {
        let mut store = two_nodes();
        let self_loop = store.add_edge(&0, &0, 1).unwrap();
        store.add_edge(&0, &1, 2).unwrap();

        assert!(store.remove_node(&0).is_some());
        assert!(!self_loop.is_valid());
        assert_eq!(store.size(), 0);
        assert_eq!(store.adjacency_key_counts(), (0, 0));
    }

    #[test]
    fn test_remove_missing_node() {
        let mut store = two_nodes();
        store.add_edge(&0, &1, 1).unwrap();
        assert!(store.remove_node(&7).is_none());
        assert_eq!(store.order(), 2);
        assert_eq!(store.size(), 1);
    }

    #[test]
    fn test_remove_edge_twice() {
        let mut store = two_nodes();
        let edge = store.add_edge(&0, &1, 1).unwrap();
        let index = edge.index().unwrap();

        assert!(store.remove_edge(index).is_some());
        assert!(store.remove_edge(index).is_none());
        assert!(!store.remove_edge_handle(&edge));
        assert_eq!(store.adjacency_key_counts(), (0, 0));
    }

    #[test]
    fn test_stale_handle_not_contained() {
        let mut store = two_nodes();
        let old = store.get_node(&0).unwrap();
        store.remove_node(&0);
        let new = store.add_node(0, 11).unwrap();

        assert!(!old.is_valid());
        assert!(!store.contains_node_handle(&old));
        assert!(store.contains_node_handle(&new));
        assert!(!store.remove_node_handle(&old));
        assert_eq!(*old.data(), 10);
    }

    #[test]
    fn test_handles_not_portable() {
        let first = two_nodes();
        let second = two_nodes();
        let node = first.get_node(&0).unwrap();
        assert!(first.contains_node_handle(&node));
        assert!(!second.contains_node_handle(&node));
    }

    #[test]
    fn test_connect_rejects_foreign_handles() {
        let mut first = two_nodes();
        let second = two_nodes();
        let foreign = second.get_node(&0).unwrap();
        let local = first.get_node(&1).unwrap();

        let result = first.connect(&foreign, &local, 1);
        assert_eq!(result.unwrap_err(), GraphError::NodeNotFound("0".to_string()));
        assert!(first.connect(&local, &local, 1).is_ok());
    }

    #[test]
    fn test_remove_where() {
        let mut store: GraphStore<u32, u32, u32> = GraphStore::new();
        for i in 0..10 {
            store.add_node(i, i).unwrap();
        }
        for i in 0..9 {
            store.add_edge(&i, &(i + 1), i).unwrap();
        }

        assert_eq!(store.remove_edges_where(|d| d % 2 == 0), 5);
        assert_eq!(store.size(), 4);

        assert_eq!(store.remove_nodes_where(|d| *d >= 5), 5);
        assert_eq!(store.order(), 5);
        // Edges 1->2 and 3->4 remain
        assert_eq!(store.size(), 2);
        assert_eq!(store.remove_nodes_where(|_| false), 0);
    }

    #[test]
    fn test_clear() {
        let mut store = two_nodes();
        let edge = store.add_edge(&0, &1, 1).unwrap();
        let node = store.get_node(&1).unwrap();

        store.clear();
        assert_eq!(store.order(), 0);
        assert_eq!(store.size(), 0);
        assert!(!edge.is_valid());
        assert!(!node.is_valid());
        assert_eq!(store.adjacency_key_counts(), (0, 0));
    }

    #[test]
    fn test_custom_comparer() {
        let mut store: GraphStore<u32, &str, ()> =
            GraphStore::with_comparer(KeyComparer::new(|i: &u32| i / 2));
        store.add_node(0, "x").unwrap();
        assert!(store.add_node(1, "y").is_err());
        assert!(store.contains_node(&1));
        assert_eq!(*store.get_node(&1).unwrap().data(), "x");
        store.add_node(2, "z").unwrap();
        store.add_edge(&1, &3, ()).unwrap();
        assert_eq!(store.out_degree(&0), 1);
        assert_eq!(store.in_degree(&2), 1);
    }

    #[test]
    fn test_config() {
        let config = StoreConfig {
            first_edge_index: 100,
            ..StoreConfig::default()
        };
        let mut store: GraphStore<u32, (), ()> = GraphStore::with_config(config.clone());
        store.add_node(0, ()).unwrap();
        let edge = store.add_edge(&0, &0, ()).unwrap();
        assert_eq!(edge.index(), Ok(EdgeIndex::new(100)));
        assert_eq!(store.config(), &config);
    }

    #[test]
    fn test_guards_held_across_removal() {
        let mut store = two_nodes();
        let edge = store.add_edge(&0, &1, 5).unwrap();
        let node = store.get_node(&0).unwrap();

        let node_data = node.data();
        let edge_data = edge.data();
        assert!(store.remove_node(&0).is_some());
        assert_eq!(*node_data, 10);
        assert_eq!(*edge_data, 5);
        assert!(!node.is_valid());
        assert!(!edge.is_valid());
        assert_eq!(store.size(), 0);
        assert_eq!(store.adjacency_key_counts(), (0, 0));
    }

    #[test]
    fn test_guards_held_across_clear() {
        let mut store = two_nodes();
        let edge = store.add_edge(&0, &1, 5).unwrap();
        let node = store.get_node(&1).unwrap();

        let node_data = node.data();
        let edge_data = edge.data();
        store.clear();
        assert_eq!(*node_data, 20);
        assert_eq!(*edge_data, 5);
        assert!(store.is_empty());
        assert!(!edge.is_valid());
    }

    #[test]
    fn test_predicate_writing_through_handles() {
        let mut store: GraphStore<u32, u32, u32> = GraphStore::new();
        for i in 0..4 {
            store.add_node(i, i).unwrap();
        }
        let first = store.get_node(&0).unwrap();
        let last = store.get_node(&3).unwrap();

        let mut refused = 0;
        let removed = store.remove_nodes_where(|d| {
            if first.update_data(|x| *x += 10) == Err(GraphError::DataBorrowed) {
                refused += 1;
            }
            *d == 2
        });
        assert_eq!(removed, 1);
        // Only the visit of node 0 itself was refused
        assert_eq!(refused, 1);
        assert_eq!(*first.data(), 30);

        store.add_edge(&0, &3, 1).unwrap();
        let removed = store.remove_edges_where(|_| last.set_data(99).is_ok());
        assert_eq!(removed, 1);
        assert_eq!(*last.data(), 99);
    }
}
