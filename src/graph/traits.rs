//! Capability traits shared by the graph facades
//!
//! - [`GraphRead`]: counts, node/edge views, handle membership, adjacency
//! - [`GraphWrite`]: handle-based mutation, predicate removal, clear
//! - [`IndexLookup`]: lookup by node index
//!
//! Every facade is backed by a [`GraphStore`], so the provided methods simply
//! delegate to it. Code that should work with any flavour of graph (such as
//! topology generators) can be written against these traits.

use super::edge::Edge;
use super::error::GraphResult;
use super::node::Node;
use super::store::GraphStore;
use std::fmt;

pub trait GraphRead {
    type Index: Clone + fmt::Debug + 'static;
    type NodeData;
    type EdgeData;

    /// The backing engine
    fn store(&self) -> &GraphStore<Self::Index, Self::NodeData, Self::EdgeData>;

    /// Number of nodes
    fn order(&self) -> usize {
        self.store().order()
    }

    /// Number of edges
    fn size(&self) -> usize {
        self.store().size()
    }

    fn is_empty(&self) -> bool {
        self.store().is_empty()
    }

    /// Snapshot of all node handles
    fn nodes(&self) -> Vec<Node<Self::Index, Self::NodeData>> {
        self.store().nodes().cloned().collect()
    }

    /// Snapshot of all edge handles
    fn edges(&self) -> Vec<Edge<Self::Index, Self::NodeData, Self::EdgeData>> {
        self.store().edges().cloned().collect()
    }

    fn contains_node_handle(&self, node: &Node<Self::Index, Self::NodeData>) -> bool {
        self.store().contains_node_handle(node)
    }

    fn contains_edge_handle(&self, edge: &Edge<Self::Index, Self::NodeData, Self::EdgeData>) -> bool {
        self.store().contains_edge_handle(edge)
    }

    /// Edges leaving `node`; empty if the handle is not a live node of this graph
    fn outgoing(
        &self,
        node: &Node<Self::Index, Self::NodeData>,
    ) -> Vec<Edge<Self::Index, Self::NodeData, Self::EdgeData>> {
        if !self.contains_node_handle(node) {
            return Vec::new();
        }
        self.store().outgoing_edges(&node.raw_index())
    }

    /// Edges arriving at `node`; empty if the handle is not a live node of this graph
    fn incoming(
        &self,
        node: &Node<Self::Index, Self::NodeData>,
    ) -> Vec<Edge<Self::Index, Self::NodeData, Self::EdgeData>> {
        if !self.contains_node_handle(node) {
            return Vec::new();
        }
        self.store().incoming_edges(&node.raw_index())
    }
}

pub trait GraphWrite: GraphRead {
    fn store_mut(&mut self) -> &mut GraphStore<Self::Index, Self::NodeData, Self::EdgeData>;

    /// Add an edge between two live nodes of this graph
    fn connect(
        &mut self,
        origin: &Node<Self::Index, Self::NodeData>,
        destination: &Node<Self::Index, Self::NodeData>,
        data: Self::EdgeData,
    ) -> GraphResult<Edge<Self::Index, Self::NodeData, Self::EdgeData>> {
        self.store_mut().connect(origin, destination, data)
    }

    fn remove_node_handle(&mut self, node: &Node<Self::Index, Self::NodeData>) -> bool {
        self.store_mut().remove_node_handle(node)
    }

    fn remove_edge_handle(&mut self, edge: &Edge<Self::Index, Self::NodeData, Self::EdgeData>) -> bool {
        self.store_mut().remove_edge_handle(edge)
    }

    fn remove_nodes_where<F>(&mut self, predicate: F) -> usize
    where
        F: FnMut(&Self::NodeData) -> bool,
    {
        self.store_mut().remove_nodes_where(predicate)
    }

    fn remove_edges_where<F>(&mut self, predicate: F) -> usize
    where
        F: FnMut(&Self::EdgeData) -> bool,
    {
        self.store_mut().remove_edges_where(predicate)
    }

    fn clear(&mut self) {
        self.store_mut().clear()
    }
}

pub trait IndexLookup: GraphRead {
    fn contains_index(&self, index: &Self::Index) -> bool {
        self.store().contains_node(index)
    }

    fn get_node(&self, index: &Self::Index) -> GraphResult<Node<Self::Index, Self::NodeData>> {
        self.store().get_node(index)
    }

    fn try_get_node(&self, index: &Self::Index) -> Option<Node<Self::Index, Self::NodeData>> {
        self.store().try_get_node(index)
    }

    /// Snapshot of all node indices
    fn indices(&self) -> Vec<Self::Index> {
        self.store().indices().cloned().collect()
    }
}
