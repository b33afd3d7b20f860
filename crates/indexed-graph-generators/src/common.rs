//! Shared graph assembly for generators

use indexed_graph::{GraphRead, GraphResult, IndexedGraph, StoreConfig};
use std::fmt;
use std::hash::Hash;
use tracing::debug;

/// Largest node or edge count reserved up front; larger graphs grow as they build
pub(crate) const CAPACITY_HINT_LIMIT: usize = 1 << 16;

/// Accumulates nodes and edges, asking the caller's closures for payloads
pub(crate) struct Builder<I, N, E, FN, FE> {
    graph: IndexedGraph<I, N, E>,
    node_data: FN,
    edge_data: FE,
}

impl<I, N, E, FN, FE> Builder<I, N, E, FN, FE>
where
    I: Hash + Eq + Clone + fmt::Debug + 'static,
    FN: FnMut(&I) -> N,
    FE: FnMut(&I, &I) -> E,
{
    pub(crate) fn new(order: usize, size: usize, node_data: FN, edge_data: FE) -> Self {
        let config = StoreConfig {
            node_capacity: order.min(CAPACITY_HINT_LIMIT),
            edge_capacity: size.min(CAPACITY_HINT_LIMIT),
            ..StoreConfig::default()
        };
        Self {
            graph: IndexedGraph::with_config(config),
            node_data,
            edge_data,
        }
    }

    pub(crate) fn node(&mut self, index: I) -> GraphResult<()> {
        let data = (self.node_data)(&index);
        self.graph.add_node(index, data)?;
        Ok(())
    }

    pub(crate) fn edge(&mut self, origin: &I, destination: &I) -> GraphResult<()> {
        let data = (self.edge_data)(origin, destination);
        self.graph.add_edge(origin, destination, data)?;
        Ok(())
    }

    pub(crate) fn finish(self, topology: &str) -> IndexedGraph<I, N, E> {
        debug!(
            topology,
            order = self.graph.order(),
            size = self.graph.size(),
            "generated graph"
        );
        self.graph
    }
}
