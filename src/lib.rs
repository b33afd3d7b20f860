//! Indexed Graph
//!
//! A generic, in-memory directed graph container. Nodes and edges carry
//! arbitrary payloads, are looked up by application-assigned or generated
//! indices, and can be added and removed with consistent adjacency bookkeeping.
//!
//! # Architecture
//!
//! - [`graph::GraphStore`]: the engine owning node/edge records and both
//!   adjacency maps
//! - [`graph::IndexedGraph`], [`graph::AutoIndexedGraph`],
//!   [`graph::UnindexedGraph`]: facades choosing how node indices are produced
//! - [`graph::Node`], [`graph::Edge`]: handles that outlive their record with
//!   read-only, frozen payloads
//! - [`graph::GraphRead`], [`graph::GraphWrite`], [`graph::IndexLookup`]:
//!   capabilities shared by every facade
//!
//! The container is single-threaded. Callers sharing a graph across threads
//! must serialize access themselves.
//!
//! ## Example Usage
//!
//! ```rust
//! use indexed_graph::graph::{GraphRead, IndexLookup, IndexedGraph};
//!
//! let mut graph: IndexedGraph<u32, i64, i64> = IndexedGraph::new();
//! let a = graph.add_node(0, 10).unwrap();
//! graph.add_node(1, 20).unwrap();
//! graph.add_edge(&0, &1, 5).unwrap();
//!
//! let edges = graph.edges();
//! let edge = &edges[0];
//! assert_eq!(*edge.origin().unwrap().data(), 10);
//! assert_eq!(*edge.destination().unwrap().data(), 20);
//!
//! // Removing a node removes its edges and invalidates its handle
//! graph.remove_node(&0);
//! assert_eq!(graph.size(), 0);
//! assert!(graph.contains_index(&1));
//! assert!(!a.is_valid());
//! assert_eq!(*a.data(), 10);
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]

pub mod graph;

// Re-export main types for convenience
pub use graph::{
    AutoIndexedGraph, Edge, EdgeIndex, GraphError, GraphRead, GraphResult, GraphStore,
    GraphWrite, IndexLookup, IndexedGraph, Node, StoreConfig, UnindexedGraph,
};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}
