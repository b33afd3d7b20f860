//! Topology generators for indexed-graph
//!
//! Each generator takes validated options plus two closures: one producing a
//! node's payload from its index, one producing an edge's payload from its
//! origin and destination indices. The result is an ordinary
//! [`IndexedGraph`](indexed_graph::IndexedGraph) built through the public API.
//!
//! ```rust
//! use indexed_graph::GraphRead;
//! use indexed_graph_generators::{ring, RingOptions};
//!
//! let options = RingOptions::new(4).unwrap();
//! let graph = ring(&options, |i| format!("n{}", i), |_, _| 1.0).unwrap();
//! assert_eq!(graph.order(), 4);
//! assert_eq!(graph.size(), 4);
//! ```

mod common;
pub mod lattice;
pub mod options;
pub mod partite;
pub mod path;
pub mod radial;

pub use lattice::{grid, tree};
pub use options::{
    BipartiteOptions, CompleteOptions, DiskOptions, GridOptions, LineOptions,
    MultipartiteOptions, RingOptions, StarOptions, TreeOptions,
};
pub use partite::{bipartite, complete, multipartite};
pub use path::{line, ring};
pub use radial::{disk, star};
