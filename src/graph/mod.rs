//! Core graph container implementation
//!
//! This module implements the indexed graph storage engine with:
//! - Nodes and directed edges carrying arbitrary payloads
//! - Pluggable node index equality (comparers)
//! - Outgoing/incoming adjacency bookkeeping with cascading removal
//! - Handles that stay readable after their record is removed
//! - Facades for caller-indexed, provider-indexed and unindexed graphs
//! - Clone, transform and index-scheme conversion

pub mod adjacency;
pub mod comparer;
pub mod edge;
pub mod error;
pub mod indexed;
pub mod node;
pub mod provider;
pub mod store;
pub mod traits;
pub mod transform;
pub mod types;
pub mod unindexed;

// Re-export main types
pub use adjacency::AdjacencyIndex;
pub use comparer::{DefaultComparer, IndexComparer, KeyComparer, SharedComparer};
pub use edge::Edge;
pub use error::{GraphError, GraphResult};
pub use indexed::{AutoIndexedGraph, IndexedGraph};
pub use node::Node;
pub use provider::{Incremental, IndexProvider, Sequential, Stateless};
pub use store::{GraphStore, StoreConfig};
pub use traits::{GraphRead, GraphWrite, IndexLookup};
pub use types::EdgeIndex;
pub use unindexed::UnindexedGraph;
