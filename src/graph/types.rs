//! Core type definitions for the graph container

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for an edge within one graph instance
///
/// Edge indices are drawn from an internal counter unless the caller supplies
/// one explicitly. Unindexed graphs never show them to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub struct EdgeIndex(pub u64);

impl EdgeIndex {
    pub fn new(index: u64) -> Self {
        EdgeIndex(index)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }

    /// The index directly after this one
    pub fn next(&self) -> Self {
        EdgeIndex(self.0.wrapping_add(1))
    }
}

impl fmt::Display for EdgeIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EdgeIndex({})", self.0)
    }
}

impl From<u64> for EdgeIndex {
    fn from(index: u64) -> Self {
        EdgeIndex(index)
    }
}
