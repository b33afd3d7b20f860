//! Error types for graph operations

use thiserror::Error;

/// Errors that can occur during graph operations
///
/// Index values are carried as their `Debug` rendering so the error type stays
/// independent of the graph's index type.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// A node or edge index collides with one already present under the
    /// graph's index comparer
    #[error("Index {0} already exists")]
    DuplicateIndex(String),

    /// An edge endpoint does not exist
    #[error("Node {0} not found")]
    NodeNotFound(String),

    /// Lookup by index missed
    #[error("Component {0} not found")]
    NotFound(String),

    /// Relational access on a handle whose record was removed
    #[error("Component is no longer part of its graph")]
    ComponentInvalid,

    /// Payload write on a handle whose record was removed
    #[error("Data of a removed component cannot be changed")]
    DataImmutable,

    /// Payload write while a borrow of the same payload is alive
    #[error("Data is currently borrowed")]
    DataBorrowed,

    /// Out-of-range option values
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
}

impl GraphError {
    pub(crate) fn duplicate<I: std::fmt::Debug>(index: &I) -> Self {
        GraphError::DuplicateIndex(format!("{:?}", index))
    }

    pub(crate) fn node_not_found<I: std::fmt::Debug>(index: &I) -> Self {
        GraphError::NodeNotFound(format!("{:?}", index))
    }

    pub(crate) fn not_found<I: std::fmt::Debug>(index: &I) -> Self {
        GraphError::NotFound(format!("{:?}", index))
    }
}

pub type GraphResult<T> = Result<T, GraphError>;
