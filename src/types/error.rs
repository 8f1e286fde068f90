//! Error types for the multigraph library.

use thiserror::Error;

/// All errors that can occur in the multigraph library.
///
/// Generic over the vertex label so the offending label can be matched on.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError<T> {
    /// No vertex carries this label.
    #[error("Vertex {0:?} not found")]
    VertexNotFound(T),

    /// A vertex with this label is already present.
    #[error("Vertex {0:?} already exists")]
    VertexAlreadyExists(T),

    /// No matching edge between the two vertices.
    #[error("No edge from {from:?} to {to:?}")]
    EdgeNotFound { from: T, to: T },

    /// The operation is not applicable to these arguments or this graph.
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    /// The operation requires a directed graph.
    #[error("Not a directed graph")]
    NotDirected,

    /// The operation requires an undirected graph.
    #[error("Not an undirected graph")]
    NotUndirected,

    /// The operation requires an acyclic graph.
    #[error("Not an acyclic graph")]
    NotAcyclic,

    /// A cycle of negative total cost is reachable.
    #[error("Graph contains a negative-cost cycle")]
    NegativeCycle,

    /// A disjoint-set operation named an element that was never registered.
    #[error("Element {0:?} is not registered in the disjoint set")]
    UnknownElement(T),
}

/// Convenience result type for multigraph operations.
pub type GraphResult<R, T> = Result<R, GraphError<T>>;
