//! The edge triple materialized from adjacency entries.

use std::fmt;

use serde::Serialize;

/// A (source, destination, cost) triple.
///
/// Edges are not stored as independent entities; the graph builds them on
/// demand from its adjacency lists.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Edge<T> {
    /// Label of the vertex the edge leaves.
    pub source: T,
    /// Label of the vertex the edge enters.
    pub target: T,
    /// Integer cost, possibly zero or negative.
    pub cost: i64,
}

impl<T> Edge<T> {
    /// Create a new edge.
    pub fn new(source: T, target: T, cost: i64) -> Self {
        Self {
            source,
            target,
            cost,
        }
    }

    /// Whether both endpoints are the same vertex.
    pub fn is_self_loop(&self) -> bool
    where
        T: PartialEq,
    {
        self.source == self.target
    }
}

impl<T: fmt::Display> fmt::Display for Edge<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {} ({})", self.source, self.target, self.cost)
    }
}
