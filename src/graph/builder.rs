//! Fluent API for building MultiGraph instances.

use std::collections::BTreeSet;

use crate::types::{Edge, GraphResult, Label, DEFAULT_EDGE_COST};

use super::MultiGraph;

/// Fluent builder for constructing a MultiGraph.
///
/// Vertices are declared explicitly or implicitly by linking them; declaring
/// the same vertex twice is harmless.
pub struct GraphBuilder<T> {
    directed: bool,
    vertices: Vec<T>,
    declared: BTreeSet<T>,
    edges: Vec<Edge<T>>,
}

impl<T: Label> GraphBuilder<T> {
    /// Create a new builder.
    pub fn new(directed: bool) -> Self {
        Self {
            directed,
            vertices: Vec::new(),
            declared: BTreeSet::new(),
            edges: Vec::new(),
        }
    }

    /// Create a builder for a directed graph.
    pub fn directed() -> Self {
        Self::new(true)
    }

    /// Create a builder for an undirected graph.
    pub fn undirected() -> Self {
        Self::new(false)
    }

    /// Declare a vertex.
    pub fn vertex(&mut self, label: T) -> &mut Self {
        if self.declared.insert(label.clone()) {
            self.vertices.push(label);
        }
        self
    }

    /// Declare several vertices.
    pub fn vertices<I: IntoIterator<Item = T>>(&mut self, labels: I) -> &mut Self {
        for label in labels {
            self.vertex(label);
        }
        self
    }

    /// Add an edge with the default cost.
    pub fn link(&mut self, from: T, to: T) -> &mut Self {
        self.link_weighted(from, to, DEFAULT_EDGE_COST)
    }

    /// Add an edge with an explicit cost.
    pub fn link_weighted(&mut self, from: T, to: T, cost: i64) -> &mut Self {
        self.vertex(from.clone());
        self.vertex(to.clone());
        self.edges.push(Edge::new(from, to, cost));
        self
    }

    /// Build the final MultiGraph.
    pub fn build(self) -> GraphResult<MultiGraph<T>, T> {
        MultiGraph::from_parts(self.directed, self.vertices, self.edges)
    }
}
