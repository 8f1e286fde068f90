//! Multigraph: in-memory directed and undirected multigraphs.
//!
//! Vertices are identified by caller-chosen labels; edges carry integer costs
//! and may be parallel or self-loops. On top of the store sit traversals,
//! shortest paths, topological sort, strongly connected components, minimum
//! spanning trees, and a randomized minimum cut.

pub mod cli;
pub mod engine;
pub mod graph;
pub mod index;
pub mod types;

// Re-export commonly used types at the crate root
pub use engine::{AllPairsPaths, MinCut, MinCutParams, PathAlgorithm, PathEntry, ShortestPaths};
pub use graph::{GraphBuilder, MultiGraph, TraversalDirection, TraversalOrder};
pub use index::DisjointSet;
pub use types::{
    Distance, Edge, GraphError, GraphResult, Label, LabeledMatrix, DEFAULT_EDGE_COST,
    DEFAULT_MIN_CUT_SEED, DEFAULT_MIN_CUT_TRIALS,
};
