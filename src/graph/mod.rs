//! In-memory multigraph store, builder and traversals.

pub mod builder;
pub mod multi_graph;
pub mod traversal;

pub use builder::GraphBuilder;
pub use multi_graph::MultiGraph;
pub use traversal::{TraversalDirection, TraversalOrder};
