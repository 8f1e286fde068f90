//! Graph algorithms: properties, shortest paths, components, spanning trees, min cut.

pub mod components;
pub mod min_cut;
pub mod properties;
pub mod shortest_path;
pub mod spanning_tree;

pub use min_cut::{MinCut, MinCutParams};
pub use shortest_path::{AllPairsPaths, PathAlgorithm, PathEntry, ShortestPaths};
