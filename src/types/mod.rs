//! All data types for the multigraph library.

pub mod distance;
pub mod edge;
pub mod error;
pub mod matrix;

use std::fmt;

pub use distance::Distance;
pub use edge::Edge;
pub use error::{GraphError, GraphResult};
pub use matrix::LabeledMatrix;

/// Cost given to an edge when the caller does not pick one.
pub const DEFAULT_EDGE_COST: i64 = 1;

/// Number of contraction trials run by the min-cut search.
pub const DEFAULT_MIN_CUT_TRIALS: usize = 2000;

/// Seed used by the min-cut search when no RNG is supplied.
pub const DEFAULT_MIN_CUT_SEED: u64 = 0;

/// Anything usable as a vertex label.
///
/// Labels are the only external identity of a vertex, so they must be totally
/// ordered (vertex iteration is lexicographic by label) and cheap enough to clone.
pub trait Label: Ord + Clone + fmt::Debug {}

impl<T: Ord + Clone + fmt::Debug> Label for T {}
