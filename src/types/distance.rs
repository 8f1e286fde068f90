//! Path lengths that may be unbounded.

use std::fmt;

use serde::Serialize;

/// Length of a path, or `Infinite` when no path exists.
///
/// The derived ordering places every finite distance before `Infinite`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Distance {
    /// A reachable vertex at this total cost.
    Finite(i64),
    /// No path.
    Infinite,
}

impl Distance {
    /// Distance of a vertex from itself.
    pub const ZERO: Distance = Distance::Finite(0);

    /// Whether a path exists.
    pub fn is_finite(&self) -> bool {
        matches!(self, Distance::Finite(_))
    }

    /// The finite value, if any.
    pub fn value(&self) -> Option<i64> {
        match self {
            Distance::Finite(d) => Some(*d),
            Distance::Infinite => None,
        }
    }

    /// Extend the path by one edge. `Infinite` stays `Infinite`.
    pub fn extend(self, cost: i64) -> Distance {
        match self {
            Distance::Finite(d) => Distance::Finite(d.saturating_add(cost)),
            Distance::Infinite => Distance::Infinite,
        }
    }

    /// Concatenate two path lengths.
    pub fn join(self, other: Distance) -> Distance {
        match other {
            Distance::Finite(d) => self.extend(d),
            Distance::Infinite => Distance::Infinite,
        }
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Distance::Finite(d) => write!(f, "{}", d),
            Distance::Infinite => write!(f, "inf"),
        }
    }
}
