use std::fmt;

use serde::{Serialize, Serializer};

/// Edge weight in a directed graph. `0` in the matrix means "no edge",
/// so every stored weight is at least 1.
pub type Weight = u32;

/// A directed edge as reported by [`super::DirectedGraph::edges`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct WeightedEdge {
    pub src: usize,
    pub dst: usize,
    pub weight: Weight,
}

impl From<(usize, usize, Weight)> for WeightedEdge {
    fn from((src, dst, weight): (usize, usize, Weight)) -> Self {
        WeightedEdge { src, dst, weight }
    }
}

impl fmt::Display for WeightedEdge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.src, self.dst, self.weight)
    }
}

/// Shortest-path distance produced by Dijkstra
///
/// `Infinite` orders after every finite distance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Distance {
    Finite(u64),
    Infinite,
}

impl Distance {
    pub const ZERO: Distance = Distance::Finite(0);

    pub fn is_finite(&self) -> bool {
        matches!(self, Distance::Finite(_))
    }

    /// Extend this distance by one edge
    pub fn extend(self, weight: Weight) -> Distance {
        match self {
            Distance::Finite(d) => Distance::Finite(d.saturating_add(u64::from(weight))),
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

impl Serialize for Distance {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Distance::Finite(d) => serializer.serialize_u64(*d),
            Distance::Infinite => serializer.serialize_str("inf"),
        }
    }
}
