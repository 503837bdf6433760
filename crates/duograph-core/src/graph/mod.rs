//! Graph representations and traversal operations
//!
//! Provides the two graph types and the algorithms shared between them:
//! - Ordered DFS/BFS with optional early stop
//! - Cycle detection (directed back edges, undirected non-tree edges)
//! - Connected component counting
//! - Dijkstra single-source shortest distances

pub mod algos;
pub mod directed;
pub mod traversal;
pub mod types;
pub mod undirected;

pub use directed::DirectedGraph;
pub use traversal::NeighborProvider;
pub use types::{Distance, WeightedEdge, Weight};
pub use undirected::UndirectedGraph;
