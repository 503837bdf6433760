//! Graph algorithm implementations
//!
//! - `search`: Ordered depth-first and breadth-first walks
//! - `cycle`: Directed and undirected cycle detection
//! - `components`: Connected component counting
//! - `dijkstra`: Weighted single-source shortest distances

pub mod components;
pub mod cycle;
pub mod dijkstra;
pub mod search;

pub use components::count_components;
pub use cycle::{has_directed_cycle, has_undirected_cycle};
pub use dijkstra::shortest_distances;
pub use search::{breadth_first, depth_first};
