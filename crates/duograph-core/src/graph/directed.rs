//! Directed weighted graph backed by an adjacency matrix
//!
//! Vertices are the dense range `0..vertex_count`. Cell `[src][dst]` holds
//! the weight of the edge `src -> dst`, or `0` when there is no edge. Vertices
//! are never removed.

use std::fmt;

use crate::graph::algos::{breadth_first, depth_first, has_directed_cycle, shortest_distances};
use crate::graph::types::{Distance, Weight, WeightedEdge};
use crate::graph::NeighborProvider;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectedGraph {
    v_count: usize,
    adj_matrix: Vec<Vec<Weight>>,
}

impl DirectedGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph from `(src, dst, weight)` triples.
    ///
    /// Creates enough vertices to cover the largest endpoint mentioned, then
    /// adds each edge under the usual rules, so self-loops and zero weights
    /// still size the graph but are not stored. An empty list yields a single
    /// isolated vertex; use [`DirectedGraph::new`] for an empty graph.
    pub fn from_edges(edges: &[(usize, usize, Weight)]) -> Self {
        let mut graph = Self::new();
        let highest = edges
            .iter()
            .map(|&(src, dst, _)| src.max(dst))
            .max()
            .unwrap_or(0);

        for _ in 0..=highest {
            graph.add_vertex();
        }
        for &(src, dst, weight) in edges {
            graph.add_edge(src, dst, weight);
        }
        graph
    }

    pub fn vertex_count(&self) -> usize {
        self.v_count
    }

    pub fn is_empty(&self) -> bool {
        self.v_count == 0
    }

    /// Add a vertex and return the new vertex count
    pub fn add_vertex(&mut self) -> usize {
        for row in &mut self.adj_matrix {
            row.push(0);
        }
        self.v_count += 1;
        self.adj_matrix.push(vec![0; self.v_count]);
        self.v_count
    }

    /// Set the weight of `src -> dst`, replacing any previous weight.
    ///
    /// Ignored when the weight is zero, the edge is a self-loop, or either
    /// endpoint is out of range.
    pub fn add_edge(&mut self, src: usize, dst: usize, weight: Weight) {
        let reason = if weight == 0 {
            Some("non-positive weight")
        } else if src == dst {
            Some("self-loop")
        } else if src >= self.v_count || dst >= self.v_count {
            Some("endpoint out of range")
        } else {
            None
        };

        if let Some(reason) = reason {
            tracing::debug!(src, dst, weight, reason, "ignoring edge");
            return;
        }

        self.adj_matrix[src][dst] = weight;
    }

    /// Remove `src -> dst`; out-of-range endpoints are ignored
    pub fn remove_edge(&mut self, src: usize, dst: usize) {
        if src >= self.v_count || dst >= self.v_count {
            tracing::debug!(src, dst, "ignoring edge removal, endpoint out of range");
            return;
        }
        self.adj_matrix[src][dst] = 0;
    }

    /// Weight of `src -> dst`, if that edge exists
    pub fn weight(&self, src: usize, dst: usize) -> Option<Weight> {
        self.adj_matrix
            .get(src)
            .and_then(|row| row.get(dst))
            .copied()
            .filter(|&w| w > 0)
    }

    pub fn has_edge(&self, src: usize, dst: usize) -> bool {
        self.weight(src, dst).is_some()
    }

    pub fn vertices(&self) -> Vec<usize> {
        (0..self.v_count).collect()
    }

    /// All edges in row-major order (by source, then destination)
    pub fn edges(&self) -> Vec<WeightedEdge> {
        (0..self.v_count)
            .flat_map(|src| {
                self.out_edges(src)
                    .map(move |(dst, weight)| WeightedEdge { src, dst, weight })
            })
            .collect()
    }

    /// Outgoing `(dst, weight)` pairs of `src` in ascending `dst` order
    pub fn out_edges(&self, src: usize) -> impl Iterator<Item = (usize, Weight)> + '_ {
        self.adj_matrix.get(src).into_iter().flat_map(|row| {
            row.iter()
                .enumerate()
                .filter(|(_, weight)| **weight > 0)
                .map(|(dst, &weight)| (dst, weight))
        })
    }

    /// Successors of `src` in ascending order
    pub fn neighbors(&self, src: usize) -> Vec<usize> {
        self.out_edges(src).map(|(dst, _)| dst).collect()
    }

    /// Check that every vertex exists and every consecutive pair is an edge.
    ///
    /// The empty path is always valid.
    pub fn is_valid_path(&self, path: &[usize]) -> bool {
        if path.iter().any(|&v| v >= self.v_count) {
            return false;
        }
        path.windows(2).all(|step| self.has_edge(step[0], step[1]))
    }

    /// Depth-first walk visiting successors in ascending order, stopping at `end`
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn dfs(&self, start: usize, end: Option<usize>) -> Vec<usize> {
        depth_first(self, &start, end.as_ref())
    }

    /// Breadth-first walk visiting successors in ascending order, stopping at `end`
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn bfs(&self, start: usize, end: Option<usize>) -> Vec<usize> {
        breadth_first(self, &start, end.as_ref())
    }

    /// True if any directed cycle exists, wherever it is in the graph
    pub fn has_cycle(&self) -> bool {
        has_directed_cycle(self)
    }

    /// Shortest distance from `src` to every vertex
    pub fn dijkstra(&self, src: usize) -> Vec<Distance> {
        shortest_distances(self, src)
    }
}

impl NeighborProvider for DirectedGraph {
    type Vertex = usize;

    fn contains_vertex(&self, v: &usize) -> bool {
        *v < self.v_count
    }

    fn vertex_list(&self) -> Vec<usize> {
        self.vertices()
    }

    fn neighbors_of(&self, v: &usize) -> Vec<usize> {
        self.neighbors(*v)
    }
}

impl fmt::Display for DirectedGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.v_count == 0 {
            return writeln!(f, "EMPTY GRAPH");
        }

        writeln!(f, "GRAPH ({} vertices):", self.v_count)?;
        let header: Vec<String> = (0..self.v_count).map(|i| format!("{:>2}", i)).collect();
        writeln!(f, "   |{}", header.join(" "))?;
        writeln!(f, "{}", "-".repeat(self.v_count * 3 + 3))?;
        for (i, row) in self.adj_matrix.iter().enumerate() {
            let cells: Vec<String> = row.iter().map(|w| format!("{:>2}", w)).collect();
            writeln!(f, "{:>2} |{}", i, cells.join(" "))?;
        }
        Ok(())
    }
}
