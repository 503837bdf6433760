//! Arguments for the `directed` command

use clap::{Args, Subcommand};
use duograph_core::graph::Weight;

use super::parse::{parse_directed_edge, parse_directed_endpoints};

/// A directed edge as given on the command line; the weight falls back to
/// the configured default when omitted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DirectedEdgeSpec {
    pub src: usize,
    pub dst: usize,
    pub weight: Option<Weight>,
}

#[derive(Args, Debug)]
pub struct DirectedArgs {
    /// Minimum number of vertices (grown further to fit every edge)
    #[arg(long, short = 'n')]
    pub vertices: Option<usize>,

    /// Edge as SRC:DST or SRC:DST:WEIGHT (repeatable)
    #[arg(long = "edge", short = 'e', value_parser = parse_directed_edge)]
    pub edges: Vec<DirectedEdgeSpec>,

    /// Edge to remove after construction, as SRC:DST (repeatable)
    #[arg(long = "remove", value_parser = parse_directed_endpoints)]
    pub removals: Vec<(usize, usize)>,

    #[command(subcommand)]
    pub op: DirectedOp,
}

/// Queries against a directed graph
#[derive(Subcommand, Debug)]
pub enum DirectedOp {
    /// Print the adjacency matrix
    Show,

    /// List vertex indices
    Vertices,

    /// List edges as (src, dst, weight) in row-major order
    Edges,

    /// Check whether the vertices form a walk along existing edges
    Path {
        /// Vertex indices in walk order (none is a valid empty path)
        vertices: Vec<usize>,
    },

    /// Depth-first traversal, successors in ascending order
    Dfs {
        start: usize,

        /// Stop once this vertex is visited
        #[arg(long)]
        end: Option<usize>,
    },

    /// Breadth-first traversal, successors in ascending order
    Bfs {
        start: usize,

        /// Stop once this vertex is visited
        #[arg(long)]
        end: Option<usize>,
    },

    /// Report whether the graph contains a directed cycle
    Cycle,

    /// Shortest distances from SRC to every vertex
    Dijkstra { src: usize },
}
