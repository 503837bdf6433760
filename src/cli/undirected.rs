//! Arguments for the `undirected` command

use clap::{Args, Subcommand};

use super::parse::parse_undirected_edge;

#[derive(Args, Debug)]
pub struct UndirectedArgs {
    /// Vertex label to add, even if isolated (repeatable)
    #[arg(long = "vertex")]
    pub vertices: Vec<String>,

    /// Edge as U-V, or AB for single-character labels (repeatable)
    #[arg(long = "edge", short = 'e', value_parser = parse_undirected_edge)]
    pub edges: Vec<(String, String)>,

    /// Edge to remove after construction (repeatable)
    #[arg(long = "remove-edge", value_parser = parse_undirected_edge)]
    pub removed_edges: Vec<(String, String)>,

    /// Vertex to remove, along with its edges (repeatable)
    #[arg(long = "remove-vertex")]
    pub removed_vertices: Vec<String>,

    #[command(subcommand)]
    pub op: UndirectedOp,
}

/// Queries against an undirected graph
#[derive(Subcommand, Debug)]
pub enum UndirectedOp {
    /// Print the adjacency lists
    Show,

    /// List vertex labels in insertion order
    Vertices,

    /// List each edge once
    Edges,

    /// Check whether the labels form a walk along existing edges
    Path {
        /// Labels in walk order (none is a valid empty path)
        vertices: Vec<String>,
    },

    /// Depth-first traversal, neighbours in alphabetical order
    Dfs {
        start: String,

        /// Stop once this vertex is visited
        #[arg(long)]
        end: Option<String>,
    },

    /// Breadth-first traversal, neighbours in alphabetical order
    Bfs {
        start: String,

        /// Stop once this vertex is visited
        #[arg(long)]
        end: Option<String>,
    },

    /// Count connected components
    Components,

    /// Report whether the graph contains a cycle
    Cycle,
}
