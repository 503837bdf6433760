//! `duograph directed` - build a weighted directed graph and query it

use serde_json::json;
use tracing::debug;

use crate::cli::{DirectedArgs, DirectedOp};
use crate::commands::dispatch::CommandContext;
use crate::commands::{join, print_json};
use duograph_core::error::Result;
use duograph_core::graph::{DirectedGraph, Weight};

/// Build the graph described by the edge, vertex and removal flags.
///
/// Edges without a weight get `default_weight`. The vertex count grows to
/// fit every edge endpoint and then to `--vertices`; removals apply last.
pub fn build_graph(args: &DirectedArgs, default_weight: Weight) -> DirectedGraph {
    let edges: Vec<(usize, usize, Weight)> = args
        .edges
        .iter()
        .map(|e| (e.src, e.dst, e.weight.unwrap_or(default_weight)))
        .collect();

    let mut graph = if edges.is_empty() {
        DirectedGraph::new()
    } else {
        DirectedGraph::from_edges(&edges)
    };
    if let Some(min) = args.vertices {
        while graph.vertex_count() < min {
            graph.add_vertex();
        }
    }
    for &(src, dst) in &args.removals {
        graph.remove_edge(src, dst);
    }

    debug!(
        vertices = graph.vertex_count(),
        edges = graph.edges().len(),
        "built directed graph"
    );
    graph
}

pub fn execute(ctx: &CommandContext, args: &DirectedArgs) -> Result<()> {
    let graph = build_graph(args, ctx.config.default_weight);
    debug!(elapsed = ?ctx.start.elapsed(), "build_graph");

    match &args.op {
        DirectedOp::Show => {
            if ctx.is_json() {
                print_json(&json!({
                    "vertices": graph.vertex_count(),
                    "edges": graph.edges(),
                }))
            } else {
                print!("{}", graph);
                Ok(())
            }
        }
        DirectedOp::Vertices => {
            let vertices = graph.vertices();
            if ctx.is_json() {
                print_json(&json!({ "vertices": vertices }))
            } else {
                println!("{}", join(&vertices, " "));
                Ok(())
            }
        }
        DirectedOp::Edges => {
            let edges = graph.edges();
            if ctx.is_json() {
                print_json(&json!({ "edges": edges }))
            } else {
                for edge in &edges {
                    println!("{}", edge);
                }
                Ok(())
            }
        }
        DirectedOp::Path { vertices } => {
            let valid = graph.is_valid_path(vertices);
            if ctx.is_json() {
                print_json(&json!({ "path": vertices, "valid": valid }))
            } else {
                println!("{}", valid);
                Ok(())
            }
        }
        DirectedOp::Dfs { start, end } => {
            output_walk(ctx, "dfs", *start, *end, &graph.dfs(*start, *end))
        }
        DirectedOp::Bfs { start, end } => {
            output_walk(ctx, "bfs", *start, *end, &graph.bfs(*start, *end))
        }
        DirectedOp::Cycle => {
            let has_cycle = graph.has_cycle();
            if ctx.is_json() {
                print_json(&json!({ "has_cycle": has_cycle }))
            } else {
                println!("{}", has_cycle);
                Ok(())
            }
        }
        DirectedOp::Dijkstra { src } => {
            let distances = graph.dijkstra(*src);
            if ctx.is_json() {
                print_json(&json!({ "src": src, "distances": distances }))
            } else {
                for (vertex, distance) in distances.iter().enumerate() {
                    println!("{}: {}", vertex, distance);
                }
                Ok(())
            }
        }
    }
}

fn output_walk(
    ctx: &CommandContext,
    order: &str,
    start: usize,
    end: Option<usize>,
    visited: &[usize],
) -> Result<()> {
    if ctx.is_json() {
        return print_json(&json!({
            "order": order,
            "start": start,
            "end": end,
            "visited": visited,
        }));
    }
    println!("{}", join(visited, " "));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Cli, Commands};
    use clap::Parser;

    fn parse(argv: &[&str]) -> DirectedArgs {
        let mut full = vec!["duograph", "directed"];
        full.extend_from_slice(argv);
        match Cli::try_parse_from(full).unwrap().command {
            Commands::Directed(args) => args,
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_build_uses_default_weight() {
        let args = parse(&["-e", "0:1", "-e", "1:2:7", "edges"]);
        let graph = build_graph(&args, 4);
        assert_eq!(graph.weight(0, 1), Some(4));
        assert_eq!(graph.weight(1, 2), Some(7));
        assert_eq!(graph.vertex_count(), 3);
    }

    #[test]
    fn test_build_pads_vertices_and_removes_edges() {
        let args = parse(&["-n", "6", "-e", "0:1:10", "-e", "4:3:3", "--remove", "4:3", "show"]);
        let graph = build_graph(&args, 1);
        assert_eq!(graph.vertex_count(), 6);
        assert!(!graph.has_edge(4, 3));
        assert!(graph.has_edge(0, 1));
    }

    #[test]
    fn test_build_ignores_non_positive_weights() {
        let args = parse(&["-e", "0:1:-3", "-e", "1:1:2", "edges"]);
        let graph = build_graph(&args, 1);
        assert!(graph.edges().is_empty());
        assert_eq!(graph.vertex_count(), 2);
    }

    #[test]
    fn test_build_without_edges_is_empty() {
        assert!(build_graph(&parse(&["show"]), 1).is_empty());
        assert_eq!(build_graph(&parse(&["-n", "2", "show"]), 1).vertex_count(), 2);
    }

    #[test]
    fn test_vertices_flag_never_shrinks() {
        let args = parse(&["-n", "1", "-e", "2:0:1", "vertices"]);
        assert_eq!(build_graph(&args, 1).vertex_count(), 3);
    }
}
