//! `duograph undirected` - build an undirected graph and query it

use serde_json::json;
use tracing::debug;

use crate::cli::{UndirectedArgs, UndirectedOp};
use crate::commands::dispatch::CommandContext;
use crate::commands::print_json;
use duograph_core::error::Result;
use duograph_core::graph::UndirectedGraph;

/// Build the graph: explicit vertices, then edges, then edge removals, then
/// vertex removals
pub fn build_graph(args: &UndirectedArgs) -> UndirectedGraph {
    let mut graph = UndirectedGraph::new();
    for v in &args.vertices {
        graph.add_vertex(v);
    }
    for (u, v) in &args.edges {
        graph.add_edge(u, v);
    }
    for (u, v) in &args.removed_edges {
        graph.remove_edge(u, v);
    }
    for v in &args.removed_vertices {
        graph.remove_vertex(v);
    }

    debug!(
        vertices = graph.vertex_count(),
        edges = graph.edges().len(),
        "built undirected graph"
    );
    graph
}

pub fn execute(ctx: &CommandContext, args: &UndirectedArgs) -> Result<()> {
    let graph = build_graph(args);
    debug!(elapsed = ?ctx.start.elapsed(), "build_graph");

    match &args.op {
        UndirectedOp::Show => {
            if ctx.is_json() {
                let adjacency: Vec<_> = graph
                    .vertices()
                    .into_iter()
                    .map(|v| {
                        let neighbors = graph.neighbors(&v).unwrap_or_default();
                        json!({ "vertex": v, "neighbors": neighbors })
                    })
                    .collect();
                print_json(&json!({ "adjacency": adjacency }))
            } else {
                println!("{}", graph);
                Ok(())
            }
        }
        UndirectedOp::Vertices => {
            let vertices = graph.vertices();
            if ctx.is_json() {
                print_json(&json!({ "vertices": vertices }))
            } else {
                println!("{}", vertices.join(" "));
                Ok(())
            }
        }
        UndirectedOp::Edges => {
            let edges = graph.edges();
            if ctx.is_json() {
                print_json(&json!({ "edges": edges }))
            } else {
                for (u, v) in &edges {
                    println!("{}-{}", u, v);
                }
                Ok(())
            }
        }
        UndirectedOp::Path { vertices } => {
            let valid = graph.is_valid_path(vertices);
            if ctx.is_json() {
                print_json(&json!({ "path": vertices, "valid": valid }))
            } else {
                println!("{}", valid);
                Ok(())
            }
        }
        UndirectedOp::Dfs { start, end } => {
            let visited = graph.dfs(start, end.as_deref());
            output_walk(ctx, "dfs", start, end.as_deref(), &visited)
        }
        UndirectedOp::Bfs { start, end } => {
            let visited = graph.bfs(start, end.as_deref());
            output_walk(ctx, "bfs", start, end.as_deref(), &visited)
        }
        UndirectedOp::Components => {
            let components = graph.count_connected_components();
            if ctx.is_json() {
                print_json(&json!({ "components": components }))
            } else {
                println!("{}", components);
                Ok(())
            }
        }
        UndirectedOp::Cycle => {
            let has_cycle = graph.has_cycle();
            if ctx.is_json() {
                print_json(&json!({ "has_cycle": has_cycle }))
            } else {
                println!("{}", has_cycle);
                Ok(())
            }
        }
    }
}

fn output_walk(
    ctx: &CommandContext,
    order: &str,
    start: &str,
    end: Option<&str>,
    visited: &[String],
) -> Result<()> {
    if ctx.is_json() {
        return print_json(&json!({
            "order": order,
            "start": start,
            "end": end,
            "visited": visited,
        }));
    }
    println!("{}", visited.join(" "));
    Ok(())
}
