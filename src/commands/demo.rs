//! `duograph demo` - replay the worked examples for both graph types
//!
//! Each section builds its own graph, applies a scripted series of edits and
//! queries, and records the results as lines of text. Human output prints
//! every section under a banner (banners are skipped with `--quiet`); JSON
//! output emits the sections as an array.

use serde::Serialize;

use crate::cli::DemoGraph;
use crate::commands::dispatch::CommandContext;
use crate::commands::{join, print_json};
use duograph_core::error::Result;
use duograph_core::graph::{DirectedGraph, UndirectedGraph, Weight};

const SAMPLE_EDGES: [(usize, usize, Weight); 7] = [
    (0, 1, 10),
    (4, 0, 12),
    (1, 4, 15),
    (4, 3, 3),
    (3, 1, 5),
    (2, 1, 23),
    (3, 2, 7),
];

const FIVE_CYCLE: [&str; 7] = ["AB", "AC", "BC", "BD", "CD", "CE", "DE"];

const TWO_COMPONENTS: [&str; 11] = [
    "AE", "AC", "BE", "CE", "CD", "CB", "BD", "ED", "BH", "QG", "FG",
];

const EDITS: [&str; 22] = [
    "add QH", "remove FG", "remove GQ", "remove HQ", "remove AE", "remove CA", "remove EB",
    "remove CE", "remove DE", "remove BC", "add EA", "add EF", "add GQ", "add AC", "add DQ",
    "add EG", "add QH", "remove CD", "remove BD", "remove QG", "add FG", "remove GE",
];

#[derive(Debug, Serialize)]
pub struct Section {
    pub title: String,
    pub lines: Vec<String>,
}

impl Section {
    fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            lines: Vec::new(),
        }
    }

    fn push(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    /// Push every line of a multi-line rendering
    fn push_block(&mut self, block: &str) {
        self.lines.extend(block.lines().map(str::to_string));
    }
}

fn split_pair(pair: &str) -> (&str, &str) {
    pair.split_at(pair.len() / 2)
}

fn quoted(items: &[String]) -> String {
    let quoted: Vec<String> = items.iter().map(|s| format!("'{}'", s)).collect();
    format!("[{}]", quoted.join(", "))
}

fn listed<T: std::fmt::Display>(items: &[T]) -> String {
    format!("[{}]", join(items, ", "))
}

pub fn directed_sections(default_weight: Weight) -> Vec<Section> {
    let mut build = Section::new("directed: add_vertex / add_edge");
    let mut graph = DirectedGraph::new();
    build.push_block(&graph.to_string());
    for _ in 0..5 {
        graph.add_vertex();
    }
    for &(src, dst, weight) in &SAMPLE_EDGES {
        graph.add_edge(src, dst, weight);
    }
    build.push_block(&graph.to_string());
    build.push(format!("edges: {}", listed(&graph.edges())));
    build.push(format!("vertices: {}", listed(&graph.vertices())));

    let mut paths = Section::new("directed: is_valid_path");
    let cases: [&[usize]; 6] = [&[0, 1, 4, 3], &[1, 3, 2, 1], &[0, 4], &[4, 0], &[], &[2]];
    for path in cases {
        paths.push(format!("{} {}", listed(path), graph.is_valid_path(path)));
    }

    let mut walks = Section::new("directed: dfs / bfs");
    for start in graph.vertices() {
        walks.push(format!(
            "{} DFS:{} BFS:{}",
            start,
            listed(&graph.dfs(start, None)),
            listed(&graph.bfs(start, None))
        ));
    }

    let mut cycles = Section::new("directed: has_cycle");
    let mut cyclic = DirectedGraph::from_edges(&SAMPLE_EDGES);
    for (src, dst) in [(3, 1), (4, 0), (3, 2)] {
        cyclic.remove_edge(src, dst);
        cycles.push(format!("remove {}->{}: {}", src, dst, cyclic.has_cycle()));
    }
    for (src, dst) in [(4, 3), (2, 3), (1, 3), (4, 0)] {
        cyclic.add_edge(src, dst, default_weight);
        cycles.push(format!("add {}->{}: {}", src, dst, cyclic.has_cycle()));
    }

    let mut shortest = Section::new("directed: dijkstra");
    let mut weighted = DirectedGraph::from_edges(&SAMPLE_EDGES);
    for src in weighted.vertices() {
        shortest.push(format!("DIJKSTRA {} {}", src, listed(&weighted.dijkstra(src))));
    }
    weighted.remove_edge(4, 3);
    shortest.push("after removing 4->3:");
    for src in weighted.vertices() {
        shortest.push(format!("DIJKSTRA {} {}", src, listed(&weighted.dijkstra(src))));
    }

    vec![build, paths, walks, cycles, shortest]
}

pub fn undirected_sections() -> Vec<Section> {
    let mut build = Section::new("undirected: add_vertex / add_edge / remove");
    let mut graph = UndirectedGraph::new();
    for v in ["A", "B", "C", "D", "E"] {
        graph.add_vertex(v);
    }
    build.push(graph.to_string());
    for pair in FIVE_CYCLE {
        let (u, v) = split_pair(pair);
        graph.add_edge(u, v);
    }
    build.push(graph.to_string());
    graph.remove_vertex("DOES NOT EXIST");
    graph.remove_edge("A", "B");
    graph.remove_edge("X", "B");
    build.push(graph.to_string());
    graph.remove_vertex("D");
    build.push(graph.to_string());

    let mut paths = Section::new("undirected: is_valid_path");
    let graph = UndirectedGraph::from_edges(FIVE_CYCLE.iter().map(|p| split_pair(p)));
    for case in ["ABC", "ADE", "ECABDCBE", "ACDECB", "", "D", "Z"] {
        let path: Vec<String> = case.chars().map(String::from).collect();
        paths.push(format!("{} {}", quoted(&path), graph.is_valid_path(&path)));
    }

    let mut walks = Section::new("undirected: dfs / bfs");
    let graph = UndirectedGraph::from_edges(TWO_COMPONENTS.iter().map(|p| split_pair(p)));
    let starts = ["A", "B", "C", "D", "E", "G", "H"];
    for start in starts {
        walks.push(format!(
            "{} DFS:{} BFS:{}",
            start,
            quoted(&graph.dfs(start, None)),
            quoted(&graph.bfs(start, None))
        ));
    }
    for i in 1..starts.len() {
        let (from, to) = (starts[i], starts[starts.len() - 1 - i]);
        walks.push(format!(
            "{}-{} DFS:{} BFS:{}",
            from,
            to,
            quoted(&graph.dfs(from, Some(to))),
            quoted(&graph.bfs(from, Some(to)))
        ));
    }

    let mut edits = Section::new("undirected: components / has_cycle");
    let mut graph = UndirectedGraph::from_edges(TWO_COMPONENTS.iter().map(|p| split_pair(p)));
    for step in EDITS {
        let Some((command, pair)) = step.split_once(' ') else {
            continue;
        };
        let (u, v) = split_pair(pair);
        if command == "add" {
            graph.add_edge(u, v);
        } else {
            graph.remove_edge(u, v);
        }
        edits.push(format!(
            "{:<10} components={} cycle={}",
            step,
            graph.count_connected_components(),
            graph.has_cycle()
        ));
    }

    vec![build, paths, walks, edits]
}

pub fn execute(ctx: &CommandContext, which: Option<DemoGraph>) -> Result<()> {
    let mut sections = Vec::new();
    if which != Some(DemoGraph::Undirected) {
        sections.extend(directed_sections(ctx.config.default_weight));
    }
    if which != Some(DemoGraph::Directed) {
        sections.extend(undirected_sections());
    }

    if ctx.is_json() {
        return print_json(&serde_json::json!({ "sections": sections }));
    }

    for (index, section) in sections.iter().enumerate() {
        if !ctx.cli.quiet {
            if index > 0 {
                println!();
            }
            println!("{}", section.title);
            println!("{}", "-".repeat(section.title.len()));
        }
        for line in &section.lines {
            println!("{}", line);
        }
    }
    Ok(())
}
