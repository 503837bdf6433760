use super::*;

fn labels(s: &str) -> Vec<String> {
    s.chars().map(|c| c.to_string()).collect()
}

fn pairs(spec: &[&str]) -> Vec<(String, String)> {
    spec.iter()
        .map(|e| {
            let (u, v) = e.split_at(1);
            (u.to_string(), v.to_string())
        })
        .collect()
}

fn five_cycle() -> UndirectedGraph {
    UndirectedGraph::from_edges(pairs(&["AB", "AC", "BC", "BD", "CD", "CE", "DE"]))
}

fn two_components() -> UndirectedGraph {
    UndirectedGraph::from_edges(pairs(&[
        "AE", "AC", "BE", "CE", "CD", "CB", "BD", "ED", "BH", "QG", "FG",
    ]))
}

#[test]
fn test_add_vertex_and_edges() {
    let mut graph = UndirectedGraph::new();
    assert_eq!(graph.to_string(), "GRAPH: {}");

    for v in ["A", "B", "C", "D", "E"] {
        graph.add_vertex(v);
    }
    assert_eq!(
        graph.to_string(),
        "GRAPH: {A: [], B: [], C: [], D: [], E: []}"
    );

    graph.add_vertex("A");
    assert_eq!(graph.vertex_count(), 5);

    for (u, v) in pairs(&["AB", "AC", "BC", "BD", "CD", "CE", "DE", "BC"]) {
        graph.add_edge(&u, &v);
    }
    assert_eq!(graph.neighbors("C"), Some(&labels("ABDE")[..]));
    assert_eq!(graph.neighbors("B"), Some(&labels("ACD")[..]));
    assert_eq!(graph.edges().len(), 7);
}

#[test]
fn test_add_edge_creates_vertices_and_ignores_self_loops() {
    let mut graph = UndirectedGraph::new();
    graph.add_edge("X", "X");
    assert!(graph.is_empty());

    graph.add_edge("Y", "X");
    assert_eq!(graph.vertices(), labels("YX"));
    assert!(graph.has_edge("X", "Y"));
    assert!(graph.has_edge("Y", "X"));
}

#[test]
fn test_remove_edge_and_vertex() {
    let mut graph = five_cycle();
    graph.remove_vertex("DOES NOT EXIST");
    graph.remove_edge("A", "B");
    graph.remove_edge("X", "B");

    assert!(!graph.has_edge("A", "B"));
    assert!(!graph.contains_vertex("X"));
    assert_eq!(graph.vertex_count(), 5);

    graph.remove_vertex("D");
    assert_eq!(
        graph.to_string(),
        "GRAPH: {A: [C], B: [C], C: [A, B, E], E: [C]}"
    );
}

#[test]
fn test_remove_missing_edge_between_existing_vertices() {
    let mut graph = five_cycle();
    let before = graph.clone();
    graph.remove_edge("A", "E");
    assert_eq!(graph, before);
}

#[test]
fn test_vertices_and_edges() {
    let graph = UndirectedGraph::new();
    assert!(graph.vertices().is_empty());
    assert!(graph.edges().is_empty());

    let graph = UndirectedGraph::from_edges(pairs(&["AB", "AC", "BC", "BD", "CD", "CE"]));
    assert_eq!(graph.vertices(), labels("ABCDE"));
    assert_eq!(
        graph.edges(),
        pairs(&["AB", "AC", "BC", "BD", "CD", "CE"])
    );
}

#[test]
fn test_is_valid_path() {
    let graph = five_cycle();
    let cases = [
        ("ABC", true),
        ("ADE", false),
        ("ECABDCBE", false),
        ("ACDECB", true),
        ("", true),
        ("D", true),
        ("Z", false),
    ];

    for (path, expected) in cases {
        assert_eq!(graph.is_valid_path(&labels(path)), expected, "path {:?}", path);
    }
}

#[test]
fn test_single_isolated_vertex_is_not_a_valid_path() {
    let mut graph = five_cycle();
    graph.add_vertex("Z");
    assert!(graph.contains_vertex("Z"));
    assert!(!graph.is_valid_path(&["Z"]));
}

#[test]
fn test_dfs_and_bfs() {
    let graph = two_components();
    let cases = [
        ("A", "ACBDEH", "ACEBDH"),
        ("B", "BCAEDH", "BCDEHA"),
        ("C", "CAEBDH", "CABDEH"),
        ("D", "DBCAEH", "DBCEHA"),
        ("E", "EACBDH", "EABCDH"),
        ("G", "GFQ", "GFQ"),
        ("H", "HBCAED", "HBCDEA"),
    ];

    for (start, dfs, bfs) in cases {
        assert_eq!(graph.dfs(start, None), labels(dfs), "dfs from {}", start);
        assert_eq!(graph.bfs(start, None), labels(bfs), "bfs from {}", start);
    }
}

#[test]
fn test_dfs_and_bfs_with_end() {
    let graph = two_components();
    let cases = [
        ("B", "G", "BCAEDH", "BCDEHA"),
        ("C", "E", "CAE", "CABDE"),
        ("D", "D", "D", "D"),
        ("E", "C", "EAC", "EABC"),
        ("G", "B", "GFQ", "GFQ"),
        ("H", "A", "HBCA", "HBCDEA"),
    ];

    for (start, end, dfs, bfs) in cases {
        assert_eq!(graph.dfs(start, Some(end)), labels(dfs), "dfs {}-{}", start, end);
        assert_eq!(graph.bfs(start, Some(end)), labels(bfs), "bfs {}-{}", start, end);
    }
}

#[test]
fn test_traversal_from_unknown_start() {
    let graph = two_components();
    assert!(graph.dfs("Z", None).is_empty());
    assert!(graph.bfs("Z", Some("A")).is_empty());
}

#[test]
fn test_count_connected_components() {
    assert_eq!(two_components().count_connected_components(), 2);
    assert_eq!(UndirectedGraph::new().count_connected_components(), 0);

    let mut graph = UndirectedGraph::new();
    graph.add_vertex("solo");
    assert_eq!(graph.count_connected_components(), 1);
}

/// Replays a sequence of edits, checking component count and cycle state
/// after each one
#[test]
fn test_components_and_cycles_through_edits() {
    let mut graph = two_components();
    let steps = [
        ("add QH", 1, true),
        ("remove FG", 2, true),
        ("remove GQ", 3, true),
        ("remove HQ", 4, true),
        ("remove AE", 4, true),
        ("remove CA", 5, true),
        ("remove EB", 5, true),
        ("remove CE", 5, true),
        ("remove DE", 6, true),
        ("remove BC", 6, false),
        ("add EA", 5, false),
        ("add EF", 4, false),
        ("add GQ", 3, false),
        ("add AC", 2, false),
        ("add DQ", 1, false),
        ("add EG", 1, true),
        ("add QH", 1, true),
        ("remove CD", 1, true),
        ("remove BD", 1, false),
        ("remove QG", 2, false),
        ("add FG", 2, true),
        ("remove GE", 2, false),
    ];

    for (step, components, cycle) in steps {
        let (command, edge) = step.split_once(' ').unwrap();
        let (u, v) = edge.split_at(1);
        if command == "add" {
            graph.add_edge(u, v);
        } else {
            graph.remove_edge(u, v);
        }
        assert_eq!(graph.count_connected_components(), components, "after {}", step);
        assert_eq!(graph.has_cycle(), cycle, "after {}", step);
    }
}

#[test]
fn test_triangle_cycle_toggles() {
    let mut graph = UndirectedGraph::from_edges(pairs(&["AB", "BC", "CA"]));
    assert!(graph.has_cycle());
    graph.remove_edge("C", "A");
    assert!(!graph.has_cycle());
}

#[test]
fn test_empty_graph_has_no_cycle() {
    assert!(!UndirectedGraph::new().has_cycle());
}

#[test]
fn test_display_cutoff_counts_multi_line_separators() {
    // 67 characters joined with ", " but 71 joined with "\n  "
    let graph = UndirectedGraph::from_edges([
        ("A", "B"),
        ("A", "C"),
        ("A", "D"),
        ("A", "EE"),
        ("B", "C"),
        ("B", "D"),
        ("C", "D"),
    ]);
    assert_eq!(
        graph.to_string(),
        "GRAPH: {\n  A: [B, C, D, EE]\n  B: [A, C, D]\n  C: [A, B, D]\n  D: [A, B, C]\n  EE: [A]}"
    );
}

#[test]
fn test_multi_line_display() {
    let rendered = two_components().to_string();
    assert!(rendered.starts_with("GRAPH: {\n  A: [C, E]\n  E: [A, B, C, D]"));
    assert!(rendered.ends_with("F: [G]}"));
}

mod properties {
    use super::*;
    use proptest::prelude::*;

    const LABELS: &[&str] = &["A", "B", "C", "D", "E", "F", "G"];

    fn arb_label() -> impl Strategy<Value = String> {
        proptest::sample::select(LABELS).prop_map(str::to_string)
    }

    fn arb_graph() -> impl Strategy<Value = UndirectedGraph> {
        proptest::collection::vec((arb_label(), arb_label()), 0..16)
            .prop_map(|edges| UndirectedGraph::from_edges(edges))
    }

    fn assert_symmetric_and_sorted(graph: &UndirectedGraph) -> Result<(), TestCaseError> {
        for u in graph.vertices() {
            let list = graph.neighbors(&u).unwrap_or_default();
            prop_assert!(list.windows(2).all(|w| w[0] < w[1]));
            for v in list {
                prop_assert!(v != &u);
                prop_assert!(graph.has_edge(v, &u));
            }
        }
        Ok(())
    }

    proptest! {
        #[test]
        fn adjacency_stays_symmetric_and_sorted(graph in arb_graph(), doomed in arb_label()) {
            assert_symmetric_and_sorted(&graph)?;
            let mut graph = graph;
            graph.remove_vertex(&doomed);
            assert_symmetric_and_sorted(&graph)?;
        }

        #[test]
        fn add_then_remove_restores_edges(graph in arb_graph(), u in arb_label(), v in arb_label()) {
            prop_assume!(!graph.has_edge(&u, &v));
            let before = graph.edges();
            let mut graph = graph;
            graph.add_edge(&u, &v);
            graph.remove_edge(&u, &v);
            prop_assert_eq!(graph.edges(), before);
        }

        #[test]
        fn add_edge_is_idempotent(graph in arb_graph(), u in arb_label(), v in arb_label()) {
            let mut once = graph.clone();
            once.add_edge(&u, &v);
            let mut twice = once.clone();
            twice.add_edge(&u, &v);
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn empty_path_is_valid(graph in arb_graph()) {
            prop_assert!(graph.is_valid_path::<&str>(&[]));
        }

        #[test]
        fn single_component_iff_dfs_reaches_everything(graph in arb_graph()) {
            prop_assume!(!graph.is_empty());
            let first = graph.vertices()[0].clone();
            let reaches_all = graph.dfs(&first, None).len() == graph.vertex_count();
            prop_assert_eq!(graph.count_connected_components() == 1, reaches_all);
        }

        #[test]
        fn cycle_iff_more_edges_than_a_forest(graph in arb_graph()) {
            let forest_edges = graph.vertex_count() - graph.count_connected_components();
            prop_assert_eq!(graph.has_cycle(), graph.edges().len() > forest_edges);
        }

        #[test]
        fn dfs_and_bfs_reach_the_same_set(graph in arb_graph(), start in arb_label()) {
            let mut dfs = graph.dfs(&start, None);
            let mut bfs = graph.bfs(&start, None);
            dfs.sort();
            bfs.sort();
            prop_assert_eq!(dfs, bfs);
        }
    }
}
