use std::collections::HashSet;

use crate::graph::algos::search::depth_first;
use crate::graph::NeighborProvider;

/// Count connected components by starting a depth-first walk from each vertex
/// not yet reached by an earlier walk, in `vertex_list` order.
///
/// An empty graph has zero components.
pub fn count_components<G: NeighborProvider>(graph: &G) -> usize {
    let mut reached: HashSet<G::Vertex> = HashSet::new();
    let mut components = 0;

    for vertex in graph.vertex_list() {
        if reached.contains(&vertex) {
            continue;
        }
        components += 1;
        reached.extend(depth_first(graph, &vertex, None));
    }

    components
}
