use std::collections::{HashSet, VecDeque};

use crate::graph::NeighborProvider;

/// Depth-first walk from `start`, visiting neighbours in provider order.
///
/// Neighbours are pushed in reverse so the stack pops them in order. The walk
/// stops as soon as `end` is visited; otherwise every reachable vertex is
/// returned in visitation order. An unknown `start` yields an empty walk.
pub fn depth_first<G: NeighborProvider>(
    graph: &G,
    start: &G::Vertex,
    end: Option<&G::Vertex>,
) -> Vec<G::Vertex> {
    if !graph.contains_vertex(start) {
        return Vec::new();
    }

    let mut visited = HashSet::new();
    let mut order = Vec::new();
    let mut stack = vec![start.clone()];

    while let Some(current) = stack.pop() {
        if !visited.insert(current.clone()) {
            continue;
        }
        order.push(current.clone());

        if end == Some(&current) {
            tracing::trace!(visited = order.len(), "dfs reached end");
            break;
        }

        for next in graph.neighbors_of(&current).into_iter().rev() {
            if !visited.contains(&next) {
                stack.push(next);
            }
        }
    }

    order
}

/// Breadth-first walk from `start`, enqueueing neighbours in provider order.
///
/// Same start and early-stop rules as [`depth_first`].
pub fn breadth_first<G: NeighborProvider>(
    graph: &G,
    start: &G::Vertex,
    end: Option<&G::Vertex>,
) -> Vec<G::Vertex> {
    if !graph.contains_vertex(start) {
        return Vec::new();
    }

    let mut visited = HashSet::new();
    let mut order = Vec::new();
    let mut queue = VecDeque::from([start.clone()]);

    while let Some(current) = queue.pop_front() {
        if !visited.insert(current.clone()) {
            continue;
        }
        order.push(current.clone());

        if end == Some(&current) {
            tracing::trace!(visited = order.len(), "bfs reached end");
            break;
        }

        for next in graph.neighbors_of(&current) {
            if !visited.contains(&next) {
                queue.push_back(next);
            }
        }
    }

    order
}
