use std::collections::{HashMap, HashSet};

use crate::graph::NeighborProvider;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    /// On the current exploration path
    Active,
    /// Fully explored, no cycle through it
    Done,
}

/// Detect a directed cycle by looking for a back edge during depth-first
/// exploration started from every unexplored vertex in turn.
///
/// Uses an explicit stack of `(vertex, pending successors)` frames.
pub fn has_directed_cycle<G: NeighborProvider>(graph: &G) -> bool {
    let mut marks: HashMap<G::Vertex, Mark> = HashMap::new();

    for root in graph.vertex_list() {
        if marks.contains_key(&root) {
            continue;
        }

        marks.insert(root.clone(), Mark::Active);
        let successors = graph.neighbors_of(&root).into_iter();
        let mut stack = vec![(root, successors)];

        while let Some((_, pending)) = stack.last_mut() {
            match pending.next() {
                Some(next) => match marks.get(&next) {
                    Some(Mark::Active) => {
                        tracing::trace!("back edge found");
                        return true;
                    }
                    Some(Mark::Done) => {}
                    None => {
                        marks.insert(next.clone(), Mark::Active);
                        let successors = graph.neighbors_of(&next).into_iter();
                        stack.push((next, successors));
                    }
                },
                None => {
                    if let Some((finished, _)) = stack.pop() {
                        marks.insert(finished, Mark::Done);
                    }
                }
            }
        }
    }

    false
}

/// Detect a cycle in a symmetric (undirected) adjacency structure.
///
/// Each stack entry remembers the vertex it was discovered from; reaching an
/// already discovered vertex through any edge other than that parent edge
/// closes a cycle. Every component is scanned.
pub fn has_undirected_cycle<G: NeighborProvider>(graph: &G) -> bool {
    let mut discovered: HashSet<G::Vertex> = HashSet::new();

    for root in graph.vertex_list() {
        if !discovered.insert(root.clone()) {
            continue;
        }

        let mut stack: Vec<(G::Vertex, Option<G::Vertex>)> = vec![(root, None)];

        while let Some((current, parent)) = stack.pop() {
            for next in graph.neighbors_of(&current).into_iter().rev() {
                if parent.as_ref() == Some(&next) {
                    continue;
                }
                if !discovered.insert(next.clone()) {
                    tracing::trace!("non-tree edge found");
                    return true;
                }
                stack.push((next, Some(current.clone())));
            }
        }
    }

    false
}
