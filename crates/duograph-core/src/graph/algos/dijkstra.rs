use crate::graph::types::Distance;
use crate::graph::DirectedGraph;
use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::time::Instant;

/// Wrapper for BinaryHeap to use as min-heap (ordered by tentative distance,
/// then by vertex index so the lowest index is settled first on ties)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeapEntry {
    pub vertex: usize,
    pub distance: u64,
}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.distance
            .cmp(&other.distance)
            .then_with(|| self.vertex.cmp(&other.vertex))
    }
}

/// State tracked during Dijkstra
struct DijkstraState {
    distances: Vec<Distance>,
    finished: Vec<bool>,
    heap: BinaryHeap<Reverse<HeapEntry>>,
}

impl DijkstraState {
    fn new(vertex_count: usize, src: usize) -> Self {
        let mut distances = vec![Distance::Infinite; vertex_count];
        distances[src] = Distance::ZERO;

        let mut heap = BinaryHeap::new();
        heap.push(Reverse(HeapEntry {
            vertex: src,
            distance: 0,
        }));

        Self {
            distances,
            finished: vec![false; vertex_count],
            heap,
        }
    }

    /// Pop the closest unfinished vertex, skipping stale heap entries
    fn next_closest(&mut self) -> Option<HeapEntry> {
        while let Some(Reverse(entry)) = self.heap.pop() {
            if !self.finished[entry.vertex] {
                return Some(entry);
            }
        }
        None
    }
}

/// Compute shortest distances from `src` to every vertex.
///
/// Entry `i` of the result is the length of the lightest path from `src` to
/// `i`, [`Distance::Infinite`] when `i` is unreachable, and zero at `src`.
/// Stops once no unfinished vertex has a finite distance. An out-of-range
/// `src` yields an empty result.
#[tracing::instrument(level = "debug", skip(graph), fields(vertex_count = graph.vertex_count()))]
pub fn shortest_distances(graph: &DirectedGraph, src: usize) -> Vec<Distance> {
    let start = Instant::now();
    if src >= graph.vertex_count() {
        tracing::debug!("source out of range");
        return Vec::new();
    }

    let mut state = DijkstraState::new(graph.vertex_count(), src);

    while let Some(HeapEntry { vertex, distance }) = state.next_closest() {
        state.finished[vertex] = true;
        let settled = Distance::Finite(distance);

        for (next, weight) in graph.out_edges(vertex) {
            if state.finished[next] {
                continue;
            }
            let candidate = settled.extend(weight);
            if candidate < state.distances[next] {
                state.distances[next] = candidate;
                if let Distance::Finite(d) = candidate {
                    state.heap.push(Reverse(HeapEntry {
                        vertex: next,
                        distance: d,
                    }));
                }
            }
        }
    }

    crate::trace_time!(start, "dijkstra", src = src);
    state.distances
}
