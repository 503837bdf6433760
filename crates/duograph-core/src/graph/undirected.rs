//! Undirected unweighted graph backed by sorted adjacency lists
//!
//! Vertices are string labels kept in insertion order. Each adjacency list is
//! sorted and deduplicated, and the lists are symmetric: `v` is in `u`'s list
//! exactly when `u` is in `v`'s.

use std::fmt;

use indexmap::IndexMap;

use crate::graph::algos::{breadth_first, count_components, depth_first, has_undirected_cycle};
use crate::graph::NeighborProvider;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UndirectedGraph {
    adj_list: IndexMap<String, Vec<String>>,
}

/// Insert `label` into a sorted list unless already present
fn insert_sorted(list: &mut Vec<String>, label: &str) {
    if let Err(pos) = list.binary_search_by(|probe| probe.as_str().cmp(label)) {
        list.insert(pos, label.to_string());
    }
}

/// Remove `label` from a sorted list, returning whether it was present
fn remove_sorted(list: &mut Vec<String>, label: &str) -> bool {
    match list.binary_search_by(|probe| probe.as_str().cmp(label)) {
        Ok(pos) => {
            list.remove(pos);
            true
        }
        Err(_) => false,
    }
}

impl UndirectedGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph by adding each `(u, v)` edge in order
    pub fn from_edges<I, S>(edges: I) -> Self
    where
        I: IntoIterator<Item = (S, S)>,
        S: AsRef<str>,
    {
        let mut graph = Self::new();
        for (u, v) in edges {
            graph.add_edge(u.as_ref(), v.as_ref());
        }
        graph
    }

    pub fn vertex_count(&self) -> usize {
        self.adj_list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.adj_list.is_empty()
    }

    pub fn contains_vertex(&self, v: &str) -> bool {
        self.adj_list.contains_key(v)
    }

    /// Sorted neighbours of `v`, or `None` if `v` is not a vertex
    pub fn neighbors(&self, v: &str) -> Option<&[String]> {
        self.adj_list.get(v).map(Vec::as_slice)
    }

    pub fn degree(&self, v: &str) -> usize {
        self.neighbors(v).map_or(0, <[String]>::len)
    }

    pub fn has_edge(&self, u: &str, v: &str) -> bool {
        self.neighbors(u)
            .is_some_and(|list| list.binary_search_by(|probe| probe.as_str().cmp(v)).is_ok())
    }

    /// Add an isolated vertex; existing vertices are left untouched
    pub fn add_vertex(&mut self, v: &str) {
        if !self.adj_list.contains_key(v) {
            self.adj_list.insert(v.to_string(), Vec::new());
        }
    }

    /// Connect `u` and `v`, creating either vertex if needed.
    ///
    /// Self-loops are ignored and repeated edges are no-ops.
    pub fn add_edge(&mut self, u: &str, v: &str) {
        if u == v {
            tracing::debug!(u, v, reason = "self-loop", "ignoring edge");
            return;
        }

        self.add_vertex(u);
        self.add_vertex(v);

        if let Some(list) = self.adj_list.get_mut(u) {
            insert_sorted(list, v);
        }
        if let Some(list) = self.adj_list.get_mut(v) {
            insert_sorted(list, u);
        }
    }

    /// Disconnect `u` and `v`; both vertices remain.
    ///
    /// Ignored unless both vertices exist and are adjacent.
    pub fn remove_edge(&mut self, u: &str, v: &str) {
        if !(self.has_edge(u, v) && self.has_edge(v, u)) {
            tracing::debug!(u, v, "ignoring edge removal, no such edge");
            return;
        }

        if let Some(list) = self.adj_list.get_mut(u) {
            remove_sorted(list, v);
        }
        if let Some(list) = self.adj_list.get_mut(v) {
            remove_sorted(list, u);
        }
    }

    /// Remove `v` and every edge touching it
    pub fn remove_vertex(&mut self, v: &str) {
        if self.adj_list.shift_remove(v).is_none() {
            tracing::debug!(v, "ignoring removal of unknown vertex");
            return;
        }

        for list in self.adj_list.values_mut() {
            remove_sorted(list, v);
        }
    }

    /// Vertices in insertion order
    pub fn vertices(&self) -> Vec<String> {
        self.adj_list.keys().cloned().collect()
    }

    /// Each edge once, oriented from whichever endpoint was inserted first
    pub fn edges(&self) -> Vec<(String, String)> {
        let mut edges = Vec::new();
        for (index, (u, list)) in self.adj_list.iter().enumerate() {
            for v in list {
                let later = self
                    .adj_list
                    .get_index_of(v.as_str())
                    .is_some_and(|other| other > index);
                if later {
                    edges.push((u.clone(), v.clone()));
                }
            }
        }
        edges
    }

    /// Check a walk through the graph.
    ///
    /// The empty path is valid. A single vertex is only valid when it has at
    /// least one neighbour, so an isolated vertex is rejected. Longer paths
    /// need every consecutive pair to be adjacent.
    pub fn is_valid_path<S: AsRef<str>>(&self, path: &[S]) -> bool {
        match path {
            [] => true,
            [only] => self.degree(only.as_ref()) > 0,
            _ => path
                .windows(2)
                .all(|step| self.has_edge(step[0].as_ref(), step[1].as_ref())),
        }
    }

    /// Depth-first walk visiting neighbours alphabetically, stopping at `end`
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn dfs(&self, start: &str, end: Option<&str>) -> Vec<String> {
        let end = end.map(str::to_string);
        depth_first(self, &start.to_string(), end.as_ref())
    }

    /// Breadth-first walk visiting neighbours alphabetically, stopping at `end`
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn bfs(&self, start: &str, end: Option<&str>) -> Vec<String> {
        let end = end.map(str::to_string);
        breadth_first(self, &start.to_string(), end.as_ref())
    }

    /// Number of connected components; zero for an empty graph
    pub fn count_connected_components(&self) -> usize {
        count_components(self)
    }

    /// True if any component contains a cycle; false for an empty graph
    pub fn has_cycle(&self) -> bool {
        has_undirected_cycle(self)
    }
}

impl NeighborProvider for UndirectedGraph {
    type Vertex = String;

    fn contains_vertex(&self, v: &String) -> bool {
        self.adj_list.contains_key(v.as_str())
    }

    fn vertex_list(&self) -> Vec<String> {
        self.vertices()
    }

    fn neighbors_of(&self, v: &String) -> Vec<String> {
        self.neighbors(v).map(<[String]>::to_vec).unwrap_or_default()
    }
}

impl fmt::Display for UndirectedGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lines: Vec<String> = self
            .adj_list
            .iter()
            .map(|(v, list)| format!("{}: [{}]", v, list.join(", ")))
            .collect();
        // The cutoff is measured on the multi-line body
        let body = lines.join("\n  ");

        if body.len() < 70 {
            write!(f, "GRAPH: {{{}}}", lines.join(", "))
        } else {
            write!(f, "GRAPH: {{\n  {}}}", body)
        }
    }
}

#[cfg(test)]
mod tests;
