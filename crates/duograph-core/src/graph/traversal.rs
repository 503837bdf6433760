use std::hash::Hash;

/// Trait for providing vertices and ordered adjacency to the shared algorithms
///
/// `neighbors_of` must return neighbours in the order a traversal should
/// visit them. Unknown vertices have no neighbours.
pub trait NeighborProvider {
    type Vertex: Clone + Eq + Hash;

    fn contains_vertex(&self, v: &Self::Vertex) -> bool;
    fn vertex_list(&self) -> Vec<Self::Vertex>;
    fn neighbors_of(&self, v: &Self::Vertex) -> Vec<Self::Vertex>;
}
