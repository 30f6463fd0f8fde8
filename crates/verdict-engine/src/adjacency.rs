//! Outgoing/incoming edge indices keyed by node id.

use indexmap::IndexMap;
use verdict_core::{Edge, NodeId};

/// Adjacency lists over an edge slice, holding edge indices rather
/// than copies.
///
/// Built once per engine call; incremental propagation walks outgoing
/// edges forward and incoming edges in the reverse (contrapositive or
/// symmetric) direction.
#[derive(Debug, Default)]
pub struct Adjacency {
    outgoing: IndexMap<NodeId, Vec<usize>>,
    incoming: IndexMap<NodeId, Vec<usize>>,
}

impl Adjacency {
    /// Index an edge slice.
    pub fn from_edges(edges: &[Edge]) -> Self {
        let mut adjacency = Self::default();
        for (index, edge) in edges.iter().enumerate() {
            adjacency
                .outgoing
                .entry(edge.source.clone())
                .or_default()
                .push(index);
            adjacency
                .incoming
                .entry(edge.target.clone())
                .or_default()
                .push(index);
        }
        adjacency
    }

    /// Indices of edges leaving `node`.
    pub fn outgoing(&self, node: &NodeId) -> &[usize] {
        self.outgoing.get(node).map_or(&[], Vec::as_slice)
    }

    /// Indices of edges arriving at `node`.
    pub fn incoming(&self, node: &NodeId) -> &[usize] {
        self.incoming.get(node).map_or(&[], Vec::as_slice)
    }
}
