//! Node/edge constructors and the owned graph fixture.

use indexmap::IndexMap;
use verdict_core::{
    Edge, LogicState, Node, NodeId, NodeKind, NodeState, Provenance, RelationKind,
};

/// Shorthand node constructor.
pub fn node(id: &str, kind: NodeKind, confidence: f64) -> Node {
    Node::new(id, kind, confidence)
}

/// Shorthand edge constructor.
pub fn edge(id: &str, source: &str, target: &str, relation: RelationKind, strength: f64) -> Edge {
    Edge::new(id, source, target, relation, strength)
}

/// An owned graph snapshot with a mutable state table.
///
/// States are seeded from each node's static confidence on
/// construction; tests adjust them with the `set_*` helpers before
/// assembling rule inputs.
pub struct GraphFixture {
    /// Nodes keyed by id.
    pub nodes: IndexMap<NodeId, Node>,
    /// Edges in insertion order.
    pub edges: Vec<Edge>,
    /// Per-node states, seeded from static confidence.
    pub states: IndexMap<NodeId, NodeState>,
}

impl GraphFixture {
    /// Build a fixture, seeding every node's state from its confidence.
    pub fn new(nodes: Vec<Node>, edges: Vec<Edge>) -> Self {
        let states = nodes
            .iter()
            .map(|node| (node.id.clone(), NodeState::seeded(node.confidence)))
            .collect();
        let nodes = nodes
            .into_iter()
            .map(|node| (node.id.clone(), node))
            .collect();
        Self {
            nodes,
            edges,
            states,
        }
    }

    /// Overwrite a node's logic state and confidence.
    pub fn set_state(&mut self, id: &str, state: LogicState, confidence: f64) {
        let entry = self
            .states
            .get_mut(&NodeId::from(id))
            .expect("fixture node state");
        entry.state = state;
        entry.confidence = confidence;
    }

    /// Overwrite a node's provenance list.
    pub fn set_derived(&mut self, id: &str, from: &[&str]) {
        let entry = self
            .states
            .get_mut(&NodeId::from(id))
            .expect("fixture node state");
        entry.derived_from = from.iter().map(|s| NodeId::from(*s)).collect::<Provenance>();
    }

    /// Overwrite a node's conflict partner list.
    pub fn set_conflicts(&mut self, id: &str, with: &[&str]) {
        let entry = self
            .states
            .get_mut(&NodeId::from(id))
            .expect("fixture node state");
        entry.conflicts_with = Some(with.iter().map(|s| NodeId::from(*s)).collect());
    }

    /// Current state of a node.
    pub fn state(&self, id: &str) -> &NodeState {
        self.states
            .get(&NodeId::from(id))
            .expect("fixture node state")
    }
}
