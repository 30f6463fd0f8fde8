//! Rule input/output contracts and the read-only graph view.

use indexmap::IndexMap;
use verdict_core::{Edge, LogicState, Node, NodeId, NodeState, Provenance};

// ── GraphView ──────────────────────────────────────────────────────

/// Read-only borrowed view of the full node, edge, and state
/// collections for one run.
///
/// Rules receive this inside [`RuleInput`] so they can look up siblings
/// beyond the single edge being evaluated — for example, whether any
/// *other* edge also achieves the same target. Rules never mutate
/// through this view; the engine is the sole writer of node state.
#[derive(Clone, Copy)]
pub struct GraphView<'a> {
    nodes: &'a IndexMap<NodeId, Node>,
    edges: &'a [Edge],
    states: &'a IndexMap<NodeId, NodeState>,
}

impl<'a> GraphView<'a> {
    /// Bundle borrowed collections into a view.
    pub fn new(
        nodes: &'a IndexMap<NodeId, Node>,
        edges: &'a [Edge],
        states: &'a IndexMap<NodeId, NodeState>,
    ) -> Self {
        Self {
            nodes,
            edges,
            states,
        }
    }

    /// Look up a node by id.
    pub fn node(&self, id: &NodeId) -> Option<&'a Node> {
        self.nodes.get(id)
    }

    /// Look up a node's current state by id.
    pub fn state(&self, id: &NodeId) -> Option<&'a NodeState> {
        self.states.get(id)
    }

    /// Edges whose target is `target`.
    pub fn edges_into(&self, target: &'a NodeId) -> impl Iterator<Item = &'a Edge> + 'a {
        self.edges.iter().filter(move |e| &e.target == target)
    }
}

// ── RuleInput ──────────────────────────────────────────────────────

/// Everything a rule may read when evaluating one edge.
///
/// When the engine traverses an edge in the contrapositive or symmetric
/// direction, `source`/`target` arrive already swapped relative to the
/// stored edge; `edge` is always the stored edge.
pub struct RuleInput<'a> {
    /// The node the inference flows from.
    pub source: &'a Node,
    /// Current state of the source node.
    pub source_state: &'a NodeState,
    /// The node the inference flows into.
    pub target: &'a Node,
    /// Current state of the target node.
    pub target_state: &'a NodeState,
    /// The edge being evaluated, as stored.
    pub edge: &'a Edge,
    /// Read-only access to the rest of the graph.
    pub graph: GraphView<'a>,
}

// ── RuleOutput ─────────────────────────────────────────────────────

/// A proposed state update for the target node of an evaluation.
///
/// Rules return a fresh value; the engine alone decides acceptance and
/// performs the write.
#[derive(Clone, Debug, PartialEq)]
pub struct RuleOutput {
    /// Proposed logic state for the target.
    pub state: LogicState,
    /// Proposed confidence for the target, 0–100.
    pub confidence: f64,
    /// Proposed provenance list for the target.
    pub derived_from: Provenance,
    /// Conflict partners, when `state` is Conflict.
    pub conflicts_with: Option<Vec<NodeId>>,
    /// Whether the engine should continue traversal past this edge
    /// during incremental propagation.
    pub should_propagate: bool,
    /// Human-readable explanation for the event trail.
    pub reason: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use verdict_core::{NodeKind, RelationKind};

    fn collections() -> (IndexMap<NodeId, Node>, Vec<Edge>, IndexMap<NodeId, NodeState>) {
        let nodes: IndexMap<NodeId, Node> = [
            Node::new("a", NodeKind::Fact, 90.0),
            Node::new("b", NodeKind::Goal, 50.0),
            Node::new("c", NodeKind::Action, 70.0),
        ]
        .into_iter()
        .map(|n| (n.id.clone(), n))
        .collect();
        let edges = vec![
            Edge::new("e1", "a", "b", RelationKind::Achieves, 1.0),
            Edge::new("e2", "c", "b", RelationKind::Achieves, 1.0),
            Edge::new("e3", "a", "c", RelationKind::Supports, 50.0),
        ];
        let states = nodes
            .values()
            .map(|n| (n.id.clone(), NodeState::seeded(n.confidence)))
            .collect();
        (nodes, edges, states)
    }

    #[test]
    fn lookups_resolve_known_ids() {
        let (nodes, edges, states) = collections();
        let view = GraphView::new(&nodes, &edges, &states);

        assert_eq!(view.node(&"a".into()).map(|n| n.kind), Some(NodeKind::Fact));
        assert_eq!(
            view.state(&"a".into()).map(|s| s.state),
            Some(LogicState::True)
        );
        assert!(view.node(&"ghost".into()).is_none());
        assert!(view.state(&"ghost".into()).is_none());
    }

    #[test]
    fn edges_into_filters_by_target() {
        let (nodes, edges, states) = collections();
        let view = GraphView::new(&nodes, &edges, &states);

        let b = NodeId::from("b");
        let into_b: Vec<_> = view.edges_into(&b).map(|e| e.id.clone()).collect();
        assert_eq!(into_b, vec!["e1".into(), "e2".into()]);

        let a = NodeId::from("a");
        assert_eq!(view.edges_into(&a).count(), 0);
    }
}
