//! Shared graph fixtures for Verdict tests.
//!
//! [`GraphFixture`] owns a small node/edge collection plus a seeded
//! state table, and assembles [`RuleInput`]s so rule tests can drive
//! `propagate()` directly without an engine.

#![forbid(unsafe_code)]

pub mod fixtures;

pub use fixtures::{edge, node, GraphFixture};

use verdict_core::{LogicState, NodeId, NodeState};
use verdict_rule::{GraphView, RuleInput};

impl GraphFixture {
    /// Read-only view over the fixture's collections.
    pub fn view(&self) -> GraphView<'_> {
        GraphView::new(&self.nodes, &self.edges, &self.states)
    }

    /// Assemble the forward-direction input for the edge at `index`.
    ///
    /// # Panics
    ///
    /// Panics if the edge or its endpoints are missing; fixtures are
    /// test data, a dangling reference is a bug in the test.
    pub fn input(&self, index: usize) -> RuleInput<'_> {
        self.input_inner(index, false)
    }

    /// Assemble the reverse-direction input for the edge at `index`,
    /// with source and target swapped as the engine would pass them.
    pub fn input_reversed(&self, index: usize) -> RuleInput<'_> {
        self.input_inner(index, true)
    }

    fn input_inner(&self, index: usize, reversed: bool) -> RuleInput<'_> {
        let edge = &self.edges[index];
        let (source_id, target_id) = if reversed {
            (&edge.target, &edge.source)
        } else {
            (&edge.source, &edge.target)
        };
        RuleInput {
            source: self.nodes.get(source_id).expect("fixture source node"),
            source_state: self.states.get(source_id).expect("fixture source state"),
            target: self.nodes.get(target_id).expect("fixture target node"),
            target_state: self.states.get(target_id).expect("fixture target state"),
            edge,
            graph: self.view(),
        }
    }
}

/// Shorthand override map entry for engine runs.
pub fn override_state(id: &str, state: LogicState, confidence: f64) -> (NodeId, NodeState) {
    (NodeId::from(id), NodeState::asserted(state, confidence))
}
