//! Incremental propagation via `PropagationEngine::update_node`.

use verdict_core::{LogicState, NodeId, NodeKind, RelationKind};
use verdict_engine::{EngineConfig, PropagationEngine};
use verdict_rules::standard_registry;
use verdict_test_utils::{edge, node};

fn engine() -> PropagationEngine {
    PropagationEngine::new(EngineConfig::default(), standard_registry()).unwrap()
}

fn id(s: &str) -> NodeId {
    NodeId::from(s)
}

#[test]
fn assertion_propagates_downstream() {
    let nodes = vec![
        node("a", NodeKind::Assumption, 50.0),
        node("b", NodeKind::Goal, 50.0),
    ];
    let edges = vec![edge("e", "a", "b", RelationKind::Causes, 1.0)];

    let mut engine = engine();
    let result = engine.update_node(&id("a"), LogicState::True, 90.0, &nodes, &edges);

    assert!(result.converged);
    assert_eq!(result.iterations, 2);
    assert_eq!(result.events.len(), 1);

    let a = &result.states[&id("a")];
    assert_eq!(a.state, LogicState::True);
    assert_eq!(a.confidence, 90.0);
    // Asserted, not derived.
    assert!(a.derived_from.is_empty());

    let b = &result.states[&id("b")];
    assert_eq!(b.state, LogicState::True);
    assert_eq!(b.confidence, 90.0);
    assert_eq!(b.derived_from.to_vec(), vec![id("a")]);
}

#[test]
fn contrapositive_walks_upstream() {
    let nodes = vec![
        node("a", NodeKind::Assumption, 50.0),
        node("b", NodeKind::Goal, 50.0),
    ];
    let edges = vec![edge("e", "a", "b", RelationKind::Causes, 1.0)];

    let mut engine = engine();
    let result = engine.update_node(&id("b"), LogicState::False, 80.0, &nodes, &edges);

    assert!(result.converged);
    let a = &result.states[&id("a")];
    assert_eq!(a.state, LogicState::False);
    assert!((a.confidence - 72.0).abs() < 1e-9);
    assert_eq!(a.derived_from.to_vec(), vec![id("b")]);

    assert_eq!(result.events.len(), 1);
    assert!(result.events[0].reversed);
}

#[test]
fn cyclic_graph_terminates() {
    let nodes = vec![
        node("a", NodeKind::Assumption, 50.0),
        node("b", NodeKind::Assumption, 50.0),
    ];
    let edges = vec![
        edge("e1", "a", "b", RelationKind::Causes, 1.0),
        edge("e2", "b", "a", RelationKind::Causes, 1.0),
    ];

    let mut engine = engine();
    let result = engine.update_node(&id("a"), LogicState::True, 90.0, &nodes, &edges);

    assert!(result.converged);
    assert_eq!(result.states[&id("b")].state, LogicState::True);
    assert_eq!(result.states[&id("b")].confidence, 90.0);
    // Each node expands at most once.
    assert_eq!(result.iterations, 2);
    assert_eq!(result.events.len(), 1);
}

#[test]
fn unknown_node_is_a_noop() {
    let nodes = vec![node("a", NodeKind::Assumption, 50.0)];
    let mut engine = engine();
    let result = engine.update_node(&id("ghost"), LogicState::True, 90.0, &nodes, &[]);

    assert!(result.converged);
    assert_eq!(result.iterations, 0);
    assert!(result.events.is_empty());
    assert!(!result.states.contains_key(&id("ghost")));
}

#[test]
fn incremental_update_matches_a_full_run() {
    let nodes = vec![
        node("a", NodeKind::Fact, 90.0),
        node("b", NodeKind::Goal, 50.0),
        node("c", NodeKind::Goal, 50.0),
    ];
    let edges = vec![
        edge("e1", "a", "b", RelationKind::Causes, 1.0),
        edge("e2", "b", "c", RelationKind::Causes, 1.0),
    ];

    let mut full = engine();
    let full_result = full.run(&nodes, &edges, None);

    let mut incremental = engine();
    let inc_result = incremental.update_node(&id("a"), LogicState::True, 90.0, &nodes, &edges);

    for node_id in ["a", "b", "c"] {
        let want = &full_result.states[&id(node_id)];
        let got = &inc_result.states[&id(node_id)];
        assert_eq!(got.state, want.state, "node {node_id}");
        assert_eq!(got.confidence, want.confidence, "node {node_id}");
    }
}

#[test]
fn topological_sweep_reaches_the_full_run_fixpoint() {
    let nodes = vec![
        node("a", NodeKind::Fact, 10.0),
        node("b", NodeKind::Goal, 60.0),
        node("c", NodeKind::Goal, 60.0),
    ];
    let edges = vec![
        edge("e1", "a", "b", RelationKind::Depends, 1.0),
        edge("e2", "b", "c", RelationKind::Depends, 1.0),
    ];

    let mut full = engine();
    let full_result = full.run(&nodes, &edges, None);

    // Re-assert each node's current value in topological order; the
    // sweep must land on the same fixpoint as a full run.
    let mut swept = engine();
    for node in &nodes {
        let (state, confidence) = match swept.node_state(&node.id) {
            Some(current) => (current.state, current.confidence),
            None => (LogicState::from_confidence(node.confidence), node.confidence),
        };
        swept.update_node(&node.id, state, confidence, &nodes, &edges);
    }

    for node in &nodes {
        let want = &full_result.states[&node.id];
        let got = swept.node_state(&node.id).unwrap();
        assert_eq!(got.state, want.state, "node {}", node.id);
        assert!(
            (got.confidence - want.confidence).abs() < 1e-9,
            "node {}",
            node.id
        );
    }
}

#[test]
fn reassertion_clears_derivation_and_walks_back() {
    let nodes = vec![
        node("a", NodeKind::Fact, 90.0),
        node("b", NodeKind::Goal, 50.0),
    ];
    let edges = vec![edge("e", "a", "b", RelationKind::Causes, 1.0)];

    let mut engine = engine();
    engine.run(&nodes, &edges, None);
    assert_eq!(
        engine.node_state(&id("b")).unwrap().derived_from.to_vec(),
        vec![id("a")]
    );

    let result = engine.update_node(&id("b"), LogicState::False, 60.0, &nodes, &edges);

    let b = &result.states[&id("b")];
    assert_eq!(b.state, LogicState::False);
    assert_eq!(b.confidence, 60.0);
    assert!(b.derived_from.is_empty());
    assert!(b.conflicts_with.is_none());

    // Contrapositive pulls the former cause down with it.
    let a = &result.states[&id("a")];
    assert_eq!(a.state, LogicState::False);
    assert!((a.confidence - 54.0).abs() < 1e-9);
}

#[test]
fn update_events_exclude_earlier_history() {
    let nodes = vec![
        node("a", NodeKind::Fact, 90.0),
        node("b", NodeKind::Goal, 50.0),
    ];
    let edges = vec![edge("e", "a", "b", RelationKind::Causes, 1.0)];

    let mut engine = engine();
    let first = engine.run(&nodes, &edges, None);
    assert_eq!(first.events.len(), 1);

    let second = engine.update_node(&id("b"), LogicState::False, 60.0, &nodes, &edges);
    // Only events from this call; the run's event is not repeated.
    assert_eq!(second.events.len(), 1);
    assert_eq!(second.events[0].node, id("a"));
}
