//! The propagation engine: seeding, fixpoint passes, incremental updates.

use indexmap::{IndexMap, IndexSet};
use std::collections::VecDeque;
use std::time::{Instant, SystemTime};

use verdict_core::{
    ConflictRecord, Edge, LogicState, Node, NodeId, NodeState, PropagationEvent,
};
use verdict_rule::{GraphView, RuleInput, RuleOutput, RuleRegistry};

use crate::adjacency::Adjacency;
use crate::config::{ConfigError, EngineConfig};
use crate::result::PropagationResult;

/// Minimum confidence movement that counts as a change. Suppresses
/// oscillation on float noise.
const MIN_CONFIDENCE_DELTA: f64 = 1.0;

// ── Traversal bookkeeping ──────────────────────────────────────────

/// Which way an edge is being evaluated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Direction {
    /// Source-to-target, as stored.
    Forward,
    /// Target-to-source: contrapositive or symmetric inference.
    Reverse,
}

/// One accepted edge evaluation.
struct Accepted {
    /// The node that was written.
    node: NodeId,
    /// Whether traversal should continue past the written node.
    should_propagate: bool,
}

// ── PropagationEngine ──────────────────────────────────────────────

/// Computes converged logic-state assignments over a decision graph.
///
/// The engine owns the mutable per-node state table, the event trail,
/// and the conflict list; rules receive read-only views and propose
/// updates which the engine alone accepts and writes. `run` and
/// `update_node` take `&mut self`, so exclusive access per call is
/// enforced by construction; independent engine instances may run
/// concurrently with no shared state.
pub struct PropagationEngine {
    config: EngineConfig,
    registry: RuleRegistry,
    states: IndexMap<NodeId, NodeState>,
    events: Vec<PropagationEvent>,
    conflicts: Vec<ConflictRecord>,
}

impl PropagationEngine {
    /// Construct an engine, rejecting invalid configuration outright.
    pub fn new(config: EngineConfig, registry: RuleRegistry) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            registry,
            states: IndexMap::new(),
            events: Vec::new(),
            conflicts: Vec::new(),
        })
    }

    /// The engine's configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Read-only view of the current state table.
    pub fn states(&self) -> &IndexMap<NodeId, NodeState> {
        &self.states
    }

    /// Current state of one node, if known.
    pub fn node_state(&self, id: &NodeId) -> Option<&NodeState> {
        self.states.get(id)
    }

    /// Events accepted since the last `clear` or `run`.
    pub fn events(&self) -> &[PropagationEvent] {
        &self.events
    }

    /// Conflicts detected since the last `clear` or `run`.
    pub fn conflicts(&self) -> &[ConflictRecord] {
        &self.conflicts
    }

    /// Reset the state table, event trail, and conflict list.
    pub fn clear(&mut self) {
        self.states.clear();
        self.events.clear();
        self.conflicts.clear();
    }

    // ── Full-graph convergence ─────────────────────────────────

    /// Run a full-graph convergence pass over a snapshot.
    ///
    /// Seeds every node's state (explicit override if supplied, else
    /// derived from the node's static confidence), then repeats full
    /// passes over every edge until a pass produces zero changes or
    /// `max_iterations` is reached. Non-convergence is reported via
    /// `converged == false`, never an error; dangling edge endpoints
    /// and unregistered relations are skipped silently.
    pub fn run(
        &mut self,
        nodes: &[Node],
        edges: &[Edge],
        overrides: Option<&IndexMap<NodeId, NodeState>>,
    ) -> PropagationResult {
        let start = Instant::now();
        self.clear();

        for node in nodes {
            let state = overrides
                .and_then(|m| m.get(&node.id))
                .cloned()
                .unwrap_or_else(|| NodeState::seeded(node.confidence));
            self.states.insert(node.id.clone(), state);
        }
        let node_map = Self::node_map(nodes);

        let mut iterations = 0;
        let mut converged = false;
        while iterations < self.config.max_iterations {
            iterations += 1;
            let mut changed = false;
            for edge in edges {
                if self
                    .apply_edge(&node_map, edges, edge, Direction::Forward)
                    .is_some()
                {
                    changed = true;
                }
                if self.is_bidirectional(edge)
                    && self
                        .apply_edge(&node_map, edges, edge, Direction::Reverse)
                        .is_some()
                {
                    changed = true;
                }
            }
            if !changed {
                converged = true;
                break;
            }
        }

        if converged {
            log::debug!(
                "propagation converged after {iterations} passes ({} events, {} conflicts)",
                self.events.len(),
                self.conflicts.len()
            );
        } else {
            log::warn!(
                "propagation exhausted {} passes without converging; state is approximate",
                self.config.max_iterations
            );
        }

        PropagationResult {
            states: self.states.clone(),
            events: self.events.clone(),
            conflicts: self.conflicts.clone(),
            converged,
            iterations,
            elapsed: start.elapsed(),
        }
    }

    // ── Incremental update ─────────────────────────────────────

    /// Apply a single explicit user edit and propagate its effects.
    ///
    /// Overwrites the node's state with cleared provenance (the value
    /// is asserted, not derived), then walks outward with a worklist:
    /// outgoing edges forward, incoming edges in reverse where the
    /// rule declares itself bidirectional. A visited set expands each
    /// node at most once per call, which bounds the walk even on
    /// cyclic graphs; `max_iterations` caps total expansions as an
    /// outer safety net.
    pub fn update_node(
        &mut self,
        node_id: &NodeId,
        state: LogicState,
        confidence: f64,
        nodes: &[Node],
        edges: &[Edge],
    ) -> PropagationResult {
        let start = Instant::now();
        let events_mark = self.events.len();
        let conflicts_mark = self.conflicts.len();

        let node_map = Self::node_map(nodes);
        for node in nodes {
            self.states
                .entry(node.id.clone())
                .or_insert_with(|| NodeState::seeded(node.confidence));
        }

        let mut converged = true;
        let mut expansions = 0usize;

        if let Some(node) = node_map.get(node_id) {
            if !node.kind.allows(state) {
                log::warn!("{} node '{node_id}' manually set to {state}", node.kind);
            }
            self.states
                .insert(node_id.clone(), NodeState::asserted(state, confidence));

            let adjacency = Adjacency::from_edges(edges);
            let mut visited: IndexSet<NodeId> = IndexSet::new();
            let mut queue: VecDeque<NodeId> = VecDeque::from([node_id.clone()]);

            while let Some(current) = queue.pop_front() {
                if !visited.insert(current.clone()) {
                    if self.config.enable_cycle_detection {
                        log::debug!(
                            "re-reached '{current}' during incremental propagation \
                             (cycle or converging paths)"
                        );
                    }
                    continue;
                }
                expansions += 1;
                if expansions > self.config.max_iterations {
                    converged = false;
                    log::warn!(
                        "incremental propagation stopped at {} expansions",
                        self.config.max_iterations
                    );
                    break;
                }

                for &index in adjacency.outgoing(&current) {
                    let edge = &edges[index];
                    if let Some(accepted) =
                        self.apply_edge(&node_map, edges, edge, Direction::Forward)
                    {
                        if accepted.should_propagate && !visited.contains(&accepted.node) {
                            queue.push_back(accepted.node);
                        }
                    }
                }
                for &index in adjacency.incoming(&current) {
                    let edge = &edges[index];
                    if !self.is_bidirectional(edge) {
                        continue;
                    }
                    if let Some(accepted) =
                        self.apply_edge(&node_map, edges, edge, Direction::Reverse)
                    {
                        if accepted.should_propagate && !visited.contains(&accepted.node) {
                            queue.push_back(accepted.node);
                        }
                    }
                }
            }
        } else {
            log::debug!("update_node: unknown node '{node_id}', nothing to do");
        }

        PropagationResult {
            states: self.states.clone(),
            events: self.events[events_mark..].to_vec(),
            conflicts: self.conflicts[conflicts_mark..].to_vec(),
            converged,
            iterations: expansions,
            elapsed: start.elapsed(),
        }
    }

    // ── Edge evaluation ────────────────────────────────────────

    /// Evaluate one edge in one direction and, if the rule proposes a
    /// change that passes the acceptance checks, write it.
    ///
    /// Returns `None` for skipped edges (no rule, dangling endpoint),
    /// rules that produce no output, changes suppressed by the decay
    /// floor, and proposals below the acceptance threshold.
    fn apply_edge(
        &mut self,
        node_map: &IndexMap<NodeId, Node>,
        edges: &[Edge],
        edge: &Edge,
        direction: Direction,
    ) -> Option<Accepted> {
        let rule = self.registry.get(edge.relation)?;
        let (source_id, target_id) = match direction {
            Direction::Forward => (&edge.source, &edge.target),
            Direction::Reverse => (&edge.target, &edge.source),
        };
        let source = node_map.get(source_id)?;
        let target = node_map.get(target_id)?;
        let source_state = self.states.get(source_id)?;
        let target_state = self.states.get(target_id)?;

        let input = RuleInput {
            source,
            source_state,
            target,
            target_state,
            edge,
            graph: GraphView::new(node_map, edges, &self.states),
        };
        let output = match direction {
            Direction::Forward => rule.propagate(&input),
            Direction::Reverse => rule.propagate_reverse(&input),
        }?;

        // Per-layer attenuation: decay every proposed confidence, and
        // refuse to propagate below the floor. Both default to no-ops.
        let confidence = (output.confidence * self.config.confidence_decay).clamp(0.0, 100.0);
        if confidence < self.config.min_confidence {
            log::trace!(
                "suppressed update of '{target_id}': confidence {confidence:.1} below floor"
            );
            return None;
        }

        let previous = self.states.get(target_id)?;
        let from = previous.state;
        if output.state == from && (confidence - previous.confidence).abs() < MIN_CONFIDENCE_DELTA {
            return None;
        }

        if !target.kind.allows(output.state) {
            log::warn!(
                "{} node '{target_id}' assigned {} by rule '{}'",
                target.kind,
                output.state,
                rule.name()
            );
        }

        let RuleOutput {
            state,
            derived_from,
            conflicts_with,
            should_propagate,
            reason,
            ..
        } = output;

        self.states.insert(
            target_id.clone(),
            NodeState {
                state,
                confidence,
                derived_from,
                conflicts_with: conflicts_with.clone(),
                updated_at: SystemTime::now(),
            },
        );
        self.events.push(PropagationEvent {
            edge: edge.id.clone(),
            relation: edge.relation,
            node: target_id.clone(),
            from,
            to: state,
            reversed: direction == Direction::Reverse,
            reason: reason.clone(),
            at: SystemTime::now(),
        });
        if state == LogicState::Conflict && self.config.enable_conflict_detection {
            let mut nodes = vec![target_id.clone()];
            if let Some(partners) = conflicts_with {
                nodes.extend(partners);
            }
            self.conflicts.push(ConflictRecord { nodes, reason });
        }

        Some(Accepted {
            node: target_id.clone(),
            should_propagate,
        })
    }

    fn is_bidirectional(&self, edge: &Edge) -> bool {
        self.registry
            .get(edge.relation)
            .is_some_and(|rule| rule.bidirectional())
    }

    fn node_map(nodes: &[Node]) -> IndexMap<NodeId, Node> {
        nodes
            .iter()
            .cloned()
            .map(|node| (node.id.clone(), node))
            .collect()
    }
}
