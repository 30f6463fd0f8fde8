//! The result envelope handed back to consumers.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use verdict_core::{ConflictRecord, NodeId, NodeState, PropagationEvent};

/// Outcome of one `run` or `update_node` call.
///
/// `converged == false` is not an error: the iteration cap was reached
/// first and the state map is a meaningful partial result. Callers
/// should surface it as "state may be approximate", not discard it.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PropagationResult {
    /// Snapshot of every node's final state.
    pub states: IndexMap<NodeId, NodeState>,
    /// Ordered state-change events accepted during this call.
    pub events: Vec<PropagationEvent>,
    /// Conflicts detected during this call.
    pub conflicts: Vec<ConflictRecord>,
    /// Whether a fixpoint was reached before the iteration cap.
    pub converged: bool,
    /// Full passes performed (`run`) or nodes expanded (`update_node`).
    pub iterations: usize,
    /// Wall-clock duration of the call.
    pub elapsed: Duration,
}
