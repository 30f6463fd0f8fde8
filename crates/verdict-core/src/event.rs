//! Audit records: propagation events and detected conflicts.

use crate::graph::RelationKind;
use crate::id::{EdgeId, NodeId};
use crate::state::LogicState;
use serde::{Deserialize, Serialize};
use std::time::SystemTime;

/// One accepted state change, recorded for explainability.
///
/// Events are append-only and never consulted by the algorithm itself;
/// consumers render them as the "why" trail behind a node's state.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PropagationEvent {
    /// The edge that was traversed.
    pub edge: EdgeId,
    /// The edge's relation type.
    pub relation: RelationKind,
    /// The node whose state was written.
    pub node: NodeId,
    /// Logic state before the change.
    pub from: LogicState,
    /// Logic state after the change.
    pub to: LogicState,
    /// True when the edge was traversed in the contrapositive or
    /// symmetric direction rather than source-to-target.
    pub reversed: bool,
    /// Human-readable explanation produced by the rule.
    pub reason: String,
    /// When the change was accepted.
    pub at: SystemTime,
}

/// A detected logical contradiction among a set of nodes.
///
/// Appended whenever a rule reports a Conflict outcome. Records may
/// reference overlapping node sets; no deduplication is performed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ConflictRecord {
    /// The nodes involved in the contradiction.
    pub nodes: Vec<NodeId>,
    /// Human-readable explanation produced by the rule.
    pub reason: String,
}
