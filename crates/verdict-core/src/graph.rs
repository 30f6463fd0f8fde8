//! Node and edge value types, relation tags, and the edge-strength contract.

use crate::id::{EdgeId, NodeId};
use crate::state::LogicState;
use serde::{Deserialize, Serialize};
use std::fmt;

// ── Node ───────────────────────────────────────────────────────────

/// The kind of reasoning element a node represents.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeKind {
    /// A desired outcome.
    Goal,
    /// Something the decision-maker can do.
    Action,
    /// An observed or established piece of evidence.
    Fact,
    /// A belief held without direct evidence.
    Assumption,
    /// A requirement that must hold.
    Constraint,
    /// A derived judgement.
    Conclusion,
}

impl NodeKind {
    /// Whether `state` is an expected assignment for this node kind.
    ///
    /// Advisory only: facts and constraints are asserted knowledge and
    /// are not expected to sit at Unknown, but the engine logs rather
    /// than blocks when a rule assigns one anyway.
    pub fn allows(self, state: LogicState) -> bool {
        !matches!(
            (self, state),
            (NodeKind::Fact, LogicState::Unknown) | (NodeKind::Constraint, LogicState::Unknown)
        )
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Goal => "goal",
            Self::Action => "action",
            Self::Fact => "fact",
            Self::Assumption => "assumption",
            Self::Constraint => "constraint",
            Self::Conclusion => "conclusion",
        };
        write!(f, "{name}")
    }
}

/// A reasoning node, owned by the graph data source and read-only to
/// the engine.
///
/// `confidence` (0–100) is a static seed: once a run starts, the
/// engine's per-node [`NodeState`](crate::state::NodeState) confidence
/// evolves independently of it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Externally assigned identity.
    pub id: NodeId,
    /// What kind of reasoning element this is.
    pub kind: NodeKind,
    /// Static seed confidence, 0–100.
    pub confidence: f64,
}

impl Node {
    /// Convenience constructor.
    pub fn new(id: impl Into<NodeId>, kind: NodeKind, confidence: f64) -> Self {
        Self {
            id: id.into(),
            kind,
            confidence,
        }
    }
}

// ── Relations and edges ────────────────────────────────────────────

/// Relation-type tag carried by an edge.
///
/// The `Custom` variant keys user-registered rules, so a new relation
/// type plus a registered rule requires no change to the engine or to
/// the shipped rules.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RelationKind {
    /// Target depends on source; a failed source fails the target.
    Depends,
    /// Soft positive influence on the target's confidence.
    Supports,
    /// Source is a mechanism that satisfies the target.
    Achieves,
    /// Negative influence; strong hindrance can force the target false.
    Hinders,
    /// Strong implication, source ⇒ target, with contrapositive.
    Causes,
    /// Symmetric mutual exclusion.
    Conflicts,
    /// A user-defined relation dispatched through the registry.
    Custom(u16),
}

impl fmt::Display for RelationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Depends => write!(f, "depends"),
            Self::Supports => write!(f, "supports"),
            Self::Achieves => write!(f, "achieves"),
            Self::Hinders => write!(f, "hinders"),
            Self::Causes => write!(f, "causes"),
            Self::Conflicts => write!(f, "conflicts"),
            Self::Custom(tag) => write!(f, "custom({tag})"),
        }
    }
}

/// A typed, directed relation between two nodes, read-only to the engine.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    /// Externally assigned identity.
    pub id: EdgeId,
    /// Source node id.
    pub source: NodeId,
    /// Target node id.
    pub target: NodeId,
    /// The relation this edge encodes.
    pub relation: RelationKind,
    /// Edge weight; see [`normalize_strength`] for the dual encoding.
    pub strength: f64,
}

impl Edge {
    /// Convenience constructor.
    pub fn new(
        id: impl Into<EdgeId>,
        source: impl Into<NodeId>,
        target: impl Into<NodeId>,
        relation: RelationKind,
        strength: f64,
    ) -> Self {
        Self {
            id: id.into(),
            source: source.into(),
            target: target.into(),
            relation,
            strength,
        }
    }
}

// ── Strength contract ──────────────────────────────────────────────

/// Strength values above this are legacy percentage encoding.
pub const LEGACY_STRENGTH_CUTOFF: f64 = 2.0;

/// Multiplier substituted for legacy-encoded strengths.
pub const LEGACY_STRENGTH_FALLBACK: f64 = 1.0;

/// Normalize an edge strength to the current multiplier encoding.
///
/// Strength has two historical encodings: a 0–100 percentage (legacy)
/// and a 0.1–2.0 multiplier (current). Any value above
/// [`LEGACY_STRENGTH_CUTOFF`] is legacy data and collapses to
/// [`LEGACY_STRENGTH_FALLBACK`].
///
/// Each rule owns its own strength interpretation — multiplier rules
/// call this, percentage rules divide by 100 — but the cutoff and
/// fallback pair is a system-wide contract defined here once.
pub fn normalize_strength(raw: f64) -> f64 {
    if raw > LEGACY_STRENGTH_CUTOFF {
        LEGACY_STRENGTH_FALLBACK
    } else {
        raw
    }
}
