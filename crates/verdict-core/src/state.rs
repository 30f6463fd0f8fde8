//! Logic states and the per-node mutable state record.

use crate::id::NodeId;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;
use std::time::SystemTime;

// ── LogicState ─────────────────────────────────────────────────────

/// Confidence at or above which a node seeds as True.
const SEED_TRUE_THRESHOLD: f64 = 80.0;

/// Confidence at or below which a node seeds as False.
const SEED_FALSE_THRESHOLD: f64 = 20.0;

/// The inferred truth value of a node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LogicState {
    /// Established as holding.
    True,
    /// Established as not holding.
    False,
    /// Not yet determined either way.
    Unknown,
    /// Simultaneously forced in incompatible directions.
    Conflict,
}

impl LogicState {
    /// Derive a seed state from a static 0–100 confidence: ≥80 is True,
    /// ≤20 is False, anything between is Unknown.
    pub fn from_confidence(confidence: f64) -> Self {
        if confidence >= SEED_TRUE_THRESHOLD {
            Self::True
        } else if confidence <= SEED_FALSE_THRESHOLD {
            Self::False
        } else {
            Self::Unknown
        }
    }

    /// Human-readable label for presentation layers.
    pub fn label(self) -> &'static str {
        match self {
            Self::True => "true",
            Self::False => "false",
            Self::Unknown => "unknown",
            Self::Conflict => "conflict",
        }
    }

    /// Presentation color (hex) used by graph renderers.
    pub fn color(self) -> &'static str {
        match self {
            Self::True => "#22c55e",
            Self::False => "#ef4444",
            Self::Unknown => "#9ca3af",
            Self::Conflict => "#f97316",
        }
    }
}

impl fmt::Display for LogicState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

// ── NodeState ──────────────────────────────────────────────────────

/// Provenance list of contributing node ids.
///
/// Inline capacity of four: most derivations have few contributors.
pub type Provenance = SmallVec<[NodeId; 4]>;

/// Mutable per-node state, owned exclusively by the engine for the
/// lifetime of a run and handed back to callers as a snapshot.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NodeState {
    /// Current logic state.
    pub state: LogicState,
    /// Current confidence, 0–100; independent of the node's static
    /// confidence once seeded.
    pub confidence: f64,
    /// Ids of the nodes whose state produced this one. Empty when the
    /// state was set by explicit user override rather than inference.
    pub derived_from: Provenance,
    /// Ids this node's state is in contradiction with, when in Conflict.
    pub conflicts_with: Option<Vec<NodeId>>,
    /// When this record was last written.
    pub updated_at: SystemTime,
}

impl NodeState {
    /// Seed a state from a node's static confidence, with empty provenance.
    pub fn seeded(confidence: f64) -> Self {
        Self {
            state: LogicState::from_confidence(confidence),
            confidence,
            derived_from: Provenance::new(),
            conflicts_with: None,
            updated_at: SystemTime::now(),
        }
    }

    /// A state asserted directly by the user.
    ///
    /// Provenance is cleared: the value is not derived, and an empty
    /// `derived_from` is what distinguishes "user asserted" from
    /// "system inferred".
    pub fn asserted(state: LogicState, confidence: f64) -> Self {
        Self {
            state,
            confidence,
            derived_from: Provenance::new(),
            conflicts_with: None,
            updated_at: SystemTime::now(),
        }
    }
}
