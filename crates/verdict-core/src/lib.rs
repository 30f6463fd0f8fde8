//! Core types for the Verdict decision-graph inference engine.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the value types shared across the Verdict workspace: node and edge
//! identities, the graph model, logic states, the per-node state record,
//! and the audit records (events and conflicts).

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod event;
pub mod graph;
pub mod id;
pub mod state;

pub use event::{ConflictRecord, PropagationEvent};
pub use graph::{
    normalize_strength, Edge, Node, NodeKind, RelationKind, LEGACY_STRENGTH_CUTOFF,
    LEGACY_STRENGTH_FALLBACK,
};
pub use id::{EdgeId, NodeId};
pub use state::{LogicState, NodeState, Provenance};
