//! Verdict: a state-propagation engine for decision-modeling graphs.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all Verdict sub-crates. For most users, adding `verdict` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use verdict::prelude::*;
//!
//! // A piece of established evidence and the conclusion it implies.
//! let nodes = vec![
//!     Node::new("evidence", NodeKind::Fact, 90.0),
//!     Node::new("claim", NodeKind::Conclusion, 50.0),
//! ];
//! let edges = vec![Edge::new(
//!     "e1", "evidence", "claim", RelationKind::Causes, 1.0,
//! )];
//!
//! let mut engine =
//!     PropagationEngine::new(EngineConfig::default(), standard_registry()).unwrap();
//! let result = engine.run(&nodes, &edges, None);
//!
//! assert!(result.converged);
//! let claim = &result.states[&NodeId::from("claim")];
//! assert_eq!(claim.state, LogicState::True);
//! assert_eq!(claim.confidence, 90.0);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the
//! prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `verdict-core` | Nodes, edges, logic states, events, conflicts |
//! | [`rule`] | `verdict-rule` | Rule trait, rule I/O contracts, registry |
//! | [`rules`] | `verdict-rules` | The six reference inference rules |
//! | [`engine`] | `verdict-engine` | The propagation engine and its configuration |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core graph and state types (`verdict-core`).
///
/// Contains [`types::Node`], [`types::Edge`], [`types::LogicState`],
/// [`types::NodeState`], propagation events, and conflict records.
pub use verdict_core as types;

/// Rule trait and registry (`verdict-rule`).
///
/// The [`rule::Rule`] trait is the main extension point: implement it and
/// register the rule to add a new relation type without touching the
/// engine.
pub use verdict_rule as rule;

/// Reference inference rules (`verdict-rules`).
///
/// One rule per built-in relation type, plus [`rules::standard_registry`]
/// to load them all at once.
pub use verdict_rules as rules;

/// The propagation engine (`verdict-engine`).
///
/// [`engine::PropagationEngine`] runs full-graph fixpoint passes and
/// incremental single-node updates.
pub use verdict_engine as engine;

/// Common imports for typical Verdict usage.
///
/// ```rust
/// use verdict::prelude::*;
/// ```
pub mod prelude {
    // Graph and state types
    pub use verdict_core::{
        ConflictRecord, Edge, EdgeId, LogicState, Node, NodeId, NodeKind, NodeState,
        PropagationEvent, RelationKind,
    };

    // Rule contracts
    pub use verdict_rule::{GraphView, Rule, RuleInput, RuleOutput, RuleRegistry};

    // Reference rules
    pub use verdict_rules::standard_registry;

    // Engine
    pub use verdict_engine::{ConfigError, EngineConfig, PropagationEngine, PropagationResult};
}
