//! State-propagation engine for Verdict decision graphs.
//!
//! [`PropagationEngine`] takes a node/edge snapshot plus a rule
//! registry and computes a converged assignment of logic states and
//! confidences: full-graph fixpoint runs via [`PropagationEngine::run`],
//! single-node user edits via [`PropagationEngine::update_node`]. The
//! engine owns the mutable state table, the event trail, and the
//! conflict list; rules only ever see read-only views.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod adjacency;
pub mod config;
pub mod engine;
pub mod result;

pub use adjacency::Adjacency;
pub use config::{ConfigError, EngineConfig};
pub use engine::PropagationEngine;
pub use result::PropagationResult;
