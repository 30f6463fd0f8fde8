//! Inference rule trait and registry for Verdict decision graphs.
//!
//! The [`Rule`] trait defines the pure `propagate` function dispatched
//! per edge-relation type, with [`RuleInput`]/[`RuleOutput`] as the I/O
//! contract and [`GraphView`] providing read-only cross-reference access
//! to the rest of the graph. [`RuleRegistry`] maps relation tags to rule
//! instances so new relation types can be added without touching the
//! engine.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod context;
pub mod registry;
pub mod rule;

pub use context::{GraphView, RuleInput, RuleOutput};
pub use registry::RuleRegistry;
pub use rule::Rule;
