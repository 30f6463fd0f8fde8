//! Reference inference rules for Verdict decision graphs.
//!
//! One rule per relation type, each a pure function from an edge
//! evaluation to an optional state update:
//!
//! - [`DependsRule`] — a failed dependency fails its dependents.
//! - [`SupportsRule`] — soft confidence influence, promotion from Unknown.
//! - [`AchievesRule`] — satisfaction with alternative-achiever fallback.
//! - [`HindersRule`] — confidence erosion with a strong-hinder override.
//! - [`CausesRule`] — strong implication with contrapositive inference.
//! - [`ConflictsRule`] — symmetric mutual exclusion.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod achieves;
pub mod causes;
pub mod conflicts;
pub mod depends;
pub mod hinders;
pub mod supports;

pub use achieves::AchievesRule;
pub use causes::CausesRule;
pub use conflicts::ConflictsRule;
pub use depends::DependsRule;
pub use hinders::HindersRule;
pub use supports::SupportsRule;

use verdict_rule::RuleRegistry;

/// A registry pre-loaded with the six reference rules.
pub fn standard_registry() -> RuleRegistry {
    let mut registry = RuleRegistry::new();
    registry.register(Box::new(DependsRule));
    registry.register(Box::new(SupportsRule));
    registry.register(Box::new(AchievesRule));
    registry.register(Box::new(HindersRule));
    registry.register(Box::new(CausesRule));
    registry.register(Box::new(ConflictsRule));
    registry
}
