//! The [`Rule`] trait.

use crate::context::{RuleInput, RuleOutput};
use verdict_core::RelationKind;

/// One inference rule, dispatched by edge-relation type.
///
/// # Contract
///
/// - `propagate()` MUST be pure: same inputs produce the same output,
///   and inputs are never mutated. The engine is the sole writer of
///   node state.
/// - `None` means "this edge produces no change" — rules never error.
/// - Confidence values in outputs are clamped to 0–100 by the engine.
///
/// # Object safety
///
/// This trait is object-safe; the registry stores rules as
/// `Box<dyn Rule>`.
pub trait Rule: Send + Sync {
    /// Human-readable name for events and diagnostics.
    fn name(&self) -> &str;

    /// The relation tag this rule handles.
    fn relation(&self) -> RelationKind;

    /// Whether the engine should also evaluate this edge in the reverse
    /// traversal direction (contrapositive or symmetric inference).
    ///
    /// Default: false.
    fn bidirectional(&self) -> bool {
        false
    }

    /// Evaluate the edge source-to-target.
    ///
    /// Returns `None` when the edge produces no change.
    fn propagate(&self, input: &RuleInput<'_>) -> Option<RuleOutput>;

    /// Evaluate the edge in the reverse direction.
    ///
    /// `input` arrives with source and target already swapped relative
    /// to the stored edge. Only consulted when [`bidirectional`]
    /// returns true.
    ///
    /// Default: no reverse inference.
    ///
    /// [`bidirectional`]: Rule::bidirectional
    fn propagate_reverse(&self, _input: &RuleInput<'_>) -> Option<RuleOutput> {
        None
    }
}
