//! Causation rule: strong implication with contrapositive inference.

use smallvec::smallvec;
use verdict_core::{normalize_strength, LogicState, RelationKind};
use verdict_rule::{Rule, RuleInput, RuleOutput};

/// Confidence retained when the contrapositive propagates one hop.
const CONTRAPOSITIVE_DECAY: f64 = 0.9;

/// Strong implication, `A ⇒ B`.
///
/// A True source establishes the target; a True source meeting an
/// already-False target is a direct contradiction and marks the target
/// Conflict. The contrapositive (B False ⇒ A False) runs through
/// [`propagate_reverse`](Rule::propagate_reverse) when the engine
/// traverses the edge backwards. A Conflict target is left alone —
/// contradictions are resolved by the user, not overwritten.
pub struct CausesRule;

impl Rule for CausesRule {
    fn name(&self) -> &str {
        "causes"
    }

    fn relation(&self) -> RelationKind {
        RelationKind::Causes
    }

    fn bidirectional(&self) -> bool {
        true
    }

    fn propagate(&self, input: &RuleInput<'_>) -> Option<RuleOutput> {
        if input.source_state.state != LogicState::True {
            return None;
        }
        match input.target_state.state {
            LogicState::False => Some(RuleOutput {
                state: LogicState::Conflict,
                confidence: input.target_state.confidence,
                derived_from: smallvec![input.source.id.clone()],
                conflicts_with: Some(vec![input.source.id.clone()]),
                should_propagate: true,
                reason: format!(
                    "'{}' implies this node, but it is established false",
                    input.source.id
                ),
            }),
            LogicState::Conflict => None,
            _ => {
                let multiplier = normalize_strength(input.edge.strength);
                let confidence = input
                    .target_state
                    .confidence
                    .max(input.source_state.confidence * multiplier);
                Some(RuleOutput {
                    state: LogicState::True,
                    confidence,
                    derived_from: smallvec![input.source.id.clone()],
                    conflicts_with: None,
                    should_propagate: true,
                    reason: format!("caused by '{}'", input.source.id),
                })
            }
        }
    }

    fn propagate_reverse(&self, input: &RuleInput<'_>) -> Option<RuleOutput> {
        // Input arrives swapped: source is the stored effect, target the
        // stored cause. B False ⇒ A False.
        if input.source_state.state != LogicState::False
            || input.target_state.state == LogicState::False
        {
            return None;
        }
        Some(RuleOutput {
            state: LogicState::False,
            confidence: input.source_state.confidence * CONTRAPOSITIVE_DECAY,
            derived_from: smallvec![input.source.id.clone()],
            conflicts_with: None,
            should_propagate: true,
            reason: format!(
                "contrapositive: effect '{}' is established false",
                input.source.id
            ),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use verdict_core::NodeKind;
    use verdict_test_utils::{edge, node, GraphFixture};

    fn fixture(strength: f64) -> GraphFixture {
        GraphFixture::new(
            vec![
                node("a", NodeKind::Fact, 90.0),
                node("b", NodeKind::Goal, 50.0),
            ],
            vec![edge("e", "a", "b", RelationKind::Causes, strength)],
        )
    }

    #[test]
    fn true_source_establishes_target() {
        let fx = fixture(1.0);
        let out = CausesRule.propagate(&fx.input(0)).unwrap();
        assert_eq!(out.state, LogicState::True);
        assert_eq!(out.confidence, 90.0);
        assert_eq!(out.derived_from.to_vec(), vec!["a".into()]);
    }

    #[test]
    fn legacy_and_current_strength_encodings_agree() {
        let current = CausesRule.propagate(&fixture(1.0).input(0)).unwrap();
        let legacy = CausesRule.propagate(&fixture(150.0).input(0)).unwrap();
        assert_eq!(current.confidence, legacy.confidence);
    }

    #[test]
    fn multiplier_strength_scales_confidence() {
        let out = CausesRule.propagate(&fixture(0.5).input(0)).unwrap();
        // max(50, 90 * 0.5) = 50.
        assert_eq!(out.confidence, 50.0);
    }

    #[test]
    fn true_source_against_false_target_is_a_contradiction() {
        let mut fx = fixture(1.0);
        fx.set_state("b", LogicState::False, 85.0);
        let out = CausesRule.propagate(&fx.input(0)).unwrap();
        assert_eq!(out.state, LogicState::Conflict);
        assert_eq!(out.conflicts_with, Some(vec!["a".into()]));
    }

    #[test]
    fn conflicted_target_is_left_alone() {
        let mut fx = fixture(1.0);
        fx.set_state("b", LogicState::Conflict, 85.0);
        assert!(CausesRule.propagate(&fx.input(0)).is_none());
    }

    #[test]
    fn contrapositive_fails_the_cause() {
        let mut fx = fixture(1.0);
        fx.set_state("a", LogicState::Unknown, 50.0);
        fx.set_state("b", LogicState::False, 80.0);
        // Reversed input: source = b, target = a.
        let out = CausesRule.propagate_reverse(&fx.input_reversed(0)).unwrap();
        assert_eq!(out.state, LogicState::False);
        assert!((out.confidence - 72.0).abs() < 1e-9);
        assert_eq!(out.derived_from.to_vec(), vec!["b".into()]);
    }

    #[test]
    fn contrapositive_needs_a_false_effect() {
        let fx = fixture(1.0);
        // b seeds Unknown; nothing to infer backwards.
        assert!(CausesRule.propagate_reverse(&fx.input_reversed(0)).is_none());
    }

    #[test]
    fn forward_direction_ignores_false_source() {
        let mut fx = fixture(1.0);
        fx.set_state("a", LogicState::False, 90.0);
        assert!(CausesRule.propagate(&fx.input(0)).is_none());
    }
}
