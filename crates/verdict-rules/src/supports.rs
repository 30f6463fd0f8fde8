//! Soft-support rule: confidence influence without hard implication.

use verdict_core::{LogicState, RelationKind};
use verdict_rule::{Rule, RuleInput, RuleOutput};

/// Fraction of the weighted source confidence gained on support.
const SUPPORT_GAIN: f64 = 0.3;

/// Fraction of the weighted source confidence lost when the supporter
/// turns out false.
const SUPPORT_LOSS: f64 = 0.1;

/// Confidence movements at or below this are noise and not emitted.
const EMIT_THRESHOLD: f64 = 5.0;

/// Soft positive influence, `A → B`.
///
/// A True source nudges the target's confidence up (promoting Unknown
/// targets to True); a False source nudges it down without touching the
/// logic state. Strength is interpreted as a 0–100 percentage here —
/// this rule predates the multiplier encoding. Unidirectional.
pub struct SupportsRule;

impl Rule for SupportsRule {
    fn name(&self) -> &str {
        "supports"
    }

    fn relation(&self) -> RelationKind {
        RelationKind::Supports
    }

    fn propagate(&self, input: &RuleInput<'_>) -> Option<RuleOutput> {
        let weight = input.edge.strength / 100.0;
        match input.source_state.state {
            LogicState::True => {
                let increase = input.source_state.confidence * weight * SUPPORT_GAIN;
                if increase <= EMIT_THRESHOLD {
                    return None;
                }
                let confidence = (input.target_state.confidence + increase).min(100.0);
                let promoted = input.target_state.state == LogicState::Unknown;
                let state = if promoted {
                    LogicState::True
                } else {
                    input.target_state.state
                };
                let mut derived_from = input.target_state.derived_from.clone();
                if !derived_from.contains(&input.source.id) {
                    derived_from.push(input.source.id.clone());
                }
                Some(RuleOutput {
                    state,
                    confidence,
                    derived_from,
                    conflicts_with: input.target_state.conflicts_with.clone(),
                    should_propagate: promoted,
                    reason: format!(
                        "supported by '{}' (+{:.1} confidence)",
                        input.source.id, increase
                    ),
                })
            }
            LogicState::False => {
                let decrease = input.source_state.confidence * weight * SUPPORT_LOSS;
                if decrease <= EMIT_THRESHOLD {
                    return None;
                }
                let confidence = (input.target_state.confidence - decrease).max(0.0);
                Some(RuleOutput {
                    state: input.target_state.state,
                    confidence,
                    derived_from: input.target_state.derived_from.clone(),
                    conflicts_with: input.target_state.conflicts_with.clone(),
                    should_propagate: false,
                    reason: format!(
                        "supporter '{}' does not hold (-{:.1} confidence)",
                        input.source.id, decrease
                    ),
                })
            }
            _ => None,
        }
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
                node("b", NodeKind::Conclusion, 50.0),
            ],
            vec![edge("e", "a", "b", RelationKind::Supports, strength)],
        )
    }

    #[test]
    fn true_source_raises_confidence_and_promotes_unknown() {
        let fx = fixture(80.0);
        // a seeds True at 90; b seeds Unknown at 50.
        let out = SupportsRule.propagate(&fx.input(0)).unwrap();
        // increase = 90 * 0.8 * 0.3 = 21.6
        assert_eq!(out.state, LogicState::True);
        assert!((out.confidence - 71.6).abs() < 1e-9);
        assert!(out.should_propagate);
        assert!(out.derived_from.contains(&"a".into()));
    }

    #[test]
    fn increase_is_capped_at_hundred() {
        let mut fx = fixture(100.0);
        fx.set_state("b", LogicState::True, 95.0);
        let out = SupportsRule.propagate(&fx.input(0)).unwrap();
        assert_eq!(out.confidence, 100.0);
        assert_eq!(out.state, LogicState::True);
        assert!(!out.should_propagate);
    }

    #[test]
    fn sub_threshold_increase_is_not_emitted() {
        // increase = 90 * 0.1 * 0.3 = 2.7, below the 5-point floor.
        let fx = fixture(10.0);
        assert!(SupportsRule.propagate(&fx.input(0)).is_none());
    }

    #[test]
    fn false_source_lowers_confidence_without_changing_state() {
        let mut fx = fixture(80.0);
        fx.set_state("a", LogicState::False, 90.0);
        // decrease = 90 * 0.8 * 0.1 = 7.2
        let out = SupportsRule.propagate(&fx.input(0)).unwrap();
        assert_eq!(out.state, LogicState::Unknown);
        assert!((out.confidence - 42.8).abs() < 1e-9);
        assert!(!out.should_propagate);
    }

    #[test]
    fn sub_threshold_decrease_is_not_emitted() {
        let mut fx = fixture(50.0);
        fx.set_state("a", LogicState::False, 90.0);
        // decrease = 90 * 0.5 * 0.1 = 4.5
        assert!(SupportsRule.propagate(&fx.input(0)).is_none());
    }

    #[test]
    fn unknown_source_is_inert() {
        let mut fx = fixture(100.0);
        fx.set_state("a", LogicState::Unknown, 50.0);
        assert!(SupportsRule.propagate(&fx.input(0)).is_none());
    }
}
