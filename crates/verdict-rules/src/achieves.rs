//! Achievement rule: a mechanism that satisfies its target.

use smallvec::smallvec;
use verdict_core::{normalize_strength, LogicState, RelationKind};
use verdict_rule::{Rule, RuleInput, RuleOutput};

/// Confidence forfeited when the last achiever of a target fails.
const REGRESS_PENALTY: f64 = 30.0;

/// `A → B`: A is an action or mechanism that satisfies B.
///
/// A True source establishes the target. A False source only regresses
/// the target when it was the achiever of record and no alternative
/// achiever is currently True — which is why this rule reads beyond the
/// single edge, scanning sibling Achieves edges through the graph view.
/// Unidirectional.
pub struct AchievesRule;

impl Rule for AchievesRule {
    fn name(&self) -> &str {
        "achieves"
    }

    fn relation(&self) -> RelationKind {
        RelationKind::Achieves
    }

    fn propagate(&self, input: &RuleInput<'_>) -> Option<RuleOutput> {
        match input.source_state.state {
            LogicState::True => {
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
                    reason: format!("achieved by '{}'", input.source.id),
                })
            }
            LogicState::False => {
                // Another live achiever keeps the target established.
                let alternative = input.graph.edges_into(&input.edge.target).any(|e| {
                    e.relation == RelationKind::Achieves
                        && e.id != input.edge.id
                        && input
                            .graph
                            .state(&e.source)
                            .is_some_and(|s| s.state == LogicState::True)
                });
                if alternative {
                    return None;
                }
                // Only regress a target this source actually established.
                if !input.target_state.derived_from.contains(&input.source.id) {
                    return None;
                }
                let derived_from = input
                    .target_state
                    .derived_from
                    .iter()
                    .filter(|id| **id != input.source.id)
                    .cloned()
                    .collect();
                Some(RuleOutput {
                    state: LogicState::Unknown,
                    confidence: (input.target_state.confidence - REGRESS_PENALTY).max(0.0),
                    derived_from,
                    conflicts_with: input.target_state.conflicts_with.clone(),
                    should_propagate: true,
                    reason: format!(
                        "achiever '{}' failed with no alternative",
                        input.source.id
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

    fn single() -> GraphFixture {
        GraphFixture::new(
            vec![
                node("a", NodeKind::Action, 85.0),
                node("b", NodeKind::Goal, 40.0),
            ],
            vec![edge("e", "a", "b", RelationKind::Achieves, 1.0)],
        )
    }

    #[test]
    fn true_source_establishes_target() {
        let fx = single();
        // a seeds True at 85.
        let out = AchievesRule.propagate(&fx.input(0)).unwrap();
        assert_eq!(out.state, LogicState::True);
        assert_eq!(out.confidence, 85.0);
        assert_eq!(out.derived_from.to_vec(), vec!["a".into()]);
    }

    #[test]
    fn target_confidence_never_drops_on_achievement() {
        let mut fx = single();
        fx.set_state("b", LogicState::True, 95.0);
        let out = AchievesRule.propagate(&fx.input(0)).unwrap();
        assert_eq!(out.confidence, 95.0);
    }

    #[test]
    fn legacy_strength_collapses_to_unit_multiplier() {
        let mut fx = single();
        fx.edges[0].strength = 150.0;
        let out = AchievesRule.propagate(&fx.input(0)).unwrap();
        assert_eq!(out.confidence, 85.0);
    }

    #[test]
    fn failed_achiever_of_record_regresses_target() {
        let mut fx = single();
        fx.set_state("a", LogicState::False, 85.0);
        fx.set_state("b", LogicState::True, 85.0);
        fx.set_derived("b", &["a"]);

        let out = AchievesRule.propagate(&fx.input(0)).unwrap();
        assert_eq!(out.state, LogicState::Unknown);
        assert_eq!(out.confidence, 55.0);
        assert!(out.derived_from.is_empty());
    }

    #[test]
    fn failed_achiever_without_provenance_is_ignored() {
        let mut fx = single();
        fx.set_state("a", LogicState::False, 85.0);
        fx.set_state("b", LogicState::True, 85.0);
        // b's provenance does not name a.
        assert!(AchievesRule.propagate(&fx.input(0)).is_none());
    }

    #[test]
    fn alternative_achiever_keeps_target_established() {
        let mut fx = GraphFixture::new(
            vec![
                node("a", NodeKind::Action, 85.0),
                node("c", NodeKind::Action, 90.0),
                node("b", NodeKind::Goal, 85.0),
            ],
            vec![
                edge("e1", "a", "b", RelationKind::Achieves, 1.0),
                edge("e2", "c", "b", RelationKind::Achieves, 1.0),
            ],
        );
        fx.set_state("a", LogicState::False, 85.0);
        fx.set_state("b", LogicState::True, 85.0);
        fx.set_derived("b", &["a"]);
        // c is True, so b stays established even though a failed.
        assert!(AchievesRule.propagate(&fx.input(0)).is_none());
    }
}
