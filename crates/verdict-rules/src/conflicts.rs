//! Mutual-exclusion rule: symmetric conflict detection.

use smallvec::smallvec;
use verdict_core::{LogicState, RelationKind};
use verdict_rule::{Rule, RuleInput, RuleOutput};

/// Confidence retained when one side of an exclusion suppresses the other.
const SUPPRESS_FACTOR: f64 = 0.95;

/// Symmetric mutual exclusion between two nodes.
///
/// Both endpoints True is a contradiction: the evaluated target goes
/// Conflict naming the source, and the symmetric evaluation (the engine
/// walks this relation from both endpoints) marks the partner the same
/// way. A lone True side forces an undetermined partner False. A False
/// source says nothing about the other side.
pub struct ConflictsRule;

impl ConflictsRule {
    fn evaluate(&self, input: &RuleInput<'_>) -> Option<RuleOutput> {
        match input.source_state.state {
            LogicState::True => match input.target_state.state {
                LogicState::True => Some(RuleOutput {
                    state: LogicState::Conflict,
                    confidence: input.target_state.confidence,
                    derived_from: smallvec![input.source.id.clone()],
                    conflicts_with: Some(vec![input.source.id.clone()]),
                    should_propagate: true,
                    reason: format!(
                        "mutually exclusive with '{}', and both hold",
                        input.source.id
                    ),
                }),
                LogicState::Unknown => Some(RuleOutput {
                    state: LogicState::False,
                    confidence: input.source_state.confidence * SUPPRESS_FACTOR,
                    derived_from: smallvec![input.source.id.clone()],
                    conflicts_with: None,
                    should_propagate: true,
                    reason: format!("excluded by '{}'", input.source.id),
                }),
                // Already False: nothing to force. Already Conflict:
                // leave the contradiction standing for the user.
                _ => None,
            },
            LogicState::Conflict => {
                let partnered = input
                    .source_state
                    .conflicts_with
                    .as_ref()
                    .is_some_and(|partners| partners.contains(&input.target.id));
                if partnered && input.target_state.state != LogicState::Conflict {
                    Some(RuleOutput {
                        state: LogicState::Conflict,
                        confidence: input.target_state.confidence,
                        derived_from: smallvec![input.source.id.clone()],
                        conflicts_with: Some(vec![input.source.id.clone()]),
                        should_propagate: true,
                        reason: format!("conflict partner of '{}'", input.source.id),
                    })
                } else {
                    None
                }
            }
            _ => None,
        }
    }
}

impl Rule for ConflictsRule {
    fn name(&self) -> &str {
        "conflicts"
    }

    fn relation(&self) -> RelationKind {
        RelationKind::Conflicts
    }

    fn bidirectional(&self) -> bool {
        true
    }

    fn propagate(&self, input: &RuleInput<'_>) -> Option<RuleOutput> {
        self.evaluate(input)
    }

    // Symmetric: the reverse direction runs the same logic on the
    // swapped input.
    fn propagate_reverse(&self, input: &RuleInput<'_>) -> Option<RuleOutput> {
        self.evaluate(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use verdict_core::NodeKind;
    use verdict_test_utils::{edge, node, GraphFixture};

    fn fixture() -> GraphFixture {
        GraphFixture::new(
            vec![
                node("a", NodeKind::Assumption, 90.0),
                node("b", NodeKind::Assumption, 90.0),
            ],
            vec![edge("e", "a", "b", RelationKind::Conflicts, 1.0)],
        )
    }

    #[test]
    fn both_true_marks_target_conflict() {
        let fx = fixture();
        // Both seed True at 90.
        let out = ConflictsRule.propagate(&fx.input(0)).unwrap();
        assert_eq!(out.state, LogicState::Conflict);
        assert_eq!(out.conflicts_with, Some(vec!["a".into()]));
        assert_eq!(out.confidence, 90.0);
    }

    #[test]
    fn conflicted_partner_spreads_symmetrically() {
        let mut fx = fixture();
        fx.set_state("b", LogicState::Conflict, 90.0);
        fx.set_conflicts("b", &["a"]);
        // Reverse direction: source = b (Conflict), target = a (True).
        let out = ConflictsRule
            .propagate_reverse(&fx.input_reversed(0))
            .unwrap();
        assert_eq!(out.state, LogicState::Conflict);
        assert_eq!(out.conflicts_with, Some(vec!["b".into()]));
    }

    #[test]
    fn lone_true_side_forces_unknown_partner_false() {
        let mut fx = fixture();
        fx.set_state("b", LogicState::Unknown, 50.0);
        let out = ConflictsRule.propagate(&fx.input(0)).unwrap();
        assert_eq!(out.state, LogicState::False);
        assert!((out.confidence - 85.5).abs() < 1e-9);
    }

    #[test]
    fn already_false_partner_is_left_alone() {
        let mut fx = fixture();
        fx.set_state("b", LogicState::False, 30.0);
        assert!(ConflictsRule.propagate(&fx.input(0)).is_none());
    }

    #[test]
    fn false_source_says_nothing_about_partner() {
        let mut fx = fixture();
        fx.set_state("a", LogicState::False, 90.0);
        assert!(ConflictsRule.propagate(&fx.input(0)).is_none());
    }

    #[test]
    fn unpartnered_conflict_source_is_inert() {
        let mut fx = fixture();
        fx.set_state("a", LogicState::Conflict, 90.0);
        fx.set_conflicts("a", &["z"]);
        assert!(ConflictsRule.propagate(&fx.input(0)).is_none());
    }
}
