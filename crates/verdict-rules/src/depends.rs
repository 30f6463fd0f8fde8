//! Dependency rule: a failed dependency fails its dependents.

use smallvec::smallvec;
use verdict_core::{LogicState, RelationKind};
use verdict_rule::{Rule, RuleInput, RuleOutput};

/// Confidence retained when failure propagates down one dependency hop.
const FAILURE_DECAY: f64 = 0.9;

/// `A → B` stored as "B depends on A".
///
/// A False source fails the target; a Conflict source spreads the
/// conflict with its partner list. A True source proves nothing on its
/// own — other unmet dependencies may exist — so it produces no output.
/// Unidirectional.
pub struct DependsRule;

impl Rule for DependsRule {
    fn name(&self) -> &str {
        "depends"
    }

    fn relation(&self) -> RelationKind {
        RelationKind::Depends
    }

    fn propagate(&self, input: &RuleInput<'_>) -> Option<RuleOutput> {
        match input.source_state.state {
            LogicState::False if input.target_state.state != LogicState::False => {
                Some(RuleOutput {
                    state: LogicState::False,
                    confidence: input.source_state.confidence * FAILURE_DECAY,
                    derived_from: smallvec![input.source.id.clone()],
                    conflicts_with: None,
                    should_propagate: true,
                    reason: format!("dependency '{}' does not hold", input.source.id),
                })
            }
            LogicState::Conflict if input.target_state.state != LogicState::Conflict => {
                Some(RuleOutput {
                    state: LogicState::Conflict,
                    confidence: input.source_state.confidence * FAILURE_DECAY,
                    derived_from: smallvec![input.source.id.clone()],
                    conflicts_with: input.source_state.conflicts_with.clone(),
                    should_propagate: true,
                    reason: format!("dependency '{}' is in conflict", input.source.id),
                })
            }
            _ => None,
        }
    }
}
