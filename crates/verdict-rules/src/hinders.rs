//! Hindrance rule: negative influence with a strong-hinder override.

use smallvec::smallvec;
use verdict_core::{LogicState, RelationKind};
use verdict_rule::{Rule, RuleInput, RuleOutput};

/// Strength above which a hinder can force the target false outright.
const STRONG_STRENGTH: f64 = 80.0;

/// Source confidence above which a hinder can force the target false.
const STRONG_CONFIDENCE: f64 = 70.0;

/// Fraction of the weighted source confidence eroded per evaluation.
const WEAKEN_FACTOR: f64 = 0.5;

/// Confidence below which an eroded target collapses to False.
const COLLAPSE_THRESHOLD: f64 = 20.0;

/// Negative influence, `A → B`.
///
/// A sufficiently strong and confident True source forces the target
/// False outright; otherwise it erodes the target's confidence, and a
/// target eroded below the collapse threshold goes False. A False
/// source produces nothing — hindrance lapses passively, it is not an
/// active retraction. Strength is a 0–100 percentage. Unidirectional.
pub struct HindersRule;

impl Rule for HindersRule {
    fn name(&self) -> &str {
        "hinders"
    }

    fn relation(&self) -> RelationKind {
        RelationKind::Hinders
    }

    fn propagate(&self, input: &RuleInput<'_>) -> Option<RuleOutput> {
        if input.source_state.state != LogicState::True {
            return None;
        }
        let fraction = input.edge.strength / 100.0;

        if input.edge.strength > STRONG_STRENGTH
            && input.source_state.confidence > STRONG_CONFIDENCE
        {
            return Some(RuleOutput {
                state: LogicState::False,
                confidence: input.source_state.confidence * fraction,
                derived_from: smallvec![input.source.id.clone()],
                conflicts_with: None,
                should_propagate: true,
                reason: format!("strongly hindered by '{}'", input.source.id),
            });
        }

        let decrease = input.source_state.confidence * fraction * WEAKEN_FACTOR;
        let confidence = (input.target_state.confidence - decrease).max(0.0);
        let collapsed = confidence < COLLAPSE_THRESHOLD;
        let state = if collapsed {
            LogicState::False
        } else {
            input.target_state.state
        };
        let mut derived_from = input.target_state.derived_from.clone();
        if collapsed && !derived_from.contains(&input.source.id) {
            derived_from.push(input.source.id.clone());
        }
        Some(RuleOutput {
            state,
            confidence,
            derived_from,
            conflicts_with: input.target_state.conflicts_with.clone(),
            should_propagate: collapsed,
            reason: format!(
                "hindered by '{}' (-{:.1} confidence)",
                input.source.id, decrease
            ),
        })
    }
}
