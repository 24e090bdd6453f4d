//! Transition generation and single-action application.
//!
//! A [`Transition`] is a directed edge to an explicit destination state. It
//! carries no reference to its origin: it only means something when paired
//! with the state it was generated from.

use crate::action::Action;
use crate::rules::RuleSet;
use crate::state::GameState;

/// An outgoing edge: where you end up, what you did, how many ticks it took.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    /// Destination state.
    pub state: GameState,
    /// The action that produced `state`.
    pub action: Action,
    /// Edge cost in ticks. Never negative.
    pub cost: i64,
}

/// Typed failure for applying one action. Fail-closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ApplyFailure {
    /// `Empty` is a root marker, not something an agent can do.
    #[error("the empty action cannot be applied")]
    EmptyAction,
    /// No rule in the ruleset implements this action.
    #[error("no rule implements action {action}")]
    UnknownAction { action: Action },
    /// The rule exists but the state cannot afford it.
    #[error("cannot afford {action}: need {required}, have {available}")]
    PreconditionNotMet {
        action: Action,
        required: i64,
        available: i64,
    },
}

/// The wait edge: `ticks` of linear accrual.
#[must_use]
pub fn wait_transition(state: &GameState, ticks: i64) -> Transition {
    Transition {
        state: state.accrue(ticks),
        action: Action::Wait,
        cost: ticks,
    }
}

/// All valid outgoing edges of `state`.
///
/// The wait edge is always first, followed by every affordable improvement in
/// canonical rule order. Generation is pure: the same inputs always produce
/// the same edges in the same order.
#[must_use]
pub fn generate_successors(state: &GameState, rules: &RuleSet) -> Vec<Transition> {
    let mut out = Vec::with_capacity(1 + rules.len());
    out.push(wait_transition(state, rules.wait_ticks()));
    out.extend(
        rules
            .rules()
            .filter(|rule| rule.is_affordable(state))
            .map(|rule| Transition {
                state: rule.outcome(state),
                action: rule.action,
                cost: rule.build_ticks,
            }),
    );
    out
}

/// Apply one named action to `state`.
///
/// # Errors
///
/// Returns [`ApplyFailure`] on:
/// - `EmptyAction`: `action` is the root marker
/// - `UnknownAction`: no rule implements `action`
/// - `PreconditionNotMet`: the rule's cost exceeds the stockpile
pub fn apply_action(
    state: &GameState,
    action: Action,
    rules: &RuleSet,
) -> Result<Transition, ApplyFailure> {
    match action {
        Action::Empty => Err(ApplyFailure::EmptyAction),
        Action::Wait => Ok(wait_transition(state, rules.wait_ticks())),
        other => {
            let rule = rules
                .get(other)
                .ok_or(ApplyFailure::UnknownAction { action: other })?;
            if !rule.is_affordable(state) {
                return Err(ApplyFailure::PreconditionNotMet {
                    action: other,
                    required: rule.cost_amount,
                    available: state.amount(rule.cost_resource),
                });
            }
            Ok(Transition {
                state: rule.outcome(state),
                action: other,
                cost: rule.build_ticks,
            })
        }
    }
}
