//! `replay()`: re-execute an action sequence and sum its tick cost.
//!
//! Used to check that a plan is executable from its initial state and that
//! its reported cost is the sum of its edge costs.

use crate::action::Action;
use crate::rules::RuleSet;
use crate::state::GameState;
use crate::transition::{apply_action, ApplyFailure};

/// One applied step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepRecord {
    pub action: Action,
    /// Ticks elapsed before this step started.
    pub start_tick: i64,
    /// State after the step.
    pub result: GameState,
}

/// Successful replay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplayOutcome {
    pub final_state: GameState,
    pub total_cost: i64,
    pub steps: Vec<StepRecord>,
}

/// The plan could not be replayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("step {step_index} failed: {failure}")]
pub struct ReplayError {
    /// Zero-based index of the first action that failed.
    pub step_index: usize,
    pub failure: ApplyFailure,
}

/// Apply `actions` in order starting at `initial`.
///
/// # Errors
///
/// Returns [`ReplayError`] pointing at the first action that could not be
/// applied.
pub fn replay(
    initial: &GameState,
    actions: &[Action],
    rules: &RuleSet,
) -> Result<ReplayOutcome, ReplayError> {
    let mut state = *initial;
    let mut total_cost: i64 = 0;
    let mut steps = Vec::with_capacity(actions.len());

    for (step_index, &action) in actions.iter().enumerate() {
        let edge = apply_action(&state, action, rules)
            .map_err(|failure| ReplayError { step_index, failure })?;
        steps.push(StepRecord {
            action,
            start_tick: total_cost,
            result: edge.state,
        });
        total_cost = total_cost.saturating_add(edge.cost);
        state = edge.state;
    }

    Ok(ReplayOutcome {
        final_state: state,
        total_cost,
        steps,
    })
}
