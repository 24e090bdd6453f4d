//! `SimulatedConsumer`: executes plans against an owned `GameState`.
//!
//! Stands in for a live game: each action is applied through the kernel, so
//! a plan that the planner considers valid must also execute here.

use keystone_kernel::action::Action;
use keystone_kernel::replay::ReplayError;
use keystone_kernel::rules::RuleSet;
use keystone_kernel::state::GameState;
use keystone_kernel::transition::{apply_action, ApplyFailure};

use crate::contract::ActionConsumer;

#[derive(Debug, Clone)]
pub struct SimulatedConsumer {
    state: GameState,
    rules: RuleSet,
    elapsed: i64,
    applied: Vec<Action>,
}

impl SimulatedConsumer {
    #[must_use]
    pub fn new(state: GameState, rules: RuleSet) -> Self {
        Self {
            state,
            rules,
            elapsed: 0,
            applied: Vec::new(),
        }
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Ticks consumed so far.
    #[must_use]
    pub fn elapsed(&self) -> i64 {
        self.elapsed
    }

    /// Actions applied so far, in order.
    #[must_use]
    pub fn applied(&self) -> &[Action] {
        &self.applied
    }
}

impl ActionConsumer for SimulatedConsumer {
    fn consume(&mut self, action: Action) -> Result<i64, ApplyFailure> {
        let edge = apply_action(&self.state, action, &self.rules)?;
        self.state = edge.state;
        self.elapsed = self.elapsed.saturating_add(edge.cost);
        self.applied.push(action);
        Ok(edge.cost)
    }
}

/// Feed `actions` to `consumer` in order and sum the ticks.
///
/// # Errors
///
/// Returns [`ReplayError`] naming the first action the consumer rejected.
/// Actions before it have already been applied.
pub fn execute(consumer: &mut dyn ActionConsumer, actions: &[Action]) -> Result<i64, ReplayError> {
    let mut total: i64 = 0;
    for (step_index, &action) in actions.iter().enumerate() {
        let ticks = consumer
            .consume(action)
            .map_err(|failure| ReplayError { step_index, failure })?;
        total = total.saturating_add(ticks);
    }
    Ok(total)
}
