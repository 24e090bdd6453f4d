//! Collaborator contracts: who receives planning results.

use keystone_kernel::action::Action;
use keystone_kernel::state::GameState;
use keystone_kernel::transition::ApplyFailure;
use keystone_search::plan::PlanningFailure;

/// Receives the outcome of a planning call for display or logging.
///
/// # Contract
///
/// - Purely informational. Nothing in the planner or runner reads back from
///   a sink, and a sink cannot change an outcome.
/// - Exactly one of the two methods is called per planning call.
pub trait DiagnosticSink {
    /// The goal was reached.
    fn on_plan(&mut self, terminal: &GameState, total_cost: i64, iterations: u64);

    /// No plan was found.
    fn on_failure(&mut self, failure: &PlanningFailure);
}

/// Applies planned actions to live game state, one at a time.
///
/// The planner never executes actions; a consumer does, in plan order.
pub trait ActionConsumer {
    /// Apply `action`, returning the ticks it took.
    ///
    /// # Errors
    ///
    /// Returns [`ApplyFailure`] if the action cannot be applied to the
    /// consumer's current state.
    fn consume(&mut self, action: Action) -> Result<i64, ApplyFailure>;
}
