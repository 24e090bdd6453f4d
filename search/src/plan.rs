//! `plan()`: run the driver and turn its terminal entry into an action list.
//!
//! Two outcomes must never be confused:
//! - `Ok(Plan)` with no actions and cost 0: the initial state already
//!   satisfies the target.
//! - `Err(PlanError::Failed(..))`: no plan was found.

use keystone_kernel::action::Action;
use keystone_kernel::rules::RuleSet;
use keystone_kernel::state::GameState;

use crate::contract::{CancelSignal, NeverCancel};
use crate::error::SearchError;
use crate::policy::SearchPolicy;
use crate::search::{reconstruct_actions, search, SearchResult, SearchStats, TerminationReason};

/// A successful plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plan {
    /// Actions in execution order. Never contains `Action::Empty`.
    pub actions: Vec<Action>,
    /// Sum of edge costs along the plan, in ticks.
    pub total_cost: i64,
    /// State reached after the last action.
    pub final_state: GameState,
    pub stats: SearchStats,
}

impl Plan {
    /// True when the initial state already satisfied the target.
    #[must_use]
    pub fn is_trivial(&self) -> bool {
        self.actions.is_empty()
    }
}

/// No plan was found. An expected outcome, not a crash.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PlanningFailure {
    /// The iteration cap was reached before the goal test passed.
    #[error("search budget exhausted after {} pops", .stats.pops)]
    ExhaustedBudget { stats: SearchStats },
    /// The frontier emptied before the cap: nothing left to try.
    #[error("target unreachable: frontier exhausted after {} pops", .stats.pops)]
    Unreachable { stats: SearchStats },
    /// The caller's cancel signal fired.
    #[error("planning cancelled after {} pops", .stats.pops)]
    Cancelled { stats: SearchStats },
}

impl PlanningFailure {
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        match self {
            Self::ExhaustedBudget { stats }
            | Self::Unreachable { stats }
            | Self::Cancelled { stats } => stats,
        }
    }

    /// Canonical string for reports.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::ExhaustedBudget { .. } => "exhausted_budget",
            Self::Unreachable { .. } => "unreachable",
            Self::Cancelled { .. } => "cancelled",
        }
    }
}

/// Everything `plan` can return besides a plan.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlanError {
    /// Caller misuse: bad input state or policy.
    #[error(transparent)]
    Contract(#[from] SearchError),
    /// Search ran and found nothing.
    #[error(transparent)]
    Failed(#[from] PlanningFailure),
}

impl SearchResult {
    /// Reconstruct the plan from the terminal entry.
    ///
    /// # Errors
    ///
    /// Returns the [`PlanningFailure`] matching the termination reason when
    /// the goal was not reached.
    pub fn into_plan(self) -> Result<Plan, PlanningFailure> {
        let stats = self.stats;
        let failure = match self.termination_reason {
            TerminationReason::GoalReached { .. } => None,
            TerminationReason::FrontierExhausted => Some(PlanningFailure::Unreachable { stats }),
            TerminationReason::IterationBudgetExceeded => {
                Some(PlanningFailure::ExhaustedBudget { stats })
            }
            TerminationReason::Cancelled => Some(PlanningFailure::Cancelled { stats }),
        };
        if let Some(failure) = failure {
            return Err(failure);
        }

        let (Some(goal), Some(actions)) = (
            self.terminal_entry(),
            reconstruct_actions(&self.tree, self.terminal()),
        ) else {
            return Err(PlanningFailure::Unreachable { stats });
        };

        Ok(Plan {
            actions,
            total_cost: goal.cost,
            final_state: goal.state,
            stats,
        })
    }
}

/// Plan a minimum-cost action sequence from `initial` to `target`.
///
/// One call is one deterministic attempt. Callers wanting a different outcome
/// re-invoke with another target or a larger cap.
///
/// # Errors
///
/// - [`PlanError::Contract`] for invalid input states or policy.
/// - [`PlanError::Failed`] when the search ends without reaching the target.
pub fn plan(
    initial: GameState,
    target: GameState,
    rules: &RuleSet,
    policy: &SearchPolicy,
) -> Result<Plan, PlanError> {
    plan_with_cancel(initial, target, rules, policy, &NeverCancel)
}

/// [`plan`] with a cooperative cancel signal polled once per iteration.
///
/// # Errors
///
/// Same as [`plan`], plus [`PlanningFailure::Cancelled`] once the signal
/// fires.
pub fn plan_with_cancel(
    initial: GameState,
    target: GameState,
    rules: &RuleSet,
    policy: &SearchPolicy,
    cancel: &dyn CancelSignal,
) -> Result<Plan, PlanError> {
    let result = search(initial, target, rules, policy, cancel)?;
    Ok(result.into_plan()?)
}
