//! Search entry point and expansion loop.
//!
//! Best-first search with lazy relaxation:
//!
//! 1. Frontier empty → `FrontierExhausted`.
//! 2. Pop the lowest `(priority, creation_order)` entry.
//! 3. Goal test on the popped entry → `GoalReached`.
//! 4. Pops so far exceed the cap → `IterationBudgetExceeded`.
//! 5. Entry dominated by the best-cost table → discard.
//! 6. Commit the entry's cost, push every successor not already dominated.

use keystone_kernel::action::Action;
use keystone_kernel::rules::RuleSet;
use keystone_kernel::state::GameState;
use keystone_kernel::transition::generate_successors;

use crate::best_cost::BestCostTable;
use crate::contract::CancelSignal;
use crate::error::{SearchError, StateRole};
use crate::frontier::BestFirstFrontier;
use crate::heuristic::{estimate, is_goal};
use crate::node::{EntryId, SearchEntry, SearchTree};
use crate::policy::SearchPolicy;

/// Why the search terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationReason {
    /// A popped entry passed the goal test.
    GoalReached { entry: EntryId },
    /// Frontier emptied without reaching the goal.
    FrontierExhausted,
    /// More pops than `max_iterations` were needed.
    IterationBudgetExceeded,
    /// The cancel signal fired.
    Cancelled,
}

impl TerminationReason {
    /// Canonical string for reports.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::GoalReached { .. } => "goal_reached",
            Self::FrontierExhausted => "frontier_exhausted",
            Self::IterationBudgetExceeded => "iteration_budget_exceeded",
            Self::Cancelled => "cancelled",
        }
    }
}

/// Counters collected during one search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Entries popped from the frontier.
    pub pops: u64,
    /// Popped entries that were committed and expanded.
    pub expansions: u64,
    /// Entries created, root included.
    pub entries_created: u64,
    /// Popped entries discarded because a cheaper cost was already committed.
    pub dominated_discarded: u64,
    /// Successors not pushed because their state was already committed cheaper.
    pub successors_skipped: u64,
    /// Largest frontier size observed.
    pub frontier_high_water: u64,
}

impl SearchStats {
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "dominated_discarded": self.dominated_discarded,
            "entries_created": self.entries_created,
            "expansions": self.expansions,
            "frontier_high_water": self.frontier_high_water,
            "pops": self.pops,
            "successors_skipped": self.successors_skipped,
        })
    }
}

/// Result of a search execution.
///
/// Always carries the full entry arena and best-cost table regardless of how
/// the search terminated. Check [`SearchResult::is_goal_reached`] or inspect
/// `termination_reason` to determine the outcome.
#[derive(Debug)]
pub struct SearchResult {
    pub termination_reason: TerminationReason,
    pub tree: SearchTree,
    pub best_costs: BestCostTable,
    pub stats: SearchStats,
}

impl SearchResult {
    #[must_use]
    pub fn is_goal_reached(&self) -> bool {
        matches!(self.termination_reason, TerminationReason::GoalReached { .. })
    }

    /// The goal entry id, if the goal was reached.
    #[must_use]
    pub fn terminal(&self) -> Option<EntryId> {
        match self.termination_reason {
            TerminationReason::GoalReached { entry } => Some(entry),
            _ => None,
        }
    }

    /// The goal entry, if the goal was reached.
    #[must_use]
    pub fn terminal_entry(&self) -> Option<&SearchEntry> {
        self.terminal().map(|id| self.tree.get(id))
    }
}

/// Run best-first search from `initial` toward `target`.
///
/// Budget exhaustion, frontier exhaustion and cancellation all return
/// `Ok(SearchResult)`; `termination_reason` says which.
///
/// # Errors
///
/// Returns [`SearchError`] only for pre-flight validation failures: a
/// negative rate in either state, or an unusable policy. No entries are
/// created in that case.
pub fn search(
    initial: GameState,
    target: GameState,
    rules: &RuleSet,
    policy: &SearchPolicy,
    cancel: &dyn CancelSignal,
) -> Result<SearchResult, SearchError> {
    initial.validate().map_err(|source| SearchError::InvalidState {
        role: StateRole::Initial,
        source,
    })?;
    target.validate().map_err(|source| SearchError::InvalidState {
        role: StateRole::Target,
        source,
    })?;
    policy.validate()?;

    let mut tree = SearchTree::new();
    let mut frontier = BestFirstFrontier::new();
    let mut best_costs = BestCostTable::new();
    let mut stats = SearchStats::default();

    let root = tree.push_root(initial, estimate(&initial, &target));
    frontier.push(tree.get(root).frontier_key(), root);

    let termination_reason = loop {
        if cancel.is_cancelled() {
            break TerminationReason::Cancelled;
        }

        let Some((_, id)) = frontier.pop() else {
            break TerminationReason::FrontierExhausted;
        };
        stats.pops += 1;
        let current = *tree.get(id);

        if is_goal(&current.state, &target) {
            break TerminationReason::GoalReached { entry: id };
        }

        if stats.pops > policy.max_iterations {
            break TerminationReason::IterationBudgetExceeded;
        }

        // Lazy deletion: a cheaper copy of this state was already expanded.
        if !best_costs.commit(current.state, current.cost) {
            stats.dominated_discarded += 1;
            continue;
        }
        stats.expansions += 1;

        for edge in generate_successors(&current.state, rules) {
            let candidate_cost = current.cost.saturating_add(edge.cost);
            if best_costs.is_dominated(&edge.state, candidate_cost) {
                stats.successors_skipped += 1;
                continue;
            }
            let priority = candidate_cost.saturating_add(estimate(&edge.state, &target));
            let child = tree.push_child(id, &edge, candidate_cost, priority);
            frontier.push(tree.get(child).frontier_key(), child);
        }
    };

    stats.entries_created = tree.len() as u64;
    stats.frontier_high_water = frontier.high_water();

    Ok(SearchResult {
        termination_reason,
        tree,
        best_costs,
        stats,
    })
}

/// Entry ids from the root to `terminal`, root first.
#[must_use]
pub fn reconstruct_path(tree: &SearchTree, terminal: EntryId) -> Vec<EntryId> {
    let mut path = Vec::new();
    let mut current = Some(terminal);

    while let Some(id) = current {
        path.push(id);
        current = tree.get(id).parent;
    }

    path.reverse();
    path
}

/// Chronological actions leading to `terminal`.
///
/// The root's `Empty` marker is not part of the plan. Returns `None` when
/// there is no terminal entry, so "no plan" never looks like "nothing to do".
#[must_use]
pub fn reconstruct_actions(tree: &SearchTree, terminal: Option<EntryId>) -> Option<Vec<Action>> {
    let terminal = terminal?;
    Some(
        reconstruct_path(tree, terminal)
            .into_iter()
            .map(|id| tree.get(id))
            .filter(|entry| !entry.is_root())
            .map(|entry| entry.action)
            .collect(),
    )
}
