//! Best-cost table: the cheapest committed cost for each state.
//!
//! A state is committed when an entry for it is popped and not dominated.
//! Values only ever go down. This doubles as the closed set: a popped entry
//! whose cost is not strictly better than the committed one is skipped.

use std::collections::HashMap;

use keystone_kernel::state::GameState;

#[derive(Debug, Clone, Default)]
pub struct BestCostTable {
    costs: HashMap<GameState, i64>,
}

impl BestCostTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Committed cost for `state`, if any.
    #[must_use]
    pub fn get(&self, state: &GameState) -> Option<i64> {
        self.costs.get(state).copied()
    }

    /// True if `state` is already committed at `cost` or cheaper.
    #[must_use]
    pub fn is_dominated(&self, state: &GameState, cost: i64) -> bool {
        self.get(state).is_some_and(|best| best <= cost)
    }

    /// Commit `cost` for `state` if it strictly improves on the table.
    ///
    /// Returns `false` and leaves the table untouched when the state is
    /// already committed at `cost` or cheaper.
    pub fn commit(&mut self, state: GameState, cost: i64) -> bool {
        if self.is_dominated(&state, cost) {
            return false;
        }
        self.costs.insert(state, cost);
        true
    }

    /// Number of committed states.
    #[must_use]
    pub fn len(&self) -> usize {
        self.costs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.costs.is_empty()
    }

    /// Committed `(state, cost)` pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&GameState, i64)> {
        self.costs.iter().map(|(s, c)| (s, *c))
    }
}
