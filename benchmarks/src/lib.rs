//! Shared helpers for keystone benchmark suites.

use keystone_kernel::rules::{ImprovementRule, RuleSet};
use keystone_kernel::state::GameState;
use keystone_kernel::transition::wait_transition;
use keystone_search::node::{EntryId, SearchTree};

/// A chain of `n` entries (root plus `n - 1` waits) with spread priorities.
///
/// Priorities repeat every 7 entries so the frontier sees ties.
#[must_use]
pub fn build_chain(n: u64) -> (SearchTree, Vec<EntryId>) {
    let mut tree = SearchTree::new();
    let mut ids = Vec::new();
    if n == 0 {
        return (tree, ids);
    }
    let mut parent = tree.push_root(GameState::new(0, 1, 0, 0), 0);
    ids.push(parent);
    for i in 1..n {
        let edge = wait_transition(&tree.get(parent).state, 10);
        let cost = tree.get(parent).cost + edge.cost;
        let priority = i64::try_from(i % 7).unwrap_or(0);
        parent = tree.push_child(parent, &edge, cost, priority);
        ids.push(parent);
    }
    (tree, ids)
}

/// Income targets of increasing depth, from the bank-rush start.
#[must_use]
pub fn income_ladder() -> Vec<(&'static str, GameState)> {
    vec![
        ("gpt_11", GameState::new(0, 11, 0, 0)),
        ("gpt_51", GameState::new(0, 51, 0, 0)),
        ("gpt_101_gold_500", GameState::new(500, 101, 0, 0)),
        ("gpt_201_gold_2000", GameState::new(2_000, 201, 0, 0)),
        ("gold_100k", GameState::new(100_000, 1, 0, 0)),
        ("gold_1m", GameState::new(1_000_000, 1, 0, 0)),
    ]
}

/// Classic rules plus the quarry.
///
/// # Panics
///
/// Panics if the built-in rules conflict, which they do not.
#[must_use]
pub fn extended_rules() -> RuleSet {
    RuleSet::classic()
        .with_rule(ImprovementRule::quarry())
        .expect("bank and quarry bind different actions")
}
