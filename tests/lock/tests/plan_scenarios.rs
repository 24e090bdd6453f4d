//! Acceptance scenarios: known inputs with known plans or known failures.

use keystone_harness::sink::DiagnosticEvent;
use keystone_kernel::action::Action;
use keystone_kernel::rules::RuleSet;
use keystone_kernel::state::GameState;
use keystone_search::plan::{plan, PlanError, PlanningFailure};
use keystone_search::policy::SearchPolicy;
use lock_tests::plan_test_helpers::{plan_and_replay, run_builtin};

// ACCEPTANCE: bank rush
#[test]
fn wait_then_build_one_bank() {
    let found = plan_and_replay(
        GameState::new(0, 1, 0, 0),
        GameState::new(0, 11, 0, 0),
        &RuleSet::classic(),
    );
    assert_eq!(found.actions, vec![Action::Wait, Action::BuildBank]);
    assert_eq!(found.total_cost, 11);
    assert_eq!(found.final_state.gold_per_tick, 11);
}

// ACCEPTANCE: initial already satisfies target
#[test]
fn satisfied_target_yields_empty_plan() {
    let (run, sink) = run_builtin("already_there");
    let found = run.report.outcome.as_ref().unwrap();
    assert!(found.actions.is_empty());
    assert_eq!(found.total_cost, 0);
    assert_eq!(found.stats.pops, 1);
    assert_eq!(found.stats.expansions, 0);
    assert!(matches!(sink.events.as_slice(), [DiagnosticEvent::Planned { .. }]));
}

#[test]
fn surplus_counts_as_satisfied() {
    let found = plan_and_replay(
        GameState::new(500, 30, 7, 2),
        GameState::new(100, 11, 0, 0),
        &RuleSet::classic(),
    );
    assert!(found.is_trivial());
}

// ACCEPTANCE: cap exhausted
#[test]
fn cap_exhaustion_is_an_explicit_failure() {
    let (run, sink) = run_builtin("out_of_budget");
    let Err(failure) = &run.report.outcome else {
        panic!("expected a failure outcome");
    };
    assert!(matches!(failure, PlanningFailure::ExhaustedBudget { .. }));
    assert!(failure.stats().expansions <= 25);
    assert_eq!(sink.events.len(), 1);
}

#[test]
fn zero_income_gold_gap_is_unreachable() {
    let err = plan(
        GameState::new(0, 0, 0, 0),
        GameState::new(100, 0, 0, 0),
        &RuleSet::classic(),
        &SearchPolicy::default(),
    )
    .unwrap_err();
    let PlanError::Failed(PlanningFailure::Unreachable { stats }) = err else {
        panic!("expected unreachable, got {err:?}");
    };
    assert_eq!(stats.pops, 1);
    assert_eq!(stats.expansions, 1);
}

#[test]
fn multi_bank_plan_is_cost_optimal_among_replays() {
    let found = plan_and_replay(
        GameState::new(0, 1, 0, 0),
        GameState::new(0, 21, 0, 0),
        &RuleSet::classic(),
    );
    assert_eq!(
        found.actions,
        vec![Action::Wait, Action::BuildBank, Action::Wait, Action::BuildBank]
    );
    assert_eq!(found.total_cost, 22);
}

#[test]
fn gold_and_income_target() {
    let found = plan_and_replay(
        GameState::new(0, 1, 0, 0),
        GameState::new(200, 21, 0, 0),
        &RuleSet::classic(),
    );
    assert_eq!(found.total_cost, 25);
    assert_eq!(found.final_state, GameState::new(175, 51, 0, 0));
    // Goal test uses whole ticks: a gold shortfall below one tick of income
    // counts as reached.
    assert!(200 - found.final_state.gold < found.final_state.gold_per_tick);
}
