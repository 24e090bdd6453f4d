//! In-process determinism: repeated runs produce byte-identical reports.

use keystone_harness::scenarios::BUILTIN_NAMES;
use keystone_kernel::rules::{ImprovementRule, RuleSet};
use keystone_kernel::state::GameState;
use keystone_search::contract::NeverCancel;
use keystone_search::policy::SearchPolicy;
use keystone_search::report::PlanReport;
use keystone_search::search::search;
use lock_tests::plan_test_helpers::run_builtin;

const RUNS: usize = 10;

#[test]
fn builtin_reports_are_stable_across_runs() {
    for name in BUILTIN_NAMES {
        let (baseline, _) = run_builtin(name);
        let baseline_bytes = baseline.report.to_canonical_json_bytes().unwrap();
        for _ in 1..RUNS {
            let (run, _) = run_builtin(name);
            assert_eq!(run.report_digest, baseline.report_digest, "{name}");
            assert_eq!(
                run.report.to_canonical_json_bytes().unwrap(),
                baseline_bytes,
                "{name}"
            );
        }
    }
}

#[test]
fn search_tree_is_identical_across_runs() {
    let rules = RuleSet::classic().with_rule(ImprovementRule::quarry()).unwrap();
    let run = || {
        search(
            GameState::new(0, 1, 0, 0),
            GameState::new(300, 41, 0, 0),
            &rules,
            &SearchPolicy::default(),
            &NeverCancel,
        )
        .unwrap()
    };
    let first = run();
    let first_entries: Vec<_> = first.tree.iter().copied().collect();
    for _ in 1..RUNS {
        let again = run();
        let entries: Vec<_> = again.tree.iter().copied().collect();
        assert_eq!(entries, first_entries);
        assert_eq!(again.stats, first.stats);
        assert_eq!(again.termination_reason, first.termination_reason);
    }
}

#[test]
fn report_digest_changes_with_target() {
    let rules = RuleSet::classic();
    let report = |target| {
        let outcome = search(
            GameState::new(0, 1, 0, 0),
            target,
            &rules,
            &SearchPolicy::default(),
            &NeverCancel,
        )
        .unwrap()
        .into_plan();
        PlanReport::new(GameState::new(0, 1, 0, 0), target, outcome)
            .digest()
            .unwrap()
    };
    assert_ne!(
        report(GameState::new(0, 11, 0, 0)),
        report(GameState::new(0, 21, 0, 0))
    );
}
