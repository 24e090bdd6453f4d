//! Scenario documents on disk: loading, validation, and running.

use keystone_harness::runner::{run_scenario, RunError};
use keystone_harness::scenario::{ScenarioConfig, ScenarioError};
use keystone_harness::scenarios::bank_rush;
use keystone_harness::sink::RecordingSink;
use keystone_kernel::action::Action;
use lock_tests::plan_test_helpers::{run_builtin, run_config};

fn write_scenario(dir: &tempfile::TempDir, name: &str, text: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, text).unwrap();
    path
}

#[test]
fn saved_builtin_reloads_and_runs_identically() {
    let dir = tempfile::tempdir().unwrap();
    let text = serde_json::to_string_pretty(&bank_rush()).unwrap();
    let path = write_scenario(&dir, "bank_rush.json", &text);

    let loaded = ScenarioConfig::from_path(&path).unwrap();
    assert_eq!(loaded, bank_rush());

    let (from_file, _) = run_config(&loaded);
    let (builtin, _) = run_builtin("bank_rush");
    assert_eq!(from_file.report_digest, builtin.report_digest);
    assert_eq!(from_file.scenario_digest, builtin.scenario_digest);
}

#[test]
fn quarry_scenario_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_scenario(
        &dir,
        "quarry.json",
        r#"{
            "name": "quarry_only",
            "initial": {"gold": 0, "gold_per_tick": 1, "stone": 0, "stone_per_tick": 0},
            "target": {"gold": 30, "gold_per_tick": 1, "stone": 0, "stone_per_tick": 0},
            "rules": [
                {"action": "build_quarry", "cost_resource": "gold", "cost_amount": 10,
                 "rate_resource": "stone", "rate_delta": 10, "build_ticks": 1}
            ]
        }"#,
    );
    let config = ScenarioConfig::from_path(&path).unwrap();
    let (run, _) = run_config(&config);
    let found = run.report.outcome.unwrap();
    assert!(found.actions.iter().all(|a| *a != Action::BuildBank));
    assert_eq!(run.executed_ticks, Some(found.total_cost));
}

#[test]
fn negative_rate_in_file_is_a_contract_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_scenario(
        &dir,
        "broken.json",
        r#"{
            "name": "broken",
            "initial": {"gold": 0, "gold_per_tick": -3, "stone": 0, "stone_per_tick": 0},
            "target": {"gold": 0, "gold_per_tick": 11, "stone": 0, "stone_per_tick": 0}
        }"#,
    );
    let config = ScenarioConfig::from_path(&path).unwrap();
    let mut sink = RecordingSink::default();
    let err = run_scenario(&config, &mut sink).unwrap_err();
    assert!(matches!(err, RunError::Contract(_)), "{err}");
}

#[test]
fn malformed_and_unknown_fields_are_parse_errors() {
    let dir = tempfile::tempdir().unwrap();
    let truncated = write_scenario(&dir, "truncated.json", r#"{"name": "x", "initial": "#);
    assert!(matches!(
        ScenarioConfig::from_path(&truncated),
        Err(ScenarioError::Parse(_))
    ));

    let typo = write_scenario(
        &dir,
        "typo.json",
        r#"{
            "name": "typo",
            "initial": {"gold": 0, "gold_per_tick": 1, "stone": 0, "stone_per_tick": 0},
            "target": {"gold": 0, "gold_per_tick": 11, "stone": 0, "stone_per_tick": 0},
            "wait_tick": 10
        }"#,
    );
    assert!(matches!(
        ScenarioConfig::from_path(&typo),
        Err(ScenarioError::Parse(_))
    ));
}

#[test]
fn duplicate_rules_are_rejected_at_run_time() {
    let mut config = bank_rush();
    config.rules.push(config.rules[0]);
    let err = run_scenario(&config, &mut RecordingSink::default()).unwrap_err();
    assert!(matches!(err, RunError::Scenario(ScenarioError::Rules(_))));
}
