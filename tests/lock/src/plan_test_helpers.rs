//! Shared test helpers for running scenarios and checking plans.
//!
//! Every plan returned by these helpers has already been replayed through
//! the kernel, so call sites test the property they name rather than
//! re-deriving executability.

use std::path::{Path, PathBuf};

use keystone_harness::runner::{run_scenario, RunReport};
use keystone_harness::scenario::ScenarioConfig;
use keystone_harness::scenarios::builtin;
use keystone_harness::sink::RecordingSink;
use keystone_kernel::replay::replay;
use keystone_kernel::rules::RuleSet;
use keystone_kernel::state::GameState;
use keystone_search::plan::{plan, Plan};
use keystone_search::policy::SearchPolicy;

/// Run a built-in scenario with a recording sink.
///
/// # Panics
///
/// Panics if the name is unknown or the run errors. Test-only.
#[must_use]
pub fn run_builtin(name: &str) -> (RunReport, RecordingSink) {
    let config = builtin(name).unwrap();
    run_config(&config)
}

/// Run a scenario with a recording sink.
///
/// # Panics
///
/// Panics if the run errors. Test-only.
#[must_use]
pub fn run_config(config: &ScenarioConfig) -> (RunReport, RecordingSink) {
    let mut sink = RecordingSink::default();
    let report = run_scenario(config, &mut sink).unwrap();
    (report, sink)
}

/// Plan under `rules` with the default cap and check the plan by replay.
///
/// # Panics
///
/// Panics if planning fails or replay disagrees with the plan. Test-only.
#[must_use]
pub fn plan_and_replay(initial: GameState, target: GameState, rules: &RuleSet) -> Plan {
    let found = plan(initial, target, rules, &SearchPolicy::default()).unwrap();
    let replayed = replay(&initial, &found.actions, rules).unwrap();
    assert_eq!(replayed.total_cost, found.total_cost, "replayed cost differs");
    assert_eq!(replayed.final_state, found.final_state, "replayed state differs");
    found
}

/// Path to a binary built next to the current test executable.
///
/// # Panics
///
/// Panics if the test binary's location cannot be resolved.
#[must_use]
pub fn sibling_binary(name: &str) -> PathBuf {
    let mut path = std::env::current_exe()
        .expect("can resolve test binary path")
        .parent()
        .expect("binary dir exists")
        .parent()
        .expect("deps parent exists")
        .to_path_buf();
    path.push(name);
    path
}

/// The workspace root, two levels above this crate.
///
/// # Panics
///
/// Panics if the manifest directory is not nested as expected.
#[must_use]
pub fn workspace_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .expect("tests/ exists")
        .parent()
        .expect("workspace root exists")
        .to_path_buf()
}
