//! Cross-process determinism: the `plan_fixture` binary prints identical
//! stdout under different working directories and environments.

use std::path::Path;
use std::process::Command;

use lock_tests::plan_test_helpers::{sibling_binary, workspace_root};

fn run_variant(work_dir: &Path, args: &[&str], env_overrides: &[(&str, &str)]) -> String {
    let bin = sibling_binary("plan_fixture");

    let mut command = Command::new(&bin);
    command.current_dir(work_dir).args(args);

    command
        .env_remove("LC_ALL")
        .env_remove("LC_COLLATE")
        .env_remove("LANG")
        .env_remove("LANGUAGE")
        .env_remove("RUST_LOG");

    for &(key, val) in env_overrides {
        command.env(key, val);
    }

    let output = command.output().unwrap_or_else(|e| {
        panic!(
            "failed to spawn {} (work_dir={}, overrides={env_overrides:?}): {e}",
            bin.display(),
            work_dir.display()
        )
    });

    assert!(
        output.status.success(),
        "plan_fixture exited with {}: stderr={}",
        output.status,
        String::from_utf8_lossy(&output.stderr)
    );

    String::from_utf8(output.stdout).expect("stdout is valid UTF-8")
}

#[test]
fn crossproc_determinism_four_env_variants() {
    let root = workspace_root();
    let baseline = run_variant(&root, &[], &[]);

    assert!(baseline.contains("scenario=bank_rush\n"));
    assert!(baseline.contains("actions=wait,build_bank\n"));
    assert!(baseline.contains("total_cost=11\n"));
    assert!(baseline.contains("outcome=exhausted_budget\n"));
    assert!(baseline.contains("report_digest=sha256:"));
    assert!(baseline.contains("scenario_digest=sha256:"));

    // Variant 2: different cwd.
    let alt_cwd = std::env::temp_dir();
    let variant_cwd = run_variant(&alt_cwd, &[], &[]);
    assert_eq!(baseline, variant_cwd, "output differs when cwd changes");

    // Variant 3: different locale env.
    let variant_locale = run_variant(&root, &[], &[("LC_ALL", "C"), ("LANG", "C")]);
    assert_eq!(baseline, variant_locale, "output differs when LC_ALL=C LANG=C");

    // Variant 4: spurious env vars and verbose logging.
    let variant_noise = run_variant(
        &root,
        &[],
        &[
            ("KEYSTONE_NOISE", "should_not_matter"),
            ("TZ", "America/New_York"),
            ("RUST_LOG", "debug"),
        ],
    );
    assert_eq!(baseline, variant_noise, "output differs with spurious env vars");
}

#[test]
fn single_scenario_block_matches_full_listing() {
    let root = workspace_root();
    let all = run_variant(&root, &[], &[]);
    let one = run_variant(&root, &["stone_economy"], &[]);
    assert!(one.starts_with("scenario=stone_economy\n"));
    assert!(all.contains(&one), "standalone block differs from listing");
}

#[test]
fn config_file_and_builtin_agree() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bank_rush.json");
    let config = keystone_harness::scenarios::bank_rush();
    std::fs::write(&path, serde_json::to_vec(&config).unwrap()).unwrap();

    let root = workspace_root();
    let from_file = run_variant(&root, &["--config", path.to_str().unwrap()], &[]);
    let builtin = run_variant(&root, &["bank_rush"], &[]);
    assert_eq!(from_file, builtin);
}
