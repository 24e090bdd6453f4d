//! Binary that runs scenarios through the harness and prints deterministic
//! output lines for cross-process verification.
//!
//! Usage: `plan_fixture [NAME | --config PATH]...`
//!
//! With no arguments every built-in scenario runs in listing order.
//!
//! Output: one block of key=value lines per scenario on stdout. Logs go to
//! stderr, filtered by `RUST_LOG`.

use std::path::Path;

use keystone_harness::runner::run_scenario;
use keystone_harness::scenario::ScenarioConfig;
use keystone_harness::scenarios::{builtin, BUILTIN_NAMES};
use keystone_harness::sink::TracingSink;
use tracing_subscriber::EnvFilter;

fn load(args: &[String]) -> Vec<ScenarioConfig> {
    if args.is_empty() {
        return BUILTIN_NAMES
            .iter()
            .map(|name| builtin(name).expect("listed built-in resolves"))
            .collect();
    }
    let mut configs = Vec::new();
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        let config = if arg == "--config" {
            let path = iter.next().expect("--config needs a path");
            ScenarioConfig::from_path(Path::new(path))
        } else {
            builtin(arg)
        };
        configs.push(config.unwrap_or_else(|e| panic!("cannot load {arg}: {e}")));
    }
    configs
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let mut sink = TracingSink;

    for config in load(&args) {
        let run = run_scenario(&config, &mut sink).expect("scenario run failed");

        println!("scenario={}", run.scenario);
        println!("scenario_digest={}", run.scenario_digest);
        match &run.report.outcome {
            Ok(plan) => {
                let actions: Vec<&str> = plan.actions.iter().map(|a| a.as_str()).collect();
                println!("outcome=planned");
                println!("actions={}", actions.join(","));
                println!("total_cost={}", plan.total_cost);
                println!("pops={}", plan.stats.pops);
            }
            Err(failure) => {
                println!("outcome={}", failure.as_str());
                println!("pops={}", failure.stats().pops);
            }
        }
        println!("report_digest={}", run.report_digest);
    }
}
