//! Harness runner: plan a scenario, report it, and prove the plan executes.
//!
//! The runner uses ONLY library APIs: `plan_with_cancel`, the consumer
//! contract, and `PlanReport`. It does not implement any search logic.
//!
//! # Pipeline
//!
//! ```text
//! ScenarioConfig → rule_set() + policy() + digest()
//!   → plan_with_cancel() → DiagnosticSink
//!   → [consume() × N] → cost/state check
//!   → PlanReport → digest
//! ```

use keystone_kernel::hash::ContentHash;
use keystone_kernel::replay::ReplayError;
use keystone_kernel::state::GameState;
use keystone_search::contract::{CancelSignal, NeverCancel};
use keystone_search::error::SearchError;
use keystone_search::plan::{plan_with_cancel, PlanError};
use keystone_search::report::{PlanReport, ReportError};

use crate::consumer::{execute, SimulatedConsumer};
use crate::contract::DiagnosticSink;
use crate::scenario::{ScenarioConfig, ScenarioError};

/// Error during a harness run.
///
/// A planning failure (budget, unreachable, cancelled) is NOT a run error:
/// it is recorded in the report outcome. These variants mean the run itself
/// could not be carried out or the plan did not survive execution.
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error(transparent)]
    Scenario(#[from] ScenarioError),
    /// The planner rejected its inputs.
    #[error(transparent)]
    Contract(#[from] SearchError),
    /// The consumer rejected a planned action.
    #[error("plan did not execute: {0}")]
    Execution(#[from] ReplayError),
    /// Executed cost differs from the reported cost.
    #[error("plan reported cost {planned} but execution took {executed} ticks")]
    CostMismatch { planned: i64, executed: i64 },
    /// Executed end state differs from the reported final state.
    #[error("plan reported final state {planned:?} but execution ended at {executed:?}")]
    StateMismatch {
        planned: GameState,
        executed: GameState,
    },
    #[error(transparent)]
    Report(#[from] ReportError),
}

/// Everything one run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub scenario: String,
    pub scenario_digest: ContentHash,
    pub report: PlanReport,
    pub report_digest: ContentHash,
    /// Ticks the consumer spent executing the plan; `None` when no plan was
    /// found.
    pub executed_ticks: Option<i64>,
}

impl RunReport {
    #[must_use]
    pub fn is_planned(&self) -> bool {
        self.report.outcome.is_ok()
    }
}

/// Run one scenario to completion.
///
/// # Errors
///
/// See [`RunError`].
pub fn run_scenario(
    config: &ScenarioConfig,
    sink: &mut dyn DiagnosticSink,
) -> Result<RunReport, RunError> {
    run_scenario_with_cancel(config, sink, &NeverCancel)
}

/// [`run_scenario`] with a cooperative cancel signal.
///
/// # Errors
///
/// See [`RunError`].
pub fn run_scenario_with_cancel(
    config: &ScenarioConfig,
    sink: &mut dyn DiagnosticSink,
    cancel: &dyn CancelSignal,
) -> Result<RunReport, RunError> {
    let span = tracing::info_span!("run_scenario", scenario = %config.name);
    let _enter = span.enter();

    let rules = config.rule_set()?;
    let policy = config.policy();
    let scenario_digest = config.digest()?;
    tracing::debug!(
        digest = %scenario_digest,
        max_iterations = policy.max_iterations,
        wait_ticks = rules.wait_ticks(),
        rule_count = rules.len(),
        "scenario loaded"
    );

    let outcome = match plan_with_cancel(config.initial, config.target, &rules, &policy, cancel) {
        Ok(plan) => Ok(plan),
        Err(PlanError::Failed(failure)) => Err(failure),
        Err(PlanError::Contract(err)) => {
            tracing::error!(error = %err, "planner rejected scenario");
            return Err(err.into());
        }
    };

    let executed_ticks = match &outcome {
        Ok(plan) => {
            sink.on_plan(&plan.final_state, plan.total_cost, plan.stats.pops);

            let mut consumer = SimulatedConsumer::new(config.initial, rules);
            let executed = execute(&mut consumer, &plan.actions)?;
            if executed != plan.total_cost {
                return Err(RunError::CostMismatch {
                    planned: plan.total_cost,
                    executed,
                });
            }
            if *consumer.state() != plan.final_state {
                return Err(RunError::StateMismatch {
                    planned: plan.final_state,
                    executed: *consumer.state(),
                });
            }
            tracing::debug!(steps = plan.actions.len(), executed, "plan executed");
            Some(executed)
        }
        Err(failure) => {
            sink.on_failure(failure);
            None
        }
    };

    let report = PlanReport::new(config.initial, config.target, outcome);
    let report_digest = report.digest()?;
    tracing::info!(report_digest = %report_digest, "run complete");

    Ok(RunReport {
        scenario: config.name.clone(),
        scenario_digest,
        report,
        report_digest,
        executed_ticks,
    })
}
