//! `PlanReport`: canonical JSON rendering of one planning outcome.
//!
//! Keys are sorted (serde_json's default `Map` is ordered) and output is
//! compact, so two runs with the same inputs produce identical bytes and the
//! same content digest.

use keystone_kernel::hash::{canonical_hash, ContentHash, DOMAIN_PLAN_REPORT};
use keystone_kernel::state::GameState;

use crate::plan::{Plan, PlanningFailure};

/// Error rendering a report.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("report serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Inputs plus outcome of one `plan` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanReport {
    pub initial: GameState,
    pub target: GameState,
    pub outcome: Result<Plan, PlanningFailure>,
}

impl PlanReport {
    #[must_use]
    pub fn new(
        initial: GameState,
        target: GameState,
        outcome: Result<Plan, PlanningFailure>,
    ) -> Self {
        Self {
            initial,
            target,
            outcome,
        }
    }

    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        let (outcome, stats) = match &self.outcome {
            Ok(plan) => (
                serde_json::json!({
                    "actions": plan.actions.iter().map(|a| a.as_str()).collect::<Vec<_>>(),
                    "final_state": plan.final_state.to_json(),
                    "total_cost": plan.total_cost,
                    "type": "planned",
                }),
                plan.stats,
            ),
            Err(failure) => (
                serde_json::json!({"type": failure.as_str()}),
                *failure.stats(),
            ),
        };
        serde_json::json!({
            "initial": self.initial.to_json(),
            "outcome": outcome,
            "stats": stats.to_json(),
            "target": self.target.to_json(),
        })
    }

    /// Compact, key-sorted JSON bytes.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::Serialize`] if serialization fails.
    pub fn to_canonical_json_bytes(&self) -> Result<Vec<u8>, ReportError> {
        Ok(serde_json::to_vec(&self.to_json_value())?)
    }

    /// `sha256:` digest of the canonical bytes.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::Serialize`] if serialization fails.
    pub fn digest(&self) -> Result<ContentHash, ReportError> {
        let bytes = self.to_canonical_json_bytes()?;
        Ok(canonical_hash(DOMAIN_PLAN_REPORT, &bytes))
    }
}
