//! Scenario configuration: one planning problem as a JSON document.
//!
//! A scenario names its inputs (initial and target state) and the knobs the
//! planner runs under (wait width, iteration cap, rule table). Everything
//! except the two states is optional and falls back to the classic values.
//!
//! Unknown fields are rejected so a typo cannot silently fall back to a
//! default.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use keystone_kernel::hash::{canonical_hash, ContentHash, DOMAIN_SCENARIO};
use keystone_kernel::rules::{ImprovementRule, RuleError, RuleSet, DEFAULT_WAIT_TICKS};
use keystone_kernel::state::GameState;
use keystone_search::policy::{SearchPolicy, DEFAULT_MAX_ITERATIONS};

/// Error loading or interpreting a scenario.
#[derive(Debug, thiserror::Error)]
pub enum ScenarioError {
    #[error("cannot read scenario {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed scenario: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid rule table: {0}")]
    Rules(#[from] RuleError),
    #[error("no built-in scenario named {name:?}")]
    UnknownBuiltin { name: String },
}

/// One planning problem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScenarioConfig {
    pub name: String,
    pub initial: GameState,
    pub target: GameState,
    #[serde(default = "default_wait_ticks")]
    pub wait_ticks: i64,
    #[serde(default = "default_max_iterations")]
    pub max_iterations: u64,
    #[serde(default = "default_rules")]
    pub rules: Vec<ImprovementRule>,
}

fn default_wait_ticks() -> i64 {
    DEFAULT_WAIT_TICKS
}

fn default_max_iterations() -> u64 {
    DEFAULT_MAX_ITERATIONS
}

fn default_rules() -> Vec<ImprovementRule> {
    vec![ImprovementRule::bank()]
}

impl ScenarioConfig {
    /// A scenario with classic rules and the default cap.
    #[must_use]
    pub fn new(name: impl Into<String>, initial: GameState, target: GameState) -> Self {
        Self {
            name: name.into(),
            initial,
            target,
            wait_ticks: default_wait_ticks(),
            max_iterations: default_max_iterations(),
            rules: default_rules(),
        }
    }

    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: u64) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    #[must_use]
    pub fn with_rule(mut self, rule: ImprovementRule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Parse a scenario from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`ScenarioError::Parse`] on malformed JSON, missing states, or
    /// unknown fields.
    pub fn from_json_str(text: &str) -> Result<Self, ScenarioError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Read and parse a scenario file.
    ///
    /// # Errors
    ///
    /// Returns [`ScenarioError::Io`] if the file cannot be read, otherwise
    /// as [`ScenarioConfig::from_json_str`].
    pub fn from_path(path: &Path) -> Result<Self, ScenarioError> {
        let text = std::fs::read_to_string(path).map_err(|source| ScenarioError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }

    /// Validated rule table.
    ///
    /// # Errors
    ///
    /// Returns [`ScenarioError::Rules`] when the table or wait width is
    /// rejected by [`RuleSet::new`].
    pub fn rule_set(&self) -> Result<RuleSet, ScenarioError> {
        Ok(RuleSet::new(self.wait_ticks, self.rules.clone())?)
    }

    /// Policy for this scenario. Validated by the planner, not here.
    #[must_use]
    pub fn policy(&self) -> SearchPolicy {
        SearchPolicy::with_max_iterations(self.max_iterations)
    }

    /// Canonical JSON of the scenario: normalized rule table, sorted keys.
    ///
    /// # Errors
    ///
    /// Returns [`ScenarioError::Rules`] if the rule table is invalid.
    pub fn to_canonical_json_bytes(&self) -> Result<Vec<u8>, ScenarioError> {
        let rules = self.rule_set()?;
        let value = serde_json::json!({
            "initial": self.initial.to_json(),
            "max_iterations": self.max_iterations,
            "name": self.name,
            "rules": rules.to_json(),
            "target": self.target.to_json(),
        });
        Ok(serde_json::to_vec(&value)?)
    }

    /// `sha256:` digest of the canonical scenario bytes.
    ///
    /// # Errors
    ///
    /// Same as [`ScenarioConfig::to_canonical_json_bytes`].
    pub fn digest(&self) -> Result<ContentHash, ScenarioError> {
        let bytes = self.to_canonical_json_bytes()?;
        Ok(canonical_hash(DOMAIN_SCENARIO, &bytes))
    }
}
