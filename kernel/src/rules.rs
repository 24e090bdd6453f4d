//! `RuleSet`: the catalog of improvement rules plus the wait width.
//!
//! Each [`ImprovementRule`] is an independent `(predicate, one-time cost,
//! rate delta, build duration)` tuple bound to one [`Action`]. Rules are
//! stored in a `BTreeMap` keyed by action so successor generation visits them
//! in a fixed order regardless of how the set was assembled.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::action::Action;
use crate::state::{GameState, Resource};

/// Default wait width in ticks.
pub const DEFAULT_WAIT_TICKS: i64 = 10;

/// Gold cost of a bank.
pub const BANK_GOLD_COST: i64 = 10;
/// Ticks to build a bank.
pub const BANK_BUILD_TICKS: i64 = 1;
/// Gold-per-tick added by a bank.
pub const BANK_GOLD_PER_TICK: i64 = 10;

/// A single improvement: pay once, build for a while, earn more forever.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ImprovementRule {
    /// The action this rule implements.
    pub action: Action,
    /// Which stockpile pays for it.
    pub cost_resource: Resource,
    /// One-time amount taken from `cost_resource` after the build completes.
    pub cost_amount: i64,
    /// Which rate the improvement raises.
    pub rate_resource: Resource,
    /// Permanent increase applied to `rate_resource`.
    pub rate_delta: i64,
    /// Build duration in ticks; also the transition cost.
    pub build_ticks: i64,
}

impl ImprovementRule {
    /// The bank: 10 gold, 1 tick, +10 gold per tick.
    #[must_use]
    pub const fn bank() -> Self {
        Self {
            action: Action::BuildBank,
            cost_resource: Resource::Gold,
            cost_amount: BANK_GOLD_COST,
            rate_resource: Resource::Gold,
            rate_delta: BANK_GOLD_PER_TICK,
            build_ticks: BANK_BUILD_TICKS,
        }
    }

    /// The quarry: 10 gold, 1 tick, +10 stone per tick.
    #[must_use]
    pub const fn quarry() -> Self {
        Self {
            action: Action::BuildQuarry,
            cost_resource: Resource::Gold,
            cost_amount: 10,
            rate_resource: Resource::Stone,
            rate_delta: 10,
            build_ticks: 1,
        }
    }

    /// Affordability predicate.
    #[must_use]
    pub fn is_affordable(&self, state: &GameState) -> bool {
        state.amount(self.cost_resource) >= self.cost_amount
    }

    /// Resulting state: accrue over the build, then pay, then raise the rate.
    ///
    /// Does not check affordability; callers gate on [`Self::is_affordable`].
    #[must_use]
    pub fn outcome(&self, state: &GameState) -> GameState {
        state
            .accrue(self.build_ticks)
            .spend(self.cost_resource, self.cost_amount)
            .raise_rate(self.rate_resource, self.rate_delta)
    }

    fn validate(&self) -> Result<(), RuleError> {
        if self.action.is_reserved() {
            return Err(RuleError::ReservedAction {
                action: self.action,
            });
        }
        for (field, value) in [
            ("cost_amount", self.cost_amount),
            ("rate_delta", self.rate_delta),
            ("build_ticks", self.build_ticks),
        ] {
            if value < 0 {
                return Err(RuleError::NegativeField {
                    action: self.action,
                    field,
                    value,
                });
            }
        }
        Ok(())
    }
}

/// Error type for rule set construction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuleError {
    /// Two rules claim the same action.
    #[error("duplicate rule for action {action}")]
    DuplicateAction { action: Action },
    /// A rule claims `Empty` or `Wait`.
    #[error("action {action} is reserved and cannot carry an improvement rule")]
    ReservedAction { action: Action },
    /// A cost, delta or duration is negative.
    #[error("rule {action}: {field} must be non-negative, got {value}")]
    NegativeField {
        action: Action,
        field: &'static str,
        value: i64,
    },
    /// Waiting must move time forward.
    #[error("wait_ticks must be positive, got {value}")]
    NonPositiveWait { value: i64 },
}

/// The full transition ruleset: wait width plus improvement rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleSet {
    wait_ticks: i64,
    rules: BTreeMap<Action, ImprovementRule>,
}

impl RuleSet {
    /// Build a rule set.
    ///
    /// # Errors
    ///
    /// Returns [`RuleError`] if `wait_ticks` is not positive, a rule is bound
    /// to a reserved action, a rule has a negative field, or two rules share
    /// an action.
    pub fn new(wait_ticks: i64, rules: Vec<ImprovementRule>) -> Result<Self, RuleError> {
        if wait_ticks <= 0 {
            return Err(RuleError::NonPositiveWait { value: wait_ticks });
        }
        let mut map = BTreeMap::new();
        for rule in rules {
            rule.validate()?;
            if map.insert(rule.action, rule).is_some() {
                return Err(RuleError::DuplicateAction {
                    action: rule.action,
                });
            }
        }
        Ok(Self {
            wait_ticks,
            rules: map,
        })
    }

    /// Wait width of 10 ticks and the bank rule.
    #[must_use]
    pub fn classic() -> Self {
        let mut rules = BTreeMap::new();
        rules.insert(Action::BuildBank, ImprovementRule::bank());
        Self {
            wait_ticks: DEFAULT_WAIT_TICKS,
            rules,
        }
    }

    /// Copy with one more rule.
    ///
    /// # Errors
    ///
    /// Same conditions as [`RuleSet::new`].
    pub fn with_rule(&self, rule: ImprovementRule) -> Result<Self, RuleError> {
        let mut rules: Vec<ImprovementRule> = self.rules.values().copied().collect();
        rules.push(rule);
        Self::new(self.wait_ticks, rules)
    }

    #[must_use]
    pub fn wait_ticks(&self) -> i64 {
        self.wait_ticks
    }

    /// Look up the rule bound to `action`.
    #[must_use]
    pub fn get(&self, action: Action) -> Option<&ImprovementRule> {
        self.rules.get(&action)
    }

    /// Rules in canonical (action) order.
    pub fn rules(&self) -> impl Iterator<Item = &ImprovementRule> {
        self.rules.values()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// JSON form used in scenario digests.
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        let rules: Vec<serde_json::Value> = self
            .rules
            .values()
            .map(|r| {
                serde_json::json!({
                    "action": r.action.as_str(),
                    "build_ticks": r.build_ticks,
                    "cost_amount": r.cost_amount,
                    "cost_resource": r.cost_resource.as_str(),
                    "rate_delta": r.rate_delta,
                    "rate_resource": r.rate_resource.as_str(),
                })
            })
            .collect();
        serde_json::json!({
            "rules": rules,
            "wait_ticks": self.wait_ticks,
        })
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::classic()
    }
}
