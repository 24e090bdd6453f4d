//! `GameState`: the four-field resource snapshot the planner searches over.
//!
//! # Equality semantics
//!
//! Equality and hashing are structural over all four fields. There is no
//! quantization and no tolerance: two states that differ by one gold are
//! distinct search keys.
//!
//! # Accrual
//!
//! Time only moves forward through [`GameState::accrue`], which adds
//! `rate * ticks` to each stockpile. Arithmetic saturates at the `i64`
//! bounds so very long plans cannot wrap around into negative gold.

use serde::{Deserialize, Serialize};

/// A stockpile/rate pair that rules can reference by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Resource {
    Gold,
    Stone,
}

impl Resource {
    /// Canonical string for configuration and reports.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Gold => "gold",
            Self::Stone => "stone",
        }
    }

    /// Parse from canonical string.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "gold" => Some(Self::Gold),
            "stone" => Some(Self::Stone),
            _ => None,
        }
    }
}

/// Immutable snapshot of the resources and income of one agent.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(deny_unknown_fields)]
pub struct GameState {
    pub gold: i64,
    pub gold_per_tick: i64,
    pub stone: i64,
    pub stone_per_tick: i64,
}

/// Typed failure for state contract checks.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StateError {
    /// A rate field is negative. Accrual would drain resources over time,
    /// which no transition in the model can produce.
    #[error("{resource} per tick must be non-negative, got {value}")]
    NegativeRate { resource: &'static str, value: i64 },
}

impl GameState {
    #[must_use]
    pub const fn new(gold: i64, gold_per_tick: i64, stone: i64, stone_per_tick: i64) -> Self {
        Self {
            gold,
            gold_per_tick,
            stone,
            stone_per_tick,
        }
    }

    /// Current stockpile of `resource`.
    #[must_use]
    pub const fn amount(&self, resource: Resource) -> i64 {
        match resource {
            Resource::Gold => self.gold,
            Resource::Stone => self.stone,
        }
    }

    /// Current income of `resource` per tick.
    #[must_use]
    pub const fn rate(&self, resource: Resource) -> i64 {
        match resource {
            Resource::Gold => self.gold_per_tick,
            Resource::Stone => self.stone_per_tick,
        }
    }

    /// The state after `ticks` of linear accrual at the current rates.
    #[must_use]
    pub fn accrue(&self, ticks: i64) -> Self {
        Self {
            gold: self
                .gold
                .saturating_add(self.gold_per_tick.saturating_mul(ticks)),
            stone: self
                .stone
                .saturating_add(self.stone_per_tick.saturating_mul(ticks)),
            ..*self
        }
    }

    /// Copy with `amount` removed from the `resource` stockpile.
    #[must_use]
    pub fn spend(&self, resource: Resource, amount: i64) -> Self {
        let mut next = *self;
        match resource {
            Resource::Gold => next.gold = next.gold.saturating_sub(amount),
            Resource::Stone => next.stone = next.stone.saturating_sub(amount),
        }
        next
    }

    /// Copy with the `resource` rate permanently raised by `delta`.
    #[must_use]
    pub fn raise_rate(&self, resource: Resource, delta: i64) -> Self {
        let mut next = *self;
        match resource {
            Resource::Gold => next.gold_per_tick = next.gold_per_tick.saturating_add(delta),
            Resource::Stone => next.stone_per_tick = next.stone_per_tick.saturating_add(delta),
        }
        next
    }

    /// Check the caller contract: rate fields must be non-negative.
    ///
    /// Stockpiles may be anything, including negative debt.
    ///
    /// # Errors
    ///
    /// Returns [`StateError::NegativeRate`] naming the first offending rate.
    pub fn validate(&self) -> Result<(), StateError> {
        for resource in [Resource::Gold, Resource::Stone] {
            let value = self.rate(resource);
            if value < 0 {
                return Err(StateError::NegativeRate {
                    resource: resource.as_str(),
                    value,
                });
            }
        }
        Ok(())
    }

    /// JSON object used in reports and scenario digests.
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "gold": self.gold,
            "gold_per_tick": self.gold_per_tick,
            "stone": self.stone,
            "stone_per_tick": self.stone_per_tick,
        })
    }
}
