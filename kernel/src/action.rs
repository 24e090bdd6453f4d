//! Action tags: what an agent does between two states.

use serde::{Deserialize, Serialize};

/// A discrete action the planner can schedule.
///
/// The set is open for extension: a new improvement needs a variant here and
/// an [`ImprovementRule`](crate::rules::ImprovementRule) bound to it. The
/// search driver never matches on specific variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    /// Marks the root of a plan. Never produced by a transition and never
    /// part of a reconstructed plan.
    Empty,
    /// Let time pass at the current income rates.
    Wait,
    /// Build an income structure for gold.
    BuildBank,
    /// Build an income structure for stone.
    BuildQuarry,
}

impl Action {
    /// Every tag, in canonical order.
    pub const ALL: [Self; 4] = [Self::Empty, Self::Wait, Self::BuildBank, Self::BuildQuarry];

    /// Canonical string for configuration and reports.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::Wait => "wait",
            Self::BuildBank => "build_bank",
            Self::BuildQuarry => "build_quarry",
        }
    }

    /// Parse from canonical string.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "empty" => Some(Self::Empty),
            "wait" => Some(Self::Wait),
            "build_bank" => Some(Self::BuildBank),
            "build_quarry" => Some(Self::BuildQuarry),
            _ => None,
        }
    }

    /// Actions that improvement rules may not claim.
    #[must_use]
    pub const fn is_reserved(self) -> bool {
        matches!(self, Self::Empty | Self::Wait)
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
