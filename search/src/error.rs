//! Typed search errors.
//!
//! `SearchError` represents pre-flight failures only: the caller handed the
//! driver something it cannot plan over. Running out of budget or frontier
//! is not an error; those are expressed via
//! [`crate::search::TerminationReason`] and surface to `plan` callers as
//! [`crate::plan::PlanningFailure`].

use keystone_kernel::state::StateError;

/// Which input state failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateRole {
    Initial,
    Target,
}

impl std::fmt::Display for StateRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Initial => f.write_str("initial"),
            Self::Target => f.write_str("target"),
        }
    }
}

/// Typed failure for pre-flight search validation.
///
/// These errors are returned before the frontier is seeded. No search
/// entries exist because no search steps were taken.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    /// An input state broke the state contract.
    #[error("{role} state rejected: {source}")]
    InvalidState {
        role: StateRole,
        #[source]
        source: StateError,
    },
    /// The policy cannot drive a search.
    #[error("invalid search policy: {detail}")]
    InvalidPolicy { detail: String },
}
