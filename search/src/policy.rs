//! Search policy types.

use crate::error::SearchError;

/// Iteration cap used when no override is given (5M pops).
pub const DEFAULT_MAX_ITERATIONS: u64 = 5_000_000;

/// Search budget configuration.
///
/// The cap is the only thing that stops the driver on an effectively
/// infinite state space. Hitting it is an expected outcome, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchPolicy {
    /// Hard cap on frontier pops. The pop that exceeds the cap is still
    /// goal-tested but never expanded.
    pub max_iterations: u64,
}

impl SearchPolicy {
    #[must_use]
    pub const fn with_max_iterations(max_iterations: u64) -> Self {
        Self { max_iterations }
    }

    /// Reject policies that cannot drive a search.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidPolicy`] if `max_iterations` is zero.
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.max_iterations == 0 {
            return Err(SearchError::InvalidPolicy {
                detail: "max_iterations must be at least 1".into(),
            });
        }
        Ok(())
    }
}

impl Default for SearchPolicy {
    fn default() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}
