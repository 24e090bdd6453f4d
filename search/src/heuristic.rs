//! Remaining-cost estimate between two states.
//!
//! The estimate is `gold_gap / gold_per_tick + rate_gap`: ticks to close the
//! gold gap at the current income, plus the income shortfall counted directly
//! as ticks. The two terms have different units and the sum is not
//! admissible, so returned plans are cheapest under this ordering rather
//! than provably optimal.

use keystone_kernel::state::GameState;

/// Estimate returned when a gold gap exists and current income is zero.
///
/// Orders after every finite priority (all additions saturate) and never
/// passes the goal test.
pub const UNBOUNDED_ESTIMATE: i64 = i64::MAX;

/// Estimated ticks from `current` to `target`.
#[must_use]
pub fn estimate(current: &GameState, target: &GameState) -> i64 {
    let gold_gap = target.gold.saturating_sub(current.gold).max(0);
    let gold_wait = if gold_gap == 0 {
        0
    } else if current.gold_per_tick <= 0 {
        return UNBOUNDED_ESTIMATE;
    } else {
        gold_gap / current.gold_per_tick
    };

    let rate_gap = target
        .gold_per_tick
        .saturating_sub(current.gold_per_tick)
        .max(0);

    gold_wait.saturating_add(rate_gap)
}

/// Goal test: the estimate has reached zero.
#[must_use]
pub fn is_goal(state: &GameState, target: &GameState) -> bool {
    estimate(state, target) <= 0
}
