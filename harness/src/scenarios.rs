//! Built-in scenarios.
//!
//! Small fixed problems with known answers. The fixture binary and the
//! acceptance tests look them up by name.

use keystone_kernel::rules::ImprovementRule;
use keystone_kernel::state::GameState;

use crate::scenario::{ScenarioConfig, ScenarioError};

/// Names accepted by [`builtin`], in listing order.
pub const BUILTIN_NAMES: &[&str] = &["bank_rush", "already_there", "out_of_budget", "stone_economy"];

/// Wait once, then build one bank: cost 11.
#[must_use]
pub fn bank_rush() -> ScenarioConfig {
    ScenarioConfig::new("bank_rush", GameState::new(0, 1, 0, 0), GameState::new(0, 11, 0, 0))
}

/// Initial state already satisfies the target: empty plan, cost 0.
#[must_use]
pub fn already_there() -> ScenarioConfig {
    let state = GameState::new(40, 4, 0, 0);
    ScenarioConfig::new("already_there", state, state)
}

/// An income target far beyond a 25-pop cap.
#[must_use]
pub fn out_of_budget() -> ScenarioConfig {
    ScenarioConfig::new(
        "out_of_budget",
        GameState::new(0, 1, 0, 0),
        GameState::new(0, 100_000, 0, 0),
    )
    .with_max_iterations(25)
}

/// Bank plus quarry. The quarry competes for gold but does not help reach
/// a gold income target, so the plan matches the bank-only one.
#[must_use]
pub fn stone_economy() -> ScenarioConfig {
    ScenarioConfig::new(
        "stone_economy",
        GameState::new(0, 1, 0, 0),
        GameState::new(0, 31, 0, 0),
    )
    .with_rule(ImprovementRule::quarry())
}

/// Look up a built-in scenario by name.
///
/// # Errors
///
/// Returns [`ScenarioError::UnknownBuiltin`] for names not in
/// [`BUILTIN_NAMES`].
pub fn builtin(name: &str) -> Result<ScenarioConfig, ScenarioError> {
    match name {
        "bank_rush" => Ok(bank_rush()),
        "already_there" => Ok(already_there()),
        "out_of_budget" => Ok(out_of_budget()),
        "stone_economy" => Ok(stone_economy()),
        _ => Err(ScenarioError::UnknownBuiltin {
            name: name.to_string(),
        }),
    }
}
