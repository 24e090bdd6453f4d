//! Diagnostic sinks: structured logging and in-memory recording.

use keystone_kernel::state::GameState;
use keystone_search::plan::PlanningFailure;

use crate::contract::DiagnosticSink;

/// Emits one `tracing` event per planning outcome.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn on_plan(&mut self, terminal: &GameState, total_cost: i64, iterations: u64) {
        tracing::info!(
            final_gold = terminal.gold,
            final_gold_per_tick = terminal.gold_per_tick,
            final_stone = terminal.stone,
            final_stone_per_tick = terminal.stone_per_tick,
            total_cost,
            iterations,
            "plan found"
        );
    }

    fn on_failure(&mut self, failure: &PlanningFailure) {
        let stats = failure.stats();
        tracing::warn!(
            kind = failure.as_str(),
            iterations = stats.pops,
            expansions = stats.expansions,
            "no plan: {failure}"
        );
    }
}

/// One recorded sink call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiagnosticEvent {
    Planned {
        terminal: GameState,
        total_cost: i64,
        iterations: u64,
    },
    Failed(PlanningFailure),
}

/// Keeps every call in memory.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    pub events: Vec<DiagnosticEvent>,
}

impl DiagnosticSink for RecordingSink {
    fn on_plan(&mut self, terminal: &GameState, total_cost: i64, iterations: u64) {
        self.events.push(DiagnosticEvent::Planned {
            terminal: *terminal,
            total_cost,
            iterations,
        });
    }

    fn on_failure(&mut self, failure: &PlanningFailure) {
        self.events.push(DiagnosticEvent::Failed(*failure));
    }
}

/// Forwards to two sinks in order.
pub struct Tee<'a> {
    first: &'a mut dyn DiagnosticSink,
    second: &'a mut dyn DiagnosticSink,
}

impl<'a> Tee<'a> {
    pub fn new(first: &'a mut dyn DiagnosticSink, second: &'a mut dyn DiagnosticSink) -> Self {
        Self { first, second }
    }
}

impl DiagnosticSink for Tee<'_> {
    fn on_plan(&mut self, terminal: &GameState, total_cost: i64, iterations: u64) {
        self.first.on_plan(terminal, total_cost, iterations);
        self.second.on_plan(terminal, total_cost, iterations);
    }

    fn on_failure(&mut self, failure: &PlanningFailure) {
        self.first.on_failure(failure);
        self.second.on_failure(failure);
    }
}
