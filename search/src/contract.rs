//! Cooperative cancellation contract.

use std::sync::atomic::{AtomicBool, Ordering};

/// Polled by the driver once per iteration, before the next pop.
///
/// # Contract
///
/// - Must be cheap; it runs on every iteration.
/// - Once it returns `true` the driver stops with
///   [`TerminationReason::Cancelled`](crate::search::TerminationReason::Cancelled).
/// - A signal that never fires leaves search results unchanged.
pub trait CancelSignal {
    fn is_cancelled(&self) -> bool;
}

/// A signal that never fires.
#[derive(Debug, Clone, Copy, Default)]
pub struct NeverCancel;

impl CancelSignal for NeverCancel {
    fn is_cancelled(&self) -> bool {
        false
    }
}

/// A flag another thread can raise.
impl CancelSignal for AtomicBool {
    fn is_cancelled(&self) -> bool {
        self.load(Ordering::Relaxed)
    }
}
