//! Best-first frontier: a min-priority multiset of entry ids.
//!
//! The same state may sit in the frontier several times at different costs.
//! Stale copies are discarded when popped (lazy deletion) instead of being
//! updated in place, so there is no decrease-key operation.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::node::{EntryId, FrontierKey};

/// A frontier item wrapping an entry id with its ordering key.
///
/// `BinaryHeap` is a max-heap, so we use `Reverse<FrontierKey>` to get
/// min-heap behavior (lowest priority first).
#[derive(Debug)]
struct FrontierItem {
    key: Reverse<FrontierKey>,
    entry: EntryId,
}

impl PartialEq for FrontierItem {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for FrontierItem {}

impl PartialOrd for FrontierItem {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierItem {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.key.cmp(&other.key)
    }
}

/// Best-first frontier manager.
#[derive(Debug, Default)]
pub struct BestFirstFrontier {
    heap: BinaryHeap<FrontierItem>,
    high_water: u64,
}

impl BestFirstFrontier {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Push an entry with its key. Duplicate states are allowed.
    pub fn push(&mut self, key: FrontierKey, entry: EntryId) {
        self.heap.push(FrontierItem {
            key: Reverse(key),
            entry,
        });
        let size = self.heap.len() as u64;
        if size > self.high_water {
            self.high_water = size;
        }
    }

    /// Pop the entry with the lowest key.
    pub fn pop(&mut self) -> Option<(FrontierKey, EntryId)> {
        self.heap.pop().map(|item| (item.key.0, item.entry))
    }

    /// Current frontier size.
    #[must_use]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// High-water mark of frontier size.
    #[must_use]
    pub fn high_water(&self) -> u64 {
        self.high_water
    }
}
