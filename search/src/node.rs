//! Search entries and the arena that owns them.
//!
//! Entries reference their parent by [`EntryId`], an index into the
//! [`SearchTree`]. A parent is always pushed before its children, so parent
//! links only point backwards and the structure cannot contain a cycle.

use keystone_kernel::action::Action;
use keystone_kernel::state::GameState;
use keystone_kernel::transition::Transition;

/// Index of an entry in its [`SearchTree`].
///
/// Only the tree hands these out, so an id from a tree is always valid for
/// that tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntryId(usize);

impl EntryId {
    /// Position in the arena (also the creation order).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// A node created during search.
///
/// Ordering for frontier extraction uses `(priority, creation_order)`:
/// lower priority first, ties broken by older creation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchEntry {
    pub id: EntryId,
    /// Parent entry (`None` for root).
    pub parent: Option<EntryId>,
    pub state: GameState,
    /// The action that produced `state` from the parent's state.
    /// `Action::Empty` at the root.
    pub action: Action,
    /// Ticks from the initial state along this entry's parent chain.
    pub cost: i64,
    /// Tree depth (root = 0).
    pub depth: u32,
    /// `cost + estimate(state, target)`, saturating.
    pub priority: i64,
}

impl SearchEntry {
    /// The frontier ordering key.
    #[must_use]
    pub fn frontier_key(&self) -> FrontierKey {
        FrontierKey {
            priority: self.priority,
            creation_order: self.id.index() as u64,
        }
    }

    #[must_use]
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}

/// The frontier ordering key: `(priority, creation_order)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrontierKey {
    pub priority: i64,
    pub creation_order: u64,
}

impl PartialOrd for FrontierKey {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierKey {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.priority
            .cmp(&other.priority)
            .then(self.creation_order.cmp(&other.creation_order))
    }
}

/// Append-only arena of search entries.
#[derive(Debug, Clone, Default)]
pub struct SearchTree {
    entries: Vec<SearchEntry>,
}

impl SearchTree {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create the root entry: cost 0, no parent, `Action::Empty`.
    pub fn push_root(&mut self, state: GameState, priority: i64) -> EntryId {
        let id = EntryId(self.entries.len());
        self.entries.push(SearchEntry {
            id,
            parent: None,
            state,
            action: Action::Empty,
            cost: 0,
            depth: 0,
            priority,
        });
        id
    }

    /// Create a child of `parent` reached through `edge`.
    pub fn push_child(
        &mut self,
        parent: EntryId,
        edge: &Transition,
        cost: i64,
        priority: i64,
    ) -> EntryId {
        let depth = self.entries[parent.0].depth.saturating_add(1);
        let id = EntryId(self.entries.len());
        self.entries.push(SearchEntry {
            id,
            parent: Some(parent),
            state: edge.state,
            action: edge.action,
            cost,
            depth,
            priority,
        });
        id
    }

    #[must_use]
    pub fn get(&self, id: EntryId) -> &SearchEntry {
        &self.entries[id.0]
    }

    /// The root entry, if the tree has been seeded.
    #[must_use]
    pub fn root(&self) -> Option<&SearchEntry> {
        self.entries.first()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries in creation order.
    pub fn iter(&self) -> impl Iterator<Item = &SearchEntry> {
        self.entries.iter()
    }
}
