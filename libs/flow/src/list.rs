//! List state manager
//!
//! Holds the in-memory collection of a resource and exposes the optimistic
//! mutations (insert, patch in place, remove) that avoid a full re-fetch
//! after a successful write. `view` is a pure function over the items:
//! case-insensitive substring search across the fields a type exposes, a
//! resource-specific filter predicate, and optional stable sorting.
//!
//! Loads are guarded by a revision ticket: a load that was started before a
//! local mutation landed is discarded when it resolves, so e.g. a delete is
//! never clobbered by a concurrently-resolving stale refresh. Loads do not
//! invalidate each other; between plain loads the last one to resolve wins.

use std::cmp::Ordering;

use tracing::debug;

/// A resource with a stable identity
pub trait Keyed {
    type Key: PartialEq + Clone;

    fn key(&self) -> Self::Key;
}

/// A resource searchable by substring across selected string fields
pub trait Searchable {
    fn haystacks(&self) -> Vec<&str>;
}

/// Ticket handed out when a load starts, checked when it resolves
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket {
    revision: u64,
}

/// In-memory collection of one resource type
#[derive(Debug)]
pub struct ListState<T> {
    items: Vec<T>,
    revision: u64,
}

impl<T: Keyed> Default for ListState<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Keyed> ListState<T> {
    /// Create an empty list
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            revision: 0,
        }
    }

    /// The items in insertion order
    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Start a load; the ticket must be presented to [`complete_load`](Self::complete_load)
    pub fn begin_load(&self) -> LoadTicket {
        LoadTicket {
            revision: self.revision,
        }
    }

    /// Resolve a load started with `ticket`
    ///
    /// Returns `false` (and leaves the items untouched) when a local
    /// mutation landed after the load began.
    pub fn complete_load(&mut self, ticket: LoadTicket, items: Vec<T>) -> bool {
        if ticket.revision != self.revision {
            debug!("Discarding stale list load");
            return false;
        }
        self.items = items;
        true
    }

    /// Replace the entire collection (used after a reconciling re-fetch)
    pub fn load(&mut self, items: Vec<T>) {
        self.items = items;
    }

    /// Prepend one item (used after a create, newest first)
    pub fn insert(&mut self, item: T) {
        self.items.insert(0, item);
        self.revision += 1;
    }

    /// Mutate the matching item in place (used after a status flip)
    pub fn patch(&mut self, key: &T::Key, apply: impl FnOnce(&mut T)) -> bool {
        match self.items.iter_mut().find(|item| item.key() == *key) {
            Some(item) => {
                apply(item);
                self.revision += 1;
                true
            }
            None => false,
        }
    }

    /// Remove the matching item (used after a delete)
    pub fn remove(&mut self, key: &T::Key) -> Option<T> {
        let index = self.items.iter().position(|item| item.key() == *key)?;
        self.revision += 1;
        Some(self.items.remove(index))
    }

    /// Filtered view of the items, preserving insertion order
    ///
    /// The search term matches case-insensitively as a substring of any of
    /// the item's haystack fields; an empty term matches everything.
    pub fn view(&self, search_term: &str, filter: impl Fn(&T) -> bool) -> Vec<&T>
    where
        T: Searchable,
    {
        let needle = search_term.trim().to_lowercase();
        self.items
            .iter()
            .filter(|item| filter(item))
            .filter(|item| {
                needle.is_empty()
                    || item
                        .haystacks()
                        .iter()
                        .any(|hay| hay.to_lowercase().contains(&needle))
            })
            .collect()
    }

    /// Like [`view`](Self::view), sorted with a stable comparator (ties keep
    /// original order)
    pub fn view_sorted(
        &self,
        search_term: &str,
        filter: impl Fn(&T) -> bool,
        mut compare: impl FnMut(&T, &T) -> Ordering,
    ) -> Vec<&T>
    where
        T: Searchable,
    {
        let mut selected = self.view(search_term, filter);
        selected.sort_by(|a, b| compare(a, b));
        selected
    }
}
