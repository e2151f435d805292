// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The backing-collection contract.

use alloc::vec::Vec;

/// An ordered collection a [`GridContainer`](crate::GridContainer) reorders
/// during a drag.
///
/// Slots are flat indices in `0..len()`. Implementations decide what an
/// item handle `K` is; the engine only ever compares handles through
/// [`index_of`](Self::index_of) and clones them across container
/// boundaries.
pub trait CollectionModel<K> {
    /// Number of items.
    fn len(&self) -> usize;

    /// Whether the collection holds no items.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The slot currently holding `item`, or `None`.
    fn index_of(&self, item: &K) -> Option<usize>;

    /// The item at `slot`, or `None` when out of range.
    fn item_at(&self, slot: usize) -> Option<&K>;

    /// Inserts `item` at `slot`, shifting later items up.
    fn insert(&mut self, slot: usize, item: K);

    /// Moves the item at `from` so it ends up at `to`, as a reorder —
    /// observers must be able to distinguish this from a remove plus an
    /// insert.
    fn move_item(&mut self, from: usize, to: usize);

    /// Removes and returns the item at `slot`, or `None` when out of range.
    fn remove(&mut self, slot: usize) -> Option<K>;

    /// Whether a dragged item may currently land at `slot`. The default
    /// accepts everywhere.
    fn accepts_at(&self, slot: usize) -> bool {
        let _ = slot;
        true
    }
}

/// A [`CollectionModel`] backed by a plain vector.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VecModel<K> {
    items: Vec<K>,
}

impl<K> VecModel<K> {
    /// An empty model.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// The items in slot order.
    #[must_use]
    pub fn as_slice(&self) -> &[K] {
        &self.items
    }

    /// Consumes the model, returning the backing vector.
    #[must_use]
    pub fn into_inner(self) -> Vec<K> {
        self.items
    }
}

impl<K> From<Vec<K>> for VecModel<K> {
    fn from(items: Vec<K>) -> Self {
        Self { items }
    }
}

impl<K: PartialEq> CollectionModel<K> for VecModel<K> {
    fn len(&self) -> usize {
        self.items.len()
    }

    fn index_of(&self, item: &K) -> Option<usize> {
        self.items.iter().position(|i| i == item)
    }

    fn item_at(&self, slot: usize) -> Option<&K> {
        self.items.get(slot)
    }

    fn insert(&mut self, slot: usize, item: K) {
        let slot = slot.min(self.items.len());
        self.items.insert(slot, item);
    }

    fn move_item(&mut self, from: usize, to: usize) {
        if from >= self.items.len() || from == to {
            return;
        }
        let item = self.items.remove(from);
        let to = to.min(self.items.len());
        self.items.insert(to, item);
    }

    fn remove(&mut self, slot: usize) -> Option<K> {
        if slot < self.items.len() {
            Some(self.items.remove(slot))
        } else {
            None
        }
    }
}
