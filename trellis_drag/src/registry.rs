// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Container registration.
//!
//! Each registered container is an explicit two-field capability bundle:
//! an optional [`DragSource`] handle and an optional [`DropTarget`] handle,
//! resolved once when the container is registered. A container offering
//! both capabilities registers a single shared cell through both fields,
//! so the engine never inspects types at runtime.

use alloc::rc::Rc;
use core::cell::RefCell;
use core::fmt;

use smallvec::SmallVec;

use crate::capability::{DragSource, DropTarget};
use crate::types::ContainerId;

/// Shared handle to a container's drag capability.
pub type SharedSource<K> = Rc<RefCell<dyn DragSource<K>>>;

/// Shared handle to a container's drop capability.
pub type SharedTarget<K> = Rc<RefCell<dyn DropTarget<K>>>;

struct Entry<K> {
    source: Option<SharedSource<K>>,
    target: Option<SharedTarget<K>>,
}

/// The ordered set of containers participating in drag-and-drop.
///
/// Registration order matters: when two drop targets overlap the floating
/// rectangle by exactly the same area, the first registered wins.
pub struct ContainerSet<K> {
    entries: SmallVec<[Entry<K>; 4]>,
}

impl<K> ContainerSet<K> {
    /// An empty set.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: SmallVec::new(),
        }
    }

    /// Number of registered containers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no containers are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Registers a container from its capability bundle.
    ///
    /// Either capability may be absent; a container with neither simply
    /// never participates.
    pub fn register(
        &mut self,
        source: Option<SharedSource<K>>,
        target: Option<SharedTarget<K>>,
    ) -> ContainerId {
        let id = ContainerId(self.entries.len());
        self.entries.push(Entry { source, target });
        id
    }

    /// Registers a drag-only container.
    pub fn register_source<C: DragSource<K> + 'static>(
        &mut self,
        container: Rc<RefCell<C>>,
    ) -> ContainerId {
        self.register(Some(container), None)
    }

    /// Registers a drop-only container.
    pub fn register_target<C: DropTarget<K> + 'static>(
        &mut self,
        container: Rc<RefCell<C>>,
    ) -> ContainerId {
        self.register(None, Some(container))
    }

    /// Registers a container that is both a drag source and a drop target.
    pub fn register_dual<C: DragSource<K> + DropTarget<K> + 'static>(
        &mut self,
        container: Rc<RefCell<C>>,
    ) -> ContainerId {
        let source: SharedSource<K> = container.clone();
        let target: SharedTarget<K> = container;
        self.register(Some(source), Some(target))
    }

    /// The drag capability of `id`, if it has one.
    #[must_use]
    pub fn source(&self, id: ContainerId) -> Option<&SharedSource<K>> {
        self.entries.get(id.0)?.source.as_ref()
    }

    /// The drop capability of `id`, if it has one.
    #[must_use]
    pub fn target(&self, id: ContainerId) -> Option<&SharedTarget<K>> {
        self.entries.get(id.0)?.target.as_ref()
    }

    /// Drag-capable containers in registration order.
    pub fn sources(&self) -> impl Iterator<Item = (ContainerId, &SharedSource<K>)> {
        self.entries
            .iter()
            .enumerate()
            .filter_map(|(i, e)| e.source.as_ref().map(|s| (ContainerId(i), s)))
    }

    /// Drop-capable containers in registration order.
    pub fn targets(&self) -> impl Iterator<Item = (ContainerId, &SharedTarget<K>)> {
        self.entries
            .iter()
            .enumerate()
            .filter_map(|(i, e)| e.target.as_ref().map(|t| (ContainerId(i), t)))
    }
}

impl<K> Default for ContainerSet<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> fmt::Debug for ContainerSet<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut list = f.debug_list();
        for e in &self.entries {
            list.entry(&(e.source.is_some(), e.target.is_some()));
        }
        list.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Snapshot;
    use kurbo::{Point, Rect};

    struct Inert;

    impl DragSource<u32> for Inert {
        fn frame(&self) -> Rect {
            Rect::ZERO
        }
        fn can_drag_at(&self, _point: Point) -> bool {
            false
        }
        fn representation_at(&self, _point: Point) -> Option<Snapshot> {
            None
        }
        fn data_item_at(&self, _point: Point) -> Option<u32> {
            None
        }
        fn remove_data_item(&mut self, _item: &u32) {}
        fn source_rect(&self) -> Option<Rect> {
            None
        }
    }

    impl DropTarget<u32> for Inert {
        fn frame(&self) -> Rect {
            Rect::ZERO
        }
        fn can_accept_at(&self, _rect: Rect) -> bool {
            false
        }
        fn on_item_will_enter(&mut self, _item: &u32, _rect: Rect) {}
        fn on_item_moving(&mut self, _item: &u32, _rect: Rect) {}
        fn on_item_left(&mut self, _item: &u32) {}
        fn commit_drop(&mut self, _item: &u32, _rect: Rect) {}
    }

    #[test]
    fn registration_assigns_ids_in_order_and_records_capabilities() {
        let mut set: ContainerSet<u32> = ContainerSet::new();
        let a = set.register_source(Rc::new(RefCell::new(Inert)));
        let b = set.register_target(Rc::new(RefCell::new(Inert)));
        let c = set.register_dual(Rc::new(RefCell::new(Inert)));

        assert_eq!((a.index(), b.index(), c.index()), (0, 1, 2));
        assert_eq!(set.len(), 3);

        assert!(set.source(a).is_some() && set.target(a).is_none());
        assert!(set.source(b).is_none() && set.target(b).is_some());
        assert!(set.source(c).is_some() && set.target(c).is_some());

        let source_ids: alloc::vec::Vec<_> = set.sources().map(|(id, _)| id.index()).collect();
        let target_ids: alloc::vec::Vec<_> = set.targets().map(|(id, _)| id.index()).collect();
        assert_eq!(source_ids, [0, 2]);
        assert_eq!(target_ids, [1, 2]);
    }

    #[test]
    fn dual_registration_shares_one_cell() {
        let mut set: ContainerSet<u32> = ContainerSet::new();
        let cell = Rc::new(RefCell::new(Inert));
        let id = set.register_dual(cell.clone());
        // Both capability handles plus the local one point at the same cell.
        assert_eq!(Rc::strong_count(&cell), 3);
        assert!(set.source(id).is_some());
    }
}
