// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The drag session state machine.

use kurbo::{Point, Rect, Size};
use trellis_autoscroll::AutoscrollController;
use trellis_geometry::{intersection, overlap_area};

use crate::bundle::DragBundle;
use crate::capability::FloatingLayer;
use crate::registry::ContainerSet;
use crate::types::ContainerId;

/// Lifecycle state of a [`DragSession`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SessionState {
    /// No drag in flight.
    Idle,
    /// A bundle exists and the representation tracks the pointer.
    Dragging,
    /// Data is resolved; the settle animation is running.
    Dropping,
}

/// State machine and single source of truth for one in-flight drag.
///
/// All methods are driven from the same logical UI timeline: gesture
/// callbacks, autoscroll frame ticks, and the host's settle-animation
/// completion. Calls made in the wrong state are ignored rather than
/// escalated — a stray callback after a cancel must not crash.
#[derive(Debug)]
pub struct DragSession<K> {
    state: SessionState,
    bundle: Option<DragBundle<K>>,
    autoscroll: AutoscrollController,
}

impl<K: 'static> DragSession<K> {
    /// A session with no drag in flight.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: SessionState::Idle,
            bundle: None,
            autoscroll: AutoscrollController::new(),
        }
    }

    /// Current lifecycle state.
    #[must_use]
    pub const fn state(&self) -> SessionState {
        self.state
    }

    /// The in-flight bundle, while one exists.
    #[must_use]
    pub const fn bundle(&self) -> Option<&DragBundle<K>> {
        self.bundle.as_ref()
    }

    /// Whether the representation is currently tracking the pointer.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.state == SessionState::Dragging
    }

    /// Whether the host should be driving [`frame_tick`](Self::frame_tick)
    /// at display cadence.
    #[must_use]
    pub fn needs_frame_ticks(&self) -> bool {
        self.state == SessionState::Dragging && self.autoscroll.is_scrolling()
    }

    /// Attempts to start a drag at `canvas_point`.
    ///
    /// Drag-capable containers are probed in registration order; the first
    /// whose hit-test, snapshot, and item lookup all succeed becomes the
    /// source. Returns `false` — a normal negative outcome, not an error —
    /// when nothing under the pointer is draggable, or when a session is
    /// already live.
    pub fn begin(
        &mut self,
        containers: &ContainerSet<K>,
        layer: &mut dyn FloatingLayer,
        canvas_point: Point,
    ) -> bool {
        if self.state != SessionState::Idle {
            return false;
        }
        for (id, source) in containers.sources() {
            let probe = {
                let s = source.borrow();
                let local = s.to_content_point(canvas_point);
                if !s.can_drag_at(local) {
                    None
                } else if let (Some(snapshot), Some(item)) =
                    (s.representation_at(local), s.data_item_at(local))
                {
                    Some((snapshot, item, local, s.to_canvas_rect(snapshot.frame)))
                } else {
                    None
                }
            };
            let Some((snapshot, item, local, frame)) = probe else {
                continue;
            };
            self.bundle = Some(DragBundle {
                item,
                source: id,
                // A drop-capable source starts out as its own target.
                current_target: containers.target(id).map(|_| id),
                floating: frame,
                grab_offset: canvas_point - frame.center(),
                origin_frame: frame,
                last_point: canvas_point,
            });
            layer.present(&snapshot, frame);
            source.borrow_mut().on_drag_start(local);
            self.state = SessionState::Dragging;
            return true;
        }
        false
    }

    /// Tracks the pointer to `canvas_point` and re-resolves the target.
    pub fn update(
        &mut self,
        containers: &ContainerSet<K>,
        layer: &mut dyn FloatingLayer,
        canvas_point: Point,
    ) {
        if self.state != SessionState::Dragging {
            return;
        }
        {
            let Some(bundle) = self.bundle.as_mut() else {
                return;
            };
            bundle.last_point = canvas_point;
            let size = bundle.floating.size();
            bundle.floating = Rect::from_center_size(canvas_point - bundle.grab_offset, size);
            layer.move_to(bundle.floating);
        }
        self.resolve_and_notify(containers);
        self.refresh_autoscroll(containers);
    }

    /// One display-frame autoscroll tick.
    ///
    /// Applies the controller's step to the current target and then
    /// re-resolves the slot at the latest pointer sample — scrolling moves
    /// content under the stationary representation, so reordering must
    /// stay live even while the pointer rests.
    pub fn frame_tick(&mut self, containers: &ContainerSet<K>) {
        if self.state != SessionState::Dragging {
            return;
        }
        let (id, floating) = match self.bundle.as_ref() {
            Some(b) => match b.current_target {
                Some(id) => (id, b.floating),
                None => return,
            },
            None => return,
        };
        let Some(target) = containers.target(id) else {
            return;
        };
        let (metrics, rect) = {
            let t = target.borrow();
            let m = t.scroll_metrics();
            let r = m.viewport_rect(t.to_content_rect(floating));
            (m, r)
        };
        if let Some(delta) = self.autoscroll.tick(rect, &metrics) {
            target.borrow_mut().scroll_by(delta);
            if let Some(bundle) = self.bundle.as_mut() {
                let size = bundle.floating.size();
                bundle.floating =
                    Rect::from_center_size(bundle.last_point - bundle.grab_offset, size);
            }
            self.resolve_and_notify(containers);
        }
    }

    /// Finishes the drag at `canvas_point`.
    ///
    /// A drop into a container other than the source finalizes there:
    /// the source's copy is removed and the target receives the definitive
    /// commit. Either way the representation settles — onto the center of
    /// the floating rect's intersection with the target (snapping to a
    /// point), or back onto the item's cell in the source when no move
    /// happened. The session stays in [`SessionState::Dropping`] until the
    /// host reports [`settle_finished`](Self::settle_finished).
    pub fn end(
        &mut self,
        containers: &ContainerSet<K>,
        layer: &mut dyn FloatingLayer,
        canvas_point: Point,
    ) {
        if self.state != SessionState::Dragging {
            return;
        }
        self.autoscroll.stop();
        let Some(bundle) = self.bundle.as_mut() else {
            self.state = SessionState::Idle;
            return;
        };
        let size = bundle.floating.size();
        bundle.floating = Rect::from_center_size(canvas_point - bundle.grab_offset, size);
        let floating = bundle.floating;
        let source = bundle.source;

        let mut settle = None;
        if let Some(id) = bundle.current_target
            && id != source
            && let Some(target) = containers.target(id)
        {
            if let Some(src) = containers.source(source) {
                src.borrow_mut().remove_data_item(&bundle.item);
            }
            let local = target.borrow().to_content_rect(floating);
            target.borrow_mut().commit_drop(&bundle.item, local);
            settle = intersection(floating, target.borrow().frame())
                .map(|common| Rect::from_center_size(common.center(), Size::ZERO));
        }
        let settle = settle.unwrap_or_else(|| {
            containers
                .source(source)
                .and_then(|src| {
                    let s = src.borrow();
                    s.source_rect().map(|r| s.to_canvas_rect(r))
                })
                .unwrap_or(bundle.origin_frame)
        });
        if let Some(src) = containers.source(source) {
            src.borrow_mut().on_drag_stopped();
        }
        self.state = SessionState::Dropping;
        layer.settle(settle);
    }

    /// The host's settle animation completed: discard the representation
    /// and the bundle, and return to idle.
    pub fn settle_finished(&mut self, containers: &ContainerSet<K>, layer: &mut dyn FloatingLayer) {
        if self.state != SessionState::Dropping {
            return;
        }
        layer.discard();
        if let Some(bundle) = self.bundle.take()
            && let Some(src) = containers.source(bundle.source)
        {
            src.borrow_mut().on_drag_end();
        }
        self.state = SessionState::Idle;
    }

    /// The platform gesture was interrupted: revert fully and immediately.
    ///
    /// An in-flight copy held by a non-source target is removed and the
    /// item is restored to the source near where it was grabbed; the
    /// source's concealed cell is unhidden; no data mutation is committed.
    pub fn cancel(&mut self, containers: &ContainerSet<K>, layer: &mut dyn FloatingLayer) {
        match self.state {
            SessionState::Idle => return,
            SessionState::Dropping => {
                // Data is already resolved; just finish the teardown.
                self.settle_finished(containers, layer);
                return;
            }
            SessionState::Dragging => {}
        }
        self.autoscroll.stop();
        let Some(bundle) = self.bundle.take() else {
            self.state = SessionState::Idle;
            return;
        };
        if let Some(id) = bundle.current_target
            && id != bundle.source
        {
            if let Some(target) = containers.target(id) {
                target.borrow_mut().on_item_left(&bundle.item);
            }
            // Restore the item to the source near its origin. A source
            // without drop capability never relinquished the item, so
            // there is nothing to restore.
            if let Some(src) = containers.target(bundle.source) {
                let local = src.borrow().to_content_rect(bundle.origin_frame);
                src.borrow_mut().on_item_moving(&bundle.item, local);
            }
        }
        if let Some(src) = containers.source(bundle.source) {
            let mut s = src.borrow_mut();
            s.on_drag_stopped();
            s.on_drag_end();
        }
        layer.discard();
        self.state = SessionState::Idle;
    }

    /// Re-resolves the target container and delivers enter/leave/move
    /// notifications for the current floating rectangle.
    fn resolve_and_notify(&mut self, containers: &ContainerSet<K>) {
        let Some(bundle) = self.bundle.as_mut() else {
            return;
        };
        let floating = bundle.floating;
        let source = bundle.source;

        // Widest overlap wins; the strict comparison keeps the first
        // registered container on exact area ties.
        let mut best: Option<(ContainerId, f64)> = None;
        for (id, target) in containers.targets() {
            let area = overlap_area(floating, target.borrow().frame());
            if area > 0.0 && best.is_none_or(|(_, b)| area > b) {
                best = Some((id, area));
            }
        }

        let accepts = |id: ContainerId| -> bool {
            containers.target(id).is_some_and(|t| {
                let t = t.borrow();
                let local = t.to_content_rect(floating);
                t.can_accept_at(local)
            })
        };

        // No overlap at all tracks above the source.
        let mut chosen = best.map_or(source, |(id, _)| id);
        if containers.target(chosen).is_none() {
            return;
        }
        if !accepts(chosen) {
            // The winner refuses the rect: fall back to the source, and if
            // the source refuses too, leave everything as it is — the
            // representation keeps tracking with no data mutation.
            if chosen == source || containers.target(source).is_none() || !accepts(source) {
                return;
            }
            chosen = source;
        }

        if bundle.current_target != Some(chosen) {
            if let Some(prev) = bundle.current_target
                && let Some(t) = containers.target(prev)
            {
                t.borrow_mut().on_item_left(&bundle.item);
            }
            if let Some(t) = containers.target(chosen) {
                let local = t.borrow().to_content_rect(floating);
                t.borrow_mut().on_item_will_enter(&bundle.item, local);
            }
            bundle.current_target = Some(chosen);
            // The controller was bound to the previous target.
            self.autoscroll.stop();
        }

        if let Some(t) = containers.target(chosen) {
            let local = t.borrow().to_content_rect(floating);
            t.borrow_mut().on_item_moving(&bundle.item, local);
        }
    }

    /// Arms or disarms the autoscroll controller for the current target.
    fn refresh_autoscroll(&mut self, containers: &ContainerSet<K>) {
        let target = self
            .bundle
            .as_ref()
            .and_then(|b| b.current_target.map(|id| (id, b.floating)));
        let Some((id, floating)) = target else {
            self.autoscroll.stop();
            return;
        };
        let Some(target) = containers.target(id) else {
            self.autoscroll.stop();
            return;
        };
        let (metrics, rect) = {
            let t = target.borrow();
            let m = t.scroll_metrics();
            let r = m.viewport_rect(t.to_content_rect(floating));
            (m, r)
        };
        self.autoscroll.observe(rect, &metrics);
    }
}

impl<K: 'static> Default for DragSession<K> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::rc::Rc;
    use alloc::vec::Vec;
    use core::cell::RefCell;
    use kurbo::Vec2;

    use crate::capability::{DragSource, DropTarget};
    use crate::types::Snapshot;
    use trellis_geometry::{nearest_eligible_slot, nearest_visible_slot};

    const CELL: Size = Size::new(100.0, 50.0);

    /// A minimal vertical shelf used to observe the session's protocol.
    struct Shelf {
        frame: Rect,
        items: Vec<u32>,
        accepting: bool,
        dragging: Option<usize>,
        events: RefCell<Vec<&'static str>>,
    }

    impl Shelf {
        fn new(frame: Rect, items: &[u32]) -> Rc<RefCell<Self>> {
            Rc::new(RefCell::new(Self {
                frame,
                items: items.into(),
                accepting: true,
                dragging: None,
                events: RefCell::new(Vec::new()),
            }))
        }

        fn cell_frame(&self, slot: usize) -> Rect {
            let y = slot as f64 * CELL.height;
            Rect::from_origin_size(Point::new(0.0, y), CELL)
        }

        fn slot_at(&self, p: Point) -> Option<usize> {
            (0..self.items.len()).find(|&i| self.cell_frame(i).contains(p))
        }

        fn cells(&self) -> Vec<(usize, Rect)> {
            (0..self.items.len()).map(|i| (i, self.cell_frame(i))).collect()
        }

        fn resolve(&self, rect: Rect) -> Option<usize> {
            let slot = match nearest_visible_slot(rect, self.cells()) {
                Some(s) => s,
                None if self.items.is_empty() => 0,
                None => return None,
            };
            nearest_eligible_slot(slot, |_| self.accepting)
        }

        fn log(&self, event: &'static str) {
            self.events.borrow_mut().push(event);
        }

        fn events(&self) -> Vec<&'static str> {
            self.events.borrow().clone()
        }
    }

    impl DragSource<u32> for Shelf {
        fn frame(&self) -> Rect {
            self.frame
        }
        fn can_drag_at(&self, point: Point) -> bool {
            self.slot_at(point).is_some()
        }
        fn representation_at(&self, point: Point) -> Option<Snapshot> {
            self.slot_at(point).map(|i| Snapshot::new(self.cell_frame(i)))
        }
        fn data_item_at(&self, point: Point) -> Option<u32> {
            self.slot_at(point).map(|i| self.items[i])
        }
        fn remove_data_item(&mut self, item: &u32) {
            self.log("remove_data_item");
            self.items.retain(|i| i != item);
        }
        fn source_rect(&self) -> Option<Rect> {
            self.dragging.map(|i| self.cell_frame(i))
        }
        fn on_drag_start(&mut self, point: Point) {
            self.log("drag_start");
            self.dragging = self.slot_at(point);
        }
        fn on_drag_stopped(&mut self) {
            self.log("drag_stopped");
        }
        fn on_drag_end(&mut self) {
            self.log("drag_end");
            self.dragging = None;
        }
    }

    impl DropTarget<u32> for Shelf {
        fn frame(&self) -> Rect {
            self.frame
        }
        fn can_accept_at(&self, rect: Rect) -> bool {
            self.resolve(rect).is_some()
        }
        fn on_item_will_enter(&mut self, item: &u32, rect: Rect) {
            self.log("will_enter");
            if self.items.contains(item) {
                return;
            }
            if let Some(slot) = self.resolve(rect) {
                self.items.insert(slot, *item);
                self.dragging = Some(slot);
            }
        }
        fn on_item_moving(&mut self, item: &u32, rect: Rect) {
            self.log("moving");
            let Some(cur) = self.items.iter().position(|i| i == item) else {
                if let Some(slot) = self.resolve(rect) {
                    self.items.insert(slot, *item);
                    self.dragging = Some(slot);
                }
                return;
            };
            if let Some(to) = self.resolve(rect)
                && to != cur
            {
                let item = self.items.remove(cur);
                self.items.insert(to, item);
                self.dragging = Some(to);
            }
        }
        fn on_item_left(&mut self, item: &u32) {
            self.log("left");
            self.items.retain(|i| i != item);
            self.dragging = None;
        }
        fn commit_drop(&mut self, _item: &u32, _rect: Rect) {
            self.log("commit");
            self.dragging = None;
        }
    }

    #[derive(Default)]
    struct Layer {
        presented: Option<Rect>,
        moved_to: Option<Rect>,
        settled: Option<Rect>,
        discarded: bool,
    }

    impl FloatingLayer for Layer {
        fn present(&mut self, _snapshot: &Snapshot, frame: Rect) {
            self.presented = Some(frame);
        }
        fn move_to(&mut self, frame: Rect) {
            self.moved_to = Some(frame);
        }
        fn settle(&mut self, frame: Rect) {
            self.settled = Some(frame);
        }
        fn discard(&mut self) {
            self.discarded = true;
        }
    }

    fn two_shelves() -> (
        ContainerSet<u32>,
        Rc<RefCell<Shelf>>,
        Rc<RefCell<Shelf>>,
    ) {
        let a = Shelf::new(Rect::new(0.0, 0.0, 100.0, 300.0), &[1, 2, 3]);
        let b = Shelf::new(Rect::new(200.0, 0.0, 300.0, 300.0), &[]);
        let mut set = ContainerSet::new();
        set.register_dual(a.clone());
        set.register_dual(b.clone());
        (set, a, b)
    }

    #[test]
    fn begin_grabs_the_hit_cell_and_seeds_the_bundle() {
        let (set, a, _b) = two_shelves();
        let mut session = DragSession::new();
        let mut layer = Layer::default();

        assert!(session.begin(&set, &mut layer, Point::new(50.0, 75.0)));
        assert_eq!(session.state(), SessionState::Dragging);

        let bundle = session.bundle().unwrap();
        assert_eq!(bundle.item, 2);
        assert_eq!(bundle.source.index(), 0);
        // A drop-capable source starts as its own target.
        assert_eq!(bundle.current_target.map(ContainerId::index), Some(0));
        assert_eq!(bundle.floating, Rect::new(0.0, 50.0, 100.0, 100.0));
        // Grabbed dead-center: no offset.
        assert_eq!(bundle.grab_offset, Vec2::ZERO);
        assert_eq!(layer.presented, Some(bundle.floating));
        assert_eq!(a.borrow().events(), ["drag_start"]);
    }

    #[test]
    fn begin_misses_silently() {
        let (set, a, _b) = two_shelves();
        let mut session = DragSession::new();
        let mut layer = Layer::default();

        // Below the last cell of shelf A and outside shelf B.
        assert!(!session.begin(&set, &mut layer, Point::new(50.0, 250.0)));
        assert_eq!(session.state(), SessionState::Idle);
        assert!(session.bundle().is_none());
        assert!(a.borrow().events().is_empty());
    }

    #[test]
    fn second_begin_without_end_is_rejected() {
        let (set, _a, _b) = two_shelves();
        let mut session = DragSession::new();
        let mut layer = Layer::default();

        assert!(session.begin(&set, &mut layer, Point::new(50.0, 75.0)));
        assert!(!session.begin(&set, &mut layer, Point::new(50.0, 25.0)));
        assert_eq!(session.bundle().unwrap().item, 2);
    }

    #[test]
    fn crossing_into_another_container_notifies_and_transfers() {
        let (set, a, b) = two_shelves();
        let mut session = DragSession::new();
        let mut layer = Layer::default();

        session.begin(&set, &mut layer, Point::new(50.0, 75.0));
        session.update(&set, &mut layer, Point::new(250.0, 75.0));

        // A was left, B was entered, and the data followed.
        assert_eq!(a.borrow().items, [1, 3]);
        assert_eq!(b.borrow().items, [2]);
        assert!(a.borrow().events().contains(&"left"));
        let b_events = b.borrow().events();
        let enter = b_events.iter().position(|e| *e == "will_enter").unwrap();
        let moving = b_events.iter().position(|e| *e == "moving").unwrap();
        assert!(enter < moving, "will_enter precedes moving");
        assert_eq!(
            session.bundle().unwrap().current_target.map(ContainerId::index),
            Some(1)
        );
    }

    #[test]
    fn equal_overlap_ties_break_to_the_first_registered() {
        // Two empty targets with pixel-identical frames behind a separate
        // source shelf.
        let source = Shelf::new(Rect::new(0.0, 400.0, 100.0, 700.0), &[9]);
        let first = Shelf::new(Rect::new(0.0, 0.0, 100.0, 300.0), &[]);
        let second = Shelf::new(Rect::new(0.0, 0.0, 100.0, 300.0), &[]);
        let mut set = ContainerSet::new();
        set.register_dual(source);
        set.register_dual(first.clone());
        set.register_dual(second.clone());

        let mut session = DragSession::new();
        let mut layer = Layer::default();
        session.begin(&set, &mut layer, Point::new(50.0, 425.0));
        session.update(&set, &mut layer, Point::new(50.0, 150.0));

        assert_eq!(
            session.bundle().unwrap().current_target.map(ContainerId::index),
            Some(1)
        );
        assert_eq!(first.borrow().items, [9]);
        assert!(second.borrow().items.is_empty());
        assert!(second.borrow().events().is_empty());
    }

    #[test]
    fn refusing_target_falls_back_to_the_source() {
        let (set, a, b) = two_shelves();
        b.borrow_mut().accepting = false;
        let mut session = DragSession::new();
        let mut layer = Layer::default();

        session.begin(&set, &mut layer, Point::new(50.0, 75.0));
        session.update(&set, &mut layer, Point::new(250.0, 75.0));

        // B never sees the item; the source remains the implicit target.
        assert!(b.borrow().events().is_empty());
        assert_eq!(a.borrow().items, [1, 2, 3]);
        assert_eq!(
            session.bundle().unwrap().current_target.map(ContainerId::index),
            Some(0)
        );
    }

    #[test]
    fn repeated_updates_at_the_same_point_do_not_duplicate() {
        let (set, a, b) = two_shelves();
        let mut session = DragSession::new();
        let mut layer = Layer::default();

        session.begin(&set, &mut layer, Point::new(50.0, 75.0));
        session.update(&set, &mut layer, Point::new(250.0, 75.0));
        session.update(&set, &mut layer, Point::new(250.0, 75.0));

        assert_eq!(a.borrow().items, [1, 3]);
        assert_eq!(b.borrow().items, [2]);
        // Exactly one enter/leave pair despite two identical updates.
        let b_events = b.borrow().events();
        assert_eq!(b_events.iter().filter(|e| **e == "will_enter").count(), 1);
        let a_events = a.borrow().events();
        assert_eq!(a_events.iter().filter(|e| **e == "left").count(), 1);
    }

    #[test]
    fn cross_container_drop_finalizes_and_settles_to_the_intersection() {
        let (set, a, b) = two_shelves();
        let mut session = DragSession::new();
        let mut layer = Layer::default();

        session.begin(&set, &mut layer, Point::new(50.0, 75.0));
        session.update(&set, &mut layer, Point::new(250.0, 75.0));
        session.end(&set, &mut layer, Point::new(250.0, 75.0));

        assert_eq!(session.state(), SessionState::Dropping);
        assert!(a.borrow().events().contains(&"remove_data_item"));
        assert!(b.borrow().events().contains(&"commit"));
        // The floating rect sits fully inside B: the settle point is its
        // center, zero-sized.
        assert_eq!(
            layer.settled,
            Some(Rect::from_center_size(Point::new(250.0, 75.0), Size::ZERO))
        );

        session.settle_finished(&set, &mut layer);
        assert_eq!(session.state(), SessionState::Idle);
        assert!(layer.discarded);
        assert!(session.bundle().is_none());
        assert!(a.borrow().events().contains(&"drag_end"));
    }

    #[test]
    fn dropping_at_home_settles_onto_the_source_cell() {
        let (set, a, b) = two_shelves();
        let mut session = DragSession::new();
        let mut layer = Layer::default();

        session.begin(&set, &mut layer, Point::new(50.0, 75.0));
        // Hover over the gap between the shelves, then release there.
        session.update(&set, &mut layer, Point::new(150.0, 75.0));
        session.end(&set, &mut layer, Point::new(150.0, 75.0));

        // Nothing moved.
        assert_eq!(a.borrow().items, [1, 2, 3]);
        assert!(b.borrow().items.is_empty());
        // The representation returns to the grabbed cell's frame.
        assert_eq!(layer.settled, Some(Rect::new(0.0, 50.0, 100.0, 100.0)));
        assert!(!a.borrow().events().contains(&"remove_data_item"));
    }

    #[test]
    fn round_trip_restores_both_collections() {
        let (set, a, b) = two_shelves();
        let mut session = DragSession::new();
        let mut layer = Layer::default();

        session.begin(&set, &mut layer, Point::new(50.0, 75.0));
        session.update(&set, &mut layer, Point::new(250.0, 75.0));
        assert_eq!(a.borrow().items, [1, 3]);
        assert_eq!(b.borrow().items, [2]);

        // Back to the exact original slot in A.
        session.update(&set, &mut layer, Point::new(50.0, 75.0));
        session.end(&set, &mut layer, Point::new(50.0, 75.0));
        session.settle_finished(&set, &mut layer);

        assert_eq!(a.borrow().items, [1, 2, 3]);
        assert!(b.borrow().items.is_empty());
        assert_eq!(session.state(), SessionState::Idle);
    }

    #[test]
    fn cancel_reverts_a_cross_container_drag() {
        let (set, a, b) = two_shelves();
        let mut session = DragSession::new();
        let mut layer = Layer::default();

        session.begin(&set, &mut layer, Point::new(50.0, 75.0));
        session.update(&set, &mut layer, Point::new(250.0, 75.0));
        session.cancel(&set, &mut layer);

        assert_eq!(session.state(), SessionState::Idle);
        assert!(session.bundle().is_none());
        assert!(layer.discarded);
        // B gave the item back and A holds it again.
        assert!(b.borrow().items.is_empty());
        assert_eq!(a.borrow().items, [1, 2, 3]);
        assert!(a.borrow().events().contains(&"drag_end"));
    }

    #[test]
    fn cancel_while_idle_is_a_no_op() {
        let (set, a, _b) = two_shelves();
        let mut session: DragSession<u32> = DragSession::new();
        let mut layer = Layer::default();
        session.cancel(&set, &mut layer);
        assert_eq!(session.state(), SessionState::Idle);
        assert!(!layer.discarded);
        assert!(a.borrow().events().is_empty());
    }

    #[test]
    fn stray_callbacks_after_teardown_are_tolerated() {
        let (set, _a, _b) = two_shelves();
        let mut session = DragSession::new();
        let mut layer = Layer::default();

        session.begin(&set, &mut layer, Point::new(50.0, 75.0));
        session.end(&set, &mut layer, Point::new(50.0, 75.0));
        session.settle_finished(&set, &mut layer);
        // A late animation completion and a late update both no-op.
        session.settle_finished(&set, &mut layer);
        session.update(&set, &mut layer, Point::new(10.0, 10.0));
        session.frame_tick(&set);
        assert_eq!(session.state(), SessionState::Idle);
    }
}
