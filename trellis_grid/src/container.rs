// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The container adapter.

use core::marker::PhantomData;

use kurbo::{Point, Rect, Vec2};
use trellis_autoscroll::ScrollMetrics;
use trellis_drag::{DragSource, DropTarget, Snapshot};
use trellis_geometry::{Axis, nearest_eligible_slot, nearest_visible_slot};

use crate::layout::FlowLayout;
use crate::model::CollectionModel;

/// The animated cell mutations a host applies in lock-step with the model.
///
/// Each method is called synchronously in the same call as the matching
/// model mutation; the host animates at its leisure and reports completion
/// through [`GridContainer::animations_settled`].
pub trait CellViews {
    /// A cell appeared at `slot`; later cells shifted up.
    fn insert_cell(&mut self, slot: usize);

    /// The cell at `from` moved to `to`.
    fn move_cell(&mut self, from: usize, to: usize);

    /// The cell at `slot` disappeared; later cells shifted down.
    fn delete_cell(&mut self, slot: usize);

    /// Shows or conceals the cell at `slot` (the grabbed cell is concealed
    /// while its floating representation is on screen).
    fn set_cell_hidden(&mut self, slot: usize, hidden: bool);

    /// The collection changed wholesale; re-sync every cell.
    fn reload(&mut self);
}

/// A [`CellViews`] that renders nothing. Useful headless and in tests.
#[derive(Copy, Clone, Debug, Default)]
pub struct NullCells;

impl CellViews for NullCells {
    fn insert_cell(&mut self, _slot: usize) {}
    fn move_cell(&mut self, _from: usize, _to: usize) {}
    fn delete_cell(&mut self, _slot: usize) {}
    fn set_cell_hidden(&mut self, _slot: usize, _hidden: bool) {}
    fn reload(&mut self) {}
}

/// A scrolling grid/list container wired for drag-and-drop.
///
/// Implements both engine capabilities over a [`CollectionModel`] and a
/// [`CellViews`], with a [`FlowLayout`] supplying cell geometry. Every data
/// mutation is paired, in the same call, with the matching view mutation,
/// so the two can never drift; the `animating` flag marks view animations
/// still in flight, and further mutations are applied immediately while
/// the animation catches up.
#[derive(Debug)]
pub struct GridContainer<K, M, V> {
    frame: Rect,
    layout: FlowLayout,
    model: M,
    cells: V,
    scroll: f64,
    dragging_slot: Option<usize>,
    animating: bool,
    _marker: PhantomData<K>,
}

impl<K, M, V> GridContainer<K, M, V>
where
    K: Clone,
    M: CollectionModel<K>,
    V: CellViews,
{
    /// A container at `frame` (canvas coordinates) over `model` and
    /// `cells`, scrolled to the top.
    pub fn new(frame: Rect, layout: FlowLayout, model: M, cells: V) -> Self {
        Self {
            frame,
            layout,
            model,
            cells,
            scroll: 0.0,
            dragging_slot: None,
            animating: false,
            _marker: PhantomData,
        }
    }

    /// The backing collection.
    pub fn model(&self) -> &M {
        &self.model
    }

    /// The cell views.
    pub fn cells(&self) -> &V {
        &self.cells
    }

    /// The cell geometry.
    #[must_use]
    pub const fn layout(&self) -> FlowLayout {
        self.layout
    }

    /// Current scroll offset along the layout's axis.
    #[must_use]
    pub const fn scroll(&self) -> f64 {
        self.scroll
    }

    /// Scrolls to `offset`, clamped to the valid range.
    pub fn set_scroll(&mut self, offset: f64) {
        self.scroll = offset.clamp(0.0, self.metrics().max_offset());
    }

    /// Repositions the container on the canvas.
    pub fn set_frame(&mut self, frame: Rect) {
        self.frame = frame;
    }

    /// The slot of the concealed cell being dragged, while one is tracked.
    #[must_use]
    pub const fn dragging_slot(&self) -> Option<usize> {
        self.dragging_slot
    }

    /// Whether a cell animation scheduled by a mutation is still in flight.
    #[must_use]
    pub const fn is_animating(&self) -> bool {
        self.animating
    }

    /// The host's cell animations all completed. Late calls (after the
    /// drag is already gone) are a no-op.
    pub fn animations_settled(&mut self) {
        self.animating = false;
    }

    fn metrics(&self) -> ScrollMetrics {
        ScrollMetrics {
            axis: self.layout.axis(),
            offset: self.scroll,
            viewport: self.layout.axis().extent_of(self.frame.size()),
            content: self.layout.content_extent(self.model.len()),
        }
    }

    /// The content region currently inside the viewport.
    fn visible_region(&self) -> Rect {
        let axis = self.layout.axis();
        let origin = axis.pack(self.scroll, 0.0);
        let size = match axis {
            Axis::Horizontal => kurbo::Size::new(
                axis.extent_of(self.frame.size()),
                self.frame.size().height,
            ),
            Axis::Vertical => kurbo::Size::new(
                self.frame.size().width,
                axis.extent_of(self.frame.size()),
            ),
        };
        Rect::from_origin_size(origin, size)
    }

    /// Maps a hovering content rectangle to the slot it would land in:
    /// nearest sufficiently-overlapped visible cell, walked backward until
    /// the model accepts, with slot zero as the answer for an empty
    /// collection.
    fn resolve_slot(&self, rect: Rect) -> Option<usize> {
        let visible = nearest_visible_slot(
            rect,
            self.layout.visible_cells(self.model.len(), self.visible_region()),
        );
        let candidate = match visible {
            Some(slot) => slot,
            None if self.model.is_empty() => 0,
            None => return None,
        };
        nearest_eligible_slot(candidate, |slot| self.model.accepts_at(slot))
    }

    /// Inserts an absent dragged item at the resolved slot, concealing its
    /// freshly inserted cell.
    fn insert_dragged(&mut self, item: &K, rect: Rect) {
        let Some(slot) = self.resolve_slot(rect) else {
            return;
        };
        self.model.insert(slot, item.clone());
        self.cells.insert_cell(slot);
        self.cells.set_cell_hidden(slot, true);
        self.dragging_slot = Some(slot);
        self.animating = true;
    }
}

impl<K, M, V> DragSource<K> for GridContainer<K, M, V>
where
    K: Clone,
    M: CollectionModel<K>,
    V: CellViews,
{
    fn frame(&self) -> Rect {
        self.frame
    }

    fn scroll_offset(&self) -> Vec2 {
        self.layout.axis().vec(self.scroll)
    }

    fn can_drag_at(&self, point: Point) -> bool {
        self.layout.slot_at(point, self.model.len()).is_some()
    }

    fn representation_at(&self, point: Point) -> Option<Snapshot> {
        self.layout
            .slot_at(point, self.model.len())
            .map(|slot| Snapshot::new(self.layout.cell_frame(slot)))
    }

    fn data_item_at(&self, point: Point) -> Option<K> {
        let slot = self.layout.slot_at(point, self.model.len())?;
        self.model.item_at(slot).cloned()
    }

    fn remove_data_item(&mut self, item: &K) {
        let Some(slot) = self.model.index_of(item) else {
            return;
        };
        self.model.remove(slot);
        self.cells.delete_cell(slot);
        if self.dragging_slot == Some(slot) {
            self.dragging_slot = None;
        }
        self.animating = true;
    }

    fn source_rect(&self) -> Option<Rect> {
        self.dragging_slot.map(|slot| self.layout.cell_frame(slot))
    }

    fn on_drag_start(&mut self, point: Point) {
        self.dragging_slot = self.layout.slot_at(point, self.model.len());
        if let Some(slot) = self.dragging_slot {
            self.cells.set_cell_hidden(slot, true);
        }
    }

    fn on_drag_stopped(&mut self) {
        if let Some(slot) = self.dragging_slot {
            self.cells.set_cell_hidden(slot, false);
        }
    }

    fn on_drag_end(&mut self) {
        self.dragging_slot = None;
    }
}

impl<K, M, V> DropTarget<K> for GridContainer<K, M, V>
where
    K: Clone,
    M: CollectionModel<K>,
    V: CellViews,
{
    fn frame(&self) -> Rect {
        self.frame
    }

    fn scroll_offset(&self) -> Vec2 {
        self.layout.axis().vec(self.scroll)
    }

    fn can_accept_at(&self, rect: Rect) -> bool {
        self.resolve_slot(rect).is_some()
    }

    fn on_item_will_enter(&mut self, item: &K, rect: Rect) {
        if self.model.index_of(item).is_none() {
            self.insert_dragged(item, rect);
        }
    }

    fn on_item_moving(&mut self, item: &K, rect: Rect) {
        let Some(current) = self.model.index_of(item) else {
            self.insert_dragged(item, rect);
            return;
        };
        if let Some(to) = self.resolve_slot(rect)
            && to != current
        {
            self.model.move_item(current, to);
            self.cells.move_cell(current, to);
            self.dragging_slot = Some(to);
            self.animating = true;
        }
    }

    fn on_item_left(&mut self, item: &K) {
        let Some(slot) = self.model.index_of(item) else {
            return;
        };
        self.model.remove(slot);
        self.cells.delete_cell(slot);
        self.dragging_slot = None;
        self.animating = true;
    }

    fn commit_drop(&mut self, item: &K, rect: Rect) {
        if self.model.index_of(item).is_none() {
            let slot = self.resolve_slot(rect).unwrap_or(self.model.len());
            self.model.insert(slot, item.clone());
        }
        if let Some(slot) = self.dragging_slot.take() {
            self.cells.set_cell_hidden(slot, false);
        }
        self.cells.reload();
    }

    fn scroll_metrics(&self) -> ScrollMetrics {
        self.metrics()
    }

    fn scroll_by(&mut self, delta: f64) {
        self.set_scroll(self.scroll + delta);
    }
}
