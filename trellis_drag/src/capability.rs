// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Capability contracts between the engine and its collaborators.
//!
//! Containers speak two coordinate spaces. Their [`frame`](DragSource::frame)
//! is reported in *canvas* space (the shared surface the gesture and the
//! floating representation live on); every point or rectangle the engine
//! hands them is in their own *content* space, which accounts for the
//! container's placement on the canvas and its current scroll offset. The
//! provided `to_content_*`/`to_canvas_*` helpers perform that translation
//! and rarely need overriding.

use kurbo::{Point, Rect, Vec2};
use trellis_autoscroll::ScrollMetrics;
use trellis_geometry::Axis;

use crate::types::Snapshot;

/// A container drags can start from.
///
/// The `on_*` hooks are optional; the session invokes them unconditionally
/// and the defaults do nothing.
pub trait DragSource<K> {
    /// The container's bounds on the shared canvas.
    fn frame(&self) -> Rect;

    /// Current scroll displacement of the content, as a vector.
    fn scroll_offset(&self) -> Vec2 {
        Vec2::ZERO
    }

    /// Whether a drag may start at `point` (content coordinates).
    fn can_drag_at(&self, point: Point) -> bool;

    /// Captures the visual representation of the cell at `point`, or `None`
    /// when there is nothing to grab there.
    fn representation_at(&self, point: Point) -> Option<Snapshot>;

    /// The item handle at `point`, or `None`.
    fn data_item_at(&self, point: Point) -> Option<K>;

    /// Removes `item` from the backing collection (mirrored by the view),
    /// called when the item is dropped into a different container. Must be
    /// a no-op if the item is no longer present.
    fn remove_data_item(&mut self, item: &K);

    /// The current frame of the in-flight item's cell, in content
    /// coordinates, used to settle a drag that never left home. `None` when
    /// the container is not tracking a dragged cell.
    fn source_rect(&self) -> Option<Rect>;

    /// A drag just started at `point`.
    fn on_drag_start(&mut self, point: Point) {
        let _ = point;
    }

    /// The pointer was released; the settle animation is about to run.
    fn on_drag_stopped(&mut self) {}

    /// The settle animation finished and the session is over.
    fn on_drag_end(&mut self) {}

    /// Translates a canvas point into this container's content space.
    fn to_content_point(&self, canvas: Point) -> Point {
        canvas - self.frame().origin().to_vec2() + self.scroll_offset()
    }

    /// Translates a content rectangle onto the canvas.
    fn to_canvas_rect(&self, content: Rect) -> Rect {
        let origin = content.origin() - self.scroll_offset() + self.frame().origin().to_vec2();
        Rect::from_origin_size(origin, content.size())
    }
}

/// A container drags can land in.
///
/// The mutation hooks must keep the backing collection and the displayed
/// cells in lock-step: each data insert/move/delete happens in the same
/// call as the matching animated view mutation, even if the animation
/// itself completes later.
pub trait DropTarget<K> {
    /// The container's bounds on the shared canvas.
    fn frame(&self) -> Rect;

    /// Current scroll displacement of the content, as a vector.
    fn scroll_offset(&self) -> Vec2 {
        Vec2::ZERO
    }

    /// Whether the container would accept a drop of the hovering `rect`
    /// (content coordinates) at any eligible slot.
    fn can_accept_at(&self, rect: Rect) -> bool;

    /// The dragged item is about to enter this container at `rect`.
    fn on_item_will_enter(&mut self, item: &K, rect: Rect);

    /// The dragged item is hovering at `rect`; reorder or insert as needed.
    fn on_item_moving(&mut self, item: &K, rect: Rect);

    /// The dragged item left this container for another target.
    fn on_item_left(&mut self, item: &K);

    /// The drag ended here; finalize the drop at `rect`.
    fn commit_drop(&mut self, item: &K, rect: Rect);

    /// Scroll geometry for edge-autoscroll. The default describes a
    /// container that cannot scroll, which disables autoscroll entirely.
    fn scroll_metrics(&self) -> ScrollMetrics {
        ScrollMetrics::fixed(Axis::Vertical)
    }

    /// Applies an autoscroll step along the scroll axis.
    fn scroll_by(&mut self, delta: f64) {
        let _ = delta;
    }

    /// Translates a canvas rectangle into this container's content space.
    fn to_content_rect(&self, canvas: Rect) -> Rect {
        let origin = canvas.origin() - self.frame().origin().to_vec2() + self.scroll_offset();
        Rect::from_origin_size(origin, canvas.size())
    }
}

/// The host surface that renders the floating representation.
///
/// The active session owns the representation exclusively: no other
/// component may touch its frame while a drag is live. `settle` starts the
/// host's drop animation; when that animation completes the host calls
/// [`DragDropCoordinator::settle_finished`](crate::DragDropCoordinator::settle_finished)
/// (immediately, for hosts without animation).
pub trait FloatingLayer {
    /// Puts the representation on screen at `frame` (canvas coordinates).
    fn present(&mut self, snapshot: &Snapshot, frame: Rect);

    /// Moves the representation to track the pointer.
    fn move_to(&mut self, frame: Rect);

    /// Animates the representation toward its final `frame`.
    fn settle(&mut self, frame: Rect);

    /// Removes the representation from screen.
    fn discard(&mut self);
}
