// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trellis Geometry: pure slot-resolution and edge-protrusion math for
//! drag-and-drop over grid/list containers.
//!
//! ## Overview
//!
//! This crate maps a floating drag rectangle to the slot it would land in,
//! and measures how far that rectangle pokes past a container's scrollable
//! edge. It holds no state and performs no mutation; higher layers (the drag
//! session and the autoscroll controller) call into it on every pointer
//! sample and every autoscroll tick.
//!
//! ## Slot resolution
//!
//! [`nearest_visible_slot`] picks, among the currently visible cells of a
//! container, the one whose center is closest to the drag rectangle's
//! center — after discarding cells whose overlap with the drag rectangle
//! covers less than one third of the cell's own area. A follow-up pass with
//! [`nearest_eligible_slot`] walks backward through decreasing positions
//! until the container's accept predicate agrees, so a resolved slot is
//! always one the container is willing to take.
//!
//! ## Protrusion
//!
//! [`protrusion`] reports, as a fraction of the drag rectangle's extent,
//! how far the rectangle extends past the leading or trailing edge of a
//! viewport along its scroll [`Axis`]; [`protruding_edge`] names the edge.
//! Together they drive edge-autoscroll activation, speed, and direction.
//!
//! All comparisons use squared distances and plain arithmetic, so no float
//! math functions are required and the crate is `no_std` without `libm`.

#![no_std]

use kurbo::{Point, Rect, Size, Vec2};

/// Scroll axis of a container's layout.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Axis {
    /// Content flows and scrolls left-to-right.
    Horizontal,
    /// Content flows and scrolls top-to-bottom.
    Vertical,
}

impl Axis {
    /// The other axis.
    #[must_use]
    pub const fn cross(self) -> Self {
        match self {
            Self::Horizontal => Self::Vertical,
            Self::Vertical => Self::Horizontal,
        }
    }

    /// The extent of `size` along this axis.
    #[must_use]
    pub const fn extent_of(self, size: Size) -> f64 {
        match self {
            Self::Horizontal => size.width,
            Self::Vertical => size.height,
        }
    }

    /// The coordinate of `point` along this axis.
    #[must_use]
    pub const fn coord_of(self, point: Point) -> f64 {
        match self {
            Self::Horizontal => point.x,
            Self::Vertical => point.y,
        }
    }

    /// A vector of `magnitude` along this axis.
    #[must_use]
    pub const fn vec(self, magnitude: f64) -> Vec2 {
        match self {
            Self::Horizontal => Vec2::new(magnitude, 0.0),
            Self::Vertical => Vec2::new(0.0, magnitude),
        }
    }

    /// Packs a main-axis and a cross-axis coordinate into a point.
    #[must_use]
    pub const fn pack(self, main: f64, cross: f64) -> Point {
        match self {
            Self::Horizontal => Point::new(main, cross),
            Self::Vertical => Point::new(cross, main),
        }
    }

    fn span_of(self, rect: Rect) -> (f64, f64) {
        match self {
            Self::Horizontal => (rect.x0, rect.x1),
            Self::Vertical => (rect.y0, rect.y1),
        }
    }
}

/// An edge of a viewport along its scroll axis.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Edge {
    /// The left or top edge, where scrolling decreases the offset.
    Leading,
    /// The right or bottom edge, where scrolling increases the offset.
    Trailing,
}

impl Edge {
    /// The scroll direction associated with this edge: `-1.0` for leading,
    /// `+1.0` for trailing.
    #[must_use]
    pub const fn direction(self) -> f64 {
        match self {
            Self::Leading => -1.0,
            Self::Trailing => 1.0,
        }
    }
}

/// Axis-aligned intersection area of two rectangles in a shared coordinate
/// space. Zero when they are disjoint or merely share an edge.
#[must_use]
pub fn overlap_area(a: Rect, b: Rect) -> f64 {
    let w = a.x1.min(b.x1) - a.x0.max(b.x0);
    let h = a.y1.min(b.y1) - a.y0.max(b.y0);
    if w <= 0.0 || h <= 0.0 { 0.0 } else { w * h }
}

/// The intersection of two rectangles, or `None` when they have no common
/// area.
#[must_use]
pub fn intersection(a: Rect, b: Rect) -> Option<Rect> {
    let x0 = a.x0.max(b.x0);
    let y0 = a.y0.max(b.y0);
    let x1 = a.x1.min(b.x1);
    let y1 = a.y1.min(b.y1);
    if x1 > x0 && y1 > y0 {
        Some(Rect::new(x0, y0, x1, y1))
    } else {
        None
    }
}

/// Resolves the visible cell nearest to a drag rectangle.
///
/// `cells` yields `(slot, frame)` pairs for the container's currently
/// visible cells, in the same coordinate space as `drag_rect`. A cell is a
/// candidate only if its overlap with `drag_rect` covers at least one third
/// of the cell's own area; among candidates, the one whose center is
/// Euclidean-closest to `drag_rect`'s center wins. Distance ties keep the
/// earlier cell, so the result is deterministic for a stable iteration
/// order.
///
/// Returns `None` when no visible cell passes the overlap filter — for the
/// caller this means "stay put", not an error.
#[must_use]
pub fn nearest_visible_slot<I>(drag_rect: Rect, cells: I) -> Option<usize>
where
    I: IntoIterator<Item = (usize, Rect)>,
{
    let target = drag_rect.center();
    let mut best: Option<(usize, f64)> = None;
    for (slot, frame) in cells {
        let area = (frame.x1 - frame.x0).max(0.0) * (frame.y1 - frame.y0).max(0.0);
        if overlap_area(drag_rect, frame) < area / 3.0 {
            continue;
        }
        let d2 = (frame.center() - target).hypot2();
        if best.is_none_or(|(_, b)| d2 < b) {
            best = Some((slot, d2));
        }
    }
    best.map(|(slot, _)| slot)
}

/// Walks backward from a candidate slot until `can_accept` agrees.
///
/// The walk only ever decrements: if every position down to zero is
/// refused, the container takes no slot at all and `None` is returned. An
/// always-false predicate therefore terminates after `from + 1` probes.
#[must_use]
pub fn nearest_eligible_slot(
    from: usize,
    mut can_accept: impl FnMut(usize) -> bool,
) -> Option<usize> {
    let mut slot = from;
    loop {
        if can_accept(slot) {
            return Some(slot);
        }
        slot = slot.checked_sub(1)?;
    }
}

/// Fraction by which `rect` extends past a viewport edge along `axis`.
///
/// `rect` must already be viewport-relative (the caller subtracts the
/// container's scroll offset). The result is the larger of the leading and
/// trailing overhangs divided by `rect`'s extent on that axis, clamped to
/// `[0, 1]`; zero-extent rects report `0.0` rather than dividing by zero.
#[must_use]
pub fn protrusion(rect: Rect, viewport: Size, axis: Axis) -> f64 {
    let (lo, hi) = axis.span_of(rect);
    let extent = hi - lo;
    if extent <= 0.0 {
        return 0.0;
    }
    let outside = (-lo).max(hi - axis.extent_of(viewport));
    (outside / extent).clamp(0.0, 1.0)
}

/// The viewport edge that `rect` crosses along `axis`, if any.
///
/// When both edges are crossed (a rect larger than the viewport), the
/// trailing edge wins.
#[must_use]
pub fn protruding_edge(rect: Rect, viewport: Size, axis: Axis) -> Option<Edge> {
    let (lo, hi) = axis.span_of(rect);
    if hi > axis.extent_of(viewport) {
        Some(Edge::Trailing)
    } else if lo < 0.0 {
        Some(Edge::Leading)
    } else {
        None
    }
}
