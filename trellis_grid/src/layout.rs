// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lane-based cell geometry.
//!
//! A flow layout places cells of one fixed size into `lanes` parallel lanes
//! across the scroll axis, filling lane by lane before advancing along the
//! axis. A vertical flow with three lanes is the familiar three-column
//! grid; one lane is a plain list. All geometry is pure arithmetic over
//! flat slot indices, so the layout never touches the collection itself.

use core::num::NonZeroUsize;

use kurbo::{Point, Rect, Size};
use trellis_geometry::Axis;

/// Fixed-cell-size, lane-based cell geometry for a scrolling container.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FlowLayout {
    axis: Axis,
    lanes: NonZeroUsize,
    cell: Size,
    gap: f64,
}

impl FlowLayout {
    /// A layout flowing along `axis` with `lanes` lanes of `cell`-sized
    /// cells separated by `gap` on both axes.
    #[must_use]
    pub const fn new(axis: Axis, lanes: NonZeroUsize, cell: Size, gap: f64) -> Self {
        Self {
            axis,
            lanes,
            cell,
            gap,
        }
    }

    /// A single-lane list layout.
    #[must_use]
    pub const fn list(axis: Axis, cell: Size, gap: f64) -> Self {
        Self::new(axis, NonZeroUsize::MIN, cell, gap)
    }

    /// The scroll axis.
    #[must_use]
    pub const fn axis(&self) -> Axis {
        self.axis
    }

    /// The fixed cell size.
    #[must_use]
    pub const fn cell(&self) -> Size {
        self.cell
    }

    fn main_pitch(&self) -> f64 {
        self.axis.extent_of(self.cell) + self.gap
    }

    fn cross_pitch(&self) -> f64 {
        self.axis.cross().extent_of(self.cell) + self.gap
    }

    /// The frame of `slot` in content coordinates.
    #[must_use]
    pub fn cell_frame(&self, slot: usize) -> Rect {
        let lanes = self.lanes.get();
        let (row, lane) = ((slot / lanes) as f64, (slot % lanes) as f64);
        let origin = self
            .axis
            .pack(row * self.main_pitch(), lane * self.cross_pitch());
        Rect::from_origin_size(origin, self.cell)
    }

    /// The slot whose cell contains `point`, if any. Points in a gap, in a
    /// lane beyond the last, or past the `len`th cell resolve to `None`.
    #[must_use]
    pub fn slot_at(&self, point: Point, len: usize) -> Option<usize> {
        let main = self.axis.coord_of(point);
        let cross = self.axis.cross().coord_of(point);
        if main < 0.0 || cross < 0.0 {
            return None;
        }
        #[expect(
            clippy::cast_possible_truncation,
            reason = "non-negative and small after the guards above"
        )]
        let (row, lane) = (
            (main / self.main_pitch()) as usize,
            (cross / self.cross_pitch()) as usize,
        );
        if lane >= self.lanes.get() {
            return None;
        }
        let slot = row * self.lanes.get() + lane;
        (slot < len && self.cell_frame(slot).contains(point)).then_some(slot)
    }

    /// Total content extent along the scroll axis for `len` items.
    #[must_use]
    pub fn content_extent(&self, len: usize) -> f64 {
        let rows = len.div_ceil(self.lanes.get());
        if rows == 0 {
            return 0.0;
        }
        let rows = rows as f64;
        rows * self.axis.extent_of(self.cell) + (rows - 1.0) * self.gap
    }

    /// The frames of the cells intersecting `region` (content coordinates),
    /// as `(slot, frame)` pairs in slot order.
    pub fn visible_cells(
        &self,
        len: usize,
        region: Rect,
    ) -> impl Iterator<Item = (usize, Rect)> + '_ {
        let (lo, hi) = (
            self.axis.coord_of(region.origin()),
            self.axis.coord_of(region.origin()) + self.axis.extent_of(region.size()),
        );
        #[expect(
            clippy::cast_possible_truncation,
            reason = "clamped non-negative, row counts stay small"
        )]
        let first_row = (lo.max(0.0) / self.main_pitch()) as usize;
        #[expect(
            clippy::cast_possible_truncation,
            reason = "clamped non-negative, row counts stay small"
        )]
        let last_row = (hi.max(0.0) / self.main_pitch()) as usize;
        let start = (first_row * self.lanes.get()).min(len);
        let end = ((last_row + 1) * self.lanes.get()).min(len);
        (start..end)
            .map(|slot| (slot, self.cell_frame(slot)))
            .filter(move |(_, frame)| {
                let (f0, f1) = (
                    self.axis.coord_of(frame.origin()),
                    self.axis.coord_of(frame.origin()) + self.axis.extent_of(frame.size()),
                );
                f1 > lo && f0 < hi
            })
    }
}
