// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trellis Autoscroll: the edge-autoscroll controller for drag-and-drop.
//!
//! While a dragged representation rests near a scrollable container's edge,
//! the container should keep scrolling so the user can reach off-screen
//! slots. This crate owns that `Idle ⇄ Scrolling` state machine:
//!
//! - [`AutoscrollController::observe`] arms the controller when the drag
//!   rectangle protrudes more than the activation threshold past a viewport
//!   edge, and disarms it when the protrusion falls back under it.
//! - [`AutoscrollController::tick`] is called by the host once per display
//!   frame while armed; it yields a signed scroll step whose magnitude
//!   scales with the protrusion, so behavior is independent of the actual
//!   frame duration. A step that would leave the valid offset range is not
//!   taken: the controller transitions to idle instead, which stops the
//!   scroll cleanly at the end of content rather than jittering against it.
//!
//! The repeating clock itself is *not* owned here. Hosts drive [`tick`] at
//! their display's native cadence and stop driving it once
//! [`is_scrolling`](AutoscrollController::is_scrolling) turns false; the
//! drag session calls [`stop`](AutoscrollController::stop) when the drag
//! ends or the target container changes, so no repeating work outlives a
//! drag.
//!
//! [`tick`]: AutoscrollController::tick

#![no_std]

use kurbo::{Rect, Size};
use trellis_geometry::{Axis, protruding_edge, protrusion};

/// Scroll geometry of a container, snapshotted for one decision.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ScrollMetrics {
    /// The container's scroll axis.
    pub axis: Axis,
    /// Current scroll offset along the axis.
    pub offset: f64,
    /// Viewport extent along the axis.
    pub viewport: f64,
    /// Total content extent along the axis.
    pub content: f64,
}

impl ScrollMetrics {
    /// Metrics for a container that cannot scroll at all.
    #[must_use]
    pub const fn fixed(axis: Axis) -> Self {
        Self {
            axis,
            offset: 0.0,
            viewport: 0.0,
            content: 0.0,
        }
    }

    /// The largest valid scroll offset.
    #[must_use]
    pub fn max_offset(&self) -> f64 {
        (self.content - self.viewport).max(0.0)
    }

    /// Whether there is any scrollable range.
    #[must_use]
    pub fn scrollable(&self) -> bool {
        self.max_offset() > 0.0
    }

    /// Translates a content-space rectangle into viewport-relative space by
    /// subtracting the current scroll offset along the axis.
    #[must_use]
    pub fn viewport_rect(&self, content_rect: Rect) -> Rect {
        let origin = content_rect.origin() - self.axis.vec(self.offset);
        Rect::from_origin_size(origin, content_rect.size())
    }

    fn viewport_size(&self) -> Size {
        // Only the main-axis extent matters for protrusion; the cross axis
        // never scrolls.
        match self.axis {
            Axis::Horizontal => Size::new(self.viewport, f64::INFINITY),
            Axis::Vertical => Size::new(f64::INFINITY, self.viewport),
        }
    }
}

/// Protrusion above which autoscroll engages.
pub const ACTIVATION_THRESHOLD: f64 = 0.2;

/// Scroll speed per tick at full protrusion, in layout units.
pub const STEP_SPEED: f64 = 15.0;

/// Edge-autoscroll state machine for one drag session.
///
/// The controller is bound to whichever container is currently under the
/// drag; the session resets it with [`stop`](Self::stop) when the target
/// changes.
#[derive(Clone, Debug)]
pub struct AutoscrollController {
    scrolling: bool,
    threshold: f64,
    speed: f64,
}

impl AutoscrollController {
    /// A controller with the stock threshold and speed.
    #[must_use]
    pub const fn new() -> Self {
        Self::with_tuning(ACTIVATION_THRESHOLD, STEP_SPEED)
    }

    /// A controller with a custom activation threshold and step speed.
    #[must_use]
    pub const fn with_tuning(threshold: f64, speed: f64) -> Self {
        Self {
            scrolling: false,
            threshold,
            speed,
        }
    }

    /// Whether the controller is currently in the scrolling state.
    #[must_use]
    pub const fn is_scrolling(&self) -> bool {
        self.scrolling
    }

    /// Re-evaluates the state from the latest drag rectangle.
    ///
    /// `rect` is viewport-relative (see [`ScrollMetrics::viewport_rect`]).
    /// Returns the state after the transition, so callers can start or stop
    /// driving [`tick`](Self::tick) at frame cadence.
    pub fn observe(&mut self, rect: Rect, metrics: &ScrollMetrics) -> bool {
        let engaged = metrics.scrollable()
            && protrusion(rect, metrics.viewport_size(), metrics.axis) > self.threshold;
        self.scrolling = engaged;
        self.scrolling
    }

    /// Computes the scroll step for one display frame.
    ///
    /// Returns the signed offset delta to apply, or `None` when the
    /// controller is (or just became) idle. The step is refused — and the
    /// controller stopped — when applying it would push the offset outside
    /// `[0, max_offset]`.
    pub fn tick(&mut self, rect: Rect, metrics: &ScrollMetrics) -> Option<f64> {
        if !self.scrolling {
            return None;
        }
        let viewport = metrics.viewport_size();
        let amount = protrusion(rect, viewport, metrics.axis);
        if amount <= self.threshold {
            self.scrolling = false;
            return None;
        }
        let Some(edge) = protruding_edge(rect, viewport, metrics.axis) else {
            self.scrolling = false;
            return None;
        };
        let delta = edge.direction() * self.speed * amount;
        let next = metrics.offset + delta;
        if next < 0.0 || next > metrics.max_offset() {
            self.scrolling = false;
            return None;
        }
        Some(delta)
    }

    /// Forces the controller back to idle (drag ended or target changed).
    pub fn stop(&mut self) {
        self.scrolling = false;
    }
}

impl Default for AutoscrollController {
    fn default() -> Self {
        Self::new()
    }
}
