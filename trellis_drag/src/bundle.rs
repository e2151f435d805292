// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The state of one in-flight drag.

use kurbo::{Point, Rect, Vec2};

use crate::types::ContainerId;

/// Everything the session knows about the drag in progress.
///
/// A bundle is created when a drag starts and destroyed when the drag ends
/// or cancels; it is owned exclusively by the
/// [`DragSession`](crate::DragSession). The `source` never changes and the
/// item's identity is stable for the whole session, even though its slot in
/// a backing collection may change many times.
#[derive(Clone, Debug)]
pub struct DragBundle<K> {
    /// Handle of the item being moved.
    pub item: K,
    /// The container the drag began in.
    pub source: ContainerId,
    /// The container currently under the floating representation.
    pub current_target: Option<ContainerId>,
    /// Canvas-space bounding box of the floating representation.
    pub floating: Rect,
    /// Fixed vector from the pointer to the representation's center,
    /// captured at grab time and invariant for the session.
    pub grab_offset: Vec2,
    /// Canvas frame of the grabbed cell at grab time; the settle fallback
    /// and the cancel-revert anchor.
    pub origin_frame: Rect,
    /// The most recent pointer sample, so autoscroll ticks can re-resolve
    /// the target slot without fresh pointer input.
    pub(crate) last_point: Point,
}
