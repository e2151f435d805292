// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Small shared value types.

use kurbo::Rect;

/// Identifies a registered container within a
/// [`ContainerSet`](crate::ContainerSet).
///
/// Ids are assigned in registration order, which also makes them the
/// deterministic tie-break when two drop targets overlap the floating
/// rectangle by exactly the same area.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ContainerId(pub(crate) usize);

impl ContainerId {
    /// The registration index of this container.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// Captured visual representation of a grabbed cell.
///
/// The engine only tracks geometry; the host renders the pixels behind it.
/// `frame` is in the source container's content coordinates at the moment
/// of capture.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Snapshot {
    /// The grabbed cell's frame in container content coordinates.
    pub frame: Rect,
}

impl Snapshot {
    /// A snapshot of a cell at `frame`.
    #[must_use]
    pub const fn new(frame: Rect) -> Self {
        Self { frame }
    }
}
