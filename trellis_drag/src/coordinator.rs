// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The host-facing entry point.

use core::fmt;

use kurbo::Point;

use crate::capability::{DragSource, DropTarget, FloatingLayer};
use crate::registry::{ContainerSet, SharedSource, SharedTarget};
use crate::session::{DragSession, SessionState};
use crate::types::ContainerId;

use alloc::rc::Rc;
use core::cell::RefCell;

/// Phase of a long-press-drag gesture, as reported by the host.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GesturePhase {
    /// The gesture was recognized; try to start a drag.
    Began,
    /// The pointer moved while the gesture is live.
    Changed,
    /// The pointer was released.
    Ended,
    /// The platform interrupted the gesture.
    Cancelled,
}

/// Owns the container set, the floating layer, and the session, and maps
/// raw gesture callbacks onto the session's lifecycle.
///
/// The host forwards every sample of its drag gesture to
/// [`gesture`](Self::gesture) with canvas coordinates, drives
/// [`frame_tick`](Self::frame_tick) at display cadence while
/// [`needs_frame_ticks`](Self::needs_frame_ticks) is true, and reports the
/// completion of the settle animation via
/// [`settle_finished`](Self::settle_finished).
pub struct DragDropCoordinator<K: 'static, L> {
    containers: ContainerSet<K>,
    layer: L,
    session: DragSession<K>,
}

impl<K: 'static, L: FloatingLayer> DragDropCoordinator<K, L> {
    /// A coordinator rendering through `layer`, with no containers yet.
    #[must_use]
    pub fn new(layer: L) -> Self {
        Self {
            containers: ContainerSet::new(),
            layer,
            session: DragSession::new(),
        }
    }

    /// Registers a drag-only container.
    pub fn register_source<C: DragSource<K> + 'static>(
        &mut self,
        container: Rc<RefCell<C>>,
    ) -> ContainerId {
        self.containers.register_source(container)
    }

    /// Registers a drop-only container.
    pub fn register_target<C: DropTarget<K> + 'static>(
        &mut self,
        container: Rc<RefCell<C>>,
    ) -> ContainerId {
        self.containers.register_target(container)
    }

    /// Registers a container that is both a drag source and a drop target.
    pub fn register_dual<C: DragSource<K> + DropTarget<K> + 'static>(
        &mut self,
        container: Rc<RefCell<C>>,
    ) -> ContainerId {
        self.containers.register_dual(container)
    }

    /// Registers a container from an explicit capability bundle.
    pub fn register(
        &mut self,
        source: Option<SharedSource<K>>,
        target: Option<SharedTarget<K>>,
    ) -> ContainerId {
        self.containers.register(source, target)
    }

    /// The registered containers.
    #[must_use]
    pub fn containers(&self) -> &ContainerSet<K> {
        &self.containers
    }

    /// The floating layer.
    #[must_use]
    pub fn layer(&self) -> &L {
        &self.layer
    }

    /// Current session state.
    #[must_use]
    pub fn state(&self) -> SessionState {
        self.session.state()
    }

    /// Whether a drag is currently tracking the pointer.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.session.is_dragging()
    }

    /// The in-flight session, for inspection.
    #[must_use]
    pub const fn session(&self) -> &DragSession<K> {
        &self.session
    }

    /// Feeds one gesture sample at `canvas_point`.
    ///
    /// Returns `true` when a [`GesturePhase::Began`] sample actually started
    /// a drag; all other phases return whether a session was live to
    /// receive them.
    pub fn gesture(&mut self, phase: GesturePhase, canvas_point: Point) -> bool {
        match phase {
            GesturePhase::Began => {
                self.session
                    .begin(&self.containers, &mut self.layer, canvas_point)
            }
            GesturePhase::Changed => {
                let live = self.session.is_dragging();
                self.session
                    .update(&self.containers, &mut self.layer, canvas_point);
                live
            }
            GesturePhase::Ended => {
                let live = self.session.is_dragging();
                self.session
                    .end(&self.containers, &mut self.layer, canvas_point);
                live
            }
            GesturePhase::Cancelled => {
                let live = self.session.state() != SessionState::Idle;
                self.session.cancel(&self.containers, &mut self.layer);
                live
            }
        }
    }

    /// Whether the host should be calling [`frame_tick`](Self::frame_tick)
    /// every display frame.
    #[must_use]
    pub fn needs_frame_ticks(&self) -> bool {
        self.session.needs_frame_ticks()
    }

    /// Advances edge-autoscroll by one display frame.
    pub fn frame_tick(&mut self) {
        self.session.frame_tick(&self.containers);
    }

    /// The settle animation started by [`FloatingLayer::settle`] completed.
    pub fn settle_finished(&mut self) {
        self.session.settle_finished(&self.containers, &mut self.layer);
    }
}

impl<K: 'static, L> fmt::Debug for DragDropCoordinator<K, L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DragDropCoordinator")
            .field("containers", &self.containers)
            .field("state", &self.session.state())
            .finish_non_exhaustive()
    }
}
