// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trellis Drag: the drag-and-drop interaction engine for grid/list views.
//!
//! ## Overview
//!
//! A user long-presses an item, drags it across one or more registered
//! containers, and this crate continuously resolves which container and
//! slot the item would land in, asks the container to reorder/insert/remove
//! its backing data, and keeps the floating representation tracking the
//! pointer. It does not render anything and does not own a collection:
//! containers participate through two capability traits, and a host
//! surface participates through [`FloatingLayer`].
//!
//! ## Capabilities
//!
//! A container registers with up to two capabilities, resolved once at
//! registration time (never by runtime type inspection):
//!
//! - [`DragSource`]: drags can start here — hit-test a point, hand out a
//!   [`Snapshot`] of the grabbed cell and an item handle, and remove the
//!   item when it is dropped elsewhere.
//! - [`DropTarget`]: drags can land here — accept or refuse a hovering
//!   rectangle, and mutate the backing collection as the item enters,
//!   moves, leaves, or is committed. Scrollable targets also expose their
//!   [`ScrollMetrics`](trellis_autoscroll::ScrollMetrics) so the engine can
//!   autoscroll them while the pointer rests near an edge.
//!
//! A container may hold both capabilities; registration order is the
//! deterministic tie-break when two targets overlap the floating
//! rectangle by exactly the same area.
//!
//! ## Session and coordinator
//!
//! [`DragSession`] is the single source of truth for one in-flight drag:
//! the [`DragBundle`] it owns records the dragged item, its source, the
//! container currently under the representation, and the floating
//! rectangle. [`DragDropCoordinator`] wires a long-press-style gesture to
//! the session — the gesture's [`GesturePhase`] transitions are the *only*
//! driver of session transitions — and forwards display-frame ticks to the
//! autoscroll controller while one is needed.
//!
//! ## Failure model
//!
//! Nothing here is fatal. No draggable hit at gesture start means no drag
//! begins; a target that refuses the current rectangle makes the engine
//! fall back to hovering above the source; an interrupted gesture cancels
//! and fully reverts. All of it is `Option`-shaped, none of it panics.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod bundle;
mod capability;
mod coordinator;
mod registry;
mod session;
mod types;

pub use bundle::DragBundle;
pub use capability::{DragSource, DropTarget, FloatingLayer};
pub use coordinator::{DragDropCoordinator, GesturePhase};
pub use registry::{ContainerSet, SharedSource, SharedTarget};
pub use session::{DragSession, SessionState};
pub use types::{ContainerId, Snapshot};
