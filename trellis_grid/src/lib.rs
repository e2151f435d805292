// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trellis Grid: a ready-made grid/list container for the drag-and-drop
//! engine.
//!
//! [`GridContainer`] implements both of the engine's capabilities —
//! [`DragSource`](trellis_drag::DragSource) and
//! [`DropTarget`](trellis_drag::DropTarget) — over three host-provided
//! pieces:
//!
//! - a [`CollectionModel`]: the ordered backing collection ([`VecModel`]
//!   covers the common case);
//! - a [`CellViews`]: the animated cell mutations mirroring every model
//!   mutation ([`NullCells`] for headless use);
//! - a [`FlowLayout`]: lane-based fixed-size cell geometry along a scroll
//!   axis.
//!
//! The container keeps model and cells in lock-step — every insert, move,
//! and remove lands in both within a single call — and tracks the
//! concealed cell under the floating representation so a finished or
//! cancelled drag can restore it.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod container;
mod layout;
mod model;

pub use container::{CellViews, GridContainer, NullCells};
pub use layout::FlowLayout;
pub use model::{CollectionModel, VecModel};
