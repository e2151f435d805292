// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dragging an item between two shelves, headlessly.
//!
//! This example shows how to combine:
//! - `trellis_grid` for ready-made list containers over a `VecModel`,
//! - `trellis_drag` for the gesture-driven drag session,
//! with a `FloatingLayer` that just logs what a real host would render.
//!
//! Run:
//! - `cargo run -p trellis_demos --example shelf_reorder`

use std::cell::RefCell;
use std::rc::Rc;

use kurbo::{Point, Rect, Size};
use trellis_drag::{DragDropCoordinator, FloatingLayer, GesturePhase, Snapshot};
use trellis_geometry::Axis;
use trellis_grid::{FlowLayout, GridContainer, NullCells, VecModel};

type Shelf = GridContainer<&'static str, VecModel<&'static str>, NullCells>;

/// A floating layer that narrates instead of rendering.
#[derive(Debug, Default)]
struct ConsoleLayer;

impl FloatingLayer for ConsoleLayer {
    fn present(&mut self, _snapshot: &Snapshot, frame: Rect) {
        println!("  [layer] present representation at {frame:?}");
    }
    fn move_to(&mut self, frame: Rect) {
        println!("  [layer] move to {frame:?}");
    }
    fn settle(&mut self, frame: Rect) {
        println!("  [layer] settle toward {frame:?}");
    }
    fn discard(&mut self) {
        println!("  [layer] discard");
    }
}

fn shelf(frame: Rect, items: &[&'static str]) -> Rc<RefCell<Shelf>> {
    Rc::new(RefCell::new(GridContainer::new(
        frame,
        FlowLayout::list(Axis::Vertical, Size::new(100.0, 50.0), 0.0),
        VecModel::from(items.to_vec()),
        NullCells,
    )))
}

fn print_shelves(label: &str, left: &Rc<RefCell<Shelf>>, right: &Rc<RefCell<Shelf>>) {
    println!(
        "{label}: left = {:?}, right = {:?}",
        left.borrow().model().as_slice(),
        right.borrow().model().as_slice()
    );
}

fn main() {
    // Two vertical shelves side by side on one canvas.
    let left = shelf(Rect::new(0.0, 0.0, 100.0, 300.0), &["mercury", "venus", "earth"]);
    let right = shelf(Rect::new(200.0, 0.0, 300.0, 300.0), &["mars"]);

    let mut coordinator = DragDropCoordinator::new(ConsoleLayer);
    coordinator.register_dual(left.clone());
    coordinator.register_dual(right.clone());

    print_shelves("before", &left, &right);

    // Long-press on "venus" and carry it across to the right shelf.
    println!("press at (50, 75):");
    coordinator.gesture(GesturePhase::Began, Point::new(50.0, 75.0));
    for x in [100.0, 150.0, 200.0, 250.0] {
        println!("drag to ({x}, 75):");
        coordinator.gesture(GesturePhase::Changed, Point::new(x, 75.0));
    }
    println!("release:");
    coordinator.gesture(GesturePhase::Ended, Point::new(250.0, 75.0));
    // A real host calls this when its settle animation completes.
    coordinator.settle_finished();

    print_shelves("after", &left, &right);
}
