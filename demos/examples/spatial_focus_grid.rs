// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Directional focus over a rebuilt grid of buttons.
//!
//! This example shows how to combine:
//! - `FocusState::take_regions` + `FocusState::begin_frame` to carry focus
//!   across widget trees that are rebuilt every frame,
//! - `FocusState::route_event` for pointer and arrow-key input,
//! - a placeless widget as the fallback when navigation runs off the grid.
//!
//! Run:
//! - `cargo run -p understory_demos --example spatial_focus_grid`
//! - `RUST_LOG=understory_spatial_focus=trace cargo run -p understory_demos --example spatial_focus_grid`

use std::cell::Cell;
use std::rc::Rc;

use kurbo::Point;
use understory_spatial_focus::keymap::{Key, KeyEvent};
use understory_spatial_focus::{
    FocusEvent, FocusRegion, FocusState, FocusSymbol, Focusable, NameKey,
};

/// A button that remembers its label and focus state.
struct Button {
    label: String,
    default: bool,
    key: Cell<Option<NameKey>>,
    focused: Cell<bool>,
}

impl Focusable for Button {
    fn focus(&self, default: bool) {
        self.focused.set(true);
        println!("  focus   {} (default={default})", self.label);
    }

    fn unfocus(&self) {
        self.focused.set(false);
    }

    fn is_default(&self) -> bool {
        self.default
    }

    fn full_focus_name(&self) -> Option<NameKey> {
        self.key.get()
    }

    fn set_full_focus_name(&self, key: NameKey) {
        self.key.set(Some(key));
    }
}

/// One frame's worth of widgets: a 3x3 grid plus a placeless menu entry.
struct Frame {
    tree: Vec<(Rc<Button>, Option<FocusSymbol>)>,
    regions: Vec<FocusRegion<Button>>,
}

fn build_frame() -> Frame {
    const GRID: FocusSymbol = FocusSymbol(1);
    const MENU: FocusSymbol = FocusSymbol(2);

    let mut tree = Vec::new();
    let mut regions = Vec::new();
    for row in 0..3 {
        for col in 0..3 {
            let button = Rc::new(Button {
                label: format!("cell({row},{col})"),
                default: row == 1 && col == 1,
                key: Cell::new(None),
                focused: Cell::new(false),
            });
            let (x, y) = (f64::from(col) * 60.0, f64::from(row) * 40.0);
            regions.push(FocusRegion::new(button.clone(), x, y, 50.0, 30.0));
            // Every cell shares a name; occurrence order tells them apart.
            tree.push((button, Some(GRID)));
        }
    }

    let menu = Rc::new(Button {
        label: "menu".to_string(),
        default: false,
        key: Cell::new(None),
        focused: Cell::new(false),
    });
    regions.push(FocusRegion::placeless(menu.clone()));
    tree.push((menu, Some(MENU)));

    Frame { tree, regions }
}

fn describe(state: &FocusState<Button>) -> String {
    state
        .focused()
        .map_or_else(|| "<none>".to_string(), |b| b.label.clone())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut state: FocusState<Button> = FocusState::new();

    let script: [(&str, FocusEvent); 6] = [
        ("right", FocusEvent::Key(KeyEvent::new(Key::Right))),
        ("down", FocusEvent::Key(KeyEvent::new(Key::Down))),
        ("down (off the grid)", FocusEvent::Key(KeyEvent::new(Key::Down))),
        ("left (from placeless)", FocusEvent::Key(KeyEvent::new(Key::Left))),
        (
            "pointer over cell(0,0)",
            FocusEvent::PointerMove {
                position: Point::new(10.0, 10.0),
            },
        ),
        ("up (blocked)", FocusEvent::Key(KeyEvent::new(Key::Up))),
    ];

    for (label, event) in script {
        // Layout and reconciliation run every frame with brand-new widgets.
        let frame = build_frame();
        state.take_regions(frame.regions);
        let outcome = state.begin_frame(&frame.tree[..]);
        println!(
            "== frame: {:?}, focus restored as {}",
            outcome.resolution,
            describe(&state)
        );

        let moved = state.route_event(&event);
        println!("-> {label}: moved={moved}, focus={}", describe(&state));
    }
}
