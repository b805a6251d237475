// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Spatial Focus: rebuild-stable focus tracking and directional navigation.
//!
//! This crate tracks which widget holds input focus in a UI whose widget tree
//! is rebuilt every frame, and moves that focus in response to pointer and
//! arrow-key input. It is organized around a single [`FocusState`] per
//! interaction context:
//!
//! - **Registry** ([`state`]): the focused widget, an exclusive grab, and the
//!   frame's [`FocusRegion`]s as published by layout.
//! - **Reconciliation** ([`reconcile`]): [`FocusState::begin_frame`] walks a
//!   [`FocusTree`], keys every focusable widget by ([logical name](FocusSymbol),
//!   occurrence) and carries focus over to the widget with the same
//!   [`NameKey`], falling back to a default widget.
//! - **Navigation** ([`navigation`]): [`FocusState::focus_nearest`] picks the
//!   closest region in a [`Direction`] using the segment distances in
//!   [`geometry`].
//! - **Routing** ([`event`]): [`FocusState::route_event`] turns
//!   [`FocusEvent`]s into hit-test or navigation requests, using the
//!   [`Keymap`](keymap::Keymap) in the state's [`FocusConfig`].
//!
//! Widgets participate through the [`Focusable`] trait and are identified by
//! reference ([`Rc`](alloc::rc::Rc) pointer identity), never by value.
//!
//! ## Minimal example
//!
//! ```rust
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! use kurbo::Point;
//! use understory_spatial_focus::keymap::{Key, KeyEvent};
//! use understory_spatial_focus::{
//!     FocusEvent, FocusRegion, FocusState, FocusSymbol, Focusable, NameKey,
//! };
//!
//! #[derive(Default)]
//! struct Button {
//!     default: bool,
//!     key: Cell<Option<NameKey>>,
//!     focused: Cell<bool>,
//! }
//!
//! impl Focusable for Button {
//!     fn focus(&self, _default: bool) { self.focused.set(true); }
//!     fn unfocus(&self) { self.focused.set(false); }
//!     fn is_default(&self) -> bool { self.default }
//!     fn full_focus_name(&self) -> Option<NameKey> { self.key.get() }
//!     fn set_full_focus_name(&self, key: NameKey) { self.key.set(Some(key)); }
//! }
//!
//! let ok = Rc::new(Button { default: true, ..Button::default() });
//! let cancel = Rc::new(Button::default());
//!
//! let mut state: FocusState<Button> = FocusState::new();
//!
//! // Layout publishes regions, then the frame is reconciled.
//! state.take_regions(vec![
//!     FocusRegion::new(ok.clone(), 0.0, 0.0, 80.0, 30.0),
//!     FocusRegion::new(cancel.clone(), 100.0, 0.0, 80.0, 30.0),
//! ]);
//! let tree = [
//!     (ok.clone(), Some(FocusSymbol(1))),
//!     (cancel.clone(), Some(FocusSymbol(2))),
//! ];
//! state.begin_frame(&tree[..]);
//! assert!(ok.focused.get());
//!
//! // The right arrow moves focus to the neighboring button…
//! state.route_event(&FocusEvent::Key(KeyEvent::new(Key::Right)));
//! assert!(cancel.focused.get());
//!
//! // …and the pointer can move it back.
//! state.route_event(&FocusEvent::PointerMove { position: Point::new(10.0, 10.0) });
//! assert!(ok.focused.get());
//! ```
//!
//! ## Reentrancy
//!
//! Every operation that notifies widgets takes `&mut FocusState`, and
//! notifications only receive `&self` of the widget. A widget therefore
//! cannot change focus from inside `focus`/`unfocus`; hosts that want that
//! behavior should record the request and apply it after the call returns.
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for `kurbo`.
//! - `libm`: enables `no_std` + `alloc` builds that rely on `libm` for floating-point math.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod config;
pub mod error;
pub mod event;
pub mod geometry;
pub mod keymap;
pub mod navigation;
pub mod reconcile;
pub mod state;
pub mod types;
pub mod widget;

#[cfg(test)]
mod testing;

pub use config::FocusConfig;
pub use error::KeymapError;
pub use event::FocusEvent;
pub use navigation::{Direction, DirectionBinding, EdgeAnchor, ExtremeWeights};
pub use reconcile::{FocusResolution, FrameOutcome};
pub use state::FocusState;
pub use types::{FocusRegion, FocusSymbol, NameKey};
pub use widget::{FocusTree, Focusable};
