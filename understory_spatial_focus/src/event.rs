// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Routing raw input to focus changes.
//!
//! Pointer events move focus to the region under the pointer. Key events are
//! matched against the focus actions of the configured
//! [`Keymap`](crate::keymap::Keymap) and trigger directional navigation. Both
//! paths go through [`FocusState::change_focus`], so a held grab turns them
//! into no-ops.

use alloc::rc::Rc;

use kurbo::Point;

use crate::keymap::KeyEvent;
use crate::navigation::Direction;
use crate::state::FocusState;
use crate::widget::Focusable;

/// Pointer button identifier.
pub type PointerButton = u8;

/// An input event relevant to focus.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum FocusEvent {
    /// The pointer moved.
    PointerMove {
        /// Pointer position, in the regions' coordinate space.
        position: Point,
    },
    /// A pointer button was pressed.
    PointerDown {
        /// Pointer position, in the regions' coordinate space.
        position: Point,
        /// Button that was pressed.
        button: PointerButton,
    },
    /// A pointer button was released.
    PointerUp {
        /// Pointer position, in the regions' coordinate space.
        position: Point,
        /// Button that was released.
        button: PointerButton,
    },
    /// A key was pressed.
    Key(KeyEvent),
}

impl FocusEvent {
    /// The pointer position, for pointer events.
    pub fn position(&self) -> Option<Point> {
        match *self {
            Self::PointerMove { position }
            | Self::PointerDown { position, .. }
            | Self::PointerUp { position, .. } => Some(position),
            Self::Key(_) => None,
        }
    }
}

impl<W: Focusable + ?Sized, A> FocusState<W, A> {
    /// Index of the region that should take focus for a pointer at `pt`.
    ///
    /// The first region containing `pt` (edges included) wins. If none does,
    /// the last placeless region is returned as the default.
    pub fn hit_test(&self, pt: Point) -> Option<usize> {
        let mut default = None;
        for (i, region) in self.regions.iter().enumerate() {
            if region.is_placeless() {
                default = Some(i);
                continue;
            }
            if region.contains(pt) {
                return Some(i);
            }
        }
        default
    }

    /// Move focus to the region under `pt`.
    ///
    /// When nothing is hit and there is no placeless region, focus is
    /// cleared. Returns whether focus moved.
    pub fn focus_at(&mut self, pt: Point) -> bool {
        let target = self
            .hit_test(pt)
            .map(|i| Rc::clone(&self.regions[i].widget));
        tracing::trace!(x = pt.x, y = pt.y, hit = target.is_some(), "pointer focus");
        self.change_focus(target)
    }

    /// Apply an input event to focus.
    ///
    /// Pointer events are hit-tested with [`FocusState::focus_at`]. Key
    /// events are checked against each direction's action, in the order of
    /// [`Direction::ALL`]; every matching action moves focus once. Returns
    /// whether focus moved.
    pub fn route_event(&mut self, event: &FocusEvent) -> bool {
        let mut changed = false;

        if let Some(position) = event.position() {
            changed |= self.focus_at(position);
        }

        if let FocusEvent::Key(key) = event {
            for direction in Direction::ALL {
                if self.config.keymap.matches(direction.action(), key) {
                    changed |= self.focus_nearest(direction);
                }
            }
        }

        changed
    }
}
