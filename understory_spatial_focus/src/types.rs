// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types: focus regions, logical focus names, and name keys.

use alloc::rc::Rc;
use core::fmt;

use kurbo::{Point, Rect};

/// Symbol-like identifier for a widget's logical focus name.
///
/// The host is responsible for managing the meaning of individual symbols
/// (for example via an interned string table or static constants). Widgets
/// that share a symbol within one frame are told apart by their occurrence
/// index; see [`NameKey`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FocusSymbol(pub u64);

/// Structural identity of a focusable widget within one frame.
///
/// Assigned during [`FocusState::begin_frame`](crate::FocusState::begin_frame):
/// `serial` counts earlier occurrences of the same logical `name` in
/// enumeration order, starting at zero. Two widgets from different frames
/// are "the same widget" when their keys are equal.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct NameKey {
    /// Logical name reported by the widget tree. `None` is a name of its own.
    pub name: Option<FocusSymbol>,
    /// Occurrence index of `name` in this frame's enumeration.
    pub serial: u32,
}

impl NameKey {
    /// Create a name key.
    pub const fn new(name: Option<FocusSymbol>, serial: u32) -> Self {
        Self { name, serial }
    }
}

/// One focusable widget's hit area for the current frame.
///
/// `W` is the widget capability type (usually `dyn Focusable` or a concrete
/// widget implementing [`Focusable`](crate::Focusable)); widgets are compared
/// by reference identity, never by value. `A` is an opaque activation payload
/// handed back to the host and not otherwise interpreted.
pub struct FocusRegion<W: ?Sized, A = ()> {
    /// The widget that receives focus when this region is chosen.
    pub widget: Rc<W>,
    /// Optional activation argument.
    pub arg: Option<A>,
    /// On-screen bounds, or `None` for a placeless widget.
    ///
    /// Placeless widgets are focusable but take no part in geometric
    /// navigation; they act as fallbacks for hit testing and for
    /// directional moves that find no geometric candidate.
    ///
    /// The constructors store the rectangle normalized (`x0 <= x1`,
    /// `y0 <= y1`); navigation also normalizes before measuring, so a
    /// reversed rectangle assigned here directly behaves like its
    /// [`Rect::abs`].
    pub rect: Option<Rect>,
}

impl<W: ?Sized, A> FocusRegion<W, A> {
    /// Create a region from an origin and size.
    pub fn new(widget: Rc<W>, x: f64, y: f64, w: f64, h: f64) -> Self {
        Self {
            widget,
            arg: None,
            rect: Some(Rect::from_origin_size((x, y), (w, h))),
        }
    }

    /// Create a region with an explicit rectangle.
    ///
    /// Reversed rectangles are normalized.
    pub fn from_rect(widget: Rc<W>, rect: Rect) -> Self {
        Self {
            widget,
            arg: None,
            rect: Some(rect.abs()),
        }
    }

    /// Create a placeless region.
    pub fn placeless(widget: Rc<W>) -> Self {
        Self {
            widget,
            arg: None,
            rect: None,
        }
    }

    /// Attach an activation argument.
    #[must_use]
    pub fn with_arg(mut self, arg: A) -> Self {
        self.arg = Some(arg);
        self
    }

    /// Whether this region has no on-screen geometry.
    pub fn is_placeless(&self) -> bool {
        self.rect.is_none()
    }

    /// Whether `pt` lies inside the region, edges included.
    ///
    /// Placeless regions contain no points.
    pub fn contains(&self, pt: Point) -> bool {
        self.rect.map(|r| r.abs()).is_some_and(|r| {
            r.x0 <= pt.x && pt.x <= r.x0 + r.width() && r.y0 <= pt.y && pt.y <= r.y0 + r.height()
        })
    }

    /// Whether this region belongs to `widget` (reference identity).
    pub fn is_for(&self, widget: &Rc<W>) -> bool {
        Rc::ptr_eq(&self.widget, widget)
    }
}

impl<W: ?Sized, A: Clone> Clone for FocusRegion<W, A> {
    fn clone(&self) -> Self {
        Self {
            widget: Rc::clone(&self.widget),
            arg: self.arg.clone(),
            rect: self.rect,
        }
    }
}

impl<W: ?Sized, A: fmt::Debug> fmt::Debug for FocusRegion<W, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FocusRegion")
            .field("widget", &Rc::as_ptr(&self.widget).cast::<()>())
            .field("arg", &self.arg)
            .field("rect", &self.rect)
            .finish()
    }
}
