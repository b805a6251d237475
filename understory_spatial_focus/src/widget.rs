// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Capabilities the focus state needs from widgets and from the widget tree.

use alloc::rc::Rc;

use crate::types::{FocusSymbol, NameKey};

/// A widget that can hold input focus.
///
/// Widgets are shared through [`Rc`] and notified through `&self`, so
/// implementations keep their focus flag and name slot in [`Cell`]s or
/// similar.
///
/// [`Cell`]: core::cell::Cell
pub trait Focusable {
    /// The widget gained focus.
    ///
    /// `default` is `true` when focus was assigned while reconciling a new
    /// frame, and `false` when it moved because of pointer or keyboard input.
    fn focus(&self, default: bool);

    /// The widget lost focus, or was not chosen when a frame was reconciled.
    fn unfocus(&self);

    /// Whether this widget should receive focus when nothing else claims it.
    fn is_default(&self) -> bool {
        false
    }

    /// The name key written by the last reconciliation, if any.
    fn full_focus_name(&self) -> Option<NameKey>;

    /// Store the name key assigned during reconciliation.
    fn set_full_focus_name(&self, key: NameKey);
}

/// The root of a widget tree that can enumerate its focusable widgets.
///
/// `find_focusable` must visit every focusable widget exactly once, in an
/// order that is deterministic for a given tree. That order decides which
/// widget keeps focus when logical names repeat, and which default widget
/// wins when several are flagged.
pub trait FocusTree<W: ?Sized> {
    /// Call `visit` with each focusable widget and its logical name.
    fn find_focusable(&self, visit: &mut dyn FnMut(Rc<W>, Option<FocusSymbol>));
}

impl<W: ?Sized> FocusTree<W> for [(Rc<W>, Option<FocusSymbol>)] {
    fn find_focusable(&self, visit: &mut dyn FnMut(Rc<W>, Option<FocusSymbol>)) {
        for (widget, name) in self {
            visit(Rc::clone(widget), *name);
        }
    }
}
