// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-frame focus reconciliation.
//!
//! Widget trees are rebuilt every frame, so the focused widget from the last
//! frame is usually a different object from its counterpart in the new tree.
//! Reconciliation recovers the counterpart structurally: every focusable
//! widget is keyed by its logical name and the number of times that name has
//! already appeared in enumeration order ([`NameKey`]), and focus moves to the
//! new widget whose key equals the old one.

use alloc::rc::Rc;
use alloc::vec::Vec;

use hashbrown::HashMap;

use crate::state::FocusState;
use crate::types::{FocusSymbol, NameKey};
use crate::widget::{FocusTree, Focusable};

/// How reconciliation chose the focused widget.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum FocusResolution {
    /// A widget with the previous focus's name key was found.
    Restored,
    /// The previous focus was gone; the first default widget took focus.
    Default,
    /// Nothing is focused.
    Cleared,
}

/// Summary of one [`FocusState::begin_frame`] pass.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct FrameOutcome {
    /// How the focused widget was chosen.
    pub resolution: FocusResolution,
    /// Number of focusable widgets enumerated.
    pub focusables: usize,
}

impl<W: Focusable + ?Sized, A> FocusState<W, A> {
    /// Reconcile focus against a freshly built widget tree.
    ///
    /// Runs once per frame, before any input is routed against the new
    /// regions:
    ///
    /// 1. The grab is cleared.
    /// 2. Every focusable widget under `root` is enumerated and assigned a
    ///    [`NameKey`] through [`Focusable::set_full_focus_name`].
    /// 3. If the previously focused widget's key matches an enumerated
    ///    widget, the first such widget becomes focused.
    /// 4. Otherwise the first widget reporting [`Focusable::is_default`] is
    ///    focused, or focus is cleared.
    /// 5. Every other enumerated widget is sent [`Focusable::unfocus`], and
    ///    the focused widget (if any) is sent `focus(true)`.
    ///
    /// The previous widget's key is read after the new keys are written, so a
    /// widget object that survives into the new tree keeps focus under its
    /// new key.
    pub fn begin_frame<T: FocusTree<W> + ?Sized>(&mut self, root: &T) -> FrameOutcome {
        self.grab = None;

        let mut widgets: Vec<Rc<W>> = Vec::new();
        let mut counts: HashMap<Option<FocusSymbol>, u32> = HashMap::new();
        root.find_focusable(&mut |widget, name| {
            let serial = counts.entry(name).or_insert(0);
            widget.set_full_focus_name(NameKey::new(name, *serial));
            *serial += 1;
            widgets.push(widget);
        });

        let previous_key = self.focused.take().and_then(|w| w.full_focus_name());
        let restored = previous_key.and_then(|key| {
            widgets
                .iter()
                .find(|w| w.full_focus_name() == Some(key))
                .cloned()
        });

        let (current, resolution) = match restored {
            Some(w) => (Some(w), FocusResolution::Restored),
            None => match widgets.iter().find(|w| w.is_default()) {
                Some(w) => (Some(Rc::clone(w)), FocusResolution::Default),
                None => (None, FocusResolution::Cleared),
            },
        };

        for widget in &widgets {
            let is_current = current.as_ref().is_some_and(|c| Rc::ptr_eq(c, widget));
            if !is_current {
                widget.unfocus();
            }
        }
        if let Some(widget) = &current {
            widget.focus(true);
        }
        self.focused = current;

        tracing::debug!(
            focusables = widgets.len(),
            resolution = ?resolution,
            "reconciled focus"
        );

        FrameOutcome {
            resolution,
            focusables: widgets.len(),
        }
    }
}
