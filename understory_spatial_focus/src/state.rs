// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Focus registry: the focused widget, the exclusive grab, and this frame's regions.
//!
//! ## Lifecycle
//!
//! - The layout system hands over the frame's regions with
//!   [`FocusState::take_regions`], replacing the previous list wholesale.
//! - [`FocusState::begin_frame`] re-derives the focused widget from the new
//!   widget tree and clears any grab.
//! - Input then flows through [`FocusState::route_event`], which may move
//!   focus until the next frame.
//!
//! The setters here only store state. Widgets are notified by
//! reconciliation and by [`FocusState::change_focus`], never by the
//! registry itself.

use alloc::rc::Rc;
use alloc::vec::Vec;
use core::fmt;

use crate::config::FocusConfig;
use crate::types::FocusRegion;

/// Focus state for one interaction context.
///
/// Each context (for example, a modal dialog layered over the main screen)
/// owns its own `FocusState`; nothing is shared between instances.
pub struct FocusState<W: ?Sized, A = ()> {
    pub(crate) focused: Option<Rc<W>>,
    pub(crate) grab: Option<Rc<W>>,
    pub(crate) regions: Vec<FocusRegion<W, A>>,
    pub(crate) config: FocusConfig,
}

impl<W: ?Sized, A> fmt::Debug for FocusState<W, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FocusState")
            .field("focused", &self.focused.is_some())
            .field("grabbed", &self.grab.is_some())
            .field("regions", &self.regions.len())
            .field("config", &self.config)
            .finish()
    }
}

impl<W: ?Sized, A> Default for FocusState<W, A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: ?Sized, A> FocusState<W, A> {
    /// Create an empty state with the default configuration.
    pub fn new() -> Self {
        Self::with_config(FocusConfig::default())
    }

    /// Create an empty state with an explicit configuration.
    pub fn with_config(config: FocusConfig) -> Self {
        Self {
            focused: None,
            grab: None,
            regions: Vec::new(),
            config,
        }
    }

    /// The active configuration.
    pub fn config(&self) -> &FocusConfig {
        &self.config
    }

    /// Mutable access to the configuration.
    pub fn config_mut(&mut self) -> &mut FocusConfig {
        &mut self.config
    }

    /// The focused widget, if any.
    pub fn focused(&self) -> Option<&Rc<W>> {
        self.focused.as_ref()
    }

    /// Store the focused widget without notifying anyone.
    ///
    /// Use [`FocusState::change_focus`] to move focus with notifications.
    pub fn set_focused(&mut self, widget: Option<Rc<W>>) {
        self.focused = widget;
    }

    /// Whether `widget` is the focused widget.
    pub fn is_focused(&self, widget: &Rc<W>) -> bool {
        self.focused.as_ref().is_some_and(|f| Rc::ptr_eq(f, widget))
    }

    /// The first region belonging to the focused widget, if any.
    ///
    /// Hosts use this to recover the region's activation argument.
    pub fn focused_region(&self) -> Option<&FocusRegion<W, A>> {
        let focused = self.focused.as_ref()?;
        self.regions.iter().find(|r| r.is_for(focused))
    }

    /// The widget holding the exclusive grab, if any.
    pub fn grab(&self) -> Option<&Rc<W>> {
        self.grab.as_ref()
    }

    /// Set or clear the exclusive grab.
    ///
    /// While a grab is held, pointer hit testing and directional navigation
    /// leave focus untouched.
    pub fn set_grab(&mut self, widget: Option<Rc<W>>) {
        self.grab = widget;
    }

    /// Give `widget` the exclusive grab until it is released or the next frame begins.
    pub fn request_grab(&mut self, widget: Rc<W>) {
        tracing::debug!("focus grab requested");
        self.grab = Some(widget);
    }

    /// Release the exclusive grab, if any.
    pub fn release_grab(&mut self) {
        if self.grab.take().is_some() {
            tracing::debug!("focus grab released");
        }
    }

    /// Whether a grab is currently held.
    pub fn is_grabbed(&self) -> bool {
        self.grab.is_some()
    }

    /// Replace this frame's focusable regions.
    ///
    /// Called once per frame by the layout system. Order matters: it is the
    /// tie-break order for navigation and the priority order for hit testing.
    pub fn take_regions(&mut self, regions: Vec<FocusRegion<W, A>>) {
        tracing::trace!(count = regions.len(), "took focus regions");
        self.regions = regions;
    }

    /// This frame's focusable regions, in the order they were provided.
    pub fn regions(&self) -> &[FocusRegion<W, A>] {
        &self.regions
    }
}
