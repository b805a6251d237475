// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tunables for navigation and input mapping.

use crate::keymap::Keymap;

/// Default penalty applied to the along-axis gap between disjoint segments.
pub const DEFAULT_CROSSRANGE_PENALTY: f64 = 1024.0;

/// Configuration consulted by [`FocusState`](crate::FocusState).
#[derive(Clone, Debug)]
pub struct FocusConfig {
    /// Multiplier for the along-axis component when a directional candidate
    /// does not overlap the focused widget's edge.
    ///
    /// Larger values make navigation strongly prefer candidates in the same
    /// row (for left/right) or column (for up/down).
    pub crossrange_penalty: f64,
    /// Key bindings for the focus actions.
    pub keymap: Keymap,
}

impl Default for FocusConfig {
    fn default() -> Self {
        Self {
            crossrange_penalty: DEFAULT_CROSSRANGE_PENALTY,
            keymap: Keymap::default(),
        }
    }
}

impl FocusConfig {
    /// Replace the cross-range penalty.
    #[must_use]
    pub fn with_crossrange_penalty(mut self, penalty: f64) -> Self {
        self.crossrange_penalty = penalty;
        self
    }

    /// Replace the keymap.
    #[must_use]
    pub fn with_keymap(mut self, keymap: Keymap) -> Self {
        self.keymap = keymap;
        self
    }
}
