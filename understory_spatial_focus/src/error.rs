// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Configuration errors.

use alloc::string::String;

/// Error produced when a textual key binding cannot be parsed.
///
/// Bindings are written as zero or more modifier prefixes followed by a key
/// name, for example `K_LEFT`, `shift_K_TAB` or `ctrl_alt_K_a`.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum KeymapError {
    /// The binding text was empty.
    #[error("key binding is empty")]
    Empty,
    /// A prefix before the key name is not a known modifier.
    #[error("unknown modifier `{modifier}` in key binding `{spec}`")]
    UnknownModifier {
        /// The offending prefix.
        modifier: String,
        /// The full binding text.
        spec: String,
    },
    /// The binding has modifiers but no `K_` key name.
    #[error("key binding `{0}` does not name a key")]
    MissingKey(String),
    /// The key name after `K_` is not recognized.
    #[error("unknown key `{name}` in key binding `{spec}`")]
    UnknownKey {
        /// The unrecognized key name.
        name: String,
        /// The full binding text.
        spec: String,
    },
}
