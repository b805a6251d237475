// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Action-name to physical-key table.
//!
//! Focus navigation never looks at raw keys directly. Instead, a [`Keymap`]
//! maps action names such as [`FOCUS_RIGHT`] to one or more
//! [`KeyBinding`]s, and the event router asks whether an incoming
//! [`KeyEvent`] matches an action.
//!
//! Bindings can be built in code or parsed from text:
//!
//! ```
//! use understory_spatial_focus::keymap::{FOCUS_RIGHT, Key, KeyEvent, Keymap, Modifiers};
//!
//! let mut keymap = Keymap::empty();
//! keymap.bind_spec(FOCUS_RIGHT, "K_l").unwrap();
//! keymap.bind_spec(FOCUS_RIGHT, "ctrl_K_f").unwrap();
//!
//! assert!(keymap.matches(FOCUS_RIGHT, &KeyEvent::new(Key::Character('l'))));
//! assert!(!keymap.matches(FOCUS_RIGHT, &KeyEvent::new(Key::Character('f'))));
//! assert!(keymap.matches(
//!     FOCUS_RIGHT,
//!     &KeyEvent::new(Key::Character('f')).with_modifiers(Modifiers::CTRL),
//! ));
//! ```

use alloc::string::{String, ToString};
use core::str::FromStr;

use hashbrown::HashMap;
use smallvec::SmallVec;

use crate::error::KeymapError;

/// Action that moves focus to the left.
pub const FOCUS_LEFT: &str = "focus_left";
/// Action that moves focus to the right.
pub const FOCUS_RIGHT: &str = "focus_right";
/// Action that moves focus up.
pub const FOCUS_UP: &str = "focus_up";
/// Action that moves focus down.
pub const FOCUS_DOWN: &str = "focus_down";

/// A physical key.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    /// Left arrow.
    Left,
    /// Right arrow.
    Right,
    /// Up arrow.
    Up,
    /// Down arrow.
    Down,
    /// Keypad left (keypad 4 with num lock off).
    KeypadLeft,
    /// Keypad right (keypad 6 with num lock off).
    KeypadRight,
    /// Keypad up (keypad 8 with num lock off).
    KeypadUp,
    /// Keypad down (keypad 2 with num lock off).
    KeypadDown,
    /// Tab.
    Tab,
    /// Return / Enter.
    Return,
    /// Escape.
    Escape,
    /// Space bar.
    Space,
    /// Home.
    Home,
    /// End.
    End,
    /// Page up.
    PageUp,
    /// Page down.
    PageDown,
    /// A key producing a single character.
    Character(char),
}

impl Key {
    fn from_name(name: &str) -> Option<Self> {
        let key = match name {
            "LEFT" => Self::Left,
            "RIGHT" => Self::Right,
            "UP" => Self::Up,
            "DOWN" => Self::Down,
            "KP_LEFT" | "KP4" => Self::KeypadLeft,
            "KP_RIGHT" | "KP6" => Self::KeypadRight,
            "KP_UP" | "KP8" => Self::KeypadUp,
            "KP_DOWN" | "KP2" => Self::KeypadDown,
            "TAB" => Self::Tab,
            "RETURN" => Self::Return,
            "ESCAPE" => Self::Escape,
            "SPACE" => Self::Space,
            "HOME" => Self::Home,
            "END" => Self::End,
            "PAGEUP" => Self::PageUp,
            "PAGEDOWN" => Self::PageDown,
            _ => {
                let mut chars = name.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Self::Character(c),
                    _ => return None,
                }
            }
        };
        Some(key)
    }
}

bitflags::bitflags! {
    /// Keyboard modifiers held during a key event.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        /// Either shift key.
        const SHIFT = 0b0000_0001;
        /// Either control key.
        const CTRL  = 0b0000_0010;
        /// Either alt / option key.
        const ALT   = 0b0000_0100;
        /// Either meta / command / super key.
        const META  = 0b0000_1000;
    }
}

/// A key press delivered to the router.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct KeyEvent {
    /// The key that was pressed.
    pub key: Key,
    /// Modifiers held at the time.
    pub modifiers: Modifiers,
}

impl KeyEvent {
    /// A key press with no modifiers.
    pub fn new(key: Key) -> Self {
        Self {
            key,
            modifiers: Modifiers::empty(),
        }
    }

    /// Set the held modifiers.
    #[must_use]
    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }
}

/// One physical input bound to an action.
///
/// A binding matches a [`KeyEvent`] with the same key when every modifier
/// the binding requires is held. Extra held modifiers do not prevent a match.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct KeyBinding {
    /// Key that must be pressed.
    pub key: Key,
    /// Modifiers that must be held.
    pub modifiers: Modifiers,
}

impl KeyBinding {
    /// A binding for `key` with no required modifiers.
    pub const fn new(key: Key) -> Self {
        Self {
            key,
            modifiers: Modifiers::empty(),
        }
    }

    /// Require `modifiers` in addition to the key.
    #[must_use]
    pub const fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Whether `event` triggers this binding.
    pub fn matches(&self, event: &KeyEvent) -> bool {
        self.key == event.key && event.modifiers.contains(self.modifiers)
    }
}

impl FromStr for KeyBinding {
    type Err = KeymapError;

    /// Parse `[modifier_]*K_NAME`.
    ///
    /// Modifiers are `shift`, `ctrl`, `alt` and `meta`. Names are the
    /// upper-case key names (`LEFT`, `KP_LEFT`, `TAB`, …) or a single
    /// character (`K_a`).
    fn from_str(spec: &str) -> Result<Self, Self::Err> {
        if spec.is_empty() {
            return Err(KeymapError::Empty);
        }

        let mut modifiers = Modifiers::empty();
        let mut rest = spec;
        loop {
            if let Some(name) = rest.strip_prefix("K_") {
                let key = Key::from_name(name).ok_or_else(|| KeymapError::UnknownKey {
                    name: name.to_string(),
                    spec: spec.to_string(),
                })?;
                return Ok(Self { key, modifiers });
            }

            let Some((prefix, tail)) = rest.split_once('_') else {
                return Err(KeymapError::MissingKey(spec.to_string()));
            };
            modifiers |= match prefix {
                "shift" => Modifiers::SHIFT,
                "ctrl" => Modifiers::CTRL,
                "alt" => Modifiers::ALT,
                "meta" => Modifiers::META,
                _ => {
                    return Err(KeymapError::UnknownModifier {
                        modifier: prefix.to_string(),
                        spec: spec.to_string(),
                    });
                }
            };
            rest = tail;
        }
    }
}

/// Table from action names to the bindings that trigger them.
///
/// [`Keymap::default`] binds the four focus actions to the arrow keys and
/// their keypad equivalents. [`Keymap::empty`] starts with no bindings.
#[derive(Clone, Debug)]
pub struct Keymap {
    actions: HashMap<String, SmallVec<[KeyBinding; 2]>>,
}

impl Default for Keymap {
    fn default() -> Self {
        let mut keymap = Self::empty();
        for (action, keys) in [
            (FOCUS_LEFT, [Key::Left, Key::KeypadLeft]),
            (FOCUS_RIGHT, [Key::Right, Key::KeypadRight]),
            (FOCUS_UP, [Key::Up, Key::KeypadUp]),
            (FOCUS_DOWN, [Key::Down, Key::KeypadDown]),
        ] {
            for key in keys {
                keymap.bind(action, KeyBinding::new(key));
            }
        }
        keymap
    }
}

impl Keymap {
    /// A keymap with no bindings.
    pub fn empty() -> Self {
        Self {
            actions: HashMap::new(),
        }
    }

    /// Build a keymap from textual bindings.
    ///
    /// Actions not listed have no bindings.
    pub fn from_specs(entries: &[(&str, &[&str])]) -> Result<Self, KeymapError> {
        let mut keymap = Self::empty();
        for (action, specs) in entries {
            for spec in *specs {
                keymap.bind_spec(action, spec)?;
            }
        }
        Ok(keymap)
    }

    /// Add a binding for `action`.
    pub fn bind(&mut self, action: &str, binding: KeyBinding) {
        let bindings = self.actions.entry_ref(action).or_default();
        if !bindings.contains(&binding) {
            bindings.push(binding);
        }
    }

    /// Parse `spec` and add it as a binding for `action`.
    ///
    /// The keymap is unchanged when parsing fails.
    pub fn bind_spec(&mut self, action: &str, spec: &str) -> Result<(), KeymapError> {
        let binding = spec.parse()?;
        self.bind(action, binding);
        Ok(())
    }

    /// Remove every binding for `action`.
    pub fn clear(&mut self, action: &str) {
        self.actions.remove(action);
    }

    /// Bindings currently attached to `action`.
    pub fn bindings(&self, action: &str) -> &[KeyBinding] {
        match self.actions.get(action) {
            Some(bindings) => bindings.as_slice(),
            None => &[],
        }
    }

    /// Whether `event` triggers `action`.
    pub fn matches(&self, action: &str, event: &KeyEvent) -> bool {
        self.bindings(action).iter().any(|b| b.matches(event))
    }
}
