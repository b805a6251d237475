// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Widget fixture shared by the unit tests.

use alloc::rc::Rc;
use core::cell::Cell;

use crate::types::{FocusSymbol, NameKey};
use crate::widget::Focusable;

/// Last notification a [`TestWidget`] received.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Seen {
    Nothing,
    Focused { default: bool },
    Unfocused,
}

#[derive(Debug)]
pub(crate) struct TestWidget {
    pub(crate) label: &'static str,
    default: bool,
    key: Cell<Option<NameKey>>,
    last: Cell<Seen>,
    focus_calls: Cell<u32>,
    unfocus_calls: Cell<u32>,
}

impl TestWidget {
    pub(crate) fn new(label: &'static str) -> Rc<Self> {
        Rc::new(Self::build(label, false))
    }

    pub(crate) fn new_default(label: &'static str) -> Rc<Self> {
        Rc::new(Self::build(label, true))
    }

    fn build(label: &'static str, default: bool) -> Self {
        Self {
            label,
            default,
            key: Cell::new(None),
            last: Cell::new(Seen::Nothing),
            focus_calls: Cell::new(0),
            unfocus_calls: Cell::new(0),
        }
    }

    pub(crate) fn last(&self) -> Seen {
        self.last.get()
    }

    pub(crate) fn focus_calls(&self) -> u32 {
        self.focus_calls.get()
    }

    pub(crate) fn unfocus_calls(&self) -> u32 {
        self.unfocus_calls.get()
    }
}

impl Focusable for TestWidget {
    fn focus(&self, default: bool) {
        self.focus_calls.set(self.focus_calls.get() + 1);
        self.last.set(Seen::Focused { default });
    }

    fn unfocus(&self) {
        self.unfocus_calls.set(self.unfocus_calls.get() + 1);
        self.last.set(Seen::Unfocused);
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

pub(crate) fn sym(n: u64) -> Option<FocusSymbol> {
    Some(FocusSymbol(n))
}
