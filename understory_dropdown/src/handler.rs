// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Callbacks invoked on open, close, and select.
//!
//! Implement [`DropdownHandler`] on your own type, use `()` for no callbacks,
//! or wrap closures with [`Callbacks`].

use alloc::boxed::Box;

use crate::dropdown::DropdownState;

/// Follow-up requested by [`DropdownHandler::on_select`].
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum SelectAction {
    /// Leave the menu as it is.
    #[default]
    Keep,
    /// Close the menu immediately.
    ///
    /// This is an ordinary immediate close: it is suppressed while the pointer
    /// is browsing the menu.
    Close,
}

/// Receives state transitions from a [`Dropdown`](crate::dropdown::Dropdown).
///
/// All methods run synchronously inside the operation that caused them and
/// default to doing nothing.
pub trait DropdownHandler<K> {
    /// The menu was opened.
    fn on_open(&mut self, state: &DropdownState<K>) {
        let _ = state;
    }

    /// The menu was closed.
    fn on_close(&mut self, state: &DropdownState<K>) {
        let _ = state;
    }

    /// A non-disabled item inside the menu was activated.
    fn on_select(&mut self, state: &DropdownState<K>, item: K) -> SelectAction {
        let _ = (state, item);
        SelectAction::Keep
    }
}

impl<K> DropdownHandler<K> for () {}

type StateFn<K> = Box<dyn FnMut(&DropdownState<K>)>;
type SelectFn<K> = Box<dyn FnMut(&DropdownState<K>, K) -> SelectAction>;

/// A [`DropdownHandler`] built from closures.
///
/// ```
/// use understory_dropdown::handler::{Callbacks, SelectAction};
///
/// let callbacks: Callbacks<u32> = Callbacks::new()
///     .on_open(|_| {})
///     .on_select(|_, _item| SelectAction::Close);
/// # let _ = callbacks;
/// ```
pub struct Callbacks<K> {
    on_open: Option<StateFn<K>>,
    on_close: Option<StateFn<K>>,
    on_select: Option<SelectFn<K>>,
}

impl<K> core::fmt::Debug for Callbacks<K> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Callbacks")
            .field("on_open", &self.on_open.is_some())
            .field("on_close", &self.on_close.is_some())
            .field("on_select", &self.on_select.is_some())
            .finish()
    }
}

impl<K> Default for Callbacks<K> {
    fn default() -> Self {
        Self {
            on_open: None,
            on_close: None,
            on_select: None,
        }
    }
}

impl<K> Callbacks<K> {
    /// No callbacks.
    pub fn new() -> Self {
        Self::default()
    }

    /// Called after the menu opens.
    #[must_use]
    pub fn on_open(mut self, f: impl FnMut(&DropdownState<K>) + 'static) -> Self {
        self.on_open = Some(Box::new(f));
        self
    }

    /// Called after the menu closes.
    #[must_use]
    pub fn on_close(mut self, f: impl FnMut(&DropdownState<K>) + 'static) -> Self {
        self.on_close = Some(Box::new(f));
        self
    }

    /// Called when an enabled item is activated.
    #[must_use]
    pub fn on_select(
        mut self,
        f: impl FnMut(&DropdownState<K>, K) -> SelectAction + 'static,
    ) -> Self {
        self.on_select = Some(Box::new(f));
        self
    }
}

impl<K> DropdownHandler<K> for Callbacks<K> {
    fn on_open(&mut self, state: &DropdownState<K>) {
        if let Some(f) = self.on_open.as_mut() {
            f(state);
        }
    }

    fn on_close(&mut self, state: &DropdownState<K>) {
        if let Some(f) = self.on_close.as_mut() {
            f(state);
        }
    }

    fn on_select(&mut self, state: &DropdownState<K>, item: K) -> SelectAction {
        match self.on_select.as_mut() {
            Some(f) => f(state, item),
            None => SelectAction::Keep,
        }
    }
}
