// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The dropdown controller.
//!
//! ## Transitions
//!
//! Only [`Dropdown::open_now`] and [`Dropdown::close_now`] change the opened
//! flag. Both are idempotent, and closing is suppressed while the pointer is
//! browsing the menu. [`Dropdown::open`] and [`Dropdown::close`] are debounced
//! requests for the same transitions, committed by [`Dropdown::advance`].
//!
//! ## Routing
//!
//! [`Dropdown::handle_event`] classifies the target into a [`Zone`] and maps
//! `(EventKind, Zone)` to an action:
//!
//! | Event          | Trigger                  | Menu                              | Outside      |
//! |----------------|--------------------------|-----------------------------------|--------------|
//! | pointer-enter  | debounced open (hover)   | start browsing (hover)            | –            |
//! | pointer-leave  | debounced close (hover)  | stop browsing, debounced close    | –            |
//! | activate       | stop, toggle             | stop, select target               | close now    |

use core::time::Duration;

use crate::debounce::Debounce;
use crate::error::DropdownError;
use crate::handler::{DropdownHandler, SelectAction};
use crate::options::{Config, OpenTrigger, Options};
use crate::subscription::{Subscription, bindings_for};
use crate::types::{DropdownEvent, EventKind, Listeners, Markers, Outcome, Region, Surface, Zone};

/// Observable state of one dropdown, handed to every callback.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DropdownState<K> {
    region: Region<K>,
    options: Options,
    opened: bool,
    browsing: bool,
}

impl<K: Copy> DropdownState<K> {
    /// Whether the menu is currently shown.
    pub fn is_opened(&self) -> bool {
        self.opened
    }

    /// Whether the pointer is currently inside the menu.
    pub fn is_browsing(&self) -> bool {
        self.browsing
    }

    /// Elements this dropdown controls.
    pub fn region(&self) -> Region<K> {
        self.region
    }

    /// Activation mode.
    pub fn open_trigger(&self) -> OpenTrigger {
        self.options.open_trigger
    }

    /// Quiet period for debounced transitions.
    pub fn debounce_delay(&self) -> Duration {
        self.options.debounce_delay
    }
}

/// Headless dropdown controller.
///
/// ## Usage
///
/// - Construct with [`Dropdown::new`], which validates the region, reads the
///   initial opened state from the root's [`Markers::EXPANDED`] marker, and
///   registers listeners for the configured [`OpenTrigger`].
/// - Feed host events to [`Dropdown::handle_event`] and honor the returned
///   [`Outcome`].
/// - Call [`Dropdown::advance`] when [`Dropdown::next_deadline`] is reached to
///   commit debounced transitions.
/// - Call [`Dropdown::destroy`] to release listeners.
pub struct Dropdown<K, H = ()> {
    state: DropdownState<K>,
    handler: H,
    open_timer: Debounce,
    close_timer: Debounce,
    seq: u64,
    subscription: Subscription,
}

impl<K: Copy + core::fmt::Debug, H> core::fmt::Debug for Dropdown<K, H> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Dropdown")
            .field("state", &self.state)
            .field("open_timer", &self.open_timer)
            .field("close_timer", &self.close_timer)
            .field("subscription", &self.subscription)
            .finish_non_exhaustive()
    }
}

impl<K: Copy + Eq + core::fmt::Debug, H: DropdownHandler<K>> Dropdown<K, H> {
    /// Validate the region, bootstrap state from the surface, and bind listeners.
    pub fn new<S, L>(
        config: Config<K, H>,
        surface: &S,
        listeners: &mut L,
    ) -> Result<Self, DropdownError>
    where
        S: Surface<K> + ?Sized,
        L: Listeners<K> + ?Sized,
    {
        let Config {
            region,
            options,
            handler,
        } = config;
        validate_region(&region, surface)?;

        let opened = surface.has_marker(&region.root, Markers::EXPANDED);
        let subscription =
            Subscription::acquire(listeners, bindings_for(&region, options.open_trigger));
        tracing::debug!(
            ?region,
            mode = ?options.open_trigger,
            delay = ?options.debounce_delay,
            opened,
            "dropdown bound"
        );

        Ok(Self {
            state: DropdownState {
                region,
                options,
                opened,
                browsing: false,
            },
            handler,
            open_timer: Debounce::new(options.debounce_delay),
            close_timer: Debounce::new(options.debounce_delay),
            seq: 0,
            subscription,
        })
    }

    /// Current state.
    pub fn state(&self) -> &DropdownState<K> {
        &self.state
    }

    /// Whether the menu is currently shown.
    pub fn is_opened(&self) -> bool {
        self.state.opened
    }

    /// Whether the pointer is currently inside the menu.
    pub fn is_browsing(&self) -> bool {
        self.state.browsing
    }

    /// The callback handler.
    pub fn handler(&self) -> &H {
        &self.handler
    }

    /// Mutable access to the callback handler.
    pub fn handler_mut(&mut self) -> &mut H {
        &mut self.handler
    }

    /// Returns true once [`Dropdown::destroy`] has run.
    pub fn is_destroyed(&self) -> bool {
        self.subscription.is_released()
    }

    /// Request a debounced open at `now`.
    ///
    /// Restarts the open timer; only the last request in a burst commits.
    /// Does not affect a pending close.
    pub fn open(&mut self, now: Duration) {
        if self.inert("open") {
            return;
        }
        let seq = self.next_seq();
        self.open_timer.schedule(now, seq);
        tracing::trace!(?now, "open scheduled");
    }

    /// Request a debounced close at `now`.
    ///
    /// Restarts the close timer; only the last request in a burst commits.
    /// Does not affect a pending open.
    pub fn close(&mut self, now: Duration) {
        if self.inert("close") {
            return;
        }
        let seq = self.next_seq();
        self.close_timer.schedule(now, seq);
        tracing::trace!(?now, "close scheduled");
    }

    /// Open immediately. Returns true if the state changed.
    pub fn open_now<S: Surface<K> + ?Sized>(&mut self, surface: &mut S) -> bool {
        if self.state.opened {
            return false;
        }
        self.state.opened = true;
        surface.set_marker(&self.state.region.root, Markers::EXPANDED, true);
        tracing::debug!(root = ?self.state.region.root, "dropdown opened");
        self.handler.on_open(&self.state);
        true
    }

    /// Close immediately. Returns true if the state changed.
    ///
    /// No-op while closed, and while the pointer is browsing the menu.
    pub fn close_now<S: Surface<K> + ?Sized>(&mut self, surface: &mut S) -> bool {
        if !self.state.opened {
            return false;
        }
        if self.state.browsing {
            tracing::trace!("close suppressed while browsing");
            return false;
        }
        surface.set_marker(&self.state.region.root, Markers::EXPANDED, false);
        self.state.opened = false;
        tracing::debug!(root = ?self.state.region.root, "dropdown closed");
        self.handler.on_close(&self.state);
        true
    }

    /// Flip between opened and closed without debouncing.
    ///
    /// Returns the opened flag afterwards; closing is still subject to
    /// browse suppression.
    pub fn toggle<S: Surface<K> + ?Sized>(&mut self, surface: &mut S) -> bool {
        if self.state.opened {
            self.close_now(surface);
        } else {
            self.open_now(surface);
        }
        self.state.opened
    }

    /// Report `item` as selected unless it carries [`Markers::DISABLED`].
    ///
    /// Returns true if the handler was invoked. Selecting does not close the
    /// menu unless the handler returns [`SelectAction::Close`].
    pub fn select<S: Surface<K> + ?Sized>(&mut self, surface: &mut S, item: K) -> bool {
        if surface.has_marker(&item, Markers::DISABLED) {
            tracing::trace!(?item, "ignored disabled item");
            return false;
        }
        tracing::debug!(?item, "item selected");
        if self.handler.on_select(&self.state, item) == SelectAction::Close {
            self.close_now(surface);
        }
        true
    }

    /// The pointer entered the menu.
    pub fn browse(&mut self) {
        self.state.browsing = true;
    }

    /// The pointer left the menu.
    pub fn end_browse(&mut self) {
        self.state.browsing = false;
    }

    /// Where `target` sits relative to this dropdown's region.
    ///
    /// The trigger is checked first, then the menu.
    pub fn classify<S: Surface<K> + ?Sized>(&self, surface: &S, target: &K) -> Zone {
        let region = &self.state.region;
        if surface.contains(&region.trigger, target) {
            Zone::Trigger
        } else if surface.contains(&region.menu, target) {
            Zone::Menu
        } else {
            Zone::Outside
        }
    }

    /// Route a host event and return whether the host should keep propagating it.
    ///
    /// Deliver each event once per dropdown, whether it arrived through a node
    /// listener or the document listener. After [`Dropdown::destroy`] this does
    /// nothing and returns [`Outcome::Continue`].
    pub fn handle_event<S: Surface<K> + ?Sized>(
        &mut self,
        surface: &mut S,
        event: &DropdownEvent<K>,
        now: Duration,
    ) -> Outcome {
        if self.inert("handle_event") {
            return Outcome::Continue;
        }
        let zone = self.classify(&*surface, &event.target);
        let hover = self.state.options.open_trigger == OpenTrigger::Hover;
        tracing::trace!(kind = ?event.kind, ?zone, target = ?event.target, "routing event");

        match (event.kind, zone) {
            (EventKind::PointerEnter, Zone::Trigger) if hover => self.open(now),
            (EventKind::PointerEnter, Zone::Menu) if hover => self.browse(),
            (EventKind::PointerLeave, Zone::Trigger) if hover => self.close(now),
            (EventKind::PointerLeave, Zone::Menu) if hover => {
                self.end_browse();
                self.close(now);
            }
            (EventKind::Activate, Zone::Trigger) => {
                self.toggle(surface);
                return Outcome::Stop;
            }
            (EventKind::Activate, Zone::Menu) => {
                self.select(surface, event.target);
                return Outcome::Stop;
            }
            (EventKind::Activate, Zone::Outside) => {
                self.close_now(surface);
            }
            _ => {}
        }
        Outcome::Continue
    }

    /// Commit debounced transitions that are due at `now`.
    ///
    /// Due timers fire in deadline order, ties in scheduling order. Returns how
    /// many fired (a fired close may still be suppressed by browsing).
    pub fn advance<S: Surface<K> + ?Sized>(&mut self, surface: &mut S, now: Duration) -> usize {
        let mut fired = 0;
        loop {
            let open_due = self
                .open_timer
                .pending()
                .filter(|_| self.open_timer.is_due(now));
            let close_due = self
                .close_timer
                .pending()
                .filter(|_| self.close_timer.is_due(now));
            let fire_open = match (open_due, close_due) {
                (Some(o), Some(c)) => o < c,
                (Some(_), None) => true,
                (None, Some(_)) => false,
                (None, None) => break,
            };
            let timer = if fire_open {
                &mut self.open_timer
            } else {
                &mut self.close_timer
            };
            if !timer.fire_if_due(now) {
                break;
            }
            if fire_open {
                tracing::trace!(?now, "debounced open fired");
                self.open_now(surface);
            } else {
                tracing::trace!(?now, "debounced close fired");
                self.close_now(surface);
            }
            fired += 1;
        }
        fired
    }

    /// Earliest pending deadline, for scheduling the next [`Dropdown::advance`].
    pub fn next_deadline(&self) -> Option<Duration> {
        let open = self.open_timer.pending().map(|p| p.deadline);
        let close = self.close_timer.pending().map(|p| p.deadline);
        match (open, close) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    /// Drop pending debounced transitions. Returns true if any were pending.
    pub fn cancel_pending(&mut self) -> bool {
        let open = self.open_timer.cancel();
        let close = self.close_timer.cancel();
        open || close
    }

    /// Release this dropdown's listeners and make it inert.
    ///
    /// Returns how many listeners the host removed. A second call returns
    /// [`DropdownError::Destroyed`] and leaves `listeners` untouched.
    pub fn destroy<L: Listeners<K> + ?Sized>(
        &mut self,
        listeners: &mut L,
    ) -> Result<usize, DropdownError> {
        if self.subscription.is_released() {
            return Err(DropdownError::Destroyed);
        }
        self.cancel_pending();
        let removed = self.subscription.release::<K, L>(listeners);
        tracing::debug!(root = ?self.state.region.root, removed, "dropdown destroyed");
        Ok(removed)
    }

    fn next_seq(&mut self) -> u64 {
        let seq = self.seq;
        self.seq = self.seq.wrapping_add(1);
        seq
    }

    fn inert(&self, op: &'static str) -> bool {
        let destroyed = self.subscription.is_released();
        if destroyed {
            tracing::warn!(op, "dropdown used after destroy");
        }
        destroyed
    }
}

fn validate_region<K, S>(region: &Region<K>, surface: &S) -> Result<(), DropdownError>
where
    K: Copy + Eq,
    S: Surface<K> + ?Sized,
{
    if region.trigger == region.menu {
        return Err(DropdownError::SharedTriggerAndMenu);
    }
    if !surface.contains(&region.root, &region.trigger) {
        return Err(DropdownError::TriggerOutsideRoot);
    }
    if !surface.contains(&region.root, &region.menu) {
        return Err(DropdownError::MenuOutsideRoot);
    }
    if surface.contains(&region.menu, &region.trigger) {
        return Err(DropdownError::TriggerInsideMenu);
    }
    if surface.contains(&region.trigger, &region.menu) {
        return Err(DropdownError::MenuInsideTrigger);
    }
    Ok(())
}
