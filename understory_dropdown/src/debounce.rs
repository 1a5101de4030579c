// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host-clocked debounce timer.
//!
//! ## Semantics
//!
//! A [`Debounce`] holds at most one pending deadline. Each [`Debounce::schedule`]
//! replaces it with `now + delay`, so only the last request in a burst fires,
//! one delay after that request. Nothing runs on its own: the host passes the
//! current time to [`Debounce::fire_if_due`] (usually through
//! [`Dropdown::advance`](crate::dropdown::Dropdown::advance)).
//!
//! Time is a [`Duration`] since an epoch chosen by the host; it only needs to be
//! monotonic.
//!
//! ```
//! use core::time::Duration;
//! use understory_dropdown::debounce::Debounce;
//!
//! let ms = Duration::from_millis;
//! let mut d = Debounce::new(ms(100));
//! d.schedule(ms(0), 0);
//! d.schedule(ms(60), 1);
//! assert!(!d.fire_if_due(ms(120)));
//! assert!(d.fire_if_due(ms(160)));
//! assert!(!d.is_pending());
//! ```

use core::time::Duration;

/// A scheduled firing.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd)]
pub struct Pending {
    /// When the timer becomes due.
    pub deadline: Duration,
    /// Scheduling order, used to break deadline ties across timers.
    pub seq: u64,
}

/// A single debounced timer.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Debounce {
    delay: Duration,
    pending: Option<Pending>,
}

impl Debounce {
    /// Create an idle timer with the given quiet period.
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// The quiet period.
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// (Re)start the timer at `now`, replacing any pending firing.
    pub fn schedule(&mut self, now: Duration, seq: u64) {
        self.pending = Some(Pending {
            deadline: now.saturating_add(self.delay),
            seq,
        });
    }

    /// Drop the pending firing. Returns true if one was pending.
    pub fn cancel(&mut self) -> bool {
        self.pending.take().is_some()
    }

    /// The pending firing, if any.
    pub fn pending(&self) -> Option<Pending> {
        self.pending
    }

    /// Returns true if a firing is pending.
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Returns true if the pending firing is due at `now`.
    pub fn is_due(&self, now: Duration) -> bool {
        self.pending.is_some_and(|p| p.deadline <= now)
    }

    /// Consume the pending firing if it is due at `now`.
    pub fn fire_if_due(&mut self, now: Duration) -> bool {
        if self.is_due(now) {
            self.pending = None;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn fires_once_after_delay() {
        let mut d = Debounce::new(ms(400));
        d.schedule(ms(10), 0);
        assert!(!d.fire_if_due(ms(409)));
        assert!(d.fire_if_due(ms(410)));
        assert!(!d.fire_if_due(ms(10_000)));
    }

    #[test]
    fn reschedule_restarts_window() {
        let mut d = Debounce::new(ms(400));
        d.schedule(ms(0), 0);
        d.schedule(ms(300), 1);
        assert_eq!(
            d.pending(),
            Some(Pending {
                deadline: ms(700),
                seq: 1
            })
        );
        assert!(!d.is_due(ms(400)));
        assert!(d.is_due(ms(700)));
    }

    #[test]
    fn cancel_reports_pending() {
        let mut d = Debounce::new(ms(5));
        assert!(!d.cancel());
        d.schedule(ms(0), 0);
        assert!(d.cancel());
        assert!(!d.is_pending());
    }

    #[test]
    fn zero_delay_is_due_immediately() {
        let mut d = Debounce::new(Duration::ZERO);
        d.schedule(ms(42), 3);
        assert!(d.fire_if_due(ms(42)));
    }

    #[test]
    fn deadline_saturates() {
        let mut d = Debounce::new(ms(1));
        d.schedule(Duration::MAX, 0);
        assert_eq!(d.pending().map(|p| p.deadline), Some(Duration::MAX));
    }
}
