// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core types for the dropdown: regions, markers, events, zones, and host seams.
//!
//! ## Overview
//!
//! The controller never owns UI elements. Hosts name elements with a node key `K`
//! and expose their tree through [`Surface`], and their event registry through
//! [`Listeners`]. Both are borrowed per call by
//! [`Dropdown`](crate::dropdown::Dropdown).

use bitflags::bitflags;

bitflags! {
    /// Boolean presentation markers the controller reads or writes on host nodes.
    #[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
    pub struct Markers: u8 {
        /// The region is expanded; set on [`Region::root`] while the menu is open.
        const EXPANDED = 1 << 0;
        /// The item cannot be selected.
        const DISABLED = 1 << 1;
    }
}

/// The element triple controlled by one dropdown.
///
/// `trigger` and `menu` are expected to sit inside `root`; this is checked when
/// the dropdown is constructed.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Region<K> {
    /// Element that carries the [`Markers::EXPANDED`] marker.
    pub root: K,
    /// Element whose activation (click or hover) controls visibility.
    pub trigger: K,
    /// Element containing the selectable items.
    pub menu: K,
}

/// Logical event kinds consumed by the dropdown.
///
/// Platform event names (e.g. `mouseenter`, `click`, `touchend`) map onto these.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum EventKind {
    /// Pointer entered the target element.
    PointerEnter,
    /// Pointer left the target element.
    PointerLeave,
    /// The target element was activated (clicked, tapped, ...).
    Activate,
}

/// An event delivered to [`Dropdown::handle_event`](crate::dropdown::Dropdown::handle_event).
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct DropdownEvent<K> {
    /// What happened.
    pub kind: EventKind,
    /// The innermost element the event happened on.
    pub target: K,
}

impl<K> DropdownEvent<K> {
    /// Pointer-enter on `target`.
    pub fn enter(target: K) -> Self {
        Self {
            kind: EventKind::PointerEnter,
            target,
        }
    }

    /// Pointer-leave on `target`.
    pub fn leave(target: K) -> Self {
        Self {
            kind: EventKind::PointerLeave,
            target,
        }
    }

    /// Activation on `target`.
    pub fn activate(target: K) -> Self {
        Self {
            kind: EventKind::Activate,
            target,
        }
    }
}

/// Where an event target sits relative to a [`Region`].
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Zone {
    /// The trigger or one of its descendants.
    Trigger,
    /// The menu or one of its descendants.
    Menu,
    /// Anywhere else.
    Outside,
}

/// Propagation decision returned from event handling.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Outcome {
    /// The host may keep propagating the event.
    Continue,
    /// The dropdown consumed the event; stop propagation so document-level
    /// listeners do not see it.
    Stop,
}

/// Where a listener is attached.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Scope<K> {
    /// A specific element.
    Node(K),
    /// The whole document, used for outside-click dismissal.
    Document,
}

/// A listener registration request.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Binding<K> {
    /// Where to listen.
    pub scope: Scope<K>,
    /// What to listen for.
    pub kind: EventKind,
}

/// Opaque handle for a listener registered through [`Listeners::listen`].
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct ListenerId(pub u64);

/// Read and mark host elements.
///
/// Implement this for your toolkit's element tree.
/// [`NodeArena`](crate::adapters::arena::NodeArena) is a small in-memory implementation.
pub trait Surface<K> {
    /// Returns the parent of `node`, or `None` if `node` is a root.
    fn parent_of(&self, node: &K) -> Option<K>;

    /// Returns the markers currently set on `node`.
    fn markers(&self, node: &K) -> Markers;

    /// Set (`on == true`) or clear the given markers on `node`.
    fn set_marker(&mut self, node: &K, marker: Markers, on: bool);

    /// Returns true if every marker in `marker` is set on `node`.
    fn has_marker(&self, node: &K, marker: Markers) -> bool {
        self.markers(node).contains(marker)
    }

    /// Returns true if `node` is `ancestor` or one of its descendants.
    fn contains(&self, ancestor: &K, node: &K) -> bool
    where
        K: Copy + Eq,
    {
        let mut cur = Some(*node);
        while let Some(n) = cur {
            if n == *ancestor {
                return true;
            }
            cur = self.parent_of(&n);
        }
        false
    }
}

/// Register and release event listeners with the host.
///
/// The dropdown acquires its listeners when constructed and releases exactly
/// those when destroyed; see [`Subscription`](crate::subscription::Subscription).
pub trait Listeners<K> {
    /// Register a listener and return its handle.
    fn listen(&mut self, binding: Binding<K>) -> ListenerId;

    /// Release a listener. Returns false if `id` was not registered.
    fn unlisten(&mut self, id: ListenerId) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Chain;

    // 1 → 2 → 3, 4 is a root.
    impl Surface<u32> for Chain {
        fn parent_of(&self, node: &u32) -> Option<u32> {
            match node {
                3 => Some(2),
                2 => Some(1),
                _ => None,
            }
        }

        fn markers(&self, node: &u32) -> Markers {
            if *node == 3 {
                Markers::DISABLED
            } else {
                Markers::empty()
            }
        }

        fn set_marker(&mut self, _node: &u32, _marker: Markers, _on: bool) {}
    }

    #[test]
    fn contains_is_ancestor_or_self() {
        let s = Chain;
        assert!(s.contains(&1, &3));
        assert!(s.contains(&2, &2));
        assert!(!s.contains(&3, &1));
        assert!(!s.contains(&4, &3));
    }

    #[test]
    fn has_marker_checks_all_bits() {
        let s = Chain;
        assert!(s.has_marker(&3, Markers::DISABLED));
        assert!(!s.has_marker(&3, Markers::DISABLED | Markers::EXPANDED));
        assert!(!s.has_marker(&2, Markers::DISABLED));
    }

    #[test]
    fn event_constructors_set_kind() {
        assert_eq!(DropdownEvent::enter(5).kind, EventKind::PointerEnter);
        assert_eq!(DropdownEvent::leave(5).kind, EventKind::PointerLeave);
        assert_eq!(DropdownEvent::activate(5).target, 5);
    }
}
