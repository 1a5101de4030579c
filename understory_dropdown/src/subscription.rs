// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Listener subscription owned by one dropdown.
//!
//! A dropdown acquires its listeners when constructed and releases exactly
//! those ids when destroyed. Nothing is shared between instances, so two
//! dropdowns on the same document can be torn down independently.

use alloc::vec::Vec;

use crate::options::OpenTrigger;
use crate::types::{Binding, EventKind, ListenerId, Listeners, Region, Scope};

/// The listener set a dropdown needs for the given mode.
///
/// Activation is always bound on the trigger, the menu, and the document (for
/// outside dismissal). Hover mode adds enter/leave on the trigger and menu.
pub fn bindings_for<K: Copy>(region: &Region<K>, mode: OpenTrigger) -> Vec<Binding<K>> {
    let mut out = Vec::with_capacity(7);
    let node = |k: K, kind| Binding {
        scope: Scope::Node(k),
        kind,
    };
    if mode == OpenTrigger::Hover {
        for k in [region.trigger, region.menu] {
            out.push(node(k, EventKind::PointerEnter));
            out.push(node(k, EventKind::PointerLeave));
        }
    }
    out.push(node(region.trigger, EventKind::Activate));
    out.push(node(region.menu, EventKind::Activate));
    out.push(Binding {
        scope: Scope::Document,
        kind: EventKind::Activate,
    });
    out
}

/// Listener ids held by one dropdown.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Subscription {
    ids: Vec<ListenerId>,
    released: bool,
}

impl Subscription {
    /// Register every binding with `listeners`.
    pub fn acquire<K, L>(listeners: &mut L, bindings: impl IntoIterator<Item = Binding<K>>) -> Self
    where
        L: Listeners<K> + ?Sized,
    {
        let ids: Vec<_> = bindings.into_iter().map(|b| listeners.listen(b)).collect();
        tracing::debug!(count = ids.len(), "acquired dropdown listeners");
        Self {
            ids,
            released: false,
        }
    }

    /// Ids currently held.
    pub fn ids(&self) -> &[ListenerId] {
        &self.ids
    }

    /// Returns true once [`Subscription::release`] has run.
    pub fn is_released(&self) -> bool {
        self.released
    }

    /// Unregister every held id. Returns how many the host actually removed.
    ///
    /// Releasing twice is harmless; the second call removes nothing.
    pub fn release<K, L>(&mut self, listeners: &mut L) -> usize
    where
        L: Listeners<K> + ?Sized,
    {
        let removed = self
            .ids
            .drain(..)
            .filter(|id| listeners.unlisten(*id))
            .count();
        self.released = true;
        tracing::debug!(removed, "released dropdown listeners");
        removed
    }
}
