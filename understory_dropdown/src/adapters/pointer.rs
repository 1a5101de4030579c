// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer enter/leave synthesis from raw positions.
//!
//! ## Feature
//!
//! Enable with `pointer_adapter`.
//!
//! ## Notes
//!
//! Toolkits that only report pointer positions can use [`PointerTracker`] to
//! produce the enter/leave events hover mode needs. Each update emits leaves
//! first (menu, then trigger), then enters (trigger, then menu).

use alloc::vec::Vec;

use kurbo::{Point, Rect};

use crate::types::{DropdownEvent, Region};

/// World-space bounds of the trigger and menu.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct RegionBounds {
    /// Trigger bounds.
    pub trigger: Rect,
    /// Menu bounds. Use [`Rect::ZERO`] while the menu is hidden.
    pub menu: Rect,
}

/// Tracks whether the pointer is over the trigger and the menu.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct PointerTracker {
    in_trigger: bool,
    in_menu: bool,
}

impl PointerTracker {
    /// Pointer outside both regions.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the last position was over the trigger.
    pub fn in_trigger(&self) -> bool {
        self.in_trigger
    }

    /// Whether the last position was over the menu.
    pub fn in_menu(&self) -> bool {
        self.in_menu
    }

    /// Move the pointer to `pt` (or out of the window with `None`) and return
    /// the transitions as events targeting `region`'s trigger and menu.
    pub fn update<K: Copy>(
        &mut self,
        region: &Region<K>,
        bounds: &RegionBounds,
        pt: Option<Point>,
    ) -> Vec<DropdownEvent<K>> {
        let in_trigger = pt.is_some_and(|p| bounds.trigger.contains(p));
        let in_menu = pt.is_some_and(|p| bounds.menu.contains(p));

        let mut out = Vec::new();
        if self.in_menu && !in_menu {
            out.push(DropdownEvent::leave(region.menu));
        }
        if self.in_trigger && !in_trigger {
            out.push(DropdownEvent::leave(region.trigger));
        }
        if !self.in_trigger && in_trigger {
            out.push(DropdownEvent::enter(region.trigger));
        }
        if !self.in_menu && in_menu {
            out.push(DropdownEvent::enter(region.menu));
        }

        self.in_trigger = in_trigger;
        self.in_menu = in_menu;
        out
    }

    /// Pointer left the window: emit the pending leaves.
    pub fn clear<K: Copy>(&mut self, region: &Region<K>) -> Vec<DropdownEvent<K>> {
        self.update(region, &RegionBounds::default(), None)
    }
}
