// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors returned by the dropdown.

use thiserror::Error;

/// Failures from constructing or tearing down a [`Dropdown`](crate::dropdown::Dropdown).
///
/// Construction validates the [`Region`](crate::types::Region) against the host
/// tree and fails fast instead of binding to a malformed layout.
#[derive(Copy, Clone, Debug, Error, Eq, PartialEq)]
pub enum DropdownError {
    /// `trigger` and `menu` name the same element.
    #[error("trigger and menu must be distinct elements")]
    SharedTriggerAndMenu,
    /// `trigger` is not the root or one of its descendants.
    #[error("trigger is not inside the dropdown root")]
    TriggerOutsideRoot,
    /// `menu` is not the root or one of its descendants.
    #[error("menu is not inside the dropdown root")]
    MenuOutsideRoot,
    /// `trigger` sits inside `menu`.
    #[error("trigger must not be nested inside the menu")]
    TriggerInsideMenu,
    /// `menu` sits inside `trigger`.
    #[error("menu must not be nested inside the trigger")]
    MenuInsideTrigger,
    /// The dropdown was already destroyed.
    #[error("dropdown has been destroyed")]
    Destroyed,
}
