// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_dropdown --heading-base-level=0

//! Understory Dropdown: a headless, `no_std` dropdown/flyout controller.
//!
//! ## Overview
//!
//! A [`Dropdown`](crate::dropdown::Dropdown) owns the open/closed state of one
//! menu region and reacts to pointer and activation events on its trigger and
//! menu elements. It does not render, lay out, or hit test. The host toolkit
//! owns the element tree and exposes it through [`Surface`](crate::types::Surface);
//! the only visual effect is toggling the [`EXPANDED`](crate::types::Markers::EXPANDED)
//! marker on the region root, which styling can key off.
//!
//! ## Trigger modes
//!
//! - [`OpenTrigger::Click`](crate::options::OpenTrigger::Click): activating the
//!   trigger toggles the menu.
//! - [`OpenTrigger::Hover`](crate::options::OpenTrigger::Hover): entering the
//!   trigger opens after the debounce delay, leaving closes after it. While the
//!   pointer is inside the menu ("browsing") closing is suppressed.
//!
//! In both modes activating an element inside the menu selects it (unless it
//! carries [`DISABLED`](crate::types::Markers::DISABLED)), and activating
//! anything outside the region closes the menu immediately.
//!
//! ## Time
//!
//! Nothing runs on its own. Debounced requests record a deadline; the host
//! calls [`Dropdown::advance`](crate::dropdown::Dropdown::advance) with the
//! current time, and can ask [`Dropdown::next_deadline`](crate::dropdown::Dropdown::next_deadline)
//! when to wake up. Immediate operations (toggle, select, outside dismissal)
//! always complete inside the event that caused them.
//!
//! ## Listener lifecycle
//!
//! Construction registers the listeners the mode needs through
//! [`Listeners`](crate::types::Listeners), including one document-level
//! activation listener for outside dismissal.
//! [`Dropdown::destroy`](crate::dropdown::Dropdown::destroy) releases exactly
//! those registrations.
//!
//! ## Example
//!
//! ```
//! use core::time::Duration;
//! use understory_dropdown::adapters::arena::{ListenerTable, NodeArena};
//! use understory_dropdown::dropdown::Dropdown;
//! use understory_dropdown::options::{Config, OpenTrigger, Options};
//! use understory_dropdown::types::{DropdownEvent, Markers, Outcome, Region, Surface};
//!
//! let mut tree = NodeArena::new();
//! let root = tree.insert(None);
//! let trigger = tree.insert(Some(root));
//! let menu = tree.insert(Some(root));
//! let item = tree.insert(Some(menu));
//! let mut listeners = ListenerTable::new();
//!
//! let config = Config::new(Region { root, trigger, menu })
//!     .with_options(Options::new().with_open_trigger(OpenTrigger::Hover));
//! let mut dropdown = Dropdown::new(config, &tree, &mut listeners).unwrap();
//!
//! // Hover opens after the debounce delay.
//! let t0 = Duration::ZERO;
//! dropdown.handle_event(&mut tree, &DropdownEvent::enter(trigger), t0);
//! assert!(!dropdown.is_opened());
//! let due = dropdown.next_deadline().unwrap();
//! dropdown.advance(&mut tree, due);
//! assert!(dropdown.is_opened());
//! assert!(tree.has_marker(&root, Markers::EXPANDED));
//!
//! // Clicks inside the menu are consumed; outside clicks dismiss at once.
//! let outcome = dropdown.handle_event(&mut tree, &DropdownEvent::activate(item), due);
//! assert_eq!(outcome, Outcome::Stop);
//! dropdown.handle_event(&mut tree, &DropdownEvent::activate(root), due);
//! assert!(!dropdown.is_opened());
//!
//! assert_eq!(dropdown.destroy(&mut listeners), Ok(7));
//! ```
//!
//! ## Features
//!
//! - `std`: enable `std` in dependencies that support it.
//! - `serde`: (de)serialize [`Options`](crate::options::Options).
//! - `pointer_adapter`: [`PointerTracker`](crate::adapters::pointer::PointerTracker),
//!   which turns pointer positions over `kurbo` rectangles into enter/leave events.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod adapters;
pub mod debounce;
pub mod dropdown;
pub mod error;
pub mod handler;
pub mod options;
pub mod subscription;
pub mod types;
