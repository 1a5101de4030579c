// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host-side helpers.
//!
//! [`arena`] is always available. Pointer tracking over `kurbo` rectangles is
//! enabled via the `pointer_adapter` feature to keep the core small and `no_std`
//! by default.

pub mod arena;

#[cfg(feature = "pointer_adapter")]
pub mod pointer;
