// Copyright 2026 the Underscroll Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=underscroll_cell --heading-base-level=0

//! Underscroll Cell: observable value holders for frame-driven effects.
//!
//! Scroll effects are wired as small dataflow graphs: a scroll offset cell
//! feeds a progress cell, which feeds transform cells that a renderer reads
//! each frame. This crate provides the holders and the two numeric filters
//! that sit between them:
//!
//! - [`ValueCell`]: a shared observable cell with `get`, `set`, and
//!   `subscribe`; `set` notifies subscribers synchronously.
//! - [`map_into`]: keeps a downstream cell synchronized with a function of
//!   an upstream cell (eager recompute on notification).
//! - [`Spring`]: a second-order smoother stepped with explicit frame time,
//!   used to soften the progress bar and the scroll-velocity signal.
//! - [`VelocityTracker`]: derives units/second from successive samples of a
//!   changing value.
//!
//! Everything is single-threaded and cooperative: a `set` runs every
//! subscriber to completion before returning, and nothing fires
//! spontaneously between explicit calls.
//!
//! ## Minimal example
//!
//! ```rust
//! use underscroll_cell::{ValueCell, map_into};
//!
//! let progress = ValueCell::new(0.0_f64);
//! let offset = ValueCell::new(0.0_f64);
//!
//! // Downstream cell: vertical offset is half the progress, in percent.
//! map_into(&progress, &offset, |p| p * 50.0);
//!
//! progress.set(0.5);
//! assert_eq!(offset.get(), 25.0);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod cell;
mod spring;
mod velocity;

pub use cell::{SubscriberId, ValueCell, map_into};
pub use spring::Spring;
pub use velocity::VelocityTracker;
