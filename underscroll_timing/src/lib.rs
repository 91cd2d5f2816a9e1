// Copyright 2026 the Underscroll Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=underscroll_timing --heading-base-level=0

//! Underscroll Timing: host-agnostic frame clock and timer queue.
//!
//! Scroll-driven effects have exactly three time sources: a per-frame
//! callback from the host render loop, asynchronous input events, and
//! one-shot delays. This crate covers the first and third without any real
//! clock or display loop, so drivers and tests advance time explicitly:
//!
//! - [`FrameClock`]: fans a single `advance(elapsed_seconds)` call out to
//!   registered tick callbacks, in registration order.
//! - [`TimerQueue`]: one-shot deadline timers polled against a caller-owned
//!   monotonic `now`, fired in deadline order.
//!
//! Both run on a single logical thread; callbacks run to completion before
//! the next fires, and no callback is ever invoked spontaneously.
//!
//! ## Minimal example
//!
//! ```rust
//! use underscroll_timing::{FrameClock, TimerQueue};
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! let mut clock = FrameClock::new();
//! let total = Rc::new(Cell::new(0.0));
//! let seen = total.clone();
//! clock.on_tick(move |dt| seen.set(seen.get() + dt));
//!
//! clock.advance(1.0 / 60.0);
//! clock.advance(1.0 / 60.0);
//! assert!((total.get() - 2.0 / 60.0).abs() < 1e-12);
//!
//! let mut timers = TimerQueue::new();
//! let reset = timers.schedule(0.2);
//! assert!(timers.poll(0.1).is_empty());
//! assert_eq!(timers.poll(0.25), vec![reset]);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod clock;
mod queue;

pub use clock::{FrameClock, TickerId};
pub use queue::{TimerId, TimerQueue};
