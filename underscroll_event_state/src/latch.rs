// Copyright 2026 the Underscroll Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Click-impact latch: a counter plus a self-resetting hit flag.
//!
//! ## Usage
//!
//! 1) On every click, call [`ImpactLatch::trigger`] with the current
//!    monotonic time.
//! 2) Poll the latch from the frame loop via [`ImpactLatch::poll`].
//! 3) Render the "impact" styling while [`ImpactLatch::is_hit`] is true and
//!    show [`ImpactLatch::count`] as the click total.
//!
//! Each trigger schedules its own independent reset timer. A second click
//! inside the reset window therefore does NOT extend the flag: the first
//! click's timer still fires on schedule and clears it, possibly well under
//! the full delay after the second click. This matches the observed page
//! behavior; whether the product wants a debounced flag instead is an open
//! question, so the overlap semantics are preserved rather than fixed.

use underscroll_timing::TimerQueue;

/// Reset delay applied after each trigger, in seconds.
const RESET_DELAY: f64 = 0.2;

/// A monotonically-increasing click counter with a transient impact flag.
///
/// Time is caller-owned and monotonic, in seconds; the latch never reads a
/// clock. The counter only resets with the latch itself (on page reload).
///
/// # Example
///
/// ```
/// use underscroll_event_state::latch::ImpactLatch;
///
/// let mut latch = ImpactLatch::new();
///
/// latch.trigger(0.0);
/// assert!(latch.is_hit());
/// assert_eq!(latch.count(), 1);
///
/// latch.poll(0.1);
/// assert!(latch.is_hit());
/// latch.poll(0.2);
/// assert!(!latch.is_hit());
/// ```
#[derive(Clone, Debug)]
pub struct ImpactLatch {
    count: u64,
    hit: bool,
    reset_delay: f64,
    timers: TimerQueue,
}

impl ImpactLatch {
    /// Creates a latch with the standard 200 ms reset delay.
    #[must_use]
    pub fn new() -> Self {
        Self {
            count: 0,
            hit: false,
            reset_delay: RESET_DELAY,
            timers: TimerQueue::new(),
        }
    }

    /// Overrides the reset delay.
    #[must_use]
    pub fn with_reset_delay(mut self, seconds: f64) -> Self {
        self.reset_delay = seconds;
        self
    }

    /// Registers a click at time `now`.
    ///
    /// Increments the counter, raises the impact flag, and schedules an
    /// independent reset at `now + reset_delay` without disturbing any
    /// pending reset.
    pub fn trigger(&mut self, now: f64) {
        self.count += 1;
        self.hit = true;
        self.timers.schedule(now + self.reset_delay);
    }

    /// Fires due reset timers at time `now`.
    ///
    /// Every fired timer clears the impact flag, even when a later reset is
    /// still pending (see the module docs on overlapping triggers).
    pub fn poll(&mut self, now: f64) {
        if !self.timers.poll(now).is_empty() {
            self.hit = false;
        }
    }

    /// Whether the impact flag is currently raised.
    #[must_use]
    pub fn is_hit(&self) -> bool {
        self.hit
    }

    /// Total number of triggers since the latch was created.
    #[must_use]
    pub fn count(&self) -> u64 {
        self.count
    }

    /// The configured reset delay, in seconds.
    #[must_use]
    pub fn reset_delay(&self) -> f64 {
        self.reset_delay
    }

    /// Number of reset timers still pending.
    #[must_use]
    pub fn pending_resets(&self) -> usize {
        self.timers.pending()
    }
}

impl Default for ImpactLatch {
    fn default() -> Self {
        Self::new()
    }
}
