// Copyright 2026 the Underscroll Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Frame clock: explicit-time fan-out to per-frame callbacks.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

/// Identifier for a registered tick callback.
///
/// Returned by [`FrameClock::on_tick`] and accepted by
/// [`FrameClock::cancel`]. Ids are never reused within one clock.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct TickerId(u64);

type TickFn = Box<dyn FnMut(f64)>;

/// Fans explicit frame-time advances out to registered callbacks.
///
/// The clock owns no real time source. A host (or a test) calls
/// [`FrameClock::advance`] once per frame with the elapsed seconds since the
/// previous frame; every registered callback receives that delta, in
/// registration order. Callbacks run to completion one after another on the
/// single logical thread.
pub struct FrameClock {
    tickers: Vec<(TickerId, TickFn)>,
    next_id: u64,
}

impl FrameClock {
    /// Creates an empty frame clock.
    #[must_use]
    pub fn new() -> Self {
        Self {
            tickers: Vec::new(),
            next_id: 0,
        }
    }

    /// Registers a per-frame callback and returns its id.
    ///
    /// The callback receives the elapsed seconds passed to
    /// [`Self::advance`].
    pub fn on_tick(&mut self, callback: impl FnMut(f64) + 'static) -> TickerId {
        let id = TickerId(self.next_id);
        self.next_id += 1;
        self.tickers.push((id, Box::new(callback)));
        id
    }

    /// Removes a registered callback.
    ///
    /// Returns `true` if the id was registered and is now removed.
    pub fn cancel(&mut self, id: TickerId) -> bool {
        let before = self.tickers.len();
        self.tickers.retain(|(tid, _)| *tid != id);
        self.tickers.len() != before
    }

    /// Advances the clock by `elapsed_seconds`, invoking every callback.
    ///
    /// Negative deltas are clamped to zero (callbacks still run; the update
    /// equations are well defined for a zero-length frame). Non-finite input
    /// is ignored entirely.
    pub fn advance(&mut self, elapsed_seconds: f64) {
        if !elapsed_seconds.is_finite() {
            return;
        }
        let dt = elapsed_seconds.max(0.0);
        for (_, tick) in &mut self.tickers {
            tick(dt);
        }
    }

    /// Returns the number of registered callbacks.
    #[must_use]
    pub fn ticker_count(&self) -> usize {
        self.tickers.len()
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for FrameClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FrameClock")
            .field("tickers", &self.tickers.len())
            .field("next_id", &self.next_id)
            .finish()
    }
}
