// Copyright 2026 the Underscroll Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=underscroll_marquee --heading-base-level=0

//! Underscroll Marquee: the continuously-advancing looped band driver.
//!
//! A marquee band scrolls sideways forever at a base speed, biased by how
//! fast the user is scrolling: scrolling down speeds it up, scrolling up
//! reverses it. [`MarqueeDriver`] holds the band's unbounded position and a
//! signed direction, advanced once per frame:
//!
//! ```text
//! move_by = direction * base_velocity * delta
//! if velocity_factor < 0 { direction = -1 }
//! else if velocity_factor > 0 { direction = +1 }
//! move_by += direction * move_by * velocity_factor
//! position += move_by
//! ```
//!
//! `velocity_factor` is the smoothed, scaled scroll velocity — see the
//! unclamped [`underscroll_map::PiecewiseLinear`] mapping and
//! `underscroll_cell::Spring`. The raw position grows without bound; the
//! display offset is [`underscroll_map::wrap`]ped into a fixed percentage
//! interval at read time, which is what makes the band loop seamlessly.
//!
//! ## Minimal example
//!
//! ```rust
//! use underscroll_marquee::MarqueeDriver;
//!
//! let mut band = MarqueeDriver::new(-5.0);
//! for _ in 0..600 {
//!     band.tick(1.0 / 60.0, 0.0);
//! }
//! let shown = band.offset_percent().value();
//! assert!((-45.0..-20.0).contains(&shown));
//! ```
//!
//! This crate is `no_std`.

#![no_std]

use underscroll_map::{Percent, wrap};

/// Default wrap interval for the display offset, in percent.
///
/// A band rendered as four copies of its content loops seamlessly when the
/// offset stays within one copy's width; this pair reproduces the original
/// band geometry.
const DEFAULT_WRAP: (f64, f64) = (-20.0, -45.0);

/// Drives a continuously-scrolling looped band.
///
/// `base_velocity` is the steady advance in percent-of-band per second; a
/// negative value scrolls the band the other way. The per-frame
/// `velocity_factor` biases both speed and direction, with a one-frame lag
/// on reversals: the frame that flips the direction still applies its bias
/// to the motion computed under the old direction. That lag is part of the
/// observed behavior and is preserved.
#[derive(Clone, Debug, PartialEq)]
pub struct MarqueeDriver {
    base_velocity: f64,
    wrap_min: f64,
    wrap_max: f64,
    direction: f64,
    position: f64,
}

impl MarqueeDriver {
    /// Creates a driver with the given base velocity and the default wrap
    /// interval.
    #[must_use]
    pub fn new(base_velocity: f64) -> Self {
        Self {
            base_velocity,
            wrap_min: DEFAULT_WRAP.0,
            wrap_max: DEFAULT_WRAP.1,
            direction: 1.0,
            position: 0.0,
        }
    }

    /// Overrides the wrap interval for the display offset.
    #[must_use]
    pub fn with_wrap_range(mut self, min: f64, max: f64) -> Self {
        self.wrap_min = min;
        self.wrap_max = max;
        self
    }

    /// Advances the band by one frame.
    ///
    /// `delta_seconds` is the elapsed frame time; `velocity_factor` the
    /// smoothed, scaled scroll velocity (zero when idle). A zero delta or
    /// factor is well defined: the band advances by its base motion only.
    pub fn tick(&mut self, delta_seconds: f64, velocity_factor: f64) {
        let mut move_by = self.direction * self.base_velocity * delta_seconds;
        if velocity_factor < 0.0 {
            self.direction = -1.0;
        } else if velocity_factor > 0.0 {
            self.direction = 1.0;
        }
        move_by += self.direction * move_by * velocity_factor;
        self.position += move_by;
    }

    /// The display offset, wrapped into the configured interval.
    #[must_use]
    pub fn offset_percent(&self) -> Percent {
        Percent(wrap(self.wrap_min, self.wrap_max, self.position))
    }

    /// The unbounded raw position.
    ///
    /// Only the wrapped offset is ever displayed; the raw accumulator is
    /// allowed to grow for the life of the session.
    #[must_use]
    pub fn raw_position(&self) -> f64 {
        self.position
    }

    /// The current direction factor, `+1.0` or `-1.0`.
    #[must_use]
    pub fn direction(&self) -> f64 {
        self.direction
    }

    /// Snapshot of the driver state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> MarqueeDebugInfo {
        MarqueeDebugInfo {
            base_velocity: self.base_velocity,
            direction: self.direction,
            position: self.position,
            offset_percent: self.offset_percent().value(),
            wrap_range: (self.wrap_min, self.wrap_max),
        }
    }
}

/// Debug snapshot of a [`MarqueeDriver`] state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MarqueeDebugInfo {
    /// Steady advance in percent per second.
    pub base_velocity: f64,
    /// Current direction factor.
    pub direction: f64,
    /// Unbounded raw position.
    pub position: f64,
    /// Wrapped display offset.
    pub offset_percent: f64,
    /// Configured wrap interval.
    pub wrap_range: (f64, f64),
}

#[cfg(test)]
mod tests {
    use super::MarqueeDriver;

    #[test]
    fn idle_band_advances_at_base_velocity() {
        let mut band = MarqueeDriver::new(10.0);
        band.tick(0.1, 0.0);
        assert_eq!(band.raw_position(), 1.0);
        band.tick(0.1, 0.0);
        assert_eq!(band.raw_position(), 2.0);
    }

    #[test]
    fn negative_base_velocity_runs_backward_by_default() {
        let mut band = MarqueeDriver::new(-5.0);
        band.tick(0.1, 0.0);
        assert_eq!(band.raw_position(), -0.5);
        assert_eq!(band.direction(), 1.0);
    }

    #[test]
    fn positive_factor_scales_the_advance() {
        let mut band = MarqueeDriver::new(10.0);
        // move_by = 1.0, then biased by +2: total 3.0.
        band.tick(0.1, 2.0);
        assert_eq!(band.raw_position(), 3.0);
        assert_eq!(band.direction(), 1.0);
    }

    #[test]
    fn reversal_takes_effect_on_the_following_tick() {
        let mut band = MarqueeDriver::new(10.0);

        // This tick computes its motion under the old direction (+1), flips
        // the direction, then biases the old motion: 1.0 + (-1)(1.0)(-1).
        band.tick(0.1, -1.0);
        assert_eq!(band.direction(), -1.0);
        assert_eq!(band.raw_position(), 2.0);

        // From here the band genuinely runs backward.
        band.tick(0.1, -1.0);
        assert_eq!(band.raw_position(), 0.0);
        band.tick(0.1, -1.0);
        assert_eq!(band.raw_position(), -2.0);
    }

    #[test]
    fn direction_persists_after_factor_returns_to_zero() {
        let mut band = MarqueeDriver::new(10.0);
        band.tick(0.1, -1.0);
        let reversed = band.raw_position();

        band.tick(0.1, 0.0);
        assert_eq!(band.raw_position(), reversed - 1.0);
        assert_eq!(band.direction(), -1.0);
    }

    #[test]
    fn display_offset_stays_in_wrap_interval_forever() {
        let mut band = MarqueeDriver::new(-5.0);
        for i in 0..100_000 {
            let factor = if i % 3 == 0 { 1.5 } else { -0.75 };
            band.tick(1.0 / 60.0, factor);
            let shown = band.offset_percent().value();
            assert!(
                (-45.0..-20.0).contains(&shown),
                "tick {i}: offset {shown} escaped the wrap interval"
            );
        }
    }

    #[test]
    fn raw_position_is_unbounded() {
        let mut band = MarqueeDriver::new(100.0);
        for _ in 0..10_000 {
            band.tick(0.1, 0.0);
        }
        assert_eq!(band.raw_position(), 100_000.0);
        let shown = band.offset_percent().value();
        assert!((-45.0..-20.0).contains(&shown));
    }

    #[test]
    fn custom_wrap_range_is_honored() {
        let mut band = MarqueeDriver::new(7.0).with_wrap_range(0.0, -100.0);
        for _ in 0..1_000 {
            band.tick(0.02, 0.4);
        }
        let shown = band.offset_percent().value();
        assert!((-100.0..=0.0).contains(&shown));
    }

    #[test]
    fn debug_info_reflects_state() {
        let mut band = MarqueeDriver::new(-5.0);
        band.tick(0.1, 0.0);
        let info = band.debug_info();
        assert_eq!(info.base_velocity, -5.0);
        assert_eq!(info.position, band.raw_position());
        assert_eq!(info.wrap_range, (-20.0, -45.0));
    }
}
