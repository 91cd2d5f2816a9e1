// Copyright 2026 the Underscroll Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Velocity derivation from successive samples of a changing value.

/// Derives units/second from successive samples.
///
/// Feed the tracker one sample per frame together with the elapsed time
/// since the previous sample; it returns the finite-difference velocity.
/// The first sample, and samples with non-positive or non-finite `dt`,
/// report zero while still recording the value, so a stalled frame never
/// produces a spike.
///
/// # Example
///
/// ```
/// use underscroll_cell::VelocityTracker;
///
/// let mut tracker = VelocityTracker::new();
/// assert_eq!(tracker.sample(100.0, 1.0 / 60.0), 0.0);
/// assert_eq!(tracker.sample(110.0, 1.0 / 100.0), 1000.0);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct VelocityTracker {
    last: Option<f64>,
}

impl VelocityTracker {
    /// Creates a tracker with no recorded sample.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a sample and returns the velocity since the previous one.
    pub fn sample(&mut self, value: f64, dt: f64) -> f64 {
        let last = self.last.replace(value);
        if !dt.is_finite() || dt <= 0.0 {
            return 0.0;
        }
        match last {
            Some(prev) => (value - prev) / dt,
            None => 0.0,
        }
    }

    /// Forgets the recorded sample; the next one reports zero velocity.
    pub fn reset(&mut self) {
        self.last = None;
    }

    /// Returns the most recently recorded value, if any.
    #[must_use]
    pub fn last_value(&self) -> Option<f64> {
        self.last
    }
}
