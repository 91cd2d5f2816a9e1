// Copyright 2026 the Underscroll Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Horizontal timeline track: vertical progress drives horizontal travel.

use crate::mapper::PiecewiseLinear;

/// Maps vertical scroll progress across a tall section to the horizontal
/// translation of a row of full-viewport panels.
///
/// The section is `panels` viewport-heights tall; while progress runs from
/// `0` to `1` the pinned row translates from `0%` to
/// `-(panels - 1) / panels * 100%` of its own width, so the last panel ends
/// exactly filling the viewport. An optional fade ramp dims the row near
/// both ends of the travel.
///
/// # Example
///
/// ```
/// use underscroll_map::HorizontalTrack;
///
/// let track = HorizontalTrack::new(4);
/// assert_eq!(track.translate_percent(0.0), 0.0);
/// assert_eq!(track.translate_percent(0.5), -37.5);
/// assert_eq!(track.translate_percent(1.0), -75.0);
/// assert!(track.is_pinned(0.5));
/// assert!(!track.is_pinned(1.25));
/// ```
#[derive(Clone, Debug)]
pub struct HorizontalTrack {
    panels: usize,
    fade: Option<PiecewiseLinear>,
}

impl HorizontalTrack {
    /// Input breakpoints of the standard fade ramp.
    const FADE_IN_END: f64 = 0.1;
    const FADE_OUT_START: f64 = 0.9;

    /// Creates a track over `panels` full-viewport panels.
    #[must_use]
    pub fn new(panels: usize) -> Self {
        Self { panels, fade: None }
    }

    /// Enables the standard fade ramp: opacity `0 → 1` over the first 10% of
    /// travel and `1 → 0` over the last 10%.
    #[must_use]
    pub fn with_fade(mut self) -> Self {
        self.fade = PiecewiseLinear::new(
            &[0.0, Self::FADE_IN_END, Self::FADE_OUT_START, 1.0],
            &[0.0, 1.0, 1.0, 0.0],
        );
        self
    }

    /// Returns the number of panels in the row.
    #[must_use]
    pub fn panels(&self) -> usize {
        self.panels
    }

    /// Horizontal translation of the row, as a percentage of its own width.
    ///
    /// Progress is clamped to `[0, 1]`. Tracks with fewer than two panels
    /// never translate.
    #[must_use]
    pub fn translate_percent(&self, progress: f64) -> f64 {
        if self.panels < 2 {
            return 0.0;
        }
        let travel = (self.panels - 1) as f64 / self.panels as f64 * 100.0;
        -travel * progress.clamp(0.0, 1.0)
    }

    /// Row opacity at the given progress.
    ///
    /// `1.0` unless the fade ramp is enabled via [`Self::with_fade`].
    #[must_use]
    pub fn opacity(&self, progress: f64) -> f64 {
        match &self.fade {
            Some(ramp) => ramp.map(progress.clamp(0.0, 1.0)),
            None => 1.0,
        }
    }

    /// Whether the row is pinned to the viewport at this progress.
    ///
    /// The host keeps the row in a stuck layout exactly while progress is
    /// inside `[0, 1]`; outside it the section scrolls normally.
    #[must_use]
    pub fn is_pinned(&self, progress: f64) -> bool {
        (0.0..=1.0).contains(&progress)
    }
}
