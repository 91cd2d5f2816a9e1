// Copyright 2026 the Underscroll Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer parallax: map a pointer position to a signed layer offset.
//!
//! ## Usage
//!
//! 1) Create a [`PointerParallax`] over the tracked region (usually the
//!    viewport).
//! 2) On every pointer-move event, call [`PointerParallax::offset`] with
//!    the raw position and apply the returned vector as the layer's
//!    translation. Background layers typically apply the [`inverted`]
//!    variant so they drift against the pointer.
//!
//! [`inverted`]: PointerParallax::inverted

use kurbo::{Point, Size, Vec2};

/// Default offset gain: a pointer at a region edge shifts the layer by half
/// this many pixels.
const DEFAULT_GAIN: f64 = 50.0;

/// Maps pointer positions inside a region to a centered, signed offset.
///
/// The pointer position is normalized against the region, re-centered to
/// `[-0.5, 0.5]` per axis, and scaled by the gain. The region center maps to
/// zero; corners map to `±gain / 2` on each axis.
///
/// # Example
///
/// ```
/// use kurbo::{Point, Size};
/// use underscroll_event_state::parallax::PointerParallax;
///
/// let parallax = PointerParallax::new(Size::new(1000.0, 500.0));
/// assert_eq!(parallax.offset(Point::new(500.0, 250.0)), kurbo::Vec2::ZERO);
///
/// let offset = parallax.offset(Point::new(1000.0, 0.0));
/// assert_eq!(offset.x, 25.0);
/// assert_eq!(offset.y, -25.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerParallax {
    region: Size,
    gain: f64,
    inverted: bool,
}

impl PointerParallax {
    /// Creates a parallax map over the given region with the default gain.
    #[must_use]
    pub fn new(region: Size) -> Self {
        Self {
            region,
            gain: DEFAULT_GAIN,
            inverted: false,
        }
    }

    /// Overrides the gain.
    #[must_use]
    pub fn with_gain(mut self, gain: f64) -> Self {
        self.gain = gain;
        self
    }

    /// Returns a variant that drifts against the pointer.
    #[must_use]
    pub fn inverted(mut self) -> Self {
        self.inverted = !self.inverted;
        self
    }

    /// Updates the tracked region (on host resize).
    pub fn set_region(&mut self, region: Size) {
        self.region = region;
    }

    /// Returns the tracked region.
    #[must_use]
    pub fn region(&self) -> Size {
        self.region
    }

    /// Maps a pointer position to the layer offset.
    ///
    /// A degenerate region (zero or negative extent on either axis) maps
    /// every position to zero.
    #[must_use]
    pub fn offset(&self, pointer: Point) -> Vec2 {
        if self.region.width <= 0.0 || self.region.height <= 0.0 {
            return Vec2::ZERO;
        }
        let v = Vec2::new(
            (pointer.x / self.region.width - 0.5) * self.gain,
            (pointer.y / self.region.height - 0.5) * self.gain,
        );
        if self.inverted { -v } else { v }
    }
}

#[cfg(test)]
mod tests {
    use super::PointerParallax;
    use kurbo::{Point, Size, Vec2};

    #[test]
    fn center_maps_to_zero() {
        let parallax = PointerParallax::new(Size::new(1920.0, 1080.0));
        assert_eq!(parallax.offset(Point::new(960.0, 540.0)), Vec2::ZERO);
    }

    #[test]
    fn corners_map_to_half_gain() {
        let parallax = PointerParallax::new(Size::new(1000.0, 500.0));

        let tl = parallax.offset(Point::new(0.0, 0.0));
        assert_eq!((tl.x, tl.y), (-25.0, -25.0));

        let br = parallax.offset(Point::new(1000.0, 500.0));
        assert_eq!((br.x, br.y), (25.0, 25.0));
    }

    #[test]
    fn inverted_negates_both_axes() {
        let parallax = PointerParallax::new(Size::new(1000.0, 500.0)).inverted();
        let offset = parallax.offset(Point::new(1000.0, 500.0));
        assert_eq!((offset.x, offset.y), (-25.0, -25.0));

        // Inverting twice restores the original sense.
        let restored = parallax.inverted();
        assert_eq!(restored.offset(Point::new(1000.0, 500.0)).x, 25.0);
    }

    #[test]
    fn custom_gain_scales_offsets() {
        let parallax = PointerParallax::new(Size::new(100.0, 100.0)).with_gain(10.0);
        let offset = parallax.offset(Point::new(100.0, 50.0));
        assert_eq!((offset.x, offset.y), (5.0, 0.0));
    }

    #[test]
    fn degenerate_region_maps_to_zero() {
        let parallax = PointerParallax::new(Size::new(0.0, 500.0));
        assert_eq!(parallax.offset(Point::new(10.0, 10.0)), Vec2::ZERO);

        let mut parallax = PointerParallax::new(Size::new(100.0, 100.0));
        parallax.set_region(Size::new(100.0, -1.0));
        assert_eq!(parallax.offset(Point::new(10.0, 10.0)), Vec2::ZERO);
    }

    #[test]
    fn positions_outside_the_region_extrapolate() {
        // Pointer capture can report positions past the edge; the mapping
        // keeps extrapolating linearly rather than clamping.
        let parallax = PointerParallax::new(Size::new(100.0, 100.0));
        let offset = parallax.offset(Point::new(200.0, 50.0));
        assert_eq!(offset.x, 75.0);
    }
}
