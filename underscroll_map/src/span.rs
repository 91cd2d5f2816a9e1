// Copyright 2026 the Underscroll Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Document-space spans producing element-relative scroll progress.

/// A span of document scroll offsets mapped to a progress fraction.
///
/// `ScrollSpan` converts the host's raw scroll offset (pixels from the top
/// of the document) into the `[0, 1]` progress value that the transform
/// mappers consume. The span's `start` is where progress is `0`, its `end`
/// where progress is `1`; offsets outside the span clamp.
///
/// Constructors cover the tracking windows the longread sections use:
/// whole-document progress, an element leaving through the viewport top, and
/// an element passing through the whole viewport.
///
/// # Example
///
/// ```
/// use underscroll_map::ScrollSpan;
///
/// // A 600px hero at the very top of the page, tracked while it scrolls out.
/// let span = ScrollSpan::element_exit(0.0, 600.0);
/// assert_eq!(span.progress(0.0), 0.0);
/// assert_eq!(span.progress(150.0), 0.25);
/// assert_eq!(span.progress(600.0), 1.0);
/// assert_eq!(span.progress(5000.0), 1.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollSpan {
    start: f64,
    end: f64,
}

impl ScrollSpan {
    /// Creates a span from explicit start and end scroll offsets.
    #[must_use]
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    /// Whole-document progress: `0` at the top, `1` when scrolled to the end.
    ///
    /// `scroll_height` is the total document height, `viewport_height` the
    /// visible window; the scrollable distance is their difference.
    #[must_use]
    pub fn document(scroll_height: f64, viewport_height: f64) -> Self {
        Self {
            start: 0.0,
            end: scroll_height - viewport_height,
        }
    }

    /// Tracks an element at `top` while it scrolls out through the viewport
    /// top: `0` when its top edge reaches the viewport top, `1` when its
    /// bottom edge does.
    #[must_use]
    pub fn element_exit(top: f64, height: f64) -> Self {
        Self {
            start: top,
            end: top + height,
        }
    }

    /// Tracks an element through the full viewport: `0` when its top edge
    /// first enters at the bottom, `1` when its bottom edge leaves at the top.
    #[must_use]
    pub fn element_through(top: f64, height: f64, viewport_height: f64) -> Self {
        Self {
            start: top - viewport_height,
            end: top + height,
        }
    }

    /// Returns the span's start offset (progress `0`).
    #[must_use]
    pub fn start(&self) -> f64 {
        self.start
    }

    /// Returns the span's end offset (progress `1`).
    #[must_use]
    pub fn end(&self) -> f64 {
        self.end
    }

    /// Converts a scroll offset into progress, clamped to `[0, 1]`.
    ///
    /// A degenerate span (`end <= start`) reports `0` before `start` and `1`
    /// at or past it, so fully-visible short documents read as complete.
    #[must_use]
    pub fn progress(&self, offset: f64) -> f64 {
        if self.end <= self.start {
            return if offset < self.start { 0.0 } else { 1.0 };
        }
        ((offset - self.start) / (self.end - self.start)).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::ScrollSpan;

    #[test]
    fn document_progress_covers_scrollable_distance() {
        let span = ScrollSpan::document(4000.0, 1000.0);
        assert_eq!(span.progress(0.0), 0.0);
        assert_eq!(span.progress(1500.0), 0.5);
        assert_eq!(span.progress(3000.0), 1.0);
    }

    #[test]
    fn progress_clamps_outside_the_span() {
        let span = ScrollSpan::new(100.0, 300.0);
        assert_eq!(span.progress(-50.0), 0.0);
        assert_eq!(span.progress(99.0), 0.0);
        assert_eq!(span.progress(200.0), 0.5);
        assert_eq!(span.progress(301.0), 1.0);
    }

    #[test]
    fn element_through_starts_one_viewport_early() {
        let span = ScrollSpan::element_through(2000.0, 500.0, 800.0);
        assert_eq!(span.start(), 1200.0);
        assert_eq!(span.end(), 2500.0);
        assert_eq!(span.progress(1200.0), 0.0);
        assert_eq!(span.progress(2500.0), 1.0);
    }

    #[test]
    fn degenerate_span_is_a_step() {
        let span = ScrollSpan::document(800.0, 1000.0);
        assert_eq!(span.progress(-1.0), 0.0);
        assert_eq!(span.progress(0.0), 1.0);
        assert_eq!(span.progress(50.0), 1.0);
    }
}
