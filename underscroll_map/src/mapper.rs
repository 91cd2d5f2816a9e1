// Copyright 2026 the Underscroll Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Piecewise-linear interpolation between control points.

use smallvec::SmallVec;

/// Behavior for inputs outside the sampled breakpoint range.
///
/// Most scroll-driven transforms saturate at the boundary outputs; the
/// velocity-to-speed-multiplier mapping used by the marquee does not, and
/// instead follows the nearest segment's line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Extrapolate {
    /// Saturate at the first/last output outside the breakpoint range.
    #[default]
    Clamp,
    /// Continue the first/last segment linearly beyond the range.
    Extend,
}

/// Inline capacity for breakpoint storage.
///
/// Real mappings in scroll effects have two to four control points; four
/// covers every fade ramp observed without spilling to the heap.
const INLINE_POINTS: usize = 4;

/// A piecewise-linear mapping from strictly-increasing input breakpoints to
/// same-length outputs.
///
/// `map` is a pure function: given the same input it always produces the same
/// output, with no side effects. Callers re-invoke it whenever their source
/// progress value changes.
///
/// # Example
///
/// ```
/// use underscroll_map::{Extrapolate, PiecewiseLinear};
///
/// // Fade in over the first 10% and out over the last 10%.
/// let fade = PiecewiseLinear::new(&[0.0, 0.1, 0.9, 1.0], &[0.0, 1.0, 1.0, 0.0]).unwrap();
/// assert_eq!(fade.map(0.05), 0.5);
/// assert_eq!(fade.map(0.5), 1.0);
///
/// // Unclamped mappings extrapolate.
/// let velocity = PiecewiseLinear::new(&[0.0, 1000.0], &[0.0, 5.0])
///     .unwrap()
///     .with_extrapolate(Extrapolate::Extend);
/// assert_eq!(velocity.map(2000.0), 10.0);
/// assert_eq!(velocity.map(-1000.0), -5.0);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct PiecewiseLinear {
    inputs: SmallVec<[f64; INLINE_POINTS]>,
    outputs: SmallVec<[f64; INLINE_POINTS]>,
    extrapolate: Extrapolate,
}

impl PiecewiseLinear {
    /// Creates a mapping from input breakpoints to outputs.
    ///
    /// Returns `None` when the slices differ in length, contain fewer than
    /// two points, contain non-finite values, or when `inputs` is not
    /// strictly increasing. The default extrapolation mode is
    /// [`Extrapolate::Clamp`].
    #[must_use]
    pub fn new(inputs: &[f64], outputs: &[f64]) -> Option<Self> {
        if inputs.len() != outputs.len() || inputs.len() < 2 {
            return None;
        }
        if inputs.iter().chain(outputs).any(|v| !v.is_finite()) {
            return None;
        }
        if inputs.windows(2).any(|w| w[1] <= w[0]) {
            return None;
        }
        Some(Self {
            inputs: SmallVec::from_slice(inputs),
            outputs: SmallVec::from_slice(outputs),
            extrapolate: Extrapolate::Clamp,
        })
    }

    /// Sets the extrapolation mode for out-of-range inputs.
    #[must_use]
    pub fn with_extrapolate(mut self, mode: Extrapolate) -> Self {
        self.extrapolate = mode;
        self
    }

    /// Returns the current extrapolation mode.
    #[must_use]
    pub fn extrapolate(&self) -> Extrapolate {
        self.extrapolate
    }

    /// Returns the number of control points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inputs.len()
    }

    /// Always `false`: construction requires at least two control points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Maps an input value through the breakpoints.
    ///
    /// Inputs at a control point produce that point's output exactly. Inputs
    /// between two points interpolate linearly. Inputs outside the range
    /// follow the configured [`Extrapolate`] mode. A NaN input produces NaN.
    #[must_use]
    pub fn map(&self, x: f64) -> f64 {
        if x.is_nan() {
            return f64::NAN;
        }

        let first = self.inputs[0];
        let last = self.inputs[self.inputs.len() - 1];

        if x < first {
            return match self.extrapolate {
                Extrapolate::Clamp => self.outputs[0],
                Extrapolate::Extend => self.segment_value(0, x),
            };
        }
        if x > last {
            return match self.extrapolate {
                Extrapolate::Clamp => self.outputs[self.outputs.len() - 1],
                Extrapolate::Extend => self.segment_value(self.inputs.len() - 2, x),
            };
        }

        // In range: find the segment containing x. Exact hits on a breakpoint
        // return the stored output to avoid rounding drift.
        for (i, &input) in self.inputs.iter().enumerate() {
            if x == input {
                return self.outputs[i];
            }
            if x < input {
                return self.segment_value(i - 1, x);
            }
        }
        self.outputs[self.outputs.len() - 1]
    }

    /// Evaluates the line through control points `i` and `i + 1` at `x`.
    fn segment_value(&self, i: usize, x: f64) -> f64 {
        let (x0, x1) = (self.inputs[i], self.inputs[i + 1]);
        let (y0, y1) = (self.outputs[i], self.outputs[i + 1]);
        let t = (x - x0) / (x1 - x0);
        y0 + (y1 - y0) * t
    }
}
