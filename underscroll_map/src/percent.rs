// Copyright 2026 the Underscroll Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Percent display adapter for mapped transform values.

use core::fmt;

/// A value rendered as a CSS-style percentage string.
///
/// Transform outputs (vertical offsets, marquee positions, track
/// translations) are numeric percentages of an element's own size; hosts
/// consume them as strings like `"12.5%"`. `Percent` defers formatting to
/// [`fmt::Display`], so no allocation happens until the host asks for text.
///
/// # Example
///
/// ```
/// use underscroll_map::Percent;
///
/// assert_eq!(Percent(0.0).to_string(), "0%");
/// assert_eq!(Percent(12.5).to_string(), "12.5%");
/// assert_eq!(Percent(-75.0).to_string(), "-75%");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Percent(pub f64);

impl Percent {
    /// Returns the numeric value.
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }
}

impl fmt::Display for Percent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

impl From<f64> for Percent {
    fn from(value: f64) -> Self {
        Self(value)
    }
}
