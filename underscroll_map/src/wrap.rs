// Copyright 2026 the Underscroll Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Floor-modulo wrapping of unbounded values into a bounded interval.

/// Wraps `v` into the interval between `min` and `max` using floor modulo.
///
/// The result lies in `[min, max)` for every finite `v`, including negative
/// values. The bounds may be given in either order (the marquee passes its
/// wrap pair reversed); the interval is the same either way.
///
/// A degenerate interval (`min == max`) returns `min`. Non-finite `v`
/// propagates unchanged.
///
/// # Example
///
/// ```
/// use underscroll_map::wrap;
///
/// assert_eq!(wrap(0.0, 10.0, 23.0), 3.0);
/// assert_eq!(wrap(0.0, 10.0, -1.0), 9.0);
///
/// // Reversed bounds, as used by the marquee offset.
/// let w = wrap(-20.0, -45.0, -1000.0);
/// assert!((-45.0..-20.0).contains(&w));
/// ```
#[must_use]
pub fn wrap(min: f64, max: f64, v: f64) -> f64 {
    let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
    let range = hi - lo;
    if range == 0.0 || !v.is_finite() {
        return if v.is_finite() { lo } else { v };
    }
    // `%` truncates toward zero; folding a negative remainder back up gives
    // floor-modulo semantics for arbitrarily large or negative v. The
    // remainder itself is exact, so values already inside the interval pass
    // through unchanged.
    let rem = (v - lo) % range;
    if rem < 0.0 { lo + rem + range } else { lo + rem }
}

#[cfg(test)]
mod tests {
    use super::wrap;

    #[test]
    fn wraps_into_half_open_interval() {
        assert_eq!(wrap(0.0, 10.0, 0.0), 0.0);
        assert_eq!(wrap(0.0, 10.0, 9.999), 9.999);
        assert_eq!(wrap(0.0, 10.0, 10.0), 0.0);
        assert_eq!(wrap(0.0, 10.0, 25.0), 5.0);
    }

    #[test]
    fn negative_values_wrap_correctly() {
        // Truncating modulo would return a value below the interval here.
        assert_eq!(wrap(0.0, 10.0, -1.0), 9.0);
        assert_eq!(wrap(0.0, 10.0, -25.0), 5.0);
        assert_eq!(wrap(-5.0, 5.0, -7.0), 3.0);
    }

    #[test]
    fn reversed_bounds_as_used_by_the_marquee() {
        let w = wrap(-20.0, -45.0, -1000.0);
        assert!((-45.0..-20.0).contains(&w), "got {w}");

        // Large positive accumulator, same reversed pair.
        let w = wrap(-20.0, -45.0, 1e9);
        assert!((-45.0..=-20.0).contains(&w), "got {w}");
    }

    #[test]
    fn result_stays_in_range_for_many_magnitudes() {
        for &v in &[-1e12, -12_345.678, -1.0, 0.0, 0.5, 999.25, 1e12] {
            let w = wrap(3.0, 7.5, v);
            assert!((3.0..7.5).contains(&w), "wrap(3, 7.5, {v}) = {w}");
        }
    }

    #[test]
    fn in_range_and_folded_values_are_exact() {
        // In-range values pass through untouched.
        assert_eq!(wrap(0.0, 10.0, 9.999), 9.999);
        // Dyadic remainders survive both the remainder and the fold exactly.
        assert_eq!(wrap(0.0, 10.0, 17.5), 7.5);
        assert_eq!(wrap(0.0, 10.0, -0.25), 9.75);
    }

    #[test]
    fn degenerate_interval_returns_min() {
        assert_eq!(wrap(4.0, 4.0, 123.0), 4.0);
    }

    #[test]
    fn non_finite_input_propagates() {
        assert!(wrap(0.0, 10.0, f64::NAN).is_nan());
        assert_eq!(wrap(0.0, 10.0, f64::INFINITY), f64::INFINITY);
    }
}
