// Copyright 2026 the Underscroll Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Second-order spring smoothing stepped with explicit frame time.

/// Upper bound on a single integration step, in seconds.
///
/// Frame deltas above this are split into substeps so stiff springs stay
/// stable across dropped frames.
const MAX_STEP: f64 = 1.0 / 120.0;

/// A damped spring that smooths a value toward a moving target.
///
/// The spring carries its own position and velocity and is advanced with
/// explicit elapsed time via [`Self::step`], so tests and headless hosts can
/// drive it without a display loop. Once position and velocity are inside
/// the configured rest thresholds, the value snaps to the target and
/// [`Self::is_settled`] reports `true`.
///
/// Two presets cover the longread uses: [`Spring::progress_bar`] (a soft
/// follow for the document progress indicator) and
/// [`Spring::scroll_velocity`] (a tighter follow for the marquee's velocity
/// signal).
///
/// # Example
///
/// ```
/// use underscroll_cell::Spring;
///
/// let mut spring = Spring::progress_bar();
/// spring.set_target(1.0);
/// for _ in 0..240 {
///     spring.step(1.0 / 60.0);
/// }
/// assert!(spring.is_settled());
/// assert_eq!(spring.value(), 1.0);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Spring {
    stiffness: f64,
    damping: f64,
    rest_delta: f64,
    rest_speed: f64,
    value: f64,
    velocity: f64,
    target: f64,
}

impl Spring {
    /// Creates a spring at rest at `0.0` with the given stiffness and
    /// damping. Rest thresholds default to `0.01`.
    #[must_use]
    pub fn new(stiffness: f64, damping: f64) -> Self {
        Self {
            stiffness,
            damping,
            rest_delta: 0.01,
            rest_speed: 0.01,
            value: 0.0,
            velocity: 0.0,
            target: 0.0,
        }
    }

    /// The progress-bar preset: stiffness 100, damping 30, rest delta 0.001.
    #[must_use]
    pub fn progress_bar() -> Self {
        Self::new(100.0, 30.0).with_rest(0.001, 0.01)
    }

    /// The scroll-velocity preset: stiffness 400, damping 50.
    #[must_use]
    pub fn scroll_velocity() -> Self {
        Self::new(400.0, 50.0)
    }

    /// Sets the rest thresholds for position delta and speed.
    #[must_use]
    pub fn with_rest(mut self, rest_delta: f64, rest_speed: f64) -> Self {
        self.rest_delta = rest_delta;
        self.rest_speed = rest_speed;
        self
    }

    /// Returns the current smoothed value.
    #[must_use]
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Returns the current velocity, in value units per second.
    #[must_use]
    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    /// Returns the current target.
    #[must_use]
    pub fn target(&self) -> f64 {
        self.target
    }

    /// Retargets the spring; motion continues from the current state.
    pub fn set_target(&mut self, target: f64) {
        self.target = target;
    }

    /// Teleports value and target to `value`, zeroing velocity.
    pub fn jump(&mut self, value: f64) {
        self.value = value;
        self.target = value;
        self.velocity = 0.0;
    }

    /// Whether the spring has settled onto its target.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        (self.value - self.target).abs() < self.rest_delta
            && self.velocity.abs() < self.rest_speed
    }

    /// Advances the spring by `dt` seconds.
    ///
    /// Non-positive or non-finite `dt` is a no-op. Large deltas are split
    /// into substeps of at most 1/120 s.
    pub fn step(&mut self, dt: f64) {
        if !dt.is_finite() || dt <= 0.0 {
            return;
        }
        let mut remaining = dt;
        while remaining > 0.0 {
            let h = remaining.min(MAX_STEP);
            self.integrate(h);
            remaining -= h;
        }
        if self.is_settled() {
            self.value = self.target;
            self.velocity = 0.0;
        }
    }

    /// Semi-implicit Euler step.
    fn integrate(&mut self, h: f64) {
        let accel = self.stiffness * (self.target - self.value) - self.damping * self.velocity;
        self.velocity += accel * h;
        self.value += self.velocity * h;
    }
}

#[cfg(test)]
mod tests {
    use super::Spring;

    fn run(spring: &mut Spring, seconds: f64) {
        let frames = (seconds * 60.0) as usize;
        for _ in 0..frames {
            spring.step(1.0 / 60.0);
        }
    }

    #[test]
    fn converges_onto_the_target() {
        let mut spring = Spring::progress_bar();
        spring.set_target(1.0);
        run(&mut spring, 4.0);
        assert!(spring.is_settled());
        assert_eq!(spring.value(), 1.0);
        assert_eq!(spring.velocity(), 0.0);
    }

    #[test]
    fn overdamped_approach_is_monotonic() {
        // damping 30 > critical (2 * sqrt(100) = 20): no overshoot.
        let mut spring = Spring::progress_bar();
        spring.set_target(1.0);

        let mut last = spring.value();
        for _ in 0..240 {
            spring.step(1.0 / 60.0);
            assert!(spring.value() >= last - 1e-12);
            assert!(spring.value() <= 1.0 + 1e-9);
            last = spring.value();
        }
    }

    #[test]
    fn tracks_a_retargeted_value() {
        let mut spring = Spring::scroll_velocity();
        spring.set_target(5.0);
        run(&mut spring, 1.0);
        assert!((spring.value() - 5.0).abs() < 0.05);

        spring.set_target(-3.0);
        run(&mut spring, 2.0);
        assert!(spring.is_settled());
        assert_eq!(spring.value(), -3.0);
    }

    #[test]
    fn jump_teleports_without_motion() {
        let mut spring = Spring::progress_bar();
        spring.set_target(1.0);
        run(&mut spring, 0.5);

        spring.jump(0.25);
        assert_eq!(spring.value(), 0.25);
        assert_eq!(spring.target(), 0.25);
        assert!(spring.is_settled());
    }

    #[test]
    fn large_frame_delta_stays_stable() {
        let mut spring = Spring::scroll_velocity();
        spring.set_target(1.0);
        // One 500ms "frame" (heavy jank) must not blow up the integrator.
        spring.step(0.5);
        assert!(spring.value().is_finite());
        assert!(spring.value() <= 1.5);
    }

    #[test]
    fn non_positive_delta_is_a_no_op() {
        let mut spring = Spring::progress_bar();
        spring.set_target(1.0);
        spring.step(0.0);
        spring.step(-1.0);
        spring.step(f64::NAN);
        assert_eq!(spring.value(), 0.0);
    }
}
