// Copyright 2026 the Underscroll Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Style declarations a page section can register while mounted.

use alloc::borrow::Cow;

/// Timing curve for a keyframe animation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Easing {
    /// Constant rate from start to end.
    #[default]
    Linear,
}

/// How many times a keyframe animation plays.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Iteration {
    /// Play the given number of times, then stop on the final frame.
    Count(u32),
    /// Loop forever.
    Infinite,
}

/// A named vertical-translate keyframe animation.
///
/// The animation moves an element from `from_percent` to `to_percent` of its
/// own height over `duration_seconds`. Names are unique within a registry at
/// any given time in the sense that queries match by name; registering the
/// same name twice keeps the animation active until both handles drop.
#[derive(Clone, Debug, PartialEq)]
pub struct KeyframeAnimation {
    /// Animation name, as referenced by the host's animation property.
    pub name: Cow<'static, str>,
    /// Start offset as a percentage of the element's own height.
    pub from_percent: f64,
    /// End offset as a percentage of the element's own height.
    pub to_percent: f64,
    /// Duration of one iteration, in seconds.
    pub duration_seconds: f64,
    /// Timing curve.
    pub easing: Easing,
    /// Repeat behavior.
    pub iteration: Iteration,
}

impl KeyframeAnimation {
    /// The looping column animation used behind vertically-scrolling strips.
    ///
    /// Slides a doubled strip up by half its height over twenty seconds,
    /// linearly and forever, so the strip appears seamless.
    #[must_use]
    pub fn slide_up() -> Self {
        Self {
            name: Cow::Borrowed("slide-up"),
            from_percent: 0.0,
            to_percent: -50.0,
            duration_seconds: 20.0,
            easing: Easing::Linear,
            iteration: Iteration::Infinite,
        }
    }
}

/// Scroll behavior requested from the host while a registration is active.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ScrollBehavior {
    /// Jump instantly (the host default).
    #[default]
    Auto,
    /// Animate programmatic scrolls.
    Smooth,
}

/// A single page-scoped style registration.
#[derive(Clone, Debug, PartialEq)]
pub enum GlobalStyle {
    /// A named keyframe animation definition.
    Keyframes(KeyframeAnimation),
    /// A scroll-behavior override for the whole document.
    ScrollBehavior(ScrollBehavior),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slide_up_matches_the_marquee_track() {
        let anim = KeyframeAnimation::slide_up();
        assert_eq!(anim.name, "slide-up");
        assert_eq!(anim.from_percent, 0.0);
        assert_eq!(anim.to_percent, -50.0);
        assert_eq!(anim.duration_seconds, 20.0);
        assert_eq!(anim.easing, Easing::Linear);
        assert_eq!(anim.iteration, Iteration::Infinite);
    }

    #[test]
    fn scroll_behavior_defaults_to_auto() {
        assert_eq!(ScrollBehavior::default(), ScrollBehavior::Auto);
    }
}
