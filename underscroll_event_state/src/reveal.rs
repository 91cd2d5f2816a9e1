// Copyright 2026 the Underscroll Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Visibility-triggered reveal state with replay and once-only policies.
//!
//! ## Usage
//!
//! 1) Create a [`RevealState`] with the policy the section wants.
//! 2) Feed it every visibility report from the host's intersection
//!    primitive via [`RevealState::set_visible`].
//! 3) Act on the returned [`RevealTransition`] (start or rewind the reveal
//!    animation); read [`RevealState::is_revealed`] when rendering.
//!
//! Word-by-word text reveals additionally stagger each word's start with a
//! [`StaggerSchedule`].

/// Re-trigger policy for a reveal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum RevealPolicy {
    /// Sticky: once revealed, the element never hides again.
    #[default]
    Once,
    /// The reveal rewinds when the element leaves the viewport and replays
    /// on the next entry.
    Replay,
}

/// A transition produced by a visibility report.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealTransition {
    /// The element became revealed; start its animation.
    Shown,
    /// The element hid again (only under [`RevealPolicy::Replay`]).
    Hidden,
}

/// Tracks the reveal state of one element across visibility reports.
///
/// The host owns the intersection test (including any [`ViewMargin`]
/// adjustment) and reports a plain boolean; this state machine turns the
/// report stream into at most one transition per change.
///
/// # Example
///
/// ```
/// use underscroll_event_state::reveal::{RevealPolicy, RevealState, RevealTransition};
///
/// let mut card = RevealState::new(RevealPolicy::Replay);
/// assert_eq!(card.set_visible(true), Some(RevealTransition::Shown));
/// assert_eq!(card.set_visible(true), None);
/// assert_eq!(card.set_visible(false), Some(RevealTransition::Hidden));
/// assert_eq!(card.set_visible(true), Some(RevealTransition::Shown));
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct RevealState {
    policy: RevealPolicy,
    visible: bool,
    revealed: bool,
}

impl RevealState {
    /// Creates a hidden reveal with the given policy.
    #[must_use]
    pub fn new(policy: RevealPolicy) -> Self {
        Self {
            policy,
            visible: false,
            revealed: false,
        }
    }

    /// Returns the configured policy.
    #[must_use]
    pub fn policy(&self) -> RevealPolicy {
        self.policy
    }

    /// Whether the element's reveal animation should currently be shown.
    #[must_use]
    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Consumes a visibility report from the host.
    ///
    /// Returns the transition this report caused, if any. Repeated reports
    /// of the same visibility are idempotent. Under [`RevealPolicy::Once`],
    /// leaving the viewport after the first reveal produces no transition
    /// and the state stays revealed.
    pub fn set_visible(&mut self, visible: bool) -> Option<RevealTransition> {
        let was_visible = self.visible;
        self.visible = visible;

        if visible && !self.revealed {
            self.revealed = true;
            return Some(RevealTransition::Shown);
        }
        if !visible && was_visible && self.policy == RevealPolicy::Replay && self.revealed {
            self.revealed = false;
            return Some(RevealTransition::Hidden);
        }
        None
    }
}

/// Margin adjustment for the host's intersection test, in pixels.
///
/// Negative values shrink the observed viewport on that edge, delaying the
/// trigger until the element is well inside; positive values trigger early.
/// This is carried as data for the host — the state machines here never
/// measure geometry themselves.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct ViewMargin {
    /// Top edge adjustment.
    pub top: f64,
    /// Right edge adjustment.
    pub right: f64,
    /// Bottom edge adjustment.
    pub bottom: f64,
    /// Left edge adjustment.
    pub left: f64,
}

impl ViewMargin {
    /// The same adjustment on all four edges.
    #[must_use]
    pub fn uniform(margin: f64) -> Self {
        Self {
            top: margin,
            right: margin,
            bottom: margin,
            left: margin,
        }
    }

    /// Top and bottom adjustment only.
    #[must_use]
    pub fn vertical(margin: f64) -> Self {
        Self {
            top: margin,
            bottom: margin,
            ..Self::default()
        }
    }

    /// Bottom-edge adjustment only (trigger offset for upward scrolling).
    #[must_use]
    pub fn bottom(margin: f64) -> Self {
        Self {
            bottom: margin,
            ..Self::default()
        }
    }
}

/// Per-index stagger for word-by-word reveals.
///
/// Word `i` of a revealed text block starts its animation
/// `i * step_seconds` after the block's [`RevealTransition::Shown`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StaggerSchedule {
    /// Delay step between consecutive indices, in seconds.
    pub step_seconds: f64,
}

impl StaggerSchedule {
    /// The word-reveal step used by the longread body text.
    pub const WORDS: Self = Self {
        step_seconds: 0.015,
    };

    /// The looser step used by section titles.
    pub const TITLES: Self = Self { step_seconds: 0.02 };

    /// Creates a schedule with the given step.
    #[must_use]
    pub fn new(step_seconds: f64) -> Self {
        Self { step_seconds }
    }

    /// Delay before item `index` starts, in seconds.
    #[must_use]
    pub fn delay_for(&self, index: usize) -> f64 {
        index as f64 * self.step_seconds
    }
}
