// Copyright 2026 the Underscroll Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=underscroll_event_state --heading-base-level=0

//! Underscroll Event State: interaction state managers for scroll-driven pages.
//!
//! This crate provides small, focused state machines for the interactions a
//! longread page tracks across multiple events. Each module handles one
//! pattern:
//!
//! - [`reveal`]: visibility-triggered reveal with `Once`/`Replay` policies
//!   and per-word stagger scheduling
//! - [`latch`]: a click counter with a self-resetting "impact" flag
//! - [`parallax`]: pointer position mapped to a signed parallax offset
//!
//! ## Design Philosophy
//!
//! Each manager is stateful but simple: it tracks just enough to compute the
//! next transition. None of them assumes a particular host framework, event
//! system, or clock. They accept pre-computed information — a visibility
//! report from the host's intersection primitive, a monotonic `now`, a raw
//! pointer position — and produce transitions or values the page layer can
//! interpret.
//!
//! ## Usage Patterns
//!
//! ### Reveal tracking
//!
//! ```rust
//! use underscroll_event_state::reveal::{RevealPolicy, RevealState, RevealTransition};
//!
//! let mut reveal = RevealState::new(RevealPolicy::Once);
//!
//! assert_eq!(reveal.set_visible(true), Some(RevealTransition::Shown));
//! // `Once` is sticky: leaving the viewport changes nothing.
//! assert_eq!(reveal.set_visible(false), None);
//! assert!(reveal.is_revealed());
//! ```
//!
//! ### Click-impact latch
//!
//! ```rust
//! use underscroll_event_state::latch::ImpactLatch;
//!
//! let mut latch = ImpactLatch::new();
//! latch.trigger(0.0);
//! assert!(latch.is_hit());
//! latch.poll(0.25);
//! assert!(!latch.is_hit());
//! assert_eq!(latch.count(), 1);
//! ```
//!
//! ### Pointer parallax
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use underscroll_event_state::parallax::PointerParallax;
//!
//! let parallax = PointerParallax::new(Size::new(1920.0, 1080.0));
//! let offset = parallax.offset(Point::new(1920.0, 540.0));
//! assert_eq!(offset.x, 25.0);
//! assert_eq!(offset.y, 0.0);
//! ```
//!
//! ## Features
//!
//! - `latch`: enable the click-impact latch (requires `underscroll_timing`)
//! - `parallax`: enable pointer parallax (requires the `kurbo` dependency)
//!
//! This crate is `no_std` compatible (with `alloc`) for all modules.

#![no_std]

extern crate alloc;

#[cfg(feature = "latch")]
pub mod latch;

#[cfg(feature = "parallax")]
pub mod parallax;

pub mod reveal;
