// Copyright 2026 the Underscroll Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=underscroll_map --heading-base-level=0

//! Underscroll Map: scroll-progress mapping primitives.
//!
//! This crate provides the pure numeric core shared by scroll-driven effects:
//!
//! - [`PiecewiseLinear`]: maps an input value through strictly-increasing
//!   breakpoints to interpolated outputs, either saturating at the boundary
//!   outputs ([`Extrapolate::Clamp`]) or following the nearest segment's line
//!   beyond the sampled range ([`Extrapolate::Extend`]).
//! - [`wrap`]: floor-modulo wrapping of an unbounded accumulator into a
//!   bounded display interval, correct for negative values.
//! - [`ScrollSpan`]: converts a document-space scroll offset into an
//!   element-relative progress fraction in `[0, 1]`.
//! - [`HorizontalTrack`]: the vertical-to-horizontal timeline mapping, where
//!   progress across a tall section translates a row of full-viewport panels.
//! - [`Percent`]: a display adapter rendering a mapped value as a CSS-style
//!   percentage string.
//!
//! Everything here is a pure function of its inputs. State (scroll position,
//! frame time) is owned by callers; see `underscroll_cell` for observable
//! holders and `underscroll_marquee` for the tick-driven marquee built on
//! [`wrap`].
//!
//! ## Minimal example
//!
//! Fade a hero section out over the first 80% of its exit and push it down
//! half its height:
//!
//! ```rust
//! use underscroll_map::{Extrapolate, Percent, PiecewiseLinear, ScrollSpan};
//!
//! // Element-relative progress: a 600px-tall hero at the top of the page.
//! let span = ScrollSpan::element_exit(0.0, 600.0);
//!
//! let y = PiecewiseLinear::new(&[0.0, 1.0], &[0.0, 50.0]).unwrap();
//! let opacity = PiecewiseLinear::new(&[0.0, 0.8], &[1.0, 0.0]).unwrap();
//!
//! let progress = span.progress(300.0);
//! assert_eq!(progress, 0.5);
//! assert_eq!(Percent(y.map(progress)).to_string(), "25%");
//! assert!((opacity.map(progress) - 0.375).abs() < 1e-12);
//!
//! // Past the end of the span everything saturates.
//! assert_eq!(y.map(span.progress(10_000.0)), 50.0);
//! ```
//!
//! This crate is `no_std`; breakpoint tables store inline and only spill to
//! the heap past four control points.

#![no_std]

mod mapper;
mod percent;
mod span;
mod track;
mod wrap;

pub use mapper::{Extrapolate, PiecewiseLinear};
pub use percent::Percent;
pub use span::ScrollSpan;
pub use track::HorizontalTrack;
pub use wrap::wrap;
