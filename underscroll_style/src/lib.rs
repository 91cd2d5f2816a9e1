// Copyright 2026 the Underscroll Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=underscroll_style --heading-base-level=0

//! Underscroll Style: scoped global style registration for longread pages.
//!
//! Some page sections need document-wide style resources while they are
//! mounted: a named keyframe animation for a looping strip, or a smooth
//! scroll-behavior override. This crate tracks those registrations in a
//! shared [`StyleRegistry`] and ties each one's lifetime to a
//! [`StyleHandle`], so a section that unmounts releases exactly what it
//! registered.
//!
//! ## Core Concepts
//!
//! ### Registrations
//!
//! A [`GlobalStyle`] is either a [`KeyframeAnimation`] definition or a
//! [`ScrollBehavior`] override. Registering returns a handle; the style
//! stays active until the handle drops.
//!
//! ```rust
//! use underscroll_style::{GlobalStyle, KeyframeAnimation, StyleRegistry};
//!
//! let registry = StyleRegistry::new();
//! let handle = registry.register(GlobalStyle::Keyframes(KeyframeAnimation::slide_up()));
//!
//! assert!(registry.is_animation_active("slide-up"));
//! drop(handle);
//! assert!(!registry.is_animation_active("slide-up"));
//! ```
//!
//! ### Last registration wins
//!
//! Scroll behavior is a single document-wide value, so the most recent
//! active registration decides it and releasing reverts to the previous
//! one:
//!
//! ```rust
//! use underscroll_style::{GlobalStyle, ScrollBehavior, StyleRegistry};
//!
//! let registry = StyleRegistry::new();
//! let smooth = registry.register(GlobalStyle::ScrollBehavior(ScrollBehavior::Smooth));
//! assert_eq!(registry.scroll_behavior(), ScrollBehavior::Smooth);
//! drop(smooth);
//! assert_eq!(registry.scroll_behavior(), ScrollBehavior::Auto);
//! ```
//!
//! The registry holds declarations only. Applying them — emitting the
//! `@keyframes` rule, setting the document's scroll behavior — is the host
//! layer's job.
//!
//! This crate is `no_std` compatible (with `alloc`).

#![no_std]

extern crate alloc;

mod registry;
mod style;

pub use registry::{StyleHandle, StyleRegistry};
pub use style::{Easing, GlobalStyle, Iteration, KeyframeAnimation, ScrollBehavior};
