// Copyright 2026 the Underscroll Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scoped registration of global styles with RAII release.

use alloc::rc::Rc;
use alloc::string::String;
use alloc::vec::Vec;
use core::cell::RefCell;

use hashbrown::HashMap;

use crate::{GlobalStyle, KeyframeAnimation, ScrollBehavior};

/// Identifies one registration within its registry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
struct RegistrationId(u64);

#[derive(Debug, Default)]
struct RegistryData {
    /// Active registrations in registration order.
    entries: Vec<(RegistrationId, GlobalStyle)>,
    /// Active animation count per name, for O(1) queries.
    animations: HashMap<String, usize>,
    next_id: u64,
}

impl RegistryData {
    fn release(&mut self, id: RegistrationId) {
        let Some(index) = self.entries.iter().position(|(eid, _)| *eid == id) else {
            return;
        };
        let (_, style) = self.entries.remove(index);
        if let GlobalStyle::Keyframes(anim) = style
            && let Some(count) = self.animations.get_mut(anim.name.as_ref())
        {
            *count -= 1;
            if *count == 0 {
                self.animations.remove(anim.name.as_ref());
            }
        }
    }
}

/// A shared registry of page-scoped global styles.
///
/// Sections register the styles they need while mounted ([`StyleRegistry::register`])
/// and hold the returned [`StyleHandle`] for as long as the style should
/// apply. Dropping the handle releases the registration, and queries revert
/// to whatever earlier registrations still dictate.
///
/// Clones share the same underlying registry.
///
/// # Example
///
/// ```
/// use underscroll_style::{GlobalStyle, ScrollBehavior, StyleRegistry};
///
/// let registry = StyleRegistry::new();
/// assert_eq!(registry.scroll_behavior(), ScrollBehavior::Auto);
///
/// let handle = registry.register(GlobalStyle::ScrollBehavior(ScrollBehavior::Smooth));
/// assert_eq!(registry.scroll_behavior(), ScrollBehavior::Smooth);
///
/// drop(handle);
/// assert_eq!(registry.scroll_behavior(), ScrollBehavior::Auto);
/// ```
#[derive(Clone, Debug, Default)]
pub struct StyleRegistry {
    data: Rc<RefCell<RegistryData>>,
}

impl StyleRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a style, returning the handle that keeps it active.
    #[must_use = "the style is released as soon as the handle drops"]
    pub fn register(&self, style: GlobalStyle) -> StyleHandle {
        let mut data = self.data.borrow_mut();
        let id = RegistrationId(data.next_id);
        data.next_id += 1;
        if let GlobalStyle::Keyframes(anim) = &style {
            *data
                .animations
                .entry_ref(anim.name.as_ref())
                .or_insert(0) += 1;
        }
        data.entries.push((id, style));
        StyleHandle {
            data: Rc::clone(&self.data),
            id,
        }
    }

    /// Whether any active registration defines an animation with this name.
    #[must_use]
    pub fn is_animation_active(&self, name: &str) -> bool {
        self.data.borrow().animations.contains_key(name)
    }

    /// Returns the named animation's definition, if active.
    ///
    /// With duplicate registrations under one name, the most recent wins.
    #[must_use]
    pub fn animation(&self, name: &str) -> Option<KeyframeAnimation> {
        let data = self.data.borrow();
        data.entries.iter().rev().find_map(|(_, style)| match style {
            GlobalStyle::Keyframes(anim) if anim.name == name => Some(anim.clone()),
            _ => None,
        })
    }

    /// The scroll behavior currently in effect.
    ///
    /// The most recent active [`GlobalStyle::ScrollBehavior`] registration
    /// wins; with none active this is [`ScrollBehavior::Auto`].
    #[must_use]
    pub fn scroll_behavior(&self) -> ScrollBehavior {
        let data = self.data.borrow();
        data.entries
            .iter()
            .rev()
            .find_map(|(_, style)| match style {
                GlobalStyle::ScrollBehavior(behavior) => Some(*behavior),
                _ => None,
            })
            .unwrap_or_default()
    }

    /// Number of active registrations.
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.data.borrow().entries.len()
    }
}

/// Keeps one [`GlobalStyle`] registration active until dropped.
#[derive(Debug)]
pub struct StyleHandle {
    data: Rc<RefCell<RegistryData>>,
    id: RegistrationId,
}

impl Drop for StyleHandle {
    fn drop(&mut self) {
        self.data.borrow_mut().release(self.id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Easing, Iteration};
    use alloc::borrow::Cow;

    #[test]
    fn registration_is_scoped_to_the_handle() {
        let registry = StyleRegistry::new();
        assert!(!registry.is_animation_active("slide-up"));
        assert_eq!(registry.active_count(), 0);

        {
            let _handle =
                registry.register(GlobalStyle::Keyframes(KeyframeAnimation::slide_up()));
            assert!(registry.is_animation_active("slide-up"));
            assert_eq!(registry.active_count(), 1);
        }

        assert!(!registry.is_animation_active("slide-up"));
        assert_eq!(registry.active_count(), 0);
    }

    #[test]
    fn scroll_behavior_reverts_to_the_previous_registration() {
        let registry = StyleRegistry::new();

        let first = registry.register(GlobalStyle::ScrollBehavior(ScrollBehavior::Smooth));
        let second = registry.register(GlobalStyle::ScrollBehavior(ScrollBehavior::Auto));
        assert_eq!(registry.scroll_behavior(), ScrollBehavior::Auto);

        drop(second);
        assert_eq!(registry.scroll_behavior(), ScrollBehavior::Smooth);

        drop(first);
        assert_eq!(registry.scroll_behavior(), ScrollBehavior::Auto);
    }

    #[test]
    fn duplicate_names_stay_active_until_all_handles_drop() {
        let registry = StyleRegistry::new();
        let a = registry.register(GlobalStyle::Keyframes(KeyframeAnimation::slide_up()));
        let b = registry.register(GlobalStyle::Keyframes(KeyframeAnimation::slide_up()));

        drop(a);
        assert!(registry.is_animation_active("slide-up"));

        drop(b);
        assert!(!registry.is_animation_active("slide-up"));
    }

    #[test]
    fn animation_lookup_returns_the_most_recent_definition() {
        let registry = StyleRegistry::new();
        let _slow = registry.register(GlobalStyle::Keyframes(KeyframeAnimation::slide_up()));

        let fast = KeyframeAnimation {
            duration_seconds: 10.0,
            ..KeyframeAnimation::slide_up()
        };
        let fast_handle = registry.register(GlobalStyle::Keyframes(fast));

        let found = registry.animation("slide-up").unwrap();
        assert_eq!(found.duration_seconds, 10.0);

        drop(fast_handle);
        let found = registry.animation("slide-up").unwrap();
        assert_eq!(found.duration_seconds, 20.0);

        assert!(registry.animation("fade-in").is_none());
    }

    #[test]
    fn clones_share_one_registry() {
        let registry = StyleRegistry::new();
        let view = registry.clone();

        let _handle = registry.register(GlobalStyle::Keyframes(KeyframeAnimation {
            name: Cow::Borrowed("ticker"),
            from_percent: 0.0,
            to_percent: -100.0,
            duration_seconds: 5.0,
            easing: Easing::Linear,
            iteration: Iteration::Count(3),
        }));

        assert!(view.is_animation_active("ticker"));
        assert_eq!(view.active_count(), 1);
    }

    #[test]
    fn dropping_out_of_order_releases_the_right_entries() {
        let registry = StyleRegistry::new();
        let a = registry.register(GlobalStyle::ScrollBehavior(ScrollBehavior::Smooth));
        let b = registry.register(GlobalStyle::Keyframes(KeyframeAnimation::slide_up()));
        let c = registry.register(GlobalStyle::ScrollBehavior(ScrollBehavior::Auto));

        drop(a);
        assert_eq!(registry.scroll_behavior(), ScrollBehavior::Auto);
        assert!(registry.is_animation_active("slide-up"));

        drop(c);
        assert_eq!(registry.scroll_behavior(), ScrollBehavior::Auto);
        assert_eq!(registry.active_count(), 1);

        drop(b);
        assert_eq!(registry.active_count(), 0);
    }
}
