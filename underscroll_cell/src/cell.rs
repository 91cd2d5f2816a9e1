// Copyright 2026 the Underscroll Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared observable value cells with synchronous notification.

use alloc::boxed::Box;
use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::RefCell;
use core::fmt;
use core::mem;

/// Identifier for a cell subscription.
///
/// Returned by [`ValueCell::subscribe`] and accepted by
/// [`ValueCell::unsubscribe`]. Ids are scoped to their cell and never
/// reused.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct SubscriberId(u64);

type Callback<T> = Box<dyn FnMut(&T)>;

struct Inner<T> {
    value: T,
    subscribers: Vec<(SubscriberId, Callback<T>)>,
    removed: Vec<SubscriberId>,
    pending: Option<T>,
    notifying: bool,
    next_id: u64,
}

/// A shared observable value holder.
///
/// Cloning a `ValueCell` clones the handle, not the value: all clones read
/// and write the same cell. [`Self::set`] stores the value and synchronously
/// notifies every subscriber in subscription order before returning.
///
/// Re-entrancy follows the single-threaded cooperative model: a `set` issued
/// from inside a notification is deferred until the current pass completes,
/// then delivered as a fresh pass. Subscribing or unsubscribing from inside
/// a notification takes effect for the next pass.
///
/// # Example
///
/// ```
/// use underscroll_cell::ValueCell;
/// use std::rc::Rc;
/// use std::cell::Cell;
///
/// let scroll = ValueCell::new(0.0_f64);
/// let seen = Rc::new(Cell::new(0.0));
///
/// let sink = seen.clone();
/// let id = scroll.subscribe(move |v| sink.set(*v));
///
/// scroll.set(120.0);
/// assert_eq!(seen.get(), 120.0);
///
/// scroll.unsubscribe(id);
/// scroll.set(240.0);
/// assert_eq!(seen.get(), 120.0);
/// assert_eq!(scroll.get(), 240.0);
/// ```
pub struct ValueCell<T> {
    inner: Rc<RefCell<Inner<T>>>,
}

impl<T: Clone> ValueCell<T> {
    /// Creates a cell holding `value`.
    #[must_use]
    pub fn new(value: T) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                value,
                subscribers: Vec::new(),
                removed: Vec::new(),
                pending: None,
                notifying: false,
                next_id: 0,
            })),
        }
    }

    /// Returns a clone of the current value.
    #[must_use]
    pub fn get(&self) -> T {
        self.inner.borrow().value.clone()
    }

    /// Stores a new value and synchronously notifies subscribers.
    ///
    /// When called from inside a notification, the value is deferred and
    /// delivered after the current pass completes; the last deferred value
    /// wins.
    pub fn set(&self, value: T) {
        {
            let mut inner = self.inner.borrow_mut();
            if inner.notifying {
                inner.pending = Some(value);
                return;
            }
            inner.value = value;
            inner.notifying = true;
        }
        self.run_notification_passes();
    }

    /// Registers a subscriber and returns its id.
    ///
    /// The subscriber is invoked on every subsequent `set`, not for the
    /// current value.
    pub fn subscribe(&self, callback: impl FnMut(&T) + 'static) -> SubscriberId {
        let mut inner = self.inner.borrow_mut();
        let id = SubscriberId(inner.next_id);
        inner.next_id += 1;
        inner.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Removes a subscriber.
    ///
    /// Returns `true` if the id was registered. During a notification pass
    /// the removal is recorded and applied when the pass completes; the
    /// subscriber will not be called again afterwards.
    pub fn unsubscribe(&self, id: SubscriberId) -> bool {
        let mut inner = self.inner.borrow_mut();
        if inner.notifying {
            if inner.removed.contains(&id) {
                return false;
            }
            inner.removed.push(id);
            return true;
        }
        let before = inner.subscribers.len();
        inner.subscribers.retain(|(sid, _)| *sid != id);
        inner.subscribers.len() != before
    }

    /// Returns the number of registered subscribers.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.inner.borrow().subscribers.len()
    }

    /// Delivers notification passes until no deferred value remains.
    ///
    /// Subscribers are taken out of the cell while they run so they may call
    /// `get`, `set`, `subscribe`, or `unsubscribe` without re-borrowing.
    fn run_notification_passes(&self) {
        loop {
            let value = self.inner.borrow().value.clone();
            let mut active = mem::take(&mut self.inner.borrow_mut().subscribers);
            for (_, callback) in &mut active {
                callback(&value);
            }

            let mut inner = self.inner.borrow_mut();
            // Merge subscriptions added during the pass, then apply removals.
            let added = mem::take(&mut inner.subscribers);
            active.extend(added);
            let removed = mem::take(&mut inner.removed);
            active.retain(|(id, _)| !removed.contains(id));
            inner.subscribers = active;

            match inner.pending.take() {
                Some(next) => inner.value = next,
                None => {
                    inner.notifying = false;
                    return;
                }
            }
        }
    }
}

impl<T> Clone for ValueCell<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for ValueCell<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.inner.try_borrow() {
            Ok(inner) => f
                .debug_struct("ValueCell")
                .field("value", &inner.value)
                .field("subscribers", &inner.subscribers.len())
                .finish(),
            Err(_) => f.debug_struct("ValueCell").finish_non_exhaustive(),
        }
    }
}

/// Keeps `target` synchronized with `f(source)`.
///
/// The target is updated immediately with the mapped current value, then
/// eagerly on every upstream notification. Returns the subscription id on
/// `source`; unsubscribing it severs the link.
///
/// # Example
///
/// ```
/// use underscroll_cell::{ValueCell, map_into};
///
/// let velocity = ValueCell::new(0.0_f64);
/// let factor = ValueCell::new(0.0_f64);
/// map_into(&velocity, &factor, |v| v / 200.0);
///
/// velocity.set(1000.0);
/// assert_eq!(factor.get(), 5.0);
/// ```
pub fn map_into<T, U>(
    source: &ValueCell<T>,
    target: &ValueCell<U>,
    mut f: impl FnMut(&T) -> U + 'static,
) -> SubscriberId
where
    T: Clone + 'static,
    U: Clone + 'static,
{
    target.set(f(&source.get()));
    let target = target.clone();
    source.subscribe(move |value| target.set(f(value)))
}
