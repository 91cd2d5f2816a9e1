// Copyright 2026 the Underscroll Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! One-shot deadline timers polled against caller-owned time.

use alloc::vec::Vec;

/// Identifier for a scheduled timer.
///
/// Returned by [`TimerQueue::schedule`]; ids are never reused within one
/// queue, so a fired or cancelled id can be held safely.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct TimerId(u64);

#[derive(Clone, Copy, Debug)]
struct Entry {
    id: TimerId,
    deadline: f64,
}

/// A queue of independent one-shot timers.
///
/// Time is a caller-owned monotonic value in seconds; the queue never reads a
/// real clock. Scheduling never coalesces or cancels earlier entries: two
/// timers with overlapping windows both fire. This independence is load
/// bearing for the click-impact latch, which deliberately schedules one reset
/// per trigger.
///
/// # Example
///
/// ```
/// use underscroll_timing::TimerQueue;
///
/// let mut timers = TimerQueue::new();
/// let a = timers.schedule(0.2);
/// let b = timers.schedule(0.35);
///
/// assert_eq!(timers.poll(0.2), vec![a]);
/// assert_eq!(timers.pending(), 1);
/// assert_eq!(timers.poll(1.0), vec![b]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct TimerQueue {
    entries: Vec<Entry>,
    next_id: u64,
}

impl TimerQueue {
    /// Creates an empty timer queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedules a one-shot timer at the given absolute deadline.
    ///
    /// Deadlines in the past (relative to the next `poll`) fire on that
    /// poll. A non-finite deadline is accepted but never fires unless
    /// polled with a time that reaches it.
    pub fn schedule(&mut self, deadline: f64) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.entries.push(Entry { id, deadline });
        id
    }

    /// Cancels a pending timer.
    ///
    /// Returns `true` if the timer was pending and is now removed.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        self.entries.len() != before
    }

    /// Fires every timer with `deadline <= now`.
    ///
    /// Fired ids are returned in deadline order; ties fire in schedule
    /// order. Remaining timers stay pending.
    pub fn poll(&mut self, now: f64) -> Vec<TimerId> {
        let mut due: Vec<Entry> = Vec::new();
        self.entries.retain(|e| {
            if e.deadline <= now {
                due.push(*e);
                false
            } else {
                true
            }
        });
        // Schedule order is the id order, which `retain` preserved; a stable
        // sort by deadline keeps it for ties.
        due.sort_by(|a, b| a.deadline.total_cmp(&b.deadline));
        due.into_iter().map(|e| e.id).collect()
    }

    /// Returns the number of pending timers.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.entries.len()
    }

    /// Returns the earliest pending deadline, if any.
    #[must_use]
    pub fn next_deadline(&self) -> Option<f64> {
        self.entries
            .iter()
            .map(|e| e.deadline)
            .min_by(f64::total_cmp)
    }
}

#[cfg(test)]
mod tests {
    use super::TimerQueue;
    use alloc::vec;
    use alloc::vec::Vec;

    #[test]
    fn fires_at_or_after_deadline() {
        let mut timers = TimerQueue::new();
        let id = timers.schedule(0.2);

        assert!(timers.poll(0.19).is_empty());
        assert_eq!(timers.poll(0.2), vec![id]);
        assert!(timers.poll(10.0).is_empty());
    }

    #[test]
    fn fires_in_deadline_order_with_stable_ties() {
        let mut timers = TimerQueue::new();
        let late = timers.schedule(0.5);
        let early_a = timers.schedule(0.1);
        let early_b = timers.schedule(0.1);

        assert_eq!(timers.poll(1.0), vec![early_a, early_b, late]);
    }

    #[test]
    fn overlapping_timers_are_independent() {
        let mut timers = TimerQueue::new();
        let first = timers.schedule(0.2);
        let second = timers.schedule(0.3);

        // The first firing does not disturb the second.
        assert_eq!(timers.poll(0.2), vec![first]);
        assert_eq!(timers.pending(), 1);
        assert_eq!(timers.poll(0.3), vec![second]);
    }

    #[test]
    fn cancel_removes_pending_timer() {
        let mut timers = TimerQueue::new();
        let id = timers.schedule(0.2);
        let kept = timers.schedule(0.4);

        assert!(timers.cancel(id));
        assert!(!timers.cancel(id));
        assert_eq!(timers.poll(1.0), vec![kept]);
    }

    #[test]
    fn next_deadline_reports_earliest() {
        let mut timers = TimerQueue::new();
        assert_eq!(timers.next_deadline(), None);
        timers.schedule(0.4);
        timers.schedule(0.2);
        assert_eq!(timers.next_deadline(), Some(0.2));
    }

    #[test]
    fn past_deadline_fires_on_next_poll() {
        let mut timers = TimerQueue::new();
        let id = timers.schedule(-1.0);
        let fired: Vec<_> = timers.poll(0.0);
        assert_eq!(fired, vec![id]);
    }
}
