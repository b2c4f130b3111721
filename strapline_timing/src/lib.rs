// Copyright 2026 the Strapline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Strapline Timing: host-agnostic timer queue primitives.
//!
//! UI state machines often need "do this later" behaviour (debounced hover,
//! delayed tooltips, transition timeouts) without owning a clock or an event
//! loop. [`TimerQueue`] keeps pending timers ordered by deadline; the host
//! supplies the current time and asks which timers are due.
//!
//! Time is a plain `u64` in milliseconds from any monotonic origin the host
//! likes. Nothing here reads a clock.
//!
//! ```rust
//! use strapline_timing::TimerQueue;
//!
//! let mut timers = TimerQueue::new();
//! let show = timers.schedule_after(1_000, 100, "show");
//! let hide = timers.schedule_after(1_000, 500, "hide");
//!
//! assert_eq!(timers.next_deadline(), Some(1_100));
//! assert!(timers.pop_due(1_050).is_none());
//!
//! let fired = timers.pop_due(1_100).unwrap();
//! assert_eq!(fired.id, show);
//! assert_eq!(fired.payload, "show");
//!
//! // Cancelling hands the payload back and the timer never fires.
//! assert_eq!(timers.cancel(hide), Some("hide"));
//! assert!(timers.drain_due(u64::MAX).is_empty());
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use alloc::vec::Vec;
use core::num::NonZeroU64;

/// Identifies a scheduled timer within its queue.
///
/// Ids are never reused by the queue that issued them, so a stale id can be
/// cancelled safely: it simply matches nothing.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(NonZeroU64);

impl TimerId {
    /// The raw id value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0.get()
    }
}

/// A timer that has come due.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Timer<T> {
    /// The id returned when the timer was scheduled.
    pub id: TimerId,
    /// The deadline it was scheduled for.
    pub deadline: u64,
    /// The scheduled payload.
    pub payload: T,
}

/// Pending timers ordered by deadline.
///
/// Timers sharing a deadline fire in the order they were scheduled.
#[derive(Clone, Debug)]
pub struct TimerQueue<T> {
    // Sorted by (deadline, id); ids increase monotonically.
    pending: Vec<Timer<T>>,
    next_id: u64,
}

impl<T> Default for TimerQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> TimerQueue<T> {
    /// Creates an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self {
            pending: Vec::new(),
            next_id: 1,
        }
    }

    /// Schedules `payload` to fire at `deadline`.
    pub fn schedule(&mut self, deadline: u64, payload: T) -> TimerId {
        let id = self.issue_id();
        let idx = self
            .pending
            .partition_point(|t| (t.deadline, t.id) <= (deadline, id));
        self.pending.insert(
            idx,
            Timer {
                id,
                deadline,
                payload,
            },
        );
        id
    }

    /// Schedules `payload` to fire `delay` milliseconds after `now`.
    ///
    /// Deadlines saturate at `u64::MAX`.
    pub fn schedule_after(&mut self, now: u64, delay: u64, payload: T) -> TimerId {
        self.schedule(now.saturating_add(delay), payload)
    }

    /// Cancels a pending timer, returning its payload.
    ///
    /// Returns `None` if the timer already fired or was cancelled.
    pub fn cancel(&mut self, id: TimerId) -> Option<T> {
        let idx = self.pending.iter().position(|t| t.id == id)?;
        Some(self.pending.remove(idx).payload)
    }

    /// Returns `true` if `id` is still pending.
    #[must_use]
    pub fn is_pending(&self, id: TimerId) -> bool {
        self.pending.iter().any(|t| t.id == id)
    }

    /// Deadline of the earliest pending timer.
    #[must_use]
    pub fn next_deadline(&self) -> Option<u64> {
        self.pending.first().map(|t| t.deadline)
    }

    /// Removes and returns the earliest timer if it is due at `now`.
    pub fn pop_due(&mut self, now: u64) -> Option<Timer<T>> {
        if self.pending.first()?.deadline <= now {
            Some(self.pending.remove(0))
        } else {
            None
        }
    }

    /// Removes and returns every timer due at `now`, earliest first.
    pub fn drain_due(&mut self, now: u64) -> Vec<Timer<T>> {
        let split = self.pending.partition_point(|t| t.deadline <= now);
        self.pending.drain(..split).collect()
    }

    /// Number of pending timers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Returns `true` if nothing is pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Cancels every pending timer.
    pub fn clear(&mut self) {
        self.pending.clear();
    }

    fn issue_id(&mut self) -> TimerId {
        // `next_id` starts at 1 and only grows, so it is never zero.
        let id = NonZeroU64::new(self.next_id).unwrap_or(NonZeroU64::MIN);
        self.next_id = self.next_id.wrapping_add(1).max(1);
        TimerId(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn fires_in_deadline_order() {
        let mut q = TimerQueue::new();
        q.schedule(30, 'c');
        q.schedule(10, 'a');
        q.schedule(20, 'b');

        let fired: Vec<char> = q.drain_due(25).into_iter().map(|t| t.payload).collect();
        assert_eq!(fired, vec!['a', 'b']);
        assert_eq!(q.len(), 1);
        assert_eq!(q.next_deadline(), Some(30));
    }

    #[test]
    fn equal_deadlines_fire_in_schedule_order() {
        let mut q = TimerQueue::new();
        let first = q.schedule(5, 1);
        let second = q.schedule(5, 2);
        assert_eq!(q.pop_due(5).map(|t| t.id), Some(first));
        assert_eq!(q.pop_due(5).map(|t| t.id), Some(second));
        assert!(q.pop_due(5).is_none());
    }

    #[test]
    fn cancel_is_idempotent_and_ids_are_not_reused() {
        let mut q = TimerQueue::new();
        let a = q.schedule(10, ());
        assert!(q.is_pending(a));
        assert_eq!(q.cancel(a), Some(()));
        assert_eq!(q.cancel(a), None);
        assert!(!q.is_pending(a));

        let b = q.schedule(10, ());
        assert_ne!(a, b);
        assert!(b > a);
    }

    #[test]
    fn deadline_is_inclusive() {
        let mut q = TimerQueue::new();
        q.schedule_after(100, 50, ());
        assert!(q.pop_due(149).is_none());
        assert!(q.pop_due(150).is_some());
        assert!(q.is_empty());
    }

    #[test]
    fn schedule_after_saturates() {
        let mut q = TimerQueue::new();
        q.schedule_after(u64::MAX - 1, 10, ());
        assert_eq!(q.next_deadline(), Some(u64::MAX));
    }

    #[test]
    fn clear_drops_everything() {
        let mut q = TimerQueue::new();
        let id = q.schedule(1, ());
        q.schedule(2, ());
        q.clear();
        assert!(q.is_empty());
        assert!(!q.is_pending(id));
        assert_eq!(q.next_deadline(), None);
    }
}
