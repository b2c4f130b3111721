// Copyright 2026 the Strapline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Visibility state machine with debounced show/hide requests.

use strapline_timing::{TimerId, TimerQueue};

use crate::TriggerConfig;

/// A change in overlay visibility.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Transition {
    /// The overlay became visible.
    Shown,
    /// The overlay became hidden.
    Hidden,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Pending {
    Show,
    Hide,
}

/// Tracks whether an overlay is shown and owns its pending delay timers.
///
/// At most one show timer and one hide timer are pending at any time, and
/// never both: a delayed request in one direction cancels an outstanding
/// timer in the other direction and returns without scheduling. The host
/// drives time by calling [`poll`](Self::poll) at or after
/// [`next_deadline`](Self::next_deadline).
///
/// ```
/// use strapline_overlay::{OverlayController, TriggerConfig, Transition};
///
/// let mut overlay = OverlayController::new(&TriggerConfig::new().with_delay_show(100));
///
/// assert_eq!(overlay.request_delayed_show(0), None);
/// assert_eq!(overlay.next_deadline(), Some(100));
/// assert_eq!(overlay.poll(99), None);
/// assert_eq!(overlay.poll(100), Some(Transition::Shown));
/// assert!(overlay.is_shown());
/// ```
///
/// The explicit [`show`](Self::show), [`hide`](Self::hide) and
/// [`toggle`](Self::toggle) operations leave pending timers alone; a timer
/// that fires later still applies its transition.
#[derive(Clone, Debug)]
pub struct OverlayController {
    shown: bool,
    show_delay: u64,
    hide_delay: u64,
    timers: TimerQueue<Pending>,
    show_timer: Option<TimerId>,
    hide_timer: Option<TimerId>,
    torn_down: bool,
}

impl OverlayController {
    /// Creates a controller using the delays and initial state of `config`.
    #[must_use]
    pub fn new(config: &TriggerConfig) -> Self {
        Self::with_delays(config.show_delay(), config.hide_delay(), config.default_shown)
    }

    /// Creates a controller from explicit delays.
    #[must_use]
    pub fn with_delays(show_delay: u64, hide_delay: u64, shown: bool) -> Self {
        Self {
            shown,
            show_delay,
            hide_delay,
            timers: TimerQueue::new(),
            show_timer: None,
            hide_timer: None,
            torn_down: false,
        }
    }

    /// Replaces the delays used by future requests.
    ///
    /// Timers already pending keep their original deadlines.
    pub fn set_delays(&mut self, show_delay: u64, hide_delay: u64) {
        self.show_delay = show_delay;
        self.hide_delay = hide_delay;
    }

    /// Whether the overlay is currently shown.
    #[must_use]
    pub fn is_shown(&self) -> bool {
        self.shown
    }

    /// Shows the overlay immediately.
    pub fn show(&mut self) -> Option<Transition> {
        self.set_shown(true)
    }

    /// Hides the overlay immediately.
    pub fn hide(&mut self) -> Option<Transition> {
        self.set_shown(false)
    }

    /// Flips visibility immediately.
    pub fn toggle(&mut self) -> Option<Transition> {
        self.set_shown(!self.shown)
    }

    /// Requests that the overlay be shown after the show delay.
    ///
    /// - A pending hide is cancelled and nothing else happens.
    /// - If the overlay is already shown, or a show is already pending,
    ///   this is a no-op.
    /// - With a zero delay the overlay is shown immediately.
    pub fn request_delayed_show(&mut self, now: u64) -> Option<Transition> {
        if self.torn_down {
            return None;
        }
        if let Some(id) = self.hide_timer.take() {
            self.timers.cancel(id);
            log::trace!("show request cancelled pending hide {}", id.get());
            return None;
        }
        if self.shown || self.show_timer.is_some() {
            return None;
        }
        if self.show_delay == 0 {
            return self.show();
        }
        let id = self
            .timers
            .schedule_after(now, self.show_delay, Pending::Show);
        log::trace!(
            "scheduled show {} for {}",
            id.get(),
            now.saturating_add(self.show_delay)
        );
        self.show_timer = Some(id);
        None
    }

    /// Requests that the overlay be hidden after the hide delay.
    ///
    /// Mirror image of [`request_delayed_show`](Self::request_delayed_show).
    pub fn request_delayed_hide(&mut self, now: u64) -> Option<Transition> {
        if self.torn_down {
            return None;
        }
        if let Some(id) = self.show_timer.take() {
            self.timers.cancel(id);
            log::trace!("hide request cancelled pending show {}", id.get());
            return None;
        }
        if !self.shown || self.hide_timer.is_some() {
            return None;
        }
        if self.hide_delay == 0 {
            return self.hide();
        }
        let id = self
            .timers
            .schedule_after(now, self.hide_delay, Pending::Hide);
        log::trace!(
            "scheduled hide {} for {}",
            id.get(),
            now.saturating_add(self.hide_delay)
        );
        self.hide_timer = Some(id);
        None
    }

    /// Fires every timer due at `now` and returns the resulting transition.
    ///
    /// Returns `None` if nothing fired or visibility did not change.
    pub fn poll(&mut self, now: u64) -> Option<Transition> {
        if self.torn_down {
            return None;
        }
        let mut result = None;
        while let Some(timer) = self.timers.pop_due(now) {
            let transition = match timer.payload {
                Pending::Show => {
                    if self.show_timer == Some(timer.id) {
                        self.show_timer = None;
                    }
                    self.show()
                }
                Pending::Hide => {
                    if self.hide_timer == Some(timer.id) {
                        self.hide_timer = None;
                    }
                    self.hide()
                }
            };
            if transition.is_some() {
                result = transition;
            }
        }
        result
    }

    /// When the host should next call [`poll`](Self::poll).
    #[must_use]
    pub fn next_deadline(&self) -> Option<u64> {
        if self.torn_down {
            return None;
        }
        self.timers.next_deadline()
    }

    /// Whether a delayed show is waiting.
    #[must_use]
    pub fn has_pending_show(&self) -> bool {
        self.show_timer.is_some()
    }

    /// Whether a delayed hide is waiting.
    #[must_use]
    pub fn has_pending_hide(&self) -> bool {
        self.hide_timer.is_some()
    }

    /// Cancels all timers and ignores every later request.
    pub fn teardown(&mut self) {
        if self.torn_down {
            return;
        }
        self.timers.clear();
        self.show_timer = None;
        self.hide_timer = None;
        self.torn_down = true;
        log::debug!("overlay controller torn down");
    }

    /// Whether [`teardown`](Self::teardown) has been called.
    #[must_use]
    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    fn set_shown(&mut self, shown: bool) -> Option<Transition> {
        if self.torn_down || self.shown == shown {
            return None;
        }
        self.shown = shown;
        let transition = if shown {
            Transition::Shown
        } else {
            Transition::Hidden
        };
        log::debug!("overlay {transition:?}");
        Some(transition)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn delayed(show: u64, hide: u64) -> OverlayController {
        OverlayController::with_delays(show, hide, false)
    }

    #[test]
    fn zero_delay_transitions_immediately() {
        let mut c = delayed(0, 0);
        assert_eq!(c.request_delayed_show(5), Some(Transition::Shown));
        assert_eq!(c.next_deadline(), None);
        assert_eq!(c.request_delayed_hide(6), Some(Transition::Hidden));
        assert!(!c.is_shown());
    }

    #[test]
    fn repeated_requests_do_not_stack_timers() {
        let mut c = delayed(100, 0);
        c.request_delayed_show(0);
        c.request_delayed_show(10);
        c.request_delayed_show(20);
        assert_eq!(c.next_deadline(), Some(100));
        assert_eq!(c.poll(100), Some(Transition::Shown));
        assert_eq!(c.next_deadline(), None);
    }

    #[test]
    fn opposite_request_cancels_and_returns() {
        let mut c = delayed(100, 100);
        c.request_delayed_show(0);
        assert!(c.has_pending_show());

        // The hide request only cancels the show; it schedules nothing.
        assert_eq!(c.request_delayed_hide(50), None);
        assert!(!c.has_pending_show());
        assert!(!c.has_pending_hide());
        assert_eq!(c.poll(1_000), None);
        assert!(!c.is_shown());
    }

    #[test]
    fn show_request_while_shown_is_a_no_op() {
        let mut c = OverlayController::with_delays(100, 100, true);
        assert_eq!(c.request_delayed_show(0), None);
        assert!(!c.has_pending_show());
    }

    #[test]
    fn explicit_operations_report_changes_only() {
        let mut c = delayed(0, 0);
        assert_eq!(c.hide(), None);
        assert_eq!(c.show(), Some(Transition::Shown));
        assert_eq!(c.show(), None);
        assert_eq!(c.toggle(), Some(Transition::Hidden));
        assert_eq!(c.toggle(), Some(Transition::Shown));
    }

    #[test]
    fn teardown_cancels_and_silences() {
        let mut c = delayed(100, 100);
        c.request_delayed_show(0);
        c.teardown();
        assert!(c.is_torn_down());
        assert_eq!(c.next_deadline(), None);
        assert_eq!(c.poll(1_000), None);
        assert_eq!(c.show(), None);
        assert_eq!(c.request_delayed_show(2_000), None);
        assert!(!c.is_shown());
    }

    #[test]
    fn new_delays_apply_to_later_requests() {
        let mut c = delayed(100, 100);
        c.request_delayed_show(0);
        c.set_delays(10, 10);
        assert_eq!(c.next_deadline(), Some(100));
        assert_eq!(c.poll(100), Some(Transition::Shown));
        c.request_delayed_hide(200);
        assert_eq!(c.next_deadline(), Some(210));
    }
}
