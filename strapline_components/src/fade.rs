// Copyright 2026 the Strapline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fade-in/fade-out transitions.

use alloc::string::String;

use strapline_callback::{Callback, call_opt};
use strapline_timing::{TimerId, TimerQueue};

use crate::Element;

/// Default fade duration in milliseconds.
pub const DEFAULT_FADE_TIMEOUT: u64 = 300;

/// Where a [`Fade`] is in its transition.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum FadeStatus {
    /// Not in the tree at all.
    Unmounted,
    /// Mounted but faded out.
    Exited,
    /// Fading in.
    Entering,
    /// Fully visible.
    Entered,
    /// Fading out.
    Exiting,
}

impl FadeStatus {
    /// Whether the `in` class applies.
    #[must_use]
    pub const fn is_in(self) -> bool {
        matches!(self, Self::Entering | Self::Entered)
    }
}

/// Fades its child in and out.
///
/// The child carries `fade` always and `in` while entering or entered; the
/// stylesheet animates the opacity. The host drives the timeline with
/// [`set_in`](Self::set_in) and [`poll`](Self::poll) using millisecond
/// timestamps.
///
/// ```
/// use strapline_components::{Element, Fade, FadeStatus};
///
/// let mut fade = Fade::new(Element::new("div")).with_unmount_on_exit(true);
/// fade.mount(false, 0);
/// assert!(fade.render().is_none());
///
/// fade.set_in(true, 0);
/// assert_eq!(fade.render().unwrap().class_attr(), "fade in");
/// assert_eq!(fade.poll(300), Some(FadeStatus::Entered));
///
/// fade.set_in(false, 1_000);
/// assert_eq!(fade.render().unwrap().class_attr(), "fade");
/// assert_eq!(fade.poll(1_300), Some(FadeStatus::Unmounted));
/// ```
#[derive(Clone, Debug)]
pub struct Fade {
    /// The element being faded.
    pub child: Element,
    /// Caller classes, merged onto the child.
    pub class_name: Option<String>,
    /// Duration of each fade in milliseconds.
    pub timeout: u64,
    /// Stays unmounted until first shown.
    pub mount_on_enter: bool,
    /// Unmounts once faded out.
    pub unmount_on_exit: bool,
    /// Fades in on mount when initially shown.
    pub transition_appear: bool,
    /// Runs on every status change.
    pub on_status: Option<Callback<FadeStatus>>,
    status: FadeStatus,
    shown: bool,
    timers: TimerQueue<FadeStatus>,
    pending: Option<TimerId>,
}

impl Fade {
    /// Fades `child` with the default timeout. Starts exited.
    #[must_use]
    pub fn new(child: Element) -> Self {
        Self {
            child,
            class_name: None,
            timeout: DEFAULT_FADE_TIMEOUT,
            mount_on_enter: false,
            unmount_on_exit: false,
            transition_appear: false,
            on_status: None,
            status: FadeStatus::Exited,
            shown: false,
            timers: TimerQueue::new(),
            pending: None,
        }
    }

    /// Adds caller classes.
    #[must_use]
    pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    /// Sets the fade duration.
    #[must_use]
    pub fn with_timeout(mut self, timeout: u64) -> Self {
        self.timeout = timeout;
        self
    }

    /// Stays unmounted until first shown.
    #[must_use]
    pub fn with_mount_on_enter(mut self, mount_on_enter: bool) -> Self {
        self.mount_on_enter = mount_on_enter;
        self
    }

    /// Unmounts once faded out.
    #[must_use]
    pub fn with_unmount_on_exit(mut self, unmount_on_exit: bool) -> Self {
        self.unmount_on_exit = unmount_on_exit;
        self
    }

    /// Fades in on mount when initially shown.
    #[must_use]
    pub fn with_transition_appear(mut self, transition_appear: bool) -> Self {
        self.transition_appear = transition_appear;
        self
    }

    /// Sets the status handler.
    #[must_use]
    pub fn on_status(mut self, f: impl Fn(&FadeStatus) + 'static) -> Self {
        self.on_status = Some(Callback::new(f));
        self
    }

    /// The current status.
    #[must_use]
    pub fn status(&self) -> FadeStatus {
        self.status
    }

    /// Whether the child is in the tree.
    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.status != FadeStatus::Unmounted
    }

    /// When the running fade finishes.
    #[must_use]
    pub fn next_deadline(&self) -> Option<u64> {
        self.timers.next_deadline()
    }

    /// Sets the initial state without animating, unless `transition_appear`
    /// asks for a fade-in on mount.
    pub fn mount(&mut self, shown: bool, now: u64) {
        self.cancel_pending();
        self.shown = shown;
        self.status = if shown {
            if self.transition_appear {
                FadeStatus::Exited
            } else {
                FadeStatus::Entered
            }
        } else if self.mount_on_enter || self.unmount_on_exit {
            FadeStatus::Unmounted
        } else {
            FadeStatus::Exited
        };
        if shown && self.transition_appear {
            self.enter(now);
        }
    }

    /// Starts fading in or out. Returns the new status, or `None` when
    /// `shown` matches the current target.
    pub fn set_in(&mut self, shown: bool, now: u64) -> Option<FadeStatus> {
        if shown == self.shown {
            return None;
        }
        self.shown = shown;
        self.cancel_pending();
        if shown {
            self.enter(now);
        } else {
            self.exit(now);
        }
        Some(self.status)
    }

    /// Finishes any fade whose timeout has elapsed. Returns the last status
    /// reached.
    pub fn poll(&mut self, now: u64) -> Option<FadeStatus> {
        let mut last = None;
        while let Some(timer) = self.timers.pop_due(now) {
            self.pending = None;
            let mut next = timer.payload;
            if next == FadeStatus::Exited && self.unmount_on_exit {
                self.set_status(FadeStatus::Exited);
                next = FadeStatus::Unmounted;
            }
            self.set_status(next);
            last = Some(next);
        }
        last
    }

    fn enter(&mut self, now: u64) {
        if self.status == FadeStatus::Unmounted {
            self.set_status(FadeStatus::Exited);
        }
        self.set_status(FadeStatus::Entering);
        self.pending = Some(
            self.timers
                .schedule_after(now, self.timeout, FadeStatus::Entered),
        );
        log::trace!("fade: entering until {}", now.saturating_add(self.timeout));
    }

    fn exit(&mut self, now: u64) {
        if !self.is_mounted() {
            return;
        }
        self.set_status(FadeStatus::Exiting);
        self.pending = Some(
            self.timers
                .schedule_after(now, self.timeout, FadeStatus::Exited),
        );
        log::trace!("fade: exiting until {}", now.saturating_add(self.timeout));
    }

    fn cancel_pending(&mut self) {
        if let Some(id) = self.pending.take() {
            self.timers.cancel(id);
        }
    }

    fn set_status(&mut self, status: FadeStatus) {
        if self.status != status {
            log::debug!("fade: {:?} -> {:?}", self.status, status);
            self.status = status;
            call_opt(self.on_status.as_ref(), &status);
        }
    }

    /// Describes the child, or `None` while unmounted.
    #[must_use]
    pub fn render(&self) -> Option<Element> {
        if !self.is_mounted() {
            return None;
        }
        let mut el = self.child.clone();
        el.classes.insert("fade", true);
        el.classes.insert("in", self.status.is_in());
        if let Some(extra) = &self.class_name {
            el.class_name = Some(match el.class_name.take() {
                Some(own) => alloc::format!("{extra} {own}"),
                None => extra.clone(),
            });
        }
        Some(el)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::rc::Rc;
    use alloc::vec::Vec;
    use core::cell::RefCell;

    fn recording(fade: Fade) -> (Fade, Rc<RefCell<Vec<FadeStatus>>>) {
        let log = Rc::new(RefCell::new(Vec::new()));
        let l = log.clone();
        (fade.on_status(move |s| l.borrow_mut().push(*s)), log)
    }

    #[test]
    fn default_timeout() {
        let fade = Fade::new(Element::new("div"));
        assert_eq!(fade.timeout, 300);
        assert_eq!(fade.status(), FadeStatus::Exited);
        assert_eq!(fade.render().unwrap().class_attr(), "fade");
    }

    #[test]
    fn initially_shown_without_appear_is_entered() {
        let mut fade = Fade::new(Element::new("div"));
        fade.mount(true, 0);
        assert_eq!(fade.status(), FadeStatus::Entered);
        assert_eq!(fade.next_deadline(), None);
        assert_eq!(fade.render().unwrap().class_attr(), "fade in");
    }

    #[test]
    fn transition_appear_fades_in_on_mount() {
        let (mut fade, log) = recording(Fade::new(Element::new("div")).with_transition_appear(true));
        fade.mount(true, 50);
        assert_eq!(fade.status(), FadeStatus::Entering);
        assert_eq!(fade.next_deadline(), Some(350));
        assert_eq!(fade.poll(349), None);
        assert_eq!(fade.poll(350), Some(FadeStatus::Entered));
        assert_eq!(*log.borrow(), [FadeStatus::Entering, FadeStatus::Entered]);
    }

    #[test]
    fn reversing_mid_fade_cancels_the_pending_timeout() {
        let mut fade = Fade::new(Element::new("div")).with_timeout(100);
        fade.mount(false, 0);
        fade.set_in(true, 0);
        assert_eq!(fade.set_in(false, 40), Some(FadeStatus::Exiting));
        assert_eq!(fade.next_deadline(), Some(140));
        assert_eq!(fade.poll(100), None);
        assert_eq!(fade.poll(140), Some(FadeStatus::Exited));
        assert_eq!(fade.set_in(false, 200), None);
    }

    #[test]
    fn mount_on_enter_stays_mounted_after_exit() {
        let (mut fade, log) = recording(Fade::new(Element::new("div")).with_mount_on_enter(true));
        fade.mount(false, 0);
        assert!(!fade.is_mounted());
        fade.set_in(true, 0);
        fade.poll(300);
        fade.set_in(false, 400);
        fade.poll(700);
        assert!(fade.is_mounted());
        assert_eq!(
            *log.borrow(),
            [
                FadeStatus::Exited,
                FadeStatus::Entering,
                FadeStatus::Entered,
                FadeStatus::Exiting,
                FadeStatus::Exited,
            ]
        );
    }

    #[test]
    fn hiding_while_unmounted_does_nothing() {
        let mut fade = Fade::new(Element::new("div")).with_unmount_on_exit(true);
        fade.mount(false, 0);
        fade.shown = true;
        assert_eq!(fade.set_in(false, 0), Some(FadeStatus::Unmounted));
        assert_eq!(fade.next_deadline(), None);
    }

    #[test]
    fn caller_classes_precede_the_childs_own() {
        let mut fade = Fade::new(Element::new("div").with_class_name(Some("modal")))
            .with_class_name("custom");
        fade.mount(true, 0);
        assert_eq!(fade.render().unwrap().class_attr(), "custom modal fade in");
    }
}
