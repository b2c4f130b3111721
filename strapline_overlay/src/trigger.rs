// Copyright 2026 the Strapline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Binding an overlay controller to a trigger node's interaction events.

use alloc::string::String;

use strapline_callback::{Callback, call_opt, chain};

use crate::{OverlayController, Placement, Transition, TriggerConfig, TriggerModes};

/// Answers subtree membership queries for the host's node tree.
///
/// Used to turn raw pointer-over/pointer-out events, which bubble from
/// descendants, into enter/leave transitions of the trigger as a whole.
pub trait Containment<K> {
    /// Whether `node` is a descendant of `ancestor`.
    fn contains(&self, ancestor: &K, node: &K) -> bool;
}

impl<K, F> Containment<K> for F
where
    F: Fn(&K, &K) -> bool,
{
    #[inline]
    fn contains(&self, ancestor: &K, node: &K) -> bool {
        self(ancestor, node)
    }
}

/// No structural information: nothing contains anything.
impl<K> Containment<K> for () {
    fn contains(&self, _ancestor: &K, _node: &K) -> bool {
        false
    }
}

/// An interaction event delivered to a trigger.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TriggerEvent<K> {
    /// The trigger was clicked.
    Click,
    /// Raw pointer-over, with the node the pointer came from.
    PointerOver {
        /// Node the pointer left, if known.
        related: Option<K>,
    },
    /// Raw pointer-out, with the node the pointer moved to.
    PointerOut {
        /// Node the pointer entered, if known.
        related: Option<K>,
    },
    /// Native enter: the pointer entered the trigger subtree.
    PointerEnter,
    /// Native leave: the pointer left the trigger subtree.
    PointerLeave,
    /// The trigger gained focus.
    Focus,
    /// The trigger lost focus.
    Blur,
}

/// User handlers attached to a trigger, one slot per event kind.
///
/// Native enter/leave events are delivered to the pointer-over/pointer-out
/// slots.
#[derive(Clone, Debug)]
pub struct TriggerHandlers<K: 'static> {
    /// Runs on every click.
    pub on_click: Option<Callback<TriggerEvent<K>>>,
    /// Runs on pointer-over and pointer-enter when hover is configured.
    pub on_pointer_over: Option<Callback<TriggerEvent<K>>>,
    /// Runs on pointer-out and pointer-leave when hover is configured.
    pub on_pointer_out: Option<Callback<TriggerEvent<K>>>,
    /// Runs on focus when focus is configured.
    pub on_focus: Option<Callback<TriggerEvent<K>>>,
    /// Runs on blur when focus is configured.
    pub on_blur: Option<Callback<TriggerEvent<K>>>,
}

impl<K: 'static> Default for TriggerHandlers<K> {
    fn default() -> Self {
        Self {
            on_click: None,
            on_pointer_over: None,
            on_pointer_out: None,
            on_focus: None,
            on_blur: None,
        }
    }
}

impl<K: 'static> TriggerHandlers<K> {
    /// No handlers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the click handler.
    #[must_use]
    pub fn on_click(mut self, f: impl Fn(&TriggerEvent<K>) + 'static) -> Self {
        self.on_click = Some(Callback::new(f));
        self
    }

    /// Sets the pointer-over handler.
    #[must_use]
    pub fn on_pointer_over(mut self, f: impl Fn(&TriggerEvent<K>) + 'static) -> Self {
        self.on_pointer_over = Some(Callback::new(f));
        self
    }

    /// Sets the pointer-out handler.
    #[must_use]
    pub fn on_pointer_out(mut self, f: impl Fn(&TriggerEvent<K>) + 'static) -> Self {
        self.on_pointer_out = Some(Callback::new(f));
        self
    }

    /// Sets the focus handler.
    #[must_use]
    pub fn on_focus(mut self, f: impl Fn(&TriggerEvent<K>) + 'static) -> Self {
        self.on_focus = Some(Callback::new(f));
        self
    }

    /// Sets the blur handler.
    #[must_use]
    pub fn on_blur(mut self, f: impl Fn(&TriggerEvent<K>) + 'static) -> Self {
        self.on_blur = Some(Callback::new(f));
        self
    }

    /// Combines two handler sets slot by slot; `self` runs first.
    #[must_use]
    pub fn then(self, other: Self) -> Self {
        Self {
            on_click: chain([self.on_click, other.on_click]),
            on_pointer_over: chain([self.on_pointer_over, other.on_pointer_over]),
            on_pointer_out: chain([self.on_pointer_out, other.on_pointer_out]),
            on_focus: chain([self.on_focus, other.on_focus]),
            on_blur: chain([self.on_blur, other.on_blur]),
        }
    }
}

/// What the host needs to render the overlay itself.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OverlayState {
    /// Whether the overlay is visible.
    pub shown: bool,
    /// Where to place it.
    pub placement: Placement,
    /// Whether clicks outside the overlay dismiss it.
    pub root_close: bool,
}

/// A trigger node wired to an overlay.
///
/// The host forwards the trigger's interaction events to
/// [`handle`](Self::handle), polls it with the current time when
/// [`next_deadline`](Self::next_deadline) passes, and reads back visibility
/// and the trigger's accessibility attributes.
///
/// ```
/// use strapline_overlay::{OverlayTrigger, Transition, TriggerConfig, TriggerEvent};
///
/// let config = TriggerConfig::new().with_delay_show(100).with_delay_hide(500);
/// let mut trigger = OverlayTrigger::new(1_u32, config).with_overlay_id("tip");
///
/// // A child of the trigger contains node 2.
/// let tree = |ancestor: &u32, node: &u32| *ancestor == 1 && *node == 2;
///
/// trigger.handle(&TriggerEvent::PointerOver { related: Some(7) }, 0, &tree);
/// assert_eq!(trigger.poll(100), Some(Transition::Shown));
/// assert_eq!(trigger.described_by(), Some("tip"));
///
/// // Moving onto a descendant is not a leave.
/// trigger.handle(&TriggerEvent::PointerOut { related: Some(2) }, 120, &tree);
/// assert_eq!(trigger.next_deadline(), None);
/// ```
#[derive(Debug)]
pub struct OverlayTrigger<K: 'static> {
    node: K,
    config: TriggerConfig,
    controller: OverlayController,
    overlay_id: Option<String>,
    handlers: TriggerHandlers<K>,
}

impl<K: Copy + Eq + 'static> OverlayTrigger<K> {
    /// Wires `node` to a fresh controller configured by `config`.
    ///
    /// Configuration warnings are logged.
    pub fn new(node: K, config: TriggerConfig) -> Self {
        for warning in config.warnings() {
            log::warn!("{warning}");
        }
        let controller = OverlayController::new(&config);
        Self {
            node,
            config,
            controller,
            overlay_id: None,
            handlers: TriggerHandlers::default(),
        }
    }

    /// Sets the id of the overlay element, used for `aria-describedby`.
    #[must_use]
    pub fn with_overlay_id(mut self, id: impl Into<String>) -> Self {
        self.overlay_id = Some(id.into());
        self
    }

    /// Appends user handlers; they run after any already attached.
    #[must_use]
    pub fn with_handlers(mut self, handlers: TriggerHandlers<K>) -> Self {
        self.handlers = core::mem::take(&mut self.handlers).then(handlers);
        self
    }

    /// The trigger node.
    pub fn node(&self) -> K {
        self.node
    }

    /// The active configuration.
    pub fn config(&self) -> &TriggerConfig {
        &self.config
    }

    /// The underlying controller.
    pub fn controller(&self) -> &OverlayController {
        &self.controller
    }

    /// Replaces the configuration.
    ///
    /// New delays apply to later requests; visibility is kept.
    pub fn set_config(&mut self, config: TriggerConfig) {
        for warning in config.warnings() {
            log::warn!("{warning}");
        }
        self.controller
            .set_delays(config.show_delay(), config.hide_delay());
        self.config = config;
    }

    /// Delivers an interaction event at time `now`.
    ///
    /// User handlers run before the controller reacts. Click handlers always
    /// run; hover and focus handlers only run when their mode is configured.
    /// After [`teardown`](Self::teardown) nothing runs.
    pub fn handle<C>(&mut self, event: &TriggerEvent<K>, now: u64, tree: &C) -> Option<Transition>
    where
        C: Containment<K> + ?Sized,
    {
        if self.controller.is_torn_down() {
            log::trace!("overlay trigger: event after teardown ignored");
            return None;
        }
        let modes = self.config.modes;
        match event {
            TriggerEvent::Click => {
                call_opt(self.handlers.on_click.as_ref(), event);
                if modes.contains(TriggerModes::CLICK) {
                    self.controller.toggle()
                } else {
                    None
                }
            }
            TriggerEvent::PointerOver { related } if modes.contains(TriggerModes::HOVER) => {
                call_opt(self.handlers.on_pointer_over.as_ref(), event);
                if self.crosses_boundary(related.as_ref(), tree) {
                    self.controller.request_delayed_show(now)
                } else {
                    None
                }
            }
            TriggerEvent::PointerOut { related } if modes.contains(TriggerModes::HOVER) => {
                call_opt(self.handlers.on_pointer_out.as_ref(), event);
                if self.crosses_boundary(related.as_ref(), tree) {
                    self.controller.request_delayed_hide(now)
                } else {
                    None
                }
            }
            TriggerEvent::PointerEnter if modes.contains(TriggerModes::HOVER) => {
                call_opt(self.handlers.on_pointer_over.as_ref(), event);
                self.controller.request_delayed_show(now)
            }
            TriggerEvent::PointerLeave if modes.contains(TriggerModes::HOVER) => {
                call_opt(self.handlers.on_pointer_out.as_ref(), event);
                self.controller.request_delayed_hide(now)
            }
            TriggerEvent::Focus if modes.contains(TriggerModes::FOCUS) => {
                call_opt(self.handlers.on_focus.as_ref(), event);
                self.controller.request_delayed_show(now)
            }
            TriggerEvent::Blur if modes.contains(TriggerModes::FOCUS) => {
                call_opt(self.handlers.on_blur.as_ref(), event);
                self.controller.request_delayed_hide(now)
            }
            _ => None,
        }
    }

    /// The overlay asked to close.
    pub fn dismiss(&mut self) -> Option<Transition> {
        self.controller.hide()
    }

    /// A click landed outside the overlay. Hides it only with `root_close`.
    pub fn outside_click(&mut self) -> Option<Transition> {
        if self.config.root_close {
            self.controller.hide()
        } else {
            None
        }
    }

    /// Fires due timers.
    pub fn poll(&mut self, now: u64) -> Option<Transition> {
        self.controller.poll(now)
    }

    /// When the host should next call [`poll`](Self::poll).
    pub fn next_deadline(&self) -> Option<u64> {
        self.controller.next_deadline()
    }

    /// Whether the overlay is shown.
    pub fn is_shown(&self) -> bool {
        self.controller.is_shown()
    }

    /// The trigger's `aria-describedby` value: the overlay id while shown.
    pub fn described_by(&self) -> Option<&str> {
        if self.controller.is_shown() {
            self.overlay_id.as_deref()
        } else {
            None
        }
    }

    /// Snapshot for rendering the overlay.
    pub fn overlay_state(&self) -> OverlayState {
        OverlayState {
            shown: self.controller.is_shown(),
            placement: self.config.placement,
            root_close: self.config.root_close,
        }
    }

    /// Cancels timers. Afterwards events reach neither the user handlers nor
    /// the controller, and visibility is frozen.
    pub fn teardown(&mut self) {
        self.controller.teardown();
    }

    fn crosses_boundary<C>(&self, related: Option<&K>, tree: &C) -> bool
    where
        C: Containment<K> + ?Sized,
    {
        match related {
            None => true,
            Some(related) => *related != self.node && !tree.contains(&self.node, related),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::rc::Rc;
    use alloc::vec::Vec;
    use core::cell::RefCell;

    fn recorder(
        log: &Rc<RefCell<Vec<&'static str>>>,
        name: &'static str,
    ) -> impl Fn(&TriggerEvent<u32>) + 'static {
        let log = log.clone();
        move |_| log.borrow_mut().push(name)
    }

    #[test]
    fn click_toggles_only_in_click_mode() {
        let mut t = OverlayTrigger::new(1_u32, TriggerConfig::new());
        assert_eq!(t.handle(&TriggerEvent::Click, 0, &()), None);

        let mut t = OverlayTrigger::new(
            1_u32,
            TriggerConfig::new().with_modes(TriggerModes::CLICK),
        );
        assert_eq!(t.handle(&TriggerEvent::Click, 0, &()), Some(Transition::Shown));
        assert_eq!(t.handle(&TriggerEvent::Click, 1, &()), Some(Transition::Hidden));
    }

    #[test]
    fn click_handler_runs_regardless_of_modes() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut t = OverlayTrigger::new(1_u32, TriggerConfig::new())
            .with_handlers(TriggerHandlers::new().on_click(recorder(&log, "click")));
        t.handle(&TriggerEvent::Click, 0, &());
        assert_eq!(*log.borrow(), ["click"]);
    }

    #[test]
    fn hover_handlers_are_skipped_without_hover_mode() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut t = OverlayTrigger::new(
            1_u32,
            TriggerConfig::new().with_modes(TriggerModes::FOCUS),
        )
        .with_handlers(
            TriggerHandlers::new()
                .on_pointer_over(recorder(&log, "over"))
                .on_focus(recorder(&log, "focus")),
        );
        t.handle(&TriggerEvent::PointerOver { related: None }, 0, &());
        assert!(log.borrow().is_empty());
        assert_eq!(t.handle(&TriggerEvent::Focus, 0, &()), Some(Transition::Shown));
        assert_eq!(*log.borrow(), ["focus"]);
    }

    #[test]
    fn chained_handlers_run_in_attachment_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut t = OverlayTrigger::new(1_u32, TriggerConfig::new())
            .with_handlers(TriggerHandlers::new().on_focus(recorder(&log, "child")))
            .with_handlers(TriggerHandlers::new().on_focus(recorder(&log, "user")));
        t.handle(&TriggerEvent::Focus, 0, &());
        assert_eq!(*log.borrow(), ["child", "user"]);
    }

    #[test]
    fn pointer_moves_inside_the_subtree_are_ignored() {
        let tree = |a: &u32, n: &u32| *a == 1 && (*n == 2 || *n == 3);
        let mut t = OverlayTrigger::new(1_u32, TriggerConfig::new());

        assert_eq!(
            t.handle(&TriggerEvent::PointerOver { related: Some(9) }, 0, &tree),
            Some(Transition::Shown)
        );
        assert_eq!(
            t.handle(&TriggerEvent::PointerOut { related: Some(3) }, 1, &tree),
            None
        );
        assert_eq!(
            t.handle(&TriggerEvent::PointerOut { related: Some(1) }, 2, &tree),
            None
        );
        assert!(t.is_shown());
        assert_eq!(
            t.handle(&TriggerEvent::PointerOut { related: None }, 3, &tree),
            Some(Transition::Hidden)
        );
    }

    #[test]
    fn dismissal_and_root_close() {
        let mut t = OverlayTrigger::new(1_u32, TriggerConfig::new().with_default_shown(true));
        assert_eq!(t.outside_click(), None);
        assert!(t.is_shown());
        assert_eq!(t.dismiss(), Some(Transition::Hidden));

        let mut t = OverlayTrigger::new(
            1_u32,
            TriggerConfig::new()
                .with_default_shown(true)
                .with_root_close(true),
        );
        assert_eq!(t.outside_click(), Some(Transition::Hidden));
    }

    #[test]
    fn described_by_follows_visibility() {
        let mut t = OverlayTrigger::new(1_u32, TriggerConfig::new()).with_overlay_id("pop");
        assert_eq!(t.described_by(), None);
        t.handle(&TriggerEvent::Focus, 0, &());
        assert_eq!(t.described_by(), Some("pop"));
        t.handle(&TriggerEvent::Blur, 1, &());
        assert_eq!(t.described_by(), None);
    }

    #[test]
    fn overlay_state_reports_placement() {
        let t = OverlayTrigger::new(
            1_u32,
            TriggerConfig::new().with_placement(Placement::Bottom),
        );
        assert_eq!(
            t.overlay_state(),
            OverlayState {
                shown: false,
                placement: Placement::Bottom,
                root_close: false,
            }
        );
    }

    #[test]
    fn handlers_stop_running_after_teardown() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut t = OverlayTrigger::new(
            1_u32,
            TriggerConfig::new().with_modes(TriggerModes::CLICK | TriggerModes::FOCUS),
        )
        .with_handlers(
            TriggerHandlers::new()
                .on_click(recorder(&log, "click"))
                .on_focus(recorder(&log, "focus")),
        );
        t.handle(&TriggerEvent::Click, 0, &());
        t.teardown();
        assert_eq!(t.handle(&TriggerEvent::Click, 1, &()), None);
        assert_eq!(t.handle(&TriggerEvent::Focus, 2, &()), None);
        assert_eq!(*log.borrow(), ["click"]);
        assert!(t.is_shown());
    }

    #[test]
    fn set_config_updates_future_delays() {
        let mut t = OverlayTrigger::new(1_u32, TriggerConfig::new());
        t.set_config(TriggerConfig::new().with_delay(50));
        t.handle(&TriggerEvent::PointerEnter, 10, &());
        assert_eq!(t.next_deadline(), Some(60));
    }
}
