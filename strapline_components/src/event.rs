// Copyright 2026 the Strapline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Activation events and selection payloads.

use alloc::borrow::Cow;
use alloc::rc::Rc;
use alloc::string::{String, ToString};
use core::cell::Cell;
use core::fmt;

/// Keys that components react to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    /// The space bar.
    Space,
    /// Enter or Return.
    Enter,
    /// Escape.
    Escape,
    /// Tab.
    Tab,
    /// Any other key.
    Other,
}

#[derive(Debug, Default)]
struct EventFlags {
    default_prevented: Cell<bool>,
    propagation_stopped: Cell<bool>,
}

/// A click or key press delivered to an activatable element.
///
/// Clones share their flags, so a handler that receives a clone can still
/// prevent the default action of the original event.
///
/// ```
/// use strapline_components::{ActivationEvent, Key};
///
/// let event = ActivationEvent::key_down(Key::Space);
/// let seen_by_handler = event.clone();
/// seen_by_handler.prevent_default();
/// assert!(event.is_default_prevented());
/// ```
#[derive(Clone, Debug)]
pub struct ActivationEvent {
    key: Option<Key>,
    flags: Rc<EventFlags>,
}

impl ActivationEvent {
    /// A pointer click.
    #[must_use]
    pub fn click() -> Self {
        Self {
            key: None,
            flags: Rc::default(),
        }
    }

    /// A key press.
    #[must_use]
    pub fn key_down(key: Key) -> Self {
        Self {
            key: Some(key),
            flags: Rc::default(),
        }
    }

    /// The pressed key, for keyboard events.
    #[must_use]
    pub fn key(&self) -> Option<Key> {
        self.key
    }

    /// Suppresses the host's default action, such as following a link.
    pub fn prevent_default(&self) {
        self.flags.default_prevented.set(true);
    }

    /// Stops the event from reaching ancestors.
    pub fn stop_propagation(&self) {
        self.flags.propagation_stopped.set(true);
    }

    /// Whether [`prevent_default`](Self::prevent_default) was called.
    #[must_use]
    pub fn is_default_prevented(&self) -> bool {
        self.flags.default_prevented.get()
    }

    /// Whether [`stop_propagation`](Self::stop_propagation) was called.
    #[must_use]
    pub fn is_propagation_stopped(&self) -> bool {
        self.flags.propagation_stopped.get()
    }
}

/// Identifies a selectable item such as a menu entry or panel.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct EventKey(Cow<'static, str>);

impl EventKey {
    /// The key as text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&'static str> for EventKey {
    fn from(value: &'static str) -> Self {
        Self(Cow::Borrowed(value))
    }
}

impl From<String> for EventKey {
    fn from(value: String) -> Self {
        Self(Cow::Owned(value))
    }
}

impl From<u32> for EventKey {
    fn from(value: u32) -> Self {
        Self(Cow::Owned(value.to_string()))
    }
}

impl fmt::Display for EventKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Payload of a select callback.
#[derive(Clone, Debug)]
pub struct SelectEvent {
    /// Key of the selected item, if it has one.
    pub key: Option<EventKey>,
    /// The activation that caused the selection.
    pub event: ActivationEvent,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_events_are_independent() {
        let a = ActivationEvent::click();
        let b = ActivationEvent::click();
        a.stop_propagation();
        assert!(a.is_propagation_stopped());
        assert!(!b.is_propagation_stopped());
        assert!(!a.is_default_prevented());
        assert_eq!(a.key(), None);
    }

    #[test]
    fn select_payload_shares_the_activation() {
        let click = ActivationEvent::click();
        let select = SelectEvent {
            key: Some(7_u32.into()),
            event: click.clone(),
        };
        select.event.prevent_default();
        assert!(click.is_default_prevented());
        assert_eq!(select.key.as_ref().map(EventKey::as_str), Some("7"));
    }

    #[test]
    fn event_keys_compare_by_text() {
        assert_eq!(EventKey::from("2"), EventKey::from(String::from("2")));
        assert_eq!(EventKey::from(2_u32), EventKey::from("2"));
    }
}
