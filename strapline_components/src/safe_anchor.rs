// Copyright 2026 the Strapline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Anchors that act as buttons without navigating.

use alloc::borrow::Cow;
use alloc::string::String;
use alloc::vec::Vec;

use strapline_callback::{Callback, call_opt};
use strapline_style::{AttrValue, Attributes};

use crate::{ActivationEvent, Element, Key, Node};

/// Whether `href` would navigate nowhere: absent, empty, or `#` with
/// optional surrounding whitespace.
///
/// A whitespace-only href is a real (relative) link.
#[must_use]
pub fn is_trivial_href(href: Option<&str>) -> bool {
    href.is_none_or(|h| h.is_empty() || h.trim() == "#")
}

/// An anchor that behaves like a button when it has no real destination.
///
/// - A trivial href (see [`is_trivial_href`]) renders as `href="#"` with
///   `role="button"` unless a role is given, and its default navigation is
///   always suppressed.
/// - The space key activates it like a click.
/// - When disabled it is removed from the tab order, ignores pointer
///   events, and swallows activations without calling `on_click`.
///
/// ```
/// use strapline_components::{ActivationEvent, SafeAnchor};
///
/// let anchor = SafeAnchor::new().with_child("Action");
/// let el = anchor.render();
/// assert_eq!(el.attr_text("href"), Some("#"));
/// assert_eq!(el.attr_text("role"), Some("button"));
///
/// let click = ActivationEvent::click();
/// anchor.handle_click(&click);
/// assert!(click.is_default_prevented());
/// ```
#[derive(Clone, Debug, Default)]
pub struct SafeAnchor {
    /// Link target.
    pub href: Option<Cow<'static, str>>,
    /// Disables the anchor.
    pub disabled: bool,
    /// Explicit ARIA role.
    pub role: Option<Cow<'static, str>>,
    /// Tag to render instead of `a`.
    pub tag: Option<&'static str>,
    /// Caller classes.
    pub class_name: Option<String>,
    /// Pass-through attributes.
    pub attrs: Attributes,
    /// Caller inline style; overrides the anchor's own properties.
    pub inline_style: Attributes,
    /// Content.
    pub children: Vec<Node>,
    /// Runs on activation unless disabled.
    pub on_click: Option<Callback<ActivationEvent>>,
    /// Runs on every key press, after the anchor's own key handling.
    pub on_key_down: Option<Callback<ActivationEvent>>,
}

impl SafeAnchor {
    /// An anchor with no destination.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the link target.
    #[must_use]
    pub fn with_href(mut self, href: impl Into<Cow<'static, str>>) -> Self {
        self.href = Some(href.into());
        self
    }

    /// Disables the anchor.
    #[must_use]
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Sets the ARIA role.
    #[must_use]
    pub fn with_role(mut self, role: impl Into<Cow<'static, str>>) -> Self {
        self.role = Some(role.into());
        self
    }

    /// Renders as `tag` instead of `a`.
    #[must_use]
    pub fn with_tag(mut self, tag: &'static str) -> Self {
        self.tag = Some(tag);
        self
    }

    /// Adds caller classes.
    #[must_use]
    pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    /// Replaces the pass-through attributes.
    #[must_use]
    pub fn with_attrs(mut self, attrs: Attributes) -> Self {
        self.attrs = attrs;
        self
    }

    /// Sets one caller inline style property.
    #[must_use]
    pub fn with_inline_style(
        mut self,
        name: impl Into<Cow<'static, str>>,
        value: impl Into<AttrValue>,
    ) -> Self {
        self.inline_style.set(name, value);
        self
    }

    /// Appends a child.
    #[must_use]
    pub fn with_child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Sets the click handler.
    #[must_use]
    pub fn on_click(mut self, f: impl Fn(&ActivationEvent) + 'static) -> Self {
        self.on_click = Some(Callback::new(f));
        self
    }

    /// Sets the key handler.
    #[must_use]
    pub fn on_key_down(mut self, f: impl Fn(&ActivationEvent) + 'static) -> Self {
        self.on_key_down = Some(Callback::new(f));
        self
    }

    /// Whether the href is trivial.
    #[must_use]
    pub fn is_trivial(&self) -> bool {
        is_trivial_href(self.href.as_deref())
    }

    /// Handles a click.
    pub fn handle_click(&self, event: &ActivationEvent) {
        if self.disabled || self.is_trivial() {
            event.prevent_default();
        }
        if self.disabled {
            event.stop_propagation();
            return;
        }
        call_opt(self.on_click.as_ref(), event);
    }

    /// Handles a key press. Space activates the anchor.
    pub fn handle_key_down(&self, event: &ActivationEvent) {
        if event.key() == Some(Key::Space) {
            event.prevent_default();
            self.handle_click(event);
        }
        call_opt(self.on_key_down.as_ref(), event);
    }

    /// Describes the anchor.
    #[must_use]
    pub fn render(&self) -> Element {
        let mut el = Element::new(self.tag.unwrap_or("a"))
            .with_class_name(self.class_name.as_deref())
            .with_attrs(&self.attrs)
            .with_children(self.children.iter().cloned());

        if let Some(role) = &self.role {
            el.attrs.set("role", role.clone());
        }
        match &self.href {
            Some(href) if !self.is_trivial() => el.attrs.set("href", href.clone()),
            _ => {
                el.attrs.set_default("role", "button");
                el.attrs.set("href", "#");
            }
        }
        if self.disabled {
            el.attrs.set("tabindex", -1);
            el.style.set("pointer-events", "none");
        }
        el.style.merge(&self.inline_style);
        el
    }
}
