// Copyright 2026 the Strapline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Breadcrumbs and previous/next pagers.

use alloc::borrow::Cow;
use alloc::string::String;
use alloc::vec::Vec;

use strapline_callback::{Callback, call_opt, chain};
use strapline_style::{Attributes, ClassSet, StyleProps, StyleSpec};

use crate::props::{child_props, style_props};
use crate::warning::report;
use crate::{ActivationEvent, Element, EventKey, Node, SafeAnchor, SelectEvent};

/// The trail of pages leading to the current one.
#[derive(Clone, Debug, Default)]
pub struct Breadcrumb {
    /// Base class.
    pub style: StyleProps,
    /// Caller classes.
    pub class_name: Option<String>,
    /// Pass-through attributes.
    pub attrs: Attributes,
    /// The crumbs, usually `li` elements.
    pub children: Vec<Node>,
}

style_props!(Breadcrumb);
child_props!(Breadcrumb);

impl Breadcrumb {
    /// `breadcrumb`.
    pub const STYLE: StyleSpec = StyleSpec::new("breadcrumb");

    /// An empty trail.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Describes the trail.
    #[must_use]
    pub fn render(&self) -> Element {
        Element::new("ol")
            .with_classes(self.resolved().class_set())
            .with_class_name(self.class_name.as_deref())
            .with_attrs(&self.attrs)
            .with_attr("role", "navigation")
            .with_attr("aria-label", "breadcrumbs")
            .with_children(self.children.iter().cloned())
    }
}

/// Suppresses navigation for handled or disabled selections, then reports
/// the selection unless disabled.
fn select(
    disabled: bool,
    key: Option<&EventKey>,
    on_select: Option<&Callback<SelectEvent>>,
    event: &ActivationEvent,
) {
    if on_select.is_some() || disabled {
        event.prevent_default();
    }
    if disabled {
        return;
    }
    call_opt(
        on_select,
        &SelectEvent {
            key: key.cloned(),
            event: event.clone(),
        },
    );
}

/// One link in a [`Pager`].
///
/// Pass-through attributes go to the inner anchor.
#[derive(Clone, Debug, Default)]
pub struct PagerItem {
    /// Caller classes for the `li`.
    pub class_name: Option<String>,
    /// Pass-through attributes for the anchor.
    pub attrs: Attributes,
    /// Link target.
    pub href: Option<Cow<'static, str>>,
    /// Disables the link.
    pub disabled: bool,
    /// Aligns the link left.
    pub previous: bool,
    /// Aligns the link right.
    pub next: bool,
    /// Passed to `on_select`.
    pub event_key: Option<EventKey>,
    /// Runs on every enabled click, before selection.
    pub on_click: Option<Callback<ActivationEvent>>,
    /// Runs when the link is selected.
    pub on_select: Option<Callback<SelectEvent>>,
    /// Link content.
    pub children: Vec<Node>,
}

child_props!(PagerItem);

impl PagerItem {
    /// An enabled, centered link.
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

    /// Disables the link.
    #[must_use]
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Aligns the link left.
    #[must_use]
    pub fn with_previous(mut self, previous: bool) -> Self {
        self.previous = previous;
        self
    }

    /// Aligns the link right.
    #[must_use]
    pub fn with_next(mut self, next: bool) -> Self {
        self.next = next;
        self
    }

    /// Sets the key passed to `on_select`.
    #[must_use]
    pub fn with_event_key(mut self, key: impl Into<EventKey>) -> Self {
        self.event_key = Some(key.into());
        self
    }

    /// Adds caller classes.
    #[must_use]
    pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    /// Sets the click handler.
    #[must_use]
    pub fn on_click(mut self, f: impl Fn(&ActivationEvent) + 'static) -> Self {
        self.on_click = Some(Callback::new(f));
        self
    }

    /// Sets the select handler.
    #[must_use]
    pub fn on_select(mut self, f: impl Fn(&SelectEvent) + 'static) -> Self {
        self.on_select = Some(Callback::new(f));
        self
    }

    /// Handles selection directly, bypassing the anchor.
    pub fn handle_select(&self, event: &ActivationEvent) {
        select(
            self.disabled,
            self.event_key.as_ref(),
            self.on_select.as_ref(),
            event,
        );
    }

    /// Handles a click on the link: `on_click`, then selection.
    pub fn handle_click(&self, event: &ActivationEvent) {
        self.anchor().handle_click(event);
    }

    fn select_callback(&self) -> Callback<ActivationEvent> {
        let disabled = self.disabled;
        let key = self.event_key.clone();
        let on_select = self.on_select.clone();
        Callback::new(move |event: &ActivationEvent| {
            select(disabled, key.as_ref(), on_select.as_ref(), event);
        })
    }

    fn anchor(&self) -> SafeAnchor {
        SafeAnchor {
            href: self.href.clone(),
            disabled: self.disabled,
            attrs: self.attrs.clone(),
            children: self.children.clone(),
            on_click: chain([self.on_click.clone(), Some(self.select_callback())]),
            ..SafeAnchor::default()
        }
    }

    /// Describes the item.
    #[must_use]
    pub fn render(&self) -> Element {
        let classes = ClassSet::new()
            .with("disabled", self.disabled)
            .with("previous", self.previous)
            .with("next", self.next);
        Element::new("li")
            .with_classes(classes)
            .with_class_name(self.class_name.as_deref())
            .with_child(self.anchor().render())
    }
}

/// Previous and next links.
///
/// The pager's `on_select` runs after each item's own.
///
/// ```
/// use core::cell::Cell;
/// use std::rc::Rc;
/// use strapline_components::{ActivationEvent, Pager, PagerItem};
///
/// let hits = Rc::new(Cell::new(0));
/// let h = hits.clone();
/// let pager = Pager::new()
///     .with_item(PagerItem::new().with_previous(true).with_child("Previous"))
///     .with_item(PagerItem::new().with_next(true).with_disabled(true).with_child("Next"))
///     .on_select(move |_| h.set(h.get() + 1));
///
/// pager.click(0, &ActivationEvent::click());
/// pager.click(1, &ActivationEvent::click());
/// assert_eq!(hits.get(), 1);
/// ```
#[derive(Clone, Debug, Default)]
pub struct Pager {
    /// Base class.
    pub style: StyleProps,
    /// Caller classes.
    pub class_name: Option<String>,
    /// Pass-through attributes.
    pub attrs: Attributes,
    /// The links.
    pub items: Vec<PagerItem>,
    /// Runs after an item's `on_select`.
    pub on_select: Option<Callback<SelectEvent>>,
}

style_props!(Pager);

impl Pager {
    /// `pager`.
    pub const STYLE: StyleSpec = StyleSpec::new("pager");

    /// An empty pager.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an item.
    #[must_use]
    pub fn with_item(mut self, item: PagerItem) -> Self {
        self.items.push(item);
        self
    }

    /// Sets the select handler.
    #[must_use]
    pub fn on_select(mut self, f: impl Fn(&SelectEvent) + 'static) -> Self {
        self.on_select = Some(Callback::new(f));
        self
    }

    /// The items as rendered, each with the pager's select handler chained.
    pub fn bound_items(&self) -> impl Iterator<Item = PagerItem> + '_ {
        self.items.iter().map(|item| PagerItem {
            on_select: chain([item.on_select.clone(), self.on_select.clone()]),
            ..item.clone()
        })
    }

    /// Clicks the item at `index`. Does nothing when out of range.
    pub fn click(&self, index: usize, event: &ActivationEvent) {
        if let Some(item) = self.bound_items().nth(index) {
            item.handle_click(event);
        }
    }

    /// Describes the pager.
    #[must_use]
    pub fn render(&self) -> Element {
        report(&self.style_warnings());
        Element::new("ul")
            .with_classes(self.resolved().class_set())
            .with_class_name(self.class_name.as_deref())
            .with_attrs(&self.attrs)
            .with_children(self.bound_items().map(|item| Node::from(item.render())))
    }
}
