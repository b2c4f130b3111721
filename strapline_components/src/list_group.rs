// Copyright 2026 the Strapline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! List groups.

use alloc::borrow::Cow;
use alloc::string::String;
use alloc::vec::Vec;

use strapline_callback::{Callback, call_opt};
use strapline_style::{Attributes, StyleProps, StyleSpec};

use crate::props::{child_props, style_props};
use crate::warning::report;
use crate::{ActivationEvent, Element, Node, SafeAnchor};

/// One entry of a [`ListGroup`].
///
/// Renders as a link when it has an `href`, a button when it has a click
/// handler, an `li` inside a plain list, and a `span` otherwise.
#[derive(Clone, Debug, Default)]
pub struct ListGroupItem {
    /// Base class and variant.
    pub style: StyleProps,
    /// Caller classes.
    pub class_name: Option<String>,
    /// Pass-through attributes.
    pub attrs: Attributes,
    /// Highlights the item.
    pub active: bool,
    /// Greys the item out.
    pub disabled: bool,
    /// Heading shown above the content.
    pub header: Option<Node>,
    /// Link target.
    pub href: Option<Cow<'static, str>>,
    /// Renders as an `li`; set by a list group rendering a `ul`.
    pub list_item: bool,
    /// Runs on activation.
    pub on_click: Option<Callback<ActivationEvent>>,
    /// Content.
    pub children: Vec<Node>,
}

style_props!(ListGroupItem);
child_props!(ListGroupItem);

impl ListGroupItem {
    /// `list-group-item`, contextual variants.
    pub const STYLE: StyleSpec = StyleSpec::new("list-group-item")
        .with_variants(&["success", "info", "warning", "danger"], None);

    /// An empty item.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Highlights the item.
    #[must_use]
    pub fn with_active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    /// Greys the item out.
    #[must_use]
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Sets the heading.
    #[must_use]
    pub fn with_header(mut self, header: impl Into<Node>) -> Self {
        self.header = Some(header.into());
        self
    }

    /// Turns the item into a link.
    #[must_use]
    pub fn with_href(mut self, href: impl Into<Cow<'static, str>>) -> Self {
        self.href = Some(href.into());
        self
    }

    /// Sets the click handler.
    #[must_use]
    pub fn on_click(mut self, f: impl Fn(&ActivationEvent) + 'static) -> Self {
        self.on_click = Some(Callback::new(f));
        self
    }

    /// Whether the item is interactive, which rules out a `ul` parent.
    #[must_use]
    pub fn is_actionable(&self) -> bool {
        self.href.is_some() || self.on_click.is_some()
    }

    /// Handles a click on the item.
    pub fn handle_click(&self, event: &ActivationEvent) {
        if self.href.is_some() {
            self.anchor().handle_click(event);
        } else if !self.disabled {
            call_opt(self.on_click.as_ref(), event);
        }
    }

    fn content(&self) -> Vec<Node> {
        let Some(header) = &self.header else {
            return self.children.clone();
        };
        let style = self.resolved();
        let heading = match header {
            Node::Element(el) => el.clone().with_class(style.prefix("heading")),
            text => Element::new("h4")
                .with_class(style.prefix("heading"))
                .with_child(text.clone()),
        };
        let text = Element::new("p")
            .with_class(style.prefix("text"))
            .with_children(self.children.iter().cloned());
        Vec::from([Node::from(heading), Node::from(text)])
    }

    fn anchor(&self) -> SafeAnchor {
        SafeAnchor {
            href: self.href.clone(),
            disabled: self.disabled,
            ..SafeAnchor::default()
        }
    }

    /// Describes the item.
    #[must_use]
    pub fn render(&self) -> Element {
        report(&self.style_warnings());
        let mut classes = self.resolved().class_set();
        classes.insert("active", self.active);
        classes.insert("disabled", self.disabled);

        let el = if self.href.is_some() {
            self.anchor().render()
        } else if self.on_click.is_some() {
            Element::new("button").with_attr("type", "button")
        } else if self.list_item {
            Element::new("li")
        } else {
            Element::new("span")
        };
        el.with_classes(classes)
            .with_class_name(self.class_name.as_deref())
            .with_attrs(&self.attrs)
            .with_children(self.content())
    }
}

/// A child of a [`ListGroup`].
#[derive(Clone, Debug)]
pub enum ListGroupChild {
    /// A list group item.
    Item(ListGroupItem),
    /// Anything else.
    Other(Node),
}

impl From<ListGroupItem> for ListGroupChild {
    fn from(item: ListGroupItem) -> Self {
        Self::Item(item)
    }
}

impl From<Node> for ListGroupChild {
    fn from(node: Node) -> Self {
        Self::Other(node)
    }
}

impl From<Element> for ListGroupChild {
    fn from(el: Element) -> Self {
        Self::Other(el.into())
    }
}

/// A series of items.
///
/// Renders as a `ul` of `li` items when every child is a passive
/// [`ListGroupItem`], and a `div` otherwise.
#[derive(Clone, Debug, Default)]
pub struct ListGroup {
    /// Base class.
    pub style: StyleProps,
    /// Caller classes.
    pub class_name: Option<String>,
    /// Pass-through attributes.
    pub attrs: Attributes,
    /// Tag to render instead of the inferred one.
    pub tag: Option<&'static str>,
    /// The items.
    pub children: Vec<ListGroupChild>,
}

style_props!(ListGroup);

impl ListGroup {
    /// `list-group`.
    pub const STYLE: StyleSpec = StyleSpec::new("list-group");

    /// An empty group.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Renders as `tag` instead of the inferred tag.
    #[must_use]
    pub fn with_tag(mut self, tag: &'static str) -> Self {
        self.tag = Some(tag);
        self
    }

    /// Appends a child.
    #[must_use]
    pub fn with_child(mut self, child: impl Into<ListGroupChild>) -> Self {
        self.children.push(child.into());
        self
    }

    /// The tag used when none is given.
    #[must_use]
    pub fn default_tag(&self) -> &'static str {
        let all_passive_items = self.children.iter().all(|child| match child {
            ListGroupChild::Item(item) => !item.is_actionable(),
            ListGroupChild::Other(_) => false,
        });
        if self.children.is_empty() || !all_passive_items {
            "div"
        } else {
            "ul"
        }
    }

    /// Describes the group.
    #[must_use]
    pub fn render(&self) -> Element {
        let tag = self.tag.unwrap_or_else(|| self.default_tag());
        let list_items = tag == "ul"
            && self
                .children
                .iter()
                .all(|child| matches!(child, ListGroupChild::Item(_)));
        let children = self.children.iter().map(|child| match child {
            ListGroupChild::Item(item) if list_items => ListGroupItem {
                list_item: true,
                ..item.clone()
            }
            .render()
            .into(),
            ListGroupChild::Item(item) => item.render().into(),
            ListGroupChild::Other(node) => node.clone(),
        });
        Element::new(tag)
            .with_classes(self.resolved().class_set())
            .with_class_name(self.class_name.as_deref())
            .with_attrs(&self.attrs)
            .with_children(children)
    }
}
