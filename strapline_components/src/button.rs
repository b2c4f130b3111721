// Copyright 2026 the Strapline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Buttons, button groups and toggle buttons.

use alloc::borrow::Cow;
use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use strapline_callback::{Callback, call_opt};
use strapline_style::{Attributes, Size, StyleProps, StyleSpec};

use crate::props::{child_props, style_props};
use crate::warning::report;
use crate::{ActivationEvent, ComponentWarning, Element, Node, SafeAnchor};

pub(crate) const BUTTON_VARIANTS: &[&str] = &[
    "default", "primary", "success", "info", "warning", "danger", "link",
];

/// A push button, or a button-styled link when `href` is set.
#[derive(Clone, Debug, Default)]
pub struct Button {
    /// Base class, size and variant.
    pub style: StyleProps,
    /// Caller classes.
    pub class_name: Option<String>,
    /// Pass-through attributes.
    pub attrs: Attributes,
    /// Renders the pressed state.
    pub active: bool,
    /// Spans the full width of the parent.
    pub block: bool,
    /// Disables the button.
    pub disabled: bool,
    /// Renders a link instead of a `<button>`.
    pub href: Option<Cow<'static, str>>,
    /// Tag to render instead of `button`.
    pub tag: Option<&'static str>,
    /// The `type` attribute of a `<button>`; `button` when unset.
    pub button_type: Option<&'static str>,
    /// Content.
    pub children: Vec<Node>,
    /// Runs on activation unless disabled.
    pub on_click: Option<Callback<ActivationEvent>>,
}

style_props!(Button);
child_props!(Button);

impl Button {
    /// `btn`, sizes `lg`/`sm`/`xs`, the contextual variants, `default` by default.
    pub const STYLE: StyleSpec = StyleSpec::new("btn")
        .with_sizes(&[Size::Large, Size::Small, Size::XSmall])
        .with_variants(BUTTON_VARIANTS, Some("default"));

    /// An empty default button.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the pressed state.
    #[must_use]
    pub fn with_active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    /// Makes the button full width.
    #[must_use]
    pub fn with_block(mut self, block: bool) -> Self {
        self.block = block;
        self
    }

    /// Disables the button.
    #[must_use]
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Turns the button into a link.
    #[must_use]
    pub fn with_href(mut self, href: impl Into<Cow<'static, str>>) -> Self {
        self.href = Some(href.into());
        self
    }

    /// Renders as `tag` instead of `button`.
    #[must_use]
    pub fn with_tag(mut self, tag: &'static str) -> Self {
        self.tag = Some(tag);
        self
    }

    /// Sets the click handler.
    #[must_use]
    pub fn on_click(mut self, f: impl Fn(&ActivationEvent) + 'static) -> Self {
        self.on_click = Some(Callback::new(f));
        self
    }

    /// Handles a click.
    ///
    /// Link buttons follow [`SafeAnchor`] rules; disabled push buttons
    /// ignore the click.
    pub fn handle_click(&self, event: &ActivationEvent) {
        if self.href.is_some() {
            self.anchor().handle_click(event);
        } else if !self.disabled {
            call_opt(self.on_click.as_ref(), event);
        }
    }

    /// Describes the button.
    #[must_use]
    pub fn render(&self) -> Element {
        report(&self.style_warnings());
        let style = self.resolved();
        let mut classes = style.class_set();
        classes.insert("active", self.active);
        classes.insert(style.prefix("block"), self.block);

        if self.href.is_some() {
            return self.anchor().render().with_classes(classes);
        }

        let tag = self.tag.unwrap_or("button");
        let mut el = Element::new(tag)
            .with_classes(classes)
            .with_class_name(self.class_name.as_deref())
            .with_attrs(&self.attrs)
            .with_children(self.children.iter().cloned());
        if tag == "button" {
            el.attrs.set("type", self.button_type.unwrap_or("button"));
        }
        if self.disabled {
            el.attrs.set("disabled", true);
        }
        el
    }

    fn anchor(&self) -> SafeAnchor {
        SafeAnchor {
            href: self.href.clone(),
            disabled: self.disabled,
            class_name: self.class_name.clone(),
            attrs: self.attrs.clone(),
            children: self.children.clone(),
            on_click: self.on_click.clone(),
            ..SafeAnchor::default()
        }
    }
}

/// A row (or column) of buttons.
#[derive(Clone, Debug, Default)]
pub struct ButtonGroup {
    /// Base class and size.
    pub style: StyleProps,
    /// Caller classes.
    pub class_name: Option<String>,
    /// Pass-through attributes.
    pub attrs: Attributes,
    /// Stacks the buttons.
    pub vertical: bool,
    /// Stretches the buttons to equal widths.
    pub justified: bool,
    /// Full width; only meaningful together with `vertical`.
    pub block: bool,
    /// The buttons.
    pub children: Vec<Node>,
}

style_props!(ButtonGroup);
child_props!(ButtonGroup);

impl ButtonGroup {
    /// `btn-group`, sizes `lg`/`sm`/`xs`.
    pub const STYLE: StyleSpec =
        StyleSpec::new("btn-group").with_sizes(&[Size::Large, Size::Small, Size::XSmall]);

    /// An empty horizontal group.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stacks the buttons.
    #[must_use]
    pub fn with_vertical(mut self, vertical: bool) -> Self {
        self.vertical = vertical;
        self
    }

    /// Equal-width buttons.
    #[must_use]
    pub fn with_justified(mut self, justified: bool) -> Self {
        self.justified = justified;
        self
    }

    /// Full width.
    #[must_use]
    pub fn with_block(mut self, block: bool) -> Self {
        self.block = block;
        self
    }

    /// Configuration problems.
    #[must_use]
    pub fn warnings(&self) -> Vec<ComponentWarning> {
        let mut out = self.style_warnings();
        if self.block && !self.vertical {
            out.push(ComponentWarning::BlockWithoutVertical);
        }
        out
    }

    /// Describes the group.
    #[must_use]
    pub fn render(&self) -> Element {
        report(&self.warnings());
        let style = self.resolved();
        let mut classes = style.class_set();
        // The vertical modifier replaces the base class.
        classes.insert(Cow::Owned(String::from(style.base())), !self.vertical);
        classes.insert(style.prefix("vertical"), self.vertical);
        classes.insert(style.prefix("justified"), self.justified);
        // Block styling comes from the button class, not the group class.
        classes.insert(format!("{}-block", Button::STYLE.base_class), self.block);

        Element::new("div")
            .with_classes(classes)
            .with_class_name(self.class_name.as_deref())
            .with_attrs(&self.attrs)
            .with_children(self.children.iter().cloned())
    }
}

/// The input kind behind a [`ToggleButton`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum ToggleKind {
    /// Independent on/off.
    #[default]
    Checkbox,
    /// One of a named group.
    Radio,
}

impl ToggleKind {
    const fn as_str(self) -> &'static str {
        match self {
            Self::Checkbox => "checkbox",
            Self::Radio => "radio",
        }
    }
}

/// A checkbox or radio input styled as a button.
#[derive(Clone, Debug, Default)]
pub struct ToggleButton {
    /// Base class, size and variant of the button.
    pub style: StyleProps,
    /// Caller classes.
    pub class_name: Option<String>,
    /// Pass-through attributes for the button.
    pub attrs: Attributes,
    /// Checkbox or radio.
    pub kind: ToggleKind,
    /// Input group name.
    pub name: Option<String>,
    /// Input value.
    pub value: String,
    /// Checked state; also renders the button as active.
    pub checked: bool,
    /// Disables the input.
    pub disabled: bool,
    /// Label content.
    pub children: Vec<Node>,
}

style_props!(ToggleButton);
child_props!(ToggleButton);

impl ToggleButton {
    /// Same declaration as [`Button`].
    pub const STYLE: StyleSpec = Button::STYLE;

    /// A toggle with the given input value.
    #[must_use]
    pub fn new(kind: ToggleKind, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
            ..Self::default()
        }
    }

    /// Sets the input group name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the checked state.
    #[must_use]
    pub fn with_checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    /// Disables the input.
    #[must_use]
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Describes the toggle: a `label` button wrapping the input.
    #[must_use]
    pub fn render(&self) -> Element {
        let mut input = Element::new("input")
            .with_attr("type", self.kind.as_str())
            .with_attr("autocomplete", "off")
            .with_attr("value", self.value.clone())
            .with_attr("checked", self.checked)
            .with_attr("disabled", self.disabled);
        if let Some(name) = &self.name {
            input.attrs.set("name", name.clone());
        }

        let mut children = Vec::with_capacity(self.children.len() + 1);
        children.push(Node::from(input));
        children.extend(self.children.iter().cloned());

        Button {
            style: self.style.clone(),
            class_name: self.class_name.clone(),
            attrs: self.attrs.clone(),
            active: self.checked,
            disabled: self.disabled,
            tag: Some("label"),
            children,
            ..Button::default()
        }
        .render()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::rc::Rc;
    use core::cell::Cell;
    use strapline_style::{AttrValue, ClassSet, Variant};

    #[test]
    fn default_button_has_default_variant() {
        let el = Button::new().with_child("Go").render();
        assert_eq!(el.tag, "button");
        assert_eq!(el.classes, ClassSet::from_tokens(["btn", "btn-default"]));
        assert_eq!(el.attr_text("type"), Some("button"));
    }

    #[test]
    fn size_variant_and_flags() {
        let el = Button::new()
            .with_size(Size::Large)
            .with_variant(Variant::PRIMARY)
            .with_active(true)
            .with_block(true)
            .with_disabled(true)
            .render();
        assert_eq!(
            el.classes,
            ClassSet::from_tokens(["btn", "btn-lg", "btn-primary", "active", "btn-block"])
        );
        assert_eq!(el.attr("disabled"), Some(&AttrValue::Bool(true)));
    }

    #[test]
    fn href_renders_a_safe_anchor() {
        let el = Button::new().with_href("/next").render();
        assert_eq!(el.tag, "a");
        assert_eq!(el.attr_text("href"), Some("/next"));
        assert!(el.has_class("btn"));
        assert_eq!(el.attr("type"), None);
    }

    #[test]
    fn disabled_button_ignores_clicks() {
        let count = Rc::new(Cell::new(0));
        let c = count.clone();
        let button = Button::new()
            .with_disabled(true)
            .on_click(move |_| c.set(c.get() + 1));
        button.handle_click(&ActivationEvent::click());
        assert_eq!(count.get(), 0);
    }

    #[test]
    fn unsupported_size_is_reported() {
        let button = Button::new().with_size(Size::Medium);
        assert_eq!(button.style_warnings().len(), 1);
        assert!(button.render().has_class("btn-md"));
    }

    #[test]
    fn vertical_group_replaces_base_class() {
        let el = ButtonGroup::new().with_vertical(true).render();
        assert_eq!(el.classes, ClassSet::from_tokens(["btn-group-vertical"]));

        let el = ButtonGroup::new()
            .with_size(Size::Small)
            .with_justified(true)
            .render();
        assert_eq!(
            el.classes,
            ClassSet::from_tokens(["btn-group", "btn-group-sm", "btn-group-justified"])
        );
    }

    #[test]
    fn block_group_uses_button_block_class() {
        let group = ButtonGroup::new().with_vertical(true).with_block(true);
        assert!(group.warnings().is_empty());
        assert!(group.render().has_class("btn-block"));

        let group = ButtonGroup::new().with_block(true);
        assert_eq!(group.warnings(), [ComponentWarning::BlockWithoutVertical]);
        assert!(group.render().has_class("btn-block"));
    }

    #[test]
    fn toggle_button_is_an_active_label() {
        let el = ToggleButton::new(ToggleKind::Radio, "1")
            .with_name("options")
            .with_checked(true)
            .with_child("One")
            .render();
        assert_eq!(el.tag, "label");
        assert!(el.has_class("active"));
        assert!(el.has_class("btn-default"));
        assert_eq!(el.attr("type"), None);

        let input = el.find("input").unwrap();
        assert_eq!(input.attr_text("type"), Some("radio"));
        assert_eq!(input.attr_text("name"), Some("options"));
        assert_eq!(input.attr("checked"), Some(&AttrValue::Bool(true)));
        assert_eq!(el.text_content(), "One");
    }
}
