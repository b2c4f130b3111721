// Copyright 2026 the Strapline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Menu items, dropdown toggles and split buttons.

use alloc::borrow::Cow;
use alloc::string::String;
use alloc::vec::Vec;

use strapline_callback::{Callback, call_opt, chain};
use strapline_style::{Attributes, ClassSet, Size, StyleProps, StyleSpec};

use crate::button::BUTTON_VARIANTS;
use crate::props::{child_props, style_props};
use crate::warning::report;
use crate::{
    ActivationEvent, Button, ComponentWarning, Element, EventKey, Node, SafeAnchor, SelectEvent,
    is_trivial_href,
};

/// Attributes a split button keeps on its dropdown container; the rest go
/// to the main button.
pub const DROPDOWN_ATTRS: &[&str] = &["id", "role", "dir"];

/// An entry in a dropdown menu: a link, a section header, or a divider.
#[derive(Clone, Debug, Default)]
pub struct MenuItem {
    /// Base class, used as the prefix for headers.
    pub style: StyleProps,
    /// Caller classes for the `li`.
    pub class_name: Option<String>,
    /// Pass-through attributes for the anchor, or the `li` of a header or
    /// divider.
    pub attrs: Attributes,
    /// Highlights the item.
    pub active: bool,
    /// Makes the item unselectable.
    pub disabled: bool,
    /// Renders a separator instead of a link.
    pub divider: bool,
    /// Renders a section label instead of a link.
    pub header: bool,
    /// Link target.
    pub href: Option<Cow<'static, str>>,
    /// Passed to `on_select`.
    pub event_key: Option<EventKey>,
    /// Runs on every click, before selection.
    pub on_click: Option<Callback<ActivationEvent>>,
    /// Runs when the item is selected.
    pub on_select: Option<Callback<SelectEvent>>,
    /// Item content.
    pub children: Vec<Node>,
}

style_props!(MenuItem);
child_props!(MenuItem);

impl MenuItem {
    /// `dropdown`, used as a prefix.
    pub const STYLE: StyleSpec = StyleSpec::new("dropdown");

    /// A plain link item.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A separator.
    #[must_use]
    pub fn divider() -> Self {
        Self {
            divider: true,
            ..Self::default()
        }
    }

    /// A section label.
    #[must_use]
    pub fn header(label: impl Into<Node>) -> Self {
        Self {
            header: true,
            ..Self::default()
        }
        .with_child(label)
    }

    /// Highlights the item.
    #[must_use]
    pub fn with_active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    /// Makes the item unselectable.
    #[must_use]
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Sets the link target.
    #[must_use]
    pub fn with_href(mut self, href: impl Into<Cow<'static, str>>) -> Self {
        self.href = Some(href.into());
        self
    }

    /// Sets the key passed to `on_select`.
    #[must_use]
    pub fn with_event_key(mut self, key: impl Into<EventKey>) -> Self {
        self.event_key = Some(key.into());
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

    /// Configuration problems.
    #[must_use]
    pub fn warnings(&self) -> Vec<ComponentWarning> {
        let mut out = self.style_warnings();
        if self.divider && !self.children.is_empty() {
            out.push(ComponentWarning::DividerWithChildren);
        }
        out
    }

    fn select_callback(&self) -> Callback<ActivationEvent> {
        let navigates = !is_trivial_href(self.href.as_deref());
        let disabled = self.disabled;
        let key = self.event_key.clone();
        let on_select = self.on_select.clone();
        Callback::new(move |event: &ActivationEvent| {
            if !navigates || disabled {
                event.prevent_default();
            }
            if disabled {
                return;
            }
            call_opt(
                on_select.as_ref(),
                &SelectEvent {
                    key: key.clone(),
                    event: event.clone(),
                },
            );
        })
    }

    fn anchor(&self) -> SafeAnchor {
        SafeAnchor {
            href: self.href.clone(),
            role: Some(Cow::Borrowed("menuitem")),
            attrs: self.attrs.clone().with("tabindex", -1),
            children: self.children.clone(),
            on_click: chain([self.on_click.clone(), Some(self.select_callback())]),
            ..SafeAnchor::default()
        }
    }

    /// Handles a click on the item: `on_click`, then selection.
    ///
    /// Navigation is suppressed when the item has no real href or is
    /// disabled; a disabled item is never selected.
    pub fn handle_click(&self, event: &ActivationEvent) {
        if self.divider || self.header {
            return;
        }
        self.anchor().handle_click(event);
    }

    /// Describes the item.
    #[must_use]
    pub fn render(&self) -> Element {
        report(&self.warnings());
        if self.divider {
            return Element::new("li")
                .with_class("divider")
                .with_class_name(self.class_name.as_deref())
                .with_attrs(&self.attrs)
                .with_attr("role", "separator");
        }
        if self.header {
            return Element::new("li")
                .with_class(self.resolved().prefix("header"))
                .with_class_name(self.class_name.as_deref())
                .with_attrs(&self.attrs)
                .with_attr("role", "heading")
                .with_children(self.children.iter().cloned());
        }
        let classes = ClassSet::new()
            .with("active", self.active)
            .with("disabled", self.disabled);
        Element::new("li")
            .with_classes(classes)
            .with_class_name(self.class_name.as_deref())
            .with_attr("role", "presentation")
            .with_child(self.anchor().render())
    }
}

/// The control that opens a dropdown menu.
///
/// Size and variant are forwarded to the underlying [`Button`]; the base
/// class names the toggle itself.
#[derive(Clone, Debug, Default)]
pub struct DropdownToggle {
    /// Toggle class, plus the button's size and variant.
    pub style: StyleProps,
    /// Caller classes.
    pub class_name: Option<String>,
    /// Pass-through attributes.
    pub attrs: Attributes,
    /// Renders a [`SafeAnchor`] instead of a [`Button`].
    pub use_anchor: bool,
    /// Omits the caret.
    pub no_caret: bool,
    /// Whether the menu is open.
    pub open: bool,
    /// Label used when there are no children; also the `title` attribute.
    pub title: Option<String>,
    /// Link target for anchor toggles.
    pub href: Option<Cow<'static, str>>,
    /// Disables the toggle.
    pub disabled: bool,
    /// Runs on activation.
    pub on_click: Option<Callback<ActivationEvent>>,
    /// Label.
    pub children: Vec<Node>,
}

style_props!(DropdownToggle);
child_props!(DropdownToggle);

impl DropdownToggle {
    /// `dropdown-toggle`, accepting the button's sizes and variants.
    pub const STYLE: StyleSpec = StyleSpec::new("dropdown-toggle")
        .with_sizes(&[Size::Large, Size::Small, Size::XSmall])
        .with_variants(BUTTON_VARIANTS, None);

    /// A closed button toggle with a caret.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the label.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Renders a [`SafeAnchor`] instead of a [`Button`].
    #[must_use]
    pub fn with_use_anchor(mut self, use_anchor: bool) -> Self {
        self.use_anchor = use_anchor;
        self
    }

    /// Omits the caret.
    #[must_use]
    pub fn with_no_caret(mut self, no_caret: bool) -> Self {
        self.no_caret = no_caret;
        self
    }

    /// Sets the open state.
    #[must_use]
    pub fn with_open(mut self, open: bool) -> Self {
        self.open = open;
        self
    }

    /// Disables the toggle.
    #[must_use]
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Sets the click handler.
    #[must_use]
    pub fn on_click(mut self, f: impl Fn(&ActivationEvent) + 'static) -> Self {
        self.on_click = Some(Callback::new(f));
        self
    }

    fn content(&self) -> Vec<Node> {
        let mut content = if self.children.is_empty() {
            self.title.iter().cloned().map(Node::from).collect()
        } else {
            self.children.clone()
        };
        if !self.no_caret {
            content.push(Node::from(" "));
            content.push(Node::from(Element::new("span").with_class("caret")));
        }
        content
    }

    fn toggle_attrs(&self) -> Attributes {
        let mut attrs = self.attrs.clone();
        if let Some(title) = &self.title {
            attrs.set("title", title.clone());
        }
        attrs.set("role", "button");
        attrs.set("aria-haspopup", true);
        attrs.set("aria-expanded", self.open);
        attrs
    }

    fn class_name(&self) -> String {
        let style = self.resolved();
        ClassSet::new()
            .with(String::from(style.base()), true)
            .to_class_name(self.class_name.as_deref())
    }

    /// Handles a click on the toggle.
    pub fn handle_click(&self, event: &ActivationEvent) {
        if self.use_anchor {
            self.anchor().handle_click(event);
        } else {
            self.button().handle_click(event);
        }
    }

    fn anchor(&self) -> SafeAnchor {
        SafeAnchor {
            href: self.href.clone(),
            disabled: self.disabled,
            class_name: Some(self.class_name()),
            attrs: self.toggle_attrs(),
            children: self.content(),
            on_click: self.on_click.clone(),
            ..SafeAnchor::default()
        }
    }

    fn button(&self) -> Button {
        Button {
            style: StyleProps {
                base_class: None,
                size: self.style.size,
                custom_size: self.style.custom_size.clone(),
                variant: self.style.variant.clone(),
                role: None,
            },
            class_name: Some(self.class_name()),
            attrs: self.toggle_attrs(),
            disabled: self.disabled,
            href: self.href.clone(),
            children: self.content(),
            on_click: self.on_click.clone(),
            ..Button::default()
        }
    }

    /// Describes the toggle.
    #[must_use]
    pub fn render(&self) -> Element {
        if self.use_anchor {
            self.anchor().render()
        } else {
            self.button().render()
        }
    }
}

/// The caret half of a [`SplitButton`]: always a button with a caret.
#[derive(Clone, Debug, Default)]
pub struct SplitToggle {
    /// Toggle class, plus the button's size and variant.
    pub style: StyleProps,
    /// Caller classes.
    pub class_name: Option<String>,
    /// Pass-through attributes.
    pub attrs: Attributes,
    /// Whether the menu is open.
    pub open: bool,
    /// Disables the toggle.
    pub disabled: bool,
    /// Runs on activation.
    pub on_click: Option<Callback<ActivationEvent>>,
    /// Extra content before the caret.
    pub children: Vec<Node>,
}

style_props!(SplitToggle);
child_props!(SplitToggle);

impl SplitToggle {
    /// Same declaration as [`DropdownToggle`].
    pub const STYLE: StyleSpec = DropdownToggle::STYLE;

    /// A closed split toggle.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The equivalent dropdown toggle.
    #[must_use]
    pub fn toggle(&self) -> DropdownToggle {
        DropdownToggle {
            style: self.style.clone(),
            class_name: self.class_name.clone(),
            attrs: self.attrs.clone(),
            use_anchor: false,
            no_caret: false,
            open: self.open,
            disabled: self.disabled,
            on_click: self.on_click.clone(),
            children: self.children.clone(),
            ..DropdownToggle::default()
        }
    }

    /// Describes the toggle.
    #[must_use]
    pub fn render(&self) -> Element {
        self.toggle().render()
    }
}

/// A button for the primary action beside a caret that opens a menu of
/// alternatives.
///
/// Pass-through attributes named in [`DROPDOWN_ATTRS`] stay on the
/// container; everything else goes to the main button.
#[derive(Clone, Debug, Default)]
pub struct SplitButton {
    /// Size and variant of both buttons.
    pub style: StyleProps,
    /// Caller classes for the container.
    pub class_name: Option<String>,
    /// Pass-through attributes, split between container and button.
    pub attrs: Attributes,
    /// Main button label.
    pub title: String,
    /// Accessible label of the caret; the title when unset.
    pub toggle_label: Option<String>,
    /// Link target of the main button.
    pub href: Option<Cow<'static, str>>,
    /// Disables the main button and the caret.
    pub disabled: bool,
    /// Whether the menu is open.
    pub open: bool,
    /// Opens the menu upwards.
    pub dropup: bool,
    /// Aligns the menu to the right edge.
    pub pull_right: bool,
    /// Runs when the main button is clicked.
    pub on_click: Option<Callback<ActivationEvent>>,
    /// Runs after an item's `on_select`.
    pub on_select: Option<Callback<SelectEvent>>,
    /// Menu entries.
    pub items: Vec<MenuItem>,
}

style_props!(SplitButton);

impl SplitButton {
    /// `btn-group`, accepting the button's sizes and variants.
    pub const STYLE: StyleSpec = StyleSpec::new("btn-group")
        .with_sizes(&[Size::Large, Size::Small, Size::XSmall])
        .with_variants(BUTTON_VARIANTS, None);

    /// A split button labelled `title`.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Sets the caret's accessible label.
    #[must_use]
    pub fn with_toggle_label(mut self, label: impl Into<String>) -> Self {
        self.toggle_label = Some(label.into());
        self
    }

    /// Turns the main button into a link.
    #[must_use]
    pub fn with_href(mut self, href: impl Into<Cow<'static, str>>) -> Self {
        self.href = Some(href.into());
        self
    }

    /// Disables both halves.
    #[must_use]
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Sets the open state.
    #[must_use]
    pub fn with_open(mut self, open: bool) -> Self {
        self.open = open;
        self
    }

    /// Opens the menu upwards.
    #[must_use]
    pub fn with_dropup(mut self, dropup: bool) -> Self {
        self.dropup = dropup;
        self
    }

    /// Aligns the menu right.
    #[must_use]
    pub fn with_pull_right(mut self, pull_right: bool) -> Self {
        self.pull_right = pull_right;
        self
    }

    /// Appends a menu entry.
    #[must_use]
    pub fn with_item(mut self, item: MenuItem) -> Self {
        self.items.push(item);
        self
    }

    /// Sets the main button's click handler.
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

    fn button_style(&self) -> StyleProps {
        StyleProps {
            base_class: None,
            size: self.style.size,
            custom_size: self.style.custom_size.clone(),
            variant: self.style.variant.clone(),
            role: None,
        }
    }

    /// The main button, given its share of the pass-through attributes.
    #[must_use]
    pub fn button(&self) -> Button {
        let (_, button_attrs) = self.attrs.clone().partition(DROPDOWN_ATTRS);
        Button {
            style: self.button_style(),
            attrs: button_attrs,
            disabled: self.disabled,
            href: self.href.clone(),
            children: Vec::from([Node::from(self.title.clone())]),
            on_click: self.on_click.clone(),
            ..Button::default()
        }
    }

    /// The caret.
    #[must_use]
    pub fn toggle(&self) -> SplitToggle {
        let label = self.toggle_label.as_ref().unwrap_or(&self.title).clone();
        let mut attrs = Attributes::new().with("aria-label", label);
        if let Some(id) = self.attrs.get_text("id") {
            attrs.set("id", String::from(id));
        }
        SplitToggle {
            style: self.button_style(),
            attrs,
            open: self.open,
            disabled: self.disabled,
            ..SplitToggle::default()
        }
    }

    /// The menu entries, each with the split button's select handler
    /// chained after its own.
    pub fn bound_items(&self) -> impl Iterator<Item = MenuItem> + '_ {
        self.items.iter().map(|item| MenuItem {
            on_select: chain([item.on_select.clone(), self.on_select.clone()]),
            ..item.clone()
        })
    }

    /// Clicks the main button.
    pub fn click(&self, event: &ActivationEvent) {
        self.button().handle_click(event);
    }

    /// Clicks the menu entry at `index`. Does nothing when out of range.
    pub fn select_item(&self, index: usize, event: &ActivationEvent) {
        if let Some(item) = self.bound_items().nth(index) {
            item.handle_click(event);
        }
    }

    /// Describes the split button.
    #[must_use]
    pub fn render(&self) -> Element {
        report(&self.style_warnings());
        let (mut container_attrs, _) = self.attrs.clone().partition(DROPDOWN_ATTRS);
        let id = container_attrs.remove("id");

        let classes = ClassSet::new()
            .with(String::from(self.resolved().base()), true)
            .with("open", self.open)
            .with("dropup", self.dropup);

        let mut menu = Element::new("ul")
            .with_class("dropdown-menu")
            .with_attr("role", "menu")
            .with_children(self.bound_items().map(|item| Node::from(item.render())));
        menu.classes.insert("dropdown-menu-right", self.pull_right);
        if let Some(id) = id {
            menu.attrs.set("aria-labelledby", id);
        }

        Element::new("div")
            .with_classes(classes)
            .with_class_name(self.class_name.as_deref())
            .with_attrs(&container_attrs)
            .with_child(self.button().render())
            .with_child(self.toggle().render())
            .with_child(menu)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::rc::Rc;
    use core::cell::RefCell;
    use strapline_style::{AttrValue, Variant};

    #[test]
    fn divider_drops_children_with_a_warning() {
        let item = MenuItem::divider().with_child("ignored");
        assert_eq!(item.warnings(), [ComponentWarning::DividerWithChildren]);
        let el = item.render();
        assert_eq!(el.class_attr(), "divider");
        assert_eq!(el.attr_text("role"), Some("separator"));
        assert!(el.children.is_empty());
    }

    #[test]
    fn header_uses_prefixed_class() {
        let el = MenuItem::header("Section").render();
        assert_eq!(el.class_attr(), "dropdown-header");
        assert_eq!(el.attr_text("role"), Some("heading"));
        assert_eq!(el.text_content(), "Section");
    }

    #[test]
    fn link_item_wraps_a_menuitem_anchor() {
        let el = MenuItem::new()
            .with_active(true)
            .with_attr("title", "tip")
            .with_child("Action")
            .render();
        assert_eq!(el.attr_text("role"), Some("presentation"));
        assert_eq!(el.class_attr(), "active");
        let anchor = el.find("a").unwrap();
        assert_eq!(anchor.attr_text("role"), Some("menuitem"));
        assert_eq!(anchor.attr("tabindex"), Some(&AttrValue::Number(-1)));
        assert_eq!(anchor.attr_text("title"), Some("tip"));
        assert_eq!(anchor.attr_text("href"), Some("#"));
    }

    #[test]
    fn menu_item_selection() {
        let keys = Rc::new(RefCell::new(Vec::new()));
        let k = keys.clone();
        let item = MenuItem::new()
            .with_event_key("a")
            .on_select(move |e| k.borrow_mut().push(e.key.clone()));

        let click = ActivationEvent::click();
        item.handle_click(&click);
        assert!(click.is_default_prevented());
        assert_eq!(*keys.borrow(), [Some(EventKey::from("a"))]);

        let linked = item.clone().with_href("/a");
        let click = ActivationEvent::click();
        linked.handle_click(&click);
        assert!(!click.is_default_prevented());
        assert_eq!(keys.borrow().len(), 2);

        let disabled = linked.with_disabled(true);
        let click = ActivationEvent::click();
        disabled.handle_click(&click);
        assert!(click.is_default_prevented());
        assert_eq!(keys.borrow().len(), 2);
    }

    #[test]
    fn toggle_falls_back_to_title_and_adds_caret() {
        let el = DropdownToggle::new()
            .with_title("Menu")
            .with_variant(Variant::PRIMARY)
            .with_open(true)
            .render();
        assert_eq!(el.tag, "button");
        assert_eq!(el.class_attr(), "dropdown-toggle btn btn-primary");
        assert_eq!(el.attr_text("role"), Some("button"));
        assert_eq!(el.attr("aria-haspopup"), Some(&AttrValue::Bool(true)));
        assert_eq!(el.attr("aria-expanded"), Some(&AttrValue::Bool(true)));
        assert_eq!(el.attr_text("title"), Some("Menu"));
        assert_eq!(el.text_content(), "Menu ");
        assert!(el.find("span").unwrap().has_class("caret"));
    }

    #[test]
    fn anchor_toggle_without_caret() {
        let el = DropdownToggle::new()
            .with_use_anchor(true)
            .with_no_caret(true)
            .with_child("More")
            .render();
        assert_eq!(el.tag, "a");
        assert_eq!(el.class_attr(), "dropdown-toggle");
        assert_eq!(el.find("span"), None);
        assert_eq!(el.text_content(), "More");
    }

    #[test]
    fn split_toggle_always_has_a_caret() {
        let el = SplitToggle::new().render();
        assert_eq!(el.tag, "button");
        assert!(el.find("span").unwrap().has_class("caret"));
    }

    #[test]
    fn split_button_partitions_attributes() {
        let el = SplitButton::new("Save")
            .with_attr("id", "save-menu")
            .with_attr("title", "Save now")
            .with_size(Size::Small)
            .with_pull_right(true)
            .with_item(MenuItem::new().with_child("Save as"))
            .render();
        assert_eq!(el.class_attr(), "btn-group");
        assert_eq!(el.attr("id"), None);
        assert_eq!(el.attr("title"), None);

        let mut parts = el.child_elements();
        let button = parts.next().unwrap();
        assert_eq!(button.attr_text("title"), Some("Save now"));
        assert!(button.has_class("btn-sm"));
        assert_eq!(button.text_content(), "Save");

        let toggle = parts.next().unwrap();
        assert_eq!(toggle.attr_text("aria-label"), Some("Save"));
        assert_eq!(toggle.attr_text("id"), Some("save-menu"));
        assert!(toggle.has_class("dropdown-toggle"));
        assert!(toggle.has_class("btn-sm"));

        let menu = parts.next().unwrap();
        assert_eq!(menu.class_attr(), "dropdown-menu dropdown-menu-right");
        assert_eq!(menu.attr_text("aria-labelledby"), Some("save-menu"));
        assert_eq!(menu.child_elements().count(), 1);
    }

    #[test]
    fn split_button_state_classes() {
        let el = SplitButton::new("Go")
            .with_toggle_label("More options")
            .with_open(true)
            .with_dropup(true)
            .render();
        assert_eq!(el.class_attr(), "btn-group open dropup");
        let toggle = el.child_elements().nth(1).unwrap();
        assert_eq!(toggle.attr_text("aria-label"), Some("More options"));
    }

    #[test]
    fn split_button_select_chains_handlers() {
        let order = Rc::new(RefCell::new(Vec::new()));
        let (o1, o2, o3) = (order.clone(), order.clone(), order.clone());
        let split = SplitButton::new("Go")
            .with_item(MenuItem::new().on_select(move |_| o1.borrow_mut().push("item")))
            .on_select(move |_| o2.borrow_mut().push("split"))
            .on_click(move |_| o3.borrow_mut().push("button"));

        split.select_item(0, &ActivationEvent::click());
        split.click(&ActivationEvent::click());
        assert_eq!(*order.borrow(), ["item", "split", "button"]);
    }
}
