// Copyright 2026 the Strapline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Panels, panel groups and accordions.

use alloc::borrow::Cow;
use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use core::ops::{Deref, DerefMut};

use strapline_callback::{Callback, call_opt};
use strapline_style::{Attributes, StyleProps, StyleSpec};

use crate::props::{child_props, style_props};
use crate::warning::report;
use crate::{ActivationEvent, Element, EventKey, Node, SafeAnchor, SelectEvent};

const PANEL_VARIANTS: &[&str] = &["default", "primary", "success", "info", "warning", "danger"];

/// A bordered box with an optional heading and footer, optionally
/// collapsible.
#[derive(Clone, Debug, Default)]
pub struct Panel {
    /// Base class and variant.
    pub style: StyleProps,
    /// Caller classes.
    pub class_name: Option<String>,
    /// Pass-through attributes.
    pub attrs: Attributes,
    /// Element id; moves to the collapsible body when collapsible.
    pub id: Option<String>,
    /// Heading content.
    pub header: Option<Node>,
    /// Footer content.
    pub footer: Option<Node>,
    /// Makes the body collapsible through the heading.
    pub collapsible: bool,
    /// Whether a collapsible body is open.
    pub expanded: bool,
    /// Identifies the panel inside a group.
    pub event_key: Option<EventKey>,
    /// Role of the heading link.
    pub header_role: Option<Cow<'static, str>>,
    /// Role of the collapsible body.
    pub panel_role: Option<Cow<'static, str>>,
    /// Runs when the heading is clicked.
    pub on_select: Option<Callback<SelectEvent>>,
    /// Body content.
    pub children: Vec<Node>,
}

style_props!(Panel);
child_props!(Panel);

impl Panel {
    /// `panel`, contextual variants, `default` by default.
    pub const STYLE: StyleSpec =
        StyleSpec::new("panel").with_variants(PANEL_VARIANTS, Some("default"));

    /// An empty panel.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the id.
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Sets the heading.
    #[must_use]
    pub fn with_header(mut self, header: impl Into<Node>) -> Self {
        self.header = Some(header.into());
        self
    }

    /// Sets the footer.
    #[must_use]
    pub fn with_footer(mut self, footer: impl Into<Node>) -> Self {
        self.footer = Some(footer.into());
        self
    }

    /// Makes the body collapsible.
    #[must_use]
    pub fn with_collapsible(mut self, collapsible: bool) -> Self {
        self.collapsible = collapsible;
        self
    }

    /// Opens or closes a collapsible body.
    #[must_use]
    pub fn with_expanded(mut self, expanded: bool) -> Self {
        self.expanded = expanded;
        self
    }

    /// Sets the key that identifies the panel in a group.
    #[must_use]
    pub fn with_event_key(mut self, key: impl Into<EventKey>) -> Self {
        self.event_key = Some(key.into());
        self
    }

    /// Sets the select handler.
    #[must_use]
    pub fn on_select(mut self, f: impl Fn(&SelectEvent) + 'static) -> Self {
        self.on_select = Some(Callback::new(f));
        self
    }

    /// Handles a click on the heading link of a standalone panel.
    ///
    /// Reports the selection, or suppresses navigation when nobody listens,
    /// then flips `expanded`.
    pub fn click_title(&mut self, event: &ActivationEvent) {
        match &self.on_select {
            Some(on_select) => on_select.call(&SelectEvent {
                key: self.event_key.clone(),
                event: event.clone(),
            }),
            None => event.prevent_default(),
        }
        self.expanded = !self.expanded;
    }

    fn heading(&self, header: &Node) -> Element {
        let style = self.resolved();
        let heading = Element::new("div").with_class(style.prefix("heading"));
        if !self.collapsible {
            return heading.with_child(header.clone());
        }
        let mut link = SafeAnchor::new().with_child(header.clone());
        if let Some(id) = &self.id {
            link = link
                .with_href(format!("#{id}"))
                .with_attrs(Attributes::new().with("aria-controls", id.clone()));
        }
        if let Some(role) = &self.header_role {
            link = link.with_role(role.clone());
        }
        let mut link = link.render();
        link.attrs.set("aria-expanded", self.expanded);
        heading.with_child(
            Element::new("h4")
                .with_class(style.prefix("title"))
                .with_child(link),
        )
    }

    /// Describes the panel.
    #[must_use]
    pub fn render(&self) -> Element {
        report(&self.style_warnings());
        let style = self.resolved();
        let mut el = Element::new("div")
            .with_classes(style.class_set())
            .with_class_name(self.class_name.as_deref())
            .with_attrs(&self.attrs);

        if let Some(header) = &self.header {
            el = el.with_child(self.heading(header));
        }

        let body = Element::new("div")
            .with_class(style.prefix("body"))
            .with_children(self.children.iter().cloned());
        if self.collapsible {
            let mut collapse = Element::new("div")
                .with_class(style.prefix("collapse"))
                .with_class("collapse")
                .with_attr("aria-hidden", !self.expanded)
                .with_child(body);
            collapse.classes.insert("in", self.expanded);
            if let Some(id) = &self.id {
                collapse.attrs.set("id", id.clone());
            }
            if let Some(role) = &self.panel_role {
                collapse.attrs.set("role", role.clone());
            }
            el = el.with_child(collapse);
        } else {
            if let Some(id) = &self.id {
                el.attrs.set("id", id.clone());
            }
            el = el.with_child(body);
        }

        if let Some(footer) = &self.footer {
            el = el.with_child(
                Element::new("div")
                    .with_class(style.prefix("footer"))
                    .with_child(footer.clone()),
            );
        }
        el
    }
}

/// A stack of panels.
///
/// In accordion mode at most one panel is expanded. The active key is
/// controlled when `active_key` is set and tracked internally otherwise.
#[derive(Clone, Debug, Default)]
pub struct PanelGroup {
    /// Base class; the variant is inherited by panels without their own.
    pub style: StyleProps,
    /// Caller classes.
    pub class_name: Option<String>,
    /// Pass-through attributes.
    pub attrs: Attributes,
    /// Only one panel open at a time.
    pub accordion: bool,
    /// Controlled active key.
    pub active_key: Option<EventKey>,
    /// Runs before the active key changes.
    pub on_select: Option<Callback<SelectEvent>>,
    /// The panels.
    pub panels: Vec<Panel>,
    selected: Option<EventKey>,
}

style_props!(PanelGroup);

impl PanelGroup {
    /// `panel-group`.
    pub const STYLE: StyleSpec = StyleSpec::new("panel-group").with_variants(PANEL_VARIANTS, None);

    /// An empty group.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Only one panel open at a time.
    #[must_use]
    pub fn with_accordion(mut self, accordion: bool) -> Self {
        self.accordion = accordion;
        self
    }

    /// Controls the active key.
    #[must_use]
    pub fn with_active_key(mut self, key: impl Into<EventKey>) -> Self {
        self.active_key = Some(key.into());
        self
    }

    /// Sets the initial internal active key.
    #[must_use]
    pub fn with_default_active_key(mut self, key: impl Into<EventKey>) -> Self {
        self.selected = Some(key.into());
        self
    }

    /// Appends a panel.
    #[must_use]
    pub fn with_panel(mut self, panel: Panel) -> Self {
        self.panels.push(panel);
        self
    }

    /// Sets the select handler.
    #[must_use]
    pub fn on_select(mut self, f: impl Fn(&SelectEvent) + 'static) -> Self {
        self.on_select = Some(Callback::new(f));
        self
    }

    /// The expanded panel's key in accordion mode.
    #[must_use]
    pub fn active_key(&self) -> Option<&EventKey> {
        if !self.accordion {
            return None;
        }
        self.active_key.as_ref().or(self.selected.as_ref())
    }

    /// Selects `key`, or clears the internal selection when `key` is
    /// already selected.
    pub fn select(&mut self, key: Option<EventKey>, event: &ActivationEvent) {
        event.prevent_default();
        call_opt(
            self.on_select.as_ref(),
            &SelectEvent {
                key: key.clone(),
                event: event.clone(),
            },
        );
        self.selected = if self.selected == key { None } else { key };
    }

    /// The panel at `index` as the group renders it.
    #[must_use]
    pub fn panel_props(&self, index: usize) -> Option<Panel> {
        let panel = self.panels.get(index)?;
        let mut panel = panel.clone();
        if panel.style.variant.is_none() {
            panel.style.variant = self.style.variant.clone();
        }
        if self.accordion {
            panel.header_role = Some(Cow::Borrowed("tab"));
            panel.panel_role = Some(Cow::Borrowed("tabpanel"));
            panel.collapsible = true;
            panel.expanded =
                panel.event_key.is_some() && panel.event_key.as_ref() == self.active_key();
        }
        Some(panel)
    }

    /// Clicks the heading of the panel at `index`.
    ///
    /// In accordion mode the group selects the panel first, then the panel's
    /// own `on_select` runs. Otherwise the panel toggles itself.
    pub fn click_panel(&mut self, index: usize, event: &ActivationEvent) {
        if !self.accordion {
            if let Some(panel) = self.panels.get_mut(index) {
                panel.click_title(event);
            }
            return;
        }
        let Some(panel) = self.panels.get(index) else {
            return;
        };
        let key = panel.event_key.clone();
        let on_select = panel.on_select.clone();
        self.select(key.clone(), event);
        call_opt(
            on_select.as_ref(),
            &SelectEvent {
                key,
                event: event.clone(),
            },
        );
    }

    /// Describes the group.
    #[must_use]
    pub fn render(&self) -> Element {
        report(&self.style_warnings());
        let mut el = Element::new("div")
            .with_classes(self.resolved().class_set())
            .with_class_name(self.class_name.as_deref())
            .with_attrs(&self.attrs)
            .with_children(
                (0..self.panels.len())
                    .filter_map(|i| self.panel_props(i))
                    .map(|panel| Node::from(panel.render())),
            );
        if self.accordion {
            el.attrs.set_default("role", "tablist");
        }
        el
    }
}

/// A panel group in accordion mode.
///
/// ```
/// use strapline_components::{Accordion, ActivationEvent, Panel, PanelGroup};
///
/// let mut accordion = Accordion::new(
///     PanelGroup::new()
///         .with_panel(Panel::new().with_header("One").with_event_key("1"))
///         .with_panel(Panel::new().with_header("Two").with_event_key("2")),
/// );
/// accordion.click_panel(1, &ActivationEvent::click());
/// assert_eq!(accordion.active_key().map(|k| k.as_str()), Some("2"));
/// accordion.click_panel(1, &ActivationEvent::click());
/// assert_eq!(accordion.active_key(), None);
/// ```
#[derive(Clone, Debug, Default)]
pub struct Accordion(PanelGroup);

impl Accordion {
    /// Wraps `group`, switching it to accordion mode.
    #[must_use]
    pub fn new(group: PanelGroup) -> Self {
        Self(group.with_accordion(true))
    }

    /// The wrapped group.
    #[must_use]
    pub fn into_inner(self) -> PanelGroup {
        self.0
    }
}

impl From<PanelGroup> for Accordion {
    fn from(group: PanelGroup) -> Self {
        Self::new(group)
    }
}

impl Deref for Accordion {
    type Target = PanelGroup;

    fn deref(&self) -> &PanelGroup {
        &self.0
    }
}

impl DerefMut for Accordion {
    fn deref_mut(&mut self) -> &mut PanelGroup {
        &mut self.0
    }
}
