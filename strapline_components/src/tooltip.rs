// Copyright 2026 the Strapline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tooltip bubbles.

use alloc::string::String;
use alloc::vec::Vec;

use strapline_overlay::{OverlayState, Placement};
use strapline_style::{Attributes, StyleProps, StyleSpec};

use crate::props::{child_props, style_props};
use crate::warning::report;
use crate::{ComponentWarning, Element, Node};

/// The bubble an [`OverlayTrigger`](strapline_overlay::OverlayTrigger)
/// shows next to its trigger.
///
/// The `id` is what the trigger's `aria-describedby` points at.
///
/// ```
/// use strapline_components::Tooltip;
/// use strapline_overlay::Placement;
///
/// let el = Tooltip::new()
///     .with_id("save-tip")
///     .with_placement(Placement::Top)
///     .with_position(10, 20)
///     .with_child("Save the document")
///     .render();
/// assert_eq!(
///     el.to_string(),
///     concat!(
///         r#"<div class="tooltip top" id="save-tip" role="tooltip" style="top: 10px; left: 20px;">"#,
///         r#"<div class="tooltip-arrow"></div>"#,
///         r#"<div class="tooltip-inner">Save the document</div></div>"#,
///     )
/// );
/// ```
#[derive(Clone, Debug, Default)]
pub struct Tooltip {
    /// Base class.
    pub style: StyleProps,
    /// Caller classes.
    pub class_name: Option<String>,
    /// Pass-through attributes.
    pub attrs: Attributes,
    /// Element id, referenced by the trigger.
    pub id: Option<String>,
    /// Side of the trigger the bubble sits on.
    pub placement: Placement,
    /// Offset from the top of the positioning parent, in pixels.
    pub position_top: Option<i32>,
    /// Offset from the left of the positioning parent, in pixels.
    pub position_left: Option<i32>,
    /// Arrow offset from the top of the bubble, in pixels.
    pub arrow_offset_top: Option<i32>,
    /// Arrow offset from the left of the bubble, in pixels.
    pub arrow_offset_left: Option<i32>,
    /// Bubble content.
    pub children: Vec<Node>,
}

style_props!(Tooltip);
child_props!(Tooltip);

impl Tooltip {
    /// `tooltip`.
    pub const STYLE: StyleSpec = StyleSpec::new("tooltip");

    /// An empty tooltip on the right.
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

    /// Sets the placement.
    #[must_use]
    pub fn with_placement(mut self, placement: Placement) -> Self {
        self.placement = placement;
        self
    }

    /// Takes the placement an overlay trigger reports.
    #[must_use]
    pub fn with_overlay_state(self, state: &OverlayState) -> Self {
        self.with_placement(state.placement)
    }

    /// Positions the bubble.
    #[must_use]
    pub fn with_position(mut self, top: i32, left: i32) -> Self {
        self.position_top = Some(top);
        self.position_left = Some(left);
        self
    }

    /// Positions the arrow.
    #[must_use]
    pub fn with_arrow_offset(mut self, top: Option<i32>, left: Option<i32>) -> Self {
        self.arrow_offset_top = top;
        self.arrow_offset_left = left;
        self
    }

    /// Configuration problems.
    #[must_use]
    pub fn warnings(&self) -> Vec<ComponentWarning> {
        let mut out = self.style_warnings();
        if self.id.is_none() {
            out.push(ComponentWarning::MissingTooltipId);
        }
        out
    }

    /// Describes the tooltip.
    #[must_use]
    pub fn render(&self) -> Element {
        report(&self.warnings());
        let style = self.resolved();
        let mut classes = style.class_set();
        classes.insert(self.placement.as_str(), true);

        let mut el = Element::new("div")
            .with_classes(classes)
            .with_class_name(self.class_name.as_deref())
            .with_attrs(&self.attrs);
        if let Some(id) = &self.id {
            el.attrs.set("id", id.clone());
        }
        el.attrs.set("role", "tooltip");
        if let Some(top) = self.position_top {
            el.style.set("top", top);
        }
        if let Some(left) = self.position_left {
            el.style.set("left", left);
        }

        let mut arrow = Element::new("div").with_class(style.prefix("arrow"));
        if let Some(top) = self.arrow_offset_top {
            arrow.style.set("top", top);
        }
        if let Some(left) = self.arrow_offset_left {
            arrow.style.set("left", left);
        }
        let inner = Element::new("div")
            .with_class(style.prefix("inner"))
            .with_children(self.children.iter().cloned());
        el.with_child(arrow).with_child(inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strapline_style::AttrValue;

    #[test]
    fn defaults_to_the_right() {
        let tip = Tooltip::new().with_id("t");
        let el = tip.render();
        assert_eq!(el.class_attr(), "tooltip right");
        assert_eq!(el.attr_text("role"), Some("tooltip"));
        assert!(el.style.is_empty());
        assert!(tip.warnings().is_empty());
    }

    #[test]
    fn missing_id_is_reported() {
        assert_eq!(
            Tooltip::new().warnings(),
            [ComponentWarning::MissingTooltipId]
        );
    }

    #[test]
    fn arrow_and_inner_children() {
        let el = Tooltip::new()
            .with_id("t")
            .with_arrow_offset(None, Some(30))
            .with_child("Hi")
            .render();
        let mut parts = el.child_elements();
        let arrow = parts.next().unwrap();
        assert_eq!(arrow.class_attr(), "tooltip-arrow");
        assert_eq!(arrow.style.get("left"), Some(&AttrValue::Number(30)));
        assert_eq!(arrow.style.get("top"), None);
        let inner = parts.next().unwrap();
        assert_eq!(inner.class_attr(), "tooltip-inner");
        assert_eq!(inner.text_content(), "Hi");
    }

    #[test]
    fn placement_follows_overlay_state() {
        let state = OverlayState {
            shown: true,
            placement: Placement::Bottom,
            root_close: false,
        };
        let el = Tooltip::new().with_id("t").with_overlay_state(&state).render();
        assert!(el.has_class("bottom"));
    }
}
