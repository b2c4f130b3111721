// Copyright 2026 the Strapline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Strapline Components: headless presentational components for class-based
//! CSS.
//!
//! Each component is a plain configuration struct with builder setters and
//! a `render()` method that returns an [`Element`], a small description of
//! the markup it stands for: tag, classes, attributes, inline style and
//! children. Hosts turn elements into DOM nodes, widgets, or HTML text via
//! the [`Display`](core::fmt::Display) impl.
//!
//! ```rust
//! use strapline_components::{Button, ButtonGroup};
//! use strapline_style::{Size, Variant};
//!
//! let group = ButtonGroup::new()
//!     .with_size(Size::Small)
//!     .with_child(Button::new().with_variant(Variant::PRIMARY).with_child("Save").render())
//!     .with_child(Button::new().with_child("Cancel").render());
//!
//! assert_eq!(
//!     group.render().to_string(),
//!     concat!(
//!         r#"<div class="btn-group btn-group-sm">"#,
//!         r#"<button class="btn btn-primary" type="button">Save</button>"#,
//!         r#"<button class="btn btn-default" type="button">Cancel</button>"#,
//!         "</div>",
//!     )
//! );
//! ```
//!
//! ## Shared fields
//!
//! Every styled component has `style` ([`StyleProps`](strapline_style::StyleProps):
//! base class, size, variant), `class_name` (caller classes, emitted first)
//! and `attrs` (pass-through attributes), along with a `STYLE` constant
//! declaring its base class and supported modifiers.
//!
//! ## Behaviour
//!
//! Interactive components expose handlers such as `handle_click` that take
//! an [`ActivationEvent`]. Events are shared by reference, so a component
//! calling [`ActivationEvent::prevent_default`] is visible to the host after
//! the handler returns. [`SafeAnchor`] is the building block for links that
//! act as buttons.
//!
//! ## Warnings
//!
//! Misconfigurations that still render, such as an unsupported size or a
//! tooltip without an id, are returned by `warnings()` as
//! [`ComponentWarning`] values and logged through the `log` facade when the
//! component renders.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod props;

mod button;
mod dropdown;
mod element;
mod event;
mod fade;
mod form;
mod layout;
mod list_group;
mod navigation;
mod panel;
mod safe_anchor;
mod tooltip;
mod warning;

pub use button::{Button, ButtonGroup, ToggleButton, ToggleKind};
pub use dropdown::{DROPDOWN_ATTRS, DropdownToggle, MenuItem, SplitButton, SplitToggle};
pub use element::{Element, Node};
pub use event::{ActivationEvent, EventKey, Key, SelectEvent};
pub use fade::{DEFAULT_FADE_TIMEOUT, Fade, FadeStatus};
pub use form::{
    Checkbox, ControlLabel, Form, FormControlStatic, FormGroupContext, HelpBlock, InputGroup,
    InputGroupAddon, InputGroupButton, ValidationState,
};
pub use layout::{CarouselCaption, Col, ColLayout, Image, Row, Table, Well};
pub use list_group::{ListGroup, ListGroupChild, ListGroupItem};
pub use navigation::{Breadcrumb, Pager, PagerItem};
pub use panel::{Accordion, Panel, PanelGroup};
pub use safe_anchor::{SafeAnchor, is_trivial_href};
pub use tooltip::Tooltip;
pub use warning::ComponentWarning;
