// Copyright 2026 the Strapline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Forms, labels, checkboxes and input groups.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use strapline_style::{Attributes, ClassSet, Size, StyleProps, StyleSpec};

use crate::props::{child_props, style_props};
use crate::warning::report;
use crate::{ComponentWarning, Element, Node};

/// Validation feedback for a control.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ValidationState {
    /// Valid input.
    Success,
    /// Suspicious input.
    Warning,
    /// Invalid input.
    Error,
}

impl ValidationState {
    /// The state name as used in `has-{state}` classes.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

/// What an enclosing form group shares with its controls.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormGroupContext {
    /// Id of the group's control; labels point at it by default.
    pub control_id: Option<String>,
}

impl FormGroupContext {
    /// A group whose control has `control_id`.
    #[must_use]
    pub fn new(control_id: impl Into<String>) -> Self {
        Self {
            control_id: Some(control_id.into()),
        }
    }
}

/// A form, optionally laid out horizontally or inline.
#[derive(Clone, Debug, Default)]
pub struct Form {
    /// Base class used as the class prefix.
    pub style: StyleProps,
    /// Caller classes.
    pub class_name: Option<String>,
    /// Pass-through attributes.
    pub attrs: Attributes,
    /// Labels beside controls.
    pub horizontal: bool,
    /// All controls on one line.
    pub inline: bool,
    /// Tag to render instead of `form`.
    pub tag: Option<&'static str>,
    /// Content.
    pub children: Vec<Node>,
}

style_props!(Form);
child_props!(Form);

impl Form {
    /// `form`, used only as a prefix.
    pub const STYLE: StyleSpec = StyleSpec::new("form");

    /// A stacked form.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Labels beside controls.
    #[must_use]
    pub fn with_horizontal(mut self, horizontal: bool) -> Self {
        self.horizontal = horizontal;
        self
    }

    /// All controls on one line.
    #[must_use]
    pub fn with_inline(mut self, inline: bool) -> Self {
        self.inline = inline;
        self
    }

    /// Describes the form.
    #[must_use]
    pub fn render(&self) -> Element {
        let style = self.resolved();
        let classes = ClassSet::new()
            .with(style.prefix("horizontal"), self.horizontal)
            .with(style.prefix("inline"), self.inline);
        Element::new(self.tag.unwrap_or("form"))
            .with_classes(classes)
            .with_class_name(self.class_name.as_deref())
            .with_attrs(&self.attrs)
            .with_children(self.children.iter().cloned())
    }
}

/// Read-only text in place of a control.
#[derive(Clone, Debug, Default)]
pub struct FormControlStatic {
    /// Base class.
    pub style: StyleProps,
    /// Caller classes.
    pub class_name: Option<String>,
    /// Pass-through attributes.
    pub attrs: Attributes,
    /// Tag to render instead of `p`.
    pub tag: Option<&'static str>,
    /// Text.
    pub children: Vec<Node>,
}

style_props!(FormControlStatic);
child_props!(FormControlStatic);

impl FormControlStatic {
    /// `form-control-static`.
    pub const STYLE: StyleSpec = StyleSpec::new("form-control-static");

    /// Empty static text.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Describes the text.
    #[must_use]
    pub fn render(&self) -> Element {
        Element::new(self.tag.unwrap_or("p"))
            .with_classes(self.resolved().class_set())
            .with_class_name(self.class_name.as_deref())
            .with_attrs(&self.attrs)
            .with_children(self.children.iter().cloned())
    }
}

/// A control's label.
///
/// Without an explicit `html_for` the label points at the enclosing form
/// group's control.
#[derive(Clone, Debug, Default)]
pub struct ControlLabel {
    /// Base class.
    pub style: StyleProps,
    /// Caller classes.
    pub class_name: Option<String>,
    /// Pass-through attributes.
    pub attrs: Attributes,
    /// Explicit target control id.
    pub html_for: Option<String>,
    /// Visible to screen readers only.
    pub sr_only: bool,
    /// Enclosing form group.
    pub form_group: Option<FormGroupContext>,
    /// Label text.
    pub children: Vec<Node>,
}

style_props!(ControlLabel);
child_props!(ControlLabel);

impl ControlLabel {
    /// `control-label`.
    pub const STYLE: StyleSpec = StyleSpec::new("control-label");

    /// An empty label.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Points at `id`.
    #[must_use]
    pub fn with_html_for(mut self, id: impl Into<String>) -> Self {
        self.html_for = Some(id.into());
        self
    }

    /// Hides the label visually.
    #[must_use]
    pub fn with_sr_only(mut self, sr_only: bool) -> Self {
        self.sr_only = sr_only;
        self
    }

    /// Places the label inside a form group.
    #[must_use]
    pub fn in_form_group(mut self, group: FormGroupContext) -> Self {
        self.form_group = Some(group);
        self
    }

    fn control_id(&self) -> Option<&str> {
        self.form_group.as_ref()?.control_id.as_deref()
    }

    /// The effective `for` target.
    #[must_use]
    pub fn target(&self) -> Option<&str> {
        self.html_for.as_deref().or_else(|| self.control_id())
    }

    /// Configuration problems.
    #[must_use]
    pub fn warnings(&self) -> Vec<ComponentWarning> {
        let mut out = self.style_warnings();
        if let (Some(html_for), Some(control_id)) = (&self.html_for, self.control_id())
            && html_for != control_id
        {
            out.push(ComponentWarning::ControlIdIgnored {
                html_for: html_for.clone(),
                control_id: String::from(control_id),
            });
        }
        out
    }

    /// Describes the label.
    #[must_use]
    pub fn render(&self) -> Element {
        report(&self.warnings());
        let mut classes = self.resolved().class_set();
        classes.insert("sr-only", self.sr_only);
        let mut el = Element::new("label")
            .with_classes(classes)
            .with_class_name(self.class_name.as_deref())
            .with_attrs(&self.attrs)
            .with_children(self.children.iter().cloned());
        if let Some(target) = self.target() {
            el.attrs.set("for", String::from(target));
        }
        el
    }
}

/// Help text below a control.
#[derive(Clone, Debug, Default)]
pub struct HelpBlock {
    /// Base class.
    pub style: StyleProps,
    /// Caller classes.
    pub class_name: Option<String>,
    /// Pass-through attributes.
    pub attrs: Attributes,
    /// Text.
    pub children: Vec<Node>,
}

style_props!(HelpBlock);
child_props!(HelpBlock);

impl HelpBlock {
    /// `help-block`.
    pub const STYLE: StyleSpec = StyleSpec::new("help-block");

    /// Empty help text.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Describes the help text.
    #[must_use]
    pub fn render(&self) -> Element {
        Element::new("span")
            .with_classes(self.resolved().class_set())
            .with_class_name(self.class_name.as_deref())
            .with_attrs(&self.attrs)
            .with_children(self.children.iter().cloned())
    }
}

/// A checkbox with its label, stacked or inline.
///
/// Pass-through attributes go to the `input`, not the wrapper.
#[derive(Clone, Debug, Default)]
pub struct Checkbox {
    /// Base class.
    pub style: StyleProps,
    /// Caller classes for the wrapper.
    pub class_name: Option<String>,
    /// Pass-through attributes for the input.
    pub attrs: Attributes,
    /// Lays the checkbox out inline.
    pub inline: bool,
    /// Disables the input.
    pub disabled: bool,
    /// Validation feedback; not shown on inline checkboxes.
    pub validation_state: Option<ValidationState>,
    /// Label tooltip.
    pub title: Option<String>,
    /// Label content.
    pub children: Vec<Node>,
}

style_props!(Checkbox);
child_props!(Checkbox);

impl Checkbox {
    /// `checkbox`.
    pub const STYLE: StyleSpec = StyleSpec::new("checkbox");

    /// An enabled stacked checkbox.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Lays the checkbox out inline.
    #[must_use]
    pub fn with_inline(mut self, inline: bool) -> Self {
        self.inline = inline;
        self
    }

    /// Disables the input.
    #[must_use]
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Sets validation feedback.
    #[must_use]
    pub fn with_validation_state(mut self, state: ValidationState) -> Self {
        self.validation_state = Some(state);
        self
    }

    /// Sets the label tooltip.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Configuration problems.
    #[must_use]
    pub fn warnings(&self) -> Vec<ComponentWarning> {
        let mut out = self.style_warnings();
        if self.inline && self.validation_state.is_some() {
            out.push(ComponentWarning::InlineValidationIgnored);
        }
        out
    }

    /// Describes the checkbox.
    #[must_use]
    pub fn render(&self) -> Element {
        report(&self.warnings());
        let style = self.resolved();
        let input = Element::new("input")
            .with_attrs(&self.attrs)
            .with_attr("type", "checkbox")
            .with_attr("disabled", self.disabled);

        let mut label = Element::new("label")
            .with_child(input)
            .with_children(self.children.iter().cloned());
        if let Some(title) = &self.title {
            label.attrs.set("title", title.clone());
        }

        if self.inline {
            let classes = ClassSet::new()
                .with(style.prefix("inline"), true)
                .with("disabled", self.disabled);
            return label
                .with_classes(classes)
                .with_class_name(self.class_name.as_deref());
        }

        let mut classes = style.class_set();
        classes.insert("disabled", self.disabled);
        if let Some(state) = self.validation_state {
            classes.insert(format!("has-{}", state.as_str()), true);
        }
        Element::new("div")
            .with_classes(classes)
            .with_class_name(self.class_name.as_deref())
            .with_child(label)
    }
}

/// A control with attached add-ons or buttons.
#[derive(Clone, Debug, Default)]
pub struct InputGroup {
    /// Base class and size.
    pub style: StyleProps,
    /// Caller classes.
    pub class_name: Option<String>,
    /// Pass-through attributes.
    pub attrs: Attributes,
    /// Control and add-ons.
    pub children: Vec<Node>,
}

style_props!(InputGroup);
child_props!(InputGroup);

impl InputGroup {
    /// `input-group`, sizes `lg`/`sm`.
    pub const STYLE: StyleSpec =
        StyleSpec::new("input-group").with_sizes(&[Size::Large, Size::Small]);

    /// An empty group.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Describes the group.
    #[must_use]
    pub fn render(&self) -> Element {
        report(&self.style_warnings());
        Element::new("span")
            .with_classes(self.resolved().class_set())
            .with_class_name(self.class_name.as_deref())
            .with_attrs(&self.attrs)
            .with_children(self.children.iter().cloned())
    }
}

/// Text or an icon attached to a control.
#[derive(Clone, Debug, Default)]
pub struct InputGroupAddon {
    /// Base class.
    pub style: StyleProps,
    /// Caller classes.
    pub class_name: Option<String>,
    /// Pass-through attributes.
    pub attrs: Attributes,
    /// Add-on content.
    pub children: Vec<Node>,
}

style_props!(InputGroupAddon);
child_props!(InputGroupAddon);

impl InputGroupAddon {
    /// `input-group-addon`.
    pub const STYLE: StyleSpec = StyleSpec::new("input-group-addon");

    /// An empty add-on.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Describes the add-on.
    #[must_use]
    pub fn render(&self) -> Element {
        Element::new("span")
            .with_classes(self.resolved().class_set())
            .with_class_name(self.class_name.as_deref())
            .with_attrs(&self.attrs)
            .with_children(self.children.iter().cloned())
    }
}

/// Buttons attached to a control.
#[derive(Clone, Debug, Default)]
pub struct InputGroupButton {
    /// Base class.
    pub style: StyleProps,
    /// Caller classes.
    pub class_name: Option<String>,
    /// Pass-through attributes.
    pub attrs: Attributes,
    /// The buttons.
    pub children: Vec<Node>,
}

style_props!(InputGroupButton);
child_props!(InputGroupButton);

impl InputGroupButton {
    /// `input-group-btn`.
    pub const STYLE: StyleSpec = StyleSpec::new("input-group-btn");

    /// An empty button slot.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Describes the button slot.
    #[must_use]
    pub fn render(&self) -> Element {
        Element::new("span")
            .with_classes(self.resolved().class_set())
            .with_class_name(self.class_name.as_deref())
            .with_attrs(&self.attrs)
            .with_children(self.children.iter().cloned())
    }
}
