// Copyright 2026 the Strapline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rendered element descriptions.

use alloc::borrow::Cow;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use strapline_style::{AttrValue, Attributes, ClassSet};

/// A node in a rendered description: an element or a run of text.
#[derive(Clone, Debug, PartialEq)]
pub enum Node {
    /// A nested element.
    Element(Element),
    /// Text content.
    Text(Cow<'static, str>),
}

impl Node {
    /// The element, if this node is one.
    #[must_use]
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Self::Element(e) => Some(e),
            Self::Text(_) => None,
        }
    }
}

impl From<Element> for Node {
    fn from(value: Element) -> Self {
        Self::Element(value)
    }
}

impl From<&'static str> for Node {
    fn from(value: &'static str) -> Self {
        Self::Text(Cow::Borrowed(value))
    }
}

impl From<String> for Node {
    fn from(value: String) -> Self {
        Self::Text(Cow::Owned(value))
    }
}

/// A host-neutral description of one element.
///
/// Components produce these; hosts turn them into DOM nodes, widgets or
/// markup. The [`Display`](fmt::Display) impl writes HTML.
///
/// ```
/// use strapline_components::Element;
///
/// let el = Element::new("span")
///     .with_class("label")
///     .with_class_name(Some("extra"))
///     .with_attr("title", "Hi")
///     .with_child("New");
/// assert_eq!(el.to_string(), r#"<span class="extra label" title="Hi">New</span>"#);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Element {
    /// Tag name.
    pub tag: Cow<'static, str>,
    /// Classes computed by the component.
    pub classes: ClassSet,
    /// Caller-supplied classes, emitted before the computed ones.
    pub class_name: Option<String>,
    /// Attributes other than `class` and `style`.
    pub attrs: Attributes,
    /// Inline style properties. Numbers are pixel lengths.
    pub style: Attributes,
    /// Child nodes.
    pub children: Vec<Node>,
}

/// Elements that never have content or a closing tag.
const VOID_TAGS: &[&str] = &["br", "hr", "img", "input"];

impl Element {
    /// An empty element.
    #[must_use]
    pub fn new(tag: impl Into<Cow<'static, str>>) -> Self {
        Self {
            tag: tag.into(),
            ..Self::default()
        }
    }

    /// Replaces the computed classes.
    #[must_use]
    pub fn with_classes(mut self, classes: ClassSet) -> Self {
        self.classes = classes;
        self
    }

    /// Adds one computed class.
    #[must_use]
    pub fn with_class(mut self, token: impl Into<Cow<'static, str>>) -> Self {
        self.classes.insert(token, true);
        self
    }

    /// Sets the caller-supplied classes.
    #[must_use]
    pub fn with_class_name(mut self, class_name: Option<&str>) -> Self {
        self.class_name = class_name.map(String::from);
        self
    }

    /// Sets one attribute.
    #[must_use]
    pub fn with_attr(mut self, name: impl Into<Cow<'static, str>>, value: impl Into<AttrValue>) -> Self {
        self.attrs.set(name, value);
        self
    }

    /// Copies every attribute from `attrs`, overriding existing ones.
    #[must_use]
    pub fn with_attrs(mut self, attrs: &Attributes) -> Self {
        self.attrs.merge(attrs);
        self
    }

    /// Sets one inline style property.
    #[must_use]
    pub fn with_style(mut self, name: impl Into<Cow<'static, str>>, value: impl Into<AttrValue>) -> Self {
        self.style.set(name, value);
        self
    }

    /// Appends a child.
    #[must_use]
    pub fn with_child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Appends children.
    #[must_use]
    pub fn with_children(mut self, children: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(children);
        self
    }

    /// The `class` attribute value.
    #[must_use]
    pub fn class_attr(&self) -> String {
        self.classes.to_class_name(self.class_name.as_deref())
    }

    /// Whether `token` appears in the computed or caller-supplied classes.
    #[must_use]
    pub fn has_class(&self, token: &str) -> bool {
        self.classes.contains(token)
            || self
                .class_name
                .as_deref()
                .is_some_and(|c| c.split_whitespace().any(|t| t == token))
    }

    /// Looks up an attribute.
    #[must_use]
    pub fn attr(&self, name: &str) -> Option<&AttrValue> {
        self.attrs.get(name)
    }

    /// Looks up a text attribute.
    #[must_use]
    pub fn attr_text(&self, name: &str) -> Option<&str> {
        self.attrs.get_text(name)
    }

    /// Child elements, skipping text.
    pub fn child_elements(&self) -> impl Iterator<Item = &Self> + '_ {
        self.children.iter().filter_map(Node::as_element)
    }

    /// First element with `tag` in depth-first order, including `self`.
    #[must_use]
    pub fn find(&self, tag: &str) -> Option<&Self> {
        if self.tag == tag {
            return Some(self);
        }
        self.child_elements().find_map(|c| c.find(tag))
    }

    /// Concatenated text of all descendants.
    #[must_use]
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        for child in &self.children {
            match child {
                Node::Text(t) => out.push_str(t),
                Node::Element(e) => e.collect_text(out),
            }
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Element(e) => fmt::Display::fmt(e, f),
            Self::Text(t) => write_escaped(f, t),
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}", self.tag)?;
        let class = self.class_attr();
        if !class.is_empty() {
            f.write_str(" class=\"")?;
            write_escaped(f, &class)?;
            f.write_str("\"")?;
        }
        for (name, value) in self.attrs.iter() {
            match value {
                // ARIA states are enumerated strings, not boolean attributes.
                AttrValue::Bool(b) if name.starts_with("aria-") => {
                    write!(f, " {name}=\"{b}\"")?;
                }
                AttrValue::Bool(true) => write!(f, " {name}")?,
                AttrValue::Bool(false) => {}
                other => {
                    write!(f, " {name}=\"")?;
                    write_escaped(f, &alloc::format!("{other}"))?;
                    f.write_str("\"")?;
                }
            }
        }
        if !self.style.is_empty() {
            f.write_str(" style=\"")?;
            for (i, (name, value)) in self.style.iter().enumerate() {
                if i > 0 {
                    f.write_str(" ")?;
                }
                match value {
                    AttrValue::Number(n) => write!(f, "{name}: {n}px;")?,
                    other => write!(f, "{name}: {other};")?,
                }
            }
            f.write_str("\"")?;
        }
        f.write_str(">")?;
        if VOID_TAGS.contains(&&*self.tag) {
            return Ok(());
        }
        for child in &self.children {
            fmt::Display::fmt(child, f)?;
        }
        write!(f, "</{}>", self.tag)
    }
}

fn write_escaped(f: &mut fmt::Formatter<'_>, text: &str) -> fmt::Result {
    for c in text.chars() {
        match c {
            '&' => f.write_str("&amp;")?,
            '<' => f.write_str("&lt;")?,
            '>' => f.write_str("&gt;")?,
            '"' => f.write_str("&quot;")?,
            c => fmt::Write::write_char(f, c)?,
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn void_elements_have_no_closing_tag() {
        let el = Element::new("input")
            .with_attr("type", "checkbox")
            .with_attr("disabled", true)
            .with_attr("checked", false);
        assert_eq!(el.to_string(), r#"<input type="checkbox" disabled>"#);
    }

    #[test]
    fn aria_booleans_are_spelled_out() {
        let el = Element::new("button").with_attr("aria-expanded", false);
        assert_eq!(el.to_string(), r#"<button aria-expanded="false"></button>"#);
    }

    #[test]
    fn style_numbers_are_pixels() {
        let el = Element::new("div")
            .with_style("top", 10)
            .with_style("pointer-events", "none");
        assert_eq!(
            el.to_string(),
            r#"<div style="top: 10px; pointer-events: none;"></div>"#
        );
    }

    #[test]
    fn text_is_escaped() {
        let el = Element::new("p")
            .with_attr("title", "a \"b\"")
            .with_child("1 < 2 & 3");
        assert_eq!(
            el.to_string(),
            r#"<p title="a &quot;b&quot;">1 &lt; 2 &amp; 3</p>"#
        );
    }

    #[test]
    fn find_and_text_walk_descendants() {
        let el = Element::new("li").with_child(
            Element::new("a")
                .with_child("Next ")
                .with_child(Element::new("span").with_child("»")),
        );
        assert_eq!(el.find("span").map(|s| s.tag.to_string()), Some("span".into()));
        assert!(el.find("ul").is_none());
        assert_eq!(el.text_content(), "Next »");
    }

    #[test]
    fn has_class_checks_both_sources() {
        let el = Element::new("div")
            .with_class("row")
            .with_class_name(Some("  mine  other "));
        assert!(el.has_class("row"));
        assert!(el.has_class("mine"));
        assert!(!el.has_class("col"));
    }
}
