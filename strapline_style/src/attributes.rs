// Copyright 2026 the Strapline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Untyped pass-through fields and the style/pass-through split.

use alloc::borrow::Cow;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;

use hashbrown::HashSet;

use crate::{ConfigError, Role, StyleProps, Variant};

/// Field name carrying the base class in an untyped field bag.
pub const BASE_CLASS_FIELD: &str = "bs-class";
/// Field name carrying the size in an untyped field bag.
pub const SIZE_FIELD: &str = "bs-size";
/// Field name carrying the variant in an untyped field bag.
pub const VARIANT_FIELD: &str = "bs-style";
/// Field name carrying the role in an untyped field bag.
pub const ROLE_FIELD: &str = "bs-role";

/// The complete allow-list of style field names.
pub const STYLE_FIELDS: [&str; 4] = [BASE_CLASS_FIELD, SIZE_FIELD, VARIANT_FIELD, ROLE_FIELD];

/// A single attribute value.
#[derive(Clone, Debug, PartialEq)]
pub enum AttrValue {
    /// Text, written verbatim.
    Text(Cow<'static, str>),
    /// An integer, such as a `tabindex`.
    Number(i64),
    /// A boolean attribute such as `disabled` or `aria-expanded`.
    Bool(bool),
}

impl AttrValue {
    /// The text payload, if this is a text value.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(t) => Some(t),
            _ => None,
        }
    }

    /// The boolean payload, if this is a boolean value.
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(t) => f.write_str(t),
            Self::Number(n) => write!(f, "{n}"),
            Self::Bool(b) => write!(f, "{b}"),
        }
    }
}

impl From<&'static str> for AttrValue {
    fn from(value: &'static str) -> Self {
        Self::Text(Cow::Borrowed(value))
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        Self::Text(Cow::Owned(value))
    }
}

impl From<Cow<'static, str>> for AttrValue {
    fn from(value: Cow<'static, str>) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for AttrValue {
    fn from(value: i64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for AttrValue {
    fn from(value: i32) -> Self {
        Self::Number(value.into())
    }
}

impl From<bool> for AttrValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

/// An ordered bag of named fields forwarded to a rendered element.
///
/// Names are unique; setting an existing name replaces its value without
/// moving it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Attributes {
    entries: Vec<(Cow<'static, str>, AttrValue)>,
}

impl Attributes {
    /// An empty bag.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `name` to `value`.
    pub fn set(&mut self, name: impl Into<Cow<'static, str>>, value: impl Into<AttrValue>) {
        let name = name.into();
        let value = value.into();
        if let Some(entry) = self.entries.iter_mut().find(|(n, _)| *n == name) {
            entry.1 = value;
        } else {
            self.entries.push((name, value));
        }
    }

    /// Builder form of [`Attributes::set`].
    #[must_use]
    pub fn with(mut self, name: impl Into<Cow<'static, str>>, value: impl Into<AttrValue>) -> Self {
        self.set(name, value);
        self
    }

    /// Sets `name` only if it is not present yet.
    pub fn set_default(&mut self, name: impl Into<Cow<'static, str>>, value: impl Into<AttrValue>) {
        let name = name.into();
        if !self.contains(&name) {
            self.entries.push((name, value.into()));
        }
    }

    /// The value stored under `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&AttrValue> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v)
    }

    /// The text value stored under `name`.
    #[must_use]
    pub fn get_text(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(AttrValue::as_text)
    }

    /// Returns `true` if `name` is present.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Removes and returns the value stored under `name`.
    pub fn remove(&mut self, name: &str) -> Option<AttrValue> {
        let idx = self.entries.iter().position(|(n, _)| n == name)?;
        Some(self.entries.remove(idx).1)
    }

    /// Copies every field of `other` into `self`, `other` winning on conflicts.
    pub fn merge(&mut self, other: &Self) {
        for (name, value) in &other.entries {
            self.set(name.clone(), value.clone());
        }
    }

    /// Iterates over `(name, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttrValue)> + '_ {
        self.entries.iter().map(|(n, v)| (&**n, v))
    }

    /// Number of fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if there are no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Splits the bag into fields whose name is in `names` and the rest.
    ///
    /// This is how a composite component hands the fields one of its parts
    /// understands to that part and forwards everything else to another.
    /// Order is preserved on both sides.
    ///
    /// ```
    /// use strapline_style::Attributes;
    ///
    /// let attrs = Attributes::new()
    ///     .with("id", "menu")
    ///     .with("title", "Actions")
    ///     .with("pull-right", true);
    /// let (known, rest) = attrs.partition(&["id", "pull-right"]);
    /// assert_eq!(known.len(), 2);
    /// assert_eq!(rest.get_text("title"), Some("Actions"));
    /// ```
    #[must_use]
    pub fn partition(self, names: &[&str]) -> (Self, Self) {
        let names: HashSet<&str> = names.iter().copied().collect();
        let (matched, rest): (Vec<_>, Vec<_>) = self
            .entries
            .into_iter()
            .partition(|(n, _)| names.contains(&**n));
        (Self { entries: matched }, Self { entries: rest })
    }
}

impl<N: Into<Cow<'static, str>>, V: Into<AttrValue>> FromIterator<(N, V)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        let mut attrs = Self::new();
        for (n, v) in iter {
            attrs.set(n, v);
        }
        attrs
    }
}

/// Separates the style fields of an untyped field bag from everything else.
///
/// Style fields are the names in [`STYLE_FIELDS`]; they must hold text. The
/// size is resolved through the alias table; other spellings are kept in
/// [`StyleProps::custom_size`] and emitted verbatim. Fields named in `omit` are
/// dropped; every other field is returned untouched, in order.
///
/// ```
/// use strapline_style::{Attributes, Size, split_style_props};
///
/// let attrs = Attributes::new()
///     .with("bs-class", "btn")
///     .with("bs-size", "large")
///     .with("id", "save")
///     .with("event-key", 3);
/// let (style, rest) = split_style_props(attrs, &["event-key"]).unwrap();
/// assert_eq!(style.size, Some(Size::Large));
/// assert_eq!(rest.len(), 1);
/// assert_eq!(rest.get_text("id"), Some("save"));
/// ```
pub fn split_style_props(
    attrs: Attributes,
    omit: &[&str],
) -> Result<(StyleProps, Attributes), ConfigError> {
    let omit: HashSet<&str> = omit.iter().copied().collect();
    let mut style = StyleProps::new();
    let mut rest = Attributes::new();

    for (name, value) in attrs.entries {
        if !STYLE_FIELDS.contains(&&*name) {
            if !omit.contains(&*name) {
                rest.entries.push((name, value));
            }
            continue;
        }
        let AttrValue::Text(text) = value else {
            return Err(ConfigError::InvalidStyleField {
                name: name.to_string(),
            });
        };
        match &*name {
            BASE_CLASS_FIELD => style.base_class = Some(text),
            SIZE_FIELD => style = style.with_size_name(text),
            VARIANT_FIELD => style.variant = Some(variant_from(text)),
            _ => style.role = Some(role_from(text)),
        }
    }

    Ok((style, rest))
}

fn variant_from(text: Cow<'static, str>) -> Variant {
    match text {
        Cow::Borrowed(s) => Variant::new(s),
        Cow::Owned(s) => Variant::custom(s),
    }
}

fn role_from(text: Cow<'static, str>) -> Role {
    match text {
        Cow::Borrowed(s) => Role::new(s),
        Cow::Owned(s) => Role::custom(s),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_replaces_in_place() {
        let mut attrs = Attributes::new().with("a", 1).with("b", 2);
        attrs.set("a", 3);
        let names: Vec<_> = attrs.iter().map(|(n, _)| n).collect();
        assert_eq!(names, ["a", "b"]);
        assert_eq!(attrs.get("a"), Some(&AttrValue::Number(3)));
    }

    #[test]
    fn set_default_keeps_existing_value() {
        let mut attrs = Attributes::new().with("role", "menuitem");
        attrs.set_default("role", "button");
        attrs.set_default("href", "#");
        assert_eq!(attrs.get_text("role"), Some("menuitem"));
        assert_eq!(attrs.get_text("href"), Some("#"));
    }

    #[test]
    fn split_never_drops_unlisted_fields() {
        let attrs: Attributes = [
            ("bs-role", AttrValue::from("toggle")),
            ("onclick", AttrValue::from("x")),
            ("bs-style", AttrValue::from("primary")),
            ("disabled", AttrValue::from(true)),
        ]
        .into_iter()
        .collect();

        let (style, rest) = split_style_props(attrs, &[]).unwrap();
        assert_eq!(style.role, Some(Role::TOGGLE));
        assert_eq!(style.variant, Some(Variant::PRIMARY));
        assert_eq!(style.base_class, None);
        assert_eq!(rest.len(), 2);
        assert!(rest.contains("onclick"));
        assert!(rest.contains("disabled"));
    }

    #[test]
    fn split_passes_unknown_sizes_through() {
        let attrs = Attributes::new()
            .with("bs-class", "btn")
            .with("bs-size", "huge")
            .with("id", "x");
        let (style, rest) = split_style_props(attrs, &[]).unwrap();
        assert_eq!(style.size, None);
        assert_eq!(style.size_suffix(), Some("huge"));
        assert_eq!(rest.get_text("id"), Some("x"));
        assert_eq!(
            crate::class_set(&style).unwrap(),
            crate::ClassSet::from_tokens(["btn", "btn-huge"])
        );
    }

    #[test]
    fn split_rejects_non_text_style_values() {
        let attrs = Attributes::new().with("bs-class", true);
        assert_eq!(
            split_style_props(attrs, &[]),
            Err(ConfigError::InvalidStyleField {
                name: "bs-class".to_string()
            })
        );
    }

    #[test]
    fn omitted_style_names_are_still_style_fields() {
        let attrs = Attributes::new().with("bs-class", "btn").with("x", 1);
        let (style, rest) = split_style_props(attrs, &["bs-class"]).unwrap();
        assert_eq!(style.base_class.as_deref(), Some("btn"));
        assert!(rest.contains("x"));
    }
}
