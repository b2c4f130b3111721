// Copyright 2026 the Strapline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Style declarations, style props, and class-set computation.

use alloc::borrow::Cow;
use alloc::format;
use alloc::string::String;

use smallvec::SmallVec;

use crate::{ClassSet, ConfigError, Role, Size, StyleWarning, Variant};

/// What a component declares about its own styling.
///
/// Every styling component carries one of these as a constant. It names the
/// default base class and the sizes and variants the component knows how to
/// draw.
///
/// ```
/// use strapline_style::{Size, StyleSpec};
///
/// const WELL: StyleSpec = StyleSpec::new("well").with_sizes(&[Size::Large, Size::Small]);
/// assert!(WELL.supports_size(Size::Small));
/// assert!(!WELL.supports_size(Size::XSmall));
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct StyleSpec {
    /// Base class used when the props do not override it.
    pub base_class: &'static str,
    /// Sizes the component supports.
    pub sizes: &'static [Size],
    /// Variant names the component supports.
    pub variants: &'static [&'static str],
    /// Variant applied when the props do not set one.
    pub default_variant: Option<&'static str>,
}

impl StyleSpec {
    /// A spec with only a base class.
    #[must_use]
    pub const fn new(base_class: &'static str) -> Self {
        Self {
            base_class,
            sizes: &[],
            variants: &[],
            default_variant: None,
        }
    }

    /// Declares the supported sizes.
    #[must_use]
    pub const fn with_sizes(mut self, sizes: &'static [Size]) -> Self {
        self.sizes = sizes;
        self
    }

    /// Declares the supported variants and an optional default.
    #[must_use]
    pub const fn with_variants(
        mut self,
        variants: &'static [&'static str],
        default_variant: Option<&'static str>,
    ) -> Self {
        self.variants = variants;
        self.default_variant = default_variant;
        self
    }

    /// Returns `true` if `size` is declared.
    #[must_use]
    pub fn supports_size(&self, size: Size) -> bool {
        self.sizes.contains(&size)
    }

    /// Returns `true` if `variant` is declared.
    #[must_use]
    pub fn supports_variant(&self, variant: &Variant) -> bool {
        self.variants.contains(&variant.as_str())
    }
}

/// The styling-relevant fields of a component configuration.
///
/// All fields are optional. A missing base class is only an error when a
/// class set is computed without a [`StyleSpec`] to supply the default.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StyleProps {
    /// Overrides the component's base class.
    pub base_class: Option<Cow<'static, str>>,
    /// Size modifier.
    pub size: Option<Size>,
    /// A size spelling outside the alias table, emitted as given.
    ///
    /// Ignored while [`size`](Self::size) is set.
    pub custom_size: Option<Cow<'static, str>>,
    /// Visual variant.
    pub variant: Option<Variant>,
    /// Structural role inside a composite parent.
    pub role: Option<Role>,
}

impl StyleProps {
    /// Props with every field unset.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the base class.
    #[must_use]
    pub fn with_base_class(mut self, base_class: impl Into<Cow<'static, str>>) -> Self {
        self.base_class = Some(base_class.into());
        self
    }

    /// Sets the size.
    #[must_use]
    pub fn with_size(mut self, size: Size) -> Self {
        self.size = Some(size);
        self
    }

    /// Sets the size from a spelling, keeping unknown spellings verbatim.
    ///
    /// ```
    /// use strapline_style::{Size, StyleProps};
    ///
    /// assert_eq!(StyleProps::new().with_size_name("large").size, Some(Size::Large));
    /// let huge = StyleProps::new().with_size_name("huge");
    /// assert_eq!(huge.size, None);
    /// assert_eq!(huge.size_suffix(), Some("huge"));
    /// ```
    #[must_use]
    pub fn with_size_name(mut self, name: impl Into<Cow<'static, str>>) -> Self {
        let name = name.into();
        match Size::parse(&name) {
            Some(size) => {
                self.size = Some(size);
                self.custom_size = None;
            }
            None => {
                self.size = None;
                self.custom_size = Some(name);
            }
        }
        self
    }

    /// The size as written into class names.
    #[must_use]
    pub fn size_suffix(&self) -> Option<&str> {
        self.size
            .map(Size::suffix)
            .or(self.custom_size.as_deref())
    }

    /// Sets the variant.
    #[must_use]
    pub fn with_variant(mut self, variant: Variant) -> Self {
        self.variant = Some(variant);
        self
    }

    /// Sets the role.
    #[must_use]
    pub fn with_role(mut self, role: Role) -> Self {
        self.role = Some(role);
        self
    }

    /// Fills unset fields from `spec`.
    #[must_use]
    pub fn resolve(&self, spec: &StyleSpec) -> ResolvedStyle {
        ResolvedStyle {
            base_class: self
                .base_class
                .clone()
                .unwrap_or(Cow::Borrowed(spec.base_class)),
            size: self.size,
            custom_size: if self.size.is_none() {
                self.custom_size.clone()
            } else {
                None
            },
            variant: self
                .variant
                .clone()
                .or_else(|| spec.default_variant.map(Variant::new)),
            role: self.role.clone(),
        }
    }

    /// Sizes and variants that `spec` does not declare.
    #[must_use]
    pub fn warnings(&self, spec: &StyleSpec) -> SmallVec<[StyleWarning; 2]> {
        let mut out = SmallVec::new();
        let unsupported = match self.size {
            Some(size) => (!spec.supports_size(size)).then(|| Cow::Borrowed(size.suffix())),
            None => self.custom_size.clone(),
        };
        if let Some(size) = unsupported {
            out.push(StyleWarning::UnsupportedSize {
                base_class: spec.base_class,
                size,
            });
        }
        if let Some(variant) = &self.variant
            && !spec.supports_variant(variant)
        {
            out.push(StyleWarning::UnsupportedVariant {
                base_class: spec.base_class,
                variant: variant.clone(),
            });
        }
        out
    }
}

/// Style props with the base class (and default variant) filled in.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedStyle {
    base_class: Cow<'static, str>,
    size: Option<Size>,
    custom_size: Option<Cow<'static, str>>,
    variant: Option<Variant>,
    role: Option<Role>,
}

impl ResolvedStyle {
    /// The base class.
    #[must_use]
    pub fn base(&self) -> &str {
        &self.base_class
    }

    /// The size, if any.
    #[must_use]
    pub fn size(&self) -> Option<Size> {
        self.size
    }

    /// The size as written into class names, including custom spellings.
    #[must_use]
    pub fn size_suffix(&self) -> Option<&str> {
        self.size
            .map(Size::suffix)
            .or(self.custom_size.as_deref())
    }

    /// The variant, if any.
    #[must_use]
    pub fn variant(&self) -> Option<&Variant> {
        self.variant.as_ref()
    }

    /// The role, if any.
    #[must_use]
    pub fn role(&self) -> Option<&Role> {
        self.role.as_ref()
    }

    /// `base-modifier`.
    #[must_use]
    pub fn prefix(&self, modifier: &str) -> String {
        join(&self.base_class, Some(modifier))
    }

    /// The base class plus size and variant modifiers.
    #[must_use]
    pub fn class_set(&self) -> ClassSet {
        build_class_set(&self.base_class, self.size_suffix(), self.variant.as_ref())
    }
}

/// Prefixes `modifier` with the base class of `style`.
///
/// Without a modifier this is the base class itself.
pub fn prefix(style: &StyleProps, modifier: Option<&str>) -> Result<String, ConfigError> {
    let base = style
        .base_class
        .as_deref()
        .ok_or(ConfigError::MissingBaseClass)?;
    Ok(join(base, modifier))
}

/// Computes the class set implied by `style`.
///
/// ```
/// use strapline_style::{ClassSet, Size, StyleProps, class_set};
///
/// let props = StyleProps::new().with_base_class("btn").with_size(Size::Large);
/// assert_eq!(
///     class_set(&props).unwrap(),
///     ClassSet::from_tokens(["btn", "btn-lg"]),
/// );
/// ```
pub fn class_set(style: &StyleProps) -> Result<ClassSet, ConfigError> {
    let base = style
        .base_class
        .as_deref()
        .ok_or(ConfigError::MissingBaseClass)?;
    Ok(build_class_set(base, style.size_suffix(), style.variant.as_ref()))
}

fn join(base: &str, modifier: Option<&str>) -> String {
    match modifier {
        Some(m) if !m.is_empty() => format!("{base}-{m}"),
        _ => String::from(base),
    }
}

fn build_class_set(base: &str, size: Option<&str>, variant: Option<&Variant>) -> ClassSet {
    let mut set = ClassSet::new();
    set.insert(String::from(base), true);
    if let Some(size) = size {
        set.insert(join(base, Some(size)), true);
    }
    if let Some(variant) = variant {
        set.insert(join(base, Some(variant.as_str())), true);
    }
    set
}

#[cfg(test)]
mod tests {
    use super::*;

    const BUTTON: StyleSpec = StyleSpec::new("btn")
        .with_sizes(&[Size::Large, Size::Small, Size::XSmall])
        .with_variants(&["default", "primary"], Some("default"));

    #[test]
    fn base_only_class_set() {
        let props = StyleProps::new().with_base_class("btn");
        assert_eq!(class_set(&props), Ok(ClassSet::from_tokens(["btn"])));
    }

    #[test]
    fn size_and_variant_append_modifiers() {
        let props = StyleProps::new()
            .with_base_class("btn")
            .with_size(Size::Large)
            .with_variant(Variant::PRIMARY);
        let set = class_set(&props).unwrap();
        assert_eq!(set.to_class_name(None), "btn btn-lg btn-primary");
    }

    #[test]
    fn missing_base_class_is_an_error() {
        let props = StyleProps::new().with_size(Size::Small);
        assert_eq!(class_set(&props), Err(ConfigError::MissingBaseClass));
        assert_eq!(prefix(&props, None), Err(ConfigError::MissingBaseClass));
    }

    #[test]
    fn resolve_fills_base_class_and_default_variant() {
        let resolved = StyleProps::new().resolve(&BUTTON);
        assert_eq!(resolved.base(), "btn");
        assert_eq!(resolved.variant(), Some(&Variant::DEFAULT));
        assert_eq!(
            resolved.class_set(),
            ClassSet::from_tokens(["btn", "btn-default"])
        );
        assert_eq!(resolved.prefix("block"), "btn-block");
    }

    #[test]
    fn resolve_keeps_explicit_overrides() {
        let resolved = StyleProps::new()
            .with_base_class("my-btn")
            .with_variant(Variant::PRIMARY)
            .resolve(&BUTTON);
        assert_eq!(resolved.base(), "my-btn");
        assert_eq!(
            resolved.class_set(),
            ClassSet::from_tokens(["my-btn", "my-btn-primary"])
        );
    }

    #[test]
    fn undeclared_modifiers_warn_but_still_render() {
        let props = StyleProps::new()
            .with_size(Size::Medium)
            .with_variant(Variant::DANGER);
        let warnings = props.warnings(&BUTTON);
        assert_eq!(warnings.len(), 2);
        assert!(matches!(
            warnings[0],
            StyleWarning::UnsupportedSize { ref size, .. } if size == "md"
        ));

        let set = props.resolve(&BUTTON).class_set();
        assert!(set.contains("btn-md"));
        assert!(set.contains("btn-danger"));
    }

    #[test]
    fn unknown_size_spelling_passes_through_with_a_warning() {
        let props = StyleProps::new().with_size_name("huge");
        assert_eq!(
            props.warnings(&BUTTON).as_slice(),
            [StyleWarning::UnsupportedSize {
                base_class: "btn",
                size: Cow::Borrowed("huge"),
            }]
        );
        assert_eq!(
            props.resolve(&BUTTON).class_set(),
            ClassSet::from_tokens(["btn", "btn-huge", "btn-default"])
        );

        let typed_wins = StyleProps {
            size: Some(Size::Small),
            custom_size: Some(Cow::Borrowed("huge")),
            ..StyleProps::new()
        };
        assert!(typed_wins.warnings(&BUTTON).is_empty());
        assert_eq!(typed_wins.resolve(&BUTTON).size_suffix(), Some("sm"));
    }

    #[test]
    fn prefix_without_modifier_is_the_base() {
        let props = StyleProps::new().with_base_class("panel");
        assert_eq!(prefix(&props, None).as_deref(), Ok("panel"));
        assert_eq!(prefix(&props, Some("body")).as_deref(), Ok("panel-body"));
    }
}
