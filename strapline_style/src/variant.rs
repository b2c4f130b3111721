// Copyright 2026 the Strapline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Style variants and component roles.

use alloc::borrow::Cow;
use alloc::string::String;
use core::fmt;

/// A named visual theme modifier, such as `primary` or `danger`.
///
/// Define project-specific variants as constants:
///
/// ```
/// use strapline_style::Variant;
///
/// const BRAND: Variant = Variant::new("brand");
/// assert_eq!(BRAND.as_str(), "brand");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Variant(Cow<'static, str>);

impl Variant {
    /// `default`
    pub const DEFAULT: Self = Self::new("default");
    /// `primary`
    pub const PRIMARY: Self = Self::new("primary");
    /// `success`
    pub const SUCCESS: Self = Self::new("success");
    /// `info`
    pub const INFO: Self = Self::new("info");
    /// `warning`
    pub const WARNING: Self = Self::new("warning");
    /// `danger`
    pub const DANGER: Self = Self::new("danger");
    /// `link`
    pub const LINK: Self = Self::new("link");

    /// Creates a variant from a static name.
    #[must_use]
    pub const fn new(name: &'static str) -> Self {
        Self(Cow::Borrowed(name))
    }

    /// Creates a variant from a runtime string.
    #[must_use]
    pub fn custom(name: impl Into<String>) -> Self {
        Self(Cow::Owned(name.into()))
    }

    /// The variant name as written into class names.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The structural role a component plays inside a composite parent.
///
/// A dropdown, for example, looks for the child tagged [`Role::TOGGLE`] and
/// the one tagged [`Role::MENU`]. Roles never contribute class names.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Role(Cow<'static, str>);

impl Role {
    /// `toggle`
    pub const TOGGLE: Self = Self::new("toggle");
    /// `menu`
    pub const MENU: Self = Self::new("menu");

    /// Creates a role from a static name.
    #[must_use]
    pub const fn new(name: &'static str) -> Self {
        Self(Cow::Borrowed(name))
    }

    /// Creates a role from a runtime string.
    #[must_use]
    pub fn custom(name: impl Into<String>) -> Self {
        Self(Cow::Owned(name.into()))
    }

    /// The role name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}
