// Copyright 2026 the Strapline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Size modifiers and their alias table.

use alloc::string::ToString;
use core::str::FromStr;

use crate::ConfigError;

/// A named size modifier.
///
/// Sizes are written into class names in their short form (`btn-lg`), but
/// configuration may use either the long or the short spelling.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Size {
    /// `lg`
    Large,
    /// `md`
    Medium,
    /// `sm`
    Small,
    /// `xs`
    XSmall,
}

/// Accepted spellings and the size each one resolves to.
pub const SIZE_ALIASES: &[(&str, Size)] = &[
    ("large", Size::Large),
    ("lg", Size::Large),
    ("medium", Size::Medium),
    ("md", Size::Medium),
    ("small", Size::Small),
    ("sm", Size::Small),
    ("xsmall", Size::XSmall),
    ("xs", Size::XSmall),
];

impl Size {
    /// All sizes, largest first.
    pub const ALL: [Self; 4] = [Self::Large, Self::Medium, Self::Small, Self::XSmall];

    /// Resolves a spelling through [`SIZE_ALIASES`].
    ///
    /// ```
    /// use strapline_style::Size;
    ///
    /// assert_eq!(Size::parse("large"), Some(Size::Large));
    /// assert_eq!(Size::parse("lg"), Some(Size::Large));
    /// assert_eq!(Size::parse("huge"), None);
    /// ```
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        SIZE_ALIASES
            .iter()
            .find(|(alias, _)| *alias == value)
            .map(|(_, size)| *size)
    }

    /// The class-name suffix for this size.
    #[must_use]
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::Large => "lg",
            Self::Medium => "md",
            Self::Small => "sm",
            Self::XSmall => "xs",
        }
    }
}

impl FromStr for Size {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| ConfigError::UnknownSize {
            value: s.to_string(),
        })
    }
}
