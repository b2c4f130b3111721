// Copyright 2026 the Strapline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Configuration errors and warnings.

use alloc::borrow::Cow;
use alloc::string::String;
use core::fmt;

use crate::Variant;

/// A fatal configuration error.
///
/// These describe programming errors in how a component was configured, not
/// runtime conditions. Once a component has been built successfully nothing
/// in Strapline fails.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// A class set or prefix was requested but no base class is configured.
    MissingBaseClass,
    /// A size string did not match any entry of the alias table.
    UnknownSize {
        /// The rejected value.
        value: String,
    },
    /// A style field in an untyped field bag held a non-text value.
    InvalidStyleField {
        /// Name of the offending field.
        name: String,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingBaseClass => {
                f.write_str("a base class is required for this component")
            }
            Self::UnknownSize { value } => write!(f, "unknown size `{value}`"),
            Self::InvalidStyleField { name } => {
                write!(f, "style field `{name}` must hold a text value")
            }
        }
    }
}

impl core::error::Error for ConfigError {}

/// A non-fatal style configuration problem.
///
/// The component still renders; the offending modifier is emitted as given.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StyleWarning {
    /// The component does not declare support for this size.
    UnsupportedSize {
        /// Base class of the component.
        base_class: &'static str,
        /// The requested size, as written into the class name.
        size: Cow<'static, str>,
    },
    /// The component does not declare support for this variant.
    UnsupportedVariant {
        /// Base class of the component.
        base_class: &'static str,
        /// The variant that was requested.
        variant: Variant,
    },
}

impl fmt::Display for StyleWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedSize { base_class, size } => {
                write!(f, "`{base_class}` does not support size `{size}`")
            }
            Self::UnsupportedVariant {
                base_class,
                variant,
            } => write!(
                f,
                "`{base_class}` does not support variant `{}`",
                variant.as_str()
            ),
        }
    }
}
