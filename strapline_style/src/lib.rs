// Copyright 2026 the Strapline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Strapline Style: class-set composition for class-based CSS frameworks.
//!
//! Components in a class-based CSS framework are styled by a _base class_
//! (`btn`, `table`, `well`) plus optional modifiers derived from it
//! (`btn-lg`, `btn-primary`). This crate provides the small amount of
//! machinery every Strapline component shares:
//!
//! - [`ClassSet`]: an insertion-ordered map from class token to inclusion flag.
//! - [`StyleSpec`]: what a component declares about itself (default base
//!   class, supported sizes and variants).
//! - [`StyleProps`]: the styling fields of one component instance.
//! - [`class_set`] and [`prefix`]: pure functions from style props to class
//!   tokens.
//! - [`Attributes`] and [`split_style_props`]: an untyped pass-through field
//!   bag and the split between style fields and everything else.
//!
//! ## Class sets
//!
//! ```rust
//! use strapline_style::{ClassSet, Size, StyleProps, Variant, class_set};
//!
//! let props = StyleProps::new()
//!     .with_base_class("btn")
//!     .with_size(Size::parse("large").unwrap())
//!     .with_variant(Variant::PRIMARY);
//!
//! let classes = class_set(&props).unwrap();
//! assert_eq!(classes, ClassSet::from_tokens(["btn", "btn-lg", "btn-primary"]));
//! ```
//!
//! The base class is always present; size and variant modifiers only appear
//! when set. Requesting a class set without a base class is a
//! [`ConfigError::MissingBaseClass`].
//!
//! ## Component declarations
//!
//! Typed components never hit that error: they resolve their props against
//! a [`StyleSpec`] constant, which supplies the default base class.
//!
//! ```rust
//! use strapline_style::{Size, StyleProps, StyleSpec};
//!
//! const INPUT_GROUP: StyleSpec =
//!     StyleSpec::new("input-group").with_sizes(&[Size::Large, Size::Small]);
//!
//! let style = StyleProps::new().with_size(Size::Small).resolve(&INPUT_GROUP);
//! assert_eq!(style.class_set().to_class_name(None), "input-group input-group-sm");
//! assert!(StyleProps::new().with_size(Size::XSmall).warnings(&INPUT_GROUP).len() == 1);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod attributes;
mod class_set;
mod error;
mod size;
mod style;
mod variant;

pub use attributes::{
    AttrValue, Attributes, BASE_CLASS_FIELD, ROLE_FIELD, SIZE_FIELD, STYLE_FIELDS, VARIANT_FIELD,
    split_style_props,
};
pub use class_set::ClassSet;
pub use error::{ConfigError, StyleWarning};
pub use size::{SIZE_ALIASES, Size};
pub use style::{ResolvedStyle, StyleProps, StyleSpec, class_set, prefix};
pub use variant::{Role, Variant};
