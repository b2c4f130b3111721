// Copyright 2026 the Strapline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Builder methods shared by every styled component.
//!
//! Each component has `style: StyleProps`, `class_name: Option<String>` and
//! `attrs: Attributes` fields plus an inherent `STYLE` constant. Containers
//! also have `children: Vec<Node>`.

macro_rules! style_props {
    ($($ty:ty),+ $(,)?) => {$(
        impl $ty {
            /// Overrides the base class.
            #[must_use]
            pub fn with_base_class(
                mut self,
                base_class: impl Into<alloc::borrow::Cow<'static, str>>,
            ) -> Self {
                self.style.base_class = Some(base_class.into());
                self
            }

            /// Sets the size modifier.
            #[must_use]
            pub fn with_size(mut self, size: strapline_style::Size) -> Self {
                self.style.size = Some(size);
                self
            }

            /// Sets the visual variant.
            #[must_use]
            pub fn with_variant(mut self, variant: strapline_style::Variant) -> Self {
                self.style.variant = Some(variant);
                self
            }

            /// Adds caller classes, emitted before the component's own.
            #[must_use]
            pub fn with_class_name(mut self, class_name: impl Into<alloc::string::String>) -> Self {
                self.class_name = Some(class_name.into());
                self
            }

            /// Sets a pass-through attribute.
            #[must_use]
            pub fn with_attr(
                mut self,
                name: impl Into<alloc::borrow::Cow<'static, str>>,
                value: impl Into<strapline_style::AttrValue>,
            ) -> Self {
                self.attrs.set(name, value);
                self
            }

            /// Size and variant modifiers this component does not declare.
            #[must_use]
            pub fn style_warnings(&self) -> alloc::vec::Vec<$crate::ComponentWarning> {
                self.style
                    .warnings(&Self::STYLE)
                    .into_iter()
                    .map($crate::ComponentWarning::Style)
                    .collect()
            }

            #[allow(dead_code, reason = "not every component reads its resolved style")]
            fn resolved(&self) -> strapline_style::ResolvedStyle {
                self.style.resolve(&Self::STYLE)
            }
        }
    )+};
}

macro_rules! child_props {
    ($($ty:ty),+ $(,)?) => {$(
        impl $ty {
            /// Appends a child.
            #[must_use]
            pub fn with_child(mut self, child: impl Into<$crate::Node>) -> Self {
                self.children.push(child.into());
                self
            }

            /// Appends children.
            #[must_use]
            pub fn with_children(
                mut self,
                children: impl IntoIterator<Item = $crate::Node>,
            ) -> Self {
                self.children.extend(children);
                self
            }
        }
    )+};
}

pub(crate) use {child_props, style_props};
