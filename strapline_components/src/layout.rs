// Copyright 2026 the Strapline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Grid, tables, wells, images and captions.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use strapline_style::{Attributes, ClassSet, Size, StyleProps, StyleSpec};

use crate::props::{child_props, style_props};
use crate::warning::report;
use crate::{Element, Node};

/// A grid row.
#[derive(Clone, Debug, Default)]
pub struct Row {
    /// Base class.
    pub style: StyleProps,
    /// Caller classes.
    pub class_name: Option<String>,
    /// Pass-through attributes.
    pub attrs: Attributes,
    /// Tag to render instead of `div`.
    pub tag: Option<&'static str>,
    /// Columns.
    pub children: Vec<Node>,
}

style_props!(Row);
child_props!(Row);

impl Row {
    /// `row`.
    pub const STYLE: StyleSpec = StyleSpec::new("row");

    /// An empty row.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Renders as `tag` instead of `div`.
    #[must_use]
    pub fn with_tag(mut self, tag: &'static str) -> Self {
        self.tag = Some(tag);
        self
    }

    /// Describes the row.
    #[must_use]
    pub fn render(&self) -> Element {
        report(&self.style_warnings());
        Element::new(self.tag.unwrap_or("div"))
            .with_classes(self.resolved().class_set())
            .with_class_name(self.class_name.as_deref())
            .with_attrs(&self.attrs)
            .with_children(self.children.iter().cloned())
    }
}

/// Placement of a column at one device size.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ColLayout {
    /// Number of grid columns spanned.
    pub span: Option<u8>,
    /// Columns skipped before this one.
    pub offset: Option<u8>,
    /// Columns to shift right.
    pub push: Option<u8>,
    /// Columns to shift left.
    pub pull: Option<u8>,
    /// Hides the column at this size.
    pub hidden: bool,
}

/// A grid column with per-device-size layout.
///
/// ```
/// use strapline_components::Col;
/// use strapline_style::Size;
///
/// let col = Col::new()
///     .with_span(Size::XSmall, 12)
///     .with_span(Size::Medium, 8)
///     .with_offset(Size::Medium, 2)
///     .with_hidden(Size::Small);
/// assert_eq!(
///     col.render().class_attr(),
///     "col-md-8 col-md-offset-2 hidden-sm col-xs-12",
/// );
/// ```
#[derive(Clone, Debug, Default)]
pub struct Col {
    /// Base class used as the class prefix.
    pub style: StyleProps,
    /// Caller classes.
    pub class_name: Option<String>,
    /// Pass-through attributes.
    pub attrs: Attributes,
    /// Tag to render instead of `div`.
    pub tag: Option<&'static str>,
    /// Layouts for large, medium, small and extra-small devices.
    pub layouts: [ColLayout; 4],
    /// Content.
    pub children: Vec<Node>,
}

style_props!(Col);
child_props!(Col);

fn device_slot(size: Size) -> usize {
    match size {
        Size::Large => 0,
        Size::Medium => 1,
        Size::Small => 2,
        Size::XSmall => 3,
    }
}

impl Col {
    /// `col`, used only as a prefix.
    pub const STYLE: StyleSpec = StyleSpec::new("col");

    /// A column with no layout.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Renders as `tag` instead of `div`.
    #[must_use]
    pub fn with_tag(mut self, tag: &'static str) -> Self {
        self.tag = Some(tag);
        self
    }

    /// The layout at `size`.
    #[must_use]
    pub fn layout(&self, size: Size) -> &ColLayout {
        &self.layouts[device_slot(size)]
    }

    fn layout_mut(&mut self, size: Size) -> &mut ColLayout {
        &mut self.layouts[device_slot(size)]
    }

    /// Spans `columns` at `size`.
    #[must_use]
    pub fn with_span(mut self, size: Size, columns: u8) -> Self {
        self.layout_mut(size).span = Some(columns);
        self
    }

    /// Offsets by `columns` at `size`.
    #[must_use]
    pub fn with_offset(mut self, size: Size, columns: u8) -> Self {
        self.layout_mut(size).offset = Some(columns);
        self
    }

    /// Pushes by `columns` at `size`.
    #[must_use]
    pub fn with_push(mut self, size: Size, columns: u8) -> Self {
        self.layout_mut(size).push = Some(columns);
        self
    }

    /// Pulls by `columns` at `size`.
    #[must_use]
    pub fn with_pull(mut self, size: Size, columns: u8) -> Self {
        self.layout_mut(size).pull = Some(columns);
        self
    }

    /// Hides the column at `size`.
    #[must_use]
    pub fn with_hidden(mut self, size: Size) -> Self {
        self.layout_mut(size).hidden = true;
        self
    }

    /// Describes the column.
    #[must_use]
    pub fn render(&self) -> Element {
        let style = self.resolved();
        let mut classes = ClassSet::new();
        for size in Size::ALL {
            let device = size.suffix();
            let layout = self.layout(size);
            let modifiers = [
                ("", layout.span),
                ("-offset", layout.offset),
                ("-push", layout.push),
                ("-pull", layout.pull),
            ];
            for (modifier, value) in modifiers {
                if let Some(n) = value {
                    classes.insert(style.prefix(&format!("{device}{modifier}-{n}")), true);
                }
            }
            if layout.hidden {
                classes.insert(format!("hidden-{device}"), true);
            }
        }
        Element::new(self.tag.unwrap_or("div"))
            .with_classes(classes)
            .with_class_name(self.class_name.as_deref())
            .with_attrs(&self.attrs)
            .with_children(self.children.iter().cloned())
    }
}

/// An inset container.
#[derive(Clone, Debug, Default)]
pub struct Well {
    /// Base class and size.
    pub style: StyleProps,
    /// Caller classes.
    pub class_name: Option<String>,
    /// Pass-through attributes.
    pub attrs: Attributes,
    /// Content.
    pub children: Vec<Node>,
}

style_props!(Well);
child_props!(Well);

impl Well {
    /// `well`, sizes `lg`/`sm`.
    pub const STYLE: StyleSpec = StyleSpec::new("well").with_sizes(&[Size::Large, Size::Small]);

    /// An empty well.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Describes the well.
    #[must_use]
    pub fn render(&self) -> Element {
        report(&self.style_warnings());
        Element::new("div")
            .with_classes(self.resolved().class_set())
            .with_class_name(self.class_name.as_deref())
            .with_attrs(&self.attrs)
            .with_children(self.children.iter().cloned())
    }
}

/// A styled table, optionally wrapped for horizontal scrolling.
#[derive(Clone, Debug, Default)]
pub struct Table {
    /// Base class.
    pub style: StyleProps,
    /// Caller classes.
    pub class_name: Option<String>,
    /// Pass-through attributes for the `table` element.
    pub attrs: Attributes,
    /// Zebra stripes.
    pub striped: bool,
    /// Cell borders.
    pub bordered: bool,
    /// Compact cells.
    pub condensed: bool,
    /// Row hover highlight.
    pub hover: bool,
    /// Wraps the table in a scrolling container.
    pub responsive: bool,
    /// Rows and sections.
    pub children: Vec<Node>,
}

style_props!(Table);
child_props!(Table);

impl Table {
    /// `table`.
    pub const STYLE: StyleSpec = StyleSpec::new("table");

    /// A plain table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Zebra stripes.
    #[must_use]
    pub fn with_striped(mut self, striped: bool) -> Self {
        self.striped = striped;
        self
    }

    /// Cell borders.
    #[must_use]
    pub fn with_bordered(mut self, bordered: bool) -> Self {
        self.bordered = bordered;
        self
    }

    /// Compact cells.
    #[must_use]
    pub fn with_condensed(mut self, condensed: bool) -> Self {
        self.condensed = condensed;
        self
    }

    /// Row hover highlight.
    #[must_use]
    pub fn with_hover(mut self, hover: bool) -> Self {
        self.hover = hover;
        self
    }

    /// Scrolling wrapper.
    #[must_use]
    pub fn with_responsive(mut self, responsive: bool) -> Self {
        self.responsive = responsive;
        self
    }

    /// Describes the table, or its responsive wrapper.
    #[must_use]
    pub fn render(&self) -> Element {
        report(&self.style_warnings());
        let style = self.resolved();
        let mut classes = style.class_set();
        classes.insert(style.prefix("striped"), self.striped);
        classes.insert(style.prefix("bordered"), self.bordered);
        classes.insert(style.prefix("condensed"), self.condensed);
        classes.insert(style.prefix("hover"), self.hover);

        let table = Element::new("table")
            .with_classes(classes)
            .with_class_name(self.class_name.as_deref())
            .with_attrs(&self.attrs)
            .with_children(self.children.iter().cloned());

        if self.responsive {
            Element::new("div")
                .with_class(style.prefix("responsive"))
                .with_child(table)
        } else {
            table
        }
    }
}

/// An image with optional shape and sizing treatments.
#[derive(Clone, Debug, Default)]
pub struct Image {
    /// Base class used as the class prefix.
    pub style: StyleProps,
    /// Caller classes.
    pub class_name: Option<String>,
    /// Pass-through attributes (`src`, `alt`).
    pub attrs: Attributes,
    /// Scales with its parent.
    pub responsive: bool,
    /// Rounded corners.
    pub rounded: bool,
    /// Circular crop.
    pub circle: bool,
    /// Framed thumbnail.
    pub thumbnail: bool,
}

style_props!(Image);

impl Image {
    /// `img`, used only as a prefix.
    pub const STYLE: StyleSpec = StyleSpec::new("img");

    /// An image with the given source.
    #[must_use]
    pub fn new(src: impl Into<String>) -> Self {
        Self::default().with_attr("src", src.into())
    }

    /// Scales with its parent.
    #[must_use]
    pub fn with_responsive(mut self, responsive: bool) -> Self {
        self.responsive = responsive;
        self
    }

    /// Rounded corners.
    #[must_use]
    pub fn with_rounded(mut self, rounded: bool) -> Self {
        self.rounded = rounded;
        self
    }

    /// Circular crop.
    #[must_use]
    pub fn with_circle(mut self, circle: bool) -> Self {
        self.circle = circle;
        self
    }

    /// Framed thumbnail.
    #[must_use]
    pub fn with_thumbnail(mut self, thumbnail: bool) -> Self {
        self.thumbnail = thumbnail;
        self
    }

    /// Describes the image.
    #[must_use]
    pub fn render(&self) -> Element {
        let style = self.resolved();
        let classes = ClassSet::new()
            .with(style.prefix("responsive"), self.responsive)
            .with(style.prefix("rounded"), self.rounded)
            .with(style.prefix("circle"), self.circle)
            .with(style.prefix("thumbnail"), self.thumbnail);
        Element::new("img")
            .with_classes(classes)
            .with_class_name(self.class_name.as_deref())
            .with_attrs(&self.attrs)
    }
}

/// Caption overlay for a carousel slide.
#[derive(Clone, Debug, Default)]
pub struct CarouselCaption {
    /// Base class.
    pub style: StyleProps,
    /// Caller classes.
    pub class_name: Option<String>,
    /// Pass-through attributes.
    pub attrs: Attributes,
    /// Tag to render instead of `div`.
    pub tag: Option<&'static str>,
    /// Caption content.
    pub children: Vec<Node>,
}

style_props!(CarouselCaption);
child_props!(CarouselCaption);

impl CarouselCaption {
    /// `carousel-caption`.
    pub const STYLE: StyleSpec = StyleSpec::new("carousel-caption");

    /// An empty caption.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Renders as `tag` instead of `div`.
    #[must_use]
    pub fn with_tag(mut self, tag: &'static str) -> Self {
        self.tag = Some(tag);
        self
    }

    /// Describes the caption.
    #[must_use]
    pub fn render(&self) -> Element {
        Element::new(self.tag.unwrap_or("div"))
            .with_classes(self.resolved().class_set())
            .with_class_name(self.class_name.as_deref())
            .with_attrs(&self.attrs)
            .with_children(self.children.iter().cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn col_emits_every_modifier_per_device() {
        let el = Col::new()
            .with_span(Size::Large, 4)
            .with_offset(Size::Large, 0)
            .with_push(Size::Small, 3)
            .with_pull(Size::XSmall, 1)
            .with_hidden(Size::Medium)
            .render();
        assert_eq!(
            el.classes,
            ClassSet::from_tokens([
                "col-lg-4",
                "col-lg-offset-0",
                "hidden-md",
                "col-sm-push-3",
                "col-xs-pull-1",
            ])
        );
        assert!(!el.has_class("col"));
    }

    #[test]
    fn col_prefix_follows_base_class() {
        let el = Col::new()
            .with_base_class("column")
            .with_span(Size::Medium, 6)
            .render();
        assert!(el.has_class("column-md-6"));
    }

    #[test]
    fn table_modifiers() {
        let el = Table::new()
            .with_striped(true)
            .with_hover(true)
            .render();
        assert_eq!(el.tag, "table");
        assert_eq!(
            el.classes,
            ClassSet::from_tokens(["table", "table-striped", "table-hover"])
        );
    }

    #[test]
    fn responsive_table_is_wrapped() {
        let el = Table::new()
            .with_responsive(true)
            .with_attr("id", "data")
            .render();
        assert_eq!(el.tag, "div");
        assert!(el.has_class("table-responsive"));
        let table = el.find("table").unwrap();
        assert_eq!(table.attr_text("id"), Some("data"));
        assert!(el.attr("id").is_none());
    }

    #[test]
    fn well_sizes() {
        assert_eq!(
            Well::new().with_size(Size::Large).render().class_attr(),
            "well well-lg"
        );
        assert_eq!(Well::new().with_size(Size::XSmall).style_warnings().len(), 1);
    }

    #[test]
    fn image_has_no_base_class() {
        let el = Image::new("/a.png")
            .with_responsive(true)
            .with_circle(true)
            .render();
        assert_eq!(
            el.classes,
            ClassSet::from_tokens(["img-responsive", "img-circle"])
        );
        assert_eq!(el.attr_text("src"), Some("/a.png"));
        assert_eq!(
            el.to_string(),
            r#"<img class="img-responsive img-circle" src="/a.png">"#
        );
    }

    #[test]
    fn row_and_caption_are_base_only() {
        assert_eq!(Row::new().render().class_attr(), "row");
        let el = CarouselCaption::new().with_tag("figcaption").render();
        assert_eq!(el.tag, "figcaption");
        assert_eq!(el.class_attr(), "carousel-caption");
    }
}
