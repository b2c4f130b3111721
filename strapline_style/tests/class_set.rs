// Copyright 2026 the Strapline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for class-set computation through the public API.

use strapline_style::{
    Attributes, ClassSet, ConfigError, Size, StyleProps, Variant, class_set, split_style_props,
};

#[test]
fn btn_lg_is_exactly_base_plus_size() {
    let props = StyleProps::new()
        .with_base_class("btn")
        .with_size(Size::Large);
    let set = class_set(&props).unwrap();
    assert_eq!(set, ClassSet::from_tokens(["btn", "btn-lg"]));
    assert_eq!(set.len(), 2);
}

#[test]
fn btn_alone_is_exactly_the_base() {
    let props = StyleProps::new().with_base_class("btn");
    let set = class_set(&props).unwrap();
    assert_eq!(set, ClassSet::from_tokens(["btn"]));
    assert_eq!(set.len(), 1);
}

#[test]
fn long_and_short_size_spellings_produce_the_same_classes() {
    for (long, short) in [("large", "lg"), ("small", "sm"), ("xsmall", "xs")] {
        let a = StyleProps::new()
            .with_base_class("btn")
            .with_size(long.parse().unwrap());
        let b = StyleProps::new()
            .with_base_class("btn")
            .with_size(short.parse().unwrap());
        assert_eq!(class_set(&a), class_set(&b));
        assert!(class_set(&a).unwrap().contains(&format!("btn-{short}")));
    }
}

#[test]
fn untyped_bag_round_trips_into_a_class_set() {
    let attrs = Attributes::new()
        .with("bs-class", "label")
        .with("bs-style", "warning")
        .with("title", "Heads up");

    let (style, rest) = split_style_props(attrs, &[]).unwrap();
    assert_eq!(style.variant, Some(Variant::WARNING));
    assert_eq!(
        class_set(&style).unwrap().to_class_name(None),
        "label label-warning"
    );
    assert_eq!(rest.get_text("title"), Some("Heads up"));
}

#[test]
fn untyped_bag_without_base_class_cannot_produce_classes() {
    let attrs = Attributes::new().with("bs-size", "sm");
    let (style, _) = split_style_props(attrs, &[]).unwrap();
    assert_eq!(class_set(&style), Err(ConfigError::MissingBaseClass));
}
