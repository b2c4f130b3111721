// Copyright 2026 the Strapline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rendered HTML for representative component trees.

use strapline_components::{
    Breadcrumb, Checkbox, Col, ControlLabel, Form, FormGroupContext, Image, InputGroup,
    InputGroupAddon, ListGroup, ListGroupItem, MenuItem, Row, SafeAnchor, Table, ToggleButton,
    ToggleKind, Well,
};
use strapline_style::{Size, Variant};

#[test]
fn grid_markup() {
    let row = Row::new()
        .with_child(
            Col::new()
                .with_span(Size::Medium, 8)
                .with_offset(Size::Medium, 2)
                .with_child("Main")
                .render(),
        )
        .render();
    assert_eq!(
        row.to_string(),
        r#"<div class="row"><div class="col-md-8 col-md-offset-2">Main</div></div>"#
    );
}

#[test]
fn responsive_table_wraps_the_table() {
    let html = Table::new()
        .with_striped(true)
        .with_hover(true)
        .with_responsive(true)
        .with_attr("id", "t")
        .render()
        .to_string();
    assert_eq!(
        html,
        r#"<div class="table-responsive"><table class="table table-striped table-hover" id="t"></table></div>"#
    );
}

#[test]
fn safe_anchor_markup() {
    assert_eq!(
        SafeAnchor::new().with_child("Act").render().to_string(),
        r##"<a role="button" href="#">Act</a>"##
    );
    assert_eq!(
        SafeAnchor::new()
            .with_disabled(true)
            .with_child("Off")
            .render()
            .to_string(),
        r##"<a role="button" href="#" tabindex="-1" style="pointer-events: none;">Off</a>"##
    );
}

#[test]
fn horizontal_form_with_label_and_addon() {
    let form = Form::new()
        .with_horizontal(true)
        .with_child(
            ControlLabel::new()
                .in_form_group(FormGroupContext::new("amount"))
                .with_child("Amount")
                .render(),
        )
        .with_child(
            InputGroup::new()
                .with_size(Size::Large)
                .with_child(InputGroupAddon::new().with_child("$").render())
                .render(),
        )
        .render();
    assert_eq!(
        form.to_string(),
        concat!(
            r#"<form class="form-horizontal">"#,
            r#"<label class="control-label" for="amount">Amount</label>"#,
            r#"<span class="input-group input-group-lg">"#,
            r#"<span class="input-group-addon">$</span></span></form>"#,
        )
    );
}

#[test]
fn checkbox_markup() {
    assert_eq!(
        Checkbox::new().with_child("Remember me").render().to_string(),
        r#"<div class="checkbox"><label><input type="checkbox">Remember me</label></div>"#
    );
}

#[test]
fn toggle_button_markup() {
    assert_eq!(
        ToggleButton::new(ToggleKind::Checkbox, "bold")
            .with_child("B")
            .render()
            .to_string(),
        concat!(
            r#"<label class="btn btn-default">"#,
            r#"<input type="checkbox" autocomplete="off" value="bold">B</label>"#,
        )
    );
}

#[test]
fn dropdown_menu_items() {
    let items: Vec<String> = [
        MenuItem::header("Actions"),
        MenuItem::new().with_href("/edit").with_child("Edit"),
        MenuItem::divider(),
        MenuItem::new().with_disabled(true).with_child("Delete"),
    ]
    .iter()
    .map(|item| item.render().to_string())
    .collect();
    assert_eq!(
        items,
        [
            r#"<li class="dropdown-header" role="heading">Actions</li>"#,
            r#"<li role="presentation"><a tabindex="-1" role="menuitem" href="/edit">Edit</a></li>"#,
            r#"<li class="divider" role="separator"></li>"#,
            r##"<li class="disabled" role="presentation"><a tabindex="-1" role="menuitem" href="#">Delete</a></li>"##,
        ]
    );
}

#[test]
fn list_group_markup() {
    let html = ListGroup::new()
        .with_child(ListGroupItem::new().with_child("One"))
        .with_child(ListGroupItem::new().with_variant(Variant::DANGER).with_child("Two"))
        .render()
        .to_string();
    assert_eq!(
        html,
        concat!(
            r#"<ul class="list-group">"#,
            r#"<li class="list-group-item">One</li>"#,
            r#"<li class="list-group-item list-group-item-danger">Two</li></ul>"#,
        )
    );
}

#[test]
fn misc_markup() {
    assert_eq!(
        Breadcrumb::new().render().to_string(),
        r#"<ol class="breadcrumb" role="navigation" aria-label="breadcrumbs"></ol>"#
    );
    assert_eq!(
        Well::new().with_size(Size::Small).render().to_string(),
        r#"<div class="well well-sm"></div>"#
    );
    assert_eq!(
        Image::new("/a.png")
            .with_responsive(true)
            .with_circle(true)
            .render()
            .to_string(),
        r#"<img class="img-responsive img-circle" src="/a.png">"#
    );
}

#[test]
fn text_is_escaped() {
    assert_eq!(
        Well::new().with_child("<b> & \"q\"").render().to_string(),
        r#"<div class="well">&lt;b&gt; &amp; &quot;q&quot;</div>"#
    );
}
