// Copyright 2026 the Strapline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Component markup.
//!
//! Render a handful of components to HTML and exercise their click
//! handling. Misconfigured components log warnings.
//!
//! Run:
//! - `cargo run -p strapline_demos --example component_markup`

use strapline_components::{
    ActivationEvent, Breadcrumb, Button, ButtonGroup, Checkbox, Col, MenuItem, Pager, PagerItem,
    Row, SplitButton, Table, Tooltip, ValidationState,
};
use strapline_style::{Size, Variant};

fn main() {
    strapline_demos::init_logging();

    let toolbar = ButtonGroup::new()
        .with_size(Size::Small)
        .with_child(Button::new().with_variant(Variant::PRIMARY).with_child("Save").render())
        .with_child(Button::new().with_href("/cancel").with_child("Cancel").render());
    println!("{}\n", toolbar.render());

    let grid = Row::new().with_child(
        Col::new()
            .with_span(Size::XSmall, 12)
            .with_span(Size::Medium, 6)
            .with_offset(Size::Medium, 3)
            .with_child(Table::new().with_striped(true).with_responsive(true).render())
            .render(),
    );
    println!("{}\n", grid.render());

    let split = SplitButton::new("Export")
        .with_attr("id", "export")
        .with_item(MenuItem::header("Formats"))
        .with_item(MenuItem::new().with_event_key("csv").with_child("CSV"))
        .with_item(MenuItem::divider())
        .with_item(MenuItem::new().with_event_key("pdf").with_disabled(true).with_child("PDF"))
        .on_select(|e| log::info!("export selected: {:?}", e.key));
    println!("{}\n", split.render());
    split.select_item(1, &ActivationEvent::click());
    split.select_item(3, &ActivationEvent::click());

    let pager = Pager::new()
        .with_item(PagerItem::new().with_previous(true).with_event_key("prev").with_child("Older"))
        .with_item(PagerItem::new().with_next(true).with_event_key("next").with_child("Newer"))
        .on_select(|e| log::info!("page: {:?}", e.key));
    println!("{}\n", pager.render());
    let click = ActivationEvent::click();
    pager.click(1, &click);
    println!("navigation suppressed: {}\n", click.is_default_prevented());

    println!("{}\n", Breadcrumb::new().render());

    // These log configuration warnings.
    let _ = ButtonGroup::new().with_block(true).render();
    let _ = Button::new().with_size(Size::Medium).render();
    let _ = Checkbox::new()
        .with_inline(true)
        .with_validation_state(ValidationState::Error)
        .render();
    let _ = Tooltip::new().with_child("No id").render();
}
