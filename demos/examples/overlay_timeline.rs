// Copyright 2026 the Strapline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Overlay timeline.
//!
//! Replay a scripted sequence of pointer and focus events against a
//! tooltip trigger and print every visibility transition, including the
//! ones debouncing suppresses.
//!
//! Run:
//! - `cargo run -p strapline_demos --example overlay_timeline`
//! - `RUST_LOG=trace cargo run -p strapline_demos --example overlay_timeline`

use strapline_components::Tooltip;
use strapline_overlay::{OverlayTrigger, Placement, TriggerConfig, TriggerEvent, TriggerHandlers};

/// Trigger node ids in a tiny tree: the button (1) contains its icon (2).
const BUTTON: u32 = 1;
const ICON: u32 = 2;
const ELSEWHERE: u32 = 9;

fn main() {
    strapline_demos::init_logging();

    let config = TriggerConfig::new()
        .with_delay_show(100)
        .with_delay_hide(500)
        .with_placement(Placement::Top);
    let handlers = TriggerHandlers::new().on_focus(|_| log::info!("user focus handler ran"));
    let mut trigger = OverlayTrigger::new(BUTTON, config)
        .with_overlay_id("save-tip")
        .with_handlers(handlers);

    // The icon sits inside the button.
    let tree = |ancestor: &u32, node: &u32| *ancestor == BUTTON && *node == ICON;

    let script = [
        (0, TriggerEvent::PointerOver { related: Some(ELSEWHERE) }),
        // Moving onto the icon is not a leave.
        (40, TriggerEvent::PointerOut { related: Some(ICON) }),
        (250, TriggerEvent::PointerOut { related: Some(ELSEWHERE) }),
        // Back before the hide delay elapses: the pending hide is cancelled.
        (400, TriggerEvent::PointerOver { related: Some(ELSEWHERE) }),
        (900, TriggerEvent::PointerOut { related: Some(ELSEWHERE) }),
        (1_000, TriggerEvent::Focus),
        (1_800, TriggerEvent::Blur),
    ];

    for (at, event) in &script {
        while let Some(deadline) = trigger.next_deadline().filter(|d| d <= at) {
            if let Some(t) = trigger.poll(deadline) {
                println!("{deadline:>5} ms  timer -> {t:?}");
            }
        }
        match trigger.handle(event, *at, &tree) {
            Some(t) => println!("{at:>5} ms  {event:?} -> {t:?}"),
            None => println!("{at:>5} ms  {event:?}"),
        }
    }
    while let Some(deadline) = trigger.next_deadline() {
        if let Some(t) = trigger.poll(deadline) {
            println!("{deadline:>5} ms  timer -> {t:?}");
        }
    }

    let state = trigger.overlay_state();
    let tooltip = Tooltip::new()
        .with_id("save-tip")
        .with_overlay_state(&state)
        .with_child("Save the document");
    println!();
    println!("final state: {state:?}");
    println!("aria-describedby: {:?}", trigger.described_by());
    println!("{}", tooltip.render());

    trigger.teardown();
}
