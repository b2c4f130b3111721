// Copyright 2026 the Strapline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Strapline Overlay: visibility control for tooltips and popovers.
//!
//! An overlay (a tooltip, a popover) is attached to a _trigger_ element and
//! shown or hidden in response to the trigger's interactions. This crate
//! holds that logic without assuming any UI framework:
//!
//! - [`TriggerConfig`]: which interactions count ([`TriggerModes`]), show
//!   and hide delays, initial state, placement, click-outside dismissal.
//! - [`OverlayController`]: the Hidden/Shown state machine with debounced
//!   delayed requests backed by a host-polled timer queue.
//! - [`OverlayTrigger`]: binds a controller to a trigger node, runs chained
//!   user handlers, and derives enter/leave from raw pointer-over/out events
//!   through a [`Containment`] query.
//!
//! ## Debounced hover
//!
//! A delayed request in one direction cancels a pending request in the
//! other direction, so brief pointer passes never flash the overlay.
//!
//! ```rust
//! use strapline_overlay::{OverlayTrigger, Transition, TriggerConfig, TriggerEvent};
//!
//! let config = TriggerConfig::new().with_delay_show(100).with_delay_hide(500);
//! let mut trigger = OverlayTrigger::new("button", config);
//!
//! // Pointer enters and leaves again before the show delay elapses.
//! trigger.handle(&TriggerEvent::PointerEnter, 0, &());
//! trigger.handle(&TriggerEvent::PointerLeave, 60, &());
//! assert_eq!(trigger.next_deadline(), None);
//! assert!(!trigger.is_shown());
//!
//! // Pointer enters and stays.
//! trigger.handle(&TriggerEvent::PointerEnter, 200, &());
//! assert_eq!(trigger.poll(300), Some(Transition::Shown));
//! ```
//!
//! ## Timekeeping
//!
//! Time is a `u64` in milliseconds supplied by the host. Operations that
//! start timers take `now`; the host calls `poll(now)` once `now` reaches
//! `next_deadline()`. Calling [`OverlayTrigger::teardown`] cancels all
//! pending timers and freezes the state.
//!
//! Configuration warnings, such as hover without focus, are logged through
//! the `log` facade when a trigger is created.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod config;
mod controller;
mod trigger;

pub use config::{Placement, TriggerConfig, TriggerModes, TriggerWarning};
pub use controller::{OverlayController, Transition};
pub use trigger::{Containment, OverlayState, OverlayTrigger, TriggerEvent, TriggerHandlers};
