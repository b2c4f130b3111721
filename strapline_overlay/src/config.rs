// Copyright 2026 the Strapline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trigger configuration.

use core::fmt;

use smallvec::SmallVec;

bitflags::bitflags! {
    /// Interactions that change overlay visibility.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct TriggerModes: u8 {
        /// A click on the trigger toggles the overlay.
        const CLICK = 0b0000_0001;
        /// Pointer enter shows, pointer leave hides.
        const HOVER = 0b0000_0010;
        /// Focus shows, blur hides.
        const FOCUS = 0b0000_0100;
    }
}

impl Default for TriggerModes {
    fn default() -> Self {
        Self::HOVER | Self::FOCUS
    }
}

/// Side of the trigger the overlay is placed on.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Placement {
    /// Above the trigger.
    Top,
    /// Right of the trigger.
    #[default]
    Right,
    /// Below the trigger.
    Bottom,
    /// Left of the trigger.
    Left,
}

impl Placement {
    /// The placement name as used in class names.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Right => "right",
            Self::Bottom => "bottom",
            Self::Left => "left",
        }
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Configuration for an overlay trigger.
///
/// Delays are in milliseconds. A mode-specific delay (`delay_show`,
/// `delay_hide`) takes precedence over the shared `delay`; with neither set
/// the transition is immediate.
///
/// ```
/// use strapline_overlay::{TriggerConfig, TriggerModes};
///
/// let config = TriggerConfig::new()
///     .with_modes(TriggerModes::HOVER | TriggerModes::FOCUS)
///     .with_delay(200)
///     .with_delay_hide(500);
/// assert_eq!(config.show_delay(), 200);
/// assert_eq!(config.hide_delay(), 500);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TriggerConfig {
    /// Interactions that drive visibility.
    pub modes: TriggerModes,
    /// Shared delay for showing and hiding.
    pub delay: Option<u64>,
    /// Delay before showing; overrides `delay`.
    pub delay_show: Option<u64>,
    /// Delay before hiding; overrides `delay`.
    pub delay_hide: Option<u64>,
    /// Start out shown.
    pub default_shown: bool,
    /// Where the overlay sits relative to the trigger.
    pub placement: Placement,
    /// Hide the overlay when the user clicks outside it.
    pub root_close: bool,
}

impl TriggerConfig {
    /// Hover and focus triggers, no delays, initially hidden.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the trigger modes.
    #[must_use]
    pub fn with_modes(mut self, modes: TriggerModes) -> Self {
        self.modes = modes;
        self
    }

    /// Sets the shared delay.
    #[must_use]
    pub fn with_delay(mut self, delay: u64) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Sets the show delay.
    #[must_use]
    pub fn with_delay_show(mut self, delay: u64) -> Self {
        self.delay_show = Some(delay);
        self
    }

    /// Sets the hide delay.
    #[must_use]
    pub fn with_delay_hide(mut self, delay: u64) -> Self {
        self.delay_hide = Some(delay);
        self
    }

    /// Sets the initial visibility.
    #[must_use]
    pub fn with_default_shown(mut self, shown: bool) -> Self {
        self.default_shown = shown;
        self
    }

    /// Sets the placement.
    #[must_use]
    pub fn with_placement(mut self, placement: Placement) -> Self {
        self.placement = placement;
        self
    }

    /// Enables or disables click-outside dismissal.
    #[must_use]
    pub fn with_root_close(mut self, root_close: bool) -> Self {
        self.root_close = root_close;
        self
    }

    /// Effective show delay.
    #[must_use]
    pub fn show_delay(&self) -> u64 {
        self.delay_show.or(self.delay).unwrap_or(0)
    }

    /// Effective hide delay.
    #[must_use]
    pub fn hide_delay(&self) -> u64 {
        self.delay_hide.or(self.delay).unwrap_or(0)
    }

    /// Problems with this configuration that do not prevent it from working.
    #[must_use]
    pub fn warnings(&self) -> SmallVec<[TriggerWarning; 1]> {
        let mut out = SmallVec::new();
        if self.modes.is_empty() {
            out.push(TriggerWarning::NoTriggerModes);
        } else if self.modes == TriggerModes::HOVER {
            out.push(TriggerWarning::HoverWithoutFocus);
        }
        out
    }
}

/// A non-fatal trigger configuration problem.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TriggerWarning {
    /// Only the hover mode is configured, so keyboard and touch users can
    /// never reveal the overlay.
    HoverWithoutFocus,
    /// No mode is configured; the overlay only changes through explicit
    /// `show`/`hide`/dismiss calls.
    NoTriggerModes,
}

impl fmt::Display for TriggerWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::HoverWithoutFocus => f.write_str(
                "only the hover trigger is configured, which limits the overlay to pointer \
                 users; also include the focus trigger so keyboard and touch users can see it",
            ),
            Self::NoTriggerModes => f.write_str(
                "no trigger modes are configured; the overlay can only be shown programmatically",
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_hover_and_focus_without_delays() {
        let config = TriggerConfig::new();
        assert_eq!(config.modes, TriggerModes::HOVER | TriggerModes::FOCUS);
        assert_eq!(config.show_delay(), 0);
        assert_eq!(config.hide_delay(), 0);
        assert!(!config.default_shown);
        assert_eq!(config.placement, Placement::Right);
        assert!(config.warnings().is_empty());
    }

    #[test]
    fn specific_delays_override_shared_delay() {
        let config = TriggerConfig::new().with_delay(300).with_delay_show(0);
        assert_eq!(config.show_delay(), 0);
        assert_eq!(config.hide_delay(), 300);
    }

    #[test]
    fn hover_only_is_flagged() {
        let config = TriggerConfig::new().with_modes(TriggerModes::HOVER);
        assert_eq!(
            config.warnings().as_slice(),
            &[TriggerWarning::HoverWithoutFocus]
        );

        let config = TriggerConfig::new().with_modes(TriggerModes::HOVER | TriggerModes::CLICK);
        assert!(config.warnings().is_empty());
    }

    #[test]
    fn empty_modes_are_flagged() {
        let config = TriggerConfig::new().with_modes(TriggerModes::empty());
        assert_eq!(
            config.warnings().as_slice(),
            &[TriggerWarning::NoTriggerModes]
        );
    }
}
