// Copyright 2026 the Strapline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Non-fatal configuration warnings and their logging.

use alloc::string::String;
use core::fmt;

use strapline_style::StyleWarning;

/// A non-fatal component configuration problem.
///
/// Components still render; each variant documents which setting wins.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ComponentWarning {
    /// Unsupported size or variant; the modifier class is emitted anyway.
    Style(StyleWarning),
    /// A button group is `block` but not `vertical`; `btn-block` is still added.
    BlockWithoutVertical,
    /// A label's explicit `html_for` disagrees with its form group's control
    /// id; `html_for` wins.
    ControlIdIgnored {
        /// The explicit target.
        html_for: String,
        /// The form group's control id.
        control_id: String,
    },
    /// An inline checkbox has a validation state, which is not rendered.
    InlineValidationIgnored,
    /// A menu divider has children, which are dropped.
    DividerWithChildren,
    /// A tooltip has no `id`, so its trigger cannot reference it.
    MissingTooltipId,
}

impl fmt::Display for ComponentWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Style(w) => fmt::Display::fmt(w, f),
            Self::BlockWithoutVertical => {
                f.write_str("`block` on a button group requires `vertical` to take effect")
            }
            Self::ControlIdIgnored {
                html_for,
                control_id,
            } => write!(
                f,
                "form group control id `{control_id}` is ignored on a label with explicit `html_for` `{html_for}`"
            ),
            Self::InlineValidationIgnored => f.write_str(
                "validation state is ignored on an inline checkbox; set it on the enclosing form group instead",
            ),
            Self::DividerWithChildren => f.write_str("menu dividers do not render children"),
            Self::MissingTooltipId => f.write_str(
                "a tooltip needs an `id` so its trigger can reference it with `aria-describedby`",
            ),
        }
    }
}

impl From<StyleWarning> for ComponentWarning {
    fn from(value: StyleWarning) -> Self {
        Self::Style(value)
    }
}

/// Logs each warning at `warn` level.
pub(crate) fn report(warnings: &[ComponentWarning]) {
    for warning in warnings {
        log::warn!("{warning}");
    }
}
