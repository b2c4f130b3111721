// Copyright 2026 the Strapline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared helpers for the Strapline demos.

/// Installs `env_logger`, defaulting to `info` when `RUST_LOG` is unset.
///
/// Run a demo with `RUST_LOG=debug` to see overlay transitions and
/// `RUST_LOG=trace` to see timer scheduling.
pub fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .init();
}
