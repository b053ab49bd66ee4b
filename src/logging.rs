// SPDX-License-Identifier: MPL-2.0
//! Log output setup.
//!
//! Filtering follows `RUST_LOG` (e.g. `RUST_LOG=iced_lightbox=debug`); anything
//! not matched there is logged at `INFO` and above.

use tracing_subscriber::EnvFilter;

/// Installs the global `fmt` subscriber. Call once, before the GUI starts.
pub fn init() {
    let filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    if tracing_subscriber::fmt().with_env_filter(filter).try_init().is_err() {
        tracing::debug!("global subscriber already installed");
    }
}
