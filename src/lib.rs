// SPDX-License-Identifier: MPL-2.0
//! `iced_lightbox` is a full-screen image gallery built with the Iced GUI
//! framework.
//!
//! A content detail page shows thumbnails of an image set; opening it shows
//! a lightbox overlay with stepped zoom, clamped panning, drag and pinch
//! gestures, and keyboard shortcuts. The overlay state machine lives in
//! [`gallery`] and has no GUI dependency beyond geometry types, so it can be
//! driven and tested on its own.

#![doc(html_root_url = "https://docs.rs/iced_lightbox/0.1.0")]

pub mod app;
pub mod backend;
pub mod config;
pub mod error;
pub mod gallery;
pub mod i18n;
pub mod logging;
pub mod paths;
pub mod source;
pub mod ui;

#[cfg(test)]
pub(crate) mod test_utils;
