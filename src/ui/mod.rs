// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! Components follow the Elm-style "state down, messages up" pattern: each
//! view takes a borrowed `ViewContext` and emits its own `Message`, which the
//! application maps into its top-level message.
//!
//! # Screens
//!
//! - [`detail_view`] - Content page with thumbnails and the "Open gallery" button
//! - [`gallery_view`] - Full-screen overlay with zoom, pan and navigation controls
//!
//! # Shared Infrastructure
//!
//! - [`widgets`] - Custom Iced widgets (zoomable image)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode and overlay colors
//! - [`notifications`] - Toast notification system for user feedback

pub mod design_tokens;
pub mod detail_view;
pub mod gallery_view;
pub mod notifications;
pub mod theming;
pub mod widgets;
