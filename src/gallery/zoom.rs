// SPDX-License-Identifier: MPL-2.0
//! Zoom level of the gallery overlay.
//!
//! Zoom moves in fixed steps of [`ZOOM_STEP`] between rest ([`MIN_ZOOM_LEVEL`])
//! and [`MAX_ZOOM_LEVEL`]. Values outside the range are clamped, never rejected.

pub use crate::config::{MAX_ZOOM_LEVEL, MIN_ZOOM_LEVEL, PAN_LIMIT_PER_ZOOM_PX, ZOOM_STEP};

/// Zoom level, guaranteed to be within valid range (1.0–3.0).
///
/// This type ensures that zoom values are always valid, eliminating
/// the need for manual clamping at usage sites.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct ZoomLevel(f32);

impl ZoomLevel {
    /// Zoom level at rest.
    pub const REST: Self = Self(MIN_ZOOM_LEVEL);

    /// Creates a new zoom level, clamping the value to the valid range.
    ///
    /// Non-finite input falls back to rest zoom.
    #[must_use]
    pub fn new(level: f32) -> Self {
        if level.is_finite() {
            Self(level.clamp(MIN_ZOOM_LEVEL, MAX_ZOOM_LEVEL))
        } else {
            Self::REST
        }
    }

    /// Returns the raw zoom factor.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Returns the zoom as a percentage (e.g., 1.5 → 150).
    #[must_use]
    pub fn as_percent(self) -> f32 {
        self.0 * 100.0
    }

    /// Returns whether the zoom is at rest (no magnification).
    #[must_use]
    pub fn is_rest(self) -> bool {
        self.0 <= MIN_ZOOM_LEVEL
    }

    /// Returns whether the zoom is at the maximum value.
    #[must_use]
    pub fn is_max(self) -> bool {
        self.0 >= MAX_ZOOM_LEVEL
    }

    /// Increases zoom by one step.
    #[must_use]
    pub fn zoom_in(self) -> Self {
        Self::new(self.0 + ZOOM_STEP)
    }

    /// Decreases zoom by one step.
    #[must_use]
    pub fn zoom_out(self) -> Self {
        Self::new(self.0 - ZOOM_STEP)
    }

    /// Maximum absolute pan offset on each axis at this zoom level.
    #[must_use]
    pub fn pan_limit(self) -> f32 {
        (self.0 - MIN_ZOOM_LEVEL) * PAN_LIMIT_PER_ZOOM_PX
    }
}

impl Default for ZoomLevel {
    fn default() -> Self {
        Self::REST
    }
}
