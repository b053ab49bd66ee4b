// SPDX-License-Identifier: MPL-2.0
//! Pan offset of the displayed image, in pixels.

use super::zoom::ZoomLevel;

/// Offset of the image centre from the viewport centre.
///
/// The offset on its own carries no bound; [`PanOffset::clamped_to`] applies
/// the limit that belongs to a given zoom level.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PanOffset {
    pub x: f32,
    pub y: f32,
}

impl PanOffset {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    /// Creates an offset; non-finite components become zero.
    #[must_use]
    pub fn new(x: f32, y: f32) -> Self {
        let finite_or_zero = |v: f32| if v.is_finite() { v } else { 0.0 };
        Self {
            x: finite_or_zero(x),
            y: finite_or_zero(y),
        }
    }

    #[must_use]
    pub fn is_zero(self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }

    /// Clamps each axis to `[-limit, limit]` for the given zoom.
    ///
    /// At rest zoom the limit is zero, so the result is always [`PanOffset::ZERO`].
    #[must_use]
    pub fn clamped_to(self, zoom: ZoomLevel) -> Self {
        if zoom.is_rest() {
            return Self::ZERO;
        }
        let limit = zoom.pan_limit();
        Self {
            x: self.x.clamp(-limit, limit),
            y: self.y.clamp(-limit, limit),
        }
    }

    /// Moves by `(dx, dy)` and clamps the result for the given zoom.
    #[must_use]
    pub fn translated(self, dx: f32, dy: f32, zoom: ZoomLevel) -> Self {
        Self::new(self.x + dx, self.y + dy).clamped_to(zoom)
    }
}
