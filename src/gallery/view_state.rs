// SPDX-License-Identifier: MPL-2.0
//! View state of an open overlay.

use super::position::PanOffset;
use super::zoom::ZoomLevel;

/// Index, zoom and pan of the image on screen.
///
/// Fields are private so the pan invariants always hold: the position is zero
/// at rest zoom and never leaves the limit of the current zoom level.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewState {
    current_index: usize,
    zoom: ZoomLevel,
    position: PanOffset,
}

impl ViewState {
    /// Fresh view of the image at `index`, at rest zoom and centred.
    #[must_use]
    pub fn at(index: usize) -> Self {
        Self {
            current_index: index,
            zoom: ZoomLevel::REST,
            position: PanOffset::ZERO,
        }
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    #[must_use]
    pub fn zoom(&self) -> ZoomLevel {
        self.zoom
    }

    #[must_use]
    pub fn position(&self) -> PanOffset {
        self.position
    }

    /// Applies a new zoom and re-clamps the position to its limit.
    #[must_use]
    pub(crate) fn with_zoom(self, zoom: ZoomLevel) -> Self {
        Self {
            zoom,
            position: self.position.clamped_to(zoom),
            ..self
        }
    }

    /// Replaces the position, clamped to the current zoom.
    #[must_use]
    pub(crate) fn with_position(self, position: PanOffset) -> Self {
        Self {
            position: position.clamped_to(self.zoom),
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    #[test]
    fn at_starts_at_rest() {
        let state = ViewState::at(3);
        assert_eq!(state.current_index(), 3);
        assert!(state.zoom().is_rest());
        assert!(state.position().is_zero());
    }

    #[test]
    fn with_zoom_reclamps_position() {
        let state = ViewState::at(0)
            .with_zoom(ZoomLevel::new(3.0))
            .with_position(PanOffset::new(350.0, -350.0))
            .with_zoom(ZoomLevel::new(2.0));
        assert_abs_diff_eq!(state.position().x, 200.0);
        assert_abs_diff_eq!(state.position().y, -200.0);
    }

    #[test]
    fn returning_to_rest_recentres() {
        let state = ViewState::at(0)
            .with_zoom(ZoomLevel::new(1.5))
            .with_position(PanOffset::new(40.0, 40.0))
            .with_zoom(ZoomLevel::REST);
        assert!(state.position().is_zero());
    }

    #[test]
    fn position_ignored_at_rest() {
        let state = ViewState::at(0).with_position(PanOffset::new(10.0, 10.0));
        assert!(state.position().is_zero());
    }
}
