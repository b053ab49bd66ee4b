// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Zoom**: Zoom level bounds and the fixed step
//! - **Pan**: Pan limit per zoom level and keyboard pan step
//! - **Gestures**: Pinch threshold
//! - **Display**: Thumbnail sizing on the detail page

// ==========================================================================
// Zoom Defaults
// ==========================================================================

/// Zoom level at rest (original fit, no magnification).
pub const MIN_ZOOM_LEVEL: f32 = 1.0;

/// Maximum allowed zoom level.
pub const MAX_ZOOM_LEVEL: f32 = 3.0;

/// Zoom increment applied by every discrete zoom action.
pub const ZOOM_STEP: f32 = 0.5;

// ==========================================================================
// Pan Defaults
// ==========================================================================

/// Pan limit in pixels for each zoom unit above rest.
///
/// At zoom `z` the position is clamped to `[-(z - 1) * K, (z - 1) * K]` on
/// both axes.
pub const PAN_LIMIT_PER_ZOOM_PX: f32 = 200.0;

/// Distance in pixels moved by a single arrow key press while zoomed.
pub const KEYBOARD_PAN_STEP_PX: f32 = 50.0;

// ==========================================================================
// Gesture Defaults
// ==========================================================================

/// Relative change in finger distance that triggers one pinch zoom step.
pub const PINCH_STEP_THRESHOLD: f32 = 0.10;

// ==========================================================================
// Display Defaults
// ==========================================================================

/// Default thumbnail edge length on the detail page (in pixels).
pub const DEFAULT_THUMBNAIL_SIZE: u32 = 160;

/// Minimum thumbnail edge length.
pub const MIN_THUMBNAIL_SIZE: u32 = 64;

/// Maximum thumbnail edge length.
pub const MAX_THUMBNAIL_SIZE: u32 = 320;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    // Zoom validation
    assert!(MIN_ZOOM_LEVEL == 1.0);
    assert!(MAX_ZOOM_LEVEL > MIN_ZOOM_LEVEL);
    assert!(ZOOM_STEP > 0.0);
    assert!(ZOOM_STEP <= MAX_ZOOM_LEVEL - MIN_ZOOM_LEVEL);

    // Pan validation
    assert!(PAN_LIMIT_PER_ZOOM_PX > 0.0);
    assert!(KEYBOARD_PAN_STEP_PX > 0.0);

    // Gesture validation
    assert!(PINCH_STEP_THRESHOLD > 0.0);
    assert!(PINCH_STEP_THRESHOLD < 1.0);

    // Thumbnail validation
    assert!(MIN_THUMBNAIL_SIZE > 0);
    assert!(MAX_THUMBNAIL_SIZE >= MIN_THUMBNAIL_SIZE);
    assert!(DEFAULT_THUMBNAIL_SIZE >= MIN_THUMBNAIL_SIZE);
    assert!(DEFAULT_THUMBNAIL_SIZE <= MAX_THUMBNAIL_SIZE);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zoom_defaults_are_valid() {
        assert_eq!(MIN_ZOOM_LEVEL, 1.0);
        assert_eq!(MAX_ZOOM_LEVEL, 3.0);
        assert_eq!(ZOOM_STEP, 0.5);
    }

    #[test]
    fn zoom_range_is_a_whole_number_of_steps() {
        let steps = (MAX_ZOOM_LEVEL - MIN_ZOOM_LEVEL) / ZOOM_STEP;
        assert_eq!(steps.fract(), 0.0);
    }

    #[test]
    fn thumbnail_defaults_are_valid() {
        assert!(DEFAULT_THUMBNAIL_SIZE >= MIN_THUMBNAIL_SIZE);
        assert!(DEFAULT_THUMBNAIL_SIZE <= MAX_THUMBNAIL_SIZE);
    }
}
