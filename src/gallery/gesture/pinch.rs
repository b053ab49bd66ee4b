// SPDX-License-Identifier: MPL-2.0
//! Two-finger pinch tracking.
//!
//! A pinch is mapped onto the discrete zoom steps: each time the distance
//! between the fingers changes by more than [`PINCH_STEP_THRESHOLD`] relative to
//! the reference distance, one step fires and the reference is rebased.

use crate::config::PINCH_STEP_THRESHOLD;
use iced::Point;

/// Direction of a discrete pinch step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinchStep {
    ZoomIn,
    ZoomOut,
}

#[derive(Debug, Clone, Default)]
pub struct PinchState {
    /// Finger distance the next ratio is measured against
    pub reference_distance: Option<f32>,
}

impl PinchState {
    pub fn start(&mut self, distance: f32) {
        self.reference_distance = Some(distance);
    }

    pub fn stop(&mut self) {
        self.reference_distance = None;
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.reference_distance.is_some()
    }

    /// Feeds a new finger distance and returns the step it triggers, if any.
    ///
    /// The reference only moves when a step fires, so slow pinches still
    /// accumulate towards the threshold.
    pub fn update(&mut self, distance: f32) -> Option<PinchStep> {
        let reference = self.reference_distance?;

        if reference <= f32::EPSILON {
            // Fingers started on the same spot
            self.reference_distance = Some(distance);
            return None;
        }

        let ratio = distance / reference;
        let step = if ratio > 1.0 + PINCH_STEP_THRESHOLD {
            PinchStep::ZoomIn
        } else if ratio < 1.0 - PINCH_STEP_THRESHOLD {
            PinchStep::ZoomOut
        } else {
            return None;
        };

        self.reference_distance = Some(distance);
        Some(step)
    }
}

/// Euclidean distance between two contact points.
#[must_use]
pub fn distance(a: Point, b: Point) -> f32 {
    a.distance(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn started_at(distance: f32) -> PinchState {
        let mut pinch = PinchState::default();
        pinch.start(distance);
        pinch
    }

    #[test]
    fn inactive_pinch_never_steps() {
        let mut pinch = PinchState::default();
        assert_eq!(pinch.update(500.0), None);
    }

    #[test]
    fn spreading_past_threshold_zooms_in() {
        let mut pinch = started_at(100.0);
        assert_eq!(pinch.update(111.0), Some(PinchStep::ZoomIn));
    }

    #[test]
    fn small_change_does_nothing() {
        let mut pinch = started_at(100.0);
        assert_eq!(pinch.update(105.0), None);
        assert_eq!(pinch.update(95.0), None);
        assert_eq!(pinch.reference_distance, Some(100.0));
    }

    #[test]
    fn pinching_past_threshold_zooms_out() {
        let mut pinch = started_at(100.0);
        assert_eq!(pinch.update(85.0), Some(PinchStep::ZoomOut));
    }

    #[test]
    fn reference_rebases_after_step() {
        let mut pinch = started_at(100.0);
        assert_eq!(pinch.update(111.0), Some(PinchStep::ZoomIn));
        assert_eq!(pinch.reference_distance, Some(111.0));
        assert_eq!(pinch.update(111.0 * 1.11), Some(PinchStep::ZoomIn));
    }

    #[test]
    fn gradual_spread_accumulates() {
        let mut pinch = started_at(100.0);
        assert_eq!(pinch.update(104.0), None);
        assert_eq!(pinch.update(108.0), None);
        assert_eq!(pinch.update(112.0), Some(PinchStep::ZoomIn));
    }

    #[test]
    fn zero_reference_is_rebased() {
        let mut pinch = started_at(0.0);
        assert_eq!(pinch.update(50.0), None);
        assert_eq!(pinch.reference_distance, Some(50.0));
    }

    #[test]
    fn distance_is_euclidean() {
        let d = distance(Point::new(0.0, 0.0), Point::new(3.0, 4.0));
        assert!((d - 5.0).abs() < f32::EPSILON);
    }
}
