// SPDX-License-Identifier: MPL-2.0
//! Drag state management
//!
//! Handles single-pointer drag interaction state for panning a zoomed image.

use crate::gallery::position::PanOffset;
use iced::Point;

/// Manages drag-to-pan state
#[derive(Debug, Clone, Default)]
pub struct DragState {
    /// Whether a drag operation is currently active
    pub is_dragging: bool,

    /// Pointer location where the drag started
    pub start_pointer: Option<Point>,

    /// Pan offset when the drag started
    pub start_position: Option<PanOffset>,
}

impl DragState {
    /// Starts a drag operation
    pub fn start(&mut self, pointer: Point, position: PanOffset) {
        self.is_dragging = true;
        self.start_pointer = Some(pointer);
        self.start_position = Some(position);
    }

    /// Stops the drag operation
    pub fn stop(&mut self) {
        self.is_dragging = false;
        self.start_pointer = None;
        self.start_position = None;
    }

    /// Unclamped offset for the current pointer location.
    ///
    /// The image follows the pointer: moving right shifts the image right.
    #[must_use]
    pub fn offset_for(&self, pointer: Point) -> Option<PanOffset> {
        if !self.is_dragging {
            return None;
        }

        let start_pointer = self.start_pointer?;
        let start_position = self.start_position?;

        Some(PanOffset::new(
            start_position.x + (pointer.x - start_pointer.x),
            start_position.y + (pointer.y - start_pointer.y),
        ))
    }
}
