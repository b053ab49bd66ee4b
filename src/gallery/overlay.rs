// SPDX-License-Identifier: MPL-2.0
//! Overlay state machine.
//!
//! The overlay is either closed or open on one image with a zoom level and a
//! pan offset. Every operation other than [`GalleryOverlay::open`] is a no-op
//! while closed, and none of them can fail: out-of-range values are clamped.

use super::gesture::{GestureOutcome, GestureState, PinchStep};
use super::image_set::ImageSet;
use super::input::{Effect, Input, Key};
use super::position::PanOffset;
use super::view_state::ViewState;
use super::zoom::ZoomLevel;
use crate::config::KEYBOARD_PAN_STEP_PX;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OverlayState {
    Closed,
    Open(ViewState),
}

#[derive(Debug, Clone)]
pub struct GalleryOverlay {
    images: ImageSet,
    state: OverlayState,
    gestures: GestureState,
}

impl GalleryOverlay {
    /// Creates a closed overlay over `images`.
    #[must_use]
    pub fn new(images: ImageSet) -> Self {
        Self {
            images,
            state: OverlayState::Closed,
            gestures: GestureState::default(),
        }
    }

    #[must_use]
    pub fn images(&self) -> &ImageSet {
        &self.images
    }

    #[must_use]
    pub fn state(&self) -> OverlayState {
        self.state
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        matches!(self.state, OverlayState::Open(_))
    }

    #[must_use]
    pub fn view_state(&self) -> Option<ViewState> {
        match self.state {
            OverlayState::Open(view) => Some(view),
            OverlayState::Closed => None,
        }
    }

    /// Location of the image on screen, if open.
    #[must_use]
    pub fn current_image(&self) -> Option<&str> {
        self.view_state()
            .and_then(|view| self.images.get(view.current_index()))
    }

    #[must_use]
    pub fn gestures(&self) -> &GestureState {
        &self.gestures
    }

    /// Opens (or re-seeds) the overlay on `index`, clamped to the last image.
    pub fn open(&mut self, index: usize) -> Effect {
        let index = self.images.clamp_index(index);
        self.show(index);
        tracing::debug!(index, total = self.images.len(), "gallery opened");
        Effect::Navigated
    }

    pub fn close(&mut self) -> Effect {
        if !self.is_open() {
            return Effect::None;
        }
        self.state = OverlayState::Closed;
        self.gestures.reset();
        tracing::debug!("gallery closed");
        Effect::Closed
    }

    pub fn next(&mut self) -> Effect {
        match self.view_state() {
            Some(view) => {
                self.show(self.images.next_index(view.current_index()));
                Effect::Navigated
            }
            None => Effect::None,
        }
    }

    pub fn previous(&mut self) -> Effect {
        match self.view_state() {
            Some(view) => {
                self.show(self.images.previous_index(view.current_index()));
                Effect::Navigated
            }
            None => Effect::None,
        }
    }

    pub fn zoom_in(&mut self) -> Effect {
        self.apply_zoom(ZoomLevel::zoom_in)
    }

    pub fn zoom_out(&mut self) -> Effect {
        self.apply_zoom(ZoomLevel::zoom_out)
    }

    /// Returns to rest zoom and recentres.
    pub fn reset_zoom(&mut self) -> Effect {
        self.apply_zoom(|_| ZoomLevel::REST)
    }

    /// Pans by `(dx, dy)`; ignored at rest zoom.
    pub fn pan(&mut self, dx: f32, dy: f32) -> Effect {
        match self.view_state() {
            Some(view) => self.set_position(view.position().translated(dx, dy, view.zoom())),
            None => Effect::None,
        }
    }

    /// Moves the image to `position`, clamped to the current zoom limit.
    pub fn set_position(&mut self, position: PanOffset) -> Effect {
        let Some(view) = self.view_state() else {
            return Effect::None;
        };
        if view.zoom().is_rest() {
            return Effect::None;
        }
        self.update_view(view, view.with_position(position), Effect::Panned)
    }

    /// Interprets one raw input event.
    pub fn handle_input(&mut self, input: Input) -> Effect {
        let Some(view) = self.view_state() else {
            return Effect::None;
        };

        match input {
            Input::Key(key) => self.handle_key(key, view),
            Input::Wheel { delta_y } => {
                if delta_y > 0.0 {
                    self.zoom_in()
                } else if delta_y < 0.0 {
                    self.zoom_out()
                } else {
                    Effect::None
                }
            }
            Input::PointerPressed { pointer, position } => {
                self.gestures.press(pointer, position, view.position());
                Effect::None
            }
            Input::PointerMoved { pointer, position } => {
                match self.gestures.moved(pointer, position) {
                    GestureOutcome::Idle => Effect::None,
                    GestureOutcome::DragTo(offset) => self.set_position(offset),
                    GestureOutcome::Pinch(PinchStep::ZoomIn) => self.zoom_in(),
                    GestureOutcome::Pinch(PinchStep::ZoomOut) => self.zoom_out(),
                }
            }
            Input::PointerReleased { pointer } | Input::PointerLost { pointer } => {
                self.gestures.release(pointer, view.position());
                Effect::None
            }
        }
    }

    fn handle_key(&mut self, key: Key, view: ViewState) -> Effect {
        let at_rest = view.zoom().is_rest();
        match key {
            Key::ArrowLeft if at_rest => self.previous(),
            Key::ArrowRight if at_rest => self.next(),
            Key::ArrowLeft => self.pan(-KEYBOARD_PAN_STEP_PX, 0.0),
            Key::ArrowRight => self.pan(KEYBOARD_PAN_STEP_PX, 0.0),
            Key::ArrowUp => self.pan(0.0, -KEYBOARD_PAN_STEP_PX),
            Key::ArrowDown => self.pan(0.0, KEYBOARD_PAN_STEP_PX),
            Key::Escape => self.close(),
            Key::ZoomIn => self.zoom_in(),
            Key::ZoomOut => self.zoom_out(),
            Key::ResetZoom => self.reset_zoom(),
        }
    }

    fn show(&mut self, index: usize) {
        self.state = OverlayState::Open(ViewState::at(index));
        self.gestures.reset();
    }

    fn apply_zoom(&mut self, step: impl FnOnce(ZoomLevel) -> ZoomLevel) -> Effect {
        let Some(view) = self.view_state() else {
            return Effect::None;
        };
        let next = view.with_zoom(step(view.zoom()));
        self.update_view(view, next, Effect::ZoomChanged)
    }

    fn update_view(&mut self, before: ViewState, after: ViewState, effect: Effect) -> Effect {
        if before == after {
            return Effect::None;
        }
        self.state = OverlayState::Open(after);
        effect
    }
}
