// SPDX-License-Identifier: MPL-2.0
//! Transient pointer gesture tracking for the overlay.
//!
//! One active contact drives a drag, two drive a pinch. Further contacts are
//! ignored until one of the tracked ones lifts.

pub mod drag;
pub mod pinch;

pub use drag::DragState;
pub use pinch::{PinchState, PinchStep};

use super::input::PointerId;
use super::position::PanOffset;
use iced::Point;

const MAX_CONTACTS: usize = 2;

/// What a pointer event means for the view state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureOutcome {
    /// Nothing to apply.
    Idle,
    /// Drag wants the image at this (unclamped) offset.
    DragTo(PanOffset),
    /// Pinch crossed the threshold.
    Pinch(PinchStep),
}

#[derive(Debug, Clone, Default)]
pub struct GestureState {
    contacts: Vec<(PointerId, Point)>,
    pub drag: DragState,
    pub pinch: PinchState,
}

impl GestureState {
    /// Number of pointers currently held down.
    #[must_use]
    pub fn active_contacts(&self) -> usize {
        self.contacts.len()
    }

    /// Registers a new contact. `position` is the pan offset at press time.
    pub fn press(&mut self, pointer: PointerId, at: Point, position: PanOffset) {
        if let Some(contact) = self.contact_mut(pointer) {
            contact.1 = at;
        } else if self.contacts.len() < MAX_CONTACTS {
            self.contacts.push((pointer, at));
        } else {
            return;
        }
        self.rearm(position);
    }

    /// Moves a tracked contact and reports what the gesture now asks for.
    pub fn moved(&mut self, pointer: PointerId, at: Point) -> GestureOutcome {
        let Some(contact) = self.contact_mut(pointer) else {
            return GestureOutcome::Idle;
        };
        contact.1 = at;

        if let [(_, a), (_, b)] = self.contacts.as_slice() {
            return match self.pinch.update(pinch::distance(*a, *b)) {
                Some(step) => GestureOutcome::Pinch(step),
                None => GestureOutcome::Idle,
            };
        }

        self.drag
            .offset_for(at)
            .map_or(GestureOutcome::Idle, GestureOutcome::DragTo)
    }

    /// Drops a contact that was lifted or lost.
    pub fn release(&mut self, pointer: PointerId, position: PanOffset) {
        let before = self.contacts.len();
        self.contacts.retain(|(id, _)| *id != pointer);
        if self.contacts.len() != before {
            self.rearm(position);
        }
    }

    /// Forgets every contact.
    pub fn reset(&mut self) {
        self.contacts.clear();
        self.drag.stop();
        self.pinch.stop();
    }

    /// Restarts the gesture matching the current contact count so the next
    /// move is measured from here.
    fn rearm(&mut self, position: PanOffset) {
        self.drag.stop();
        self.pinch.stop();
        match self.contacts.as_slice() {
            [(_, at)] => self.drag.start(*at, position),
            [(_, a), (_, b)] => self.pinch.start(pinch::distance(*a, *b)),
            _ => {}
        }
    }

    fn contact_mut(&mut self, pointer: PointerId) -> Option<&mut (PointerId, Point)> {
        self.contacts.iter_mut().find(|(id, _)| *id == pointer)
    }
}
