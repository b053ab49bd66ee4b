// SPDX-License-Identifier: MPL-2.0
//! Raw input events understood by the overlay, and their outcomes.
//!
//! The application layer translates toolkit events into [`Input`] values; the
//! overlay turns them into state transitions and reports an [`Effect`].

use iced::Point;

/// Keys the overlay reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
    Escape,
    /// `+` or `=`
    ZoomIn,
    /// `-`
    ZoomOut,
    /// `0`
    ResetZoom,
}

impl Key {
    /// Maps a typed character to a key, for keyboards that report text.
    #[must_use]
    pub fn from_character(c: &str) -> Option<Self> {
        match c {
            "+" | "=" => Some(Self::ZoomIn),
            "-" => Some(Self::ZoomOut),
            "0" => Some(Self::ResetZoom),
            _ => None,
        }
    }
}

/// Identity of a pointing contact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerId {
    Mouse,
    Touch(u64),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Input {
    Key(Key),
    /// Vertical wheel delta; positive scrolls up.
    Wheel { delta_y: f32 },
    PointerPressed { pointer: PointerId, position: Point },
    PointerMoved { pointer: PointerId, position: Point },
    PointerReleased { pointer: PointerId },
    /// Contact vanished without a release (e.g. touch cancelled).
    PointerLost { pointer: PointerId },
}

/// Observable outcome of an overlay operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Effect {
    #[default]
    None,
    /// Another image is now displayed (or the overlay was just opened).
    Navigated,
    ZoomChanged,
    Panned,
    Closed,
}
