// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! While the overlay is open, native keyboard, wheel, mouse and touch events
//! are translated into gallery [`Input`] values. Events already captured by a
//! widget (e.g. a press on an overlay button) are dropped, except releases,
//! so a drag that ends over a control still terminates.

use super::Message;
use crate::gallery::{Input, Key, PointerId};
use iced::keyboard::{self, key::Named};
use iced::mouse::{self, ScrollDelta};
use iced::{event, time, touch, Event, Subscription};
use std::time::Duration;

/// Input routing for the gallery overlay; inactive while it is closed.
pub fn create_event_subscription(overlay_open: bool) -> Subscription<Message> {
    if !overlay_open {
        return Subscription::none();
    }

    event::listen_with(|event, status, _window_id| route_event(&event, status))
}

/// Periodic tick used to auto-dismiss toasts, only while any exist.
pub fn create_tick_subscription(has_notifications: bool) -> Subscription<Message> {
    if has_notifications {
        time::every(Duration::from_millis(100)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}

/// Maps a native event to an application message.
pub fn route_event(event: &Event, status: event::Status) -> Option<Message> {
    let message = match event {
        Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => Message::MousePressed,
        other => Message::Input(map_input(other)?),
    };

    match status {
        event::Status::Ignored => Some(message),
        event::Status::Captured if is_release(&message) => Some(message),
        event::Status::Captured => None,
    }
}

/// Translates keyboard, wheel, cursor and touch events into gallery input.
///
/// Left button presses are not handled here since mouse button events carry
/// no position.
#[must_use]
pub fn map_input(event: &Event) -> Option<Input> {
    match event {
        Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) => map_key(key).map(Input::Key),
        Event::Mouse(mouse_event) => match mouse_event {
            mouse::Event::WheelScrolled { delta } => {
                let delta_y = match delta {
                    ScrollDelta::Lines { y, .. } | ScrollDelta::Pixels { y, .. } => *y,
                };
                Some(Input::Wheel { delta_y })
            }
            mouse::Event::CursorMoved { position } => Some(Input::PointerMoved {
                pointer: PointerId::Mouse,
                position: *position,
            }),
            mouse::Event::ButtonReleased(mouse::Button::Left) => Some(Input::PointerReleased {
                pointer: PointerId::Mouse,
            }),
            mouse::Event::CursorLeft => Some(Input::PointerLost {
                pointer: PointerId::Mouse,
            }),
            _ => None,
        },
        Event::Touch(touch_event) => Some(match touch_event {
            touch::Event::FingerPressed { id, position } => Input::PointerPressed {
                pointer: PointerId::Touch(id.0),
                position: *position,
            },
            touch::Event::FingerMoved { id, position } => Input::PointerMoved {
                pointer: PointerId::Touch(id.0),
                position: *position,
            },
            touch::Event::FingerLifted { id, .. } => Input::PointerReleased {
                pointer: PointerId::Touch(id.0),
            },
            touch::Event::FingerLost { id, .. } => Input::PointerLost {
                pointer: PointerId::Touch(id.0),
            },
        }),
        _ => None,
    }
}

fn map_key(key: &keyboard::Key) -> Option<Key> {
    match key {
        keyboard::Key::Named(Named::ArrowLeft) => Some(Key::ArrowLeft),
        keyboard::Key::Named(Named::ArrowRight) => Some(Key::ArrowRight),
        keyboard::Key::Named(Named::ArrowUp) => Some(Key::ArrowUp),
        keyboard::Key::Named(Named::ArrowDown) => Some(Key::ArrowDown),
        keyboard::Key::Named(Named::Escape) => Some(Key::Escape),
        keyboard::Key::Character(c) => Key::from_character(c.as_str()),
        _ => None,
    }
}

fn is_release(message: &Message) -> bool {
    matches!(
        message,
        Message::Input(Input::PointerReleased { .. } | Input::PointerLost { .. })
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::Point;

    #[test]
    fn arrows_and_escape_map_to_keys() {
        assert_eq!(
            map_key(&keyboard::Key::Named(Named::ArrowLeft)),
            Some(Key::ArrowLeft)
        );
        assert_eq!(map_key(&keyboard::Key::Named(Named::Escape)), Some(Key::Escape));
        assert_eq!(map_key(&keyboard::Key::Named(Named::Enter)), None);
    }

    #[test]
    fn zoom_characters_map_to_keys() {
        assert_eq!(map_key(&keyboard::Key::Character("=".into())), Some(Key::ZoomIn));
        assert_eq!(map_key(&keyboard::Key::Character("0".into())), Some(Key::ResetZoom));
        assert_eq!(map_key(&keyboard::Key::Character("q".into())), None);
    }

    #[test]
    fn wheel_reports_vertical_delta() {
        let event = Event::Mouse(mouse::Event::WheelScrolled {
            delta: ScrollDelta::Pixels { x: 3.0, y: -12.0 },
        });
        assert_eq!(map_input(&event), Some(Input::Wheel { delta_y: -12.0 }));
    }

    #[test]
    fn touch_fingers_keep_their_identity() {
        let event = Event::Touch(touch::Event::FingerPressed {
            id: touch::Finger(7),
            position: Point::new(10.0, 20.0),
        });
        assert_eq!(
            map_input(&event),
            Some(Input::PointerPressed {
                pointer: PointerId::Touch(7),
                position: Point::new(10.0, 20.0),
            })
        );
    }

    #[test]
    fn captured_press_is_dropped() {
        let event = Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left));
        assert!(route_event(&event, event::Status::Captured).is_none());
        assert!(matches!(
            route_event(&event, event::Status::Ignored),
            Some(Message::MousePressed)
        ));
    }

    #[test]
    fn captured_release_still_ends_gestures() {
        let event = Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left));
        assert!(matches!(
            route_event(&event, event::Status::Captured),
            Some(Message::Input(Input::PointerReleased {
                pointer: PointerId::Mouse
            }))
        ));
    }
}
