// SPDX-License-Identifier: MPL-2.0
//! Image gallery overlay core.
//!
//! A pure, synchronous state machine: an [`ImageSet`] is shown one image at a
//! time by a [`GalleryOverlay`], which interprets raw [`Input`] events into
//! navigation, stepped zoom and clamped panning. No I/O happens here.
//!
//! # Examples
//!
//! ```
//! use iced_lightbox::gallery::{Effect, GalleryOverlay, ImageSet, Input, Key};
//!
//! let images = ImageSet::new(vec!["a.png".into(), "b.png".into()]).unwrap();
//! let mut overlay = GalleryOverlay::new(images);
//!
//! overlay.open(0);
//! assert_eq!(overlay.handle_input(Input::Key(Key::ArrowRight)), Effect::Navigated);
//! assert_eq!(overlay.current_image(), Some("b.png"));
//! ```

pub mod gesture;
pub mod image_set;
pub mod input;
pub mod overlay;
pub mod position;
pub mod view_state;
pub mod zoom;

pub use gesture::{DragState, GestureState, PinchState, PinchStep};
pub use image_set::ImageSet;
pub use input::{Effect, Input, Key, PointerId};
pub use overlay::{GalleryOverlay, OverlayState};
pub use position::PanOffset;
pub use view_state::ViewState;
pub use zoom::ZoomLevel;
