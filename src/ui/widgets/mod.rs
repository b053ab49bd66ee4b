// SPDX-License-Identifier: MPL-2.0
pub mod zoomable_image;

pub use zoomable_image::ZoomableImage;
