// SPDX-License-Identifier: MPL-2.0
//! Test utilities for float comparisons and gallery fixtures.
//!
//! Float assertions come from the `approx` crate, which handles precision
//! issues that `assert_eq!` cannot.

pub use approx::assert_abs_diff_eq;

use crate::gallery::{GalleryOverlay, ImageSet};

/// Image set of `count` placeholder locations named `image-<i>.png`.
pub fn image_set(count: usize) -> ImageSet {
    ImageSet::new((0..count).map(|i| format!("image-{i}.png")).collect())
        .expect("fixture needs at least one image")
}

/// Closed overlay over [`image_set`].
pub fn overlay_with(count: usize) -> GalleryOverlay {
    GalleryOverlay::new(image_set(count))
}
