// SPDX-License-Identifier: MPL-2.0
//! Ordered, non-empty list of image locations shown by the overlay.

/// Ordered image locations for one viewer session.
///
/// The list is never empty, so every index produced by the navigation helpers
/// is valid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageSet {
    locations: Vec<String>,
}

#[allow(clippy::len_without_is_empty)]
impl ImageSet {
    /// Builds a set from the given locations, or `None` when the list is empty.
    #[must_use]
    pub fn new(locations: Vec<String>) -> Option<Self> {
        if locations.is_empty() {
            None
        } else {
            Some(Self { locations })
        }
    }

    /// Number of images, always at least one.
    #[must_use]
    pub fn len(&self) -> usize {
        self.locations.len()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&str> {
        self.locations.get(index).map(String::as_str)
    }

    /// Clamps an arbitrary index to the last valid position.
    #[must_use]
    pub fn clamp_index(&self, index: usize) -> usize {
        index.min(self.len() - 1)
    }

    /// Index after `index`, wrapping to the first image.
    #[must_use]
    pub fn next_index(&self, index: usize) -> usize {
        (self.clamp_index(index) + 1) % self.len()
    }

    /// Index before `index`, wrapping to the last image.
    #[must_use]
    pub fn previous_index(&self, index: usize) -> usize {
        let len = self.len();
        (self.clamp_index(index) + len - 1) % len
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.locations.iter().map(String::as_str)
    }
}
