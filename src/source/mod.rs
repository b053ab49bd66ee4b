// SPDX-License-Identifier: MPL-2.0
//! Where gallery images come from.
//!
//! Locations are plain strings supplied by the page: either an `http`/`https`
//! URL or a filesystem path. This module classifies them, scans directories
//! for supported images, loads them for display (see [`loader`]) and keeps
//! the decoded results within a memory budget (see [`cache`]).

pub mod cache;
pub mod loader;

pub use cache::{CacheConfig, ImageCache, ImageStatus, Resolution};
pub use loader::{ImageLoader, LoadedImage};

use crate::error::Result;
use std::path::{Path, PathBuf};

/// Image file extensions the gallery accepts when scanning a directory.
pub const IMAGE_EXTENSIONS: &[&str] = &[
    "jpg", "jpeg", "png", "gif", "tiff", "tif", "webp", "bmp", "ico",
];

/// A classified image location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageLocation {
    Remote(String),
    Local(PathBuf),
}

impl ImageLocation {
    /// Classifies a location string. `http://` and `https://` prefixes
    /// (case-insensitive) are remote, anything else is a local path.
    #[must_use]
    pub fn parse(location: &str) -> Self {
        let trimmed = location.trim();
        let lower = trimmed.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            Self::Remote(trimmed.to_string())
        } else {
            Self::Local(PathBuf::from(trimmed))
        }
    }

    #[must_use]
    pub fn is_remote(&self) -> bool {
        matches!(self, Self::Remote(_))
    }
}

/// Checks if a file has a supported image extension.
#[must_use]
pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .map(str::to_lowercase)
        .is_some_and(|ext| IMAGE_EXTENSIONS.contains(&ext.as_str()))
}

/// Lists supported images in `directory`, sorted by file name
/// (case-insensitive).
///
/// Returns an error if the directory cannot be read.
pub fn scan_directory(directory: &Path) -> Result<Vec<PathBuf>> {
    let mut images = Vec::new();

    for entry in std::fs::read_dir(directory)? {
        let entry = entry?;
        let path = entry.path();

        if path.is_file() && is_supported_image(&path) {
            images.push(path);
        }
    }

    images.sort_by_cached_key(|path| {
        path.file_name()
            .map(|name| name.to_string_lossy().to_lowercase())
            .unwrap_or_default()
    });
    tracing::debug!(directory = %directory.display(), count = images.len(), "scanned image directory");

    Ok(images)
}

/// Expands command-line arguments into gallery locations.
///
/// A single directory argument is replaced by its scanned images; otherwise
/// arguments are kept verbatim and in order.
pub fn locations_from_args(args: &[String]) -> Result<Vec<String>> {
    if let [single] = args {
        let path = Path::new(single);
        if !ImageLocation::parse(single).is_remote() && path.is_dir() {
            return Ok(scan_directory(path)?
                .into_iter()
                .map(|p| p.to_string_lossy().into_owned())
                .collect());
        }
    }
    Ok(args.to_vec())
}
