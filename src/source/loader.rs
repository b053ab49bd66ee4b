// SPDX-License-Identifier: MPL-2.0
//! Asynchronous image loading and decoding.

use super::cache::Resolution;
use super::ImageLocation;
use crate::error::{Error, Result};
use iced::widget::image;

const USER_AGENT: &str = concat!("IcedLightbox/", env!("CARGO_PKG_VERSION"));
const MAX_REDIRECTS: usize = 10;

/// Longest edge of a full-size image once decoded; larger sources are
/// downscaled so one image stays under 64 MiB of RGBA.
pub const MAX_DISPLAY_EDGE: u32 = 4096;

/// A decoded image ready for display.
#[derive(Debug, Clone)]
pub struct LoadedImage {
    pub handle: image::Handle,
    pub width: u32,
    pub height: u32,
}

impl LoadedImage {
    /// Size of the RGBA pixels.
    #[must_use]
    pub fn byte_size(&self) -> usize {
        self.width as usize * self.height as usize * 4
    }
}

/// Reads and decodes images. Cloning is cheap and every clone shares one
/// HTTP connection pool.
#[derive(Debug, Clone)]
pub struct ImageLoader {
    /// `None` when no client could be built; remote loads then fail.
    http: Option<reqwest::Client>,
    thumbnail_edge: u32,
}

impl ImageLoader {
    #[must_use]
    pub fn new(thumbnail_edge: u32) -> Self {
        let http = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECTS))
            .user_agent(USER_AGENT)
            .build()
            .inspect_err(|error| tracing::warn!(%error, "HTTP client unavailable, remote images will not load"))
            .ok();
        Self {
            http,
            thumbnail_edge: thumbnail_edge.max(1),
        }
    }

    /// Reads `location` and decodes it at `resolution`. Decoding runs on the
    /// blocking thread pool.
    pub async fn load(&self, location: &str, resolution: Resolution) -> Result<LoadedImage> {
        let bytes = match ImageLocation::parse(location) {
            ImageLocation::Remote(url) => self.fetch_remote(&url).await?,
            ImageLocation::Local(path) => tokio::fs::read(&path).await?,
        };

        let max_edge = match resolution {
            Resolution::Thumbnail => self.thumbnail_edge,
            Resolution::Full => MAX_DISPLAY_EDGE,
        };
        let loaded = tokio::task::spawn_blocking(move || decode(&bytes, max_edge))
            .await
            .map_err(|e| Error::Io(format!("decode task failed: {e}")))??;

        tracing::debug!(
            location,
            ?resolution,
            width = loaded.width,
            height = loaded.height,
            "image loaded"
        );
        Ok(loaded)
    }

    async fn fetch_remote(&self, url: &str) -> Result<Vec<u8>> {
        let http = self
            .http
            .as_ref()
            .ok_or_else(|| Error::Network("no HTTP client".into()))?;

        let response = http
            .get(url)
            .send()
            .await
            .map_err(|e| Error::Network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(Error::Network(format!("HTTP status: {}", response.status())));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| Error::Network(e.to_string()))?;
        Ok(bytes.to_vec())
    }
}

/// Decodes encoded image bytes into an RGBA display handle, downscaled to fit
/// a `max_edge` square when larger.
pub fn decode(bytes: &[u8], max_edge: u32) -> Result<LoadedImage> {
    let mut decoded = image_rs::load_from_memory(bytes)?;
    if decoded.width() > max_edge || decoded.height() > max_edge {
        decoded = decoded.thumbnail(max_edge, max_edge);
    }

    let rgba = decoded.to_rgba8();
    let (width, height) = rgba.dimensions();
    Ok(LoadedImage {
        handle: image::Handle::from_rgba(width, height, rgba.into_raw()),
        width,
        height,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use image_rs::{ImageFormat, Rgba, RgbaImage};
    use std::io::Cursor;
    use tempfile::tempdir;

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let img = RgbaImage::from_pixel(width, height, Rgba([200, 40, 40, 255]));
        let mut out = Cursor::new(Vec::new());
        img.write_to(&mut out, ImageFormat::Png)
            .expect("failed to encode png");
        out.into_inner()
    }

    #[test]
    fn decode_reports_dimensions() {
        let loaded = decode(&png_bytes(4, 2), MAX_DISPLAY_EDGE).expect("png should decode");
        assert_eq!((loaded.width, loaded.height), (4, 2));
        assert_eq!(loaded.byte_size(), 32);
    }

    #[test]
    fn decode_downscales_to_fit_keeping_aspect() {
        let loaded = decode(&png_bytes(64, 32), 16).expect("png should decode");
        assert_eq!((loaded.width, loaded.height), (16, 8));
    }

    #[test]
    fn decode_rejects_garbage() {
        let result = decode(b"not an image", MAX_DISPLAY_EDGE);
        assert!(matches!(result, Err(Error::Decode(_))));
    }

    #[tokio::test]
    async fn load_reads_local_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("pixel.png");
        std::fs::write(&path, png_bytes(3, 3)).expect("failed to write png");

        let loaded = ImageLoader::new(160)
            .load(&path.to_string_lossy(), Resolution::Full)
            .await
            .expect("local image should load");

        assert_eq!(loaded.width, 3);
    }

    #[tokio::test]
    async fn thumbnail_load_is_downscaled() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("wide.png");
        std::fs::write(&path, png_bytes(400, 200)).expect("failed to write png");

        let loaded = ImageLoader::new(100)
            .load(&path.to_string_lossy(), Resolution::Thumbnail)
            .await
            .expect("local image should load");

        assert_eq!((loaded.width, loaded.height), (100, 50));
    }

    #[tokio::test]
    async fn load_missing_file_is_io_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("missing.png");

        let result = ImageLoader::new(160)
            .load(&path.to_string_lossy(), Resolution::Full)
            .await;

        assert!(matches!(result, Err(Error::Io(_))));
    }
}
