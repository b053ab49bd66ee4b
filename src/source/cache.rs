// SPDX-License-Identifier: MPL-2.0
//! Memory-bounded cache of decoded gallery images.
//!
//! # Design
//!
//! - **Location-keyed**: the same location is decoded once per resolution
//! - **Byte-bounded**: full-size images are evicted least recently used first
//!   once [`CacheConfig::max_bytes`] or [`CacheConfig::max_images`] is reached
//! - **Pinned image**: the image on screen is never evicted by a prefetch
//! - **Thumbnails** are small and only capped by count
//!
//! Locations being fetched or that failed are tracked next to the decoded
//! entries, so the same load is never started twice for one image set.

use super::loader::LoadedImage;
use lru::LruCache;
use std::collections::HashSet;
use std::num::NonZeroUsize;

/// Default byte budget for full-size images (128 MiB).
pub const DEFAULT_MAX_BYTES: usize = 128 * 1024 * 1024;
pub const MIN_MAX_BYTES: usize = 16 * 1024 * 1024;
pub const MAX_MAX_BYTES: usize = 1024 * 1024 * 1024;

/// Default number of full-size images kept, whatever their size.
pub const DEFAULT_MAX_IMAGES: usize = 16;
pub const MIN_MAX_IMAGES: usize = 2;
pub const MAX_MAX_IMAGES: usize = 64;

/// Thumbnails kept at most.
pub const MAX_THUMBNAILS: usize = 64;

/// Default number of full-size images loaded ahead on each side of the
/// current one.
pub const DEFAULT_PREFETCH_COUNT: usize = 2;

const _: () = {
    assert!(MIN_MAX_BYTES <= DEFAULT_MAX_BYTES && DEFAULT_MAX_BYTES <= MAX_MAX_BYTES);
    assert!(MIN_MAX_IMAGES <= DEFAULT_MAX_IMAGES && DEFAULT_MAX_IMAGES <= MAX_MAX_IMAGES);
    assert!(MAX_THUMBNAILS > 0);
};

/// Which decoded form of a location is wanted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resolution {
    /// Preview for the detail page
    Thumbnail,
    /// Display-size image for the overlay
    Full,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheConfig {
    pub max_bytes: usize,
    pub max_images: usize,
    /// Images loaded ahead in each direction (next/previous).
    pub prefetch_count: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            max_bytes: DEFAULT_MAX_BYTES,
            max_images: DEFAULT_MAX_IMAGES,
            prefetch_count: DEFAULT_PREFETCH_COUNT,
        }
    }
}

impl CacheConfig {
    /// Limits are clamped to their supported ranges.
    #[must_use]
    pub fn new(max_bytes: usize, max_images: usize, prefetch_count: usize) -> Self {
        Self {
            max_bytes: max_bytes.clamp(MIN_MAX_BYTES, MAX_MAX_BYTES),
            max_images: max_images.clamp(MIN_MAX_IMAGES, MAX_MAX_IMAGES),
            prefetch_count,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub enum ImageStatus<'a> {
    /// Never requested, or evicted since.
    Missing,
    Loading,
    Ready(&'a LoadedImage),
    Failed,
}

pub struct ImageCache {
    full: LruCache<String, LoadedImage>,
    thumbnails: LruCache<String, LoadedImage>,
    full_bytes: usize,
    in_flight: HashSet<(Resolution, String)>,
    failed: HashSet<(Resolution, String)>,
    pinned: Option<String>,
    config: CacheConfig,
}

impl ImageCache {
    #[must_use]
    pub fn new(config: CacheConfig) -> Self {
        Self {
            full: LruCache::new(non_zero(config.max_images)),
            thumbnails: LruCache::new(non_zero(MAX_THUMBNAILS)),
            full_bytes: 0,
            in_flight: HashSet::new(),
            failed: HashSet::new(),
            pinned: None,
            config,
        }
    }

    #[must_use]
    pub fn prefetch_count(&self) -> usize {
        self.config.prefetch_count
    }

    /// Current state of `location` at `resolution`. Does not touch the LRU
    /// order, so views can call it freely.
    #[must_use]
    pub fn status(&self, resolution: Resolution, location: &str) -> ImageStatus<'_> {
        if let Some(image) = self.entries(resolution).peek(location) {
            return ImageStatus::Ready(image);
        }
        let key = (resolution, location.to_string());
        if self.in_flight.contains(&key) {
            ImageStatus::Loading
        } else if self.failed.contains(&key) {
            ImageStatus::Failed
        } else {
            ImageStatus::Missing
        }
    }

    #[must_use]
    pub fn get(&self, resolution: Resolution, location: &str) -> Option<&LoadedImage> {
        self.entries(resolution).peek(location)
    }

    /// Marks `location` as loading and returns `true` when the caller should
    /// start the load. Cached entries are refreshed in the LRU order instead;
    /// loads in flight and known failures are not repeated.
    pub fn begin_load(&mut self, resolution: Resolution, location: &str) -> bool {
        let entries = self.entries_mut(resolution);
        if entries.contains(location) {
            entries.promote(location);
            return false;
        }
        let key = (resolution, location.to_string());
        if self.failed.contains(&key) {
            return false;
        }
        self.in_flight.insert(key)
    }

    /// Records the outcome of a load started with [`begin_load`](Self::begin_load).
    /// `None` marks the location as failed.
    pub fn store(&mut self, resolution: Resolution, location: String, result: Option<LoadedImage>) {
        let key = (resolution, location);
        self.in_flight.remove(&key);
        let (resolution, location) = key;

        match (resolution, result) {
            (_, None) => {
                self.failed.insert((resolution, location));
            }
            (Resolution::Thumbnail, Some(image)) => {
                self.thumbnails.put(location, image);
            }
            (Resolution::Full, Some(image)) => self.insert_full(location, image),
        }
    }

    /// Keeps `location` (the image on screen) out of eviction.
    pub fn pin(&mut self, location: Option<&str>) {
        self.pinned = location.map(str::to_string);
        if let Some(pinned) = location {
            self.full.promote(pinned);
        }
    }

    /// Forgets loads in flight and failures of a replaced image set. Decoded
    /// entries stay, since locations may repeat across sets.
    pub fn forget_pending(&mut self) {
        self.in_flight.clear();
        self.failed.clear();
        self.pinned = None;
    }

    /// Loads started but not finished.
    #[must_use]
    pub fn pending(&self, resolution: Resolution) -> usize {
        self.in_flight.iter().filter(|(r, _)| *r == resolution).count()
    }

    /// Number of full-size images held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.full.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.full.is_empty() && self.thumbnails.is_empty()
    }

    /// Bytes held by full-size images.
    #[must_use]
    pub fn memory_usage(&self) -> usize {
        self.full_bytes
    }

    fn insert_full(&mut self, location: String, image: LoadedImage) {
        if let Some(previous) = self.full.pop(&location) {
            self.full_bytes = self.full_bytes.saturating_sub(previous.byte_size());
        }
        if let Some(pinned) = self.pinned.as_deref() {
            self.full.promote(pinned);
        }

        // The pinned entry is most recent, so it is only the LRU when alone
        let size = image.byte_size();
        while self.full_bytes + size > self.config.max_bytes {
            match self.full.peek_lru() {
                Some((key, _)) if self.pinned.as_deref() != Some(key.as_str()) => {}
                _ => break,
            }
            if let Some((evicted, old)) = self.full.pop_lru() {
                self.full_bytes = self.full_bytes.saturating_sub(old.byte_size());
                tracing::trace!(location = %evicted, "evicted image to stay within budget");
            }
        }

        self.full_bytes += size;
        if let Some((evicted, old)) = self.full.push(location, image) {
            self.full_bytes = self.full_bytes.saturating_sub(old.byte_size());
            tracing::trace!(location = %evicted, "evicted image over the entry cap");
        }
    }

    fn entries(&self, resolution: Resolution) -> &LruCache<String, LoadedImage> {
        match resolution {
            Resolution::Thumbnail => &self.thumbnails,
            Resolution::Full => &self.full,
        }
    }

    fn entries_mut(&mut self, resolution: Resolution) -> &mut LruCache<String, LoadedImage> {
        match resolution {
            Resolution::Thumbnail => &mut self.thumbnails,
            Resolution::Full => &mut self.full,
        }
    }
}

impl Default for ImageCache {
    fn default() -> Self {
        Self::new(CacheConfig::default())
    }
}

impl std::fmt::Debug for ImageCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageCache")
            .field("images", &self.full.len())
            .field("thumbnails", &self.thumbnails.len())
            .field("memory_usage", &self.full_bytes)
            .field("in_flight", &self.in_flight.len())
            .field("failed", &self.failed.len())
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

fn non_zero(value: usize) -> NonZeroUsize {
    NonZeroUsize::new(value).unwrap_or(NonZeroUsize::MIN)
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::widget::image;

    const MIB: usize = 1024 * 1024;

    /// Declared size drives the byte accounting; pixels stay tiny.
    fn sized(width: u32, height: u32) -> LoadedImage {
        LoadedImage {
            handle: image::Handle::from_rgba(1, 1, vec![0, 0, 0, 255]),
            width,
            height,
        }
    }

    fn small_cache() -> ImageCache {
        ImageCache::new(CacheConfig::new(16 * MIB, 8, 1))
    }

    fn load(cache: &mut ImageCache, location: &str, image: LoadedImage) {
        cache.begin_load(Resolution::Full, location);
        cache.store(Resolution::Full, location.to_string(), Some(image));
    }

    #[test]
    fn config_limits_are_clamped() {
        let config = CacheConfig::new(0, 1000, 3);
        assert_eq!(config.max_bytes, MIN_MAX_BYTES);
        assert_eq!(config.max_images, MAX_MAX_IMAGES);
        assert_eq!(config.prefetch_count, 3);
    }

    #[test]
    fn begin_load_starts_each_location_once() {
        let mut cache = ImageCache::default();
        assert!(cache.begin_load(Resolution::Full, "a.png"));
        assert!(!cache.begin_load(Resolution::Full, "a.png"));
        assert!(cache.begin_load(Resolution::Thumbnail, "a.png"));
        assert!(matches!(cache.status(Resolution::Full, "a.png"), ImageStatus::Loading));
        assert_eq!(cache.pending(Resolution::Full), 1);

        cache.store(Resolution::Full, "a.png".into(), Some(sized(2, 2)));
        assert!(!cache.begin_load(Resolution::Full, "a.png"));
        assert_eq!(cache.pending(Resolution::Full), 0);
    }

    #[test]
    fn failures_are_not_retried_until_forgotten() {
        let mut cache = ImageCache::default();
        cache.begin_load(Resolution::Full, "broken.png");
        cache.store(Resolution::Full, "broken.png".into(), None);

        assert!(matches!(cache.status(Resolution::Full, "broken.png"), ImageStatus::Failed));
        assert!(!cache.begin_load(Resolution::Full, "broken.png"));

        cache.forget_pending();
        assert!(matches!(cache.status(Resolution::Full, "broken.png"), ImageStatus::Missing));
        assert!(cache.begin_load(Resolution::Full, "broken.png"));
    }

    #[test]
    fn least_recently_used_is_evicted_over_budget() {
        let mut cache = small_cache();
        // 4 MiB each, budget 16 MiB
        for name in ["a", "b", "c", "d"] {
            load(&mut cache, name, sized(1024, 1024));
        }
        assert_eq!(cache.memory_usage(), 16 * MIB);

        cache.begin_load(Resolution::Full, "a");
        load(&mut cache, "e", sized(1024, 1024));

        assert_eq!(cache.memory_usage(), 16 * MIB);
        assert!(cache.get(Resolution::Full, "a").is_some());
        assert!(cache.get(Resolution::Full, "b").is_none());
        assert!(cache.get(Resolution::Full, "e").is_some());
    }

    #[test]
    fn entry_cap_applies_to_small_images() {
        let mut cache = small_cache();
        for i in 0..20 {
            load(&mut cache, &format!("{i}.png"), sized(8, 8));
        }
        assert_eq!(cache.len(), 8);
        assert_eq!(cache.memory_usage(), 8 * 8 * 8 * 4);
    }

    #[test]
    fn pinned_image_survives_prefetches() {
        let mut cache = small_cache();
        load(&mut cache, "current", sized(1024, 2048));
        cache.pin(Some("current"));

        for name in ["n1", "n2", "n3", "n4"] {
            load(&mut cache, name, sized(1024, 1024));
        }

        assert!(cache.get(Resolution::Full, "current").is_some());
        assert!(cache.memory_usage() <= 16 * MIB);
    }

    #[test]
    fn oversized_image_replaces_everything_else() {
        let mut cache = small_cache();
        load(&mut cache, "small", sized(512, 512));
        load(&mut cache, "huge", sized(4096, 4096));

        assert_eq!(cache.len(), 1);
        assert!(cache.get(Resolution::Full, "huge").is_some());
    }

    #[test]
    fn thumbnails_do_not_use_the_byte_budget() {
        let mut cache = small_cache();
        cache.begin_load(Resolution::Thumbnail, "a.png");
        cache.store(Resolution::Thumbnail, "a.png".into(), Some(sized(160, 120)));

        assert!(matches!(cache.status(Resolution::Thumbnail, "a.png"), ImageStatus::Ready(_)));
        assert!(matches!(cache.status(Resolution::Full, "a.png"), ImageStatus::Missing));
        assert_eq!(cache.memory_usage(), 0);
    }
}
