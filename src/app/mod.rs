// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the detail page, the
//! gallery overlay and toast notifications.
//!
//! The [`App`] struct wires together the domains (image sources, backend,
//! localization, overlay state machine) and translates messages into state
//! changes. This file intentionally keeps policy decisions (e.g., when a load
//! error is surfaced or discarded) close to the main update loop so it is easy
//! to audit user-facing behavior.

pub mod message;
pub mod subscription;

pub use message::{Flags, Message};

use crate::backend::{ContentClient, ContentDetail, SessionContext, DEFAULT_DEVICE_ID};
use crate::config::{self, BackgroundTheme};
use crate::error::Result;
use crate::gallery::{Effect, GalleryOverlay, ImageSet, Input, PointerId};
use crate::i18n::fluent::I18n;
use crate::source::{ImageCache, ImageLoader, LoadedImage, Resolution};
use crate::ui::detail_view;
use crate::ui::gallery_view;
use crate::ui::notifications::{self, Notification, Toast};
use crate::ui::theming::{OverlayColors, ThemeMode};
use iced::widget::Stack;
use iced::{window, Element, Length, Point, Subscription, Task, Theme};

pub const WINDOW_DEFAULT_WIDTH: u32 = 1024;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 720;
pub const MIN_WINDOW_WIDTH: u32 = 480;
pub const MIN_WINDOW_HEIGHT: u32 = 360;

/// Root Iced application state that bridges UI components, localization, and
/// image loading.
pub struct App {
    pub i18n: I18n,
    theme_mode: ThemeMode,
    background_theme: BackgroundTheme,
    thumbnail_size: u32,
    /// Detail page title; `None` falls back to a localized default.
    title: Option<String>,
    /// `None` while the page has no images (empty state).
    gallery: Option<GalleryOverlay>,
    cache: ImageCache,
    loader: ImageLoader,
    /// Bumped whenever the image set is replaced so late loads are dropped.
    generation: u64,
    locked_count: u32,
    badge: Option<String>,
    /// Last mouse position seen while the overlay was open.
    cursor: Option<Point>,
    notifications: notifications::Manager,
}

impl std::fmt::Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App")
            .field("title", &self.title)
            .field("gallery", &self.gallery)
            .field("generation", &self.generation)
            .field("locked_count", &self.locked_count)
            .finish_non_exhaustive()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    // iced requires an `Fn` boot closure, so each call gets its own copy.
    let boot = move || App::new(flags.clone());

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            theme_mode: ThemeMode::System,
            background_theme: BackgroundTheme::default(),
            thumbnail_size: config::DEFAULT_THUMBNAIL_SIZE,
            title: None,
            gallery: None,
            cache: ImageCache::default(),
            loader: ImageLoader::new(config::DEFAULT_THUMBNAIL_SIZE),
            generation: 0,
            locked_count: 0,
            badge: None,
            cursor: None,
            notifications: notifications::Manager::new(),
        }
    }
}

impl App {
    /// Initializes application state and kicks off the first load, either a
    /// backend detail fetch or the images given on the command line.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), &config);

        let mut app = App {
            i18n,
            theme_mode: config.general.theme_mode,
            background_theme: config.display.background_theme.unwrap_or_default(),
            thumbnail_size: config.display.thumbnail_size(),
            loader: ImageLoader::new(config.display.thumbnail_size()),
            title: flags.title.clone(),
            ..Self::default()
        };

        if let Some(key) = config_warning {
            app.notifications.push(Notification::warning(&key));
        }

        let task = match flags.content_id.clone() {
            Some(content_id) => {
                let base_url = flags.backend_url.clone().or(config.backend.base_url.clone());
                let device_id = config
                    .backend
                    .device_id
                    .clone()
                    .unwrap_or_else(|| DEFAULT_DEVICE_ID.to_string());
                match base_url {
                    Some(base_url) => {
                        let session = SessionContext::new(base_url, device_id)
                            .with_access_token(flags.access_token.clone());
                        app.fetch_detail(session, content_id)
                    }
                    None => {
                        tracing::warn!(%content_id, "no backend URL configured");
                        app.notifications
                            .push(Notification::warning("notification-backend-missing-url"));
                        Task::none()
                    }
                }
            }
            None => app.load_images(flags.locations.clone()),
        };

        (app, task)
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        format!("{} - {}", self.page_title(), app_name)
    }

    fn page_title(&self) -> String {
        self.title
            .clone()
            .unwrap_or_else(|| self.i18n.tr("detail-default-title"))
    }

    fn theme(&self) -> Theme {
        self.theme_mode.iced_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        let event_sub = subscription::create_event_subscription(self.is_overlay_open());
        let tick_sub =
            subscription::create_tick_subscription(self.notifications.has_notifications());

        Subscription::batch([event_sub, tick_sub])
    }

    #[must_use]
    pub fn is_overlay_open(&self) -> bool {
        self.gallery.as_ref().is_some_and(GalleryOverlay::is_open)
    }

    #[must_use]
    pub fn gallery(&self) -> Option<&GalleryOverlay> {
        self.gallery.as_ref()
    }

    #[must_use]
    pub fn notifications(&self) -> &notifications::Manager {
        &self.notifications
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Detail(detail_message) => {
                let detail_view::Event::OpenAt(index) = detail_view::update(&detail_message);
                match self.gallery.as_mut() {
                    Some(gallery) => {
                        let effect = gallery.open(index);
                        self.apply_effect(effect)
                    }
                    None => Task::none(),
                }
            }
            Message::Gallery(gallery_message) => match self.gallery.as_mut() {
                Some(gallery) => {
                    let effect = gallery_view::update(gallery, gallery_message);
                    self.apply_effect(effect)
                }
                None => Task::none(),
            },
            Message::Input(input) => {
                if let Input::PointerMoved {
                    pointer: PointerId::Mouse,
                    position,
                } = input
                {
                    self.cursor = Some(position);
                }
                self.handle_input(input)
            }
            Message::MousePressed => match self.cursor {
                Some(position) => self.handle_input(Input::PointerPressed {
                    pointer: PointerId::Mouse,
                    position,
                }),
                None => Task::none(),
            },
            Message::Notification(notification_message) => {
                self.notifications.handle_message(&notification_message);
                Task::none()
            }
            Message::ImageLoaded {
                generation,
                location,
                resolution,
                result,
            } => {
                self.handle_image_loaded(generation, location, resolution, result);
                Task::none()
            }
            Message::DetailFetched(result) => self.handle_detail_fetched(result),
            Message::Tick(_instant) => {
                self.notifications.tick();
                Task::none()
            }
        }
    }

    fn handle_input(&mut self, input: Input) -> Task<Message> {
        match self.gallery.as_mut() {
            Some(gallery) => {
                let effect = gallery.handle_input(input);
                self.apply_effect(effect)
            }
            None => Task::none(),
        }
    }

    fn apply_effect(&mut self, effect: Effect) -> Task<Message> {
        if let Some(view) = self.gallery.as_ref().and_then(GalleryOverlay::view_state) {
            tracing::trace!(
                ?effect,
                index = view.current_index(),
                zoom = view.zoom().value(),
                "overlay changed"
            );
        }

        match effect {
            Effect::Closed => {
                self.cursor = None;
                self.cache.pin(None);
                self.notifications.clear_load_errors();
                Task::none()
            }
            Effect::Navigated => self.prefetch_around_current(),
            Effect::ZoomChanged | Effect::Panned | Effect::None => Task::none(),
        }
    }

    fn handle_image_loaded(
        &mut self,
        generation: u64,
        location: String,
        resolution: Resolution,
        result: Result<LoadedImage>,
    ) {
        if generation != self.generation {
            tracing::debug!(generation, %location, "dropping image from a replaced set");
            return;
        }

        match result {
            Ok(image) => self.cache.store(resolution, location, Some(image)),
            Err(error) => {
                tracing::warn!(%location, ?resolution, %error, "image failed to load");
                self.cache.store(resolution, location, None);
                // Thumbnails fall back to a placeholder glyph without a toast
                if resolution == Resolution::Full {
                    self.notifications.push(Notification::from_error(&error));
                }
            }
        }
    }

    /// Starts loading `location` unless it is cached, loading or known to fail.
    fn request(&mut self, location: &str, resolution: Resolution) -> Option<Task<Message>> {
        if !self.cache.begin_load(resolution, location) {
            return None;
        }

        let loader = self.loader.clone();
        let generation = self.generation;
        let location = location.to_string();
        Some(Task::perform(
            async move {
                let result = loader.load(&location, resolution).await;
                (location, result)
            },
            move |(location, result)| Message::ImageLoaded {
                generation,
                location,
                resolution,
                result,
            },
        ))
    }

    /// Loads the image on screen first, then its neighbours on both sides.
    fn prefetch_around_current(&mut self) -> Task<Message> {
        let Some(gallery) = self.gallery.as_ref() else {
            return Task::none();
        };
        let Some(view) = gallery.view_state() else {
            return Task::none();
        };

        let images = gallery.images();
        let locations: Vec<String> =
            prefetch_order(images.len(), view.current_index(), self.cache.prefetch_count())
                .into_iter()
                .filter_map(|index| images.get(index).map(str::to_string))
                .collect();

        self.cache.pin(locations.first().map(String::as_str));
        let loads: Vec<Task<Message>> = locations
            .iter()
            .filter_map(|location| self.request(location, Resolution::Full))
            .collect();
        Task::batch(loads)
    }

    fn handle_detail_fetched(&mut self, result: Result<ContentDetail>) -> Task<Message> {
        match result {
            Ok(detail) => {
                tracing::info!(
                    id = %detail.id,
                    images = detail.images.len(),
                    locked = detail.locked_count,
                    "content detail loaded"
                );
                self.title = Some(detail.title);
                self.locked_count = detail.locked_count;
                self.badge = detail.badge.filter(|badge| !badge.is_empty());
                self.load_images(detail.images)
            }
            Err(error) => {
                self.notifications.push(Notification::from_error(&error));
                Task::none()
            }
        }
    }

    fn fetch_detail(&mut self, session: SessionContext, content_id: String) -> Task<Message> {
        match ContentClient::new(session) {
            Ok(client) => Task::perform(
                async move { client.fetch_detail(&content_id).await },
                Message::DetailFetched,
            ),
            Err(error) => {
                self.notifications.push(Notification::from_error(&error));
                Task::none()
            }
        }
    }

    /// Replaces the image set and loads the thumbnails the detail page
    /// shows. Full-size images are loaded once the overlay opens.
    ///
    /// An empty list leaves the page in its empty state.
    fn load_images(&mut self, locations: Vec<String>) -> Task<Message> {
        self.generation = self.generation.wrapping_add(1);
        self.cursor = None;
        self.cache.forget_pending();

        let Some(images) = ImageSet::new(locations) else {
            self.gallery = None;
            return Task::none();
        };

        let thumbnails: Vec<String> = images
            .iter()
            .take(detail_view::THUMBNAIL_ROW_LIMIT)
            .map(str::to_string)
            .collect();
        self.gallery = Some(GalleryOverlay::new(images));

        let loads: Vec<Task<Message>> = thumbnails
            .iter()
            .filter_map(|location| self.request(location, Resolution::Thumbnail))
            .collect();
        Task::batch(loads)
    }

    fn view(&self) -> Element<'_, Message> {
        let page: Element<'_, Message> = match self
            .gallery
            .as_ref()
            .and_then(|gallery| gallery.view_state().map(|view| (gallery, view)))
        {
            Some((gallery, view_state)) => gallery_view::view(gallery_view::ViewContext {
                i18n: &self.i18n,
                overlay: gallery,
                view_state,
                cache: &self.cache,
                colors: OverlayColors::for_background(self.background_theme),
            })
            .map(Message::Gallery),
            None => {
                let title = self.page_title();
                detail_view::view(detail_view::ViewContext {
                    i18n: &self.i18n,
                    title,
                    images: self.gallery.as_ref().map(GalleryOverlay::images),
                    cache: &self.cache,
                    locked_count: self.locked_count,
                    badge: self.badge.as_deref(),
                    thumbnail_size: self.thumbnail_size,
                })
                .map(Message::Detail)
            }
        };

        let toasts = Toast::view_overlay(&self.notifications, &self.i18n).map(Message::Notification);

        Stack::new()
            .width(Length::Fill)
            .height(Length::Fill)
            .push(page)
            .push(toasts)
            .into()
    }
}

/// Indices to load around `current`: the current one, then alternating
/// next/previous neighbours up to `count` steps away, wrapping, without
/// repeats.
fn prefetch_order(len: usize, current: usize, count: usize) -> Vec<usize> {
    if len == 0 {
        return Vec::new();
    }

    let current = current.min(len - 1);
    let mut order = vec![current];
    for step in 1..=count.min(len) {
        for index in [(current + step) % len, (current + len - step % len) % len] {
            if !order.contains(&index) {
                order.push(index);
            }
        }
    }
    order
}
