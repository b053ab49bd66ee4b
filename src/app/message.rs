// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::backend::ContentDetail;
use crate::error::Error;
use crate::gallery::Input;
use crate::source::{LoadedImage, Resolution};
use crate::ui::detail_view;
use crate::ui::gallery_view;
use crate::ui::notifications;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Detail(detail_view::Message),
    Gallery(gallery_view::Message),
    /// Keyboard, wheel or pointer input routed to the open overlay.
    Input(Input),
    /// Left mouse button pressed; the position comes from the last cursor move.
    MousePressed,
    Notification(notifications::NotificationMessage),
    /// One load started for the current set finished.
    ImageLoaded {
        generation: u64,
        location: String,
        resolution: Resolution,
        result: Result<LoadedImage, Error>,
    },
    DetailFetched(Result<ContentDetail, Error>),
    Tick(Instant), // Periodic tick for toast auto-dismiss
}

/// Runtime flags passed in from the command line.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Optional locale override in BCP47 form (e.g. `en-US`, `fr`).
    pub lang: Option<String>,
    /// Backend base URL; overrides `[backend] base_url` from the settings.
    pub backend_url: Option<String>,
    /// Content to fetch from the backend instead of using `locations`.
    pub content_id: Option<String>,
    /// Bearer token for the backend session.
    pub access_token: Option<String>,
    /// Image URLs or paths, already expanded from a directory argument.
    pub locations: Vec<String>,
    /// Title shown on the detail page for local image sets.
    pub title: Option<String>,
}
