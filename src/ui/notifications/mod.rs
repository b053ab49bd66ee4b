// SPDX-License-Identifier: MPL-2.0
//! Toast notifications for user feedback.
//!
//! Failures (unreadable settings, image load errors, backend rejections) are
//! surfaced as short-lived toasts instead of blocking dialogs.
//!
//! Success and info toasts stay 3s, warnings 5s, errors until closed. At
//! most three are on screen in the bottom-right corner; the rest wait.
//!
//! ```ignore
//! let mut manager = Manager::new();
//! manager.push(Notification::from_error(&err));
//! let toasts = Toast::view_overlay(&manager, &i18n).map(Message::Notification);
//! ```

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage, MAX_VISIBLE};
pub use notification::{Notification, NotificationId, Severity};
pub use toast::Toast;
