// SPDX-License-Identifier: MPL-2.0
//! What a toast says and how long it stays.

use crate::error::Error;
use crate::ui::design_tokens::palette;
use iced::Color;
use std::time::Duration;

/// Handle of a pushed notification, assigned by the manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(pub(super) u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Info,
    Warning,
    Error,
}

impl Severity {
    #[must_use]
    pub fn accent(self) -> Color {
        match self {
            Severity::Success => palette::SUCCESS_500,
            Severity::Info => palette::INFO_500,
            Severity::Warning => palette::WARNING_500,
            Severity::Error => palette::ERROR_500,
        }
    }

    #[must_use]
    pub fn glyph(self) -> &'static str {
        match self {
            Severity::Success => "✓",
            Severity::Info => "i",
            Severity::Warning | Severity::Error => "!",
        }
    }

    /// Time on screen before the toast goes away by itself. Errors stay
    /// until dismissed.
    #[must_use]
    pub fn lifetime(self) -> Option<Duration> {
        match self {
            Severity::Success | Severity::Info => Some(Duration::from_secs(3)),
            Severity::Warning => Some(Duration::from_secs(5)),
            Severity::Error => None,
        }
    }
}

/// A localized message waiting to be shown. The text is resolved from
/// `message_key` at render time so a locale change applies to queued toasts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    severity: Severity,
    message_key: String,
    message_args: Vec<(String, String)>,
}

impl Notification {
    pub fn new(severity: Severity, message_key: impl Into<String>) -> Self {
        Self {
            severity,
            message_key: message_key.into(),
            message_args: Vec::new(),
        }
    }

    pub fn warning(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message_key)
    }

    pub fn error(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Error, message_key)
    }

    /// Error toast for `error`: HTTP failures carry `status`, everything else
    /// carries `detail`.
    pub fn from_error(error: &Error) -> Self {
        let notification = Self::error(error.i18n_key());
        match error {
            Error::Backend { status } => notification.with_arg("status", status.to_string()),
            Error::Io(detail)
            | Error::Config(detail)
            | Error::Decode(detail)
            | Error::Network(detail)
            | Error::InvalidBackend(detail) => notification.with_arg("detail", detail.as_str()),
        }
    }

    #[must_use]
    pub fn with_arg(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.message_args.push((name.into(), value.into()));
        self
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    #[must_use]
    pub fn message_key(&self) -> &str {
        &self.message_key
    }

    #[must_use]
    pub fn message_args(&self) -> &[(String, String)] {
        &self.message_args
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_never_expire() {
        assert!(Severity::Error.lifetime().is_none());
    }

    #[test]
    fn warnings_outlive_info() {
        assert!(Severity::Warning.lifetime() > Severity::Info.lifetime());
        assert_eq!(Severity::Success.lifetime(), Some(Duration::from_secs(3)));
    }

    #[test]
    fn io_error_carries_detail() {
        let notification = Notification::from_error(&Error::Network("timed out".into()));
        assert_eq!(notification.severity(), Severity::Error);
        assert_eq!(notification.message_key(), "notification-load-error-network");
        assert_eq!(
            notification.message_args(),
            &[("detail".to_string(), "timed out".to_string())]
        );
    }

    #[test]
    fn invalid_backend_has_its_own_message() {
        let notification = Notification::from_error(&Error::InvalidBackend("bad URL".into()));
        assert_eq!(notification.message_key(), "notification-backend-invalid");
        assert_eq!(notification.message_args()[0].1, "bad URL");
    }

    #[test]
    fn backend_error_carries_status() {
        let notification = Notification::from_error(&Error::Backend { status: 403 });
        assert_eq!(notification.message_key(), "notification-backend-error");
        assert_eq!(notification.message_args()[0].1, "403");
    }
}
