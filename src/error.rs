// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Decode(String),
    Network(String),
    /// Backend URL or session values that cannot form a request.
    InvalidBackend(String),
    Backend { status: u16 },
}

impl Error {
    /// Returns the i18n message key used when this error is shown to the user.
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        match self {
            Error::Io(_) => "notification-load-error-io",
            Error::Config(_) => "notification-config-load-error",
            Error::Decode(_) => "notification-load-error-decode",
            Error::Network(_) => "notification-load-error-network",
            Error::InvalidBackend(_) => "notification-backend-invalid",
            Error::Backend { .. } => "notification-backend-error",
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Decode(e) => write!(f, "Decode Error: {}", e),
            Error::Network(e) => write!(f, "Network Error: {}", e),
            Error::InvalidBackend(e) => write!(f, "Invalid Backend: {}", e),
            Error::Backend { status } => write!(f, "Backend Error: HTTP status {}", status),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<image_rs::ImageError> for Error {
    fn from(err: image_rs::ImageError) -> Self {
        Error::Decode(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn backend_error_formats_status() {
        let err = Error::Backend { status: 404 };
        assert_eq!(format!("{}", err), "Backend Error: HTTP status 404");
    }

    #[test]
    fn decode_error_from_image_error() {
        let image_error = image_rs::load_from_memory(b"definitely not an image")
            .expect_err("garbage bytes must not decode");
        let err: Error = image_error.into();
        assert!(matches!(err, Error::Decode(_)));
    }

    #[test]
    fn bad_backend_input_is_not_reported_as_a_settings_problem() {
        let err = Error::InvalidBackend("relative URL without a base".into());
        assert_eq!(err.i18n_key(), "notification-backend-invalid");
        assert_ne!(err.i18n_key(), Error::Config(String::new()).i18n_key());
    }

    #[test]
    fn i18n_keys_are_distinct_per_load_failure() {
        assert_eq!(Error::Io(String::new()).i18n_key(), "notification-load-error-io");
        assert_eq!(
            Error::Network(String::new()).i18n_key(),
            "notification-load-error-network"
        );
        assert_eq!(
            Error::Decode(String::new()).i18n_key(),
            "notification-load-error-decode"
        );
    }
}
