// SPDX-License-Identifier: MPL-2.0
//! Typed client for the remote content backend.
//!
//! The backend owns entitlement decisions; the gallery only displays what it
//! returns. Requests carry an explicit [`SessionContext`] that callers build
//! and pass in.
//!
//! # Contract
//!
//! `GET {base_url}/api/contents/{id}` answers with:
//!
//! ```json
//! { "id": "42", "title": "Sunset", "images": ["https://…/1.jpg"], "locked_count": 3, "badge": "Members" }
//! ```

use crate::error::{Error, Result};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION};
use serde::Deserialize;

/// Device identifier used when the settings file does not provide one.
pub const DEFAULT_DEVICE_ID: &str = "iced-lightbox-desktop";

const DEVICE_ID_HEADER: &str = "x-device-id";

/// Identity and location for backend requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionContext {
    pub base_url: String,
    pub access_token: Option<String>,
    pub device_id: String,
}

impl SessionContext {
    pub fn new(base_url: impl Into<String>, device_id: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            access_token: None,
            device_id: device_id.into(),
        }
    }

    #[must_use]
    pub fn with_access_token(mut self, token: Option<String>) -> Self {
        self.access_token = token.filter(|t| !t.is_empty());
        self
    }

    /// Headers attached to every request.
    pub fn headers(&self) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(HeaderName::from_static(DEVICE_ID_HEADER), header_value(&self.device_id)?);
        if let Some(token) = &self.access_token {
            headers.insert(AUTHORIZATION, header_value(&format!("Bearer {token}"))?);
        }
        Ok(headers)
    }

    /// URL of the detail resource for `content_id`.
    pub fn detail_url(&self, content_id: &str) -> Result<reqwest::Url> {
        let mut url = reqwest::Url::parse(&self.base_url)
            .map_err(|e| Error::InvalidBackend(format!("invalid backend URL: {e}")))?;
        url.path_segments_mut()
            .map_err(|()| Error::InvalidBackend("backend URL cannot have a path".into()))?
            .pop_if_empty()
            .extend(["api", "contents", content_id]);
        Ok(url)
    }
}

fn header_value(value: &str) -> Result<HeaderValue> {
    HeaderValue::from_str(value).map_err(|e| Error::InvalidBackend(format!("invalid header value: {e}")))
}

/// Content shown on the detail page.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ContentDetail {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub images: Vec<String>,
    /// Images the viewer is not entitled to; only the count is disclosed.
    #[serde(default)]
    pub locked_count: u32,
    #[serde(default)]
    pub badge: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ContentClient {
    session: SessionContext,
    http: reqwest::Client,
}

impl ContentClient {
    pub fn new(session: SessionContext) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("IcedLightbox/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| Error::Network(e.to_string()))?;
        Ok(Self { session, http })
    }

    /// Fetches one content detail. Non-success statuses become
    /// [`Error::Backend`].
    pub async fn fetch_detail(&self, content_id: &str) -> Result<ContentDetail> {
        let url = self.session.detail_url(content_id)?;
        let response = self
            .http
            .get(url)
            .headers(self.session.headers()?)
            .send()
            .await
            .map_err(|e| Error::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(content_id, status = status.as_u16(), "backend rejected detail request");
            return Err(Error::Backend {
                status: status.as_u16(),
            });
        }

        response
            .json::<ContentDetail>()
            .await
            .map_err(|e| Error::Decode(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> SessionContext {
        SessionContext::new("https://api.example.org", "device-7")
    }

    #[test]
    fn detail_url_appends_path_segments() {
        let url = session().detail_url("42").expect("valid url");
        assert_eq!(url.as_str(), "https://api.example.org/api/contents/42");
    }

    #[test]
    fn detail_url_keeps_base_path_and_escapes_id() {
        let session = SessionContext::new("https://example.org/v2/", "d");
        let url = session.detail_url("a b/c").expect("valid url");
        assert_eq!(url.as_str(), "https://example.org/v2/api/contents/a%20b%2Fc");
    }

    #[test]
    fn detail_url_rejects_invalid_base() {
        let session = SessionContext::new("not a url", "d");
        assert!(matches!(session.detail_url("1"), Err(Error::InvalidBackend(_))));
    }

    #[test]
    fn control_characters_in_token_are_rejected() {
        let session = session().with_access_token(Some("line\nbreak".into()));
        assert!(matches!(session.headers(), Err(Error::InvalidBackend(_))));
    }

    #[test]
    fn headers_without_token_only_carry_device() {
        let headers = session().headers().expect("valid headers");
        assert_eq!(headers.get("x-device-id").map(|v| v.as_bytes()), Some(&b"device-7"[..]));
        assert!(headers.get(AUTHORIZATION).is_none());
    }

    #[test]
    fn headers_with_token_carry_bearer() {
        let headers = session()
            .with_access_token(Some("secret".into()))
            .headers()
            .expect("valid headers");
        assert_eq!(
            headers.get(AUTHORIZATION).map(|v| v.as_bytes()),
            Some(&b"Bearer secret"[..])
        );
    }

    #[test]
    fn empty_token_is_dropped() {
        let session = session().with_access_token(Some(String::new()));
        assert!(session.access_token.is_none());
    }

    #[test]
    fn detail_decodes_full_payload() {
        let json = r#"{
            "id": "42",
            "title": "Sunset",
            "images": ["https://cdn.example.org/1.jpg", "https://cdn.example.org/2.jpg"],
            "locked_count": 3,
            "badge": "Members"
        }"#;
        let detail: ContentDetail = serde_json::from_str(json).expect("valid payload");
        assert_eq!(detail.images.len(), 2);
        assert_eq!(detail.locked_count, 3);
        assert_eq!(detail.badge.as_deref(), Some("Members"));
    }

    #[test]
    fn detail_optional_fields_default() {
        let detail: ContentDetail =
            serde_json::from_str(r#"{"id": "1", "title": "Empty"}"#).expect("valid payload");
        assert!(detail.images.is_empty());
        assert_eq!(detail.locked_count, 0);
        assert!(detail.badge.is_none());
    }
}
