//! Shortening API seam
//!
//! The actual shortening lives behind a remote endpoint. This module owns the
//! wire format for that endpoint and the [`Shortener`] trait the UI talks to,
//! so the view never depends on the HTTP client directly.

mod client;
mod session;

pub use client::HttpShortener;
pub use session::Session;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Descriptive metadata sent with every shortening request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    pub title: String,
    pub description: String,
}

impl Default for Metadata {
    fn default() -> Self {
        Self {
            title: "URL Shortener".to_string(),
            description: "Shortened URL from our awesome service".to_string(),
        }
    }
}

/// Request body for `POST {endpoint}`
///
/// Serializes as `{"longUrl": ..., "userId": ..., "metadata": {...}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortenRequest {
    pub long_url: String,
    pub user_id: String,
    pub metadata: Metadata,
}

impl ShortenRequest {
    /// Build a request for `long_url` on behalf of the session's user
    pub fn new(long_url: impl Into<String>, session: &Session, metadata: &Metadata) -> Self {
        Self {
            long_url: long_url.into(),
            user_id: session.user_id().to_string(),
            metadata: metadata.clone(),
        }
    }
}

/// Successful response body. Unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortenResponse {
    pub shortened_url: String,
}

/// Everything that can go wrong while shortening
///
/// The view collapses all variants into a single error notification; the
/// variants exist so logs say what actually happened.
#[derive(Debug, thiserror::Error)]
pub enum ShortenError {
    #[error("shortening endpoint returned HTTP {0}")]
    Status(u16),

    #[error("request to shortening endpoint failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("could not decode shortening response: {0}")]
    Decode(String),

    #[error("invalid shortening endpoint {endpoint:?}: {reason}")]
    InvalidEndpoint { endpoint: String, reason: String },
}

/// Something that can turn a long URL into a short one
#[async_trait]
pub trait Shortener: Send + Sync {
    /// Issue a single shortening request. No retries.
    async fn shorten(&self, request: ShortenRequest) -> Result<ShortenResponse, ShortenError>;

    /// Human-readable target for logs and the title bar
    fn describe(&self) -> String;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn request_uses_camel_case_wire_keys() {
        let session = Session::new("12345");
        let request = ShortenRequest::new(
            "https://example.com/very/long/path",
            &session,
            &Metadata::default(),
        );

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            json!({
                "longUrl": "https://example.com/very/long/path",
                "userId": "12345",
                "metadata": {
                    "title": "URL Shortener",
                    "description": "Shortened URL from our awesome service"
                }
            })
        );
    }

    #[test]
    fn response_ignores_extra_fields() {
        let body = r#"{"shortenedUrl":"https://short.ly/abc123","clicks":0,"id":"abc123"}"#;
        let response: ShortenResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.shortened_url, "https://short.ly/abc123");
    }

    #[test]
    fn response_without_shortened_url_is_rejected() {
        let body = r#"{"url":"https://short.ly/abc123"}"#;
        assert!(serde_json::from_str::<ShortenResponse>(body).is_err());
    }
}
