//! HTTP implementation of [`Shortener`]

use super::{ShortenError, ShortenRequest, ShortenResponse, Shortener};
use async_trait::async_trait;
use std::time::Duration;
use url::Url;

/// Talks to the shortening endpoint over HTTP
///
/// One POST per call with a JSON body. Any non-2xx status is a failure; the
/// status code itself is only kept for logging.
pub struct HttpShortener {
    client: reqwest::Client,
    endpoint: Url,
}

impl HttpShortener {
    /// Build a client for `api_base` joined with `endpoint_path`
    ///
    /// `timeout` of `None` leaves requests unbounded.
    pub fn new(
        api_base: &str,
        endpoint_path: &str,
        timeout: Option<Duration>,
    ) -> Result<Self, ShortenError> {
        let endpoint = resolve_endpoint(api_base, endpoint_path)?;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(ShortenError::Transport)?;

        tracing::debug!("Shortening endpoint: {}", endpoint);

        Ok(Self { client, endpoint })
    }
}

/// Join base and path, rejecting anything that isn't http(s)
fn resolve_endpoint(api_base: &str, endpoint_path: &str) -> Result<Url, ShortenError> {
    let invalid = |reason: String| ShortenError::InvalidEndpoint {
        endpoint: format!("{}{}", api_base, endpoint_path),
        reason,
    };

    let base = Url::parse(api_base).map_err(|e| invalid(e.to_string()))?;
    if !matches!(base.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme {:?}", base.scheme())));
    }

    base.join(endpoint_path).map_err(|e| invalid(e.to_string()))
}

#[async_trait]
impl Shortener for HttpShortener {
    async fn shorten(&self, request: ShortenRequest) -> Result<ShortenResponse, ShortenError> {
        tracing::debug!("POST {} longUrl={}", self.endpoint, request.long_url);

        let response = self
            .client
            .post(self.endpoint.clone())
            .json(&request)
            .send()
            .await
            .map_err(ShortenError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ShortenError::Status(status.as_u16()));
        }

        let body = response.bytes().await.map_err(ShortenError::Transport)?;
        serde_json::from_slice(&body).map_err(|e| ShortenError::Decode(e.to_string()))
    }

    fn describe(&self) -> String {
        self.endpoint.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shortener::{Metadata, Session};
    use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
    use serde_json::{json, Value};
    use std::sync::{Arc, Mutex};

    type Captured = Arc<Mutex<Vec<Value>>>;

    async fn spawn_endpoint(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{}", addr)
    }

    fn request(long_url: &str) -> ShortenRequest {
        ShortenRequest::new(long_url, &Session::new("12345"), &Metadata::default())
    }

    async fn record_and_reply(
        State(captured): State<Captured>,
        Json(body): Json<Value>,
    ) -> Json<Value> {
        captured.lock().unwrap().push(body);
        Json(json!({ "shortenedUrl": "https://short.ly/abc123", "id": "abc123" }))
    }

    #[tokio::test]
    async fn posts_json_body_and_parses_shortened_url() {
        let captured: Captured = Arc::default();
        let router = Router::new()
            .route("/api/url/shorten", post(record_and_reply))
            .with_state(captured.clone());
        let base = spawn_endpoint(router).await;

        let shortener = HttpShortener::new(&base, "/api/url/shorten", None).unwrap();
        let response = shortener
            .shorten(request("https://example.com/very/long/path"))
            .await
            .unwrap();

        assert_eq!(response.shortened_url, "https://short.ly/abc123");

        let bodies = captured.lock().unwrap();
        assert_eq!(bodies.len(), 1);
        assert_eq!(bodies[0]["longUrl"], "https://example.com/very/long/path");
        assert_eq!(bodies[0]["userId"], "12345");
        assert_eq!(bodies[0]["metadata"]["title"], "URL Shortener");
    }

    #[tokio::test]
    async fn non_success_status_is_an_error() {
        let router = Router::new().route(
            "/api/url/shorten",
            post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
        );
        let base = spawn_endpoint(router).await;

        let shortener = HttpShortener::new(&base, "/api/url/shorten", None).unwrap();
        let err = shortener.shorten(request("https://a.example")).await.unwrap_err();

        assert!(matches!(err, ShortenError::Status(500)));
    }

    #[tokio::test]
    async fn malformed_body_is_a_decode_error() {
        let router = Router::new().route("/api/url/shorten", post(|| async { "not json" }));
        let base = spawn_endpoint(router).await;

        let shortener = HttpShortener::new(&base, "/api/url/shorten", None).unwrap();
        let err = shortener.shorten(request("https://a.example")).await.unwrap_err();

        assert!(matches!(err, ShortenError::Decode(_)));
    }

    #[tokio::test]
    async fn unreachable_endpoint_is_a_transport_error() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let base = format!("http://{}", addr);
        let shortener = HttpShortener::new(&base, "/api/url/shorten", None).unwrap();
        let err = shortener.shorten(request("https://a.example")).await.unwrap_err();

        assert!(matches!(err, ShortenError::Transport(_)));
    }

    #[test]
    fn endpoint_path_replaces_base_path() {
        let url = resolve_endpoint("https://links.example.com/app/", "/api/url/shorten").unwrap();
        assert_eq!(url.as_str(), "https://links.example.com/api/url/shorten");
    }

    #[test]
    fn rejects_non_http_base() {
        let err = resolve_endpoint("ftp://links.example.com", "/api/url/shorten").unwrap_err();
        assert!(matches!(err, ShortenError::InvalidEndpoint { .. }));

        let err = resolve_endpoint("not a url", "/api/url/shorten").unwrap_err();
        assert!(matches!(err, ShortenError::InvalidEndpoint { .. }));
    }
}
