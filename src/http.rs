// HTTP transport boundary.
// The GitHub client talks to this trait so tests can swap in an in-memory transport.

use async_trait::async_trait;
use thiserror::Error;

/// HTTP headers represented as key/value pairs.
///
/// Header names are treated case-insensitively by helper functions.
pub type HttpHeaders = Vec<(String, String)>;

/// A GET request. folio never sends anything else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub url: String,
    pub headers: HttpHeaders,
}

/// A minimal HTTP response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: HttpHeaders,
    pub body: Vec<u8>,
}

impl HttpResponse {
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        header_get(&self.headers, name)
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Body as text, replacing invalid UTF-8.
    #[must_use]
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

#[derive(Debug, Error)]
pub enum HttpError {
    #[error("http transport error: {0}")]
    Transport(String),

    #[cfg(test)]
    #[error("no mock response registered for GET {url}")]
    NoMockResponse { url: String },
}

/// Transport boundary for all HTTP I/O.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn get(&self, request: HttpRequest) -> Result<HttpResponse, HttpError>;
}

/// Get the first header value matching `name` (case-insensitive).
#[must_use]
pub fn header_get<'a>(headers: &'a HttpHeaders, name: &str) -> Option<&'a str> {
    headers
        .iter()
        .find(|(k, _)| k.eq_ignore_ascii_case(name))
        .map(|(_, v)| v.as_str())
}

/// A real HTTP transport backed by reqwest.
#[derive(Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl Default for ReqwestTransport {
    fn default() -> Self {
        Self::new(reqwest::Client::new())
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn get(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        let mut builder = self.client.get(&request.url);
        for (k, v) in request.headers {
            builder = builder.header(&k, &v);
        }

        let resp = builder
            .send()
            .await
            .map_err(|e| HttpError::Transport(e.to_string()))?;

        let status = resp.status().as_u16();
        let mut headers: HttpHeaders = Vec::new();
        for (name, value) in resp.headers().iter() {
            headers.push((
                name.as_str().to_string(),
                value.to_str().unwrap_or_default().to_string(),
            ));
        }

        let body = resp
            .bytes()
            .await
            .map_err(|e| HttpError::Transport(e.to_string()))?
            .to_vec();

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}

// ---------- Test-only mock transport ----------

#[cfg(test)]
pub use mock::MockTransport;


#[cfg(test)]
pub use mock::json as mock_json;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_get_is_case_insensitive_and_returns_first_match() {
        let headers: HttpHeaders = vec![
            ("X-RateLimit-Remaining".to_string(), "42".to_string()),
            ("x-ratelimit-remaining".to_string(), "7".to_string()),
        ];
        assert_eq!(header_get(&headers, "x-ratelimit-remaining"), Some("42"));
        assert_eq!(header_get(&headers, "missing"), None);
    }

    #[test]
    fn response_success_range() {
        let mut resp = mock_json(204, serde_json::json!({}));
        assert!(resp.is_success());
        resp.status = 404;
        assert!(!resp.is_success());
    }

    #[tokio::test]
    async fn mock_transport_returns_queued_then_sticky_responses() {
        let transport = MockTransport::new();
        let url = "https://example.com/api";
        transport.push_response(url, mock_json(200, serde_json::json!({"n": 1})));
        transport.always(url, mock_json(200, serde_json::json!({"n": 2})));

        let req = HttpRequest {
            url: url.to_string(),
            headers: Vec::new(),
        };
        let first = transport.get(req.clone()).await.expect("first");
        let second = transport.get(req.clone()).await.expect("second");
        let third = transport.get(req).await.expect("third");

        assert_eq!(first.text(), r#"{"n":1}"#);
        assert_eq!(second.text(), r#"{"n":2}"#);
        assert_eq!(third.text(), r#"{"n":2}"#);
        assert_eq!(transport.hits(url), 3);
    }

    #[tokio::test]
    async fn mock_transport_errors_when_no_response_is_registered() {
        let transport = MockTransport::new();
        let req = HttpRequest {
            url: "https://example.com/missing".to_string(),
            headers: Vec::new(),
        };

        let err = transport.get(req).await.expect_err("missing mock should error");
        assert!(matches!(err, HttpError::NoMockResponse { .. }));
    }

    #[tokio::test]
    async fn mock_transport_replays_registered_failures() {
        let transport = MockTransport::new();
        let url = "https://example.com/down";
        transport.push_error(url, "connection refused");

        let req = HttpRequest {
            url: url.to_string(),
            headers: Vec::new(),
        };
        let err = transport.get(req).await.expect_err("should fail");
        assert_eq!(err.to_string(), "http transport error: connection refused");
    }
}
