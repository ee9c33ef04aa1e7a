// GitHub API HTTP client.
// Handles authentication, rate limit tracking, and request/response processing.

use std::sync::{Arc, Mutex};

use serde::de::DeserializeOwned;
use url::Url;

use crate::cache::ResponseCache;
use crate::http::{HttpHeaders, HttpRequest, HttpResponse, HttpTransport};

use super::error::ApiError;
use super::types::RateLimit;

pub const GITHUB_API_BASE: &str = "https://api.github.com";
const GITHUB_API_VERSION: &str = "2022-11-28";
const USER_AGENT: &str = "folio";

/// GitHub API client owning its response cache.
///
/// Construct one per session and pass it where needed; tests build isolated
/// instances on top of a mock transport.
pub struct GitHubClient {
    transport: Arc<dyn HttpTransport>,
    base_url: String,
    token: Option<String>,
    pub(super) cache: ResponseCache,
    rate_limit: Mutex<RateLimit>,
}

impl GitHubClient {
    /// Create a client. A missing or blank token means unauthenticated access.
    pub fn new(transport: Arc<dyn HttpTransport>, token: Option<String>) -> Self {
        Self {
            transport,
            base_url: GITHUB_API_BASE.to_string(),
            token: token.filter(|t| !t.trim().is_empty()),
            cache: ResponseCache::new(),
            rate_limit: Mutex::new(RateLimit::default()),
        }
    }

    /// Point the client at a different API root (GitHub Enterprise).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Last rate limit observed in response headers.
    pub fn rate_limit(&self) -> RateLimit {
        self.rate_limit
            .lock()
            .map(|r| r.clone())
            .unwrap_or_default()
    }

    /// Evict every cached response.
    pub fn clear_cache(&self) {
        if self.cache.is_empty() {
            return;
        }
        tracing::debug!(entries = self.cache.len(), "Clearing response cache");
        self.cache.clear();
    }

    fn headers(&self) -> HttpHeaders {
        let mut headers = vec![
            (
                "Accept".to_string(),
                "application/vnd.github+json".to_string(),
            ),
            (
                "X-GitHub-Api-Version".to_string(),
                GITHUB_API_VERSION.to_string(),
            ),
            ("User-Agent".to_string(), USER_AGENT.to_string()),
        ];
        if let Some(token) = &self.token {
            headers.push(("Authorization".to_string(), format!("Bearer {}", token)));
        }
        headers
    }

    /// Build an endpoint URL from path segments and query parameters.
    pub(crate) fn url(&self, segments: &[&str], params: &[(&str, String)]) -> Result<String, ApiError> {
        let mut url = Url::parse(&self.base_url).map_err(|e| ApiError::Url(e.to_string()))?;
        url.path_segments_mut()
            .map_err(|_| ApiError::Url(format!("{} cannot be a base URL", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        if !params.is_empty() {
            let mut query = url.query_pairs_mut();
            for (k, v) in params {
                query.append_pair(k, v);
            }
        }
        Ok(url.into())
    }

    /// Make a GET request to the GitHub API.
    pub(crate) async fn get(
        &self,
        segments: &[&str],
        params: &[(&str, String)],
    ) -> Result<HttpResponse, ApiError> {
        let url = self.url(segments, params)?;
        tracing::debug!(url = %url, "GET");

        let response = self
            .transport
            .get(HttpRequest {
                url,
                headers: self.headers(),
            })
            .await?;

        self.update_rate_limit(&response);
        self.check_response(response)
    }

    /// GET and decode a JSON body.
    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        segments: &[&str],
        params: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let response = self.get(segments, params).await?;
        Ok(serde_json::from_slice(&response.body)?)
    }

    /// Update rate limit from response headers.
    fn update_rate_limit(&self, response: &HttpResponse) {
        let Ok(mut rate_limit) = self.rate_limit.lock() else {
            return;
        };

        if let Some(limit) = response
            .header("x-ratelimit-limit")
            .and_then(|v| v.parse().ok())
        {
            rate_limit.limit = limit;
        }

        if let Some(remaining) = response
            .header("x-ratelimit-remaining")
            .and_then(|v| v.parse().ok())
        {
            rate_limit.remaining = remaining;
        }

        if let Some(reset) = response
            .header("x-ratelimit-reset")
            .and_then(|v| v.parse().ok())
        {
            rate_limit.reset = reset;
        }
    }

    /// Check response status and convert errors.
    fn check_response(&self, response: HttpResponse) -> Result<HttpResponse, ApiError> {
        if response.is_success() {
            return Ok(response);
        }
        match response.status {
            401 => Err(ApiError::Unauthorized),
            404 => Err(ApiError::NotFound(response.text())),
            403 if response.header("x-ratelimit-remaining") == Some("0") => {
                let reset_at = response
                    .header("x-ratelimit-reset")
                    .and_then(|v| v.parse::<i64>().ok())
                    .and_then(|secs| chrono::DateTime::from_timestamp(secs, 0))
                    .map(|dt| dt.format("%H:%M:%S").to_string())
                    .unwrap_or_else(|| "unknown".to_string());
                Err(ApiError::RateLimited { reset_at })
            }
            status => Err(ApiError::Status {
                status,
                body: response.text(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::{MockTransport, mock_json};

    fn client_with(transport: &MockTransport, token: Option<&str>) -> GitHubClient {
        GitHubClient::new(Arc::new(transport.clone()), token.map(str::to_string))
    }

    #[test]
    fn url_joins_segments_and_query() {
        let client = client_with(&MockTransport::new(), None);
        let url = client
            .url(
                &["users", "octocat", "repos"],
                &[("sort", "updated".to_string()), ("per_page", "100".to_string())],
            )
            .unwrap();
        assert_eq!(
            url,
            "https://api.github.com/users/octocat/repos?sort=updated&per_page=100"
        );
    }

    #[test]
    fn url_keeps_enterprise_prefix() {
        let client = client_with(&MockTransport::new(), None)
            .with_base_url("https://ghe.example.com/api/v3");
        let url = client.url(&["rate_limit"], &[]).unwrap();
        assert_eq!(url, "https://ghe.example.com/api/v3/rate_limit");
    }

    #[test]
    fn blank_token_is_unauthenticated() {
        let client = client_with(&MockTransport::new(), Some("  "));
        assert!(!client.is_authenticated());
        assert!(!client.headers().iter().any(|(k, _)| k == "Authorization"));
    }

    #[tokio::test]
    async fn sends_bearer_token_and_api_headers() {
        let transport = MockTransport::new();
        let url = "https://api.github.com/rate_limit";
        transport.push_response(url, mock_json(200, serde_json::json!({})));

        let client = client_with(&transport, Some("ghp_secret"));
        client.get(&["rate_limit"], &[]).await.unwrap();

        let request = &transport.requests()[0];
        let headers = &request.headers;
        assert_eq!(
            crate::http::header_get(headers, "authorization"),
            Some("Bearer ghp_secret")
        );
        assert_eq!(
            crate::http::header_get(headers, "x-github-api-version"),
            Some(GITHUB_API_VERSION)
        );
    }

    #[tokio::test]
    async fn tracks_rate_limit_headers() {
        let transport = MockTransport::new();
        let url = "https://api.github.com/users/octocat";
        let mut response = mock_json(200, serde_json::json!({}));
        response.headers.extend([
            ("X-RateLimit-Limit".to_string(), "60".to_string()),
            ("X-RateLimit-Remaining".to_string(), "57".to_string()),
            ("X-RateLimit-Reset".to_string(), "1700000000".to_string()),
        ]);
        transport.push_response(url, response);

        let client = client_with(&transport, None);
        client.get(&["users", "octocat"], &[]).await.unwrap();

        let rate = client.rate_limit();
        assert_eq!(rate.limit, 60);
        assert_eq!(rate.remaining, 57);
        assert_eq!(rate.reset, 1_700_000_000);
    }

    #[tokio::test]
    async fn maps_error_statuses() {
        let transport = MockTransport::new();
        let url = "https://api.github.com/users/ghost";
        transport.push_response(url, mock_json(401, serde_json::json!({})));
        transport.push_response(url, mock_json(404, serde_json::json!({"message": "Not Found"})));
        let mut limited = mock_json(403, serde_json::json!({}));
        limited
            .headers
            .push(("x-ratelimit-remaining".to_string(), "0".to_string()));
        transport.push_response(url, limited);
        transport.push_response(url, mock_json(403, serde_json::json!({"message": "nope"})));
        transport.push_response(url, mock_json(502, serde_json::json!({"message": "bad gateway"})));

        let client = client_with(&transport, None);
        let segments = ["users", "ghost"];

        assert!(matches!(
            client.get(&segments, &[]).await,
            Err(ApiError::Unauthorized)
        ));
        assert!(client.get(&segments, &[]).await.unwrap_err().is_not_found());
        assert!(matches!(
            client.get(&segments, &[]).await,
            Err(ApiError::RateLimited { .. })
        ));
        assert!(matches!(
            client.get(&segments, &[]).await,
            Err(ApiError::Status { status: 403, .. })
        ));
        let err = client.get(&segments, &[]).await.unwrap_err();
        assert!(err.to_string().contains("bad gateway"));
    }

    #[tokio::test]
    async fn clear_cache_empties_store() {
        let client = client_with(&MockTransport::new(), None);
        client.cache.insert(
            crate::cache::CacheKey::RateLimit,
            crate::cache::CachedPayload::Readme(String::new()),
        );
        client.clear_cache();
        assert!(client.cache.is_empty());
    }
}
