// GitHub API endpoint functions.
// Each operation reads through the client's response cache before going to the network.

use base64::{Engine, engine::general_purpose::STANDARD};

use crate::cache::{CacheKey, CachedPayload};
use crate::error::{FolioError, Result};

use super::client::GitHubClient;
use super::error::ApiError;
use super::types::{
    Languages, Profile, RateLimitInfo, RateLimitResponse, ReadmeResponse, RepoListOptions,
    Repository,
};

impl GitHubClient {
    /// Get a user's public profile.
    pub async fn get_user(&self, username: &str) -> Result<Profile> {
        if username.trim().is_empty() {
            return Err(FolioError::InvalidArgument(
                "username must not be empty".to_string(),
            ));
        }

        let key = CacheKey::user(username);
        if let Some(CachedPayload::User(profile)) = self.cache.get(&key) {
            tracing::debug!(username, "Profile cache hit");
            return Ok(profile);
        }

        let profile: Profile = self
            .get_json(&["users", username], &[])
            .await
            .map_err(|e| FolioError::fetch("user", e))?;

        self.cache
            .insert(key, CachedPayload::User(profile.clone()));
        Ok(profile)
    }

    /// Get a single page of a user's repositories.
    pub async fn get_repositories(
        &self,
        username: &str,
        options: &RepoListOptions,
    ) -> Result<Vec<Repository>> {
        let key = CacheKey::repositories(username, options);
        if let Some(CachedPayload::Repositories(repos)) = self.cache.get(&key) {
            tracing::debug!(username, count = repos.len(), "Repository list cache hit");
            return Ok(repos);
        }

        let repos: Vec<Repository> = self
            .get_json(&["users", username, "repos"], &options.query_pairs())
            .await
            .map_err(|e| FolioError::fetch("repositories", e))?;

        tracing::info!(username, count = repos.len(), "Fetched repositories");
        self.cache
            .insert(key, CachedPayload::Repositories(repos.clone()));
        Ok(repos)
    }

    /// Get the language breakdown (bytes per language) for a repository.
    pub async fn get_languages(&self, owner: &str, repo: &str) -> Result<Languages> {
        let key = CacheKey::languages(owner, repo);
        if let Some(CachedPayload::Languages(languages)) = self.cache.get(&key) {
            return Ok(languages);
        }

        let languages: Languages = self
            .get_json(&["repos", owner, repo, "languages"], &[])
            .await
            .map_err(|e| FolioError::fetch("languages", e))?;

        self.cache
            .insert(key, CachedPayload::Languages(languages.clone()));
        Ok(languages)
    }

    /// Get a repository's decoded README.
    ///
    /// A missing README is normal, so every failure yields an empty string.
    /// Failures are not cached.
    pub async fn get_readme(&self, owner: &str, repo: &str) -> String {
        let key = CacheKey::readme(owner, repo);
        if let Some(CachedPayload::Readme(text)) = self.cache.get(&key) {
            return text;
        }

        match self.fetch_readme(owner, repo).await {
            Ok(text) => {
                self.cache.insert(key, CachedPayload::Readme(text.clone()));
                text
            }
            Err(e) if e.is_not_found() => {
                tracing::debug!(owner, repo, "No README");
                String::new()
            }
            Err(e) => {
                tracing::warn!(owner, repo, error = %e, "README fetch failed");
                String::new()
            }
        }
    }

    async fn fetch_readme(&self, owner: &str, repo: &str) -> std::result::Result<String, ApiError> {
        let response: ReadmeResponse = self.get_json(&["repos", owner, repo, "readme"], &[]).await?;
        decode_content(&response)
    }

    /// Get the core API rate limit status.
    pub async fn get_rate_limit(&self) -> Result<RateLimitInfo> {
        let key = CacheKey::RateLimit;
        if let Some(CachedPayload::RateLimit(info)) = self.cache.get(&key) {
            return Ok(info);
        }

        let response: RateLimitResponse = self
            .get_json(&["rate_limit"], &[])
            .await
            .map_err(|e| FolioError::fetch("rate limit", e))?;

        let rate = response.rate;
        let reset = chrono::DateTime::from_timestamp(rate.reset, 0).ok_or_else(|| {
            FolioError::fetch("rate limit", format!("invalid reset timestamp {}", rate.reset))
        })?;
        let info = RateLimitInfo {
            limit: rate.limit,
            remaining: rate.remaining,
            reset,
        };

        self.cache.insert(key, CachedPayload::RateLimit(info));
        Ok(info)
    }
}

/// Decode the contents API payload. GitHub wraps base64 at 60 columns.
fn decode_content(response: &ReadmeResponse) -> std::result::Result<String, ApiError> {
    match response.encoding.as_str() {
        "base64" | "" => {
            let compact: String = response
                .content
                .chars()
                .filter(|c| !c.is_ascii_whitespace())
                .collect();
            let bytes = STANDARD
                .decode(compact)
                .map_err(|e| ApiError::Content(e.to_string()))?;
            Ok(String::from_utf8_lossy(&bytes).into_owned())
        }
        _ => Ok(response.content.clone()),
    }
}
