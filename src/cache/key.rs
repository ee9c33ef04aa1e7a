// Typed cache keys for GitHub API responses.
// Each key carries the request parameters it was derived from and its own freshness window.

use std::time::Duration;

use crate::github::RepoListOptions;

/// Profile, repository, and language data stay fresh for 5 minutes.
pub const DEFAULT_TTL: Duration = Duration::from_secs(5 * 60);
/// README text changes rarely: 10 minutes.
pub const README_TTL: Duration = Duration::from_secs(10 * 60);
/// Rate-limit status moves quickly: 1 minute.
pub const RATE_LIMIT_TTL: Duration = Duration::from_secs(60);

/// Identifies one cacheable request.
///
/// Distinct operations never share a key even when their parameters would
/// serialize to the same text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CacheKey {
    User(String),
    Repositories {
        username: String,
        options: RepoListOptions,
    },
    Languages {
        owner: String,
        repo: String,
    },
    Readme {
        owner: String,
        repo: String,
    },
    RateLimit,
}

impl CacheKey {
    pub fn user(username: &str) -> Self {
        CacheKey::User(username.to_string())
    }

    pub fn repositories(username: &str, options: &RepoListOptions) -> Self {
        CacheKey::Repositories {
            username: username.to_string(),
            options: options.clone(),
        }
    }

    pub fn languages(owner: &str, repo: &str) -> Self {
        CacheKey::Languages {
            owner: owner.to_string(),
            repo: repo.to_string(),
        }
    }

    pub fn readme(owner: &str, repo: &str) -> Self {
        CacheKey::Readme {
            owner: owner.to_string(),
            repo: repo.to_string(),
        }
    }

    /// Freshness window for entries stored under this key.
    pub fn ttl(&self) -> Duration {
        match self {
            CacheKey::User(_) | CacheKey::Repositories { .. } | CacheKey::Languages { .. } => {
                DEFAULT_TTL
            }
            CacheKey::Readme { .. } => README_TTL,
            CacheKey::RateLimit => RATE_LIMIT_TTL,
        }
    }
}
