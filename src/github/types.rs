// GitHub API response types.
// Defines structs for deserializing GitHub REST API responses.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Public GitHub user profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub login: String,
    pub name: Option<String>,
    pub avatar_url: String,
    pub bio: Option<String>,
    pub location: Option<String>,
    pub email: Option<String>,
    /// Personal website. GitHub sends `""` when unset.
    #[serde(default, deserialize_with = "empty_as_none")]
    pub blog: Option<String>,
    pub twitter_username: Option<String>,
    pub public_repos: u64,
    pub followers: u64,
    pub following: u64,
    pub created_at: DateTime<Utc>,
    pub html_url: String,
}

impl Profile {
    /// Display name, falling back to the login handle.
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .filter(|n| !n.trim().is_empty())
            .unwrap_or(&self.login)
    }
}

/// Repository license descriptor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct License {
    pub key: String,
    pub name: String,
    pub spdx_id: Option<String>,
    pub url: Option<String>,
}

/// GitHub repository.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Repository {
    pub id: u64,
    pub name: String,
    pub full_name: String,
    pub description: Option<String>,
    pub html_url: String,
    pub homepage: Option<String>,
    #[serde(default)]
    pub fork: bool,
    #[serde(default)]
    pub stargazers_count: u64,
    #[serde(default)]
    pub watchers_count: u64,
    #[serde(default)]
    pub forks_count: u64,
    pub language: Option<String>,
    #[serde(default)]
    pub topics: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub pushed_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub size: u64,
    #[serde(default)]
    pub open_issues_count: u64,
    pub license: Option<License>,
}

/// Language name to byte count.
pub type Languages = BTreeMap<String, u64>;

/// Sort field for the repository list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RepoSort {
    Created,
    #[default]
    Updated,
    Pushed,
    FullName,
}

impl RepoSort {
    pub fn as_str(&self) -> &'static str {
        match self {
            RepoSort::Created => "created",
            RepoSort::Updated => "updated",
            RepoSort::Pushed => "pushed",
            RepoSort::FullName => "full_name",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

/// Which of a user's repositories to list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RepoType {
    All,
    #[default]
    Owner,
    Member,
}

impl RepoType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RepoType::All => "all",
            RepoType::Owner => "owner",
            RepoType::Member => "member",
        }
    }
}

/// Options for listing a user's repositories. Always a single page.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct RepoListOptions {
    pub sort: RepoSort,
    pub direction: SortDirection,
    pub per_page: u32,
    #[serde(rename = "type")]
    pub kind: RepoType,
}

impl Default for RepoListOptions {
    fn default() -> Self {
        Self {
            sort: RepoSort::default(),
            direction: SortDirection::default(),
            per_page: 100,
            kind: RepoType::default(),
        }
    }
}

impl RepoListOptions {
    /// Query parameters in the order GitHub documents them.
    pub fn query_pairs(&self) -> [(&'static str, String); 4] {
        [
            ("sort", self.sort.as_str().to_string()),
            ("direction", self.direction.as_str().to_string()),
            ("per_page", self.per_page.to_string()),
            ("type", self.kind.as_str().to_string()),
        ]
    }
}

/// README contents response.
#[derive(Debug, Clone, Deserialize)]
pub struct ReadmeResponse {
    pub content: String,
    #[serde(default)]
    pub encoding: String,
}

/// Rate-limit status from the `/rate_limit` endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RateLimitInfo {
    pub limit: u64,
    pub remaining: u64,
    pub reset: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RateLimitResponse {
    pub rate: RateResource,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RateResource {
    pub limit: u64,
    pub remaining: u64,
    /// Epoch seconds.
    pub reset: i64,
}

/// Rate limit information from response headers.
#[derive(Debug, Clone, Default)]
pub struct RateLimit {
    pub limit: u64,
    pub remaining: u64,
    pub reset: u64,
}

fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<String> = Option::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}
