// Project derivation.
// Combines repository metadata with what the repository's README says about itself.

use chrono::{DateTime, Utc};
use futures::future::join_all;
use serde::Serialize;

use crate::error::Result;
use crate::github::{GitHubClient, RepoListOptions, RepoSort, Repository, SortDirection};
use crate::readme::{extract_demo_url, extract_images, parse_front_matter};

/// A portfolio project.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Project {
    /// Repository id, or the curated entry's id.
    pub id: u64,
    pub name: String,
    /// Empty when the repository has no description.
    pub description: String,
    pub technologies: Vec<String>,
    pub github_url: String,
    pub live_url: Option<String>,
    pub image_url: Option<String>,
    pub stars: u64,
    pub forks: u64,
    pub language: Option<String>,
    pub topics: Vec<String>,
    pub featured: bool,
    /// Raw README text; `None` when the repository has none.
    pub readme: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Project {
    pub fn has_demo(&self) -> bool {
        self.live_url.is_some()
    }
}

/// Build a project from a repository and its README text (possibly empty).
pub fn derive_project(repo: &Repository, readme: &str) -> Project {
    let parsed = parse_front_matter(readme);
    let featured = parsed.metadata.is_featured();
    let demo_url = extract_demo_url(&parsed.body, &parsed.metadata);

    let homepage = repo
        .homepage
        .as_deref()
        .map(str::trim)
        .filter(|h| !h.is_empty())
        .map(str::to_string);

    let image_url = extract_images(&parsed.body)
        .into_iter()
        .find(|url| url.starts_with("https://") || url.starts_with("http://"));

    let technologies = if !repo.topics.is_empty() {
        repo.topics.clone()
    } else {
        repo.language.iter().cloned().collect()
    };

    Project {
        id: repo.id,
        name: repo.name.clone(),
        description: repo.description.clone().unwrap_or_default(),
        technologies,
        github_url: repo.html_url.clone(),
        live_url: demo_url.or(homepage),
        image_url,
        stars: repo.stargazers_count,
        forks: repo.forks_count,
        language: repo.language.clone(),
        topics: repo.topics.clone(),
        featured,
        readme: (!readme.is_empty()).then(|| readme.to_string()),
        created_at: repo.created_at,
        updated_at: repo.updated_at,
    }
}

/// Fetch a user's repositories and turn every non-fork into a project.
///
/// READMEs are fetched concurrently. A README that can't be fetched only
/// leaves its own project without README-derived fields.
pub async fn fetch_projects(client: &GitHubClient, username: &str) -> Result<Vec<Project>> {
    let options = RepoListOptions {
        sort: RepoSort::Updated,
        direction: SortDirection::Desc,
        ..RepoListOptions::default()
    };
    let repos = client.get_repositories(username, &options).await?;

    let own: Vec<&Repository> = repos.iter().filter(|repo| !repo.fork).collect();
    tracing::debug!(
        total = repos.len(),
        forks = repos.len() - own.len(),
        "Deriving projects"
    );

    let readmes = join_all(
        own.iter()
            .map(|repo| client.get_readme(username, &repo.name)),
    )
    .await;

    let projects: Vec<Project> = own
        .iter()
        .zip(readmes.iter())
        .map(|(repo, readme)| derive_project(repo, readme))
        .collect();

    tracing::info!(
        username,
        count = projects.len(),
        featured = projects.iter().filter(|p| p.featured).count(),
        "Derived projects"
    );
    Ok(projects)
}
