// Curated project entries.
// Used instead of the GitHub path, or in its place when that path fails.

use chrono::Utc;
use serde::Deserialize;

use crate::error::Result;
use crate::github::GitHubClient;

use super::format::is_valid_url;
use super::project::{Project, fetch_projects};

/// Where the projects section gets its entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectSource {
    #[default]
    Github,
    Manual,
}

/// A hand-written project entry from the config file.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct ManualProject {
    pub id: u64,
    pub name: String,
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
}

impl ManualProject {
    /// Curated entries have no README and are stamped with the load time.
    pub fn to_project(&self) -> Project {
        let now = Utc::now();
        Project {
            id: self.id,
            name: self.name.clone(),
            description: self.description.clone(),
            technologies: self.technologies.clone(),
            github_url: self.github_url.clone(),
            live_url: self.live_url.clone().filter(|u| is_valid_url(u)),
            image_url: self.image_url.clone(),
            stars: self.stars,
            forks: self.forks,
            language: self.language.clone(),
            topics: self.topics.clone(),
            featured: self.featured,
            readme: None,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Load the projects section.
///
/// With the GitHub source, a fetch failure falls back to the curated list
/// when one is configured; otherwise the error is returned.
pub async fn load_projects(
    client: &GitHubClient,
    username: &str,
    source: ProjectSource,
    curated: &[ManualProject],
) -> Result<Vec<Project>> {
    match source {
        ProjectSource::Manual => Ok(curated.iter().map(ManualProject::to_project).collect()),
        ProjectSource::Github => match fetch_projects(client, username).await {
            Ok(projects) => Ok(projects),
            Err(e) if !curated.is_empty() => {
                tracing::warn!(error = %e, count = curated.len(), "Falling back to curated projects");
                Ok(curated.iter().map(ManualProject::to_project).collect())
            }
            Err(e) => Err(e),
        },
    }
}
