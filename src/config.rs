//! Configuration file support for folio.
//!
//! Configuration is loaded with the following precedence (highest to lowest):
//! 1. CLI flags
//! 2. `GITHUB_TOKEN`, only when no token is configured otherwise
//! 3. Environment variables prefixed with `FOLIO_`, e.g. `FOLIO_GITHUB_TOKEN`
//! 4. `./folio.toml`
//! 5. `~/.config/folio/config.toml`
//! 6. Built-in defaults
//!
//! Example config file:
//! ```toml
//! [github]
//! username = "octocat"
//! token = "ghp_..."            # or FOLIO_GITHUB_TOKEN / GITHUB_TOKEN
//!
//! [profile]
//! name = "The Octocat"
//! roles = ["Mascot", "Rustacean"]
//! tagline = "Building things in the terminal."
//!
//! [[socials]]
//! platform = "Mastodon"
//! url = "https://hachyderm.io/@octocat"
//!
//! [[skills]]
//! name = "Rust"
//! category = "backend"
//! proficiency = 90
//!
//! [projects]
//! source = "github"            # or "manual"
//!
//! [[projects.items]]
//! id = 1
//! name = "folio"
//! description = "Terminal portfolio"
//! technologies = ["Rust"]
//! github_url = "https://github.com/octocat/folio"
//! ```

use std::path::{Path, PathBuf};

use config::{Config as ConfigBuilder, Environment, File, FileFormat, builder::DefaultState};
use serde::{Deserialize, Serialize};

use crate::cache::paths;
use crate::error::Result;
use crate::portfolio::{ManualProject, ProjectSource, Skill, default_skills};

/// Shown when no username is configured.
pub const DEFAULT_USERNAME: &str = "octocat";

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub github: GitHubConfig,
    pub profile: ProfileConfig,
    pub socials: Vec<SocialLink>,
    /// Empty means the built-in skill list.
    pub skills: Vec<Skill>,
    pub projects: ProjectsConfig,
}

/// GitHub configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct GitHubConfig {
    pub username: String,
    /// Can also be set via FOLIO_GITHUB_TOKEN or GITHUB_TOKEN.
    pub token: Option<String>,
    /// API root override for GitHub Enterprise.
    pub base_url: Option<String>,
}

impl Default for GitHubConfig {
    fn default() -> Self {
        Self {
            username: DEFAULT_USERNAME.to_string(),
            token: None,
            base_url: None,
        }
    }
}

/// Copy for the hero section.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ProfileConfig {
    /// Display name; falls back to the GitHub profile.
    pub name: Option<String>,
    pub roles: Vec<String>,
    pub tagline: String,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            name: None,
            roles: vec![
                "Full Stack Developer".to_string(),
                "Software Engineer".to_string(),
                "Problem Solver".to_string(),
            ],
            tagline: "I build exceptional digital experiences using modern technologies. \
                      Passionate about creating clean, efficient, and user-friendly applications."
                .to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub platform: String,
    pub url: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ProjectsConfig {
    pub source: ProjectSource,
    /// Curated entries.
    pub items: Vec<ManualProject>,
}

impl Config {
    /// Load configuration from files and the environment.
    pub fn load() -> Result<Self> {
        let xdg_config = Self::default_config_path();
        let settings = Self::builder(xdg_config.as_deref(), Path::new("folio.toml")).build()?;
        let mut config: Config = settings.try_deserialize()?;
        config.apply_token_fallback(std::env::var("GITHUB_TOKEN").ok());
        Ok(config)
    }

    /// Sources are loaded in order; later sources override earlier.
    fn builder(xdg_config: Option<&Path>, local_config: &Path) -> config::ConfigBuilder<DefaultState> {
        let mut builder = ConfigBuilder::builder();

        if let Some(path) = xdg_config.filter(|p| p.exists()) {
            tracing::debug!("Loading config from {:?}", path);
            builder = builder.add_source(
                File::from(path.to_path_buf())
                    .format(FileFormat::Toml)
                    .required(false),
            );
        }

        if local_config.exists() {
            tracing::debug!("Loading config from {:?}", local_config);
            builder = builder.add_source(
                File::from(local_config.to_path_buf())
                    .format(FileFormat::Toml)
                    .required(false),
            );
        }

        // e.g. FOLIO_GITHUB_TOKEN -> github.token
        builder.add_source(
            Environment::with_prefix("FOLIO")
                .separator("_")
                .try_parsing(true),
        )
    }

    /// Use `token` only if nothing else configured one.
    fn apply_token_fallback(&mut self, token: Option<String>) {
        if self.github_token().is_none() {
            self.github.token = token.filter(|t| !t.trim().is_empty());
        }
    }

    /// Username to show, falling back to the placeholder identity.
    pub fn username(&self) -> &str {
        let username = self.github.username.trim();
        if username.is_empty() {
            DEFAULT_USERNAME
        } else {
            username
        }
    }

    pub fn github_token(&self) -> Option<String> {
        self.github
            .token
            .clone()
            .filter(|t| !t.trim().is_empty())
    }

    /// Configured skills, or the built-in list.
    pub fn skills(&self) -> Vec<Skill> {
        if self.skills.is_empty() {
            default_skills()
        } else {
            self.skills.clone()
        }
    }

    pub fn default_config_path() -> Option<PathBuf> {
        paths::config_dir().map(|dir| dir.join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::portfolio::skills::SkillCategory;

    fn from_toml(toml_content: &str) -> Config {
        ConfigBuilder::builder()
            .add_source(File::from_str(toml_content, FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap()
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.username(), "octocat");
        assert!(config.github_token().is_none());
        assert_eq!(config.profile.roles.len(), 3);
        assert_eq!(config.projects.source, ProjectSource::Github);
        assert_eq!(config.skills().len(), 12);
    }

    #[test]
    fn test_full_config() {
        let config = from_toml(
            r#"
            [github]
            username = "hubot"
            token = "ghp_test123"
            base_url = "https://ghe.example.com/api/v3"

            [profile]
            name = "Hubot"
            roles = ["Robot"]

            [[socials]]
            platform = "Mastodon"
            url = "https://hachyderm.io/@hubot"

            [[skills]]
            name = "Rust"
            category = "backend"
            proficiency = 90

            [projects]
            source = "manual"

            [[projects.items]]
            id = 1
            name = "folio"
            technologies = ["Rust"]
            github_url = "https://github.com/hubot/folio"
            featured = true
        "#,
        );

        assert_eq!(config.username(), "hubot");
        assert_eq!(config.github_token().as_deref(), Some("ghp_test123"));
        assert_eq!(
            config.github.base_url.as_deref(),
            Some("https://ghe.example.com/api/v3")
        );
        assert_eq!(config.profile.name.as_deref(), Some("Hubot"));
        assert_eq!(config.profile.roles, vec!["Robot"]);
        assert!(config.profile.tagline.starts_with("I build"));
        assert_eq!(config.socials[0].platform, "Mastodon");
        assert_eq!(config.skills()[0].category, SkillCategory::Backend);
        assert_eq!(config.projects.source, ProjectSource::Manual);
        assert!(config.projects.items[0].featured);
        assert_eq!(config.projects.items[0].live_url, None);
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let config = from_toml(
            r#"
            [profile]
            tagline = "Hello"
        "#,
        );
        assert_eq!(config.username(), "octocat");
        assert_eq!(config.profile.tagline, "Hello");
        assert_eq!(config.profile.roles.len(), 3);
    }

    #[test]
    fn test_blank_username_uses_placeholder() {
        let config = from_toml(
            r#"
            [github]
            username = "  "
        "#,
        );
        assert_eq!(config.username(), DEFAULT_USERNAME);
    }

    #[test]
    fn test_token_fallback_only_when_unset() {
        let mut config = Config::default();
        config.apply_token_fallback(Some("from_env".to_string()));
        assert_eq!(config.github_token().as_deref(), Some("from_env"));

        let mut config = from_toml(
            r#"
            [github]
            token = "from_file"
        "#,
        );
        config.apply_token_fallback(Some("from_env".to_string()));
        assert_eq!(config.github_token().as_deref(), Some("from_file"));
    }

    #[test]
    fn test_layered_files() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let xdg = temp_dir.path().join("config.toml");
        let local = temp_dir.path().join("folio.toml");
        std::fs::write(&xdg, "[github]\nusername = \"xdg\"\ntoken = \"t\"\n").unwrap();
        std::fs::write(&local, "[github]\nusername = \"local\"\n").unwrap();

        let config: Config = Config::builder(Some(&xdg), &local)
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();
        assert_eq!(config.username(), "local");
        assert_eq!(config.github_token().as_deref(), Some("t"));
    }
}
