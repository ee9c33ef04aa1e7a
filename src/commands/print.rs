// `folio print`: the portfolio as plain text or JSON.

use std::io::Write;

use serde::Serialize;

use crate::config::{Config, SocialLink};
use crate::error::Result;
use crate::github::{GitHubClient, Profile};
use crate::portfolio::format::{extract_domain, format_date, format_number};
use crate::portfolio::skills::group_by_category;
use crate::portfolio::{Project, Skill, load_projects};
use crate::state::filter::partition_by_demo;

#[derive(Debug, Serialize)]
struct Report<'a> {
    profile: &'a Profile,
    projects: &'a [Project],
    skills: &'a [Skill],
    socials: &'a [SocialLink],
}

/// Handle the print command.
pub async fn handle_print(client: &GitHubClient, config: &Config, json: bool) -> Result<()> {
    let username = config.username();
    let (profile, projects) = tokio::join!(
        client.get_user(username),
        load_projects(
            client,
            username,
            config.projects.source,
            &config.projects.items
        ),
    );
    let profile = profile?;
    let projects = projects?;
    let skills = config.skills();

    let mut stdout = std::io::stdout().lock();
    if json {
        let report = Report {
            profile: &profile,
            projects: &projects,
            skills: &skills,
            socials: &config.socials,
        };
        writeln!(stdout, "{}", serde_json::to_string_pretty(&report)?)?;
    } else {
        write_report(&mut stdout, config, &profile, &projects, &skills)?;
    }
    Ok(())
}

fn write_report(
    out: &mut impl Write,
    config: &Config,
    profile: &Profile,
    projects: &[Project],
    skills: &[Skill],
) -> std::io::Result<()> {
    let name = config
        .profile
        .name
        .as_deref()
        .unwrap_or_else(|| profile.display_name());
    writeln!(out, "{name}")?;
    if !config.profile.roles.is_empty() {
        writeln!(out, "{}", config.profile.roles.join(" · "))?;
    }
    writeln!(out, "{}", config.profile.tagline)?;

    writeln!(out, "\nAbout")?;
    if let Some(bio) = &profile.bio {
        writeln!(out, "  {bio}")?;
    }
    if let Some(location) = &profile.location {
        writeln!(out, "  Location: {location}")?;
    }
    writeln!(
        out,
        "  {} repositories · {} followers · {} following",
        format_number(profile.public_repos),
        format_number(profile.followers),
        format_number(profile.following)
    )?;
    writeln!(out, "  On GitHub since {}", format_date(&profile.created_at))?;

    writeln!(out, "\nSkills")?;
    for (category, members) in group_by_category(skills) {
        let names: Vec<String> = members
            .iter()
            .map(|s| format!("{} {}%", s.name, s.proficiency))
            .collect();
        writeln!(out, "  {}: {}", category.title(), names.join(", "))?;
    }

    writeln!(out, "\nProjects")?;
    let refs: Vec<&Project> = projects.iter().collect();
    let (demos, others) = partition_by_demo(&refs);
    for (title, group) in [("With demos", demos), ("Other projects", others)] {
        if group.is_empty() {
            continue;
        }
        writeln!(out, "  {title}")?;
        for project in group {
            let star = if project.featured { "⭐ " } else { "" };
            writeln!(
                out,
                "    {star}{} ★{} ⑂{}  {}",
                project.name,
                format_number(project.stars),
                format_number(project.forks),
                project.github_url
            )?;
            if !project.description.is_empty() {
                writeln!(out, "      {}", project.description)?;
            }
            if let Some(live) = &project.live_url {
                writeln!(out, "      demo: {live}")?;
            }
        }
    }
    if projects.is_empty() {
        writeln!(out, "  No projects found.")?;
    }

    writeln!(out, "\nContact")?;
    if let Some(email) = &profile.email {
        writeln!(out, "  Email: {email}")?;
    }
    if let Some(blog) = &profile.blog {
        writeln!(out, "  Website: {} ({blog})", extract_domain(blog))?;
    }
    writeln!(out, "  GitHub: {}", profile.html_url)?;
    if let Some(twitter) = &profile.twitter_username {
        writeln!(out, "  Twitter: https://twitter.com/{twitter}")?;
    }
    for social in &config.socials {
        writeln!(out, "  {}: {}", social.platform, social.url)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::filter::tests::project;
    use serde_json::json;

    fn profile() -> Profile {
        serde_json::from_value(json!({
            "login": "octocat",
            "name": null,
            "avatar_url": "https://avatars.githubusercontent.com/u/583231",
            "bio": "Mascot",
            "location": "San Francisco",
            "email": "octo@example.com",
            "blog": "https://www.github.blog",
            "twitter_username": "octo",
            "public_repos": 8,
            "followers": 1200,
            "following": 9,
            "created_at": "2011-01-25T18:44:36Z",
            "html_url": "https://github.com/octocat"
        }))
        .unwrap()
    }

    fn render(config: &Config, projects: &[Project]) -> String {
        let mut out = Vec::new();
        write_report(&mut out, config, &profile(), projects, &config.skills()).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn report_covers_every_section() {
        let mut featured = project(1, "folio", &["Rust"], true);
        featured.featured = true;
        let text = render(
            &Config::default(),
            &[project(2, "pulse", &["Rust"], false), featured],
        );

        assert!(text.starts_with("octocat\n"));
        assert!(text.contains("1.2K followers"));
        assert!(text.contains("On GitHub since January 25, 2011"));
        assert!(text.contains("Tools & DevOps: Git 90%"));
        assert!(text.contains("With demos\n    ⭐ folio"));
        assert!(text.contains("demo: https://folio.example"));
        assert!(text.contains("Other projects\n    pulse"));
        assert!(text.contains("Website: github.blog"));
        assert!(text.contains("Twitter: https://twitter.com/octo"));
    }

    #[test]
    fn configured_name_overrides_profile() {
        let mut config = Config::default();
        config.profile.name = Some("The Octocat".to_string());
        config.socials.push(SocialLink {
            platform: "Mastodon".to_string(),
            url: "https://hachyderm.io/@octo".to_string(),
        });

        let text = render(&config, &[]);
        assert!(text.starts_with("The Octocat\n"));
        assert!(text.contains("No projects found."));
        assert!(text.contains("Mastodon: https://hachyderm.io/@octo"));
    }
}
