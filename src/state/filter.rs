// Project search and technology filtering.

use std::collections::BTreeSet;

use crate::portfolio::Project;

/// How many technologies the filter bar offers besides "All".
pub const MAX_FILTER_TECHNOLOGIES: usize = 10;

/// Case-insensitive substring match on name or description. An empty query
/// matches everything.
pub fn matches_search(project: &Project, query: &str) -> bool {
    let query = query.trim().to_lowercase();
    query.is_empty()
        || project.name.to_lowercase().contains(&query)
        || project.description.to_lowercase().contains(&query)
}

/// Case-insensitive exact match against any of the project's technologies.
pub fn matches_technology(project: &Project, technology: Option<&str>) -> bool {
    match technology {
        None => true,
        Some(tech) => {
            let tech = tech.to_lowercase();
            project.technologies.iter().any(|t| t.to_lowercase() == tech)
        }
    }
}

pub fn filter_projects<'a>(
    projects: &'a [Project],
    query: &str,
    technology: Option<&str>,
) -> Vec<&'a Project> {
    projects
        .iter()
        .filter(|p| matches_search(p, query) && matches_technology(p, technology))
        .collect()
}

/// Every distinct technology across `projects`, sorted.
pub fn all_technologies(projects: &[Project]) -> Vec<String> {
    projects
        .iter()
        .flat_map(|p| p.technologies.iter().cloned())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// The technologies offered in the filter bar.
pub fn filter_technologies(projects: &[Project]) -> Vec<String> {
    let mut technologies = all_technologies(projects);
    technologies.truncate(MAX_FILTER_TECHNOLOGIES);
    technologies
}

/// Projects with a live demo first, then the rest. Order within each group
/// is preserved.
pub fn partition_by_demo<'a>(projects: &[&'a Project]) -> (Vec<&'a Project>, Vec<&'a Project>) {
    projects.iter().copied().partition(|p| p.has_demo())
}
