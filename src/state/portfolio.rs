// Portfolio view state.
// Fetched data plus the transient search, filter and selection state of the projects section.

use std::collections::HashMap;

use ratatui::widgets::ListState;

use crate::github::{Languages, Profile};
use crate::portfolio::{Project, Skill};

use super::filter::{filter_projects, filter_technologies, partition_by_demo};
use super::loading::LoadingState;

#[derive(Debug, Default)]
pub struct PortfolioState {
    pub profile: LoadingState<Profile>,
    pub projects: LoadingState<Vec<Project>>,
    pub skills: Vec<Skill>,
    pub search_query: String,
    /// Whether keystrokes go to the search box.
    pub search_active: bool,
    /// `None` shows every technology.
    pub selected_technology: Option<String>,
    pub list_state: ListState,
    /// Whether the detail overlay for the selected project is open.
    pub detail_open: bool,
    /// Language breakdowns fetched for the detail overlay, by project id.
    pub languages: HashMap<u64, LoadingState<Languages>>,
}

impl PortfolioState {
    pub fn new(skills: Vec<Skill>) -> Self {
        Self {
            skills,
            ..Self::default()
        }
    }

    /// Mark both queries as in flight.
    pub fn set_loading(&mut self) {
        self.profile = LoadingState::Loading;
        self.projects = LoadingState::Loading;
        self.detail_open = false;
        self.languages.clear();
    }

    pub fn set_profile<E: std::fmt::Display>(&mut self, result: Result<Profile, E>) {
        self.profile = LoadingState::from_result(result);
    }

    pub fn set_projects<E: std::fmt::Display>(&mut self, result: Result<Vec<Project>, E>) {
        self.projects = LoadingState::from_result(result);

        // A technology that vanished on refetch would hide every project.
        if let Some(tech) = &self.selected_technology {
            if !self.technologies().iter().any(|t| t.eq_ignore_ascii_case(tech)) {
                self.selected_technology = None;
            }
        }
        self.reset_selection();
    }

    /// Projects passing the current filters, demo projects first.
    pub fn visible_projects(&self) -> Vec<&Project> {
        let Some(projects) = self.projects.data() else {
            return Vec::new();
        };
        let filtered = filter_projects(
            projects,
            &self.search_query,
            self.selected_technology.as_deref(),
        );
        let (mut ordered, others) = partition_by_demo(&filtered);
        ordered.extend(others);
        ordered
    }

    /// Technologies offered by the filter bar.
    pub fn technologies(&self) -> Vec<String> {
        self.projects
            .data()
            .map(|projects| filter_technologies(projects))
            .unwrap_or_default()
    }

    pub fn set_selected_technology(&mut self, technology: Option<String>) {
        self.selected_technology = technology;
        self.reset_selection();
    }

    /// Step through "All" followed by each offered technology, wrapping.
    pub fn cycle_technology(&mut self, forward: bool) {
        let mut options: Vec<Option<String>> = vec![None];
        options.extend(self.technologies().into_iter().map(Some));

        let current = options
            .iter()
            .position(|o| *o == self.selected_technology)
            .unwrap_or(0);
        let next = if forward {
            (current + 1) % options.len()
        } else {
            (current + options.len() - 1) % options.len()
        };

        self.set_selected_technology(options.swap_remove(next));
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
        self.reset_selection();
    }

    pub fn push_search_char(&mut self, c: char) {
        self.search_query.push(c);
        self.reset_selection();
    }

    pub fn pop_search_char(&mut self) {
        self.search_query.pop();
        self.reset_selection();
    }

    /// Select the next item in the list.
    pub fn select_next(&mut self) {
        let len = self.visible_projects().len();
        if len == 0 {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) if i >= len - 1 => i, // Stay at end
            Some(i) => i + 1,
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    /// Select the previous item in the list.
    pub fn select_prev(&mut self) {
        if self.visible_projects().is_empty() {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) => i.saturating_sub(1),
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    /// Reset selection to first item.
    pub fn reset_selection(&mut self) {
        if self.visible_projects().is_empty() {
            self.list_state.select(None);
            self.detail_open = false;
        } else {
            self.list_state.select(Some(0));
        }
    }

    pub fn selected_project(&self) -> Option<&Project> {
        let index = self.list_state.selected()?;
        self.visible_projects().get(index).copied()
    }

    pub fn set_languages<E: std::fmt::Display>(
        &mut self,
        project_id: u64,
        result: Result<Languages, E>,
    ) {
        self.languages
            .insert(project_id, LoadingState::from_result(result));
    }

    /// Open the detail overlay if something is selected.
    pub fn toggle_detail(&mut self) {
        self.detail_open = !self.detail_open && self.selected_project().is_some();
    }
}
