// App state and main event loop.
// Manages sections, fetch results arriving from background tasks, and keyboard input handling.

use std::io;
use std::sync::Arc;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::prelude::*;
use tokio::sync::mpsc;

use crate::config::{Config, ProfileConfig, SocialLink};
use crate::error::FolioError;
use crate::github::{GitHubClient, Languages, Profile};
use crate::portfolio::{ManualProject, Project, ProjectSource, load_projects};
use crate::state::{LoadingState, PortfolioState, Theme, ThemeStore};
use crate::ui;

/// How long each hero role stays on screen.
const ROLE_ROTATION: Duration = Duration::from_secs(3);

/// Active section of the portfolio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Section {
    #[default]
    Hero,
    About,
    Skills,
    Projects,
    Contact,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Hero,
        Section::About,
        Section::Skills,
        Section::Projects,
        Section::Contact,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Section::Hero => "Home",
            Section::About => "About",
            Section::Skills => "Skills",
            Section::Projects => "Projects",
            Section::Contact => "Contact",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            Section::Hero => Section::About,
            Section::About => Section::Skills,
            Section::Skills => Section::Projects,
            Section::Projects => Section::Contact,
            Section::Contact => Section::Hero,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            Section::Hero => Section::Contact,
            Section::About => Section::Hero,
            Section::Skills => Section::About,
            Section::Projects => Section::Skills,
            Section::Contact => Section::Projects,
        }
    }
}

/// Result of a background fetch.
#[derive(Debug)]
pub enum FetchEvent {
    Profile(Result<Profile, FolioError>),
    Projects(Result<Vec<Project>, FolioError>),
    Languages {
        project_id: u64,
        result: Result<Languages, FolioError>,
    },
}

/// What to fetch on load and refresh.
#[derive(Debug, Clone)]
struct FetchPlan {
    username: String,
    source: ProjectSource,
    curated: Vec<ManualProject>,
}

/// Main application state.
pub struct App {
    /// Currently active section.
    pub active_section: Section,
    pub portfolio: PortfolioState,
    pub theme: ThemeStore,
    pub profile_copy: ProfileConfig,
    pub socials: Vec<SocialLink>,
    pub username: String,
    /// Index into `profile_copy.roles` shown in the hero.
    pub role_index: usize,
    /// One-line message for the status bar.
    pub notice: Option<String>,
    pub show_help: bool,
    /// Whether the app should exit.
    pub should_quit: bool,
    client: Arc<GitHubClient>,
    plan: FetchPlan,
    /// Bumped by every refresh; events tagged with an older value are dropped.
    generation: u64,
    events_tx: mpsc::UnboundedSender<(u64, FetchEvent)>,
    events_rx: mpsc::UnboundedReceiver<(u64, FetchEvent)>,
    last_role_switch: Instant,
}

impl App {
    pub fn new(client: Arc<GitHubClient>, config: Config, theme: ThemeStore) -> Self {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        let plan = FetchPlan {
            username: config.username().to_string(),
            source: config.projects.source,
            curated: config.projects.items.clone(),
        };
        Self {
            active_section: Section::default(),
            portfolio: PortfolioState::new(config.skills()),
            theme,
            username: plan.username.clone(),
            profile_copy: config.profile,
            socials: config.socials,
            role_index: 0,
            notice: None,
            show_help: false,
            should_quit: false,
            client,
            plan,
            generation: 0,
            events_tx,
            events_rx,
            last_role_switch: Instant::now(),
        }
    }

    pub fn client(&self) -> &GitHubClient {
        &self.client
    }

    pub fn theme(&self) -> Theme {
        self.theme.theme()
    }

    /// Role currently shown in the hero, if any are configured.
    pub fn current_role(&self) -> Option<&str> {
        let roles = &self.profile_copy.roles;
        (!roles.is_empty()).then(|| roles[self.role_index % roles.len()].as_str())
    }

    /// Start fetching the profile and projects in the background.
    /// Must be called from within a tokio runtime.
    pub fn refresh(&mut self) {
        self.generation += 1;
        let generation = self.generation;
        self.portfolio.set_loading();

        let client = Arc::clone(&self.client);
        let tx = self.events_tx.clone();
        let username = self.plan.username.clone();
        tokio::spawn(async move {
            let result = client.get_user(&username).await;
            let _ = tx.send((generation, FetchEvent::Profile(result)));
        });

        let client = Arc::clone(&self.client);
        let tx = self.events_tx.clone();
        let plan = self.plan.clone();
        tokio::spawn(async move {
            let result =
                load_projects(&client, &plan.username, plan.source, &plan.curated).await;
            let _ = tx.send((generation, FetchEvent::Projects(result)));
        });
    }

    /// Fetch the language breakdown for the selected project once.
    fn fetch_languages(&mut self) {
        let Some(project) = self.portfolio.selected_project() else {
            return;
        };
        if self.portfolio.languages.contains_key(&project.id) {
            return;
        }
        let project_id = project.id;
        let repo = project.name.clone();
        self.portfolio
            .languages
            .insert(project_id, LoadingState::Loading);

        let client = Arc::clone(&self.client);
        let tx = self.events_tx.clone();
        let owner = self.plan.username.clone();
        let generation = self.generation;
        tokio::spawn(async move {
            let result = client.get_languages(&owner, &repo).await;
            let _ = tx.send((generation, FetchEvent::Languages { project_id, result }));
        });
    }

    /// Drop every cached response and fetch again.
    fn reload(&mut self) {
        self.client.clear_cache();
        self.refresh();
        self.notice = Some("Refreshing…".to_string());
    }

    /// Apply a finished fetch.
    pub fn apply(&mut self, event: FetchEvent) {
        match event {
            FetchEvent::Profile(result) => {
                if let Err(e) = &result {
                    tracing::warn!(error = %e, "Profile fetch failed");
                }
                self.portfolio.set_profile(result);
            }
            FetchEvent::Projects(result) => {
                if let Err(e) = &result {
                    tracing::warn!(error = %e, "Project fetch failed");
                }
                self.portfolio.set_projects(result);
                self.notice = None;
            }
            FetchEvent::Languages { project_id, result } => {
                if let Err(e) = &result {
                    tracing::debug!(project_id, error = %e, "Language fetch failed");
                }
                self.portfolio.set_languages(project_id, result);
            }
        }
    }

    /// Apply a fetch result unless a later refresh superseded it.
    fn receive(&mut self, generation: u64, event: FetchEvent) {
        if generation != self.generation {
            tracing::debug!(generation, current = self.generation, "Dropping stale fetch result");
            return;
        }
        self.apply(event);
    }

    /// Apply every fetch result that has arrived.
    fn drain_events(&mut self) {
        while let Ok((generation, event)) = self.events_rx.try_recv() {
            self.receive(generation, event);
        }
    }

    /// Advance the hero role rotation.
    fn tick(&mut self, now: Instant) {
        if now.duration_since(self.last_role_switch) >= ROLE_ROTATION {
            self.role_index = self.role_index.wrapping_add(1);
            self.last_role_switch = now;
        }
    }

    /// Main event loop.
    pub fn run(&mut self, terminal: &mut Terminal<impl Backend>) -> io::Result<()> {
        while !self.should_quit {
            self.drain_events();
            self.tick(Instant::now());
            terminal.draw(|frame| ui::draw(frame, self))?;
            self.handle_events()?;
        }
        Ok(())
    }

    /// Handle keyboard and other events.
    #[allow(clippy::collapsible_if)]
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
            }
        }
        Ok(())
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if self.show_help {
            match key.code {
                KeyCode::Char('q') => self.should_quit = true,
                KeyCode::Esc | KeyCode::Char('?') => self.show_help = false,
                _ => {}
            }
            return;
        }

        if self.portfolio.search_active {
            self.handle_search_key(key.code);
            return;
        }

        if self.portfolio.detail_open {
            match key.code {
                KeyCode::Char('q') => self.should_quit = true,
                KeyCode::Esc | KeyCode::Enter => self.portfolio.detail_open = false,
                _ => {}
            }
            return;
        }

        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Tab => self.active_section = self.active_section.next(),
            KeyCode::BackTab => self.active_section = self.active_section.prev(),
            KeyCode::Char('?') => self.show_help = true,
            KeyCode::Char('t') => self.toggle_theme(),
            KeyCode::Char('r') => self.reload(),
            _ if self.active_section == Section::Projects => self.handle_projects_key(key.code),
            _ => {}
        }
    }

    fn handle_projects_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('/') => self.portfolio.search_active = true,
            KeyCode::Left | KeyCode::Char('h') => self.portfolio.cycle_technology(false),
            KeyCode::Right | KeyCode::Char('l') => self.portfolio.cycle_technology(true),
            KeyCode::Down | KeyCode::Char('j') => self.portfolio.select_next(),
            KeyCode::Up | KeyCode::Char('k') => self.portfolio.select_prev(),
            KeyCode::Enter => {
                self.portfolio.toggle_detail();
                if self.portfolio.detail_open {
                    self.fetch_languages();
                }
            }
            KeyCode::Esc => {
                self.portfolio.search_query.clear();
                self.portfolio.set_selected_technology(None);
            }
            _ => {}
        }
    }

    fn handle_search_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Esc => {
                self.portfolio.search_active = false;
                self.portfolio.set_search_query("");
            }
            KeyCode::Enter => self.portfolio.search_active = false,
            KeyCode::Backspace => self.portfolio.pop_search_char(),
            KeyCode::Char(c) => self.portfolio.push_search_char(c),
            _ => {}
        }
    }

    fn toggle_theme(&mut self) {
        match self.theme.toggle() {
            Ok(theme) => self.notice = Some(format!("Theme: {}", theme.title())),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to save theme");
                self.notice = Some(format!("Theme not saved: {e}"));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::{MockTransport, mock_json};
    use crate::portfolio::project::tests::{REPOS_URL, repo_json};
    use crossterm::event::KeyModifiers;
    use serde_json::json;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn app_with(transport: &MockTransport) -> App {
        let client = Arc::new(GitHubClient::new(Arc::new(transport.clone()), None));
        App::new(client, Config::default(), ThemeStore::load(None))
    }

    #[test]
    fn section_cycle_wraps() {
        let mut section = Section::Hero;
        for _ in 0..Section::ALL.len() {
            section = section.next();
        }
        assert_eq!(section, Section::Hero);
        assert_eq!(Section::Hero.prev(), Section::Contact);
    }

    #[test]
    fn tab_and_quit_keys() {
        let mut app = app_with(&MockTransport::new());
        app.handle_key(key(KeyCode::Tab));
        assert_eq!(app.active_section, Section::About);
        app.handle_key(key(KeyCode::BackTab));
        app.handle_key(key(KeyCode::BackTab));
        assert_eq!(app.active_section, Section::Contact);
        app.handle_key(key(KeyCode::Char('q')));
        assert!(app.should_quit);
    }

    #[test]
    fn help_swallows_other_keys() {
        let mut app = app_with(&MockTransport::new());
        app.handle_key(key(KeyCode::Char('?')));
        assert!(app.show_help);
        app.handle_key(key(KeyCode::Tab));
        assert_eq!(app.active_section, Section::Hero);
        app.handle_key(key(KeyCode::Esc));
        assert!(!app.show_help);
    }

    #[test]
    fn theme_toggle_updates_notice() {
        let mut app = app_with(&MockTransport::new());
        app.handle_key(key(KeyCode::Char('t')));
        assert_eq!(app.theme(), Theme::Light);
        assert_eq!(app.notice.as_deref(), Some("Theme: light"));
    }

    #[test]
    fn roles_rotate_on_tick() {
        let mut app = app_with(&MockTransport::new());
        assert_eq!(app.current_role(), Some("Full Stack Developer"));
        let later = app.last_role_switch + ROLE_ROTATION;
        app.tick(later);
        assert_eq!(app.current_role(), Some("Software Engineer"));
    }

    #[test]
    fn search_mode_captures_typing() {
        let mut app = app_with(&MockTransport::new());
        app.active_section = Section::Projects;
        app.apply(FetchEvent::Projects(Ok(Vec::new())));

        app.handle_key(key(KeyCode::Char('/')));
        for c in "tq".chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
        assert_eq!(app.portfolio.search_query, "tq");
        assert!(!app.should_quit);

        app.handle_key(key(KeyCode::Backspace));
        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.portfolio.search_query, "t");
        assert!(!app.portfolio.search_active);
    }

    #[tokio::test]
    async fn refresh_delivers_results_over_channel() {
        let transport = MockTransport::new();
        transport.always(
            "https://api.github.com/users/octocat",
            mock_json(
                200,
                json!({
                    "login": "octocat",
                    "name": "The Octocat",
                    "avatar_url": "https://avatars.githubusercontent.com/u/583231",
                    "bio": null,
                    "location": null,
                    "email": null,
                    "blog": "",
                    "twitter_username": null,
                    "public_repos": 8,
                    "followers": 1,
                    "following": 1,
                    "created_at": "2011-01-25T18:44:36Z",
                    "html_url": "https://github.com/octocat"
                }),
            ),
        );
        transport.always(REPOS_URL, mock_json(200, json!([repo_json(1, "folio", false)])));

        let mut app = app_with(&transport);
        app.refresh();
        assert!(app.portfolio.projects.is_loading());

        for _ in 0..2 {
            let (generation, event) = app.events_rx.recv().await.unwrap();
            app.receive(generation, event);
        }

        assert_eq!(
            app.portfolio.profile.data().map(|p| p.login.as_str()),
            Some("octocat")
        );
        assert_eq!(app.portfolio.visible_projects().len(), 1);
    }

    #[tokio::test]
    async fn opening_detail_fetches_languages_once() {
        let transport = MockTransport::new();
        let languages_url = "https://api.github.com/repos/octocat/folio/languages";
        transport.always(languages_url, mock_json(200, json!({"Rust": 900, "Shell": 100})));

        let mut app = app_with(&transport);
        app.active_section = Section::Projects;
        app.apply(FetchEvent::Projects(Ok(vec![
            crate::state::filter::tests::project(7, "folio", &["Rust"], false),
        ])));

        app.handle_key(key(KeyCode::Enter));
        assert!(app.portfolio.detail_open);
        assert!(app.portfolio.languages[&7].is_loading());

        let (generation, event) = app.events_rx.recv().await.unwrap();
        app.receive(generation, event);
        assert_eq!(
            app.portfolio.languages[&7].data().map(|l| l["Rust"]),
            Some(900)
        );

        app.handle_key(key(KeyCode::Esc));
        app.handle_key(key(KeyCode::Enter));
        assert!(app.portfolio.languages[&7].is_loaded());
        assert_eq!(transport.hits(languages_url), 1);
    }

    #[tokio::test]
    async fn results_from_superseded_refresh_are_dropped() {
        let mut app = app_with(&MockTransport::new());
        app.refresh();
        let first = app.generation;
        app.reload();

        app.receive(
            first,
            FetchEvent::Projects(Ok(vec![crate::state::filter::tests::project(
                9, "old", &[], false,
            )])),
        );
        assert!(app.portfolio.projects.is_loading());
        assert_eq!(app.notice.as_deref(), Some("Refreshing…"));

        app.receive(app.generation, FetchEvent::Projects(Ok(Vec::new())));
        assert!(app.portfolio.projects.is_loaded());
        assert!(app.notice.is_none());
    }

    #[tokio::test]
    async fn reload_clears_cache_before_fetching() {
        let transport = MockTransport::new();
        transport.always(REPOS_URL, mock_json(200, json!([])));
        let mut app = app_with(&transport);

        app.refresh();
        for _ in 0..2 {
            let (generation, event) = app.events_rx.recv().await.unwrap();
            app.receive(generation, event);
        }
        app.handle_key(key(KeyCode::Char('r')));
        for _ in 0..2 {
            let (generation, event) = app.events_rx.recv().await.unwrap();
            app.receive(generation, event);
        }

        assert_eq!(transport.hits(REPOS_URL), 2);
    }
}
