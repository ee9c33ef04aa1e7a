mod app;
mod cache;
mod cli;
mod commands;
mod config;
mod error;
mod github;
mod http;
mod portfolio;
mod readme;
mod state;
mod ui;

use std::fs::{self, OpenOptions};
use std::sync::{Arc, Mutex};

use clap::Parser;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::writer::BoxMakeWriter;

use app::App;
use cache::paths;
use cli::{Cli, Commands};
use github::GitHubClient;
use http::ReqwestTransport;
use state::ThemeStore;

/// The interactive view owns the terminal, so its logs go to a file.
fn log_writer(interactive: bool) -> BoxMakeWriter {
    if !interactive {
        return BoxMakeWriter::new(std::io::stderr);
    }

    let file = paths::log_path().and_then(|path| {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).ok()?;
        }
        OpenOptions::new().create(true).append(true).open(path).ok()
    });

    match file {
        Some(file) => BoxMakeWriter::new(Mutex::new(file)),
        None => BoxMakeWriter::new(std::io::sink),
    }
}

fn init_tracing(interactive: bool) {
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::new("folio=info"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_ansi(!interactive)
        .with_writer(log_writer(interactive))
        .init();
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_tracing(cli.command.is_none());

    // Load configuration (config files -> env vars -> CLI flags)
    let mut config = config::Config::load()?;
    if let Some(username) = cli.username {
        config.github.username = username;
    }
    if cli.token.is_some() {
        config.github.token = cli.token;
    }

    let mut client = GitHubClient::new(
        Arc::new(ReqwestTransport::default()),
        config.github_token(),
    );
    if let Some(base_url) = config.github.base_url.clone() {
        client = client.with_base_url(base_url);
    }
    let client = Arc::new(client);

    match cli.command {
        Some(Commands::Print { json }) => {
            commands::print::handle_print(&client, &config, json).await?;
        }
        Some(Commands::Limits { json }) => {
            commands::limits::handle_limits(&client, json).await?;
        }
        None => {
            tracing::info!(username = config.username(), "Starting interactive view");
            let theme = ThemeStore::load(paths::preferences_path());
            let mut app = App::new(client, config, theme);
            app.refresh();

            let mut terminal = ratatui::init();
            let result = tokio::task::block_in_place(|| app.run(&mut terminal));
            ratatui::restore();
            result?;
        }
    }

    Ok(())
}
