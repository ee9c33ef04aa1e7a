// Command-line interface.

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "folio")]
#[command(version)]
#[command(about = "Terminal portfolio: profile, skills, and projects from GitHub")]
#[command(after_long_help = r#"CONFIGURATION
    folio reads configuration from:
      1. ~/.config/folio/config.toml (or $XDG_CONFIG_HOME/folio/config.toml)
      2. ./folio.toml
      3. Environment variables (FOLIO_* prefix, e.g., FOLIO_GITHUB_USERNAME)

ENVIRONMENT VARIABLES
    FOLIO_GITHUB_USERNAME    GitHub user to show (default: octocat)
    FOLIO_GITHUB_TOKEN       GitHub personal access token
    GITHUB_TOKEN             Used when no other token is configured
    RUST_LOG                 Log filter (default: folio=info)
"#)]
pub struct Cli {
    /// GitHub user whose portfolio to show
    #[arg(short, long, global = true)]
    pub username: Option<String>,

    /// GitHub token (raises the API rate limit)
    #[arg(long, global = true)]
    pub token: Option<String>,

    /// Run a command instead of the interactive view
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commands {
    /// Print the profile and projects as plain text
    Print {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the current GitHub API rate limit
    Limits {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_subcommand_means_interactive() {
        let cli = Cli::try_parse_from(["folio"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.username.is_none());
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["folio", "print", "--json", "-u", "hubot"]).unwrap();
        assert_eq!(cli.command, Some(Commands::Print { json: true }));
        assert_eq!(cli.username.as_deref(), Some("hubot"));
    }

    #[test]
    fn limits_subcommand() {
        let cli = Cli::try_parse_from(["folio", "--token", "ghp_x", "limits"]).unwrap();
        assert_eq!(cli.command, Some(Commands::Limits { json: false }));
        assert_eq!(cli.token.as_deref(), Some("ghp_x"));
    }
}
