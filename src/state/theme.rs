// Theme preference.
// Persisted as JSON under the cache directory so it survives restarts.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::cache::disk::{read_json, write_json};
use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct Preferences {
    #[serde(default)]
    theme: Theme,
}

/// Current theme plus where to save it. Without a path nothing is persisted.
#[derive(Debug)]
pub struct ThemeStore {
    path: Option<PathBuf>,
    theme: Theme,
}

impl ThemeStore {
    /// Load the saved theme. An unreadable preferences file means the default.
    pub fn load(path: Option<PathBuf>) -> Self {
        let theme = match path.as_deref().map(read_json::<Preferences>) {
            Some(Ok(Some(prefs))) => prefs.theme,
            Some(Err(e)) => {
                tracing::warn!(error = %e, "Ignoring unreadable preferences");
                Theme::default()
            }
            _ => Theme::default(),
        };
        Self { path, theme }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn set(&mut self, theme: Theme) -> Result<()> {
        self.theme = theme;
        if let Some(path) = &self.path {
            write_json(path, &Preferences { theme })?;
            tracing::debug!(theme = theme.title(), "Saved theme");
        }
        Ok(())
    }

    /// Flip between light and dark and save the result.
    pub fn toggle(&mut self) -> Result<Theme> {
        self.set(self.theme.toggled())?;
        Ok(self.theme)
    }
}
