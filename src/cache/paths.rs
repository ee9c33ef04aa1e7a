// Filesystem locations for folio's local state.

use std::path::PathBuf;

use directories::ProjectDirs;

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", "folio")
}

/// Get the base cache directory (~/.cache/folio on Linux).
pub fn cache_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.cache_dir().to_path_buf())
}

/// Get the config directory (~/.config/folio on Linux).
pub fn config_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().to_path_buf())
}

/// Path to the persisted UI preferences (theme).
pub fn preferences_path() -> Option<PathBuf> {
    cache_dir().map(|dir| dir.join("preferences.json"))
}

/// Path to the log file written during interactive sessions.
pub fn log_path() -> Option<PathBuf> {
    cache_dir().map(|dir| dir.join("folio.log"))
}
