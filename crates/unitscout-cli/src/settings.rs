//! Settings file discovery.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use unitscout_core::Settings;

/// Project-local settings file, relative to the working directory.
pub const LOCAL_SETTINGS: &str = "config/settings.json";

/// Per-user settings file under the platform config directory.
pub fn user_settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("unitscout").join("settings.json"))
}

/// First settings file that applies: the explicit path, then the local
/// file, then the per-user file.
pub fn discover(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }

    let local = PathBuf::from(LOCAL_SETTINGS);
    if local.exists() {
        return Some(local);
    }

    user_settings_path().filter(|p| p.exists())
}

/// Load settings, falling back to defaults when no file is found. An
/// explicit path that does not exist, or a file that is not valid JSON, is
/// an error.
pub fn load(explicit: Option<&Path>) -> anyhow::Result<Settings> {
    match discover(explicit) {
        Some(path) => {
            if !path.exists() {
                anyhow::bail!("Settings file not found: {}", path.display());
            }
            debug!("Loading settings from {}", path.display());
            Ok(Settings::from_file(&path)?)
        }
        None => {
            warn!("settings.json not found; using defaults.");
            Ok(Settings::default())
        }
    }
}
