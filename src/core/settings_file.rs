//! Settings file loading
//!
//! Reads [`DisplaySettings`] from a JSON file on startup. The file is never
//! written: preferences are edited by hand, and in-session changes last only
//! as long as the session.
//!
//! # File Location
//!
//! `settings.json` in the platform config directory, e.g.
//! `~/.config/boardsim/settings.json` on Linux, unless `--config` names
//! another path. Falls back to `./settings.json` when no config directory
//! can be determined.
//!
//! # Error Handling
//!
//! [`read_settings`] reports every failure. [`load_settings`] is the
//! startup path: a missing file is normal, and an unreadable or malformed one
//! is logged before falling back to defaults.

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use tracing::{info, warn};

use crate::core::error::CoreResult;
use crate::core::settings::DisplaySettings;

/// Settings filename
const SETTINGS_FILENAME: &str = "settings.json";

/// Default settings file path
pub fn settings_path() -> PathBuf {
    if let Some(proj_dirs) = ProjectDirs::from("com", "boardsim", "boardsim") {
        proj_dirs.config_dir().join(SETTINGS_FILENAME)
    } else {
        PathBuf::from(SETTINGS_FILENAME)
    }
}

/// Read and parse a settings file
pub fn read_settings(path: &Path) -> CoreResult<DisplaySettings> {
    let contents = fs::read_to_string(path)?;
    let settings = serde_json::from_str(&contents)?;
    Ok(settings)
}

/// Load settings for startup, falling back to defaults
///
/// `explicit` is the `--config` path; when `None` the default location is
/// tried.
pub fn load_settings(explicit: Option<&Path>) -> DisplaySettings {
    let path = explicit.map(Path::to_path_buf).unwrap_or_else(settings_path);

    if !path.exists() {
        info!(
            "[SETTINGS] No settings file found at {:?}. Using defaults.",
            path
        );
        return DisplaySettings::default();
    }

    match read_settings(&path) {
        Ok(settings) => {
            info!("[SETTINGS] Loaded settings from {:?}", path);
            settings
        }
        Err(e) => {
            warn!(
                "[SETTINGS] Failed to load settings file at {:?}: {}. Using defaults.",
                path, e
            );
            DisplaySettings::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::CoreError;
    use crate::core::settings::{BoardTheme, PieceStyle};

    fn temp_file(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "boardsim-{}-{}-{}",
            std::process::id(),
            name,
            SETTINGS_FILENAME
        ));
        fs::write(&path, contents).expect("write temp settings");
        path
    }

    #[test]
    fn test_settings_path_ends_with_filename() {
        assert!(settings_path().ends_with(SETTINGS_FILENAME));
    }

    #[test]
    fn test_read_settings_full_file() {
        let path = temp_file(
            "full",
            r#"{
                "board_theme": "blue",
                "piece_style": "modern",
                "show_hints": false,
                "use_color": false
            }"#,
        );

        let settings = read_settings(&path).unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(settings.board_theme, BoardTheme::Blue);
        assert_eq!(settings.piece_style, PieceStyle::Modern);
        assert!(!settings.show_hints);
        assert!(!settings.use_color);
    }

    #[test]
    fn test_read_settings_malformed_json() {
        let path = temp_file("malformed", "{ board_theme: ");
        let result = read_settings(&path);
        fs::remove_file(&path).ok();

        assert!(matches!(result, Err(CoreError::SettingsSerialization(_))));
    }

    #[test]
    fn test_read_settings_missing_file() {
        let path = std::env::temp_dir().join("boardsim-does-not-exist.json");
        assert!(matches!(read_settings(&path), Err(CoreError::SettingsIo(_))));
    }

    #[test]
    fn test_load_settings_falls_back_to_defaults() {
        //! A broken file never stops the session from starting
        let path = temp_file("fallback", "not json at all");
        let settings = load_settings(Some(&path));
        fs::remove_file(&path).ok();

        assert_eq!(settings, DisplaySettings::default());
    }
}
