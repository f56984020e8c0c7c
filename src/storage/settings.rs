use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::kv_store::{Result, StorageError};

/// Environment variable overriding the data directory
pub const DATA_DIR_ENV: &str = "WERKWOORD_DATA_DIR";

/// Trainer settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    /// Entries kept per game leaderboard
    pub leaderboard_size: usize,
    /// Name shown on the leaderboard until the learner picks one
    pub default_player_name: String,
    /// Verbs per practice series
    pub series_size: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            leaderboard_size: 10,
            default_player_name: "Anonyme".to_string(),
            series_size: 10,
        }
    }
}

/// Default data directory (e.g. ~/.local/share/werkwoord)
pub fn default_data_dir() -> Result<PathBuf> {
    dirs::data_local_dir()
        .map(|p| p.join("werkwoord"))
        .ok_or(StorageError::DataDirNotFound)
}

/// Pick the data directory: explicit override, then the environment, then the default
pub fn resolve_data_dir(explicit: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(dir) = explicit {
        return Ok(dir);
    }
    match std::env::var_os(DATA_DIR_ENV) {
        Some(dir) if !dir.is_empty() => Ok(PathBuf::from(dir)),
        _ => default_data_dir(),
    }
}

/// Get the settings file path
pub fn get_settings_path(data_dir: &Path) -> PathBuf {
    data_dir.join("settings.json")
}

/// Load settings from file
pub fn load_settings(data_dir: &Path) -> Result<Settings> {
    let settings_path = get_settings_path(data_dir);

    if !settings_path.exists() {
        return Ok(Settings::default());
    }

    let content = fs::read_to_string(&settings_path)?;
    let settings: Settings = serde_json::from_str(&content)?;
    Ok(settings)
}

/// Save settings to file
pub fn save_settings(data_dir: &Path, settings: &Settings) -> Result<()> {
    fs::create_dir_all(data_dir)?;
    let settings_path = get_settings_path(data_dir);
    let content = serde_json::to_string_pretty(settings)?;
    fs::write(&settings_path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_settings_use_defaults() {
        let temp = TempDir::new().unwrap();
        let settings = load_settings(temp.path()).unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.leaderboard_size, 10);
        assert_eq!(settings.default_player_name, "Anonyme");
    }

    #[test]
    fn test_partial_settings_fill_defaults() {
        let temp = TempDir::new().unwrap();
        fs::write(get_settings_path(temp.path()), r#"{"leaderboardSize": 3}"#).unwrap();

        let settings = load_settings(temp.path()).unwrap();
        assert_eq!(settings.leaderboard_size, 3);
        assert_eq!(settings.series_size, 10);
    }

    #[test]
    fn test_save_and_load_settings() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("nested");
        let settings = Settings {
            default_player_name: "Lotte".to_string(),
            ..Settings::default()
        };

        save_settings(&dir, &settings).unwrap();
        assert_eq!(load_settings(&dir).unwrap(), settings);
    }

    #[test]
    fn test_explicit_data_dir_wins() {
        let dir = PathBuf::from("/tmp/werkwoord-explicit");
        assert_eq!(resolve_data_dir(Some(dir.clone())).unwrap(), dir);
    }
}
