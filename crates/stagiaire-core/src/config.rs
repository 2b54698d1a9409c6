use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

const APP_DIR: &str = "stagiaire";
const DEFAULT_RECENT_ACTIVITY_LIMIT: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            _ => Err(format!("Invalid theme '{}'. Valid values: light, dark", s)),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub data_file: Option<PathBuf>,
    #[serde(default)]
    pub storage_file: Option<PathBuf>,
    #[serde(default)]
    pub theme: Option<Theme>,
    #[serde(default)]
    pub recent_activity_limit: Option<usize>,
}

impl AppConfig {
    pub fn config_path() -> Option<PathBuf> {
        #[cfg(target_os = "macos")]
        {
            dirs::home_dir().map(|home| home.join(".config").join(APP_DIR).join("config.toml"))
        }
        #[cfg(not(target_os = "macos"))]
        {
            dirs::config_dir().map(|config| config.join(APP_DIR).join("config.toml"))
        }
    }

    pub fn load() -> Self {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Self::default(),
        }
    }

    /// Reads a config file, falling back to defaults when it is missing or malformed.
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(config) => config,
                Err(e) => {
                    tracing::warn!("Ignoring malformed config {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Could not read config {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn effective_theme(&self) -> Theme {
        self.theme.unwrap_or_default()
    }

    pub fn effective_recent_activity_limit(&self) -> usize {
        self.recent_activity_limit
            .unwrap_or(DEFAULT_RECENT_ACTIVITY_LIMIT)
    }

    /// Flag value wins, then the configured path, then the platform data dir.
    pub fn resolve_storage_file(&self, flag: Option<PathBuf>) -> Option<PathBuf> {
        flag.or_else(|| self.storage_file.clone())
            .or_else(|| dirs::data_dir().map(|dir| dir.join(APP_DIR).join("storage.json")))
    }

    pub fn resolve_data_file(&self, flag: Option<PathBuf>) -> Option<PathBuf> {
        flag.or_else(|| self.data_file.clone())
            .or_else(|| dirs::data_dir().map(|dir| dir.join(APP_DIR).join("data.json")))
    }
}
