use crate::errors::{AppError, AppResult};
use crate::models::language::Language;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

pub mod migrate;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path of the JSON snapshot exported from the back office
    #[serde(default = "default_snapshot")]
    pub snapshot: String,
    /// "es" or "en"
    #[serde(default = "default_language")]
    pub language: String,
    #[serde(default = "default_separator_char")]
    pub separator_char: String,
    /// Colored calendar cells and gap tables
    #[serde(default = "default_color")]
    pub color: bool,
}

pub(crate) fn default_snapshot() -> String {
    Config::snapshot_file().to_string_lossy().to_string()
}
pub(crate) fn default_language() -> String {
    Language::default().code().to_string()
}
pub(crate) fn default_separator_char() -> String {
    "-".to_string()
}
pub(crate) fn default_color() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            snapshot: default_snapshot(),
            language: default_language(),
            separator_char: default_separator_char(),
            color: default_color(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rshiftgap")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".rshiftgap")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rshiftgap.conf")
    }

    /// Default location of the snapshot file
    pub fn snapshot_file() -> PathBuf {
        Self::config_dir().join("snapshot.json")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path).map_err(|_| AppError::ConfigLoad)?;
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Configured language; unknown codes fall back to the default.
    pub fn language(&self) -> Language {
        Language::from_code(&self.language).unwrap_or_default()
    }

    pub fn save(&self) -> AppResult<()> {
        fs::create_dir_all(Self::config_dir())?;
        let yaml = serde_yaml::to_string(self)?;
        fs::write(Self::config_file(), yaml).map_err(|_| AppError::ConfigSave)
    }

    /// Initialize the configuration directory and file.
    /// In test mode nothing is written.
    pub fn init_all(snapshot: Option<String>, is_test: bool) -> AppResult<Self> {
        let mut config = Self::default();
        if let Some(path) = snapshot {
            config.snapshot = path;
        }

        if !is_test {
            config.save()?;
        }

        Ok(config)
    }
}
