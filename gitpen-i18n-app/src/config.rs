//! Application configuration loaded from TOML.
//!
//! ```toml
//! store_path = "/home/me/.local/share/gitpen/preferences.json"
//! storage_key = "gitpen-locale"
//! log_level = "debug"
//! language = "ja-JP"
//! ```
//!
//! Every field is optional. A missing file yields the defaults.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use gitpen_i18n_core::error::{I18nError, I18nResult};
use gitpen_i18n_core::services::LOCALE_STORAGE_KEY;
use serde::{Deserialize, Serialize};

use crate::adapters::JsonFilePreferenceStore;

const CONFIG_DIR_NAME: &str = "gitpen";
const CONFIG_FILE_NAME: &str = "i18n.toml";
const MAX_CONFIG_FILE_SIZE: u64 = 64 * 1024;
const LOG_LEVELS: [&str; 6] = ["off", "error", "warn", "info", "debug", "trace"];

/// i18n host configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// Preference store file. Defaults to the platform data directory.
    pub store_path: Option<PathBuf>,
    /// Key the locale preference is stored under.
    pub storage_key: Option<String>,
    /// Log level (`off`, `error`, `warn`, `info`, `debug`, `trace`).
    pub log_level: Option<String>,
    /// Host language override, used instead of the system language.
    pub language: Option<String>,
}

impl AppConfig {
    /// Platform-specific default config file (`<config dir>/gitpen/i18n.toml`).
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Load configuration from `path`, or from the default location when `None`.
    ///
    /// A missing file is not an error and yields the defaults.
    pub fn load(path: Option<&Path>) -> I18nResult<Self> {
        let Some(path) = path.map(Path::to_path_buf).or_else(Self::default_path) else {
            log::debug!("[i18n] No config directory available, using defaults");
            return Ok(Self::default());
        };

        let metadata = match fs::metadata(&path) {
            Ok(metadata) => metadata,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::debug!("[i18n] Config file not found: {}", path.display());
                return Ok(Self::default());
            }
            Err(e) => return Err(e.into()),
        };
        if metadata.len() > MAX_CONFIG_FILE_SIZE {
            return Err(I18nError::ConfigError(format!(
                "Config file too large: {} bytes (max: {MAX_CONFIG_FILE_SIZE} bytes)",
                metadata.len()
            )));
        }

        let content = fs::read_to_string(&path)?;
        let config = Self::parse(&content)?;
        log::debug!("[i18n] Loaded config from {}", path.display());
        Ok(config)
    }

    /// Parse and validate TOML content.
    pub fn parse(content: &str) -> I18nResult<Self> {
        let config: Self = toml::from_str(content)
            .map_err(|e| I18nError::ConfigError(format!("Invalid config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Validate field values.
    pub fn validate(&self) -> I18nResult<()> {
        if let Some(key) = &self.storage_key {
            if key.trim().is_empty() {
                return Err(I18nError::ConfigError(
                    "storage_key must not be empty".to_string(),
                ));
            }
        }
        if let Some(level) = &self.log_level {
            if !LOG_LEVELS.contains(&level.to_ascii_lowercase().as_str()) {
                return Err(I18nError::ConfigError(format!(
                    "Unknown log_level: {level} (expected one of {})",
                    LOG_LEVELS.join(", ")
                )));
            }
        }
        if let Some(path) = &self.store_path {
            if path.as_os_str().is_empty() {
                return Err(I18nError::ConfigError(
                    "store_path must not be empty".to_string(),
                ));
            }
        }
        Ok(())
    }

    /// Store key, falling back to the default.
    pub fn storage_key(&self) -> &str {
        self.storage_key.as_deref().unwrap_or(LOCALE_STORAGE_KEY)
    }

    /// Store file, falling back to the platform default.
    pub fn store_path(&self) -> PathBuf {
        self.store_path
            .clone()
            .or_else(JsonFilePreferenceStore::default_path)
            .unwrap_or_else(|| PathBuf::from("preferences.json"))
    }

    /// Log level, falling back to `warn`.
    pub fn log_level(&self) -> &str {
        self.log_level.as_deref().unwrap_or("warn")
    }
}
