use std::env;
use std::path::{Path, PathBuf};

use directories::BaseDirs;
use serde::Deserialize;

use crate::error::{CatalogError, Result};
use crate::store::DEFAULT_SLOT;

/// Folder name used beneath the user's home directory for application data.
const DATA_DIR_NAME: &str = ".course-catalog";
/// SQLite file holding the local storage table.
const DB_FILE_NAME: &str = "catalog.sqlite";
/// Optional settings file inside the data directory.
const CONFIG_FILE_NAME: &str = "config.toml";
/// Log file; the terminal itself belongs to the UI.
const LOG_FILE_NAME: &str = "catalog.log";

/// Overrides the data directory.
pub const HOME_ENV: &str = "COURSE_CATALOG_HOME";
/// Overrides the log filter from the settings file.
pub const LOG_ENV: &str = "COURSE_CATALOG_LOG";

/// Resolved locations plus user settings.
#[derive(Debug, Clone)]
pub struct Config {
    pub data_dir: PathBuf,
    pub db_path: PathBuf,
    pub config_path: PathBuf,
    pub log_path: PathBuf,
    pub settings: Settings,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub storage: StorageSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StorageSettings {
    /// Name of the slot the course collection is stored under.
    pub slot: String,
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            slot: DEFAULT_SLOT.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// `tracing_subscriber::EnvFilter` directive string.
    pub filter: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
        }
    }
}

impl Config {
    /// Build a config rooted at `data_dir`, reading `config.toml` if present.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        let data_dir = data_dir.into();
        let config_path = data_dir.join(CONFIG_FILE_NAME);
        let settings = Self::load_settings(&config_path).unwrap_or_default();

        Self {
            db_path: data_dir.join(DB_FILE_NAME),
            log_path: data_dir.join(LOG_FILE_NAME),
            config_path,
            data_dir,
            settings,
        }
    }

    /// Resolve the data directory from `COURSE_CATALOG_HOME` or the home
    /// directory.
    pub fn from_env() -> Result<Self> {
        let data_dir = match env::var_os(HOME_ENV) {
            Some(dir) if !dir.is_empty() => PathBuf::from(dir),
            _ => {
                let base_dirs = BaseDirs::new().ok_or(CatalogError::HomeDirUnavailable)?;
                base_dirs.home_dir().join(DATA_DIR_NAME)
            }
        };
        Ok(Self::new(data_dir))
    }

    /// Log filter, with `COURSE_CATALOG_LOG` taking precedence.
    pub fn log_filter(&self) -> String {
        env::var(LOG_ENV)
            .ok()
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| self.settings.logging.filter.clone())
    }

    pub fn ensure_data_dir(&self) -> Result<()> {
        std::fs::create_dir_all(&self.data_dir)?;
        Ok(())
    }

    /// Missing or malformed files fall back to defaults.
    fn load_settings(config_path: &Path) -> Option<Settings> {
        if !config_path.exists() {
            return None;
        }
        let content = std::fs::read_to_string(config_path).ok()?;
        toml::from_str(&content).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn new_sets_paths() {
        let cfg = Config::new("/tmp/catalog");
        assert_eq!(cfg.db_path, PathBuf::from("/tmp/catalog/catalog.sqlite"));
        assert_eq!(cfg.config_path, PathBuf::from("/tmp/catalog/config.toml"));
        assert_eq!(cfg.log_path, PathBuf::from("/tmp/catalog/catalog.log"));
    }

    #[test]
    fn defaults_without_config_file() {
        let tmp = TempDir::new().unwrap();
        let cfg = Config::new(tmp.path());
        assert_eq!(cfg.settings, Settings::default());
        assert_eq!(cfg.settings.storage.slot, "coursesData");
        assert_eq!(cfg.settings.logging.filter, "info");
    }

    #[test]
    fn partial_config_keeps_other_defaults() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(tmp.path().join("config.toml"), "[storage]\nslot = \"archive\"\n").unwrap();
        let cfg = Config::new(tmp.path());
        assert_eq!(cfg.settings.storage.slot, "archive");
        assert_eq!(cfg.settings.logging.filter, "info");
    }

    #[test]
    fn malformed_config_falls_back_to_defaults() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(tmp.path().join("config.toml"), "storage = [[").unwrap();
        let cfg = Config::new(tmp.path());
        assert_eq!(cfg.settings, Settings::default());
    }
}
