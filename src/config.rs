//! Application configuration
//!
//! Resolution order: built-in defaults, then an optional TOML file, then
//! environment variables.

use std::path::{Path, PathBuf};
use log::debug;
use serde::{Deserialize, Serialize};
use crate::error::{TodoError, Result};
use crate::{DATABASE_FILENAME, DEFAULT_BCRYPT_COST, MAX_BCRYPT_COST, MIN_BCRYPT_COST};

/// Env var pointing at the config file
pub const CONFIG_PATH_ENV: &str = "LISTOMAKER_CONFIG_PATH";

/// Env var overriding the database path
pub const DB_PATH_ENV: &str = "LISTOMAKER_DB_PATH";

/// Env var overriding the bcrypt cost
pub const BCRYPT_COST_ENV: &str = "LISTOMAKER_BCRYPT_COST";

const APP_DIR: &str = "listomaker";

/// Runtime configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// SQLite database file
    pub database_path: PathBuf,
    /// bcrypt cost used for new registrations
    pub bcrypt_cost: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database_path: default_database_path(),
            bcrypt_cost: DEFAULT_BCRYPT_COST,
        }
    }
}

impl AppConfig {
    /// Load configuration from the config file and environment
    pub fn load() -> Result<Self> {
        let mut config = Self::from_file(&config_path())?;
        config.apply_overrides(
            std::env::var(DB_PATH_ENV).ok(),
            std::env::var(BCRYPT_COST_ENV).ok(),
        )?;
        config.validate()?;
        debug!("Resolved configuration: {:?}", config);
        Ok(config)
    }

    /// Read a TOML config file. A missing file yields the defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                debug!("No config file at {}, using defaults", path.display());
                return Ok(Self::default());
            }
            Err(err) => return Err(err.into()),
        };
        Self::from_toml(&contents)
    }

    /// Parse configuration from TOML text
    pub fn from_toml(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Apply environment-style overrides
    pub fn apply_overrides(
        &mut self,
        db_path: Option<String>,
        bcrypt_cost: Option<String>,
    ) -> Result<()> {
        if let Some(path) = db_path.filter(|p| !p.trim().is_empty()) {
            self.database_path = PathBuf::from(path);
        }
        if let Some(cost) = bcrypt_cost {
            self.bcrypt_cost = cost.trim().parse().map_err(|_| {
                TodoError::ConfigError(format!(
                    "{} must be a number, got '{}'",
                    BCRYPT_COST_ENV, cost
                ))
            })?;
        }
        Ok(())
    }

    /// Check value ranges
    pub fn validate(&self) -> Result<()> {
        if !(MIN_BCRYPT_COST..=MAX_BCRYPT_COST).contains(&self.bcrypt_cost) {
            return Err(TodoError::ConfigError(format!(
                "bcrypt cost must be between {} and {}, got {}",
                MIN_BCRYPT_COST, MAX_BCRYPT_COST, self.bcrypt_cost
            )));
        }
        Ok(())
    }
}

fn config_path() -> PathBuf {
    if let Ok(path) = std::env::var(CONFIG_PATH_ENV) {
        return PathBuf::from(path);
    }

    dirs::config_dir()
        .map(|dir| dir.join(APP_DIR).join("config.toml"))
        .unwrap_or_else(|| PathBuf::from("listomaker.toml"))
}

fn default_database_path() -> PathBuf {
    dirs::data_local_dir()
        .map(|dir| dir.join(APP_DIR).join(DATABASE_FILENAME))
        .unwrap_or_else(|| PathBuf::from(DATABASE_FILENAME))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.bcrypt_cost, DEFAULT_BCRYPT_COST);
        assert!(config.database_path.ends_with(DATABASE_FILENAME));
        config.validate().unwrap();
    }

    #[test]
    fn test_from_toml_partial() {
        let config = AppConfig::from_toml("bcrypt_cost = 10\n").unwrap();
        assert_eq!(config.bcrypt_cost, 10);
        assert_eq!(config.database_path, default_database_path());
    }

    #[test]
    fn test_from_toml_full() {
        let config = AppConfig::from_toml(
            "database_path = \"/tmp/lists/todo.db\"\nbcrypt_cost = 6\n",
        ).unwrap();
        assert_eq!(config.database_path, PathBuf::from("/tmp/lists/todo.db"));
        assert_eq!(config.bcrypt_cost, 6);
    }

    #[test]
    fn test_from_toml_malformed() {
        let err = AppConfig::from_toml("bcrypt_cost = \"high\"").unwrap_err();
        assert!(matches!(err, TodoError::ConfigError(_)));
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config = AppConfig::from_file(&temp_dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "bcrypt_cost = 5\n").unwrap();
        assert_eq!(AppConfig::from_file(&path).unwrap().bcrypt_cost, 5);
    }

    #[test]
    fn test_overrides() {
        let mut config = AppConfig::default();
        config
            .apply_overrides(Some("/data/todo.db".to_string()), Some(" 8 ".to_string()))
            .unwrap();
        assert_eq!(config.database_path, PathBuf::from("/data/todo.db"));
        assert_eq!(config.bcrypt_cost, 8);

        // Blank path is ignored
        config.apply_overrides(Some("  ".to_string()), None).unwrap();
        assert_eq!(config.database_path, PathBuf::from("/data/todo.db"));

        let err = config.apply_overrides(None, Some("lots".to_string())).unwrap_err();
        assert!(matches!(err, TodoError::ConfigError(_)));
    }

    #[test]
    fn test_validate_cost_range() {
        let mut config = AppConfig::default();
        config.bcrypt_cost = 3;
        assert!(config.validate().is_err());
        config.bcrypt_cost = 32;
        assert!(config.validate().is_err());
        config.bcrypt_cost = 31;
        assert!(config.validate().is_ok());
    }
}
