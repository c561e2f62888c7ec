// ABOUTME: Application configuration loaded from a TOML file in the user's home directory
// Missing files fall back to defaults; the CLI may override individual values

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error for {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("flash_delay_ms must be greater than zero")]
    InvalidDelay,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Quiet period before an active flash is cleared
    pub flash_delay_ms: u64,
    /// Fallback tracing filter when RUST_LOG is unset
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            flash_delay_ms: 3000,
            log_filter: "flash_box=info".to_string(),
        }
    }
}

impl AppConfig {
    /// Directory holding the config file and logs (`~/.flash-box`)
    pub fn app_dir() -> PathBuf {
        dirs::home_dir()
            .map(|home| home.join(".flash-box"))
            .unwrap_or_else(|| PathBuf::from(".flash-box"))
    }

    pub fn default_path() -> PathBuf {
        Self::app_dir().join("config.toml")
    }

    /// Load the config at `path`, or defaults if the file does not exist
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            debug!("No config file at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = toml::from_str(&contents)?;
        config.validate()?;

        info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let io_error = |source: std::io::Error| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(io_error)?;
        }
        let contents = toml::to_string_pretty(self)?;
        fs::write(path, contents).map_err(io_error)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.flash_delay_ms == 0 {
            return Err(ConfigError::InvalidDelay);
        }
        Ok(())
    }

    pub fn flash_delay(&self) -> Duration {
        Duration::from_millis(self.flash_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let config = AppConfig::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.flash_delay(), Duration::from_secs(3));
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "flash_delay_ms = 250\n").unwrap();

        let config = AppConfig::load_from(&path).unwrap();
        assert_eq!(config.flash_delay(), Duration::from_millis(250));
        assert_eq!(config.log_filter, "flash_box=info");
    }

    #[test]
    fn test_zero_delay_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "flash_delay_ms = 0\n").unwrap();

        assert!(matches!(
            AppConfig::load_from(&path),
            Err(ConfigError::InvalidDelay)
        ));
    }

    #[test]
    fn test_malformed_file_is_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "flash_delay_ms = \"soon\"\n").unwrap();

        assert!(matches!(
            AppConfig::load_from(&path),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_save_creates_parent_dirs() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let config = AppConfig {
            flash_delay_ms: 1500,
            log_filter: "flash_box=debug".to_string(),
        };

        config.save_to(&path).unwrap();
        assert_eq!(AppConfig::load_from(&path).unwrap(), config);
    }
}
