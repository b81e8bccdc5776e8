//! Configuration for protodir
//!
//! Settings live in `<config dir>/protodir/config.toml`. Any key can be
//! overridden with a `PROTODIR_` environment variable, e.g.
//! `PROTODIR_BASE_URL=https://staging.example`.

mod setup;

pub use setup::first_time_setup;

use crate::catalog::DEFAULT_PAGE_SIZE;
use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Public address the directory is served from
pub const DEFAULT_BASE_URL: &str = "https://a2aprotocol.com";

const ENV_PREFIX: &str = "PROTODIR";

/// Keys accepted by `protodir config set`
pub const KEYS: [&str; 4] = ["store_path", "base_url", "page_size", "quiet"];

fn default_store_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("protodir")
        .join("store")
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

const fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

/// Application configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct DirectoryConfig {
    /// Directory holding the sled store
    #[serde(default = "default_store_path")]
    pub store_path: PathBuf,

    /// Used for detail links, share cards and the sitemap
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Listings per catalog page
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Suppress informational output by default
    #[serde(default)]
    pub quiet: bool,
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            store_path: default_store_path(),
            base_url: default_base_url(),
            page_size: default_page_size(),
            quiet: false,
        }
    }
}

impl DirectoryConfig {
    /// Get the path to the config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| ConfigError::Message("Could not determine config directory".to_string()))?;
        Ok(config_dir.join("protodir").join("config.toml"))
    }

    /// Load the config file, then apply `PROTODIR_*` overrides
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config file cannot be read or parsed.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load from an explicit file; a missing file yields the defaults
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file exists but cannot be parsed.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::from(path).format(FileFormat::Toml).required(false))
            .add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()?
            .try_deserialize()
    }

    /// Load configuration, running first-time setup if no file exists yet
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if loading or creating the configuration fails.
    pub fn load_or_setup() -> Result<Self, ConfigError> {
        let config_path = Self::config_path()?;
        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            first_time_setup()
        }
    }

    /// Save to the default location
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be written.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::config_path()?)
    }

    /// Save to an explicit file, creating parent directories
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if serialization or any filesystem step fails.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| ConfigError::Message(format!("Failed to create config directory: {e}")))?;
        }

        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")))?;

        fs::write(path, toml_string).map_err(|e| ConfigError::Message(format!("Failed to write config file: {e}")))
    }

    /// Update one setting from its textual form
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` for an unknown key or a value that does not parse.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        match key {
            "store_path" => self.store_path = PathBuf::from(value),
            "base_url" => self.base_url = value.trim_end_matches('/').to_string(),
            "page_size" => {
                self.page_size = match value.parse::<usize>() {
                    Ok(size) if size > 0 => size,
                    _ => {
                        return Err(ConfigError::Message(format!(
                            "page_size must be a positive integer, got '{value}'"
                        )));
                    }
                };
            }
            "quiet" => {
                self.quiet = value
                    .parse()
                    .map_err(|_| ConfigError::Message(format!("quiet must be true or false, got '{value}'")))?;
            }
            _ => {
                return Err(ConfigError::Message(format!(
                    "Unknown config key '{key}' (expected one of: {})",
                    KEYS.join(", ")
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = DirectoryConfig::default();
        assert_eq!(config.base_url, "https://a2aprotocol.com");
        assert_eq!(config.page_size, 9);
        assert!(!config.quiet);
        assert!(config.store_path.ends_with("protodir/store"));
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let config = DirectoryConfig::load_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config.page_size, DEFAULT_PAGE_SIZE);
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_save_and_reload() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = DirectoryConfig::default();
        config.set("page_size", "12").unwrap();
        config.set("base_url", "https://staging.example/").unwrap();
        config.set("store_path", "/tmp/protodir-test").unwrap();
        config.save_to(&path).unwrap();

        let loaded = DirectoryConfig::load_from(&path).unwrap();
        assert_eq!(loaded.page_size, 12);
        assert_eq!(loaded.base_url, "https://staging.example");
        assert_eq!(loaded.store_path, PathBuf::from("/tmp/protodir-test"));
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "quiet = true\n").unwrap();

        let loaded = DirectoryConfig::load_from(&path).unwrap();
        assert!(loaded.quiet);
        assert_eq!(loaded.page_size, DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn test_set_rejects_bad_input() {
        let mut config = DirectoryConfig::default();
        assert!(config.set("page_size", "0").is_err());
        assert!(config.set("page_size", "many").is_err());
        assert!(config.set("quiet", "maybe").is_err());
        assert!(config.set("colour", "red").is_err());
        assert_eq!(config, DirectoryConfig::default());
    }
}
