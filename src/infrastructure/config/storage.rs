//! Files under the per-user configuration directory.

use super::app_config::{APP_NAME, APP_ORGANIZATION, APP_QUALIFIER, AppConfig};
use directories::ProjectDirs;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

const CONFIG_FILE_NAME: &str = "config.toml";
const PREFERENCES_FILE_NAME: &str = "preferences.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("no per-user configuration directory on this system")]
    ConfigDirNotFound,
    #[error("config file io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to write default config: {0}")]
    TomlSer(#[from] toml::ser::Error),
}

/// Resolves `config.toml` and `preferences.toml` and reads the former.
pub struct StorageManager {
    config_dir: PathBuf,
}

impl StorageManager {
    /// Roots the manager at the platform config directory for panita.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ConfigDirNotFound` if the platform has no home directory.
    pub fn new() -> Result<Self, ConfigError> {
        ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
            .map(|dirs| Self::with_dir(dirs.config_dir().to_path_buf()))
            .ok_or(ConfigError::ConfigDirNotFound)
    }

    #[must_use]
    pub const fn with_dir(config_dir: PathBuf) -> Self {
        Self { config_dir }
    }

    #[must_use]
    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    /// `--config` if given, otherwise `config.toml` in the config directory.
    #[must_use]
    pub fn config_path(&self, path_override: Option<&Path>) -> PathBuf {
        path_override.map_or_else(|| self.config_dir.join(CONFIG_FILE_NAME), Path::to_path_buf)
    }

    #[must_use]
    pub fn preferences_path(&self) -> PathBuf {
        self.config_dir.join(PREFERENCES_FILE_NAME)
    }

    /// Reads the configuration. A missing file is created with the defaults;
    /// a malformed one is left untouched and the defaults are used.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file exists but cannot be read, or if the
    /// default file cannot be written.
    pub fn load_config(&self, path_override: Option<&Path>) -> Result<AppConfig, ConfigError> {
        let path = self.config_path(path_override);

        match fs::read_to_string(&path) {
            Ok(content) => Ok(parse_config(&path, &content)),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!(path = %path.display(), "Writing default config");
                let config = AppConfig::default();
                write_atomic(&path, &toml::to_string_pretty(&config)?)?;
                Ok(config)
            }
            Err(e) => Err(e.into()),
        }
    }
}

fn parse_config(path: &Path, content: &str) -> AppConfig {
    toml::from_str(content).unwrap_or_else(|e| {
        warn!(path = %path.display(), error = %e, "Malformed config file, using defaults");
        AppConfig::default()
    })
}

/// Replaces `path` with `content` via a temp file in the same directory,
/// creating missing parent directories first.
///
/// # Errors
///
/// Returns an IO error if the directory, temp file or rename fails.
pub fn write_atomic(path: &Path, content: &str) -> std::io::Result<()> {
    let parent = path
        .parent()
        .ok_or_else(|| std::io::Error::other(format!("{} has no parent", path.display())))?;
    fs::create_dir_all(parent)?;

    let mut staged = tempfile::NamedTempFile::new_in(parent)?;
    staged.write_all(content.as_bytes())?;
    staged.persist(path).map_err(|e| e.error)?;
    Ok(())
}
