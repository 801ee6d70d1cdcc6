use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tokio::fs;

use crate::domain::entities::ThemeMode;
use crate::domain::errors::PreferenceError;
use crate::domain::ports::PreferencePort;
use crate::infrastructure::config::{StorageManager, write_atomic};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
struct Preferences {
    #[serde(default)]
    theme: Option<ThemeMode>,
}

/// TOML-file backed preference store under the per-user config directory.
#[derive(Clone)]
pub struct FilePreferenceStore {
    path: Option<PathBuf>,
}

impl Default for FilePreferenceStore {
    fn default() -> Self {
        Self::new()
    }
}

impl FilePreferenceStore {
    /// Creates a store at the default location.
    ///
    /// If project directories cannot be determined, persistence will be disabled
    /// and a warning will be logged.
    #[must_use]
    pub fn new() -> Self {
        if let Ok(storage) = StorageManager::new() {
            Self {
                path: Some(storage.preferences_path()),
            }
        } else {
            tracing::warn!("Failed to determine project directories. Preference persistence disabled.");
            Self { path: None }
        }
    }

    /// Creates a store backed by a specific file.
    #[must_use]
    pub fn with_path(path: PathBuf) -> Self {
        Self { path: Some(path) }
    }

    async fn read(&self) -> Preferences {
        let Some(path) = &self.path else {
            return Preferences::default();
        };

        match fs::read_to_string(path).await {
            Ok(content) => toml::from_str(&content).unwrap_or_else(|e| {
                tracing::warn!(path = %path.display(), error = %e, "Unreadable preference file, using defaults");
                Preferences::default()
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Preferences::default(),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Failed to read preference file");
                Preferences::default()
            }
        }
    }
}

#[async_trait]
impl PreferencePort for FilePreferenceStore {
    async fn get_preference(&self) -> ThemeMode {
        self.read().await.theme.unwrap_or_default()
    }

    async fn set_preference(&self, mode: ThemeMode) -> Result<(), PreferenceError> {
        let Some(path) = self.path.clone() else {
            return Err(PreferenceError::NoConfigDir);
        };

        let content = toml::to_string(&Preferences { theme: Some(mode) })?;

        tokio::task::spawn_blocking(move || write_atomic(&path, &content))
            .await
            .map_err(std::io::Error::other)??;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_missing_file_defaults_to_light() {
        let dir = tempdir().unwrap();
        let store = FilePreferenceStore::with_path(dir.path().join("preferences.toml"));

        assert_eq!(store.get_preference().await, ThemeMode::Light);
    }

    #[tokio::test]
    async fn test_set_then_get() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("preferences.toml");
        let store = FilePreferenceStore::with_path(path.clone());

        store.set_preference(ThemeMode::Dark).await.unwrap();

        assert_eq!(store.get_preference().await, ThemeMode::Dark);
        let raw = std::fs::read_to_string(path).unwrap();
        assert_eq!(raw.trim(), "theme = \"dark\"");
    }

    #[tokio::test]
    async fn test_corrupt_file_defaults_to_light() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("preferences.toml");
        std::fs::write(&path, "theme = [").unwrap();

        let store = FilePreferenceStore::with_path(path);
        assert_eq!(store.get_preference().await, ThemeMode::Light);
    }

    #[tokio::test]
    async fn test_unknown_value_defaults_to_light() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("preferences.toml");
        std::fs::write(&path, "theme = \"sepia\"").unwrap();

        let store = FilePreferenceStore::with_path(path);
        assert_eq!(store.get_preference().await, ThemeMode::Light);
    }

    #[tokio::test]
    async fn test_disabled_store_reports_error() {
        let store = FilePreferenceStore { path: None };

        assert_eq!(store.get_preference().await, ThemeMode::Light);
        assert!(matches!(
            store.set_preference(ThemeMode::Dark).await,
            Err(PreferenceError::NoConfigDir)
        ));
    }
}
