//! Display preference port.

use async_trait::async_trait;

use crate::domain::entities::ThemeMode;
use crate::domain::errors::PreferenceError;

/// Persists the single light/dark preference across sessions.
#[async_trait]
pub trait PreferencePort: Send + Sync {
    /// Returns the stored mode, `ThemeMode::Light` when nothing is stored.
    async fn get_preference(&self) -> ThemeMode;

    /// Stores the mode. Best-effort: callers log and continue on error.
    async fn set_preference(&self, mode: ThemeMode) -> Result<(), PreferenceError>;
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::sync::Arc;
    use tokio::sync::RwLock;

    /// Mock preference store for testing.
    pub struct MockPreferenceStore {
        value: Arc<RwLock<Option<ThemeMode>>>,
        fail_writes: bool,
    }

    impl MockPreferenceStore {
        /// Creates empty mock storage.
        pub fn new() -> Self {
            Self {
                value: Arc::new(RwLock::new(None)),
                fail_writes: false,
            }
        }

        /// Creates mock storage with a stored mode.
        pub fn with_mode(mode: ThemeMode) -> Self {
            Self {
                value: Arc::new(RwLock::new(Some(mode))),
                fail_writes: false,
            }
        }

        /// Creates mock storage whose writes always fail.
        pub fn failing() -> Self {
            Self {
                value: Arc::new(RwLock::new(None)),
                fail_writes: true,
            }
        }

        /// Raw stored value, `None` if never written.
        pub async fn stored(&self) -> Option<ThemeMode> {
            *self.value.read().await
        }
    }

    impl Default for MockPreferenceStore {
        fn default() -> Self {
            Self::new()
        }
    }

    #[async_trait]
    impl PreferencePort for MockPreferenceStore {
        async fn get_preference(&self) -> ThemeMode {
            self.value.read().await.unwrap_or_default()
        }

        async fn set_preference(&self, mode: ThemeMode) -> Result<(), PreferenceError> {
            if self.fail_writes {
                return Err(PreferenceError::Io(std::io::Error::new(
                    std::io::ErrorKind::PermissionDenied,
                    "read-only",
                )));
            }
            *self.value.write().await = Some(mode);
            Ok(())
        }
    }
}
