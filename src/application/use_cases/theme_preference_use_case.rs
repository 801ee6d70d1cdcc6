//! Light/dark preference use case.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::entities::ThemeMode;
use crate::domain::ports::PreferencePort;

/// Reads and writes the persisted display preference.
#[derive(Clone)]
pub struct ThemePreferenceUseCase {
    storage_port: Arc<dyn PreferencePort>,
}

impl ThemePreferenceUseCase {
    /// Creates new theme preference use case.
    #[must_use]
    pub const fn new(storage_port: Arc<dyn PreferencePort>) -> Self {
        Self { storage_port }
    }

    /// Returns the stored mode, light when unset.
    pub async fn load(&self) -> ThemeMode {
        let mode = self.storage_port.get_preference().await;
        debug!(%mode, "Loaded theme preference");
        mode
    }

    /// Persists `mode`. A write failure is logged and otherwise ignored so
    /// the caller's visual change always stands.
    pub async fn persist(&self, mode: ThemeMode) {
        match self.storage_port.set_preference(mode).await {
            Ok(()) => info!(%mode, "Theme preference saved"),
            Err(e) => warn!(%mode, error = %e, "Failed to persist theme preference"),
        }
    }
}
