//! Infrastructure layer with external service adapters.

/// api-colombia.com client.
pub mod api_colombia;
/// Department picture lookup.
pub mod assets;
/// Application configuration.
pub mod config;
/// Display preference persistence.
pub mod preference_store;

pub use api_colombia::{API_COLOMBIA_BASE, ApiColombiaClient};
pub use assets::DepartmentImageLoader;
pub use config::{AppConfig, CliArgs, LogLevel, StorageManager};
pub use preference_store::FilePreferenceStore;
