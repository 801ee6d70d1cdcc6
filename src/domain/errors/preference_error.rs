//! Preference persistence error types.

use thiserror::Error;

/// Failure while reading or writing the display preference.
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum PreferenceError {
    #[error("no per-user configuration directory available")]
    NoConfigDir,

    #[error("preference file io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to serialize preferences: {0}")]
    Serialize(#[from] toml::ser::Error),
}
