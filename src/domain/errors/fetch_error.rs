//! Remote data fetch error types.

use thiserror::Error;

/// Failure while reading a resource from the remote API.
///
/// Every variant is handled the same way at the UI boundary: logged, then
/// turned into a placeholder in the affected panel.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[allow(missing_docs)]
pub enum FetchError {
    #[error("request to {path} could not complete: {message}")]
    Network { path: String, message: String },

    #[error("request to {path} returned HTTP {status}")]
    Status { path: String, status: u16 },

    #[error("response from {path} could not be parsed: {message}")]
    Parse { path: String, message: String },

    #[error("unexpected client error: {message}")]
    Unexpected { message: String },
}

impl FetchError {
    /// Creates network error.
    #[must_use]
    pub fn network(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Network {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Creates non-success status error.
    #[must_use]
    pub fn status(path: impl Into<String>, status: u16) -> Self {
        Self::Status {
            path: path.into(),
            status,
        }
    }

    /// Creates parse error.
    #[must_use]
    pub fn parse(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Parse {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Creates unexpected error.
    #[must_use]
    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::Unexpected {
            message: message.into(),
        }
    }

    /// Returns whether the request never produced a response.
    #[must_use]
    pub const fn is_network_error(&self) -> bool {
        matches!(self, Self::Network { .. })
    }

    /// Returns whether the server answered with a non-2xx status.
    #[must_use]
    pub const fn is_status_error(&self) -> bool {
        matches!(self, Self::Status { .. })
    }

    /// Returns whether the body was not valid JSON or had the wrong shape.
    #[must_use]
    pub const fn is_parse_error(&self) -> bool {
        matches!(self, Self::Parse { .. })
    }
}
