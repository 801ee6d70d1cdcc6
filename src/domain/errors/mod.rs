//! Domain error types.

mod fetch_error;
mod preference_error;

pub use fetch_error::FetchError;
pub use preference_error::PreferenceError;
