//! Domain layer with core entities and port definitions.

/// Entity definitions.
pub mod entities;
/// Error types.
pub mod errors;
/// Port definitions.
pub mod ports;
/// Region filtering.
pub mod search;

pub use entities::{Country, Department, DepartmentId, Region, RegionId, ThemeMode};
pub use errors::{FetchError, PreferenceError};
pub use ports::{GeoDataPort, PreferencePort};
