//! Domain entity definitions.

mod country;
mod department;
mod region;
mod theme_mode;

pub use country::Country;
pub use department::{Department, DepartmentId};
pub use region::{Region, RegionId};
pub use theme_mode::ThemeMode;
