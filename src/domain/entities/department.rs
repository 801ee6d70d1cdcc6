//! Department entity.

use serde::{Deserialize, Serialize};

/// Identifier of a department as assigned by the remote API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DepartmentId(pub u32);

impl DepartmentId {
    /// Returns the underlying numeric value.
    #[must_use]
    pub const fn as_u32(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for DepartmentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for DepartmentId {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

/// Second-level administrative division belonging to one region.
///
/// The same shape is used for the summary returned inside a region's
/// department list and for the detailed single-department lookup; the
/// detailed variant simply has more fields populated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Department {
    id: DepartmentId,
    name: String,
    description: Option<String>,
    municipalities: Option<u32>,
    surface: Option<f64>,
    population: Option<u64>,
    phone_prefix: Option<String>,
    capital: Option<String>,
}

impl Department {
    /// Creates a department with only its identity populated.
    #[must_use]
    pub fn new(id: impl Into<DepartmentId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: None,
            municipalities: None,
            surface: None,
            population: None,
            phone_prefix: None,
            capital: None,
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the municipality count.
    #[must_use]
    pub const fn with_municipalities(mut self, municipalities: u32) -> Self {
        self.municipalities = Some(municipalities);
        self
    }

    /// Sets the surface area in square kilometres.
    #[must_use]
    pub const fn with_surface(mut self, surface: f64) -> Self {
        self.surface = Some(surface);
        self
    }

    /// Sets the population.
    #[must_use]
    pub const fn with_population(mut self, population: u64) -> Self {
        self.population = Some(population);
        self
    }

    /// Sets the telephone prefix.
    #[must_use]
    pub fn with_phone_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.phone_prefix = Some(prefix.into());
        self
    }

    /// Sets the capital city name.
    #[must_use]
    pub fn with_capital(mut self, capital: impl Into<String>) -> Self {
        self.capital = Some(capital.into());
        self
    }

    #[must_use]
    pub const fn id(&self) -> DepartmentId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    #[must_use]
    pub const fn municipalities(&self) -> Option<u32> {
        self.municipalities
    }

    /// Surface area in square kilometres.
    #[must_use]
    pub const fn surface(&self) -> Option<f64> {
        self.surface
    }

    #[must_use]
    pub const fn population(&self) -> Option<u64> {
        self.population
    }

    #[must_use]
    pub fn phone_prefix(&self) -> Option<&str> {
        self.phone_prefix.as_deref()
    }

    /// Name of the capital city.
    #[must_use]
    pub fn capital(&self) -> Option<&str> {
        self.capital.as_deref()
    }

    /// Asset key used to look up the department picture: the lowercased name.
    #[must_use]
    pub fn image_key(&self) -> String {
        self.name.to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_department() {
        let dep = Department::new(5, "Chocó").with_municipalities(30);

        assert_eq!(dep.id(), DepartmentId(5));
        assert_eq!(dep.name(), "Chocó");
        assert_eq!(dep.municipalities(), Some(30));
        assert!(dep.population().is_none());
        assert!(dep.capital().is_none());
    }

    #[test]
    fn test_image_key_lowercases_unicode() {
        let dep = Department::new(5, "Chocó");
        assert_eq!(dep.image_key(), "chocó");
    }
}
