//! Country entity.

use serde::{Deserialize, Serialize};

/// Country overview shown in the header panel. Loaded once per session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    name: String,
    description: Option<String>,
    population: Option<u64>,
    capital: Option<String>,
    flag_url: Option<String>,
    geographic_region: Option<String>,
}

impl Country {
    /// Creates a country with only its name populated.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            population: None,
            capital: None,
            flag_url: None,
            geographic_region: None,
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub const fn with_population(mut self, population: u64) -> Self {
        self.population = Some(population);
        self
    }

    #[must_use]
    pub fn with_capital(mut self, capital: impl Into<String>) -> Self {
        self.capital = Some(capital.into());
        self
    }

    #[must_use]
    pub fn with_flag_url(mut self, url: impl Into<String>) -> Self {
        self.flag_url = Some(url.into());
        self
    }

    #[must_use]
    pub fn with_geographic_region(mut self, region: impl Into<String>) -> Self {
        self.geographic_region = Some(region.into());
        self
    }

    /// Returns the country name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the description.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the population.
    #[must_use]
    pub const fn population(&self) -> Option<u64> {
        self.population
    }

    /// Returns the capital city name.
    #[must_use]
    pub fn capital(&self) -> Option<&str> {
        self.capital.as_deref()
    }

    /// Returns the flag image URL.
    #[must_use]
    pub fn flag_url(&self) -> Option<&str> {
        self.flag_url.as_deref()
    }

    /// Returns the continental region label (e.g. "Americas").
    #[must_use]
    pub fn geographic_region(&self) -> Option<&str> {
        self.geographic_region.as_deref()
    }
}
