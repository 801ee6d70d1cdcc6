use serde::Deserialize;

use crate::domain::entities::{Country, Department, Region};

/// `GET Country/{name}` response.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryResponse {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub population: Option<u64>,
    #[serde(default)]
    pub state_capital: Option<String>,
    #[serde(default)]
    pub flags: Option<Vec<String>>,
    #[serde(default)]
    pub region: Option<String>,
}

impl From<CountryResponse> for Country {
    fn from(dto: CountryResponse) -> Self {
        let mut country = Self::new(dto.name.trim());
        if let Some(description) = non_blank(dto.description) {
            country = country.with_description(description);
        }
        if let Some(population) = dto.population {
            country = country.with_population(population);
        }
        if let Some(capital) = non_blank(dto.state_capital) {
            country = country.with_capital(capital);
        }
        if let Some(flag) = dto.flags.and_then(|flags| flags.into_iter().next()) {
            country = country.with_flag_url(flag);
        }
        if let Some(region) = non_blank(dto.region) {
            country = country.with_geographic_region(region);
        }
        country
    }
}

/// Element of `GET Region`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionResponse {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl From<RegionResponse> for Region {
    fn from(dto: RegionResponse) -> Self {
        let region = Self::new(dto.id, dto.name.trim());
        match non_blank(dto.description) {
            Some(description) => region.with_description(description),
            None => region,
        }
    }
}

/// Capital city as sent by the API: a nested city object in detailed
/// records, occasionally a bare name, or null.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum CityCapitalField {
    City {
        #[serde(default)]
        name: Option<String>,
    },
    Name(String),
}

impl CityCapitalField {
    fn into_name(self) -> Option<String> {
        match self {
            Self::City { name } => non_blank(name),
            Self::Name(name) => non_blank(Some(name)),
        }
    }
}

/// Phone prefixes arrive as strings, but tolerate bare numbers.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum PrefixField {
    Text(String),
    Number(u64),
}

impl PrefixField {
    fn into_string(self) -> Option<String> {
        match self {
            Self::Text(text) => non_blank(Some(text)),
            Self::Number(n) => Some(n.to_string()),
        }
    }
}

/// Department record, both as list element and single lookup.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentResponse {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub municipalities: Option<u32>,
    #[serde(default)]
    pub surface: Option<f64>,
    #[serde(default)]
    pub population: Option<u64>,
    #[serde(default)]
    pub phone_prefix: Option<PrefixField>,
    #[serde(default)]
    pub city_capital: Option<CityCapitalField>,
}

impl From<DepartmentResponse> for Department {
    fn from(dto: DepartmentResponse) -> Self {
        let mut department = Self::new(dto.id, dto.name.trim());
        if let Some(description) = non_blank(dto.description) {
            department = department.with_description(description);
        }
        if let Some(municipalities) = dto.municipalities {
            department = department.with_municipalities(municipalities);
        }
        if let Some(surface) = dto.surface {
            department = department.with_surface(surface);
        }
        if let Some(population) = dto.population {
            department = department.with_population(population);
        }
        if let Some(prefix) = dto.phone_prefix.and_then(PrefixField::into_string) {
            department = department.with_phone_prefix(prefix);
        }
        if let Some(capital) = dto.city_capital.and_then(CityCapitalField::into_name) {
            department = department.with_capital(capital);
        }
        department
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
