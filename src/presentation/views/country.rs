use super::format::{CAPITAL_UNAVAILABLE, NOT_AVAILABLE, count_or_na, text_or, truncate};
use super::{Card, Field, Fragment, placeholder_or};
use crate::application::Load;
use crate::domain::entities::Country;

const DESCRIPTION_LIMIT: usize = 1600;
const NO_DESCRIPTION: &str = "Descripción no disponible.";

/// Country header panel.
#[must_use]
pub fn country_panel(load: Load<&Country>) -> Fragment {
    let country = match placeholder_or(load) {
        Ok(country) => country,
        Err(placeholder) => return placeholder,
    };

    Fragment::Card(Card {
        title: country.name().to_string(),
        body: country
            .description()
            .map_or_else(|| NO_DESCRIPTION.to_string(), |d| truncate(d, DESCRIPTION_LIMIT)),
        fields: vec![
            Field::new("Capital", text_or(country.capital(), CAPITAL_UNAVAILABLE)),
            Field::new("Población", count_or_na(country.population())),
            Field::new(
                "Región geográfica",
                text_or(country.geographic_region(), NOT_AVAILABLE),
            ),
        ],
        image: country.flag_url().map(str::to_string),
    })
}
