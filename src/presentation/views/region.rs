use super::format::truncate;
use super::{Card, Fragment, ListRow, placeholder_or};
use crate::application::Load;
use crate::domain::entities::{Region, RegionId};

const DESCRIPTION_LIMIT: usize = 1600;
const NO_DESCRIPTION: &str = "Sin descripción disponible.";
const NO_REGIONS: &str = "No hay regiones";

/// Information panel of the selected region.
#[must_use]
pub fn region_info_panel(load: Load<&Region>) -> Fragment {
    let region = match placeholder_or(load) {
        Ok(region) => region,
        Err(placeholder) => return placeholder,
    };

    Fragment::Card(Card {
        title: region.name().to_string(),
        body: region
            .description()
            .map_or_else(|| NO_DESCRIPTION.to_string(), |d| truncate(d, DESCRIPTION_LIMIT)),
        fields: Vec::new(),
        image: None,
    })
}

/// Selectable region list. `active` marks the selected region, if visible.
#[must_use]
pub fn region_list(load: Load<Vec<&Region>>, active: Option<RegionId>) -> Fragment {
    let regions = match placeholder_or(load) {
        Ok(regions) => regions,
        Err(placeholder) => return placeholder,
    };

    if regions.is_empty() {
        return Fragment::muted(NO_REGIONS);
    }

    Fragment::List(
        regions
            .into_iter()
            .map(|region| ListRow {
                key: region.id().as_u32(),
                title: region.name().to_string(),
                subtitle: region.description().map(str::to_string),
                active: Some(region.id()) == active,
            })
            .collect(),
    )
}
