use crate::domain::entities::Region;

/// Normalized region filter query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegionQuery {
    needle: String,
}

impl RegionQuery {
    /// Builds a query from raw search-box text: trimmed and lowercased.
    #[must_use]
    pub fn new(raw: &str) -> Self {
        Self {
            needle: raw.trim().to_lowercase(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.needle.is_empty()
    }

    /// Case-insensitive substring match on name or description.
    #[must_use]
    pub fn matches(&self, region: &Region) -> bool {
        if self.needle.is_empty() {
            return true;
        }

        region.name().to_lowercase().contains(&self.needle)
            || region
                .description()
                .is_some_and(|d| d.to_lowercase().contains(&self.needle))
    }
}

/// Returns the regions matching `raw`, preserving list order. The input list
/// is never modified.
#[must_use]
pub fn filter_regions<'a>(regions: &'a [Region], raw: &str) -> Vec<&'a Region> {
    let query = RegionQuery::new(raw);
    regions.iter().filter(|r| query.matches(r)).collect()
}
