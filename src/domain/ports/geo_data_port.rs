//! Remote geographic data port.

use async_trait::async_trait;

use crate::domain::entities::{Country, Department, DepartmentId, Region, RegionId};
use crate::domain::errors::FetchError;

/// Read-only access to country, region and department data.
///
/// Each call is a fresh request: no caching, no retries.
#[async_trait]
pub trait GeoDataPort: Send + Sync {
    /// Fetches a country by name.
    async fn fetch_country(&self, name: &str) -> Result<Country, FetchError>;

    /// Fetches every region, in server order.
    async fn fetch_regions(&self) -> Result<Vec<Region>, FetchError>;

    /// Fetches the department summaries of a region.
    async fn fetch_departments_for_region(
        &self,
        region_id: RegionId,
    ) -> Result<Vec<Department>, FetchError>;

    /// Fetches the detailed record of one department.
    async fn fetch_department_detail(
        &self,
        department_id: DepartmentId,
    ) -> Result<Department, FetchError>;
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Arc;
    use tokio::sync::RwLock;

    /// In-memory geographic data for testing. Missing entries fail with a
    /// network error.
    #[derive(Default)]
    pub struct MockGeoData {
        country: Option<Country>,
        regions: Option<Vec<Region>>,
        departments: HashMap<RegionId, Vec<Department>>,
        details: HashMap<DepartmentId, Department>,
        calls: Arc<RwLock<Vec<String>>>,
    }

    impl MockGeoData {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_country(mut self, country: Country) -> Self {
            self.country = Some(country);
            self
        }

        pub fn with_regions(mut self, regions: Vec<Region>) -> Self {
            self.regions = Some(regions);
            self
        }

        pub fn with_departments(mut self, region_id: RegionId, deps: Vec<Department>) -> Self {
            self.departments.insert(region_id, deps);
            self
        }

        pub fn with_detail(mut self, department: Department) -> Self {
            self.details.insert(department.id(), department);
            self
        }

        /// Paths requested so far, in call order.
        pub async fn calls(&self) -> Vec<String> {
            self.calls.read().await.clone()
        }

        async fn record(&self, path: String) -> String {
            self.calls.write().await.push(path.clone());
            path
        }
    }

    #[async_trait]
    impl GeoDataPort for MockGeoData {
        async fn fetch_country(&self, name: &str) -> Result<Country, FetchError> {
            let path = self.record(format!("Country/{name}")).await;
            self.country
                .clone()
                .ok_or_else(|| FetchError::network(path, "connection refused"))
        }

        async fn fetch_regions(&self) -> Result<Vec<Region>, FetchError> {
            let path = self.record("Region".to_string()).await;
            self.regions
                .clone()
                .ok_or_else(|| FetchError::network(path, "connection refused"))
        }

        async fn fetch_departments_for_region(
            &self,
            region_id: RegionId,
        ) -> Result<Vec<Department>, FetchError> {
            let path = self.record(format!("Region/{region_id}/departments")).await;
            self.departments
                .get(&region_id)
                .cloned()
                .ok_or_else(|| FetchError::network(path, "connection refused"))
        }

        async fn fetch_department_detail(
            &self,
            department_id: DepartmentId,
        ) -> Result<Department, FetchError> {
            let path = self.record(format!("Department/{department_id}")).await;
            self.details
                .get(&department_id)
                .cloned()
                .ok_or_else(|| FetchError::network(path, "connection refused"))
        }
    }
}
