//! api-colombia.com HTTP client.

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use super::dto::{CountryResponse, DepartmentResponse, RegionResponse};
use crate::domain::entities::{Country, Department, DepartmentId, Region, RegionId};
use crate::domain::errors::FetchError;
use crate::domain::ports::GeoDataPort;

/// Public base URL of the API.
pub const API_COLOMBIA_BASE: &str = "https://api-colombia.com/api/v1";
const USER_AGENT: &str = concat!("panita/", env!("CARGO_PKG_VERSION"));

/// Read-only client for the country, region and department resources.
pub struct ApiColombiaClient {
    client: Client,
    base_url: String,
}

impl ApiColombiaClient {
    /// Creates new client with default base URL.
    ///
    /// # Errors
    /// Returns error if HTTP client creation fails.
    pub fn new() -> Result<Self, FetchError> {
        Self::with_base_url(API_COLOMBIA_BASE)
    }

    /// Creates client with custom base URL.
    ///
    /// # Errors
    /// Returns error if HTTP client creation fails.
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, FetchError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| FetchError::unexpected(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Returns the base URL requests are made against.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, FetchError> {
        let url = format!("{}/{path}", self.base_url);

        debug!(%url, "Requesting resource");

        let response = self.client.get(&url).send().await.map_err(|e| {
            warn!(%path, error = %e, "Request failed");
            if e.is_connect() {
                FetchError::network(path, "failed to connect")
            } else {
                FetchError::network(path, e.to_string())
            }
        })?;

        let status = response.status();

        if !status.is_success() {
            warn!(%path, %status, "Non-success response");
            return Err(FetchError::status(path, status.as_u16()));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| FetchError::network(path, format!("failed to read body: {e}")))?;

        serde_json::from_slice(&body).map_err(|e| {
            warn!(%path, error = %e, "Failed to parse response");
            FetchError::parse(path, e.to_string())
        })
    }

    /// Fetches a JSON array. A well-formed body that is not an array (e.g.
    /// `null`) is treated as an empty list.
    async fn get_list<T: DeserializeOwned>(&self, path: &str) -> Result<Vec<T>, FetchError> {
        let value: serde_json::Value = self.get_json(path).await?;
        if !value.is_array() {
            debug!(%path, "Response is not an array, using empty list");
            return Ok(Vec::new());
        }
        serde_json::from_value(value).map_err(|e| {
            warn!(%path, error = %e, "Unexpected list element shape");
            FetchError::parse(path, e.to_string())
        })
    }
}

#[async_trait]
impl GeoDataPort for ApiColombiaClient {
    async fn fetch_country(&self, name: &str) -> Result<Country, FetchError> {
        let dto: CountryResponse = self.get_json(&format!("Country/{name}")).await?;
        Ok(dto.into())
    }

    async fn fetch_regions(&self) -> Result<Vec<Region>, FetchError> {
        let dtos: Vec<RegionResponse> = self.get_list("Region").await?;
        debug!(count = dtos.len(), "Fetched regions");
        Ok(dtos.into_iter().map(Region::from).collect())
    }

    async fn fetch_departments_for_region(
        &self,
        region_id: RegionId,
    ) -> Result<Vec<Department>, FetchError> {
        let dtos: Vec<DepartmentResponse> = self
            .get_list(&format!("Region/{region_id}/departments"))
            .await?;
        debug!(%region_id, count = dtos.len(), "Fetched departments");
        Ok(dtos.into_iter().map(Department::from).collect())
    }

    async fn fetch_department_detail(
        &self,
        department_id: DepartmentId,
    ) -> Result<Department, FetchError> {
        let dto: DepartmentResponse = self
            .get_json(&format!("Department/{department_id}"))
            .await?;
        Ok(dto.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::Router;
    use axum::http::StatusCode;
    use axum::routing::get;
    use serde_json::json;
    use tokio::net::TcpListener;

    async fn spawn_api() -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let app = Router::new()
            .route(
                "/Country/Colombia",
                get(|| async {
                    axum::Json(json!({
                        "name": "Colombia",
                        "stateCapital": "Bogotá",
                        "population": 50407647,
                        "flags": ["https://flags/co.png"],
                        "region": "Americas"
                    }))
                }),
            )
            .route(
                "/Region",
                get(|| async {
                    axum::Json(json!([
                        {"id": 1, "name": "Andina", "description": "Centro"},
                        {"id": 2, "name": "Caribe", "description": null}
                    ]))
                }),
            )
            .route(
                "/Region/1/departments",
                get(|| async {
                    axum::Json(json!([
                        {"id": 2, "name": "Antioquia", "municipalities": 125, "cityCapital": null}
                    ]))
                }),
            )
            .route("/Region/2/departments", get(|| async { axum::Json(json!(null)) }))
            .route(
                "/Region/3/departments",
                get(|| async { axum::Json(json!([{"name": "missing id"}])) }),
            )
            .route(
                "/Department/5",
                get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
            )
            .route("/Department/6", get(|| async { "<html>not json</html>" }));
        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });
        format!("http://{addr}")
    }

    #[test]
    fn test_client_creation() {
        let client = ApiColombiaClient::new();
        assert!(client.is_ok());
    }

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let client = ApiColombiaClient::with_base_url("http://localhost:1/api/v1/").unwrap();
        assert_eq!(client.base_url(), "http://localhost:1/api/v1");
    }

    #[tokio::test]
    async fn test_fetch_country() {
        let client = ApiColombiaClient::with_base_url(spawn_api().await).unwrap();
        let country = client.fetch_country("Colombia").await.unwrap();

        assert_eq!(country.name(), "Colombia");
        assert_eq!(country.capital(), Some("Bogotá"));
        assert_eq!(country.flag_url(), Some("https://flags/co.png"));
    }

    #[tokio::test]
    async fn test_fetch_regions_preserves_server_order() {
        let client = ApiColombiaClient::with_base_url(spawn_api().await).unwrap();
        let regions = client.fetch_regions().await.unwrap();

        let names: Vec<_> = regions.iter().map(Region::name).collect();
        assert_eq!(names, vec!["Andina", "Caribe"]);
        assert_eq!(regions[1].description(), None);
    }

    #[tokio::test]
    async fn test_fetch_departments_for_region() {
        let client = ApiColombiaClient::with_base_url(spawn_api().await).unwrap();
        let deps = client
            .fetch_departments_for_region(RegionId(1))
            .await
            .unwrap();

        assert_eq!(deps.len(), 1);
        assert_eq!(deps[0].municipalities(), Some(125));
    }

    #[tokio::test]
    async fn test_null_list_is_empty_not_error() {
        let client = ApiColombiaClient::with_base_url(spawn_api().await).unwrap();
        let deps = client
            .fetch_departments_for_region(RegionId(2))
            .await
            .unwrap();
        assert!(deps.is_empty());
    }

    #[tokio::test]
    async fn test_wrong_element_shape_is_parse_failure() {
        let client = ApiColombiaClient::with_base_url(spawn_api().await).unwrap();
        let err = client
            .fetch_departments_for_region(RegionId(3))
            .await
            .unwrap_err();
        assert!(err.is_parse_error());
    }

    #[tokio::test]
    async fn test_server_error_is_status_failure() {
        let client = ApiColombiaClient::with_base_url(spawn_api().await).unwrap();
        let err = client
            .fetch_department_detail(DepartmentId(5))
            .await
            .unwrap_err();
        assert_eq!(err, FetchError::status("Department/5", 500));
    }

    #[tokio::test]
    async fn test_missing_route_is_status_failure() {
        let client = ApiColombiaClient::with_base_url(spawn_api().await).unwrap();
        let err = client
            .fetch_department_detail(DepartmentId(404))
            .await
            .unwrap_err();
        assert!(matches!(err, FetchError::Status { status: 404, .. }));
    }

    #[tokio::test]
    async fn test_non_json_body_is_parse_failure() {
        let client = ApiColombiaClient::with_base_url(spawn_api().await).unwrap();
        let err = client
            .fetch_department_detail(DepartmentId(6))
            .await
            .unwrap_err();
        assert!(err.is_parse_error());
    }

    #[tokio::test]
    async fn test_unreachable_host_is_network_failure() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = ApiColombiaClient::with_base_url(format!("http://{addr}")).unwrap();
        let err = client.fetch_regions().await.unwrap_err();
        assert!(err.is_network_error());
    }
}
