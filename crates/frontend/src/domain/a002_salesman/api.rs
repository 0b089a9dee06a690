use async_trait::async_trait;
use contracts::domain::a002_salesman::aggregate::{Salesman, SalesmanListResponse};
use contracts::domain::common::BulkDeleteRequest;

use crate::shared::api_utils::{ApiClient, ApiError};
use crate::shared::data_table::EntityApi;
use crate::shared::export::download_server_export;

const BASE_PATH: &str = "/api/salesmen";
/// Bulk delete and export live under the singular resource name.
const BULK_PATH: &str = "/api/saleman";

fn record_path(code: &str) -> String {
    format!("{}/{}", BASE_PATH, urlencoding::encode(code))
}

fn bulk_delete_path() -> String {
    format!("{}/bulk-delete", BULK_PATH)
}

#[derive(Debug, Clone)]
pub struct SalesmanApi {
    client: ApiClient,
}

impl SalesmanApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub fn from_session() -> Self {
        Self::new(ApiClient::from_session())
    }
}

#[async_trait(?Send)]
impl EntityApi for SalesmanApi {
    type Row = Salesman;

    fn entity_name(&self) -> &'static str {
        "salesmen"
    }

    async fn list(&self) -> Result<Vec<Salesman>, ApiError> {
        self.client
            .fetch_all_pages(BASE_PATH, |body: SalesmanListResponse| body.salesmen)
            .await
    }

    async fn delete_by_id(&self, code: &str) -> Result<(), ApiError> {
        self.client.delete(&record_path(code)).await
    }

    async fn bulk_delete(&self, codes: &[String]) -> Result<(), ApiError> {
        let body = BulkDeleteRequest { ids: codes.to_vec() };
        self.client.delete_json(&bulk_delete_path(), &body).await
    }

    async fn export_view(&self) -> Result<(), ApiError> {
        download_server_export(&self.client, BULK_PATH, self.entity_name()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths() {
        assert_eq!(record_path("S 1"), "/api/salesmen/S%201");
        assert_eq!(bulk_delete_path(), "/api/saleman/bulk-delete");
    }
}
