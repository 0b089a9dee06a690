use async_trait::async_trait;
use contracts::domain::a001_customer::aggregate::{Customer, CustomerListResponse};
use contracts::domain::common::BulkDeleteRequest;

use crate::shared::api_utils::{ApiClient, ApiError};
use crate::shared::data_table::EntityApi;
use crate::shared::export::download_server_export;

const BASE_PATH: &str = "/api/customers";

fn record_path(id: &str) -> String {
    format!("{}/{}", BASE_PATH, urlencoding::encode(id))
}

fn bulk_delete_path() -> String {
    format!("{}/bulk-delete", BASE_PATH)
}

#[derive(Debug, Clone)]
pub struct CustomerApi {
    client: ApiClient,
}

impl CustomerApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub fn from_session() -> Self {
        Self::new(ApiClient::from_session())
    }
}

#[async_trait(?Send)]
impl EntityApi for CustomerApi {
    type Row = Customer;

    fn entity_name(&self) -> &'static str {
        "customers"
    }

    async fn list(&self) -> Result<Vec<Customer>, ApiError> {
        self.client
            .fetch_all_pages(BASE_PATH, |body: CustomerListResponse| body.customers)
            .await
    }

    async fn delete_by_id(&self, id: &str) -> Result<(), ApiError> {
        self.client.delete(&record_path(id)).await
    }

    async fn bulk_delete(&self, ids: &[String]) -> Result<(), ApiError> {
        let body = BulkDeleteRequest { ids: ids.to_vec() };
        self.client.delete_json(&bulk_delete_path(), &body).await
    }

    async fn export_view(&self) -> Result<(), ApiError> {
        download_server_export(&self.client, BASE_PATH, self.entity_name()).await
    }
}
