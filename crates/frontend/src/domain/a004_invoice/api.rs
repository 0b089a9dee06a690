use async_trait::async_trait;
use contracts::domain::a004_invoice::aggregate::{Invoice, InvoiceListResponse};
use contracts::domain::common::BulkDeleteRequest;

use crate::shared::api_utils::{ApiClient, ApiError};
use crate::shared::data_table::EntityApi;
use crate::shared::export::download_server_export;

const BASE_PATH: &str = "/api/invoices";

#[derive(Debug, Clone)]
pub struct InvoiceApi {
    client: ApiClient,
}

impl InvoiceApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub fn from_session() -> Self {
        Self::new(ApiClient::from_session())
    }
}

#[async_trait(?Send)]
impl EntityApi for InvoiceApi {
    type Row = Invoice;

    fn entity_name(&self) -> &'static str {
        "invoices"
    }

    async fn list(&self) -> Result<Vec<Invoice>, ApiError> {
        self.client
            .fetch_all_pages(BASE_PATH, |body: InvoiceListResponse| body.invoices)
            .await
    }

    async fn delete_by_id(&self, id: &str) -> Result<(), ApiError> {
        let path = format!("{}/{}", BASE_PATH, urlencoding::encode(id));
        self.client.delete(&path).await
    }

    async fn bulk_delete(&self, ids: &[String]) -> Result<(), ApiError> {
        let body = BulkDeleteRequest { ids: ids.to_vec() };
        self.client
            .delete_json(&format!("{}/bulk-delete", BASE_PATH), &body)
            .await
    }

    async fn export_view(&self) -> Result<(), ApiError> {
        download_server_export(&self.client, BASE_PATH, self.entity_name()).await
    }
}
