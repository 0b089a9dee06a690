use async_trait::async_trait;
use contracts::domain::a003_item::aggregate::{Item, ItemListResponse};
use contracts::domain::common::BulkDeleteRequest;

use crate::shared::api_utils::{ApiClient, ApiError};
use crate::shared::data_table::EntityApi;
use crate::shared::export::download_server_export;

const BASE_PATH: &str = "/api/items";

#[derive(Debug, Clone)]
pub struct ItemApi {
    client: ApiClient,
}

impl ItemApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub fn from_session() -> Self {
        Self::new(ApiClient::from_session())
    }
}

#[async_trait(?Send)]
impl EntityApi for ItemApi {
    type Row = Item;

    fn entity_name(&self) -> &'static str {
        "items"
    }

    async fn list(&self) -> Result<Vec<Item>, ApiError> {
        self.client
            .fetch_all_pages(BASE_PATH, |body: ItemListResponse| body.items)
            .await
    }

    async fn delete_by_id(&self, code: &str) -> Result<(), ApiError> {
        let path = format!("{}/{}", BASE_PATH, urlencoding::encode(code));
        self.client.delete(&path).await
    }

    async fn bulk_delete(&self, codes: &[String]) -> Result<(), ApiError> {
        let body = BulkDeleteRequest { ids: codes.to_vec() };
        self.client
            .delete_json(&format!("{}/bulk-delete", BASE_PATH), &body)
            .await
    }

    async fn export_view(&self) -> Result<(), ApiError> {
        download_server_export(&self.client, BASE_PATH, self.entity_name()).await
    }
}
