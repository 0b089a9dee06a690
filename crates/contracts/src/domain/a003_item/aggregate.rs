use serde::{Deserialize, Serialize};

use crate::domain::common::{lenient, Paginated};

/// Номенклатурная позиция
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    #[serde(deserialize_with = "lenient::string")]
    pub code: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl Item {
    pub fn record_id(&self) -> String {
        self.code.clone()
    }
}

/// `GET /api/items` body
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ItemListResponse {
    #[serde(default)]
    pub items: Paginated<Item>,
}
