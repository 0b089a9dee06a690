use serde::{Deserialize, Serialize};

use crate::domain::common::{lenient, Paginated, RecordId};

/// Клиент (покупатель), закреплённый за торговым представителем
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: i64,
    #[serde(default)]
    pub user_id: Option<i64>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub salesmen_code: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub tel1: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub tel2: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub gender: Option<String>,
    /// `YYYY-MM-DD`
    #[serde(default)]
    pub subscription_date: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_f64")]
    pub rate: Option<f64>,
    #[serde(default)]
    pub photo_url: Option<String>,
    #[serde(default, deserialize_with = "lenient::tags")]
    pub tags: Vec<String>,
}

impl Customer {
    pub fn record_id(&self) -> String {
        self.id.as_string()
    }
}

/// `GET /api/customers` body
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CustomerListResponse {
    #[serde(default)]
    pub customers: Paginated<Customer>,
}
