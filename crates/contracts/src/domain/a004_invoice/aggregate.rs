use serde::{Deserialize, Serialize};

use crate::domain::common::{lenient, Paginated, RecordId};

/// Счёт-фактура (заголовок документа, без строк)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    pub id: i64,
    #[serde(default)]
    pub user_id: Option<i64>,
    #[serde(default)]
    pub customer_id: Option<i64>,
    #[serde(default, deserialize_with = "lenient::opt_f64")]
    pub total_quantity: Option<f64>,
    #[serde(default, deserialize_with = "lenient::opt_f64")]
    pub total_price: Option<f64>,
    /// `YYYY-MM-DD`
    #[serde(default)]
    pub date: Option<String>,
}

impl Invoice {
    pub fn record_id(&self) -> String {
        self.id.as_string()
    }
}

/// `GET /api/invoices` body
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InvoiceListResponse {
    #[serde(default)]
    pub invoices: Paginated<Invoice>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decimal_totals() {
        let json = r#"{"invoices":{"current_page":1,"last_page":3,"data":[
            {"id":1,"user_id":2,"customer_id":7,"total_quantity":3,"total_price":"100.00","date":"2024-05-01"}
        ]}}"#;
        let resp: InvoiceListResponse = serde_json::from_str(json).unwrap();
        let inv = &resp.invoices.data[0];
        assert_eq!(inv.total_price, Some(100.0));
        assert_eq!(inv.total_quantity, Some(3.0));
        assert!(resp.invoices.has_more());
    }
}
