use serde::{Deserialize, Serialize};

use crate::domain::common::{lenient, Paginated};

/// Торговый представитель. Идентифицируется кодом, а не числовым id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Salesman {
    #[serde(deserialize_with = "lenient::string")]
    pub code: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default, deserialize_with = "lenient::flag")]
    pub is_inactive: bool,
}

impl Salesman {
    pub fn record_id(&self) -> String {
        self.code.clone()
    }
}

/// `GET /api/salesmen` body
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SalesmanListResponse {
    #[serde(default)]
    pub salesmen: Paginated<Salesman>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_inactive_flag() {
        let json = r#"{"salesmen":{"data":[
            {"code":"S1","name":"Ann","phone":"1","address":null,"is_inactive":0},
            {"code":"S2","name":"Bob","is_inactive":1}
        ]}}"#;
        let resp: SalesmanListResponse = serde_json::from_str(json).unwrap();
        assert!(!resp.salesmen.data[0].is_inactive);
        assert!(resp.salesmen.data[1].is_inactive);
        assert_eq!(resp.salesmen.data[1].record_id(), "S2");
    }
}
