//! Deserializers tolerant of the loosely typed JSON the backend emits:
//! decimals arrive as strings, flags as `0/1`, tag lists sometimes as a
//! comma separated string.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// `"12.50"`, `12.5` and `null` all deserialize; anything else is `None`.
pub fn opt_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    })
}

/// Numbers are rendered as text so code-like fields keep a single type.
pub fn opt_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    })
}

/// Required variant of [`opt_string`].
pub fn string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    opt_string(deserializer).map(Option::unwrap_or_default)
}

pub fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Bool(b) => b,
        Value::Number(n) => n.as_f64().map(|v| v != 0.0).unwrap_or(false),
        Value::String(s) => matches!(s.trim(), "1" | "true" | "TRUE" | "True"),
        _ => false,
    })
}

pub fn tags<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|v| match v {
                Value::String(s) => Some(s),
                Value::Null => None,
                other => Some(other.to_string()),
            })
            .collect(),
        Value::String(s) => s
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect(),
        _ => Vec::new(),
    })
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Probe {
        #[serde(default, deserialize_with = "super::opt_f64")]
        price: Option<f64>,
        #[serde(default, deserialize_with = "super::flag")]
        inactive: bool,
        #[serde(default, deserialize_with = "super::tags")]
        tags: Vec<String>,
        #[serde(default, deserialize_with = "super::string")]
        code: String,
    }

    #[test]
    fn test_decimal_as_string() {
        let p: Probe = serde_json::from_str(r#"{"price":"100.50"}"#).unwrap();
        assert_eq!(p.price, Some(100.5));
        let p: Probe = serde_json::from_str(r#"{"price":null}"#).unwrap();
        assert_eq!(p.price, None);
    }

    #[test]
    fn test_flag_variants() {
        let p: Probe = serde_json::from_str(r#"{"inactive":1}"#).unwrap();
        assert!(p.inactive);
        let p: Probe = serde_json::from_str(r#"{"inactive":"0"}"#).unwrap();
        assert!(!p.inactive);
        let p: Probe = serde_json::from_str(r#"{"inactive":true}"#).unwrap();
        assert!(p.inactive);
    }

    #[test]
    fn test_tags_array_or_csv() {
        let p: Probe = serde_json::from_str(r#"{"tags":["vip","b2b"]}"#).unwrap();
        assert_eq!(p.tags, vec!["vip", "b2b"]);
        let p: Probe = serde_json::from_str(r#"{"tags":"vip, b2b,"}"#).unwrap();
        assert_eq!(p.tags, vec!["vip", "b2b"]);
    }

    #[test]
    fn test_numeric_code_becomes_text() {
        let p: Probe = serde_json::from_str(r#"{"code":42}"#).unwrap();
        assert_eq!(p.code, "42");
    }
}
