use chrono::NaiveDate;
use std::cmp::Ordering;
use std::fmt;

/// Raw value of one field of a row, as the table engine sees it.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    Date(NaiveDate),
    List(Vec<String>),
}

impl CellValue {
    pub fn text(value: impl Into<String>) -> Self {
        CellValue::Text(value.into())
    }

    pub fn opt_text(value: Option<&str>) -> Self {
        value.map_or(CellValue::Null, CellValue::text)
    }

    pub fn opt_int(value: Option<i64>) -> Self {
        value.map_or(CellValue::Null, CellValue::Int)
    }

    pub fn opt_float(value: Option<f64>) -> Self {
        value.map_or(CellValue::Null, CellValue::Float)
    }

    /// Parses `YYYY-MM-DD` (a trailing time part is ignored). Unparseable
    /// input stays text so it is still displayed and filterable.
    pub fn date_or_text(value: Option<&str>) -> Self {
        let Some(raw) = value else {
            return CellValue::Null;
        };
        let head = raw.get(..10).unwrap_or(raw);
        match NaiveDate::parse_from_str(head, "%Y-%m-%d") {
            Ok(date) => CellValue::Date(date),
            Err(_) => CellValue::text(raw),
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, CellValue::Null)
    }

    fn as_f64(&self) -> Option<f64> {
        match self {
            CellValue::Int(v) => Some(*v as f64),
            CellValue::Float(v) => Some(*v),
            _ => None,
        }
    }

    fn rank(&self) -> u8 {
        match self {
            CellValue::Bool(_) => 0,
            CellValue::Int(_) | CellValue::Float(_) => 1,
            CellValue::Date(_) => 2,
            CellValue::Text(_) => 3,
            CellValue::List(_) => 4,
            CellValue::Null => 5,
        }
    }

    /// String form used by the default equality filter.
    ///
    /// Whole floats print without a fraction (`75.0` -> `"75"`) and lists
    /// are joined with `,`, so a typed filter value matches what the
    /// backend sent regardless of its JSON number type.
    pub fn to_filter_string(&self) -> String {
        match self {
            CellValue::Null => String::new(),
            CellValue::Bool(b) => b.to_string(),
            CellValue::Int(v) => v.to_string(),
            CellValue::Float(v) => format_float(*v),
            CellValue::Text(s) => s.clone(),
            CellValue::Date(d) => d.format("%Y-%m-%d").to_string(),
            CellValue::List(items) => items.join(","),
        }
    }

    /// Total order used for sorting. Mixed kinds order by kind; `Null`
    /// compares greater than everything.
    pub fn compare(&self, other: &Self) -> Ordering {
        use CellValue::*;
        match (self, other) {
            (Int(a), Int(b)) => a.cmp(b),
            (Int(_) | Float(_), Int(_) | Float(_)) => {
                let a = self.as_f64().unwrap_or_default();
                let b = other.as_f64().unwrap_or_default();
                a.total_cmp(&b)
            }
            (Bool(a), Bool(b)) => a.cmp(b),
            (Text(a), Text(b)) => compare_text(a, b),
            (Date(a), Date(b)) => a.cmp(b),
            (List(a), List(b)) => compare_text(&a.join(","), &b.join(",")),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_filter_string())
    }
}

fn compare_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

fn format_float(v: f64) -> String {
    if v.is_infinite() {
        return if v > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if v.fract() == 0.0 && v.abs() < 1e15 {
        format!("{}", v as i64)
    } else {
        format!("{}", v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_string_of_numbers() {
        assert_eq!(CellValue::Float(75.0).to_filter_string(), "75");
        assert_eq!(CellValue::Float(12.5).to_filter_string(), "12.5");
        assert_eq!(CellValue::Int(-3).to_filter_string(), "-3");
        assert_eq!(CellValue::Null.to_filter_string(), "");
    }

    #[test]
    fn test_filter_string_of_list_and_bool() {
        let tags = CellValue::List(vec!["vip".into(), "b2b".into()]);
        assert_eq!(tags.to_filter_string(), "vip,b2b");
        assert_eq!(CellValue::Bool(false).to_filter_string(), "false");
    }

    #[test]
    fn test_date_parsing() {
        let d = CellValue::date_or_text(Some("2024-03-01 10:15:00"));
        assert_eq!(d.to_filter_string(), "2024-03-01");
        assert_eq!(CellValue::date_or_text(Some("soon")), CellValue::text("soon"));
        assert!(CellValue::date_or_text(None).is_null());
    }

    #[test]
    fn test_compare_mixed_numbers() {
        assert_eq!(CellValue::Int(2).compare(&CellValue::Float(2.5)), Ordering::Less);
        assert_eq!(CellValue::Float(3.0).compare(&CellValue::Int(3)), Ordering::Equal);
    }

    #[test]
    fn test_compare_text_case_insensitive() {
        assert_eq!(CellValue::text("apple").compare(&CellValue::text("Banana")), Ordering::Less);
        assert_eq!(CellValue::text("A").compare(&CellValue::text("a")), Ordering::Equal);
    }

    #[test]
    fn test_null_is_greatest() {
        assert_eq!(CellValue::Null.compare(&CellValue::Int(1)), Ordering::Greater);
        assert_eq!(CellValue::text("z").compare(&CellValue::Null), Ordering::Less);
    }
}
