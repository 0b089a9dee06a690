//! Declarative column model of the data table.
//!
//! A [`ColumnDef`] says where a column reads its value from, whether it can
//! be sorted, filtered or hidden, and how the raw value is presented. The
//! presentation is data ([`CellKind`]), so the engine never touches views.

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use super::row::TableRow;
use super::value::CellValue;
use crate::shared::number_format::format_number_with_decimals;

pub type CustomFilter<R> = Arc<dyn Fn(&R, &str) -> bool + Send + Sync>;

/// How a column decides whether a row passes its filter value.
pub enum FilterMode<R> {
    /// Stringified cell equals the filter value exactly.
    Equals,
    /// Case-insensitive substring match on the stringified cell.
    Contains,
    Custom(CustomFilter<R>),
}

impl<R> Clone for FilterMode<R> {
    fn clone(&self) -> Self {
        match self {
            FilterMode::Equals => FilterMode::Equals,
            FilterMode::Contains => FilterMode::Contains,
            FilterMode::Custom(f) => FilterMode::Custom(Arc::clone(f)),
        }
    }
}

impl<R> fmt::Debug for FilterMode<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterMode::Equals => f.write_str("Equals"),
            FilterMode::Contains => f.write_str("Contains"),
            FilterMode::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeTone {
    Success,
    Danger,
}

impl BadgeTone {
    pub fn css_modifier(self) -> &'static str {
        match self {
            BadgeTone::Success => "success",
            BadgeTone::Danger => "danger",
        }
    }
}

/// Presentation of a cell.
#[derive(Debug, Clone, Copy)]
pub enum CellKind {
    Text,
    Number { decimals: u8 },
    Badge {
        tone: fn(&CellValue) -> BadgeTone,
        label: fn(&CellValue) -> String,
    },
    Image { alt: &'static str },
    Tags,
    Custom(fn(&CellValue) -> String),
}

impl CellKind {
    /// Plain-text rendering, used for text cells, titles and CSV export.
    pub fn display(&self, value: &CellValue) -> String {
        match (self, value) {
            (CellKind::Image { .. }, CellValue::Null) => "No Image".to_string(),
            (_, CellValue::Null) => String::new(),
            (CellKind::Number { decimals }, CellValue::Int(v)) => {
                format_number_with_decimals(*v as f64, *decimals)
            }
            (CellKind::Number { decimals }, CellValue::Float(v)) => {
                format_number_with_decimals(*v, *decimals)
            }
            (CellKind::Badge { label, .. }, v) => label(v),
            (CellKind::Tags, CellValue::List(items)) => items.join(", "),
            (CellKind::Custom(render), v) => render(v),
            (_, v) => v.to_filter_string(),
        }
    }
}

pub struct ColumnDef<R> {
    pub key: &'static str,
    pub header: &'static str,
    pub sortable: bool,
    pub filterable: bool,
    pub hideable: bool,
    pub filter: FilterMode<R>,
    pub kind: CellKind,
}

impl<R> Clone for ColumnDef<R> {
    fn clone(&self) -> Self {
        Self {
            key: self.key,
            header: self.header,
            sortable: self.sortable,
            filterable: self.filterable,
            hideable: self.hideable,
            filter: self.filter.clone(),
            kind: self.kind,
        }
    }
}

impl<R> fmt::Debug for ColumnDef<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColumnDef")
            .field("key", &self.key)
            .field("header", &self.header)
            .field("sortable", &self.sortable)
            .field("filterable", &self.filterable)
            .field("hideable", &self.hideable)
            .field("filter", &self.filter)
            .finish()
    }
}

impl<R: TableRow> ColumnDef<R> {
    /// Sortable, filterable (exact match), hideable text column.
    pub fn new(key: &'static str, header: &'static str) -> Self {
        Self {
            key,
            header,
            sortable: true,
            filterable: true,
            hideable: true,
            filter: FilterMode::Equals,
            kind: CellKind::Text,
        }
    }

    pub fn not_sortable(mut self) -> Self {
        self.sortable = false;
        self
    }

    pub fn not_filterable(mut self) -> Self {
        self.filterable = false;
        self
    }

    /// Column can not be hidden (identifier columns).
    pub fn pinned(mut self) -> Self {
        self.hideable = false;
        self
    }

    pub fn kind(mut self, kind: CellKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn filter_mode(mut self, filter: FilterMode<R>) -> Self {
        self.filter = filter;
        self
    }

    pub fn value(&self, row: &R) -> CellValue {
        row.cell(self.key)
    }

    pub fn display(&self, row: &R) -> String {
        self.kind.display(&self.value(row))
    }

    pub fn matches(&self, row: &R, filter_value: &str) -> bool {
        match &self.filter {
            FilterMode::Equals => self.value(row).to_filter_string() == filter_value,
            FilterMode::Contains => self
                .value(row)
                .to_filter_string()
                .to_lowercase()
                .contains(&filter_value.to_lowercase()),
            FilterMode::Custom(predicate) => predicate(row, filter_value),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("duplicate column key `{0}`")]
pub struct DuplicateColumnKey(pub String);

/// Column keys must be unique within one table.
pub fn validate_columns<R>(columns: &[ColumnDef<R>]) -> Result<(), DuplicateColumnKey> {
    let mut seen = HashSet::new();
    for column in columns {
        if !seen.insert(column.key) {
            return Err(DuplicateColumnKey(column.key.to_string()));
        }
    }
    Ok(())
}

pub fn find_column<'a, R>(columns: &'a [ColumnDef<R>], key: &str) -> Option<&'a ColumnDef<R>> {
    columns.iter().find(|c| c.key == key)
}
