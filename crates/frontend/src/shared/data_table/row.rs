use std::collections::{BTreeSet, HashSet};

use super::value::CellValue;

/// A record the table can display.
///
/// `row_id` is the identifier the backend addresses the record by (a
/// numeric id or a natural code); selection tracks these strings, never
/// row positions.
pub trait TableRow: Clone + 'static {
    fn row_id(&self) -> String;

    /// Value of the field named `key`; unknown keys yield [`CellValue::Null`].
    fn cell(&self, key: &str) -> CellValue;
}

/// In-memory records of one screen, in the order the backend returned them.
#[derive(Debug, Clone, PartialEq)]
pub struct RowStore<R> {
    rows: Vec<R>,
}

impl<R> Default for RowStore<R> {
    fn default() -> Self {
        Self { rows: Vec::new() }
    }
}

impl<R: TableRow> RowStore<R> {
    pub fn new(rows: Vec<R>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[R] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn ids(&self) -> HashSet<String> {
        self.rows.iter().map(TableRow::row_id).collect()
    }

    pub fn replace_all(&mut self, rows: Vec<R>) {
        self.rows = rows;
    }

    /// Returns `true` if a row was removed.
    pub fn remove_id(&mut self, id: &str) -> bool {
        let before = self.rows.len();
        self.rows.retain(|r| r.row_id() != id);
        self.rows.len() != before
    }

    /// Returns the number of removed rows.
    pub fn remove_ids(&mut self, ids: &[String]) -> usize {
        let ids: HashSet<&str> = ids.iter().map(String::as_str).collect();
        let before = self.rows.len();
        self.rows.retain(|r| !ids.contains(r.row_id().as_str()));
        before - self.rows.len()
    }

    /// Selected ids in row-store order; ids without a row are skipped.
    pub fn ordered_ids(&self, selection: &BTreeSet<String>) -> Vec<String> {
        self.rows
            .iter()
            .map(TableRow::row_id)
            .filter(|id| selection.contains(id))
            .collect()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Minimal row used by the table tests.
    #[derive(Debug, Clone, PartialEq)]
    pub struct Fruit {
        pub id: String,
        pub name: String,
        pub qty: f64,
        pub status: Option<String>,
    }

    impl Fruit {
        pub fn new(id: &str, name: &str, qty: f64) -> Self {
            Self {
                id: id.to_string(),
                name: name.to_string(),
                qty,
                status: None,
            }
        }

        pub fn with_status(mut self, status: &str) -> Self {
            self.status = Some(status.to_string());
            self
        }
    }

    impl TableRow for Fruit {
        fn row_id(&self) -> String {
            self.id.clone()
        }

        fn cell(&self, key: &str) -> CellValue {
            match key {
                "id" => CellValue::text(&self.id),
                "name" => CellValue::text(&self.name),
                "qty" => CellValue::Float(self.qty),
                "status" => CellValue::opt_text(self.status.as_deref()),
                _ => CellValue::Null,
            }
        }
    }

    fn store() -> RowStore<Fruit> {
        RowStore::new(vec![
            Fruit::new("A", "Apple", 1.0),
            Fruit::new("B", "Banana", 2.0),
            Fruit::new("C", "Cherry", 3.0),
        ])
    }

    #[test]
    fn test_remove_ids() {
        let mut s = store();
        assert_eq!(s.remove_ids(&["A".to_string(), "B".to_string(), "Z".to_string()]), 2);
        assert_eq!(s.rows(), &[Fruit::new("C", "Cherry", 3.0)]);
    }

    #[test]
    fn test_remove_missing_id_is_noop() {
        let mut s = store();
        assert!(!s.remove_id("Z"));
        assert_eq!(s.len(), 3);
    }

    #[test]
    fn test_ordered_ids_follow_store_order() {
        let s = store();
        let selection: BTreeSet<String> = ["C", "A", "Q"].iter().map(|s| s.to_string()).collect();
        assert_eq!(s.ordered_ids(&selection), vec!["A", "C"]);
    }
}
