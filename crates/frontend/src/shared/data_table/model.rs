use leptos::prelude::*;

use super::column::ColumnDef;
use super::engine::{compute_visible_rows, PageSlice};
use super::row::{RowStore, TableRow};
use super::view_state::{StaleReference, TableAction, ViewState};

/// Row Store and View State of one mounted screen.
#[derive(Debug, Clone, PartialEq)]
pub struct TableModel<R> {
    pub store: RowStore<R>,
    pub state: ViewState,
    /// A list/delete/export request is pending; triggering controls are disabled.
    pub in_flight: bool,
    /// The first fetch has completed.
    pub loaded: bool,
    /// The last fetch failed.
    pub load_failed: bool,
}

impl<R: TableRow> TableModel<R> {
    pub fn new(state: ViewState) -> Self {
        Self {
            store: RowStore::default(),
            state,
            in_flight: false,
            loaded: false,
            load_failed: false,
        }
    }

    pub fn apply(&mut self, action: TableAction) {
        self.state.apply(action);
    }

    pub fn visible<'a>(&'a self, columns: &[ColumnDef<R>]) -> PageSlice<'a, R> {
        compute_visible_rows(self.store.rows(), columns, &self.state)
    }

    /// Wholesale replacement after a (re)load.
    pub fn replace_rows(&mut self, rows: Vec<R>) -> Vec<StaleReference> {
        self.store.replace_all(rows);
        self.loaded = true;
        self.load_failed = false;
        let ids = self.store.ids();
        self.state.drop_stale(&ids)
    }

    pub fn remove_row(&mut self, id: &str) -> bool {
        let removed = self.store.remove_id(id);
        let ids = self.store.ids();
        self.state.prune_selection(&ids);
        removed
    }

    /// Removes the rows of a successful bulk delete and empties the selection.
    pub fn remove_rows(&mut self, ids: &[String]) -> usize {
        let removed = self.store.remove_ids(ids);
        self.state.selection.clear();
        removed
    }

    /// Current selection in row order, as sent to bulk delete.
    pub fn selected_ids(&self) -> Vec<String> {
        self.store.ordered_ids(&self.state.selection)
    }
}

/// Read/write access to a [`TableModel`] owned by someone else (a Leptos
/// signal in the UI).
pub trait TableHandle<R> {
    fn with_model<T>(&self, f: impl FnOnce(&TableModel<R>) -> T) -> T;
    fn update_model(&self, f: impl FnOnce(&mut TableModel<R>));
}

impl<R> TableHandle<R> for RwSignal<TableModel<R>>
where
    R: Send + Sync + 'static,
{
    fn with_model<T>(&self, f: impl FnOnce(&TableModel<R>) -> T) -> T {
        self.with_untracked(f)
    }

    fn update_model(&self, f: impl FnOnce(&mut TableModel<R>)) {
        self.update(f);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data_table::row::tests::Fruit;

    fn model() -> TableModel<Fruit> {
        let cols = vec![ColumnDef::<Fruit>::new("id", "ID"), ColumnDef::new("name", "Name")];
        let mut m = TableModel::new(ViewState::for_columns(&cols));
        m.replace_rows(vec![
            Fruit::new("A", "Apple", 1.0),
            Fruit::new("B", "Banana", 2.0),
            Fruit::new("C", "Cherry", 3.0),
        ]);
        m
    }

    #[test]
    fn test_replace_rows_prunes_selection() {
        let mut m = model();
        m.apply(TableAction::ToggleRowSelection("A".into()));
        m.apply(TableAction::ToggleRowSelection("C".into()));
        let stale = m.replace_rows(vec![Fruit::new("A", "Apple", 1.0)]);
        assert_eq!(stale, vec![StaleReference::Selection("C".into())]);
        assert_eq!(m.selected_ids(), vec!["A"]);
        assert!(m.loaded);
    }

    #[test]
    fn test_remove_row_prunes_selection() {
        let mut m = model();
        m.apply(TableAction::ToggleRowSelection("B".into()));
        assert!(m.remove_row("B"));
        assert!(m.state.selection.is_empty());
        assert_eq!(m.store.len(), 2);
    }

    #[test]
    fn test_remove_rows_clears_selection() {
        let mut m = model();
        m.apply(TableAction::ToggleAllOnPage(vec!["A".into(), "B".into()]));
        let ids = m.selected_ids();
        assert_eq!(m.remove_rows(&ids), 2);
        assert!(m.state.selection.is_empty());
        assert_eq!(m.store.rows(), &[Fruit::new("C", "Cherry", 3.0)]);
    }
}
