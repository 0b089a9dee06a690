//! Bridge between table gestures that need the backend and the Row Store.
//!
//! Row Store and selection change only after the awaited call succeeded;
//! on failure the model is left exactly as it was (apart from the
//! `in_flight` flag) and the error is handed back to the screen.

use async_trait::async_trait;

use super::model::TableHandle;
use super::row::TableRow;
use crate::shared::api_utils::ApiError;

/// REST operations of one entity (customers, salesmen, items, invoices).
#[async_trait(?Send)]
pub trait EntityApi {
    type Row: TableRow;

    /// Name used in messages and as the export file stem.
    fn entity_name(&self) -> &'static str;

    async fn list(&self) -> Result<Vec<Self::Row>, ApiError>;

    async fn delete_by_id(&self, id: &str) -> Result<(), ApiError>;

    async fn bulk_delete(&self, ids: &[String]) -> Result<(), ApiError>;

    /// Server-side export; triggers a file download.
    async fn export_view(&self) -> Result<(), ApiError>;
}

#[derive(Debug, Clone)]
pub struct ActionDispatcher<A> {
    api: A,
}

impl<A: EntityApi> ActionDispatcher<A> {
    pub fn new(api: A) -> Self {
        Self { api }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn entity_name(&self) -> &'static str {
        self.api.entity_name()
    }

    /// Replace the Row Store with a fresh listing. Returns the row count.
    pub async fn reload<H>(&self, table: &H) -> Result<usize, ApiError>
    where
        H: TableHandle<A::Row>,
    {
        table.update_model(|m| m.in_flight = true);
        let result = self.api.list().await;
        table.update_model(|m| m.in_flight = false);

        let rows = result.inspect_err(|e| {
            log::error!("Failed to load {}: {}", self.entity_name(), e);
            table.update_model(|m| m.load_failed = true);
        })?;
        let count = rows.len();
        table.update_model(|m| {
            for stale in m.replace_rows(rows) {
                log::debug!("{}: dropped stale reference {:?}", self.entity_name(), stale);
            }
        });
        log::info!("Loaded {} {}", count, self.entity_name());
        Ok(count)
    }

    pub async fn delete_one<H>(&self, table: &H, id: &str) -> Result<(), ApiError>
    where
        H: TableHandle<A::Row>,
    {
        table.update_model(|m| m.in_flight = true);
        let result = self.api.delete_by_id(id).await;
        table.update_model(|m| m.in_flight = false);

        result.inspect_err(|e| {
            log::error!("Failed to delete {} {}: {}", self.entity_name(), id, e);
        })?;
        table.update_model(|m| {
            m.remove_row(id);
        });
        log::info!("Deleted {} {}", self.entity_name(), id);
        Ok(())
    }

    /// Bulk-delete the current selection (in row order). An empty selection
    /// sends nothing. Returns the number of ids deleted.
    pub async fn delete_selected<H>(&self, table: &H) -> Result<usize, ApiError>
    where
        H: TableHandle<A::Row>,
    {
        let ids = table.with_model(|m| m.selected_ids());
        if ids.is_empty() {
            return Ok(0);
        }

        table.update_model(|m| m.in_flight = true);
        let result = self.api.bulk_delete(&ids).await;
        table.update_model(|m| m.in_flight = false);

        result.inspect_err(|e| {
            log::error!("Failed to delete {} {}: {}", ids.len(), self.entity_name(), e);
        })?;
        table.update_model(|m| {
            m.remove_rows(&ids);
        });
        log::info!("Deleted {} {}", ids.len(), self.entity_name());
        Ok(ids.len())
    }

    /// Download the backend export of this entity. Touches neither rows nor
    /// view state, only `in_flight` while the download is prepared.
    pub async fn export_current_view<H>(&self, table: &H) -> Result<(), ApiError>
    where
        H: TableHandle<A::Row>,
    {
        table.update_model(|m| m.in_flight = true);
        let result = self.api.export_view().await;
        table.update_model(|m| m.in_flight = false);

        result.inspect_err(|e| {
            log::error!("Export of {} failed: {}", self.entity_name(), e);
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data_table::column::ColumnDef;
    use crate::shared::data_table::model::TableModel;
    use crate::shared::data_table::row::tests::Fruit;
    use crate::shared::data_table::view_state::{TableAction, ViewState};
    use futures::executor::block_on;
    use std::cell::RefCell;

    impl TableHandle<Fruit> for RefCell<TableModel<Fruit>> {
        fn with_model<T>(&self, f: impl FnOnce(&TableModel<Fruit>) -> T) -> T {
            f(&self.borrow())
        }

        fn update_model(&self, f: impl FnOnce(&mut TableModel<Fruit>)) {
            f(&mut self.borrow_mut())
        }
    }

    /// Records `in_flight` after every update.
    struct Recording {
        model: RefCell<TableModel<Fruit>>,
        in_flight: RefCell<Vec<bool>>,
    }

    impl TableHandle<Fruit> for Recording {
        fn with_model<T>(&self, f: impl FnOnce(&TableModel<Fruit>) -> T) -> T {
            f(&self.model.borrow())
        }

        fn update_model(&self, f: impl FnOnce(&mut TableModel<Fruit>)) {
            let mut model = self.model.borrow_mut();
            f(&mut model);
            self.in_flight.borrow_mut().push(model.in_flight);
        }
    }

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        List,
        Delete(String),
        BulkDelete(Vec<String>),
        Export,
    }

    #[derive(Default)]
    struct FakeApi {
        rows: Vec<Fruit>,
        fail: bool,
        calls: RefCell<Vec<Call>>,
    }

    impl FakeApi {
        fn outcome(&self) -> Result<(), ApiError> {
            if self.fail {
                Err(ApiError::Server {
                    status: 500,
                    message: "boom".into(),
                })
            } else {
                Ok(())
            }
        }
    }

    #[async_trait(?Send)]
    impl EntityApi for FakeApi {
        type Row = Fruit;

        fn entity_name(&self) -> &'static str {
            "fruits"
        }

        async fn list(&self) -> Result<Vec<Fruit>, ApiError> {
            self.calls.borrow_mut().push(Call::List);
            self.outcome().map(|_| self.rows.clone())
        }

        async fn delete_by_id(&self, id: &str) -> Result<(), ApiError> {
            self.calls.borrow_mut().push(Call::Delete(id.to_string()));
            self.outcome()
        }

        async fn bulk_delete(&self, ids: &[String]) -> Result<(), ApiError> {
            self.calls.borrow_mut().push(Call::BulkDelete(ids.to_vec()));
            self.outcome()
        }

        async fn export_view(&self) -> Result<(), ApiError> {
            self.calls.borrow_mut().push(Call::Export);
            self.outcome()
        }
    }

    fn rows() -> Vec<Fruit> {
        vec![
            Fruit::new("A", "Apple", 1.0),
            Fruit::new("B", "Banana", 2.0),
            Fruit::new("C", "Cherry", 3.0),
        ]
    }

    fn table() -> RefCell<TableModel<Fruit>> {
        let cols = vec![ColumnDef::<Fruit>::new("id", "ID"), ColumnDef::new("name", "Name")];
        let mut model = TableModel::new(ViewState::for_columns(&cols));
        model.replace_rows(rows());
        RefCell::new(model)
    }

    fn dispatcher(fail: bool) -> ActionDispatcher<FakeApi> {
        ActionDispatcher::new(FakeApi {
            rows: rows(),
            fail,
            ..Default::default()
        })
    }

    #[test]
    fn test_reload_fills_store() {
        let table = RefCell::new(TableModel::new(ViewState::for_columns::<Fruit>(&[])));
        let d = dispatcher(false);
        assert_eq!(block_on(d.reload(&table)), Ok(3));
        let model = table.borrow();
        assert!(model.loaded);
        assert!(!model.in_flight);
        assert_eq!(model.store.len(), 3);
    }

    #[test]
    fn test_reload_failure_keeps_rows() {
        let table = table();
        table.borrow_mut().store.remove_id("C");
        let d = dispatcher(true);
        assert!(block_on(d.reload(&table)).is_err());
        assert_eq!(table.borrow().store.len(), 2);
        assert!(!table.borrow().in_flight);
    }

    #[test]
    fn test_first_load_failure_is_recorded() {
        let table = RefCell::new(TableModel::new(ViewState::for_columns::<Fruit>(&[])));
        let d = dispatcher(true);
        assert!(block_on(d.reload(&table)).is_err());
        assert!(!table.borrow().loaded);
        assert!(table.borrow().load_failed);

        let d = dispatcher(false);
        assert_eq!(block_on(d.reload(&table)), Ok(3));
        assert!(table.borrow().loaded);
        assert!(!table.borrow().load_failed);
    }

    #[test]
    fn test_delete_selected_success() {
        let table = table();
        table.borrow_mut().apply(TableAction::ToggleRowSelection("B".into()));
        table.borrow_mut().apply(TableAction::ToggleRowSelection("A".into()));
        let d = dispatcher(false);

        assert_eq!(block_on(d.delete_selected(&table)), Ok(2));

        let model = table.borrow();
        assert_eq!(model.store.rows(), &[Fruit::new("C", "Cherry", 3.0)]);
        assert!(model.state.selection.is_empty());
        assert_eq!(
            d.api().calls.borrow().as_slice(),
            &[Call::BulkDelete(vec!["A".into(), "B".into()])]
        );
    }

    #[test]
    fn test_delete_selected_failure_keeps_everything() {
        let table = table();
        table.borrow_mut().apply(TableAction::ToggleRowSelection("A".into()));
        let before = table.borrow().clone();
        let d = dispatcher(true);

        assert!(block_on(d.delete_selected(&table)).is_err());
        assert_eq!(*table.borrow(), before);
    }

    #[test]
    fn test_delete_selected_with_empty_selection_sends_nothing() {
        let table = table();
        let d = dispatcher(false);
        assert_eq!(block_on(d.delete_selected(&table)), Ok(0));
        assert!(d.api().calls.borrow().is_empty());
    }

    #[test]
    fn test_delete_one_failure_surfaces_error() {
        let table = table();
        table.borrow_mut().apply(TableAction::ToggleRowSelection("X".into()));
        let before = table.borrow().clone();
        let d = dispatcher(true);

        let err = block_on(d.delete_one(&table, "X")).unwrap_err();
        assert_eq!(err.to_string(), "boom");
        assert_eq!(*table.borrow(), before);
    }

    #[test]
    fn test_delete_one_success_prunes_selection() {
        let table = table();
        table.borrow_mut().apply(TableAction::ToggleRowSelection("B".into()));
        table.borrow_mut().apply(TableAction::ToggleRowSelection("C".into()));
        let d = dispatcher(false);

        block_on(d.delete_one(&table, "B")).unwrap();

        let model = table.borrow();
        assert_eq!(model.store.len(), 2);
        assert_eq!(model.selected_ids(), vec!["C"]);
    }

    #[test]
    fn test_export_leaves_model_alone() {
        let table = table();
        let before = table.borrow().clone();
        let d = dispatcher(false);
        block_on(d.export_current_view(&table)).unwrap();
        assert_eq!(*table.borrow(), before);
        assert_eq!(d.api().calls.borrow().as_slice(), &[Call::Export]);
    }

    #[test]
    fn test_export_marks_table_busy_until_done() {
        for fail in [false, true] {
            let table = Recording {
                model: table(),
                in_flight: RefCell::new(Vec::new()),
            };
            let d = dispatcher(fail);
            assert_eq!(block_on(d.export_current_view(&table)).is_err(), fail);
            assert_eq!(table.in_flight.borrow().as_slice(), &[true, false]);
        }
    }
}
