use contracts::domain::a003_item::aggregate::Item;
use leptos::prelude::*;

use crate::domain::a003_item::api::ItemApi;
use crate::shared::data_table::{ActionDispatcher, CellValue, ColumnDef, DataTable, FilterMode, TableRow};
use crate::shared::page_frame::PageFrame;

impl TableRow for Item {
    fn row_id(&self) -> String {
        self.record_id()
    }

    fn cell(&self, key: &str) -> CellValue {
        match key {
            "code" => CellValue::text(&self.code),
            "name" => CellValue::text(&self.name),
            "description" => CellValue::opt_text(self.description.as_deref()),
            _ => CellValue::Null,
        }
    }
}

/// Only the name is searchable, by substring.
pub fn columns() -> Vec<ColumnDef<Item>> {
    vec![
        ColumnDef::new("code", "Code").pinned().not_filterable(),
        ColumnDef::new("name", "Name").filter_mode(FilterMode::Contains),
        ColumnDef::new("description", "Description").not_filterable(),
    ]
}

#[component]
pub fn ItemList() -> impl IntoView {
    let dispatcher = ActionDispatcher::new(ItemApi::from_session());

    view! {
        <PageFrame page_id="a003_item--list" title="Items">
            <DataTable dispatcher=dispatcher columns=columns() />
        </PageFrame>
    }
}
