use std::sync::Arc;

use contracts::domain::a002_salesman::aggregate::Salesman;
use leptos::prelude::*;

use crate::domain::a002_salesman::api::SalesmanApi;
use crate::shared::data_table::{
    ActionDispatcher, BadgeTone, CellKind, CellValue, ColumnDef, DataTable, FilterMode, TableRow,
};
use crate::shared::page_frame::PageFrame;

impl TableRow for Salesman {
    fn row_id(&self) -> String {
        self.record_id()
    }

    fn cell(&self, key: &str) -> CellValue {
        match key {
            "code" => CellValue::text(&self.code),
            "name" => CellValue::text(&self.name),
            "phone" => CellValue::opt_text(self.phone.as_deref()),
            "address" => CellValue::opt_text(self.address.as_deref()),
            "is_inactive" => CellValue::Bool(self.is_inactive),
            _ => CellValue::Null,
        }
    }
}

fn is_inactive(value: &CellValue) -> bool {
    matches!(value, CellValue::Bool(true))
}

fn status_tone(value: &CellValue) -> BadgeTone {
    if is_inactive(value) {
        BadgeTone::Danger
    } else {
        BadgeTone::Success
    }
}

fn status_label(value: &CellValue) -> String {
    if is_inactive(value) { "Inactive" } else { "Active" }.to_string()
}

/// Accepts the label ("active"/"inactive") as well as the backend's 0/1.
fn status_matches(salesman: &Salesman, value: &str) -> bool {
    match value.trim().to_lowercase().as_str() {
        "active" | "0" | "false" => !salesman.is_inactive,
        "inactive" | "1" | "true" => salesman.is_inactive,
        _ => false,
    }
}

pub fn columns() -> Vec<ColumnDef<Salesman>> {
    vec![
        ColumnDef::new("code", "Code").pinned(),
        ColumnDef::new("name", "Name"),
        ColumnDef::new("phone", "Phone"),
        ColumnDef::new("address", "Address"),
        ColumnDef::new("is_inactive", "Active")
            .kind(CellKind::Badge {
                tone: status_tone,
                label: status_label,
            })
            .filter_mode(FilterMode::Custom(Arc::new(status_matches))),
    ]
}

#[component]
pub fn SalesmanList() -> impl IntoView {
    let dispatcher = ActionDispatcher::new(SalesmanApi::from_session());

    view! {
        <PageFrame page_id="a002_salesman--list" title="Salesmen">
            <DataTable dispatcher=dispatcher columns=columns() />
        </PageFrame>
    }
}
