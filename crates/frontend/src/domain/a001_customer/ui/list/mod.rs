use std::sync::Arc;

use contracts::domain::a001_customer::aggregate::Customer;
use leptos::prelude::*;

use crate::domain::a001_customer::api::CustomerApi;
use crate::shared::data_table::{
    ActionDispatcher, CellKind, CellValue, ColumnDef, DataTable, FilterMode, TableRow,
};
use crate::shared::page_frame::PageFrame;

impl TableRow for Customer {
    fn row_id(&self) -> String {
        self.record_id()
    }

    fn cell(&self, key: &str) -> CellValue {
        match key {
            "id" => CellValue::Int(self.id),
            "user_id" => CellValue::opt_int(self.user_id),
            "salesmen_code" => CellValue::opt_text(self.salesmen_code.as_deref()),
            "name" => CellValue::text(&self.name),
            "tel1" => CellValue::opt_text(self.tel1.as_deref()),
            "tel2" => CellValue::opt_text(self.tel2.as_deref()),
            "address" => CellValue::opt_text(self.address.as_deref()),
            "gender" => CellValue::opt_text(self.gender.as_deref()),
            "subscription_date" => CellValue::date_or_text(self.subscription_date.as_deref()),
            "rate" => CellValue::opt_float(self.rate),
            "photo_url" => CellValue::opt_text(self.photo_url.as_deref()),
            "tags" => CellValue::List(self.tags.clone()),
            _ => CellValue::Null,
        }
    }
}

/// Keeps customers carrying the typed tag (case-insensitive).
fn has_tag(customer: &Customer, value: &str) -> bool {
    let wanted = value.trim();
    customer.tags.iter().any(|t| t.eq_ignore_ascii_case(wanted))
}

pub fn columns() -> Vec<ColumnDef<Customer>> {
    vec![
        ColumnDef::new("id", "ID").pinned(),
        ColumnDef::new("user_id", "User ID"),
        ColumnDef::new("salesmen_code", "Salesmen Code"),
        ColumnDef::new("name", "Name"),
        ColumnDef::new("tel1", "Tel 1"),
        ColumnDef::new("tel2", "Tel 2"),
        ColumnDef::new("address", "Address"),
        ColumnDef::new("gender", "Gender"),
        ColumnDef::new("subscription_date", "Subscription Date"),
        ColumnDef::new("rate", "Rate").kind(CellKind::Number { decimals: 1 }),
        ColumnDef::new("photo_url", "Photo")
            .kind(CellKind::Image { alt: "Customer" })
            .not_sortable()
            .not_filterable(),
        ColumnDef::new("tags", "Tags")
            .kind(CellKind::Tags)
            .filter_mode(FilterMode::Custom(Arc::new(has_tag))),
    ]
}

#[component]
pub fn CustomerList() -> impl IntoView {
    let dispatcher = ActionDispatcher::new(CustomerApi::from_session());

    view! {
        <PageFrame page_id="a001_customer--list" title="Customers">
            <DataTable dispatcher=dispatcher columns=columns() />
        </PageFrame>
    }
}
