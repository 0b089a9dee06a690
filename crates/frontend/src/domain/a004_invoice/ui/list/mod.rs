use contracts::domain::a004_invoice::aggregate::Invoice;
use leptos::prelude::*;

use crate::domain::a004_invoice::api::InvoiceApi;
use crate::shared::data_table::{ActionDispatcher, CellKind, CellValue, ColumnDef, DataTable, TableRow};
use crate::shared::page_frame::PageFrame;

impl TableRow for Invoice {
    fn row_id(&self) -> String {
        self.record_id()
    }

    fn cell(&self, key: &str) -> CellValue {
        match key {
            "id" => CellValue::Int(self.id),
            "user_id" => CellValue::opt_int(self.user_id),
            "customer_id" => CellValue::opt_int(self.customer_id),
            "total_quantity" => CellValue::opt_float(self.total_quantity),
            "total_price" => CellValue::opt_float(self.total_price),
            "date" => CellValue::date_or_text(self.date.as_deref()),
            _ => CellValue::Null,
        }
    }
}

pub fn columns() -> Vec<ColumnDef<Invoice>> {
    vec![
        ColumnDef::new("id", "ID").pinned(),
        ColumnDef::new("user_id", "User ID").not_filterable(),
        ColumnDef::new("customer_id", "Customer ID").not_filterable(),
        ColumnDef::new("total_quantity", "Total Quantity")
            .kind(CellKind::Number { decimals: 0 })
            .not_filterable(),
        ColumnDef::new("total_price", "Total Price")
            .kind(CellKind::Number { decimals: 2 })
            .not_filterable(),
        ColumnDef::new("date", "Date").not_filterable(),
    ]
}

#[component]
pub fn InvoiceList() -> impl IntoView {
    let dispatcher = ActionDispatcher::new(InvoiceApi::from_session());

    view! {
        <PageFrame page_id="a004_invoice--list" title="Invoices">
            <DataTable dispatcher=dispatcher columns=columns() />
        </PageFrame>
    }
}
