//! Client-side data table: columns, rows, view state, the pure engine that
//! derives the visible page, and the dispatcher for backend-bound gestures.

pub mod column;
pub mod component;
pub mod dispatcher;
pub mod engine;
pub mod model;
pub mod row;
pub mod value;
pub mod view_state;

pub use column::{validate_columns, BadgeTone, CellKind, ColumnDef, FilterMode};
pub use component::DataTable;
pub use dispatcher::{ActionDispatcher, EntityApi};
pub use engine::{compute_visible_rows, filter_and_sort, page_count, PageSlice};
pub use model::{TableHandle, TableModel};
pub use row::{RowStore, TableRow};
pub use value::CellValue;
pub use view_state::{
    PageSelection, SortDirection, SortSpec, StaleReference, TableAction, ViewState,
    DEFAULT_PAGE_SIZE, PAGE_SIZE_OPTIONS,
};
