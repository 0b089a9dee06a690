//! Header cell with a sort indicator
//!
//! ```rust,ignore
//! <SortableHeaderCell
//!     label="Total Price"
//!     direction=Signal::derive(move || table.with(|m| m.state.sort_direction("total_price")))
//!     on_sort=Callback::new(move |_| dispatch(TableAction::SetSort("total_price".into())))
//! />
//! ```

use crate::shared::data_table::SortDirection;
use crate::shared::list_utils::{get_aria_sort, get_sort_class, get_sort_indicator};
use leptos::prelude::*;

#[component]
pub fn SortableHeaderCell(
    #[prop(into)]
    label: String,

    #[prop(into)]
    direction: Signal<Option<SortDirection>>,

    on_sort: Callback<()>,

    /// left/right
    #[prop(optional, default = "left")]
    align: &'static str,
) -> impl IntoView {
    let class = if align == "right" {
        "table__header-cell table__header-cell--right"
    } else {
        "table__header-cell"
    };

    view! {
        <th class=class aria-sort=move || get_aria_sort(direction.get())>
            <div
                class="table__sortable-header"
                style="cursor: pointer;"
                on:click=move |_| on_sort.run(())
            >
                {label}
                <span class=move || get_sort_class(direction.get())>
                    {move || get_sort_indicator(direction.get())}
                </span>
            </div>
        </th>
    }
}
