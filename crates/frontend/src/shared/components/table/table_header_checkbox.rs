//! Select-all checkbox for the header row

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::shared::data_table::PageSelection;

/// Tri-state header checkbox of the current page: checked when every row
/// on it is selected, indeterminate when some are. Any click toggles the
/// whole page.
#[component]
pub fn TableHeaderCheckbox(
    #[prop(into)]
    state: Signal<PageSelection>,
    on_toggle: Callback<()>,
    #[prop(optional, into)]
    disabled: Signal<bool>,
) -> impl IntoView {
    let checkbox_ref = NodeRef::<leptos::html::Input>::new();

    // `indeterminate` is a DOM property only
    Effect::new(move |_| {
        let indeterminate = state.get() == PageSelection::Some;
        if let Some(input) = checkbox_ref.get() {
            if let Some(input_el) = input.dyn_ref::<web_sys::HtmlInputElement>() {
                input_el.set_indeterminate(indeterminate);
            }
        }
    });

    view! {
        <th class="table__header-cell table__header-cell--checkbox">
            <input
                node_ref=checkbox_ref
                type="checkbox"
                class="table__checkbox"
                aria-label="Select all"
                prop:checked=move || state.get() == PageSelection::All
                prop:disabled=disabled
                on:change=move |_| on_toggle.run(())
            />
        </th>
    }
}
