use leptos::prelude::*;

/// Plain `<td>` with a row selection checkbox.
///
/// Clicks do not bubble to the row.
#[component]
pub fn TableCheckbox(
    checked: Signal<bool>,
    on_change: Callback<bool>,
    #[prop(optional, into)]
    disabled: Signal<bool>,
    /// Accessible label, e.g. "Select row 7"
    #[prop(optional, into)]
    label: String,
) -> impl IntoView {
    view! {
        <td
            class="table__cell table__cell--checkbox"
            on:click=|e| e.stop_propagation()
        >
            <input
                type="checkbox"
                class="table__checkbox"
                aria-label=label
                prop:checked=checked
                prop:disabled=disabled
                on:change=move |ev| on_change.run(event_target_checked(&ev))
            />
        </td>
    }
}
