//! PageFrame: root wrapper of every routed page.
//!
//! ```rust,ignore
//! view! {
//!     <PageFrame page_id="a004_invoice--list" title="Invoices">
//!         <DataTable ... />
//!     </PageFrame>
//! }
//! ```

use leptos::prelude::*;

/// Sets `id` (`"{entity}--{category}"`) on the root element and renders the
/// page heading.
#[component]
pub fn PageFrame(
    page_id: &'static str,
    title: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <div id=page_id class="page">
            <div class="page__header">
                <h1 class="page__title">{title}</h1>
            </div>
            <div class="page__content">{children()}</div>
        </div>
    }
}
