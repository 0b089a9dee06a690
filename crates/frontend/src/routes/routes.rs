use crate::domain::a001_customer::ui::list::CustomerList;
use crate::domain::a002_salesman::ui::list::SalesmanList;
use crate::domain::a003_item::ui::list::ItemList;
use crate::domain::a004_invoice::ui::list::InvoiceList;
use crate::layout::Shell;
use crate::system::auth::guard::RequireAuth;
use leptos::prelude::*;
use leptos_router::components::{Redirect, Route, Router, Routes};
use leptos_router::path;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <RequireAuth>
                <Shell>
                    <Routes fallback=|| view! { <div class="page">"Page not found."</div> }>
                        <Route path=path!("/") view=|| view! { <Redirect path="/customers" /> } />
                        <Route path=path!("/customers") view=CustomerList />
                        <Route path=path!("/salesmen") view=SalesmanList />
                        <Route path=path!("/items") view=ItemList />
                        <Route path=path!("/invoices") view=InvoiceList />
                    </Routes>
                </Shell>
            </RequireAuth>
        </Router>
    }
}
