pub mod sidebar;
pub mod top_header;

use leptos::prelude::*;
use sidebar::Sidebar;
use top_header::TopHeader;

/// Main application shell.
///
/// ```text
/// +------------------------------+
/// |          TopHeader           |
/// +------------------------------+
/// |  Sidebar  |     Content      |
/// +------------------------------+
/// ```
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="app-layout">
            <TopHeader />
            <div class="app-body">
                <aside class="app-sidebar">
                    <Sidebar />
                </aside>
                <main class="app-main">{children()}</main>
            </div>
        </div>
    }
}
