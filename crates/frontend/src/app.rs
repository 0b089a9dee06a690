use crate::routes::routes::AppRoutes;
use crate::shared::notify::{NotificationService, Toasts};
use crate::system::auth::context::AuthProvider;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Toasts are app-wide so table screens can report failures after
    // navigating away.
    provide_context(NotificationService::new());

    view! {
        <AuthProvider>
            <AppRoutes />
            <Toasts />
        </AuthProvider>
    }
}
