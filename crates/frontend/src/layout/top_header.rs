//! Top bar: application title, signed-in user and logout.

use crate::shared::icons::icon;
use crate::system::auth::context::{do_logout, use_auth};
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn TopHeader() -> impl IntoView {
    let (auth_state, set_auth_state) = use_auth();

    let logout = move |_| {
        spawn_local(do_logout(set_auth_state));
    };

    let user_name = move || {
        auth_state.with(|s| s.user_info.as_ref().map(|u| u.name.clone()).unwrap_or_default())
    };

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <span class="top-header__title">"Sales Console"</span>
            </div>
            <div class="top-header__actions">
                <span class="top-header__user">{user_name}</span>
                <button class="top-header__icon-btn" on:click=logout title="Log out">
                    {icon("logout")}
                </button>
            </div>
        </div>
    }
}
