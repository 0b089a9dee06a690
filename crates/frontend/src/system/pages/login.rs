use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::system::auth::context::{do_login, do_register, use_auth};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    SignIn,
    Register,
}

/// Sign-in form with a switch to account registration.
#[component]
pub fn LoginPage() -> impl IntoView {
    let (mode, set_mode) = signal(Mode::SignIn);
    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (is_loading, set_is_loading) = signal(false);

    let (_, set_auth_state) = use_auth();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let email_val = email.get_untracked();
        let password_val = password.get_untracked();
        let name_val = name.get_untracked();
        let mode_val = mode.get_untracked();

        set_is_loading.set(true);
        set_error_message.set(None);

        spawn_local(async move {
            let result = match mode_val {
                Mode::SignIn => do_login(email_val, password_val, set_auth_state).await,
                Mode::Register => {
                    do_register(name_val, email_val, password_val, set_auth_state).await
                }
            };
            if let Err(e) = result {
                log::error!("Authentication failed: {}", e);
                set_error_message.set(Some(e.to_string()));
            }
            // On success the page is already gone.
            let _ = set_is_loading.try_set(false);
        });
    };

    let toggle_mode = move |_| {
        set_error_message.set(None);
        set_mode.update(|m| {
            *m = match m {
                Mode::SignIn => Mode::Register,
                Mode::Register => Mode::SignIn,
            }
        });
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>"Sales Console"</h1>
                <h2>{move || if mode.get() == Mode::SignIn { "Sign in" } else { "Create account" }}</h2>

                <Show when=move || error_message.get().is_some()>
                    <div class="error-message">
                        {move || error_message.get().unwrap_or_default()}
                    </div>
                </Show>

                <form on:submit=on_submit>
                    <Show when=move || mode.get() == Mode::Register>
                        <div class="form-group">
                            <label for="name">"Name"</label>
                            <input
                                type="text"
                                id="name"
                                prop:value=move || name.get()
                                on:input=move |ev| set_name.set(event_target_value(&ev))
                                required
                                disabled=move || is_loading.get()
                            />
                        </div>
                    </Show>

                    <div class="form-group">
                        <label for="email">"Email"</label>
                        <input
                            type="email"
                            id="email"
                            autocomplete="username"
                            prop:value=move || email.get()
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                            required
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <div class="form-group">
                        <label for="password">"Password"</label>
                        <input
                            type="password"
                            id="password"
                            autocomplete="current-password"
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                            required
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <button
                        type="submit"
                        class="btn-primary"
                        disabled=move || is_loading.get()
                    >
                        {move || match (is_loading.get(), mode.get()) {
                            (true, _) => "Please wait...",
                            (false, Mode::SignIn) => "Sign in",
                            (false, Mode::Register) => "Register",
                        }}
                    </button>
                </form>

                <button class="login-switch" on:click=toggle_mode disabled=move || is_loading.get()>
                    {move || if mode.get() == Mode::SignIn {
                        "No account yet? Register"
                    } else {
                        "Already registered? Sign in"
                    }}
                </button>
            </div>
        </div>
    }
}
