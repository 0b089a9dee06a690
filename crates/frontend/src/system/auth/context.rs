use contracts::system::auth::{LoginResponse, UserInfo};
use leptos::prelude::*;

use super::{api, storage};
use crate::shared::api_utils::{ApiClient, ApiError};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub token: Option<String>,
    pub user_info: Option<UserInfo>,
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    fn from_login(response: LoginResponse) -> Self {
        Self {
            token: Some(response.token),
            user_info: response.user,
        }
    }
}

/// Auth context provider component
///
/// The session is whatever token localStorage holds; the backend rejects a
/// stale one with 401, which ends the session (see [`end_session`]).
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let (auth_state, set_auth_state) = signal(AuthState {
        token: storage::get_token(),
        user_info: None,
    });

    provide_context(auth_state);
    provide_context(set_auth_state);

    children()
}

/// Hook to access auth state
pub fn use_auth() -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
    let auth_state =
        use_context::<ReadSignal<AuthState>>().expect("AuthProvider not found in component tree");
    let set_auth_state =
        use_context::<WriteSignal<AuthState>>().expect("AuthProvider not found in component tree");

    (auth_state, set_auth_state)
}

/// Perform login and start the session
pub async fn do_login(
    email: String,
    password: String,
    set_auth_state: WriteSignal<AuthState>,
) -> Result<(), ApiError> {
    let response = api::login(email, password).await?;
    storage::save_token(&response.token);
    set_auth_state.set(AuthState::from_login(response));
    log::info!("Signed in");
    Ok(())
}

pub async fn do_register(
    name: String,
    email: String,
    password: String,
    set_auth_state: WriteSignal<AuthState>,
) -> Result<(), ApiError> {
    let response = api::register(name, email, password).await?;
    storage::save_token(&response.token);
    set_auth_state.set(AuthState::from_login(response));
    log::info!("Registered and signed in");
    Ok(())
}

/// Revoke the token on the backend (best effort) and end the session.
pub async fn do_logout(set_auth_state: WriteSignal<AuthState>) {
    let client = ApiClient::from_session();
    if let Err(e) = api::logout(&client).await {
        log::warn!("Logout request failed: {}", e);
    }
    end_session(set_auth_state);
}

/// Forget the token locally; the guard then shows the login page.
pub fn end_session(set_auth_state: WriteSignal<AuthState>) {
    storage::clear_token();
    set_auth_state.set(AuthState::default());
}
