use web_sys::window;

/// localStorage key the backend token lives under.
const TOKEN_KEY: &str = "Token";

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Save bearer token to localStorage
pub fn save_token(token: &str) {
    if let Some(storage) = get_local_storage() {
        let _ = storage.set_item(TOKEN_KEY, token);
    }
}

/// Get bearer token from localStorage; an empty value counts as absent
pub fn get_token() -> Option<String> {
    get_local_storage()?
        .get_item(TOKEN_KEY)
        .ok()?
        .filter(|t| !t.is_empty())
}

pub fn clear_token() {
    if let Some(storage) = get_local_storage() {
        let _ = storage.remove_item(TOKEN_KEY);
    }
}
