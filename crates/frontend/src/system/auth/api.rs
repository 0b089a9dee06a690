use contracts::system::auth::{LoginRequest, LoginResponse, RegisterRequest};
use gloo_net::http::{Request, Response};

use crate::shared::api_utils::{api_url, ApiClient, ApiError};

async fn post_credentials<B: serde::Serialize>(path: &str, body: &B) -> Result<Response, ApiError> {
    let response = Request::post(&api_url(path))
        .header("Accept", "application/json")
        .json(body)
        .map_err(|e| ApiError::Network(format!("Failed to serialize request: {}", e)))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !response.ok() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(ApiError::from_response(status, &body));
    }
    Ok(response)
}

fn require_token(login: LoginResponse) -> Result<LoginResponse, ApiError> {
    if login.token.trim().is_empty() {
        return Err(ApiError::Decode("Response carries no token".to_string()));
    }
    Ok(login)
}

async fn read_login(response: Response) -> Result<LoginResponse, ApiError> {
    let login = response
        .json::<LoginResponse>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))?;
    require_token(login)
}

/// Login with email and password
pub async fn login(email: String, password: String) -> Result<LoginResponse, ApiError> {
    let response = post_credentials("/api/login", &LoginRequest { email, password }).await?;
    read_login(response).await
}

/// Create an account; the backend signs the new user in right away
pub async fn register(
    name: String,
    email: String,
    password: String,
) -> Result<LoginResponse, ApiError> {
    let request = RegisterRequest {
        name,
        email,
        password,
    };
    let response = post_credentials("/api/register", &request).await?;
    read_login(response).await
}

/// Revoke the token on the backend
pub async fn logout(client: &ApiClient) -> Result<(), ApiError> {
    client.post("/api/logout", &serde_json::json!({})).await
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(token: &str) -> LoginResponse {
        LoginResponse {
            token: token.to_string(),
            user: None,
            message: None,
        }
    }

    #[test]
    fn test_blank_token_is_rejected() {
        assert!(matches!(require_token(response("  ")), Err(ApiError::Decode(_))));
        assert_eq!(require_token(response("abc")).unwrap().token, "abc");
    }
}
