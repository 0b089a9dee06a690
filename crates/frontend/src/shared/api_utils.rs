//! API utilities for frontend-backend communication
//!
//! Every call to the REST backend goes through [`ApiClient`]: one place that
//! builds the URL, attaches the bearer token and turns HTTP failures into
//! [`ApiError`].

use contracts::domain::common::{ApiMessage, Paginated};
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::system::auth::storage;

/// Port the backend listens on.
const API_PORT: u16 = 8000;

/// Upper bound on pages followed by [`ApiClient::fetch_all_pages`].
const MAX_PAGES: u32 = 1000;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// No token in the session store; nothing was sent.
    #[error("No auth token found")]
    MissingAuthToken,
    #[error("Failed to send request: {0}")]
    Network(String),
    /// Non-2xx answer; `message` comes from the body when it has one.
    #[error("{message}")]
    Server { status: u16, message: String },
    #[error("Failed to parse response: {0}")]
    Decode(String),
    #[error("Failed to download file: {0}")]
    Download(String),
}

impl ApiError {
    /// The session is missing or was rejected by the backend.
    pub fn is_auth(&self) -> bool {
        matches!(
            self,
            ApiError::MissingAuthToken | ApiError::Server { status: 401, .. }
        )
    }

    /// Build the error of a non-2xx response from its status and raw body.
    pub fn from_response(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<ApiMessage>(body)
            .ok()
            .and_then(|m| m.message)
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| format!("HTTP {}", status));
        ApiError::Server { status, message }
    }
}

/// Get the base URL for API requests
///
/// Constructs the API base URL from the current window location,
/// using [`API_PORT`] for the backend server.
///
/// # Returns
/// - API base URL like "http://localhost:8000"
/// - Empty string if window is not available
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:{}", protocol, hostname, API_PORT)
}

/// Build a full API URL from a path
///
/// # Example
/// ```rust,ignore
/// let url = api_url("/api/customers/7");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Authenticated JSON client. The token is fixed at construction, so a
/// client never reads the session store behind the caller's back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiClient {
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, token: Option<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token,
        }
    }

    /// Client for the backend of the current page, carrying the stored token.
    pub fn from_session() -> Self {
        Self::new(api_base(), storage::get_token())
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// `Authorization` header value.
    pub fn bearer(&self) -> Result<String, ApiError> {
        match self.token.as_deref() {
            Some(token) if !token.is_empty() => Ok(format!("Bearer {}", token)),
            _ => Err(ApiError::MissingAuthToken),
        }
    }

    fn authorized(&self, builder: RequestBuilder) -> Result<RequestBuilder, ApiError> {
        let bearer = self.bearer()?;
        Ok(builder
            .header("Accept", "application/json")
            .header("Authorization", &bearer))
    }

    async fn send(&self, request: Request) -> Result<Response, ApiError> {
        let response = request
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

    async fn send_empty(&self, builder: RequestBuilder) -> Result<Response, ApiError> {
        let request = self
            .authorized(builder)?
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;
        self.send(request).await
    }

    async fn send_json<B: Serialize>(
        &self,
        builder: RequestBuilder,
        body: &B,
    ) -> Result<Response, ApiError> {
        let request = self
            .authorized(builder)?
            .json(body)
            .map_err(|e| ApiError::Network(format!("Failed to serialize request: {}", e)))?;
        self.send(request).await
    }

    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self.send_empty(Request::get(&self.url(path))).await?;
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    pub async fn get_bytes(&self, path: &str) -> Result<Vec<u8>, ApiError> {
        let response = self.send_empty(Request::get(&self.url(path))).await?;
        response
            .binary()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.send_empty(Request::delete(&self.url(path))).await?;
        Ok(())
    }

    pub async fn post<B: Serialize>(&self, path: &str, body: &B) -> Result<(), ApiError> {
        self.send_json(Request::post(&self.url(path)), body).await?;
        Ok(())
    }

    pub async fn delete_json<B: Serialize>(&self, path: &str, body: &B) -> Result<(), ApiError> {
        self.send_json(Request::delete(&self.url(path)), body).await?;
        Ok(())
    }

    /// Collect every page of a paginated listing.
    ///
    /// `extract` pulls the page envelope out of the entity-specific body
    /// (`{ "customers": { "data": [...] } }`).
    pub async fn fetch_all_pages<Body, T>(
        &self,
        path: &str,
        extract: impl Fn(Body) -> Paginated<T>,
    ) -> Result<Vec<T>, ApiError>
    where
        Body: DeserializeOwned,
    {
        let mut rows = Vec::new();
        let mut page = 1;
        loop {
            let body: Body = self.get_json(&format!("{}?page={}", path, page)).await?;
            let chunk = extract(body);
            let next = next_page(page, &chunk);
            rows.extend(chunk.data);
            match next {
                Some(n) => page = n,
                None => break,
            }
        }
        Ok(rows)
    }
}

/// Page to request after `requested`, or `None` when the listing is done.
fn next_page<T>(requested: u32, chunk: &Paginated<T>) -> Option<u32> {
    if requested >= MAX_PAGES
        || chunk.data.is_empty()
        || !chunk.has_more()
        || requested >= chunk.last_page
    {
        None
    } else {
        Some(requested + 1)
    }
}
