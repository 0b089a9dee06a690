use serde::{Deserialize, Serialize};

/// One page of a paginated listing, as produced by the backend paginator.
///
/// Only `data` is guaranteed; the counters default so that a plain
/// `{ "data": [...] }` body reads as a single complete page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paginated<T> {
    pub data: Vec<T>,
    #[serde(default = "first_page")]
    pub current_page: u32,
    #[serde(default = "first_page")]
    pub last_page: u32,
    #[serde(default)]
    pub per_page: u32,
    #[serde(default)]
    pub total: u64,
}

fn first_page() -> u32 {
    1
}

impl<T> Default for Paginated<T> {
    fn default() -> Self {
        Self {
            data: Vec::new(),
            current_page: 1,
            last_page: 1,
            per_page: 0,
            total: 0,
        }
    }
}

impl<T> Paginated<T> {
    /// Pages remain after `current_page`.
    pub fn has_more(&self) -> bool {
        self.current_page < self.last_page
    }
}

/// Body of `DELETE /api/<entity>/bulk-delete`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulkDeleteRequest {
    pub ids: Vec<String>,
}

/// Generic acknowledgement / error body returned by the backend
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiMessage {
    #[serde(default)]
    pub message: Option<String>,
}
