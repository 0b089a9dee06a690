//! Common types shared by all entity contracts

pub mod lenient;
pub mod paginated;
pub mod record_id;

// Re-exports
pub use paginated::{ApiMessage, BulkDeleteRequest, Paginated};
pub use record_id::RecordId;
