//! Shortlist client: typed REST access to the company/collection backend and
//! the command bridge that runs requests off the UI thread.
mod api;
mod error;
mod handle;
mod types;

pub use api::{ApiSettings, CompanyApi, RestApi};
pub use error::{ApiError, ApiFailure};
pub use handle::{ApiCommand, ApiEvent, ApiHandle, BulkMode};
pub use types::{
    BulkOutcome, CollectionPage, CollectionSummary, Company, CompanyBatch, CompanyId, RemoveAck,
};
