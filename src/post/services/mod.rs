//! Application services for post ingestion and retrieval.

mod error;
mod ingestion;
mod query;

pub use error::{InvalidArgument, PostErrorKind, PostServiceError, PostServiceResult};
pub use ingestion::{CreatePostRequest, PostIngestionService};
pub use query::PostQueryService;
