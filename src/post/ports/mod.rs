//! Port contracts for post persistence.
//!
//! Ports define infrastructure-agnostic interfaces used by the ingestion
//! and query services.

pub mod repository;

pub use repository::{PostStore, PostStoreError, PostStoreResult};
