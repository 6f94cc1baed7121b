//! Post ingestion and retrieval for postrelay.
//!
//! Submitted posts are stored once under a caller-chosen identifier and can
//! be read back in bulk or scoped to their submitting user. The module
//! follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]
//! - Caller-facing outcome mapping in [`api`]

pub mod adapters;
pub mod api;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
