//! Postrelay: chat submission relay with post persistence.
//!
//! Submissions arriving from a messaging channel are forwarded to a
//! destination channel and recorded as posts. Posts can then be listed in
//! bulk or per submitting user.
//!
//! # Architecture
//!
//! Postrelay follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (database, messaging)
//!
//! # Modules
//!
//! - [`post`]: Post storage, ingestion and queries
//! - [`relay`]: Messaging relay built on post ingestion
//! - [`config`]: Environment-driven process configuration
//! - [`telemetry`]: Tracing subscriber setup

pub mod config;
pub mod post;
pub mod relay;
pub mod telemetry;
