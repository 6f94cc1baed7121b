//! Messaging relay for postrelay.
//!
//! The relay receives chat submissions, forwards them to a destination
//! channel, records them as posts through the ingestion service and answers
//! the submitter. The transport itself sits behind the
//! [`ports::MessageChannel`] port.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
