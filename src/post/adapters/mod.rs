//! Adapter implementations for post persistence.

pub mod memory;
pub mod postgres;
