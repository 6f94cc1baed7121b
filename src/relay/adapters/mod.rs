//! Adapter implementations for the messaging channel port.

pub mod logging;
pub mod memory;

pub use logging::LoggingChannel;
pub use memory::RecordingChannel;
