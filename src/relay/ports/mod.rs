//! Port contracts for the messaging transport.

pub mod channel;

pub use channel::{ChannelError, ChannelResult, MessageChannel};
