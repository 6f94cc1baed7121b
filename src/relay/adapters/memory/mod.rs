//! In-memory messaging channel for tests.

mod recording;

pub use recording::{ForwardedMessage, RecordingChannel};
