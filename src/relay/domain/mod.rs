//! Domain model for relayed chat submissions.

mod destination;
mod submission;

pub use destination::Destination;
pub use submission::{Command, ForwardReceipt, Sender, Submission};
