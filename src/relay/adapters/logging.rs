//! Messaging channel that only writes to the log.
//!
//! Used by the `postrelay` binary when submissions arrive on stdin rather
//! than from a live chat transport.

use crate::relay::{
    domain::{Destination, ForwardReceipt, Submission},
    ports::{ChannelResult, MessageChannel},
};
use async_trait::async_trait;
use std::sync::{
    Arc,
    atomic::{AtomicI64, Ordering},
};
use tracing::info;

/// Channel that logs forwards and replies instead of sending them.
///
/// Each forwarded copy gets the next identifier of a sequence shared by all
/// clones, so copies stay unique in the destination whatever chat they came
/// from.
#[derive(Debug, Clone)]
pub struct LoggingChannel {
    next_message_id: Arc<AtomicI64>,
}

impl LoggingChannel {
    /// Creates a logging channel whose first forwarded copy gets identifier 1.
    #[must_use]
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    /// Creates a logging channel whose first forwarded copy gets `first_id`.
    #[must_use]
    pub fn starting_at(first_id: i64) -> Self {
        Self {
            next_message_id: Arc::new(AtomicI64::new(first_id)),
        }
    }
}

impl Default for LoggingChannel {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MessageChannel for LoggingChannel {
    async fn forward(
        &self,
        submission: &Submission,
        destination: &Destination,
    ) -> ChannelResult<ForwardReceipt> {
        let forwarded_id = self.next_message_id.fetch_add(1, Ordering::Relaxed);
        info!(
            message_id = submission.message_id,
            forwarded_id,
            from_chat = submission.chat_id,
            to_chat = destination.chat_id(),
            kind = %submission.kind,
            "forward"
        );
        Ok(ForwardReceipt {
            message_id: forwarded_id,
        })
    }

    async fn reply(&self, chat_id: i64, text: &str) -> ChannelResult<()> {
        info!(chat_id, text, "reply");
        Ok(())
    }
}
