//! Channel that records every forward and reply.

use crate::relay::{
    domain::{Destination, ForwardReceipt, Submission},
    ports::{ChannelError, ChannelResult, MessageChannel},
};
use async_trait::async_trait;
use std::sync::{Arc, Mutex, MutexGuard};

/// A forward captured by [`RecordingChannel`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForwardedMessage {
    /// Identifier of the original message.
    pub original_id: i64,
    /// Identifier assigned in the destination channel.
    pub forwarded_id: i64,
    /// Destination chat identifier.
    pub destination_chat: i64,
}

#[derive(Debug, Default)]
struct RecordingState {
    next_message_id: i64,
    forwarded: Vec<ForwardedMessage>,
    replies: Vec<(i64, String)>,
    fail_forwards: bool,
    fail_replies: bool,
}

/// Thread-safe channel that assigns sequential destination identifiers.
#[derive(Debug, Clone)]
pub struct RecordingChannel {
    state: Arc<Mutex<RecordingState>>,
}

impl RecordingChannel {
    /// Creates a channel whose first forwarded copy gets identifier 1.
    #[must_use]
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    /// Creates a channel whose first forwarded copy gets `first_id`.
    #[must_use]
    pub fn starting_at(first_id: i64) -> Self {
        let state = RecordingState {
            next_message_id: first_id,
            ..RecordingState::default()
        };
        Self {
            state: Arc::new(Mutex::new(state)),
        }
    }

    /// Makes every subsequent forward fail.
    #[must_use]
    pub fn failing_forwards(self) -> Self {
        self.lock().fail_forwards = true;
        self
    }

    /// Makes every subsequent reply fail.
    #[must_use]
    pub fn failing_replies(self) -> Self {
        self.lock().fail_replies = true;
        self
    }

    /// Returns the forwards recorded so far.
    #[must_use]
    pub fn forwarded(&self) -> Vec<ForwardedMessage> {
        self.lock().forwarded.clone()
    }

    /// Returns the `(chat_id, text)` replies recorded so far.
    #[must_use]
    pub fn replies(&self) -> Vec<(i64, String)> {
        self.lock().replies.clone()
    }

    fn lock(&self) -> MutexGuard<'_, RecordingState> {
        self.state
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl Default for RecordingChannel {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MessageChannel for RecordingChannel {
    async fn forward(
        &self,
        submission: &Submission,
        destination: &Destination,
    ) -> ChannelResult<ForwardReceipt> {
        let mut state = self.lock();
        if state.fail_forwards {
            return Err(ChannelError::Forward {
                message_id: submission.message_id,
                reason: "destination unavailable".to_owned(),
            });
        }
        let forwarded_id = state.next_message_id;
        state.next_message_id = forwarded_id.saturating_add(1);
        state.forwarded.push(ForwardedMessage {
            original_id: submission.message_id,
            forwarded_id,
            destination_chat: destination.chat_id(),
        });
        Ok(ForwardReceipt {
            message_id: forwarded_id,
        })
    }

    async fn reply(&self, chat_id: i64, text: &str) -> ChannelResult<()> {
        let mut state = self.lock();
        if state.fail_replies {
            return Err(ChannelError::Reply {
                chat_id,
                reason: "chat unavailable".to_owned(),
            });
        }
        state.replies.push((chat_id, text.to_owned()));
        Ok(())
    }
}
