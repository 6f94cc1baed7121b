//! Messaging channel port used by the relay.

use crate::relay::domain::{Destination, ForwardReceipt, Submission};
use async_trait::async_trait;
use thiserror::Error;

/// Result type for messaging channel operations.
pub type ChannelResult<T> = Result<T, ChannelError>;

/// Messaging transport contract.
///
/// Delivery and retry semantics belong to the implementation.
#[async_trait]
pub trait MessageChannel: Send + Sync {
    /// Forwards a submission to the destination channel.
    ///
    /// # Errors
    ///
    /// Returns [`ChannelError::Forward`] when the transport rejects the
    /// message.
    async fn forward(
        &self,
        submission: &Submission,
        destination: &Destination,
    ) -> ChannelResult<ForwardReceipt>;

    /// Sends a text reply into a chat.
    ///
    /// # Errors
    ///
    /// Returns [`ChannelError::Reply`] when the transport rejects the reply.
    async fn reply(&self, chat_id: i64, text: &str) -> ChannelResult<()>;
}

/// Errors returned by messaging channel implementations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ChannelError {
    /// The submission could not be forwarded.
    #[error("failed to forward message {message_id}: {reason}")]
    Forward {
        /// Identifier of the message that was not forwarded.
        message_id: i64,
        /// Transport-supplied reason.
        reason: String,
    },

    /// A reply could not be delivered.
    #[error("failed to reply in chat {chat_id}: {reason}")]
    Reply {
        /// Chat the reply was addressed to.
        chat_id: i64,
        /// Transport-supplied reason.
        reason: String,
    },
}
